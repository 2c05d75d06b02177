#[path = "./qresult.rs"]
pub mod proto;

pub mod cells_batch_ext;
pub mod query_result_ext;

pub use proto::cells_batch::CellType;

/// Default separator between entries of `CellsBatch::string_cells`.
pub const STRING_CELL_DELIMITER: u8 = 0;

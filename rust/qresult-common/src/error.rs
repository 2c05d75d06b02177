use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// Returns `true` if the error reports wire data whose structure does not hold
    /// together (missing batches, partial rows, value array underflow).
    ///
    /// An unrecognized cell type is not malformed data: it is an encoding this
    /// decoder does not support.
    pub fn is_malformed_data(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::TruncatedSequence { .. }
                | ErrorKind::TruncatedRow { .. }
                | ErrorKind::OutOfBoundsRead { .. }
        )
    }

    pub fn truncated_sequence(batch_count: usize) -> Error {
        ErrorKind::TruncatedSequence { batch_count }.into()
    }

    pub fn truncated_row(row: u64, column: impl Into<String>, batch_index: usize) -> Error {
        ErrorKind::TruncatedRow {
            row,
            column: column.into(),
            batch_index,
        }
        .into()
    }

    pub fn out_of_bounds_read(
        cell_type: &'static str,
        column: impl Into<String>,
        batch_index: usize,
        cell_index: usize,
    ) -> Error {
        ErrorKind::OutOfBoundsRead {
            cell_type,
            column: column.into(),
            batch_index,
            cell_index,
        }
        .into()
    }

    pub fn unrecognized_cell_type(
        tag: i32,
        column: impl Into<String>,
        batch_index: usize,
        cell_index: usize,
    ) -> Error {
        ErrorKind::UnrecognizedCellType {
            tag,
            column: column.into(),
            batch_index,
            cell_index,
        }
        .into()
    }

    pub fn query(message: impl Into<String>) -> Error {
        ErrorKind::Query {
            message: message.into(),
        }
        .into()
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        ErrorKind::InvalidFormat {
            element: element.into(),
            message: message.into(),
        }
        .into()
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        ErrorKind::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
        .into()
    }

    pub fn arrow<E>(context: impl Into<String>, source: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ErrorKind::Arrow {
            context: context.into(),
            source: Box::new(source),
        }
        .into()
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error(
        "batch sequence ended after {batch_count} batch(es) without a terminal batch"
    )]
    TruncatedSequence { batch_count: usize },

    #[error(
        "cell stream ended in the middle of row {row} at column '{column}' (batch {batch_index})"
    )]
    TruncatedRow {
        row: u64,
        column: String,
        batch_index: usize,
    },

    #[error(
        "no {cell_type} value left for column '{column}' (batch {batch_index}, cell {cell_index})"
    )]
    OutOfBoundsRead {
        cell_type: &'static str,
        column: String,
        batch_index: usize,
        cell_index: usize,
    },

    #[error(
        "unrecognized cell type {tag} for column '{column}' (batch {batch_index}, cell {cell_index})"
    )]
    UnrecognizedCellType {
        tag: i32,
        column: String,
        batch_index: usize,
        cell_index: usize,
    },

    #[error("query failed: {message}")]
    Query { message: String },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    #[error("failed to decode protobuf message")]
    Decode { source: prost::DecodeError },

    #[error("Arrow error: {context}")]
    Arrow {
        context: String,
        source: StdErrorBoxed,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<prost::DecodeError> for Error {
    fn from(e: prost::DecodeError) -> Self {
        ErrorKind::Decode { source: e }.into()
    }
}

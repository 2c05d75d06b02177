use qresult_common::error::ErrorKind;
use qresult_format::{CellType, CellsBatch};
use qresult_testkit::{
    BatchBuilder,
    data_gen::{random_batch, random_boundaries, split_at_cells, split_evenly},
};

use crate::{
    decoder::RowDecoder,
    options::{DecodeOptions, Utf8Policy},
    row::Row,
    schema::ColumnSchema,
    value::CellValue,
};

fn foo_schema() -> ColumnSchema {
    ColumnSchema::try_new(["foo_id", "foo_num"]).unwrap()
}

fn string_varint_batch(strings: &[&str], ints: &[i64], last: bool) -> CellsBatch {
    let mut builder = BatchBuilder::new();
    for _ in 0..strings.len() {
        builder = builder.tags([CellType::String, CellType::Varint]);
    }
    builder = builder
        .joined_strings(strings)
        .varint_values(ints.iter().copied());
    if last {
        builder = builder.last();
    }
    builder.build()
}

fn decode_all(schema: ColumnSchema, batches: &[CellsBatch]) -> Vec<Row> {
    RowDecoder::new(schema, batches).collect_rows().unwrap()
}

#[test]
fn test_one_batch() {
    let batch = string_varint_batch(&["bar1", "bar2"], &[100, 200], true);
    let rows = decode_all(foo_schema(), &[batch]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("foo_id"), Some(&CellValue::from("bar1")));
    assert_eq!(rows[0].get("foo_num"), Some(&CellValue::Int(100)));
    assert_eq!(rows[1].get("foo_id"), Some(&CellValue::from("bar2")));
    assert_eq!(rows[1].get("foo_num"), Some(&CellValue::Int(200)));
}

#[test]
fn test_many_batches() {
    let batches = [
        string_varint_batch(&["bar1", "bar2"], &[100, 200], false),
        string_varint_batch(&["bar3", "bar4"], &[300, 400], true),
    ];
    let mut decoder = RowDecoder::new(foo_schema(), &batches);
    for (name, num) in [("bar1", 100), ("bar2", 200), ("bar3", 300), ("bar4", 400)] {
        let row = decoder.next().unwrap().unwrap();
        assert_eq!(row.get("foo_id").and_then(CellValue::as_str), Some(name));
        assert_eq!(row.get("foo_num").and_then(CellValue::as_i64), Some(num));
    }
    assert!(decoder.next().is_none());
    assert_eq!(decoder.rows_decoded(), 4);
}

#[test]
fn test_all_cell_types() {
    let schema = ColumnSchema::try_new(["i", "f", "s", "b", "n"]).unwrap();
    let batch = BatchBuilder::new()
        .varint(-7)
        .float64(2.25)
        .string("x")
        .blob(b"\x00\x01")
        .null()
        .last()
        .build();
    let rows = decode_all(schema, &[batch]);
    assert_eq!(
        rows[0].values(),
        &[
            CellValue::Int(-7),
            CellValue::Float(2.25),
            CellValue::from("x"),
            CellValue::Bytes(vec![0, 1]),
            CellValue::Null,
        ]
    );
}

#[test]
fn test_terminal_empty_batch_yields_no_rows() {
    let batch = BatchBuilder::new().last().build();
    assert!(decode_all(foo_schema(), &[batch]).is_empty());
}

#[test]
fn test_empty_batch_with_no_columns() {
    let batch = BatchBuilder::new().last().build();
    let mut decoder = RowDecoder::new(ColumnSchema::empty(), [batch]);
    assert!(decoder.next().is_none());
    assert_eq!(decoder.rows_decoded(), 0);
}

#[test]
fn test_no_columns_walks_batch_chain() {
    let batches = [CellsBatch::default(), BatchBuilder::new().last().build()];
    assert!(decode_all(ColumnSchema::empty(), &batches).is_empty());
}

#[test]
fn test_no_columns_with_cells() {
    let batch = BatchBuilder::new().varint(1).last().build();
    let mut decoder = RowDecoder::new(ColumnSchema::empty(), [batch]);
    let err = decoder.next().unwrap().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TruncatedRow { row: 0, .. }));
}

#[test]
fn test_invalid_batch() {
    // Not marked as the last batch, and no batch follows.
    let mut decoder = RowDecoder::new(ColumnSchema::empty(), [CellsBatch::default()]);
    let err = decoder.next().unwrap().unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::TruncatedSequence { batch_count: 1 }
    ));
    assert!(err.is_malformed_data());
    assert!(decoder.next().is_none());
}

#[test]
fn test_no_batches() {
    let batches: Vec<CellsBatch> = Vec::new();
    let mut decoder = RowDecoder::new(foo_schema(), &batches);
    let err = decoder.next().unwrap().unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::TruncatedSequence { batch_count: 0 }
    ));
}

#[test]
fn test_truncated_sequence_at_batch_boundary() {
    let batch = string_varint_batch(&["bar1", "bar2"], &[100, 200], false);
    let mut decoder = RowDecoder::new(foo_schema(), [batch]);
    // Both rows of the non-terminal batch decode before the boundary is crossed.
    for expected in [100, 200] {
        let row = decoder.next().unwrap().unwrap();
        assert_eq!(row.get_at(1), Some(&CellValue::Int(expected)));
    }
    let err = decoder.next().unwrap().unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::TruncatedSequence { batch_count: 1 }
    ));
    assert!(decoder.next().is_none());
}

#[test]
fn test_incorrect_cells_batch() {
    // Two string cells are declared, but the blob is empty: it holds a single
    // empty string, so the second string cell has nothing to read.
    let batch = BatchBuilder::new()
        .tags([
            CellType::String,
            CellType::Varint,
            CellType::String,
            CellType::Varint,
        ])
        .varint_values([100, 200])
        .last()
        .build();
    let mut decoder = RowDecoder::new(foo_schema(), [batch]);
    let row = decoder.next().unwrap().unwrap();
    assert_eq!(row.values(), &[CellValue::from(""), CellValue::Int(100)]);
    let err = decoder.next().unwrap().unwrap_err();
    match err.kind() {
        ErrorKind::OutOfBoundsRead {
            cell_type,
            column,
            batch_index,
            cell_index,
        } => {
            assert_eq!(*cell_type, "string");
            assert_eq!(column, "foo_id");
            assert_eq!(*batch_index, 0);
            assert_eq!(*cell_index, 2);
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert!(decoder.next().is_none());
}

#[test]
fn test_empty_string_in_last_position() {
    let batch = string_varint_batch(&["bar1", ""], &[100, 200], true);
    let rows = decode_all(foo_schema(), &[batch]);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].values(), &[CellValue::from("bar1"), CellValue::Int(100)]);
    assert_eq!(rows[1].values(), &[CellValue::from(""), CellValue::Int(200)]);
}

#[test]
fn test_single_empty_string() {
    let batch = BatchBuilder::new()
        .tags([CellType::String])
        .joined_strings(&[""])
        .last()
        .build();
    let schema = ColumnSchema::try_new(["s"]).unwrap();
    let rows = decode_all(schema, &[batch]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("s").and_then(CellValue::as_str), Some(""));
}

#[test]
fn test_empty_strings_across_batches() {
    let batches = [
        string_varint_batch(&["", "bar2"], &[1, 2], false),
        string_varint_batch(&[""], &[3], false),
        string_varint_batch(&["bar4", ""], &[4, 5], true),
    ];
    let names: Vec<_> = decode_all(foo_schema(), &batches)
        .iter()
        .map(|row| row.get("foo_id").and_then(CellValue::as_str).unwrap().to_string())
        .collect();
    assert_eq!(names, ["", "bar2", "", "bar4", ""]);
}

#[test]
fn test_float_and_blob_underflow() {
    let schema = ColumnSchema::try_new(["f"]).unwrap();
    let batch = BatchBuilder::new()
        .tags([CellType::Float64; 3])
        .float64_values([0.5, 1.5])
        .last()
        .build();
    let results: Vec<_> = RowDecoder::new(schema.clone(), [batch]).collect();
    assert_eq!(results.len(), 3);
    assert_eq!(results[1].as_ref().unwrap().get_at(0), Some(&CellValue::Float(1.5)));
    assert!(matches!(
        results[2].as_ref().unwrap_err().kind(),
        ErrorKind::OutOfBoundsRead {
            cell_type: "float64",
            cell_index: 2,
            ..
        }
    ));

    let batch = BatchBuilder::new()
        .blob(b"x")
        .tags([CellType::Blob])
        .last()
        .build();
    let results: Vec<_> = RowDecoder::new(schema, [batch]).collect();
    assert_eq!(results.len(), 2);
    assert!(matches!(
        results[1].as_ref().unwrap_err().kind(),
        ErrorKind::OutOfBoundsRead {
            cell_type: "blob",
            column,
            cell_index: 1,
            ..
        } if column == "f"
    ));
}

#[test]
fn test_out_of_bounds_keeps_earlier_rows() {
    // Three rows are declared; the varint array only covers two of them.
    let batch = BatchBuilder::new()
        .tags([CellType::Varint, CellType::Null].repeat(3))
        .varint_values([1, 2])
        .last()
        .build();
    let schema = ColumnSchema::try_new(["a", "b"]).unwrap();
    let results: Vec<_> = RowDecoder::new(schema, [batch]).collect();
    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0].as_ref().unwrap().values(),
        &[CellValue::Int(1), CellValue::Null]
    );
    assert_eq!(
        results[1].as_ref().unwrap().values(),
        &[CellValue::Int(2), CellValue::Null]
    );
    let err = results[2].as_ref().unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::OutOfBoundsRead {
            cell_type: "varint",
            cell_index: 4,
            ..
        }
    ));
}

#[test]
fn test_incorrect_columns_batch() {
    // Two cells cannot fill a row of four columns.
    let batch = BatchBuilder::new().varint(100).varint(200).last().build();
    let schema = ColumnSchema::try_new(["foo_id", "foo_num", "foo_dur", "foo_ms"]).unwrap();
    let mut decoder = RowDecoder::new(schema, [batch]);
    let err = decoder.next().unwrap().unwrap_err();
    match err.kind() {
        ErrorKind::TruncatedRow { row, column, .. } => {
            assert_eq!(*row, 0);
            assert_eq!(column, "foo_dur");
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
}

#[test]
fn test_truncated_row_after_complete_rows() {
    let batch = BatchBuilder::new()
        .varint(1)
        .varint(2)
        .varint(3)
        .last()
        .build();
    let schema = ColumnSchema::try_new(["a", "b"]).unwrap();
    let mut decoder = RowDecoder::new(schema, [batch]);
    assert!(decoder.next().unwrap().is_ok());
    let err = decoder.next().unwrap().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::TruncatedRow { row: 1, .. }));
}

#[test]
fn test_invalid_cell_type() {
    let batch = BatchBuilder::new()
        .tags([CellType::Invalid, CellType::Varint])
        .varint_values([100, 200])
        .last()
        .build();
    let mut decoder = RowDecoder::new(foo_schema(), [batch]);
    let err = decoder.next().unwrap().unwrap_err();
    match err.kind() {
        ErrorKind::UnrecognizedCellType {
            tag,
            column,
            cell_index,
            ..
        } => {
            assert_eq!(*tag, CellType::Invalid as i32);
            assert_eq!(column, "foo_id");
            assert_eq!(*cell_index, 0);
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert!(!err.is_malformed_data());
    assert_eq!(decoder.rows_decoded(), 0);
}

#[test]
fn test_unknown_cell_type_in_second_batch() {
    let batches = [
        BatchBuilder::new().varint(1).null().build(),
        BatchBuilder::new().varint(2).raw_tag(17).last().build(),
    ];
    let schema = ColumnSchema::try_new(["a", "b"]).unwrap();
    let results: Vec<_> = RowDecoder::new(schema, &batches).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1].as_ref().unwrap_err().kind(),
        ErrorKind::UnrecognizedCellType {
            tag: 17,
            batch_index: 1,
            cell_index: 1,
            ..
        }
    ));
}

#[test]
fn test_row_spanning_batches() {
    let batches = [
        BatchBuilder::new().string("a").build(),
        BatchBuilder::new().build(),
        BatchBuilder::new().varint(1).string("b").build(),
        BatchBuilder::new().varint(2).last().build(),
    ];
    let rows = decode_all(foo_schema(), &batches);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].values(), &[CellValue::from("a"), CellValue::Int(1)]);
    assert_eq!(rows[1].values(), &[CellValue::from("b"), CellValue::Int(2)]);
}

#[test]
fn test_batches_after_terminal_are_ignored() {
    let batches = [
        string_varint_batch(&["bar1"], &[100], true),
        BatchBuilder::new().raw_tag(99).build(),
    ];
    let rows = decode_all(foo_schema(), &batches);
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_chaining_matches_single_batch() {
    for seed in 0..20 {
        let column_count = 1 + (seed as usize % 4);
        let whole = random_batch(seed, column_count, 25);
        let schema = ColumnSchema::try_new((0..column_count).map(|i| format!("c{i}"))).unwrap();
        let expected = decode_all(schema.clone(), std::slice::from_ref(&whole));
        assert_eq!(expected.len(), 25);

        let boundaries = random_boundaries(seed + 1000, whole.cells.len(), 6);
        let chained = decode_all(schema.clone(), &split_at_cells(&whole, &boundaries));
        assert_eq!(chained, expected, "seed {seed}, boundaries {boundaries:?}");

        let single_cells = decode_all(schema, &split_evenly(&whole, 1));
        assert_eq!(single_cells, expected, "seed {seed}");
    }
}

#[test]
fn test_multiple_passes_over_borrowed_batches() {
    let whole = random_batch(42, 3, 10);
    let batches = split_evenly(&whole, 7);
    let schema = ColumnSchema::try_new(["x", "y", "z"]).unwrap();
    let first = decode_all(schema.clone(), &batches);
    let second = decode_all(schema, &batches);
    assert_eq!(first.len(), 10);
    assert_eq!(first, second);
}

#[test]
fn test_rows_share_schema() {
    let batch = string_varint_batch(&["bar1", "bar2"], &[100, 200], true);
    let schema = foo_schema();
    let rows = decode_all(schema.clone(), &[batch]);
    assert!(rows.iter().all(|row| row.schema() == &schema));
}

#[test]
fn test_custom_string_delimiter() {
    let batch = BatchBuilder::new()
        .tags([CellType::String, CellType::String])
        .raw_string_cells(b"a,b\nc")
        .last()
        .build();
    let schema = ColumnSchema::try_new(["s1", "s2"]).unwrap();
    let options = DecodeOptions::new().with_string_delimiter(b'\n');
    let rows = RowDecoder::new(schema, [batch])
        .with_options(options)
        .collect_rows()
        .unwrap();
    assert_eq!(rows[0].values(), &[CellValue::from("a,b"), CellValue::from("c")]);
}

#[test]
fn test_utf8_policy() {
    let batch = BatchBuilder::new()
        .tags([CellType::String])
        .raw_string_cells(b"ok\0bad\xff")
        .tags([CellType::String])
        .last()
        .build();
    let schema = ColumnSchema::try_new(["s"]).unwrap();

    let lossy = decode_all(schema.clone(), std::slice::from_ref(&batch));
    assert_eq!(lossy[1].get_at(0), Some(&CellValue::from("bad\u{fffd}")));

    let strict = DecodeOptions::new().with_utf8_policy(Utf8Policy::Strict);
    let results: Vec<_> = RowDecoder::new(schema, [batch])
        .with_options(strict)
        .collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1].as_ref().unwrap_err().kind(),
        ErrorKind::InvalidFormat { .. }
    ));
}

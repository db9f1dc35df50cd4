//! On-disk round trips and error reporting for matrix files

use std::fs;

use sparsemat::{
    Error, MatrixError, MatrixFile, Operation, ParseConfig, ParseErrorKind, Shape, SparseMatrix,
};
use tempfile::TempDir;

fn example_a() -> SparseMatrix {
    SparseMatrix::from_entries(2, 2, [(0, 0, 1), (1, 1, 2)])
}

fn example_b() -> SparseMatrix {
    SparseMatrix::from_entries(2, 2, [(0, 0, 3), (0, 1, 4)])
}

#[test]
fn test_write_then_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.txt");

    let matrix = SparseMatrix::from_entries(4, 5, [(3, 4, 11i64), (0, 2, -6), (1, 1, 1)]);
    MatrixFile::write_matrix(&path, &matrix).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "rows=4\ncols=5\n(0, 2, -6)\n(1, 1, 1)\n(3, 4, 11)\n"
    );

    let decoded: SparseMatrix = MatrixFile::read_matrix(&path).unwrap();
    assert_eq!(decoded, matrix);
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix.txt");
    fs::write(&path, "stale contents that are much longer than the new file\n").unwrap();

    let matrix: SparseMatrix<i32> = SparseMatrix::new(1, 1);
    MatrixFile::write_matrix(&path, &matrix).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "rows=1\ncols=1\n");
}

#[test]
fn test_read_arithmetic_write() {
    let dir = TempDir::new().unwrap();
    let a_path = dir.path().join("a.txt");
    let b_path = dir.path().join("b.txt");
    fs::write(&a_path, "rows=2\ncols=2\n(0, 0, 1)\n\n(1, 1, 2)\n").unwrap();
    fs::write(&b_path, "rows=2\ncols=2\n(0, 1, 4)\n(0, 0, 3)\n").unwrap();

    let a: SparseMatrix = MatrixFile::read_matrix(&a_path).unwrap();
    let b: SparseMatrix = MatrixFile::read_matrix(&b_path).unwrap();
    assert_eq!(a, example_a());
    assert_eq!(b, example_b());

    let sum_path = dir.path().join("sum.txt");
    let difference_path = dir.path().join("difference.txt");
    MatrixFile::write_matrix(&sum_path, &a.addition(&b).unwrap()).unwrap();
    MatrixFile::write_matrix(&difference_path, &a.subtraction(&b).unwrap()).unwrap();

    assert_eq!(
        fs::read_to_string(&sum_path).unwrap(),
        "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)\n"
    );
    assert_eq!(
        fs::read_to_string(&difference_path).unwrap(),
        "rows=2\ncols=2\n(0, 0, -2)\n(0, 1, -4)\n(1, 1, 2)\n"
    );
}

#[test]
fn test_malformed_line_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "rows=3\ncols=3\n(1,2)\n").unwrap();

    let err = MatrixFile::read_matrix::<i64, _>(&path).unwrap_err();
    match &err {
        Error::Format { path: reported, source } => {
            assert_eq!(reported, &path);
            assert_eq!(source.line, 3);
            assert_eq!(source.kind, ParseErrorKind::WrongArity { found: 2 });
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let message = err.to_string();
    assert!(message.contains(&path.display().to_string()));
    assert!(message.contains("3 comma-separated values"));
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn test_malformed_header_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("header.txt");
    fs::write(&path, "rows: 3\ncols=3\n").unwrap();

    let err = MatrixFile::read_matrix::<i64, _>(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::Format {
            ref source,
            ..
        } if source.kind == ParseErrorKind::MalformedHeader { key: "rows" }
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.txt");

    let err = MatrixFile::read_matrix::<i64, _>(&path).unwrap_err();
    match err {
        Error::Io { path: reported, source } => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_write_into_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    let err = MatrixFile::write_matrix(&path, &example_a()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert_eq!(err.path(), Some(path.as_path()));
}

#[test]
fn test_bounds_checked_read() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("oob.txt");
    fs::write(&path, "rows=2\ncols=2\n(0, 0, 1)\n(2, 0, 5)\n").unwrap();

    let lenient: SparseMatrix = MatrixFile::read_matrix(&path).unwrap();
    assert_eq!(lenient.get(2, 0), 5);

    let strict = ParseConfig::default().with_bounds_check(true);
    let err = MatrixFile::read_matrix_with_config::<i64, _>(&path, strict).unwrap_err();
    match err {
        Error::Format { source, .. } => {
            assert_eq!(source.line, 4);
            assert_eq!(
                source.kind,
                ParseErrorKind::CoordinateOutOfBounds {
                    row: 2,
                    col: 0,
                    shape: Shape::new(2, 2),
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_negative_coordinates_survive_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("negative.txt");
    let output = dir.path().join("copy.txt");
    fs::write(&input, "rows=2\ncols=2\n(0, -4, 8)\n(-1, 0, 5)\n").unwrap();

    let matrix: SparseMatrix = MatrixFile::read_matrix(&input).unwrap();
    assert_eq!(matrix.get(-1, 0), 5);
    assert_eq!(matrix.get(0, -4), 8);

    MatrixFile::write_matrix(&output, &matrix).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "rows=2\ncols=2\n(-1, 0, 5)\n(0, -4, 8)\n"
    );
}

#[test]
fn test_value_out_of_element_range() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wide.txt");
    fs::write(&path, "rows=1\ncols=1\n(0, 0, 70000)\n").unwrap();

    assert!(MatrixFile::read_matrix::<i16, _>(&path).is_err());
    let wide: SparseMatrix<i32> = MatrixFile::open(&path).read().unwrap();
    assert_eq!(wide.get(0, 0), 70000);
}

#[test]
fn test_dimension_mismatch_converts() {
    fn add_files(a: &SparseMatrix, b: &SparseMatrix) -> sparsemat::Result<SparseMatrix> {
        Ok(a.addition(b)?)
    }

    let big: SparseMatrix = SparseMatrix::new(3, 3);
    let err = add_files(&example_a(), &big).unwrap_err();
    assert!(matches!(
        err,
        Error::Matrix(MatrixError::DimensionMismatch {
            operation: Operation::Addition,
            ..
        })
    ));
    assert_eq!(err.path(), None);
    assert_eq!(
        err.to_string(),
        "Matrix dimensions must match for addition: 2x2 != 3x3"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let file = MatrixFile::open(dir.path().join("matrix.json"));

    let matrix = SparseMatrix::from_entries(3, 3, [(2, 2, 9i64), (0, 1, -3)]);
    file.write_json(&matrix).unwrap();

    let decoded: SparseMatrix = file.read_json().unwrap();
    assert_eq!(decoded, matrix);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = MatrixFile::open(&path).read_json::<i64>().unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
    assert_eq!(err.path(), Some(path.as_path()));
}

//! File I/O for matrix text files
//!
//! This module reads and writes the `rows=`/`cols=` text format. Each
//! call is a single blocking open-read-close or open-write-flush-close;
//! callers never observe a partially decoded matrix.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use sparsemat_core::{parse_matrix, MatrixElement, ParseConfig, SparseMatrix};
use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Path reported in errors raised by [`read_from`] and [`write_to`]
pub const STREAM_PATH: &str = "<stream>";

/// File handle for matrix text files
#[derive(Debug, Clone)]
pub struct MatrixFile {
    pub path: PathBuf,
    pub config: ParseConfig,
}

impl MatrixFile {
    /// Refer to a matrix file; nothing is opened until read or write
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config: ParseConfig::default(),
        }
    }

    /// Replace the parse configuration used by [`read`](Self::read)
    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    /// Read and decode the whole file
    pub fn read<T: MatrixElement>(&self) -> Result<SparseMatrix<T>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let matrix = parse_matrix::<T>(&text, &self.config)
            .map_err(|e| Error::format(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            shape = %matrix.shape(),
            nnz = matrix.nnz(),
            data_type = %T::data_type(),
            "read matrix"
        );
        Ok(matrix)
    }

    /// Encode the matrix and replace the file's contents
    pub fn write<T: MatrixElement>(&self, matrix: &SparseMatrix<T>) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{matrix}").map_err(|e| Error::io(&self.path, e))?;
        writer.flush().map_err(|e| Error::io(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            shape = %matrix.shape(),
            nnz = matrix.nnz(),
            "wrote matrix"
        );
        Ok(())
    }

    /// Read a matrix file with the default configuration
    pub fn read_matrix<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
        Self::open(path).read()
    }

    /// Read a matrix file with an explicit configuration
    pub fn read_matrix_with_config<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        config: ParseConfig,
    ) -> Result<SparseMatrix<T>> {
        Self::open(path).with_config(config).read()
    }

    /// Write a matrix file
    pub fn write_matrix<T: MatrixElement, P: AsRef<Path>>(
        path: P,
        matrix: &SparseMatrix<T>,
    ) -> Result<()> {
        Self::open(path).write(matrix)
    }
}

/// Decode a matrix from any reader
///
/// The reader is drained to the end before decoding starts.
pub fn read_from<T: MatrixElement, R: Read>(
    mut reader: R,
    config: &ParseConfig,
) -> Result<SparseMatrix<T>> {
    let path = Path::new(STREAM_PATH);
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(path, e))?;
    trace!(bytes = text.len(), "decoding matrix from stream");

    parse_matrix(&text, config).map_err(|e| Error::format(path, e))
}

/// Encode a matrix into any writer
pub fn write_to<T: MatrixElement, W: Write>(
    mut writer: W,
    matrix: &SparseMatrix<T>,
) -> Result<()> {
    let path = Path::new(STREAM_PATH);
    trace!(shape = %matrix.shape(), nnz = matrix.nnz(), "encoding matrix to stream");
    write!(writer, "{matrix}").map_err(|e| Error::io(path, e))?;
    writer.flush().map_err(|e| Error::io(path, e))
}

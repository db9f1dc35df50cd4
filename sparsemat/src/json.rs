//! JSON interchange for matrices (requires the `serde` feature)
//!
//! The JSON layout is `{ "rows", "cols", "entries": [{ "row", "col", "value" }] }`
//! with entries in row-major order.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
};

use serde::{de::DeserializeOwned, Serialize};
use sparsemat_core::{MatrixElement, SparseMatrix};
use tracing::debug;

use crate::error::{Error, Result};
use crate::file_io::MatrixFile;

impl MatrixFile {
    /// Read the file as JSON instead of the text format
    pub fn read_json<T>(&self) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement + DeserializeOwned,
    {
        let file = File::open(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let matrix: SparseMatrix<T> =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| self.json_error(e))?;

        debug!(
            path = %self.path.display(),
            shape = %matrix.shape(),
            nnz = matrix.nnz(),
            "read JSON matrix"
        );
        Ok(matrix)
    }

    /// Write the matrix to the file as pretty-printed JSON
    pub fn write_json<T>(&self, matrix: &SparseMatrix<T>) -> Result<()>
    where
        T: MatrixElement + Serialize,
    {
        let file = File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, matrix).map_err(|e| self.json_error(e))?;
        writer.flush().map_err(|e| Error::io(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            shape = %matrix.shape(),
            nnz = matrix.nnz(),
            "wrote JSON matrix"
        );
        Ok(())
    }

    fn json_error(&self, source: serde_json::Error) -> Error {
        Error::Json {
            path: self.path.clone(),
            source,
        }
    }
}

//! Serde support for [`SparseMatrix`]
//!
//! A matrix serializes as `{ "rows", "cols", "entries": [...] }` with
//! entries in row-major order. Deserialization goes through the setter,
//! so zero-valued entries are dropped.

use alloc::vec::Vec;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::format::Entry;
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;

impl<T> Serialize for SparseMatrix<T>
where
    T: MatrixElement + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SparseMatrix", 3)?;
        state.serialize_field("rows", &self.rows())?;
        state.serialize_field("cols", &self.cols())?;
        state.serialize_field("entries", &self.sorted_entries())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "SparseMatrix")]
struct MatrixRepr<T> {
    rows: usize,
    cols: usize,
    #[serde(default = "Vec::new")]
    entries: Vec<Entry<T>>,
}

impl<'de, T> Deserialize<'de> for SparseMatrix<T>
where
    T: MatrixElement + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MatrixRepr::<T>::deserialize(deserializer)?;
        let entries = repr
            .entries
            .into_iter()
            .map(|entry| (entry.row, entry.col, entry.value));
        Ok(SparseMatrix::from_entries(repr.rows, repr.cols, entries))
    }
}

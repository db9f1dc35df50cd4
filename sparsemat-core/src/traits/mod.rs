//! Element-type constraints for sparse matrices

pub mod element;

pub use element::MatrixElement;

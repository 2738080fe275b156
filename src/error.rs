use thiserror::Error;

// Unified error type for the checked indexing path

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IndexError {
    #[error("index {0} out of bounds for length {1}")]
    OutOfBounds(usize, usize),
    #[error("row index {0} out of bounds for {1} rows")]
    RowOutOfBounds(usize, usize),
    #[error("column index {0} out of bounds for {1} columns")]
    ColOutOfBounds(usize, usize),
    #[error("mask length {0} does not match target length {1}")]
    MaskLength(usize, usize),
    #[error("mask has more elements ({0}) than the source ({1})")]
    MaskLargerThanSource(usize, usize),
    #[error("{0} values supplied for {1} selected positions")]
    ValueCount(usize, usize),
    #[error("value matrix is {0}x{1}, selection is {2}x{3}")]
    ValueShape(usize, usize, usize, usize),
}

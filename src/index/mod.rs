//! The indexing engine: ordinal, logical, and mixed indexing, with their
//! assignment counterparts.
//!
//! All read operations allocate and return a newly owned container; all
//! assignment operations mutate the target in place. The impls here are the
//! unchecked fast path (debug assertions only); `checked` holds validated
//! counterparts that fail fast with a descriptive [`IndexError`](crate::error::IndexError).

pub mod checked;
pub mod logical;
pub mod mixed;
pub mod ordinal;

pub use logical::{LogicalAssign, LogicalIndex};
pub use mixed::mixed_logical_index;
pub use ordinal::{OrdinalAssign, OrdinalIndex};

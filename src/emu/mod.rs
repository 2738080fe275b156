//! MATLAB emulation utilities built atop the indexing engine and the Faer
//! linear-algebra provider: inverse, left/right division, integer matrix
//! power, random permutation, and decimal-to-binary conversion.

pub mod bits;
pub mod linalg;
pub mod rand;

pub use bits::{dec2bin, dec2bin_pad};
pub use linalg::{div_left, div_right, inv, mul, pow};
pub use rand::randperm;

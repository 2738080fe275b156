//! Decimal-to-binary string conversion.

/// Binary digit string of a non-negative integer; `0` maps to `"0"`.
pub fn dec2bin(n: u64) -> String {
    format!("{:b}", n)
}

/// Like [`dec2bin`], left-padded with zeros to at least `len` digits.
pub fn dec2bin_pad(n: u64, len: usize) -> String {
    format!("{:0width$b}", n, width = len)
}

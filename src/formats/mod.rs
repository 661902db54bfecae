//! Format-specific header handling.

pub mod pe;

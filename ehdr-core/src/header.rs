pub mod elf;
pub mod symbols;

use std::fmt;

pub trait Header: std::fmt::Debug + Send + Sync {
    /// Returns the virtual address of the entry point.
    fn entry_point(&self) -> u64;

    /// Returns the machine architecture identifier.
    fn machine(&self) -> u16;

    /// Returns true if this is a 64-bit binary.
    fn is_64(&self) -> bool;

    /// Returns a short human-readable name, e.g. "ELF".
    fn format_name(&self) -> &'static str;

    /// Returns true if the binary represents an executable (vs object/lib).
    fn is_executable(&self) -> bool;
}

/// Reasons a byte buffer could not be decoded as a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeError {
    /// Fewer bytes than the fixed header length were supplied.
    Truncated { expected: usize, actual: usize },
    /// The identification block does not start with `7F 'E' 'L' 'F'`.
    NotElf,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated { expected, actual } => write!(
                f,
                "header is truncated: expected {expected} bytes, got {actual}"
            ),
            Self::NotElf => f.write_str("Not an ELF file"),
        }
    }
}

impl std::error::Error for DecodeError {}

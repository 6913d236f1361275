pub mod binary;
pub mod header;
pub mod report;
#[doc(hidden)]
pub mod testing;

pub use binary::*;
pub use header::elf::{decode, decode_with, validate, DecodedHeader, ReadOrder, SIZEOF_EHDR};
pub use header::{DecodeError, Header};

use ehdr_core::testing::header_bytes;
use ehdr_core::{Binary, DecodeError, LoadError, ReadOrder, SIZEOF_EHDR};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

/// A Linux shared object for a machine outside the lookup table.
fn sample_header() -> Vec<u8> {
    let mut buf = header_bytes(3, 0xb7, false);
    buf[7] = 3;
    buf
}

#[test]
fn test_open_header_file() {
    let mut bytes = sample_header();
    bytes.extend_from_slice(&[0u8; 128]);
    let file = write_temp(&bytes);

    let bin = Binary::open(file.path(), ReadOrder::Host).unwrap();
    assert_eq!(bin.header.class, "64");
    assert_eq!(bin.header.os_abi, "Linux");
    assert_eq!(bin.header.object_type, "DYN (Shared object)");
    // aarch64 is not in the machine table.
    assert_eq!(bin.header.machine, "Unknown");
    assert_eq!(bin.header.shoff, 0x3a48);
    assert_eq!(bin.header.shnum, 31);
    assert_eq!(bin.raw[..], bytes[..SIZEOF_EHDR]);
    assert_eq!(bin.path, file.path().display().to_string());
}

#[test]
fn test_open_short_file() {
    let file = write_temp(&sample_header()[..40]);
    let err = Binary::open(file.path(), ReadOrder::Host).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::Eof { read: 40 })
    ));
    assert!(err.to_string().contains("EOF reached"));
}

#[test]
fn test_open_empty_file() {
    let file = write_temp(&[]);
    let err = Binary::open(file.path(), ReadOrder::Host).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::Eof { read: 0 })
    ));
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Binary::open(dir.path().join("missing"), ReadOrder::Host).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::Open { .. })
    ));
}

#[test]
fn test_open_not_elf() {
    let file = write_temp(&[b'#'; 100]);
    let err = Binary::open(file.path(), ReadOrder::Host).unwrap_err();
    assert_eq!(err.downcast_ref::<DecodeError>(), Some(&DecodeError::NotElf));
    assert_eq!(err.to_string(), "Not an ELF file");
}

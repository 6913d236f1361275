//! Header fixtures shared by the unit, integration and CLI tests.

use crate::header::elf::SIZEOF_EHDR;

/// Lays out a 64-bit x86-64-style header in host order, or big-endian when
/// `big_endian` is set.
///
/// Entry `0x401000`, phoff `64`, shoff `0x3a48`, flags `0x5`, ehsize `64`,
/// phentsize `56`, phnum `13`, shentsize `64`, shnum `31`, shstrndx `30`.
pub fn header_bytes(e_type: u16, e_machine: u16, big_endian: bool) -> Vec<u8> {
    let u16b = |v: u16| if big_endian { v.to_be_bytes() } else { v.to_ne_bytes() };
    let u32b = |v: u32| if big_endian { v.to_be_bytes() } else { v.to_ne_bytes() };
    let u64b = |v: u64| if big_endian { v.to_be_bytes() } else { v.to_ne_bytes() };

    let mut buf = vec![0x7f, b'E', b'L', b'F', 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    buf.extend_from_slice(&u16b(e_type));
    buf.extend_from_slice(&u16b(e_machine));
    buf.extend_from_slice(&u32b(1));
    buf.extend_from_slice(&u64b(0x401000));
    buf.extend_from_slice(&u64b(64));
    buf.extend_from_slice(&u64b(0x3a48));
    buf.extend_from_slice(&u32b(0x5));
    for v in [64u16, 56, 13, 64, 31, 30] {
        buf.extend_from_slice(&u16b(v));
    }
    debug_assert_eq!(buf.len(), SIZEOF_EHDR);
    buf
}

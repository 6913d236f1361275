//! Static lookup tables turning raw header codes into display names.
//!
//! Every table is a plain `(code, label)` slice. Codes missing from a table
//! fall back to that table's default label instead of failing.

use goblin::elf::header::{
    ELFCLASS32, ELFCLASS64, ELFDATA2LSB, ELFDATA2MSB, ELFOSABI_AIX, ELFOSABI_ARM,
    ELFOSABI_ARM_AEABI, ELFOSABI_FREEBSD, ELFOSABI_HPUX, ELFOSABI_IRIX, ELFOSABI_LINUX,
    ELFOSABI_MODESTO, ELFOSABI_NETBSD, ELFOSABI_OPENBSD, ELFOSABI_SOLARIS, ELFOSABI_STANDALONE,
    ELFOSABI_SYSV, ELFOSABI_TRU64, EM_386, EM_68K, EM_88K, EM_IA_64, EM_M32, EM_MIPS, EM_PARISC,
    EM_PPC, EM_PPC64, EM_S390, EM_SH, EM_SPARC, EM_SPARC32PLUS, EM_SPARCV9, EM_VAX, EM_X86_64,
    ET_CORE, ET_DYN, ET_EXEC, ET_REL,
};

pub const UNKNOWN: &str = "Unknown";
pub const UNKNOWN_TYPE: &str = "NONE (Unknown type)";

pub static CLASSES: &[(u8, &str)] = &[(ELFCLASS32, "32"), (ELFCLASS64, "64")];

pub static DATA_ENCODINGS: &[(u8, &str)] = &[
    (ELFDATA2LSB, "little-endian"),
    (ELFDATA2MSB, "big-endian"),
];

pub static OS_ABIS: &[(u8, &str)] = &[
    (ELFOSABI_SYSV, "UNIX System V"),
    (ELFOSABI_HPUX, "HP-UX"),
    (ELFOSABI_NETBSD, "NetBSD"),
    (ELFOSABI_LINUX, "Linux"),
    (ELFOSABI_SOLARIS, "Sun Solaris"),
    (ELFOSABI_AIX, "IBM AIX"),
    (ELFOSABI_IRIX, "SGI IRIX"),
    (ELFOSABI_FREEBSD, "FreeBSD"),
    (ELFOSABI_TRU64, "Compaq TRU64 UNIX"),
    (ELFOSABI_MODESTO, "Novell Modesto"),
    (ELFOSABI_OPENBSD, "OpenBSD"),
    (ELFOSABI_ARM_AEABI, "ARM EABI"),
    (ELFOSABI_ARM, "ARM"),
    (ELFOSABI_STANDALONE, "Standalone"),
];

pub static OBJECT_TYPES: &[(u16, &str)] = &[
    (ET_REL, "REL (Relocatable file)"),
    (ET_EXEC, "EXEC (Executable file)"),
    (ET_DYN, "DYN (Shared object)"),
    (ET_CORE, "CORE (Core file)"),
];

// Not exhaustive; anything else shows up as "Unknown".
pub static MACHINES: &[(u16, &str)] = &[
    (EM_M32, "AT&T WE 32100"),
    (EM_SPARC, "Sun Microsystems SPARC"),
    (EM_386, "Intel 80386"),
    (EM_68K, "Motorola 68000"),
    (EM_88K, "Motorola 88000"),
    (EM_MIPS, "MIPS RS3000 (big endian)"),
    (EM_PARISC, "HP/PA"),
    (EM_SPARC32PLUS, "SPARC 32+"),
    (EM_PPC, "PowerPC"),
    (EM_PPC64, "PowerPC 64-bit"),
    (EM_S390, "IBM S/390"),
    (EM_SH, "Renesas SuperH"),
    (EM_SPARCV9, "SPARC v9 64-bit"),
    (EM_IA_64, "Intel Itanium"),
    (EM_X86_64, "AMD x86-64"),
    (EM_VAX, "DEC Vax"),
];

/// Finds `code` in `table`, or `None` when the table does not define it.
pub fn lookup<K: Copy + PartialEq>(table: &[(K, &'static str)], code: K) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, label)| *label)
}

pub fn class_name(code: u8) -> &'static str {
    lookup(CLASSES, code).unwrap_or(UNKNOWN)
}

pub fn data_name(code: u8) -> &'static str {
    lookup(DATA_ENCODINGS, code).unwrap_or(UNKNOWN)
}

/// Only `EV_CURRENT` (1) is defined, but any non-zero byte is accepted as current.
pub fn version_name(code: u8) -> &'static str {
    if code != 0 {
        "Current"
    } else {
        "Invalid"
    }
}

pub fn osabi_name(code: u8) -> &'static str {
    lookup(OS_ABIS, code).unwrap_or(UNKNOWN)
}

pub fn type_name(code: u16) -> &'static str {
    lookup(OBJECT_TYPES, code).unwrap_or(UNKNOWN_TYPE)
}

pub fn machine_name(code: u16) -> &'static str {
    lookup(MACHINES, code).unwrap_or(UNKNOWN)
}

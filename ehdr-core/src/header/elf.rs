use crate::header::symbols::{
    class_name, data_name, machine_name, osabi_name, type_name, version_name, UNKNOWN,
    UNKNOWN_TYPE,
};
use crate::header::{DecodeError, Header};
use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian, ReadBytesExt};
use goblin::elf::header::{
    EI_ABIVERSION, EI_CLASS, EI_DATA, EI_OSABI, EI_VERSION, ELFCLASS32, ELFCLASS64, ELFDATA2LSB,
    ELFDATA2MSB, ELFMAG, ET_EXEC, SELFMAG, SIZEOF_IDENT,
};
use std::io::{self, Cursor};

/// Size in bytes of an ELF64 file header.
pub const SIZEOF_EHDR: usize = 64;

/// Represents the ELF (Executable and Linkable Format) header for a 64-bit object file.
///
/// This structure corresponds to the standard `Elf64_Ehdr` defined in the ELF specification.
/// It appears at the very beginning of every ELF file and contains metadata describing
/// the file's organization and layout.
///
/// Reference: [ELF Specification v1.2](https://refspecs.linuxfoundation.org/elf/elf.pdf)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elf64Ehdr {
    /// ELF identification bytes (magic number and other information).
    ///
    /// The first 4 bytes should be `0x7F`, `'E'`, `'L'`, `'F'`.
    /// Remaining bytes encode class (32/64-bit), endianness, version and OS/ABI.
    pub e_ident: [u8; SIZEOF_IDENT],

    /// Object file type (e.g. relocatable, executable, shared, core).
    pub e_type: u16,

    /// Target architecture (e.g., x86_64, ARM).
    pub e_machine: u16,

    /// ELF version (usually set to `EV_CURRENT` = 1).
    pub e_version: u32,

    /// Virtual address of the program entry point.
    pub e_entry: u64,

    /// File offset of the program header table.
    pub e_phoff: u64,

    /// File offset of the section header table.
    pub e_shoff: u64,

    /// Processor-specific flags.
    pub e_flags: u32,

    /// Size of this ELF header (usually `64` bytes for ELF64).
    pub e_ehsize: u16,

    /// Size of one entry in the program header table.
    pub e_phentsize: u16,

    /// Number of entries in the program header table.
    pub e_phnum: u16,

    /// Size of one entry in the section header table.
    pub e_shentsize: u16,

    /// Number of entries in the section header table.
    pub e_shnum: u16,

    /// Index of the section header string table.
    pub e_shstrndx: u16,
}

impl Elf64Ehdr {
    pub fn from_reader<B: ByteOrder, R: io::Read>(cur: &mut R) -> io::Result<Elf64Ehdr> {
        let mut e_ident = [0u8; SIZEOF_IDENT];
        cur.read_exact(&mut e_ident)?;

        Ok(Elf64Ehdr {
            e_ident,
            e_type: cur.read_u16::<B>()?,
            e_machine: cur.read_u16::<B>()?,
            e_version: cur.read_u32::<B>()?,
            e_entry: cur.read_u64::<B>()?,
            e_phoff: cur.read_u64::<B>()?,
            e_shoff: cur.read_u64::<B>()?,
            e_flags: cur.read_u32::<B>()?,
            e_ehsize: cur.read_u16::<B>()?,
            e_phentsize: cur.read_u16::<B>()?,
            e_phnum: cur.read_u16::<B>()?,
            e_shentsize: cur.read_u16::<B>()?,
            e_shnum: cur.read_u16::<B>()?,
            e_shstrndx: cur.read_u16::<B>()?,
        })
    }
}

/// Byte order used for the multi-byte header fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReadOrder {
    /// Read as the host would lay the header out in memory, whatever `EI_DATA` says.
    #[default]
    Host,
    /// Honour `EI_DATA`. Unknown encodings fall back to host order.
    Declared,
}

/// A fully decoded header: raw values plus their display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedHeader {
    pub ident: [u8; SIZEOF_IDENT],
    pub class: &'static str,
    pub data: &'static str,
    pub version: &'static str,
    pub os_abi: &'static str,
    pub abi_version: u8,
    pub e_type: u16,
    pub object_type: &'static str,
    pub e_machine: u16,
    pub machine: &'static str,
    pub entry: u64,
    pub phoff: u64,
    pub shoff: u64,
    pub flags: u32,
    pub ehsize: u16,
    pub phentsize: u16,
    pub phnum: u16,
    pub shentsize: u16,
    pub shnum: u16,
    pub shstrndx: u16,
}

impl Header for DecodedHeader {
    fn entry_point(&self) -> u64 {
        self.entry
    }

    fn machine(&self) -> u16 {
        self.e_machine
    }

    fn is_64(&self) -> bool {
        self.ident[EI_CLASS] == ELFCLASS64
    }

    fn format_name(&self) -> &'static str {
        "ELF"
    }

    fn is_executable(&self) -> bool {
        self.e_type == ET_EXEC
    }
}

/// Returns true when `bytes` starts with the ELF magic `7F 45 4C 46`.
pub fn validate(bytes: &[u8]) -> bool {
    bytes.len() >= SELFMAG && bytes[..SELFMAG] == ELFMAG[..]
}

/// Decodes the first [`SIZEOF_EHDR`] bytes of `bytes`, reading integers in host order.
pub fn decode(bytes: &[u8]) -> Result<DecodedHeader, DecodeError> {
    decode_with(bytes, ReadOrder::Host)
}

/// Decodes the first [`SIZEOF_EHDR`] bytes of `bytes`.
///
/// Only a short buffer or a bad magic fail. Codes missing from the symbol
/// tables are rendered with the table's default label.
///
/// The 64-bit layout is used for every class, including `ELFCLASS32`.
pub fn decode_with(bytes: &[u8], order: ReadOrder) -> Result<DecodedHeader, DecodeError> {
    let truncated = DecodeError::Truncated {
        expected: SIZEOF_EHDR,
        actual: bytes.len(),
    };
    if bytes.len() < SIZEOF_EHDR {
        return Err(truncated);
    }
    if !validate(bytes) {
        return Err(DecodeError::NotElf);
    }

    let mut cursor = Cursor::new(&bytes[..SIZEOF_EHDR]);
    let raw = match (order, bytes[EI_DATA]) {
        (ReadOrder::Declared, ELFDATA2LSB) => Elf64Ehdr::from_reader::<LittleEndian, _>(&mut cursor),
        (ReadOrder::Declared, ELFDATA2MSB) => Elf64Ehdr::from_reader::<BigEndian, _>(&mut cursor),
        (ReadOrder::Declared, other) => {
            log::debug!("Unknown data encoding {other:#x}; reading in host order");
            Elf64Ehdr::from_reader::<NativeEndian, _>(&mut cursor)
        }
        (ReadOrder::Host, _) => Elf64Ehdr::from_reader::<NativeEndian, _>(&mut cursor),
    }
    .map_err(|_| truncated)?;

    Ok(DecodedHeader::from_raw(&raw))
}

impl DecodedHeader {
    fn from_raw(raw: &Elf64Ehdr) -> Self {
        let ident = raw.e_ident;

        if ident[EI_CLASS] == ELFCLASS32 {
            log::warn!("32-bit ELF class; fields are still read with the 64-bit layout");
        }

        let object_type = type_name(raw.e_type);
        let machine = machine_name(raw.e_machine);
        let os_abi = osabi_name(ident[EI_OSABI]);
        if object_type == UNKNOWN_TYPE {
            log::debug!("Unknown object type {:#x}", raw.e_type);
        }
        if machine == UNKNOWN {
            log::debug!("Unknown machine {:#x}", raw.e_machine);
        }
        if os_abi == UNKNOWN {
            log::debug!("Unknown OS/ABI {:#x}", ident[EI_OSABI]);
        }

        DecodedHeader {
            ident,
            class: class_name(ident[EI_CLASS]),
            data: data_name(ident[EI_DATA]),
            version: version_name(ident[EI_VERSION]),
            os_abi,
            abi_version: ident[EI_ABIVERSION],
            e_type: raw.e_type,
            object_type,
            e_machine: raw.e_machine,
            machine,
            entry: raw.e_entry,
            phoff: raw.e_phoff,
            shoff: raw.e_shoff,
            flags: raw.e_flags,
            ehsize: raw.e_ehsize,
            phentsize: raw.e_phentsize,
            phnum: raw.e_phnum,
            shentsize: raw.e_shentsize,
            shnum: raw.e_shnum,
            shstrndx: raw.e_shstrndx,
        }
    }
}

use crate::header::elf::{decode_with, DecodedHeader, ReadOrder, SIZEOF_EHDR};
use crate::header::Header;
use crate::report;
use anyhow::Result;
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Failures while fetching the header bytes from disk.
#[derive(Debug)]
pub enum LoadError {
    Open { path: PathBuf, source: io::Error },
    /// The file ended after `read` bytes, before a full header.
    Eof { read: usize },
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Error while opening file {}: {source}", path.display())
            }
            Self::Eof { read } => write!(
                f,
                "Error while reading file: EOF reached after {read} of {SIZEOF_EHDR} bytes"
            ),
            Self::Io(source) => write!(f, "Error while reading file: I/O error: {source}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Io(source) => Some(source),
            Self::Eof { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct Binary {
    pub path: String,
    pub raw: [u8; SIZEOF_EHDR],
    pub header: DecodedHeader,
}

impl Binary {
    pub fn open<P: AsRef<Path>>(path: P, order: ReadOrder) -> Result<Self> {
        let mut file = std::fs::File::open(&path).map_err(|source| LoadError::Open {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        let mut raw = [0u8; SIZEOF_EHDR];
        read_header(&mut file, &mut raw)?;

        let header = decode_with(&raw, order)?;
        log::info!(
            "Loaded {}{} header from {} (entry {:#x})",
            header.format_name(),
            header.class,
            path.as_ref().display(),
            header.entry_point()
        );

        Ok(Self {
            path: path.as_ref().display().to_string(),
            raw,
            header,
        })
    }

    pub fn from_bytes(bytes: &[u8], order: ReadOrder) -> Result<Self> {
        let header = decode_with(bytes, order)?;
        let mut raw = [0u8; SIZEOF_EHDR];
        raw.copy_from_slice(&bytes[..SIZEOF_EHDR]);

        Ok(Self {
            path: String::from("<memory>"),
            raw,
            header,
        })
    }

    pub fn get_entry_offset(&self) -> u64 {
        self.header.entry_point()
    }

    pub fn render(&self) -> String {
        report::render(&self.header)
    }
}

/// Fills `buf` completely, telling a short file apart from a failing read.
fn read_header<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), LoadError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => return Err(LoadError::Eof { read: filled }),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(LoadError::Io(e)),
        }
    }
    Ok(())
}

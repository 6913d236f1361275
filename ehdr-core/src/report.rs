use crate::header::elf::DecodedHeader;

/// One labeled line of a header report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Identification bytes as space-separated two-digit hex.
pub fn magic_hex(ident: &[u8]) -> String {
    ident
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every decoded field, in report order. Addresses, offsets and flags are
/// hex; sizes and counts are decimal.
pub fn fields(hdr: &DecodedHeader) -> Vec<Field> {
    vec![
        Field::new("Magic", magic_hex(&hdr.ident)),
        Field::new("Class", format!("ELF{}", hdr.class)),
        Field::new("Data", hdr.data),
        Field::new("Version", hdr.version),
        Field::new("OS/ABI", hdr.os_abi),
        Field::new("ABI version", format!("{:#x}", hdr.abi_version)),
        Field::new("Type", hdr.object_type),
        Field::new("Machine", hdr.machine),
        Field::new("Entry virtual address", format!("{:#x}", hdr.entry)),
        Field::new("Program header table's file offset", format!("{:#x}", hdr.phoff)),
        Field::new("Section header table's file offset", format!("{:#x}", hdr.shoff)),
        Field::new("Flags", format!("{:#x}", hdr.flags)),
        Field::new("Size of this ELF header", format!("{} bytes", hdr.ehsize)),
        Field::new("Size of program header entries", format!("{} bytes", hdr.phentsize)),
        Field::new("Number of program headers", hdr.phnum.to_string()),
        Field::new("Size of section header entries", format!("{} bytes", hdr.shentsize)),
        Field::new("Number of section headers", hdr.shnum.to_string()),
        Field::new("Section header string table index", hdr.shstrndx.to_string()),
    ]
}

/// Renders the header as aligned `label : value` lines.
pub fn render(hdr: &DecodedHeader) -> String {
    let rows = fields(hdr);
    let width = rows.iter().map(|f| f.label.len()).max().unwrap_or(0);

    rows.iter()
        .map(|field| format!("{:<width$} : {}\n", field.label, field.value))
        .collect()
}

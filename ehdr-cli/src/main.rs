use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use ehdr_core::report::{fields, magic_hex, render};
use ehdr_core::{Binary, DecodedHeader, ReadOrder};
use serde::Serialize;
use std::process::ExitCode;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Print the ELF file header of a binary
#[derive(Parser)]
#[command(
    name = "ehdr",
    about = "Decode and print the ELF header of a binary file",
    version,
    author
)]
struct Cli {
    /// Path to binary file
    #[arg(required = true)]
    path: std::path::PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Read multi-byte fields in the byte order declared by the header
    /// instead of the host's
    #[arg(long)]
    declared_endian: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Table,
    Json,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Field")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Serialize)]
struct JsonHeader<'a> {
    path: &'a str,
    magic: String,
    class: &'static str,
    data: &'static str,
    version: &'static str,
    os_abi: &'static str,
    abi_version: u8,
    object_type: &'static str,
    e_type: u16,
    machine: &'static str,
    e_machine: u16,
    entry: u64,
    phoff: u64,
    shoff: u64,
    flags: u32,
    ehsize: u16,
    phentsize: u16,
    phnum: u16,
    shentsize: u16,
    shnum: u16,
    shstrndx: u16,
}

impl<'a> JsonHeader<'a> {
    fn new(path: &'a str, hdr: &DecodedHeader) -> Self {
        Self {
            path,
            magic: magic_hex(&hdr.ident),
            class: hdr.class,
            data: hdr.data,
            version: hdr.version,
            os_abi: hdr.os_abi,
            abi_version: hdr.abi_version,
            object_type: hdr.object_type,
            e_type: hdr.e_type,
            machine: hdr.machine,
            e_machine: hdr.e_machine,
            entry: hdr.entry,
            phoff: hdr.phoff,
            shoff: hdr.shoff,
            flags: hdr.flags,
            ehsize: hdr.ehsize,
            phentsize: hdr.phentsize,
            phnum: hdr.phnum,
            shentsize: hdr.shentsize,
            shnum: hdr.shnum,
            shstrndx: hdr.shstrndx,
        }
    }
}

fn format_report(bin: &Binary, format: Format) -> Result<String> {
    let out = match format {
        Format::Text => render(&bin.header),
        Format::Table => {
            let rows = fields(&bin.header)
                .into_iter()
                .map(|f| Row {
                    label: f.label,
                    value: f.value,
                })
                .collect::<Vec<_>>();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            format!("{table}\n")
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&JsonHeader::new(&bin.path, &bin.header))?;
            format!("{json}\n")
        }
    };
    Ok(out)
}

fn run(cli: &Cli) -> Result<()> {
    let order = if cli.declared_endian {
        ReadOrder::Declared
    } else {
        ReadOrder::Host
    };

    let bin = Binary::open(&cli.path, order)?;
    print!("{}", format_report(&bin, cli.format)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ehdr_core::testing::header_bytes;
    use rstest::*;

    fn sample() -> Binary {
        Binary::from_bytes(&header_bytes(2, 0x3e, false), ReadOrder::Host).unwrap()
    }

    #[rstest]
    #[case(&["ehdr", "a.out"], Format::Text, false)]
    #[case(&["ehdr", "--format", "json", "a.out"], Format::Json, false)]
    #[case(&["ehdr", "a.out", "--format", "table", "--declared-endian"], Format::Table, true)]
    fn test_parse_args(#[case] args: &[&str], #[case] format: Format, #[case] declared: bool) {
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.path, std::path::PathBuf::from("a.out"));
        assert_eq!(cli.format, format);
        assert_eq!(cli.declared_endian, declared);
    }

    #[rstest]
    #[case(&["ehdr"])]
    #[case(&["ehdr", "a", "b"])]
    #[case(&["ehdr", "--format", "xml", "a"])]
    fn test_parse_args_usage_error(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_json_report() {
        let bin = sample();
        let out = format_report(&bin, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["class"], "64");
        assert_eq!(value["machine"], "AMD x86-64");
        assert_eq!(value["e_machine"], 62);
        assert_eq!(value["entry"], 0x401000);
        assert_eq!(value["shstrndx"], 30);
        assert_eq!(value["magic"], "7f 45 4c 46 02 01 01 00 00 00 00 00 00 00 00 00");
    }

    #[test]
    fn test_table_report() {
        let bin = sample();
        let out = format_report(&bin, Format::Table).unwrap();
        assert!(out.contains("Field"));
        assert!(out.contains("EXEC (Executable file)"));
        assert!(out.contains("Section header string table index"));
    }

    #[test]
    fn test_text_report() {
        let bin = sample();
        assert_eq!(format_report(&bin, Format::Text).unwrap(), bin.render());
    }
}

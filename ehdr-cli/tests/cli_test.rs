use ehdr_core::testing::header_bytes;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ehdr-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_temp(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn exec_header() -> Vec<u8> {
    header_bytes(2, 0x3e, false)
}

#[test]
fn test_prints_report() {
    let file = write_temp(&exec_header());
    let out = run(&[file.path().to_str().unwrap()]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("ELF64"));
    assert!(stdout.contains("AMD x86-64"));
    assert!(stdout.contains("0x401000"));
    assert!(out.stderr.is_empty());
}

#[test]
fn test_json_output() {
    let file = write_temp(&exec_header());
    let out = run(&["--format", "json", file.path().to_str().unwrap()]);

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("\"object_type\": \"EXEC (Executable file)\""));
}

#[test]
fn test_wrong_argument_count() {
    let cases: [&[&str]; 2] = [&[], &["a", "b"]];
    for args in cases {
        let out = run(args);
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        assert!(out.stdout.is_empty(), "{args:?}");
        assert!(!out.stderr.is_empty(), "{args:?}");
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope");
    let out = run(&[path.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Error while opening file"));
}

#[test]
fn test_short_file() {
    let file = write_temp(&exec_header()[..20]);
    let out = run(&[file.path().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("EOF reached"));
}

#[test]
fn test_not_elf() {
    let file = write_temp(&[0u8; 64]);
    let out = run(&[file.path().to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Not an ELF file"));
}

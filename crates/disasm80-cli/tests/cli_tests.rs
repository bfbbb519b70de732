use std::io::Write;
use std::process::Command;

use tempfile::{NamedTempFile, TempDir};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_disasm80"))
}

fn rom(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file
}

#[test]
fn test_default_listing() {
    let file = rom(&[0x00, 0x3e, 0x7f, 0x01, 0x34, 0x12]);
    let out = bin().arg(file.path()).output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "0000: 00\t\tnop\n0001: 3E 7F\t\tmvi a 7F\n0003: 01 34 12\tlxi b 1234\n"
    );
}

#[test]
fn test_upper_decimal_flags() {
    let file = rom(&[0x00, 0x3e, 0x7f, 0xcb]);
    let out = bin().arg(file.path()).args(["-u", "-d"]).output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "0: 00\t\tNOP\n1: 3E 7F\t\tMVI A 7F\n3: CB\t\tILLEGAL\n"
    );
}

#[test]
fn test_mnemonics_only_flag() {
    let file = rom(&[0xc3, 0x00, 0x00, 0x76]);
    let out = bin().arg(file.path()).arg("-m").output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "jmp\nhlt\n");
}

#[test]
fn test_config_file_with_flag_override() {
    let file = rom(&[0x00]);
    let mut cfg = NamedTempFile::new().unwrap();
    write!(cfg, r#"{{"address_base":"decimal","case":"upper"}}"#).unwrap();
    let out = bin()
        .arg(file.path())
        .arg("--config")
        .arg(cfg.path())
        .arg("-l")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "0: 00\t\tnop\n");
}

#[test]
fn test_truncated_file_still_succeeds() {
    let file = rom(&[0x01, 0x34]);
    let out = bin().arg(file.path()).output().unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "0000: 01 34\t\tlxi b ??34\n");
}

#[test]
fn test_empty_file_fails() {
    let file = rom(&[]);
    let out = bin().arg(file.path()).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("vazio"), "stderr: {stderr}");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let out = bin().arg(dir.path().join("nope.bin")).output().unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let out = bin().output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

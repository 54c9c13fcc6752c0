use std::io::Write;
use std::process::{Command, Output};

use packer_test::scenarios::{SAMPLE_INPUT, SAMPLE_OUTPUT};
use tempfile::NamedTempFile;

fn packer(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_packer"))
        .args(args)
        .env_remove("PACKER_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_prints_one_answer_per_line() {
    let file = input_file(SAMPLE_INPUT);
    let output = packer(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{}\n", SAMPLE_OUTPUT)
    );
}

#[test]
fn test_usage_errors_exit_with_one() {
    for args in [&[][..], &["a.txt", "b.txt"][..]] {
        let output = packer(args);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }
}

#[test]
fn test_help_exits_with_zero() {
    let output = packer(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout).unwrap().contains("INPUT"));
}

#[test]
fn test_malformed_line_exits_with_one() {
    let file = input_file("abc : (1,1,€1)\n");
    let output = packer(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: line 0"), "{}", stderr);
}

#[test]
fn test_missing_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let output = packer(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Error: cannot read"));
}

#[test]
fn test_config_from_environment() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[limits]\nmax_items = 1").unwrap();
    config.flush().unwrap();
    let file = input_file("10 : (1,1,€1) (2,1,€1)\n");

    let output = Command::new(env!("CARGO_BIN_EXE_packer"))
        .arg(file.path())
        .env("PACKER_CONFIG", config.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

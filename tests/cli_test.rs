use anyhow::Result;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn peak_visitors(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_peak-visitors"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

fn input_file(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn test_prints_peak_line_and_exits_zero() -> Result<()> {
    let file = input_file("09:00,10:00\n09:30,09:45\n")?;
    let output = peak_visitors(&[file.path().to_str().unwrap()])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "9:30-9:45;2\n");
    assert!(output.stderr.is_empty());
    Ok(())
}

#[test]
fn test_wrong_argument_count_prints_usage() -> Result<()> {
    let output = peak_visitors(&[])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("Usage"));
    assert!(output.stdout.is_empty());

    let output = peak_visitors(&["a.txt", "b.txt"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("Usage"));
    Ok(())
}

#[test]
fn test_unreadable_file_exits_one() -> Result<()> {
    let output = peak_visitors(&["/tmp/peak-visitors-missing/visitors.txt"])?;
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.starts_with("Error: "));
    assert!(stderr.contains("visitors.txt"));
    Ok(())
}

#[test]
fn test_malformed_time_exits_one_in_strict_mode() -> Result<()> {
    let file = input_file("09:00,10:00\n9h30,10:00\n")?;
    let path = file.path().to_str().unwrap();

    let output = peak_visitors(&[path])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("line 2"));

    let output = peak_visitors(&[path, "--mode", "lenient"])?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_settings_file_and_flags() -> Result<()> {
    let data = input_file("09:00,10:00\n09:05,09:45\n")?;
    let settings = input_file("[output]\nformat = \"json\"\ntime_style = \"padded\"\n")?;
    let data_path = data.path().to_str().unwrap();
    let settings_path = settings.path().to_str().unwrap();

    let output = peak_visitors(&[data_path, "--config", settings_path])?;
    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["start"], "09:05");

    let output = peak_visitors(&[data_path, "--config", settings_path, "--format", "text"])?;
    assert_eq!(String::from_utf8(output.stdout)?, "09:05-09:45;2\n");
    Ok(())
}

#[test]
fn test_help_exits_zero() -> Result<()> {
    let output = peak_visitors(&["--help"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("Usage"));
    Ok(())
}

#[test]
fn test_verbose_json_logs_stay_on_stderr() -> Result<()> {
    let file = input_file("09:00,10:00\n09:30,09:45\n")?;
    let path = file.path().to_str().unwrap();

    let output = peak_visitors(&[path, "--verbose", "--log-format", "json"])?;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8(output.stdout)?, "9:30-9:45;2\n");

    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stderr.trim().is_empty());
    for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
        let entry: serde_json::Value = serde_json::from_str(line)?;
        assert!(entry.get("level").is_some(), "{line}");
    }
    Ok(())
}

#[test]
fn test_directory_input_exits_one() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    let output = peak_visitors(&[dir.path().to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.starts_with("Error: "));
    Ok(())
}

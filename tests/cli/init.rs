use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{COUNTER_CONTRACT, CliTest};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(parsed["output"], "generated_build.go");
    assert_eq!(parsed["ignores"], Value::Array(Vec::new()));

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .neargorc.json

    ----- stderr -----
    ");

    let content = test.read_file(".neargorc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".neargorc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .neargorc.json already exists
    ✘ Nothing was generated
    ");
    assert_eq!(test.read_file(".neargorc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("main.go", COUNTER_CONTRACT)?;

    test.command().arg("init").output()?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 3 exports for state Counter in ./generated_build.go

    ----- stderr -----
    ");

    Ok(())
}

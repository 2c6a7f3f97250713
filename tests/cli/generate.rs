use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{COUNTER_CONTRACT, CliTest};

#[test]
fn test_generate_writes_default_output() -> Result<()> {
    let test = CliTest::with_file("main.go", COUNTER_CONTRACT)?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 3 exports for state Counter in ./generated_build.go

    ----- stderr -----
    ");

    let generated = test.read_file("generated_build.go")?;
    assert!(generated.starts_with("// Code generated by NEAR contract generator. DO NOT EDIT."));
    assert!(generated.contains("//go:export init\n"));
    assert!(generated.contains("//go:export increment\n"));
    assert!(generated.contains("//go:export get_count\n"));
    assert!(generated.contains("\t\"fmt\"\n"));

    Ok(())
}

#[test]
fn test_generate_skips_previous_output() -> Result<()> {
    let test = CliTest::with_file("main.go", COUNTER_CONTRACT)?;

    test.generate_command().output()?;
    let first = test.read_file("generated_build.go")?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 3 exports for state Counter in ./generated_build.go

    ----- stderr -----
    ");
    assert_eq!(test.read_file("generated_build.go")?, first);

    Ok(())
}

#[test]
fn test_generate_to_stdout() -> Result<()> {
    let test = CliTest::with_file("main.go", COUNTER_CONTRACT)?;

    let mut settings = test.settings();
    settings.add_filter(
        r"(?s)----- stdout -----\n// Code generated by NEAR contract generator\. DO NOT EDIT\..*\n----- stderr -----",
        "----- stdout -----\n[GENERATED SOURCE]\n----- stderr -----",
    );
    settings.bind(|| {
        assert_cmd_snapshot!(test.generate_command().arg("--stdout"), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        [GENERATED SOURCE]
        ----- stderr -----
        ✓ Generated 3 exports for state Counter
        ");
    });
    assert!(!test.root().join("generated_build.go").exists());

    Ok(())
}

#[test]
fn test_generate_output_flag() -> Result<()> {
    let test = CliTest::with_file("main.go", COUNTER_CONTRACT)?;

    assert_cmd_snapshot!(test.generate_command().args(["--output", "build/generated_main.go"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 3 exports for state Counter in ./build/generated_main.go

    ----- stderr -----
    ");
    assert!(test.root().join("build/generated_main.go").exists());

    Ok(())
}

#[test]
fn test_generate_with_source_root() -> Result<()> {
    let test = CliTest::with_file("contract/main.go", COUNTER_CONTRACT)?;

    assert_cmd_snapshot!(test.generate_command().args(["--source-root", "contract"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 3 exports for state Counter in contract/generated_build.go

    ----- stderr -----
    ");
    assert!(test.root().join("contract/generated_build.go").exists());

    Ok(())
}

#[test]
fn test_generate_uses_config_output() -> Result<()> {
    let test = CliTest::with_file("main.go", COUNTER_CONTRACT)?;
    test.write_file(".neargorc.json", r#"{ "output": "generated_glue.go" }"#)?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 3 exports for state Counter in ./generated_glue.go

    ----- stderr -----
    ");
    assert!(test.root().join("generated_glue.go").exists());
    assert!(!test.root().join("generated_build.go").exists());

    Ok(())
}

#[test]
fn test_generate_validation_failure() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        r#"package main

// @contract:mutating
func (c *Counter) Increment() {}
"#,
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: no struct with @contract:state found
    ✘ Nothing was generated
    ");
    assert!(!test.root().join("generated_build.go").exists());

    Ok(())
}

#[test]
fn test_generate_incompatible_annotations() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        r#"package main

// @contract:state
type Counter struct {
	Count int
}

// @contract:view
// @contract:mutating
func (c *Counter) Peek() int {
	return c.Count
}
"#,
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: method 'Peek' cannot be both @contract:view and @contract:mutating
    ✘ Nothing was generated
    ");

    Ok(())
}

#[test]
fn test_generate_empty_min_deposit_has_no_guard() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        r#"package main

// @contract:state
type Vault struct {
	Total int
}

// @contract:payable min_deposit=
func (v *Vault) Deposit() {}
"#,
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 1 export for state Vault in ./generated_build.go

    ----- stderr -----
    ");
    let generated = test.read_file("generated_build.go")?;
    assert!(!generated.contains("if !validatePayment("));

    Ok(())
}

#[test]
fn test_generate_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file("main.go", COUNTER_CONTRACT)?;
    test.write_file(".neargorc.json", r#"{ "ignores": ["[unclosed"] }"#)?;

    let mut settings = test.settings();
    settings.add_filter(
        r#"Invalid glob pattern in 'ignores': "\[unclosed": .*"#,
        r#"Invalid glob pattern in 'ignores': "[unclosed": [PATTERN ERROR]"#,
    );
    settings.bind(|| {
        assert_cmd_snapshot!(test.generate_command(), @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Invalid glob pattern in 'ignores': "[unclosed": [PATTERN ERROR]
        "#);
    });

    Ok(())
}

#[test]
fn test_generate_missing_source_root_is_internal_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".git/HEAD", "ref: refs/heads/main\n")?;

    let mut settings = test.settings();
    settings.add_filter(
        r"Failed to scan does-not-exist: .*",
        "Failed to scan does-not-exist: [WALK ERROR]",
    );
    settings.bind(|| {
        assert_cmd_snapshot!(test.generate_command().args(["--source-root", "does-not-exist"]), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to scan does-not-exist: [WALK ERROR]
        ");
    });

    Ok(())
}

#[test]
fn test_generate_reports_parse_errors() -> Result<()> {
    let test = CliTest::with_file("main.go", COUNTER_CONTRACT)?;
    test.write_file("broken.go", "package main\n\nfunc broken( {\n")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.generate_command(), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated 3 exports for state Counter in ./generated_build.go

        ----- stderr -----
        warning: 1 file could not be parsed (use -v for details)
        ");
    });

    Ok(())
}

#[test]
fn test_generate_verbose_shows_parse_errors() -> Result<()> {
    let test = CliTest::with_file("main.go", COUNTER_CONTRACT)?;
    test.write_file("broken.go", "package main\n\nfunc broken( {\n")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.generate_command().arg("-v"), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        ✓ Generated 3 exports for state Counter in ./generated_build.go
          - init
          - increment
          - get_count

        ----- stderr -----
        Note: No .neargorc.json found, using default configuration
        error: syntax error at [POSITION]  parse-error
          --> broken.go
        ");
    });

    Ok(())
}

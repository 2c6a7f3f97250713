use std::fs;

use neargo::core::{GenerateError, GenerateOptions, Generator, generate};
use neargo::issues::DiagnosticKind;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let path = dir.path().join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

fn generate_single(content: &str) -> Result<String, GenerateError> {
    let dir = project(&[("main.go", content)]);
    generate(dir.path())
}

const MESSAGE_BOARD: &str = r#"package main

import (
	"errors"
	"strings"
)

// Message is one board entry.
type Message struct {
	Author string `json:"author"`
	Text   string `json:"text"`
}

// @contract:state
type Board struct {
	Messages []Message `json:"messages"`
	Owner    string    `json:"owner"`
}

// @contract:init
// @contract:payable min_deposit=1NEAR
func (b *Board) Init(owner string) {
	b.Owner = owner
}

// @contract:mutating
func (b *Board) SetMessage(newMessage string) error {
	if strings.TrimSpace(newMessage) == "" {
		return errors.New("empty message")
	}
	b.Messages = append(b.Messages, Message{Text: newMessage})
	return nil
}

// @contract:mutating
func (b *Board) AddMessage(msg Message) {
	b.Messages = append(b.Messages, msg)
}

// @contract:view
func (b *Board) Count() int {
	return len(b.Messages)
}

// @contract:private
// @contract:view
func (b *Board) Secret() string {
	return b.Owner
}

func helper() int {
	return 42
}
"#;

#[test]
fn test_accessors_named_after_state() {
    let code = generate_single(MESSAGE_BOARD).unwrap();

    assert!(code.contains("func defaultInit() *Board {\n\treturn &Board{}\n}"));
    assert!(code.contains("func getState() *Board {\n"));
    assert!(code.contains("\tvar state Board\n"));
    assert!(code.contains("func setState(state *Board) {\n"));
}

#[test]
fn test_passthrough_is_verbatim() {
    let code = generate_single(MESSAGE_BOARD).unwrap();

    assert!(code.contains("// ===== From: main.go =====\n// Message is one board entry.\ntype Message struct {"));
    assert!(code.contains("func helper() int {\n\treturn 42\n}\n\n"));
    assert!(code.contains(
        "// @contract:mutating\nfunc (b *Board) AddMessage(msg Message) {\n\tb.Messages = append(b.Messages, msg)\n}\n\n"
    ));
}

#[test]
fn test_imports_are_merged() {
    let code = generate_single(MESSAGE_BOARD).unwrap();

    let block_start = code.find("import (\n").unwrap();
    let block_end = block_start + code[block_start..].find(")\n").unwrap();
    let block = &code[block_start..block_end];

    assert_eq!(
        block,
        "import (\n\
         \t\"errors\"\n\
         \t\"github.com/vlmoon99/near-sdk-go/env\"\n\
         \t\"github.com/vlmoon99/near-sdk-go/types\"\n\
         \t\"strings\"\n\
         \tcontractBuilder \"github.com/vlmoon99/near-sdk-go/contract\"\n\
         \tencodingJson \"encoding/json\"\n"
    );
}

#[test]
fn test_export_names() {
    let code = generate_single(
        r#"package main

// @contract:state
type S struct{}

// @contract:public
func (s *S) SendMessage() {}

// @contract:public
func (s *S) PDFLoad() {}

// @contract:public
func (s *S) myFunction() {}

// @contract:public
func (s *S) Submit() {}
"#,
    )
    .unwrap();

    for name in ["send_message", "p_d_f_load", "my_function", "submit"] {
        assert!(code.contains(&format!("//go:export {}\nfunc {}() {{\n", name, name)));
    }
}

#[test]
fn test_field_struct_for_basic_params() {
    let code = generate_single(MESSAGE_BOARD).unwrap();

    assert!(code.contains("\t\t\tNewMessage string `json:\"newMessage\"`\n"));
    assert!(code.contains("\t\tcallErr := state.SetMessage(params.NewMessage)\n"));
}

#[test]
fn test_single_compound_param_decodes_whole_payload() {
    let code = generate_single(MESSAGE_BOARD).unwrap();

    let start = code.find("//go:export add_message").unwrap();
    let wrapper = &code[start..start + code[start..].find("\n}\n").unwrap()];

    assert!(wrapper.contains("\t\tvar params Message\n"));
    assert!(wrapper.contains("env.PanicStr(\"Failed to parse Message parameter\")"));
    assert!(wrapper.contains("\t\tstate.AddMessage(params)\n"));
    assert!(!wrapper.contains("params."));
}

#[test]
fn test_init_payment_guard() {
    let code = generate_single(MESSAGE_BOARD).unwrap();

    assert!(code.contains("\t\tif !validatePayment(\"1000000000000000000000000\") {\n"));
    assert!(code.contains("\t\t\tenv.PanicStr(\"Contract already initialized\")\n"));
}

#[test]
fn test_private_methods_are_not_exported() {
    let code = generate_single(MESSAGE_BOARD).unwrap();

    assert!(!code.contains("//go:export secret"));
    assert!(!code.contains("state.Secret("));
    // still carried over as ordinary code
    assert!(code.contains("func (b *Board) Secret() string {"));
}

#[test]
fn test_receiver_name_does_not_matter() {
    let code = generate_single(
        r#"package main

// @contract:state
type Wallet struct {
	Balance int
}

// @contract:view
func (self Wallet) GetBalance() int {
	return self.Balance
}
"#,
    )
    .unwrap();

    assert!(code.contains("\t\tresult := state.GetBalance()\n"));
}

#[test]
fn test_output_is_byte_identical_across_runs() {
    let dir = project(&[
        ("main.go", MESSAGE_BOARD),
        ("api/extra.go", "package main\n\nimport \"fmt\"\n\nfunc greet() string {\n\treturn fmt.Sprint(\"hi\")\n}\n"),
        ("zz.go", "package main\n\nconst Version = \"1\"\n"),
    ]);

    let first = generate(dir.path()).unwrap();
    let second = generate(dir.path()).unwrap();
    assert_eq!(first, second);

    let api = first.find("// ===== From: api/extra.go =====").unwrap();
    let main = first.find("// ===== From: main.go =====").unwrap();
    let zz = first.find("// ===== From: zz.go =====").unwrap();
    assert!(api < main && main < zz);
}

#[test]
fn test_no_state() {
    let err = generate_single("package main\n\n// @contract:view\nfunc (s *S) Get() int { return 1 }\n")
        .unwrap_err();
    assert!(matches!(err, GenerateError::NoState));
    assert_eq!(err.to_string(), "no struct with @contract:state found");
}

#[test]
fn test_two_states() {
    let dir = project(&[
        ("a.go", "package main\n\n// @contract:state\ntype A struct{}\n\n// @contract:view\nfunc (a *A) Get() int { return 1 }\n"),
        ("b.go", "package main\n\n// @contract:state\ntype B struct{}\n"),
    ]);
    let err = generate(dir.path()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "found 2 structs with @contract:state, only 1 is allowed (A, B)"
    );
}

#[test]
fn test_two_initializers() {
    let err = generate_single(
        r#"package main

// @contract:state
type S struct{}

// @contract:init
func (s *S) First() {}

// @contract:init
func (s *S) Second() {}
"#,
    )
    .unwrap_err();

    assert!(matches!(err, GenerateError::AmbiguousInit { .. }));
    assert!(err.to_string().contains("(First, Second)"));
}

#[test]
fn test_forbidden_combinations() {
    let cases = [
        ("view", "mutating", "@contract:view and @contract:mutating"),
        ("view", "payable", "@contract:view and @contract:payable"),
        ("init", "view", "@contract:init and @contract:view"),
    ];

    for (first, second, expected) in cases {
        let source = format!(
            "package main\n\n// @contract:state\ntype S struct{{}}\n\n// @contract:{}\n// @contract:{}\nfunc (s *S) Broken() {{}}\n",
            first, second
        );
        let err = generate_single(&source).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("method 'Broken' cannot be both {}", expected)
        );
    }
}

#[test]
fn test_nothing_to_export() {
    let err = generate_single("package main\n\n// @contract:state\ntype S struct{}\n").unwrap_err();
    assert!(matches!(err, GenerateError::NothingToExport));
}

#[test]
fn test_state_in_grouped_type_declaration() {
    let code = generate_single(
        r#"package main

type (
	// Config is not state.
	Config struct {
		Limit int
	}

	// @contract:state
	Store struct {
		Items []string
	}
)

// @contract:view
func (s *Store) Size() int {
	return len(s.Items)
}
"#,
    )
    .unwrap();

    assert!(code.contains("func getState() *Store {"));
}

#[test]
fn test_non_main_packages_are_skipped() {
    let dir = project(&[
        ("main.go", MESSAGE_BOARD),
        ("lib/lib.go", "package lib\n\n// @contract:state\ntype Other struct{}\n"),
    ]);

    let code = generate(dir.path()).unwrap();
    assert!(!code.contains("From: lib/lib.go"));
}

#[test]
fn test_promise_callback() {
    let code = generate_single(
        r#"package main

import "github.com/vlmoon99/near-sdk-go/promise"

// @contract:state
type S struct{}

// @contract:promise_callback
func (s *S) OnFetched(result *promise.PromiseResult, label string) string {
	return label
}
"#,
    )
    .unwrap();

    assert!(code.contains("\t\"github.com/vlmoon99/near-sdk-go/promise\"\n"));
    assert!(code.contains("\t\t// Promise Callback Wrapper (Single Result)\n"));
    assert!(code.contains("\t\t\tresult := state.OnFetched(promRes, params.Label)\n"));
    assert!(code.contains("\t\t})\n\t\treturn nil\n\t})\n}\n"));
}

#[test]
fn test_parse_failure_is_recovered() {
    let dir = project(&[
        ("main.go", MESSAGE_BOARD),
        ("broken.go", "package main\n\nfunc (b *Board) Broken( {\n"),
    ]);

    let generation = Generator::new(GenerateOptions::default())
        .run(dir.path())
        .unwrap();

    assert_eq!(generation.diagnostics.len(), 1);
    assert_eq!(generation.diagnostics[0].kind, DiagnosticKind::ParseError);
    assert_eq!(generation.files_scanned, 2);
    assert!(!generation.source.contains("broken.go"));
}

#[test]
fn test_missing_root_is_a_scan_error() {
    let dir = TempDir::new().unwrap();
    let err = generate(&dir.path().join("missing")).unwrap_err();

    assert!(matches!(err, GenerateError::Scan(_)));
    assert!(!err.is_validation());
}

#[test]
fn test_generated_file_is_not_rescanned() {
    let dir = project(&[("main.go", MESSAGE_BOARD)]);
    let first = generate(dir.path()).unwrap();
    fs::write(dir.path().join("generated_build.go"), &first).unwrap();

    assert_eq!(generate(dir.path()).unwrap(), first);
}

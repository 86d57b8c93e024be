use std::{cell::RefCell, fs, io::Write, rc::Rc};

use loxide::{
    error::{InterpretError, LexErrorKind, ParseError, RuntimeError},
    interpreter::lexer::scan,
    Session,
};
use walkdir::WalkDir;

/// An output sink that stays readable after the session consumed the writer
/// half.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_capture(source: &str) -> (Result<(), InterpretError>, String) {
    let buffer = SharedBuffer::default();
    let mut session = Session::with_output(Box::new(buffer.clone()));

    let result = session.run(source);
    let output = String::from_utf8(buffer.0.borrow().clone()).expect("output was not UTF-8");
    (result, output)
}

fn assert_prints(source: &str, expected: &str) {
    let (result, output) = run_capture(source);
    if let Err(e) = result {
        panic!("Script failed:\n{source}\nError: {e}");
    }
    assert_eq!(output, expected, "wrong output for:\n{source}");
}

fn runtime_error(source: &str) -> RuntimeError {
    match run_capture(source).0 {
        Err(InterpretError::Runtime(e)) => e,
        other => panic!("Expected a runtime error for:\n{source}\nGot: {other:?}"),
    }
}

fn syntax_errors(source: &str) -> loxide::error::Diagnostics {
    match run_capture(source).0 {
        Err(InterpretError::Syntax(diagnostics)) => diagnostics,
        other => panic!("Expected a syntax error for:\n{source}\nGot: {other:?}"),
    }
}

#[test]
fn operator_precedence_and_grouping() {
    assert_prints("print 1 + 2 * 3;", "7\n");
    assert_prints("print (1 + 2) * 3;", "9\n");
    assert_prints("print 10 - 4 / 2;", "8\n");
    assert_prints("print -2 * 3;", "-6\n");
    assert_prints("print 1 + 2 < 4 == true;", "true\n");
    assert_prints("print !!3;", "true\n");
}

#[test]
fn numbers_print_without_trailing_zero() {
    assert_prints("print 3.0;", "3\n");
    assert_prints("print 10 / 4;", "2.5\n");
    assert_prints("print 0.5 + 0.25;", "0.75\n");
    assert_prints("print -0.0 - 7;", "-7\n");
}

#[test]
fn string_concatenation() {
    assert_prints("print \"foo\" + \"bar\";", "foobar\n");
    assert_prints("print \"\" + \"x\" + \"\";", "x\n");
    assert!(matches!(runtime_error("print \"a\" + 1;"),
                     RuntimeError::OperandsMustBeNumbersOrStrings { line: 1 }));
}

#[test]
fn equality_is_strict() {
    assert_prints("print 1 == 1;", "true\n");
    assert_prints("print \"1\" == 1;", "false\n");
    assert_prints("print nil == false;", "false\n");
    assert_prints("print nil == nil;", "true\n");
    assert_prints("print \"a\" != \"b\";", "true\n");
}

#[test]
fn zero_and_nil_are_falsy() {
    assert_prints("if (0) print \"yes\"; else print \"no\";", "no\n");
    assert_prints("if (nil) print \"yes\"; else print \"no\";", "no\n");
    assert_prints("if (\"\") print \"yes\"; else print \"no\";", "yes\n");
    assert_prints("print !0;", "true\n");
    assert_prints("print !nil;", "true\n");
}

#[test]
fn logical_operators_short_circuit_and_yield_operands() {
    assert_prints("print nil or \"fallback\";", "fallback\n");
    assert_prints("print 1 and 2;", "2\n");
    assert_prints("print false or false;", "false\n");
    assert_prints("var a = \"before\"; var unused = false and (a = \"after\"); print a;",
                  "before\n");
    assert_prints("var b = \"before\"; var unused = true or (b = \"after\"); print b;",
                  "before\n");
}

#[test]
fn variables_shadow_and_assignment_yields_the_value() {
    assert_prints("var x = 1; { var x = 2; print x; } print x;", "2\n1\n");
    assert_prints("var a = 1; print a = 3; print a;", "3\n3\n");
    assert_prints("var i; print i;", "nil\n");
    // Redefinition in the same scope replaces the binding.
    assert_prints("var x = 1; var x = 2; print x;", "2\n");
}

#[test]
fn assignment_writes_through_to_the_defining_scope() {
    assert_prints("var x = 1; { x = 2; } print x;", "2\n");
    assert!(matches!(runtime_error("missing = 1;"),
                     RuntimeError::UndefinedVariable { line: 1, .. }));
    assert!(matches!(runtime_error("print missing;"),
                     RuntimeError::UndefinedVariable { line: 1, .. }));
}

#[test]
fn control_flow_statements() {
    assert_prints("var i = 0; var total = 0; while (i < 5) { i = i + 1; total = total + i; } print total;",
                  "15\n");
    assert_prints("for (var i = 0; i < 3; i = i + 1) print i;", "0\n1\n2\n");
    assert_prints("var n = 0; for (; n < 2;) n = n + 1; print n;", "2\n");
    assert_prints("if (1 < 2) print \"then\"; else print \"else\";", "then\n");
}

#[test]
fn functions_and_recursion() {
    assert_prints("fun fib(n) { if (n < 2) return n; return fib(n - 2) + fib(n - 1); } print fib(10);",
                  "55\n");
    assert_prints("fun id(x) { return x; } var alias = id; print alias(7);", "7\n");
    assert_prints("fun f() {} print f;", "<fn f>\n");
}

#[test]
fn return_and_fallthrough_yield_nil() {
    assert_prints("fun f() { return; } print f();", "nil\n");
    assert_prints("fun g() { print \"side\"; } print g();", "side\nnil\n");
    assert!(matches!(runtime_error("return 1;"),
                     RuntimeError::ReturnOutsideFunction { line: 1 }));
    assert!(matches!(runtime_error("while (true) return;"),
                     RuntimeError::ReturnOutsideFunction { line: 1 }));
}

#[test]
fn closures_capture_their_defining_scope() {
    let source = r#"
        fun make_counter() {
            var count = 0;
            fun increment() {
                count = count + 1;
                return count;
            }
            return increment;
        }
        var first = make_counter();
        var second = make_counter();
        print first();
        print first();
        print second();
    "#;
    assert_prints(source, "1\n2\n1\n");
}

#[test]
fn call_errors() {
    assert!(matches!(runtime_error("fun greet() { print \"hi\"; } greet(1);"),
                     RuntimeError::ArityMismatch { expected: 0,
                                                   found: 1,
                                                   .. }));
    assert!(matches!(runtime_error("fun pair(a, b) { return a + b; } print pair(1);"),
                     RuntimeError::ArityMismatch { expected: 2,
                                                   found: 1,
                                                   .. }));
    assert!(matches!(runtime_error("\"nope\"();"), RuntimeError::NotCallable { line: 1 }));
    assert!(matches!(runtime_error("nil(1, 2);"), RuntimeError::NotCallable { line: 1 }));
}

#[test]
fn native_functions_are_installed() {
    assert_prints("print clock() >= 0;", "true\n");
    assert_prints("print str(2.5) + \"!\";", "2.5!\n");
    assert_prints("print str(nil);", "nil\n");
    assert_prints("print clock;", "<native fn>\n");
    assert!(matches!(runtime_error("clock(1);"),
                     RuntimeError::ArityMismatch { expected: 0,
                                                   found: 1,
                                                   .. }));
}

#[test]
fn type_errors_name_operator_and_line() {
    assert!(matches!(runtime_error("print -\"x\";"),
                     RuntimeError::OperandMustBeNumber { line: 1, .. }));
    assert!(matches!(runtime_error("print 1 < \"a\";"),
                     RuntimeError::OperandsMustBeNumbers { line: 1, .. }));
    assert_eq!(runtime_error("var a = 1;\nprint a + \"x\";").to_string(),
               "Error on line 2: Operands must be two numbers or two strings.");
    assert_eq!(runtime_error("print nope;").to_string(),
               "Error on line 1: Undefined variable 'nope'.");
}

#[test]
fn parse_recovery_reports_every_error_and_runs_valid_statements() {
    let (result, output) = run_capture("var = 1;\nprint \"still here\";\nprint (1 + ;\n");
    let Err(InterpretError::Syntax(diagnostics)) = result else {
        panic!("Expected syntax errors, got {result:?}");
    };

    assert_eq!(diagnostics.parse.len(), 2);
    assert!(diagnostics.lex.is_empty());
    assert!(diagnostics.runtime.is_none());
    assert_eq!(output, "still here\n");
}

#[test]
fn runtime_errors_from_recovered_programs_are_still_reported() {
    let diagnostics = syntax_errors("var = 1;\nprint missing;");
    assert_eq!(diagnostics.parse.len(), 1);
    assert!(matches!(diagnostics.runtime, Some(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn invalid_assignment_targets_are_rejected() {
    let diagnostics = syntax_errors("1 + 2 = 3;");
    assert!(matches!(diagnostics.parse.as_slice(),
                     [ParseError::InvalidAssignmentTarget { line: 1 }]));

    let diagnostics = syntax_errors("var a = 1; (a) = 3;");
    assert!(matches!(diagnostics.parse.as_slice(),
                     [ParseError::InvalidAssignmentTarget { line: 1 }]));
}

#[test]
fn argument_and_parameter_caps_are_reported_but_not_fatal() {
    let params = (0..256).map(|i| format!("p{i}")).collect::<Vec<_>>().join(", ");
    let args = vec!["1"; 256].join(", ");
    let source = format!("fun wide({params}) {{ return p0 + p255; }}\nprint wide({args});\nprint \"done\";");

    let (result, output) = run_capture(&source);
    let Err(InterpretError::Syntax(diagnostics)) = result else {
        panic!("Expected the caps to be reported, got {result:?}");
    };

    // One report per oversized list; the declaration and the call both
    // parsed, so the program still ran to completion.
    assert!(matches!(diagnostics.parse.as_slice(),
                     [ParseError::TooManyParameters { line: 1 },
                      ParseError::TooManyArguments { line: 2 }]));
    assert!(diagnostics.lex.is_empty());
    assert!(diagnostics.runtime.is_none());
    assert_eq!(output, "2\ndone\n");
}

#[test]
fn lexemes_rescan_to_the_same_tokens() {
    let source = "( ) { } , . - + ; / * ! != = == > >= < <= \
                  and or var fun if else while for return print \
                  class super this true false nil 12 3.5 \"text\" name";

    let (tokens, diagnostics) = scan(source);
    assert!(diagnostics.is_empty());
    assert!(!tokens.is_empty());

    let rebuilt = tokens.iter()
                        .map(|(token, _)| token.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");

    let (rescanned, diagnostics) = scan(&rebuilt);
    assert!(diagnostics.is_empty());
    assert_eq!(tokens, rescanned);
}

#[test]
fn trailing_tokens_are_a_syntax_error() {
    let (result, output) = run_capture("print 1; )");
    assert!(matches!(result, Err(InterpretError::Syntax(_))));
    assert_eq!(output, "1\n");
}

#[test]
fn lexical_errors_are_reported_with_their_line() {
    let diagnostics = syntax_errors("var x = 1;\n@\nprint x;");
    assert!(matches!(diagnostics.lex.as_slice(),
                     [loxide::error::LexError { kind: LexErrorKind::UnexpectedCharacter,
                                                line: 2,
                                                .. }]));

    let diagnostics = syntax_errors("print 1.2.3;");
    assert!(diagnostics.lex
                       .iter()
                       .any(|e| e.kind == LexErrorKind::MalformedNumber));

    let diagnostics = syntax_errors("print \"abc;");
    assert!(diagnostics.lex
                       .iter()
                       .any(|e| e.kind == LexErrorKind::UnterminatedString));
}

#[test]
fn comments_and_multiline_strings_track_lines() {
    assert_prints("// a comment\nprint 1; // trailing\nprint 2;", "1\n2\n");
    assert_prints("print \"one\ntwo\";", "one\ntwo\n");
    // The error after the two-line string must land on line 3.
    assert!(matches!(runtime_error("print \"one\ntwo\";\nprint missing;"),
                     RuntimeError::UndefinedVariable { line: 3, .. }));
}

#[test]
fn session_state_persists_across_runs() {
    let buffer = SharedBuffer::default();
    let mut session = Session::with_output(Box::new(buffer.clone()));

    assert!(session.run("var x = 1;").is_ok());
    assert!(session.run("fun double(n) { return 2 * n; }").is_ok());
    assert!(session.run("print double(x + 20);").is_ok());

    // A failed line leaves the session usable and its state intact.
    assert!(session.run("print missing;").is_err());
    assert!(session.run("var x = 10; print x;").is_ok());

    // A runtime error inside a block still restores the outer scope.
    assert!(session.run("{ var shadow = 1; print missing; }").is_err());
    assert!(session.run("print x;").is_ok());

    let output = String::from_utf8(buffer.0.borrow().clone()).expect("output was not UTF-8");
    assert_eq!(output, "42\n10\n10\n");
}

/// The expected output of a script: one line per `// expect:` comment, in
/// source order.
fn expected_output(source: &str) -> String {
    source.lines()
          .filter_map(|line| line.split("// expect: ").nth(1))
          .map(|expected| format!("{expected}\n"))
          .collect()
}

#[test]
fn script_corpus_matches_expectations() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "lox")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let (result, output) = run_capture(&source);
        if let Err(e) = result {
            panic!("Script {path:?} failed:\n{e}");
        }
        assert_eq!(output, expected_output(&source), "output mismatch for {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

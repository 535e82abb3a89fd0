use std::fs;

use brainrot::{
    ast::{Expr, VarKind},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::{
            core::Context,
            function::{
                print::{yappin, yapping},
                process::{chill, ragequit},
            },
        },
        format::FormatArg,
        host::{CaptureHost, Stream},
        settings::Settings,
        value::{core::Value, number::{NumKind, Number}},
    },
    parse_source, run_source,
};
use walkdir::WalkDir;

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "brainrot"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let mut host = CaptureHost::default();
        if let Err(e) = run_source(&source, &mut host, Settings::default()) {
            panic!("Script {path:?} failed:\n{source}\nError: {e:?}");
        }
        assert_eq!(program_output(&host), expected, "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// Everything written to stdout by `yapping` and `yappin`, in order.
fn program_output(host: &CaptureHost) -> String {
    host.writes
        .iter()
        .filter(|w| w.stream != Stream::Error)
        .map(|w| w.text.as_str())
        .collect()
}

fn run(src: &str) -> (CaptureHost, Result<(), Error>) {
    let mut host = CaptureHost::default();
    let result = run_source(src, &mut host, Settings::default());
    (host, result)
}

fn assert_output(src: &str, expected: &str) -> CaptureHost {
    let (host, result) = run(src);
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    assert_eq!(program_output(&host), expected);
    host
}

fn assert_failure(src: &str) -> Error {
    match run(src).1 {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

/// Runs a program and returns the final value of every listed variable.
fn values_after(src: &str, names: &[&str]) -> Vec<Value> {
    let program = parse_source(src).unwrap_or_else(|e| panic!("Parse failed: {e}"));
    let mut host = CaptureHost::default();
    let mut ctx = Context::new(&mut host, Settings::default());
    if let Err(e) = ctx.run(&program) {
        panic!("Script failed: {e}");
    }
    names.iter()
         .map(|name| {
             ctx.symbols
                .lookup(name)
                .unwrap_or_else(|| panic!("variable {name} was never assigned"))
                .value
         })
         .collect()
}

#[test]
fn for_loop_writes_each_iteration_in_order() {
    let host = assert_output("int i;\nfor (i = 0; i < 3; i = i + 1) yapping(\"%d\\n\", i);",
                             "0\n1\n2\n");
    let args: Vec<_> = host.writes_to(Stream::Stdout).map(|w| w.arg.clone()).collect();
    assert_eq!(args,
               vec![Some(FormatArg::Int(0)), Some(FormatArg::Int(1)), Some(FormatArg::Int(2))]);
}

#[test]
fn switch_falls_through_until_break_and_never_reaches_trailing_default() {
    let host = assert_output(r#"
        int x = 2;
        switch (x) {
            case 1:
                yapping("one\n");
            case 2:
                yapping("two\n");
            case 3:
                yapping("three\n");
                break;
            default:
                yapping("default\n");
        }
    "#,
                             "two\nthree\n");
    assert_eq!(host.writes_to(Stream::Stdout).count(), 2);
}

#[test]
fn switch_runs_default_whenever_it_is_reached() {
    assert_output(r#"
        int x = 3;
        switch (x) {
            case 1:
                yapping("one\n");
            default:
                yapping("default\n");
            case 3:
                yapping("three\n");
        }
    "#,
                  "default\nthree\n");
    assert_output(r#"
        switch (7) {
            case 1:
                yapping("one\n");
                break;
            case 2:
                yapping("two\n");
        }
        yapping("done\n");
    "#,
                  "done\n");
}

#[test]
fn integer_division_by_zero_is_reported_and_yields_zero() {
    let host = assert_output(r#"
int a = 10;
int b = 0;
int c = a / b;
int d = a % b;
yapping("%d\n", c + d + 1);
"#,
                             "1\n");
    assert_eq!(host.diagnostics,
               vec!["Error on line 4: Division by zero.".to_string(),
                    "Error on line 5: Division by zero.".to_string()]);
}

#[test]
fn floating_division_by_zero_saturates_or_is_nan() {
    let values = values_after("double x = 1.0 / 0.0;\ndouble y = -2.0 / 0.0;\ndouble z = 0.0 / \
                               0.0;\nfloat w = 3.0f / 0.0f;",
                              &["x", "y", "z", "w"]);
    assert_eq!(values[0], Value::Double(f64::MAX));
    assert_eq!(values[1], Value::Double(-f64::MAX));
    assert!(matches!(values[2], Value::Double(v) if v.is_nan()));
    assert_eq!(values[3], Value::Float(f32::MAX));
}

#[test]
fn increments_update_the_variable_before_the_expression_continues() {
    let values = values_after(r"
        int i = 5;
        int a = i++;
        int b = ++i;
        int c = i--;
        int d = --i;
        int e = i++ + i;
    ",
                              &["a", "b", "c", "d", "e", "i"]);
    assert_eq!(values,
               vec![Value::Int(5),
                    Value::Int(7),
                    Value::Int(7),
                    Value::Int(5),
                    Value::Int(11),
                    Value::Int(6)]);
}

#[test]
fn increment_in_a_double_expression_keeps_the_variable_int() {
    let src = "int i = 1;\ndouble x = i++ + 0.5;";
    let program = parse_source(src).unwrap();
    let mut host = CaptureHost::default();
    let mut ctx = Context::new(&mut host, Settings::default());
    ctx.run(&program).unwrap();

    let i = ctx.symbols.lookup("i").unwrap();
    assert_eq!((i.kind, i.value), (VarKind::Int, Value::Int(2)));
    assert_eq!(ctx.symbols.lookup("x").unwrap().value, Value::Double(1.5));
}

#[test]
fn incrementing_a_non_variable_is_fatal() {
    let e = assert_failure("int x = 5++;");
    assert!(matches!(e, Error::Runtime(RuntimeError::TypeMisuse { line: 1, .. })));
}

#[test]
fn assigning_a_double_changes_the_recorded_kind() {
    let program = parse_source("int x = 1;\nx = 2.5;").unwrap();
    let mut host = CaptureHost::default();
    let mut ctx = Context::new(&mut host, Settings::default());
    ctx.run(&program).unwrap();

    let x = ctx.symbols.lookup("x").unwrap();
    assert_eq!(x.kind, VarKind::Double);
    assert_eq!(x.value, Value::Double(2.5));
}

#[test]
fn narrowing_to_int_saturates_and_is_reported() {
    let (host, result) = run("int x = 3000000000.0;\nint y = 3.0e10f;\nprint(x);\nprint(y);");
    assert!(result.is_ok());
    assert_eq!(host.stdout(), format!("{0}\n{0}\n", i32::MAX));
    assert_eq!(host.diagnostics.len(), 2);
    assert!(host.diagnostics[0].contains("Float to int conversion overflow"));
}

#[test]
fn break_exits_only_the_innermost_loop() {
    assert_output(r#"
        int total = 0;
        int i;
        int j;
        for (i = 0; i < 3; i++) {
            for (j = 0; j < 10; j++) {
                if (j == 2) break;
                total += 1;
            }
        }
        yapping("%d\n", total);
    "#,
                  "6\n");
    assert_output("int n = 0;\nwhile (1) {\n    n++;\n    if (n >= 4) break;\n}\nprint(n);",
                  "4\n");
}

#[test]
fn break_outside_of_loops_is_fatal() {
    let e = assert_failure("int x = 1;\nbreak;");
    assert!(matches!(e, Error::Runtime(RuntimeError::StrayBreak { line: 2 })));
}

#[test]
fn full_symbol_table_is_reported_and_execution_continues() {
    let mut host = CaptureHost::default();
    let settings = Settings::default().with_symbol_capacity(2);
    let result = run_source("int a = 1;\nint b = 2;\nint c = 3;\nyapping(\"%d\\n\", a + b);",
                            &mut host,
                            settings);
    assert!(result.is_ok());
    assert_eq!(host.stdout(), "3\n");
    assert_eq!(host.diagnostics.len(), 1);
    assert!(host.diagnostics[0].contains("symbol table is full"));
}

#[test]
fn undefined_variable_is_fatal_in_integer_context() {
    let e = assert_failure("int y = x + 1;");
    assert!(matches!(e,
                     Error::Runtime(RuntimeError::UndefinedSymbol { ref name, line: 1 }) if name == "x"));
}

#[test]
fn undefined_variable_reads_as_zero_in_double_context() {
    let (host, result) = run("double y = x + 1.5;\nyapping(\"%.1f\\n\", y);");
    assert!(result.is_ok());
    assert_eq!(host.stdout(), "1.5\n");
    assert_eq!(host.diagnostics, vec!["Error on line 1: Undefined variable 'x'.".to_string()]);
}

#[test]
fn identifier_resolution_is_cached_per_node() {
    let (host, result) = run(r"
        int i;
        double seen = 0.0;
        for (i = 0; i < 2; i++) {
            seen = w + 0.5;
            double w = 10.0;
        }
    ");
    assert!(result.is_ok());
    // The node reading `w` first ran before `w` existed and stays unresolved.
    assert_eq!(host.diagnostics.len(), 2);
}

#[test]
fn yapping_routes_arguments_by_kind() {
    assert_output("yapping(\"hello\\n\");", "hello\n");
    assert_output("bool flag = true;\nyapping(\"flag: %b\\n\", flag);", "flag: W\n");
    assert_output("yapping(\"%b\\n\", 0);", "L\n");
    assert_output("float f = 1.5f;\nyapping(\"%.2f\\n\", f);", "1.50\n");
    assert_output("double d = 2.25;\nyapping(\"%.3f\\n\", d);", "2.250\n");

    let host = assert_output("float f = 1.5f;\nyapping(\"%f\\n\", f);", "1.500000\n");
    let write = host.writes_to(Stream::Stdout).next().unwrap();
    assert_eq!(write.arg, Some(FormatArg::Float(1.5)));
}

#[test]
fn yapping_forwards_unsigned_values() {
    let host = assert_output("unsigned int u = 7;\nyapping(\"%u\\n\", u);", "7\n");
    assert_eq!(host.writes[0].arg, Some(FormatArg::Unsigned(7)));

    let host = assert_output("unsigned int u = 7;\nyapping(\"%lu\\n\", u);", "7\n");
    assert_eq!(host.writes[0].arg, Some(FormatArg::UnsignedLong(7)));

    let host = assert_output("unsigned int u = 7;\nyapping(\"value %d\\n\", u);", "7");
    assert_eq!(host.writes[0].format, "%u");
}

#[test]
fn yapping_with_a_non_literal_format_is_skipped() {
    let (host, result) = run("int x = 1;\nyapping(x, 2);\nyapping(\"ok\\n\");");
    assert!(result.is_ok());
    assert_eq!(host.stdout(), "ok\n");
    assert_eq!(host.diagnostics.len(), 1);

    let e = assert_failure("yapping();");
    assert!(matches!(e, Error::Runtime(RuntimeError::MalformedCall { .. })));
}

#[test]
fn yappin_prints_booleans_as_win_or_loss() {
    let host = assert_output("bool b = false;\nyappin(\"%d\\n\", b);", "0\n");
    assert_eq!(host.writes_to(Stream::Alternate).count(), 1);

    assert_output("yappin(\"result: %s\\n\", true);", "W");
    assert_output("yappin(\"%d\\n\", 41 + 1);", "42\n");

    let e = assert_failure("yappin(5);");
    assert!(matches!(e, Error::Runtime(RuntimeError::MalformedCall { line: 1, .. })));
}

#[test]
fn baka_writes_a_newline_to_the_error_stream() {
    let (host, result) = run("baka();\nbaka(\"ignored %d\", 1);");
    assert!(result.is_ok());
    assert_eq!(host.text_of(Stream::Error), "\n");
}

#[test]
fn ragequit_terminates_with_its_exit_code() {
    let (host, result) = run("yapping(\"before\\n\");\nragequit(3);\nyapping(\"after\\n\");");
    let e = result.unwrap_err();
    assert_eq!(e.exit_code(), Some(3));
    assert_eq!(host.exit_codes, vec![3]);
    assert_eq!(host.stdout(), "before\n");

    let e = assert_failure("int code = 1;\nragequit(code);");
    assert!(matches!(e, Error::Runtime(RuntimeError::MalformedCall { line: 2, .. })));
}

#[test]
fn chill_accepts_literals_and_unsigned_values() {
    let (host, result) = run("chill(2);\nunsigned int s = 1;\nchill(s);");
    assert!(result.is_ok());
    assert_eq!(host.sleeps, vec![2, 1]);

    let e = assert_failure("int s = 1;\nchill(s);");
    assert!(matches!(e, Error::Runtime(RuntimeError::MalformedCall { .. })));
    assert_failure("chill(-1);");
}

#[test]
fn sizeof_reports_storage_sizes() {
    assert_output(r"
        double d = 1.0;
        char c = 'a';
        bool b = true;
        float f = 1.0f;
        unsigned int u = 3;
        print(sizeof(d) + sizeof(c) + sizeof(b) + sizeof(f) + sizeof(u));
    ",
                  "18\n");

    let (host, result) = run("print(sizeof(missing));");
    assert!(result.is_ok());
    assert_eq!(host.stdout(), "0\n");
    assert_eq!(host.diagnostics.len(), 1);
}

#[test]
fn unsigned_declarations_use_unsigned_modulo() {
    assert_output("unsigned int r = -7 % 5;\nint s = -7 % 5;\nprint(r);\nprint(s);",
                  "4\n-2\n");
}

#[test]
fn floating_comparisons_use_a_tolerance() {
    assert_output("double a = 0.1 + 0.2;\nif (a == 0.3) print(1); else print(0);", "1\n");
    assert_output("float f = 0.1f + 0.2f;\nif (f != 0.3f) print(1); else print(0);", "0\n");
    assert_output("if (1.0 < 1.0) print(1); else print(0);", "0\n");
}

#[test]
fn logical_operators_evaluate_both_operands() {
    assert_output("int i = 0;\nint r = 0 && i++;\nprint(i);\nprint(r);", "1\n0\n");
    assert_output("int r = 0.5 || 0;\nprint(r);", "1\n");
}

#[test]
fn compound_assignments() {
    assert_output("int x = 2;\nx += 3;\nx *= 4;\nx -= 5;\nx /= 3;\nx %= 4;\nprint(x);",
                  "1\n");
}

#[test]
fn chars_and_bools_keep_their_kind() {
    let program = parse_source("char c = 'a';\nbool b = true;\nint n = c + 1;").unwrap();
    let mut host = CaptureHost::default();
    let mut ctx = Context::new(&mut host, Settings::default());
    ctx.run(&program).unwrap();

    assert_eq!(ctx.symbols.lookup("c").unwrap().kind, VarKind::Char);
    assert_eq!(ctx.symbols.lookup("b").unwrap().value, Value::Bool(true));
    assert_eq!(ctx.symbols.lookup("n").unwrap().value, Value::Int(98));
}

#[test]
fn strings_and_calls_in_arithmetic_are_reported() {
    let (host, result) = run("int x = \"hi\" + 1;\nprint(x);");
    assert!(result.is_ok());
    assert_eq!(host.stdout(), "1\n");
    assert_eq!(host.diagnostics.len(), 1);

    let (host, result) = run("foo(1);");
    assert!(result.is_ok());
    assert!(host.diagnostics[0].contains("Unknown function 'foo'"));
}

#[test]
fn reading_a_double_in_integer_context_truncates() {
    let mut host = CaptureHost::default();
    let mut ctx = Context::new(&mut host, Settings::default());
    let value = ctx.eval_in(&Expr::DoubleLiteral { value: 2.9, line: 4 }, NumKind::Int);
    assert_eq!(value.unwrap(), Number::Int(2));
    drop(ctx);
    assert_eq!(host.diagnostics.len(), 1);
    assert!(host.diagnostics[0].starts_with("Error on line 4:"));
}

#[test]
fn print_and_eprint() {
    let (host, result) = run("print(\"hi\");\nprint(6 * 7);\neprint(\"oops\");");
    assert!(result.is_ok());
    assert_eq!(host.stdout(), "hi\n42\n");
    assert_eq!(host.text_of(Stream::Error), "oops\n");
}

#[test]
fn line_offset_applies_to_every_reported_line() {
    let mut host = CaptureHost::default();
    let settings = Settings::default().with_line_offset(1);
    let result = run_source("int a = 0;\nint b = 5 / a;\n\nint c = missing;", &mut host, settings);

    assert_eq!(host.diagnostics, vec!["Error on line 1: Division by zero.".to_string()]);
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::UndefinedSymbol { line: 3, .. }))));
}

#[test]
fn malformed_programs_fail_to_parse() {
    assert!(matches!(assert_failure("int x = ;"), Error::Parse(_)));
    assert!(matches!(assert_failure("int x = 3000000000;"), Error::Parse(_)));
    assert!(matches!(assert_failure("int x = 1 $ 2;"), Error::Parse(_)));
    assert!(matches!(assert_failure("if (1) {"), Error::Parse(_)));
    assert!(matches!(assert_failure("(x) = 3;"), Error::Parse(_)));
}

#[test]
fn comments_and_blocks() {
    assert_output(r"
        // line comment
        int x = 1; /* block
                      comment */
        {
            x = x + 1;
            { x = x * 10; }
        }
        print(x);
    ",
                  "20\n");
}

#[test]
fn builtins_called_without_arguments_are_malformed() {
    type Handler = fn(&mut Context<'_>, &[Expr], usize) -> Result<(), RuntimeError>;
    let handlers: [Handler; 4] = [yapping, yappin, ragequit, chill];
    for handler in handlers {
        let mut host = CaptureHost::default();
        let mut ctx = Context::new(&mut host, Settings::default());
        let result = handler(&mut ctx, &[], 9);
        assert!(matches!(result, Err(RuntimeError::MalformedCall { line: 9, .. })));
        drop(ctx);
        assert!(host.writes.is_empty());
        assert!(host.exit_codes.is_empty());
    }
}

#[test]
fn block_comments_may_end_with_extra_stars() {
    assert_output("int x = 1; /* note **/ print(x);", "1\n");
    assert_output("/***/ int y = 2;\n/**\n * doc\n **/\nprint(y);", "2\n");

    let e = assert_failure("/* a ** b **/\n\nint z = missing;");
    assert!(matches!(e, Error::Runtime(RuntimeError::UndefinedSymbol { line: 3, .. })));
}

#[test]
fn for_without_a_condition_runs_until_break() {
    assert_output(r"
        int n = 0;
        for (;;) {
            n++;
            if (n == 3) break;
        }
        print(n);
        int i;
        for (i = 0; ; i++) {
            if (i > 0) break;
        }
        print(i);
    ",
                  "3\n1\n");
}

#[test]
fn dividing_by_a_subnormal_saturates() {
    let values = values_after("double x = 2.0 / 1e-310;\ndouble y = -2.0 / 1e-310;\nfloat f = 1.0f / \
                               1e-40f;",
                              &["x", "y", "f"]);
    assert_eq!(values, vec![Value::Double(f64::MAX), Value::Double(-f64::MAX), Value::Float(f32::MAX)]);
}

#[test]
fn symbols_are_listed_in_first_assignment_order() {
    let program = parse_source("int b = 1;\ndouble a = 2.0;\nb = 3;\nbool c = true;").unwrap();
    let mut host = CaptureHost::default();
    let mut ctx = Context::new(&mut host, Settings::default());
    ctx.run(&program).unwrap();

    let names: Vec<_> = ctx.symbols.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["b", "a", "c"]);
    assert_eq!(ctx.symbols.lookup("b").unwrap().value, Value::Int(3));
}

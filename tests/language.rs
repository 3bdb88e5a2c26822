use kirlang::{
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{
        console::BufferConsole, program::Program, source::StrSource, value::Value,
    },
    run_source,
};
use pretty_assertions::assert_eq;

fn assert_success(src: &str) {
    if let Err(e) = run_source(src, &mut BufferConsole::new()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match run_source(src, &mut BufferConsole::new()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

/// Runs `src` with `input` queued on the console and returns the output.
fn output_with_input(src: &str, input: &[&str]) -> String {
    let mut console = BufferConsole::with_input(input.iter().copied());
    if let Err(e) = run_source(src, &mut console) {
        panic!("Script failed: {e}");
    }
    console.into_output()
}

fn output(src: &str) -> String {
    output_with_input(src, &[])
}

/// The value of the last statement in `src`.
fn last_value(src: &str) -> Value {
    let mut console = BufferConsole::new();
    let mut program = Program::new(StrSource::new(src), &mut console);
    let mut last = None;

    while let Some(value) = program.step()
                                   .unwrap_or_else(|e| panic!("Script failed: {e}"))
    {
        last = Some(value);
    }

    last.expect("script has no statements")
}

#[test]
fn precedence_matches_algebra() {
    assert_eq!(last_value("2 + 3 * 4;"), Value::Number(14.0));
    assert_eq!(last_value("(2 + 3) * 4;"), Value::Number(20.0));
    assert_eq!(last_value("10 / 2 - 3;"), Value::Number(2.0));
    assert_eq!(last_value("1 + 2 * 3 + 4;"), Value::Number(11.0));
}

#[test]
fn operators_of_equal_precedence_group_left() {
    assert_eq!(last_value("20 - 5 - 5;"), Value::Number(10.0));
    assert_eq!(last_value("64 / 4 / 2;"), Value::Number(8.0));
}

#[test]
fn ordering_binds_tighter_than_addition() {
    // `1 + (2 < 3)`, with `true` counting as 1.
    assert_eq!(last_value("1 + 2 < 3;"), Value::Number(2.0));
}

#[test]
fn equality_binds_looser_than_arithmetic() {
    assert_eq!(last_value("2 * 3 == 6;"), Value::Bool(true));
    assert_eq!(last_value("1 + 1 != 2 || 3 > 2 && 1 == 1;"), Value::Bool(true));
}

#[test]
fn unary_minus_negates_a_primary() {
    assert_eq!(last_value("-2 * 3;"), Value::Number(-6.0));
    assert_eq!(last_value("2 * -3;"), Value::Number(-6.0));
    assert_eq!(last_value("цел x = 4; 10 - -x;"), Value::Number(14.0));
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(assert_failure("5 / 0;"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
    assert!(matches!(assert_failure("цел z = 0;\n1 / z;"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 2 })));
}

#[test]
fn logical_operators_do_not_short_circuit() {
    assert!(matches!(assert_failure("false && (5 / 0);"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("true || (5 / 0);"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn array_bounds_are_checked() {
    assert!(matches!(assert_failure("цел a[3]; a[3];"),
                     Error::Runtime(RuntimeError::IndexOutOfBounds { index, len: 3, .. })
                         if index == 3.0));
    assert!(matches!(assert_failure("цел a[3]; a[-1] = 2;"),
                     Error::Runtime(RuntimeError::IndexOutOfBounds { .. })));
    assert_eq!(last_value("цел a[3]; a[0] = 7; a[0];"), Value::Number(7.0));
}

#[test]
fn arrays_start_zeroed_and_truncate_indices() {
    assert_eq!(last_value("цел a[2]; a[1];"), Value::Number(0.0));
    assert_eq!(last_value("цел a[3]; a[1.7] = 5; a[1];"), Value::Number(5.0));
    assert_eq!(last_value("вещ b[2.9]; b[1] = 1; b[1];"), Value::Number(1.0));
}

#[test]
fn print_has_no_implicit_newline() {
    assert_eq!(output("цел x = 5; x = x + 1; вывод x;"), "6.0");
    assert_eq!(output("вывод 1; конецстр; вывод 2.5; конецстр;"), "1.0\n2.5\n");
}

#[test]
fn string_literals_are_written_verbatim() {
    assert_eq!(output(r#"вывод "x = "; вывод 3; "!";"#), "x = 3.0!");
    assert_eq!(output("\"первая\nвторая\";"), "первая\nвторая");
}

#[test]
fn booleans_print_and_count_as_numbers() {
    assert_eq!(output("бул b = 1 < 2; вывод b;"), "true");
    assert_eq!(output("вывод false;"), "false");
    assert_eq!(last_value("true + true;"), Value::Number(2.0));
    assert_eq!(last_value("true == 1;"), Value::Bool(true));
}

#[test]
fn while_loop_returns_last_body_value() {
    assert_eq!(last_value("цел i = 0; нц_пока (i < 3) { i = i + 1; }"),
               Value::Number(3.0));
    assert_eq!(last_value("цел i = 0; нц_пока (i < 3) { i = i + 1; } i;"),
               Value::Number(3.0));
    assert_eq!(last_value("нц_пока (false) { 1; }"), Value::Number(0.0));
}

#[test]
fn if_chooses_one_branch() {
    assert_eq!(output("если (2 > 1) { вывод 1; } иначе { вывод 2; }"), "1.0");
    assert_eq!(output("если (0) { вывод 1; } иначе { вывод 2; }"), "2.0");
    assert_eq!(last_value("если (false) { 1; };"), Value::Number(0.0));
}

#[test]
fn blocks_yield_their_last_statement() {
    assert_eq!(last_value("если (true) { 1; 2; 3; }"), Value::Number(3.0));
    assert_eq!(last_value("если (true) { ;; }"), Value::Number(0.0));
}

#[test]
fn declarations_inside_blocks_are_global() {
    assert_eq!(last_value("если (true) { цел y = 9; } y;"), Value::Number(9.0));
}

#[test]
fn redeclaration_replaces_the_slot() {
    assert_eq!(last_value("цел x = 1; цел x[2]; x[1] = 5; x[1];"),
               Value::Number(5.0));
    assert_eq!(last_value("цел a[2]; цел a = 4; a;"), Value::Number(4.0));
}

#[test]
fn declarations_yield_their_initial_value() {
    assert_eq!(last_value("цел x = 2 * 4;"), Value::Number(8.0));
    assert_eq!(last_value("цел a[5];"), Value::Number(0.0));
}

#[test]
fn undeclared_names_are_errors() {
    assert!(matches!(assert_failure("y = 1;"),
                     Error::Runtime(RuntimeError::UnknownVariable { ref name, line: 1 })
                         if name == "y"));
    assert!(matches!(assert_failure("вывод q;"),
                     Error::Runtime(RuntimeError::UnknownVariable { .. })));
    assert!(matches!(assert_failure("q[0];"),
                     Error::Runtime(RuntimeError::UnknownVariable { .. })));
    assert!(matches!(assert_failure("q[0] = 1;"),
                     Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn arrays_and_scalars_are_not_interchangeable() {
    for src in ["цел a[2]; a;",
                "цел a[2]; a = 1;",
                "цел x = 1; x[0];",
                "цел x = 1; x[0] = 2;",
                "цел a[2]; ввод a;"]
    {
        assert!(matches!(assert_failure(src),
                         Error::Runtime(RuntimeError::TypeError { .. })),
                "{src}");
    }
}

#[test]
fn unit_is_not_a_number() {
    assert!(matches!(assert_failure(r#"1 + "x";"#),
                     Error::Runtime(RuntimeError::TypeError { .. })));
    assert_eq!(last_value(r#""" == "";"#), Value::Bool(true));
    assert_eq!(last_value(r#""" == 0;"#), Value::Bool(false));
}

#[test]
fn input_reads_numbers_into_scalars() {
    assert_eq!(output_with_input("цел x = 0; ввод x; вывод x * 2;", &["  21 "]),
               "42.0");
    assert_eq!(output_with_input("вещ a = 0; вещ b = 0; ввод a; ввод b; вывод a - b;",
                                 &["1.5", "0.5"]),
               "1.0");
}

#[test]
fn bad_input_is_a_format_error() {
    let mut console = BufferConsole::with_input(["пять"]);
    let result = run_source("цел x = 0; ввод x;", &mut console);
    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::InvalidNumber { ref text, .. }))
                         if text == "пять"));

    assert!(matches!(assert_failure("цел x = 0; ввод x;"),
                     Error::Runtime(RuntimeError::EndOfInput { line: 1 })));
    assert!(matches!(assert_failure("ввод x;"),
                     Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn output_before_an_error_is_kept() {
    let mut console = BufferConsole::new();
    let result = run_source("вывод 1;\nвывод 2;\nвывод 1 / 0;\nвывод 3;", &mut console);

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::DivisionByZero { line: 3 }))));
    assert_eq!(console.output(), "1.02.0");
}

#[test]
fn statements_run_before_later_syntax_errors_are_seen() {
    let mut console = BufferConsole::new();
    let result = run_source("вывод 1;\nвывод (2;", &mut console);

    assert!(matches!(result, Err(Error::Parse(ParseError::Expected { line: 2, .. }))));
    assert_eq!(console.output(), "1.0");
}

#[test]
fn syntax_errors_name_what_was_expected() {
    let error = assert_failure("если x { 1; }");
    assert_eq!(error.to_string(),
               "Parse error on line 1: Expected '(', found identifier 'x'.");

    let error = assert_failure("вывод 1 вывод 2;");
    assert_eq!(error.to_string(),
               "Parse error on line 1: Expected ';', found 'вывод'.");

    assert!(matches!(assert_failure("цел x = ;"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(assert_failure("цел a[n];"),
                     Error::Parse(ParseError::Expected { .. })));
    assert!(matches!(assert_failure("бул b[2];"),
                     Error::Parse(ParseError::Expected { .. })));

    let error = assert_failure("цел a[100000000000000000000];");
    assert!(matches!(error, Error::Parse(ParseError::InvalidArraySize { line: 1, .. })));
    assert_eq!(error.to_string(),
               "Parse error on line 1: Invalid array size 1e20.");
}

#[test]
fn arrays_too_large_to_allocate_are_errors() {
    let mut console = BufferConsole::new();
    let result = run_source("вывод 1;\nцел a[9007199254740991];\nвывод 2;", &mut console);

    assert!(matches!(result,
                     Err(Error::Runtime(RuntimeError::ArrayTooLarge { ref name, line: 2, .. }))
                         if name == "a"));
    assert_eq!(console.output(), "1.0");
}

#[test]
fn blocks_require_semicolons_and_a_closing_brace() {
    assert!(matches!(assert_failure("если (true) { 1 }"),
                     Error::Parse(ParseError::Expected { .. })));
    assert!(matches!(assert_failure("нц_пока (true) { 1;"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { line: 1, .. })));
}

#[test]
fn end_of_input_errors_report_the_last_line() {
    let error = assert_failure("цел x = 1;\nесли (x) {\n    вывод x;\n");
    assert_eq!(error.to_string(),
               "Parse error on line 3: Expected '}', found end of input.");

    assert!(matches!(assert_failure("цел x =\n\n"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { line: 2, .. })));
}

#[test]
fn lone_logical_characters_are_lex_errors() {
    assert!(matches!(assert_failure("вывод 1 ! 2;"),
                     Error::Parse(ParseError::Lex(LexError::IncompleteOperator { .. }))));
    assert!(matches!(assert_failure("true & false;"),
                     Error::Parse(ParseError::Lex(LexError::IncompleteOperator { .. }))));
    assert!(matches!(assert_failure("цел x = 1.2.3;"),
                     Error::Parse(ParseError::Lex(LexError::MalformedNumber { .. }))));
}

#[test]
fn runtime_errors_report_kind_and_line() {
    assert_eq!(assert_failure("цел x = 1;\n\nвывод y;").to_string(),
               "Name error on line 3: Unknown variable 'y'.");
    assert_eq!(assert_failure("1 / 0;").to_string(),
               "Division error on line 1: Division by zero.");
}

#[test]
fn last_statement_may_omit_its_semicolon() {
    assert_eq!(output("вывод 7"), "7.0");
    assert_success(";;;");
    assert_success("");
    assert_success("# только комментарий");
}

#[test]
fn cyrillic_identifiers_work() {
    assert_eq!(output("цел счётчик = 2; счётчик = счётчик * 5; вывод счётчик;"),
               "10.0");
}

#[test]
fn program_exposes_its_environment() {
    let mut console = BufferConsole::new();
    let mut program = Program::new(StrSource::new("цел x = 3; цел a[4];"), &mut console);
    program.run().unwrap();

    assert_eq!(program.environment().scalar("x", 1).unwrap(), Value::Number(3.0));
    assert_eq!(program.environment().array("a", 1).unwrap(), &[0.0; 4]);
}

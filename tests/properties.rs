//! Property-based tests for the scanner and the evaluator.

use kirlang::{
    interpreter::{
        console::BufferConsole, lexer::Token, program::Program, scanner::Scanner,
        source::StrSource, value::Value,
    },
    run_source,
};
use proptest::prelude::*;

/// Strategy for numeric literals: digits with an optional fraction.
fn arb_number_literal() -> impl Strategy<Value = String> {
    "[0-9]{1,9}(\\.[0-9]{1,6})?"
}

/// The value of the last statement in `src`.
fn last_value(src: &str) -> Value {
    let mut console = BufferConsole::new();
    let mut program = Program::new(StrSource::new(src), &mut console);
    let mut last = Value::Unit;
    while let Some(value) = program.step().unwrap() {
        last = value;
    }
    last
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn number_literals_scan_to_their_value(text in arb_number_literal()) {
        let tokens: Vec<_> = Scanner::new(StrSource::new(&text)).collect();

        prop_assert_eq!(tokens.len(), 2);
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(tokens[0].clone().unwrap(), (Token::Number(expected), 1));
        prop_assert_eq!(tokens[1].clone().unwrap(), (Token::EndOfInput, 1));
    }

    #[test]
    fn printed_numbers_read_back_unchanged(text in arb_number_literal()) {
        let mut console = BufferConsole::new();
        run_source(&format!("вывод {text};"), &mut console).unwrap();

        let printed: f64 = console.output().parse().unwrap();
        prop_assert_eq!(printed, text.parse::<f64>().unwrap());
    }

    #[test]
    fn subtraction_chains_group_left(operands in prop::collection::vec(0u32..1000, 2..8)) {
        let src = operands.iter()
                          .map(u32::to_string)
                          .collect::<Vec<_>>()
                          .join(" - ");
        let expected = operands[1..].iter()
                                    .fold(f64::from(operands[0]), |acc, n| acc - f64::from(*n));

        prop_assert_eq!(last_value(&src), Value::Number(expected));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition(a in 0u32..100, b in 0u32..100, c in 0u32..100) {
        let expected = f64::from(a) + f64::from(b) * f64::from(c);

        prop_assert_eq!(last_value(&format!("{a} + {b} * {c}")), Value::Number(expected));
        prop_assert_eq!(last_value(&format!("{b} * {c} + {a}")), Value::Number(expected));
    }

    #[test]
    fn scanner_never_panics(text in "\\PC{0,40}") {
        for item in Scanner::new(StrSource::new(&text)) {
            let _ = item;
        }
    }
}

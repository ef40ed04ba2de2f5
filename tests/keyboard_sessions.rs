//! End-to-end sessions driving the display through keyboard keys.

use tally::config::DisplayConfig;
use tally::core::{Operator, Phase};
use tally::display::CalculatorDisplay;

fn session(keys: &[&str]) -> CalculatorDisplay {
    let mut display = CalculatorDisplay::default();
    for key in keys {
        display.press_key(key);
    }
    display
}

#[test]
fn multiply_then_divide_chain() {
    let display = session(&["1", "0", "*", "2", "/", "4", "Enter"]);
    assert_eq!(display.text(), "5");
    assert_eq!(display.calculator().phase(), Phase::ResultReady);
}

#[test]
fn chained_operator_shows_intermediate_result() {
    let display = session(&["5", "+", "3", "-"]);
    assert_eq!(display.text(), "8 -");
    assert_eq!(display.calculator().previous_operand(), "8");
    assert_eq!(display.calculator().operation(), Some(Operator::Subtract));
}

#[test]
fn typed_product_renders_result() {
    let display = session(&["1", "2", "*", "3", "Enter"]);
    assert_eq!(display.text(), "36");
}

#[test]
fn equals_key_works_like_enter() {
    let display = session(&["9", "-", "4", "="]);
    assert_eq!(display.text(), "5");
}

#[test]
fn large_results_are_grouped() {
    let display = session(&["1", "0", "0", "0", "*", "1", "0", "0", "0", "Enter"]);
    assert_eq!(display.text(), "1,000,000");
}

#[test]
fn decimal_results_keep_fraction() {
    let display = session(&["1", "2", "3", "4", ".", "5", "+", "1", "Enter"]);
    assert_eq!(display.text(), "1,235.5");
}

#[test]
fn division_by_zero_leaves_expression_for_correction() {
    let mut display = session(&["5", "/", "0", "Enter"]);

    assert_eq!(display.text(), "5 ÷ 0");
    assert_eq!(display.take_notice().as_deref(), Some("Cannot divide by zero"));

    display.press_key("2");
    display.press_key("Enter");
    assert_eq!(display.text(), "2.5");
    assert_eq!(display.take_notice(), None);
}

#[test]
fn overflowing_result_shows_infinity_symbol() {
    let nines = vec!["9"; 200];
    let mut keys = nines.clone();
    keys.push("*");
    keys.extend(&nines);
    keys.push("Enter");

    let display = session(&keys);
    assert_eq!(display.text(), "∞");
    assert_eq!(display.calculator().phase(), Phase::ResultReady);
}

#[test]
fn new_digit_after_result_starts_over() {
    let display = session(&["5", "+", "3", "Enter", "7"]);
    assert_eq!(display.text(), "7");
    assert_eq!(display.calculator().previous_operand(), "");
}

#[test]
fn operator_after_result_continues() {
    let display = session(&["5", "+", "3", "Enter", "*", "2", "Enter"]);
    assert_eq!(display.text(), "16");
}

#[test]
fn backspace_undoes_operator() {
    let display = session(&["4", "2", "+", "Backspace"]);
    assert_eq!(display.text(), "42");
    assert_eq!(display.calculator().operation(), None);
}

#[test]
fn backspace_on_empty_is_harmless() {
    let display = session(&["Backspace", "Backspace"]);
    assert_eq!(display.text(), "0");
}

#[test]
fn escape_clears_everything() {
    let display = session(&["7", "*", "6", "Escape"]);
    assert_eq!(display.text(), "0");
    assert_eq!(display.calculator().phase(), Phase::Empty);
}

#[test]
fn unknown_keys_do_nothing() {
    let display = session(&["Shift", "a", "Tab", "3"]);
    assert_eq!(display.text(), "3");
}

#[test]
fn configured_separator_is_used() {
    let config = DisplayConfig::from_toml_str(r#"group_separator = "'""#).unwrap();
    let mut display = CalculatorDisplay::new(config);
    for key in ["2", "5", "0", "0", "0", "0"] {
        display.press_key(key);
    }
    assert_eq!(display.text(), "250'000");
}

#[test]
fn history_traces_a_full_cycle() {
    let display = session(&["1", "+", "2", "Enter", "Escape"]);
    let path: Vec<Phase> = display
        .calculator()
        .history()
        .get_path()
        .into_iter()
        .copied()
        .collect();
    assert_eq!(
        path,
        vec![
            Phase::Empty,
            Phase::FirstOperand,
            Phase::OperatorPending,
            Phase::SecondOperand,
            Phase::ResultReady,
            Phase::Empty,
        ]
    );
}

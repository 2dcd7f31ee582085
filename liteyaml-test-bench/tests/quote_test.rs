use liteyaml_test_bench::assert_eq_event;
use liteyaml_test_bench::consts::*;

#[test]
fn single_quote() {
    assert_eq_event(SINGLE_QUOTE_INPUT, SINGLE_QUOTE_EVENTS);
    assert_eq_event(SINGLE_FOLD_INPUT, SINGLE_FOLD_EVENTS);
}

#[test]
fn double_quote() {
    assert_eq_event(DOUBLE_ESCAPES_INPUT, DOUBLE_ESCAPES_EVENTS);
    assert_eq_event(DOUBLE_UNICODE_INPUT, DOUBLE_UNICODE_EVENTS);
    assert_eq_event(DOUBLE_FOLD_INPUT, DOUBLE_FOLD_EVENTS);
    assert_eq_event(DOUBLE_ESCAPED_BREAK_INPUT, DOUBLE_ESCAPED_BREAK_EVENTS);
}

#[test]
fn quoted_keys() {
    assert_eq_event(QUOTED_KEYS_INPUT, QUOTED_KEYS_EVENTS);
}

#[test]
fn double_quote_err() {
    assert_eq_event(UNKNOWN_ESCAPE_INPUT, UNKNOWN_ESCAPE_EVENTS);
}

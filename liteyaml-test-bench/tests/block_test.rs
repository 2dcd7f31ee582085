use liteyaml_test_bench::assert_eq_event;
use liteyaml_test_bench::consts::*;

#[test]
fn block_seq() {
    assert_eq_event(X1_33X3_INPUT, X1_33X3_EVENTS);
    assert_eq_event(BLOCK1_INPUT, BLOCK_EVENTS);
    assert_eq_event(BLOCK2_INPUT, BLOCK_EVENTS);
    assert_eq_event(SEQ_PLAIN_INPUT, SEQ_PLAIN_EVENTS);
    assert_eq_event(SEQ_PLAIN2_INPUT, SEQ_PLAIN_EVENTS);
}

#[test]
fn block_seq_err() {
    assert_eq_event(BLOCK_ERR_INPUT, BLOCK_ERR_EVENTS);
    assert_eq_event(WRONG_SEQ_INDENT_INPUT, WRONG_SEQ_INDENT_EVENTS);
}

#[test]
fn block_seq_nested() {
    assert_eq_event(BLOCK_NESTED_SEQ_INPUT, BLOCK_NESTED_SEQ_EVENTS);
    assert_eq_event(BLOCK_MAP_IN_SEQ_INPUT, BLOCK_MAP_IN_SEQ_EVENTS);
}

#[test]
fn block_map() {
    assert_eq_event(BLOCK_MAP_INPUT, BLOCK_MAP_EVENTS);
    assert_eq_event(BLOCK_COMMENTS_INPUT, BLOCK_MAP_EVENTS);
    assert_eq_event(BLOCK_NESTED_INPUT, BLOCK_NESTED_EVENTS);
    assert_eq_event(BLOCK_EMPTY_VALUES_INPUT, BLOCK_EMPTY_VALUES_EVENTS);
}

#[test]
fn block_map_err() {
    assert_eq_event(SIMPLE_KEY_ERR_INPUT, SIMPLE_KEY_ERR_EVENTS);
}

#[test]
fn block_plain_scalar() {
    assert_eq_event(BLOCK_MULTI_INPUT, BLOCK_MULTI_EVENTS);
}

#[test]
fn block_literal_and_folded() {
    assert_eq_event(BLOCK_SCALARS_INPUT, BLOCK_SCALARS_EVENTS);
    assert_eq_event(LITERAL_INDICATOR_INPUT, LITERAL_INDICATOR_EVENTS);
}

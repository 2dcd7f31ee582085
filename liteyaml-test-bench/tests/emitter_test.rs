use liteyaml_common::ParseEventType;
use liteyaml_core::{MappingStyle, Parser, ScalarStyle, SequenceStyle, Utf8Emitter};
use liteyaml_test_bench::consts::*;
use liteyaml_test_bench::{event_values, reemit};
use rstest::rstest;

#[rstest]
#[case::block_seq(BLOCK1_INPUT)]
#[case::block_nested(BLOCK_NESTED_INPUT)]
#[case::block_nested_seq(BLOCK_NESTED_SEQ_INPUT)]
#[case::block_map_in_seq(BLOCK_MAP_IN_SEQ_INPUT)]
#[case::block_empty_values(BLOCK_EMPTY_VALUES_INPUT)]
#[case::block_scalars(BLOCK_SCALARS_INPUT)]
#[case::literal_indicator(LITERAL_INDICATOR_INPUT)]
#[case::tags(X1_33X3_INPUT)]
#[case::flow_map(FLOW_MAP_INPUT)]
#[case::flow_pair(FLOW_PAIR_INPUT)]
#[case::flow_in_block(FLOW_IN_BLOCK_INPUT)]
#[case::flow_empty_values(FLOW_MAP_EMPTY_VALUES_INPUT)]
#[case::double_escapes(DOUBLE_ESCAPES_INPUT)]
#[case::unicode(DOUBLE_UNICODE_INPUT)]
#[case::quoted_keys(QUOTED_KEYS_INPUT)]
#[case::ex2_3(SPEC_EX2_3_INPUT)]
#[case::ex2_4(SPEC_EX2_4_INPUT)]
#[case::ex2_5(SPEC_EX2_5_INPUT)]
#[case::ex2_6(SPEC_EX2_6_INPUT)]
#[case::ex2_8(SPEC_EX2_8_INPUT)]
#[case::ex2_17(SPEC_EX2_17_INPUT)]
#[case::ex2_18(SPEC_EX2_18_INPUT)]
#[case::ex2_23(SPEC_EX2_23_INPUT)]
#[case::ex5_3(SPEC_EX5_3_INPUT)]
fn round_trip(#[case] input: &str) {
    let emitted = reemit(input).unwrap();
    assert_eq!(
        event_values(&emitted),
        event_values(input),
        "Round trip of {input:?} produced {emitted:?}"
    );
}

#[test]
fn aliases_are_rejected() {
    assert!(reemit(SPEC_EX2_10_INPUT).is_err());
}

#[rstest]
#[case::scalar("- &x a\n")]
#[case::sequence("key: &list\n  - 1\n")]
#[case::flow_mapping("center: &ORIGIN {x: 73, y: 129}\n")]
fn anchored_nodes_are_rejected(#[case] input: &str) {
    let err = reemit(input).unwrap_err();
    assert!(err.to_string().contains("anchor"), "{err}");
}

#[test]
fn written_document_parses_back() {
    let mut emitter = Utf8Emitter::new();
    emitter.begin_mapping(MappingStyle::Block).unwrap();
    emitter.write_string("name", ScalarStyle::Any).unwrap();
    emitter.write_string("null", ScalarStyle::Any).unwrap();
    emitter.write_string("ports", ScalarStyle::Any).unwrap();
    emitter.begin_sequence(SequenceStyle::Flow).unwrap();
    emitter.write_u32(80).unwrap();
    emitter.write_u32(443).unwrap();
    emitter.end_sequence().unwrap();
    emitter.write_string("ratio", ScalarStyle::Any).unwrap();
    emitter.write_f64(-0.25).unwrap();
    emitter.write_string("script", ScalarStyle::Any).unwrap();
    emitter.write_string("echo one\necho two\n", ScalarStyle::Any).unwrap();
    emitter.write_string("nested", ScalarStyle::Any).unwrap();
    emitter.begin_sequence(SequenceStyle::Block).unwrap();
    emitter.begin_mapping(MappingStyle::Block).unwrap();
    emitter.write_string("key", ScalarStyle::Any).unwrap();
    emitter.write_bool(true).unwrap();
    emitter.end_mapping().unwrap();
    emitter.end_sequence().unwrap();
    emitter.end_mapping().unwrap();

    let yaml = emitter.into_inner();
    let mut parser = Parser::new(&yaml);
    parser.skip_after(ParseEventType::MappingStart).unwrap();
    assert_eq!(parser.read_scalar_as_string().unwrap().as_deref(), Some("name"));
    assert!(!parser.is_null_scalar());
    assert_eq!(parser.read_scalar_as_string().unwrap().as_deref(), Some("null"));
    parser.read().unwrap();
    parser.read_with_verify(ParseEventType::SequenceStart).unwrap();
    assert_eq!(parser.read_scalar_as_u32().unwrap(), 80);
    assert_eq!(parser.read_scalar_as_u32().unwrap(), 443);
    parser.read_with_verify(ParseEventType::SequenceEnd).unwrap();
    parser.read().unwrap();
    assert_eq!(parser.read_scalar_as_f64().unwrap(), -0.25);
    parser.read().unwrap();
    assert_eq!(
        parser.read_scalar_as_string().unwrap().as_deref(),
        Some("echo one\necho two\n")
    );
    parser.read().unwrap();
    parser.read_with_verify(ParseEventType::SequenceStart).unwrap();
    parser.read_with_verify(ParseEventType::MappingStart).unwrap();
    parser.read().unwrap();
    assert!(parser.read_scalar_as_bool().unwrap());
    parser.read_with_verify(ParseEventType::MappingEnd).unwrap();
    parser.read_with_verify(ParseEventType::SequenceEnd).unwrap();
    parser.read_with_verify(ParseEventType::MappingEnd).unwrap();
    assert_eq!(parser.current_event_type(), ParseEventType::DocumentEnd);
}

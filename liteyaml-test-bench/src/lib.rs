pub mod consts;

use std::error::Error;
use std::fmt::Write;

use liteyaml_common::{ParseEventType, ScalarType};
use liteyaml_core::{MappingStyle, Parser, ScalarStyle, SequenceStyle, Utf8Emitter};

///
/// Assert that in for given input, the parser generates expected set of events
///
/// # Panics
///
///    Function panics if there is a difference between expected events string and one generated
///    from the input.
pub fn assert_eq_event(input: &str, events: &str) {
    let line = events_to_string(input, false);
    assert_eq!(line, events, "Error in case: {input}");
}

/// Same as [`assert_eq_event`] but also expects the `+STR`/`-STR` lines.
///
/// # Panics
///
///    Function panics if the generated events differ from `events`.
pub fn assert_eq_event_exact(input: &str, events: &str) {
    let line = events_to_string(input, true);
    assert_eq!(line, events, "Error in case: {input}");
}

/// Renders every event of `input` in the yaml-test-suite notation, one per
/// line. A parse error ends the output with `ERR`.
#[must_use]
pub fn events_to_string(input: &str, emit_stream_token: bool) -> String {
    let mut line = String::with_capacity(input.len() * 2);
    let mut parser = Parser::new(input.as_bytes());
    loop {
        match parser.read() {
            Ok(true) => write_event(&mut line, &parser, emit_stream_token, true),
            Ok(false) => break,
            Err(_) => {
                line.push_str("\nERR");
                break;
            }
        }
    }
    line
}

/// Event rendering without presentation details (scalar styles, flow
/// markers and explicit document markers), used to compare documents that
/// only differ in formatting.
#[must_use]
pub fn event_values(input: &str) -> String {
    let mut line = String::with_capacity(input.len() * 2);
    let mut parser = Parser::new(input.as_bytes());
    loop {
        match parser.read() {
            Ok(true) => write_event(&mut line, &parser, false, false),
            Ok(false) => break,
            Err(_) => {
                line.push_str("\nERR");
                break;
            }
        }
    }
    line
}

fn write_event(line: &mut String, parser: &Parser, emit_stream_token: bool, presentation: bool) {
    let _ = match parser.current_event_type() {
        ParseEventType::StreamStart if emit_stream_token => write!(line, "+STR"),
        ParseEventType::StreamEnd if emit_stream_token => write!(line, "\n-STR"),
        ParseEventType::DocumentStart => {
            let marker = if presentation && parser.is_explicit_document_marker() {
                " ---"
            } else {
                ""
            };
            write!(line, "\n+DOC{marker}")
        }
        ParseEventType::DocumentEnd => {
            let marker = if presentation && parser.is_explicit_document_marker() {
                " ..."
            } else {
                ""
            };
            write!(line, "\n-DOC{marker}")
        }
        ParseEventType::Alias => {
            let anchor = parser
                .try_get_current_anchor()
                .map_or(String::default(), ToString::to_string);
            write!(line, "\n=ALI *{anchor}")
        }
        ParseEventType::Scalar => {
            let style = if presentation {
                parser.current_scalar_style().unwrap_or_default()
            } else {
                ScalarType::Plain
            };
            let value = parser
                .try_get_scalar_as_span()
                .map_or(String::default(), |span| escape_text(&String::from_utf8_lossy(span)));
            write!(line, "\n=VAL{}{} {style}{value}", extract_anchor(parser), extract_tag(parser))
        }
        ParseEventType::SequenceStart => {
            let flow = if presentation && parser.is_flow_collection() {
                " []"
            } else {
                ""
            };
            write!(line, "\n+SEQ{flow}{}{}", extract_anchor(parser), extract_tag(parser))
        }
        ParseEventType::SequenceEnd => write!(line, "\n-SEQ"),
        ParseEventType::MappingStart => {
            let flow = if presentation && parser.is_flow_collection() {
                " {}"
            } else {
                ""
            };
            write!(line, "\n+MAP{flow}{}{}", extract_anchor(parser), extract_tag(parser))
        }
        ParseEventType::MappingEnd => write!(line, "\n-MAP"),
        _ => Ok(()),
    };
}

fn extract_tag(parser: &Parser) -> String {
    parser
        .try_get_resolved_tag()
        .map_or(String::default(), |tag| format!(" <{tag}>"))
}

fn extract_anchor(parser: &Parser) -> String {
    parser
        .try_get_current_anchor()
        .map_or(String::default(), |anchor| format!(" &{anchor}"))
}

/// Escapes the characters yaml-test-suite writes with a backslash.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\x08' => output.push_str("\\b"),
            _ => output.push(ch),
        }
    }
    output
}

/// Parses `input` and writes its events back out through [`Utf8Emitter`].
///
/// Anchors and aliases have no emitter counterpart and are rejected, so
/// every document that converts keeps its full event stream.
///
/// # Errors
///
///    Parse errors of `input`, emitter usage errors, anchored nodes and
///    aliases.
pub fn reemit(input: &str) -> Result<String, Box<dyn Error>> {
    let mut parser = Parser::new(input.as_bytes());
    let mut emitter = Utf8Emitter::new();

    while parser.read()? {
        if let Some(anchor) = parser.try_get_current_anchor() {
            if parser.current_event_type() != ParseEventType::Alias {
                return Err(format!("anchor &{anchor} cannot be emitted").into());
            }
        }
        match parser.current_event_type() {
            ParseEventType::DocumentStart => emitter.write_raw(b"---", false, true),
            ParseEventType::DocumentEnd => {
                if emitter.as_bytes().last().map_or(false, |&c| c != b'\n') {
                    emitter.write_raw(b"", false, true);
                }
            }
            ParseEventType::SequenceStart => {
                apply_tag(&parser, &mut emitter);
                emitter.begin_sequence(if parser.is_flow_collection() {
                    SequenceStyle::Flow
                } else {
                    SequenceStyle::Block
                })?;
            }
            ParseEventType::SequenceEnd => emitter.end_sequence()?,
            ParseEventType::MappingStart => {
                apply_tag(&parser, &mut emitter);
                emitter.begin_mapping(if parser.is_flow_collection() {
                    MappingStyle::Flow
                } else {
                    MappingStyle::Block
                })?;
            }
            ParseEventType::MappingEnd => emitter.end_mapping()?,
            ParseEventType::Scalar => {
                apply_tag(&parser, &mut emitter);
                let value = parser.get_scalar_as_string()?.unwrap_or_default();
                let style = match parser.current_scalar_style() {
                    Some(ScalarType::SingleQuote | ScalarType::DoubleQuote) => {
                        ScalarStyle::DoubleQuoted
                    }
                    _ => ScalarStyle::Any,
                };
                emitter.write_string(&value, style)?;
            }
            ParseEventType::Alias => return Err("aliases cannot be emitted".into()),
            _ => {}
        }
    }

    Ok(String::from_utf8(emitter.into_inner())?)
}

fn apply_tag(parser: &Parser, emitter: &mut Utf8Emitter) {
    if let Some(tag) = parser.try_get_resolved_tag() {
        if tag == "!" {
            emitter.tag("!");
        } else {
            emitter.tag(&format!("!<{tag}>"));
        }
    }
}

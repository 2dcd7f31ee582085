use super::Parser;
use crate::scalar::Scalar;
use alloc::string::{String, ToString};
use liteyaml_common::{ParseEventType, ParserError, ParserResult, ScalarType};

macro_rules! scalar_accessors {
    ($($ty:ty, $expected:literal, $get:ident, $try_get:ident, $read:ident, $try_read:ident, $scalar_fn:ident);* $(;)?) => {
        $(
            #[doc = concat!("Current scalar as `", stringify!($ty), "`.")]
            ///
            /// # Errors
            /// [`ParserError::ScalarConversion`] when the cursor is not on a
            /// scalar or its text does not parse.
            pub fn $get(&self) -> ParserResult<$ty> {
                self.$try_get().ok_or_else(|| self.conversion_error($expected))
            }

            #[must_use]
            pub fn $try_get(&self) -> Option<$ty> {
                self.current_scalar.as_ref().and_then(Scalar::$scalar_fn)
            }

            #[doc = concat!("Reads the current scalar as `", stringify!($ty), "` and advances.")]
            ///
            /// # Errors
            /// Conversion errors as for the getter, and parse errors from the
            /// following read.
            pub fn $read(&mut self) -> ParserResult<$ty> {
                let value = self.$get()?;
                self.read_with_verify(ParseEventType::Scalar)?;
                Ok(value)
            }

            /// Advances only when the current scalar converts.
            ///
            /// # Errors
            /// Parse errors from the following read.
            pub fn $try_read(&mut self) -> ParserResult<Option<$ty>> {
                match self.$try_get() {
                    Some(value) => {
                        self.read_with_verify(ParseEventType::Scalar)?;
                        Ok(Some(value))
                    }
                    None => Ok(None),
                }
            }
        )*
    };
}

impl Parser<'_> {
    /// `true` on a plain scalar event that is empty or spells null. Quoted
    /// `"null"` is a string.
    #[must_use]
    pub fn is_null_scalar(&self) -> bool {
        self.current_event == ParseEventType::Scalar
            && self.current_scalar_style.map_or(true, |style| style == ScalarType::Plain)
            && self.current_scalar.as_ref().map_or(true, Scalar::is_null)
    }

    /// Text of the current scalar, `None` for an empty node.
    ///
    /// # Errors
    /// [`ParserError::InvalidUtf8`] when the bytes are not UTF-8.
    pub fn get_scalar_as_string(&self) -> ParserResult<Option<String>> {
        match &self.current_scalar {
            Some(scalar) => scalar
                .as_utf8()
                .map(|text| Some(text.to_string()))
                .map_err(|_| ParserError::InvalidUtf8 {
                    mark: self.current_mark,
                }),
            None => Ok(None),
        }
    }

    /// Raw bytes of the current scalar.
    ///
    /// # Errors
    /// [`ParserError::ScalarConversion`] when there is no scalar content.
    pub fn get_scalar_as_utf8(&self) -> ParserResult<&[u8]> {
        self.current_scalar
            .as_ref()
            .map(Scalar::as_bytes)
            .ok_or_else(|| self.conversion_error("utf8"))
    }

    #[must_use]
    pub fn try_get_scalar_as_span(&self) -> Option<&[u8]> {
        self.current_scalar.as_ref().map(Scalar::as_bytes)
    }

    /// Text of the current scalar, `None` when it is missing, null or not
    /// UTF-8. Use [`Parser::is_null_scalar`] to tell null apart.
    #[must_use]
    pub fn try_get_scalar_as_string(&self) -> Option<String> {
        let scalar = self.current_scalar.as_ref()?;
        if self.is_null_scalar() {
            return None;
        }
        scalar.as_utf8().ok().map(ToString::to_string)
    }

    /// # Errors
    /// [`ParserError::UnexpectedEvent`] when the cursor is not on a scalar,
    /// [`ParserError::InvalidUtf8`] for non UTF-8 text.
    pub fn read_scalar_as_string(&mut self) -> ParserResult<Option<String>> {
        let value = self.get_scalar_as_string()?;
        self.read_with_verify(ParseEventType::Scalar)?;
        Ok(value)
    }

    /// Reads the current scalar's text if the cursor is on a scalar. An
    /// empty node reads as an empty string.
    ///
    /// # Errors
    /// Parse errors from the following read.
    pub fn try_read_scalar_as_string(&mut self) -> ParserResult<Option<String>> {
        if self.current_event != ParseEventType::Scalar {
            return Ok(None);
        }
        let value = self.get_scalar_as_string()?.unwrap_or_default();
        self.read_with_verify(ParseEventType::Scalar)?;
        Ok(Some(value))
    }

    scalar_accessors! {
        bool, "bool", get_scalar_as_bool, try_get_scalar_as_bool, read_scalar_as_bool, try_read_scalar_as_bool, try_get_bool;
        i32, "Int32", get_scalar_as_i32, try_get_scalar_as_i32, read_scalar_as_i32, try_read_scalar_as_i32, try_get_i32;
        i64, "Int64", get_scalar_as_i64, try_get_scalar_as_i64, read_scalar_as_i64, try_read_scalar_as_i64, try_get_i64;
        u32, "UInt32", get_scalar_as_u32, try_get_scalar_as_u32, read_scalar_as_u32, try_read_scalar_as_u32, try_get_u32;
        u64, "UInt64", get_scalar_as_u64, try_get_scalar_as_u64, read_scalar_as_u64, try_read_scalar_as_u64, try_get_u64;
        f32, "float", get_scalar_as_f32, try_get_scalar_as_f32, read_scalar_as_f32, try_read_scalar_as_f32, try_get_f32;
        f64, "double", get_scalar_as_f64, try_get_scalar_as_f64, read_scalar_as_f64, try_read_scalar_as_f64, try_get_f64;
    }

    fn conversion_error(&self, expected: &'static str) -> ParserError {
        ParserError::ScalarConversion {
            mark: self.current_mark,
            expected,
            event: self.current_event,
            value: self
                .current_scalar
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Parser;
    use liteyaml_common::{ParseEventType, ParserError};

    fn parser(lines: &[&str]) -> Parser<'static> {
        let yaml = lines.join("\n");
        Parser::new(Box::leak(yaml.into_boxed_str()).as_bytes())
    }

    #[test]
    fn null_scalars() {
        let mut parser = parser(&["- null", "- ", "- ~", "- not null", "- 'null'"]);
        parser.skip_after(ParseEventType::DocumentStart).unwrap();
        assert_eq!(parser.current_event_type(), ParseEventType::SequenceStart);
        parser.read().unwrap();
        assert!(parser.is_null_scalar());
        parser.read().unwrap();
        assert!(parser.is_null_scalar());
        parser.read().unwrap();
        assert!(parser.is_null_scalar());
        parser.read().unwrap();
        assert!(!parser.is_null_scalar());
        parser.read().unwrap();
        assert!(!parser.is_null_scalar());
        assert_eq!(parser.try_get_scalar_as_string().as_deref(), Some("null"));
        parser.read().unwrap();
        assert_eq!(parser.current_event_type(), ParseEventType::SequenceEnd);
        assert!(!parser.is_null_scalar());
    }

    #[test]
    fn typed_getters() {
        let mut parser = parser(&["[42, -0x10, 0o17, 4294967295, 1.5, .inf, true, text]"]);
        parser.skip_after(ParseEventType::SequenceStart).unwrap();
        assert_eq!(parser.read_scalar_as_i32().unwrap(), 42);
        assert_eq!(parser.read_scalar_as_i64().unwrap(), -16);
        assert_eq!(parser.read_scalar_as_u32().unwrap(), 15);
        assert_eq!(parser.get_scalar_as_u64().unwrap(), 4_294_967_295);
        assert!(parser.get_scalar_as_i32().is_err());
        parser.read().unwrap();
        assert_eq!(parser.read_scalar_as_f64().unwrap(), 1.5);
        assert_eq!(parser.read_scalar_as_f32().unwrap(), f32::INFINITY);
        assert!(parser.read_scalar_as_bool().unwrap());
        assert_eq!(parser.get_scalar_as_utf8().unwrap(), b"text");
        assert_eq!(parser.read_scalar_as_string().unwrap().as_deref(), Some("text"));
        assert_eq!(parser.current_event_type(), ParseEventType::SequenceEnd);
    }

    #[test]
    fn conversion_error_reports_value() {
        let mut parser = parser(&["abc"]);
        parser.skip_after(ParseEventType::DocumentStart).unwrap();
        match parser.get_scalar_as_i64() {
            Err(ParserError::ScalarConversion {
                expected, value, ..
            }) => {
                assert_eq!(expected, "Int64");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn try_read_only_advances_on_success() {
        let mut parser = parser(&["- abc", "- 12"]);
        parser.skip_after(ParseEventType::SequenceStart).unwrap();
        assert_eq!(parser.try_read_scalar_as_i32().unwrap(), None);
        assert_eq!(parser.try_get_scalar_as_string().as_deref(), Some("abc"));
        assert_eq!(parser.try_read_scalar_as_string().unwrap().as_deref(), Some("abc"));
        assert_eq!(parser.try_read_scalar_as_u64().unwrap(), Some(12));
        assert_eq!(parser.try_read_scalar_as_string().unwrap(), None);
    }

    #[test]
    fn read_with_verify_rejects_other_events() {
        let mut parser = parser(&["a: 1"]);
        parser.skip_after(ParseEventType::StreamStart).unwrap();
        assert!(matches!(
            parser.read_scalar_as_string(),
            Err(ParserError::UnexpectedEvent {
                expected: ParseEventType::Scalar,
                found: ParseEventType::DocumentStart,
                ..
            })
        ));
    }

    #[test]
    fn skip_current_node_lands_on_next_key() {
        let mut parser = parser(&[
            "a: 1",
            "b: { ba: 2 }",
            "c: { ca: [100, 200, 300] }",
            "d: { da: [100, 200, 300], db: 100 }",
            "e: { ea: [{eaa: 100}, 200, 300], db: {} }",
            "f: [{ fa: 100, fb: [100, 200, 300] }]",
        ]);
        parser.skip_after(ParseEventType::MappingStart).unwrap();
        for key in ["a", "b", "c", "d", "e", "f"] {
            assert_eq!(parser.get_scalar_as_string().unwrap().as_deref(), Some(key));
            parser.read().unwrap();
            parser.skip_current_node().unwrap();
        }
        assert_eq!(parser.current_event_type(), ParseEventType::MappingEnd);
    }

    #[test]
    fn empty_element_in_sequence() {
        let mut parser = parser(&["keywords:", "- ", "- _RIDE_ON", "- _COME_ON"]);
        parser.skip_after(ParseEventType::DocumentStart).unwrap();
        assert_eq!(parser.current_event_type(), ParseEventType::MappingStart);
        parser.read().unwrap();
        assert_eq!(parser.read_scalar_as_string().unwrap().as_deref(), Some("keywords"));
        assert_eq!(parser.current_event_type(), ParseEventType::SequenceStart);
        parser.read().unwrap();
        assert!(parser.is_null_scalar());
        parser.read().unwrap();
        assert_eq!(parser.read_scalar_as_string().unwrap().as_deref(), Some("_RIDE_ON"));
        assert_eq!(parser.read_scalar_as_string().unwrap().as_deref(), Some("_COME_ON"));
        assert_eq!(parser.current_event_type(), ParseEventType::SequenceEnd);
        parser.read().unwrap();
        assert_eq!(parser.current_event_type(), ParseEventType::MappingEnd);
        parser.read().unwrap();
        assert_eq!(parser.current_event_type(), ParseEventType::DocumentEnd);
    }
}

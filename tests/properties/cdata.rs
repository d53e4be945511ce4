//! Property tests for CDATA embedding.

use proptest::prelude::*;

use docbundle::domain::services::{escape_attr, unwrap_cdata, wrap_cdata};

fn xmlish_text() -> impl Strategy<Value = String> {
    // Bias towards the characters that make up CDATA markers
    proptest::string::string_regex("([\\]\\[<>!A-Za-z \n]|\\]\\]>|<!\\[CDATA\\[){0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any text survives wrapping and unwrapping unchanged.
    #[test]
    fn property_cdata_round_trip(content in xmlish_text()) {
        let wrapped = wrap_cdata(&content);
        prop_assert_eq!(unwrap_cdata(&wrapped), Some(content));
    }

    /// PROPERTY: Wrapped text ends with exactly one section terminator
    /// that is not part of the payload.
    #[test]
    fn property_wrapped_sections_are_well_formed(content in xmlish_text()) {
        let wrapped = wrap_cdata(&content);
        prop_assert!(wrapped.starts_with("<![CDATA["));
        prop_assert!(wrapped.ends_with("]]>"));
        let opens = wrapped.matches("<![CDATA[").count();
        let closes = wrapped.matches("]]>").count();
        prop_assert!(closes >= opens);
    }

    /// PROPERTY: Escaped attribute values never contain raw quotes or brackets.
    #[test]
    fn property_escaped_attr_has_no_specials(value in "\\PC{0,40}") {
        let escaped = escape_attr(&value);
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
    }
}

//! Property tests for the naming codec.

use proptest::prelude::*;

use tuyau::naming::{format_file_name, format_increment, parse_element_name, parse_file_name};

fn type_token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{2,5}").unwrap()
}

fn short_token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9]{1,8}").unwrap()
}

fn extension() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Well-formed names round-trip through parse and format.
    #[test]
    fn property_file_name_round_trip(
        asset_type in type_token(),
        short in short_token(),
        inc in 0u32..=1500,
        ext in extension(),
    ) {
        let name = format_file_name(&asset_type, &short, inc, &ext);
        let parsed = parse_file_name(&name).expect("constructed name must parse");

        let formatted = parsed.formatted();
        prop_assert_eq!(formatted.as_str(), name.as_str());
        prop_assert_eq!(&parsed.asset_type, &asset_type);
        prop_assert_eq!(&parsed.asset_short_name, &short);
        prop_assert_eq!(&parsed.asset_name, &format!("{}_{}", asset_type, short));
        prop_assert_eq!(parsed.inc_number, inc);
        prop_assert_eq!(&parsed.file_type, &ext);
    }

    /// PROPERTY: Loose zero-padding on input normalizes to the same fields.
    #[test]
    fn property_padding_is_normalized(
        asset_type in type_token(),
        short in short_token(),
        inc in 0u32..=999,
        ext in extension(),
    ) {
        let loose = format!("{}_{}_{}.{}", asset_type, short, inc, ext);
        let padded = format_file_name(&asset_type, &short, inc, &ext);

        let parsed_loose = parse_file_name(&loose).expect("loose name must parse");
        let parsed_padded = parse_file_name(&padded).expect("padded name must parse");

        prop_assert_eq!(parsed_loose, parsed_padded);
    }

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_file_name_never_panics(s in "(?s).{0,64}") {
        let _ = parse_file_name(&s);
    }

    /// PROPERTY: Element parsing never panics on arbitrary input.
    #[test]
    fn property_parse_element_name_never_panics(s in "(?s).{0,64}") {
        let _ = parse_element_name(&s);
    }

    /// PROPERTY: Formatted increments are at least 3 digits and parse back.
    #[test]
    fn property_increment_width(inc in 0u32..=100_000) {
        let formatted = format_increment(inc);

        prop_assert!(formatted.len() >= 3);
        prop_assert_eq!(formatted.parse::<u32>().unwrap(), inc);
    }
}

use bump_core::VersionString;
use proptest::prelude::*;
use regex::Regex;

proptest! {
    #[test]
    fn accepts_every_dotted_triple(a in 0u64..100_000, b in 0u64..100_000, c in 0u64..100_000) {
        let input = format!("{a}.{b}.{c}");
        let version = VersionString::parse(&input).unwrap();
        prop_assert_eq!(version.as_str(), input.as_str());
    }

    #[test]
    fn agrees_with_reference_pattern(s in "[0-9v.+-]{0,12}") {
        let reference = Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap();
        prop_assert_eq!(VersionString::parse(&s).is_ok(), reference.is_match(&s));
    }

    #[test]
    fn never_accepts_a_prefix_or_suffix(
        core in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        noise in "[a-z \\-+.]{1,4}",
    ) {
        let prefixed = format!("{noise}{core}");
        let suffixed = format!("{core}{noise}");
        prop_assert!(VersionString::parse(&prefixed).is_err());
        prop_assert!(VersionString::parse(&suffixed).is_err());
    }
}

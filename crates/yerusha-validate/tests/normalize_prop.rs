//! Property tests for value normalization.

use proptest::prelude::*;

use yerusha_validate::normalize;

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in ".{0,200}") {
        let once = normalize(Some(&raw));
        let twice = normalize(Some(&once));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_values_carry_no_pilcrow_or_space_variants(raw in ".{0,200}") {
        let normalized = normalize(Some(&raw));
        let forbidden = ['¶', '\u{00A0}', '\u{2007}', '\u{202F}'];
        let leftover: Vec<char> = normalized
            .chars()
            .filter(|c| forbidden.contains(c))
            .collect();
        prop_assert!(leftover.is_empty(), "unreplaced characters: {:?}", leftover);
    }

    #[test]
    fn normalized_values_are_trimmed(raw in ".{0,200}") {
        let normalized = normalize(Some(&raw));
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }
}

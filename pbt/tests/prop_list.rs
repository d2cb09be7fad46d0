//! カンマ区切りリストのプロパティテスト

use pbt::{lws, token_value};
use proptest::prelude::*;
use shiguredo_http_header::list;

// 要素は順序を保ち、前後の LWS が取り除かれる
proptest! {
    #[test]
    fn list_roundtrip(
        items in proptest::collection::vec((token_value(), lws(), lws()), 0..8)
    ) {
        let input = items
            .iter()
            .map(|(item, before, after)| format!("{}{}{}", before, item, after))
            .collect::<Vec<_>>()
            .join(",");
        let expected: Vec<&str> = items.iter().map(|(item, _, _)| item.as_str()).collect();
        prop_assert_eq!(list(&input), expected);
    }
}

// 空要素は取り除かれる
proptest! {
    #[test]
    fn list_empties_filtered(
        items in proptest::collection::vec(prop_oneof![token_value(), Just(String::new())], 0..8),
        sep in lws()
    ) {
        let input = items.join(&format!(",{}", sep));
        let expected: Vec<&str> = items
            .iter()
            .filter(|item| !item.is_empty())
            .map(String::as_str)
            .collect();
        prop_assert_eq!(list(&input), expected);
    }
}

// 任意の入力で、要素は空でなく、前後に空白を持たない
proptest! {
    #[test]
    fn list_elements_trimmed(input in "\\PC{0,48}") {
        for element in list(&input) {
            prop_assert!(!element.is_empty());
            prop_assert!(!element.contains(','));
            prop_assert!(!element.starts_with([' ', '\t']));
            prop_assert!(!element.ends_with([' ', '\t']));
        }
    }
}

//! パラメータのプロパティテスト

use std::collections::BTreeMap;

use pbt::{lws, param_pairs};
use proptest::prelude::*;
use shiguredo_http_header::params;

fn write_pairs(pairs: &[(String, String, String)], sep: &str) -> String {
    pairs
        .iter()
        .map(|(key, _, written)| format!("{}={}", key, written))
        .collect::<Vec<_>>()
        .join(&format!(";{}", sep))
}

fn expected(pairs: &[(String, String, String)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value, _)| (key.to_ascii_lowercase(), value.clone()))
        .collect()
}

// 正しいパラメータはすべて取り出せる (重複キーは後勝ち)
proptest! {
    #[test]
    fn params_roundtrip(pairs in param_pairs(), sep in lws()) {
        let p = params(&write_pairs(&pairs, sep));
        prop_assert_eq!(p, expected(&pairs));
    }
}

// 不正なセグメントは他のセグメントに影響しない
proptest! {
    #[test]
    fn params_invalid_segments_dropped(
        pairs in param_pairs(),
        bad in prop_oneof![
            Just("wat"),
            Just("="),
            Just("a b=c"),
            Just("k=<v>"),
            Just("k=a b"),
            Just("k=\"open"),
            Just(""),
        ],
        position in 0usize..5
    ) {
        let mut segments: Vec<String> = pairs
            .iter()
            .map(|(key, _, written)| format!("{}={}", key, written))
            .collect();
        let position = position.min(segments.len());
        segments.insert(position, bad.to_string());

        // 不正なセグメント "k=..." が有効なキー "k" を上書きすることはない
        prop_assert_eq!(params(&segments.join("; ")), expected(&pairs));
    }
}

// 任意の入力でパニックせず、キーは小文字で空でない
proptest! {
    #[test]
    fn params_never_panics(input in "\\PC{0,48}") {
        for key in params(&input).keys() {
            prop_assert!(!key.is_empty());
            prop_assert_eq!(key, &key.to_ascii_lowercase());
            prop_assert!(!key.contains([' ', '\t', ';', '=', '"']));
        }
    }
}

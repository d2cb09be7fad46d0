//! PBT テスト共通ユーティリティ

use proptest::prelude::*;

// ========================================
// 字句要素の生成
// ========================================

/// LWS: 空 / SP / HTAB / CRLF の後に SP
pub fn lws() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just(" "), Just("\t"), Just("  \t"), Just("\r\n "), Just("\r\n\t")]
}

/// type: ALPHA / DIGIT / "-" (大文字を含む)
pub fn media_type_token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9-]{1,8}".prop_map(|s| s)
}

/// subtype: ALPHA / DIGIT / "-" / "." / "+" (大文字を含む)
pub fn media_subtype_token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.+-]{1,12}".prop_map(|s| s)
}

/// パラメータ名 (特殊文字・空白・制御文字を含まない)
pub fn param_key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.!#$%&'*+^`|~-]{0,7}".prop_map(|s| s)
}

/// 引用符なしで書けるトークン値
pub fn token_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!#$%&'*+.^_`|~-]{1,12}".prop_map(|s| s)
}

/// 引用符付きで書く値 (`;` 以外の印字可能 ASCII と空白)
pub fn quoted_value() -> impl Strategy<Value = String> {
    "[ -:<-~]{0,16}".prop_map(|s| s)
}

/// 値を quoted-string にする
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// 値 (引用符なし、または引用符付き) と、その書式化済み文字列
pub fn param_value() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        token_value().prop_map(|v| (v.clone(), v)),
        quoted_value().prop_map(|v| {
            let quoted = quote(&v);
            (v, quoted)
        }),
    ]
}

/// `key=value` のリスト
pub fn param_pairs() -> impl Strategy<Value = Vec<(String, String, String)>> {
    proptest::collection::vec(
        (param_key(), param_value()).prop_map(|(k, (v, written))| (k, v, written)),
        0..=4,
    )
}

/// q 値の文字列 (0 から 1 を 3 桁まで)
pub fn qvalue_string() -> impl Strategy<Value = String> {
    (0u16..=1000).prop_map(|value| {
        if value == 1000 {
            return "1".to_string();
        }
        if value == 0 {
            return "0".to_string();
        }
        let mut frac = format!("{:03}", value);
        while frac.ends_with('0') {
            frac.pop();
        }
        format!("0.{}", frac)
    })
}

/// Accept のメディアレンジ
pub fn media_range() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*/*".to_string()),
        (media_type_token(), media_subtype_token())
            .prop_map(|(media_type, subtype)| format!("{}/{}", media_type, subtype)),
        media_type_token().prop_map(|media_type| format!("{}/*", media_type)),
    ]
}

//! Accept とコンテントネゴシエーションのプロパティテスト

use pbt::{media_range, qvalue_string};
use proptest::prelude::*;
use shiguredo_http_header::{accept, media_type, media_type_list, sort_media_types, QValue};

fn weighted_range() -> impl Strategy<Value = String> {
    prop_oneof![
        media_range(),
        (media_range(), qvalue_string()).prop_map(|(range, q)| format!("{};q={}", range, q)),
    ]
}

fn candidate() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => weighted_range(),
        1 => "\\PC{0,16}",
    ]
}

// 出力はすべて単独でパースに成功する候補
proptest! {
    #[test]
    fn list_output_individually_valid(
        candidates in proptest::collection::vec(candidate(), 0..10),
        sort in any::<bool>()
    ) {
        let parsed = media_type_list(&candidates, sort);
        let valid = candidates.iter().filter(|c| media_type(c).is_ok()).count();
        prop_assert_eq!(parsed.len(), valid);
        for mt in &parsed {
            prop_assert_eq!(media_type(&mt.to_string()), Ok(mt.clone()));
        }
    }
}

// 並べ替えなしでは入力の順序を保つ
proptest! {
    #[test]
    fn list_unsorted_preserves_order(candidates in proptest::collection::vec(candidate(), 0..10)) {
        let parsed = media_type_list(&candidates, false);
        let expected: Vec<_> = candidates.iter().filter_map(|c| media_type(c).ok()).collect();
        prop_assert_eq!(parsed, expected);
    }
}

// 並べ替え後は (q, type, subtype) が降順
proptest! {
    #[test]
    fn sorted_is_descending(candidates in proptest::collection::vec(weighted_range(), 0..10)) {
        let parsed = media_type_list(&candidates, true);
        for pair in parsed.windows(2) {
            let a = (pair[0].qvalue(), pair[0].media_type(), pair[0].subtype());
            let b = (pair[1].qvalue(), pair[1].media_type(), pair[1].subtype());
            prop_assert!(a >= b);
        }
    }
}

// 並べ替えは入力の順序によらず同じキー列になり、冪等
proptest! {
    #[test]
    fn sort_is_order_independent(candidates in proptest::collection::vec(weighted_range(), 0..10)) {
        let mut reversed = candidates.clone();
        reversed.reverse();

        let key = |list: &[shiguredo_http_header::MediaType]| -> Vec<(QValue, String)> {
            list.iter().map(|m| (m.qvalue(), m.mime_type())).collect()
        };

        let mut forward = media_type_list(&candidates, true);
        let backward = media_type_list(&reversed, true);
        prop_assert_eq!(key(&forward[..]), key(&backward[..]));

        let before = forward.clone();
        sort_media_types(&mut forward);
        prop_assert_eq!(forward, before);
    }
}

// 同じ q 値なら具体的なメディアタイプがワイルドカードより先
proptest! {
    #[test]
    fn specific_before_wildcard(media in "[a-z]{1,8}", sub in "[a-z]{1,8}", q in qvalue_string()) {
        let header = format!("*/*;q={q}, {media}/*;q={q}, {media}/{sub};q={q}");
        let ranked = accept(&header, true);
        prop_assert_eq!(ranked.len(), 3);
        prop_assert_eq!(ranked[0].mime_type(), format!("{}/{}", media, sub));
        prop_assert_eq!(ranked[1].mime_type(), format!("{}/*", media));
        prop_assert_eq!(ranked[2].mime_type(), "*/*");
    }
}

// q 値がない、または読めない場合は 1.0
proptest! {
    #[test]
    fn qvalue_defaults(range in media_range(), junk in "[a-z]{1,6}") {
        let plain = media_type(&range).unwrap();
        prop_assert_eq!(plain.qvalue().value(), 1.0);
        let junk = media_type(&format!("{};q={}", range, junk)).unwrap();
        prop_assert_eq!(junk.qvalue().value(), 1.0);
    }
}

// accept は任意の入力でパニックしない
proptest! {
    #[test]
    fn accept_never_panics(input in "\\PC{0,64}", sort in any::<bool>()) {
        let _ = accept(&input, sort);
    }
}

//! Accept ヘッダーとコンテントネゴシエーション (RFC 2616 Section 14.1)
//!
//! ## 概要
//!
//! メディアタイプ候補のリストをパースし、q 値と具体性で並べ替えます。
//! 不正な候補はエラーにせず、黙って取り除きます。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_header::accept::{accept, media_type_list};
//!
//! let ranked = accept("text/*;q=0.3, text/html;q=0.7, bogus, */*;q=0.1", true);
//! let names: Vec<String> = ranked.iter().map(|m| m.mime_type()).collect();
//! assert_eq!(names, ["text/html", "text/*", "*/*"]);
//!
//! let parsed = media_type_list(["text/plain", "x y"], false);
//! assert_eq!(parsed.len(), 1);
//! ```

use core::cmp::Ordering;
use core::fmt;

use crate::media_type::MediaType;
use crate::params::Parameters;
use crate::syntax;

/// q 値
///
/// `q` パラメータを浮動小数点数として読んだ値です。
/// 並べ替えにだけ使い、パースの成否には影響しません。
#[derive(Debug, Clone, Copy)]
pub struct QValue(f32);

impl QValue {
    /// q 値をパース
    ///
    /// 数値として読めない値や有限でない値は `None` になります。
    pub fn parse(input: &str) -> Option<Self> {
        let value: f32 = syntax::trim_lws(input).parse().ok()?;
        value.is_finite().then_some(QValue(value))
    }

    /// パラメータから q 値を取得 (ない、または不正なら 1.0)
    pub(crate) fn from_parameters(parameters: &Parameters) -> Self {
        parameters
            .get("q")
            .and_then(|value| QValue::parse(value))
            .unwrap_or_default()
    }

    /// f32 の値
    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for QValue {
    fn default() -> Self {
        QValue(1.0)
    }
}

impl PartialEq for QValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QValue {}

impl PartialOrd for QValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for QValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 候補をパースし、必要なら優先度順に並べ替える
///
/// パースに失敗した候補は取り除かれます。
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn media_type_list<I, S>(candidates: I, sort: bool) -> Vec<MediaType>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut media_types: Vec<MediaType> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            match MediaType::parse(candidate) {
                Ok(media_type) => Some(media_type),
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(candidate, %error, "dropping media type candidate");
                    None
                }
            }
        })
        .collect();

    if sort {
        sort_media_types(&mut media_types);
    }
    media_types
}

/// メディアタイプを優先度順に並べ替える
///
/// 1. q 値の降順
/// 2. type の降順
/// 3. subtype の降順
///
/// `*` は英数字より小さいので、同じ q 値なら具体的なメディアタイプが
/// ワイルドカードより前に来ます。安定ソートなので、キーが等しい要素は元の順序を保ちます。
pub fn sort_media_types(media_types: &mut [MediaType]) {
    media_types.sort_by(|a, b| ranking_key(b).cmp(&ranking_key(a)));
}

fn ranking_key(media_type: &MediaType) -> (QValue, &str, &str) {
    (
        media_type.qvalue(),
        media_type.media_type(),
        media_type.subtype(),
    )
}

/// Accept ヘッダー値をパース
///
/// 引用符の外にあるカンマで候補に分割してから [`media_type_list`] を適用します。
pub fn accept(input: &str, sort: bool) -> Vec<MediaType> {
    let candidates = split_with_quotes(input, b',')
        .into_iter()
        .map(syntax::trim_lws)
        .filter(|candidate| !candidate.is_empty());
    media_type_list(candidates, sort)
}

fn split_with_quotes(input: &str, delimiter: u8) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quote = false;
    let mut escaped = false;

    for (i, &b) in input.as_bytes().iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        if b == b'\\' && in_quote {
            escaped = true;
            continue;
        }
        if b == b'"' {
            in_quote = !in_quote;
            continue;
        }
        if b == delimiter && !in_quote {
            parts.push(&input[start..i]);
            start = i + 1;
        }
    }
    parts.push(&input[start..]);
    parts
}

//! メディアタイプパラメータのパース (RFC 1341 Section 7.2)
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_header::params::params;
//!
//! let p = params("Foo=bar; baz=BOING");
//! assert_eq!(p.get("foo").map(String::as_str), Some("bar"));
//! assert_eq!(p.get("baz").map(String::as_str), Some("BOING"));
//!
//! // 不正なセグメントは無視される
//! let p = params("foo=BAR ; wat");
//! assert_eq!(p.len(), 1);
//! ```

use std::collections::BTreeMap;

use crate::syntax;
use crate::token::{token, TokenError};

/// パラメータ (小文字化したキー → 値)
pub type Parameters = BTreeMap<String, String>;

/// `key=value` セグメントのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
enum SegmentError {
    /// キーが空、`=` がない、または使えない文字を含む
    InvalidKey,
    /// 値がトークンとして不正
    InvalidValue(TokenError),
}

/// パラメータ列をパース
///
/// `;` ごとに分割し、各セグメントを `key=token` として読みます。
/// 不正なセグメントは他のセグメントに影響を与えずに捨てられます。
/// 同じキーが複数回現れた場合は後勝ちです。
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn params(input: &str) -> Parameters {
    input.split(';').fold(Parameters::new(), |mut acc, segment| {
        match parse_segment(segment) {
            Ok((key, value)) => {
                acc.insert(key, value);
            }
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(segment, ?error, "dropping parameter segment");
            }
        }
        acc
    })
}

fn parse_segment(segment: &str) -> Result<(String, String), SegmentError> {
    let segment = syntax::trim_lws(segment);
    let bytes = segment.as_bytes();

    let mut eq = 0;
    loop {
        let Some(&b) = bytes.get(eq) else {
            return Err(SegmentError::InvalidKey);
        };
        if b == b'=' {
            break;
        }
        if syntax::is_special(b) || syntax::is_ctl(b) || b == b' ' {
            return Err(SegmentError::InvalidKey);
        }
        eq += 1;
    }
    if eq == 0 {
        return Err(SegmentError::InvalidKey);
    }

    let value = token(&segment[eq + 1..]).map_err(SegmentError::InvalidValue)?;
    Ok((segment[..eq].to_ascii_lowercase(), value))
}

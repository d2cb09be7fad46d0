//! Content-Type ヘッダーパース (RFC 2616 Section 14.17)
//!
//! ## 概要
//!
//! Content-Type は実際の表現のメディアタイプを示すため、
//! `Accept` とは異なりワイルドカードを許可しません。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_header::content_type::content_type;
//!
//! let ct = content_type("x-sample/json; charset=utf-8").unwrap();
//! assert_eq!(ct.charset(), Some("utf-8"));
//!
//! assert!(content_type("x/*").is_err());
//! assert!(content_type("*/*").is_err());
//! ```

use crate::media_type::{MediaType, MediaTypeError};

impl MediaType {
    /// Content-Type としてパース (ワイルドカード不可)
    pub fn parse_content_type(input: &str) -> Result<Self, MediaTypeError> {
        let media_type = MediaType::parse(input)?;
        if media_type.is_wildcard() {
            return Err(MediaTypeError::WildcardNotAllowed);
        }
        Ok(media_type)
    }
}

/// Content-Type ヘッダー値をパース
pub fn content_type(input: &str) -> Result<MediaType, MediaTypeError> {
    MediaType::parse_content_type(input)
}

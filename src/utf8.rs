//! UTF-8 バイト列の検証
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_header::utf8::validate_utf8;
//!
//! assert!(validate_utf8("こんにちは".as_bytes(), "query").is_ok());
//!
//! let e = validate_utf8(b"ab\x80cd", "query").unwrap_err();
//! assert_eq!(e.byte(), 0x80);
//! assert_eq!(e.context(), "query");
//! ```

use crate::error::BadEncodingError;

/// バイト列が正しい UTF-8 かどうか検証
///
/// 先頭からコードポイント単位で読み進め、最初に不正と判定されたシーケンスの
/// 先頭バイトをエラーとして返します。冗長表現、サロゲート、U+10FFFF 超は不正です。
/// 末尾で途切れたシーケンスは、その先頭バイトが報告されます。
pub fn validate_utf8(bytes: &[u8], context: &str) -> Result<(), BadEncodingError> {
    decode_utf8(bytes, context).map(|_| ())
}

/// UTF-8 として検証し、文字列として返す
pub fn decode_utf8<'a>(bytes: &'a [u8], context: &str) -> Result<&'a str, BadEncodingError> {
    std::str::from_utf8(bytes).map_err(|e| {
        // valid_up_to は不正なシーケンスの先頭を指すので、範囲内に必ず収まる
        let byte = bytes[e.valid_up_to()];
        #[cfg(feature = "tracing")]
        tracing::debug!(byte, context, offset = e.valid_up_to(), "invalid utf-8");
        BadEncodingError::new(byte, context)
    })
}

//! トークンパース (RFC 1341 Section 7.2 / RFC 2616 Section 2.2)
//!
//! ## 概要
//!
//! 引用符なしトークンと引用符付き文字列 (quoted-string) の両方を扱います。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_header::token::{token, TokenError};
//!
//! assert_eq!(token("utf-8").unwrap(), "utf-8");
//! assert_eq!(token("\"<foo>\"").unwrap(), "<foo>");
//! assert_eq!(token("<foo>"), Err(TokenError::InvalidChar));
//! ```

use core::fmt;

use crate::syntax;

/// トークンパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// 空のトークン
    Empty,
    /// 特殊文字または制御文字を含む
    InvalidChar,
    /// トークンの後ろに空白以外が続いている
    TrailingData,
    /// 引用符が閉じていない
    UnterminatedQuote,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Empty => write!(f, "empty token"),
            TokenError::InvalidChar => write!(f, "invalid token character"),
            TokenError::TrailingData => write!(f, "trailing data after token"),
            TokenError::UnterminatedQuote => write!(f, "unterminated quote"),
        }
    }
}

impl std::error::Error for TokenError {}

/// トークンをパース
///
/// 先頭が `"` なら引用符付き文字列として扱い、`\` によるエスケープを解決します。
/// それ以外は引用符なしトークンとして扱い、特殊文字と制御文字を拒否します。
/// どちらの場合も、トークンの後ろには LWS しか置けません。
/// 空文字列と、空白だけの入力は [`TokenError::Empty`] になります。
pub fn token(input: &str) -> Result<String, TokenError> {
    if input.is_empty() {
        return Err(TokenError::Empty);
    }

    if let Some(rest) = input.strip_prefix('"') {
        scan_quoted(rest)
    } else {
        scan_unquoted(input)
    }
}

fn scan_quoted(input: &str) -> Result<String, TokenError> {
    let mut value = String::new();
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if escaped {
            value.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            if !syntax::is_lws_only(&input.as_bytes()[i + 1..]) {
                return Err(TokenError::TrailingData);
            }
            return Ok(value);
        } else {
            value.push(c);
        }
    }

    Err(TokenError::UnterminatedQuote)
}

fn scan_unquoted(input: &str) -> Result<String, TokenError> {
    let bytes = input.as_bytes();
    let mut end = 0;

    while end < bytes.len() {
        let b = bytes[end];
        // CR は CTL なので、CRLF の判定を先に行う
        if syntax::is_whitespace(b) || bytes[end..].starts_with(b"\r\n") {
            break;
        }
        if syntax::is_special(b) || syntax::is_ctl(b) {
            return Err(TokenError::InvalidChar);
        }
        end += 1;
    }

    if !syntax::is_lws_only(&bytes[end..]) {
        return Err(TokenError::TrailingData);
    }
    if end == 0 {
        return Err(TokenError::Empty);
    }

    Ok(input[..end].to_string())
}

/// 引用符で囲む必要があるかどうか
pub(crate) fn needs_quoting(s: &str) -> bool {
    s.is_empty() || !s.bytes().all(syntax::is_token_byte)
}

/// `token` で読み戻せる形に直列化する
pub(crate) fn quote_if_needed(s: &str) -> String {
    if needs_quoting(s) {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        s.to_string()
    }
}

//! メディアタイプパース (RFC 1341 Section 4 / RFC 2616 Section 3.7)
//!
//! ## 概要
//!
//! `type/subtype[; parameters]` 形式の値をパースします。
//! `Accept` で使われるワイルドカード (`*/*`, `type/*`) も受け付けます。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_header::media_type::MediaType;
//!
//! let mt = MediaType::parse("APPLICATION/vnd.ms-data+XML").unwrap();
//! assert_eq!(mt.media_type(), "application");
//! assert_eq!(mt.subtype(), "vnd.ms-data+xml");
//!
//! let mt = MediaType::parse("text/*; q=0.5").unwrap();
//! assert!(mt.is_wildcard());
//! assert_eq!(mt.parameter("Q"), Some("0.5"));
//!
//! assert!(MediaType::parse("*/html").is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use crate::accept::QValue;
use crate::params::{params, Parameters};
use crate::syntax;
use crate::token::quote_if_needed;

/// メディアタイプパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaTypeError {
    /// type が空、不正な文字を含む、または `/` が続かない
    InvalidType,
    /// subtype が空
    InvalidSubtype,
    /// subtype の後ろに `;` 以外が続いている
    TrailingData,
    /// ワイルドカードは許可されていない
    WildcardNotAllowed,
}

impl fmt::Display for MediaTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaTypeError::InvalidType => write!(f, "invalid media type"),
            MediaTypeError::InvalidSubtype => write!(f, "invalid media subtype"),
            MediaTypeError::TrailingData => write!(f, "trailing data after media type"),
            MediaTypeError::WildcardNotAllowed => write!(f, "wildcard media type not allowed"),
        }
    }
}

impl std::error::Error for MediaTypeError {}

/// パース済みメディアタイプ
///
/// ```text
/// media-type = type "/" subtype *( ";" parameter )
/// type       = "*" / 1*( ALPHA / DIGIT / "-" )
/// subtype    = "*" / 1*( ALPHA / DIGIT / "-" / "." / "+" )
/// parameter  = attribute "=" value
/// ```
///
/// type と subtype、パラメータのキーは小文字化されます。
/// パラメータの値は大文字小文字を保持します。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType {
    media_type: String,
    subtype: String,
    parameters: Parameters,
}

enum State {
    InType,
    AfterSlash,
    InSubtype,
}

impl MediaType {
    /// メディアタイプ文字列をパース
    ///
    /// subtype の後ろに `;` 以外が続く場合は、type/subtype が正しくても全体がエラーになります。
    /// `;` 以降のパラメータ部は [`params`] で読み、不正なセグメントだけが捨てられます。
    pub fn parse(input: &str) -> Result<Self, MediaTypeError> {
        let bytes = input.as_bytes();
        let start = syntax::skip_lws(bytes, 0);

        let (media_type, subtype, end) = if bytes[start..].starts_with(b"*/*") {
            ("*".to_string(), "*".to_string(), start + 3)
        } else {
            scan_type_subtype(input, start)?
        };

        let pos = syntax::skip_lws(bytes, end);
        let parameters = match bytes.get(pos) {
            None => Parameters::new(),
            Some(b';') => params(&input[pos + 1..]),
            Some(_) => return Err(MediaTypeError::TrailingData),
        };

        Ok(MediaType {
            media_type,
            subtype,
            parameters,
        })
    }

    /// 新しい MediaType を作成
    pub fn new(media_type: &str, subtype: &str) -> Self {
        MediaType {
            media_type: media_type.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
            parameters: Parameters::new(),
        }
    }

    /// パラメータを追加 (同じキーは上書き)
    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.parameters
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// type を取得 (例: "text")
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// subtype を取得 (例: "html")
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// `type/subtype` を取得
    pub fn mime_type(&self) -> String {
        format!("{}/{}", self.media_type, self.subtype)
    }

    /// すべてのパラメータを取得
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// パラメータを取得 (名前は大文字小文字を区別しない)
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// charset パラメータを取得
    pub fn charset(&self) -> Option<&str> {
        self.parameter("charset")
    }

    /// boundary パラメータを取得
    pub fn boundary(&self) -> Option<&str> {
        self.parameter("boundary")
    }

    /// q 値を取得
    ///
    /// q パラメータがない、または数値として読めない場合は 1.0 になります。
    pub fn qvalue(&self) -> QValue {
        QValue::from_parameters(&self.parameters)
    }

    /// subtype がワイルドカードかどうか (`*/*` または `type/*`)
    pub fn is_wildcard(&self) -> bool {
        self.subtype == "*"
    }

    /// このメディアレンジが `other` にマッチするかどうか
    ///
    /// パラメータは比較しません。
    pub fn matches(&self, other: &MediaType) -> bool {
        (self.media_type == "*" || self.media_type == other.media_type)
            && (self.subtype == "*" || self.subtype == other.subtype)
    }

    /// text/* かどうか
    pub fn is_text(&self) -> bool {
        self.media_type == "text"
    }

    /// application/json かどうか
    pub fn is_json(&self) -> bool {
        self.media_type == "application" && self.subtype == "json"
    }

    /// multipart/* かどうか
    pub fn is_multipart(&self) -> bool {
        self.media_type == "multipart"
    }

    /// multipart/form-data かどうか
    pub fn is_form_data(&self) -> bool {
        self.media_type == "multipart" && self.subtype == "form-data"
    }

    /// application/x-www-form-urlencoded かどうか
    pub fn is_form_urlencoded(&self) -> bool {
        self.media_type == "application" && self.subtype == "x-www-form-urlencoded"
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::parse(s)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.media_type, self.subtype)?;
        for (name, value) in &self.parameters {
            write!(f, "; {}={}", name, quote_if_needed(value))?;
        }
        Ok(())
    }
}

/// メディアタイプをパース
pub fn media_type(input: &str) -> Result<MediaType, MediaTypeError> {
    MediaType::parse(input)
}

/// `start` から type と subtype を読み、小文字化した値と終了位置を返す
fn scan_type_subtype(
    input: &str,
    start: usize,
) -> Result<(String, String, usize), MediaTypeError> {
    let bytes = input.as_bytes();
    let mut state = State::InType;
    let mut pos = start;
    let mut slash = start;

    loop {
        let b = bytes.get(pos).copied();
        match state {
            State::InType => match b {
                Some(b'/') if pos > start => {
                    slash = pos;
                    state = State::AfterSlash;
                }
                Some(c) if is_type_byte(c) => {}
                _ => return Err(MediaTypeError::InvalidType),
            },
            State::AfterSlash => {
                if b == Some(b'*') {
                    let media_type = input[start..slash].to_ascii_lowercase();
                    return Ok((media_type, "*".to_string(), pos + 1));
                }
                state = State::InSubtype;
                continue;
            }
            State::InSubtype => match b {
                Some(c) if is_subtype_byte(c) => {}
                _ => {
                    if pos == slash + 1 {
                        return Err(MediaTypeError::InvalidSubtype);
                    }
                    let media_type = input[start..slash].to_ascii_lowercase();
                    let subtype = input[slash + 1..pos].to_ascii_lowercase();
                    return Ok((media_type, subtype, pos));
                }
            },
        }
        pos += 1;
    }
}

fn is_type_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_subtype_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'+')
}

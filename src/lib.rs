//! # shiguredo_http_header
//!
//! HTTP ヘッダー値のパーサーライブラリ (Sans I/O)
//!
//! ## 特徴
//!
//! - **Sans I/O**: 入力はバイト列 / 文字列のみで、I/O を一切行わない
//! - **状態なし**: すべての操作は純粋関数で、グローバルな状態やキャッシュを持たない
//! - **最小依存**: ログ出力用の `tracing` (デフォルト有効の feature) のみ
//!
//! ## 対応するもの
//!
//! - メディアタイプ (`Content-Type`, `Accept`) とそのパラメータ
//! - RFC 1341 トークン (引用符付き文字列を含む)
//! - カンマ区切りリスト
//! - q 値によるコンテントネゴシエーションの並べ替え
//! - UTF-8 バイト列の検証
//!
//! ## エラーの扱い
//!
//! 文法エラー ([`MediaTypeError`], [`TokenError`]) は通常の戻り値です。
//! リスト系の操作は不正な要素を黙って取り除きます。
//!
//! 不正な UTF-8 は [`BadEncodingError`] として区別されます。
//! これは相手側のプロトコル違反なので、呼び出し側は `?` で上位に伝播させます。
//!
//! ## 使い方
//!
//! ```rust
//! use shiguredo_http_header::{accept, content_type, list, media_type, params, token, validate_utf8};
//!
//! let mt = media_type("text/html; charset=UTF-8").unwrap();
//! assert_eq!(mt.mime_type(), "text/html");
//! assert_eq!(mt.charset(), Some("UTF-8"));
//!
//! assert!(content_type("text/*").is_err());
//!
//! let p = params("Foo=bar; baz=BOING");
//! assert_eq!(p["foo"], "bar");
//!
//! assert_eq!(token("\"<foo>\"").unwrap(), "<foo>");
//! assert_eq!(list("gzip, , br"), ["gzip", "br"]);
//!
//! let ranked = accept("*/*;q=0.1, application/json", true);
//! assert!(ranked[0].is_json());
//!
//! fn read_form(body: &[u8]) -> Result<(), shiguredo_http_header::BadEncodingError> {
//!     validate_utf8(body, "form body")?;
//!     Ok(())
//! }
//! assert!(read_form(b"a=1").is_ok());
//! assert_eq!(read_form(b"a=\x80").unwrap_err().byte(), 0x80);
//! ```

pub mod accept;
pub mod content_type;
mod error;
pub mod list;
pub mod media_type;
pub mod params;
mod syntax;
pub mod token;
pub mod utf8;

pub use accept::{accept, media_type_list, sort_media_types, QValue};
pub use content_type::content_type;
pub use error::BadEncodingError;
pub use list::list;
pub use media_type::{media_type, MediaType, MediaTypeError};
pub use params::{params, Parameters};
pub use token::{token, TokenError};
pub use utf8::{decode_utf8, validate_utf8};

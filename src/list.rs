//! カンマ区切りリストの分割 (RFC 2616 Section 2.1 `#rule`)
//!
//! ```rust
//! use shiguredo_http_header::list::list;
//!
//! assert_eq!(list("empties, , are,, filtered"), ["empties", "are", "filtered"]);
//! ```

use crate::syntax;

/// カンマ区切りの値を分割
///
/// 各要素の前後の LWS を取り除き、空になった要素は捨てます。順序は保持されます。
pub fn list(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(syntax::trim_lws)
        .filter(|element| !element.is_empty())
        .collect()
}

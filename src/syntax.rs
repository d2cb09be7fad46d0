//! RFC 1341 / RFC 2616 の字句規則

/// SP / HTAB
pub(crate) fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// CTL: 0-31 と DEL (127)
pub(crate) fn is_ctl(b: u8) -> bool {
    b < 32 || b == 127
}

/// tspecials: `()<>@,;:\"/[]?={}`
pub(crate) fn is_special(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'/' | b'['
            | b']' | b'?' | b'=' | b'{' | b'}'
    )
}

/// 引用符なしトークンに使える文字かどうか
///
/// 非 ASCII バイトは許容する。
pub(crate) fn is_token_byte(b: u8) -> bool {
    !is_special(b) && !is_ctl(b) && b != b' '
}

/// `pos` から LWS (SP / HTAB / CRLF) を読み飛ばした位置を返す
pub(crate) fn skip_lws(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() {
        if is_whitespace(bytes[pos]) {
            pos += 1;
        } else if bytes[pos..].starts_with(b"\r\n") {
            pos += 2;
        } else {
            break;
        }
    }
    pos
}

/// 前後の LWS を取り除く
pub(crate) fn trim_lws(input: &str) -> &str {
    let bytes = input.as_bytes();
    let start = skip_lws(bytes, 0);
    let mut end = bytes.len();
    while end > start {
        if is_whitespace(bytes[end - 1]) {
            end -= 1;
        } else if end - start >= 2 && bytes[end - 2] == b'\r' && bytes[end - 1] == b'\n' {
            end -= 2;
        } else {
            break;
        }
    }
    // start / end はどちらも ASCII バイトの境界
    &input[start..end]
}

/// 残りが LWS だけかどうか
pub(crate) fn is_lws_only(bytes: &[u8]) -> bool {
    skip_lws(bytes, 0) == bytes.len()
}

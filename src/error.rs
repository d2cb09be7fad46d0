use std::fmt;

/// 不正なバイト列エラー
///
/// 文法エラーとは異なり、相手側のプロトコル違反を表します。
/// 呼び出し側はこのエラーを握りつぶさず、上位のエラー応答層まで伝播させます。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadEncodingError {
    byte: u8,
    context: String,
}

impl BadEncodingError {
    /// 新しい BadEncodingError を作成
    pub fn new(byte: u8, context: &str) -> Self {
        BadEncodingError {
            byte,
            context: context.to_string(),
        }
    }

    /// 最初に不正と判定されたバイト
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// 呼び出し側が指定したコンテキスト
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for BadEncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad encoding in {}: 0x{:02x}", self.context, self.byte)
    }
}

impl std::error::Error for BadEncodingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = BadEncodingError::new(0x80, "form body");
        assert_eq!(e.to_string(), "bad encoding in form body: 0x80");
        assert_eq!(e.byte(), 0x80);
        assert_eq!(e.context(), "form body");
    }

    #[test]
    fn test_is_error_trait() {
        let e: Box<dyn std::error::Error> = Box::new(BadEncodingError::new(0xff, "x"));
        assert_eq!(e.to_string(), "bad encoding in x: 0xff");
    }
}

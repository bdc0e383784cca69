use std::{error::Error, fmt::Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// 空字符串, 或只有符号位
    Empty,

    /// 非十进制数字字符
    InvalidDigit { chr: char, idx: usize },
}

impl Display for ParseBigIntError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("cannot parse integer from empty string"),
            Self::InvalidDigit { chr, idx } => f.write_fmt(format_args!(
                "invalid decimal digit `{chr}` at index `{idx}`"
            )),
        }
    }
}

impl Error for ParseBigIntError {}

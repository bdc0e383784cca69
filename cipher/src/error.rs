use std::{error::Error, fmt::Display};

#[derive(Clone, Debug)]
pub enum CipherError {
    /// 模数位长不合法: 必须是8的正整数倍且足够容纳种子区
    InvalidModulusBits { bits: usize },

    /// 待编码消息的字节长度和编码参数不匹配
    InvalidMessageSize { target: usize, real: usize },

    /// 编码块的字节长度和编码参数不匹配
    InvalidBlockSize { target: usize, real: usize },

    /// 密钥字符串不是`<e>,<bits>,<n>`形式
    InvalidKeyEncoding(String),
}

impl Display for CipherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidModulusBits { bits } => f.write_fmt(format_args!(
                "Invalid modulus bit length `{bits}`: need a positive multiple of 8 with room for the seed"
            )),
            Self::InvalidMessageSize { target, real } => f.write_fmt(format_args!(
                "Invalid message size `{real}` not match to target size `{target}`"
            )),
            Self::InvalidBlockSize { target, real } => f.write_fmt(format_args!(
                "Invalid block size `{real}` not match to target size `{target}`"
            )),
            Self::InvalidKeyEncoding(s) => {
                f.write_fmt(format_args!("Invalid key encoding: {s}"))
            }
        }
    }
}

impl Error for CipherError {}

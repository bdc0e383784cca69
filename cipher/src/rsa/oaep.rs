//! 自定义的OAEP风格填充.
//!
//! 与RFC 8017的标准OAEP不同, 这里只清零最高的2个*位*而不是整字节的前导零:
//! 生成密钥时p和q都不小于$2^{bits/2-1}$, 故$n \ge 2^{bits-2}$, 编码块的值
//! 只要低于$2^{bits-2}$就一定小于模数; 清零的位越少, 块里的熵越多.
//!
//! 块布局(字节): `[随机种子区 | 1字节校验和 | 消息区]`, 其中
//! `enc = n/8`, `msg = 7*enc/8`, `seed = enc - msg - 1`.
//!
//! 两轮Feistel式掩码: 先用H(种子区)生成的密钥流盖住校验和+消息区,
//! 再用H(盖住后的校验和+消息区)生成的密钥流盖住种子区; 摘要不够长就
//! 重复使用. 解码按相反顺序执行同样的两次哈希, 最后重算校验和验证.

use crate::{Checksum, CipherError, Digest, Rand};
use std::cell::RefCell;
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

/// 编码参数完全由模数位长决定, 本身无可变状态; 哈希, 校验和与随机源
/// 都是注入的能力.
pub struct OaepPadding<H, C, R> {
    enc_size: usize,
    msg_size: usize,
    hasher: RefCell<H>,
    checksum: C,
    rng: RefCell<R>,
}

impl<H: Digest, C: Checksum, R: Rand> OaepPadding<H, C, R> {
    /// `modulus_bits`必须是8的正整数倍, 且块里至少要容得下1字节种子,
    /// 1字节校验和与消息.
    pub fn new(
        modulus_bits: usize,
        hasher: H,
        checksum: C,
        rng: R,
    ) -> Result<Self, CipherError> {
        if modulus_bits == 0 || modulus_bits % 8 != 0 {
            return Err(CipherError::InvalidModulusBits { bits: modulus_bits });
        }

        let enc_size = modulus_bits / 8;
        let msg_size = 7 * enc_size / 8;
        if msg_size == 0 || enc_size - msg_size < 2 {
            return Err(CipherError::InvalidModulusBits { bits: modulus_bits });
        }

        Ok(Self {
            enc_size,
            msg_size,
            hasher: RefCell::new(hasher),
            checksum,
            rng: RefCell::new(rng),
        })
    }

    /// 编码块的字节数, n/8
    pub fn encoded_size(&self) -> usize {
        self.enc_size
    }

    /// 消息载荷的字节数, floor(7*enc/8)
    pub fn message_size(&self) -> usize {
        self.msg_size
    }

    /// 随机种子区的字节数, enc - msg - 1
    pub fn seed_size(&self) -> usize {
        self.enc_size - self.msg_size - 1
    }

    /// 把`msg_size`字节的消息编码成`enc_size`字节的块. 同一消息每次编码
    /// 产生不同的块, 确定性密文攻击因此失效.
    pub fn encode(&self, msg: &[u8]) -> Result<Vec<u8>, CipherError> {
        if msg.len() != self.msg_size {
            return Err(CipherError::InvalidMessageSize {
                target: self.msg_size,
                real: msg.len(),
            });
        }

        let seed_size = self.seed_size();
        let mut enc = vec![0u8; self.enc_size];

        // 消息放在块的高偏移端, 校验和紧贴在消息之前
        enc[seed_size + 1..].copy_from_slice(msg);
        enc[seed_size] = self.checksum.update(0, msg);

        // 种子区填充随机字节, 清零最高2位保证编码值小于模数
        self.rng.borrow_mut().rand(&mut enc[..seed_size]);
        enc[0] &= 0x3F;

        let mut hasher = self.hasher.borrow_mut();
        hasher.reset();
        hasher.update(&enc[..seed_size]);
        #[allow(unused_mut)]
        let mut gmask = hasher.finish();
        xor_mask(&mut enc[seed_size..], &gmask);

        hasher.reset();
        hasher.update(&enc[seed_size..]);
        #[allow(unused_mut)]
        let mut hmask = hasher.finish();
        drop(hasher);
        xor_mask(&mut enc[..seed_size], &hmask);
        enc[0] &= 0x3F;

        #[cfg(feature = "sec-zeroize")]
        {
            gmask.zeroize();
            hmask.zeroize();
        }

        Ok(enc)
    }

    /// 解码并验证. 内容损坏不报错, 只把`valid`置false; 只有块长不符
    /// 才是调用方错误.
    pub fn decode(&self, enc: &[u8]) -> Result<(Vec<u8>, bool), CipherError> {
        if enc.len() != self.enc_size {
            return Err(CipherError::InvalidBlockSize {
                target: self.enc_size,
                real: enc.len(),
            });
        }

        let seed_size = self.seed_size();

        let mut hasher = self.hasher.borrow_mut();
        hasher.reset();
        hasher.update(&enc[seed_size..]);
        #[allow(unused_mut)]
        let mut hmask = hasher.finish();

        // 还原种子区, 重现编码时的清零
        #[allow(unused_mut)]
        let mut seed: Vec<u8> = enc[..seed_size]
            .iter()
            .enumerate()
            .map(|(i, &b)| b ^ hmask[i % hmask.len()])
            .collect();
        if let Some(b) = seed.first_mut() {
            *b &= 0x3F;
        }

        hasher.reset();
        hasher.update(&seed);
        #[allow(unused_mut)]
        let mut gmask = hasher.finish();
        drop(hasher);

        let crc = enc[seed_size] ^ gmask[0];
        let mut msg = vec![0u8; self.msg_size];
        for (k, b) in msg.iter_mut().enumerate() {
            *b = enc[seed_size + 1 + k] ^ gmask[(k + 1) % gmask.len()];
        }

        let valid = self.checksum.update(0, &msg) == crc;

        #[cfg(feature = "sec-zeroize")]
        {
            seed.zeroize();
            gmask.zeroize();
            hmask.zeroize();
        }

        Ok((msg, valid))
    }
}

// 密钥流按掩码长度循环重复
fn xor_mask(data: &mut [u8], mask: &[u8]) {
    for (i, b) in data.iter_mut().enumerate() {
        *b ^= mask[i % mask.len()];
    }
}

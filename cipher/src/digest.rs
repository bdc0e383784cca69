//! 哈希原语的注入能力. 填充方案只依赖该trait的契约: 确定性的定宽摘要,
//! 抗碰撞和抗原像; 任何标准的256位哈希都满足要求.

/// 对象风格的摘要接口. 掩码生成把摘要按需重复/截断成密钥流,
/// 所以实现只需提供reset/update/finish三步.
pub trait Digest {
    /// 摘要的字节长度
    fn digest_len(&self) -> usize;

    fn reset(&mut self);

    fn update(&mut self, data: &[u8]);

    /// 取出摘要并复位内部状态
    fn finish(&mut self) -> Vec<u8>;
}

impl<T> Digest for T
where
    T: sha2::digest::Digest + sha2::digest::FixedOutputReset,
{
    fn digest_len(&self) -> usize {
        <T as sha2::digest::Digest>::output_size()
    }

    fn reset(&mut self) {
        sha2::digest::Digest::reset(self);
    }

    fn update(&mut self, data: &[u8]) {
        sha2::digest::Digest::update(self, data);
    }

    fn finish(&mut self) -> Vec<u8> {
        sha2::digest::Digest::finalize_reset(self).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::Digest;
    use sha2::{Digest as _, Sha256};

    #[test]
    fn sha256_satisfies_the_capability() {
        let mut hasher = Sha256::new();
        assert_eq!(Digest::digest_len(&hasher), 32);

        Digest::update(&mut hasher, b"abc");
        let d1 = Digest::finish(&mut hasher);
        assert_eq!(
            d1.as_slice(),
            [
                0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d,
                0xae, 0x22, 0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10,
                0xff, 0x61, 0xf2, 0x00, 0x15, 0xad
            ]
        );

        // finish复位状态, 两次独立计算结果一致
        Digest::update(&mut hasher, b"abc");
        assert_eq!(Digest::finish(&mut hasher), d1);

        Digest::update(&mut hasher, b"ab");
        Digest::reset(&mut hasher);
        Digest::update(&mut hasher, b"abc");
        assert_eq!(Digest::finish(&mut hasher), d1);
    }
}

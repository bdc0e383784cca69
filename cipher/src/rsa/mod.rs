//! RSA
//!
//! - 随机选择两个质数$p$和$q$($p \neq q$), 模数$n = p \cdot q$;
//! - 在$[1, \phi)$中随机选择与$\phi = (p-1)(q-1)$互质的$e$作为公钥指数;
//! - 私钥指数$d$满足$d \cdot e \equiv 1 \mod \phi$;
//!
//! 加密: $c = m^e \mod n$; 解密: $m = c^d \mod n$; 两者是同一个模幂变换.
//!
//! 原理: 欧拉定理$a^{\phi(n)} \equiv 1 \mod n$, 故$m^{k\phi+1} \equiv m \mod n$.
//!
//! 裸的模幂是确定性的, 相同明文总是产生相同密文; 发送前先用[`OaepPadding`]
//! 把明文随机化成模数宽度的块, 再交给[`RsaKey::transform`].

mod key;
pub use key::RsaKey;

mod keygen;
pub use keygen::generate_key_pair;

mod oaep;
pub use oaep::OaepPadding;

#[cfg(test)]
mod tests {
    use super::{generate_key_pair, OaepPadding};
    use crate::{Crc8, DefaultRand};
    use bignum::BigInt;
    use rand::Rand;
    use sha2::{Digest as _, Sha256};

    // 变换输出左侧补零到块宽
    fn to_block(v: &BigInt, len: usize) -> Vec<u8> {
        let bytes = v.to_bytes_be();
        let mut block = vec![0u8; len - bytes.len()];
        block.extend_from_slice(&bytes);
        block
    }

    #[test]
    fn end_to_end_encrypt_decrypt() {
        let mut rng = DefaultRand::default();
        let (public, private) = generate_key_pair(512, &mut rng);
        let padding = OaepPadding::new(
            512,
            Sha256::new(),
            Crc8::default(),
            DefaultRand::default(),
        )
        .unwrap();

        let mut msg = vec![0u8; padding.message_size()];
        rng.rand(&mut msg);
        assert_eq!(msg.len(), 56);

        // 发送方: 填充后用私钥指数加密
        let encoded = padding.encode(&msg).unwrap();
        let c = private.transform(&BigInt::from_bytes_be(&encoded));

        // 接收方: 公钥指数解密后去填充
        let recovered = public.transform(&c);
        let block = to_block(&recovered, padding.encoded_size());
        let (decoded, valid) = padding.decode(&block).unwrap();

        assert!(valid);
        assert_eq!(decoded, msg);
    }

    #[test]
    fn tampered_ciphertext_fails_validation() {
        let mut rng = DefaultRand::default();
        let (public, private) = generate_key_pair(512, &mut rng);
        let padding = OaepPadding::new(
            512,
            Sha256::new(),
            Crc8::default(),
            DefaultRand::default(),
        )
        .unwrap();

        let mut msg = vec![0u8; padding.message_size()];
        rng.rand(&mut msg);

        let encoded = padding.encode(&msg).unwrap();
        let c = public.transform(&BigInt::from_bytes_be(&encoded));

        // 篡改密文再解密, 填充验证必须拒绝
        let tampered = &c + &BigInt::from(1u32);
        let recovered = private.transform(&tampered);
        let block = to_block(&recovered, padding.encoded_size());
        let (decoded, valid) = padding.decode(&block).unwrap();

        assert!(!valid || decoded != msg);
    }
}

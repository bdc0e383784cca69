//! RSA密钥. 公钥和私钥结构完全相同(指数+模数), 加解密都是同一个模幂变换
//! $v^e \mod n$, 区别只在于指数的取值和调用方的用法.

use crate::CipherError;
use bignum::{BigInt, Montgomery};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// 一把RSA密钥: 位长标签, 指数(公钥e或私钥d), 以及绑定模数n的Montgomery上下文.
/// 同一把密钥的所有变换复用一个上下文, 模数相关的常量只计算一次.
#[derive(Clone, Debug)]
pub struct RsaKey {
    bits: u32,
    exponent: BigInt,
    modulus: Montgomery,
}

impl RsaKey {
    pub fn new(bits: u32, exponent: BigInt, modulus: BigInt) -> Self {
        Self {
            bits,
            exponent,
            modulus: Montgomery::new(modulus),
        }
    }

    /// 密钥标称的模数位长
    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn exponent(&self) -> &BigInt {
        &self.exponent
    }

    pub fn modulus(&self) -> &BigInt {
        self.modulus.modulus()
    }

    /// 原始RSA变换$v^{exp} \mod n$. 加密和解密是同一个操作;
    /// 输入不小于模数时按模数约简.
    pub fn transform(&self, v: &BigInt) -> BigInt {
        self.modulus.exp_mod(v, &self.exponent)
    }
}

/// 序列化格式: `<e十进制>,<位长十进制>,<n十进制>`, 公钥和私钥相同
impl Display for RsaKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.exponent, self.bits, self.modulus.modulus())
    }
}

impl FromStr for RsaKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 只按前两个逗号切分
        let mut fields = s.splitn(3, ',');
        let (exp, bits, modulus) = match (fields.next(), fields.next(), fields.next()) {
            (Some(e), Some(b), Some(m)) => (e, b, m),
            _ => {
                return Err(CipherError::InvalidKeyEncoding(
                    "expect `<e>,<bits>,<n>`".to_string(),
                ))
            }
        };

        let exponent = BigInt::from_str(exp)
            .map_err(|e| CipherError::InvalidKeyEncoding(format!("exponent: {e}")))?;
        let bits = u32::from_str(bits)
            .map_err(|e| CipherError::InvalidKeyEncoding(format!("bit length: {e}")))?;
        let modulus = BigInt::from_str(modulus)
            .map_err(|e| CipherError::InvalidKeyEncoding(format!("modulus: {e}")))?;
        if exponent.is_nan() || modulus.is_nan() {
            return Err(CipherError::InvalidKeyEncoding(
                "exponent and modulus must be numbers".to_string(),
            ));
        }

        Ok(Self::new(bits, exponent, modulus))
    }
}

impl Serialize for RsaKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RsaKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::RsaKey;
    use bignum::BigInt;
    use std::str::FromStr;

    // 教科书上的玩具密钥: n = 61 * 53, e = 17, d = 2753
    fn toy_pair() -> (RsaKey, RsaKey) {
        let n = BigInt::from(3233u32);
        (
            RsaKey::new(12, BigInt::from(17u32), n.clone()),
            RsaKey::new(12, BigInt::from(2753u32), n),
        )
    }

    #[test]
    fn transform_round_trip() {
        let (public, private) = toy_pair();
        let m = BigInt::from(65u32);
        let c = public.transform(&m);
        assert_eq!(c, BigInt::from(2790u32));
        assert_eq!(private.transform(&c), m);

        // 两个方向走的是同一个变换
        let c = private.transform(&m);
        assert_eq!(public.transform(&c), m);
    }

    #[test]
    fn string_round_trip() {
        let (public, private) = toy_pair();
        assert_eq!(public.to_string(), "17,12,3233");
        assert_eq!(private.to_string(), "2753,12,3233");

        let parsed = RsaKey::from_str("17,12,3233").unwrap();
        assert_eq!(parsed.bits(), 12);
        assert_eq!(parsed.exponent(), &BigInt::from(17u32));
        assert_eq!(parsed.modulus(), &BigInt::from(3233u32));
        assert_eq!(
            parsed.transform(&BigInt::from(65u32)),
            BigInt::from(2790u32)
        );
    }

    #[test]
    fn malformed_strings_are_rejected() {
        for s in [
            "",
            "17",
            "17,12",
            "17,12x,3233",
            "17,,3233",
            "a,12,3233",
            "17,12,32b3",
            "nan,12,3233",
            "17,12,nan",
        ] {
            assert!(RsaKey::from_str(s).is_err(), "accepted `{}`", s);
        }
    }

    #[test]
    fn serde_round_trip() {
        let (public, _) = toy_pair();
        let json = serde_json::to_string(&public).unwrap();
        assert_eq!(json, "\"17,12,3233\"");
        let back: RsaKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), public.to_string());
    }
}

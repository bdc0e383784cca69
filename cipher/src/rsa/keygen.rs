//! RSA密钥对生成. 素数来自Miller-Rabin概率测试, 因此在极小概率下p或q可能
//! 不是素数; 生成流程最后用随机值做一轮加解密自检, 自检不过就整体重来.

use crate::rsa::RsaKey;
use bignum::{probable_prime, BigInt, Montgomery};
use rand::Rand;

/// 生成`bits`位的密钥对, 返回(公钥, 私钥). 两把密钥不共享任何可变状态.
/// 重试不设上限: 随机源异常时宁可不终止也不返回一把坏密钥.
pub fn generate_key_pair<R: Rand>(bits: u32, rng: &mut R) -> (RsaKey, RsaKey) {
    let one = BigInt::from(1u32);

    loop {
        let p = probable_prime(bits as usize / 2, rng);
        let q = probable_prime(bits as usize / 2, rng);

        let n = &p * &q;
        let phi = &(&p - &one) * &(&q - &one);

        // gcd(e, phi) = 1且e < phi
        let e = loop {
            let e = BigInt::random(bits as usize, rng);
            if e.gcd(&phi) == one && e < phi {
                break e;
            }
        };

        let d = e.mod_inverse(&phi);
        if d.is_nan() {
            // gcd已保证可逆, 走到这里说明中间运算出了错, 整体重来
            continue;
        }

        // 自检: 5个随机值过一遍双向变换. 失败意味着素数测试给出了伪素数
        // (概率极小但非零), 此时整个密钥对作废.
        let mont = Montgomery::new(n.clone());
        let ok = (0..5).all(|_| {
            let test = BigInt::random(bits as usize - 2, rng);
            let enc = mont.exp_mod(&test, &d);
            let dec = mont.exp_mod(&enc, &e);
            dec == test
        });
        if !ok {
            continue;
        }

        return (RsaKey::new(bits, e, n.clone()), RsaKey::new(bits, d, n));
    }
}

//! Montgomery模幂. 绑定单个奇模数, 缓存与模数相关的常量(字逆元, R和R²的剩余),
//! 把模幂中的试除替换为逐字的乘累加和移位(Handbook of Applied Cryptography
//! 算法14.36/14.94). 同一把RSA密钥的所有变换共享一个上下文, 常量只算一次.

use crate::BigInt;
use std::cell::OnceCell;
use std::cmp::Ordering;

#[derive(Debug)]
pub struct Montgomery {
    m: BigInt,
    cache: OnceCell<Constants>,
}

#[derive(Debug)]
struct Constants {
    // -m^{-1} mod 2^32
    minv: u32,
    // R mod m, 即Montgomery域中的1
    rmod: BigInt,
    // R² mod m, 进入Montgomery域的乘数
    r2mod: BigInt,
}

impl Constants {
    fn new(m: &BigInt) -> Self {
        // 牛顿迭代t <- t*(2 - v*t), 每轮精度翻倍, 4轮后在2^32内收敛;
        // 要求v是奇数
        let v = m.digit(0);
        let mut t = v;
        for _ in 0..4 {
            t = t.wrapping_mul(2u32.wrapping_sub(v.wrapping_mul(t)));
        }
        let minv = t.wrapping_neg();

        // R = b^words, b = 2^32
        let mut r = BigInt::default();
        r.set_bit(32 * m.word_len());
        let rmod = &r % m;
        let r2mod = &(&r * &r) % m;

        Self { minv, rmod, r2mod }
    }
}

impl Montgomery {
    /// 上下文在第一次使用时才计算常量. 模数必须是正奇数, 否则`exp_mod`返回NaN.
    pub fn new(modulus: BigInt) -> Self {
        Self {
            m: modulus,
            cache: OnceCell::new(),
        }
    }

    pub fn modulus(&self) -> &BigInt {
        &self.m
    }

    // HAC算法14.36: A <- (A + xi*y + ui*m) / b, 对每个模数字一轮;
    // 所有u32乘加都隐式地对b取模
    fn mont_mult(&self, x: &BigInt, y: &BigInt, c: &Constants) -> BigInt {
        let mut a = BigInt::default();
        let y0 = y.digit(0);

        for i in 0..self.m.word_len() {
            let xi = x.digit(i);
            let u = a
                .digit(0)
                .wrapping_add(xi.wrapping_mul(y0))
                .wrapping_mul(c.minv);
            a.mul_add_word_shifted(y, xi, 0);
            a.mul_add_word_shifted(&self.m, u, 0);
            a.shift_right_word();
        }

        // 输入都小于m时, 至多一次修正
        if a.cmp_magnitude(&self.m) != Ordering::Less {
            a.sub_magnitude(&self.m);
        }
        a
    }

    /// value^exponent mod m. 指数按从低到高逐位遍历: 置位时把当前底乘进累加器,
    /// 每一步都把底自乘; 累加器从R mod m(Montgomery域的1)出发, 最后乘1退出该域.
    pub fn exp_mod(&self, value: &BigInt, exponent: &BigInt) -> BigInt {
        if value.is_nan() || exponent.is_nan() || self.m.is_nan() {
            return BigInt::nan();
        }
        if self.m.is_negative() || !self.m.is_odd() {
            return BigInt::nan();
        }

        let c = self.cache.get_or_init(|| Constants::new(&self.m));

        let mut v = value.clone();
        if v.cmp_magnitude(&self.m) != Ordering::Less {
            // 取模开销大, 仅在需要时做
            v = &v % &self.m;
        }

        let mut a = c.rmod.clone();
        let mut x = self.mont_mult(&v, &c.r2mod, c);
        for i in 0..exponent.bit_length() {
            if exponent.bit(i) {
                a = self.mont_mult(&a, &x, c);
            }
            x = self.mont_mult(&x, &x, c);
        }
        self.mont_mult(&a, &BigInt::from(1u32), c)
    }
}

impl Clone for Montgomery {
    // 只复制模数, 常量在新上下文中按需重算
    fn clone(&self) -> Self {
        Self::new(self.m.clone())
    }
}

impl BigInt {
    /// 模幂self^exponent mod modulus. 非正模数得NaN; 负指数等价于正指数结果的
    /// 模逆(不可逆时为NaN); 奇模数走Montgomery加速路径.
    pub fn modpow(&self, exponent: &BigInt, modulus: &BigInt) -> BigInt {
        if self.is_nan() || exponent.is_nan() || modulus.is_nan() {
            return BigInt::nan();
        }
        if modulus.is_zero() || modulus.is_negative() {
            return BigInt::nan();
        }
        if modulus.is_one_magnitude() {
            return BigInt::default();
        }
        if self.is_zero() {
            return BigInt::default();
        }
        if self.is_one_magnitude() && !self.is_negative() {
            return BigInt::from(1u32);
        }
        if exponent.is_one_magnitude() {
            return if exponent.is_negative() {
                self.mod_inverse(modulus)
            } else {
                self % modulus
            };
        }

        let negate = exponent.is_negative();
        let mut e = exponent.clone();
        e.set_negative(false);

        let result = if modulus.is_odd() {
            Montgomery::new(modulus.clone()).exp_mod(self, &e)
        } else {
            // 偶模数退化为普通平方-乘. RSA模数是两个奇素数之积恒为奇数,
            // 此分支只为非RSA调用方保留, 不做优化
            self.modpow_plain(&e, modulus)
        };

        if negate {
            result.mod_inverse(modulus)
        } else {
            result
        }
    }

    fn modpow_plain(&self, exponent: &BigInt, modulus: &BigInt) -> BigInt {
        let mut r = BigInt::from(1u32);
        let mut t = self.clone();
        let mut n = exponent.clone();

        while !n.is_zero() {
            if n.is_odd() {
                r = &(&r * &t) % modulus;
            }
            n.shift_right(1);
            t = &(&t * &t) % modulus;
        }
        r
    }
}

//! 密码学安全随机源的注入能力. 所有需要随机性的算法(随机大整数, 素数生成, OAEP种子)
//! 都通过`Rand` trait获取随机字节, 不直接调用操作系统接口.

pub trait Rand {
    /// 用随机字节填充`random`
    fn rand(&mut self, random: &mut [u8]);
}

mod default_rand;
pub use default_rand::DefaultRand;

impl<T: xrand::RngCore> Rand for T {
    fn rand(&mut self, random: &mut [u8]) {
        self.fill_bytes(random);
    }
}

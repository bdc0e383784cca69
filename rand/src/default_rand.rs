use crate::Rand;
use xrand::rngs::OsRng;
use xrand::RngCore;

/// 默认随机源, 直接从操作系统熵池取随机字节. 密钥生成的安全性完全取决于
/// 这里的不可预测性; 测试中需要确定性时注入别的`Rand`实现.
#[derive(Copy, Clone, Default)]
pub struct DefaultRand {
    rng: OsRng,
}

impl Rand for DefaultRand {
    fn rand(&mut self, random: &mut [u8]) {
        self.rng.fill_bytes(random);
    }
}

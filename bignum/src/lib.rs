//! 多精度整数运算. RSA所需的全部数论运算都在本crate中从头实现, 不依赖第三方大整数库:
//!
//! - [`BigInt`]: 符号-数值表示的任意精度整数, 带粘性错误状态(NaN);
//! - [`Montgomery`]: 绑定单个奇模数的快速模幂上下文(HAC 14.36/14.94);
//! - [`is_probable_prime`]/[`probable_prime`]: Miller-Rabin概率素数测试及素数生成;
//!
//! 算术错误(除零, 不可逆的模逆, 非法模数)不会panic, 而是以NaN值的形式沿着后续
//! 运算传播, 调用方在信任结果前需检查[`BigInt::is_nan`].

mod bigint;
pub use bigint::BigInt;

mod error;
pub use error::ParseBigIntError;

mod montgomery;
pub use montgomery::Montgomery;

mod prime;
pub use prime::{is_probable_prime, probable_prime};

mod error;
pub use error::CipherError;

pub use rand::{DefaultRand, Rand};

mod digest;
pub use digest::Digest;

mod checksum;
pub use checksum::{Checksum, Crc8};

pub mod rsa;
pub use rsa::{generate_key_pair, OaepPadding, RsaKey};

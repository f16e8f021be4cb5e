//! Command implementations for OxiArith CLI.

pub mod compress;
pub mod info;
pub mod test;

pub use compress::{cmd_compress, cmd_decompress};
pub use info::cmd_info;
pub use test::cmd_test;

//! Library contracts the sticker contracts are built on.
pub mod erc165;
pub mod safe_math;

pub use erc165::Erc165;
pub use safe_math::SafeMath;

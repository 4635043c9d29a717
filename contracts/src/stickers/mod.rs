//! The sticker market contracts.
//!
//! - [`StickerType`] registers packs: owner, price, contenthash and
//!   categories.
//! - [`StickerPack`] is the ERC-721 token minted for each purchase.
//! - [`StickerMarket`] sells packs for SNT and administers the other two.
pub mod market;
pub mod pack;
pub mod sticker_type;

pub use market::StickerMarket;
pub use pack::StickerPack;
pub use sticker_type::StickerType;

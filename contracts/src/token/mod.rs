//! Token standards used by the sticker market.
pub mod erc20;
pub mod erc721;
pub mod minime;

pub use erc20::Erc20Token;
pub use erc721::{
    Erc721, Erc721Enumerable, Erc721Full, Erc721Metadata, Erc721Receiver,
};
pub use minime::{ApproveAndCallFallBack, MiniMeToken};

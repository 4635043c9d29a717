/*!
# Sticker market client

Browse, buy and install Status sticker packs on top of the
[`sticker_contracts`] bindings.

- [`api::Api`] lists the packs on sale and prepares purchases.
- [`contenthash`] turns on-chain contenthashes into IPFS gateway URLs.
- [`edn`] reads the pack metadata published on IPFS.
- [`store`] keeps the installed, pending and recently used packs.
*/

#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod config;
pub mod contenthash;
pub mod edn;
mod error;
pub mod fetch;
pub mod store;
pub mod types;

pub use error::{Error, Result};

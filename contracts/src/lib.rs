/*!
# Sticker contract bindings

Typed client-side bindings for the Status sticker market contracts
(`StickerMarket`, `StickerPack`, `StickerType`) and the token standards and
helper interfaces they are built from (`ERC20Token`, `ERC721`, `Controlled`,
`ERC165`, `TokenClaimer`, ...).

Every binding is a thin marshaling layer: arguments are ABI-encoded with
[`alloy::sol_types`], sent through a [`backend::Backend`], and the raw
return bytes are decoded back into typed values. The contract logic itself
lives on-chain.

```ignore
use sticker_contracts::{backend::RpcBackend, bind::CallOpts, stickers::StickerType};

let backend = RpcBackend::new(provider);
let sticker_type = StickerType::new(address, backend);
let count = sticker_type.caller.pack_count(&CallOpts::default()).await?;
```

Each contract binding exposes three roles, the same way generated bindings
usually do:

- a **caller** for read-only `eth_call`s,
- a **transactor** for state-changing transactions,
- a **filterer** for historical and live event logs.
*/

#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
mod macros;

pub mod access;
pub mod addresses;
pub mod backend;
pub mod bind;
pub mod deploy;
mod error;
pub mod event;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod stickers;
pub mod token;
pub mod utils;

pub use error::{Error, Result};

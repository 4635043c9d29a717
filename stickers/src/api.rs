//! The sticker market as seen by one user.
//!
//! [`Api`] lists the packs on sale, tracks which ones the user's accounts
//! own, keeps the installed, pending and recent packs in a [`PackStore`],
//! and prepares purchase transactions.
//!
//! Pack metadata is not stored on-chain: `StickerType` only records a
//! contenthash, which points at an EDN document on IPFS.
use std::collections::HashSet;

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionRequest,
};
use futures::{future, stream, StreamExt, TryStreamExt};
use sticker_contracts::{
    addresses::AddressBook,
    backend::Backend,
    bind::{CallOpts, TransactOpts, WatchOpts},
    event::{DecodedLog, Subscription},
    stickers::{
        market::buy_token_data,
        pack::IStickerPack,
        StickerPack as StickerPackContract, StickerType,
    },
    token::{minime::IMiniMeToken, MiniMeToken},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    contenthash,
    edn::PackMetadata,
    fetch::Fetcher,
    store::PackStore,
    types::{PackStatus, Sticker, StickerPack},
    Result,
};

/// Sticker market client.
#[derive(Debug)]
pub struct Api<B, S, F> {
    backend: B,
    store: S,
    fetcher: F,
    config: Config,
    addresses: AddressBook,
}

impl<B, S, F> Api<B, S, F>
where
    B: Backend + Clone,
    S: PackStore,
    F: Fetcher,
{
    /// Creates a client reading contracts through `backend`, metadata
    /// through `fetcher`, and keeping local state in `store`.
    pub fn new(backend: B, store: S, fetcher: F, config: Config) -> Self {
        let addresses = config.address_book();
        Self { backend, store, fetcher, config, addresses }
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Address of `StickerMarket` on `chain_id`.
    pub fn market_address(&self, chain_id: u64) -> Result<Address> {
        Ok(self.addresses.sticker_market(chain_id)?)
    }

    fn sticker_type(&self, chain_id: u64) -> Result<StickerType<B>> {
        let address = self.addresses.sticker_type(chain_id)?;
        Ok(StickerType::new(address, self.backend.clone()))
    }

    fn sticker_pack(&self, chain_id: u64) -> Result<StickerPackContract<B>> {
        let address = self.addresses.sticker_pack(chain_id)?;
        Ok(StickerPackContract::new(address, self.backend.clone()))
    }

    /// Every pack on sale that is neither installed nor pending, with its
    /// metadata and image URLs.
    ///
    /// Packs whose data cannot be retrieved are skipped. Packs owned by one
    /// of the configured accounts are marked [`PackStatus::Purchased`].
    pub async fn market(&self, chain_id: u64) -> Result<Vec<StickerPack>> {
        let mut packs = self.contract_packs(chain_id).await?;
        let purchased = self.accounts_purchased_packs(chain_id).await?;

        for pack in &mut packs {
            pack.status = if purchased.contains(&pack.id) {
                PackStatus::Purchased
            } else {
                PackStatus::Available
            };
        }
        packs.sort_by_key(|pack| pack.id);
        Ok(packs)
    }

    async fn contract_packs(&self, chain_id: u64) -> Result<Vec<StickerPack>> {
        let installed = self.store.installed()?;
        let pending = self.store.pending()?;
        let sticker_type = self.sticker_type(chain_id)?;

        let count = sticker_type.caller.pack_count(&CallOpts::default()).await?;
        debug!(chain_id, %count, "listing sticker packs");

        let ids = (0..count.saturating_to::<u64>())
            .map(U256::from)
            .filter(|id| !installed.contains_key(id) && !pending.contains_key(id));

        let packs: Vec<StickerPack> = stream::iter(ids)
            .map(|id| {
                let sticker_type = &sticker_type;
                async move {
                    match self.fetch_pack_data(sticker_type, id, true).await {
                        Ok(pack) => Some(pack),
                        Err(err) => {
                            warn!(pack_id = %id, %err, "could not retrieve sticker pack data");
                            None
                        }
                    }
                }
            })
            .buffer_unordered(self.config.max_concurrent_requests)
            .filter_map(future::ready)
            .collect()
            .await;
        Ok(packs)
    }

    /// Pack ids bought by any of the configured accounts.
    async fn accounts_purchased_packs(&self, chain_id: u64) -> Result<HashSet<U256>> {
        let per_account: Vec<Vec<U256>> = stream::iter(&self.config.accounts)
            .map(|account| self.purchased_pack_ids(chain_id, *account))
            .buffer_unordered(self.config.max_concurrent_requests)
            .try_collect()
            .await?;
        Ok(per_account.into_iter().flatten().collect())
    }

    /// Ids of the packs `account` holds a `StickerPack` token of.
    pub async fn purchased_pack_ids(&self, chain_id: u64, account: Address) -> Result<Vec<U256>> {
        let sticker_pack = self.sticker_pack(chain_id)?;
        let opts = CallOpts::default();

        let balance = sticker_pack.caller.balance_of(&opts, account).await?;
        let token_ids: Vec<U256> = stream::iter(0..balance.saturating_to::<u64>())
            .map(|index| {
                sticker_pack.caller.token_of_owner_by_index(&opts, account, U256::from(index))
            })
            .buffered(self.config.max_concurrent_requests)
            .try_collect()
            .await?;

        let pack_ids = stream::iter(token_ids)
            .map(|token_id| sticker_pack.caller.token_pack_id(&opts, token_id))
            .buffered(self.config.max_concurrent_requests)
            .try_collect()
            .await?;
        Ok(pack_ids)
    }

    /// On-chain data and metadata of one pack.
    ///
    /// With `translate_hashes` the preview, thumbnail and sticker hashes are
    /// turned into gateway URLs. Without it, they are kept as hashes and
    /// sticker URLs are left empty.
    pub async fn pack_data(
        &self,
        chain_id: u64,
        pack_id: U256,
        translate_hashes: bool,
    ) -> Result<StickerPack> {
        let sticker_type = self.sticker_type(chain_id)?;
        self.fetch_pack_data(&sticker_type, pack_id, translate_hashes).await
    }

    async fn fetch_pack_data(
        &self,
        sticker_type: &StickerType<B>,
        pack_id: U256,
        translate_hashes: bool,
    ) -> Result<StickerPack> {
        let data = sticker_type.caller.get_pack_data(&CallOpts::default(), pack_id).await?;
        let url = contenthash::to_url_with_gateway(&data.contenthash, &self.config.ipfs_gateway)?;

        let mut pack = StickerPack::new(pack_id, data.owner, data.price);
        let body = self.fetcher.fetch(&url).await?;
        self.populate(&mut pack, &String::from_utf8_lossy(&body), translate_hashes)?;
        Ok(pack)
    }

    fn populate(&self, pack: &mut StickerPack, edn: &str, translate_hashes: bool) -> Result<()> {
        let meta = PackMetadata::from_edn(edn)?;
        let gateway = &self.config.ipfs_gateway;

        pack.name = meta.name;
        pack.author = meta.author;
        if translate_hashes {
            pack.preview = contenthash::decode_hex_hash(&meta.preview, gateway)?;
            pack.thumbnail = contenthash::decode_hex_hash(&meta.thumbnail, gateway)?;
        } else {
            pack.preview = meta.preview;
            pack.thumbnail = meta.thumbnail;
        }

        for hash in meta.stickers {
            let url = if translate_hashes {
                contenthash::decode_hex_hash(&hash, gateway)?
            } else {
                String::new()
            };
            pack.stickers.push(Sticker { pack_id: pack.id, url, hash });
        }
        Ok(())
    }

    /// Installed packs, by id.
    pub fn installed(&self) -> Result<Vec<StickerPack>> {
        Ok(self.store.installed()?.into_values().collect())
    }

    /// Fetches `pack_id` and installs it.
    pub async fn install(&self, chain_id: u64, pack_id: U256) -> Result<StickerPack> {
        let mut pack = self.pack_data(chain_id, pack_id, false).await?;
        pack.status = PackStatus::Installed;
        self.store.install(pack.clone())?;
        info!(%pack_id, "sticker pack installed");
        Ok(pack)
    }

    /// Removes an installed pack.
    pub fn uninstall(&self, pack_id: U256) -> Result<()> {
        self.store.uninstall(pack_id)?;
        info!(%pack_id, "sticker pack uninstalled");
        Ok(())
    }

    /// Packs bought but not yet confirmed, by id.
    pub fn pending(&self) -> Result<Vec<StickerPack>> {
        Ok(self.store.pending()?.into_values().collect())
    }

    /// Fetches `pack_id` and marks it as pending.
    pub async fn add_pending(&self, chain_id: u64, pack_id: U256) -> Result<StickerPack> {
        let mut pack = self.pack_data(chain_id, pack_id, false).await?;
        pack.status = PackStatus::Pending;
        self.store.add_pending(pack.clone())?;
        Ok(pack)
    }

    /// Drops a pending pack.
    pub fn remove_pending(&self, pack_id: U256) -> Result<()> {
        self.store.remove_pending(pack_id)
    }

    /// Recently used stickers, most recent first.
    pub fn recent(&self) -> Result<Vec<Sticker>> {
        self.store.recent()
    }

    /// Records the use of `sticker`.
    pub fn add_recent(&self, sticker: Sticker) -> Result<()> {
        self.store.add_recent(sticker)
    }

    /// The unsigned transaction buying `pack_id` for `from`.
    ///
    /// SNT's `approveAndCall` approves the market for the pack price and
    /// calls it back with `buyToken` calldata.
    pub async fn buy_prepare_tx(
        &self,
        chain_id: u64,
        from: Address,
        pack_id: U256,
    ) -> Result<TransactionRequest> {
        let payment = self
            .sticker_type(chain_id)?
            .caller
            .get_payment_data(&CallOpts::default(), pack_id)
            .await?;
        let market = self.market_address(chain_id)?;
        let snt = MiniMeToken::new(self.addresses.snt(chain_id)?, self.backend.clone());

        let call = IMiniMeToken::approveAndCallCall {
            spender: market,
            amount: payment.price,
            extra_data: buy_token_data(pack_id, from, payment.price),
        };
        Ok(snt.raw().transaction(&TransactOpts::sender(from), &call))
    }

    /// Gas needed to buy `pack_id`, with a 20% margin.
    pub async fn buy_estimate(&self, chain_id: u64, from: Address, pack_id: U256) -> Result<u64> {
        let tx = self.buy_prepare_tx(chain_id, from, pack_id).await?;
        let gas = self.backend.estimate_gas(tx).await?;
        Ok(gas.saturating_add(gas / 5))
    }

    /// Forwards `StickerPack` transfers to any of `to` into `sink`.
    pub async fn watch_transfers(
        &self,
        chain_id: u64,
        to: &[Address],
        sink: mpsc::Sender<DecodedLog<IStickerPack::Transfer>>,
    ) -> Result<Subscription> {
        let sticker_pack = self.sticker_pack(chain_id)?;
        Ok(sticker_pack
            .filterer
            .watch_transfer(&WatchOpts::default(), sink, &[], to, &[])
            .await?)
    }
}

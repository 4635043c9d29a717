//! Known deployments of the sticker market contracts.
use std::collections::BTreeMap;

use alloy::primitives::{address, Address};
use serde::Deserialize;

use crate::{Error, Result};

/// Chain id of Ethereum mainnet.
pub const MAINNET: u64 = 1;

/// Addresses of the sticker market contracts on one chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Deployment {
    /// Chain the contracts are deployed on.
    pub chain_id: u64,
    /// `StickerType` registry of packs.
    pub sticker_type: Address,
    /// `StickerPack` token of purchased packs.
    pub sticker_pack: Address,
    /// `StickerMarket` controller.
    pub sticker_market: Address,
    /// The SNT token packs are paid with.
    pub snt: Address,
}

/// The mainnet deployment.
pub const MAINNET_DEPLOYMENT: Deployment = Deployment {
    chain_id: MAINNET,
    sticker_type: address!("0577215622f43a39f4bc9640806dfea9b10d2a36"),
    sticker_pack: address!("110101156e8f0743948b2a61afcf3994a8fb172e"),
    sticker_market: address!("12824271339304d3a9f7e096e62a2a7e73b4a7e7"),
    snt: address!("744d70fdbe2ba4cf95131626614a1763df805b9e"),
};

/// Deployments by chain id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressBook {
    deployments: BTreeMap<u64, Deployment>,
}

impl Default for AddressBook {
    fn default() -> Self {
        let mut book = Self::empty();
        book.insert(MAINNET_DEPLOYMENT);
        book
    }
}

impl AddressBook {
    /// A book without any deployment.
    #[must_use]
    pub fn empty() -> Self {
        Self { deployments: BTreeMap::new() }
    }

    /// Adds `deployment`, replacing any previous entry for its chain.
    pub fn insert(&mut self, deployment: Deployment) {
        self.deployments.insert(deployment.chain_id, deployment);
    }

    /// The deployment on `chain_id`, if known.
    #[must_use]
    pub fn get(&self, chain_id: u64) -> Option<&Deployment> {
        self.deployments.get(&chain_id)
    }

    /// Address of `StickerType` on `chain_id`.
    pub fn sticker_type(&self, chain_id: u64) -> Result<Address> {
        self.lookup(chain_id, "StickerType", |d| d.sticker_type)
    }

    /// Address of `StickerPack` on `chain_id`.
    pub fn sticker_pack(&self, chain_id: u64) -> Result<Address> {
        self.lookup(chain_id, "StickerPack", |d| d.sticker_pack)
    }

    /// Address of `StickerMarket` on `chain_id`.
    pub fn sticker_market(&self, chain_id: u64) -> Result<Address> {
        self.lookup(chain_id, "StickerMarket", |d| d.sticker_market)
    }

    /// Address of SNT on `chain_id`.
    pub fn snt(&self, chain_id: u64) -> Result<Address> {
        self.lookup(chain_id, "SNT", |d| d.snt)
    }

    fn lookup(
        &self,
        chain_id: u64,
        contract: &'static str,
        field: impl Fn(&Deployment) -> Address,
    ) -> Result<Address> {
        self.get(chain_id)
            .map(field)
            .ok_or(Error::UnknownChain { contract, chain_id })
    }
}

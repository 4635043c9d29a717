//! The seam between the bindings and an Ethereum node.
//!
//! [`Backend`] is everything a bound contract needs from the node: calls,
//! code lookups, transaction submission, receipts and logs. [`RpcBackend`]
//! implements it over any `alloy` [`Provider`].
use alloy::{
    eips::BlockId,
    network::ReceiptResponse,
    primitives::{Address, Bytes, TxHash},
    providers::Provider,
    rpc::types::{Filter, Log, TransactionRequest},
};
use async_trait::async_trait;
use futures::{stream::BoxStream, StreamExt};
use tracing::debug;

use crate::Result;

/// Live log batches as delivered by a log watch.
pub type LogStream = BoxStream<'static, Vec<Log>>;

/// The parts of a transaction receipt the bindings look at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Hash of the mined transaction.
    pub transaction_hash: TxHash,
    /// Block the transaction was included in.
    pub block_number: Option<u64>,
    /// Address of the contract created by the transaction, if any.
    pub contract_address: Option<Address>,
    /// Whether execution succeeded.
    pub status: bool,
    /// Gas used by the transaction.
    pub gas_used: u64,
}

/// Node access required by bound contracts.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Executes a read-only call at `block` and returns the raw output.
    async fn call(&self, tx: TransactionRequest, block: BlockId) -> Result<Bytes>;

    /// Returns the code deployed at `address` as of `block`.
    async fn code_at(&self, address: Address, block: BlockId) -> Result<Bytes>;

    /// Estimates the gas needed to execute `tx`.
    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64>;

    /// Submits a state-changing transaction.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash>;

    /// Returns the receipt of `hash`, or `None` while it is not mined.
    async fn receipt(&self, hash: TxHash) -> Result<Option<Receipt>>;

    /// Returns historical logs matching `filter`.
    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>>;

    /// Starts watching for new logs matching `filter`.
    ///
    /// The stream ends when the node stops serving the filter.
    async fn watch_logs(&self, filter: &Filter) -> Result<LogStream>;

    /// Returns the number of the most recent block.
    async fn block_number(&self) -> Result<u64>;
}

/// A [`Backend`] backed by an `alloy` provider.
#[derive(Clone, Debug)]
pub struct RpcBackend<P> {
    provider: P,
}

impl<P> RpcBackend<P> {
    /// Wraps `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// The wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

#[async_trait]
impl<P: Provider + Clone + 'static> Backend for RpcBackend<P> {
    async fn call(&self, tx: TransactionRequest, block: BlockId) -> Result<Bytes> {
        Ok(self.provider.call(tx).block(block).await?)
    }

    async fn code_at(&self, address: Address, block: BlockId) -> Result<Bytes> {
        Ok(self.provider.get_code_at(address).block_id(block).await?)
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64> {
        Ok(self.provider.estimate_gas(tx).await?)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash> {
        let pending = self.provider.send_transaction(tx).await?;
        let hash = *pending.tx_hash();
        debug!(%hash, "transaction sent");
        Ok(hash)
    }

    async fn receipt(&self, hash: TxHash) -> Result<Option<Receipt>> {
        let receipt = self.provider.get_transaction_receipt(hash).await?;
        Ok(receipt.map(|r| Receipt {
            transaction_hash: r.transaction_hash(),
            block_number: r.block_number(),
            contract_address: r.contract_address(),
            status: r.status(),
            gas_used: r.gas_used(),
        }))
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>> {
        Ok(self.provider.get_logs(filter).await?)
    }

    async fn watch_logs(&self, filter: &Filter) -> Result<LogStream> {
        let poller = self.provider.watch_logs(filter).await?;
        Ok(poller.into_stream().boxed())
    }

    async fn block_number(&self) -> Result<u64> {
        Ok(self.provider.get_block_number().await?)
    }
}

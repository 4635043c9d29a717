//! An in-memory [`Backend`] for unit tests.
//!
//! Calls are answered by handlers registered per contract address and
//! selector, sent transactions are recorded, and logs are served from a
//! local list or pushed to live watchers.
use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use alloy::{
    eips::BlockId,
    primitives::{keccak256, Address, Bytes, TxHash, TxKind},
    rpc::types::{Filter, Log, TransactionRequest},
    sol_types::{SolCall, SolEvent},
    transports::TransportErrorKind,
};
use async_trait::async_trait;
use futures::{stream, StreamExt};
use tokio::sync::mpsc;

use crate::{
    backend::{Backend, LogStream, Receipt},
    Result,
};

type Handler = Box<dyn Fn(&[u8]) -> Result<Bytes> + Send + Sync>;

#[derive(Default)]
struct State {
    handlers: HashMap<(Address, [u8; 4]), Handler>,
    code: HashMap<Address, Bytes>,
    sent: Vec<TransactionRequest>,
    logs: Vec<Log>,
    watchers: Vec<(Filter, mpsc::UnboundedSender<Vec<Log>>)>,
    receipts: HashMap<TxHash, Receipt>,
    next_contract: Option<Address>,
    gas_estimate: u64,
    block_number: u64,
}

/// In-memory backend. Clones share state.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<State>>,
}

impl fmt::Debug for MockBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("MockBackend")
            .field("handlers", &state.handlers.len())
            .field("sent", &state.sent.len())
            .field("logs", &state.logs.len())
            .finish_non_exhaustive()
    }
}

impl MockBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Answers calls of `C` against `address` with `handler`.
    pub fn on_call<C, F>(&self, address: Address, handler: F)
    where
        C: SolCall + 'static,
        F: Fn(C) -> C::Return + Send + Sync + 'static,
    {
        let handler: Handler = Box::new(move |input| {
            let call = C::abi_decode(input)?;
            Ok(Bytes::from(C::abi_encode_returns(&handler(call))))
        });
        self.state().handlers.insert((address, C::SELECTOR), handler);
    }

    /// Makes calls of `C` against `address` fail with a node error.
    pub fn fail_call<C: SolCall>(&self, address: Address, message: &'static str) {
        let handler: Handler =
            Box::new(move |_| Err(TransportErrorKind::custom_str(message).into()));
        self.state().handlers.insert((address, C::SELECTOR), handler);
    }

    /// Sets the code deployed at `address`.
    pub fn set_code(&self, address: Address, code: Bytes) {
        self.state().code.insert(address, code);
    }

    /// Sets the address the next creation transaction deploys to.
    pub fn deploys_to(&self, address: Address) {
        self.state().next_contract = Some(address);
    }

    /// Sets the value returned by gas estimation.
    pub fn set_gas_estimate(&self, gas: u64) {
        self.state().gas_estimate = gas;
    }

    /// Sets the current block number.
    pub fn set_block_number(&self, number: u64) {
        self.state().block_number = number;
    }

    /// Stores `event` as a historical log emitted by `address`.
    pub fn push_log<E: SolEvent>(&self, address: Address, event: &E) {
        let mut state = self.state();
        let mut log = log(address, event);
        log.block_number = Some(state.block_number);
        log.log_index = Some(state.logs.len() as u64);
        state.logs.push(log);
    }

    /// Delivers `event` emitted by `address` to every matching live watch.
    pub fn emit<E: SolEvent>(&self, address: Address, event: &E) {
        let log = log(address, event);
        let mut state = self.state();
        state.watchers.retain(|(filter, tx)| {
            !matches(filter, &log) || tx.send(vec![log.clone()]).is_ok()
        });
    }

    /// Ends every live watch, as a node dropping its filters would.
    pub fn close_watchers(&self) {
        self.state().watchers.clear();
    }

    /// Transactions sent so far.
    #[must_use]
    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.state().sent.clone()
    }
}

/// Builds the raw log `address` would emit for `event`.
pub fn log<E: SolEvent>(address: Address, event: &E) -> Log {
    Log {
        inner: alloy::primitives::Log { address, data: event.encode_log_data() },
        ..Log::default()
    }
}

fn matches(filter: &Filter, log: &Log) -> bool {
    filter.address.matches(&log.address())
        && filter.topics.iter().enumerate().all(|(i, set)| {
            log.topics().get(i).map_or(set.is_empty(), |topic| set.matches(topic))
        })
}

#[async_trait]
impl Backend for MockBackend {
    async fn call(&self, tx: TransactionRequest, _block: BlockId) -> Result<Bytes> {
        let to = tx.to.and_then(|kind| kind.to().copied());
        let input = tx.input.input().cloned().unwrap_or_default();
        let (Some(to), Some(selector)) = (to, input.get(..4)) else {
            return Ok(Bytes::new());
        };
        let mut key = [0u8; 4];
        key.copy_from_slice(selector);

        let state = self.state();
        match state.handlers.get(&(to, key)) {
            Some(handler) => handler(&input),
            None => Ok(Bytes::new()),
        }
    }

    async fn code_at(&self, address: Address, _block: BlockId) -> Result<Bytes> {
        Ok(self.state().code.get(&address).cloned().unwrap_or_default())
    }

    async fn estimate_gas(&self, _tx: TransactionRequest) -> Result<u64> {
        Ok(self.state().gas_estimate)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash> {
        let mut state = self.state();
        let creates = matches!(tx.to, None | Some(TxKind::Create));
        let hash = keccak256((state.sent.len() as u64).to_be_bytes());
        let contract_address = if creates { state.next_contract.take() } else { None };
        let receipt = Receipt {
            transaction_hash: hash,
            block_number: Some(state.block_number),
            contract_address,
            status: true,
            gas_used: 21_000,
        };
        state.receipts.insert(hash, receipt);
        state.sent.push(tx);
        Ok(hash)
    }

    async fn receipt(&self, hash: TxHash) -> Result<Option<Receipt>> {
        Ok(self.state().receipts.get(&hash).cloned())
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>> {
        Ok(self
            .state()
            .logs
            .iter()
            .filter(|log| matches(filter, log))
            .cloned()
            .collect())
    }

    async fn watch_logs(&self, filter: &Filter) -> Result<LogStream> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.state().watchers.push((filter.clone(), tx));
        Ok(stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|batch| (batch, rx))
        })
        .boxed())
    }

    async fn block_number(&self) -> Result<u64> {
        Ok(self.state().block_number)
    }
}

//! The generic bound contract every typed binding forwards to.
use alloy::{
    eips::{BlockId, BlockNumberOrTag},
    network::TransactionBuilder,
    primitives::{Address, TxHash, U256},
    rpc::types::{Filter, Log, Topic, TransactionRequest},
    sol_types::{SolCall, SolEvent},
};
use tokio::sync::mpsc;
use tracing::debug;

use crate::{
    backend::Backend,
    event::{decode_log, DecodedLog, EventIterator, Subscription},
    Error, Result,
};

/// Options for read-only calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallOpts {
    /// Account the call is made from.
    pub from: Option<Address>,
    /// Block to run the call against. Latest when unset.
    pub block: Option<BlockId>,
    /// Run against the pending state. Takes precedence over `block`.
    pub pending: bool,
}

impl CallOpts {
    /// The block the call should run against.
    #[must_use]
    pub fn block_id(&self) -> BlockId {
        if self.pending {
            BlockId::pending()
        } else {
            self.block.unwrap_or_else(BlockId::latest)
        }
    }
}

/// Options for state-changing transactions.
///
/// Unset fields are left for the backend (or its fillers) to decide.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactOpts {
    /// Sender of the transaction.
    pub from: Option<Address>,
    /// Wei sent along with the transaction.
    pub value: Option<U256>,
    /// Gas limit.
    pub gas_limit: Option<u64>,
    /// Legacy gas price.
    pub gas_price: Option<u128>,
    /// Nonce.
    pub nonce: Option<u64>,
}

impl TransactOpts {
    /// Options sending from `from` with everything else left to the backend.
    #[must_use]
    pub fn sender(from: Address) -> Self {
        Self { from: Some(from), ..Self::default() }
    }

    /// Copies the set options onto `tx`.
    #[must_use]
    pub fn apply(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if let Some(from) = self.from {
            tx = tx.with_from(from);
        }
        if let Some(value) = self.value {
            tx = tx.with_value(value);
        }
        if let Some(gas_limit) = self.gas_limit {
            tx = tx.with_gas_limit(gas_limit);
        }
        if let Some(gas_price) = self.gas_price {
            tx = tx.with_gas_price(gas_price);
        }
        if let Some(nonce) = self.nonce {
            tx = tx.with_nonce(nonce);
        }
        tx
    }
}

/// Block range of a historical log query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterOpts {
    /// First block to search.
    pub start: u64,
    /// Last block to search. Latest when unset.
    pub end: Option<u64>,
}

/// Options for a live log watch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WatchOpts {
    /// Block to start watching from. The node's head when unset.
    pub start: Option<u64>,
}

/// A deployed contract at `address`, reachable through `backend`.
///
/// This is untyped: it accepts any [`SolCall`] or [`SolEvent`]. The typed
/// per-contract bindings wrap it.
#[derive(Clone, Debug)]
pub struct BoundContract<B> {
    address: Address,
    backend: B,
}

impl<B> BoundContract<B> {
    /// Binds `address` to `backend`.
    pub fn new(address: Address, backend: B) -> Self {
        Self { address, backend }
    }

    /// Address of the contract.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The backend calls go through.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Builds the unsigned transaction that would invoke `call`.
    pub fn transaction<C: SolCall>(
        &self,
        opts: &TransactOpts,
        call: &C,
    ) -> TransactionRequest {
        let tx = TransactionRequest::default()
            .with_to(self.address)
            .with_input(call.abi_encode());
        opts.apply(tx)
    }

    /// Builds the log filter for event `E` with the given indexed topics.
    ///
    /// `topics[i]` constrains the `i + 1`-th topic. An empty set matches any
    /// value.
    fn filter<E: SolEvent>(&self, topics: Vec<Topic>) -> Filter {
        let mut filter = Filter::new().address(self.address).event_signature(E::SIGNATURE_HASH);
        for (i, topic) in topics.into_iter().take(3).enumerate() {
            filter.topics[i + 1] = topic;
        }
        filter
    }

    /// Decodes `log` as event `E`.
    pub fn unpack_log<E: SolEvent>(&self, log: &Log) -> Result<DecodedLog<E>> {
        decode_log(log)
    }
}

impl<B: Backend> BoundContract<B> {
    /// Invokes a read-only method and decodes its return value.
    ///
    /// # Errors
    ///
    /// If the node returns no data and there is no code at the address,
    /// returns [`Error::NoCode`]. Otherwise backend and decoding errors are
    /// forwarded.
    pub async fn call<C: SolCall>(
        &self,
        opts: &CallOpts,
        call: &C,
    ) -> Result<C::Return> {
        let mut tx = TransactionRequest::default()
            .with_to(self.address)
            .with_input(call.abi_encode());
        if let Some(from) = opts.from {
            tx = tx.with_from(from);
        }
        let block = opts.block_id();

        debug!(contract = %self.address, method = C::SIGNATURE, "eth_call");
        let output = self.backend.call(tx, block).await?;
        if output.is_empty() {
            let code = self.backend.code_at(self.address, block).await?;
            if code.is_empty() {
                return Err(Error::NoCode);
            }
        }
        Ok(C::abi_decode_returns(&output)?)
    }

    /// Invokes a state-changing method.
    pub async fn transact<C: SolCall>(
        &self,
        opts: &TransactOpts,
        call: &C,
    ) -> Result<TxHash> {
        debug!(contract = %self.address, method = C::SIGNATURE, "transact");
        self.backend.send_transaction(self.transaction(opts, call)).await
    }

    /// Sends a plain value transfer with no call data, hitting the
    /// contract's receive or fallback function.
    pub async fn transfer(&self, opts: &TransactOpts) -> Result<TxHash> {
        let tx = opts.apply(TransactionRequest::default().with_to(self.address));
        self.backend.send_transaction(tx).await
    }

    /// Queries historical logs of event `E` and iterates over them.
    pub async fn filter_logs<E: SolEvent + Send + 'static>(
        &self,
        opts: &FilterOpts,
        topics: Vec<Topic>,
    ) -> Result<EventIterator<E>> {
        let to_block = opts
            .end
            .map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number);
        let filter = self
            .filter::<E>(topics)
            .from_block(opts.start)
            .to_block(to_block);

        let logs = self.backend.logs(&filter).await?;
        debug!(contract = %self.address, event = E::SIGNATURE, count = logs.len(), "filtered logs");
        Ok(EventIterator::from_logs(logs))
    }

    /// Watches for new logs of event `E`, forwarding them into `sink`.
    pub async fn watch_logs<E: SolEvent + Send + 'static>(
        &self,
        opts: &WatchOpts,
        topics: Vec<Topic>,
        sink: mpsc::Sender<DecodedLog<E>>,
    ) -> Result<Subscription> {
        let mut filter = self.filter::<E>(topics);
        if let Some(start) = opts.start {
            filter = filter.from_block(start);
        }

        let stream = self.backend.watch_logs(&filter).await?;
        debug!(contract = %self.address, event = E::SIGNATURE, "watching logs");
        Ok(Subscription::forward(stream, sink))
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, Bytes},
        sol,
        sol_types::SolCall,
    };

    use super::*;
    use crate::{event::topic, mock::MockBackend};

    sol! {
        contract Counter {
            #[derive(Debug, PartialEq, Eq)]
            event Incremented(address indexed by, uint256 value);
            #[derive(Debug, PartialEq, Eq)]
            event Reset(address indexed by);

            function count() external view returns (uint256);
            function countOf(address account) external view returns (uint256 total, bool active);
            function increment(uint256 by) external;
        }
    }

    const COUNTER: Address = address!("00000000000000000000000000000000000c0de1");
    const ALICE: Address = address!("000000000000000000000000000000000000a11c");
    const BOB: Address = address!("0000000000000000000000000000000000000b0b");

    #[tokio::test]
    async fn call_decodes_single_return() {
        let backend = MockBackend::new();
        backend.on_call::<Counter::countCall, _>(COUNTER, |_| U256::from(7));

        let contract = BoundContract::new(COUNTER, backend);
        let count = contract
            .call(&CallOpts::default(), &Counter::countCall {})
            .await
            .expect("should call");
        assert_eq!(count, U256::from(7));
    }

    #[tokio::test]
    async fn call_decodes_named_returns() {
        let backend = MockBackend::new();
        backend.on_call::<Counter::countOfCall, _>(COUNTER, |call| {
            Counter::countOfReturn {
                total: U256::from(if call.account == ALICE { 3 } else { 0 }),
                active: call.account == ALICE,
            }
        });

        let contract = BoundContract::new(COUNTER, backend);
        let ret = contract
            .call(&CallOpts::default(), &Counter::countOfCall { account: ALICE })
            .await
            .expect("should call");
        assert_eq!(ret.total, U256::from(3));
        assert!(ret.active);
    }

    #[tokio::test]
    async fn call_without_code_is_no_code() {
        let contract = BoundContract::new(COUNTER, MockBackend::new());
        let err = contract
            .call(&CallOpts::default(), &Counter::countCall {})
            .await
            .expect_err("should fail without code");
        assert!(matches!(err, Error::NoCode));
    }

    #[tokio::test]
    async fn call_with_code_and_empty_output_is_abi_error() {
        let backend = MockBackend::new();
        backend.set_code(COUNTER, Bytes::from_static(&[0x60, 0x80]));

        let contract = BoundContract::new(COUNTER, backend);
        let err = contract
            .call(&CallOpts::default(), &Counter::countCall {})
            .await
            .expect_err("should fail to decode");
        assert!(matches!(err, Error::Abi(_)));
    }

    #[test]
    fn pending_takes_precedence_over_block() {
        let opts = CallOpts {
            block: Some(BlockId::number(10)),
            pending: true,
            ..CallOpts::default()
        };
        assert_eq!(opts.block_id(), BlockId::pending());
        assert_eq!(CallOpts::default().block_id(), BlockId::latest());
    }

    #[tokio::test]
    async fn transact_sends_encoded_call() {
        let backend = MockBackend::new();
        let contract = BoundContract::new(COUNTER, backend.clone());

        let opts = TransactOpts {
            from: Some(ALICE),
            value: Some(U256::from(1)),
            gas_limit: Some(100_000),
            ..TransactOpts::default()
        };
        contract
            .transact(&opts, &Counter::incrementCall { by: U256::from(2) })
            .await
            .expect("should send");

        let sent = backend.sent();
        assert_eq!(sent.len(), 1);
        let tx = &sent[0];
        assert_eq!(tx.from, Some(ALICE));
        assert_eq!(tx.value, Some(U256::from(1)));
        assert_eq!(tx.gas, Some(100_000));
        let input = tx.input.input().expect("should have input");
        assert_eq!(&input[..4], Counter::incrementCall::SELECTOR.as_slice());
    }

    #[tokio::test]
    async fn transfer_has_no_input() {
        let backend = MockBackend::new();
        let contract = BoundContract::new(COUNTER, backend.clone());
        contract
            .transfer(&TransactOpts {
                value: Some(U256::from(5)),
                ..TransactOpts::sender(BOB)
            })
            .await
            .expect("should send");

        let sent = backend.sent();
        assert!(sent[0].input.input().map_or(true, |input| input.is_empty()));
        assert_eq!(sent[0].value, Some(U256::from(5)));
    }

    #[tokio::test]
    async fn filter_logs_matches_indexed_topics() {
        let backend = MockBackend::new();
        backend.push_log(COUNTER, &Counter::Incremented { by: ALICE, value: U256::from(1) });
        backend.push_log(COUNTER, &Counter::Incremented { by: BOB, value: U256::from(2) });
        backend.push_log(COUNTER, &Counter::Reset { by: ALICE });
        backend.push_log(COUNTER, &Counter::Incremented { by: ALICE, value: U256::from(3) });

        let contract = BoundContract::new(COUNTER, backend);
        let iter = contract
            .filter_logs::<Counter::Incremented>(
                &FilterOpts::default(),
                vec![topic(&[ALICE])],
            )
            .await
            .expect("should filter");
        let events = iter.collect().await.expect("should decode");

        let values: Vec<_> = events.iter().map(|e| e.inner.data.value).collect();
        assert_eq!(values, vec![U256::from(1), U256::from(3)]);
    }

    #[tokio::test]
    async fn unpack_log_rejects_other_events() {
        let backend = MockBackend::new();
        let contract = BoundContract::new(COUNTER, backend);
        let log = crate::mock::log(COUNTER, &Counter::Reset { by: ALICE });

        let err = contract
            .unpack_log::<Counter::Incremented>(&log)
            .expect_err("should reject");
        assert!(matches!(
            err,
            Error::EventSignatureMismatch { expected, actual: Some(actual) }
                if expected == Counter::Incremented::SIGNATURE_HASH
                    && actual == Counter::Reset::SIGNATURE_HASH
        ));

        let reset = contract.unpack_log::<Counter::Reset>(&log).expect("should decode");
        assert_eq!(reset.inner.data, Counter::Reset { by: ALICE });
    }
}

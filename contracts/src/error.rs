//! Errors returned by the bindings.
use alloy::{
    primitives::{TxHash, B256},
    transports::TransportError,
};

/// Convenience alias for results produced by the bindings.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An error raised while talking to a contract.
///
/// Errors from the node and from ABI decoding are forwarded unchanged; the
/// bindings never retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The JSON-RPC transport or the node returned an error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    /// Call data or log data could not be ABI-decoded.
    #[error("abi error: {0}")]
    Abi(#[from] alloy::sol_types::Error),
    /// Creation code is not valid hex.
    #[error("invalid bytecode: {0}")]
    InvalidBytecode(#[from] alloy::hex::FromHexError),
    /// A call returned no data and there is no code at the target address.
    #[error("no contract code at given address")]
    NoCode,
    /// A log was handed to the parser of a different event.
    #[error("event signature mismatch: expected {expected}, got {actual:?}")]
    EventSignatureMismatch {
        /// Signature hash of the event that was asked for.
        expected: B256,
        /// First topic of the log, if any.
        actual: Option<B256>,
    },
    /// A creation transaction was mined without creating a contract.
    #[error("transaction {0} did not create a contract")]
    NoContractAddress(TxHash),
    /// A creation transaction was never mined within the polling window.
    #[error("no receipt for transaction {0}")]
    ReceiptTimeout(TxHash),
    /// A creation transaction was mined but reverted.
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
    /// No deployment of `contract` is known for `chain_id`.
    #[error("no known {contract} deployment on chain {chain_id}")]
    UnknownChain {
        /// Contract that was looked up.
        contract: &'static str,
        /// Chain id that was looked up.
        chain_id: u64,
    },
    /// The backend stopped serving a log subscription.
    #[error("log subscription closed")]
    SubscriptionClosed,
}

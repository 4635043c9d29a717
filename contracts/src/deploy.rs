//! Contract deployment.
//!
//! The compiled creation code of the sticker contracts is not shipped with
//! the bindings, so callers supply it, typically read from a build
//! artifact with [`bytecode_from_hex`].
use std::time::Duration;

use alloy::{
    hex,
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash},
    rpc::types::TransactionRequest,
};
use tracing::{debug, info};

use crate::{
    backend::{Backend, Receipt},
    bind::TransactOpts,
    Error, Result,
};

const RECEIPT_POLL_INTERVAL: Duration = Duration::from_millis(500);
const RECEIPT_POLL_ATTEMPTS: u32 = 240;

/// Decodes hex-encoded creation code, as found in compiler artifacts.
///
/// Surrounding whitespace and a `0x` prefix are accepted.
pub fn bytecode_from_hex(code: &str) -> Result<Bytes> {
    Ok(hex::decode(code.trim())?.into())
}

/// Deploys `bytecode` with the ABI-encoded constructor `args` appended.
///
/// Waits for the creation transaction to be mined and returns the address
/// of the new contract together with the transaction hash.
///
/// # Errors
///
/// - [`Error::ReceiptTimeout`] if the transaction is not mined in time.
/// - [`Error::Reverted`] if the creation reverted.
/// - [`Error::NoContractAddress`] if the receipt names no contract.
pub async fn deploy<B: Backend>(
    backend: &B,
    opts: &TransactOpts,
    bytecode: &[u8],
    args: &[u8],
) -> Result<(Address, TxHash)> {
    let code = [bytecode, args].concat();
    let tx = opts.apply(TransactionRequest::default().with_deploy_code(code));

    let hash = backend.send_transaction(tx).await?;
    debug!(%hash, "creation transaction sent");

    let receipt = wait_for_receipt(backend, hash).await?;
    if !receipt.status {
        return Err(Error::Reverted(hash));
    }
    let address =
        receipt.contract_address.ok_or(Error::NoContractAddress(hash))?;

    info!(%address, %hash, "contract deployed");
    Ok((address, hash))
}

/// Polls for the receipt of `hash` until it is mined.
pub async fn wait_for_receipt<B: Backend>(
    backend: &B,
    hash: TxHash,
) -> Result<Receipt> {
    for _ in 0..RECEIPT_POLL_ATTEMPTS {
        if let Some(receipt) = backend.receipt(hash).await? {
            return Ok(receipt);
        }
        tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
    }
    Err(Error::ReceiptTimeout(hash))
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, TxKind},
        sol,
        sol_types::SolConstructor,
    };

    use super::*;
    use crate::mock::MockBackend;

    sol! {
        contract Market {
            constructor(address snt, address sticker_pack, address sticker_type);
        }
    }

    const DEPLOYED: Address = address!("00000000000000000000000000000000000c0de1");
    const SNT: Address = address!("0000000000000000000000000000000000000051");

    #[test]
    fn decodes_prefixed_bytecode() {
        let code = bytecode_from_hex(" 0x6080\n").expect("should decode");
        assert_eq!(code.as_ref(), &[0x60, 0x80]);
        assert!(bytecode_from_hex("0xzz").is_err());
    }

    #[tokio::test]
    async fn deploy_appends_constructor_args() {
        let backend = MockBackend::new();
        backend.deploys_to(DEPLOYED);

        let args = Market::constructorCall {
            snt: SNT,
            sticker_pack: Address::ZERO,
            sticker_type: Address::ZERO,
        }
        .abi_encode();
        let (address, _) = deploy(&backend, &TransactOpts::default(), &[0x60, 0x80], &args)
            .await
            .expect("should deploy");
        assert_eq!(address, DEPLOYED);

        let sent = backend.sent();
        assert_eq!(sent[0].to, Some(TxKind::Create));
        let input = sent[0].input.input().expect("should have input");
        assert_eq!(&input[..2], &[0x60, 0x80]);
        assert_eq!(&input[2..], args.as_slice());
    }

    #[tokio::test]
    async fn deploy_without_created_contract_fails() {
        let backend = MockBackend::new();
        let err = deploy(&backend, &TransactOpts::default(), &[0x60], &[])
            .await
            .expect_err("should fail");
        assert!(matches!(err, Error::NoContractAddress(_)));
    }
}

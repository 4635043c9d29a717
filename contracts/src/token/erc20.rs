//! Bindings for the ERC-20 token standard, as defined in the [ERC].
//!
//! [ERC]: https://eips.ethereum.org/EIPS/eip-20
use alloy::primitives::{Address, U256};

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// ERC-20 standard interface.
        contract IERC20Token {
            /// Emitted when `value` tokens are moved from one account
            /// (`from`) to another (`to`).
            ///
            /// Note that `value` may be zero.
            #[derive(Debug, PartialEq, Eq)]
            event Transfer(address indexed from, address indexed to, uint256 value);

            /// Emitted when the allowance of a `spender` for an `owner` is
            /// set by a call to `approve`. `value` is the new allowance.
            #[derive(Debug, PartialEq, Eq)]
            event Approval(address indexed owner, address indexed spender, uint256 value);

            function totalSupply() external view returns (uint256 total_supply);
            function balanceOf(address owner) external view returns (uint256 balance);
            function allowance(address owner, address spender) external view returns (uint256 remaining);
            function transfer(address to, uint256 value) external returns (bool success);
            function approve(address spender, uint256 value) external returns (bool success);
            function transferFrom(address from, address to, uint256 value) external returns (bool success);
        }
    }
}

bind! {
    /// Bindings for `ERC20Token`.
    Erc20Token(IERC20Token) {
        roles: Erc20TokenCaller, Erc20TokenTransactor, Erc20TokenFilterer, Erc20TokenSession;
        deploy: deploy_erc20_token();
        calls {
            fn total_supply() -> totalSupplyCall;
            fn balance_of(owner: Address) -> balanceOfCall;
            fn allowance(owner: Address, spender: Address) -> allowanceCall;
        }
        transactions {
            fn transfer(to: Address, value: U256) -> transferCall;
            fn approve(spender: Address, value: U256) -> approveCall;
            fn transfer_from(from: Address, to: Address, value: U256) -> transferFromCall;
        }
        events {
            Transfer(from: Address, to: Address) => filter_transfer, watch_transfer, parse_transfer;
            Approval(owner: Address, spender: Address) => filter_approval, watch_approval, parse_approval;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, uint},
        sol_types::SolCall,
    };
    use tokio::sync::mpsc;

    use super::*;
    use crate::{
        bind::{CallOpts, FilterOpts, TransactOpts, WatchOpts},
        mock::{self, MockBackend},
        Error,
    };

    const TOKEN: Address = address!("744d70fdbe2ba4cf95131626614a1763df805b9e");
    const ALICE: Address = address!("000000000000000000000000000000000000a11c");
    const BOB: Address = address!("0000000000000000000000000000000000000b0b");

    #[tokio::test]
    async fn reads_balances_and_allowances() {
        let backend = MockBackend::new();
        backend.on_call::<IERC20Token::balanceOfCall, _>(TOKEN, |call| {
            if call.owner == ALICE {
                uint!(1000_U256)
            } else {
                U256::ZERO
            }
        });
        backend.on_call::<IERC20Token::allowanceCall, _>(TOKEN, |call| {
            assert_eq!((call.owner, call.spender), (ALICE, BOB));
            uint!(5_U256)
        });

        let token = Erc20Token::new(TOKEN, backend);
        let opts = CallOpts::default();
        assert_eq!(
            token.caller.balance_of(&opts, ALICE).await.expect("should call"),
            uint!(1000_U256)
        );
        assert_eq!(
            token.caller.balance_of(&opts, BOB).await.expect("should call"),
            U256::ZERO
        );
        assert_eq!(
            token.caller.allowance(&opts, ALICE, BOB).await.expect("should call"),
            uint!(5_U256)
        );
    }

    #[tokio::test]
    async fn node_errors_are_forwarded() {
        let backend = MockBackend::new();
        backend.fail_call::<IERC20Token::totalSupplyCall>(TOKEN, "execution reverted");

        let token = Erc20Token::new(TOKEN, backend);
        let err = token
            .caller
            .total_supply(&CallOpts::default())
            .await
            .expect_err("should fail");
        assert!(matches!(err, Error::Transport(_)));
    }

    #[tokio::test]
    async fn transfer_encodes_recipient_and_value() {
        let backend = MockBackend::new();
        let token = Erc20Token::new(TOKEN, backend.clone());

        token
            .transactor
            .transfer(&TransactOpts::sender(ALICE), BOB, uint!(7_U256))
            .await
            .expect("should send");

        let sent = backend.sent();
        let input = sent[0].input.input().expect("should have input");
        assert_eq!(input[..4], IERC20Token::transferCall::SELECTOR);
        let call = IERC20Token::transferCall::abi_decode(input).expect("should decode");
        assert_eq!((call.to, call.value), (BOB, uint!(7_U256)));
    }

    #[tokio::test]
    async fn filters_transfers_by_recipient() {
        let backend = MockBackend::new();
        backend.push_log(TOKEN, &IERC20Token::Transfer { from: ALICE, to: BOB, value: uint!(1_U256) });
        backend.push_log(TOKEN, &IERC20Token::Transfer { from: BOB, to: ALICE, value: uint!(2_U256) });
        backend.push_log(TOKEN, &IERC20Token::Approval { owner: ALICE, spender: BOB, value: uint!(3_U256) });

        let token = Erc20Token::new(TOKEN, backend);
        let transfers = token
            .filterer
            .filter_transfer(&FilterOpts::default(), &[], &[ALICE])
            .await
            .expect("should filter")
            .collect()
            .await
            .expect("should decode");
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].inner.data.value, uint!(2_U256));
    }

    #[tokio::test]
    async fn parse_rejects_other_events() {
        let token = Erc20Token::new(TOKEN, MockBackend::new());
        let approval = mock::log(
            TOKEN,
            &IERC20Token::Approval { owner: ALICE, spender: BOB, value: U256::ZERO },
        );

        assert!(token.filterer.parse_approval(&approval).is_ok());
        assert!(matches!(
            token.filterer.parse_transfer(&approval),
            Err(Error::EventSignatureMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn watches_new_transfers() {
        let backend = MockBackend::new();
        let token = Erc20Token::new(TOKEN, backend.clone());
        let (tx, mut rx) = mpsc::channel(4);

        let subscription = token
            .filterer
            .watch_transfer(&WatchOpts::default(), tx, &[ALICE], &[])
            .await
            .expect("should watch");

        backend.emit(TOKEN, &IERC20Token::Transfer { from: BOB, to: ALICE, value: uint!(1_U256) });
        backend.emit(TOKEN, &IERC20Token::Transfer { from: ALICE, to: BOB, value: uint!(9_U256) });

        let event = rx.recv().await.expect("should forward");
        assert_eq!(event.inner.data.value, uint!(9_U256));
        subscription.unsubscribe();
    }
}

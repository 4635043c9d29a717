//! Bindings for `TokenClaimer`, which lets a controller recover tokens sent
//! to a contract by mistake.
use alloy::primitives::Address;

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// Recovery of tokens stuck in a contract.
        contract ITokenClaimer {
            /// Emitted when stuck tokens are moved to the controller.
            ///
            /// * `token` - Token that was claimed, zero for ether.
            /// * `controller` - Recipient of the tokens.
            /// * `amount` - Amount claimed.
            #[derive(Debug, PartialEq, Eq)]
            event ClaimedTokens(address indexed token, address indexed controller, uint256 amount);

            function claimTokens(address token) external;
        }
    }
}

bind! {
    /// Bindings for `TokenClaimer`.
    TokenClaimer(ITokenClaimer) {
        roles: TokenClaimerCaller, TokenClaimerTransactor, TokenClaimerFilterer, TokenClaimerSession;
        deploy: deploy_token_claimer();
        calls {}
        transactions {
            fn claim_tokens(token: Address) -> claimTokensCall;
        }
        events {
            ClaimedTokens(token: Address, controller: Address) => filter_claimed_tokens, watch_claimed_tokens, parse_claimed_tokens;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, U256};

    use super::*;
    use crate::{bind::FilterOpts, mock::MockBackend};

    const CONTRACT: Address = address!("00000000000000000000000000000000000c0de1");
    const SNT: Address = address!("0000000000000000000000000000000000000051");
    const ALICE: Address = address!("000000000000000000000000000000000000a11c");

    #[tokio::test]
    async fn filters_claims_by_token() {
        let backend = MockBackend::new();
        backend.push_log(
            CONTRACT,
            &ITokenClaimer::ClaimedTokens { token: SNT, controller: ALICE, amount: U256::from(10) },
        );
        backend.push_log(
            CONTRACT,
            &ITokenClaimer::ClaimedTokens {
                token: Address::ZERO,
                controller: ALICE,
                amount: U256::from(1),
            },
        );

        let claimer = TokenClaimer::new(CONTRACT, backend);
        let events = claimer
            .filterer
            .filter_claimed_tokens(&FilterOpts::default(), &[SNT], &[])
            .await
            .expect("should filter")
            .collect()
            .await
            .expect("should decode");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].inner.data.amount, U256::from(10));
    }
}

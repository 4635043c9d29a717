//! Bindings for the `SafeMath` library.
//!
//! The library has no external methods, so only deployment is exposed.

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// Overflow-checked arithmetic library.
        contract ISafeMath {}
    }
}

bind! {
    /// Bindings for `SafeMath`.
    SafeMath(ISafeMath) {
        roles: SafeMathCaller, SafeMathTransactor, SafeMathFilterer, SafeMathSession;
        deploy: deploy_safe_math();
        calls {}
        transactions {}
        events {}
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, Address, TxKind};

    use super::*;
    use crate::{bind::TransactOpts, mock::MockBackend};

    const DEPLOYER: Address = address!("000000000000000000000000000000000000a11c");
    const LIBRARY: Address = address!("0000000000000000000000000000000000005afe");

    #[tokio::test]
    async fn deploys_without_constructor_arguments() {
        let backend = MockBackend::new();
        backend.deploys_to(LIBRARY);

        let (safe_math, _) =
            deploy_safe_math(backend.clone(), &TransactOpts::sender(DEPLOYER), &[0x60, 0x80])
                .await
                .expect("should deploy");
        assert_eq!(safe_math.address(), LIBRARY);

        let sent = backend.sent();
        assert_eq!(sent[0].to, Some(TxKind::Create));
        assert_eq!(sent[0].input.input().expect("should have input").as_ref(), &[0x60, 0x80]);
    }
}

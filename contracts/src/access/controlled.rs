//! Bindings for `Controlled`, the single-controller access pattern shared by
//! every sticker market contract.
use alloy::primitives::Address;

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// A contract administered by a single controller address.
        contract IControlled {
            /// Emitted when the controller changes.
            ///
            /// * `controller` - The new controller.
            #[derive(Debug, PartialEq, Eq)]
            event NewController(address controller);

            function controller() external view returns (address);
            function changeController(address new_controller) external;
        }
    }
}

bind! {
    /// Bindings for `Controlled`.
    Controlled(IControlled) {
        roles: ControlledCaller, ControlledTransactor, ControlledFilterer, ControlledSession;
        deploy: deploy_controlled();
        calls {
            fn controller() -> controllerCall;
        }
        transactions {
            fn change_controller(new_controller: Address) -> changeControllerCall;
        }
        events {
            NewController() => filter_new_controller, watch_new_controller, parse_new_controller;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::{primitives::address, sol_types::SolCall};

    use super::*;
    use crate::{
        bind::{CallOpts, FilterOpts, TransactOpts},
        mock::MockBackend,
    };

    const CONTRACT: Address = address!("00000000000000000000000000000000000c0de1");
    const ALICE: Address = address!("000000000000000000000000000000000000a11c");
    const BOB: Address = address!("0000000000000000000000000000000000000b0b");

    #[tokio::test]
    async fn reads_controller() {
        let backend = MockBackend::new();
        backend.on_call::<IControlled::controllerCall, _>(CONTRACT, |_| ALICE);

        let controlled = Controlled::new(CONTRACT, backend);
        let controller = controlled
            .caller
            .controller(&CallOpts::default())
            .await
            .expect("should call");
        assert_eq!(controller, ALICE);
    }

    #[tokio::test]
    async fn session_uses_pinned_options() {
        let backend = MockBackend::new();
        let controlled = Controlled::new(CONTRACT, backend.clone());
        let session =
            controlled.session(CallOpts::default(), TransactOpts::sender(ALICE));

        session.change_controller(BOB).await.expect("should send");

        let sent = backend.sent();
        assert_eq!(sent[0].from, Some(ALICE));
        let input = sent[0].input.input().expect("should have input");
        let call = IControlled::changeControllerCall::abi_decode(input)
            .expect("should decode");
        assert_eq!(call.new_controller, BOB);
    }

    #[tokio::test]
    async fn filters_controller_changes() {
        let backend = MockBackend::new();
        backend.push_log(CONTRACT, &IControlled::NewController { controller: ALICE });
        backend.push_log(CONTRACT, &IControlled::NewController { controller: BOB });

        let controlled = Controlled::new(CONTRACT, backend);
        let events = controlled
            .filterer
            .filter_new_controller(&FilterOpts::default())
            .await
            .expect("should filter")
            .collect()
            .await
            .expect("should decode");
        let controllers: Vec<_> =
            events.into_iter().map(|e| e.inner.data.controller).collect();
        assert_eq!(controllers, vec![ALICE, BOB]);
    }
}

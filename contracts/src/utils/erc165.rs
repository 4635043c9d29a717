//! Bindings for the ERC-165 interface detection standard, as defined in the
//! [ERC].
//!
//! [ERC]: https://eips.ethereum.org/EIPS/eip-165
use alloy::primitives::FixedBytes;

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// Interface of the ERC-165 standard.
        contract IERC165 {
            function supportsInterface(bytes4 interface_id) external view returns (bool);
        }
    }
}

/// Interface id of ERC-165 itself.
pub const INTERFACE_ID: FixedBytes<4> = FixedBytes([0x01, 0xff, 0xc9, 0xa7]);

bind! {
    /// Bindings for `ERC165`.
    Erc165(IERC165) {
        roles: Erc165Caller, Erc165Transactor, Erc165Filterer, Erc165Session;
        deploy: deploy_erc165();
        calls {
            fn supports_interface(interface_id: FixedBytes<4>) -> supportsInterfaceCall;
        }
        transactions {}
        events {}
    }
}

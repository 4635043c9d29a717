//! Bindings for the ERC-721 non-fungible token standard, as defined in the
//! [ERC], and its optional extensions.
//!
//! Sticker packs are sold as ERC-721 tokens, so the sticker contracts repeat
//! this surface. The standalone bindings here are useful for any other
//! ERC-721 token.
//!
//! [ERC]: https://eips.ethereum.org/EIPS/eip-721
use alloy::primitives::{Address, Bytes, FixedBytes, U256};

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// ERC-721 standard interface.
        contract IERC721 {
            /// Emitted when the `token_id` token is transferred from `from`
            /// to `to`.
            #[derive(Debug, PartialEq, Eq)]
            event Transfer(address indexed from, address indexed to, uint256 indexed token_id);

            /// Emitted when `owner` enables `approved` to manage the
            /// `token_id` token.
            #[derive(Debug, PartialEq, Eq)]
            event Approval(address indexed owner, address indexed approved, uint256 indexed token_id);

            /// Emitted when `owner` enables or disables `operator` to manage
            /// all of its assets.
            #[derive(Debug, PartialEq, Eq)]
            event ApprovalForAll(address indexed owner, address indexed operator, bool approved);

            function balanceOf(address owner) external view returns (uint256 balance);
            function ownerOf(uint256 token_id) external view returns (address owner);
            function getApproved(uint256 token_id) external view returns (address operator);
            function isApprovedForAll(address owner, address operator) external view returns (bool);
            function supportsInterface(bytes4 interface_id) external view returns (bool);
            function approve(address to, uint256 token_id) external;
            function setApprovalForAll(address to, bool approved) external;
            function transferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id, bytes data) external;
        }
    }

    alloy::sol! {
        /// ERC-721 with on-chain enumeration of tokens.
        contract IERC721Enumerable {
            #[derive(Debug, PartialEq, Eq)]
            event Transfer(address indexed from, address indexed to, uint256 indexed token_id);
            #[derive(Debug, PartialEq, Eq)]
            event Approval(address indexed owner, address indexed approved, uint256 indexed token_id);
            #[derive(Debug, PartialEq, Eq)]
            event ApprovalForAll(address indexed owner, address indexed operator, bool approved);

            function totalSupply() external view returns (uint256);
            function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256 token_id);
            function tokenByIndex(uint256 index) external view returns (uint256);
            function balanceOf(address owner) external view returns (uint256 balance);
            function ownerOf(uint256 token_id) external view returns (address owner);
            function getApproved(uint256 token_id) external view returns (address operator);
            function isApprovedForAll(address owner, address operator) external view returns (bool);
            function supportsInterface(bytes4 interface_id) external view returns (bool);
            function approve(address to, uint256 token_id) external;
            function setApprovalForAll(address to, bool approved) external;
            function transferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id, bytes data) external;
        }
    }

    alloy::sol! {
        /// ERC-721 with token name, symbol and per-token URI.
        contract IERC721Metadata {
            #[derive(Debug, PartialEq, Eq)]
            event Transfer(address indexed from, address indexed to, uint256 indexed token_id);
            #[derive(Debug, PartialEq, Eq)]
            event Approval(address indexed owner, address indexed approved, uint256 indexed token_id);
            #[derive(Debug, PartialEq, Eq)]
            event ApprovalForAll(address indexed owner, address indexed operator, bool approved);

            function name() external view returns (string);
            function symbol() external view returns (string);
            function tokenURI(uint256 token_id) external view returns (string);
            function balanceOf(address owner) external view returns (uint256 balance);
            function ownerOf(uint256 token_id) external view returns (address owner);
            function getApproved(uint256 token_id) external view returns (address operator);
            function isApprovedForAll(address owner, address operator) external view returns (bool);
            function supportsInterface(bytes4 interface_id) external view returns (bool);
            function approve(address to, uint256 token_id) external;
            function setApprovalForAll(address to, bool approved) external;
            function transferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id, bytes data) external;
        }
    }

    alloy::sol! {
        /// ERC-721 with both the enumeration and metadata extensions.
        contract IERC721Full {
            #[derive(Debug, PartialEq, Eq)]
            event Transfer(address indexed from, address indexed to, uint256 indexed token_id);
            #[derive(Debug, PartialEq, Eq)]
            event Approval(address indexed owner, address indexed approved, uint256 indexed token_id);
            #[derive(Debug, PartialEq, Eq)]
            event ApprovalForAll(address indexed owner, address indexed operator, bool approved);

            function name() external view returns (string);
            function symbol() external view returns (string);
            function tokenURI(uint256 token_id) external view returns (string);
            function totalSupply() external view returns (uint256);
            function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256 token_id);
            function tokenByIndex(uint256 index) external view returns (uint256);
            function balanceOf(address owner) external view returns (uint256 balance);
            function ownerOf(uint256 token_id) external view returns (address owner);
            function getApproved(uint256 token_id) external view returns (address operator);
            function isApprovedForAll(address owner, address operator) external view returns (bool);
            function supportsInterface(bytes4 interface_id) external view returns (bool);
            function approve(address to, uint256 token_id) external;
            function setApprovalForAll(address to, bool approved) external;
            function transferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id, bytes data) external;
        }
    }

    alloy::sol! {
        /// Interface of contracts able to receive ERC-721 tokens through
        /// `safeTransferFrom`.
        contract IERC721Receiver {
            function onERC721Received(address operator, address from, uint256 token_id, bytes data) external returns (bytes4);
        }
    }
}

/// Value `onERC721Received` must return to accept a token.
pub const RECEIVED: FixedBytes<4> = FixedBytes([0x15, 0x0b, 0x7a, 0x02]);

bind! {
    /// Bindings for `ERC721`.
    Erc721(IERC721) {
        roles: Erc721Caller, Erc721Transactor, Erc721Filterer, Erc721Session;
        deploy: deploy_erc721();
        calls {
            fn balance_of(owner: Address) -> balanceOfCall;
            fn owner_of(token_id: U256) -> ownerOfCall;
            fn get_approved(token_id: U256) -> getApprovedCall;
            fn is_approved_for_all(owner: Address, operator: Address) -> isApprovedForAllCall;
            fn supports_interface(interface_id: FixedBytes<4>) -> supportsInterfaceCall;
        }
        transactions {
            fn approve(to: Address, token_id: U256) -> approveCall;
            fn set_approval_for_all(to: Address, approved: bool) -> setApprovalForAllCall;
            fn transfer_from(from: Address, to: Address, token_id: U256) -> transferFromCall;
            fn safe_transfer_from(from: Address, to: Address, token_id: U256) -> safeTransferFrom_0Call;
            fn safe_transfer_from_with_data(from: Address, to: Address, token_id: U256, data: Bytes) -> safeTransferFrom_1Call;
        }
        events {
            Transfer(from: Address, to: Address, token_id: U256) => filter_transfer, watch_transfer, parse_transfer;
            Approval(owner: Address, approved: Address, token_id: U256) => filter_approval, watch_approval, parse_approval;
            ApprovalForAll(owner: Address, operator: Address) => filter_approval_for_all, watch_approval_for_all, parse_approval_for_all;
        }
    }
}

bind! {
    /// Bindings for `ERC721Enumerable`.
    Erc721Enumerable(IERC721Enumerable) {
        roles: Erc721EnumerableCaller, Erc721EnumerableTransactor, Erc721EnumerableFilterer, Erc721EnumerableSession;
        deploy: deploy_erc721_enumerable();
        calls {
            fn total_supply() -> totalSupplyCall;
            fn token_of_owner_by_index(owner: Address, index: U256) -> tokenOfOwnerByIndexCall;
            fn token_by_index(index: U256) -> tokenByIndexCall;
            fn balance_of(owner: Address) -> balanceOfCall;
            fn owner_of(token_id: U256) -> ownerOfCall;
            fn get_approved(token_id: U256) -> getApprovedCall;
            fn is_approved_for_all(owner: Address, operator: Address) -> isApprovedForAllCall;
            fn supports_interface(interface_id: FixedBytes<4>) -> supportsInterfaceCall;
        }
        transactions {
            fn approve(to: Address, token_id: U256) -> approveCall;
            fn set_approval_for_all(to: Address, approved: bool) -> setApprovalForAllCall;
            fn transfer_from(from: Address, to: Address, token_id: U256) -> transferFromCall;
            fn safe_transfer_from(from: Address, to: Address, token_id: U256) -> safeTransferFrom_0Call;
            fn safe_transfer_from_with_data(from: Address, to: Address, token_id: U256, data: Bytes) -> safeTransferFrom_1Call;
        }
        events {
            Transfer(from: Address, to: Address, token_id: U256) => filter_transfer, watch_transfer, parse_transfer;
            Approval(owner: Address, approved: Address, token_id: U256) => filter_approval, watch_approval, parse_approval;
            ApprovalForAll(owner: Address, operator: Address) => filter_approval_for_all, watch_approval_for_all, parse_approval_for_all;
        }
    }
}

bind! {
    /// Bindings for `ERC721Metadata`.
    Erc721Metadata(IERC721Metadata) {
        roles: Erc721MetadataCaller, Erc721MetadataTransactor, Erc721MetadataFilterer, Erc721MetadataSession;
        deploy: deploy_erc721_metadata();
        calls {
            fn name() -> nameCall;
            fn symbol() -> symbolCall;
            fn token_uri(token_id: U256) -> tokenURICall;
            fn balance_of(owner: Address) -> balanceOfCall;
            fn owner_of(token_id: U256) -> ownerOfCall;
            fn get_approved(token_id: U256) -> getApprovedCall;
            fn is_approved_for_all(owner: Address, operator: Address) -> isApprovedForAllCall;
            fn supports_interface(interface_id: FixedBytes<4>) -> supportsInterfaceCall;
        }
        transactions {
            fn approve(to: Address, token_id: U256) -> approveCall;
            fn set_approval_for_all(to: Address, approved: bool) -> setApprovalForAllCall;
            fn transfer_from(from: Address, to: Address, token_id: U256) -> transferFromCall;
            fn safe_transfer_from(from: Address, to: Address, token_id: U256) -> safeTransferFrom_0Call;
            fn safe_transfer_from_with_data(from: Address, to: Address, token_id: U256, data: Bytes) -> safeTransferFrom_1Call;
        }
        events {
            Transfer(from: Address, to: Address, token_id: U256) => filter_transfer, watch_transfer, parse_transfer;
            Approval(owner: Address, approved: Address, token_id: U256) => filter_approval, watch_approval, parse_approval;
            ApprovalForAll(owner: Address, operator: Address) => filter_approval_for_all, watch_approval_for_all, parse_approval_for_all;
        }
    }
}

bind! {
    /// Bindings for `ERC721Full`.
    Erc721Full(IERC721Full) {
        roles: Erc721FullCaller, Erc721FullTransactor, Erc721FullFilterer, Erc721FullSession;
        deploy: deploy_erc721_full();
        calls {
            fn name() -> nameCall;
            fn symbol() -> symbolCall;
            fn token_uri(token_id: U256) -> tokenURICall;
            fn total_supply() -> totalSupplyCall;
            fn token_of_owner_by_index(owner: Address, index: U256) -> tokenOfOwnerByIndexCall;
            fn token_by_index(index: U256) -> tokenByIndexCall;
            fn balance_of(owner: Address) -> balanceOfCall;
            fn owner_of(token_id: U256) -> ownerOfCall;
            fn get_approved(token_id: U256) -> getApprovedCall;
            fn is_approved_for_all(owner: Address, operator: Address) -> isApprovedForAllCall;
            fn supports_interface(interface_id: FixedBytes<4>) -> supportsInterfaceCall;
        }
        transactions {
            fn approve(to: Address, token_id: U256) -> approveCall;
            fn set_approval_for_all(to: Address, approved: bool) -> setApprovalForAllCall;
            fn transfer_from(from: Address, to: Address, token_id: U256) -> transferFromCall;
            fn safe_transfer_from(from: Address, to: Address, token_id: U256) -> safeTransferFrom_0Call;
            fn safe_transfer_from_with_data(from: Address, to: Address, token_id: U256, data: Bytes) -> safeTransferFrom_1Call;
        }
        events {
            Transfer(from: Address, to: Address, token_id: U256) => filter_transfer, watch_transfer, parse_transfer;
            Approval(owner: Address, approved: Address, token_id: U256) => filter_approval, watch_approval, parse_approval;
            ApprovalForAll(owner: Address, operator: Address) => filter_approval_for_all, watch_approval_for_all, parse_approval_for_all;
        }
    }
}

bind! {
    /// Bindings for `ERC721Receiver`.
    Erc721Receiver(IERC721Receiver) {
        roles: Erc721ReceiverCaller, Erc721ReceiverTransactor, Erc721ReceiverFilterer, Erc721ReceiverSession;
        deploy: deploy_erc721_receiver();
        calls {}
        transactions {
            fn on_erc721_received(operator: Address, from: Address, token_id: U256, data: Bytes) -> onERC721ReceivedCall;
        }
        events {}
    }
}

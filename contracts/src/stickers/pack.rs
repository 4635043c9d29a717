//! Bindings for `StickerPack`, the ERC-721 token minted for each sticker
//! pack purchase.
use alloy::primitives::{Address, Bytes, FixedBytes, U256};

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// Purchased sticker packs. Each token points at the pack it was
        /// bought from.
        contract IStickerPack {
            #[derive(Debug, PartialEq, Eq)]
            event ClaimedTokens(address indexed token, address indexed controller, uint256 amount);
            #[derive(Debug, PartialEq, Eq)]
            event NewController(address controller);
            #[derive(Debug, PartialEq, Eq)]
            event Transfer(address indexed from, address indexed to, uint256 indexed token_id);
            #[derive(Debug, PartialEq, Eq)]
            event Approval(address indexed owner, address indexed approved, uint256 indexed token_id);
            #[derive(Debug, PartialEq, Eq)]
            event ApprovalForAll(address indexed owner, address indexed operator, bool approved);

            function tokenPackId(uint256 token_id) external view returns (uint256 pack_id);
            function tokenCount() external view returns (uint256);
            function controller() external view returns (address);

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

            function generateToken(address owner, uint256 pack_id) external returns (uint256 token_id);
            function claimTokens(address token) external;
            function changeController(address new_controller) external;

            function approve(address to, uint256 token_id) external;
            function setApprovalForAll(address to, bool approved) external;
            function transferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id) external;
            function safeTransferFrom(address from, address to, uint256 token_id, bytes data) external;
        }
    }
}

bind! {
    /// Bindings for `StickerPack`.
    StickerPack(IStickerPack) {
        roles: StickerPackCaller, StickerPackTransactor, StickerPackFilterer, StickerPackSession;
        deploy: deploy_sticker_pack();
        calls {
            fn token_pack_id(token_id: U256) -> tokenPackIdCall;
            fn token_count() -> tokenCountCall;
            fn controller() -> controllerCall;
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
            fn generate_token(owner: Address, pack_id: U256) -> generateTokenCall;
            fn claim_tokens(token: Address) -> claimTokensCall;
            fn change_controller(new_controller: Address) -> changeControllerCall;
            fn approve(to: Address, token_id: U256) -> approveCall;
            fn set_approval_for_all(to: Address, approved: bool) -> setApprovalForAllCall;
            fn transfer_from(from: Address, to: Address, token_id: U256) -> transferFromCall;
            fn safe_transfer_from(from: Address, to: Address, token_id: U256) -> safeTransferFrom_0Call;
            fn safe_transfer_from_with_data(from: Address, to: Address, token_id: U256, data: Bytes) -> safeTransferFrom_1Call;
        }
        events {
            ClaimedTokens(token: Address, controller: Address) => filter_claimed_tokens, watch_claimed_tokens, parse_claimed_tokens;
            NewController() => filter_new_controller, watch_new_controller, parse_new_controller;
            Transfer(from: Address, to: Address, token_id: U256) => filter_transfer, watch_transfer, parse_transfer;
            Approval(owner: Address, approved: Address, token_id: U256) => filter_approval, watch_approval, parse_approval;
            ApprovalForAll(owner: Address, operator: Address) => filter_approval_for_all, watch_approval_for_all, parse_approval_for_all;
        }
    }
}

//! Bindings for `StickerType`, the registry of sticker packs.
use alloy::primitives::{Address, Bytes, FixedBytes, U256};

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// Registry of sticker packs. Each pack is itself an ERC-721 token
        /// held by its author.
        contract IStickerType {
            /// Emitted when a pack is registered.
            #[derive(Debug, PartialEq, Eq)]
            event Register(uint256 indexed pack_id, uint256 data_price, bytes contenthash, bool mintable);
            /// Emitted when a pack is purged.
            #[derive(Debug, PartialEq, Eq)]
            event Unregister(uint256 indexed pack_id);
            #[derive(Debug, PartialEq, Eq)]
            event PriceChanged(uint256 indexed pack_id, uint256 data_price);
            #[derive(Debug, PartialEq, Eq)]
            event MintabilityChanged(uint256 indexed pack_id, bool mintable);
            #[derive(Debug, PartialEq, Eq)]
            event ContenthashChanged(uint256 indexed pack_id, bytes contenthash);
            /// Emitted when a pack is added to `category`.
            #[derive(Debug, PartialEq, Eq)]
            event Categorized(bytes4 indexed category, uint256 indexed pack_id);
            /// Emitted when a pack is removed from `category`.
            #[derive(Debug, PartialEq, Eq)]
            event Uncategorized(bytes4 indexed category, uint256 indexed pack_id);
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

            function packCount() external view returns (uint256);
            function packs(uint256 pack_id) external view returns (address owner, bool mintable, uint256 timestamp, uint256 price, uint256 donate, bytes contenthash);
            function getPackData(uint256 pack_id) external view returns (bytes4[] category, address owner, bool mintable, uint256 timestamp, uint256 price, bytes contenthash);
            function getPackSummary(uint256 pack_id) external view returns (bytes4[] category, uint256 timestamp, bytes contenthash);
            function getPaymentData(uint256 pack_id) external view returns (address owner, bool mintable, uint256 price, uint256 donate);
            function getAvailablePacks(bytes4 category) external view returns (uint256[] available_ids);
            function getCategoryLength(bytes4 category) external view returns (uint256 size);
            function getCategoryPack(bytes4 category, uint256 index) external view returns (uint256 pack_id);
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

            function generatePack(uint256 price, uint256 donate, bytes4[] category, address owner, bytes contenthash) external returns (uint256 pack_id);
            function purgePack(uint256 pack_id, uint256 limit) external;
            function setPackContenthash(uint256 pack_id, bytes contenthash) external;
            function setPackPrice(uint256 pack_id, uint256 price, uint256 donate) external;
            function addPackCategory(uint256 pack_id, bytes4 category) external;
            function removePackCategory(uint256 pack_id, bytes4 category) external;
            function setPackState(uint256 pack_id, bool mintable) external;
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
    /// Bindings for `StickerType`.
    StickerType(IStickerType) {
        roles: StickerTypeCaller, StickerTypeTransactor, StickerTypeFilterer, StickerTypeSession;
        deploy: deploy_sticker_type();
        calls {
            fn pack_count() -> packCountCall;
            fn packs(pack_id: U256) -> packsCall;
            fn get_pack_data(pack_id: U256) -> getPackDataCall;
            fn get_pack_summary(pack_id: U256) -> getPackSummaryCall;
            fn get_payment_data(pack_id: U256) -> getPaymentDataCall;
            fn get_available_packs(category: FixedBytes<4>) -> getAvailablePacksCall;
            fn get_category_length(category: FixedBytes<4>) -> getCategoryLengthCall;
            fn get_category_pack(category: FixedBytes<4>, index: U256) -> getCategoryPackCall;
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
            fn generate_pack(price: U256, donate: U256, category: Vec<FixedBytes<4>>, owner: Address, contenthash: Bytes) -> generatePackCall;
            fn purge_pack(pack_id: U256, limit: U256) -> purgePackCall;
            fn set_pack_contenthash(pack_id: U256, contenthash: Bytes) -> setPackContenthashCall;
            fn set_pack_price(pack_id: U256, price: U256, donate: U256) -> setPackPriceCall;
            fn add_pack_category(pack_id: U256, category: FixedBytes<4>) -> addPackCategoryCall;
            fn remove_pack_category(pack_id: U256, category: FixedBytes<4>) -> removePackCategoryCall;
            fn set_pack_state(pack_id: U256, mintable: bool) -> setPackStateCall;
            fn claim_tokens(token: Address) -> claimTokensCall;
            fn change_controller(new_controller: Address) -> changeControllerCall;
            fn approve(to: Address, token_id: U256) -> approveCall;
            fn set_approval_for_all(to: Address, approved: bool) -> setApprovalForAllCall;
            fn transfer_from(from: Address, to: Address, token_id: U256) -> transferFromCall;
            fn safe_transfer_from(from: Address, to: Address, token_id: U256) -> safeTransferFrom_0Call;
            fn safe_transfer_from_with_data(from: Address, to: Address, token_id: U256, data: Bytes) -> safeTransferFrom_1Call;
        }
        events {
            Register(pack_id: U256) => filter_register, watch_register, parse_register;
            Unregister(pack_id: U256) => filter_unregister, watch_unregister, parse_unregister;
            PriceChanged(pack_id: U256) => filter_price_changed, watch_price_changed, parse_price_changed;
            MintabilityChanged(pack_id: U256) => filter_mintability_changed, watch_mintability_changed, parse_mintability_changed;
            ContenthashChanged(pack_id: U256) => filter_contenthash_changed, watch_contenthash_changed, parse_contenthash_changed;
            Categorized(category: FixedBytes<4>, pack_id: U256) => filter_categorized, watch_categorized, parse_categorized;
            Uncategorized(category: FixedBytes<4>, pack_id: U256) => filter_uncategorized, watch_uncategorized, parse_uncategorized;
            ClaimedTokens(token: Address, controller: Address) => filter_claimed_tokens, watch_claimed_tokens, parse_claimed_tokens;
            NewController() => filter_new_controller, watch_new_controller, parse_new_controller;
            Transfer(from: Address, to: Address, token_id: U256) => filter_transfer, watch_transfer, parse_transfer;
            Approval(owner: Address, approved: Address, token_id: U256) => filter_approval, watch_approval, parse_approval;
            ApprovalForAll(owner: Address, operator: Address) => filter_approval_for_all, watch_approval_for_all, parse_approval_for_all;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, bytes, fixed_bytes, uint},
        sol_types::SolCall,
    };

    use super::*;
    use crate::{
        bind::{CallOpts, FilterOpts, TransactOpts},
        mock::MockBackend,
    };

    const STICKER_TYPE: Address = address!("0577215622f43a39f4bc9640806dfea9b10d2a36");
    const AUTHOR: Address = address!("000000000000000000000000000000000000a11c");
    const ANIMALS: FixedBytes<4> = fixed_bytes!("00000001");
    const FOOD: FixedBytes<4> = fixed_bytes!("00000002");

    #[tokio::test]
    async fn get_pack_data_decodes_named_returns() {
        let backend = MockBackend::new();
        backend.on_call::<IStickerType::getPackDataCall, _>(STICKER_TYPE, |call| {
            IStickerType::getPackDataReturn {
                category: vec![ANIMALS],
                owner: AUTHOR,
                mintable: true,
                timestamp: uint!(1_600_000_000_U256),
                price: call.pack_id * uint!(1000_U256),
                contenthash: bytes!("e3010170"),
            }
        });

        let sticker_type = StickerType::new(STICKER_TYPE, backend);
        let data = sticker_type
            .caller
            .get_pack_data(&CallOpts::default(), uint!(3_U256))
            .await
            .expect("should call");
        assert_eq!(data.category, vec![ANIMALS]);
        assert_eq!(data.owner, AUTHOR);
        assert!(data.mintable);
        assert_eq!(data.price, uint!(3000_U256));
        assert_eq!(data.contenthash, bytes!("e3010170"));
    }

    #[tokio::test]
    async fn available_packs_by_category() {
        let backend = MockBackend::new();
        backend.on_call::<IStickerType::getAvailablePacksCall, _>(STICKER_TYPE, |call| {
            if call.category == ANIMALS {
                vec![uint!(1_U256), uint!(4_U256)]
            } else {
                Vec::new()
            }
        });

        let sticker_type = StickerType::new(STICKER_TYPE, backend);
        let opts = CallOpts::default();
        let animals =
            sticker_type.caller.get_available_packs(&opts, ANIMALS).await.expect("should call");
        let food = sticker_type.caller.get_available_packs(&opts, FOOD).await.expect("should call");
        assert_eq!(animals, vec![uint!(1_U256), uint!(4_U256)]);
        assert!(food.is_empty());
    }

    #[tokio::test]
    async fn generate_pack_encodes_categories() {
        let backend = MockBackend::new();
        let sticker_type = StickerType::new(STICKER_TYPE, backend.clone());

        sticker_type
            .transactor
            .generate_pack(
                &TransactOpts::sender(AUTHOR),
                uint!(10_U256),
                U256::ZERO,
                vec![ANIMALS, FOOD],
                AUTHOR,
                bytes!("e3010170"),
            )
            .await
            .expect("should send");

        let sent = backend.sent();
        let input = sent[0].input.input().expect("should have input");
        let call = IStickerType::generatePackCall::abi_decode(input).expect("should decode");
        assert_eq!(call.category, vec![ANIMALS, FOOD]);
        assert_eq!(call.owner, AUTHOR);
    }

    #[tokio::test]
    async fn filters_categorized_by_bytes4_topic() {
        let backend = MockBackend::new();
        backend.push_log(
            STICKER_TYPE,
            &IStickerType::Categorized { category: ANIMALS, pack_id: uint!(1_U256) },
        );
        backend.push_log(
            STICKER_TYPE,
            &IStickerType::Categorized { category: FOOD, pack_id: uint!(2_U256) },
        );
        backend.push_log(
            STICKER_TYPE,
            &IStickerType::Uncategorized { category: FOOD, pack_id: uint!(2_U256) },
        );

        let sticker_type = StickerType::new(STICKER_TYPE, backend);
        let events = sticker_type
            .filterer
            .filter_categorized(&FilterOpts::default(), &[FOOD], &[])
            .await
            .expect("should filter")
            .collect()
            .await
            .expect("should decode");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].inner.data.pack_id, uint!(2_U256));
    }
}

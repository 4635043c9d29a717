//! Bindings for `StickerMarket`, which sells sticker packs for SNT.
//!
//! Buying goes through SNT's `approveAndCall`, which calls
//! `receiveApproval` on the market with ABI-encoded `buyToken` calldata.
//! See [`buy_token_data`].
use alloy::{
    primitives::{Address, Bytes, FixedBytes, U256},
    sol_types::SolCall,
};

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// Sticker pack market, controller of `StickerPack` and
        /// `StickerType`.
        contract IStickerMarket {
            constructor(address snt, address sticker_pack, address sticker_type);

            #[derive(Debug, PartialEq, Eq)]
            event ClaimedTokens(address indexed token, address indexed controller, uint256 amount);
            /// Emitted when the market is opened, closed or restricted to
            /// its controller.
            #[derive(Debug, PartialEq, Eq)]
            event MarketState(uint8 state);
            #[derive(Debug, PartialEq, Eq)]
            event RegisterFee(uint256 value);
            #[derive(Debug, PartialEq, Eq)]
            event BurnRate(uint256 value);
            #[derive(Debug, PartialEq, Eq)]
            event NewController(address controller);
            /// Emitted when a pack is registered through the market.
            #[derive(Debug, PartialEq, Eq)]
            event Register(uint256 indexed pack_id, uint256 data_price, bytes contenthash);
            /// Emitted when a pack token is minted.
            #[derive(Debug, PartialEq, Eq)]
            event Token(uint256 indexed token_id);

            function state() external view returns (uint8);
            function registerFee() external view returns (uint256);
            function burnRate() external view returns (uint256);
            function snt() external view returns (address);
            function stickerPack() external view returns (address);
            function stickerType() external view returns (address);
            function getTokenData(uint256 token_id) external view returns (bytes4[] category, uint256 timestamp, bytes contenthash);
            function controller() external view returns (address);

            function buyToken(uint256 pack_id, address destination, uint256 price) external returns (uint256 token_id);
            function registerPack(uint256 price, uint256 donate, bytes4[] category, address owner, bytes contenthash, uint256 fee) external returns (uint256 pack_id);
            function receiveApproval(address from, uint256 value, address token, bytes data) external;
            function setMarketState(uint8 state) external;
            function setRegisterFee(uint256 value) external;
            function setBurnRate(uint256 value) external;
            function generatePack(uint256 price, uint256 donate, bytes4[] category, address owner, bytes contenthash) external returns (uint256 pack_id);
            function purgePack(uint256 pack_id, uint256 limit) external;
            function generateToken(address owner, uint256 pack_id) external returns (uint256 token_id);
            function migrate(address new_controller) external;
            function claimTokens(address token) external;
            function changeController(address new_controller) external;
        }
    }
}

/// Market states as returned by [`StickerMarketCaller::state`].
pub mod state {
    /// Nothing can be bought or registered.
    pub const INVALID: u8 = 0;
    /// Buying and registering are open to everyone.
    pub const OPEN: u8 = 1;
    /// Only buying is open.
    pub const BUY_ONLY: u8 = 2;
    /// Controller-only.
    pub const CONTROLLED: u8 = 3;
    /// Closed.
    pub const CLOSED: u8 = 4;
}

bind! {
    /// Bindings for `StickerMarket`.
    StickerMarket(IStickerMarket) {
        roles: StickerMarketCaller, StickerMarketTransactor, StickerMarketFilterer, StickerMarketSession;
        deploy: deploy_sticker_market(snt: Address, sticker_pack: Address, sticker_type: Address);
        calls {
            fn state() -> stateCall;
            fn register_fee() -> registerFeeCall;
            fn burn_rate() -> burnRateCall;
            fn snt() -> sntCall;
            fn sticker_pack() -> stickerPackCall;
            fn sticker_type() -> stickerTypeCall;
            fn get_token_data(token_id: U256) -> getTokenDataCall;
            fn controller() -> controllerCall;
        }
        transactions {
            fn buy_token(pack_id: U256, destination: Address, price: U256) -> buyTokenCall;
            fn register_pack(price: U256, donate: U256, category: Vec<FixedBytes<4>>, owner: Address, contenthash: Bytes, fee: U256) -> registerPackCall;
            fn receive_approval(from: Address, value: U256, token: Address, data: Bytes) -> receiveApprovalCall;
            fn set_market_state(state: u8) -> setMarketStateCall;
            fn set_register_fee(value: U256) -> setRegisterFeeCall;
            fn set_burn_rate(value: U256) -> setBurnRateCall;
            fn generate_pack(price: U256, donate: U256, category: Vec<FixedBytes<4>>, owner: Address, contenthash: Bytes) -> generatePackCall;
            fn purge_pack(pack_id: U256, limit: U256) -> purgePackCall;
            fn generate_token(owner: Address, pack_id: U256) -> generateTokenCall;
            fn migrate(new_controller: Address) -> migrateCall;
            fn claim_tokens(token: Address) -> claimTokensCall;
            fn change_controller(new_controller: Address) -> changeControllerCall;
        }
        events {
            ClaimedTokens(token: Address, controller: Address) => filter_claimed_tokens, watch_claimed_tokens, parse_claimed_tokens;
            MarketState() => filter_market_state, watch_market_state, parse_market_state;
            RegisterFee() => filter_register_fee, watch_register_fee, parse_register_fee;
            BurnRate() => filter_burn_rate, watch_burn_rate, parse_burn_rate;
            NewController() => filter_new_controller, watch_new_controller, parse_new_controller;
            Register(pack_id: U256) => filter_register, watch_register, parse_register;
            Token(token_id: U256) => filter_token, watch_token, parse_token;
        }
    }
}

/// Calldata of `buyToken`, the payload SNT's `approveAndCall` hands to the
/// market.
pub fn buy_token_data(pack_id: U256, destination: Address, price: U256) -> Bytes {
    IStickerMarket::buyTokenCall { pack_id, destination, price }.abi_encode().into()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, bytes, uint};

    use super::*;
    use crate::{
        bind::{CallOpts, FilterOpts, TransactOpts},
        mock::MockBackend,
    };

    const MARKET: Address = address!("12824271339304d3a9f7e096e62a2a7e73b4a7e7");
    const SNT: Address = address!("744d70fdbe2ba4cf95131626614a1763df805b9e");
    const STICKER_PACK: Address = address!("110101156e8f0743948b2a61afcf3994a8fb172e");
    const STICKER_TYPE: Address = address!("0577215622f43a39f4bc9640806dfea9b10d2a36");
    const ALICE: Address = address!("000000000000000000000000000000000000a11c");

    #[tokio::test]
    async fn deploy_appends_constructor_arguments() -> eyre::Result<()> {
        let backend = MockBackend::new();
        backend.deploys_to(MARKET);
        let bytecode = [0x60, 0x80, 0x60, 0x40];

        let (market, _) = deploy_sticker_market(
            backend.clone(),
            &TransactOpts::sender(ALICE),
            &bytecode,
            SNT,
            STICKER_PACK,
            STICKER_TYPE,
        )
        .await?;
        assert_eq!(market.address(), MARKET);

        let sent = backend.sent();
        let input = sent[0].input.input().expect("should have input");
        assert_eq!(input[..4], bytecode);
        let args = &input[4..];
        assert_eq!(args.len(), 3 * 32);
        assert_eq!(&args[12..32], SNT.as_slice());
        assert_eq!(&args[44..64], STICKER_PACK.as_slice());
        assert_eq!(&args[76..96], STICKER_TYPE.as_slice());
        Ok(())
    }

    #[tokio::test]
    async fn reads_market_configuration() -> eyre::Result<()> {
        let backend = MockBackend::new();
        backend.on_call::<IStickerMarket::stateCall, _>(MARKET, |_| state::OPEN);
        backend.on_call::<IStickerMarket::sntCall, _>(MARKET, |_| SNT);

        let market = StickerMarket::new(MARKET, backend);
        let opts = CallOpts::default();
        assert_eq!(market.caller.state(&opts).await?, state::OPEN);
        assert_eq!(market.caller.snt(&opts).await?, SNT);
        Ok(())
    }

    #[test]
    fn buy_token_data_round_trips() {
        let data = buy_token_data(uint!(3_U256), ALICE, uint!(10_U256));
        let call = IStickerMarket::buyTokenCall::abi_decode(&data).expect("should decode");
        assert_eq!(call.pack_id, uint!(3_U256));
        assert_eq!(call.destination, ALICE);
        assert_eq!(call.price, uint!(10_U256));
    }

    #[tokio::test]
    async fn filters_registrations() -> eyre::Result<()> {
        let backend = MockBackend::new();
        backend.push_log(
            MARKET,
            &IStickerMarket::Register {
                pack_id: uint!(1_U256),
                data_price: uint!(5_U256),
                contenthash: bytes!("e301"),
            },
        );
        backend.push_log(MARKET, &IStickerMarket::Token { token_id: uint!(9_U256) });

        let market = StickerMarket::new(MARKET, backend);
        let registrations = market
            .filterer
            .filter_register(&FilterOpts::default(), &[])
            .await?
            .collect()
            .await?;
        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0].inner.data.contenthash, bytes!("e301"));

        let tokens = market
            .filterer
            .filter_token(&FilterOpts::default(), &[uint!(9_U256)])
            .await?
            .collect()
            .await?;
        assert_eq!(tokens.len(), 1);
        Ok(())
    }
}

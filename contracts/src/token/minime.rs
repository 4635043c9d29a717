//! Bindings for the MiniMe token surface used by SNT, the token sticker
//! packs are paid with.
//!
//! Purchases go through `approveAndCall`: the token approves the market and
//! calls back into it through `ApproveAndCallFallBack::receiveApproval` in
//! the same transaction.
use alloy::primitives::{Address, Bytes, U256};

pub use sol::*;
mod sol {
    #![allow(missing_docs)]

    alloy::sol! {
        /// ERC-20 token with a single-transaction approve and call.
        contract IMiniMeToken {
            #[derive(Debug, PartialEq, Eq)]
            event Transfer(address indexed from, address indexed to, uint256 value);
            #[derive(Debug, PartialEq, Eq)]
            event Approval(address indexed owner, address indexed spender, uint256 value);

            function totalSupply() external view returns (uint256 total_supply);
            function balanceOf(address owner) external view returns (uint256 balance);
            function allowance(address owner, address spender) external view returns (uint256 remaining);
            function transfer(address to, uint256 value) external returns (bool success);
            function approve(address spender, uint256 value) external returns (bool success);
            function transferFrom(address from, address to, uint256 value) external returns (bool success);
            function approveAndCall(address spender, uint256 amount, bytes extra_data) external returns (bool success);
        }
    }

    alloy::sol! {
        /// Receiver of `approveAndCall` callbacks.
        contract IApproveAndCallFallBack {
            function receiveApproval(address from, uint256 amount, address token, bytes data) external;
        }
    }
}

bind! {
    /// Bindings for `MiniMeToken`.
    MiniMeToken(IMiniMeToken) {
        roles: MiniMeTokenCaller, MiniMeTokenTransactor, MiniMeTokenFilterer, MiniMeTokenSession;
        deploy: deploy_mini_me_token();
        calls {
            fn total_supply() -> totalSupplyCall;
            fn balance_of(owner: Address) -> balanceOfCall;
            fn allowance(owner: Address, spender: Address) -> allowanceCall;
        }
        transactions {
            fn transfer(to: Address, value: U256) -> transferCall;
            fn approve(spender: Address, value: U256) -> approveCall;
            fn transfer_from(from: Address, to: Address, value: U256) -> transferFromCall;
            fn approve_and_call(spender: Address, amount: U256, extra_data: Bytes) -> approveAndCallCall;
        }
        events {
            Transfer(from: Address, to: Address) => filter_transfer, watch_transfer, parse_transfer;
            Approval(owner: Address, spender: Address) => filter_approval, watch_approval, parse_approval;
        }
    }
}

bind! {
    /// Bindings for `ApproveAndCallFallBack`.
    ApproveAndCallFallBack(IApproveAndCallFallBack) {
        roles: ApproveAndCallFallBackCaller, ApproveAndCallFallBackTransactor, ApproveAndCallFallBackFilterer, ApproveAndCallFallBackSession;
        deploy: deploy_approve_and_call_fall_back();
        calls {}
        transactions {
            fn receive_approval(from: Address, amount: U256, token: Address, data: Bytes) -> receiveApprovalCall;
        }
        events {}
    }
}

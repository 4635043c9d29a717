//! Contracts that administer access to other contracts.
pub mod controlled;
pub mod token_claimer;

pub use controlled::Controlled;
pub use token_claimer::TokenClaimer;

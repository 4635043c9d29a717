//! Client configuration.
//!
//! Read from a TOML file, then overridden by environment variables:
//!
//! ```toml
//! rpc_url = "https://mainnet.infura.io/v3/<key>"
//! chain_id = 1
//! ipfs_gateway = ".ipfs.infura-ipfs.io/"
//! max_concurrent_requests = 3
//! accounts = ["0x..."]
//! store_path = "stickers.json"
//!
//! [[deployments]]
//! chain_id = 5
//! sticker_type = "0x..."
//! sticker_pack = "0x..."
//! sticker_market = "0x..."
//! snt = "0x..."
//! ```
use std::{fs, path::Path, path::PathBuf, time::Duration};

use alloy::primitives::Address;
use serde::Deserialize;
use sticker_contracts::addresses::{AddressBook, Deployment};

use crate::{contenthash::DEFAULT_GATEWAY, fetch::DEFAULT_TIMEOUT, Error, Result};

/// Overrides [`Config::rpc_url`].
pub const RPC_URL: &str = "RPC_URL";
/// Overrides [`Config::chain_id`].
pub const CHAIN_ID: &str = "CHAIN_ID";
/// Overrides [`Config::ipfs_gateway`].
pub const IPFS_GATEWAY: &str = "IPFS_GATEWAY";
/// Overrides [`Config::max_concurrent_requests`].
pub const MAX_CONCURRENT_REQUESTS: &str = "STICKERS_MAX_CONCURRENT_REQUESTS";

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON-RPC endpoint of the Ethereum node.
    pub rpc_url: String,
    /// Chain the sticker market is read from.
    pub chain_id: u64,
    /// Suffix turning a base32 CID into a gateway URL.
    pub ipfs_gateway: String,
    /// Bound on RPC and HTTP requests in flight per fan-out.
    pub max_concurrent_requests: usize,
    /// Timeout of metadata downloads, in seconds.
    pub http_timeout_secs: u64,
    /// Accounts whose purchased packs are marked as such on the market.
    pub accounts: Vec<Address>,
    /// File the installed, pending and recent packs are kept in. Nothing is
    /// persisted when unset.
    pub store_path: Option<PathBuf>,
    /// Deployments in addition to, or replacing, the known ones.
    pub deployments: Vec<Deployment>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_owned(),
            chain_id: sticker_contracts::addresses::MAINNET,
            ipfs_gateway: DEFAULT_GATEWAY.to_owned(),
            max_concurrent_requests: 3,
            http_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            accounts: Vec::new(),
            store_path: None,
            deployments: Vec::new(),
        }
    }
}

impl Config {
    /// Parses a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the TOML file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_toml(&source)
    }

    /// Reads `path` if given, or starts from the defaults, then applies the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Applies the environment overrides found through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = var(RPC_URL) {
            self.rpc_url = url;
        }
        if let Some(chain_id) = var(CHAIN_ID) {
            self.chain_id = parse_env(CHAIN_ID, &chain_id)?;
        }
        if let Some(gateway) = var(IPFS_GATEWAY) {
            self.ipfs_gateway = gateway;
        }
        if let Some(max) = var(MAX_CONCURRENT_REQUESTS) {
            self.max_concurrent_requests = parse_env(MAX_CONCURRENT_REQUESTS, &max)?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.max_concurrent_requests == 0 {
            return Err(Error::Config("max_concurrent_requests must be positive".to_owned()));
        }
        Ok(())
    }

    /// Timeout of metadata downloads.
    #[must_use]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Known deployments with the configured ones applied on top.
    #[must_use]
    pub fn address_book(&self) -> AddressBook {
        let mut book = AddressBook::default();
        for deployment in &self.deployments {
            book.insert(*deployment);
        }
        book
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| Error::Config(format!("{key}={value}: {e}")))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use alloy::primitives::address;
    use sticker_contracts::addresses::MAINNET_DEPLOYMENT;

    use super::*;

    #[test]
    fn defaults_match_the_public_gateway() {
        let config = Config::default();
        assert_eq!(config.ipfs_gateway, ".ipfs.infura-ipfs.io/");
        assert_eq!(config.max_concurrent_requests, 3);
        assert_eq!(config.http_timeout(), Duration::from_secs(5));
        assert_eq!(config.chain_id, 1);
    }

    #[test]
    fn reads_toml_with_deployments() {
        let config = Config::from_toml(
            r#"
            rpc_url = "http://node:8545"
            chain_id = 5
            accounts = ["0x000000000000000000000000000000000000a11c"]

            [[deployments]]
            chain_id = 5
            sticker_type = "0x0000000000000000000000000000000000000001"
            sticker_pack = "0x0000000000000000000000000000000000000002"
            sticker_market = "0x0000000000000000000000000000000000000003"
            snt = "0x0000000000000000000000000000000000000004"
            "#,
        )
        .expect("should parse");

        assert_eq!(config.rpc_url, "http://node:8545");
        assert_eq!(config.accounts, vec![address!("000000000000000000000000000000000000a11c")]);
        assert_eq!(config.max_concurrent_requests, 3);

        let book = config.address_book();
        assert_eq!(
            book.sticker_market(5).expect("configured"),
            address!("0000000000000000000000000000000000000003")
        );
        assert_eq!(book.get(1), Some(&MAINNET_DEPLOYMENT));
    }

    #[test]
    fn rejects_unknown_keys_and_zero_concurrency() {
        assert!(matches!(Config::from_toml("rpc = \"x\""), Err(Error::Config(_))));
        assert!(matches!(Config::from_toml("max_concurrent_requests = 0"), Err(Error::Config(_))));
    }

    #[test]
    fn environment_overrides_file() {
        let env: HashMap<&str, &str> = HashMap::from([
            (RPC_URL, "http://env:8545"),
            (CHAIN_ID, "10"),
            (MAX_CONCURRENT_REQUESTS, "8"),
        ]);
        let mut config = Config::from_toml("rpc_url = \"http://file:8545\"").expect("should parse");
        config
            .apply_env(|key| env.get(key).map(|v| (*v).to_owned()))
            .expect("should apply");

        assert_eq!(config.rpc_url, "http://env:8545");
        assert_eq!(config.chain_id, 10);
        assert_eq!(config.max_concurrent_requests, 8);
        assert_eq!(config.ipfs_gateway, DEFAULT_GATEWAY);
    }

    #[test]
    fn rejects_malformed_environment() {
        let mut config = Config::default();
        let err = config
            .apply_env(|key| (key == CHAIN_ID).then(|| "mainnet".to_owned()))
            .expect_err("should reject");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("stickers.toml");
        fs::write(&path, "chain_id = 3").expect("should write");

        assert_eq!(Config::from_file(&path).expect("should read").chain_id, 3);
        assert!(Config::from_file(dir.path().join("missing.toml")).is_err());
    }
}

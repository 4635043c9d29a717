//! Errors returned by the sticker market client.

/// Convenience alias for results produced by this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// An error raised by the sticker market client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A contract call failed.
    #[error(transparent)]
    Contract(#[from] sticker_contracts::Error),
    /// Pack metadata could not be downloaded.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The gateway has nothing at the URL.
    #[error("no content at {0}")]
    NotFound(String),
    /// Pack metadata is not valid EDN.
    #[error("edn error: {0}")]
    Edn(#[from] crate::edn::ParseError),
    /// A hash is not valid hex.
    #[error("invalid hex: {0}")]
    Hex(#[from] alloy::hex::FromHexError),
    /// A contenthash does not hold a valid CID.
    #[error("invalid cid: {0}")]
    Cid(#[from] cid::Error),
    /// A contenthash does not start with a multicodec varint.
    #[error("malformed contenthash")]
    MalformedContenthash,
    /// A contenthash uses a codec other than `ipfs-ns`.
    #[error("unsupported contenthash codec {0:#x}, expected ipfs-ns")]
    UnsupportedCodec(u64),
    /// The pack store could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] std::io::Error),
    /// The pack store file is corrupt.
    #[error("store encoding error: {0}")]
    StoreEncoding(#[from] serde_json::Error),
    /// The configuration is invalid.
    #[error("config error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

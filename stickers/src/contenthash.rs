//! Decoding of [EIP-1577] contenthashes into IPFS gateway URLs.
//!
//! Pack registrations store a contenthash: a multicodec varint naming the
//! namespace, followed by a binary CID. Only the `ipfs-ns` namespace is
//! used by sticker packs.
//!
//! [EIP-1577]: https://eips.ethereum.org/EIPS/eip-1577
use alloy::hex;
use cid::{multibase::Base, Cid};

use crate::{Error, Result};

/// Multicodec code of the `ipfs-ns` namespace.
pub const IPFS_NS: u64 = 0xe3;

/// Suffix appended to the base32 CID to form a subdomain gateway URL.
pub const DEFAULT_GATEWAY: &str = ".ipfs.infura-ipfs.io/";

/// Splits the multicodec prefix off `contenthash`.
pub fn remove_codec(contenthash: &[u8]) -> Result<(u64, &[u8])> {
    unsigned_varint::decode::u64(contenthash).map_err(|_| Error::MalformedContenthash)
}

/// Extracts the CID of an `ipfs-ns` contenthash.
pub fn to_cid(contenthash: &[u8]) -> Result<Cid> {
    let (codec, data) = remove_codec(contenthash)?;
    if codec != IPFS_NS {
        return Err(Error::UnsupportedCodec(codec));
    }
    Ok(Cid::try_from(data)?)
}

/// Renders `contenthash` as a URL on the default gateway.
pub fn to_url(contenthash: &[u8]) -> Result<String> {
    to_url_with_gateway(contenthash, DEFAULT_GATEWAY)
}

/// Renders `contenthash` as `https://<base32 cid><gateway>`.
pub fn to_url_with_gateway(contenthash: &[u8], gateway: &str) -> Result<String> {
    let cid = to_cid(contenthash)?.to_string_of_base(Base::Base32Lower)?;
    Ok(format!("https://{cid}{gateway}"))
}

/// Hex-decodes `hash` (without `0x`) and renders it on `gateway`.
pub fn decode_hex_hash(hash: &str, gateway: &str) -> Result<String> {
    let contenthash = hex::decode(hash)?;
    to_url_with_gateway(&contenthash, gateway)
}

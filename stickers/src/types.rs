//! Sticker packs and stickers as shown to clients.
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a pack stands for the local user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PackStatus {
    /// Listed on the market and not owned.
    #[default]
    Available = 0,
    /// Installed locally.
    Installed = 1,
    /// Bought, waiting for the purchase to be mined.
    Pending = 2,
    /// Owned by one of the user's accounts but not installed.
    Purchased = 3,
}

impl TryFrom<u8> for PackStatus {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Available),
            1 => Ok(Self::Installed),
            2 => Ok(Self::Pending),
            3 => Ok(Self::Purchased),
            other => Err(other),
        }
    }
}

impl Serialize for PackStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

impl<'de> Deserialize<'de> for PackStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Self::try_from(value)
            .map_err(|v| serde::de::Error::custom(format!("unknown pack status {v}")))
    }
}

/// A single sticker of a pack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sticker {
    /// Pack the sticker belongs to.
    #[serde(rename = "packID", with = "u256_decimal")]
    pub pack_id: U256,
    /// Gateway URL of the image, when hashes were translated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Contenthash of the image, hex without `0x`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,
}

/// A sticker pack registered in `StickerType`, with its metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerPack {
    /// Pack id in `StickerType`.
    #[serde(with = "u256_decimal")]
    pub id: U256,
    /// Display name.
    pub name: String,
    /// Author name.
    pub author: String,
    /// Account receiving the payments.
    pub owner: Address,
    /// Price in SNT wei.
    #[serde(with = "u256_decimal")]
    pub price: U256,
    /// Preview image, a URL or a contenthash.
    pub preview: String,
    /// Thumbnail image, a URL or a contenthash.
    pub thumbnail: String,
    /// Stickers of the pack.
    pub stickers: Vec<Sticker>,
    /// Status for the local user.
    pub status: PackStatus,
}

impl StickerPack {
    /// A pack with only its on-chain data filled in.
    #[must_use]
    pub fn new(id: U256, owner: Address, price: U256) -> Self {
        Self {
            id,
            name: String::new(),
            author: String::new(),
            owner,
            price,
            preview: String::new(),
            thumbnail: String::new(),
            stickers: Vec::new(),
            status: PackStatus::Available,
        }
    }
}

/// Serializes a [`U256`] as a decimal string.
pub mod u256_decimal {
    use alloy::primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Writes `value` as a decimal string.
    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    /// Reads a decimal string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        U256::from_str_radix(&s, 10).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, uint};
    use serde_json::json;

    use super::*;

    #[test]
    fn pack_serializes_with_client_field_names() {
        let mut pack = StickerPack::new(
            uint!(12_U256),
            address!("000000000000000000000000000000000000a11c"),
            uint!(10000000000000000000_U256),
        );
        pack.name = "Tozemoon".to_owned();
        pack.status = PackStatus::Purchased;
        pack.stickers.push(Sticker {
            pack_id: pack.id,
            url: String::new(),
            hash: "e301".to_owned(),
        });

        let value = serde_json::to_value(&pack).expect("should serialize");
        assert_eq!(value["id"], json!("12"));
        assert_eq!(value["price"], json!("10000000000000000000"));
        assert_eq!(value["status"], json!(3));
        assert_eq!(value["stickers"][0], json!({ "packID": "12", "hash": "e301" }));
    }

    #[test]
    fn pack_deserializes_from_json() {
        let pack: StickerPack = serde_json::from_value(json!({
            "id": "3",
            "name": "n",
            "author": "a",
            "owner": "0x000000000000000000000000000000000000a11c",
            "price": "0",
            "preview": "",
            "thumbnail": "",
            "stickers": [{ "packID": "3", "url": "https://x/" }],
            "status": 1
        }))
        .expect("should deserialize");
        assert_eq!(pack.id, uint!(3_U256));
        assert_eq!(pack.status, PackStatus::Installed);
        assert_eq!(pack.stickers[0].url, "https://x/");
        assert!(pack.stickers[0].hash.is_empty());
    }

    #[test]
    fn rejects_unknown_status() {
        assert_eq!(PackStatus::try_from(4), Err(4));
        assert!(serde_json::from_value::<PackStatus>(json!(9)).is_err());
    }
}

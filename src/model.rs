use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifies an asset owned by the TelkomAset API.
///
/// The API is not consistent about id types: some endpoints send `5`, others
/// `"5"`. Both decode to the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for AssetId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for AssetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Ok(AssetId(n.to_string())),
            RawId::Text(s) => Ok(AssetId(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    #[serde(alias = "tanah")]
    Land,
    #[serde(alias = "bangunan")]
    Building,
}

impl AssetType {
    /// Label used on cards and in the filter indicator.
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Land => "Tanah",
            AssetType::Building => "Bangunan",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::Land => write!(f, "land"),
            AssetType::Building => write!(f, "building"),
        }
    }
}

impl std::str::FromStr for AssetType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "land" | "tanah" => Ok(AssetType::Land),
            "building" | "bangunan" => Ok(AssetType::Building),
            _ => Err(anyhow::anyhow!("Unknown asset type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    #[serde(alias = "tersedia")]
    Available,
    #[serde(alias = "tidak_tersedia", alias = "disewa", alias = "rented")]
    Unavailable,
}

impl AssetStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, AssetStatus::Available)
    }
}

/// Asset fields as they were when the list was fetched. Never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub name: String,
    #[serde(rename = "type", alias = "asset_type")]
    pub asset_type: AssetType,
    pub status: AssetStatus,
    #[serde(default, alias = "kecamatan")]
    pub location: String,
    /// Square metres
    #[serde(default, alias = "luas")]
    pub area: f64,
    /// Rupiah per month
    #[serde(default, alias = "harga_sewa")]
    pub monthly_price: u64,
}

/// One entry of the user's favorites list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    #[serde(alias = "assetId")]
    pub asset_id: AssetId,
    pub asset: AssetSnapshot,
}

/// An entry of the asset catalog used to populate the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    #[serde(flatten)]
    pub snapshot: AssetSnapshot,
    #[serde(default)]
    pub is_favorited: bool,
}

/// Optional narrowing of the favorites list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoriteFilters {
    pub asset_type: Option<AssetType>,
    pub kecamatan: Option<String>,
}

impl FavoriteFilters {
    /// Query parameters for the filters that are set. Unset filters are
    /// omitted rather than sent empty.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(asset_type) = self.asset_type {
            pairs.push(("asset_type", asset_type.to_string()));
        }
        if let Some(ref kecamatan) = self.kecamatan {
            let kecamatan = kecamatan.trim();
            if !kecamatan.is_empty() {
                pairs.push(("kecamatan", kecamatan.to_string()));
            }
        }
        pairs
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Step the type filter through all -> land -> building -> all.
    pub fn cycle_asset_type(&mut self) {
        self.asset_type = match self.asset_type {
            None => Some(AssetType::Land),
            Some(AssetType::Land) => Some(AssetType::Building),
            Some(AssetType::Building) => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_id_accepts_number_or_string() {
        let from_int: AssetId = serde_json::from_str("5").unwrap();
        let from_str: AssetId = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_int.as_str(), "5");
    }

    #[test]
    fn test_favorite_record_with_indonesian_fields() {
        let json = r#"{
            "assetId": 12,
            "asset": {
                "name": "Gedung Serbaguna",
                "type": "bangunan",
                "status": "tersedia",
                "kecamatan": "Cicendo",
                "luas": 450.5,
                "harga_sewa": 7500000
            }
        }"#;

        let record: FavoriteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.asset_id, AssetId::from(12));
        assert_eq!(record.asset.asset_type, AssetType::Building);
        assert_eq!(record.asset.status, AssetStatus::Available);
        assert_eq!(record.asset.location, "Cicendo");
        assert_eq!(record.asset.monthly_price, 7_500_000);
    }

    #[test]
    fn test_asset_flattens_snapshot() {
        let json = r#"{
            "id": "A-7",
            "name": "Lahan Parkir",
            "type": "land",
            "status": "unavailable",
            "is_favorited": true
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id.as_str(), "A-7");
        assert!(asset.is_favorited);
        assert!(!asset.snapshot.status.is_available());
        assert_eq!(asset.snapshot.monthly_price, 0);
    }

    #[test]
    fn test_filters_only_emit_set_params() {
        assert!(FavoriteFilters::default().query_pairs().is_empty());

        let filters = FavoriteFilters {
            asset_type: Some(AssetType::Land),
            kecamatan: Some("  ".to_string()),
        };
        assert_eq!(filters.query_pairs(), vec![("asset_type", "land".to_string())]);

        let filters = FavoriteFilters {
            asset_type: None,
            kecamatan: Some("Coblong".to_string()),
        };
        assert_eq!(filters.query_pairs(), vec![("kecamatan", "Coblong".to_string())]);
    }

    #[test]
    fn test_cycle_asset_type() {
        let mut filters = FavoriteFilters::default();
        filters.cycle_asset_type();
        assert_eq!(filters.asset_type, Some(AssetType::Land));
        filters.cycle_asset_type();
        assert_eq!(filters.asset_type, Some(AssetType::Building));
        filters.cycle_asset_type();
        assert_eq!(filters.asset_type, None);
    }

    #[test]
    fn test_asset_type_from_str() {
        assert_eq!("Tanah".parse::<AssetType>().unwrap(), AssetType::Land);
        assert_eq!("building".parse::<AssetType>().unwrap(), AssetType::Building);
        assert!("villa".parse::<AssetType>().is_err());
    }
}

use serde::{Deserialize, Serialize};

/// An installed wallet extension, as reported by discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderDescriptor {
    /// Wallet brand, unique among installed providers (e.g. `eternl`)
    pub name: String,
    /// URI usable as `img src`
    pub icon: String,
    /// CIP-30 API version the extension reports
    #[serde(default)]
    pub version: String,
}

impl ProviderDescriptor {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            version: String::new(),
        }
    }

    /// Case-insensitive name comparison; extensions are not consistent about casing.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// A token or NFT unit held by the connected account.
///
/// `unit` is `lovelace` for ADA, otherwise policy id followed by the hex asset name.
/// Quantities stay strings because they can exceed `u64`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    pub quantity: String,
}

impl Asset {
    pub fn new(unit: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            policy_id: None,
            asset_name: None,
            fingerprint: None,
            quantity: quantity.into(),
        }
    }
}

/// Render an asset collection the way the page shows it: pretty JSON, two-space indent.
pub fn assets_to_pretty_json(assets: &[Asset]) -> String {
    serde_json::to_string_pretty(assets).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_uses_camel_case_and_skips_missing_fields() {
        let mut asset = Asset::new("abc123", "1");
        asset.policy_id = Some("abc".to_string());

        let json = serde_json::to_value(&asset).unwrap();
        assert_eq!(json["policyId"], "abc");
        assert!(json.get("assetName").is_none());
        assert!(json.get("fingerprint").is_none());
    }

    #[test]
    fn test_asset_from_sdk_shape() {
        let json = r#"{
            "unit": "f0ff48bbb7bbe9d59a40f1ce90e9e9d0ff5002ec48f232b49ca0fb9a6d7963746f6b656e",
            "policyId": "f0ff48bbb7bbe9d59a40f1ce90e9e9d0ff5002ec48f232b49ca0fb9a",
            "assetName": "mytoken",
            "fingerprint": "asset1fy0gzy3lzh4h3etsgtnc6eq4vh3xqjaykmgfuz",
            "quantity": "25"
        }"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.asset_name.as_deref(), Some("mytoken"));
        assert_eq!(asset.quantity, "25");
    }

    #[test]
    fn test_provider_descriptor_version_defaults_to_empty() {
        let provider: ProviderDescriptor =
            serde_json::from_str(r#"{"name":"eternl","icon":"data:image/png;base64,AA"}"#).unwrap();
        assert_eq!(provider.version, "");
        assert!(provider.matches("Eternl"));
        assert!(!provider.matches("lace"));
    }

    #[test]
    fn test_assets_to_pretty_json() {
        let rendered = assets_to_pretty_json(&[Asset::new("lovelace", "5000000")]);
        assert_eq!(
            rendered,
            "[\n  {\n    \"unit\": \"lovelace\",\n    \"quantity\": \"5000000\"\n  }\n]"
        );
        assert_eq!(assets_to_pretty_json(&[]), "[]");
    }
}

//! The profile record: a named bundle parameterizing generation prompts.

use serde::{Deserialize, Serialize};

/// A brand profile.
///
/// `blacklist` stays a comma-separated string at rest, exactly as the user
/// typed it; it is parsed into terms at the point of use (see
/// [`crate::pipeline::blacklist`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Free-text brand description
    #[serde(default)]
    pub brand_profile: String,

    /// Comma-separated forbidden terms
    #[serde(default)]
    pub blacklist: String,

    /// Free text or JSON blob of scraped/extracted product data.
    ///
    /// Serialized as `produkt_info` so state files written by earlier
    /// versions of the app load unchanged.
    #[serde(default, rename = "produkt_info")]
    pub product_info: String,
}

impl Profile {
    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.brand_profile.is_empty() && self.blacklist.is_empty() && self.product_info.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_info_serializes_as_produkt_info() {
        let profile = Profile {
            brand_profile: "Dansk keramikværksted".to_string(),
            blacklist: "billig, discount".to_string(),
            product_info: "Håndlavede krus".to_string(),
        };

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("produkt_info"));
        assert!(!json.contains("product_info"));

        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert!(profile.is_empty());
    }
}

//! The persisted application document and its session operations.
//!
//! One flat JSON document holds everything: profiles, the stored API key,
//! the active page, accumulated generated texts, the current profile name
//! and the pending-delete marker. It is loaded whole at startup and written
//! whole on every mutation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::types::profile::Profile;

/// Name of the fallback profile.
///
/// Always resolvable: referencing it when absent from the map yields an
/// empty profile.
pub const DEFAULT_PROFILE: &str = "standard";

fn default_page() -> String {
    "profil".to_string()
}

fn default_current() -> String {
    DEFAULT_PROFILE.to_string()
}

/// The whole persisted application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppDocument {
    /// Profiles by name, in insertion order
    #[serde(default)]
    pub profiles: IndexMap<String, Profile>,

    /// Stored API key, if the user saved one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Active page of the app
    #[serde(default = "default_page")]
    pub page: String,

    /// Accumulated generated texts, oldest first
    #[serde(default)]
    pub generated_texts: Vec<String>,

    /// Name of the active profile
    #[serde(default = "default_current")]
    pub current_profile: String,

    /// Pending-delete marker for the two-step profile delete
    #[serde(default)]
    pub delete_profile: Option<String>,
}

impl Default for AppDocument {
    fn default() -> Self {
        Self {
            profiles: IndexMap::new(),
            api_key: None,
            page: default_page(),
            generated_texts: Vec::new(),
            current_profile: default_current(),
            delete_profile: None,
        }
    }
}

impl AppDocument {
    /// Resolve the active profile, falling back to an empty one when the
    /// referenced name is missing.
    pub fn current(&self) -> Profile {
        self.profiles
            .get(&self.current_profile)
            .cloned()
            .unwrap_or_default()
    }

    /// Create an empty profile under `name` and make it current.
    pub fn create_profile(&mut self, name: &str) -> Result<(), ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if self.profiles.contains_key(name) {
            return Err(ProfileError::AlreadyExists { name: name.to_string() });
        }
        self.profiles.insert(name.to_string(), Profile::default());
        self.current_profile = name.to_string();
        Ok(())
    }

    /// Upsert a profile under `name`.
    pub fn save_profile(&mut self, name: &str, profile: Profile) {
        self.profiles.insert(name.to_string(), profile);
    }

    /// Switch the active profile.
    pub fn use_profile(&mut self, name: &str) -> Result<(), ProfileError> {
        if name != DEFAULT_PROFILE && !self.profiles.contains_key(name) {
            return Err(ProfileError::NotFound { name: name.to_string() });
        }
        self.current_profile = name.to_string();
        Ok(())
    }

    /// Rename a profile, moving its data to the new key.
    ///
    /// The new key lands at the end of the map, matching the original app's
    /// pop-and-reinsert. `current_profile` and the pending-delete marker
    /// follow the rename.
    pub fn rename_profile(&mut self, old: &str, new: &str) -> Result<(), ProfileError> {
        let new = new.trim();
        if new.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if old == new {
            return Ok(());
        }
        if self.profiles.contains_key(new) {
            return Err(ProfileError::AlreadyExists { name: new.to_string() });
        }
        let profile = self
            .profiles
            .shift_remove(old)
            .ok_or_else(|| ProfileError::NotFound { name: old.to_string() })?;
        self.profiles.insert(new.to_string(), profile);
        if self.current_profile == old {
            self.current_profile = new.to_string();
        }
        if self.delete_profile.as_deref() == Some(old) {
            self.delete_profile = Some(new.to_string());
        }
        Ok(())
    }

    /// Mark a profile for deletion (step one of the two-step delete).
    pub fn mark_for_delete(&mut self, name: &str) -> Result<(), ProfileError> {
        if !self.profiles.contains_key(name) {
            return Err(ProfileError::NotFound { name: name.to_string() });
        }
        self.delete_profile = Some(name.to_string());
        Ok(())
    }

    /// Clear the pending-delete marker.
    pub fn cancel_delete(&mut self) {
        self.delete_profile = None;
    }

    /// Delete the marked profile and return its name.
    ///
    /// When the deleted profile was current, the current profile resets to
    /// [`DEFAULT_PROFILE`].
    pub fn confirm_delete(&mut self) -> Result<String, ProfileError> {
        let name = self.delete_profile.take().ok_or(ProfileError::NothingMarked)?;
        self.profiles.shift_remove(&name);
        if self.current_profile == name {
            self.current_profile = DEFAULT_PROFILE.to_string();
        }
        Ok(name)
    }

    /// Append a generated text. Texts are never deduplicated.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.generated_texts.push(text.into());
    }

    /// Remove a generated text by zero-based index.
    pub fn remove_text(&mut self, index: usize) -> Option<String> {
        if index < self.generated_texts.len() {
            Some(self.generated_texts.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(name: &str, brand: &str) -> AppDocument {
        let mut doc = AppDocument::default();
        doc.create_profile(name).unwrap();
        doc.save_profile(
            name,
            Profile {
                brand_profile: brand.to_string(),
                ..Profile::default()
            },
        );
        doc
    }

    #[test]
    fn test_current_falls_back_to_empty_profile() {
        let doc = AppDocument::default();
        assert_eq!(doc.current_profile, DEFAULT_PROFILE);
        assert!(doc.current().is_empty());
    }

    #[test]
    fn test_create_profile_becomes_current() {
        let mut doc = AppDocument::default();
        doc.create_profile("keramik").unwrap();
        assert_eq!(doc.current_profile, "keramik");
        assert!(doc.profiles.contains_key("keramik"));

        assert_eq!(
            doc.create_profile("keramik"),
            Err(ProfileError::AlreadyExists { name: "keramik".to_string() })
        );
        assert_eq!(doc.create_profile("  "), Err(ProfileError::EmptyName));
    }

    #[test]
    fn test_rename_moves_data_without_loss() {
        let mut doc = doc_with("keramik", "Dansk keramikværksted");
        doc.rename_profile("keramik", "keramik-2025").unwrap();

        assert!(!doc.profiles.contains_key("keramik"));
        assert_eq!(
            doc.profiles.get("keramik-2025").unwrap().brand_profile,
            "Dansk keramikværksted"
        );
        // current profile follows the rename
        assert_eq!(doc.current_profile, "keramik-2025");
    }

    #[test]
    fn test_rename_rejects_collision_and_missing() {
        let mut doc = doc_with("a", "");
        doc.create_profile("b").unwrap();

        assert_eq!(
            doc.rename_profile("a", "b"),
            Err(ProfileError::AlreadyExists { name: "b".to_string() })
        );
        assert_eq!(
            doc.rename_profile("nope", "c"),
            Err(ProfileError::NotFound { name: "nope".to_string() })
        );
    }

    #[test]
    fn test_delete_current_resets_to_default() {
        let mut doc = doc_with("keramik", "x");
        assert_eq!(doc.current_profile, "keramik");

        doc.mark_for_delete("keramik").unwrap();
        assert_eq!(doc.delete_profile.as_deref(), Some("keramik"));

        let removed = doc.confirm_delete().unwrap();
        assert_eq!(removed, "keramik");
        assert!(!doc.profiles.contains_key("keramik"));
        assert_eq!(doc.current_profile, DEFAULT_PROFILE);
        assert_eq!(doc.delete_profile, None);
    }

    #[test]
    fn test_delete_other_profile_keeps_current() {
        let mut doc = doc_with("a", "");
        doc.create_profile("b").unwrap();

        doc.mark_for_delete("a").unwrap();
        doc.confirm_delete().unwrap();
        assert_eq!(doc.current_profile, "b");
    }

    #[test]
    fn test_cancel_delete_clears_marker() {
        let mut doc = doc_with("a", "");
        doc.mark_for_delete("a").unwrap();
        doc.cancel_delete();
        assert_eq!(doc.delete_profile, None);
        assert_eq!(doc.confirm_delete(), Err(ProfileError::NothingMarked));
    }

    #[test]
    fn test_texts_append_and_remove_by_index() {
        let mut doc = AppDocument::default();
        doc.push_text("første");
        doc.push_text("anden");
        doc.push_text("første"); // duplicates are kept

        assert_eq!(doc.generated_texts.len(), 3);
        assert_eq!(doc.remove_text(1).as_deref(), Some("anden"));
        assert_eq!(doc.generated_texts, vec!["første", "første"]);
        assert_eq!(doc.remove_text(5), None);
    }

    #[test]
    fn test_document_round_trips_with_original_keys() {
        let mut doc = doc_with("keramik", "brand");
        doc.api_key = Some("sk-test".to_string());
        doc.push_text("en tekst");

        let json = serde_json::to_string(&doc).unwrap();
        for key in [
            "profiles",
            "api_key",
            "page",
            "generated_texts",
            "current_profile",
            "delete_profile",
        ] {
            assert!(json.contains(key), "missing key {key}");
        }

        let back: AppDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back.current_profile, "keramik");
        assert_eq!(back.generated_texts, vec!["en tekst"]);
    }
}

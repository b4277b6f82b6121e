use chrono::{Datelike, Utc};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use thiserror::Error;
use validator::Validate;

use crate::models::{Profile, ProfileId};

/// Errors that can occur while loading a profile catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid profile {id}: {message}")]
    Invalid { id: ProfileId, message: String },

    #[error("Duplicate profile id: {0}")]
    DuplicateId(ProfileId),
}

/// Immutable list of candidate profiles
///
/// The discovery engine only ever borrows the profiles; nothing here
/// changes after loading.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    profiles: Vec<Profile>,
}

impl Catalog {
    /// Build a catalog from already deserialized profiles, validating each
    pub fn from_profiles(profiles: Vec<Profile>) -> Result<Self, CatalogError> {
        let current_year = Utc::now().year();
        let mut seen = HashSet::with_capacity(profiles.len());

        for profile in &profiles {
            if let Err(errors) = profile.validate() {
                tracing::warn!("Rejecting profile {}: {}", profile.id, errors);
                return Err(CatalogError::Invalid {
                    id: profile.id.clone(),
                    message: errors.to_string(),
                });
            }

            if profile.member_since > current_year {
                return Err(CatalogError::Invalid {
                    id: profile.id.clone(),
                    message: format!("memberSince {} is in the future", profile.member_since),
                });
            }

            if !seen.insert(&profile.id) {
                return Err(CatalogError::DuplicateId(profile.id.clone()));
            }
        }

        Ok(Self { profiles })
    }

    /// Parse a JSON array of profiles
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let profiles: Vec<Profile> = serde_json::from_str(json)?;
        Self::from_profiles(profiles)
    }

    /// Read and parse a JSON catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!("Loaded {} profiles from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| &p.id == id)
    }

    /// Distinct skills across the catalog, sorted, for filter choices
    pub fn skills(&self) -> Vec<String> {
        self.profiles
            .iter()
            .flat_map(|p| p.skills.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct non-empty locations, sorted
    pub fn locations(&self) -> Vec<String> {
        self.profiles
            .iter()
            .map(|p| p.location.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

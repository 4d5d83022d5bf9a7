//! JSON-backed profile persistence
//!
//! Profiles live in a single JSON file. Loading is tolerant: a missing
//! file means no profiles yet, and a corrupt file is logged and treated
//! as empty rather than blocking play.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::PlayerProfile;

#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location: `VERSEMATCH_PROFILES` if set, otherwise
    /// under the user's home directory.
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os("VERSEMATCH_PROFILES") {
            return PathBuf::from(path);
        }
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        home.join(".versematch").join("profiles.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all profiles. Missing or unreadable data yields an empty list.
    pub fn load(&self) -> Vec<PlayerProfile> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log::warn!("failed to read {}: {err}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&data) {
            Ok(profiles) => profiles,
            Err(err) => {
                log::warn!("corrupt profile file {}: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Write the full profile list, creating parent directories as needed.
    pub fn save(&self, profiles: &[PlayerProfile]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(profiles)?;
        fs::write(&self.path, data)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Insert or replace one profile by id, persisting the result.
    pub fn upsert(&self, profiles: &mut Vec<PlayerProfile>, profile: PlayerProfile) -> Result<()> {
        match profiles.iter_mut().find(|p| p.id == profile.id) {
            Some(existing) => *existing = profile,
            None => profiles.push(profile),
        }
        self.save(profiles)
    }
}

//! Persistent `fingerprint -> learned arrangement` database.
//!
//! Mirrors how [`crate::config::Config`] loads its TOML from
//! [`directories_next::ProjectDirs`], but reads/writes JSON in the data
//! directory instead of the config directory, since this is machine-learned
//! state rather than user-authored configuration. The [`crate::engine`]
//! core never touches this module; [`crate::supervisor`] is its sole
//! caller.

use std::{fs, io, path::PathBuf};

use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::ConstraintMatrix;
use crate::Map;

/// Sorted list of EDID-or-output-name strings identifying a set of
/// connected displays, independent of which port each is plugged into.
pub type Fingerprint = Vec<String>;

/// A learned constraint matrix, plus the output-name ordering it was
/// learned against. Matrix indices are positional; names aren't, so the
/// order must travel with the matrix to be reapplied to a re-enumerated
/// (possibly differently-ordered) output list later.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredArrangement {
    pub fingerprint: Fingerprint,
    pub constraints: ConstraintMatrix,
    pub order: Vec<String>,
}

/// The on-disk map from fingerprint to stored arrangement.
#[derive(Debug, Default)]
pub struct Database {
    path: PathBuf,
    entries: Map<Fingerprint, StoredArrangement>,
}

impl Database {
    /// Loads the database from disk, or starts an empty one if the file
    /// doesn't exist yet (e.g. first run).
    ///
    /// Stored on disk as a JSON array of [`StoredArrangement`] rather than
    /// an object keyed by fingerprint -- a `Fingerprint` is a `Vec<String>`,
    /// and JSON object keys must be strings, so a map-shaped `Fingerprint ->
    /// StoredArrangement` can't round-trip through `serde_json` directly.
    /// Each entry already carries its own `fingerprint` field, so nothing is
    /// lost; [`Self::get`]/[`Self::put`] still present a map to the rest of
    /// the crate.
    pub fn load() -> Result<Self, Error> {
        let path = data_path()?;

        let raw: Vec<StoredArrangement> = match fs::read_to_string(&path) {
            Ok(source) => serde_json::from_str(&source)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(Error::Io { err, path }),
        };
        let entries = raw
            .into_iter()
            .map(|entry| (entry.fingerprint.clone(), entry))
            .collect();

        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<&StoredArrangement> {
        self.entries.get(fingerprint)
    }

    pub fn put(&mut self, fingerprint: Fingerprint, arrangement: StoredArrangement) {
        self.entries.insert(fingerprint, arrangement);
    }

    /// Writes the database back to disk, creating its parent directory if
    /// necessary.
    pub fn save(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::Io {
                err,
                path: parent.to_path_buf(),
            })?;
        }

        let raw: Vec<&StoredArrangement> = self.entries.values().collect();
        let serialized = serde_json::to_string_pretty(&raw)?;
        fs::write(&self.path, serialized).map_err(|err| Error::Io {
            err,
            path: self.path.clone(),
        })
    }
}

fn data_path() -> Result<PathBuf, Error> {
    let proj_dirs =
        ProjectDirs::from("org", "MultisampledNight", "layaway").ok_or(Error::UnknownHome)?;
    Ok(proj_dirs.data_dir().join("arrangements.json"))
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("directories-next could not determine the home directory")]
    UnknownHome,
    #[error("Could not access database file at `{path}`: {err}")]
    Io { err: io::Error, path: PathBuf },
    #[error("Could not (de)serialize database: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sorts and dedupes raw identifiers into a stable [`Fingerprint`].
#[must_use]
pub fn fingerprint(mut ids: Vec<String>) -> Fingerprint {
    ids.sort();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_order_independent() {
        let a = fingerprint(vec!["DP-1".into(), "HDMI-A-1".into()]);
        let b = fingerprint(vec!["HDMI-A-1".into(), "DP-1".into()]);
        assert_eq!(a, b);
    }

    #[test]
    fn database_roundtrips_through_json() {
        let mut db = Database {
            path: PathBuf::new(),
            entries: Map::new(),
        };
        let fp = fingerprint(vec!["DP-1".into(), "HDMI-A-1".into()]);
        db.put(
            fp.clone(),
            StoredArrangement {
                fingerprint: fp.clone(),
                constraints: ConstraintMatrix::none(2),
                order: vec!["DP-1".into(), "HDMI-A-1".into()],
            },
        );

        let raw: Vec<&StoredArrangement> = db.entries.values().collect();
        let serialized = serde_json::to_string(&raw).unwrap();
        let deserialized: Vec<StoredArrangement> = serde_json::from_str(&serialized).unwrap();
        assert!(deserialized.iter().any(|entry| entry.fingerprint == fp));
    }
}

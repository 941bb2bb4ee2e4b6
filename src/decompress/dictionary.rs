// SPDX-License-Identifier: MPL-2.0
//! Decoder dictionary resolution.
//!
//! Games that ship Zstandard-compressed assets often compress them against a
//! small set of shared dictionaries, one per asset family. The store loads
//! every `*.zsdic` file from the configured directory and picks the entry for
//! a target by file-name shape: `Actor.pack.zs` resolves to `pack.zsdic`,
//! `A-1.bcett.byml.zs` to `bcett.byml.zsdic`, and anything else to the
//! general-purpose `zs.zsdic`. An empty store means plain decoding.

use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Extension of dictionary files inside the dictionary directory.
const DICTIONARY_EXTENSION: &str = "zsdic";

/// Name of the fallback dictionary entry.
const DEFAULT_ENTRY: &str = "zs";

/// In-memory set of decoder dictionaries, keyed by their file name minus the
/// `.zsdic` extension.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl DictionaryStore {
    /// Creates a store with no dictionaries. Decoding falls back to plain
    /// Zstandard.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads every `*.zsdic` file from `dir`.
    ///
    /// A missing or empty directory yields an empty store; unreadable entries
    /// propagate as errors so the user learns about a misconfigured path.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut entries = HashMap::new();

        if !dir.is_dir() {
            return Ok(Self { entries });
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let is_dictionary = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(DICTIONARY_EXTENSION))
                .unwrap_or(false);
            if !path.is_file() || !is_dictionary {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                entries.insert(stem.to_string(), fs::read(&path)?);
            }
        }

        Ok(Self { entries })
    }

    /// Number of loaded dictionaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the dictionary for a target file.
    ///
    /// The compression extension is stripped, then the longest entry name
    /// matching the remaining suffix wins (`bcett.byml` beats `byml`). When
    /// no specific entry matches, the `zs` entry is used if present.
    #[must_use]
    pub fn for_target(&self, target: &Path) -> Option<&[u8]> {
        let inner = crate::decompress::output_name(target)?;
        let inner = inner.to_string_lossy();

        let mut best: Option<&str> = None;
        for name in self.entries.keys() {
            if name == DEFAULT_ENTRY {
                continue;
            }
            if inner.ends_with(&format!(".{name}")) {
                match best {
                    Some(current) if current.len() >= name.len() => {}
                    _ => best = Some(name),
                }
            }
        }

        let key = best.unwrap_or(DEFAULT_ENTRY);
        self.entries.get(key).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn store_with(entries: &[(&str, &[u8])]) -> DictionaryStore {
        let mut map = HashMap::new();
        for (name, data) in entries {
            map.insert((*name).to_string(), data.to_vec());
        }
        DictionaryStore { entries: map }
    }

    #[test]
    fn empty_store_resolves_nothing() {
        let store = DictionaryStore::empty();
        assert!(store.is_empty());
        assert!(store.for_target(Path::new("Actor.pack.zs")).is_none());
    }

    #[test]
    fn pack_target_picks_pack_dictionary() {
        let store = store_with(&[("zs", b"general"), ("pack", b"packdata")]);
        assert_eq!(
            store.for_target(Path::new("Actor/Armor_001.pack.zs")),
            Some(b"packdata".as_slice())
        );
    }

    #[test]
    fn longest_suffix_wins() {
        let store = store_with(&[("zs", b"general"), ("byml", b"b"), ("bcett.byml", b"bb")]);
        assert_eq!(
            store.for_target(Path::new("Banc/A-1_Static.bcett.byml.zs")),
            Some(b"bb".as_slice())
        );
    }

    #[test]
    fn unmatched_target_falls_back_to_general_entry() {
        let store = store_with(&[("zs", b"general"), ("pack", b"packdata")]);
        assert_eq!(
            store.for_target(Path::new("Shader/program.bin.zs")),
            Some(b"general".as_slice())
        );
    }

    #[test]
    fn missing_general_entry_resolves_nothing_for_plain_targets() {
        let store = store_with(&[("pack", b"packdata")]);
        assert!(store.for_target(Path::new("plain.bin.zs")).is_none());
    }

    #[test]
    fn load_reads_zsdic_files_only() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("zs.zsdic"), b"general").expect("write zs");
        fs::write(dir.path().join("pack.zsdic"), b"packdata").expect("write pack");
        fs::write(dir.path().join("notes.txt"), b"ignore me").expect("write notes");

        let store = DictionaryStore::load(dir.path()).expect("load");

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.for_target(Path::new("x.pack.zs")),
            Some(b"packdata".as_slice())
        );
    }

    #[test]
    fn load_from_missing_directory_yields_empty_store() {
        let store = DictionaryStore::load(&PathBuf::from("/does/not/exist")).expect("load");
        assert!(store.is_empty());
    }
}

//! Persistent wallet records, one per username.
//!
//! Records are keyed by `lazorkit_<username>`. Writing a record for a
//! username that already has one replaces it outright.
//!
//! The file-backed store names each file after the SHA-256 of the key, so
//! file names have a fixed length and never depend on the case or charset
//! of the username. The username itself lives inside the JSON.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::WalletError;
use crate::types::WalletRecord;

const KEY_PREFIX: &str = "lazorkit_";

/// Storage key for `username`.
pub fn storage_key(username: &str) -> String {
    format!("{KEY_PREFIX}{username}")
}

/// Key-value repository of wallet records.
pub trait WalletStore {
    fn get(&self, username: &str) -> Result<Option<WalletRecord>, WalletError>;

    /// Insert or overwrite the record stored under `record.username`.
    fn put(&mut self, record: &WalletRecord) -> Result<(), WalletError>;
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryWalletStore {
    records: HashMap<String, WalletRecord>,
}

impl MemoryWalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl WalletStore for MemoryWalletStore {
    fn get(&self, username: &str) -> Result<Option<WalletRecord>, WalletError> {
        Ok(self.records.get(&storage_key(username)).cloned())
    }

    fn put(&mut self, record: &WalletRecord) -> Result<(), WalletError> {
        self.records
            .insert(storage_key(&record.username), record.clone());
        Ok(())
    }
}

/// Directory of JSON files, one `<sha256(key)>.json` per record.
#[derive(Debug, Clone)]
pub struct FileWalletStore {
    dir: PathBuf,
}

impl FileWalletStore {
    /// Use `dir` as the store, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, WalletError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            WalletError::Storage(format!("cannot create {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, username: &str) -> PathBuf {
        let digest = Sha256::digest(storage_key(username).as_bytes());
        self.dir.join(format!("{}.json", hex::encode(digest)))
    }
}

impl WalletStore for FileWalletStore {
    fn get(&self, username: &str) -> Result<Option<WalletRecord>, WalletError> {
        let path = self.record_path(username);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(WalletError::Storage(format!(
                    "cannot read {}: {e}",
                    path.display()
                )))
            }
        };

        let record = serde_json::from_str(&contents).map_err(|e| {
            WalletError::Storage(format!("malformed record {}: {e}", path.display()))
        })?;
        Ok(Some(record))
    }

    fn put(&mut self, record: &WalletRecord) -> Result<(), WalletError> {
        let path = self.record_path(&record.username);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, serde_json::to_vec_pretty(record)?)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), "wallet record written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(username: &str, address: &str) -> WalletRecord {
        WalletRecord {
            username: username.into(),
            public_address: address.into(),
            credential_id: "c0ffee".into(),
            created_at: 1,
        }
    }

    #[test]
    fn storage_key_is_namespaced() {
        assert_eq!(storage_key("alice"), "lazorkit_alice");
    }

    #[test]
    fn memory_store_last_write_wins() {
        let mut store = MemoryWalletStore::new();
        assert!(store.get("alice").unwrap().is_none());

        store.put(&record("alice", "first")).unwrap();
        store.put(&record("alice", "second")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("alice").unwrap().unwrap().public_address, "second");
    }

    #[test]
    fn file_store_roundtrip_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileWalletStore::open(dir.path().join("wallets")).unwrap();

        assert!(store.get("bob").unwrap().is_none());
        store.put(&record("bob", "first")).unwrap();
        store.put(&record("bob", "second")).unwrap();

        let loaded = store.get("bob").unwrap().unwrap();
        assert_eq!(loaded.public_address, "second");
        let path = store.record_path("bob");
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn file_store_reopens_existing_records() {
        let dir = tempfile::tempdir().unwrap();
        FileWalletStore::open(dir.path())
            .unwrap()
            .put(&record("carol", "addr"))
            .unwrap();

        let reopened = FileWalletStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("carol").unwrap().unwrap().public_address, "addr");
    }

    #[test]
    fn hostile_usernames_stay_inside_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileWalletStore::open(dir.path()).unwrap();

        store.put(&record("../../etc/passwd", "x")).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            store.get("../../etc/passwd").unwrap().unwrap().public_address,
            "x"
        );
    }

    #[test]
    fn malformed_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileWalletStore::open(dir.path()).unwrap();
        fs::write(store.record_path("dave"), "{not json").unwrap();

        let err = store.get("dave").unwrap_err();
        assert!(matches!(err, WalletError::Storage(_)));
    }

    #[test]
    fn long_and_non_ascii_usernames_fit_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileWalletStore::open(dir.path()).unwrap();

        for username in ["a".repeat(240), "钱包".repeat(14), "é".repeat(300)] {
            store.put(&record(&username, "addr")).unwrap();
            let loaded = store.get(&username).unwrap().unwrap();
            assert_eq!(loaded.username, username);
        }
    }

    #[test]
    fn file_names_are_fixed_length_and_case_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileWalletStore::open(dir.path()).unwrap();

        let upper = store.record_path("Alice");
        let lower = store.record_path("alice");
        assert_ne!(upper, lower);
        assert_eq!(upper.file_name().unwrap().len(), 64 + ".json".len());
        assert_eq!(
            upper.file_name().unwrap().to_string_lossy().to_lowercase(),
            upper.file_name().unwrap().to_string_lossy()
        );

        store.put(&record("Alice", "upper")).unwrap();
        store.put(&record("alice", "lower")).unwrap();
        assert_eq!(store.get("Alice").unwrap().unwrap().public_address, "upper");
        assert_eq!(store.get("alice").unwrap().unwrap().public_address, "lower");
    }
}

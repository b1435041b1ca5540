//! Version-gated cache for fetched raw text payloads.
//!
//! Payloads are keyed by source name inside a namespace named after the
//! app version, so a version bump invalidates everything at once. Cache
//! failures only ever cost the cache: a failed write clears the namespace
//! and retries once, and a second failure disables caching for the rest of
//! the session without touching the data path.

use crate::config::CacheConfig;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct TextCache {
    namespace_dir: PathBuf,
    enabled: bool,
}

impl TextCache {
    /// Open the cache namespace for the configured app version, purging
    /// namespaces left over from other versions.
    pub fn open(config: &CacheConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        let namespace_dir = config.dir.join(&config.app_version);

        // Drop stale version namespaces
        if let Ok(entries) = fs::read_dir(&config.dir) {
            for entry in entries.flatten() {
                if entry.file_name().to_string_lossy() != config.app_version.as_str() {
                    if let Err(e) = fs::remove_dir_all(entry.path()) {
                        warn!("Failed to purge stale cache namespace: {}", e);
                    } else {
                        info!("Purged stale cache namespace {:?}", entry.file_name());
                    }
                }
            }
        }

        match fs::create_dir_all(&namespace_dir) {
            Ok(()) => Self {
                namespace_dir,
                enabled: true,
            },
            Err(e) => {
                warn!("Cache unavailable ({}); continuing without it", e);
                Self::disabled()
            }
        }
    }

    /// A cache that never stores anything
    pub fn disabled() -> Self {
        Self {
            namespace_dir: PathBuf::new(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn get(&self, key: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        match fs::read_to_string(self.key_path(key)) {
            Ok(text) => {
                debug!("Cache hit for {}", key);
                Some(text)
            }
            Err(_) => None,
        }
    }

    /// Store a payload. Idempotent; on a storage failure the namespace is
    /// cleared and the write retried once, after which the cache degrades
    /// to a no-op.
    pub fn put(&mut self, key: &str, text: &str) {
        if !self.enabled {
            return;
        }
        let path = self.key_path(key);

        if fs::write(&path, text).is_ok() {
            return;
        }

        warn!("Cache write failed for {}; clearing namespace and retrying", key);
        if let Err(e) = self.clear() {
            warn!("Cache clear failed ({}); disabling cache", e);
            self.enabled = false;
            return;
        }

        if let Err(e) = fs::write(&path, text) {
            warn!("Cache write failed again ({}); disabling cache", e);
            self.enabled = false;
        }
    }

    /// Remove every payload in this version's namespace
    pub fn clear(&self) -> std::io::Result<()> {
        fs::remove_dir_all(&self.namespace_dir)?;
        fs::create_dir_all(&self.namespace_dir)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are team codes; keep the file name shell-safe anyway
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.namespace_dir.join(format!("{}.txt", safe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &std::path::Path, version: &str) -> CacheConfig {
        CacheConfig {
            dir: dir.to_path_buf(),
            app_version: version.to_string(),
            enabled: true,
        }
    }

    #[test]
    fn test_put_get_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cache = TextCache::open(&config(tmp.path(), "1.0.0"));

        assert!(cache.get("BOS").is_none());
        cache.put("BOS", "Year,Rd\n2008,1");
        assert_eq!(cache.get("BOS").as_deref(), Some("Year,Rd\n2008,1"));

        // Idempotent overwrite
        cache.put("BOS", "Year,Rd\n2008,1");
        assert_eq!(cache.get("BOS").as_deref(), Some("Year,Rd\n2008,1"));
    }

    #[test]
    fn test_version_bump_invalidates() {
        let tmp = tempfile::tempdir().unwrap();

        let mut old = TextCache::open(&config(tmp.path(), "1.0.0"));
        old.put("BOS", "old payload");

        let fresh = TextCache::open(&config(tmp.path(), "2.0.0"));
        assert!(fresh.get("BOS").is_none());
        assert!(!tmp.path().join("1.0.0").exists());
    }

    #[test]
    fn test_disabled_cache_is_a_noop() {
        let mut cache = TextCache::disabled();
        cache.put("BOS", "payload");
        assert!(cache.get("BOS").is_none());
        assert!(!cache.is_enabled());
    }

    #[test]
    fn test_clear() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cache = TextCache::open(&config(tmp.path(), "1.0.0"));
        cache.put("BOS", "payload");
        cache.clear().unwrap();
        assert!(cache.get("BOS").is_none());
    }
}

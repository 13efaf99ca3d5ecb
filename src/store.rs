//! Blob storage the report reads backups from and writes PDFs to.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use glob::{Pattern, glob};
use log::{debug, warn};
use serde::Serialize;

use crate::error::{ReportError, Result};

/// Time-limited reference a client can fetch a stored object from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRef {
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

pub trait BlobStore {
    /// Keys starting with `prefix`, in lexicographic order.
    fn list(&self, prefix: &str) -> Result<Vec<String>>;

    fn get(&self, key: &str) -> Result<Vec<u8>>;

    fn put(&self, key: &str, body: &[u8], content_type: &str) -> Result<()>;

    fn download_ref(&self, key: &str, expires_in: Duration) -> Result<DownloadRef>;
}

/// Blob store backed by a directory; key `a/b.txt` lives at `root/a/b.txt`.
///
/// Keys may not contain `.` or `..` segments, so every key stays under the root.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: without_cur_dir(&root.into()) }
    }

    fn path_of(&self, key: &str) -> Result<PathBuf> {
        let mut path = self.root.clone();
        for segment in key.split('/').filter(|s| !s.is_empty()) {
            if matches!(segment, "." | "..") || segment.contains('\\') {
                return Err(ReportError::InvalidKey(key.to_string()));
            }
            path.push(segment);
        }
        Ok(path)
    }

    fn key_of(&self, path: &Path) -> Option<String> {
        let path = without_cur_dir(path);
        let rel = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }

    fn pattern(&self) -> String {
        if self.root.as_os_str().is_empty() {
            "**/*".to_string()
        } else {
            format!("{}/**/*", Pattern::escape(&self.root.to_string_lossy()))
        }
    }
}

/// `./bucket` and `bucket` name the same directory, but glob only ever
/// yields the latter; drop `.` components so both sides compare equal.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

impl BlobStore for LocalBlobStore {
    fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in glob(&self.pattern())? {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            match self.key_of(&path) {
                Some(key) if key.starts_with(prefix) => keys.push(key),
                Some(_) => {}
                None => warn!("skipping {} outside store root {}", path.display(), self.root.display()),
            }
        }
        keys.sort();
        debug!("listed {} key(s) under {:?}", keys.len(), prefix);
        Ok(keys)
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.path_of(key)?;
        if !path.is_file() {
            return Err(ReportError::NotFound(key.to_string()));
        }
        Ok(fs::read(path)?)
    }

    fn put(&self, key: &str, body: &[u8], content_type: &str) -> Result<()> {
        let path = self.path_of(key)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, body)?;
        debug!("stored {} ({} bytes, {})", key, body.len(), content_type);
        Ok(())
    }

    fn download_ref(&self, key: &str, expires_in: Duration) -> Result<DownloadRef> {
        let path = self.path_of(key)?;
        if !path.is_file() {
            return Err(ReportError::NotFound(key.to_string()));
        }
        let path = fs::canonicalize(path)?;
        let expires_at = chrono::Duration::from_std(expires_in)
            .ok()
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Ok(DownloadRef { url: format!("file://{}", path.display()), expires_at })
    }
}

use std::path::PathBuf;

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

pub const SIZES_FILE: &str = "sizes.json";
pub const FLAVORS_FILE: &str = "flavors.json";
pub const ORDERS_FILE: &str = "orders.json";

/// Flat-file JSON store: one pretty-printed array per file under the data
/// directory. Every access covers the whole file and there is no locking,
/// so overlapping writers race and the last write wins.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Strict read: a missing or unparseable file is an error.
    pub async fn read<T: DeserializeOwned>(&self, file: &str) -> anyhow::Result<Vec<T>> {
        let path = self.path(file);
        let raw = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let items =
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(items)
    }

    /// Lenient read: any failure is logged and collapsed to an empty list,
    /// so "no data yet" and "corrupt file" look the same to the caller.
    pub async fn read_or_default<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        match self.read(file).await {
            Ok(items) => items,
            Err(err) => {
                warn!(file, error = %err, "read failed, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrites the whole file with a pretty-printed array, creating the
    /// data directory on first use.
    pub async fn write<T: Serialize>(&self, file: &str, items: &[T]) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("creating {}", self.dir.display()))?;
        let raw = serde_json::to_string_pretty(items)?;
        let path = self.path(file);
        tokio::fs::write(&path, raw)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

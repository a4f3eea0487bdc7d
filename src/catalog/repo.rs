use crate::store::{FileStore, FLAVORS_FILE, SIZES_FILE};

use super::dto::Size;

pub async fn load_sizes(files: &FileStore) -> Vec<Size> {
    files.read_or_default(SIZES_FILE).await
}

pub async fn load_flavors(files: &FileStore) -> Vec<String> {
    files.read_or_default(FLAVORS_FILE).await
}

pub async fn replace_sizes(files: &FileStore, sizes: &[Size]) -> anyhow::Result<()> {
    files.write(SIZES_FILE, sizes).await
}

pub async fn replace_flavors(files: &FileStore, flavors: &[String]) -> anyhow::Result<()> {
    files.write(FLAVORS_FILE, flavors).await
}

/// Unit price for a size name. An order for a name that is no longer in the
/// catalog is still accepted, at price zero.
pub async fn price_for(files: &FileStore, size_name: &str) -> f64 {
    load_sizes(files)
        .await
        .iter()
        .find(|size| size.nombre == size_name)
        .map(|size| size.precio)
        .unwrap_or(0.0)
}

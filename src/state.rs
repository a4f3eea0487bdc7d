use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::FileStore;

#[derive(Clone)]
pub struct AppState {
    pub files: FileStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let files = FileStore::new(&config.data_dir);
        Ok(Self { files, config })
    }

    pub fn from_parts(files: FileStore, config: Arc<AppConfig>) -> Self {
        Self { files, config }
    }
}

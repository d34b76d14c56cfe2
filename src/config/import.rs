//! Import command configuration

use std::path::PathBuf;

use crate::common::require;
use crate::error::WheelError;

/// Configuration for the import command
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub store_path: PathBuf,
    /// JSON document to import
    pub file: PathBuf,
}

impl ImportConfig {
    pub fn builder() -> ImportConfigBuilder {
        ImportConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ImportConfigBuilder {
    store_path: Option<PathBuf>,
    file: Option<PathBuf>,
}

impl ImportConfigBuilder {
    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = Some(store_path);
        self
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }
}

impl crate::common::ConfigBuilder for ImportConfigBuilder {
    type Config = ImportConfig;

    fn build(self) -> Result<Self::Config, WheelError> {
        Ok(ImportConfig {
            store_path: require(self.store_path, "store_path")?,
            file: require(self.file, "file")?,
        })
    }
}

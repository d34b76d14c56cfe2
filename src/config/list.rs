//! List command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::require;
use crate::error::WheelError;

/// Configuration for the list command
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub store_path: PathBuf,
    pub format: OutputFormat,
}

impl ListConfig {
    pub fn builder() -> ListConfigBuilder {
        ListConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ListConfigBuilder {
    store_path: Option<PathBuf>,
    format: Option<OutputFormat>,
}

impl ListConfigBuilder {
    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = Some(store_path);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for ListConfigBuilder {
    type Config = ListConfig;

    fn build(self) -> Result<Self::Config, WheelError> {
        Ok(ListConfig {
            store_path: require(self.store_path, "store_path")?,
            format: require(self.format, "format")?,
        })
    }
}

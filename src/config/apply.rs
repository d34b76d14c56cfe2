//! Apply command configuration

use std::path::PathBuf;

use crate::common::require;
use crate::error::WheelError;

/// Configuration for the apply command
#[derive(Debug, Clone)]
pub struct ApplyConfig {
    pub store_path: PathBuf,
    /// File holding the edited text (None = stdin)
    pub input: Option<PathBuf>,
}

impl ApplyConfig {
    pub fn builder() -> ApplyConfigBuilder {
        ApplyConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ApplyConfigBuilder {
    store_path: Option<PathBuf>,
    input: Option<Option<PathBuf>>,
}

impl ApplyConfigBuilder {
    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = Some(store_path);
        self
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = Some(input);
        self
    }
}

impl crate::common::ConfigBuilder for ApplyConfigBuilder {
    type Config = ApplyConfig;

    fn build(self) -> Result<Self::Config, WheelError> {
        Ok(ApplyConfig {
            store_path: require(self.store_path, "store_path")?,
            input: require(self.input, "input")?,
        })
    }
}

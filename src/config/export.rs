//! Export command configuration

use std::path::PathBuf;

use crate::common::require;
use crate::error::WheelError;

/// Configuration for the export command
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub store_path: PathBuf,
    /// Destination file; `-` writes to stdout
    pub output: PathBuf,
}

impl ExportConfig {
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    pub fn to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

#[derive(Default)]
pub struct ExportConfigBuilder {
    store_path: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl ExportConfigBuilder {
    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = Some(store_path);
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for ExportConfigBuilder {
    type Config = ExportConfig;

    fn build(self) -> Result<Self::Config, WheelError> {
        Ok(ExportConfig {
            store_path: require(self.store_path, "store_path")?,
            output: require(self.output, "output")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_dash_means_stdout() {
        let config = ExportConfig::builder()
            .with_store_path("store.json".into())
            .with_output("-".into())
            .build()
            .unwrap();
        assert!(config.to_stdout());

        let config = ExportConfig::builder()
            .with_store_path("store.json".into())
            .with_output("wheel-options.json".into())
            .build()
            .unwrap();
        assert!(!config.to_stdout());
    }
}

//! Spin command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::require;
use crate::error::WheelError;
use crate::render::SurfaceSize;
use crate::spin::SpinTuning;

/// Configuration for the spin command
#[derive(Debug, Clone)]
pub struct SpinConfig {
    /// File-backed option store
    pub store_path: PathBuf,
    /// Output format for the result
    pub format: OutputFormat,
    /// Size of the surface frames are painted on
    pub surface: SurfaceSize,
    pub tuning: SpinTuning,
    /// Seed for a reproducible spin (None = seeded by the OS)
    pub seed: Option<u64>,
    /// Where to write the final frame, if anywhere
    pub svg: Option<PathBuf>,
}

impl SpinConfig {
    pub fn builder() -> SpinConfigBuilder {
        SpinConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct SpinConfigBuilder {
    store_path: Option<PathBuf>,
    format: Option<OutputFormat>,
    surface: Option<SurfaceSize>,
    tuning: Option<SpinTuning>,
    seed: Option<Option<u64>>,
    svg: Option<Option<PathBuf>>,
}

impl SpinConfigBuilder {
    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = Some(store_path);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_surface(mut self, surface: SurfaceSize) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_tuning(mut self, tuning: SpinTuning) -> Self {
        self.tuning = Some(tuning);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_svg(mut self, svg: Option<PathBuf>) -> Self {
        self.svg = Some(svg);
        self
    }
}

impl crate::common::ConfigBuilder for SpinConfigBuilder {
    type Config = SpinConfig;

    fn build(self) -> Result<Self::Config, WheelError> {
        Ok(SpinConfig {
            store_path: require(self.store_path, "store_path")?,
            format: require(self.format, "format")?,
            surface: require(self.surface, "surface")?,
            tuning: self.tuning.unwrap_or_default(),
            seed: self.seed.unwrap_or_default(),
            svg: self.svg.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_build_with_defaults() {
        let config = SpinConfig::builder()
            .with_store_path("store.json".into())
            .with_format(OutputFormat::Human)
            .with_surface(SurfaceSize::square(300.0))
            .build()
            .unwrap();

        assert_eq!(config.tuning, SpinTuning::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.svg, None);
    }

    #[test]
    fn test_missing_surface_is_reported() {
        let err = SpinConfig::builder()
            .with_store_path("store.json".into())
            .with_format(OutputFormat::Human)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("surface"));
    }
}

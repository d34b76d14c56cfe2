//! Render command configuration

use std::path::PathBuf;

use crate::common::require;
use crate::error::WheelError;
use crate::render::SurfaceSize;

/// Configuration for the render command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub store_path: PathBuf,
    pub surface: SurfaceSize,
    /// Wheel rotation in radians
    pub rotation: f64,
    /// Destination file; `-` writes to stdout
    pub output: PathBuf,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    pub fn to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    store_path: Option<PathBuf>,
    surface: Option<SurfaceSize>,
    rotation: Option<f64>,
    output: Option<PathBuf>,
}

impl RenderConfigBuilder {
    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = Some(store_path);
        self
    }

    pub fn with_surface(mut self, surface: SurfaceSize) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, WheelError> {
        let rotation = self.rotation.unwrap_or_default();
        if !rotation.is_finite() {
            return Err(WheelError::ConfigurationError {
                message: format!("Rotation must be a finite number, got {rotation}"),
            });
        }

        Ok(RenderConfig {
            store_path: require(self.store_path, "store_path")?,
            surface: require(self.surface, "surface")?,
            rotation,
            output: require(self.output, "output")?,
        })
    }
}

use txml::{ValidationMode, Validator};

use crate::backend::WindowFlags;
use crate::state::DEFAULT_GRACE_FRAMES;

/// Renderer settings. Build with `with_*` methods from the default.
///
/// ```
/// use trema::RendererConfig;
/// use txml::ValidationMode;
///
/// let config = RendererConfig::default()
///     .with_validation(ValidationMode::Strict)
///     .with_input_capacity(1024);
/// assert_eq!(config.input_capacity, 1024);
/// assert_eq!(config.grace_frames, 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    /// How markup and stylesheet whitelist failures are treated.
    pub validation: ValidationMode,
    /// Buffer capacity passed to text inputs.
    pub input_capacity: usize,
    /// Frames a widget's state survives without being read.
    pub grace_frames: u64,
    /// Window height used when a style sets only `width`.
    pub default_window_height: f32,
    pub window_flags: WindowFlags,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            validation: ValidationMode::Lenient,
            input_capacity: 256,
            grace_frames: DEFAULT_GRACE_FRAMES,
            default_window_height: 200.0,
            window_flags: WindowFlags::empty(),
        }
    }
}

impl RendererConfig {
    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    pub fn with_input_capacity(mut self, capacity: usize) -> Self {
        self.input_capacity = capacity;
        self
    }

    pub fn with_grace_frames(mut self, frames: u64) -> Self {
        self.grace_frames = frames;
        self
    }

    pub fn with_default_window_height(mut self, height: f32) -> Self {
        self.default_window_height = height;
        self
    }

    pub fn with_window_flags(mut self, flags: WindowFlags) -> Self {
        self.window_flags = flags;
        self
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.validation)
    }
}

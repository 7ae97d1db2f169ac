//! Declarative immediate-mode UI: TXML markup styled by TSS, drawn through a
//! host-provided widget [`Backend`].
//!
//! Each frame the host hands the [`Renderer`] the current markup and
//! stylesheet. The renderer parses both, computes styles, and issues the
//! matching widget calls. Interactive values (text buffers, slider
//! positions, checkboxes) persist across frames in a [`StateManager`], and
//! `onClick`/`onChange` attributes dispatch to handlers registered by name.
//!
//! ## Modules
//!
//! - [`renderer`]: the per-frame orchestrator
//! - [`backend`]: the widget backend trait and its flags and enums
//! - [`widgets`]: one renderer per tag
//! - [`state`]: cross-frame widget state
//! - [`handlers`]: named event handlers
//! - [`context`]: per-frame render context
//! - [`trace`]: call traces for debugging and golden tests
//! - [`testing`]: recording backend and trace for tests

pub mod backend;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
mod log_init;
pub mod renderer;
pub mod state;
pub mod testing;
pub mod trace;
pub mod widgets;

pub use backend::{Backend, BackendResult, ColorSlot, Condition, WindowFlags};
pub use config::RendererConfig;
pub use context::RenderContext;
pub use error::{BackendError, RenderError, Result};
pub use handlers::HandlerRegistry;
pub use log_init::init_logger;
pub use renderer::{FrameStatus, Renderer};
pub use state::{StateManager, WidgetState, WidgetValue};
pub use trace::{BufferedTrace, NoopTrace, TraceLogger};

// Re-export the log crate so hosts can use trema::log::info!, etc.
pub use log;
pub use tss;
pub use txml;

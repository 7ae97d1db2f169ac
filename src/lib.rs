//! Trema: TXML markup and TSS stylesheets rendered through an immediate-mode
//! widget backend.
//!
//! This crate bundles the three workspace crates:
//!
//! - [`txml`]: the markup parser, validator and element builder
//! - [`tss`]: the stylesheet parser and style engine
//! - [`trema`](crate::Renderer): the renderer, widget state and backend trait
//!
//! ```
//! use trema_rs::Renderer;
//! use trema_rs::testing::RecordingBackend;
//!
//! let backend = RecordingBackend::new();
//! let mut renderer = Renderer::new();
//! renderer.set_backend(backend.clone());
//! renderer.render(
//!     r#"<App><Window title="Hello"><Text>Hi</Text></Window></App>"#,
//!     "Window { width: 300; }",
//! );
//! assert_eq!(backend.count("begin_window(Hello)"), 1);
//! ```

pub use trema::*;
pub use tss;
pub use txml;

/// The items most hosts need.
pub mod prelude {
    pub use trema::{
        Backend, BackendError, BackendResult, ColorSlot, Condition, FrameStatus, Renderer,
        RendererConfig, TraceLogger, WindowFlags,
    };
    pub use tss::Rgba;
    pub use txml::{Element, ElementBuilder, ValidationMode};
}

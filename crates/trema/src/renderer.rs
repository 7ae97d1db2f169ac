//! The per-frame orchestrator.
//!
//! [`Renderer::render`] takes one frame's markup and stylesheet and drives the
//! installed [`Backend`]:
//!
//! 1. Start a trace frame; bail out if no backend is installed
//! 2. Skip blank markup
//! 3. Parse the markup (a parse error yields an error tree, not a failure)
//! 4. Parse the stylesheet; a rejected stylesheet aborts the frame
//! 5. Begin a state frame, walk the tree, end the state frame (sweeping
//!    stale widget state)
//! 6. End and flush the trace
//!
//! The trace frame is ended and flushed on every path, including the early
//! returns of steps 1, 2 and 4.
//!
//! `render` never panics on bad input and never returns an error; what went
//! wrong is logged, traced and summarized in the returned [`FrameStatus`].

use tss::{StyleEngine, parse_tss_with};
use txml::parse_txml_with;

use crate::backend::Backend;
use crate::config::RendererConfig;
use crate::error::Result;
use crate::handlers::HandlerRegistry;
use crate::state::{StateManager, WidgetState};
use crate::trace::{NoopTrace, TraceLogger};
use crate::widgets::{Ui, render_element};

/// How a call to [`Renderer::render`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// The tree was walked. Individual widgets may still have failed.
    Rendered,
    /// The markup was blank; nothing was drawn.
    EmptyMarkup,
    /// No backend is installed.
    NoBackend,
    /// The stylesheet failed to parse; nothing was drawn.
    StylesheetRejected,
}

/// Renders TXML markup styled by TSS through a [`Backend`], one frame per call.
///
/// # Example
///
/// ```
/// use trema::{FrameStatus, Renderer, testing::RecordingBackend};
///
/// let backend = RecordingBackend::new();
/// let mut renderer = Renderer::new();
/// renderer.set_backend(backend.clone());
///
/// let status = renderer.render(
///     r#"<App><Body><Window title="T"><Text>Hi</Text></Window></Body></App>"#,
///     "",
/// );
/// assert_eq!(status, FrameStatus::Rendered);
/// assert_eq!(backend.calls(), vec!["begin_window(T)", "text(Hi)", "end_window"]);
/// ```
pub struct Renderer {
    config: RendererConfig,
    states: StateManager,
    handlers: HandlerRegistry,
    backend: Option<Box<dyn Backend>>,
    trace: Box<dyn TraceLogger>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_config(RendererConfig::default())
    }

    pub fn with_config(config: RendererConfig) -> Self {
        Self {
            states: StateManager::with_grace_frames(config.grace_frames),
            config,
            handlers: HandlerRegistry::new(),
            backend: None,
            trace: Box::new(NoopTrace),
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn set_backend(&mut self, backend: impl Backend + 'static) {
        self.backend = Some(Box::new(backend));
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub fn set_trace_logger(&mut self, trace: impl TraceLogger + 'static) {
        self.trace = Box::new(trace);
    }

    pub fn trace_logger(&self) -> &dyn TraceLogger {
        self.trace.as_ref()
    }

    pub fn register_event_handler(
        &mut self,
        name: impl Into<String>,
        handler: impl FnMut() + 'static,
    ) {
        self.handlers.register(name, handler);
    }

    /// Runs a registered handler directly, as a click would.
    pub fn trigger_event_handler(&mut self, name: &str) -> Result<()> {
        self.handlers.dispatch(name).inspect_err(|err| log::warn!("{err}"))
    }

    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    pub fn state(&self) -> &StateManager {
        &self.states
    }

    /// The persisted state stored under `id`.
    pub fn widget_state(&self, id: &str) -> Option<&WidgetState> {
        self.states.state().get(id)
    }

    pub fn clear_state(&mut self) {
        self.states.clear_state();
    }

    /// Renders one frame. See the module docs for the steps.
    pub fn render(&mut self, txml: &str, tss: &str) -> FrameStatus {
        self.trace.start_frame();

        let Some(backend) = self.backend.as_deref_mut() else {
            let message = "no backend installed; call set_backend() first";
            log::error!("TXML/TSS render error: {message}");
            self.trace.log_call(&format!("// Error: {message}"));
            return self.finish_frame(FrameStatus::NoBackend);
        };

        if txml.trim().is_empty() {
            log::warn!("Empty TXML provided");
            return self.finish_frame(FrameStatus::EmptyMarkup);
        }

        let validator = self.config.validator();
        let root = parse_txml_with(txml, &validator);
        let Some(stylesheet) = parse_tss_with(tss, &validator) else {
            log::error!("Failed to parse TSS; skipping frame");
            self.trace.log_call("// Error: Failed to parse TSS");
            return self.finish_frame(FrameStatus::StylesheetRejected);
        };

        let engine = StyleEngine::new(&stylesheet);
        self.states.begin_frame();
        {
            let mut ctx = self.states.create_context(engine, &mut self.handlers);
            let mut ui = Ui::new(backend, self.trace.as_mut(), &self.config);

            let style = ctx.compute_style(&root);
            if let Err(err) = render_element(&root, &mut ctx, &mut ui, &style) {
                log::error!("Failed to render {}: {err}", root.tag);
                ui.trace_error(&root.tag, &err.to_string());
            }
        }
        self.states.end_frame();

        self.finish_frame(FrameStatus::Rendered)
    }

    fn finish_frame(&mut self, status: FrameStatus) -> FrameStatus {
        self.trace.end_frame();
        self.trace.flush();
        status
    }
}

//! Test utilities: a recording backend and a recording trace.
//!
//! Both are cheap handles over shared storage. Install a clone in the
//! renderer and keep the original to inspect what happened:
//!
//! ```
//! use trema::Renderer;
//! use trema::testing::{RecordingBackend, RecordingTrace};
//!
//! let backend = RecordingBackend::new();
//! let trace = RecordingTrace::new();
//! let mut renderer = Renderer::new();
//! renderer.set_backend(backend.clone());
//! renderer.set_trace_logger(trace.clone());
//!
//! backend.click("Save");
//! renderer.render("<App><Button>Save</Button></App>", "");
//! assert_eq!(backend.calls(), vec!["button(Save)"]);
//! assert!(trace.lines().contains(&"ImGui.Button(\"Save\");".to_string()));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tss::Rgba;

use crate::backend::{Backend, BackendResult, ColorSlot, Condition, WindowFlags};
use crate::error::BackendError;
use crate::trace::{END_FRAME_MARKER, START_FRAME_MARKER, TraceLogger};

// =============================================================================
// RecordingBackend
// =============================================================================

#[derive(Debug)]
struct Recording {
    calls: Vec<String>,
    windows_open: bool,
    clicks: HashSet<String>,
    typed: HashMap<String, String>,
    slides: HashMap<String, f32>,
    toggles: HashSet<String>,
    failing_calls: HashSet<&'static str>,
    failing_texts: HashSet<String>,
    color_depth: i64,
}

impl Default for Recording {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            windows_open: true,
            clicks: HashSet::new(),
            typed: HashMap::new(),
            slides: HashMap::new(),
            toggles: HashSet::new(),
            failing_calls: HashSet::new(),
            failing_texts: HashSet::new(),
            color_depth: 0,
        }
    }
}

/// A [`Backend`] that records every call and replays scripted input.
///
/// Scripted input (`click`, `type_text`, `slide`, `toggle`) is consumed by
/// the next matching widget call. Calls named with `fail_on` return an
/// error after being recorded.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.inner.borrow().calls.clone()
    }

    /// How many recorded calls start with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn clear_calls(&self) {
        self.inner.borrow_mut().calls.clear();
    }

    /// Successful pushes minus popped colors.
    pub fn color_stack_depth(&self) -> i64 {
        self.inner.borrow().color_depth
    }

    /// Whether `begin_window` reports windows as open.
    pub fn set_windows_open(&self, open: bool) {
        self.inner.borrow_mut().windows_open = open;
    }

    pub fn click(&self, label: &str) {
        self.inner.borrow_mut().clicks.insert(label.to_string());
    }

    pub fn type_text(&self, label: &str, text: &str) {
        self.inner
            .borrow_mut()
            .typed
            .insert(label.to_string(), text.to_string());
    }

    pub fn slide(&self, label: &str, value: f32) {
        self.inner.borrow_mut().slides.insert(label.to_string(), value);
    }

    pub fn toggle(&self, label: &str) {
        self.inner.borrow_mut().toggles.insert(label.to_string());
    }

    /// Makes every call named `call` (e.g. `"push_style_color"`) fail.
    pub fn fail_on(&self, call: &'static str) {
        self.inner.borrow_mut().failing_calls.insert(call);
    }

    /// Makes `text` and `text_colored` fail for this exact content.
    pub fn fail_text(&self, text: &str) {
        self.inner.borrow_mut().failing_texts.insert(text.to_string());
    }

    fn record(&self, call: &'static str, line: String) -> BackendResult<()> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(line);
        if inner.failing_calls.contains(call) {
            return Err(BackendError::new(call, "scripted failure"));
        }
        Ok(())
    }

    fn record_text(&self, call: &'static str, line: String, text: &str) -> BackendResult<()> {
        self.record(call, line)?;
        if self.inner.borrow().failing_texts.contains(text) {
            return Err(BackendError::new(call, format!("cannot draw '{text}'")));
        }
        Ok(())
    }
}

impl Backend for RecordingBackend {
    fn begin_window(&mut self, name: &str, _flags: WindowFlags) -> BackendResult<bool> {
        self.record("begin_window", format!("begin_window({name})"))?;
        Ok(self.inner.borrow().windows_open)
    }

    fn end_window(&mut self) -> BackendResult<()> {
        self.record("end_window", "end_window".to_string())
    }

    fn text(&mut self, text: &str) -> BackendResult<()> {
        self.record_text("text", format!("text({text})"), text)
    }

    fn text_colored(&mut self, color: [f32; 4], text: &str) -> BackendResult<()> {
        let [r, g, b, a] = color;
        self.record_text(
            "text_colored",
            format!("text_colored([{r}, {g}, {b}, {a}], {text})"),
            text,
        )
    }

    fn button(&mut self, label: &str) -> BackendResult<bool> {
        self.record("button", format!("button({label})"))?;
        Ok(self.inner.borrow_mut().clicks.remove(label))
    }

    fn input_text_with_hint(
        &mut self,
        label: &str,
        hint: &str,
        buffer: &mut String,
        capacity: usize,
    ) -> BackendResult<bool> {
        self.record(
            "input_text_with_hint",
            format!("input_text_with_hint({label}, {hint}, {buffer}, {capacity})"),
        )?;
        match self.inner.borrow_mut().typed.remove(label) {
            Some(text) => {
                *buffer = text.chars().take(capacity.saturating_sub(1)).collect();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn slider_float(
        &mut self,
        label: &str,
        value: &mut f32,
        min: f32,
        max: f32,
    ) -> BackendResult<bool> {
        self.record(
            "slider_float",
            format!("slider_float({label}, {value}, {min}, {max})"),
        )?;
        match self.inner.borrow_mut().slides.remove(label) {
            Some(slid) => {
                *value = slid.clamp(min, max);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn checkbox(&mut self, label: &str, checked: &mut bool) -> BackendResult<bool> {
        self.record("checkbox", format!("checkbox({label}, {checked})"))?;
        if self.inner.borrow_mut().toggles.remove(label) {
            *checked = !*checked;
            return Ok(true);
        }
        Ok(false)
    }

    fn same_line(&mut self, offset: f32, spacing: f32) -> BackendResult<()> {
        self.record("same_line", format!("same_line({offset}, {spacing})"))
    }

    fn spacing(&mut self) -> BackendResult<()> {
        self.record("spacing", "spacing".to_string())
    }

    fn separator(&mut self) -> BackendResult<()> {
        self.record("separator", "separator".to_string())
    }

    fn set_next_window_size(
        &mut self,
        size: [f32; 2],
        condition: Condition,
    ) -> BackendResult<()> {
        let [width, height] = size;
        self.record(
            "set_next_window_size",
            format!("set_next_window_size({width}, {height}, {})", condition.as_str()),
        )
    }

    fn set_next_item_width(&mut self, width: f32) -> BackendResult<()> {
        self.record("set_next_item_width", format!("set_next_item_width({width})"))
    }

    fn push_style_color(&mut self, slot: ColorSlot, color: Rgba) -> BackendResult<()> {
        self.record(
            "push_style_color",
            format!("push_style_color({}, {color})", slot.as_str()),
        )?;
        self.inner.borrow_mut().color_depth += 1;
        Ok(())
    }

    fn pop_style_color(&mut self, count: usize) -> BackendResult<()> {
        self.record("pop_style_color", format!("pop_style_color({count})"))?;
        self.inner.borrow_mut().color_depth -= count as i64;
        Ok(())
    }
}

// =============================================================================
// RecordingTrace
// =============================================================================

/// A [`TraceLogger`] that keeps every line, including across flushes.
#[derive(Debug, Clone, Default)]
pub struct RecordingTrace {
    lines: Rc<RefCell<Vec<String>>>,
    flushes: Rc<RefCell<usize>>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// All lines joined with newlines, for snapshots.
    pub fn to_text(&self) -> String {
        self.lines.borrow().join("\n")
    }

    pub fn flush_count(&self) -> usize {
        *self.flushes.borrow()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl TraceLogger for RecordingTrace {
    fn start_frame(&mut self) {
        self.log_call(START_FRAME_MARKER);
    }

    fn end_frame(&mut self) {
        self.log_call(END_FRAME_MARKER);
    }

    fn log_call(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }

    fn flush(&mut self) {
        *self.flushes.borrow_mut() += 1;
    }

    fn buffer(&self) -> Vec<String> {
        self.lines()
    }
}

//! The immediate-mode widget backend the renderer drives.
//!
//! Hosts implement [`Backend`] over their GUI library of choice. The renderer
//! issues one call per widget per frame and never holds on to anything the
//! backend returns, so an implementation can be a thin forwarding layer.
//!
//! Every call returns a [`Result`] so host failures surface as values the
//! renderer can log and recover from.

use bitflags::bitflags;
use tss::Rgba;

use crate::error::BackendError;

pub type BackendResult<T> = Result<T, BackendError>;

bitflags! {
    /// Window behavior flags passed to [`Backend::begin_window`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        const NO_TITLE_BAR = 1 << 0;
        const NO_RESIZE = 1 << 1;
        const NO_MOVE = 1 << 2;
        const NO_SCROLLBAR = 1 << 3;
        const NO_COLLAPSE = 1 << 5;
        const ALWAYS_AUTO_RESIZE = 1 << 6;
    }
}

/// When a `set_next_*` call takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Condition {
    #[default]
    Always,
    /// Only the first time the window is seen.
    Once,
    FirstUseEver,
    Appearing,
}

impl Condition {
    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Always => "Always",
            Condition::Once => "Once",
            Condition::FirstUseEver => "FirstUseEver",
            Condition::Appearing => "Appearing",
        }
    }
}

/// Semantic color slots for the style-color stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Text,
    Button,
    ButtonHovered,
    ButtonActive,
    FrameBg,
    WindowBg,
}

impl ColorSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorSlot::Text => "Text",
            ColorSlot::Button => "Button",
            ColorSlot::ButtonHovered => "ButtonHovered",
            ColorSlot::ButtonActive => "ButtonActive",
            ColorSlot::FrameBg => "FrameBg",
            ColorSlot::WindowBg => "WindowBg",
        }
    }
}

/// The widget calls the renderer needs from a GUI library.
///
/// Calls that mutate a value (`input_text_with_hint`, `slider_float`,
/// `checkbox`) write through the `&mut` argument and return whether it
/// changed this frame.
pub trait Backend {
    /// Begins a window, returning whether it is open and visible.
    ///
    /// [`Backend::end_window`] is called afterwards whatever this returns.
    fn begin_window(&mut self, name: &str, flags: WindowFlags) -> BackendResult<bool>;

    fn end_window(&mut self) -> BackendResult<()>;

    fn text(&mut self, text: &str) -> BackendResult<()>;

    /// Text in a color given as normalized `[r, g, b, a]` channels.
    fn text_colored(&mut self, color: [f32; 4], text: &str) -> BackendResult<()>;

    /// A push button, returning whether it was clicked.
    fn button(&mut self, label: &str) -> BackendResult<bool>;

    fn input_text_with_hint(
        &mut self,
        label: &str,
        hint: &str,
        buffer: &mut String,
        capacity: usize,
    ) -> BackendResult<bool>;

    fn slider_float(&mut self, label: &str, value: &mut f32, min: f32, max: f32)
    -> BackendResult<bool>;

    fn checkbox(&mut self, label: &str, checked: &mut bool) -> BackendResult<bool>;

    fn same_line(&mut self, offset: f32, spacing: f32) -> BackendResult<()>;

    fn spacing(&mut self) -> BackendResult<()>;

    fn separator(&mut self) -> BackendResult<()>;

    fn set_next_window_size(&mut self, size: [f32; 2], condition: Condition)
    -> BackendResult<()>;

    fn set_next_item_width(&mut self, width: f32) -> BackendResult<()>;

    fn push_style_color(&mut self, slot: ColorSlot, color: Rgba) -> BackendResult<()>;

    fn pop_style_color(&mut self, count: usize) -> BackendResult<()>;
}

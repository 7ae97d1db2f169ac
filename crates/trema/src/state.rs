//! Widget state that survives across frames.
//!
//! Immediate-mode backends keep no widget objects, so values such as a text
//! buffer or a slider position live here, keyed by a stable id. Every read
//! stamps the entry with the current frame; [`StateManager::end_frame`] drops
//! entries nobody has read for more than the grace window.

use std::collections::HashMap;

use tss::StyleEngine;
use txml::Element;

use crate::context::RenderContext;
use crate::handlers::HandlerRegistry;

/// Frames an entry may go unread before it is dropped.
pub const DEFAULT_GRACE_FRAMES: u64 = 10;

/// A persisted widget value.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetValue {
    Text(String),
    Float(f32),
    Bool(bool),
}

impl WidgetValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            WidgetValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            WidgetValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            WidgetValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for WidgetValue {
    fn from(value: &str) -> Self {
        WidgetValue::Text(value.to_string())
    }
}

impl From<String> for WidgetValue {
    fn from(value: String) -> Self {
        WidgetValue::Text(value)
    }
}

impl From<f32> for WidgetValue {
    fn from(value: f32) -> Self {
        WidgetValue::Float(value)
    }
}

impl From<bool> for WidgetValue {
    fn from(value: bool) -> Self {
        WidgetValue::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    pub id: String,
    pub value: WidgetValue,
    /// The last frame in which the entry was read or written.
    pub last_frame: u64,
}

/// Owns the state map and the frame counter.
#[derive(Debug)]
pub struct StateManager {
    states: HashMap<String, WidgetState>,
    frame_number: u64,
    grace_frames: u64,
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StateManager {
    /// A manager at frame 0; the first [`begin_frame`](Self::begin_frame)
    /// moves it to frame 1.
    pub fn new() -> Self {
        Self::with_grace_frames(DEFAULT_GRACE_FRAMES)
    }

    pub fn with_grace_frames(grace_frames: u64) -> Self {
        Self {
            states: HashMap::new(),
            frame_number: 0,
            grace_frames,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn grace_frames(&self) -> u64 {
        self.grace_frames
    }

    pub fn begin_frame(&mut self) {
        self.frame_number += 1;
        log::trace!("state: begin frame {}", self.frame_number);
    }

    /// Drops entries whose `last_frame` is older than the grace window.
    pub fn end_frame(&mut self) {
        let cutoff = self.frame_number.saturating_sub(self.grace_frames);
        let before = self.states.len();
        self.states.retain(|_, state| state.last_frame >= cutoff);

        let dropped = before - self.states.len();
        if dropped > 0 {
            log::debug!(
                "state: dropped {dropped} stale entries at frame {}",
                self.frame_number
            );
        }
    }

    /// The entry for `id`, created from `default` if missing. Stamps it with
    /// the current frame.
    pub fn get_widget_state(
        &mut self,
        id: &str,
        default: impl Into<WidgetValue>,
    ) -> &mut WidgetState {
        let frame = self.frame_number;
        let state = self
            .states
            .entry(id.to_string())
            .or_insert_with(|| WidgetState {
                id: id.to_string(),
                value: default.into(),
                last_frame: frame,
            });
        state.last_frame = frame;
        state
    }

    pub fn set_widget_state(&mut self, id: &str, value: impl Into<WidgetValue>) {
        let value = value.into();
        let state = self.get_widget_state(id, value.clone());
        state.value = value;
    }

    /// Read-only access to the entries, keyed by id.
    pub fn state(&self) -> &HashMap<String, WidgetState> {
        &self.states
    }

    pub fn clear_state(&mut self) {
        self.states.clear();
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// A fresh context for one frame's tree walk, sharing this state map.
    pub fn create_context<'a>(
        &'a mut self,
        engine: StyleEngine<'a>,
        handlers: &'a mut HandlerRegistry,
    ) -> RenderContext<'a> {
        RenderContext::new(self, engine, handlers)
    }
}

/// The id a widget's state is stored under.
///
/// An explicit `id` attribute wins. Otherwise the ancestor tags and the
/// element's own tag are joined with `/`, so same-tag siblings under the
/// same path share one id.
pub fn stable_id(element: &Element, ancestors: &[&Element]) -> String {
    if let Some(id) = element.id() {
        return id.to_string();
    }
    ancestors
        .iter()
        .map(|ancestor| ancestor.tag.as_str())
        .chain(std::iter::once(element.tag.as_str()))
        .collect::<Vec<_>>()
        .join("/")
}

//! Per-frame render context.
//!
//! A `RenderContext` lives for one tree walk. It borrows the persistent
//! [`StateManager`] and [`HandlerRegistry`] from the renderer, and owns the
//! frame-scoped pieces: the ancestor stack and the frame number snapshot.

use tss::{ComputedStyle, StyleEngine};
use txml::Element;

use crate::handlers::HandlerRegistry;
use crate::state::{StateManager, WidgetState, WidgetValue, stable_id};

pub struct RenderContext<'a> {
    states: &'a mut StateManager,
    handlers: &'a mut HandlerRegistry,
    engine: StyleEngine<'a>,
    ancestors: Vec<&'a Element>,
    frame_number: u64,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        states: &'a mut StateManager,
        engine: StyleEngine<'a>,
        handlers: &'a mut HandlerRegistry,
    ) -> Self {
        let frame_number = states.frame_number();
        Self {
            states,
            handlers,
            engine,
            ancestors: Vec::new(),
            frame_number,
        }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn engine(&self) -> StyleEngine<'a> {
        self.engine
    }

    /// Elements enclosing the one being rendered, root first.
    pub fn ancestors(&self) -> &[&'a Element] {
        &self.ancestors
    }

    /// The ancestor tags joined with `/`.
    pub fn path(&self) -> String {
        self.ancestors
            .iter()
            .map(|element| element.tag.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Runs `f` with `element` pushed onto the ancestor stack.
    ///
    /// The stack is restored before returning, whatever `f` returns.
    pub fn with_ancestor<R>(&mut self, element: &'a Element, f: impl FnOnce(&mut Self) -> R) -> R {
        self.ancestors.push(element);
        let result = f(self);
        self.ancestors.pop();
        result
    }

    pub fn compute_style(&self, element: &Element) -> ComputedStyle {
        self.engine.compute_style(element, &self.ancestors)
    }

    pub fn stable_id(&self, element: &Element) -> String {
        stable_id(element, &self.ancestors)
    }

    pub fn widget_state(&mut self, id: &str, default: impl Into<WidgetValue>) -> &mut WidgetState {
        self.states.get_widget_state(id, default)
    }

    pub fn set_widget_state(&mut self, id: &str, value: impl Into<WidgetValue>) {
        self.states.set_widget_state(id, value);
    }

    /// Runs the handler named by an event attribute. A missing handler is
    /// logged and otherwise ignored.
    pub fn dispatch(&mut self, name: &str) {
        if let Err(err) = self.handlers.dispatch(name) {
            log::warn!("{err}");
        }
    }
}

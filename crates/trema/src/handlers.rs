//! Named event handlers referenced from markup (`onClick="save"`).

use std::collections::HashMap;
use std::fmt;

use crate::error::{RenderError, Result};

/// Prefix of the names generated by [`HandlerRegistry::register_inline`].
pub const INLINE_HANDLER_PREFIX: &str = "jsx_fn_";

type Handler = Box<dyn FnMut()>;

/// Handlers by name, plus the counter for generated inline names.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Handler>,
    next_inline: usize,
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HandlerRegistry")
            .field("handlers", &names)
            .field("next_inline", &self.next_inline)
            .finish()
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, handler: impl FnMut() + 'static) {
        let name = name.into();
        log::debug!("handlers: registered '{name}'");
        self.handlers.insert(name, Box::new(handler));
    }

    /// Registers an anonymous handler and returns its generated name, for
    /// use as an attribute value when building markup in code.
    ///
    /// ```
    /// use trema::HandlerRegistry;
    ///
    /// let mut handlers = HandlerRegistry::new();
    /// assert_eq!(handlers.register_inline(|| {}), "jsx_fn_0");
    /// assert_eq!(handlers.register_inline(|| {}), "jsx_fn_1");
    /// ```
    pub fn register_inline(&mut self, handler: impl FnMut() + 'static) -> String {
        let name = format!("{INLINE_HANDLER_PREFIX}{}", self.next_inline);
        self.next_inline += 1;
        self.register(name.clone(), handler);
        name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the handler registered as `name`.
    pub fn dispatch(&mut self, name: &str) -> Result<()> {
        let handler = self
            .handlers
            .get_mut(name)
            .ok_or_else(|| RenderError::MissingHandler(name.to_string()))?;
        log::debug!("handlers: dispatching '{name}'");
        handler();
        Ok(())
    }
}

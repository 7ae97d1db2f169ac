//! Widget renderers: one function per [`Tag`], dispatched by [`render_element`].
//!
//! Renderers draw through a [`Ui`], which traces every backend call before
//! issuing it. Children are rendered one at a time; a child that fails is
//! logged and traced as a comment and its siblings still render.

mod button;
mod input;
mod layout;
mod text;
mod window;

use tss::{ComputedStyle, Rgba};
use txml::{Element, Node, Tag};

use crate::backend::{Backend, BackendResult, ColorSlot, Condition, WindowFlags};
use crate::config::RendererConfig;
use crate::context::RenderContext;
use crate::trace::{TraceLogger, quoted};

/// The backend and trace for one frame, plus the settings widgets read.
pub struct Ui<'u> {
    backend: &'u mut dyn Backend,
    trace: &'u mut dyn TraceLogger,
    config: &'u RendererConfig,
}

impl<'u> Ui<'u> {
    pub fn new(
        backend: &'u mut dyn Backend,
        trace: &'u mut dyn TraceLogger,
        config: &'u RendererConfig,
    ) -> Self {
        Self {
            backend,
            trace,
            config,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        self.config
    }

    pub fn trace(&mut self, line: &str) {
        self.trace.log_call(line);
    }

    /// Traces a caught rendering failure.
    pub fn trace_error(&mut self, tag: &str, message: &str) {
        self.trace(&format!("// Error: Failed to render {tag} - {message}"));
    }

    pub fn begin_window(&mut self, name: &str, flags: WindowFlags) -> BackendResult<bool> {
        self.trace(&format!("ImGui.Begin({});", quoted(name)));
        self.backend.begin_window(name, flags)
    }

    pub fn end_window(&mut self) -> BackendResult<()> {
        self.trace("ImGui.End();");
        self.backend.end_window()
    }

    pub fn text(&mut self, text: &str) -> BackendResult<()> {
        self.trace(&format!("ImGui.Text({});", quoted(text)));
        self.backend.text(text)
    }

    pub fn text_colored(&mut self, color: Rgba, text: &str) -> BackendResult<()> {
        let [r, g, b, a] = color.normalized();
        self.trace(&format!(
            "ImGui.TextColored([{r}, {g}, {b}, {a}], {});",
            quoted(text)
        ));
        self.backend.text_colored([r, g, b, a], text)
    }

    pub fn button(&mut self, label: &str) -> BackendResult<bool> {
        self.trace(&format!("ImGui.Button({});", quoted(label)));
        self.backend.button(label)
    }

    pub fn input_text_with_hint(
        &mut self,
        label: &str,
        hint: &str,
        buffer: &mut String,
    ) -> BackendResult<bool> {
        let capacity = self.config.input_capacity;
        self.trace(&format!(
            "ImGui.InputTextWithHint({}, {}, {}, {capacity});",
            quoted(label),
            quoted(hint),
            quoted(buffer)
        ));
        self.backend.input_text_with_hint(label, hint, buffer, capacity)
    }

    pub fn slider_float(
        &mut self,
        label: &str,
        value: &mut f32,
        min: f32,
        max: f32,
    ) -> BackendResult<bool> {
        self.trace(&format!(
            "ImGui.SliderFloat({}, {value}, {min}, {max});",
            quoted(label)
        ));
        self.backend.slider_float(label, value, min, max)
    }

    pub fn checkbox(&mut self, label: &str, checked: &mut bool) -> BackendResult<bool> {
        self.trace(&format!("ImGui.Checkbox({}, {checked});", quoted(label)));
        self.backend.checkbox(label, checked)
    }

    pub fn same_line(&mut self, offset: f32, spacing: f32) -> BackendResult<()> {
        self.trace(&format!("ImGui.SameLine({offset}, {spacing});"));
        self.backend.same_line(offset, spacing)
    }

    pub fn spacing(&mut self) -> BackendResult<()> {
        self.trace("ImGui.Spacing();");
        self.backend.spacing()
    }

    pub fn separator(&mut self) -> BackendResult<()> {
        self.trace("ImGui.Separator();");
        self.backend.separator()
    }

    pub fn set_next_window_size(
        &mut self,
        size: [f32; 2],
        condition: Condition,
    ) -> BackendResult<()> {
        let [width, height] = size;
        self.trace(&format!(
            "ImGui.SetNextWindowSize([{width}, {height}], ImGui.Cond.{});",
            condition.as_str()
        ));
        self.backend.set_next_window_size(size, condition)
    }

    pub fn set_next_item_width(&mut self, width: f32) -> BackendResult<()> {
        self.trace(&format!("ImGui.SetNextItemWidth({width});"));
        self.backend.set_next_item_width(width)
    }

    pub fn push_style_color(&mut self, slot: ColorSlot, color: Rgba) -> BackendResult<()> {
        self.trace(&format!(
            "ImGui.PushStyleColor(ImGui.Col.{}, {color});",
            slot.as_str()
        ));
        self.backend.push_style_color(slot, color)
    }

    pub fn pop_style_color(&mut self, count: usize) -> BackendResult<()> {
        self.trace(&format!("ImGui.PopStyleColor({count});"));
        self.backend.pop_style_color(count)
    }
}

/// Style colors pushed by one widget, popped together afterwards.
///
/// Only pushes the backend accepted are counted, so a failed push is
/// never popped.
#[derive(Debug, Default)]
pub(crate) struct StyleColors {
    pushed: usize,
}

impl StyleColors {
    pub(crate) fn push(&mut self, ui: &mut Ui<'_>, slot: ColorSlot, color: Rgba) {
        match ui.push_style_color(slot, color) {
            Ok(()) => self.pushed += 1,
            Err(err) => log::error!("{} color styling failed: {err}", slot.as_str()),
        }
    }

    pub(crate) fn push_style(
        &mut self,
        ui: &mut Ui<'_>,
        style: &ComputedStyle,
        property: &str,
        slot: ColorSlot,
    ) {
        if let Some(color) = style.color(property) {
            self.push(ui, slot, color);
        }
    }

    pub(crate) fn pop(self, ui: &mut Ui<'_>) -> BackendResult<()> {
        if self.pushed == 0 {
            return Ok(());
        }
        ui.pop_style_color(self.pushed)
    }
}

/// Applies a fixed item width from the `width` style, if set.
pub(crate) fn apply_item_width(ui: &mut Ui<'_>, style: &ComputedStyle) -> BackendResult<()> {
    match style.number("width") {
        Some(width) => ui.set_next_item_width(width),
        None => Ok(()),
    }
}

/// Renders one element whose style has already been computed.
pub fn render_element<'a>(
    element: &'a Element,
    ctx: &mut RenderContext<'a>,
    ui: &mut Ui<'_>,
    style: &ComputedStyle,
) -> BackendResult<()> {
    log::trace!("render: {}", element.tag);
    match element.kind() {
        Tag::App | Tag::Body => render_children(element, ctx, ui),
        Tag::Head => Ok(()),
        Tag::Window => window::render(element, ctx, ui, style),
        Tag::Text => text::render(element, ui, style),
        Tag::Button => button::render(element, ctx, ui, style),
        Tag::InputText => input::input_text(element, ctx, ui, style),
        Tag::SliderFloat => input::slider_float(element, ctx, ui, style),
        Tag::Checkbox => input::checkbox(element, ctx, ui, style),
        Tag::SameLine => layout::same_line(element, ui),
        Tag::Spacing => ui.spacing(),
        Tag::Separator => ui.separator(),
        Tag::Unknown => {
            log::warn!("No renderer for tag: {}", element.tag);
            Ok(())
        }
    }
}

/// Renders the children of `element` with it pushed as an ancestor.
///
/// A failing child element is logged and traced and the loop moves on.
/// Failures emitting bare text runs are returned.
pub fn render_children<'a>(
    element: &'a Element,
    ctx: &mut RenderContext<'a>,
    ui: &mut Ui<'_>,
) -> BackendResult<()> {
    ctx.with_ancestor(element, |ctx| {
        for child in &element.children {
            match child {
                Node::Text(text) => {
                    let text = text.trim();
                    if !text.is_empty() {
                        ui.text(text)?;
                    }
                }
                Node::Element(child) => {
                    let style = ctx.compute_style(child);
                    if let Err(err) = render_element(child, ctx, ui, &style) {
                        log::error!("Failed to render child element {}: {err}", child.tag);
                        ui.trace_error(&child.tag, &err.to_string());
                    }
                }
            }
        }
        Ok(())
    })
}

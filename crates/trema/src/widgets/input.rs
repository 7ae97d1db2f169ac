//! Widgets whose value persists across frames.
//!
//! Each reads its value from the state manager under the element's stable
//! id, hands it to the backend as a mutable buffer, and writes it back when
//! the backend reports a change. A changed value also fires `onChange`.
//!
//! The `value` (or `checked`) attribute seeds the state the first time the
//! widget is seen; afterwards the stored value wins.

use tss::ComputedStyle;
use txml::{Element, parse_float_or};

use crate::backend::{BackendResult, ColorSlot};
use crate::context::RenderContext;
use crate::widgets::{StyleColors, Ui, apply_item_width};

const DEFAULT_SLIDER_VALUE: f32 = 0.5;

fn label(element: &Element) -> &str {
    element.attr("label").unwrap_or_default()
}

fn push_frame_background(colors: &mut StyleColors, ui: &mut Ui<'_>, style: &ComputedStyle) {
    let color = style
        .color("widget-background-color")
        .or_else(|| style.color("frame-background-color"));
    if let Some(color) = color {
        colors.push(ui, ColorSlot::FrameBg, color);
    }
}

fn notify_change(element: &Element, ctx: &mut RenderContext<'_>) {
    if let Some(handler) = element.attr("onChange") {
        ctx.dispatch(handler);
    }
}

/// `<InputText label="..." hint="..." />`, persisting a string.
pub(super) fn input_text(
    element: &Element,
    ctx: &mut RenderContext<'_>,
    ui: &mut Ui<'_>,
    style: &ComputedStyle,
) -> BackendResult<()> {
    let id = ctx.stable_id(element);
    let initial = element.attr("value").unwrap_or_default();
    let mut buffer = ctx
        .widget_state(&id, initial)
        .value
        .as_text()
        .unwrap_or_default()
        .to_string();
    let hint = element.attr("hint").unwrap_or_default();

    apply_item_width(ui, style)?;
    let mut colors = StyleColors::default();
    push_frame_background(&mut colors, ui, style);

    let changed = ui.input_text_with_hint(label(element), hint, &mut buffer);
    if let Ok(true) = changed {
        ctx.set_widget_state(&id, buffer);
        notify_change(element, ctx);
    }

    colors.pop(ui)?;
    changed.map(|_| ())
}

/// `<SliderFloat label="..." min="0" max="1" />`, persisting a float.
pub(super) fn slider_float(
    element: &Element,
    ctx: &mut RenderContext<'_>,
    ui: &mut Ui<'_>,
    style: &ComputedStyle,
) -> BackendResult<()> {
    let id = ctx.stable_id(element);
    let initial = parse_float_or(element.attr("value"), DEFAULT_SLIDER_VALUE);
    let mut value = ctx
        .widget_state(&id, initial)
        .value
        .as_float()
        .unwrap_or(initial);
    let min = parse_float_or(element.attr("min"), 0.0);
    let max = parse_float_or(element.attr("max"), 1.0);

    apply_item_width(ui, style)?;
    let mut colors = StyleColors::default();
    push_frame_background(&mut colors, ui, style);

    let changed = ui.slider_float(label(element), &mut value, min, max);
    if let Ok(true) = changed {
        ctx.set_widget_state(&id, value);
        notify_change(element, ctx);
    }

    colors.pop(ui)?;
    changed.map(|_| ())
}

/// `<Checkbox label="..." />`, persisting a bool.
pub(super) fn checkbox(
    element: &Element,
    ctx: &mut RenderContext<'_>,
    ui: &mut Ui<'_>,
    style: &ComputedStyle,
) -> BackendResult<()> {
    let id = ctx.stable_id(element);
    let initial = element.attr("checked") == Some("true");
    let mut checked = ctx
        .widget_state(&id, initial)
        .value
        .as_bool()
        .unwrap_or(initial);

    let mut colors = StyleColors::default();
    colors.push_style(ui, style, "text-color", ColorSlot::Text);

    let changed = ui.checkbox(label(element), &mut checked);
    colors.pop(ui)?;

    if changed? {
        ctx.set_widget_state(&id, checked);
        notify_change(element, ctx);
    }
    Ok(())
}

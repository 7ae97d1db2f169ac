use tss::ComputedStyle;
use txml::Element;

use crate::backend::{BackendResult, ColorSlot};
use crate::context::RenderContext;
use crate::widgets::{StyleColors, Ui, apply_item_width};

/// Channel shift for the hover variant of `button-color`.
const HOVER_SHIFT: i16 = 40;
/// Channel shift for the active variant of `button-color`.
const ACTIVE_SHIFT: i16 = -50;

/// `<Button onClick="handler">label</Button>`.
///
/// `button-color` pushes three colors: the base and derived hover and active
/// variants, unless `button-color-hover` or `button-color-active` override
/// them.
pub(super) fn render(
    element: &Element,
    ctx: &mut RenderContext<'_>,
    ui: &mut Ui<'_>,
    style: &ComputedStyle,
) -> BackendResult<()> {
    let label = element.text_content();
    apply_item_width(ui, style)?;

    let mut colors = StyleColors::default();
    if let Some(base) = style.color("button-color") {
        let hovered = style
            .color("button-color-hover")
            .unwrap_or_else(|| base.shifted(HOVER_SHIFT));
        let active = style
            .color("button-color-active")
            .unwrap_or_else(|| base.shifted(ACTIVE_SHIFT));

        colors.push(ui, ColorSlot::Button, base);
        colors.push(ui, ColorSlot::ButtonHovered, hovered);
        colors.push(ui, ColorSlot::ButtonActive, active);
    }
    colors.push_style(ui, style, "text-color", ColorSlot::Text);

    let clicked = ui.button(&label);
    colors.pop(ui)?;

    if clicked? {
        if let Some(handler) = element.attr("onClick") {
            ctx.dispatch(handler);
        }
    }
    Ok(())
}

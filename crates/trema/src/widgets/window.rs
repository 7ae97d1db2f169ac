use tss::ComputedStyle;
use txml::Element;

use crate::backend::{BackendResult, ColorSlot, Condition};
use crate::context::RenderContext;
use crate::widgets::{StyleColors, Ui, render_children};

/// `<Window title="...">`.
///
/// `begin_window` and `end_window` are always issued as a pair: children
/// render only when the window is open, and their failures are caught here.
pub(super) fn render<'a>(
    element: &'a Element,
    ctx: &mut RenderContext<'a>,
    ui: &mut Ui<'_>,
    style: &ComputedStyle,
) -> BackendResult<()> {
    let title = element.attr("title").unwrap_or("Window");

    if let Some(width) = style.number("width") {
        let height = style
            .number("height")
            .filter(|height| *height != 0.0)
            .unwrap_or(ui.config().default_window_height);
        ui.set_next_window_size([width, height], Condition::Once)?;
    }

    let mut colors = StyleColors::default();
    colors.push_style(ui, style, "text-color", ColorSlot::Text);
    colors.push_style(ui, style, "window-background-color", ColorSlot::WindowBg);

    let flags = ui.config().window_flags;
    let opened = ui.begin_window(title, flags);
    if let Ok(true) = opened {
        if let Err(err) = render_children(element, ctx, ui) {
            log::error!("Error rendering window children: {err}");
            ui.trace_error(&element.tag, &err.to_string());
        }
    }

    let popped = colors.pop(ui);
    let ended = ui.end_window();
    opened?;
    popped?;
    ended
}

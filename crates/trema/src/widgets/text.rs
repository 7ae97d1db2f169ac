use tss::ComputedStyle;
use txml::Element;

use crate::backend::BackendResult;
use crate::widgets::Ui;

/// `<Text>`: the element's own text runs, colored by `text-color`.
pub(super) fn render(element: &Element, ui: &mut Ui<'_>, style: &ComputedStyle) -> BackendResult<()> {
    let text = element.text_content();
    match style.color("text-color") {
        Some(color) => ui.text_colored(color, &text),
        None => ui.text(&text),
    }
}

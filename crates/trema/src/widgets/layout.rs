use txml::{Element, parse_float_or};

use crate::backend::BackendResult;
use crate::widgets::Ui;

/// `<SameLine offset="0" spacing="-1" />`.
pub(super) fn same_line(element: &Element, ui: &mut Ui<'_>) -> BackendResult<()> {
    let offset = parse_float_or(element.attr("offset"), 0.0);
    let spacing = parse_float_or(element.attr("spacing"), -1.0);
    ui.same_line(offset, spacing)
}

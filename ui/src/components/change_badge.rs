//! A component for displaying a 24-hour change with its direction glyph.

use crate::row_model::ChangeCell;
use dioxus::prelude::*;

/// Renders a change cell as a styled span: glyph, then the absolute value.
/// The style class distinguishes gains from losses.
#[component]
pub fn ChangeBadge(cell: ChangeCell) -> Element {
    rsx! {
        span {
            class: "change {cell.direction.css_class()}",
            "{cell.direction.glyph()} {cell.value}"
        }
    }
}

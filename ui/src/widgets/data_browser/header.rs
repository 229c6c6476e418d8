//! Header row of the data browser.

use egui::{Button, RichText, Ui};
use roost_business::{Column, SortConfig};

/// Header title of the trailing action column.
pub const ACTIONS_HEADER: &str = "ACTIONS";

/// Text of a column header, with an arrow when the column is sorted.
pub fn header_text(column: &Column, sort: Option<&SortConfig>) -> String {
    match sort {
        Some(sort) if sort.column == column.key => {
            format!("{} {}", column.title, sort.direction.arrow())
        }
        _ => column.title.clone(),
    }
}

/// Renders a clickable header cell.
///
/// Returns `true` if the header was clicked.
#[inline]
pub fn render_header_cell(ui: &mut Ui, column: &Column, sort: Option<&SortConfig>) -> bool {
    let text = RichText::new(header_text(column, sort)).strong();
    ui.add(Button::new(text).frame(false))
        .on_hover_text("Sort by this column")
        .clicked()
}

/// Renders the static header of the action column.
#[inline]
pub fn render_actions_header(ui: &mut Ui) {
    ui.strong(ACTIONS_HEADER);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_text_marks_sorted_column() {
        let column = Column::new("birds");
        assert_eq!(header_text(&column, None), "BIRDS");
        assert_eq!(
            header_text(&column, Some(&SortConfig::ascending("birds"))),
            "BIRDS ▲"
        );
        assert_eq!(
            header_text(&column, Some(&SortConfig::descending("birds"))),
            "BIRDS ▼"
        );
        assert_eq!(
            header_text(&column, Some(&SortConfig::ascending("house"))),
            "BIRDS"
        );
    }
}

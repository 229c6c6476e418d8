//! Prev / Next controls under the table.

use egui::{Button, Ui};
use roost_business::PageView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Prev,
    Next,
}

/// Renders the pagination bar. Buttons are disabled at the first and last page.
#[inline]
pub fn render_pagination(ui: &mut Ui, view: &PageView<'_>) -> Option<PageNav> {
    let mut nav = None;
    ui.horizontal(|ui| {
        if ui.add_enabled(view.has_prev(), Button::new("Prev")).clicked() {
            nav = Some(PageNav::Prev);
        }
        ui.label(view.page_label());
        if ui.add_enabled(view.has_next(), Button::new("Next")).clicked() {
            nav = Some(PageNav::Next);
        }
    });
    nav
}

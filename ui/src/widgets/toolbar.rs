//! Title row shared by every list page.

use egui::Ui;

/// Buttons clicked in the toolbar this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toolbar {
    pub refresh: bool,
    pub create: bool,
}

/// Heading, refresh button, optional create button and a spinner while
/// `busy`.
pub fn page_toolbar(ui: &mut Ui, title: &str, create_label: Option<&str>, busy: bool) -> Toolbar {
    let mut toolbar = Toolbar::default();

    ui.horizontal_wrapped(|ui| {
        ui.heading(title);
        ui.add_space(12.0);

        toolbar.refresh = ui.add_enabled(!busy, egui::Button::new("🔄 Muat ulang")).clicked();
        if let Some(label) = create_label {
            toolbar.create = ui.button(format!("➕ {label}")).clicked();
        }
        if busy {
            ui.spinner();
        }
    });
    ui.add_space(8.0);

    toolbar
}

//! Dialog and form field helpers.

use egui::{Context, RichText, Ui, Window};
use vowly_business::FieldErrors;

use crate::utils::colors::COLOR_RED;

/// First error for `field`, in small red text under the input.
pub fn field_error(ui: &mut Ui, errors: &FieldErrors, field: &str) {
    if let Some(message) = errors.first(field) {
        ui.label(RichText::new(message).small().color(COLOR_RED));
    }
}

/// Label, single-line input and its error.
pub fn labeled_text(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    errors: &FieldErrors,
    field: &str,
) -> egui::Response {
    ui.label(label);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .id_salt(field)
            .desired_width(f32::INFINITY),
    );
    field_error(ui, errors, field);
    ui.add_space(4.0);
    response
}

/// Rupiah amount input; accepts `150000`, `150.000` or `Rp 150.000`.
pub fn money_field(
    ui: &mut Ui,
    label: &str,
    value: &mut String,
    errors: &FieldErrors,
    field: &str,
) -> egui::Response {
    ui.label(label);
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .id_salt(field)
            .hint_text("Rp 0")
            .desired_width(f32::INFINITY),
    );
    field_error(ui, errors, field);
    ui.add_space(4.0);
    response
}

/// A non-collapsible dialog window. `open` is cleared by the close button.
pub fn form_window<R>(
    ctx: &Context,
    title: &str,
    open: &mut bool,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> Option<R> {
    Window::new(title)
        .open(open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, add_contents)
        .and_then(|response| response.inner)
}

/// Yes/no dialog. `Some(true)` on confirm, `Some(false)` on cancel or close.
pub fn confirm_dialog(ctx: &Context, title: &str, message: &str, confirm_label: &str) -> Option<bool> {
    let mut open = true;

    let answer = form_window(ctx, title, &mut open, |ui| {
        ui.label(message);
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui
                .button(RichText::new(confirm_label).color(COLOR_RED))
                .clicked()
            {
                Some(true)
            } else if ui.button("Batal").clicked() {
                Some(false)
            } else {
                None
            }
        })
        .inner
    })
    .flatten();

    if open { answer } else { Some(false) }
}

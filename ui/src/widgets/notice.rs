//! Page-level banners for mutation notices and failed fetches.

use egui::{Frame, Margin, RichText, Ui};
use vowly_business::{FetchStatus, Notice, NoticeKind};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

/// Shows the notice with a close button. Returns `true` when dismissed.
pub fn notice_banner(ui: &mut Ui, notice: &Notice) -> bool {
    let (color, icon) = match notice.kind {
        NoticeKind::Success => (COLOR_GREEN, "✔"),
        NoticeKind::Error => (COLOR_RED, "⚠"),
    };

    Frame::NONE
        .stroke(egui::Stroke::new(1.0, color))
        .inner_margin(Margin::symmetric(8, 6))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{icon} {}", notice.message)).color(color));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small_button("✖").clicked()
                })
                .inner
            })
            .inner
        })
        .inner
}

/// Shows the fetch error with a retry button. Returns `true` on retry.
pub fn fetch_error(ui: &mut Ui, status: &FetchStatus) -> bool {
    let Some(error) = status.error() else {
        return false;
    };

    ui.horizontal(|ui| {
        ui.colored_label(COLOR_RED, format!("Gagal memuat data: {error}"));
        ui.button("Coba lagi").clicked()
    })
    .inner
}

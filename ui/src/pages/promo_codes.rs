use chrono::{DateTime, Utc};
use egui::{RichText, Ui};
use egui_extras::Column as Width;
use vowly_business::forms::PromoCodeForm;
use vowly_business::models::{DiscountType, PromoCode, format_rupiah};
use vowly_business::resources::{self, MutationOutcome, ResourceList};
use vowly_business::table::{CellValue, Column};
use vowly_states::{StateCtx, Time};

use super::{
    PendingDelete, confirm_delete, edit_delete_buttons, form_footer, list_header, status_text,
    submit,
};
use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_MUTED, COLOR_RED};
use crate::widgets::{DataColumn, DataTable, form_window, labeled_text, money_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromoAction {
    Toggle(u64),
    Edit(u64),
    Delete(u64),
}

pub struct PromoCodesPage {
    table: DataTable<PromoCode, PromoAction>,
    form: Option<PromoCodeForm>,
    pending_delete: Option<PendingDelete>,
}

impl Default for PromoCodesPage {
    fn default() -> Self {
        let table = DataTable::new("promo_codes_table", "code")
            .search_placeholder("Cari kode promo...")
            .column(DataColumn::with_cell(
                Column::field("code").header("Kode"),
                |ui, promo: &PromoCode| {
                    ui.label(RichText::new(&promo.code).monospace().strong());
                    None
                },
            ))
            .column(DataColumn::new(
                Column::computed("discount", |promo: &PromoCode| promo.discount_label().into())
                    .header("Diskon")
                    .sortable(false),
            ))
            .column(DataColumn::with_cell(
                Column::field("min_purchase").header("Min. Belanja"),
                |ui, promo: &PromoCode| {
                    ui.label(format_rupiah(promo.min_purchase));
                    None
                },
            ))
            .column(DataColumn::new(
                Column::computed("usage", |promo: &PromoCode| {
                    CellValue::from(u64::from(promo.used_count))
                })
                .header("Pemakaian")
                .label("Terpakai"),
            )
            .cell(|ui, promo: &PromoCode| {
                ui.label(promo.usage_label());
                None
            }))
            .column(DataColumn::new(Column::field("expires_at").header("Berakhir")))
            .column(DataColumn::with_cell(
                Column::field("is_active").header("Status"),
                |ui, promo: &PromoCode| {
                    let (text, color) = promo_status(promo, Utc::now());
                    status_text(ui, text, color);
                    None
                },
            ))
            .column(
                DataColumn::with_cell(
                    Column::display("actions").header("Aksi"),
                    |ui, promo: &PromoCode| {
                        let toggle_label = if promo.is_active { "⏸ Nonaktifkan" } else { "▶ Aktifkan" };
                        if ui.small_button(toggle_label).clicked() {
                            return Some(PromoAction::Toggle(promo.id));
                        }
                        edit_delete_buttons(
                            ui,
                            PromoAction::Edit(promo.id),
                            PromoAction::Delete(promo.id),
                        )
                    },
                )
                .width(Width::exact(260.0)),
            );

        Self {
            table,
            form: None,
            pending_delete: None,
        }
    }
}

/// Status text for a promo code at `now`.
fn promo_status(promo: &PromoCode, now: DateTime<Utc>) -> (&'static str, egui::Color32) {
    if !promo.is_active {
        ("Nonaktif", COLOR_MUTED)
    } else if promo.is_expired(now) {
        ("Kedaluwarsa", COLOR_RED)
    } else if promo.is_exhausted() {
        ("Habis", COLOR_RED)
    } else if !promo.has_started(now) {
        ("Terjadwal", COLOR_AMBER)
    } else {
        ("Aktif", COLOR_GREEN)
    }
}

impl PromoCodesPage {
    pub fn show(&mut self, ctx: &mut StateCtx, ui: &mut Ui) {
        if list_header::<PromoCode>(ctx, ui, "Kode Promo", Some("Tambah Kode Promo")) {
            self.form = Some(PromoCodeForm::default());
        }

        match ctx.state_mut::<ResourceList<PromoCode>>().take_outcome() {
            Some(MutationOutcome::Succeeded { .. }) => self.form = None,
            Some(MutationOutcome::Failed { errors, .. }) => {
                if let Some(form) = &mut self.form {
                    form.errors = errors;
                }
            }
            None => {}
        }

        let now = *ctx.state_mut::<Time>().as_ref();
        let list = ctx.state_mut::<ResourceList<PromoCode>>();
        let usable = list.items.iter().filter(|promo| promo.is_usable(now)).count();
        ui.label(format!("{usable} dari {} kode promo dapat dipakai saat ini.", list.items.len()));
        ui.add_space(4.0);

        let action = self.table.show(ui, &list.items).map(|row| row.action);
        match action {
            Some(PromoAction::Toggle(id)) => resources::toggle_promo_code(ctx, id),
            Some(PromoAction::Edit(id)) => {
                self.form = list.find(id).map(PromoCodeForm::edit);
            }
            Some(PromoAction::Delete(id)) => {
                self.pending_delete = list
                    .find(id)
                    .map(|promo| PendingDelete::new(id, promo.code.clone()));
            }
            None => {}
        }

        let egui_ctx = ui.ctx().clone();
        self.form_dialog(ctx, &egui_ctx);
        confirm_delete::<PromoCode>(ctx, &egui_ctx, &mut self.pending_delete);
    }

    fn form_dialog(&mut self, ctx: &mut StateCtx, egui_ctx: &egui::Context) {
        let Some(form) = &mut self.form else {
            return;
        };

        let saving = ctx.state_mut::<ResourceList<PromoCode>>().is_mutating();
        let title = if form.editing.is_some() {
            "Ubah Kode Promo"
        } else {
            "Tambah Kode Promo"
        };

        let mut open = true;
        let footer = form_window(egui_ctx, title, &mut open, |ui| {
            labeled_text(ui, "Kode", &mut form.code, &form.errors, "code");
            labeled_text(ui, "Deskripsi", &mut form.description, &form.errors, "description");

            ui.label("Jenis diskon");
            ui.horizontal(|ui| {
                for kind in DiscountType::ALL {
                    ui.radio_value(&mut form.discount_type, kind, kind.label());
                }
            });
            let value_label = match form.discount_type {
                DiscountType::Percentage => "Nilai diskon (%)",
                DiscountType::Fixed => "Nilai diskon (Rp)",
            };
            labeled_text(ui, value_label, &mut form.discount_value, &form.errors, "discount_value");
            money_field(ui, "Minimal belanja", &mut form.min_purchase, &form.errors, "min_purchase");
            if form.discount_type == DiscountType::Percentage {
                money_field(ui, "Maksimal diskon", &mut form.max_discount, &form.errors, "max_discount");
            }
            labeled_text(ui, "Batas pemakaian (kosong = tanpa batas)", &mut form.usage_limit, &form.errors, "usage_limit");
            labeled_text(ui, "Mulai (YYYY-MM-DD)", &mut form.starts_at, &form.errors, "starts_at");
            labeled_text(ui, "Berakhir (YYYY-MM-DD)", &mut form.expires_at, &form.errors, "expires_at");
            ui.checkbox(&mut form.is_active, "Aktif");

            form_footer(ui, saving)
        })
        .flatten();

        match footer {
            Some(true) => match form.validate() {
                Ok(payload) => {
                    let editing = form.editing;
                    submit::<PromoCode, _>(ctx, editing, payload);
                }
                Err(errors) => form.errors = errors,
            },
            Some(false) => self.form = None,
            None if !open => self.form = None,
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn promo() -> PromoCode {
        PromoCode {
            id: 1,
            code: "NIKAH10".to_string(),
            description: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: 10,
            min_purchase: 0,
            max_discount: None,
            usage_limit: Some(5),
            used_count: 0,
            starts_at: None,
            expires_at: Some(Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap()),
            is_active: true,
        }
    }

    #[test]
    fn status_follows_activity_expiry_and_quota() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(promo_status(&promo(), now).0, "Aktif");

        let inactive = PromoCode {
            is_active: false,
            ..promo()
        };
        assert_eq!(promo_status(&inactive, now).0, "Nonaktif");

        let later = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(promo_status(&promo(), later).0, "Kedaluwarsa");

        let used_up = PromoCode {
            used_count: 5,
            ..promo()
        };
        assert_eq!(promo_status(&used_up, now).0, "Habis");
    }
}

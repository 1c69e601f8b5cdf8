use egui::{RichText, Ui};
use egui_extras::Column as Width;
use vowly_business::forms::InvitationTemplateForm;
use vowly_business::models::{InvitationTemplate, format_rupiah};
use vowly_business::resources::{MutationOutcome, ResourceList};
use vowly_business::table::Column;
use vowly_states::StateCtx;

use super::{
    PendingDelete, confirm_delete, edit_delete_buttons, form_footer, list_header, status_text,
    submit,
};
use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_MUTED};
use crate::widgets::{DataColumn, DataTable, field_error, form_window, labeled_text, money_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateAction {
    Edit(u64),
    Delete(u64),
}

pub struct InvitationTemplatesPage {
    table: DataTable<InvitationTemplate, TemplateAction>,
    form: Option<InvitationTemplateForm>,
    pending_delete: Option<PendingDelete>,
}

impl Default for InvitationTemplatesPage {
    fn default() -> Self {
        let table = DataTable::new("invitation_templates_table", "name")
            .search_placeholder("Cari template...")
            .column(DataColumn::with_cell(
                Column::field("name").header("Nama Template"),
                |ui, template: &InvitationTemplate| {
                    ui.horizontal(|ui| {
                        ui.label(&template.name);
                        if template.is_premium {
                            ui.label(RichText::new("Premium").small().color(COLOR_AMBER));
                        }
                    });
                    None
                },
            ))
            .column(DataColumn::new(Column::field("theme").header("Tema")))
            .column(DataColumn::with_cell(
                Column::field("price").header("Harga"),
                |ui, template: &InvitationTemplate| {
                    if template.price == 0 {
                        ui.label("Gratis");
                    } else {
                        ui.label(format_rupiah(template.price));
                    }
                    None
                },
            ))
            .column(DataColumn::new(Column::field("usage_count").header("Dipakai")))
            .column(DataColumn::with_cell(
                Column::field("is_active").header("Status"),
                |ui, template: &InvitationTemplate| {
                    if template.is_active {
                        status_text(ui, "Aktif", COLOR_GREEN);
                    } else {
                        status_text(ui, "Nonaktif", COLOR_MUTED);
                    }
                    None
                },
            ))
            .column(
                DataColumn::with_cell(
                    Column::display("actions").header("Aksi"),
                    |ui, template: &InvitationTemplate| {
                        if let Some(url) = &template.preview_url {
                            ui.hyperlink_to("👁", url);
                        }
                        edit_delete_buttons(
                            ui,
                            TemplateAction::Edit(template.id),
                            TemplateAction::Delete(template.id),
                        )
                    },
                )
                .width(Width::exact(180.0)),
            );

        Self {
            table,
            form: None,
            pending_delete: None,
        }
    }
}

impl InvitationTemplatesPage {
    pub fn show(&mut self, ctx: &mut StateCtx, ui: &mut Ui) {
        if list_header::<InvitationTemplate>(
            ctx,
            ui,
            "Template Undangan",
            Some("Tambah Template"),
        ) {
            self.form = Some(InvitationTemplateForm::default());
        }

        match ctx
            .state_mut::<ResourceList<InvitationTemplate>>()
            .take_outcome()
        {
            Some(MutationOutcome::Succeeded { .. }) => self.form = None,
            Some(MutationOutcome::Failed { errors, .. }) => {
                if let Some(form) = &mut self.form {
                    form.errors = errors;
                }
            }
            None => {}
        }

        let list = ctx.state_mut::<ResourceList<InvitationTemplate>>();
        if let Some(row) = self.table.show(ui, &list.items) {
            match row.action {
                TemplateAction::Edit(id) => {
                    self.form = list.find(id).map(InvitationTemplateForm::edit);
                }
                TemplateAction::Delete(id) => {
                    self.pending_delete = list
                        .find(id)
                        .map(|template| PendingDelete::new(id, template.name.clone()));
                }
            }
        }

        let egui_ctx = ui.ctx().clone();
        self.form_dialog(ctx, &egui_ctx);
        confirm_delete::<InvitationTemplate>(ctx, &egui_ctx, &mut self.pending_delete);
    }

    fn form_dialog(&mut self, ctx: &mut StateCtx, egui_ctx: &egui::Context) {
        let Some(form) = &mut self.form else {
            return;
        };

        let saving = ctx
            .state_mut::<ResourceList<InvitationTemplate>>()
            .is_mutating();
        let title = if form.editing.is_some() {
            "Ubah Template"
        } else {
            "Tambah Template"
        };

        let mut open = true;
        let footer = form_window(egui_ctx, title, &mut open, |ui| {
            labeled_text(ui, "Nama", &mut form.name, &form.errors, "name");
            labeled_text(ui, "Slug (kosongkan untuk otomatis)", &mut form.slug, &form.errors, "slug");
            labeled_text(ui, "Tema", &mut form.theme, &form.errors, "theme");
            money_field(ui, "Harga", &mut form.price, &form.errors, "price");
            labeled_text(ui, "URL pratinjau", &mut form.preview_url, &form.errors, "preview_url");

            ui.checkbox(&mut form.is_premium, "Premium");
            ui.checkbox(&mut form.is_active, "Aktif");
            field_error(ui, &form.errors, "is_active");

            form_footer(ui, saving)
        })
        .flatten();

        match footer {
            Some(true) => match form.validate() {
                Ok(payload) => {
                    let editing = form.editing;
                    submit::<InvitationTemplate, _>(ctx, editing, payload);
                }
                Err(errors) => form.errors = errors,
            },
            Some(false) => self.form = None,
            None if !open => self.form = None,
            None => {}
        }
    }
}

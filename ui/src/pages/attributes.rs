use egui::Ui;
use egui_extras::Column as Width;
use vowly_business::forms::AttributeForm;
use vowly_business::models::Attribute;
use vowly_business::resources::{MutationOutcome, ResourceList};
use vowly_business::table::Column;
use vowly_states::StateCtx;

use super::{
    PendingDelete, confirm_delete, edit_delete_buttons, form_footer, list_header, submit,
};
use crate::widgets::{DataColumn, DataTable, form_window, labeled_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttributeAction {
    Edit(u64),
    Delete(u64),
}

pub struct AttributesPage {
    table: DataTable<Attribute, AttributeAction>,
    form: Option<AttributeForm>,
    pending_delete: Option<PendingDelete>,
}

impl Default for AttributesPage {
    fn default() -> Self {
        let table = DataTable::new("attributes_table", "name")
            .search_placeholder("Cari atribut...")
            .column(DataColumn::new(Column::field("name").header("Nama")))
            .column(
                DataColumn::new(Column::field("values").header("Nilai").sortable(false))
                    .width(Width::remainder().at_least(160.0)),
            )
            .column(DataColumn::new(
                Column::field("values_count").header("Jumlah Nilai"),
            ))
            .column(
                DataColumn::with_cell(Column::display("actions").header("Aksi"), |ui, attribute: &Attribute| {
                    edit_delete_buttons(
                        ui,
                        AttributeAction::Edit(attribute.id),
                        AttributeAction::Delete(attribute.id),
                    )
                })
                .width(Width::exact(150.0)),
            );

        Self {
            table,
            form: None,
            pending_delete: None,
        }
    }
}

impl AttributesPage {
    pub fn show(&mut self, ctx: &mut StateCtx, ui: &mut Ui) {
        if list_header::<Attribute>(ctx, ui, "Atribut", Some("Tambah Atribut")) {
            self.form = Some(AttributeForm::default());
        }

        match ctx.state_mut::<ResourceList<Attribute>>().take_outcome() {
            Some(MutationOutcome::Succeeded { .. }) => self.form = None,
            Some(MutationOutcome::Failed { errors, .. }) => {
                if let Some(form) = &mut self.form {
                    form.errors = errors;
                }
            }
            None => {}
        }

        let list = ctx.state_mut::<ResourceList<Attribute>>();
        if let Some(row) = self.table.show(ui, &list.items) {
            match row.action {
                AttributeAction::Edit(id) => {
                    self.form = list.find(id).map(AttributeForm::edit);
                }
                AttributeAction::Delete(id) => {
                    self.pending_delete = list
                        .find(id)
                        .map(|attribute| PendingDelete::new(id, attribute.name.clone()));
                }
            }
        }

        let egui_ctx = ui.ctx().clone();
        self.form_dialog(ctx, &egui_ctx);
        confirm_delete::<Attribute>(ctx, &egui_ctx, &mut self.pending_delete);
    }

    fn form_dialog(&mut self, ctx: &mut StateCtx, egui_ctx: &egui::Context) {
        let Some(form) = &mut self.form else {
            return;
        };

        let saving = ctx.state_mut::<ResourceList<Attribute>>().is_mutating();
        let title = if form.editing.is_some() {
            "Ubah Atribut"
        } else {
            "Tambah Atribut"
        };

        let mut open = true;
        let footer = form_window(egui_ctx, title, &mut open, |ui| {
            labeled_text(ui, "Nama", &mut form.name, &form.errors, "name");
            labeled_text(
                ui,
                "Nilai (pisahkan dengan koma, mis. A5, A4, DL)",
                &mut form.values,
                &form.errors,
                "values",
            );
            form_footer(ui, saving)
        })
        .flatten();

        match footer {
            Some(true) => match form.validate() {
                Ok(payload) => {
                    let editing = form.editing;
                    submit::<Attribute, _>(ctx, editing, payload);
                }
                Err(errors) => form.errors = errors,
            },
            Some(false) => self.form = None,
            None if !open => self.form = None,
            None => {}
        }
    }
}

use egui::Ui;
use egui_extras::Column as Width;
use vowly_business::forms::CategoryForm;
use vowly_business::models::Category;
use vowly_business::resources::{MutationOutcome, ResourceList};
use vowly_business::table::{Column, ViewMode};
use vowly_states::StateCtx;

use super::{
    PendingDelete, confirm_delete, edit_delete_buttons, form_footer, list_header, submit,
};
use crate::widgets::{DataColumn, DataTable, field_error, form_window, labeled_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CategoryAction {
    Edit(u64),
    Delete(u64),
}

pub struct CategoriesPage {
    table: DataTable<Category, CategoryAction>,
    form: Option<CategoryForm>,
    pending_delete: Option<PendingDelete>,
}

impl Default for CategoriesPage {
    fn default() -> Self {
        let table = DataTable::new("categories_table", "name")
            .search_placeholder("Cari kategori...")
            .column(DataColumn::new(Column::field("name").header("Nama")))
            .column(DataColumn::new(Column::field("slug").header("Slug")))
            .column(DataColumn::new(
                Column::field("products_count").header("Jumlah Produk"),
            ))
            .column(DataColumn::new(Column::field("created_at").header("Dibuat")))
            .column(
                DataColumn::with_cell(Column::display("actions").header("Aksi"), |ui, category: &Category| {
                    edit_delete_buttons(
                        ui,
                        CategoryAction::Edit(category.id),
                        CategoryAction::Delete(category.id),
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

impl CategoriesPage {
    pub fn view_mode(&self) -> ViewMode {
        self.table.view_mode()
    }

    pub fn show(&mut self, ctx: &mut StateCtx, ui: &mut Ui) {
        if list_header::<Category>(ctx, ui, "Kategori", Some("Tambah Kategori")) {
            self.form = Some(CategoryForm::default());
        }

        match ctx.state_mut::<ResourceList<Category>>().take_outcome() {
            Some(MutationOutcome::Succeeded { .. }) => self.form = None,
            Some(MutationOutcome::Failed { errors, .. }) => {
                if let Some(form) = &mut self.form {
                    form.errors = errors;
                }
            }
            None => {}
        }

        let list = ctx.state_mut::<ResourceList<Category>>();
        if let Some(row) = self.table.show(ui, &list.items) {
            match row.action {
                CategoryAction::Edit(id) => {
                    self.form = list.find(id).map(CategoryForm::edit);
                }
                CategoryAction::Delete(id) => {
                    self.pending_delete = list
                        .find(id)
                        .map(|category| PendingDelete::new(id, category.name.clone()));
                }
            }
        }

        let egui_ctx = ui.ctx().clone();
        self.form_dialog(ctx, &egui_ctx);
        confirm_delete::<Category>(ctx, &egui_ctx, &mut self.pending_delete);
    }

    fn form_dialog(&mut self, ctx: &mut StateCtx, egui_ctx: &egui::Context) {
        let Some(form) = &mut self.form else {
            return;
        };

        let list = ctx.state_mut::<ResourceList<Category>>();
        let saving = list.is_mutating();
        let title = if form.editing.is_some() {
            "Ubah Kategori"
        } else {
            "Tambah Kategori"
        };

        let mut open = true;
        let footer = form_window(egui_ctx, title, &mut open, |ui| {
            labeled_text(ui, "Nama", &mut form.name, &form.errors, "name");
            labeled_text(ui, "Slug (kosongkan untuk otomatis)", &mut form.slug, &form.errors, "slug");

            ui.label("Deskripsi");
            ui.add(egui::TextEdit::multiline(&mut form.description).desired_rows(3));
            ui.add_space(4.0);

            ui.label("Kategori induk");
            let selected = form
                .parent_id
                .and_then(|id| list.find(id))
                .map(|category| category.name.clone())
                .unwrap_or_else(|| "Tidak ada".to_string());
            egui::ComboBox::from_id_salt("category_parent")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut form.parent_id, None, "Tidak ada");
                    for category in list.items.iter().filter(|c| Some(c.id) != form.editing) {
                        ui.selectable_value(&mut form.parent_id, Some(category.id), &category.name);
                    }
                });
            field_error(ui, &form.errors, "parent_id");

            form_footer(ui, saving)
        })
        .flatten();

        match footer {
            Some(true) => match form.validate() {
                Ok(payload) => {
                    let editing = form.editing;
                    submit::<Category, _>(ctx, editing, payload);
                }
                Err(errors) => form.errors = errors,
            },
            Some(false) => self.form = None,
            None if !open => self.form = None,
            None => {}
        }
    }
}

//! Produk page with the three-step product editor.

use egui::{Grid, RichText, Ui};
use egui_extras::Column as Width;
use vowly_business::FieldErrors;
use vowly_business::forms::{ProductForm, ProductStep, VariantDraft, parse_amount};
use vowly_business::models::{Attribute, Category, Product, ProductType, format_rupiah};
use vowly_business::resources::{self, MutationOutcome, ResourceList};
use vowly_business::table::Column;
use vowly_states::StateCtx;

use super::{
    PendingDelete, confirm_delete, edit_delete_buttons, list_header, status_text, submit,
};
use crate::utils::colors::{COLOR_GREEN, COLOR_MUTED, COLOR_RED};
use crate::widgets::{
    DataColumn, DataTable, PageRequest, field_error, form_window, labeled_text, money_field,
    server_pager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProductAction {
    Edit(u64),
    Delete(u64),
}

/// Button pressed in the editor footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorStep {
    Back,
    Next,
    Save,
    Cancel,
}

pub struct ProductsPage {
    table: DataTable<Product, ProductAction>,
    server_search: String,
    form: Option<ProductForm>,
    pending_delete: Option<PendingDelete>,
}

impl Default for ProductsPage {
    fn default() -> Self {
        let table = DataTable::new("products_table", "name")
            .search_placeholder("Saring nama produk di halaman ini...")
            .column(DataColumn::new(Column::field("name").header("Nama Produk")))
            .column(DataColumn::new(Column::field("category").header("Kategori")))
            .column(DataColumn::new(Column::field("product_type").header("Jenis")))
            .column(DataColumn::with_cell(
                Column::field("price").header("Harga"),
                |ui, product: &Product| {
                    ui.label(product.price_label());
                    None
                },
            ))
            .column(DataColumn::new(Column::field("stock").header("Stok")))
            .column(DataColumn::new(Column::field("variants").header("Varian")))
            .column(DataColumn::with_cell(
                Column::field("is_active").header("Status"),
                |ui, product: &Product| {
                    if product.is_active {
                        status_text(ui, "Aktif", COLOR_GREEN);
                    } else {
                        status_text(ui, "Draf", COLOR_MUTED);
                    }
                    None
                },
            ))
            .column(
                DataColumn::with_cell(
                    Column::display("actions").header("Aksi"),
                    |ui, product: &Product| {
                        edit_delete_buttons(
                            ui,
                            ProductAction::Edit(product.id),
                            ProductAction::Delete(product.id),
                        )
                    },
                )
                .width(Width::exact(150.0)),
            );

        Self {
            table,
            server_search: String::new(),
            form: None,
            pending_delete: None,
        }
    }
}

impl ProductsPage {
    pub fn show(&mut self, ctx: &mut StateCtx, ui: &mut Ui) {
        if list_header::<Product>(ctx, ui, "Produk", Some("Tambah Produk")) {
            self.form = Some(ProductForm::default());
        }

        match ctx.state_mut::<ResourceList<Product>>().take_outcome() {
            Some(MutationOutcome::Succeeded { .. }) => self.form = None,
            Some(MutationOutcome::Failed { errors, .. }) => {
                if let Some(form) = &mut self.form {
                    form.errors.clear();
                    form.apply_server_errors(&errors);
                }
            }
            None => {}
        }

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.server_search)
                    .hint_text("Cari produk di server...")
                    .id_salt("products_server_search"),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Cari").clicked() || submitted {
                resources::search::<Product>(ctx, self.server_search.trim());
            }
        });
        ui.add_space(4.0);

        let list = ctx.state_mut::<ResourceList<Product>>();
        let loading = list.status.is_loading();
        let meta = list.meta;
        match self.table.show(ui, &list.items).map(|row| row.action) {
            Some(ProductAction::Edit(id)) => {
                self.form = list.find(id).map(ProductForm::edit);
            }
            Some(ProductAction::Delete(id)) => {
                self.pending_delete = list
                    .find(id)
                    .map(|product| PendingDelete::new(id, product.name.clone()));
            }
            None => {}
        }

        match server_pager(ui, meta.as_ref(), loading) {
            Some(PageRequest::Prev) => resources::prev_page::<Product>(ctx),
            Some(PageRequest::Next) => resources::next_page::<Product>(ctx),
            None => {}
        }

        let egui_ctx = ui.ctx().clone();
        self.editor(ctx, &egui_ctx);
        confirm_delete::<Product>(ctx, &egui_ctx, &mut self.pending_delete);
    }

    fn editor(&mut self, ctx: &mut StateCtx, egui_ctx: &egui::Context) {
        let Some(form) = &mut self.form else {
            return;
        };

        // The editor picks categories and attribute values from their lists.
        resources::ensure_fresh::<Category>(ctx);
        resources::ensure_fresh::<Attribute>(ctx);
        let categories = ctx.state_mut::<ResourceList<Category>>().items.clone();
        let attributes = ctx.state_mut::<ResourceList<Attribute>>().items.clone();
        let saving = ctx.state_mut::<ResourceList<Product>>().is_mutating();

        let title = if form.editing.is_some() {
            "Ubah Produk"
        } else {
            "Tambah Produk"
        };

        let mut open = true;
        let pressed = form_window(egui_ctx, title, &mut open, |ui| {
            step_indicator(ui, form.step);
            ui.separator();
            match form.step {
                ProductStep::Basic => basic_step(ui, form, &categories),
                ProductStep::Variants => variants_step(ui, form, &attributes),
                ProductStep::Review => review_step(ui, form, &categories),
            }
            editor_footer(ui, form.step, saving)
        })
        .flatten();

        match pressed {
            Some(EditorStep::Back) => form.back(),
            Some(EditorStep::Next) => {
                form.next();
            }
            Some(EditorStep::Save) => match form.validate() {
                Ok(payload) => {
                    let editing = form.editing;
                    submit::<Product, _>(ctx, editing, payload);
                }
                Err(errors) => {
                    form.errors.clear();
                    form.apply_server_errors(&errors);
                }
            },
            Some(EditorStep::Cancel) => self.form = None,
            None if !open => self.form = None,
            None => {}
        }
    }
}

fn step_indicator(ui: &mut Ui, current: ProductStep) {
    ui.horizontal(|ui| {
        for (i, step) in ProductStep::ALL.into_iter().enumerate() {
            let text = format!("{}. {}", i + 1, step.title());
            if step == current {
                ui.label(RichText::new(text).strong().underline());
            } else {
                ui.weak(text);
            }
            if step != ProductStep::Review {
                ui.weak("›");
            }
        }
    });
}

fn basic_step(ui: &mut Ui, form: &mut ProductForm, categories: &[Category]) {
    labeled_text(ui, "Nama", &mut form.name, &form.errors, "name");
    labeled_text(ui, "Slug (kosongkan untuk otomatis)", &mut form.slug, &form.errors, "slug");

    ui.label("Deskripsi");
    ui.add(egui::TextEdit::multiline(&mut form.description).desired_rows(3));
    field_error(ui, &form.errors, "description");
    ui.add_space(4.0);

    ui.label("Jenis produk");
    ui.horizontal(|ui| {
        for kind in ProductType::ALL {
            ui.radio_value(&mut form.product_type, kind, kind.label());
        }
    });
    ui.add_space(4.0);

    ui.label("Kategori");
    let selected = form
        .category_id
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Pilih kategori".to_string());
    egui::ComboBox::from_id_salt("product_category")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for category in categories {
                ui.selectable_value(&mut form.category_id, Some(category.id), &category.name);
            }
        });
    field_error(ui, &form.errors, "category_id");
    ui.add_space(4.0);

    money_field(ui, "Harga dasar", &mut form.base_price, &form.errors, "base_price");
    ui.checkbox(&mut form.is_active, "Tampilkan di toko");
}

fn variants_step(ui: &mut Ui, form: &mut ProductForm, attributes: &[Attribute]) {
    field_error(ui, &form.errors, "variants");

    let mut remove = None;
    for (i, variant) in form.variants.iter_mut().enumerate() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.strong(format!("Varian {}", i + 1));
                if ui.small_button("🗑").clicked() {
                    remove = Some(i);
                }
            });
            variant_fields(ui, i, variant, &form.errors, attributes);
        });
        ui.add_space(4.0);
    }
    if let Some(i) = remove {
        form.remove_variant(i);
    }

    if ui.button("➕ Tambah Varian").clicked() {
        form.add_variant();
    }
}

fn variant_fields(
    ui: &mut Ui,
    index: usize,
    variant: &mut VariantDraft,
    errors: &FieldErrors,
    attributes: &[Attribute],
) {
    Grid::new(("variant_fields", index))
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("SKU");
            ui.vertical(|ui| {
                ui.text_edit_singleline(&mut variant.sku);
                field_error(ui, errors, &format!("variants.{index}.sku"));
            });
            ui.end_row();

            ui.label("Nama");
            ui.text_edit_singleline(&mut variant.name);
            ui.end_row();

            ui.label("Harga");
            ui.vertical(|ui| {
                ui.text_edit_singleline(&mut variant.price);
                field_error(ui, errors, &format!("variants.{index}.price"));
            });
            ui.end_row();

            ui.label("Stok");
            ui.vertical(|ui| {
                ui.text_edit_singleline(&mut variant.stock);
                field_error(ui, errors, &format!("variants.{index}.stock"));
            });
            ui.end_row();

            for attribute in attributes {
                ui.label(&attribute.name);
                let current = variant
                    .attributes
                    .iter()
                    .position(|(name, _)| *name == attribute.name);
                let selected = current
                    .map(|pos| variant.attributes[pos].1.clone())
                    .unwrap_or_else(|| "-".to_string());
                let mut choice = None;
                egui::ComboBox::from_id_salt(("variant_attribute", index, attribute.id))
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        if ui.selectable_label(current.is_none(), "-").clicked() {
                            choice = Some(None);
                        }
                        for value in &attribute.values {
                            if ui.selectable_label(false, value.as_str()).clicked() {
                                choice = Some(Some(value.clone()));
                            }
                        }
                    });
                match (choice, current) {
                    (Some(Some(value)), Some(pos)) => variant.attributes[pos].1 = value,
                    (Some(Some(value)), None) => {
                        variant.attributes.push((attribute.name.clone(), value));
                    }
                    (Some(None), Some(pos)) => {
                        variant.attributes.remove(pos);
                    }
                    _ => {}
                }
                ui.end_row();
            }
        });
}

fn review_step(ui: &mut Ui, form: &ProductForm, categories: &[Category]) {
    let category = form
        .category_id
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.as_str())
        .unwrap_or("-");
    let base_price = parse_amount(&form.base_price)
        .map(format_rupiah)
        .unwrap_or_else(|| form.base_price.clone());

    Grid::new("product_review")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in [
                ("Nama", form.name.as_str()),
                ("Jenis", form.product_type.label()),
                ("Kategori", category),
                ("Harga dasar", base_price.as_str()),
                ("Status", if form.is_active { "Aktif" } else { "Draf" }),
            ] {
                ui.strong(label);
                ui.label(value);
                ui.end_row();
            }
        });

    ui.separator();
    ui.strong(format!("{} varian", form.variants.len()));
    for variant in &form.variants {
        let attributes: Vec<String> = variant
            .attributes
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        ui.label(format!(
            "{} · {} · stok {} {}",
            variant.sku.trim().to_uppercase(),
            variant.price,
            variant.stock,
            attributes.join(", ")
        ));
    }

    if !form.errors.is_empty() {
        ui.add_space(4.0);
        for (field, messages) in form.errors.iter() {
            for message in messages {
                ui.colored_label(COLOR_RED, format!("{field}: {message}"));
            }
        }
    }
}

fn editor_footer(ui: &mut Ui, step: ProductStep, saving: bool) -> Option<EditorStep> {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let mut pressed = None;
        if step != ProductStep::Basic && ui.button("◀ Kembali").clicked() {
            pressed = Some(EditorStep::Back);
        }
        if step == ProductStep::Review {
            if ui.add_enabled(!saving, egui::Button::new("💾 Simpan")).clicked() {
                pressed = Some(EditorStep::Save);
            }
        } else if ui.button("Lanjut ▶").clicked() {
            pressed = Some(EditorStep::Next);
        }
        if ui.button("Batal").clicked() {
            pressed = Some(EditorStep::Cancel);
        }
        if saving {
            ui.spinner();
        }
        pressed
    })
    .inner
}

use egui::Ui;
use egui_extras::Column as Width;
use vowly_business::models::{ModerationStatus, UserContent};
use vowly_business::resources::{self, ResourceList};
use vowly_business::table::{Column, Paginator};
use vowly_states::StateCtx;

use super::{PendingDelete, confirm_delete, list_header, status_text};
use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};
use crate::widgets::{DataColumn, DataTable, local_pager};

const CONTENTS_PER_PAGE: usize = 10;
const EXCERPT_CHARS: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentAction {
    Moderate(u64, ModerationStatus),
    Delete(u64),
}

fn moderation_color(status: ModerationStatus) -> egui::Color32 {
    match status {
        ModerationStatus::Pending => COLOR_AMBER,
        ModerationStatus::Approved => COLOR_GREEN,
        ModerationStatus::Rejected => COLOR_RED,
    }
}

pub struct UserContentsPage {
    table: DataTable<UserContent, ContentAction>,
    paginator: Paginator,
    /// `None` shows every status.
    status_filter: Option<ModerationStatus>,
    pending_delete: Option<PendingDelete>,
}

impl Default for UserContentsPage {
    fn default() -> Self {
        let table = DataTable::new("user_contents_table", "title")
            .search_placeholder("Cari judul konten...")
            .empty_text("Belum ada konten pengguna")
            .column(DataColumn::new(Column::field("type").header("Jenis")))
            .column(DataColumn::new(Column::field("title").header("Judul")))
            .column(
                DataColumn::with_cell(
                    Column::field("content").header("Isi").sortable(false),
                    |ui, content: &UserContent| {
                        ui.label(content.excerpt(EXCERPT_CHARS))
                            .on_hover_text(&content.content);
                        if let Some(url) = &content.media_url {
                            ui.hyperlink_to("🖼", url);
                        }
                        None
                    },
                )
                .width(Width::remainder().at_least(200.0).clip(true)),
            )
            .column(DataColumn::new(Column::field("author_name").header("Pengirim")))
            .column(DataColumn::with_cell(
                Column::field("status").header("Status"),
                |ui, content: &UserContent| {
                    status_text(ui, content.status.label(), moderation_color(content.status));
                    None
                },
            ))
            .column(DataColumn::new(Column::field("created_at").header("Tanggal")))
            .column(
                DataColumn::with_cell(
                    Column::display("actions").header("Aksi"),
                    |ui, content: &UserContent| {
                        let mut action = None;
                        if content.status != ModerationStatus::Approved
                            && ui.small_button("✔ Setujui").clicked()
                        {
                            action = Some(ContentAction::Moderate(content.id, ModerationStatus::Approved));
                        }
                        if content.status != ModerationStatus::Rejected
                            && ui.small_button("✖ Tolak").clicked()
                        {
                            action = Some(ContentAction::Moderate(content.id, ModerationStatus::Rejected));
                        }
                        if ui.small_button("🗑 Hapus").clicked() {
                            action = Some(ContentAction::Delete(content.id));
                        }
                        action
                    },
                )
                .width(Width::exact(230.0)),
            );

        Self {
            table,
            paginator: Paginator::new(CONTENTS_PER_PAGE),
            status_filter: None,
            pending_delete: None,
        }
    }
}

impl UserContentsPage {
    pub fn show(&mut self, ctx: &mut StateCtx, ui: &mut Ui) {
        list_header::<UserContent>(ctx, ui, "Konten Pengguna", None);
        ctx.state_mut::<ResourceList<UserContent>>().take_outcome();

        ui.horizontal(|ui| {
            ui.label("Tampilkan:");
            let mut changed = ui
                .selectable_value(&mut self.status_filter, None, "Semua")
                .clicked();
            for status in [
                ModerationStatus::Pending,
                ModerationStatus::Approved,
                ModerationStatus::Rejected,
            ] {
                changed |= ui
                    .selectable_value(&mut self.status_filter, Some(status), status.label())
                    .clicked();
            }
            if changed {
                self.paginator.reset();
            }
        });
        ui.add_space(4.0);

        let list = ctx.state_mut::<ResourceList<UserContent>>();
        let rows: Vec<UserContent> = list
            .items
            .iter()
            .filter(|content| self.status_filter.is_none_or(|status| content.status == status))
            .cloned()
            .collect();
        self.paginator.clamp(rows.len());
        let page = self.paginator.slice(&rows);

        let action = self.table.show(ui, page).map(|row| row.action);
        local_pager(ui, &mut self.paginator, rows.len());

        match action {
            Some(ContentAction::Moderate(id, status)) => {
                resources::moderate_user_content(ctx, id, status);
            }
            Some(ContentAction::Delete(id)) => {
                self.pending_delete = rows
                    .iter()
                    .find(|content| content.id == id)
                    .map(|content| PendingDelete::new(id, content.title.clone()));
            }
            None => {}
        }

        let egui_ctx = ui.ctx().clone();
        confirm_delete::<UserContent>(ctx, &egui_ctx, &mut self.pending_delete);
    }
}

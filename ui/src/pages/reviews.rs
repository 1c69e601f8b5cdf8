use egui::{RichText, Ui};
use egui_extras::Column as Width;
use vowly_business::models::Review;
use vowly_business::resources::{self, ResourceList};
use vowly_business::table::{Column, Paginator};
use vowly_states::StateCtx;

use super::{PendingDelete, confirm_delete, list_header, status_text};
use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN};
use crate::widgets::{DataColumn, DataTable, local_pager};

const REVIEWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReviewAction {
    SetApproval(u64, bool),
    Delete(u64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ApprovalFilter {
    #[default]
    All,
    Pending,
    Approved,
}

impl ApprovalFilter {
    fn label(self) -> &'static str {
        match self {
            Self::All => "Semua",
            Self::Pending => "Menunggu",
            Self::Approved => "Disetujui",
        }
    }

    fn accepts(self, review: &Review) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !review.is_approved,
            Self::Approved => review.is_approved,
        }
    }
}

pub struct ReviewsPage {
    table: DataTable<Review, ReviewAction>,
    paginator: Paginator,
    approval: ApprovalFilter,
    pending_delete: Option<PendingDelete>,
}

impl Default for ReviewsPage {
    fn default() -> Self {
        let table = DataTable::new("reviews_table", "product_name")
            .search_placeholder("Cari produk...")
            .empty_text("Belum ada ulasan")
            .column(DataColumn::new(Column::field("product_name").header("Produk")))
            .column(DataColumn::new(Column::field("customer_name").header("Pelanggan")))
            .column(DataColumn::with_cell(
                Column::field("rating").header("Rating"),
                |ui, review: &Review| {
                    ui.label(RichText::new(review.stars()).color(COLOR_AMBER));
                    None
                },
            ))
            .column(
                DataColumn::with_cell(
                    Column::field("comment").header("Komentar").sortable(false),
                    |ui, review: &Review| {
                        ui.label(&review.comment).on_hover_text(&review.comment);
                        None
                    },
                )
                .width(Width::remainder().at_least(180.0).clip(true)),
            )
            .column(DataColumn::with_cell(
                Column::field("is_approved").header("Status"),
                |ui, review: &Review| {
                    let color = if review.is_approved { COLOR_GREEN } else { COLOR_AMBER };
                    status_text(ui, review.approval_label(), color);
                    None
                },
            ))
            .column(DataColumn::new(Column::field("created_at").header("Tanggal")))
            .column(
                DataColumn::with_cell(
                    Column::display("actions").header("Aksi"),
                    |ui, review: &Review| {
                        let mut action = None;
                        let label = if review.is_approved { "↩ Sembunyikan" } else { "✔ Setujui" };
                        if ui.small_button(label).clicked() {
                            action = Some(ReviewAction::SetApproval(review.id, !review.is_approved));
                        }
                        if ui.small_button("🗑 Hapus").clicked() {
                            action = Some(ReviewAction::Delete(review.id));
                        }
                        action
                    },
                )
                .width(Width::exact(190.0)),
            );

        Self {
            table,
            paginator: Paginator::new(REVIEWS_PER_PAGE),
            approval: ApprovalFilter::default(),
            pending_delete: None,
        }
    }
}

impl ReviewsPage {
    pub fn show(&mut self, ctx: &mut StateCtx, ui: &mut Ui) {
        list_header::<Review>(ctx, ui, "Ulasan", None);
        ctx.state_mut::<ResourceList<Review>>().take_outcome();

        ui.horizontal(|ui| {
            ui.label("Tampilkan:");
            for filter in [ApprovalFilter::All, ApprovalFilter::Pending, ApprovalFilter::Approved] {
                if ui
                    .selectable_value(&mut self.approval, filter, filter.label())
                    .clicked()
                {
                    self.paginator.reset();
                }
            }
        });
        ui.add_space(4.0);

        let list = ctx.state_mut::<ResourceList<Review>>();
        let rows: Vec<Review> = list
            .items
            .iter()
            .filter(|review| self.approval.accepts(review))
            .cloned()
            .collect();
        self.paginator.clamp(rows.len());
        let page = self.paginator.slice(&rows);

        let action = self.table.show(ui, page).map(|row| row.action);
        local_pager(ui, &mut self.paginator, rows.len());

        match action {
            Some(ReviewAction::SetApproval(id, approved)) => {
                resources::set_review_approval(ctx, id, approved);
            }
            Some(ReviewAction::Delete(id)) => {
                self.pending_delete = rows
                    .iter()
                    .find(|review| review.id == id)
                    .map(|review| PendingDelete::new(id, format!("ulasan dari {}", review.customer_name)));
            }
            None => {}
        }

        let egui_ctx = ui.ctx().clone();
        confirm_delete::<Review>(ctx, &egui_ctx, &mut self.pending_delete);
    }
}

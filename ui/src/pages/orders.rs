use egui::{Color32, Grid, RichText, Ui};
use egui_extras::Column as Width;
use vowly_business::models::{Order, OrderStatus, format_rupiah};
use vowly_business::resources::{self, ResourceList};
use vowly_business::table::Column;
use vowly_states::StateCtx;

use super::{list_header, status_text};
use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_MUTED, COLOR_RED};
use crate::widgets::{
    DataColumn, DataTable, PageRequest, confirm_dialog, form_window, server_pager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderAction {
    Detail(u64),
    SetStatus(u64, OrderStatus),
}

pub(super) fn status_color(status: OrderStatus) -> Color32 {
    match status {
        OrderStatus::Pending => COLOR_AMBER,
        OrderStatus::Paid | OrderStatus::Processing | OrderStatus::Shipped => {
            Color32::from_rgb(13, 110, 253)
        }
        OrderStatus::Completed => COLOR_GREEN,
        OrderStatus::Cancelled => COLOR_RED,
        OrderStatus::Unknown => COLOR_MUTED,
    }
}

pub(super) fn order_columns<A: 'static>() -> Vec<DataColumn<Order, A>> {
    vec![
        DataColumn::with_cell(
            Column::field("order_number").header("No. Pesanan"),
            |ui, order: &Order| {
                ui.label(RichText::new(&order.order_number).monospace());
                None
            },
        ),
        DataColumn::new(Column::field("customer_name").header("Pelanggan")),
        DataColumn::with_cell(
            Column::field("total_amount").header("Total"),
            |ui, order: &Order| {
                ui.label(format_rupiah(order.total_amount));
                None
            },
        ),
        DataColumn::with_cell(Column::field("status").header("Status"), |ui, order: &Order| {
            status_text(ui, order.status.label(), status_color(order.status));
            None
        }),
        DataColumn::new(Column::field("created_at").header("Tanggal")),
    ]
}

pub struct OrdersPage {
    table: DataTable<Order, OrderAction>,
    server_search: String,
    detail: Option<u64>,
    pending_cancel: Option<(u64, String)>,
}

impl Default for OrdersPage {
    fn default() -> Self {
        let mut table = DataTable::new("orders_table", "customer_name")
            .search_placeholder("Saring nama pelanggan di halaman ini...");
        for column in order_columns() {
            table = table.column(column);
        }
        let table = table.column(
            DataColumn::with_cell(Column::display("actions").header("Aksi"), |ui, order: &Order| {
                let mut action = None;
                if ui.small_button("🔍 Detail").clicked() {
                    action = Some(OrderAction::Detail(order.id));
                }
                let next = order.status.next_statuses();
                ui.add_enabled_ui(!next.is_empty(), |ui| {
                    ui.menu_button("Ubah Status", |ui| {
                        for status in next {
                            if ui.button(status.label()).clicked() {
                                action = Some(OrderAction::SetStatus(order.id, *status));
                                ui.close();
                            }
                        }
                    });
                });
                action
            })
            .width(Width::exact(200.0)),
        );

        Self {
            table,
            server_search: String::new(),
            detail: None,
            pending_cancel: None,
        }
    }
}

impl OrdersPage {
    pub fn show(&mut self, ctx: &mut StateCtx, ui: &mut Ui) {
        list_header::<Order>(ctx, ui, "Pesanan", None);
        // Orders have no dialogs waiting on mutation results.
        ctx.state_mut::<ResourceList<Order>>().take_outcome();

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.server_search)
                    .hint_text("Cari nomor pesanan, nama atau email...")
                    .id_salt("orders_server_search"),
            );
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Cari").clicked() || submitted {
                resources::search::<Order>(ctx, self.server_search.trim());
            }
        });
        ui.add_space(4.0);

        let list = ctx.state_mut::<ResourceList<Order>>();
        let loading = list.status.is_loading();
        let meta = list.meta;
        let action = self.table.show(ui, &list.items).map(|row| row.action);

        match action {
            Some(OrderAction::Detail(id)) => self.detail = Some(id),
            Some(OrderAction::SetStatus(id, OrderStatus::Cancelled)) => {
                self.pending_cancel = list
                    .find(id)
                    .map(|order| (id, order.order_number.clone()));
            }
            Some(OrderAction::SetStatus(id, status)) => {
                resources::update_order_status(ctx, id, status);
            }
            None => {}
        }

        match server_pager(ui, meta.as_ref(), loading) {
            Some(PageRequest::Prev) => resources::prev_page::<Order>(ctx),
            Some(PageRequest::Next) => resources::next_page::<Order>(ctx),
            None => {}
        }

        let egui_ctx = ui.ctx().clone();
        self.detail_window(ctx, &egui_ctx);
        self.cancel_dialog(ctx, &egui_ctx);
    }

    fn detail_window(&mut self, ctx: &mut StateCtx, egui_ctx: &egui::Context) {
        let Some(id) = self.detail else {
            return;
        };
        let list = ctx.state_mut::<ResourceList<Order>>();
        let Some(order) = list.find(id) else {
            self.detail = None;
            return;
        };

        let mut open = true;
        let title = format!("Pesanan {}", order.order_number);
        form_window(egui_ctx, &title, &mut open, |ui| {
            order_detail(ui, order);
        });
        if !open {
            self.detail = None;
        }
    }

    fn cancel_dialog(&mut self, ctx: &mut StateCtx, egui_ctx: &egui::Context) {
        let Some((id, number)) = &self.pending_cancel else {
            return;
        };

        let message = format!("Batalkan pesanan {number}?");
        match confirm_dialog(egui_ctx, "Batalkan Pesanan", &message, "Batalkan Pesanan") {
            Some(true) => {
                resources::update_order_status(ctx, *id, OrderStatus::Cancelled);
                self.pending_cancel = None;
            }
            Some(false) => self.pending_cancel = None,
            None => {}
        }
    }
}

fn order_detail(ui: &mut Ui, order: &Order) {
    Grid::new("order_detail_summary")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Pelanggan");
            ui.label(&order.customer_name);
            ui.end_row();

            ui.strong("Email");
            ui.label(&order.customer_email);
            ui.end_row();

            ui.strong("Status");
            status_text(ui, order.status.label(), status_color(order.status));
            ui.end_row();

            if let Some(code) = &order.promo_code {
                ui.strong("Kode Promo");
                ui.label(code);
                ui.end_row();
            }
        });

    ui.separator();

    Grid::new("order_detail_items")
        .num_columns(4)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Produk");
            ui.strong("Jumlah");
            ui.strong("Harga");
            ui.strong("Subtotal");
            ui.end_row();

            for item in &order.items {
                ui.label(&item.product_name);
                ui.label(item.quantity.to_string());
                ui.label(format_rupiah(item.unit_price));
                ui.label(format_rupiah(item.subtotal()));
                ui.end_row();
            }
        });

    ui.separator();

    if order.discount_amount > 0 {
        ui.label(format!("Diskon: -{}", format_rupiah(order.discount_amount)));
    }
    ui.label(RichText::new(format!("Total: {}", format_rupiah(order.total_amount))).strong());
}

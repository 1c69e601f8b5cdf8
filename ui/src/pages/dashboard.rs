use egui::{Frame, Margin, RichText, Ui};
use vowly_business::dashboard::{OrderStats, ProductSales, StatusCount, promo_usage_rate, top_products};
use vowly_business::models::{Order, PromoCode, format_rupiah};
use vowly_business::resources::{self, DashboardState, FetchStatus, ResourceList};
use vowly_business::table::Column;
use vowly_states::StateCtx;

use super::orders::{order_columns, status_color};
use super::status_text;
use crate::utils::colors::COLOR_MUTED;
use crate::widgets::{DataColumn, DataTable, fetch_error, page_toolbar};

const TOP_PRODUCTS: usize = 5;

pub struct DashboardPage {
    recent_orders: DataTable<Order>,
    status_counts: DataTable<StatusCount>,
    best_sellers: DataTable<ProductSales>,
}

impl Default for DashboardPage {
    fn default() -> Self {
        let mut recent_orders = DataTable::new("dashboard_recent_orders", "customer_name")
            .search_placeholder("Cari pelanggan...")
            .empty_text("Belum ada pesanan");
        for column in order_columns() {
            recent_orders = recent_orders.column(column);
        }

        let status_counts = DataTable::new("dashboard_status_counts", "status")
            .search_placeholder("Cari status...")
            .column(DataColumn::with_cell(
                Column::field("status").header("Status"),
                |ui, row: &StatusCount| {
                    status_text(ui, row.status.label(), status_color(row.status));
                    None
                },
            ))
            .column(DataColumn::new(Column::field("count").header("Jumlah")));

        let best_sellers = DataTable::new("dashboard_best_sellers", "product_name")
            .search_placeholder("Cari produk...")
            .empty_text("Belum ada penjualan")
            .column(DataColumn::new(Column::field("product_name").header("Produk")))
            .column(DataColumn::new(Column::field("quantity").header("Terjual")))
            .column(DataColumn::with_cell(
                Column::field("revenue").header("Pendapatan"),
                |ui, row: &ProductSales| {
                    ui.label(format_rupiah(row.revenue));
                    None
                },
            ));

        Self {
            recent_orders,
            status_counts,
            best_sellers,
        }
    }
}

impl DashboardPage {
    pub fn show(&mut self, ctx: &mut StateCtx, ui: &mut Ui) {
        if ctx.state_mut::<DashboardState>().status == FetchStatus::Idle {
            resources::refresh_dashboard(ctx);
        }
        resources::ensure_fresh::<PromoCode>(ctx);

        let dashboard = ctx.state_mut::<DashboardState>();
        let toolbar = page_toolbar(ui, "Dashboard", None, dashboard.status.is_loading());
        let retry = fetch_error(ui, &dashboard.status);
        if toolbar.refresh || retry {
            resources::refresh_dashboard(ctx);
            resources::refresh::<PromoCode>(ctx);
        }

        let Some(summary) = ctx.state_mut::<DashboardState>().summary.clone() else {
            if ctx.state_mut::<DashboardState>().status.is_loading() {
                ui.spinner();
            }
            return;
        };
        let promo_rate = promo_usage_rate(&ctx.state_mut::<ResourceList<PromoCode>>().items);

        let stats = OrderStats::from_orders(&summary.recent_orders);

        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "Total Pendapatan", &format_rupiah(summary.total_revenue));
            stat_card(ui, "Total Pesanan", &summary.total_orders.to_string());
            stat_card(ui, "Total Produk", &summary.total_products.to_string());
            stat_card(ui, "Total Pelanggan", &summary.total_customers.to_string());
            stat_card(ui, "Ulasan Menunggu", &summary.pending_reviews.to_string());
            stat_card(ui, "Konten Menunggu", &summary.pending_contents.to_string());
            stat_card(
                ui,
                "Rata-rata Pesanan",
                &format_rupiah(stats.average_order_value()),
            );
            stat_card(
                ui,
                "Pemakaian Kode Promo",
                &promo_rate.map_or_else(|| "-".to_string(), |rate| format!("{:.0}%", rate * 100.0)),
            );
        });
        ui.add_space(12.0);

        ui.heading("Pesanan per Status");
        ui.label(RichText::new("Dihitung dari pesanan terbaru.").small().color(COLOR_MUTED));
        self.status_counts.show(ui, &stats.status_counts());
        ui.add_space(12.0);

        ui.heading("Produk Terlaris");
        self.best_sellers
            .show(ui, &top_products(&summary.recent_orders, TOP_PRODUCTS));
        ui.add_space(12.0);

        ui.heading("Pesanan Terbaru");
        self.recent_orders.show(ui, &summary.recent_orders);
    }
}

fn stat_card(ui: &mut Ui, title: &str, value: &str) {
    Frame::group(ui.style())
        .inner_margin(Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_min_width(160.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(title).small().color(COLOR_MUTED));
                ui.label(RichText::new(value).heading().strong());
            });
        });
}

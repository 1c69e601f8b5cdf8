//! Admin pages. Each page owns its table (sort/filter survive page
//! switches) and its open dialogs; list data lives in `StateCtx`.

mod attributes;
mod categories;
mod dashboard;
mod invitation_templates;
mod orders;
mod products;
mod promo_codes;
mod reviews;
mod user_contents;

use egui::{RichText, Ui};
use serde::Serialize;
use vowly_business::resources::{self, ResourceList};
use vowly_business::AdminResource;
use vowly_states::StateCtx;

use crate::widgets::{confirm_dialog, fetch_error, notice_banner, page_toolbar};

pub use attributes::AttributesPage;
pub use categories::CategoriesPage;
pub use dashboard::DashboardPage;
pub use invitation_templates::InvitationTemplatesPage;
pub use orders::OrdersPage;
pub use products::ProductsPage;
pub use promo_codes::PromoCodesPage;
pub use reviews::ReviewsPage;
pub use user_contents::UserContentsPage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Dashboard,
    Products,
    Categories,
    Attributes,
    Orders,
    PromoCodes,
    Reviews,
    UserContents,
    InvitationTemplates,
}

impl Page {
    pub const ALL: [Self; 9] = [
        Self::Dashboard,
        Self::Products,
        Self::Categories,
        Self::Attributes,
        Self::Orders,
        Self::PromoCodes,
        Self::Reviews,
        Self::UserContents,
        Self::InvitationTemplates,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Produk",
            Self::Categories => "Kategori",
            Self::Attributes => "Atribut",
            Self::Orders => "Pesanan",
            Self::PromoCodes => "Kode Promo",
            Self::Reviews => "Ulasan",
            Self::UserContents => "Konten Pengguna",
            Self::InvitationTemplates => "Template Undangan",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "📊",
            Self::Products => "🎁",
            Self::Categories => "🗂",
            Self::Attributes => "🏷",
            Self::Orders => "🧾",
            Self::PromoCodes => "🎟",
            Self::Reviews => "⭐",
            Self::UserContents => "🖼",
            Self::InvitationTemplates => "💌",
        }
    }
}

/// Every page, kept alive for the lifetime of the app.
#[derive(Default)]
pub struct Pages {
    pub dashboard: DashboardPage,
    pub products: ProductsPage,
    pub categories: CategoriesPage,
    pub attributes: AttributesPage,
    pub orders: OrdersPage,
    pub promo_codes: PromoCodesPage,
    pub reviews: ReviewsPage,
    pub user_contents: UserContentsPage,
    pub invitation_templates: InvitationTemplatesPage,
}

impl Pages {
    pub fn show(&mut self, page: Page, ctx: &mut StateCtx, ui: &mut Ui) {
        match page {
            Page::Dashboard => self.dashboard.show(ctx, ui),
            Page::Products => self.products.show(ctx, ui),
            Page::Categories => self.categories.show(ctx, ui),
            Page::Attributes => self.attributes.show(ctx, ui),
            Page::Orders => self.orders.show(ctx, ui),
            Page::PromoCodes => self.promo_codes.show(ctx, ui),
            Page::Reviews => self.reviews.show(ctx, ui),
            Page::UserContents => self.user_contents.show(ctx, ui),
            Page::InvitationTemplates => self.invitation_templates.show(ctx, ui),
        }
    }
}

/// Fetches `T` when needed and draws the toolbar, notice and fetch error.
/// Returns whether the create button was clicked.
fn list_header<T: AdminResource>(
    ctx: &mut StateCtx,
    ui: &mut Ui,
    title: &str,
    create_label: Option<&str>,
) -> bool {
    resources::ensure_fresh::<T>(ctx);

    let list = ctx.state_mut::<ResourceList<T>>();
    let busy = list.status.is_loading() || list.is_mutating();
    let toolbar = page_toolbar(ui, title, create_label, busy);

    let dismissed = list
        .notice
        .as_ref()
        .is_some_and(|notice| notice_banner(ui, notice));
    if dismissed {
        list.dismiss_notice();
    }

    let retry = fetch_error(ui, &list.status);
    if toolbar.refresh || retry {
        resources::refresh::<T>(ctx);
    }

    toolbar.create
}

/// POST when `editing` is `None`, PUT otherwise.
fn submit<T, P>(ctx: &mut StateCtx, editing: Option<u64>, payload: P)
where
    T: AdminResource,
    P: Serialize + Send + Sync + 'static,
{
    match editing {
        Some(id) => resources::update::<T, P>(ctx, id, payload),
        None => resources::create::<T, P>(ctx, payload),
    }
}

/// Save/cancel row at the bottom of a form. `Some(true)` saves,
/// `Some(false)` cancels.
fn form_footer(ui: &mut Ui, saving: bool) -> Option<bool> {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let save = ui.add_enabled(!saving, egui::Button::new("💾 Simpan")).clicked();
        let cancel = ui.button("Batal").clicked();
        if saving {
            ui.spinner();
        }
        if save {
            Some(true)
        } else if cancel {
            Some(false)
        } else {
            None
        }
    })
    .inner
}

/// Edit and delete buttons for an actions cell.
fn edit_delete_buttons<A>(ui: &mut Ui, edit: A, delete: A) -> Option<A> {
    let mut action = None;
    if ui.small_button("✏ Ubah").clicked() {
        action = Some(edit);
    }
    if ui.small_button("🗑 Hapus").clicked() {
        action = Some(delete);
    }
    action
}

/// Colored text used for status columns.
fn status_text(ui: &mut Ui, text: &str, color: egui::Color32) {
    ui.label(RichText::new(text).color(color));
}

/// A delete waiting for confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingDelete {
    id: u64,
    label: String,
}

impl PendingDelete {
    fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Shows the confirmation for `pending` and issues the DELETE on confirm.
fn confirm_delete<T: AdminResource>(
    ctx: &mut StateCtx,
    egui_ctx: &egui::Context,
    pending: &mut Option<PendingDelete>,
) {
    let Some(target) = pending.as_ref() else {
        return;
    };

    let message = format!("Hapus \"{}\"? Tindakan ini tidak dapat dibatalkan.", target.label);
    match confirm_dialog(egui_ctx, "Konfirmasi Hapus", &message, "Hapus") {
        Some(true) => {
            resources::delete::<T>(ctx, target.id);
            *pending = None;
        }
        Some(false) => *pending = None,
        None => {}
    }
}

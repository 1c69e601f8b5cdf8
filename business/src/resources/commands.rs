//! Commands that start API work for a page.
//!
//! UI code calls these with the shared `StateCtx`; results come back through
//! the context's `Updater` and show up after the next `sync`.

use std::future::Future;

use chrono::Utc;
use log::info;
use serde::Serialize;
use vowly_states::StateCtx;

use crate::api::{self, AdminResource, ApiError, ApiResult, ListQuery, Mutation};
use crate::config::BusinessConfig;
use crate::models::{ModerationStatus, Order, OrderStatus, PromoCode, Review, UserContent};

use super::state::{DashboardState, ResourceList};

fn api_url(ctx: &mut StateCtx) -> String {
    ctx.state_mut::<BusinessConfig>().api_url()
}

/// Fetches the list for `T`, replacing any fetch already in flight.
pub fn refresh<T: AdminResource>(ctx: &mut StateCtx) {
    let per_page = ctx.state_mut::<BusinessConfig>().per_page;
    let api_url = api_url(ctx);

    let list = ctx.state_mut::<ResourceList<T>>();
    list.begin_fetch();

    let query = if T::PAGINATED {
        ListQuery {
            page: Some(list.page),
            per_page: Some(per_page),
            search: Some(list.search.clone()).filter(|s| !s.trim().is_empty()),
        }
    } else {
        ListQuery::default()
    };

    info!("Fetching {} ({query:?})", T::NAME);
    let updater = ctx.updater();
    ctx.spawn::<ResourceList<T>, _>(async move {
        let result = api::list::<T>(&api_url, &query).await;
        updater.update::<ResourceList<T>>(move |list| list.finish_fetch(result, Utc::now()));
    });
}

/// Fetches `T` on first use and after a successful mutation.
pub fn ensure_fresh<T: AdminResource>(ctx: &mut StateCtx) {
    if ctx.state_mut::<ResourceList<T>>().needs_fetch() {
        refresh::<T>(ctx);
    }
}

pub fn goto_page<T: AdminResource>(ctx: &mut StateCtx, page: u32) {
    ctx.state_mut::<ResourceList<T>>().page = page.max(1);
    refresh::<T>(ctx);
}

pub fn next_page<T: AdminResource>(ctx: &mut StateCtx) {
    let list = ctx.state_mut::<ResourceList<T>>();
    if let Some(meta) = list.meta.filter(|meta| meta.has_next()) {
        goto_page::<T>(ctx, meta.current_page + 1);
    }
}

pub fn prev_page<T: AdminResource>(ctx: &mut StateCtx) {
    let list = ctx.state_mut::<ResourceList<T>>();
    if let Some(meta) = list.meta.filter(|meta| meta.has_prev()) {
        goto_page::<T>(ctx, meta.current_page - 1);
    }
}

/// Sets the server-side search term and reloads from the first page.
pub fn search<T: AdminResource>(ctx: &mut StateCtx, term: impl Into<String>) {
    let list = ctx.state_mut::<ResourceList<T>>();
    list.search = term.into();
    list.page = 1;
    refresh::<T>(ctx);
}

fn message_or(message: String, fallback: impl FnOnce() -> String) -> String {
    if message.trim().is_empty() {
        fallback()
    } else {
        message
    }
}

/// Runs a mutation for `T`. Mutations never cancel each other.
fn mutate<T, F, Fut>(ctx: &mut StateCtx, request: F)
where
    T: AdminResource,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = ApiResult<String>> + Send + 'static,
{
    let future = request(api_url(ctx));
    ctx.state_mut::<ResourceList<T>>().begin_mutation();

    let updater = ctx.updater();
    ctx.spawn_detached(async move {
        let result = future.await;
        updater.update::<ResourceList<T>>(move |list| list.finish_mutation(result));
    });
}

/// POST a new record.
pub fn create<T, P>(ctx: &mut StateCtx, payload: P)
where
    T: AdminResource,
    P: Serialize + Send + Sync + 'static,
{
    mutate::<T, _, _>(ctx, move |api_url| async move {
        let Mutation { message, .. } = api::create::<T, P>(&api_url, &payload).await?;
        Ok::<_, ApiError>(message_or(message, || format!("Data {} berhasil dibuat.", T::NAME)))
    });
}

/// PUT the full record.
pub fn update<T, P>(ctx: &mut StateCtx, id: u64, payload: P)
where
    T: AdminResource,
    P: Serialize + Send + Sync + 'static,
{
    mutate::<T, _, _>(ctx, move |api_url| async move {
        let Mutation { message, .. } = api::update::<T, P>(&api_url, id, &payload).await?;
        Ok::<_, ApiError>(message_or(message, || format!("Data {} berhasil diperbarui.", T::NAME)))
    });
}

pub fn delete<T: AdminResource>(ctx: &mut StateCtx, id: u64) {
    mutate::<T, _, _>(ctx, move |api_url| async move {
        let message = api::delete::<T>(&api_url, id).await?;
        Ok::<_, ApiError>(message_or(message, || format!("Data {} berhasil dihapus.", T::NAME)))
    });
}

pub fn update_order_status(ctx: &mut StateCtx, id: u64, status: OrderStatus) {
    mutate::<Order, _, _>(ctx, move |api_url| async move {
        let Mutation { message, .. } = api::update_order_status(&api_url, id, status).await?;
        Ok::<_, ApiError>(message_or(message, || {
            format!("Status pesanan diubah menjadi {}.", status.label())
        }))
    });
}

pub fn toggle_promo_code(ctx: &mut StateCtx, id: u64) {
    mutate::<PromoCode, _, _>(ctx, move |api_url| async move {
        let Mutation { message, .. } = api::toggle_promo_code(&api_url, id).await?;
        Ok::<_, ApiError>(message_or(message, || "Status kode promo diperbarui.".to_string()))
    });
}

pub fn set_review_approval(ctx: &mut StateCtx, id: u64, is_approved: bool) {
    mutate::<Review, _, _>(ctx, move |api_url| async move {
        let Mutation { message, .. } = api::set_review_approval(&api_url, id, is_approved).await?;
        Ok::<_, ApiError>(message_or(message, || {
            if is_approved {
                "Ulasan disetujui.".to_string()
            } else {
                "Persetujuan ulasan dicabut.".to_string()
            }
        }))
    });
}

pub fn moderate_user_content(ctx: &mut StateCtx, id: u64, status: ModerationStatus) {
    mutate::<UserContent, _, _>(ctx, move |api_url| async move {
        let Mutation { message, .. } = api::moderate_user_content(&api_url, id, status).await?;
        Ok::<_, ApiError>(message_or(message, || {
            format!("Konten ditandai {}.", status.label().to_lowercase())
        }))
    });
}

pub fn refresh_dashboard(ctx: &mut StateCtx) {
    let api_url = api_url(ctx);
    ctx.state_mut::<DashboardState>().begin_fetch();

    let updater = ctx.updater();
    ctx.spawn::<DashboardState, _>(async move {
        let result = api::fetch_dashboard(&api_url).await;
        updater.update::<DashboardState>(move |state| state.finish_fetch(result, Utc::now()));
    });
}

//! Admin REST API client.
//!
//! Every function takes the API root (`BusinessConfig::api_url()`) and talks to
//! `{api_url}/admin/...`. Functions are async and Send, so commands can run them
//! through `StateCtx::spawn`; none of them touch state directly.

pub mod envelope;
mod error;

use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::{Client, RequestBuilder, Response};
use crate::models::{DashboardSummary, ModerationStatus, Order, OrderStatus, PromoCode, Review, UserContent};

pub use envelope::{ErrorEnvelope, FieldErrors, Listing, Mutation, PageMeta, Single};
pub use error::{ApiError, ApiResult};

/// A record type served under `/admin/{PATH}` with the usual CRUD verbs.
pub trait AdminResource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path segment below `/admin`, e.g. `promo-codes`.
    const PATH: &'static str;
    /// Human readable name used in logs and notices.
    const NAME: &'static str;
    /// Whether the list endpoint pages on the server.
    const PAGINATED: bool = false;

    fn id(&self) -> u64;
}

/// Query parameters accepted by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            search: None,
        }
    }

    fn apply(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(page) = self.page {
            request = request.query("page", page);
        }
        if let Some(per_page) = self.per_page {
            request = request.query("per_page", per_page);
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            request = request.query("search", search.trim());
        }
        request
    }
}

fn collection_url<T: AdminResource>(api_url: &str) -> String {
    format!("{api_url}/admin/{}", T::PATH)
}

fn member_url<T: AdminResource>(api_url: &str, id: u64) -> String {
    format!("{api_url}/admin/{}/{id}", T::PATH)
}

/// Sends the request and turns non-2xx answers into `ApiError::Rejected`.
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let method = request.method();
    let url = request.url().to_string();

    let response = request.header("accept", "application/json").send().await?;

    if response.is_success() {
        Ok(response)
    } else {
        let error = ApiError::from_response(&response);
        warn!("{} {url} rejected ({}): {error}", method.as_str(), response.status);
        Err(error)
    }
}

fn parse_mutation<T: DeserializeOwned>(
    response: &Response,
    what: &'static str,
) -> ApiResult<Mutation<T>> {
    if response.is_empty() {
        return Ok(Mutation::default());
    }
    // The change is already applied once the server answers 2xx, so a record
    // that does not decode only drops `data`.
    let Mutation { message, data } = response
        .json::<Mutation<serde_json::Value>>()
        .map_err(|e| ApiError::decode(what, e))?;
    let data = data.and_then(|value| match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Ignoring unreadable {what} in mutation response: {e}");
            None
        }
    });
    Ok(Mutation { message, data })
}

fn encode<P: Serialize + ?Sized>(request: RequestBuilder, payload: &P) -> ApiResult<RequestBuilder> {
    request.json(payload).map_err(ApiError::Encode)
}

/// GET `/admin/{resource}`
pub async fn list<T: AdminResource>(api_url: &str, query: &ListQuery) -> ApiResult<Listing<T>> {
    let request = query.apply(Client::get(collection_url::<T>(api_url)));
    let response = send(request).await?;

    let listing: Listing<T> = response.json().map_err(|e| ApiError::decode(T::NAME, e))?;
    info!("Fetched {} {}", listing.items.len(), T::NAME);
    Ok(listing)
}

/// GET `/admin/{resource}/{id}`
pub async fn get<T: AdminResource>(api_url: &str, id: u64) -> ApiResult<T> {
    let response = send(Client::get(member_url::<T>(api_url, id))).await?;
    let Single(record) = response.json().map_err(|e| ApiError::decode(T::NAME, e))?;
    Ok(record)
}

/// POST `/admin/{resource}`
pub async fn create<T, P>(api_url: &str, payload: &P) -> ApiResult<Mutation<T>>
where
    T: AdminResource,
    P: Serialize + ?Sized,
{
    let request = encode(Client::post(collection_url::<T>(api_url)), payload)?;
    let response = send(request).await?;
    parse_mutation(&response, T::NAME)
}

/// PUT `/admin/{resource}/{id}`
pub async fn update<T, P>(api_url: &str, id: u64, payload: &P) -> ApiResult<Mutation<T>>
where
    T: AdminResource,
    P: Serialize + ?Sized,
{
    let request = encode(Client::put(member_url::<T>(api_url, id)), payload)?;
    let response = send(request).await?;
    parse_mutation(&response, T::NAME)
}

/// DELETE `/admin/{resource}/{id}`. Returns the server message.
pub async fn delete<T: AdminResource>(api_url: &str, id: u64) -> ApiResult<String> {
    let response = send(Client::delete(member_url::<T>(api_url, id))).await?;
    let mutation: Mutation<serde::de::IgnoredAny> = parse_mutation(&response, T::NAME)?;
    Ok(mutation.message)
}

#[derive(Serialize)]
struct StatusBody<S> {
    status: S,
}

#[derive(Serialize)]
struct ApprovalBody {
    is_approved: bool,
}

/// PATCH `/admin/orders/{id}/status`
pub async fn update_order_status(
    api_url: &str,
    id: u64,
    status: OrderStatus,
) -> ApiResult<Mutation<Order>> {
    let url = format!("{}/status", member_url::<Order>(api_url, id));
    let request = encode(Client::patch(url), &StatusBody { status })?;
    let response = send(request).await?;
    parse_mutation(&response, Order::NAME)
}

/// PATCH `/admin/promo-codes/{id}/toggle`
pub async fn toggle_promo_code(api_url: &str, id: u64) -> ApiResult<Mutation<PromoCode>> {
    let url = format!("{}/toggle", member_url::<PromoCode>(api_url, id));
    let response = send(Client::patch(url)).await?;
    parse_mutation(&response, PromoCode::NAME)
}

/// PATCH `/admin/reviews/{id}` with `{ is_approved }`
pub async fn set_review_approval(
    api_url: &str,
    id: u64,
    is_approved: bool,
) -> ApiResult<Mutation<Review>> {
    let request = encode(
        Client::patch(member_url::<Review>(api_url, id)),
        &ApprovalBody { is_approved },
    )?;
    let response = send(request).await?;
    parse_mutation(&response, Review::NAME)
}

/// PATCH `/admin/user-contents/{id}` with `{ status }`
pub async fn moderate_user_content(
    api_url: &str,
    id: u64,
    status: ModerationStatus,
) -> ApiResult<Mutation<UserContent>> {
    let request = encode(
        Client::patch(member_url::<UserContent>(api_url, id)),
        &StatusBody { status },
    )?;
    let response = send(request).await?;
    parse_mutation(&response, UserContent::NAME)
}

/// GET `/admin/dashboard`
pub async fn fetch_dashboard(api_url: &str) -> ApiResult<DashboardSummary> {
    let response = send(Client::get(format!("{api_url}/admin/dashboard"))).await?;
    let Single(summary) = response
        .json()
        .map_err(|e| ApiError::decode("dashboard summary", e))?;
    Ok(summary)
}

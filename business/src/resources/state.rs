use chrono::{DateTime, Utc};
use log::{error, info, warn};
use vowly_states::State;

use crate::api::{AdminResource, ApiError, ApiResult, FieldErrors, Listing, PageMeta};
use crate::models::DashboardSummary;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A page-level message shown until the user dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Result of the last mutation, consumed once by the dialog that started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Succeeded { message: String },
    Failed { message: String, errors: FieldErrors },
}

/// Everything a list page knows about one admin resource.
#[derive(Debug, Clone)]
pub struct ResourceList<T> {
    pub items: Vec<T>,
    pub meta: Option<PageMeta>,
    pub status: FetchStatus,
    /// Requested page for paginated resources, 1-based.
    pub page: u32,
    /// Server-side search term for paginated resources.
    pub search: String,
    pub notice: Option<Notice>,
    pub last_fetch: Option<DateTime<Utc>>,
    pending_mutations: u32,
    stale: bool,
    outcome: Option<MutationOutcome>,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: None,
            status: FetchStatus::Idle,
            page: 1,
            search: String::new(),
            notice: None,
            last_fetch: None,
            pending_mutations: 0,
            stale: false,
            outcome: None,
        }
    }
}

impl<T: 'static> State for ResourceList<T> {}

impl<T: AdminResource> ResourceList<T> {
    /// Whether the list should be (re)fetched: never fetched, or invalidated
    /// by a mutation and not already loading.
    pub fn needs_fetch(&self) -> bool {
        match self.status {
            FetchStatus::Idle => true,
            FetchStatus::Loading => false,
            FetchStatus::Loaded | FetchStatus::Failed(_) => self.stale,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Loading;
        self.stale = false;
    }

    /// Replaces the items wholesale with the fetched listing.
    pub fn finish_fetch(&mut self, result: ApiResult<Listing<T>>, now: DateTime<Utc>) {
        self.last_fetch = Some(now);
        match result {
            Ok(listing) => {
                info!("Loaded {} {} rows", listing.items.len(), T::NAME);
                if let Some(meta) = listing.meta {
                    self.page = meta.current_page.max(1);
                }
                self.items = listing.items;
                self.meta = listing.meta;
                self.status = FetchStatus::Loaded;
            }
            Err(err) => {
                error!("Failed to load {}: {err}", T::NAME);
                self.status = FetchStatus::Failed(err.to_string());
            }
        }
    }

    pub fn is_mutating(&self) -> bool {
        self.pending_mutations > 0
    }

    pub fn begin_mutation(&mut self) {
        self.pending_mutations += 1;
    }

    /// Records the mutation result. Success invalidates the list so the next
    /// frame refetches it.
    pub fn finish_mutation(&mut self, result: ApiResult<String>) {
        self.pending_mutations = self.pending_mutations.saturating_sub(1);
        match result {
            Ok(message) => {
                self.notice = Some(Notice::success(message.clone()));
                self.outcome = Some(MutationOutcome::Succeeded { message });
                self.stale = true;
            }
            Err(err) => {
                warn!("Mutation on {} failed: {err}", T::NAME);
                let errors = err.field_errors();
                let message = mutation_error_message(&err);
                self.notice = Some(Notice::error(message.clone()));
                self.outcome = Some(MutationOutcome::Failed { message, errors });
            }
        }
    }

    pub fn take_outcome(&mut self) -> Option<MutationOutcome> {
        self.outcome.take()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn find(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

fn mutation_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) => format!("Gagal terhubung ke server: {err}"),
        _ => err.to_string(),
    }
}

/// Dashboard summary and its fetch status.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub status: FetchStatus,
    pub last_fetch: Option<DateTime<Utc>>,
}

impl State for DashboardState {}

impl DashboardState {
    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// Keeps the previous summary on failure so the cards do not blank out.
    pub fn finish_fetch(&mut self, result: ApiResult<DashboardSummary>, now: DateTime<Utc>) {
        self.last_fetch = Some(now);
        match result {
            Ok(summary) => {
                self.summary = Some(summary);
                self.status = FetchStatus::Loaded;
            }
            Err(err) => {
                error!("Failed to load dashboard: {err}");
                self.status = FetchStatus::Failed(err.to_string());
            }
        }
    }
}

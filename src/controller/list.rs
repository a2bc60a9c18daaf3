//! Item list controller.
//!
//! Owns filter, query and result state and turns user triggers into list
//! loads. Every load is tagged with a sequence number; only the response to
//! the most recently issued load may touch state.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::debounce::{Debouncer, RANGE_DEBOUNCE, SEARCH_DEBOUNCE};
use crate::error::Result;
use crate::filter::FilterState;
use crate::notice::{LIST_LOAD_FAILED, Notice};
use crate::pagination::PageControls;
use crate::query::{QueryPair, QueryState, SortColumn, encode, to_query_string};
use crate::remote::{FilterCatalog, ItemSource, ListResponse, RowProjection};
use crate::storage::FilterStore;
use crate::types::{ContentAreaMode, Facet, PageSize, RangeBound, RangeField, SecondMetric};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

/// Settings fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub content_area_mode: ContentAreaMode,
    pub second_metric: SecondMetric,
    pub page_size: PageSize,
}

/// Inputs whose edits are debounced, one slot each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum EditSlot {
    Search,
    Range(RangeField, RangeBound),
}

impl EditSlot {
    fn delay(self) -> std::time::Duration {
        match self {
            EditSlot::Search => SEARCH_DEBOUNCE,
            EditSlot::Range(..) => RANGE_DEBOUNCE,
        }
    }
}

/// Read-only copy of the controller state for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub status: ListStatus,
    pub rows: Vec<RowProjection>,
    pub total: u64,
    pub controls: PageControls,
    pub notice: Option<Notice>,
    pub filters: FilterState,
    pub query: QueryState,
    pub catalog: Option<FilterCatalog>,
}

#[derive(Debug, Default)]
struct ListState {
    filters: FilterState,
    query: QueryState,
    status: ListStatus,
    rows: Vec<RowProjection>,
    total: u64,
    /// `None` until the first successful load
    total_pages: Option<u32>,
    notice: Option<Notice>,
    catalog: Option<FilterCatalog>,
    pending_edits: HashSet<EditSlot>,
    /// Bumped by `clear_filters`; debounced edits from an older generation
    /// are dropped
    edit_generation: u64,
}

struct Inner<S> {
    source: Arc<S>,
    store: FilterStore,
    metric: SecondMetric,
    state: Mutex<ListState>,
    issued: AtomicU64,
    debouncer: Debouncer<EditSlot>,
    changes: watch::Sender<u64>,
}

pub struct ListController<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for ListController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ItemSource + 'static> ListController<S> {
    /// Create a controller, restoring saved filters from `store`.
    ///
    /// No request is issued; call [`reload`](Self::reload) for the first page.
    pub fn new(source: Arc<S>, store: FilterStore, options: ListOptions) -> Self {
        let filters = store
            .restore(options.content_area_mode)
            .unwrap_or_else(|| FilterState::new(options.content_area_mode));
        if !filters.is_empty() {
            info!(active = filters.active_count(), "restored saved filters");
        }

        let state = ListState {
            filters,
            query: QueryState::with_page_size(options.page_size),
            ..Default::default()
        };
        let (changes, _) = watch::channel(0);

        Self {
            inner: Arc::new(Inner {
                source,
                store,
                metric: options.second_metric,
                state: Mutex::new(state),
                issued: AtomicU64::new(0),
                debouncer: Debouncer::new(),
                changes,
            }),
        }
    }

    pub fn second_metric(&self) -> SecondMetric {
        self.inner.metric
    }

    pub fn snapshot(&self) -> ListView {
        let state = self.inner.state.lock();
        let total_pages = state.total_pages.unwrap_or(0);
        ListView {
            status: state.status,
            rows: state.rows.clone(),
            total: state.total,
            controls: PageControls::new(state.query.page, total_pages),
            notice: state.notice.clone(),
            filters: state.filters.clone(),
            query: state.query.clone(),
            catalog: state.catalog.clone(),
        }
    }

    /// Query parameters the next load would send.
    pub fn current_query(&self) -> Vec<QueryPair> {
        let state = self.inner.state.lock();
        encode(&state.filters, &state.query, self.inner.metric)
    }

    /// Subscribe to state changes. The value is a change counter.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.changes.subscribe()
    }

    pub async fn toggle_facet(&self, facet: Facet, key: &str) {
        self.update_filters(|filters| filters.toggle(facet, key));
        self.reload().await;
    }

    pub async fn select_content_area(&self, key: &str) {
        self.toggle_facet(Facet::ContentArea, key).await;
    }

    /// Record a search keystroke; the list reloads once typing pauses.
    pub fn edit_search(&self, text: &str) {
        let text = text.to_string();
        self.schedule_edit(EditSlot::Search, move |state| {
            state.query.set_search(&text);
            false
        });
    }

    /// Record a range bound keystroke; the list reloads once typing pauses.
    pub fn edit_range(&self, field: RangeField, bound: RangeBound, value: &str) {
        let value = value.to_string();
        self.schedule_edit(EditSlot::Range(field, bound), move |state| {
            state.filters.set_range(field, bound, &value);
            true
        });
    }

    /// Apply a column-header click and reload from page 1.
    pub async fn click_sort(&self, column: SortColumn) {
        {
            let mut state = self.inner.state.lock();
            state.query.click_sort(column);
            state.query.page = 1;
        }
        self.reload().await;
    }

    pub async fn set_page_size(&self, size: PageSize) {
        {
            let mut state = self.inner.state.lock();
            state.query.page_size = size;
            state.query.page = 1;
        }
        self.reload().await;
    }

    /// Jump to `page`, clamped to the known page range.
    pub async fn go_to_page(&self, page: u32) {
        {
            let mut state = self.inner.state.lock();
            state.query.page = match state.total_pages {
                Some(total) => page.clamp(1, total.max(1)),
                None => page.max(1),
            };
        }
        self.reload().await;
    }

    /// Advance one page. Does nothing on the last page.
    pub async fn next_page(&self) {
        let target = {
            let state = self.inner.state.lock();
            let total = state.total_pages.unwrap_or(0);
            (state.query.page < total).then(|| state.query.page + 1)
        };
        if let Some(page) = target {
            self.go_to_page(page).await;
        }
    }

    /// Go back one page. Does nothing on the first page.
    pub async fn prev_page(&self) {
        let target = {
            let state = self.inner.state.lock();
            (state.query.page > 1).then(|| state.query.page - 1)
        };
        if let Some(page) = target {
            self.go_to_page(page).await;
        }
    }

    /// Reset every facet, range and the search text, forget the saved
    /// filters and reload from page 1. Pending debounced edits are dropped.
    pub async fn clear_filters(&self) {
        self.inner.debouncer.cancel_all();
        {
            let mut state = self.inner.state.lock();
            state.edit_generation += 1;
            state.pending_edits.clear();
            state.filters.reset();
            state.query.search.clear();
            state.query.page = 1;
        }
        if let Err(e) = self.inner.store.clear() {
            warn!("failed to clear saved filters: {e}");
        }
        self.reload().await;
    }

    /// Issue a load for the current state and wait for it to finish.
    pub async fn reload(&self) {
        let (seq, pairs) = self.begin_load();
        self.fetch(seq, pairs).await;
    }

    /// Fetch the facet catalog for the filter controls.
    pub async fn load_catalog(&self) -> Result<FilterCatalog> {
        match self.inner.source.fetch_filters().await {
            Ok(catalog) => {
                self.inner.state.lock().catalog = Some(catalog.clone());
                self.notify();
                Ok(catalog)
            }
            Err(e) => {
                error!(error = %e, "failed to load filter catalog");
                Err(e)
            }
        }
    }

    /// Wait until no debounced edit is pending and no load is in flight.
    pub async fn settled(&self) {
        let mut changes = self.subscribe();
        loop {
            changes.mark_unchanged();
            {
                let state = self.inner.state.lock();
                if state.pending_edits.is_empty() && state.status != ListStatus::Loading {
                    return;
                }
            }
            if changes.changed().await.is_err() {
                return;
            }
        }
    }

    fn update_filters(&self, change: impl FnOnce(&mut FilterState)) {
        let mut state = self.inner.state.lock();
        change(&mut state.filters);
        state.query.page = 1;
        self.persist(&state.filters);
    }

    /// Debounce an edit. `apply` returns whether filters changed and need
    /// saving.
    fn schedule_edit<F>(&self, slot: EditSlot, apply: F)
    where
        F: FnOnce(&mut ListState) -> bool + Send + 'static,
    {
        let generation = {
            let mut state = self.inner.state.lock();
            state.pending_edits.insert(slot);
            state.edit_generation
        };
        self.notify();

        let controller = self.clone();
        self.inner.debouncer.schedule(slot, slot.delay(), move || {
            if controller.apply_edit(slot, generation, apply) {
                controller.spawn_reload();
            }
        });
    }

    /// Apply a debounced edit unless filters were cleared after it was
    /// scheduled. Returns whether it was applied.
    fn apply_edit<F>(&self, slot: EditSlot, generation: u64, apply: F) -> bool
    where
        F: FnOnce(&mut ListState) -> bool,
    {
        let mut state = self.inner.state.lock();
        if state.edit_generation != generation {
            debug!(?slot, "dropping edit scheduled before clear");
            return false;
        }
        state.pending_edits.remove(&slot);
        if apply(&mut state) {
            self.persist(&state.filters);
        }
        state.query.page = 1;
        true
    }

    fn persist(&self, filters: &FilterState) {
        if let Err(e) = self.inner.store.save(filters) {
            warn!("failed to save filters: {e}");
        }
    }

    fn spawn_reload(&self) {
        let (seq, pairs) = self.begin_load();
        let controller = self.clone();
        tokio::spawn(async move {
            controller.fetch(seq, pairs).await;
        });
    }

    fn begin_load(&self) -> (u64, Vec<QueryPair>) {
        let issued = {
            let mut state = self.inner.state.lock();
            let seq = self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
            state.status = ListStatus::Loading;
            (seq, encode(&state.filters, &state.query, self.inner.metric))
        };
        self.notify();
        issued
    }

    async fn fetch(&self, seq: u64, pairs: Vec<QueryPair>) {
        debug!(seq, query = %to_query_string(&pairs), "loading items");
        let result = self.inner.source.list_items(&pairs).await;
        self.apply_response(seq, result);
    }

    fn apply_response(&self, seq: u64, result: Result<ListResponse>) {
        {
            let mut state = self.inner.state.lock();
            let latest = self.inner.issued.load(Ordering::SeqCst);
            if seq != latest {
                debug!(seq, latest, "discarding stale list response");
                return;
            }

            match result {
                Ok(response) => {
                    state.total_pages = Some(state.query.page_size.total_pages(response.total));
                    state.total = response.total;
                    state.rows = response.items;
                    state.status = ListStatus::Idle;
                    state.notice = None;
                }
                Err(e) => {
                    error!(seq, error = %e, "failed to load items");
                    state.status = ListStatus::Error;
                    state.notice = Some(Notice::error(LIST_LOAD_FAILED).with_detail(&e));
                }
            }
        }
        self.notify();
    }

    fn notify(&self) {
        self.inner.changes.send_modify(|version| *version += 1);
    }
}

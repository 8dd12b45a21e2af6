//! Record store - the client-side cached view of employee data
//!
//! Holds the last successfully fetched page plus the latest statistics
//! snapshot. The cache reflects only that page; it is not a mirror of
//! server state. All mutation happens in each operation's completion
//! section while the write lock is held briefly; the lock is never held
//! across the network call itself, so in-flight operations do not block
//! readers or each other.

use std::sync::Arc;

use tokio::sync::{RwLock, watch};

use shared::models::{Department, Employee, EmployeeDraft, Page, Stats};

use crate::api::EmployeeApi;
use crate::error::ClientResult;

/// Read-only view of the store state handed to the presentation layer
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    /// Records on the last successfully fetched page
    pub items: Vec<Employee>,
    pub current_page: u32,
    pub total_pages: u32,
    /// Latest statistics snapshot, `None` until first fetch
    pub stats: Option<Stats>,
    /// Department reference data, fetched once
    pub departments: Vec<Department>,
    pub fetching: bool,
    pub creating: bool,
    pub updating: bool,
    pub fetch_error: Option<String>,
    pub create_error: Option<String>,
    pub update_error: Option<String>,
}

impl Default for StoreSnapshot {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            stats: None,
            departments: Vec::new(),
            fetching: false,
            creating: false,
            updating: false,
            fetch_error: None,
            create_error: None,
            update_error: None,
        }
    }
}

/// Client-side record store backed by a remote [`EmployeeApi`]
pub struct RecordStore {
    api: Arc<dyn EmployeeApi>,
    state: RwLock<StoreSnapshot>,
    notify: watch::Sender<StoreSnapshot>,
}

impl RecordStore {
    /// Create a store backed by the given API
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        let initial = StoreSnapshot::default();
        let (notify, _) = watch::channel(initial.clone());
        Self {
            api,
            state: RwLock::new(initial),
            notify,
        }
    }

    /// Current state of the store
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.clone()
    }

    /// Watch channel that receives a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.notify.subscribe()
    }

    /// Apply one atomic state mutation and publish the result
    async fn mutate(&self, apply: impl FnOnce(&mut StoreSnapshot)) {
        let mut state = self.state.write().await;
        apply(&mut state);
        self.notify.send_replace(state.clone());
    }

    /// Fetch page `page` and replace the cached page wholesale.
    ///
    /// Concurrent fetches are not sequenced: whichever completion applies
    /// last determines the visible items, whatever page it carries.
    pub async fn fetch_page(&self, page: u32) -> ClientResult<Page<Employee>> {
        self.mutate(|s| {
            s.fetching = true;
            s.fetch_error = None;
        })
        .await;

        tracing::debug!(page, "fetching employee page");

        match self.api.fetch_page(page).await {
            Ok(response) => {
                let page = response.into_page(page);
                self.mutate(|s| {
                    s.fetching = false;
                    s.items = page.items.clone();
                    s.current_page = page.current_page;
                    s.total_pages = page.total_pages;
                })
                .await;
                Ok(page)
            }
            Err(err) => {
                tracing::warn!(page, error = %err, "employee page fetch failed");
                let message = err.message();
                self.mutate(|s| {
                    s.fetching = false;
                    s.fetch_error = Some(message);
                })
                .await;
                Err(err)
            }
        }
    }

    /// Create a record and append it to the current in-memory page.
    ///
    /// The paginated view is not refetched and `total_pages` is left
    /// untouched; callers that need a consistent page layout should call
    /// [`fetch_page`](Self::fetch_page) afterwards.
    pub async fn create(&self, draft: &EmployeeDraft) -> ClientResult<Employee> {
        self.mutate(|s| {
            s.creating = true;
            s.create_error = None;
        })
        .await;

        match self.api.create(draft).await {
            Ok(employee) => {
                tracing::debug!(id = employee.id, "employee created");
                self.mutate(|s| {
                    s.creating = false;
                    s.items.push(employee.clone());
                })
                .await;
                Ok(employee)
            }
            Err(err) => {
                tracing::warn!(error = %err, "employee create failed");
                let message = err.message();
                self.mutate(|s| {
                    s.creating = false;
                    s.create_error = Some(message);
                })
                .await;
                Err(err)
            }
        }
    }

    /// Update a record and patch it into the current page in place,
    /// preserving list order.
    ///
    /// If the id is not on the current page the server has still been
    /// updated but the local list is left unchanged until the next fetch.
    pub async fn update(&self, id: u64, draft: &EmployeeDraft) -> ClientResult<Employee> {
        self.mutate(|s| {
            s.updating = true;
            s.update_error = None;
        })
        .await;

        match self.api.update(id, draft).await {
            Ok(employee) => {
                tracing::debug!(id, "employee updated");
                self.mutate(|s| {
                    s.updating = false;
                    if let Some(slot) = s.items.iter_mut().find(|e| e.id == employee.id) {
                        *slot = employee.clone();
                    }
                })
                .await;
                Ok(employee)
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "employee update failed");
                let message = err.message();
                self.mutate(|s| {
                    s.updating = false;
                    s.update_error = Some(message);
                })
                .await;
                Err(err)
            }
        }
    }

    /// Delete a record and drop it from the current page.
    ///
    /// Deletion keeps no pending flag or error field; removing an id that
    /// is not on the current page is a local no-op. `total_pages` and
    /// `current_page` are not adjusted, so a page can run one row short
    /// until the next fetch.
    pub async fn remove(&self, id: u64) -> ClientResult<()> {
        self.api.delete(id).await.inspect_err(|err| {
            tracing::warn!(id, error = %err, "employee delete failed");
        })?;

        self.mutate(|s| s.items.retain(|e| e.id != id)).await;
        Ok(())
    }

    /// Fetch the statistics snapshot, replacing the previous one wholesale
    pub async fn fetch_stats(&self) -> ClientResult<Stats> {
        let stats = self.api.stats().await.inspect_err(|err| {
            tracing::warn!(error = %err, "stats fetch failed");
        })?;

        self.mutate(|s| s.stats = Some(stats.clone())).await;
        Ok(stats)
    }

    /// Fetch department reference data, cached for selection lists
    pub async fn fetch_departments(&self) -> ClientResult<Vec<Department>> {
        let departments = self.api.departments().await.inspect_err(|err| {
            tracing::warn!(error = %err, "departments fetch failed");
        })?;

        self.mutate(|s| s.departments = departments.clone()).await;
        Ok(departments)
    }
}

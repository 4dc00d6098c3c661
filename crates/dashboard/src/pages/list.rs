//! Generic list page: explicit search, pagination and confirm-gated
//! delete over one [`Resource`].

use serde::de::DeserializeOwned;

use eduadmin_client::services::Resource;
use eduadmin_core::pagination::{clamp_page, ListQuery, Pagination};

use crate::context::PageContext;

use super::confirm::delete_prompt;
use super::scope::PageScope;
use super::Record;

pub struct ListPage<T> {
    resource: Resource<T>,
    ctx: PageContext,
    scope: PageScope,
    query: ListQuery,
    search_input: String,
    rows: Vec<T>,
    pagination: Pagination,
    loading: bool,
}

impl<T: Record + DeserializeOwned> ListPage<T> {
    pub fn new(resource: Resource<T>, ctx: PageContext) -> Self {
        Self {
            resource,
            ctx,
            scope: PageScope::new(),
            query: ListQuery::default(),
            search_input: String::new(),
            rows: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
        }
    }

    pub fn with_query(mut self, query: ListQuery) -> Self {
        self.search_input = query.search.clone().unwrap_or_default();
        self.query = query;
        self
    }

    // ---- state ----

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn scope(&self) -> &PageScope {
        &self.scope
    }

    // ---- actions ----

    /// Fetch the current page.
    pub async fn load(&mut self) {
        self.loading = true;
        let result = self.scope.run(self.resource.list(&self.query)).await;
        self.loading = false;

        match result {
            None => {}
            Some(Ok(payload)) => {
                let count = payload.data.len() as u64;
                self.pagination = payload.pagination.unwrap_or_else(|| {
                    Pagination::from_total(self.query.page, self.query.limit, count)
                });
                self.rows = payload.data;
            }
            Some(Err(e)) => {
                self.ctx.fail(&format!("{}.list", self.resource.entity()), &e);
            }
        }
    }

    /// Edit the search box. Nothing is fetched until [`ListPage::submit_search`].
    pub fn set_search_input(&mut self, text: &str) {
        self.search_input = text.to_string();
    }

    /// Apply the search box and go back to page 1.
    pub async fn submit_search(&mut self) {
        self.query = std::mem::take(&mut self.query).search(&self.search_input).page(1);
        self.load().await;
    }

    /// Set or clear the status filter and reload from page 1.
    pub async fn set_status(&mut self, status: Option<&str>) {
        let mut query = std::mem::take(&mut self.query).page(1);
        query.status = status.map(str::to_string).filter(|s| !s.is_empty());
        self.query = query;
        self.load().await;
    }

    pub async fn go_to_page(&mut self, page: u32) {
        let last = self.pagination.total_pages.max(1);
        let page = clamp_page(Some(page)).min(last);
        if page == self.query.page && !self.rows.is_empty() {
            return;
        }
        self.query = std::mem::take(&mut self.query).page(page);
        self.load().await;
    }

    pub async fn next_page(&mut self) {
        if self.pagination.has_next() {
            self.go_to_page(self.query.page + 1).await;
        }
    }

    pub async fn prev_page(&mut self) {
        if self.pagination.has_prev() {
            self.go_to_page(self.query.page - 1).await;
        }
    }

    /// Delete after confirmation, then refetch. Returns whether the record
    /// was deleted.
    pub async fn delete(&mut self, id: &str) -> bool {
        let entity = self.resource.entity();
        if !self.ctx.confirm.confirm(&delete_prompt(entity)) {
            return false;
        }

        match self.resource.delete(id).await {
            Ok(_) => {
                tracing::info!(entity, id, "Deleted from list");
                self.ctx.toaster.success(format!("{entity} deleted successfully"));
                self.load().await;
                true
            }
            Err(e) => {
                self.ctx.fail(&format!("{entity}.delete"), &e);
                false
            }
        }
    }

    // ---- navigation ----

    pub fn open(&self, id: &str) {
        self.ctx.navigate(&format!("{}/{}", self.resource.path(), id));
    }

    pub fn edit(&self, id: &str) {
        self.ctx.navigate(&format!("{}/{}/edit", self.resource.path(), id));
    }

    pub fn create_new(&self) {
        self.ctx.navigate(&format!("{}/new", self.resource.path()));
    }

    pub fn close(&self) {
        self.scope.close();
    }

    /// Position of the row with `id` on the current page.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }
}

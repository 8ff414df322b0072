use taskdeck_shared::{TaskPriority, TaskStatus};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Search,
    Status,
    Priority,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterPatch {
    Search(String),
    Status(Option<TaskStatus>),
    Priority(Option<TaskPriority>),
}

impl FilterPatch {
    pub fn key(&self) -> FilterKey {
        match self {
            Self::Search(_) => FilterKey::Search,
            Self::Status(_) => FilterKey::Status,
            Self::Priority(_) => FilterKey::Priority,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub search: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    page: usize,
    page_size: usize,
    filters: Filters,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            filters: Filters::default(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.apply_filter(FilterPatch::Search(text.into()));
    }

    // A changed query set invalidates the pagination position, so every
    // filter mutation drops back to the first page.
    pub fn apply_filter(&mut self, patch: FilterPatch) {
        let key = patch.key();
        match patch {
            FilterPatch::Search(text) => self.filters.search = text,
            FilterPatch::Status(status) => self.filters.status = status,
            FilterPatch::Priority(priority) => self.filters.priority = priority,
        }
        self.page = 0;
        debug!(filter = ?key, "applied filter, page reset");
    }

    pub fn page_back(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        debug!(page = self.page, "paged back");
        true
    }

    // A short page is a definitive last-page signal; forward navigation is
    // only allowed when the most recent fetch came back exactly full.
    pub fn page_forward(&mut self, last_page_len: usize) -> bool {
        if last_page_len < self.page_size {
            return false;
        }
        self.page += 1;
        debug!(page = self.page, "paged forward");
        true
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        let search = self.filters.search.trim();
        if !search.is_empty() {
            params.push(("search".to_string(), search.to_string()));
        }
        if let Some(status) = self.filters.status {
            params.push(("status".to_string(), status.as_key().to_string()));
        }
        if let Some(priority) = self.filters.priority {
            params.push(("priority".to_string(), priority.as_key().to_string()));
        }

        params.push((
            "skip".to_string(),
            (self.page * self.page_size).to_string(),
        ));
        params.push(("limit".to_string(), self.page_size.to_string()));
        params
    }
}

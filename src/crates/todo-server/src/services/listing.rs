//! Paginated listing

use todo_core::{PageRequest, Todo, TodoListResponse};
use tracing::{debug, error};

use crate::db::SharedStore;
use crate::services::error::ServiceResult;

/// One page of records plus the totals needed to render a pager
#[derive(Debug, Clone, PartialEq)]
pub struct TodoPage {
    /// Records on this page, newest first
    pub items: Vec<Todo>,
    /// `ceil(total_items / limit)`, zero for an empty store
    pub total_pages: u64,
    /// The page that was requested, even if it is past the end
    pub current_page: u32,
    /// Number of records in the store
    pub total_items: u64,
}

impl From<TodoPage> for TodoListResponse {
    fn from(page: TodoPage) -> Self {
        Self {
            todo_list: page.items,
            num_of_pages: page.total_pages,
            current_page: page.current_page,
            total_items: page.total_items,
        }
    }
}

/// Read-only access to pages of records
#[derive(Clone)]
pub struct ListingService {
    store: SharedStore,
}

impl ListingService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Fetch one page and the collection totals
    ///
    /// A page past the end is not an error: it comes back empty with the real
    /// totals so the caller can clamp.
    pub async fn list(&self, request: PageRequest) -> ServiceResult<TodoPage> {
        let total_items = self.store.count().await.map_err(|e| {
            error!("Error counting todos: {}", e);
            e
        })?;

        let items = self
            .store
            .find_page(request.skip(), request.limit())
            .await
            .map_err(|e| {
                error!("Error fetching todos: {}", e);
                e
            })?;

        debug!(
            page = request.page(),
            limit = request.limit(),
            returned = items.len(),
            total_items,
            "Listed todos"
        );

        Ok(TodoPage {
            items,
            total_pages: request.total_pages(total_items),
            current_page: request.page(),
            total_items,
        })
    }
}

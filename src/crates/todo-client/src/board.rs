//! Client-side list state
//!
//! [`TodoBoard`] mirrors one page of the server's list and tracks which kinds
//! of call are in flight. Create and delete refetch the current page; toggle
//! patches the local copy; a general update merges the server's record.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use todo_core::pagination::clamp_page;
use todo_core::{NewTodo, PageRequest, Todo, TodoPatch, DEFAULT_LIMIT, DEFAULT_PAGE};
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::TodoApi;
use crate::error::{ClientError, ClientResult};
use crate::notify::Notifier;
use crate::reconcile;

/// Message sent after a successful create
pub const CREATED_MESSAGE: &str = "New Todo added successfully";

/// How overlapping list fetches are resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsistencyMode {
    /// Whichever response lands last wins
    #[default]
    Unguarded,
    /// Responses from superseded list requests are discarded
    LatestWins,
}

/// Snapshot of what the board currently shows
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub todos: Vec<Todo>,
    pub page: u32,
    pub limit: u32,
    /// Never zero; an empty store shows one page
    pub num_of_pages: u64,
    pub total_items: u64,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            todos: Vec::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            num_of_pages: 1,
            total_items: 0,
        }
    }
}

/// Sets a flag for as long as it lives
struct PendingGuard<'a>(&'a AtomicBool);

impl<'a> PendingGuard<'a> {
    fn new(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
struct Pending {
    fetching: AtomicBool,
    adding: AtomicBool,
    updating: AtomicBool,
    deleting: AtomicBool,
}

/// Local view of one page of todos
pub struct TodoBoard {
    api: Arc<dyn TodoApi>,
    notifier: Notifier,
    state: RwLock<BoardState>,
    pending: Pending,
    mode: ConsistencyMode,
    generation: AtomicU64,
}

impl TodoBoard {
    pub fn new(api: Arc<dyn TodoApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            state: RwLock::new(BoardState::default()),
            pending: Pending::default(),
            mode: ConsistencyMode::default(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_mode(mut self, mode: ConsistencyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Start at `page`/`limit` instead of the defaults
    ///
    /// Zero values take the same defaults the server applies.
    pub fn with_page(self, page: u32, limit: u32) -> Self {
        let request = PageRequest::new(page, limit);
        {
            let mut state = self.state.write();
            state.page = request.page();
            state.limit = request.limit();
        }
        self
    }

    pub fn mode(&self) -> ConsistencyMode {
        self.mode
    }

    pub fn snapshot(&self) -> BoardState {
        self.state.read().clone()
    }

    pub fn todos(&self) -> Vec<Todo> {
        self.state.read().todos.clone()
    }

    pub fn page(&self) -> u32 {
        self.state.read().page
    }

    pub fn limit(&self) -> u32 {
        self.state.read().limit
    }

    pub fn num_of_pages(&self) -> u64 {
        self.state.read().num_of_pages
    }

    pub fn total_items(&self) -> u64 {
        self.state.read().total_items
    }

    /// Change the displayed page without fetching
    pub fn set_page(&self, page: u32) {
        self.state.write().page = page.max(1);
    }

    pub fn is_fetching(&self) -> bool {
        self.pending.fetching.load(Ordering::SeqCst)
    }

    pub fn is_adding(&self) -> bool {
        self.pending.adding.load(Ordering::SeqCst)
    }

    pub fn is_updating(&self) -> bool {
        self.pending.updating.load(Ordering::SeqCst)
    }

    pub fn is_deleting(&self) -> bool {
        self.pending.deleting.load(Ordering::SeqCst)
    }

    fn report(&self, err: ClientError) -> ClientError {
        self.notifier.error(err.to_string());
        err
    }

    /// Load `page` with `limit` items and replace the local list
    ///
    /// A page past the end is clamped to the last page; the clamped page is
    /// not fetched.
    pub async fn fetch_todos(&self, page: u32, limit: u32) -> ClientResult<()> {
        let request = PageRequest::new(page, limit);
        let (page, limit) = (request.page(), request.limit());
        let _pending = PendingGuard::new(&self.pending.fetching);
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let response = self
            .api
            .list(page, limit)
            .await
            .map_err(|e| self.report(e))?;

        if self.mode == ConsistencyMode::LatestWins
            && self.generation.load(Ordering::SeqCst) != generation
        {
            debug!(page, generation, "Discarding superseded list response");
            return Ok(());
        }

        let mut state = self.state.write();
        state.todos = response.todo_list;
        state.limit = limit;
        state.total_items = response.total_items;
        state.num_of_pages = response.num_of_pages.max(1);
        state.page = clamp_page(page, response.num_of_pages);
        debug!(
            page = state.page,
            num_of_pages = state.num_of_pages,
            items = state.todos.len(),
            "Board refreshed"
        );
        Ok(())
    }

    /// Refetch the page currently shown
    pub async fn refresh(&self) -> ClientResult<()> {
        let (page, limit) = {
            let state = self.state.read();
            (state.page, state.limit)
        };
        self.fetch_todos(page, limit).await
    }

    /// Create a record, then reload the current page
    pub async fn add_todo(&self, todo: NewTodo) -> ClientResult<Todo> {
        let _pending = PendingGuard::new(&self.pending.adding);

        let created = self.api.create(&todo).await.map_err(|e| self.report(e))?;
        info!("Created todo {}", created.id);

        // A failed reload has already been reported
        if self.refresh().await.is_err() {
            debug!("Reload after create failed");
        }
        self.notifier.success(CREATED_MESSAGE);
        Ok(created)
    }

    /// Flip the completion flag of `todo` and patch the local copy
    pub async fn toggle_todo(&self, todo: &Todo) -> ClientResult<()> {
        let _pending = PendingGuard::new(&self.pending.updating);

        self.api
            .update(todo.id, &TodoPatch::toggle(todo))
            .await
            .map_err(|e| self.report(e))?;

        reconcile::apply_toggle(&mut self.state.write().todos, todo);
        Ok(())
    }

    /// Send a partial update and merge the server's copy
    pub async fn update_todo(&self, id: Uuid, patch: TodoPatch) -> ClientResult<Todo> {
        let _pending = PendingGuard::new(&self.pending.updating);

        let updated = self
            .api
            .update(id, &patch)
            .await
            .map_err(|e| self.report(e))?;

        reconcile::merge_acknowledged(&mut self.state.write().todos, &updated);
        Ok(updated)
    }

    /// Delete a record, then reload the current page
    pub async fn delete_todo(&self, id: Uuid) -> ClientResult<()> {
        let _pending = PendingGuard::new(&self.pending.deleting);

        self.api.delete(id).await.map_err(|e| self.report(e))?;
        info!("Deleted todo {}", id);

        if self.refresh().await.is_err() {
            debug!("Reload after delete failed");
        }
        Ok(())
    }
}

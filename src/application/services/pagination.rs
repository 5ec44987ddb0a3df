//! Pagination state for incrementally loaded collections.
//!
//! Both controllers share the same protocol: `try_begin*` claims the
//! in-flight guard and hands back the request position, `complete` commits
//! the advancement, `abandon` releases the guard without advancing. Position
//! state only moves on a successful response.

use parking_lot::Mutex;

/// Offset pagination over a page counter, for the artist directory and
/// search results.
pub struct OffsetPager {
    page_size: usize,
    state: Mutex<OffsetState>,
}

struct OffsetState {
    page: u32,
    has_more: bool,
    in_flight: bool,
}

impl OffsetPager {
    /// Creates a pager positioned before the first page.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            state: Mutex::new(OffsetState {
                page: 1,
                has_more: true,
                in_flight: false,
            }),
        }
    }

    /// Returns the configured page size.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Begins a first-page request, resetting position state. Always
    /// permitted; a full reload supersedes whatever was known before.
    pub fn begin_first(&self) -> u32 {
        let mut state = self.state.lock();
        state.page = 1;
        state.has_more = true;
        state.in_flight = true;
        1
    }

    /// Claims a load of the next page. Returns `None` while a load is in
    /// flight or when the collection is exhausted; the caller must then skip
    /// the request entirely.
    pub fn try_begin_next(&self) -> Option<u32> {
        let mut state = self.state.lock();

        if state.in_flight || !state.has_more {
            return None;
        }

        state.in_flight = true;
        Some(state.page + 1)
    }

    /// Commits a successful response for `requested_page`. `has_more` uses
    /// the server's explicit flag when present, else the full-page
    /// heuristic: a page is presumed full when it returned at least
    /// `page_size` items. (A final page of exactly `page_size` items
    /// therefore reads as "more available" until the next load comes back
    /// empty.)
    pub fn complete(&self, requested_page: u32, returned: usize, explicit_has_more: Option<bool>) {
        let mut state = self.state.lock();
        state.page = requested_page;
        state.has_more = explicit_has_more.unwrap_or(returned >= self.page_size);
        state.in_flight = false;
    }

    /// Releases the guard after a failed load; position is unchanged.
    pub fn abandon(&self) {
        self.state.lock().in_flight = false;
    }

    /// Returns the last committed page.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.state.lock().page
    }

    /// Returns whether more pages are believed to exist.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.state.lock().has_more
    }
}

/// Cursor pagination for "load earlier" message history, keyed by the
/// oldest known item's identifier (supplied by the caller per request).
pub struct CursorPager {
    state: Mutex<CursorState>,
}

struct CursorState {
    has_more: bool,
    in_flight: bool,
}

impl CursorPager {
    /// Creates a pager with no known history; `has_more` stays false until
    /// an initial load reports one.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CursorState {
                has_more: false,
                in_flight: false,
            }),
        }
    }

    /// Records the `has_more` flag from an initial (non-paginated) load.
    pub fn set_has_more(&self, has_more: bool) {
        self.state.lock().has_more = has_more;
    }

    /// Claims a load-earlier request. Returns false while one is in flight
    /// or when no earlier history exists.
    pub fn try_begin(&self) -> bool {
        let mut state = self.state.lock();

        if state.in_flight || !state.has_more {
            return false;
        }

        state.in_flight = true;
        true
    }

    /// Commits a successful load with the server's new `has_more` flag.
    pub fn complete(&self, has_more: bool) {
        let mut state = self.state.lock();
        state.has_more = has_more;
        state.in_flight = false;
    }

    /// Releases the guard after a failed load; `has_more` is unchanged.
    pub fn abandon(&self) {
        self.state.lock().in_flight = false;
    }

    /// Returns whether earlier history is believed to exist.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.state.lock().has_more
    }
}

impl Default for CursorPager {
    fn default() -> Self {
        Self::new()
    }
}

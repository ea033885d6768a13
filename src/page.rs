// Fixed-size pagination over an ordered result list

use std::thread;
use std::time::Duration;
use tracing::debug;

/// Cards per page in the listing view
pub const DEFAULT_PAGE_SIZE: usize = 6;
/// Pause shown as "loading" while switching pages
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(100);
/// Page links shown on each side of the current page
const WINDOW_RADIUS: usize = 2;

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice out 1-based page `page`; pages outside the list are empty
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = ((page - 1) * page_size).min(items.len());
    let end = (page * page_size).min(items.len());
    &items[start..end]
}

/// One entry in the page-link bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// Current page and loading flag for a paged view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current: usize,
    loading: bool,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
            loading: false,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn total_pages(&self, count: usize) -> usize {
        total_pages(count, self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page_size, self.current)
    }

    /// Back to page 1, e.g. after the result list changed
    pub fn reset(&mut self) {
        self.current = 1;
        self.loading = false;
    }

    /// Move to `page` of a list with `count` items.
    ///
    /// Pages below 1 or past the last page are rejected and leave the state untouched.
    /// Otherwise the paginator is marked loading for `delay`, then lands on `page`.
    pub fn go_to(&mut self, page: usize, count: usize, delay: Duration) -> bool {
        let total = self.total_pages(count);
        if page < 1 || page > total {
            debug!(page, total, "Rejected page change");
            return false;
        }

        self.loading = true;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        self.current = page;
        self.loading = false;
        true
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.current < self.total_pages(count)
    }

    /// Page links: first, last, and pages near the current one, with gaps between runs.
    ///
    /// Empty when everything fits on one page.
    pub fn links(&self, count: usize) -> Vec<PageLink> {
        let total = self.total_pages(count);
        if total <= 1 {
            return Vec::new();
        }

        let mut links = Vec::new();
        let mut last_shown = 0;
        for p in 1..=total {
            let near = p.abs_diff(self.current) <= WINDOW_RADIUS;
            if p != 1 && p != total && !near {
                continue;
            }
            if last_shown != 0 && last_shown != p - 1 {
                links.push(PageLink::Gap);
            }
            links.push(PageLink::Page(p));
            last_shown = p;
        }
        links
    }
}

//! Pagination
//!
//! Length-aware pagination for list endpoints. A list query produces the
//! total number of matching rows plus the rows of one page; [`Paginated`]
//! wraps both with navigation metadata in the shape the board client
//! renders:
//!
//! ```json
//! {
//!   "current_page": 2,
//!   "data": [ ... ],
//!   "first_page_url": "http://localhost:8000/api/posts?pageNumber=1",
//!   "from": 11,
//!   "last_page": 3,
//!   "last_page_url": "http://localhost:8000/api/posts?pageNumber=3",
//!   "links": [ { "url": "...", "label": "&laquo; Previous", "active": false }, ... ],
//!   "next_page_url": "http://localhost:8000/api/posts?pageNumber=3",
//!   "path": "http://localhost:8000/api/posts",
//!   "per_page": 10,
//!   "prev_page_url": "http://localhost:8000/api/posts?pageNumber=1",
//!   "to": 20,
//!   "total": 25
//! }
//! ```
//!
//! Requesting a page past the end is not an error: `data` is empty,
//! `from`/`to` are null and the rest of the metadata stays valid.

use serde::Serialize;

/// Rows per page on every list endpoint
pub const PAGE_SIZE: u32 = 10;

/// Pages shown on each side of the current page in the link window
const ON_EACH_SIDE: u32 = 3;

pub const PREVIOUS_LABEL: &str = "&laquo; Previous";
pub const NEXT_LABEL: &str = "Next &raquo;";
pub const GAP_LABEL: &str = "...";

/// Which page to fetch, and how page URLs are built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
    /// Absolute URL of the list endpoint, without query string
    pub path: String,
    /// Query parameter carrying the page number
    pub param: &'static str,
}

impl PageRequest {
    /// Build a request from a raw query value
    ///
    /// Absent, non-numeric, zero or negative values select page 1.
    pub fn from_query(raw: Option<&str>, path: impl Into<String>, param: &'static str) -> Self {
        Self {
            page: parse_page(raw),
            per_page: PAGE_SIZE,
            path: path.into(),
            param,
        }
    }

    /// Row offset of the first item on this page
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn url(&self, page: u32) -> String {
        format!("{}?{}={}", self.path, self.param, page)
    }
}

fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// One navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// A page of results with navigation metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    pub first_page_url: String,
    pub from: Option<u64>,
    pub last_page: u32,
    pub last_page_url: String,
    pub links: Vec<PageLink>,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub to: Option<u64>,
    pub total: u64,
}

impl<T> Paginated<T> {
    /// Assemble a page from the rows of `request.page` and the total row count
    pub fn new(data: Vec<T>, total: u64, request: &PageRequest) -> Self {
        let per_page = request.per_page.max(1);
        let current = request.page.max(1);
        let last_page = last_page(total, per_page);

        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            let from = u64::from(current - 1) * u64::from(per_page) + 1;
            (Some(from), Some(from + data.len() as u64 - 1))
        };

        let prev_page_url = (current > 1).then(|| request.url(current - 1));
        let next_page_url = (current < last_page).then(|| request.url(current + 1));

        let mut links = Vec::new();
        links.push(PageLink {
            url: prev_page_url.clone(),
            label: PREVIOUS_LABEL.to_string(),
            active: false,
        });
        for element in link_window(current, last_page) {
            links.push(match element {
                WindowElement::Page(page) => PageLink {
                    url: Some(request.url(page)),
                    label: page.to_string(),
                    active: page == current,
                },
                WindowElement::Gap => PageLink {
                    url: None,
                    label: GAP_LABEL.to_string(),
                    active: false,
                },
            });
        }
        links.push(PageLink {
            url: next_page_url.clone(),
            label: NEXT_LABEL.to_string(),
            active: false,
        });

        Self {
            current_page: current,
            data,
            first_page_url: request.url(1),
            from,
            last_page,
            last_page_url: request.url(last_page),
            links,
            next_page_url,
            path: request.path.clone(),
            per_page,
            prev_page_url,
            to,
            total,
        }
    }
}

/// `max(1, ceil(total / per_page))`
pub fn last_page(total: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let pages = total.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowElement {
    Page(u32),
    Gap,
}

/// Numbered links around the current page
///
/// Small result sets list every page. Larger ones keep the two pages at each
/// end and a slider of `ON_EACH_SIDE` pages around the current one, with gaps
/// in between; near either end the slider merges into that end.
fn link_window(current: u32, last: u32) -> Vec<WindowElement> {
    let pages = |from: u32, to: u32| (from..=to).map(WindowElement::Page);

    if last < ON_EACH_SIDE * 2 + 8 {
        return pages(1, last).collect();
    }

    let window = ON_EACH_SIDE + 4;
    let mut out = Vec::new();
    if current <= window {
        out.extend(pages(1, window + ON_EACH_SIDE));
        out.push(WindowElement::Gap);
        out.extend(pages(last - 1, last));
    } else if current > last - window {
        out.extend(pages(1, 2));
        out.push(WindowElement::Gap);
        out.extend(pages(last - (window + ON_EACH_SIDE - 1), last));
    } else {
        out.extend(pages(1, 2));
        out.push(WindowElement::Gap);
        out.extend(pages(current - ON_EACH_SIDE, current + ON_EACH_SIDE));
        out.push(WindowElement::Gap);
        out.extend(pages(last - 1, last));
    }
    out
}

use crate::extract::TableKind;
use crate::views::{ViewPage, VIEW_PAGES};

/// Where a request path leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/`
    Index,

    /// One of the rendered pages, e.g. `/allsvenskan`
    View(&'static ViewPage),

    /// `/{code}` or `/{code}/topscorers`
    Table { code: &'a str, kind: TableKind },

    NotFound,
}

/// Maps a request path to a route
///
/// Trailing slashes are ignored. Whether `code` names a configured
/// competition is up to the caller.
pub fn resolve(path: &str) -> Route<'_> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Route::Index;
    }

    let segments: Vec<&str> = trimmed.split('/').collect();
    match segments.as_slice() {
        [single] => match VIEW_PAGES.iter().find(|page| page.path == *single) {
            Some(page) => Route::View(page),
            None => Route::Table {
                code: *single,
                kind: TableKind::Standings,
            },
        },
        [code, "topscorers"] => Route::Table {
            code: *code,
            kind: TableKind::TopScorers,
        },
        _ => Route::NotFound,
    }
}

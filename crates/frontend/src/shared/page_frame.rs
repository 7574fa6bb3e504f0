//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                 : `"{entity}--{category}"`, e.g. `"a003_house--list"`
//!   - `data-page-category` : one of the PAGE_CAT_* constants
//!
//! The `--` separator makes the entity name searchable: copy the id from the
//! DOM inspector, paste into IDE search, and you land in `domain/a003_house/`.

use leptos::prelude::*;

/// List of records with search and add/edit/delete.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case / action page (billing run).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// System administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {}", page_id);

    let class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_neighborhood--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a001_neighborhood"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001--"));
    }
}

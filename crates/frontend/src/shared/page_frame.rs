//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                 : `"{entity}--{category}"`, e.g. `"a004_music--tabbed"`
//!   - `data-page-category` : one of the PAGE_CAT_* constants
//!
//! Usage:
//! ```ignore
//! use crate::shared::page_frame::PageFrame;
//! use crate::shared::page_standard::PAGE_CAT_TABBED;
//!
//! #[component]
//! pub fn MusicPage() -> impl IntoView {
//!     view! {
//!         <PageFrame page_id="a004_music--tabbed" category=PAGE_CAT_TABBED>
//!             <div class="page__header">...</div>
//!             <div class="page__content">...</div>
//!         </PageFrame>
//!     }
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class based on category:
/// - `tabbed`    → `page page--tabbed`
/// - `feed`      → `page page--feed`
/// - `form`      → `page page--form`
/// - `marketing` → `page page--marketing`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_TABBED => "page page--tabbed",
        PAGE_CAT_FEED => "page page--feed",
        PAGE_CAT_FORM => "page page--form",
        PAGE_CAT_MARKETING => "page page--marketing",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}

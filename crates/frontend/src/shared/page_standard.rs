//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a003_events--tabbed"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector, paste it into the IDE, and you land in `domain/a003_events/`.

/// Page whose body is a tab view (Discover, Events, Music, Network).
pub const PAGE_CAT_TABBED: &str = "tabbed";

/// Scrolling stream of posts.
pub const PAGE_CAT_FEED: &str = "feed";

/// Stand-alone form outside the signed-in shell (sign-in, sign-up).
pub const PAGE_CAT_FORM: &str = "form";

/// Static marketing content.
pub const PAGE_CAT_MARKETING: &str = "marketing";

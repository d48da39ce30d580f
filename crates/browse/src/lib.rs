//! `storefront-browse` — the filter/sort/pagination core of the catalog UI.
//!
//! The crate is split along the seams of the state machine:
//!
//! - [`filter`]: the Filter State Store — draft edits, the committed
//!   (applied) snapshot, and the always-live instant-search term.
//! - [`engine`]: a pure function deriving the visible page from
//!   `{catalog, applied filters, live term, sort mode, page}`.
//! - [`pager`]: the Page Navigator — 1-based current page with clamped
//!   transitions.
//! - [`session`]: the facade a presentation layer drives. It owns the
//!   pieces above, resets the page when a result-set-changing input
//!   changes value, and exposes the explicit recompute call
//!   ([`BrowseSession::view`]) instead of a reactive subscription.
//!
//! Everything here is single-threaded, synchronous and infallible at
//! runtime; the only fallible step (the one-shot catalog load) lives in
//! `storefront-catalog`.

pub mod engine;
pub mod filter;
pub mod pager;
pub mod session;

pub use engine::{SortMode, View, compute_view};
pub use filter::{FilterState, FilterValues};
pub use pager::Pager;
pub use session::BrowseSession;

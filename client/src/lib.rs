//! Client-side core of the catalog search system.
//!
//! Three cooperating pieces:
//! - [`session::SessionManager`] captures an `id_token` from the identity
//!   provider's redirect fragment and persists the session locally
//! - [`guard::RouteGuard`] gates restricted views on that session,
//!   redirecting to the entry view on denial
//! - [`dispatch::SearchDispatcher`] converts the keystroke stream into a
//!   debounced, de-duplicated, cancel-on-latest sequence of backend calls
//!   through a [`search::QueryHandler`]
//!
//! Everything below the guard absorbs its own failures: the subscriber only
//! ever sees a result, possibly an empty one.

pub mod config;
pub mod dispatch;
pub mod guard;
pub mod search;
pub mod session;

//! Autodocs application shell layer.
//!
//! Wires the data-access layer together for an embedding UI: the
//! [`AppContext`] composition root (one configured API adapter shared by
//! all stores, built once at startup) and the declarative [`routes`]
//! table with per-route metadata and scroll restoration.
//!
//! [`AppContext`]: state::AppContext

pub mod routes;
pub mod state;

pub use routes::{resolve_scroll, Route, RouteTable, ScrollBehavior, ScrollPosition, View};
pub use state::AppContext;

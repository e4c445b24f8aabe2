//! HTTP surface for the report pages.

mod handlers;
mod router;
mod state;

pub use router::create_router;
pub use state::AppState;

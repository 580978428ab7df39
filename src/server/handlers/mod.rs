//! Server HTTP handlers.

mod page;
mod report;

pub use page::{health_handler, index_handler};
pub use report::report_handler;

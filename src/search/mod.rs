//! The listing filter engine: filter state, per-field predicates and the
//! materializer that produces the rendered result list.

pub mod filters;
pub mod query;
pub mod results;

pub use filters::{SearchFilters, Selection};
pub use query::SearchQuery;
pub use results::{filter_agencies, filter_properties};

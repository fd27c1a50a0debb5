pub mod search_filters;
pub mod sort;

pub use search_filters::{Availability, SearchFilters};
pub use sort::{SortKey, SortOrder, SortSelection};

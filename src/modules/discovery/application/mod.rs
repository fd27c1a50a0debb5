pub mod presenter;
pub mod service;

pub use presenter::{
    ClubCard, ClubRow, DisplayItem, ResultsNotice, ResultsPresenter, SearchPresentation, ViewMode,
};
pub use service::{DiscoveryService, DiscoverySink, SearchRequest};

pub mod geo;
pub mod logger;
pub mod validation;

pub use geo::haversine_km;
pub use logger::{init_logger, init_tracing, LogContext, TimedOperation};
pub use validation::Validator;

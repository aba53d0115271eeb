pub mod health;
pub mod listing;
pub mod write;

pub use health::HealthService;
pub use listing::{DataSource, ListingService};
pub use write::WriteService;

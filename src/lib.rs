pub mod aggregate;
pub mod client;
pub mod error;
pub mod normalize;
pub mod report;
pub mod server;
pub mod types;

pub use aggregate::weighted_average;
pub use client::{CensusClient, CensusConfig, Collection, StateFailure};
pub use error::LookupError;
pub use normalize::{StateToken, normalize_states};
pub use report::{OutputFormat, ReportError};
pub use types::{DemographicResponse, DemographicRow, GeographyResponse, StateRecord};

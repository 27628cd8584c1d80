pub mod advisory_api;

pub use advisory_api::AdvisoryApiClient;

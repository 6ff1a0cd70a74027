pub mod domain;
pub mod telemetry;

pub use domain::{Email, EmailError};
pub use string_match::Candidates;

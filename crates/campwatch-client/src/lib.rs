pub mod analytics;
pub mod commands;
pub mod contracts;
mod dataset;
pub mod error;
pub mod store;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod dataset;
pub mod parties;
pub mod report;
pub mod risk;
pub mod summary;
pub mod trend;

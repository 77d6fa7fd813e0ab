mod config;
mod report;
pub use config::*;
pub use report::*;
pub mod errors;
pub mod job;

pub mod analysis;
pub mod assessment;
pub mod business_case;
pub mod config;
pub mod error;
pub mod gate;
pub mod io;
pub mod opportunity;
pub mod paths;
pub mod questionnaire;
pub mod scoring;
pub mod types;

pub use error::{Result, StagegateError};

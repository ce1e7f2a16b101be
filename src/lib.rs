//! Resume gap client: collect a job description and a resume, send both to a
//! remote analysis service and render the match report.

pub mod cli;
pub mod core;
pub mod document;
pub mod error;
pub mod render;
pub mod session;
pub mod types;
pub mod workflow;

pub use crate::core::{ConfigManager, GapService, ServiceClient};
pub use error::{GapError, Result};
pub use session::{ResumeSource, SessionInput};
pub use types::AnalysisResult;
pub use workflow::GapWorkflow;

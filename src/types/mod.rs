// src/types/mod.rs
pub mod request;
pub mod response;

pub use request::{ExtractTextRequest, GapAnalysisRequest};
pub use response::{AnalysisResult, ExtractTextResponse, GapAnalysisResponse, ServiceErrorBody};

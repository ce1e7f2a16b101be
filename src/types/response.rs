// src/types/response.rs
use serde::{Deserialize, Serialize};

// ===== Service Response Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractTextResponse {
    #[serde(default)]
    pub text: Option<String>,
}

/// Error payload returned by the service with a non-2xx status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Raw analysis payload. Every field may be absent or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GapAnalysisResponse {
    #[serde(default)]
    pub match_percentage: Option<f64>,
    #[serde(default)]
    pub matching_skills: Option<Vec<String>>,
    #[serde(default)]
    pub missing_skills: Option<Vec<String>>,
    #[serde(default)]
    pub project_suggestions: Option<Vec<String>>,
}

/// Fixed-shape analysis outcome handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub match_percentage: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub project_suggestions: Vec<String>,
}

impl From<GapAnalysisResponse> for AnalysisResult {
    fn from(response: GapAnalysisResponse) -> Self {
        Self {
            match_percentage: response.match_percentage.unwrap_or_default(),
            matching_skills: response.matching_skills.unwrap_or_default(),
            missing_skills: response.missing_skills.unwrap_or_default(),
            project_suggestions: response.project_suggestions.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let response: GapAnalysisResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(AnalysisResult::from(response), AnalysisResult::default());
    }

    #[test]
    fn test_null_fields_default() {
        let response: GapAnalysisResponse = serde_json::from_str(
            r#"{"match_percentage": null, "matching_skills": null, "missing_skills": ["Go"]}"#,
        )
        .unwrap();
        let result = AnalysisResult::from(response);
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matching_skills.is_empty());
        assert_eq!(result.missing_skills, vec!["Go".to_string()]);
        assert!(result.project_suggestions.is_empty());
    }

    #[test]
    fn test_full_payload_keeps_order() {
        let response: GapAnalysisResponse = serde_json::from_str(
            r#"{
                "match_percentage": 72.5,
                "matching_skills": ["rust", "sql", "docker"],
                "missing_skills": ["kubernetes"],
                "project_suggestions": ["Deploy a service on k8s"],
                "extra": "ignored"
            }"#,
        )
        .unwrap();
        let result = AnalysisResult::from(response);
        assert_eq!(result.match_percentage, 72.5);
        assert_eq!(result.matching_skills, vec!["rust", "sql", "docker"]);
        assert_eq!(result.project_suggestions.len(), 1);
    }

    #[test]
    fn test_extract_response_without_text() {
        let response: ExtractTextResponse =
            serde_json::from_str(r#"{"error": "Unsupported file format"}"#).unwrap();
        assert!(response.text.is_none());
    }
}

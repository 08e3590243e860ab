use serde::{Deserialize, Serialize};

/// Browser forms submit at most this many recent post URLs.
pub const MAX_RECENT_POSTS: usize = 5;

/// Profile fields collected by the browser form. Request-scoped only.
///
/// Fields default when absent so malformed payloads reach handler validation
/// (and its 400) instead of dying in the extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_posts: Option<Vec<String>>,
}

/// Aggregate of the seven agent outputs. Field order mirrors the fan-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub profile_analysis: String,
    pub bio_analysis: String,
    pub link_analysis: String,
    pub feed_analysis: String,
    pub content_suggestions: String,
    pub copy_suggestions: String,
    pub image_suggestions: String,
    pub overall_score: OverallScore,
}

/// Scoring block attached to every analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    pub score: u32,
    pub methodology: String,
}

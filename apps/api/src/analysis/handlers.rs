//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyze_profile;
use crate::analysis::models::{AnalysisResult, ProfileData, MAX_RECENT_POSTS};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub profile_data: Option<ProfileData>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: AnalysisResult,
}

/// POST /api/instagram/analyze
///
/// Validates the request, then fans the profile out to the seven agents.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let api_key = request
        .api_key
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| AppError::Validation("API Key da OpenAI não fornecida".to_string()))?;

    let profile = request
        .profile_data
        .ok_or_else(incomplete_profile)?;
    validate_profile(&profile)?;

    let data = analyze_profile(&state.llm, &api_key, &profile).await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        data,
    }))
}

fn incomplete_profile() -> AppError {
    AppError::Validation("Dados do perfil incompletos ou inválidos".to_string())
}

fn validate_profile(profile: &ProfileData) -> Result<(), AppError> {
    if profile.username.trim().is_empty() {
        return Err(incomplete_profile());
    }
    if profile
        .recent_posts
        .as_ref()
        .is_some_and(|posts| posts.len() > MAX_RECENT_POSTS)
    {
        return Err(AppError::Validation(format!(
            "No máximo {MAX_RECENT_POSTS} posts recentes por análise"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProfileData {
        ProfileData {
            username: "maria.fit".to_string(),
            followers: 12400,
            bio: "Treinos em casa".to_string(),
            bio_link: None,
            profile_image_url: None,
            recent_posts: None,
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate_profile(&profile()).is_ok());
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let mut p = profile();
        p.username = "   ".to_string();
        assert!(matches!(
            validate_profile(&p),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_more_than_five_posts_is_rejected() {
        let mut p = profile();
        p.recent_posts = Some(vec!["https://instagram.com/p/x".to_string(); 6]);
        assert!(matches!(
            validate_profile(&p),
            Err(AppError::Validation(_))
        ));

        p.recent_posts = Some(vec!["https://instagram.com/p/x".to_string(); 5]);
        assert!(validate_profile(&p).is_ok());
    }

    #[test]
    fn test_analyze_request_deserializes_camel_case() {
        let json = r#"{
            "apiKey": "sk-0123456789abcdef0123",
            "profileData": {"username": "maria.fit", "followers": 10, "bio": "oi"}
        }"#;
        let request: AnalyzeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.api_key.as_deref(), Some("sk-0123456789abcdef0123"));
        assert_eq!(request.profile_data.unwrap().username, "maria.fit");
    }

    #[test]
    fn test_analyze_request_tolerates_missing_fields() {
        let request: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.api_key.is_none());
        assert!(request.profile_data.is_none());
    }
}

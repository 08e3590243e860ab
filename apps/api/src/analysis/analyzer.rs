//! Profile analysis fan-out.
//!
//! Seven agent calls issued concurrently as one batch join. The link and feed
//! branches substitute fixed sentinel strings instead of calling the API when
//! their inputs are absent. Any single rejection fails the whole batch; there
//! is no retry and no partial aggregation.

use serde_json::{json, Value};
use tracing::info;

use crate::analysis::agents::{
    AnalysisAgent, BioAnalysisAgent, ContentCreationAgent, CopywritingAgent, FeedAnalysisAgent,
    ImageConceptAgent, LinkAnalysisAgent, ProfileAnalysisAgent,
};
use crate::analysis::models::{AnalysisResult, ProfileData};
use crate::analysis::scoring::overall_score;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Substituted for the link analysis when the profile has no bio link.
pub const LINK_NOT_PROVIDED: &str = "Link não fornecido";

/// Substituted for the feed analysis when the profile has no recent posts.
pub const POSTS_NOT_PROVIDED: &str = "Posts não fornecidos";

/// Niche and tone are unknown until the bio analysis runs; downstream agents
/// receive this marker instead.
const PENDING_BIO_ANALYSIS: &str = "Será determinado com base na análise da bio";

/// Runs the seven agents against one profile and aggregates their outputs
/// positionally.
pub async fn analyze_profile(
    llm: &LlmClient,
    api_key: &str,
    profile: &ProfileData,
) -> Result<AnalysisResult, AppError> {
    info!(
        "Analyzing profile @{} ({} followers)",
        profile.username, profile.followers
    );

    let profile_input = profile_payload(profile);
    let bio_input = bio_payload(profile);
    let content_input = content_payload(profile);
    let copy_input = copy_payload(profile);
    let image_input = image_payload(profile);

    let (
        profile_analysis,
        bio_analysis,
        link_analysis,
        feed_analysis,
        content_suggestions,
        copy_suggestions,
        image_suggestions,
    ) = tokio::try_join!(
        ProfileAnalysisAgent.analyze(llm, api_key, &profile_input),
        BioAnalysisAgent.analyze(llm, api_key, &bio_input),
        async {
            match link_payload(profile) {
                Some(payload) => LinkAnalysisAgent.analyze(llm, api_key, &payload).await,
                None => Ok(LINK_NOT_PROVIDED.to_string()),
            }
        },
        async {
            match feed_payload(profile) {
                Some(payload) => FeedAnalysisAgent.analyze(llm, api_key, &payload).await,
                None => Ok(POSTS_NOT_PROVIDED.to_string()),
            }
        },
        ContentCreationAgent.analyze(llm, api_key, &content_input),
        CopywritingAgent.analyze(llm, api_key, &copy_input),
        ImageConceptAgent.analyze(llm, api_key, &image_input),
    )
    .map_err(|source| AppError::Llm {
        message: "Erro ao analisar o perfil".to_string(),
        source,
    })?;

    info!("Profile @{} analyzed by all agents", profile.username);

    Ok(AnalysisResult {
        profile_analysis,
        bio_analysis,
        link_analysis,
        feed_analysis,
        content_suggestions,
        copy_suggestions,
        image_suggestions,
        overall_score: overall_score(),
    })
}

// Each agent sees only the profile fields its prompt needs.

fn profile_payload(profile: &ProfileData) -> Value {
    json!({
        "username": profile.username,
        "followers": profile.followers,
        "bioLink": profile.bio_link,
        "profileImageUrl": profile.profile_image_url,
    })
}

fn bio_payload(profile: &ProfileData) -> Value {
    json!({
        "username": profile.username,
        "bio": profile.bio,
    })
}

fn link_payload(profile: &ProfileData) -> Option<Value> {
    profile
        .bio_link
        .as_deref()
        .filter(|link| !link.is_empty())
        .map(|link| {
            json!({
                "username": profile.username,
                "bioLink": link,
            })
        })
}

fn feed_payload(profile: &ProfileData) -> Option<Value> {
    match &profile.recent_posts {
        Some(posts) if !posts.is_empty() => Some(json!({
            "username": profile.username,
            "posts": posts,
        })),
        _ => None,
    }
}

fn content_payload(profile: &ProfileData) -> Value {
    json!({
        "username": profile.username,
        "followers": profile.followers,
        "bio": profile.bio,
        "niche": PENDING_BIO_ANALYSIS,
    })
}

fn copy_payload(profile: &ProfileData) -> Value {
    json!({
        "username": profile.username,
        "bio": profile.bio,
        "tone": PENDING_BIO_ANALYSIS,
    })
}

fn image_payload(profile: &ProfileData) -> Value {
    json!({
        "username": profile.username,
        "niche": PENDING_BIO_ANALYSIS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProfileData {
        ProfileData {
            username: "maria.fit".to_string(),
            followers: 12400,
            bio: "Treinos em casa e vida saudável".to_string(),
            bio_link: Some("https://linktr.ee/maria.fit".to_string()),
            profile_image_url: Some("https://cdn.example.com/maria.jpg".to_string()),
            recent_posts: Some(vec![
                "https://instagram.com/p/abc".to_string(),
                "https://instagram.com/p/def".to_string(),
            ]),
        }
    }

    fn bare_profile() -> ProfileData {
        ProfileData {
            username: "joao".to_string(),
            followers: 150,
            bio: String::new(),
            bio_link: None,
            profile_image_url: None,
            recent_posts: None,
        }
    }

    #[test]
    fn test_profile_payload_carries_only_profile_fields() {
        let payload = profile_payload(&profile());
        assert_eq!(payload["username"], "maria.fit");
        assert_eq!(payload["followers"], 12400);
        assert_eq!(payload["bioLink"], "https://linktr.ee/maria.fit");
        assert!(payload.get("bio").is_none());
        assert!(payload.get("posts").is_none());
    }

    #[test]
    fn test_bio_payload_carries_username_and_bio() {
        let payload = bio_payload(&profile());
        assert_eq!(payload["username"], "maria.fit");
        assert_eq!(payload["bio"], "Treinos em casa e vida saudável");
        assert!(payload.get("followers").is_none());
    }

    #[test]
    fn test_link_payload_absent_without_bio_link() {
        assert!(link_payload(&bare_profile()).is_none());

        let mut empty_link = bare_profile();
        empty_link.bio_link = Some(String::new());
        assert!(link_payload(&empty_link).is_none());

        let payload = link_payload(&profile()).unwrap();
        assert_eq!(payload["bioLink"], "https://linktr.ee/maria.fit");
    }

    #[test]
    fn test_feed_payload_absent_without_posts() {
        assert!(feed_payload(&bare_profile()).is_none());

        let mut empty_posts = bare_profile();
        empty_posts.recent_posts = Some(vec![]);
        assert!(feed_payload(&empty_posts).is_none());

        let payload = feed_payload(&profile()).unwrap();
        assert_eq!(payload["posts"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_downstream_payloads_carry_pending_marker() {
        let p = profile();
        assert_eq!(content_payload(&p)["niche"], PENDING_BIO_ANALYSIS);
        assert_eq!(copy_payload(&p)["tone"], PENDING_BIO_ANALYSIS);
        assert_eq!(image_payload(&p)["niche"], PENDING_BIO_ANALYSIS);
        assert!(image_payload(&p).get("bio").is_none());
    }

    #[test]
    fn test_sentinel_strings_are_fixed() {
        assert_eq!(LINK_NOT_PROVIDED, "Link não fornecido");
        assert_eq!(POSTS_NOT_PROVIDED, "Posts não fornecidos");
    }
}

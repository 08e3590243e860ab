//! The seven analysis agents.
//!
//! One trait, seven constant-configured implementations: each agent only
//! supplies its fixed system prompt. The shared `analyze` method serializes
//! the payload as the user message and goes through the LLM client.

use async_trait::async_trait;
use serde_json::Value;

use crate::analysis::prompts::{
    BIO_ANALYSIS_PROMPT, CONTENT_CREATION_PROMPT, COPYWRITING_PROMPT, FEED_ANALYSIS_PROMPT,
    IMAGE_CONCEPT_PROMPT, LINK_ANALYSIS_PROMPT, PROFILE_ANALYSIS_PROMPT,
};
use crate::llm_client::{LlmClient, LlmError};

/// One analysis agent: a fixed system prompt paired with a single
/// chat-completion call.
#[async_trait]
pub trait AnalysisAgent: Send + Sync {
    fn system_prompt(&self) -> &'static str;

    async fn analyze(
        &self,
        llm: &LlmClient,
        api_key: &str,
        payload: &Value,
    ) -> Result<String, LlmError> {
        llm.chat(api_key, self.system_prompt(), &payload.to_string())
            .await
    }
}

pub struct ProfileAnalysisAgent;

#[async_trait]
impl AnalysisAgent for ProfileAnalysisAgent {
    fn system_prompt(&self) -> &'static str {
        PROFILE_ANALYSIS_PROMPT
    }
}

pub struct BioAnalysisAgent;

#[async_trait]
impl AnalysisAgent for BioAnalysisAgent {
    fn system_prompt(&self) -> &'static str {
        BIO_ANALYSIS_PROMPT
    }
}

pub struct LinkAnalysisAgent;

#[async_trait]
impl AnalysisAgent for LinkAnalysisAgent {
    fn system_prompt(&self) -> &'static str {
        LINK_ANALYSIS_PROMPT
    }
}

pub struct FeedAnalysisAgent;

#[async_trait]
impl AnalysisAgent for FeedAnalysisAgent {
    fn system_prompt(&self) -> &'static str {
        FEED_ANALYSIS_PROMPT
    }
}

pub struct ContentCreationAgent;

#[async_trait]
impl AnalysisAgent for ContentCreationAgent {
    fn system_prompt(&self) -> &'static str {
        CONTENT_CREATION_PROMPT
    }
}

pub struct CopywritingAgent;

#[async_trait]
impl AnalysisAgent for CopywritingAgent {
    fn system_prompt(&self) -> &'static str {
        COPYWRITING_PROMPT
    }
}

pub struct ImageConceptAgent;

#[async_trait]
impl AnalysisAgent for ImageConceptAgent {
    fn system_prompt(&self) -> &'static str {
        IMAGE_CONCEPT_PROMPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_agent_has_a_distinct_prompt() {
        let prompts = [
            ProfileAnalysisAgent.system_prompt(),
            BioAnalysisAgent.system_prompt(),
            LinkAnalysisAgent.system_prompt(),
            FeedAnalysisAgent.system_prompt(),
            ContentCreationAgent.system_prompt(),
            CopywritingAgent.system_prompt(),
            ImageConceptAgent.system_prompt(),
        ];
        for prompt in &prompts {
            assert!(!prompt.is_empty());
        }
        let unique: std::collections::HashSet<_> = prompts.iter().collect();
        assert_eq!(unique.len(), prompts.len());
    }

    #[test]
    fn test_analysis_prompts_ask_for_username_mention() {
        // The four analysis agents personalize by citing @username.
        for prompt in [
            ProfileAnalysisAgent.system_prompt(),
            BioAnalysisAgent.system_prompt(),
            LinkAnalysisAgent.system_prompt(),
            FeedAnalysisAgent.system_prompt(),
        ] {
            assert!(prompt.contains("@username"));
        }
    }
}

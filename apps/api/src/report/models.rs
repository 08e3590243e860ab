use serde::{Deserialize, Serialize};

use crate::analysis::models::OverallScore;

/// Persisted report: the analysis aggregate reshaped into the fixed tab
/// layout. Field and tab names are pinned by the stored JSON format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    pub overall_score: OverallScore,
    pub tabs: ReportTabs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTabs {
    pub pontos_fortes: SectionHighlights,
    pub melhorias: SectionHighlights,
    pub acoes_recomendadas: ActionPlan,
    pub conteudo_estrategico: StrategicContent,
    pub analise_completa: FullAnalysis,
}

/// Per-section highlights, shared by the strengths and improvements tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionHighlights {
    pub profile: String,
    pub bio: String,
    pub link: String,
    pub feed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub short_term: String,
    pub medium_term: String,
    pub long_term: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicContent {
    pub content_suggestions: String,
    pub copy_suggestions: String,
    pub image_suggestions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysis {
    pub profile_analysis: String,
    pub bio_analysis: String,
    pub link_analysis: String,
    pub feed_analysis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> StoredReport {
        StoredReport {
            overall_score: OverallScore {
                score: 75,
                methodology: "fixa".to_string(),
            },
            tabs: ReportTabs {
                pontos_fortes: SectionHighlights {
                    profile: "p".to_string(),
                    bio: "b".to_string(),
                    link: "l".to_string(),
                    feed: "f".to_string(),
                },
                melhorias: SectionHighlights {
                    profile: "p".to_string(),
                    bio: "b".to_string(),
                    link: "l".to_string(),
                    feed: "f".to_string(),
                },
                acoes_recomendadas: ActionPlan {
                    short_term: "curto".to_string(),
                    medium_term: "médio".to_string(),
                    long_term: "longo".to_string(),
                },
                conteudo_estrategico: StrategicContent {
                    content_suggestions: "conteúdo".to_string(),
                    copy_suggestions: "copy".to_string(),
                    image_suggestions: "imagem".to_string(),
                },
                analise_completa: FullAnalysis {
                    profile_analysis: "perfil".to_string(),
                    bio_analysis: "bio".to_string(),
                    link_analysis: "link".to_string(),
                    feed_analysis: "feed".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_tab_keys_match_stored_format() {
        let value = serde_json::to_value(sample_report()).unwrap();
        let tabs = value.get("tabs").unwrap();
        for key in [
            "pontosFortes",
            "melhorias",
            "acoesRecomendadas",
            "conteudoEstrategico",
            "analiseCompleta",
        ] {
            assert!(tabs.get(key).is_some(), "missing tab key {key}");
        }
        assert!(value.get("overallScore").is_some());
    }

    #[test]
    fn test_action_plan_uses_camel_case_terms() {
        let value = serde_json::to_value(sample_report()).unwrap();
        let actions = &value["tabs"]["acoesRecomendadas"];
        assert!(actions.get("shortTerm").is_some());
        assert!(actions.get("mediumTerm").is_some());
        assert!(actions.get("longTerm").is_some());
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: StoredReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}

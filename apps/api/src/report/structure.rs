//! Reshapes an analysis aggregate into the fixed tab layout.
//!
//! The strengths, improvements, and actions tabs are placeholders: a real
//! implementation would extract them from the analysis texts.

use crate::analysis::models::AnalysisResult;
use crate::report::models::{
    ActionPlan, FullAnalysis, ReportTabs, SectionHighlights, StoredReport, StrategicContent,
};

/// Builds the persisted tab structure from an analysis aggregate.
pub fn structure_report(data: AnalysisResult) -> StoredReport {
    StoredReport {
        overall_score: data.overall_score,
        tabs: ReportTabs {
            pontos_fortes: strengths(),
            melhorias: improvements(),
            acoes_recomendadas: recommended_actions(),
            conteudo_estrategico: StrategicContent {
                content_suggestions: data.content_suggestions,
                copy_suggestions: data.copy_suggestions,
                image_suggestions: data.image_suggestions,
            },
            analise_completa: FullAnalysis {
                profile_analysis: data.profile_analysis,
                bio_analysis: data.bio_analysis,
                link_analysis: data.link_analysis,
                feed_analysis: data.feed_analysis,
            },
        },
    }
}

fn strengths() -> SectionHighlights {
    SectionHighlights {
        profile: "Pontos fortes do perfil seriam extraídos da análise".to_string(),
        bio: "Pontos fortes da bio seriam extraídos da análise".to_string(),
        link: "Pontos fortes do link seriam extraídos da análise".to_string(),
        feed: "Pontos fortes do feed seriam extraídos da análise".to_string(),
    }
}

fn improvements() -> SectionHighlights {
    SectionHighlights {
        profile: "Melhorias do perfil seriam extraídas da análise".to_string(),
        bio: "Melhorias da bio seriam extraídas da análise".to_string(),
        link: "Melhorias do link seriam extraídas da análise".to_string(),
        feed: "Melhorias do feed seriam extraídas da análise".to_string(),
    }
}

fn recommended_actions() -> ActionPlan {
    ActionPlan {
        short_term: "Ações de curto prazo seriam extraídas das análises".to_string(),
        medium_term: "Ações de médio prazo seriam extraídas das análises".to_string(),
        long_term: "Ações de longo prazo seriam extraídas das análises".to_string(),
    }
}

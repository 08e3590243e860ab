//! Overall scoring. The score is a fixed placeholder: a real implementation
//! would weigh extracted signals from each analysis text.

use crate::analysis::models::OverallScore;

const SCORE: u32 = 75;
const METHODOLOGY: &str = "A pontuação é calculada com base na análise de perfil (30%), análise de bio (30%), análise de link (20%) e análise de feed (20%).";

/// Returns the fixed overall score attached to every analysis.
pub fn overall_score() -> OverallScore {
    OverallScore {
        score: SCORE,
        methodology: METHODOLOGY.to_string(),
    }
}

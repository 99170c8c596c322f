//! Agent matcher: ranks catalog agents against per-category applicability judgments.
//!
//! Algorithm:
//! 1. The primary partner always leads the list (score 98, fixed reasons).
//! 2. Applicable categories are visited in `CATEGORY_PRIORITY` order; each
//!    contributes its catalog records in catalog order. The first applicable
//!    category scores 95, the rest 85.
//! 3. Remaining slots are backfilled from the general category (score 80).
//! 4. No identifier appears twice and the list never exceeds `max_results`.
//!
//! Pure and total: no I/O, no shared mutable state.

use serde::{Deserialize, Serialize};

use crate::agents::catalog::{agents_in, primary_agent, AgentCategory, AgentRecord};

/// Fixed business priority of the non-primary categories. Earlier wins.
pub const CATEGORY_PRIORITY: [AgentCategory; 4] = [
    AgentCategory::ItSpecialist,
    AgentCategory::HighClass,
    AgentCategory::General,
    AgentCategory::YoungCareer,
];

/// Reasons attached to the primary partner, independent of the judgments.
pub const PRIMARY_REASONS: [&str; 3] = [
    "あなたに合ったアドバイザーをマッチングしてくれる",
    "10万件以上の求人から最適な案件を紹介",
    "完全無料で相談できる",
];

/// Reasons used for backfilled general agents when the general judgment has none.
pub const GENERAL_FALLBACK_REASONS: [&str; 2] = [
    "幅広い求人から選択肢を広げられる",
    "業界最大級の求人数で比較検討しやすい",
];

pub const PRIMARY_SCORE: u8 = 98;
pub const FIRST_CATEGORY_SCORE: u8 = 95;
pub const OTHER_CATEGORY_SCORE: u8 = 85;
pub const BACKFILL_SCORE: u8 = 80;

pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Whether one advisor category fits the candidate, and why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryJudgment {
    #[serde(default)]
    pub applicable: bool,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// One judgment per non-primary category, as produced by the market evaluation.
/// Missing categories deserialize as not applicable with no reasons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryJudgments {
    pub it_specialist: CategoryJudgment,
    pub high_class: CategoryJudgment,
    pub general: CategoryJudgment,
    pub young_career: CategoryJudgment,
}

impl CategoryJudgments {
    /// The judgment for a category. `None` for `Primary`, which is never judged.
    pub fn get(&self, category: AgentCategory) -> Option<&CategoryJudgment> {
        match category {
            AgentCategory::Primary => None,
            AgentCategory::ItSpecialist => Some(&self.it_specialist),
            AgentCategory::HighClass => Some(&self.high_class),
            AgentCategory::General => Some(&self.general),
            AgentCategory::YoungCareer => Some(&self.young_career),
        }
    }
}

/// A catalog record chosen for a candidate, with the reasons it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedAgent {
    #[serde(flatten)]
    pub agent: AgentRecord,
    pub match_reasons: Vec<String>,
    /// Display ordering metadata only.
    pub match_score: u8,
}

impl MatchedAgent {
    fn new(agent: &AgentRecord, match_reasons: Vec<String>, match_score: u8) -> Self {
        Self {
            agent: *agent,
            match_reasons,
            match_score,
        }
    }

    pub fn identifier(&self) -> &'static str {
        self.agent.identifier
    }
}

/// Selects at most `max_results` agents for the given judgments.
pub fn match_agents(judgments: &CategoryJudgments, max_results: usize) -> Vec<MatchedAgent> {
    let mut results: Vec<MatchedAgent> = Vec::with_capacity(max_results.min(16));
    if max_results == 0 {
        return results;
    }

    if let Some(primary) = primary_agent() {
        results.push(MatchedAgent::new(
            primary,
            to_owned_reasons(&PRIMARY_REASONS),
            PRIMARY_SCORE,
        ));
    }

    let applicable: Vec<(AgentCategory, &CategoryJudgment)> = CATEGORY_PRIORITY
        .iter()
        .filter_map(|&c| judgments.get(c).map(|j| (c, j)))
        .filter(|(_, j)| j.applicable)
        .collect();

    'categories: for (rank, (category, judgment)) in applicable.iter().enumerate() {
        let score = if rank == 0 {
            FIRST_CATEGORY_SCORE
        } else {
            OTHER_CATEGORY_SCORE
        };

        for agent in agents_in(*category) {
            if results.len() >= max_results {
                break 'categories;
            }
            if contains(&results, agent.identifier) {
                continue;
            }
            results.push(MatchedAgent::new(agent, judgment.reasons.clone(), score));
        }
    }

    if results.len() < max_results {
        let backfill_reasons = if judgments.general.reasons.is_empty() {
            to_owned_reasons(&GENERAL_FALLBACK_REASONS)
        } else {
            judgments.general.reasons.clone()
        };

        for agent in agents_in(AgentCategory::General) {
            if results.len() >= max_results {
                break;
            }
            if contains(&results, agent.identifier) {
                continue;
            }
            results.push(MatchedAgent::new(
                agent,
                backfill_reasons.clone(),
                BACKFILL_SCORE,
            ));
        }
    }

    results.truncate(max_results);
    results
}

fn contains(results: &[MatchedAgent], identifier: &str) -> bool {
    results.iter().any(|r| r.identifier() == identifier)
}

fn to_owned_reasons(reasons: &[&str]) -> Vec<String> {
    reasons.iter().map(|r| r.to_string()).collect()
}

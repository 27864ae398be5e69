use super::rubric::{CRITERION_MAX_SCORE, Criterion, Grade, TOTAL_MAX_SCORE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaScore {
    pub name: Criterion,
    #[schemars(description = "Either 0 or maxScore.")]
    pub score: u32,
    pub max_score: u32,
    pub feedback: String,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub total_score: u32,
    pub max_score: u32,
    #[schemars(description = "Always four entries: Role, Context, Task, Constraints.")]
    pub criteria: Vec<CriteriaScore>,
    pub overall_feedback: String,
    pub grade: Grade,
}

impl EvaluationResult {
    /// Criteria that did not reach their maximum, in rubric order.
    pub fn failing(&self) -> impl Iterator<Item = &CriteriaScore> {
        self.criteria.iter().filter(|c| c.score < c.max_score)
    }

    pub fn first_failing(&self) -> Option<&CriteriaScore> {
        self.failing().next()
    }

    pub fn percentage(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        f64::from(self.total_score) / f64::from(self.max_score) * 100.0
    }
}

/// Scores a prompt against the four rubric criteria.
///
/// Matching is case-insensitive substring search. Any input is accepted,
/// blank text simply fails every criterion.
pub fn evaluate(text: &str) -> EvaluationResult {
    let lowered = text.to_lowercase();
    let word_count = text.split_whitespace().count();

    let criteria: Vec<CriteriaScore> = Criterion::ALL
        .iter()
        .map(|&criterion| score_criterion(criterion, &lowered, word_count))
        .collect();

    let total_score = criteria.iter().map(|c| c.score).sum();
    let grade = Grade::from_score(total_score);

    log::debug!("Evaluated prompt ({word_count} words): {total_score}/{TOTAL_MAX_SCORE} -> {grade:?}");

    EvaluationResult {
        total_score,
        max_score: TOTAL_MAX_SCORE,
        criteria,
        overall_feedback: grade.overall_feedback().to_string(),
        grade,
    }
}

fn score_criterion(criterion: Criterion, lowered: &str, word_count: usize) -> CriteriaScore {
    let keyword = criterion.keywords().iter().find(|kw| lowered.contains(*kw));
    let long_enough = criterion
        .word_threshold()
        .is_some_and(|threshold| word_count > threshold);

    match keyword {
        Some(kw) => log::debug!("   {}: matched '{kw}'", criterion.name()),
        None if long_enough => log::debug!("   {}: passed on length", criterion.name()),
        None => log::debug!("   {}: no match", criterion.name()),
    }

    let found = keyword.is_some() || long_enough;
    CriteriaScore {
        name: criterion,
        score: if found { CRITERION_MAX_SCORE } else { 0 },
        max_score: CRITERION_MAX_SCORE,
        feedback: criterion.feedback(found).to_string(),
        found,
    }
}

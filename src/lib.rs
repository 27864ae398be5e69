pub mod config;
pub mod error;
pub mod core {
    pub mod evaluator;
    pub mod rubric;
}
pub mod simulation {
    pub mod synthesizer;
    pub mod templates;
}
pub mod report;
pub mod session;

pub use crate::core::evaluator::{CriteriaScore, EvaluationResult, evaluate};
pub use crate::core::rubric::{Criterion, Grade};
pub use crate::simulation::synthesizer::synthesize;

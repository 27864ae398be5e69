use super::templates::{
    EXCELLENT_TEMPLATE, FAIR_TEMPLATE, FALLBACK_CRITERION, GOOD_TEMPLATE,
    NEEDS_IMPROVEMENT_TEMPLATE,
};
use crate::core::evaluator::EvaluationResult;
use crate::core::rubric::Grade;

/// Number of characters of the prompt echoed back by the fair template.
pub const EXCERPT_CHARS: usize = 50;

pub fn template_for(grade: Grade) -> &'static str {
    match grade {
        Grade::Excellent => EXCELLENT_TEMPLATE,
        Grade::Good => GOOD_TEMPLATE,
        Grade::Fair => FAIR_TEMPLATE,
        Grade::NeedsImprovement => NEEDS_IMPROVEMENT_TEMPLATE,
    }
}

/// Builds the canned response whose tone follows the evaluation grade.
pub fn synthesize(text: &str, evaluation: &EvaluationResult) -> String {
    let template = template_for(evaluation.grade);

    match evaluation.grade {
        Grade::Excellent => template.to_string(),
        Grade::Good => {
            let criterion = evaluation
                .first_failing()
                .map(|c| c.name.label().to_lowercase())
                .unwrap_or_else(|| FALLBACK_CRITERION.to_string());
            template.replace("{criterion}", &criterion)
        }
        Grade::Fair => {
            let suggestions = evaluation
                .failing()
                .map(|c| format!("- {}", c.feedback))
                .collect::<Vec<_>>()
                .join("\n");
            // User text goes in last so it is never scanned for placeholders.
            template
                .replace("{suggestions}", &suggestions)
                .replace("{excerpt}", &excerpt(text))
        }
        Grade::NeedsImprovement => {
            let suggestions = evaluation
                .failing()
                .enumerate()
                .map(|(i, c)| format!("{}. {}", i + 1, c.feedback))
                .collect::<Vec<_>>()
                .join("\n\n");
            template.replace("{suggestions}", &suggestions)
        }
    }
}

/// First `EXCERPT_CHARS` characters of `text`, always followed by "...".
pub fn excerpt(text: &str) -> String {
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::evaluate;
    use crate::core::rubric::Criterion;

    fn with_grade(mut evaluation: EvaluationResult, grade: Grade) -> EvaluationResult {
        evaluation.grade = grade;
        evaluation
    }

    #[test]
    fn needs_improvement_numbers_every_failure() {
        let evaluation = evaluate("hola");
        let response = synthesize("hola", &evaluation);
        for (i, criterion) in Criterion::ALL.iter().enumerate() {
            let line = format!("{}. {}", i + 1, criterion.feedback(false));
            assert!(response.contains(&line), "missing line: {line}");
        }
        assert!(!response.contains("{suggestions}"));
    }

    #[test]
    fn excellent_lists_no_feedback() {
        let evaluation = with_grade(evaluate("hola"), Grade::Excellent);
        let response = synthesize("hola", &evaluation);
        assert_eq!(response, EXCELLENT_TEMPLATE);
        for c in &evaluation.criteria {
            assert!(!response.contains(&c.feedback));
        }
    }

    #[test]
    fn good_names_first_failing_criterion_only() {
        let text = "Eres un tutor. Explica la fotosíntesis en máximo 50 palabras.";
        let evaluation = evaluate(text);
        assert_eq!(evaluation.grade, Grade::Good);
        let response = synthesize(text, &evaluation);
        assert!(response.contains("más detalles sobre contexto podría"));
    }

    #[test]
    fn good_without_failures_uses_fallback() {
        let text = "Eres un experto. Necesito ayuda. Explica algo. Máximo 10 palabras.";
        let evaluation = with_grade(evaluate(text), Grade::Good);
        assert!(evaluation.first_failing().is_none());
        let response = synthesize(text, &evaluation);
        assert!(response.contains(FALLBACK_CRITERION));
    }

    #[test]
    fn fair_echoes_excerpt_and_bullets() {
        let text = "Explica la revolución francesa con todo lujo de detalle y sin dejarte nada";
        let evaluation = evaluate("Explica esto para mi curso");
        assert_eq!(evaluation.grade, Grade::Fair);
        let response = synthesize(text, &evaluation);

        let expected: String = text.chars().take(EXCERPT_CHARS).collect();
        assert!(response.contains(&format!("\"{expected}...\"")));
        assert!(response.contains(&format!("- {}", Criterion::Role.feedback(false))));
        assert!(response.contains(&format!("- {}", Criterion::Constraints.feedback(false))));
        assert!(!response.contains(Criterion::Task.feedback(false)));
    }

    #[test]
    fn excerpt_counts_characters_not_bytes() {
        let text = "á".repeat(60);
        let out = excerpt(&text);
        assert_eq!(out.chars().count(), EXCERPT_CHARS + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn short_excerpt_still_gets_ellipsis() {
        assert_eq!(excerpt("hola"), "hola...");
    }

    #[test]
    fn placeholders_in_user_text_are_left_alone() {
        let text = "{suggestions} para el curso, explica";
        let evaluation = evaluate(text);
        assert_eq!(evaluation.grade, Grade::Fair);
        let response = synthesize(text, &evaluation);
        assert!(response.contains("\"{suggestions} para el curso, explica...\""));
    }
}

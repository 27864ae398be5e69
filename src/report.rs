use crate::core::evaluator::EvaluationResult;
use crate::session::HistoryEntry;
use schemars::schema_for;
use serde_json::Value;

pub fn render_evaluation(evaluation: &EvaluationResult) -> String {
    let mut out = format!(
        "Evaluación: {}\nPuntuación: {} / {} ({:.0}%)\n\nCriterios evaluados:\n",
        evaluation.grade.label(),
        evaluation.total_score,
        evaluation.max_score,
        evaluation.percentage()
    );
    for c in &evaluation.criteria {
        let marker = if c.found { "✅" } else { "❌" };
        out.push_str(&format!(
            "  {marker} {:<14} {:>2}/{}\n     {}\n",
            c.name.label(),
            c.score,
            c.max_score,
            c.feedback
        ));
    }
    out.push('\n');
    out.push_str(&evaluation.overall_feedback);
    out
}

pub fn render_history<'a>(entries: impl IntoIterator<Item = &'a HistoryEntry>) -> String {
    entries
        .into_iter()
        .map(|h| format!("{}  {}/100", h.excerpt, h.score))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON Schema describing the serialized `EvaluationResult`.
pub fn evaluation_schema() -> serde_json::Result<Value> {
    serde_json::to_value(schema_for!(EvaluationResult))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::evaluate;
    use uuid::Uuid;

    #[test]
    fn evaluation_report_lists_every_criterion() {
        let evaluation = evaluate("hola");
        let text = render_evaluation(&evaluation);
        assert!(text.contains("Necesita mejorar"));
        assert!(text.contains("0 / 100 (0%)"));
        for c in &evaluation.criteria {
            assert!(text.contains(c.name.label()));
            assert!(text.contains(&c.feedback));
        }
        assert!(text.ends_with(&evaluation.overall_feedback));
    }

    #[test]
    fn evaluation_report_layout() {
        let evaluation = evaluate("Explica esto para mi curso");
        let text = render_evaluation(&evaluation);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Evaluación: Regular");
        assert_eq!(lines[1], "Puntuación: 50 / 100 (50%)");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Criterios evaluados:");
        assert!(lines[4].starts_with("  ❌ Rol"));
        assert!(lines[4].ends_with(" 0/25"));
        assert!(lines[6].starts_with("  ✅ Contexto"));
        assert!(lines[6].ends_with("25/25"));
        assert_eq!(lines.len(), 4 + 8 + 2);
    }

    #[test]
    fn history_report_has_one_line_per_entry() {
        let entries = vec![
            HistoryEntry { id: Uuid::new_v4(), excerpt: "hola...".into(), score: 0 },
            HistoryEntry { id: Uuid::new_v4(), excerpt: "Eres un...".into(), score: 75 },
        ];
        let text = render_history(&entries);
        assert_eq!(text, "hola...  0/100\nEres un...  75/100");
    }

    #[test]
    fn schema_names_camel_case_fields() {
        let schema = evaluation_schema().unwrap();
        let props = schema["properties"].as_object().unwrap();
        for key in ["totalScore", "maxScore", "criteria", "overallFeedback", "grade"] {
            assert!(props.contains_key(key), "missing {key}");
        }
    }
}

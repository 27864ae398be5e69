use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Points awarded to a criterion that passes. There is no partial credit.
pub const CRITERION_MAX_SCORE: u32 = 25;

/// Sum of every criterion's maximum.
pub const TOTAL_MAX_SCORE: u32 = CRITERION_MAX_SCORE * Criterion::ALL.len() as u32;

/// Prompts longer than this many words are assumed to carry context.
pub const CONTEXT_WORD_THRESHOLD: usize = 15;

const ROLE_KEYWORDS: &[&str] = &[
    "eres", "actúa como", "rol", "experto", "especialista",
    "profesor", "tutor", "consultor", "asistente", "eres un",
];

const CONTEXT_KEYWORDS: &[&str] = &[
    "contexto:", "para", "porque", "con el fin de", "objetivo",
    "necesito", "estoy", "proyecto", "trabajo", "curso",
];

const TASK_KEYWORDS: &[&str] = &[
    "crea", "genera", "escribe", "explica", "describe", "analiza",
    "resume", "lista", "compara", "diseña", "desarrolla", "traduce",
    "corrige", "mejora", "sugiere", "proporciona",
];

const CONSTRAINT_KEYWORDS: &[&str] = &[
    "máximo", "mínimo", "no más de", "al menos", "debe", "no debe",
    "formato", "estilo", "tono", "longitud", "palabras", "párrafos",
    "incluye", "evita", "usa", "no uses", "requisitos", "restricciones",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[schemars(description = "One of the four rubric dimensions.")]
pub enum Criterion {
    Role,
    Context,
    Task,
    Constraints,
}

impl Criterion {
    /// Evaluation order. Results and response listings always follow it.
    pub const ALL: [Criterion; 4] = [
        Criterion::Role,
        Criterion::Context,
        Criterion::Task,
        Criterion::Constraints,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Criterion::Role => "Role",
            Criterion::Context => "Context",
            Criterion::Task => "Task",
            Criterion::Constraints => "Constraints",
        }
    }

    /// Display name used inside the Spanish response copy.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Role => "Rol",
            Criterion::Context => "Contexto",
            Criterion::Task => "Tarea",
            Criterion::Constraints => "Restricciones",
        }
    }

    /// Lower-case substrings that make this criterion pass.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Criterion::Role => ROLE_KEYWORDS,
            Criterion::Context => CONTEXT_KEYWORDS,
            Criterion::Task => TASK_KEYWORDS,
            Criterion::Constraints => CONSTRAINT_KEYWORDS,
        }
    }

    /// Word count above which the criterion passes without a keyword.
    pub fn word_threshold(self) -> Option<usize> {
        match self {
            Criterion::Context => Some(CONTEXT_WORD_THRESHOLD),
            _ => None,
        }
    }

    pub fn feedback(self, passed: bool) -> &'static str {
        match (self, passed) {
            (Criterion::Role, true) => "✓ Buen trabajo definiendo un rol para la IA.",
            (Criterion::Role, false) => {
                "✗ Especifica un rol (ej: \"Eres un experto en...\"). Así la IA adopta la perspectiva adecuada."
            }
            (Criterion::Context, true) => "✓ Aportas contexto útil para la IA.",
            (Criterion::Context, false) => {
                "✗ Añade información de fondo: explica por qué lo necesitas o en qué situación lo usarás."
            }
            (Criterion::Task, true) => "✓ La tarea está claramente especificada.",
            (Criterion::Task, false) => {
                "✗ Indica con claridad qué debe hacer la IA usando verbos de acción (genera, explica, crea...)."
            }
            (Criterion::Constraints, true) => "✓ Incluyes restricciones concretas.",
            (Criterion::Constraints, false) => {
                "✗ Añade restricciones o requisitos (ej: longitud, formato, tono, qué incluir o evitar)."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[schemars(description = "Qualitative band derived from the total score.")]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Grade {
    /// Bands are lower-bound inclusive and checked from the top down.
    pub fn from_score(total: u32) -> Self {
        match total {
            90.. => Grade::Excellent,
            70..=89 => Grade::Good,
            50..=69 => Grade::Fair,
            _ => Grade::NeedsImprovement,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excelente",
            Grade::Good => "Bueno",
            Grade::Fair => "Regular",
            Grade::NeedsImprovement => "Necesita mejorar",
        }
    }

    pub fn overall_feedback(self) -> &'static str {
        match self {
            Grade::Excellent => {
                "¡Excelente prompt! Incluye todos los elementos clave y producirá respuestas precisas y ajustadas a lo que necesitas."
            }
            Grade::Good => {
                "Buen prompt. Cubre la mayoría de los elementos importantes; completa los criterios que faltan para obtener respuestas aún más precisas."
            }
            Grade::Fair => {
                "Prompt regular. Faltan elementos importantes: concreta mejor el rol, el contexto o las restricciones para mejorar las respuestas."
            }
            Grade::NeedsImprovement => {
                "El prompt necesita mejoras significativas. Un buen prompt combina un rol claro, contexto relevante, una tarea concreta y restricciones útiles."
            }
        }
    }
}

use crate::config::SimulatorConfig;
use crate::core::evaluator::{EvaluationResult, evaluate};
use crate::error::SimulatorError;
use crate::simulation::synthesizer::{excerpt, synthesize};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tokio::time::sleep;
use uuid::Uuid;

pub const EXAMPLE_PROMPT: &str = r#"Eres un profesor universitario experto en algoritmos de ordenamiento.

Contexto: Estoy preparando una clase para estudiantes de segundo año de Ingeniería de Sistemas sobre algoritmos de ordenamiento. Necesito material didáctico claro y accesible.

Tarea: Explica el algoritmo QuickSort de manera sencilla, usando una analogía con objetos de la vida cotidiana.

Restricciones:
- Máximo 200 palabras
- Incluye un ejemplo paso a paso
- Usa un lenguaje simple, sin jerga técnica excesiva
- Menciona la complejidad temporal de forma breve"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub excerpt: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub evaluation: EvaluationResult,
    pub response: String,
}

/// One line typed into the interactive runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    History,
    Example,
    Prompt(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" => Command::Quit,
            ":reset" => Command::Reset,
            ":history" => Command::History,
            ":example" => Command::Example,
            _ => Command::Prompt(line.to_string()),
        }
    }
}

/// State the front end would otherwise keep in widgets: the last result
/// and a bounded list of recent attempts.
pub struct Session {
    config: SimulatorConfig,
    history: VecDeque<HistoryEntry>,
    current: Option<Submission>,
}

impl Session {
    pub fn new(config: SimulatorConfig) -> Self {
        let history = VecDeque::with_capacity(config.history_cap);
        Self { config, history, current: None }
    }

    pub async fn submit(&mut self, prompt: &str) -> Result<&Submission, SimulatorError> {
        if prompt.trim().is_empty() {
            log::warn!("Rejected blank prompt");
            return Err(SimulatorError::EmptyPrompt);
        }

        self.current = None;
        if !self.config.delay.is_zero() {
            log::debug!("Simulating processing for {:?}", self.config.delay);
            sleep(self.config.delay).await;
        }

        let evaluation = evaluate(prompt);
        let response = synthesize(prompt, &evaluation);
        log::info!(
            "📝 Prompt evaluated: {}/{} ({:?})",
            evaluation.total_score,
            evaluation.max_score,
            evaluation.grade
        );

        self.push_history(HistoryEntry {
            id: Uuid::new_v4(),
            excerpt: excerpt(prompt),
            score: evaluation.total_score,
        });

        Ok(&*self.current.insert(Submission { evaluation, response }))
    }

    /// A cap of zero keeps no history at all.
    fn push_history(&mut self, entry: HistoryEntry) {
        if self.config.history_cap == 0 {
            return;
        }
        while self.history.len() >= self.config.history_cap {
            self.history.pop_front();
        }
        self.history.push_back(entry);
    }

    /// Clears the displayed result. History is kept.
    pub fn reset(&mut self) {
        self.current = None;
        log::info!("Session reset");
    }

    pub fn load_example() -> &'static str {
        EXAMPLE_PROMPT
    }

    pub fn last(&self) -> Option<&Submission> {
        self.current.as_ref()
    }

    /// Recent attempts, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }
}

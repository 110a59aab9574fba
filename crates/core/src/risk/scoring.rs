//! Questionnaire scoring.
//!
//! Invariants:
//! - Unanswered, unknown or unmatched answers are skipped, never rejected
//!   (partial questionnaires are valid input).
//! - A dimension with no scored answers averages to 0, which pulls `global` down.
//! - Same answers in, bit-identical scores out.

use crate::domain::profile::{AnswerMap, QuestionKind, RiskDimension, RiskQuestion, RiskScores};
use crate::risk::questionnaire::RISK_QUESTIONNAIRE_V1;
use serde::{Deserialize, Serialize};

/// Weights of each scored dimension in the global score (sum to 1).
pub const DIMENSION_WEIGHTS: [(RiskDimension, f64); 4] = [
    (RiskDimension::Capacity, 0.3),
    (RiskDimension::Tolerance, 0.4),
    (RiskDimension::Perception, 0.1),
    (RiskDimension::Composure, 0.2),
];

/// Half-open upper bounds; anything at or above the last bound is "Muy Agresivo".
const PROFILE_LABELS: [(f64, &str); 5] = [
    (20.0, "Ultra Conservador"),
    (35.0, "Conservador"),
    (50.0, "Moderado"),
    (70.0, "Crecimiento"),
    (85.0, "Agresivo"),
];
const TOP_PROFILE_LABEL: &str = "Muy Agresivo";

const LIKERT_MIN: f64 = 1.0;
const LIKERT_MAX: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub scores: RiskScores,
    /// Answered question ids that could not be scored (no matching option,
    /// Likert value out of range). Unknown ids are not listed.
    pub skipped: Vec<String>,
}

pub fn profile_label(global: f64) -> &'static str {
    PROFILE_LABELS
        .iter()
        .find(|(upper, _)| global < *upper)
        .map(|(_, label)| *label)
        .unwrap_or(TOP_PROFILE_LABEL)
}

pub fn score(answers: &AnswerMap) -> RiskScores {
    score_with_report(answers).scores
}

pub fn score_with_report(answers: &AnswerMap) -> ScoreReport {
    score_against(RISK_QUESTIONNAIRE_V1, answers)
}

/// Scores `answers` against an arbitrary questionnaire.
pub fn score_against(questions: &[RiskQuestion], answers: &AnswerMap) -> ScoreReport {
    let mut samples = DimensionSamples::default();
    let mut skipped = Vec::new();

    for question in questions {
        let Some(answer) = answers.get(question.id) else {
            continue;
        };

        let sample = match question.kind {
            QuestionKind::SingleChoice => answer
                .as_choice()
                .and_then(|value| question.option(value))
                .map(|o| o.score),
            QuestionKind::Likert => answer.as_level().and_then(|raw| likert_score(raw, question.reverse)),
        };

        match sample {
            Some(s) => samples.push(question.kind, question.dimension, s),
            None => skipped.push(question.id.to_string()),
        }
    }

    let capacity = average(&samples.capacity);
    let tolerance = average(&samples.tolerance);
    let perception = average(&samples.perception);
    let composure = average(&samples.composure);

    let global = DIMENSION_WEIGHTS
        .iter()
        .map(|(dimension, weight)| {
            let value = match dimension {
                RiskDimension::Capacity => capacity,
                RiskDimension::Tolerance => tolerance,
                RiskDimension::Perception => perception,
                RiskDimension::Composure => composure,
                RiskDimension::Validation | RiskDimension::Goal => 0.0,
            };
            weight * value
        })
        .fold(0.0, |acc, x| acc + x);

    let profile_label = profile_label(global).to_string();

    tracing::debug!(
        answered = answers.len(),
        skipped = skipped.len(),
        global,
        profile = %profile_label,
        "scored risk questionnaire"
    );

    ScoreReport {
        scores: RiskScores {
            capacity,
            tolerance,
            perception,
            composure,
            global,
            profile_label,
        },
        skipped,
    }
}

/// Maps a Likert level (integer 1..=5) onto 0..=100; anything else is rejected.
pub fn likert_score(raw: f64, reverse: bool) -> Option<f64> {
    if !(LIKERT_MIN..=LIKERT_MAX).contains(&raw) || raw.fract() != 0.0 {
        return None;
    }
    let mapped = if reverse {
        LIKERT_MAX - raw
    } else {
        raw - LIKERT_MIN
    };
    Some(mapped / (LIKERT_MAX - LIKERT_MIN) * 100.0)
}

#[derive(Debug, Default)]
struct DimensionSamples {
    capacity: Vec<f64>,
    tolerance: Vec<f64>,
    perception: Vec<f64>,
    composure: Vec<f64>,
}

impl DimensionSamples {
    // Single-choice answers feed capacity/perception/composure; Likert answers feed
    // tolerance. Validation and goal answers are accepted but never scored.
    fn push(&mut self, kind: QuestionKind, dimension: RiskDimension, sample: f64) {
        let bucket = match (kind, dimension) {
            (QuestionKind::SingleChoice, RiskDimension::Capacity) => &mut self.capacity,
            (QuestionKind::SingleChoice, RiskDimension::Perception) => &mut self.perception,
            (QuestionKind::SingleChoice, RiskDimension::Composure) => &mut self.composure,
            (QuestionKind::Likert, RiskDimension::Tolerance) => &mut self.tolerance,
            _ => return,
        };
        bucket.push(sample);
    }
}

fn average(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

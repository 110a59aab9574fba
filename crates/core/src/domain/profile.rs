use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDimension {
    Capacity,
    Tolerance,
    Perception,
    Composure,
    /// Sanity-check item; collected but never scored.
    Validation,
    /// Savings goal; informational only.
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "single_choice")]
    SingleChoice,
    #[serde(rename = "likert_1_5")]
    Likert,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskOption {
    pub value: &'static str,
    pub label: &'static str,
    /// 0..=100
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskQuestion {
    pub id: &'static str,
    pub dimension: RiskDimension,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub text: &'static str,
    pub options: &'static [RiskOption],
    /// Likert items phrased as aversion statements score inverted.
    pub reverse: bool,
}

impl RiskQuestion {
    pub fn option(&self, value: &str) -> Option<&'static RiskOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// A raw questionnaire answer: an option value or a Likert level.
///
/// Any other JSON shape lands in `Other` so one bad answer does not fail the whole
/// map; it scores as skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Answer {
    /// Option value for single-choice items. Numbers never match an option.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s.as_str()),
            Answer::Number(_) | Answer::Other(_) => None,
        }
    }

    /// Numeric level for Likert items; numeric strings are coerced.
    pub fn as_level(&self) -> Option<f64> {
        match self {
            Answer::Number(n) => Some(*n),
            Answer::Text(s) => s.trim().parse::<f64>().ok(),
            Answer::Other(_) => None,
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<i64> for Answer {
    fn from(value: i64) -> Self {
        Answer::Number(value as f64)
    }
}

impl From<f64> for Answer {
    fn from(value: f64) -> Self {
        Answer::Number(value)
    }
}

/// Question id -> answer. `null` entries deserialize and count as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, Option<Answer>>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, answer: impl Into<Answer>) {
        self.0.insert(id.into(), Some(answer.into()));
    }

    pub fn with(mut self, id: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.insert(id, answer);
        self
    }

    pub fn get(&self, id: &str) -> Option<&Answer> {
        self.0.get(id).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.0.values().filter(|a| a.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScores {
    pub capacity: f64,
    pub tolerance: f64,
    pub perception: f64,
    pub composure: f64,
    pub global: f64,
    pub profile_label: String,
}

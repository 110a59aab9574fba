use anyhow::Context;
use cartera_core::domain::contract::{ModelWeightsInput, Statement, StatementInput};
use cartera_core::domain::portfolio::Holding;
use cartera_core::domain::profile::AnswerMap;
use cartera_core::risk::retirement::RetirementRequest;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read {what} file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {what} file {}", path.display()))
}

/// Statement files are either `{ "holdings": [...], "cashBalance": n }` or a bare
/// holdings array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatementFile {
    Full(StatementInput),
    Holdings(Vec<Holding>),
}

impl From<StatementFile> for StatementInput {
    fn from(file: StatementFile) -> Self {
        match file {
            StatementFile::Full(input) => input,
            StatementFile::Holdings(holdings) => StatementInput {
                holdings,
                cash_balance: 0.0,
            },
        }
    }
}

pub fn parse_statement(raw: &str) -> anyhow::Result<Statement> {
    let file: StatementFile = serde_json::from_str(raw).context("parse statement json")?;
    StatementInput::from(file).validate_and_into_statement()
}

pub fn load_answers(path: &Path) -> anyhow::Result<AnswerMap> {
    read_json(path, "answers")
}

pub fn load_statement(path: &Path) -> anyhow::Result<Statement> {
    let file: StatementFile = read_json(path, "statement")?;
    StatementInput::from(file)
        .validate_and_into_statement()
        .with_context(|| format!("invalid statement in {}", path.display()))
}

pub fn load_model_weights(path: &Path) -> anyhow::Result<BTreeMap<String, f64>> {
    let input: ModelWeightsInput = read_json(path, "model weights")?;
    input
        .validate_and_into_weights()
        .with_context(|| format!("invalid model weights in {}", path.display()))
}

pub fn load_retirement(path: &Path) -> anyhow::Result<RetirementRequest> {
    let request: RetirementRequest = read_json(path, "retirement")?;
    anyhow::ensure!(
        request.person.current_age.is_finite() && request.person.current_age >= 0.0,
        "current age must be a non-negative number (got {})",
        request.person.current_age
    );
    anyhow::ensure!(
        request.retirement_age.is_finite() && request.desired_monthly_pension.is_finite(),
        "retirement age and desired pension must be finite numbers"
    );
    Ok(request)
}

//! Shapes accepted from outside the library (statement extracts, saved model
//! portfolios) and their validation into the types the pipeline consumes.

use crate::domain::portfolio::Holding;
use crate::error::InputError;
use crate::risk::benchmark_weights::find_block;
use anyhow::ensure;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementInput {
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub cash_balance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub holdings: Vec<Holding>,
    pub cash_balance: f64,
}

impl StatementInput {
    pub fn validate_and_into_statement(self) -> anyhow::Result<Statement> {
        ensure!(
            self.cash_balance.is_finite(),
            "cash balance must be a finite number (got {})",
            self.cash_balance
        );

        let mut holdings = Vec::with_capacity(self.holdings.len());
        for (idx, mut h) in self.holdings.into_iter().enumerate() {
            let name = h.fund_name.trim().to_string();
            ensure!(!name.is_empty(), "holding #{idx}: fund name must be non-empty");
            ensure!(
                h.market_value.is_finite(),
                "holding #{idx} ({name}): market value must be finite (got {})",
                h.market_value
            );
            h.fund_name = name;
            h.security_id = h.security_id.trim().to_string();
            holdings.push(h);
        }

        Ok(Statement {
            holdings,
            cash_balance: self.cash_balance,
        })
    }
}

/// Block id -> model weight (absolute portfolio percent). Ids must name a catalogue
/// block; an unknown id fails with [`InputError`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelWeightsInput(pub BTreeMap<String, f64>);

impl ModelWeightsInput {
    pub fn validate_and_into_weights(self) -> anyhow::Result<BTreeMap<String, f64>> {
        let mut seen = BTreeSet::<String>::new();
        let mut out = BTreeMap::new();
        for (raw_id, weight) in self.0 {
            let id = raw_id.trim().to_string();
            ensure!(!id.is_empty(), "block id must be non-empty");
            if find_block(&id).is_none() {
                return Err(InputError::new("model_weights", format!("unknown block id {id:?}")).into());
            }
            ensure!(seen.insert(id.clone()), "duplicate block id: {id}");
            ensure!(
                weight.is_finite() && (0.0..=100.0).contains(&weight),
                "weight for {id} must be between 0 and 100 (got {weight})"
            );
            out.insert(id, weight);
        }
        Ok(out)
    }
}

//! End-to-end runs: questionnaire -> benchmark, and model -> tilts -> commentary.
//!
//! Both runs are pure; nothing here reads the environment or keeps state.

use crate::config::Settings;
use crate::domain::allocation::Universe;
use crate::domain::comparison::{Commentary, ConsolidatedRow};
use crate::domain::profile::{Answer, AnswerMap, RiskScores};
use crate::portfolio::{commentary, consolidate::consolidate};
use crate::risk::benchmark_weights::{benchmark_weights, BenchmarkWeights};
use crate::risk::questionnaire::{GOAL_QUESTION_ID, PENSION_GOAL};
use crate::risk::retirement::{retirement_projection, RetirementProjection, RetirementRequest};
use crate::risk::scoring::score_with_report;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BenchmarkOptions {
    pub include_alternatives: bool,
    pub universe: Universe,
}

impl BenchmarkOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            include_alternatives: settings.include_alternatives,
            universe: settings.universe,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOutcome {
    pub scores: RiskScores,
    pub skipped: Vec<String>,
    pub benchmark: BenchmarkWeights,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retirement: Option<RetirementProjection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonOutcome {
    pub benchmark: BenchmarkWeights,
    pub rows: Vec<ConsolidatedRow>,
    pub commentary: Commentary,
    pub brief_summary: String,
}

/// True when the client's stated goal is saving for a pension.
pub fn is_pension_goal(answers: &AnswerMap) -> bool {
    answers.get(GOAL_QUESTION_ID).and_then(Answer::as_choice) == Some(PENSION_GOAL)
}

/// Scores the questionnaire and resolves the benchmark for the global score.
///
/// The retirement projection is only computed for pension goals, and only when the
/// caller supplies the retirement inputs.
pub fn run_profile(
    answers: &AnswerMap,
    options: BenchmarkOptions,
    retirement: Option<&RetirementRequest>,
) -> ProfileOutcome {
    let report = score_with_report(answers);
    let benchmark = benchmark_weights(
        Some(report.scores.global),
        options.include_alternatives,
        options.universe,
    );

    let retirement = match (is_pension_goal(answers), retirement) {
        (true, Some(request)) => Some(retirement_projection(request)),
        (true, None) => {
            tracing::debug!("pension goal without retirement inputs; projection skipped");
            None
        }
        (false, _) => None,
    };

    tracing::info!(
        answered = answers.len(),
        skipped = report.skipped.len(),
        global = report.scores.global,
        profile = %report.scores.profile_label,
        band = %benchmark.allocation.band,
        retirement = retirement.is_some(),
        "risk profile complete"
    );

    ProfileOutcome {
        scores: report.scores,
        skipped: report.skipped,
        benchmark,
        retirement,
    }
}

/// Compares model weights (block id -> absolute percent) against the benchmark for
/// `score` and writes the commentary.
pub fn run_comparison(
    score: Option<f64>,
    options: BenchmarkOptions,
    model_weights: &BTreeMap<String, f64>,
) -> ComparisonOutcome {
    let benchmark = benchmark_weights(score, options.include_alternatives, options.universe);
    let rows = consolidate(&benchmark, model_weights);
    let commentary = commentary::generate(&rows);
    let brief_summary = commentary::brief_summary(&rows);

    tracing::info!(
        ?score,
        band = %benchmark.allocation.band,
        rows = rows.len(),
        "model comparison complete"
    );

    ComparisonOutcome {
        benchmark,
        rows,
        commentary,
        brief_summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allocation::RiskBand;
    use crate::domain::comparison::TiltLevel;
    use crate::risk::retirement::{Health, LifeExpectancyInput, Sex};
    use serde_json::json;

    fn growth_answers() -> AnswerMap {
        serde_json::from_value(json!({
            "cap_1_age": "35_50",
            "cap_2_ingresos_estables": "estables",
            "cap_3_dependencia_portafolio": "parcial",
            "cap_4_horizonte": "10_plus",
            "cap_5_tolerancia_perdida_objetivos": "ajuste_menor",
            "tol_1_riesgo_vs_retorno": 4,
            "tol_2_ansiedad_caidas": 2,
            "tol_3_perdidas_corto_plazo": "3",
            "tol_4_cambios_portafolio": 4,
            "tol_5_agresividad_oportunidades": 5,
            "per_1_entorno_actual": "normal",
            "per_2_en_comparacion": "similar",
            "per_3_confianza_largo_plazo": "bastante",
            "comp_1_reaccion_caida_20": "mantiene",
            "comp_2_historial_crisis": "aumente",
            "comp_3_revision_portafolio": "mensual",
            "val_1_portafolio_preferido": "C",
            "goal_1_objetivo": "pension",
        }))
        .unwrap()
    }

    fn retirement_request() -> RetirementRequest {
        RetirementRequest {
            person: LifeExpectancyInput {
                sex: Sex::Femenino,
                current_age: 40.0,
                smoker: false,
                health: Health::Buena,
            },
            retirement_age: 65.0,
            desired_monthly_pension: 1_000.0,
        }
    }

    #[test]
    fn profile_maps_score_to_band_and_projects_retirement() {
        let request = retirement_request();
        let outcome = run_profile(&growth_answers(), BenchmarkOptions::default(), Some(&request));

        assert_eq!(outcome.scores.profile_label, "Crecimiento");
        assert!(outcome.skipped.is_empty());
        assert_eq!(outcome.benchmark.allocation.band, RiskBand::Crecimiento);
        assert!(outcome.benchmark.alternatives.iter().all(|b| b.weight == 0.0));
        assert!((outcome.benchmark.total() - 100.0).abs() < 1e-9);

        let projection = outcome.retirement.unwrap();
        assert_eq!(projection.life_expectancy, 90.8);
        assert_eq!(projection.years_to_save, 25.0);
    }

    #[test]
    fn retirement_only_for_pension_goal() {
        let request = retirement_request();
        let answers = growth_answers().with("goal_1_objetivo", "vivienda");
        assert!(!is_pension_goal(&answers));
        assert!(run_profile(&answers, BenchmarkOptions::default(), Some(&request))
            .retirement
            .is_none());

        assert!(run_profile(&growth_answers(), BenchmarkOptions::default(), None)
            .retirement
            .is_none());
    }

    #[test]
    fn empty_questionnaire_lands_in_defensivo() {
        let outcome = run_profile(&AnswerMap::new(), BenchmarkOptions::default(), None);
        assert_eq!(outcome.scores.global, 0.0);
        assert_eq!(outcome.scores.profile_label, "Ultra Conservador");
        assert_eq!(outcome.benchmark.allocation.band, RiskBand::Defensivo);

        let v = serde_json::to_value(&outcome).unwrap();
        assert!(v.get("retirement").is_none());
        assert_eq!(v["scores"]["profileLabel"], "Ultra Conservador");
    }

    #[test]
    fn comparison_builds_rows_and_commentary() {
        let options = BenchmarkOptions {
            include_alternatives: true,
            universe: Universe::Global,
        };
        // Moderado with alternatives: equities 45 -> equity_usa 24.75.
        let model = BTreeMap::from([
            ("equity_usa".to_string(), 30.25),
            ("alt_others".to_string(), 0.0),
        ]);
        let outcome = run_comparison(Some(40.0), options, &model);

        assert_eq!(outcome.rows.len(), 14);
        let usa = outcome.rows.iter().find(|r| r.block_id == "equity_usa").unwrap();
        assert_eq!(usa.tilt.level, TiltLevel::OverweightStrong);
        let others = outcome.rows.iter().find(|r| r.block_id == "alt_others").unwrap();
        assert_eq!(others.tilt.level, TiltLevel::Underweight);

        assert_eq!(outcome.commentary.brief, commentary::executive_summary(&outcome.rows));
        assert_eq!(
            outcome.commentary.by_asset_class.alternatives,
            "En alternativos, el modelo presenta otros alternativos (subponderación moderada (-2.0 pp))."
        );
        assert_eq!(
            outcome.brief_summary,
            "Acciones USA: +5.5pp • Otros alternativos: -2.0pp"
        );
    }

    #[test]
    fn alternatives_in_model_are_reported_when_benchmark_excludes_them() {
        let model = BTreeMap::from([
            ("alt_real_estate".to_string(), 10.0),
            ("equity_usa".to_string(), 20.25),
        ]);
        let outcome = run_comparison(Some(50.0), BenchmarkOptions::default(), &model);

        assert_eq!(outcome.rows.len(), 14);
        let model_total: f64 = outcome.rows.iter().map(|r| r.model).sum();
        assert!((model_total - 100.0).abs() < 1e-9);
        assert_eq!(
            outcome.commentary.by_asset_class.alternatives,
            "En alternativos, el modelo presenta real estate listado (sobreponderación significativa (+10.0 pp))."
        );
        assert!(outcome
            .commentary
            .full
            .contains("Estos ajustes reflejan una visión táctica diferenciada, "));
    }

    #[test]
    fn comparison_without_model_is_aligned() {
        let outcome = run_comparison(None, BenchmarkOptions::default(), &BTreeMap::new());
        assert_eq!(outcome.benchmark.allocation.band, RiskBand::Defensivo);
        assert!(outcome.rows.iter().all(|r| r.tilt.level == TiltLevel::Neutral));
        assert_eq!(outcome.brief_summary, "Modelo alineado con benchmark");
        assert!(outcome
            .commentary
            .brief
            .starts_with("El modelo de inversión propuesto mantiene"));
    }

    #[test]
    fn options_follow_settings() {
        let settings = Settings {
            universe: Universe::SoloChile,
            include_alternatives: true,
            output_pretty: false,
        };
        assert_eq!(
            BenchmarkOptions::from_settings(&settings),
            BenchmarkOptions {
                include_alternatives: true,
                universe: Universe::SoloChile,
            }
        );
    }
}

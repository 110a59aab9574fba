//! Spanish narrative commentary for a model portfolio against its benchmark.
//!
//! The sentences below are client-facing copy; changing any template is a breaking
//! change for saved reports that get compared against regenerated text.
//!
//! Output is a pure function of the row order and values: tilts are ranked by
//! `|diff|` with a stable sort, so equal magnitudes keep input order.

use crate::domain::comparison::{
    BlockClass, Commentary, CommentaryByAssetClass, ConsolidatedRow, TiltInfo, TiltLevel,
};

const MAX_LISTED_PER_SIDE: usize = 3;
const MAX_BRIEF_TILTS: usize = 2;

const ALIGNED_SUMMARY: &str = "El modelo de inversión propuesto mantiene una asignación estratégica alineada con el benchmark de referencia, sin desviaciones significativas en ninguna clase de activo.";
const NEUTRAL_RATIONALE: &str = "Esta asignación neutral refleja una estrategia conservadora orientada a replicar el comportamiento del benchmark con mínima desviación.";
const RATIONALE_TAIL: &str = "diseñadas para optimizar el perfil de riesgo-retorno del portafolio manteniendo una adecuada diversificación y considerando las perspectivas de mercado de mediano plazo.";
const ALIGNED_BRIEF: &str = "Modelo alineado con benchmark";

/// One-decimal percentage points, rounding exact ties away from zero (1.25 -> "1.3").
///
/// `{:.1}` alone rounds exact binary ties to even; the published reports round them up.
fn fmt_pp(value: f64) -> String {
    let magnitude = value.abs();
    // Only x.25 and x.75 are exact ties at one decimal.
    let quarters = magnitude * 4.0;
    let is_tie = quarters.fract() == 0.0 && quarters % 2.0 == 1.0;
    let rounded = if is_tie {
        (magnitude * 10.0).ceil() / 10.0
    } else {
        magnitude
    };
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{rounded:.1}")
}

fn tilt_phrase(tilt: &TiltInfo) -> String {
    let abs = fmt_pp(tilt.diff.abs());
    let signed = fmt_pp(tilt.diff);
    match tilt.level {
        TiltLevel::Neutral => "posición neutral".to_string(),
        TiltLevel::OverweightStrong => format!("sobreponderación significativa (+{abs} pp)"),
        TiltLevel::Overweight => format!("sobreponderación moderada (+{abs} pp)"),
        TiltLevel::UnderweightStrong => format!("subponderación significativa ({signed} pp)"),
        TiltLevel::Underweight => format!("subponderación moderada ({signed} pp)"),
    }
}

/// Non-neutral rows, largest `|diff|` first.
fn ranked_tilts<'a>(rows: impl IntoIterator<Item = &'a ConsolidatedRow>) -> Vec<&'a ConsolidatedRow> {
    let mut tilted: Vec<&ConsolidatedRow> = rows
        .into_iter()
        .filter(|r| r.tilt.level != TiltLevel::Neutral)
        .collect();
    tilted.sort_by(|a, b| b.tilt.diff.abs().total_cmp(&a.tilt.diff.abs()));
    tilted
}

/// "a", "a y b", "a, b y c".
fn join_spanish(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} y {}", init.join(", "), last),
    }
}

fn listed(rows: &[&ConsolidatedRow]) -> Vec<String> {
    rows.iter()
        .take(MAX_LISTED_PER_SIDE)
        .map(|r| format!("{} ({})", r.label.to_lowercase(), tilt_phrase(&r.tilt)))
        .collect()
}

fn count_phrase(n: usize, singular: &str, plural: &str) -> String {
    format!("{n} {}", if n == 1 { singular } else { plural })
}

/// One sentence on the tilts of `class`; empty when `rows` has no block of that class.
///
/// At most three overweights and three underweights are named, largest first.
pub fn describe_tilts(rows: &[ConsolidatedRow], class: BlockClass) -> String {
    let class_rows: Vec<&ConsolidatedRow> = rows.iter().filter(|r| r.asset_class == class).collect();
    if class_rows.is_empty() {
        return String::new();
    }

    let class_name = class.label().to_lowercase();
    let tilted = ranked_tilts(class_rows);
    if tilted.is_empty() {
        return format!(
            "En {class_name}, el modelo mantiene ponderaciones alineadas con el benchmark estratégico."
        );
    }

    let (overweights, underweights): (Vec<&ConsolidatedRow>, Vec<&ConsolidatedRow>) =
        tilted.into_iter().partition(|r| r.tilt.level.is_overweight());

    let mut text = format!("En {class_name}, ");

    if !overweights.is_empty() {
        let items = listed(&overweights);
        let verb = if items.len() == 1 { "presenta" } else { "sobrepesa" };
        text.push_str(&format!("el modelo {verb} {}", join_spanish(&items)));
    }

    if !underweights.is_empty() {
        let items = listed(&underweights);
        if overweights.is_empty() {
            let verb = if items.len() == 1 { "presenta" } else { "subpondera" };
            text.push_str(&format!("el modelo {verb} {}", join_spanish(&items)));
        } else {
            text.push_str(&format!(", mientras que subpondera {}", join_spanish(&items)));
        }
    }

    text.push('.');
    text
}

/// Opening paragraph: the largest strong tilt plus counts of the rest.
pub fn executive_summary(rows: &[ConsolidatedRow]) -> String {
    let tilted = ranked_tilts(rows);
    if tilted.is_empty() {
        return ALIGNED_SUMMARY.to_string();
    }

    let strong: Vec<&ConsolidatedRow> = tilted.iter().copied().filter(|r| r.tilt.level.is_strong()).collect();
    let moderate = tilted.iter().filter(|r| r.tilt.level.is_moderate()).count();

    let mut summary = String::from("El modelo de inversión propuesto presenta ");
    match strong.first() {
        Some(top) => {
            let direction = if top.tilt.diff > 0.0 {
                "sobreponderación"
            } else {
                "subponderación"
            };
            summary.push_str(&format!(
                "una {direction} significativa en {} ({} pp vs. benchmark)",
                top.label.to_lowercase(),
                fmt_pp(top.tilt.diff.abs())
            ));
            if strong.len() > 1 {
                summary.push_str(&format!(
                    ", junto con {}",
                    count_phrase(strong.len() - 1, "otro ajuste significativo", "otros ajustes significativos")
                ));
            }
            if moderate > 0 {
                summary.push_str(&format!(
                    " y {}",
                    count_phrase(moderate, "ajuste moderado", "ajustes moderados")
                ));
            }
        }
        None => summary.push_str(&count_phrase(moderate, "ajuste moderado", "ajustes moderados")),
    }
    summary.push_str(" respecto al benchmark estratégico.");
    summary
}

/// Closing paragraph; the tone follows which strong tilts are present.
pub fn strategic_rationale(rows: &[ConsolidatedRow]) -> String {
    let tilted = ranked_tilts(rows);
    if tilted.is_empty() {
        return NEUTRAL_RATIONALE.to_string();
    }

    let strong_over = tilted.iter().any(|r| r.tilt.level == TiltLevel::OverweightStrong);
    let strong_under = tilted.iter().any(|r| r.tilt.level == TiltLevel::UnderweightStrong);

    let opening = match (strong_over, strong_under) {
        (true, true) => "reflejan una visión táctica diferenciada, ",
        (true, false) => "reflejan una visión táctica constructiva, ",
        (false, true) => "reflejan una visión táctica cauta, ",
        (false, false) => "representan modificaciones moderadas ",
    };
    format!("Estos ajustes {opening}{RATIONALE_TAIL}")
}

/// Full commentary: summary, one paragraph per asset class present, rationale.
///
/// Never fails; an empty row list yields the aligned-with-benchmark texts.
pub fn generate(rows: &[ConsolidatedRow]) -> Commentary {
    let by_asset_class = CommentaryByAssetClass {
        equity: describe_tilts(rows, BlockClass::Equity),
        fixed_income: describe_tilts(rows, BlockClass::FixedIncome),
        alternatives: describe_tilts(rows, BlockClass::Alternatives),
    };
    let summary = executive_summary(rows);
    let rationale = strategic_rationale(rows);

    let paragraphs: Vec<&str> = std::iter::once(summary.as_str())
        .chain(
            [
                by_asset_class.equity.as_str(),
                by_asset_class.fixed_income.as_str(),
                by_asset_class.alternatives.as_str(),
            ]
            .into_iter()
            .filter(|p| !p.is_empty()),
        )
        .chain(std::iter::once(rationale.as_str()))
        .collect();
    let full = paragraphs.join("\n\n");

    tracing::debug!(
        rows = rows.len(),
        paragraphs = paragraphs.len(),
        "generated model commentary"
    );

    Commentary {
        full,
        brief: summary,
        by_asset_class,
    }
}

/// Short preview: the two largest tilts as `Label: +x.xpp`, joined by " • ".
pub fn brief_summary(rows: &[ConsolidatedRow]) -> String {
    let tilted = ranked_tilts(rows);
    if tilted.is_empty() {
        return ALIGNED_BRIEF.to_string();
    }

    tilted
        .iter()
        .take(MAX_BRIEF_TILTS)
        .map(|r| {
            let sign = if r.tilt.diff > 0.0 { "+" } else { "" };
            format!("{}: {sign}{}pp", r.label, fmt_pp(r.tilt.diff))
        })
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::tilt::classify_tilt;

    fn row(class: BlockClass, id: &str, label: &str, neutral: f64, model: f64) -> ConsolidatedRow {
        ConsolidatedRow {
            asset_class: class,
            block_id: id.to_string(),
            label: label.to_string(),
            neutral,
            model,
            tilt: classify_tilt(neutral, model),
        }
    }

    fn sample_rows() -> Vec<ConsolidatedRow> {
        vec![
            row(BlockClass::Equity, "equity_usa", "Acciones USA", 30.0, 35.0),
            row(BlockClass::Equity, "equity_europe", "Acciones Europa", 8.0, 7.0),
            row(BlockClass::FixedIncome, "fi_global_ig", "Renta fija global IG", 18.0, 18.0),
        ]
    }

    #[test]
    fn empty_rows_still_produce_a_brief() {
        let c = generate(&[]);
        assert_eq!(c.brief, ALIGNED_SUMMARY);
        assert!(!c.brief.is_empty());
        assert_eq!(c.by_asset_class, CommentaryByAssetClass::default());
        assert_eq!(c.full, format!("{ALIGNED_SUMMARY}\n\n{NEUTRAL_RATIONALE}"));
        assert_eq!(brief_summary(&[]), "Modelo alineado con benchmark");
    }

    #[test]
    fn full_commentary_for_mixed_tilts() {
        let c = generate(&sample_rows());

        assert_eq!(
            c.brief,
            "El modelo de inversión propuesto presenta una sobreponderación significativa en acciones usa (5.0 pp vs. benchmark) y 1 ajuste moderado respecto al benchmark estratégico."
        );
        assert_eq!(
            c.by_asset_class.equity,
            "En renta variable, el modelo presenta acciones usa (sobreponderación significativa (+5.0 pp)), mientras que subpondera acciones europa (subponderación moderada (-1.0 pp))."
        );
        assert_eq!(
            c.by_asset_class.fixed_income,
            "En renta fija, el modelo mantiene ponderaciones alineadas con el benchmark estratégico."
        );
        assert_eq!(c.by_asset_class.alternatives, "");

        let paragraphs: Vec<&str> = c.full.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[0], c.brief);
        assert_eq!(
            paragraphs[3],
            "Estos ajustes reflejan una visión táctica constructiva, diseñadas para optimizar el perfil de riesgo-retorno del portafolio manteniendo una adecuada diversificación y considerando las perspectivas de mercado de mediano plazo."
        );
    }

    #[test]
    fn lists_at_most_three_overweights_largest_first() {
        let rows = vec![
            row(BlockClass::Equity, "equity_chile", "Acciones Chile", 5.0, 6.0),
            row(BlockClass::Equity, "equity_usa", "Acciones USA", 30.0, 34.0),
            row(BlockClass::Equity, "equity_europe", "Acciones Europa", 8.0, 10.0),
            row(BlockClass::Equity, "equity_asia_dev", "Acciones Asia desarrollada", 5.0, 5.5),
        ];
        assert_eq!(
            describe_tilts(&rows, BlockClass::Equity),
            "En renta variable, el modelo sobrepesa acciones usa (sobreponderación significativa (+4.0 pp)), acciones europa (sobreponderación moderada (+2.0 pp)) y acciones chile (sobreponderación moderada (+1.0 pp))."
        );
    }

    #[test]
    fn underweights_only() {
        let one = vec![row(BlockClass::FixedIncome, "fi_global_hy", "High Yield global", 4.5, 1.0)];
        assert_eq!(
            describe_tilts(&one, BlockClass::FixedIncome),
            "En renta fija, el modelo presenta high yield global (subponderación significativa (-3.5 pp))."
        );

        let two = vec![
            row(BlockClass::FixedIncome, "fi_chile_short", "Renta fija Chile corto plazo", 9.0, 8.0),
            row(BlockClass::FixedIncome, "fi_global_hy", "High Yield global", 4.5, 1.0),
        ];
        assert_eq!(
            describe_tilts(&two, BlockClass::FixedIncome),
            "En renta fija, el modelo subpondera high yield global (subponderación significativa (-3.5 pp)) y renta fija chile corto plazo (subponderación moderada (-1.0 pp))."
        );
    }

    #[test]
    fn describe_tilts_is_empty_without_rows_of_that_class() {
        assert_eq!(describe_tilts(&sample_rows(), BlockClass::Alternatives), "");
        let alts = vec![row(BlockClass::Alternatives, "alt_others", "Otros alternativos", 2.0, 2.0)];
        assert_eq!(
            describe_tilts(&alts, BlockClass::Alternatives),
            "En alternativos, el modelo mantiene ponderaciones alineadas con el benchmark estratégico."
        );
    }

    #[test]
    fn summary_counts_other_strong_and_moderate_tilts() {
        let rows = vec![
            row(BlockClass::Equity, "equity_usa", "Acciones USA", 30.0, 34.0),
            row(BlockClass::Equity, "equity_chile", "Acciones Chile", 5.0, 0.0),
            row(BlockClass::FixedIncome, "fi_global_ig", "Renta fija global IG", 18.0, 22.0),
            row(BlockClass::FixedIncome, "fi_chile_long", "Renta fija Chile largo plazo", 9.0, 8.0),
            row(BlockClass::FixedIncome, "fi_chile_short", "Renta fija Chile corto plazo", 9.0, 8.5),
        ];
        assert_eq!(
            executive_summary(&rows),
            "El modelo de inversión propuesto presenta una subponderación significativa en acciones chile (5.0 pp vs. benchmark), junto con 2 otros ajustes significativos y 2 ajustes moderados respecto al benchmark estratégico."
        );
        assert_eq!(
            strategic_rationale(&rows),
            format!("Estos ajustes reflejan una visión táctica diferenciada, {RATIONALE_TAIL}")
        );
    }

    #[test]
    fn summary_with_only_moderate_tilts() {
        let rows = vec![
            row(BlockClass::Equity, "equity_usa", "Acciones USA", 30.0, 31.0),
            row(BlockClass::FixedIncome, "fi_global_ig", "Renta fija global IG", 18.0, 17.0),
        ];
        assert_eq!(
            executive_summary(&rows),
            "El modelo de inversión propuesto presenta 2 ajustes moderados respecto al benchmark estratégico."
        );
        assert_eq!(
            strategic_rationale(&rows),
            format!("Estos ajustes representan modificaciones moderadas {RATIONALE_TAIL}")
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = vec![
            row(BlockClass::Equity, "equity_usa", "Acciones USA", 30.0, 26.0),
            row(BlockClass::Equity, "equity_europe", "Acciones Europa", 8.0, 12.0),
        ];
        let summary = executive_summary(&rows);
        assert!(summary.contains("una subponderación significativa en acciones usa (4.0 pp"));
        assert!(summary.contains(", junto con 1 otro ajuste significativo respecto"));
        assert_eq!(
            strategic_rationale(&rows),
            format!("Estos ajustes reflejan una visión táctica diferenciada, {RATIONALE_TAIL}")
        );
    }

    #[test]
    fn brief_summary_takes_two_largest() {
        assert_eq!(
            brief_summary(&sample_rows()),
            "Acciones USA: +5.0pp • Acciones Europa: -1.0pp"
        );
    }

    #[test]
    fn quarter_point_ties_round_away_from_zero() {
        assert_eq!(fmt_pp(1.25), "1.3");
        assert_eq!(fmt_pp(-1.25), "-1.3");
        assert_eq!(fmt_pp(2.75), "2.8");
        assert_eq!(fmt_pp(1.24), "1.2");
        assert_eq!(fmt_pp(-3.5), "-3.5");

        let over = row(BlockClass::Equity, "equity_chile", "Acciones Chile", 2.25, 3.5);
        assert_eq!(over.tilt.diff, 1.25);
        assert_eq!(
            describe_tilts(&[over.clone()], BlockClass::Equity),
            "En renta variable, el modelo presenta acciones chile (sobreponderación moderada (+1.3 pp))."
        );
        assert_eq!(brief_summary(&[over]), "Acciones Chile: +1.3pp");

        let under = row(BlockClass::Equity, "equity_chile", "Acciones Chile", 3.5, 2.25);
        assert_eq!(
            describe_tilts(&[under.clone()], BlockClass::Equity),
            "En renta variable, el modelo presenta acciones chile (subponderación moderada (-1.3 pp))."
        );
        assert_eq!(brief_summary(&[under]), "Acciones Chile: -1.3pp");

        let strong = row(BlockClass::FixedIncome, "fi_global_ig", "Renta fija global IG", 18.0, 21.25);
        assert!(executive_summary(&[strong]).contains("(3.3 pp vs. benchmark)"));
    }

    #[test]
    fn generation_is_deterministic() {
        let rows = sample_rows();
        assert_eq!(generate(&rows), generate(&rows));
    }
}

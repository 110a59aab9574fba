//! Risk questionnaire, version 1.
//!
//! Content only: changing questions or option scores must not require touching
//! `scoring`.

use crate::domain::profile::{QuestionKind, RiskDimension, RiskOption, RiskQuestion};

macro_rules! opt {
    ($value:expr, $label:expr, $score:expr) => {
        RiskOption {
            value: $value,
            label: $label,
            score: $score,
        }
    };
}

const fn choice(
    id: &'static str,
    dimension: RiskDimension,
    text: &'static str,
    options: &'static [RiskOption],
) -> RiskQuestion {
    RiskQuestion {
        id,
        dimension,
        kind: QuestionKind::SingleChoice,
        text,
        options,
        reverse: false,
    }
}

const fn likert(id: &'static str, text: &'static str, reverse: bool) -> RiskQuestion {
    RiskQuestion {
        id,
        dimension: RiskDimension::Tolerance,
        kind: QuestionKind::Likert,
        text,
        options: &[],
        reverse,
    }
}

use RiskDimension::{Capacity, Composure, Goal, Perception, Validation};

pub const RISK_QUESTIONNAIRE_V1: &[RiskQuestion] = &[
    // Capacity
    choice(
        "cap_1_age",
        Capacity,
        "¿Cuál es tu rango de edad?",
        &[
            opt!("menos_35", "Menos de 35 años", 90.0),
            opt!("35_50", "Entre 35 y 50 años", 75.0),
            opt!("50_65", "Entre 50 y 65 años", 50.0),
            opt!("mas_65", "Más de 65 años", 30.0),
        ],
    ),
    choice(
        "cap_2_ingresos_estables",
        Capacity,
        "¿Cómo describirías la estabilidad de tus ingresos actuales?",
        &[
            opt!("muy_estables", "Muy estables y predecibles", 90.0),
            opt!("estables", "Relativamente estables", 70.0),
            opt!("variables", "Bastante variables", 50.0),
            opt!("muy_variables", "Muy variables o inciertos", 30.0),
        ],
    ),
    choice(
        "cap_3_dependencia_portafolio",
        Capacity,
        "¿Qué tan dependes de este portafolio para financiar tus gastos anuales?",
        &[
            opt!("nada", "Casi nada, es ahorro de largo plazo", 90.0),
            opt!("parcial", "Parcialmente, pero no es mi fuente principal", 70.0),
            opt!("alta", "Alta, financia una parte importante de mis gastos", 40.0),
            opt!("critica", "Es crítico, sin esto no puedo cubrir gastos esenciales", 20.0),
        ],
    ),
    choice(
        "cap_4_horizonte",
        Capacity,
        "¿En cuántos años esperas comenzar a retirar una parte importante de este portafolio?",
        &[
            opt!("10_plus", "En 10 años o más", 90.0),
            opt!("5_10", "Entre 5 y 10 años", 70.0),
            opt!("2_5", "Entre 2 y 5 años", 50.0),
            opt!("menos_2", "En menos de 2 años", 30.0),
        ],
    ),
    choice(
        "cap_5_tolerancia_perdida_objetivos",
        Capacity,
        "Si tu portafolio sufriera una caída del 25% en un año, ¿cómo afectaría tus objetivos financieros?",
        &[
            opt!("no_afecta", "No afectaría mis objetivos de largo plazo", 90.0),
            opt!("ajuste_menor", "Requeriría algunos ajustes, pero mis objetivos se mantienen", 70.0),
            opt!("ajuste_mayor", "Tendría que aplazar o reducir varios objetivos importantes", 40.0),
            opt!("inaceptable", "Sería inaceptable, arruinaría mis planes clave", 20.0),
        ],
    ),
    // Tolerance (psychometric, Likert 1-5)
    likert(
        "tol_1_riesgo_vs_retorno",
        "Estoy dispuesto a aceptar mayores fluctuaciones en el valor de mis inversiones si eso aumenta la probabilidad de obtener mayores retornos en el largo plazo.",
        false,
    ),
    likert(
        "tol_2_ansiedad_caidas",
        "Las caídas temporales del mercado me generan mucha ansiedad, incluso si sé que son normales.",
        true,
    ),
    likert(
        "tol_3_perdidas_corto_plazo",
        "Puedo tolerar pérdidas significativas en el corto plazo si confío en la estrategia de largo plazo.",
        false,
    ),
    likert(
        "tol_4_cambios_portafolio",
        "Me cuesta mucho mantener una inversión cuando ha tenido varios meses seguidos de malos resultados.",
        true,
    ),
    likert(
        "tol_5_agresividad_oportunidades",
        "Cuando veo una buena oportunidad de inversión, prefiero aprovecharla aunque implique asumir más riesgo.",
        false,
    ),
    // Perception
    choice(
        "per_1_entorno_actual",
        Perception,
        "¿Cómo describirías el entorno económico y de mercados financieros actuales?",
        &[
            opt!("muy_riesgoso", "Muy riesgoso e incierto", 20.0),
            opt!("algo_riesgoso", "Algo más riesgoso de lo normal", 40.0),
            opt!("normal", "Dentro de lo normal", 60.0),
            opt!("atractivo", "Relativamente atractivo para invertir", 80.0),
        ],
    ),
    choice(
        "per_2_en_comparacion",
        Perception,
        "En comparación con los últimos 3–5 años, ¿cómo ves el nivel de riesgo en los mercados hoy?",
        &[
            opt!("mucho_mas_riesgo", "Mucho más riesgo que antes", 30.0),
            opt!("algo_mas_riesgo", "Algo más de riesgo", 45.0),
            opt!("similar", "Riesgo similar", 60.0),
            opt!("menos_riesgo", "Menos riesgo que antes", 75.0),
        ],
    ),
    choice(
        "per_3_confianza_largo_plazo",
        Perception,
        "¿Qué tan confiado te sientes en que los mercados globales seguirán generando retornos positivos en el largo plazo (10 años o más)?",
        &[
            opt!("muy_poco", "Muy poco confiado", 30.0),
            opt!("algo", "Algo confiado", 50.0),
            opt!("bastante", "Bastante confiado", 70.0),
            opt!("muy", "Muy confiado", 85.0),
        ],
    ),
    // Composure
    choice(
        "comp_1_reaccion_caida_20",
        Composure,
        "Si tu portafolio cayera 20% en un periodo corto (por ejemplo 6 meses), ¿qué harías más probablemente?",
        &[
            opt!("vende_todo", "Vendería casi todo para evitar más pérdidas", 20.0),
            opt!("reduce_algo", "Reduciría parte de la inversión para estar más tranquilo", 40.0),
            opt!("mantiene", "Mantendría la inversión y esperaría una recuperación", 70.0),
            opt!("aumenta", "Aumentaría la inversión aprovechando los precios bajos", 90.0),
        ],
    ),
    choice(
        "comp_2_historial_crisis",
        Composure,
        "En crisis anteriores (por ejemplo, 2008, 2011, 2020), ¿cómo reaccionaste con tus inversiones?",
        &[
            opt!("vendi", "Vendí una parte importante de mis inversiones", 30.0),
            opt!("reduje_algo", "Reduje algo, pero mantuve posiciones relevantes", 50.0),
            opt!("mantuve", "En general mantuve las inversiones", 70.0),
            opt!("aumente", "Aumenté posiciones o aporté más recursos", 85.0),
            opt!("no_tenia", "No tenía inversiones en esos periodos", 55.0),
        ],
    ),
    choice(
        "comp_3_revision_portafolio",
        Composure,
        "¿Con qué frecuencia revisas el valor de tus inversiones?",
        &[
            opt!("todos_dias", "Diariamente", 40.0),
            opt!("semanal", "Varias veces al mes", 55.0),
            opt!("mensual", "Aproximadamente una vez al mes", 70.0),
            opt!("trimestral", "Menos de una vez al mes", 80.0),
        ],
    ),
    // Validation (sanity check, not scored)
    choice(
        "val_1_portafolio_preferido",
        Validation,
        "Imagina tres portafolios: A) sube y baja poco pero con retornos moderados; B) tiene subidas y bajadas intermedias con buenos retornos esperados; C) sube y baja mucho pero con retornos esperados más altos. ¿Con cuál te sientes más identificado?",
        &[
            opt!("A", "A: prefiero estabilidad y menor volatilidad", 30.0),
            opt!("B", "B: un equilibrio entre estabilidad y crecimiento", 60.0),
            opt!("C", "C: mayor volatilidad a cambio de retornos superiores", 85.0),
        ],
    ),
    // Goal (informational, not scored)
    choice(
        GOAL_QUESTION_ID,
        Goal,
        "¿Cuál es el principal objetivo de este ahorro/inversión?",
        &[
            opt!(PENSION_GOAL, "Pensión / Retiro", 0.0),
            opt!("vivienda", "Compra de vivienda", 0.0),
            opt!("educacion", "Educación de hijos", 0.0),
            opt!("libertad", "Libertad financiera / Independencia", 0.0),
            opt!("patrimonio", "Crecimiento de patrimonio", 0.0),
            opt!("otro", "Otro", 0.0),
        ],
    ),
];

pub const GOAL_QUESTION_ID: &str = "goal_1_objetivo";
pub const PENSION_GOAL: &str = "pension";

pub fn questions() -> &'static [RiskQuestion] {
    RISK_QUESTIONNAIRE_V1
}

pub fn question(id: &str) -> Option<&'static RiskQuestion> {
    RISK_QUESTIONNAIRE_V1.iter().find(|q| q.id == id)
}

pub fn questions_for(dimension: RiskDimension) -> impl Iterator<Item = &'static RiskQuestion> {
    RISK_QUESTIONNAIRE_V1
        .iter()
        .filter(move |q| q.dimension == dimension)
}

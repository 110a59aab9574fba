//! Retirement projection for clients saving for a pension.
//!
//! Life expectancy is a simplified read of the Chilean TM-2020 tables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Masculino,
    Femenino,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Excelente,
    Buena,
    Regular,
    Mala,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeExpectancyInput {
    pub sex: Sex,
    pub current_age: f64,
    pub smoker: bool,
    pub health: Health,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementRequest {
    #[serde(flatten)]
    pub person: LifeExpectancyInput,
    pub retirement_age: f64,
    /// Desired monthly pension, in the client's currency.
    pub desired_monthly_pension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementProjection {
    pub life_expectancy: f64,
    pub retirement_years: f64,
    pub years_to_save: f64,
    pub estimated_capital: f64,
}

const SMOKER_PENALTY_YEARS: f64 = 3.0;

fn base_life_expectancy(sex: Sex) -> f64 {
    match sex {
        Sex::Masculino => 86.6,
        Sex::Femenino => 90.8,
    }
}

fn health_adjustment(health: Health) -> f64 {
    match health {
        Health::Excelente => 2.0,
        Health::Buena => 0.0,
        Health::Regular => -1.0,
        Health::Mala => -2.0,
    }
}

/// Never below `current_age + 1`.
pub fn estimate_life_expectancy(input: &LifeExpectancyInput) -> f64 {
    let mut years = base_life_expectancy(input.sex);
    if input.smoker {
        years -= SMOKER_PENALTY_YEARS;
    }
    years += health_adjustment(input.health);
    years.max(input.current_age + 1.0)
}

pub fn retirement_projection(request: &RetirementRequest) -> RetirementProjection {
    let life_expectancy = estimate_life_expectancy(&request.person);
    let retirement_years = (life_expectancy - request.retirement_age).max(0.0);
    let years_to_save = (request.retirement_age - request.person.current_age).max(0.0);
    let estimated_capital = request.desired_monthly_pension * 12.0 * retirement_years;

    RetirementProjection {
        life_expectancy: round1(life_expectancy),
        retirement_years: round1(retirement_years),
        years_to_save,
        estimated_capital: estimated_capital.round(),
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(sex: Sex, age: f64, smoker: bool, health: Health) -> LifeExpectancyInput {
        LifeExpectancyInput {
            sex,
            current_age: age,
            smoker,
            health,
        }
    }

    #[test]
    fn adjusts_for_smoking_and_health() {
        assert_eq!(estimate_life_expectancy(&person(Sex::Femenino, 40.0, false, Health::Buena)), 90.8);
        let smoker = estimate_life_expectancy(&person(Sex::Masculino, 40.0, true, Health::Mala));
        assert!((smoker - 81.6).abs() < 1e-9);
        let fit = estimate_life_expectancy(&person(Sex::Masculino, 40.0, false, Health::Excelente));
        assert!((fit - 88.6).abs() < 1e-9);
    }

    #[test]
    fn floors_at_next_birthday() {
        assert_eq!(estimate_life_expectancy(&person(Sex::Masculino, 95.0, true, Health::Mala)), 96.0);
    }

    #[test]
    fn projection_rounds_and_clamps() {
        let req = RetirementRequest {
            person: person(Sex::Masculino, 45.0, false, Health::Buena),
            retirement_age: 65.0,
            desired_monthly_pension: 1_000.0,
        };
        let p = retirement_projection(&req);
        assert_eq!(p.life_expectancy, 86.6);
        assert_eq!(p.retirement_years, 21.6);
        assert_eq!(p.years_to_save, 20.0);
        assert_eq!(p.estimated_capital, 259_200.0);

        let late = RetirementRequest {
            person: person(Sex::Masculino, 70.0, false, Health::Buena),
            retirement_age: 65.0,
            desired_monthly_pension: 500.0,
        };
        assert_eq!(retirement_projection(&late).years_to_save, 0.0);
    }
}

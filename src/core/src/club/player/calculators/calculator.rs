use crate::club::player::skills::{PlayerSkills, SkillType};
use crate::shared::CurrencyValue;

/// Floor for every player's yearly salary.
pub const BASE_SALARY: i64 = 300_000;

const CURVE_START: f64 = 70.0;
const CURVE_END: f64 = 99.0;
const MIN_SKILL_MULTIPLIER: f64 = 0.5;
const MAX_SKILL_MULTIPLIER: f64 = 4.0;
const SPECIALIST_BOOST: f64 = 4.0;
const SCORE_DIVIDER: f64 = 1000.0;
const SCORE_POWER: i32 = 3;
const SALARY_SCALER: f64 = 1_170_000.0;
const MARKET_VALUE_MULTIPLIER: f64 = 1.5;

pub struct PlayerValueCalculator;

impl PlayerValueCalculator {
    /// Salary implied by the skill sheet alone, rounded to thousands.
    pub fn base_salary(skills: &PlayerSkills) -> CurrencyValue {
        let score = determine_skill_score(skills) / SCORE_DIVIDER;
        let salary = BASE_SALARY as f64 + score.max(0.0).powi(SCORE_POWER) * SALARY_SCALER;

        let rounded = CurrencyValue::from_raw(salary);
        if rounded.amount < BASE_SALARY {
            return CurrencyValue::eur(BASE_SALARY);
        }

        rounded
    }

    /// Market value: base salary scaled by the age curve. Never negative.
    pub fn market_value(skills: &PlayerSkills, age: Option<u8>) -> CurrencyValue {
        let salary = Self::base_salary(skills);

        salary.scale(MARKET_VALUE_MULTIPLIER * Self::age_multiplier(age))
    }

    /// 4.0 for 16 and under, easing to 1.0 at 29, collapsing to 0.01 at 40.
    pub fn age_multiplier(age: Option<u8>) -> f64 {
        let age = match age {
            Some(age) => age as f64,
            None => return 1.0,
        };

        const YOUTH_AGE: f64 = 16.0;
        const YOUTH_FACTOR: f64 = 4.0;
        const PEAK_AGE: f64 = 29.0;
        const PEAK_FACTOR: f64 = 1.0;
        const OLD_AGE: f64 = 40.0;
        const OLD_FACTOR: f64 = 0.01;

        if age <= YOUTH_AGE {
            YOUTH_FACTOR
        } else if age < PEAK_AGE {
            let progress = (age - YOUTH_AGE) / (PEAK_AGE - YOUTH_AGE);
            PEAK_FACTOR + (YOUTH_FACTOR - PEAK_FACTOR) * (1.0 - progress).powf(1.5)
        } else if age == PEAK_AGE {
            PEAK_FACTOR
        } else if age < OLD_AGE {
            let progress = (age - PEAK_AGE) / (OLD_AGE - PEAK_AGE);
            OLD_FACTOR + (PEAK_FACTOR - OLD_FACTOR) * (1.0 - progress).powi(3)
        } else {
            OLD_FACTOR
        }
    }
}

fn determine_skill_score(skills: &PlayerSkills) -> f64 {
    SkillType::ALL
        .iter()
        .filter_map(|&skill| skills.get(skill).map(|value| (skill, value as f64)))
        .map(|(skill, value)| {
            let contribution = value * skill_multiplier(value);

            match skill {
                SkillType::Defense | SkillType::GoalKeeping => contribution * SPECIALIST_BOOST,
                _ => contribution,
            }
        })
        .sum::<f64>()
        .max(0.0)
}

/// Elite skills are worth disproportionately more: flat below 70, geometric up to 99.
fn skill_multiplier(value: f64) -> f64 {
    if value >= CURVE_END {
        MAX_SKILL_MULTIPLIER
    } else if value > CURVE_START {
        let progress = (value - CURVE_START) / (CURVE_END - CURVE_START);
        MIN_SKILL_MULTIPLIER * (MAX_SKILL_MULTIPLIER / MIN_SKILL_MULTIPLIER).powf(progress)
    } else {
        MIN_SKILL_MULTIPLIER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sheet_earns_floor_salary() {
        let salary = PlayerValueCalculator::base_salary(&PlayerSkills::default());

        assert_eq!(salary.amount, BASE_SALARY);
    }

    #[test]
    fn test_better_skills_are_worth_more() {
        let average = PlayerValueCalculator::market_value(&PlayerSkills::uniform(70), Some(27));
        let elite = PlayerValueCalculator::market_value(&PlayerSkills::uniform(90), Some(27));

        assert!(elite.amount > average.amount);
    }

    #[test]
    fn test_value_is_never_negative() {
        for age in [None, Some(15), Some(29), Some(38), Some(45)] {
            for level in [0, 1, 50, 99] {
                let value = PlayerValueCalculator::market_value(&PlayerSkills::uniform(level), age);
                assert!(value.amount >= 0);
            }
        }
    }

    #[test]
    fn test_swapping_unboosted_skills_keeps_value() {
        let mut skills = PlayerSkills::uniform(72);
        skills.stamina = Some(95);
        skills.jump = Some(61);

        let mut swapped = skills;
        swapped.stamina = Some(61);
        swapped.jump = Some(95);

        assert_eq!(
            PlayerValueCalculator::market_value(&skills, Some(24)),
            PlayerValueCalculator::market_value(&swapped, Some(24))
        );
    }

    #[test]
    fn test_age_multiplier_curve() {
        assert_eq!(PlayerValueCalculator::age_multiplier(Some(16)), 4.0);
        assert_eq!(PlayerValueCalculator::age_multiplier(Some(29)), 1.0);
        assert_eq!(PlayerValueCalculator::age_multiplier(Some(41)), 0.01);
        assert_eq!(PlayerValueCalculator::age_multiplier(None), 1.0);

        let young = PlayerValueCalculator::age_multiplier(Some(20));
        let veteran = PlayerValueCalculator::age_multiplier(Some(34));
        assert!(young > 1.0 && young < 4.0);
        assert!(veteran < 1.0 && veteran > 0.01);
    }

    #[test]
    fn test_skill_multiplier_bounds() {
        assert_eq!(skill_multiplier(40.0), MIN_SKILL_MULTIPLIER);
        assert_eq!(skill_multiplier(99.0), MAX_SKILL_MULTIPLIER);
        assert!(skill_multiplier(85.0) > MIN_SKILL_MULTIPLIER);
    }
}

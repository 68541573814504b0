//! Risk classification table.
//!
//! The whole decision lives in [`RISK_TABLE`]: one row per (age group, trigger band). Rows are
//! evaluated top to bottom and the first row whose group and band both match decides the
//! level. Bands within a group are contiguous and non-overlapping, and the last band of each
//! group is open-ended, so every input matches exactly one row.
//!
//! Patients aged 30 or under never reach `Borderline`.

use crate::constants::GENDER_BLIND_AGE_THRESHOLD;
use crate::models::{Gender, RiskLevel};

/// Demographic group a row applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgeGroup {
    /// Older than 30, any gender.
    Over30,
    /// 30 or younger, male.
    YoungMale,
    /// 30 or younger, female.
    YoungFemale,
}

impl AgeGroup {
    pub fn of(age: u32, gender: Gender) -> Self {
        if age > GENDER_BLIND_AGE_THRESHOLD {
            return AgeGroup::Over30;
        }
        match gender {
            Gender::Male => AgeGroup::YoungMale,
            Gender::Female => AgeGroup::YoungFemale,
        }
    }
}

/// One row of the decision table. `max_triggers: None` means unbounded.
#[derive(Clone, Copy, Debug)]
pub struct RiskBand {
    pub group: AgeGroup,
    pub min_triggers: usize,
    pub max_triggers: Option<usize>,
    pub level: RiskLevel,
}

impl RiskBand {
    const fn new(
        group: AgeGroup,
        min_triggers: usize,
        max_triggers: Option<usize>,
        level: RiskLevel,
    ) -> Self {
        Self {
            group,
            min_triggers,
            max_triggers,
            level,
        }
    }

    fn matches(&self, group: AgeGroup, trigger_count: usize) -> bool {
        self.group == group
            && trigger_count >= self.min_triggers
            && self.max_triggers.map_or(true, |max| trigger_count <= max)
    }
}

pub const RISK_TABLE: [RiskBand; 10] = [
    RiskBand::new(AgeGroup::Over30, 0, Some(1), RiskLevel::None),
    RiskBand::new(AgeGroup::Over30, 2, Some(5), RiskLevel::Borderline),
    RiskBand::new(AgeGroup::Over30, 6, Some(7), RiskLevel::InDanger),
    RiskBand::new(AgeGroup::Over30, 8, None, RiskLevel::EarlyOnset),
    RiskBand::new(AgeGroup::YoungMale, 0, Some(2), RiskLevel::None),
    RiskBand::new(AgeGroup::YoungMale, 3, Some(4), RiskLevel::InDanger),
    RiskBand::new(AgeGroup::YoungMale, 5, None, RiskLevel::EarlyOnset),
    RiskBand::new(AgeGroup::YoungFemale, 0, Some(3), RiskLevel::None),
    RiskBand::new(AgeGroup::YoungFemale, 4, Some(6), RiskLevel::InDanger),
    RiskBand::new(AgeGroup::YoungFemale, 7, None, RiskLevel::EarlyOnset),
];

/// Map age, gender and trigger count to a risk level.
pub fn classify(age: u32, gender: Gender, trigger_count: usize) -> RiskLevel {
    let group = AgeGroup::of(age, gender);
    RISK_TABLE
        .iter()
        .find(|band| band.matches(group, trigger_count))
        .map(|band| band.level)
        // Unreachable while every group ends in an open band.
        .unwrap_or(RiskLevel::EarlyOnset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Gender::{Female, Male};
    use RiskLevel::{Borderline, EarlyOnset, InDanger, None};

    #[test]
    fn test_over_30_is_gender_blind() {
        for triggers in 0..=20 {
            assert_eq!(
                classify(31, Male, triggers),
                classify(31, Female, triggers),
                "gender changed the outcome at {triggers} triggers"
            );
        }
    }

    #[test]
    fn test_over_30_band_edges() {
        assert_eq!(classify(31, Male, 0), None);
        assert_eq!(classify(31, Male, 1), None);
        assert_eq!(classify(31, Male, 2), Borderline);
        assert_eq!(classify(31, Male, 5), Borderline);
        assert_eq!(classify(31, Male, 6), InDanger);
        assert_eq!(classify(31, Male, 7), InDanger);
        assert_eq!(classify(31, Male, 8), EarlyOnset);
        assert_eq!(classify(85, Female, 100), EarlyOnset);
    }

    #[test]
    fn test_young_male_band_edges() {
        assert_eq!(classify(30, Male, 0), None);
        assert_eq!(classify(30, Male, 2), None);
        assert_eq!(classify(30, Male, 3), InDanger);
        assert_eq!(classify(30, Male, 4), InDanger);
        assert_eq!(classify(30, Male, 5), EarlyOnset);
        assert_eq!(classify(0, Male, 11), EarlyOnset);
    }

    #[test]
    fn test_young_female_band_edges() {
        assert_eq!(classify(30, Female, 0), None);
        assert_eq!(classify(30, Female, 3), None);
        assert_eq!(classify(30, Female, 4), InDanger);
        assert_eq!(classify(30, Female, 6), InDanger);
        assert_eq!(classify(30, Female, 7), EarlyOnset);
    }

    #[test]
    fn test_no_borderline_at_or_below_30() {
        for age in 0..=30 {
            for gender in [Male, Female] {
                for triggers in 0..=15 {
                    assert_ne!(
                        classify(age, gender, triggers),
                        Borderline,
                        "age {age}, {gender}, {triggers} triggers"
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_input_matches_exactly_one_row() {
        for group in [AgeGroup::Over30, AgeGroup::YoungMale, AgeGroup::YoungFemale] {
            for triggers in 0..=50 {
                let hits = RISK_TABLE
                    .iter()
                    .filter(|band| band.matches(group, triggers))
                    .count();
                assert_eq!(hits, 1, "{group:?} with {triggers} triggers");
            }
        }
    }

    #[test]
    fn test_level_is_monotonic_in_trigger_count() {
        for (age, gender) in [(45, Male), (30, Male), (30, Female)] {
            let levels: Vec<RiskLevel> = (0..=12).map(|n| classify(age, gender, n)).collect();
            assert!(
                levels.windows(2).all(|w| w[0] <= w[1]),
                "non-monotonic for age {age} {gender}: {levels:?}"
            );
        }
    }
}

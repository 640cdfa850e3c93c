use serde::{Deserialize, Serialize};

/// Skill sheet on a 1-99 scale. Any skill may be absent in the source data.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSkills {
    pub attack: Option<u8>,
    pub defense: Option<u8>,
    pub balance: Option<u8>,
    pub stamina: Option<u8>,
    pub top_speed: Option<u8>,
    pub acceleration: Option<u8>,
    pub response: Option<u8>,
    pub agility: Option<u8>,
    pub dribble_accuracy: Option<u8>,
    pub dribble_speed: Option<u8>,
    pub short_pass_accuracy: Option<u8>,
    pub short_pass_speed: Option<u8>,
    pub long_pass_accuracy: Option<u8>,
    pub long_pass_speed: Option<u8>,
    pub shot_accuracy: Option<u8>,
    pub shot_power: Option<u8>,
    pub shot_technique: Option<u8>,
    pub free_kick_accuracy: Option<u8>,
    pub swerve: Option<u8>,
    pub heading: Option<u8>,
    pub jump: Option<u8>,
    pub technique: Option<u8>,
    pub aggression: Option<u8>,
    pub mentality: Option<u8>,
    pub goal_keeping: Option<u8>,
    pub team_work: Option<u8>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SkillType {
    Attack,
    Defense,
    Balance,
    Stamina,
    TopSpeed,
    Acceleration,
    Response,
    Agility,
    DribbleAccuracy,
    DribbleSpeed,
    ShortPassAccuracy,
    ShortPassSpeed,
    LongPassAccuracy,
    LongPassSpeed,
    ShotAccuracy,
    ShotPower,
    ShotTechnique,
    FreeKickAccuracy,
    Swerve,
    Heading,
    Jump,
    Technique,
    Aggression,
    Mentality,
    GoalKeeping,
    TeamWork,
}

impl SkillType {
    pub const ALL: [SkillType; 26] = [
        SkillType::Attack,
        SkillType::Defense,
        SkillType::Balance,
        SkillType::Stamina,
        SkillType::TopSpeed,
        SkillType::Acceleration,
        SkillType::Response,
        SkillType::Agility,
        SkillType::DribbleAccuracy,
        SkillType::DribbleSpeed,
        SkillType::ShortPassAccuracy,
        SkillType::ShortPassSpeed,
        SkillType::LongPassAccuracy,
        SkillType::LongPassSpeed,
        SkillType::ShotAccuracy,
        SkillType::ShotPower,
        SkillType::ShotTechnique,
        SkillType::FreeKickAccuracy,
        SkillType::Swerve,
        SkillType::Heading,
        SkillType::Jump,
        SkillType::Technique,
        SkillType::Aggression,
        SkillType::Mentality,
        SkillType::GoalKeeping,
        SkillType::TeamWork,
    ];
}

impl PlayerSkills {
    pub fn get(&self, skill: SkillType) -> Option<u8> {
        match skill {
            SkillType::Attack => self.attack,
            SkillType::Defense => self.defense,
            SkillType::Balance => self.balance,
            SkillType::Stamina => self.stamina,
            SkillType::TopSpeed => self.top_speed,
            SkillType::Acceleration => self.acceleration,
            SkillType::Response => self.response,
            SkillType::Agility => self.agility,
            SkillType::DribbleAccuracy => self.dribble_accuracy,
            SkillType::DribbleSpeed => self.dribble_speed,
            SkillType::ShortPassAccuracy => self.short_pass_accuracy,
            SkillType::ShortPassSpeed => self.short_pass_speed,
            SkillType::LongPassAccuracy => self.long_pass_accuracy,
            SkillType::LongPassSpeed => self.long_pass_speed,
            SkillType::ShotAccuracy => self.shot_accuracy,
            SkillType::ShotPower => self.shot_power,
            SkillType::ShotTechnique => self.shot_technique,
            SkillType::FreeKickAccuracy => self.free_kick_accuracy,
            SkillType::Swerve => self.swerve,
            SkillType::Heading => self.heading,
            SkillType::Jump => self.jump,
            SkillType::Technique => self.technique,
            SkillType::Aggression => self.aggression,
            SkillType::Mentality => self.mentality,
            SkillType::GoalKeeping => self.goal_keeping,
            SkillType::TeamWork => self.team_work,
        }
    }

    /// Sheet with every skill set to the same value.
    pub fn uniform(value: u8) -> Self {
        let v = Some(value);

        PlayerSkills {
            attack: v,
            defense: v,
            balance: v,
            stamina: v,
            top_speed: v,
            acceleration: v,
            response: v,
            agility: v,
            dribble_accuracy: v,
            dribble_speed: v,
            short_pass_accuracy: v,
            short_pass_speed: v,
            long_pass_accuracy: v,
            long_pass_speed: v,
            shot_accuracy: v,
            shot_power: v,
            shot_technique: v,
            free_kick_accuracy: v,
            swerve: v,
            heading: v,
            jump: v,
            technique: v,
            aggression: v,
            mentality: v,
            goal_keeping: v,
            team_work: v,
        }
    }

    /// Mean of the skills present on the sheet, `None` when it is empty.
    pub fn average(&self) -> Option<f64> {
        let present = SkillType::ALL
            .iter()
            .filter_map(|skill| self.get(*skill))
            .collect::<Vec<_>>();

        if present.is_empty() {
            return None;
        }

        let total: u32 = present.iter().map(|v| *v as u32).sum();

        Some(total as f64 / present.len() as f64)
    }

    pub fn ratings(&self) -> SkillRatings {
        SkillRatings {
            attack: mean(&[self.attack]),
            defense: mean(&[self.defense, self.aggression]),
            physical: mean(&[
                self.stamina,
                self.top_speed,
                self.acceleration,
                self.response,
                self.agility,
                self.jump,
            ]),
            power: mean(&[self.shot_power, self.balance, self.mentality]),
            technique: mean(&[
                self.technique,
                self.swerve,
                self.free_kick_accuracy,
                self.dribble_accuracy,
                self.dribble_speed,
                self.short_pass_accuracy,
                self.short_pass_speed,
                self.long_pass_accuracy,
                self.long_pass_speed,
            ]),
            goalkeeping: mean(&[self.defense, self.goal_keeping, self.response, self.agility]),
        }
    }
}

/// Bundled ratings shown on player cards.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillRatings {
    pub attack: u8,
    pub defense: u8,
    pub physical: u8,
    pub power: u8,
    pub technique: u8,
    pub goalkeeping: u8,
}

impl SkillRatings {
    pub fn overall(&self) -> u8 {
        let total = self.attack as u32
            + self.defense as u32
            + self.physical as u32
            + self.power as u32
            + self.technique as u32;

        (total / 5) as u8
    }
}

// integer mean, absent values count as zero
fn mean(values: &[Option<u8>]) -> u8 {
    if values.is_empty() {
        return 0;
    }

    let total: u32 = values.iter().map(|v| v.unwrap_or(0) as u32).sum();

    (total / values.len() as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_of_uniform_sheet() {
        let ratings = PlayerSkills::uniform(80).ratings();

        assert_eq!(ratings.attack, 80);
        assert_eq!(ratings.defense, 80);
        assert_eq!(ratings.physical, 80);
        assert_eq!(ratings.power, 80);
        assert_eq!(ratings.technique, 80);
        assert_eq!(ratings.goalkeeping, 80);
        assert_eq!(ratings.overall(), 80);
    }

    #[test]
    fn test_missing_skills_count_as_zero() {
        let skills = PlayerSkills {
            defense: Some(80),
            aggression: None,
            ..PlayerSkills::default()
        };

        assert_eq!(skills.ratings().defense, 40);
        assert_eq!(PlayerSkills::default().ratings(), SkillRatings::default());
    }

    #[test]
    fn test_swap_within_group_keeps_rating() {
        let mut skills = PlayerSkills::uniform(70);
        skills.shot_power = Some(90);
        skills.mentality = Some(55);

        let mut swapped = skills;
        swapped.shot_power = Some(55);
        swapped.mentality = Some(90);

        assert_eq!(skills.ratings(), swapped.ratings());
    }

    #[test]
    fn test_get_matches_fields() {
        let skills = PlayerSkills {
            goal_keeping: Some(91),
            team_work: Some(12),
            ..PlayerSkills::default()
        };

        assert_eq!(skills.get(SkillType::GoalKeeping), Some(91));
        assert_eq!(skills.get(SkillType::TeamWork), Some(12));
        assert_eq!(skills.get(SkillType::Attack), None);
    }

    #[test]
    fn test_average_ignores_missing_skills() {
        let skills = PlayerSkills {
            attack: Some(90),
            defense: Some(60),
            ..PlayerSkills::default()
        };

        assert_eq!(skills.average(), Some(75.0));
        assert_eq!(PlayerSkills::uniform(80).average(), Some(80.0));
        assert_eq!(PlayerSkills::default().average(), None);
    }
}

//! One-time achievements and their energy rewards

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    Creator,
    LifeGiver,
    Gardener,
    Shepherd,
    Civilization,
    SpaceAge,
    Galactic,
    Survivor,
    Balance,
    Ancient,
    Multiverse,
    #[serde(rename = "divine_10")]
    Divine10,
    #[serde(rename = "divine_50")]
    Divine50,
}

impl AchievementId {
    pub fn as_str(&self) -> &'static str {
        achievement(*self).key
    }

    pub fn from_key(key: &str) -> Option<Self> {
        ACHIEVEMENTS.iter().find(|a| a.key == key).map(|a| a.id)
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Achievement {
    pub id: AchievementId,
    /// Stable key used in save files
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub reward: u32,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::Creator,
        key: "creator",
        name: "Creator",
        description: "Create your first planet",
        reward: 50,
    },
    Achievement {
        id: AchievementId::LifeGiver,
        key: "life_giver",
        name: "Life Giver",
        description: "Evolve to Bacteria",
        reward: 30,
    },
    Achievement {
        id: AchievementId::Gardener,
        key: "gardener",
        name: "Gardener",
        description: "Evolve to Plants",
        reward: 50,
    },
    Achievement {
        id: AchievementId::Shepherd,
        key: "shepherd",
        name: "Shepherd",
        description: "Evolve to Mammals",
        reward: 100,
    },
    Achievement {
        id: AchievementId::Civilization,
        key: "civilization",
        name: "Civilization",
        description: "Reach Civilization",
        reward: 200,
    },
    Achievement {
        id: AchievementId::SpaceAge,
        key: "space_age",
        name: "Space Age",
        description: "Reach Space Age",
        reward: 500,
    },
    Achievement {
        id: AchievementId::Galactic,
        key: "galactic",
        name: "Galactic Empire",
        description: "Reach Galactic stage",
        reward: 1000,
    },
    Achievement {
        id: AchievementId::Survivor,
        key: "survivor",
        name: "Survivor",
        description: "Survive an extinction event",
        reward: 150,
    },
    Achievement {
        id: AchievementId::Balance,
        key: "balance",
        name: "Balance",
        description: "All stats above 50",
        reward: 100,
    },
    Achievement {
        id: AchievementId::Ancient,
        key: "ancient",
        name: "Ancient World",
        description: "Planet age > 1000 years",
        reward: 200,
    },
    Achievement {
        id: AchievementId::Multiverse,
        key: "multiverse",
        name: "Multiverse",
        description: "Create 3 planets",
        reward: 300,
    },
    Achievement {
        id: AchievementId::Divine10,
        key: "divine_10",
        name: "Minor God",
        description: "Use 10 divine powers",
        reward: 100,
    },
    Achievement {
        id: AchievementId::Divine50,
        key: "divine_50",
        name: "Major God",
        description: "Use 50 divine powers",
        reward: 300,
    },
];

pub fn achievement(id: AchievementId) -> &'static Achievement {
    // Every variant has exactly one row; checked by test_every_id_has_a_row
    ACHIEVEMENTS
        .iter()
        .find(|a| a.id == id)
        .unwrap_or(&ACHIEVEMENTS[0])
}

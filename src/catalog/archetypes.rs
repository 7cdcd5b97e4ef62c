//! Planet archetypes and their starting climate

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetArchetype {
    #[default]
    Terra,
    Ocean,
    Desert,
    Ice,
    Volcanic,
}

impl PlanetArchetype {
    pub const ALL: [PlanetArchetype; 5] = [
        Self::Terra,
        Self::Ocean,
        Self::Desert,
        Self::Ice,
        Self::Volcanic,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Terra => "terra",
            Self::Ocean => "ocean",
            Self::Desert => "desert",
            Self::Ice => "ice",
            Self::Volcanic => "volcanic",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Terra => "Terra",
            Self::Ocean => "Ocean World",
            Self::Desert => "Desert World",
            Self::Ice => "Ice World",
            Self::Volcanic => "Volcanic World",
        }
    }

    pub fn base_water(&self) -> f64 {
        match self {
            Self::Terra => 50.0,
            Self::Ocean => 80.0,
            Self::Desert => 20.0,
            Self::Ice => 60.0,
            Self::Volcanic => 15.0,
        }
    }

    pub fn base_temperature(&self) -> f64 {
        match self {
            Self::Terra => 50.0,
            Self::Ocean => 40.0,
            Self::Desert => 70.0,
            Self::Ice => 10.0,
            Self::Volcanic => 85.0,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

impl std::fmt::Display for PlanetArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

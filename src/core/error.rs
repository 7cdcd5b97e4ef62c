use thiserror::Error;

use crate::core::types::PlanetId;

#[derive(Error, Debug)]
pub enum PocketError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Username already exists: {0}")]
    AccountExists(String),

    #[error("Username too short (minimum {min} characters)")]
    UsernameTooShort { min: usize },

    #[error("PIN must be {min}+ digits")]
    PinTooShort { min: usize },

    #[error("Wrong PIN")]
    WrongPin,

    #[error("Unknown divine power: {0}")]
    UnknownPower(String),

    #[error("Not enough divine energy: need {needed}, have {available:.1}")]
    InsufficientEnergy { needed: u32, available: f64 },

    #[error("No active planet")]
    NoActivePlanet,

    #[error("Planet not found: {0}")]
    PlanetNotFound(PlanetId),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PocketError>;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Dialect identifiers for regional Marathi variants
///
/// This module defines the seventeen recognized dialect identifiers,
/// including `standard` which is the identity case for the rule engine.
/// Identifiers round-trip through their lowercase string form for
/// configuration files, CLI arguments and API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Standard Marathi, the no-op identity dialect
    Standard,
    /// Pune Marathi
    Pune,
    /// Mumbai Marathi (Bambaiya)
    Mumbai,
    /// Nagpur Marathi (Varhadi)
    Nagpur,
    /// Kolhapur Marathi
    Kolhapur,
    /// Ahirani (Khandesh)
    Ahirani,
    /// Malvani (Konkan)
    Malvani,
    /// Agri (Raigad/Thane)
    Agri,
    /// Warli (Tribal)
    Warli,
    /// Thanjavur Marathi
    Thanjavur,
    /// Koli (Fisherfolk dialect)
    Koli,
    /// Solapuri
    Solapuri,
    /// Marathwada Marathi
    Marathwada,
    /// Belgaum Marathi
    Belgaum,
    /// Dangii
    Dangii,
    /// Pawra
    Pawra,
    /// Gondi
    Gondi,
}

impl Dialect {
    /// All recognized dialects, standard first
    pub const ALL: [Dialect; 17] = [
        Self::Standard,
        Self::Pune,
        Self::Mumbai,
        Self::Nagpur,
        Self::Kolhapur,
        Self::Ahirani,
        Self::Malvani,
        Self::Agri,
        Self::Warli,
        Self::Thanjavur,
        Self::Koli,
        Self::Solapuri,
        Self::Marathwada,
        Self::Belgaum,
        Self::Dangii,
        Self::Pawra,
        Self::Gondi,
    ];

    /// Lowercase identifier used in configuration and API payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Pune => "pune",
            Self::Mumbai => "mumbai",
            Self::Nagpur => "nagpur",
            Self::Kolhapur => "kolhapur",
            Self::Ahirani => "ahirani",
            Self::Malvani => "malvani",
            Self::Agri => "agri",
            Self::Warli => "warli",
            Self::Thanjavur => "thanjavur",
            Self::Koli => "koli",
            Self::Solapuri => "solapuri",
            Self::Marathwada => "marathwada",
            Self::Belgaum => "belgaum",
            Self::Dangii => "dangii",
            Self::Pawra => "pawra",
            Self::Gondi => "gondi",
        }
    }

    /// Human-readable label for UI and CLI listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Marathi",
            Self::Pune => "Pune Marathi",
            Self::Mumbai => "Mumbai Marathi",
            Self::Nagpur => "Nagpur Marathi (Varhadi)",
            Self::Kolhapur => "Kolhapur Marathi",
            Self::Ahirani => "Ahirani (Khandesh)",
            Self::Malvani => "Malvani (Konkan)",
            Self::Agri => "Agri (Raigad/Thane)",
            Self::Warli => "Warli (Tribal)",
            Self::Thanjavur => "Thanjavur Marathi",
            Self::Koli => "Koli (Fisherfolk Dialect)",
            Self::Solapuri => "Solapuri",
            Self::Marathwada => "Marathwada Marathi",
            Self::Belgaum => "Belgaum Marathi",
            Self::Dangii => "Dangii",
            Self::Pawra => "Pawra",
            Self::Gondi => "Gondi",
        }
    }
}

// Implement Display trait for Dialect
impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Implement FromStr trait for Dialect
impl std::str::FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|d| d.as_str() == normalized)
            .copied()
            .ok_or_else(|| anyhow!("Unknown dialect: {}", s))
    }
}

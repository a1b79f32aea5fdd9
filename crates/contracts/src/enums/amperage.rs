use serde::{Deserialize, Serialize};

/// Rated amperage of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Amperage {
    #[serde(rename = "1000")]
    A1000,
    #[serde(rename = "1200")]
    A1200,
    #[serde(rename = "2000")]
    A2000,
    #[serde(rename = "2500")]
    A2500,
    #[serde(rename = "3000")]
    A3000,
    #[serde(rename = "4000")]
    A4000,
}

impl Amperage {
    pub fn code(&self) -> &'static str {
        match self {
            Amperage::A1000 => "1000",
            Amperage::A1200 => "1200",
            Amperage::A2000 => "2000",
            Amperage::A2500 => "2500",
            Amperage::A3000 => "3000",
            Amperage::A4000 => "4000",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Amperage::A1000 => "1000A",
            Amperage::A1200 => "1200A",
            Amperage::A2000 => "2000A",
            Amperage::A2500 => "2500A",
            Amperage::A3000 => "3000A",
            Amperage::A4000 => "4000A",
        }
    }

    /// Ascending, the order the amperage selector lists them
    pub fn all() -> Vec<Amperage> {
        vec![
            Amperage::A1000,
            Amperage::A1200,
            Amperage::A2000,
            Amperage::A2500,
            Amperage::A3000,
            Amperage::A4000,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1000" => Some(Amperage::A1000),
            "1200" => Some(Amperage::A1200),
            "2000" => Some(Amperage::A2000),
            "2500" => Some(Amperage::A2500),
            "3000" => Some(Amperage::A3000),
            "4000" => Some(Amperage::A4000),
            _ => None,
        }
    }

    /// Number of bars per phase this rating needs
    pub fn tier(&self) -> u32 {
        match self {
            Amperage::A4000 => 4,
            Amperage::A3000 | Amperage::A2500 => 3,
            Amperage::A2000 | Amperage::A1200 => 2,
            Amperage::A1000 => 1,
        }
    }
}

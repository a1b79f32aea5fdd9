use serde::{Deserialize, Serialize};

/// Section width in inches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionWidth {
    #[serde(rename = "36")]
    W36,
    #[serde(rename = "40")]
    W40,
    #[serde(rename = "44")]
    W44,
}

impl SectionWidth {
    pub fn code(&self) -> &'static str {
        match self {
            SectionWidth::W36 => "36",
            SectionWidth::W40 => "40",
            SectionWidth::W44 => "44",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SectionWidth::W36 => "36\"",
            SectionWidth::W40 => "40\"",
            SectionWidth::W44 => "44\"",
        }
    }

    pub fn all() -> Vec<SectionWidth> {
        vec![SectionWidth::W36, SectionWidth::W40, SectionWidth::W44]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "36" => Some(SectionWidth::W36),
            "40" => Some(SectionWidth::W40),
            "44" => Some(SectionWidth::W44),
            _ => None,
        }
    }
}

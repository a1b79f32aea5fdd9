use serde::{Deserialize, Serialize};

/// Board depth in inches. Only depths with programmed rules are representable;
/// any other entered depth parses to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Depth {
    #[serde(rename = "30")]
    D30,
    #[serde(rename = "36")]
    D36,
}

impl Depth {
    pub fn code(&self) -> &'static str {
        match self {
            Depth::D30 => "30",
            Depth::D36 => "36",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Depth::D30 => "30\"",
            Depth::D36 => "36\"",
        }
    }

    pub fn all() -> Vec<Depth> {
        vec![Depth::D30, Depth::D36]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "30" => Some(Depth::D30),
            "36" => Some(Depth::D36),
            _ => None,
        }
    }
}

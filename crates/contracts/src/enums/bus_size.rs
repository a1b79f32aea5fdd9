use serde::{Deserialize, Serialize};

/// Bus bar size in inches. Single-valued for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusSize {
    #[serde(rename = "4")]
    B4,
}

impl BusSize {
    pub fn code(&self) -> &'static str {
        match self {
            BusSize::B4 => "4",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BusSize::B4 => "4\"",
        }
    }

    pub fn all() -> Vec<BusSize> {
        vec![BusSize::B4]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "4" => Some(BusSize::B4),
            _ => None,
        }
    }
}

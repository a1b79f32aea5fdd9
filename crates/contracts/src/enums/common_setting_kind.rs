use serde::{Deserialize, Serialize};

/// Order-wide settings that may instead be set per section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommonSettingKind {
    Depth,
    Height,
    Amperage,
    Bus,
}

impl CommonSettingKind {
    pub fn code(&self) -> &'static str {
        match self {
            CommonSettingKind::Depth => "depth",
            CommonSettingKind::Height => "height",
            CommonSettingKind::Amperage => "amperage",
            CommonSettingKind::Bus => "bus",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CommonSettingKind::Depth => "Depth",
            CommonSettingKind::Height => "Height",
            CommonSettingKind::Amperage => "Amperage",
            CommonSettingKind::Bus => "Bus Size",
        }
    }

    /// Order in which toggles are re-applied after a section rebuild
    pub fn all() -> Vec<CommonSettingKind> {
        vec![
            CommonSettingKind::Depth,
            CommonSettingKind::Height,
            CommonSettingKind::Amperage,
            CommonSettingKind::Bus,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "depth" => Some(CommonSettingKind::Depth),
            "height" => Some(CommonSettingKind::Height),
            "amperage" => Some(CommonSettingKind::Amperage),
            "bus" => Some(CommonSettingKind::Bus),
            _ => None,
        }
    }
}

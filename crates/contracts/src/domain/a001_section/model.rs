use crate::enums::{Amperage, BusSize, Depth, SectionType, SectionWidth};
use serde::{Deserialize, Serialize};

/// One panel section as the resolver sees it.
///
/// Typed fields are `None` when the form value is unset or not a recognized
/// code; the resolver degrades on `None` instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    /// 1-based position among sections
    pub index: usize,
    pub total_sections: usize,
    pub section_type: Option<SectionType>,
    pub width: Option<SectionWidth>,
    pub amperage: Option<Amperage>,
    pub bus_size: Option<BusSize>,
    pub depth: Option<Depth>,
    pub height: Option<f64>,
}

impl SectionSpec {
    /// Unset section at `index` of `total_sections`
    pub fn new(index: usize, total_sections: usize) -> Self {
        Self {
            index,
            total_sections,
            section_type: None,
            width: None,
            amperage: None,
            bus_size: None,
            depth: None,
            height: None,
        }
    }

    /// First or last section of the board
    pub fn is_edge(&self) -> bool {
        self.index == 1 || self.index == self.total_sections
    }
}

/// A catalog asset and how many of it one section needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRequirement {
    pub asset_id: String,
    pub quantity: u32,
}

impl AssetRequirement {
    pub fn new(asset_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            asset_id: asset_id.into(),
            quantity,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::section_width::SectionWidth;

/// Product line of a switchboard section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    #[serde(rename = "MLO")]
    Mlo,
    Spectra,
}

impl SectionType {
    pub fn code(&self) -> &'static str {
        match self {
            SectionType::Mlo => "MLO",
            SectionType::Spectra => "Spectra",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.code()
    }

    pub fn all() -> Vec<SectionType> {
        vec![SectionType::Mlo, SectionType::Spectra]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MLO" => Some(SectionType::Mlo),
            "Spectra" => Some(SectionType::Spectra),
            _ => None,
        }
    }

    /// Widths the width selector offers once this type is chosen.
    /// MLO is fixed at 36", Spectra is selectable.
    pub fn allowed_widths(&self) -> &'static [SectionWidth] {
        match self {
            SectionType::Mlo => &[SectionWidth::W36],
            SectionType::Spectra => &[SectionWidth::W40, SectionWidth::W44],
        }
    }

    pub fn default_width(&self) -> SectionWidth {
        match self {
            SectionType::Mlo => SectionWidth::W36,
            SectionType::Spectra => SectionWidth::W44,
        }
    }

    /// Whether the user may pick among `allowed_widths`
    pub fn width_editable(&self) -> bool {
        matches!(self, SectionType::Spectra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for t in SectionType::all() {
            assert_eq!(SectionType::from_code(t.code()), Some(t));
        }
        assert_eq!(SectionType::from_code(""), None);
        assert_eq!(SectionType::from_code("mlo"), None);
    }

    #[test]
    fn test_width_rules() {
        assert_eq!(SectionType::Mlo.allowed_widths(), &[SectionWidth::W36]);
        assert!(!SectionType::Mlo.width_editable());
        assert_eq!(SectionType::Spectra.default_width(), SectionWidth::W44);
        assert!(SectionType::Spectra.width_editable());
    }
}

//! Immutable rule and naming tables shared by the resolver and the form controller.
//!
//! Built once on first access and never mutated. Asset ids are opaque keys into
//! the external image catalog and are kept exactly as the catalog names them,
//! including the entries that carry no `.png` suffix.

use crate::enums::{Amperage, BusSize, CommonSettingKind, Depth};
use once_cell::sync::Lazy;

// ─── Field naming ───────────────────────────────────────────────────────────

pub const FIELD_SALES_ORDER: &str = "sales_order";
pub const FIELD_CUSTOMER_NAME: &str = "customer_name";
pub const FIELD_JOB_ADDRESS: &str = "job_address";
pub const FIELD_SWITCHBOARD_NAME: &str = "switchboard_name";
pub const FIELD_NUM_SECTIONS: &str = "num_sections";

pub const PREFIX_SECTION_TYPE: &str = "section_type";
pub const PREFIX_WIDTH: &str = "width";
pub const PREFIX_DEPTH: &str = "depth";
pub const PREFIX_HEIGHT: &str = "height";
pub const PREFIX_AMPERAGE: &str = "amperage";
pub const PREFIX_BUS: &str = "bus";

/// Radio value meaning "differs per section"
pub const COMMON_VALUE_PER_SECTION: &str = "no";

/// `section_field("width", 3)` -> `"width_3"`
pub fn section_field(prefix: &str, index: usize) -> String {
    format!("{}_{}", prefix, index)
}

/// Inverse of [`section_field`]. Splits on the last underscore so that
/// `section_type_12` yields `("section_type", 12)`.
pub fn parse_section_field(name: &str) -> Option<(&str, usize)> {
    let (prefix, index) = name.rsplit_once('_')?;
    let index: usize = index.parse().ok()?;
    if index == 0 || prefix.is_empty() {
        return None;
    }
    Some((prefix, index))
}

// ─── Structures ─────────────────────────────────────────────────────────────

/// How a per-section control is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    Input,
    Select,
}

/// A required top-level field, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub name: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonSettingDescriptor {
    pub kind: CommonSettingKind,
    /// Radio group name, e.g. `common_depth`
    pub group_name: &'static str,
    /// Per-section field prefix, e.g. `depth` for `depth_3`
    pub field_prefix: &'static str,
    pub control: FieldControl,
    /// (value, label) pairs offered by the radio group
    pub choices: Vec<(String, String)>,
}

/// Spectra part images, grouped the way the resolver consumes them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectraAssets {
    pub edge_abc: &'static str,
    pub edge_neutral: &'static str,
    pub middle_abc: &'static str,
    pub middle_neutral: &'static str,
    pub b_link: &'static str,
    pub ac_links: [&'static str; 2],
    pub ac_phase_vertical_link: &'static str,
    pub inner_steel: &'static str,
    pub inner_steel_side_view: &'static str,
    /// Indexed by amperage tier - 1
    pub connection_bar_stack_30: [&'static str; 4],
    pub connection_bar_stack_36: [&'static str; 4],
}

pub struct Catalog {
    pub required_fields: Vec<RequiredField>,
    pub common_settings: Vec<CommonSettingDescriptor>,
    pub spectra: SpectraAssets,
}

// ─── Global instance ────────────────────────────────────────────────────────

pub static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::build);

// ─── Implementation ─────────────────────────────────────────────────────────

impl Catalog {
    fn build() -> Self {
        Self {
            required_fields: [
                FIELD_SALES_ORDER,
                FIELD_CUSTOMER_NAME,
                FIELD_JOB_ADDRESS,
                FIELD_SWITCHBOARD_NAME,
                FIELD_NUM_SECTIONS,
            ]
            .into_iter()
            .map(|name| RequiredField {
                name,
                label: required_label(name),
            })
            .collect(),
            common_settings: vec![
                CommonSettingDescriptor {
                    kind: CommonSettingKind::Depth,
                    group_name: "common_depth",
                    field_prefix: PREFIX_DEPTH,
                    control: FieldControl::Input,
                    choices: with_per_section(
                        ["30", "36", "40"].iter().map(|d| (d.to_string(), format!("{}\"", d))),
                    ),
                },
                CommonSettingDescriptor {
                    kind: CommonSettingKind::Height,
                    group_name: "common_height",
                    field_prefix: PREFIX_HEIGHT,
                    control: FieldControl::Input,
                    choices: with_per_section(
                        ["80", "90"].iter().map(|h| (h.to_string(), format!("{}\"", h))),
                    ),
                },
                CommonSettingDescriptor {
                    kind: CommonSettingKind::Amperage,
                    group_name: "common_amperage",
                    field_prefix: PREFIX_AMPERAGE,
                    control: FieldControl::Select,
                    choices: with_per_section(
                        Amperage::all()
                            .into_iter()
                            .map(|a| (a.code().to_string(), a.display_name().to_string())),
                    ),
                },
                CommonSettingDescriptor {
                    kind: CommonSettingKind::Bus,
                    group_name: "common_bus",
                    field_prefix: PREFIX_BUS,
                    control: FieldControl::Select,
                    choices: with_per_section(
                        BusSize::all()
                            .into_iter()
                            .map(|b| (b.code().to_string(), b.display_name().to_string())),
                    ),
                },
            ],
            spectra: SpectraAssets {
                edge_abc: "38x4spectraHorizontalABC.png",
                edge_neutral: "38x4spectraHorizontalNuetral.png",
                middle_abc: "43x4spectraHorizontalABC.png",
                middle_neutral: "43x4spectraHorizontalNuetral.png",
                b_link: "95x4spectraBLink.png",
                ac_links: ["115x4spectraACLink1.png", "115x4spectraACLink2.png"],
                ac_phase_vertical_link: "1225x4spectraACPhaseVerticalLink4in.png",
                inner_steel: "44375SpectraInnerSteel44Wide.png",
                inner_steel_side_view: "44375SpectraInnerSteel44WideSideView.png",
                connection_bar_stack_30: [
                    "825x4SpectraHorizontalConnection1BarStack30Deep",
                    "775x4SpectraHorizontalConnection2BarStack30deep.png",
                    "725x4SpectraHorizontalConnection3BarStack30deep.png",
                    "675x4SpectraHorizontalConnection4BarStack30deep.png",
                ],
                connection_bar_stack_36: [
                    "1425x4SpectraHorizontalConnection1BarStack36deep",
                    "1375x4SpectraHorizontalConnection2BarStack36deep",
                    "1325x4SpectraHorizontalConnection3BarStack36deep",
                    "1275x4SpectraHorizontalConnection4BarStack36deep.png",
                ],
            },
        }
    }

    pub fn common_setting(&self, kind: CommonSettingKind) -> &CommonSettingDescriptor {
        // build() registers the kinds in CommonSettingKind::all() order
        let idx = match kind {
            CommonSettingKind::Depth => 0,
            CommonSettingKind::Height => 1,
            CommonSettingKind::Amperage => 2,
            CommonSettingKind::Bus => 3,
        };
        &self.common_settings[idx]
    }

    pub fn common_setting_by_group(&self, group_name: &str) -> Option<&CommonSettingDescriptor> {
        self.common_settings.iter().find(|d| d.group_name == group_name)
    }

    /// Connection bar stack image for a depth, indexed by amperage tier
    pub fn connection_bar_stack(&self, depth: Depth, tier: u32) -> &'static str {
        let table = match depth {
            Depth::D30 => &self.spectra.connection_bar_stack_30,
            Depth::D36 => &self.spectra.connection_bar_stack_36,
        };
        let idx = (tier.clamp(1, 4) - 1) as usize;
        table[idx]
    }
}

/// Only the first underscore becomes a space.
fn required_label(name: &'static str) -> &'static str {
    match name {
        FIELD_SALES_ORDER => "sales order",
        FIELD_CUSTOMER_NAME => "customer name",
        FIELD_JOB_ADDRESS => "job address",
        FIELD_SWITCHBOARD_NAME => "switchboard name",
        FIELD_NUM_SECTIONS => "num sections",
        other => other,
    }
}

fn with_per_section(values: impl Iterator<Item = (String, String)>) -> Vec<(String, String)> {
    let mut choices: Vec<(String, String)> = values.collect();
    choices.push((
        COMMON_VALUE_PER_SECTION.to_string(),
        "Varies by section".to_string(),
    ));
    choices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_field_naming() {
        assert_eq!(section_field(PREFIX_SECTION_TYPE, 3), "section_type_3");
        assert_eq!(parse_section_field("section_type_12"), Some(("section_type", 12)));
        assert_eq!(parse_section_field("width_1"), Some(("width", 1)));
        assert_eq!(parse_section_field("width_0"), None);
        assert_eq!(parse_section_field("common_depth"), None);
        assert_eq!(parse_section_field("sales_order"), None);
    }

    #[test]
    fn test_required_labels_replace_first_underscore() {
        for field in &CATALOG.required_fields {
            assert_eq!(field.label, field.name.replacen('_', " ", 1));
        }
        assert_eq!(CATALOG.required_fields[1].label, "customer name");
    }

    #[test]
    fn test_every_kind_has_descriptor() {
        for kind in CommonSettingKind::all() {
            let d = CATALOG.common_setting(kind);
            assert_eq!(d.kind, kind);
            assert_eq!(d.group_name, format!("common_{}", kind.code()));
            assert!(d.choices.iter().any(|(v, _)| v == COMMON_VALUE_PER_SECTION));
        }
    }

    #[test]
    fn test_bar_stack_ids_kept_verbatim() {
        assert_eq!(
            CATALOG.connection_bar_stack(Depth::D30, 1),
            "825x4SpectraHorizontalConnection1BarStack30Deep"
        );
        assert_eq!(
            CATALOG.connection_bar_stack(Depth::D36, 3),
            "1325x4SpectraHorizontalConnection3BarStack36deep"
        );
    }
}

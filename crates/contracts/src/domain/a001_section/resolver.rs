//! Maps a section configuration to the catalog assets it requires.
//!
//! Never fails: unknown or missing values fall back to tier 1 or simply emit
//! nothing for the affected step.

use super::model::{AssetRequirement, SectionSpec};
use crate::enums::{Amperage, Depth, SectionType, SectionWidth};
use crate::shared::catalog::CATALOG;

const B_LINK_QTY: u32 = 2;
const AC_LINK_QTY: u32 = 2;
const CONNECTION_BAR_STACK_QTY: u32 = 6;
const AC_PHASE_VERTICAL_QTY: u32 = 4;
const INNER_STEEL_QTY: u32 = 2;
const INNER_STEEL_SIDE_VIEW_QTY: u32 = 1;

/// Quantity multiplier for a rating; unrecognized ratings count as tier 1.
pub fn amperage_tier(amperage: Option<Amperage>) -> u32 {
    amperage.map_or(1, |a| a.tier())
}

/// Connection bar stack image for an amperage/depth pair.
/// `None` when the depth has no programmed stack.
pub fn connection_bar_stack_asset(
    amperage: Option<Amperage>,
    depth: Option<Depth>,
) -> Option<&'static str> {
    let depth = depth?;
    Some(CATALOG.connection_bar_stack(depth, amperage_tier(amperage)))
}

/// Ordered bill of assets for one section. Only Spectra sections have rules;
/// every other type resolves to an empty list.
pub fn resolve_assets(section: &SectionSpec) -> Vec<AssetRequirement> {
    if section.section_type != Some(SectionType::Spectra) {
        return Vec::new();
    }

    let assets = &CATALOG.spectra;
    let tier = amperage_tier(section.amperage);
    let mut out = Vec::with_capacity(9);

    // 40" and 44" share the same horizontal bars
    if matches!(section.width, Some(SectionWidth::W40 | SectionWidth::W44)) {
        let (abc, neutral) = if section.is_edge() {
            (assets.edge_abc, assets.edge_neutral)
        } else {
            (assets.middle_abc, assets.middle_neutral)
        };
        out.push(AssetRequirement::new(abc, tier));
        out.push(AssetRequirement::new(neutral, tier));
    }

    out.push(AssetRequirement::new(assets.b_link, B_LINK_QTY));
    for link in assets.ac_links {
        out.push(AssetRequirement::new(link, AC_LINK_QTY));
    }

    if let Some(stack) = connection_bar_stack_asset(section.amperage, section.depth) {
        out.push(AssetRequirement::new(stack, CONNECTION_BAR_STACK_QTY));
    }

    out.push(AssetRequirement::new(
        assets.ac_phase_vertical_link,
        AC_PHASE_VERTICAL_QTY,
    ));

    if section.width == Some(SectionWidth::W44) {
        out.push(AssetRequirement::new(assets.inner_steel, INNER_STEEL_QTY));
        out.push(AssetRequirement::new(
            assets.inner_steel_side_view,
            INNER_STEEL_SIDE_VIEW_QTY,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spectra(index: usize, total: usize, width: &str, amperage: &str, depth: &str) -> SectionSpec {
        SectionSpec {
            section_type: Some(SectionType::Spectra),
            width: SectionWidth::from_code(width),
            amperage: Amperage::from_code(amperage),
            depth: Depth::from_code(depth),
            ..SectionSpec::new(index, total)
        }
    }

    fn ids(assets: &[AssetRequirement]) -> Vec<&str> {
        assets.iter().map(|a| a.asset_id.as_str()).collect()
    }

    #[test]
    fn test_amperage_tier_table() {
        let expected = [
            ("4000", 4),
            ("3000", 3),
            ("2500", 3),
            ("2000", 2),
            ("1200", 2),
            ("1000", 1),
        ];
        for (code, tier) in expected {
            assert_eq!(amperage_tier(Amperage::from_code(code)), tier, "amperage {}", code);
        }
        assert_eq!(amperage_tier(Amperage::from_code("1600")), 1);
        assert_eq!(amperage_tier(Amperage::from_code("")), 1);
        assert_eq!(amperage_tier(None), 1);
    }

    #[test]
    fn test_connection_bar_stack_by_depth_and_tier() {
        assert_eq!(
            connection_bar_stack_asset(Some(Amperage::A4000), Some(Depth::D30)),
            Some("675x4SpectraHorizontalConnection4BarStack30deep.png")
        );
        assert_eq!(
            connection_bar_stack_asset(Some(Amperage::A2500), Some(Depth::D30)),
            Some("725x4SpectraHorizontalConnection3BarStack30deep.png")
        );
        assert_eq!(
            connection_bar_stack_asset(Some(Amperage::A1200), Some(Depth::D36)),
            Some("1375x4SpectraHorizontalConnection2BarStack36deep")
        );
        assert_eq!(
            connection_bar_stack_asset(None, Some(Depth::D36)),
            Some("1425x4SpectraHorizontalConnection1BarStack36deep")
        );
        assert_eq!(connection_bar_stack_asset(Some(Amperage::A4000), None), None);
    }

    #[test]
    fn test_stack_ids_distinct_per_depth_and_tier() {
        let mut seen = std::collections::HashSet::new();
        for depth in Depth::all() {
            for amp in [Amperage::A4000, Amperage::A3000, Amperage::A2000, Amperage::A1000] {
                let id = connection_bar_stack_asset(Some(amp), Some(depth));
                assert!(seen.insert(id), "duplicate stack id {:?}", id);
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_first_section_44_wide() {
        let assets = resolve_assets(&spectra(1, 3, "44", "2000", "30"));
        let expected = vec![
            AssetRequirement::new("38x4spectraHorizontalABC.png", 2),
            AssetRequirement::new("38x4spectraHorizontalNuetral.png", 2),
            AssetRequirement::new("95x4spectraBLink.png", 2),
            AssetRequirement::new("115x4spectraACLink1.png", 2),
            AssetRequirement::new("115x4spectraACLink2.png", 2),
            AssetRequirement::new("775x4SpectraHorizontalConnection2BarStack30deep.png", 6),
            AssetRequirement::new("1225x4spectraACPhaseVerticalLink4in.png", 4),
            AssetRequirement::new("44375SpectraInnerSteel44Wide.png", 2),
            AssetRequirement::new("44375SpectraInnerSteel44WideSideView.png", 1),
        ];
        assert_eq!(assets, expected);
    }

    #[test]
    fn test_middle_section_uses_43_variant() {
        let assets = resolve_assets(&spectra(2, 3, "40", "4000", "36"));
        assert_eq!(
            ids(&assets),
            vec![
                "43x4spectraHorizontalABC.png",
                "43x4spectraHorizontalNuetral.png",
                "95x4spectraBLink.png",
                "115x4spectraACLink1.png",
                "115x4spectraACLink2.png",
                "1275x4SpectraHorizontalConnection4BarStack36deep.png",
                "1225x4spectraACPhaseVerticalLink4in.png",
            ]
        );
        assert_eq!(assets[0].quantity, 4);
        assert_eq!(assets[1].quantity, 4);
    }

    #[test]
    fn test_last_section_is_edge() {
        let assets = resolve_assets(&spectra(3, 3, "40", "1000", "30"));
        assert_eq!(assets[0].asset_id, "38x4spectraHorizontalABC.png");
        assert_eq!(assets[0].quantity, 1);
    }

    #[test]
    fn test_width_40_and_44_share_horizontal_bars() {
        let a40 = resolve_assets(&spectra(1, 1, "40", "3000", "30"));
        let a44 = resolve_assets(&spectra(1, 1, "44", "3000", "30"));
        assert_eq!(a40[..2], a44[..2]);
        assert_eq!(a40.len() + 2, a44.len());
    }

    #[test]
    fn test_unknown_depth_omits_stack_only() {
        let assets = resolve_assets(&spectra(1, 2, "44", "2000", "40"));
        assert_eq!(assets.len(), 8);
        assert!(!ids(&assets).iter().any(|id| id.contains("BarStack")));
    }

    #[test]
    fn test_unset_width_skips_horizontal_bars() {
        let assets = resolve_assets(&spectra(1, 1, "", "2000", "30"));
        assert_eq!(assets[0].asset_id, "95x4spectraBLink.png");
        assert_eq!(assets.len(), 5);
    }

    #[test]
    fn test_mlo_and_unset_types_resolve_empty() {
        for index in 1..=3 {
            let mut section = spectra(index, 3, "44", "4000", "30");
            section.section_type = Some(SectionType::Mlo);
            assert!(resolve_assets(&section).is_empty());
            section.section_type = None;
            assert!(resolve_assets(&section).is_empty());
        }
    }

    #[test]
    fn test_quantities_stay_in_tier_set() {
        for amp in Amperage::all() {
            for width in ["40", "44"] {
                for index in 1..=3 {
                    let section = spectra(index, 3, width, amp.code(), "36");
                    for req in resolve_assets(&section) {
                        assert!([1, 2, 3, 4, 6].contains(&req.quantity), "{:?}", req);
                    }
                }
            }
        }
    }
}

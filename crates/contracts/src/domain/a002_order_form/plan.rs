//! Effective per-section configuration and the asset bill derived from it.

use super::registry::FieldRegistry;
use crate::domain::a001_section::{resolve_assets, AssetRequirement, SectionSpec};
use crate::enums::{Amperage, BusSize, CommonSettingKind, Depth, SectionType, SectionWidth};
use crate::shared::catalog::{
    section_field, CATALOG, COMMON_VALUE_PER_SECTION, PREFIX_SECTION_TYPE, PREFIX_WIDTH,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPlan {
    pub spec: SectionSpec,
    pub assets: Vec<AssetRequirement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPlan {
    pub sections: Vec<SectionPlan>,
    /// Quantities summed per asset id, in first-seen order
    pub totals: Vec<AssetRequirement>,
}

/// Value a section actually uses for a common setting: its own field when the
/// group says "no", the shared value otherwise.
fn effective_value<R: FieldRegistry>(
    registry: &R,
    kind: CommonSettingKind,
    index: usize,
) -> Option<String> {
    let descriptor = CATALOG.common_setting(kind);
    match registry.value(descriptor.group_name) {
        Some(v) if v == COMMON_VALUE_PER_SECTION => registry
            .value(&section_field(descriptor.field_prefix, index))
            .map(|v| v.trim().to_string()),
        other => other,
    }
}

pub fn section_specs<R: FieldRegistry>(registry: &R) -> Vec<SectionSpec> {
    let total = registry.section_count();
    (1..=total)
        .map(|index| {
            let field = |prefix: &str| registry.value(&section_field(prefix, index));
            let common = |kind| effective_value(registry, kind, index);

            SectionSpec {
                section_type: field(PREFIX_SECTION_TYPE).and_then(|v| SectionType::from_code(&v)),
                width: field(PREFIX_WIDTH).and_then(|v| SectionWidth::from_code(&v)),
                amperage: common(CommonSettingKind::Amperage)
                    .and_then(|v| Amperage::from_code(&v)),
                bus_size: common(CommonSettingKind::Bus).and_then(|v| BusSize::from_code(&v)),
                depth: common(CommonSettingKind::Depth).and_then(|v| Depth::from_code(&v)),
                height: common(CommonSettingKind::Height).and_then(|v| v.parse().ok()),
                ..SectionSpec::new(index, total)
            }
        })
        .collect()
}

pub fn asset_plan<R: FieldRegistry>(registry: &R) -> AssetPlan {
    let sections: Vec<SectionPlan> = section_specs(registry)
        .into_iter()
        .map(|spec| {
            let assets = resolve_assets(&spec);
            SectionPlan { spec, assets }
        })
        .collect();

    let mut totals: Vec<AssetRequirement> = Vec::new();
    for req in sections.iter().flat_map(|s| s.assets.iter()) {
        match totals.iter_mut().find(|t| t.asset_id == req.asset_id) {
            Some(total) => total.quantity += req.quantity,
            None => totals.push(req.clone()),
        }
    }

    AssetPlan { sections, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order_form::controller::{on_section_type_change, rebuild_sections};
    use crate::domain::a002_order_form::state::OrderFormState;

    fn board(count: usize) -> OrderFormState {
        let mut form = OrderFormState::new();
        form.set_common_value(CommonSettingKind::Depth, Some("30".into()));
        form.set_common_value(CommonSettingKind::Height, Some("90".into()));
        form.set_common_value(CommonSettingKind::Amperage, Some("2000".into()));
        form.set_common_value(CommonSettingKind::Bus, Some("4".into()));
        rebuild_sections(&mut form, count);
        form
    }

    #[test]
    fn test_specs_inherit_common_values() {
        let mut form = board(2);
        on_section_type_change(&mut form, 1, "Spectra");

        let specs = section_specs(&form);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].section_type, Some(SectionType::Spectra));
        assert_eq!(specs[0].width, Some(SectionWidth::W44));
        assert_eq!(specs[0].amperage, Some(Amperage::A2000));
        assert_eq!(specs[0].depth, Some(Depth::D30));
        assert_eq!(specs[0].bus_size, Some(BusSize::B4));
        assert_eq!(specs[0].height, Some(90.0));
        assert_eq!(specs[1].section_type, None);
        assert_eq!(specs[1].total_sections, 2);
    }

    #[test]
    fn test_specs_use_section_field_when_not_shared() {
        let mut form = board(2);
        form.set_common_value(CommonSettingKind::Amperage, Some("no".into()));
        form.set_value("amperage_2", Some("4000".into()));

        let specs = section_specs(&form);
        assert_eq!(specs[0].amperage, Some(Amperage::A1000));
        assert_eq!(specs[1].amperage, Some(Amperage::A4000));
    }

    #[test]
    fn test_plan_totals_merge_sections() {
        let mut form = board(3);
        for i in 1..=3 {
            on_section_type_change(&mut form, i, "Spectra");
        }
        on_section_type_change(&mut form, 2, "MLO");

        let plan = asset_plan(&form);
        assert_eq!(plan.sections.len(), 3);
        assert_eq!(plan.sections[0].assets.len(), 9);
        assert!(plan.sections[1].assets.is_empty());

        let abc = plan
            .totals
            .iter()
            .find(|t| t.asset_id == "38x4spectraHorizontalABC.png")
            .unwrap();
        assert_eq!(abc.quantity, 4);
        assert_eq!(plan.totals[0].asset_id, "38x4spectraHorizontalABC.png");
        assert!(plan.totals.iter().all(|t| !t.asset_id.starts_with("43x4")));
    }
}

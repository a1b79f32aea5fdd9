//! Dependent-field rules. Every operation works on a [`FieldRegistry`], runs to
//! completion synchronously and touches only the fields it names.

use super::registry::FieldRegistry;
use crate::enums::{CommonSettingKind, SectionType};
use crate::shared::catalog::{
    section_field, CATALOG, COMMON_VALUE_PER_SECTION, FIELD_NUM_SECTIONS, PREFIX_SECTION_TYPE,
    PREFIX_WIDTH,
};

/// Section type picked on card `index`: rebuilds that card's width selector.
///
/// MLO locks width to 36", Spectra offers 40"/44" defaulting to 44", anything
/// else leaves the selector empty and locked.
pub fn on_section_type_change<R: FieldRegistry>(registry: &mut R, index: usize, new_type: &str) {
    let type_name = section_field(PREFIX_SECTION_TYPE, index);
    let width_name = section_field(PREFIX_WIDTH, index);

    let type_value = Some(new_type.to_string()).filter(|v| !v.is_empty());
    registry.set_value(&type_name, type_value);

    match SectionType::from_code(new_type) {
        Some(section_type) => {
            let options = section_type
                .allowed_widths()
                .iter()
                .map(|w| (w.code().to_string(), w.display_name().to_string()))
                .collect();
            registry.set_options(&width_name, options);
            registry.set_value(
                &width_name,
                Some(section_type.default_width().code().to_string()),
            );
            registry.set_enabled(&width_name, section_type.width_editable());
        }
        None => {
            registry.set_options(&width_name, Vec::new());
            registry.set_value(&width_name, None);
            registry.set_enabled(&width_name, false);
        }
    }
}

/// Re-derive the per-section fields governed by one common setting.
///
/// The checked value `"no"` ("not shared") shows and enables every section's
/// field; any other value, or none checked, hides and disables them.
pub fn on_common_setting_change<R: FieldRegistry>(registry: &mut R, kind: CommonSettingKind) {
    let descriptor = CATALOG.common_setting(kind);
    let checked = registry.value(descriptor.group_name);
    let per_section = checked.as_deref() == Some(COMMON_VALUE_PER_SECTION);

    log::debug!(
        "Toggle {} called: {:?} (per-section: {})",
        descriptor.group_name,
        checked,
        per_section
    );

    for index in 1..=registry.section_count() {
        let name = section_field(descriptor.field_prefix, index);
        registry.set_visible(&name, per_section);
        registry.set_enabled(&name, per_section);
    }
}

/// Depth, height, amperage, bus, in that order
pub fn apply_all_common_settings<R: FieldRegistry>(registry: &mut R) {
    for kind in CommonSettingKind::all() {
        on_common_setting_change(registry, kind);
    }
}

/// Throw away every section card and build `count` fresh ones, then bring
/// their visibility back in line with the common settings.
pub fn rebuild_sections<R: FieldRegistry>(registry: &mut R, count: usize) {
    log::debug!("Rebuilding {} section(s)", count);
    registry.replace_sections(count);
    apply_all_common_settings(registry);
}

/// The section count field changed; unparsable input counts as zero.
pub fn on_num_sections_change<R: FieldRegistry>(registry: &mut R) -> usize {
    let count = registry
        .value(FIELD_NUM_SECTIONS)
        .map(|v| parse_section_count(&v))
        .unwrap_or(0);
    rebuild_sections(registry, count);
    count
}

/// Leading decimal digits of the trimmed input, e.g. `" 3 sections"` -> 3
fn parse_section_count(raw: &str) -> usize {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

use super::registry::FieldRegistry;
use crate::enums::{Amperage, BusSize, CommonSettingKind, SectionType};
use crate::shared::catalog::{
    parse_section_field, section_field, CATALOG, FIELD_CUSTOMER_NAME, FIELD_JOB_ADDRESS,
    FIELD_NUM_SECTIONS, FIELD_SALES_ORDER, FIELD_SWITCHBOARD_NAME, PREFIX_AMPERAGE, PREFIX_BUS,
    PREFIX_DEPTH, PREFIX_HEIGHT, PREFIX_SECTION_TYPE, PREFIX_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Value plus the presentation state the controller drives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub value: Option<String>,
    pub options: Vec<FieldOption>,
    pub enabled: bool,
    pub visible: bool,
}

impl FieldState {
    fn shown(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
            options: Vec::new(),
            enabled: true,
            visible: true,
        }
    }

    fn hidden(value: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
            options: Vec::new(),
            enabled: false,
            visible: false,
        }
    }

    fn with_options(mut self, options: Vec<(String, String)>) -> Self {
        self.options = to_options(options);
        self
    }
}

/// Fields of one section card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFields {
    pub index: usize,
    pub section_type: FieldState,
    pub width: FieldState,
    pub depth: FieldState,
    pub height: FieldState,
    pub amperage: FieldState,
    pub bus: FieldState,
}

impl SectionFields {
    /// Fresh card: type unset, width locked until a type is chosen, every
    /// dependent field hidden and disabled.
    pub fn placeholder(index: usize) -> Self {
        let mut type_options = vec![(String::new(), "Select type".to_string())];
        type_options.extend(
            SectionType::all()
                .into_iter()
                .map(|t| (t.code().to_string(), t.display_name().to_string())),
        );

        Self {
            index,
            section_type: FieldState::shown(None).with_options(type_options),
            width: FieldState {
                enabled: false,
                ..FieldState::shown(None)
            },
            depth: FieldState::hidden(None),
            height: FieldState::hidden(None),
            amperage: FieldState::hidden(Some(Amperage::A1000.code())).with_options(
                Amperage::all()
                    .into_iter()
                    .map(|a| (a.code().to_string(), a.display_name().to_string()))
                    .collect(),
            ),
            bus: FieldState::hidden(Some(BusSize::B4.code())).with_options(
                BusSize::all()
                    .into_iter()
                    .map(|b| (b.code().to_string(), b.display_name().to_string()))
                    .collect(),
            ),
        }
    }

    pub fn field(&self, prefix: &str) -> Option<&FieldState> {
        match prefix {
            PREFIX_SECTION_TYPE => Some(&self.section_type),
            PREFIX_WIDTH => Some(&self.width),
            PREFIX_DEPTH => Some(&self.depth),
            PREFIX_HEIGHT => Some(&self.height),
            PREFIX_AMPERAGE => Some(&self.amperage),
            PREFIX_BUS => Some(&self.bus),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, prefix: &str) -> Option<&mut FieldState> {
        match prefix {
            PREFIX_SECTION_TYPE => Some(&mut self.section_type),
            PREFIX_WIDTH => Some(&mut self.width),
            PREFIX_DEPTH => Some(&mut self.depth),
            PREFIX_HEIGHT => Some(&mut self.height),
            PREFIX_AMPERAGE => Some(&mut self.amperage),
            PREFIX_BUS => Some(&mut self.bus),
            _ => None,
        }
    }

    /// (prefix, field) pairs in card order
    pub fn fields(&self) -> [(&'static str, &FieldState); 6] {
        [
            (PREFIX_SECTION_TYPE, &self.section_type),
            (PREFIX_WIDTH, &self.width),
            (PREFIX_DEPTH, &self.depth),
            (PREFIX_HEIGHT, &self.height),
            (PREFIX_AMPERAGE, &self.amperage),
            (PREFIX_BUS, &self.bus),
        ]
    }
}

/// In-memory equivalent of the order form DOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFormState {
    pub sales_order: String,
    pub customer_name: String,
    pub job_address: String,
    pub switchboard_name: String,
    pub num_sections: String,
    /// Checked value per common radio group; `None` when nothing is checked
    pub common: BTreeMap<CommonSettingKind, Option<String>>,
    pub sections: Vec<SectionFields>,
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderFormState {
    pub fn new() -> Self {
        Self {
            sales_order: String::new(),
            customer_name: String::new(),
            job_address: String::new(),
            switchboard_name: String::new(),
            num_sections: String::new(),
            common: CommonSettingKind::all()
                .into_iter()
                .map(|kind| (kind, None))
                .collect(),
            sections: Vec::new(),
        }
    }

    pub fn common_value(&self, kind: CommonSettingKind) -> Option<&str> {
        self.common.get(&kind).and_then(|v| v.as_deref())
    }

    pub fn set_common_value(&mut self, kind: CommonSettingKind, value: Option<String>) {
        self.common.insert(kind, value);
    }

    pub fn section(&self, index: usize) -> Option<&SectionFields> {
        index.checked_sub(1).and_then(|i| self.sections.get(i))
    }

    fn metadata_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            FIELD_SALES_ORDER => Some(&mut self.sales_order),
            FIELD_CUSTOMER_NAME => Some(&mut self.customer_name),
            FIELD_JOB_ADDRESS => Some(&mut self.job_address),
            FIELD_SWITCHBOARD_NAME => Some(&mut self.switchboard_name),
            FIELD_NUM_SECTIONS => Some(&mut self.num_sections),
            _ => None,
        }
    }

    fn metadata(&self, name: &str) -> Option<&String> {
        match name {
            FIELD_SALES_ORDER => Some(&self.sales_order),
            FIELD_CUSTOMER_NAME => Some(&self.customer_name),
            FIELD_JOB_ADDRESS => Some(&self.job_address),
            FIELD_SWITCHBOARD_NAME => Some(&self.switchboard_name),
            FIELD_NUM_SECTIONS => Some(&self.num_sections),
            _ => None,
        }
    }

    fn section_field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        let (prefix, index) = parse_section_field(name)?;
        let section = index.checked_sub(1).and_then(|i| self.sections.get_mut(i))?;
        section.field_mut(prefix)
    }

    /// Every submittable named field, the way a browser serializes a form:
    /// disabled controls, unchecked groups and empty selects are left out.
    pub fn submitted_fields(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        for name in [
            FIELD_SALES_ORDER,
            FIELD_CUSTOMER_NAME,
            FIELD_JOB_ADDRESS,
            FIELD_SWITCHBOARD_NAME,
            FIELD_NUM_SECTIONS,
        ] {
            if let Some(v) = self.metadata(name) {
                out.insert(name.to_string(), v.clone());
            }
        }
        for (kind, value) in &self.common {
            if let Some(v) = value {
                let group = CATALOG.common_setting(*kind).group_name;
                out.insert(group.to_string(), v.clone());
            }
        }
        for section in &self.sections {
            for (prefix, field) in section.fields() {
                if !field.enabled {
                    continue;
                }
                if let Some(v) = &field.value {
                    out.insert(section_field(prefix, section.index), v.clone());
                }
            }
        }
        out
    }
}

impl FieldRegistry for OrderFormState {
    fn value(&self, name: &str) -> Option<String> {
        if let Some(v) = self.metadata(name) {
            return Some(v.clone());
        }
        if let Some(descriptor) = CATALOG.common_setting_by_group(name) {
            return self.common_value(descriptor.kind).map(str::to_string);
        }
        let (prefix, index) = parse_section_field(name)?;
        self.section(index)?.field(prefix)?.value.clone()
    }

    fn set_value(&mut self, name: &str, value: Option<String>) {
        if let Some(slot) = self.metadata_mut(name) {
            *slot = value.unwrap_or_default();
            return;
        }
        if let Some(descriptor) = CATALOG.common_setting_by_group(name) {
            self.set_common_value(descriptor.kind, value);
            return;
        }
        if let Some(field) = self.section_field_mut(name) {
            field.value = value;
        }
    }

    fn set_options(&mut self, name: &str, options: Vec<(String, String)>) {
        if let Some(field) = self.section_field_mut(name) {
            field.options = to_options(options);
        }
    }

    fn set_enabled(&mut self, name: &str, enabled: bool) {
        if let Some(field) = self.section_field_mut(name) {
            field.enabled = enabled;
        }
    }

    fn set_visible(&mut self, name: &str, visible: bool) {
        if let Some(field) = self.section_field_mut(name) {
            field.visible = visible;
        }
    }

    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn replace_sections(&mut self, count: usize) {
        self.sections = (1..=count).map(SectionFields::placeholder).collect();
    }
}

fn to_options(options: Vec<(String, String)>) -> Vec<FieldOption> {
    options
        .into_iter()
        .map(|(value, label)| FieldOption { value, label })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_defaults() {
        let s = SectionFields::placeholder(2);
        assert_eq!(s.index, 2);
        assert_eq!(s.section_type.value, None);
        assert!(s.section_type.enabled);
        assert!(!s.width.enabled);
        assert!(s.width.options.is_empty());
        assert_eq!(s.amperage.value.as_deref(), Some("1000"));
        assert_eq!(s.bus.value.as_deref(), Some("4"));
        for f in [&s.depth, &s.height, &s.amperage, &s.bus] {
            assert!(!f.visible);
            assert!(!f.enabled);
        }
    }

    #[test]
    fn test_registry_routes_names() {
        let mut form = OrderFormState::new();
        form.replace_sections(2);

        form.set_value("customer_name", Some("Acme".into()));
        form.set_value("common_depth", Some("30".into()));
        form.set_value("section_type_2", Some("Spectra".into()));
        form.set_enabled("height_1", true);

        assert_eq!(form.customer_name, "Acme");
        assert_eq!(form.common_value(CommonSettingKind::Depth), Some("30"));
        assert_eq!(form.value("common_depth").as_deref(), Some("30"));
        assert_eq!(form.value("section_type_2").as_deref(), Some("Spectra"));
        assert_eq!(form.value("section_type_1"), None);
        assert!(form.sections[0].height.enabled);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let mut form = OrderFormState::new();
        form.replace_sections(1);
        let before = form.clone();

        form.set_value("width_7", Some("44".into()));
        form.set_enabled("colour_1", true);
        form.set_visible("nonsense", true);

        assert_eq!(form, before);
        assert_eq!(form.value("width_7"), None);
    }

    #[test]
    fn test_submitted_fields_skip_disabled() {
        let mut form = OrderFormState::new();
        form.replace_sections(1);
        form.sales_order = "SO-1".into();
        form.set_value("common_height", Some("90".into()));
        form.set_value("section_type_1", Some("MLO".into()));
        form.set_value("width_1", Some("36".into()));

        let fields = form.submitted_fields();
        assert_eq!(fields.get("sales_order").map(String::as_str), Some("SO-1"));
        assert_eq!(fields.get("common_height").map(String::as_str), Some("90"));
        assert_eq!(fields.get("section_type_1").map(String::as_str), Some("MLO"));
        // width stays disabled for MLO
        assert!(!fields.contains_key("width_1"));
        assert!(!fields.contains_key("amperage_1"));
        assert!(!fields.contains_key("common_depth"));
    }
}

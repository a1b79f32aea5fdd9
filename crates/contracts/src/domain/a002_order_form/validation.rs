use super::registry::FieldRegistry;
use crate::enums::{CommonSettingKind, Depth};
use crate::shared::catalog::{section_field, CATALOG, PREFIX_SECTION_TYPE};
use thiserror::Error;

/// Only these heights have programmed rules
const PROGRAMMED_HEIGHT: &str = "90";

/// Why the form may not be submitted. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the {label}")]
    MissingField {
        field: &'static str,
        label: &'static str,
    },

    #[error("Only 90\" tall boards are programmed right now.")]
    UnsupportedHeight,

    #[error("Only 30\" or 36\" depth is programmed right now.")]
    UnsupportedDepth,

    #[error("Please select a section type for at least one section")]
    NoSectionType,
}

impl ValidationError {
    /// Field that should receive input focus
    pub fn focus_field(&self) -> Option<&'static str> {
        match self {
            ValidationError::MissingField { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Submit-time check, stopping at the first failure: required fields in
/// order, then the common height, the common depth, and finally at least
/// one chosen section type.
pub fn validate<R: FieldRegistry>(registry: &R) -> Result<(), ValidationError> {
    for required in &CATALOG.required_fields {
        let filled = registry
            .value(required.name)
            .is_some_and(|v| !v.trim().is_empty());
        if !filled {
            return Err(ValidationError::MissingField {
                field: required.name,
                label: required.label,
            });
        }
    }

    let height_group = CATALOG.common_setting(CommonSettingKind::Height).group_name;
    if registry.value(height_group).as_deref() != Some(PROGRAMMED_HEIGHT) {
        return Err(ValidationError::UnsupportedHeight);
    }

    let depth_group = CATALOG.common_setting(CommonSettingKind::Depth).group_name;
    let depth = registry.value(depth_group);
    if depth.as_deref().and_then(Depth::from_code).is_none() {
        return Err(ValidationError::UnsupportedDepth);
    }

    let has_type = (1..=registry.section_count()).any(|index| {
        registry
            .value(&section_field(PREFIX_SECTION_TYPE, index))
            .is_some_and(|v| !v.is_empty())
    });
    if !has_type {
        return Err(ValidationError::NoSectionType);
    }

    Ok(())
}

pub fn is_valid<R: FieldRegistry>(registry: &R) -> bool {
    match validate(registry) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Form validation failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_order_form::controller::{on_section_type_change, rebuild_sections};
    use crate::domain::a002_order_form::state::OrderFormState;

    fn minimal_form() -> OrderFormState {
        let mut form = OrderFormState::new();
        form.sales_order = "SO-1001".into();
        form.customer_name = "Acme Electric".into();
        form.job_address = "12 Main St".into();
        form.switchboard_name = "MSB-1".into();
        form.num_sections = "1".into();
        form.set_common_value(CommonSettingKind::Height, Some("90".into()));
        form.set_common_value(CommonSettingKind::Depth, Some("30".into()));
        rebuild_sections(&mut form, 1);
        on_section_type_change(&mut form, 1, "Spectra");
        form
    }

    #[test]
    fn test_minimal_form_passes() {
        assert_eq!(validate(&minimal_form()), Ok(()));
        assert!(is_valid(&minimal_form()));
    }

    #[test]
    fn test_depth_36_passes() {
        let mut form = minimal_form();
        form.set_common_value(CommonSettingKind::Depth, Some("36".into()));
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn test_blank_customer_name_fails_first() {
        let mut form = minimal_form();
        form.customer_name = "   ".into();
        // later checks would also fail; the required field wins
        form.set_common_value(CommonSettingKind::Height, Some("80".into()));

        let err = validate(&form).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in the customer name");
        assert_eq!(err.focus_field(), Some("customer_name"));
    }

    #[test]
    fn test_required_fields_checked_in_order() {
        let mut form = minimal_form();
        form.switchboard_name.clear();
        form.num_sections.clear();
        let err = validate(&form).unwrap_err();
        assert_eq!(err.focus_field(), Some("switchboard_name"));
        assert_eq!(err.to_string(), "Please fill in the switchboard name");
    }

    #[test]
    fn test_height_must_be_90() {
        let mut form = minimal_form();
        form.set_common_value(CommonSettingKind::Height, Some("80".into()));
        assert_eq!(validate(&form), Err(ValidationError::UnsupportedHeight));

        form.set_common_value(CommonSettingKind::Height, None);
        let err = validate(&form).unwrap_err();
        assert_eq!(err.to_string(), "Only 90\" tall boards are programmed right now.");
        assert_eq!(err.focus_field(), None);
    }

    #[test]
    fn test_depth_must_be_30_or_36() {
        let mut form = minimal_form();
        for depth in [Some("40"), Some("no"), None] {
            form.set_common_value(CommonSettingKind::Depth, depth.map(String::from));
            let err = validate(&form).unwrap_err();
            assert_eq!(err, ValidationError::UnsupportedDepth);
            assert_eq!(err.to_string(), "Only 30\" or 36\" depth is programmed right now.");
        }
    }

    #[test]
    fn test_needs_one_section_type() {
        let mut form = minimal_form();
        rebuild_sections(&mut form, 3);
        assert_eq!(validate(&form), Err(ValidationError::NoSectionType));

        on_section_type_change(&mut form, 3, "MLO");
        assert_eq!(validate(&form), Ok(()));
        assert!(!is_valid(&OrderFormState::new()));
    }
}

//! Order form: the in-memory field model, the consistency controller that
//! keeps dependent fields in step, and submit-time validation.

pub mod controller;
pub mod plan;
pub mod registry;
pub mod state;
pub mod validation;

pub use controller::{
    apply_all_common_settings, on_common_setting_change, on_num_sections_change,
    on_section_type_change, rebuild_sections,
};
pub use plan::{asset_plan, section_specs, AssetPlan, SectionPlan};
pub use registry::FieldRegistry;
pub use state::{FieldOption, FieldState, OrderFormState, SectionFields};
pub use validation::{is_valid, validate, ValidationError};

use crate::domain::a002_order_form::OrderFormState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Order form posted to the packet generator: every submitted named field as
/// a flat JSON object (`{"sales_order": "...", "section_type_1": "Spectra", ...}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePacketRequest {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl From<&OrderFormState> for GeneratePacketRequest {
    fn from(form: &OrderFormState) -> Self {
        Self {
            fields: form.submitted_fields(),
        }
    }
}

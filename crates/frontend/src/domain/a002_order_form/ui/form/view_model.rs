use super::model;
use contracts::domain::a002_order_form::{
    apply_all_common_settings, asset_plan, on_common_setting_change, on_num_sections_change,
    on_section_type_change, validate, AssetPlan, FieldRegistry, OrderFormState,
};
use contracts::enums::CommonSettingKind;
use contracts::shared::catalog::CATALOG;
use contracts::usecases::u101_generate_packet::{GeneratePacketRequest, SubmitOutcome};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// ViewModel for the order form
#[derive(Clone, Copy)]
pub struct OrderFormViewModel {
    pub form: RwSignal<OrderFormState>,
    pub error: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl OrderFormViewModel {
    pub fn new() -> Self {
        let mut state = OrderFormState::new();
        apply_all_common_settings(&mut state);
        Self {
            form: RwSignal::new(state),
            error: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    /// Current value of a named field, empty when unset
    pub fn value_of(&self, name: &str) -> String {
        self.form.with(|f| f.value(name)).unwrap_or_default()
    }

    pub fn set_field(&self, name: &str, value: String) {
        self.form.update(|f| f.set_value(name, Some(value)));
    }

    pub fn num_sections_changed(&self, value: String) {
        self.form.update(|f| {
            f.num_sections = value;
            let count = on_num_sections_change(f);
            log::debug!("Section cards rebuilt: {}", count);
        });
    }

    pub fn section_type_changed(&self, index: usize, value: String) {
        self.form
            .update(|f| on_section_type_change(f, index, &value));
    }

    pub fn common_setting_changed(&self, kind: CommonSettingKind, value: String) {
        let group = CATALOG.common_setting(kind).group_name;
        self.form.update(|f| {
            f.set_value(group, Some(value));
            on_common_setting_change(f, kind);
        });
    }

    pub fn plan(&self) -> AssetPlan {
        self.form.with(|f| asset_plan(f))
    }

    /// Validate, then post the form. Ignored while a submission is in flight.
    pub fn submit_command(&self) {
        if self.is_submitting.get_untracked() {
            return;
        }

        let current = self.form.get_untracked();
        if let Err(e) = validate(&current) {
            log::warn!("Form validation failed: {}", e);
            self.error.set(Some(e.to_string()));
            if let Some(field) = e.focus_field() {
                focus_element(field);
            }
            return;
        }

        self.error.set(None);
        self.is_submitting.set(true);

        let request = GeneratePacketRequest::from(&current);
        let error = self.error;
        let is_submitting = self.is_submitting;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match model::generate_packet(&request).await {
                Ok(response) => SubmitOutcome::from_response(response),
                Err(e) => SubmitOutcome::from_transport_error(&e),
            };

            match outcome {
                SubmitOutcome::Navigate(url) => {
                    log::info!("Packet generated: {}", url);
                    navigate_to(&url);
                }
                SubmitOutcome::Failed(message) => {
                    log::error!("{}", message);
                    error.set(Some(message));
                }
            }
            is_submitting.set(false);
        });
    }
}

impl Default for OrderFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn focus_element(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = element {
        let _ = el.focus();
    }
}

fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("Failed to navigate to {}: {:?}", url, e);
        }
    }
}

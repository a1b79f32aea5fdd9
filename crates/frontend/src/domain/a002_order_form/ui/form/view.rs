use super::asset_preview::AssetPreview;
use super::section_card::SectionCard;
use super::view_model::OrderFormViewModel;
use crate::shared::components::ui::{Button, Input, RadioGroup};
use contracts::shared::catalog::{
    CATALOG, FIELD_CUSTOMER_NAME, FIELD_JOB_ADDRESS, FIELD_NUM_SECTIONS, FIELD_SALES_ORDER,
    FIELD_SWITCHBOARD_NAME,
};
use leptos::prelude::*;

#[component]
pub fn OrderForm() -> impl IntoView {
    let vm = OrderFormViewModel::new();
    let section_count = Memo::new(move |_| vm.form.with(|f| f.sections.len()));

    let text_field = move |name: &'static str, label: &'static str| {
        view! {
            <Input
                label=label
                name=name
                value=Signal::derive(move || vm.value_of(name))
                on_input=Callback::new(move |v: String| vm.set_field(name, v))
                required=true
            />
        }
    };

    view! {
        <form
            id="packetForm"
            class="details-container order-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_command();
            }
        >
            <div class="details-header">
                <h2>"Switchboard Packet"</h2>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {text_field(FIELD_SALES_ORDER, "Sales Order")}
                {text_field(FIELD_CUSTOMER_NAME, "Customer Name")}
                {text_field(FIELD_JOB_ADDRESS, "Job Address")}
                {text_field(FIELD_SWITCHBOARD_NAME, "Switchboard Name")}
                <Input
                    label="Number of Sections"
                    name=FIELD_NUM_SECTIONS
                    input_type="number"
                    min="1"
                    value=Signal::derive(move || vm.value_of(FIELD_NUM_SECTIONS))
                    on_change=Callback::new(move |v: String| vm.num_sections_changed(v))
                    required=true
                />
            </div>

            <div class="details-form common-settings">
                {CATALOG
                    .common_settings
                    .iter()
                    .map(|descriptor| {
                        let kind = descriptor.kind;
                        let group = descriptor.group_name;
                        view! {
                            <RadioGroup
                                label=format!("Common {}", kind.display_name())
                                name=group
                                value=Signal::derive(move || vm.form.with(|f| f.common_value(kind).map(str::to_string)))
                                options=descriptor.choices.clone()
                                on_change=Callback::new(move |v: String| vm.common_setting_changed(kind, v))
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div id="section-cards" class="section-cards">
                {move || {
                    (1..=section_count.get())
                        .map(|index| view! { <SectionCard vm=vm index=index /> })
                        .collect_view()
                }}
            </div>

            <AssetPreview vm=vm />

            <div class="details-actions">
                <Button button_type="submit" disabled=Signal::derive(move || vm.is_submitting.get())>
                    "Generate Packet"
                </Button>
            </div>

            <Show when=move || vm.is_submitting.get()>
                <div id="loadingOverlay" class="loading-overlay">
                    <div class="loading-overlay__spinner"></div>
                </div>
            </Show>
        </form>
    }
}

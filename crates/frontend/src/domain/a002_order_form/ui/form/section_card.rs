use super::view_model::OrderFormViewModel;
use crate::shared::components::ui::{Input, Select};
use contracts::domain::a002_order_form::FieldState;
use contracts::shared::catalog::{
    section_field, PREFIX_AMPERAGE, PREFIX_BUS, PREFIX_DEPTH, PREFIX_HEIGHT, PREFIX_SECTION_TYPE,
    PREFIX_WIDTH,
};
use leptos::prelude::*;

/// Read one field of section `index`; placeholder state if the card is gone
fn field_state(vm: OrderFormViewModel, index: usize, prefix: &'static str) -> FieldState {
    vm.form.with(|f| {
        f.section(index)
            .and_then(|s| s.field(prefix))
            .cloned()
            .unwrap_or_else(|| FieldState {
                value: None,
                options: Vec::new(),
                enabled: false,
                visible: false,
            })
    })
}

fn options_of(state: &FieldState) -> Vec<(String, String)> {
    state
        .options
        .iter()
        .map(|o| (o.value.clone(), o.label.clone()))
        .collect()
}

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

#[component]
pub fn SectionCard(vm: OrderFormViewModel, index: usize) -> impl IntoView {
    let type_name = section_field(PREFIX_SECTION_TYPE, index);
    let width_name = section_field(PREFIX_WIDTH, index);
    let width_target = width_name.clone();

    let type_state = Memo::new(move |_| field_state(vm, index, PREFIX_SECTION_TYPE));
    let width_state = Memo::new(move |_| field_state(vm, index, PREFIX_WIDTH));

    view! {
        <div class="section-card" id=format!("section-{}", index)>
            <div class="section-card__header">
                <h3>{format!("Section {}", index)}</h3>
                <Select
                    name=type_name
                    value=Signal::derive(move || type_state.get().value.unwrap_or_default())
                    options=Signal::derive(move || options_of(&type_state.get()))
                    on_change=Callback::new(move |v: String| vm.section_type_changed(index, v))
                    required=true
                />
            </div>
            <div class="section-card__fields">
                <Select
                    label="Width (inches)"
                    name=width_name
                    value=Signal::derive(move || width_state.get().value.unwrap_or_default())
                    options=Signal::derive(move || {
                        let state = width_state.get();
                        if state.options.is_empty() {
                            vec![(String::new(), "Select section type first".to_string())]
                        } else {
                            options_of(&state)
                        }
                    })
                    on_change=Callback::new(move |v: String| vm.set_field(&width_target, v))
                    disabled=Signal::derive(move || !width_state.get().enabled)
                />
                <NumberField vm=vm index=index prefix=PREFIX_DEPTH label="Depth (inches)" />
                <NumberField vm=vm index=index prefix=PREFIX_HEIGHT label="Height (inches)" />
                <SelectField vm=vm index=index prefix=PREFIX_AMPERAGE label="Amperage" />
                <SelectField vm=vm index=index prefix=PREFIX_BUS label="Bus Size (inches)" />
            </div>
        </div>
    }
}

/// Per-section numeric override, shown only when its common setting says "no"
#[component]
fn NumberField(
    vm: OrderFormViewModel,
    index: usize,
    prefix: &'static str,
    label: &'static str,
) -> impl IntoView {
    let name = section_field(prefix, index);
    let target = name.clone();
    let state = Memo::new(move |_| field_state(vm, index, prefix));

    view! {
        <div style:display=move || display(state.get().visible)>
            <Input
                label=label
                name=name
                input_type="number"
                min="0"
                value=Signal::derive(move || state.get().value.unwrap_or_default())
                on_input=Callback::new(move |v: String| vm.set_field(&target, v))
                disabled=Signal::derive(move || !state.get().enabled)
            />
        </div>
    }
}

/// Per-section select override, shown only when its common setting says "no"
#[component]
fn SelectField(
    vm: OrderFormViewModel,
    index: usize,
    prefix: &'static str,
    label: &'static str,
) -> impl IntoView {
    let name = section_field(prefix, index);
    let target = name.clone();
    let state = Memo::new(move |_| field_state(vm, index, prefix));

    view! {
        <div style:display=move || display(state.get().visible)>
            <Select
                label=label
                name=name
                value=Signal::derive(move || state.get().value.unwrap_or_default())
                options=Signal::derive(move || options_of(&state.get()))
                on_change=Callback::new(move |v: String| vm.set_field(&target, v))
                disabled=Signal::derive(move || !state.get().enabled)
            />
        </div>
    }
}

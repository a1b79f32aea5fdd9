use crate::domain::a002_order_form::ui::form::OrderForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <OrderForm />
        </main>
    }
}

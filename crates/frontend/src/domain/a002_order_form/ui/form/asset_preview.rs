use super::view_model::OrderFormViewModel;
use leptos::prelude::*;

/// Parts each configured section needs, plus the merged bill
#[component]
pub fn AssetPreview(vm: OrderFormViewModel) -> impl IntoView {
    let plan = Memo::new(move |_| vm.plan());

    view! {
        <div class="asset-preview">
            <h3>"Required parts"</h3>
            {move || {
                let plan = plan.get();
                if plan.totals.is_empty() {
                    return view! {
                        <p class="asset-preview__empty">"No programmed parts for the current selection."</p>
                    }
                    .into_any();
                }
                view! {
                    <div>
                        {plan
                            .sections
                            .into_iter()
                            .filter(|s| !s.assets.is_empty())
                            .map(|s| view! {
                                <div class="asset-preview__section">
                                    <h4>{format!("Section {}", s.spec.index)}</h4>
                                    <ul>
                                        {s.assets
                                            .into_iter()
                                            .map(|a| view! { <li>{format!("{} x{}", a.asset_id, a.quantity)}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })
                            .collect_view()}
                        <table class="asset-preview__totals">
                            <thead>
                                <tr><th>"Part"</th><th>"Qty"</th></tr>
                            </thead>
                            <tbody>
                                {plan
                                    .totals
                                    .into_iter()
                                    .map(|a| view! {
                                        <tr><td>{a.asset_id}</td><td>{a.quantity}</td></tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

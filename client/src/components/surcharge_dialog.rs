//! Create/edit dialog for a single surcharge.

use leptos::prelude::*;

use crate::net::types::{SurchargeInput, SurchargeType};
use crate::state::surcharges::DialogMode;

/// Modal form seeded from `mode`. Validation errors stay in the dialog;
/// valid input is handed to `on_submit`.
#[component]
pub fn SurchargeDialog(
    mode: DialogMode,
    #[prop(into)] saving: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<SurchargeInput>,
) -> impl IntoView {
    let title = mode.title();
    let submit_label = mode.submit_label();
    let form = RwSignal::new(mode.initial_form());
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        match form.with_untracked(|f| f.to_input()) {
            Ok(input) => {
                error.set(None);
                on_submit.run(input);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog dialog--surcharge"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <h2>{title}</h2>

                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.name = value);
                        }
                    />
                </label>

                <label class="dialog__label">
                    "Type"
                    <select
                        class="dialog__input"
                        prop:value=move || form.with(|f| f.surcharge_type.as_str())
                        on:change=move |ev| {
                            if let Some(kind) = SurchargeType::parse(&event_target_value(&ev)) {
                                form.update(|f| f.surcharge_type = kind);
                            }
                        }
                    >
                        <option value=SurchargeType::Amount.as_str()>"Amount"</option>
                        <option value=SurchargeType::Percentage.as_str()>"Percentage"</option>
                    </select>
                </label>

                <label class="dialog__label">
                    "Amount"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || form.with(|f| f.amount.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.amount = value);
                        }
                    />
                </label>

                <label class="dialog__label">
                    "Carriers"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="fedex, ups"
                        prop:value=move || form.with(|f| f.carriers.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.carriers = value);
                        }
                    />
                </label>

                <label class="dialog__label">
                    "Services"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="fedex_ground, ups_standard"
                        prop:value=move || form.with(|f| f.services.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.services = value);
                        }
                    />
                </label>

                <label class="dialog__label dialog__label--inline">
                    <input
                        type="checkbox"
                        class="switch"
                        prop:checked=move || form.with(|f| f.active)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.active = checked);
                        }
                    />
                    "Active"
                </label>

                <Show when=move || error.get().is_some()>
                    <p class="dialog__danger">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="dialog__actions">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class=move || if saving.get() { "btn btn--primary btn--loading" } else { "btn btn--primary" }
                        disabled=move || saving.get()
                    >
                        {submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}

//! Surcharge management page: table, create/edit dialog, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Create and update call the API directly and report through toasts.
//! Delete is routed through the app's `ConfirmController`, which owns the
//! success/failure notifications for that flow.

use leptos::prelude::*;

use crate::components::confirm_modal::ConfirmController;
use crate::components::dashboard_layout::DashboardLayout;
use crate::components::surcharge_dialog::SurchargeDialog;
use crate::net::api;
use crate::net::types::{Surcharge, SurchargeInput};
use crate::state::confirm::{ActionError, PendingOperation};
use crate::state::notifications::{NotificationKind, NotificationsState};
use crate::state::surcharges::{DELETE_LABEL, SurchargeMutation, SurchargesState, format_amount};

/// Surcharges page: lists surcharges with add/edit/delete actions.
#[component]
pub fn SurchargesPage(
    surcharges: RwSignal<SurchargesState>,
    notifications: RwSignal<NotificationsState>,
    confirm: ConfirmController,
) -> impl IntoView {
    load_surcharges(surcharges);

    let dialog_mode = Memo::new(move |_| surcharges.with(|s| s.dialog.clone()));
    let saving = Signal::derive(move || surcharges.with(|s| s.saving));

    let on_add = move |_| surcharges.update(SurchargesState::open_create);
    let on_cancel = Callback::new(move |()| surcharges.update(SurchargesState::close_dialog));
    let on_submit = Callback::new(move |input: SurchargeInput| {
        let Some(mutation) = surcharges.with_untracked(|s| s.dialog.mutation()) else {
            return;
        };
        surcharges.update(|s| s.saving = true);
        leptos::task::spawn_local(save_surcharge(mutation, input, surcharges, notifications));
    });

    view! {
        <DashboardLayout title="Surcharges">
            <div class="page-header">
                <h1 class="page-header__title">"Surcharges"</h1>
                <button class="btn btn--primary" on:click=on_add>
                    "+ Add Surcharge"
                </button>
            </div>

            <section class="card">
                <h2 class="card__title">"Manage Surcharges"</h2>
                <Show when=move || surcharges.with(|s| s.error.is_some())>
                    <p class="card__error">{move || surcharges.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show
                    when=move || surcharges.with(|s| s.loaded || !s.loading)
                    fallback=move || view! { <p>"Loading surcharges..."</p> }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"NAME"</th>
                                <th>"TYPE"</th>
                                <th>"AMOUNT"</th>
                                <th>"STATUS"</th>
                                <th class="table__actions-col"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || surcharges.with(|s| s.items.clone())
                                key=|item| item.id.clone()
                                children=move |item: Surcharge| view! { <SurchargeRow item surcharges confirm/> }
                            />
                        </tbody>
                    </table>
                    <Show when=move || surcharges.with(|s| s.loaded && s.items.is_empty())>
                        <p class="card__empty">"No surcharges yet."</p>
                    </Show>
                </Show>
            </section>

            {move || {
                let mode = dialog_mode.get();
                mode.is_open().then(|| view! { <SurchargeDialog mode saving on_cancel on_submit/> })
            }}
        </DashboardLayout>
    }
}

/// One table row with its action menu.
#[component]
fn SurchargeRow(item: Surcharge, surcharges: RwSignal<SurchargesState>, confirm: ConfirmController) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let amount = format_amount(&item);

    let edit_item = item.clone();
    let on_edit = Callback::new(move |()| {
        menu_open.set(false);
        surcharges.update(|s| s.open_edit(edit_item.clone()));
    });

    let delete_id = item.id.clone();
    let on_delete = Callback::new(move |()| {
        menu_open.set(false);
        confirm.request_confirmation(delete_operation(delete_id.clone(), surcharges));
    });

    view! {
        <tr>
            <td>{item.name}</td>
            <td>
                <span class="badge badge--outline">{item.surcharge_type.as_str()}</span>
            </td>
            <td>{amount}</td>
            <td>
                <input type="checkbox" class="switch" prop:checked=item.active disabled=true/>
            </td>
            <td class="table__actions">
                <button
                    class="btn btn--ghost"
                    title="Actions"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "⋮"
                </button>
                <Show when=move || menu_open.get()>
                    <div class="menu">
                        <button class="menu__item" on:click=move |_| on_edit.run(())>
                            "Edit"
                        </button>
                        <button class="menu__item menu__item--danger" on:click=move |_| on_delete.run(())>
                            "Delete"
                        </button>
                    </div>
                </Show>
            </td>
        </tr>
    }
}

/// Confirmation for deleting the surcharge `id`; reloads the list on success.
fn delete_operation(id: String, surcharges: RwSignal<SurchargesState>) -> PendingOperation {
    PendingOperation::new(id.clone(), DELETE_LABEL, move || delete_and_reload(id.clone(), surcharges))
}

async fn delete_and_reload(id: String, surcharges: RwSignal<SurchargesState>) -> Result<(), ActionError> {
    api::delete_surcharge(&id).await?;
    load_surcharges(surcharges);
    Ok(())
}

async fn save_surcharge(
    mutation: SurchargeMutation,
    input: SurchargeInput,
    surcharges: RwSignal<SurchargesState>,
    notifications: RwSignal<NotificationsState>,
) {
    let result = match &mutation {
        SurchargeMutation::Create => api::create_surcharge(&input).await,
        SurchargeMutation::Update { id } => api::update_surcharge(id, &input).await,
    };
    match result {
        Ok(_) => {
            notifications.try_update(|n| n.success(mutation.success_title()));
            surcharges.try_update(SurchargesState::close_dialog);
            load_surcharges(surcharges);
        }
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::warn!("{}: {err}", mutation.failure_title());
            notifications.try_update(|n| n.push(NotificationKind::Error, mutation.failure_title(), Some(err.to_string())));
            surcharges.try_update(|s| s.saving = false);
        }
    }
}

/// Fetch the list into `surcharges`. Only fetches in the browser; during
/// SSR the page renders its loading state and hydration picks it up.
pub(crate) fn load_surcharges(surcharges: RwSignal<SurchargesState>) {
    surcharges.try_update(SurchargesState::begin_loading);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = api::list_surcharges().await;
            surcharges.try_update(|s| match result {
                Ok(items) => s.set_items(items),
                Err(err) => s.set_error(err.to_string()),
            });
        });
    }
}

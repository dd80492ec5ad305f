//! Admin landing page with surcharge counts.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::pages::surcharges::load_surcharges;
use crate::state::surcharges::{SurchargeSummary, SurchargesState};

/// Overview page: summary cards linking into the surcharge screen.
#[component]
pub fn OverviewPage(surcharges: RwSignal<SurchargesState>) -> impl IntoView {
    load_surcharges(surcharges);

    let summary = Memo::new(move |_| surcharges.with(|s| SurchargeSummary::from_items(&s.items)));

    view! {
        <DashboardLayout title="Overview">
            <div class="page-header">
                <h1 class="page-header__title">"Overview"</h1>
            </div>

            <Show when=move || surcharges.with(|s| s.error.is_some())>
                <p class="card__error">{move || surcharges.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <div class="stat-grid">
                <StatCard label="Surcharges" value=Signal::derive(move || summary.get().total)/>
                <StatCard label="Active" value=Signal::derive(move || summary.get().active)/>
                <StatCard label="Percentage" value=Signal::derive(move || summary.get().percentage)/>
                <StatCard label="Flat amount" value=Signal::derive(move || summary.get().flat)/>
            </div>

            <section class="card">
                <h2 class="card__title">"Surcharges"</h2>
                <p>"Fees applied on top of carrier rates."</p>
                <a class="btn btn--primary" href="/admin/surcharges">
                    "Manage Surcharges"
                </a>
            </section>
        </DashboardLayout>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{move || value.get()}</span>
        </div>
    }
}

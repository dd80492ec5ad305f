//! Dashboard shell: sidebar navigation, navbar, and page content.

#[cfg(test)]
#[path = "dashboard_layout_test.rs"]
mod dashboard_layout_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::theme::{self, Theme};

/// Root of the admin section; only active on an exact match.
pub const ADMIN_ROOT: &str = "/admin";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Overview", href: ADMIN_ROOT },
    NavItem { label: "Surcharges", href: "/admin/surcharges" },
];

/// Whether the nav entry for `href` should be highlighted at `path`.
pub fn is_nav_active(path: &str, href: &str) -> bool {
    let path = path.trim_end_matches('/');
    let path = if path.is_empty() { ADMIN_ROOT } else { path };
    if href == ADMIN_ROOT {
        return path == ADMIN_ROOT;
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

/// Two-column dashboard grid wrapping a page.
#[component]
pub fn DashboardLayout(title: &'static str, children: Children) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    // Server renders light; the stored preference is applied after hydration.
    let current_theme = RwSignal::new(Theme::Light);
    Effect::new(move |_| {
        let preferred = theme::read_preference();
        theme::apply(preferred);
        current_theme.set(preferred);
    });

    view! {
        <div class="dashboard-layout">
            <aside class="sidebar">
                <div class="sidebar__brand">"Admin"</div>
                <nav class="sidebar__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let href = item.href;
                            view! {
                                <a
                                    href=href
                                    class=move || {
                                        if is_nav_active(&pathname.get(), href) {
                                            "sidebar__link sidebar__link--active"
                                        } else {
                                            "sidebar__link"
                                        }
                                    }
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>

            <div class="dashboard-layout__main">
                <header class="navbar">
                    <span class="navbar__title">{title}</span>
                    <span class="navbar__spacer"></span>
                    <button
                        class="btn btn--ghost navbar__theme-toggle"
                        title="Toggle dark mode"
                        on:click=move |_| current_theme.update(|t| *t = theme::toggle(*t))
                    >
                        {move || current_theme.get().toggle_icon()}
                    </button>
                    <span class="navbar__badge">"Staff"</span>
                </header>
                <main class="dashboard-layout__content">{children()}</main>
            </div>
        </div>
    }
}

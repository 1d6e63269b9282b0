//! Tab Navigation Component
//!
//! Switches between the three main views.

use leptos::prelude::*;

/// Top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Tasks,
    Board,
    Focus,
}

impl AppView {
    pub fn label(&self) -> &'static str {
        match self {
            AppView::Tasks => "Tasks",
            AppView::Board => "Board",
            AppView::Focus => "Focus",
        }
    }
}

const VIEWS: &[AppView] = &[AppView::Tasks, AppView::Board, AppView::Focus];

/// Tab bar for switching views
#[component]
pub fn TabNav(
    active_view: ReadSignal<AppView>,
    set_active_view: WriteSignal<AppView>,
) -> impl IntoView {
    view! {
        <nav class="tab-nav">
            {VIEWS.iter().map(|tab| {
                let tab = *tab;
                view! {
                    <button
                        class=move || if active_view.get() == tab { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| set_active_view.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}

//! Energy Selector Component
//!
//! Buttons for the current energy level, driving task recommendations in
//! the focus view.

use leptos::prelude::*;

use crate::models::ENERGY_LEVELS;
use crate::store::{use_app_store, AppStateStoreFields};

/// Energy level picker
#[component]
pub fn EnergySelector() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="energy-selector">
            <span class="energy-label">"How is your energy?"</span>
            {ENERGY_LEVELS.iter().map(|(value, label)| {
                let val = value.to_string();
                let val_clone = val.clone();
                let is_selected = move || store.selected_energy().get() == val;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() {
                            format!("energy-btn {} active", val_clone)
                        } else {
                            format!("energy-btn {}", val_clone)
                        }
                        on:click={
                            let val = value.to_string();
                            move |_| store.selected_energy().set(val.clone())
                        }
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

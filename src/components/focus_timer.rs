//! Focus Timer Component
//!
//! Countdown for a focus sprint. Picks the first open task matching the
//! selected energy level; finishing the countdown marks that task done.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, UpdateTaskArgs};
use crate::components::EnergySelector;
use crate::models::Task;
use crate::store::{store_update_task, use_app_store, AppStateStoreFields};

const DEFAULT_SPRINT_MINUTES: i32 = 25;

fn format_clock(total_secs: i32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

/// A countdown loop may keep ticking only while the sprint is running and
/// no newer start or pause has superseded the loop. Without the epoch
/// check, pausing and resuming within one tick leaves two live loops and
/// the clock runs at double speed.
fn tick_allowed(loop_epoch: u32, current_epoch: u32, running: bool) -> bool {
    running && loop_epoch == current_epoch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(25 * 60), "25:00");
    }

    // Pause then resume within the same one-second tick: the first loop
    // wakes while running is true again, but its epoch is stale and it
    // must stop; only the loop started by resume keeps ticking.
    #[test]
    fn test_stale_loop_stops_after_pause_resume() {
        let first_loop = 0u32;
        let mut epoch = first_loop;
        let mut running = true;

        // pause
        running = false;
        epoch += 1;
        // resume before the first loop's tick fires
        epoch += 1;
        running = true;
        let second_loop = epoch;

        assert!(!tick_allowed(first_loop, epoch, running));
        assert!(tick_allowed(second_loop, epoch, running));
    }

    #[test]
    fn test_paused_loop_stops() {
        assert!(!tick_allowed(3, 3, false));
        assert!(tick_allowed(3, 3, true));
    }
}

/// Focus sprint timer with task recommendation
#[component]
pub fn FocusTimer() -> impl IntoView {
    let store = use_app_store();

    let (remaining, set_remaining) = signal(DEFAULT_SPRINT_MINUTES * 60);
    let (running, set_running) = signal(false);
    let (active_task, set_active_task) = signal(None::<Task>);
    // Bumped on every start and pause to invalidate older tick loops
    let (timer_epoch, set_timer_epoch) = signal(0u32);

    // First open task matching the selected energy
    let recommended = move || {
        let energy = store.selected_energy().get();
        store
            .tasks()
            .get()
            .into_iter()
            .find(|t| !t.completed && t.energy_level == energy)
    };

    // One tick loop per press of start/resume; pause and newer starts
    // retire older loops through the epoch counter
    let run_countdown = move || {
        let epoch = timer_epoch.get_untracked();
        spawn_local(async move {
            loop {
                TimeoutFuture::new(1_000).await;
                if !tick_allowed(epoch, timer_epoch.get_untracked(), running.get_untracked()) {
                    break;
                }
                let left = remaining.get_untracked();
                if left > 1 {
                    set_remaining.set(left - 1);
                    continue;
                }
                set_remaining.set(0);
                set_running.set(false);
                if let Some(task) = active_task.get_untracked() {
                    let args = UpdateTaskArgs {
                        id: task.id,
                        completed: Some(true),
                        ..Default::default()
                    };
                    match commands::update_task(&args).await {
                        Ok(updated) => store_update_task(&store, updated),
                        Err(err) => {
                            web_sys::console::log_1(
                                &format!("[FOCUS] Complete failed: {}", err).into(),
                            );
                        }
                    }
                }
                set_active_task.set(None);
                break;
            }
        });
    };

    let start_sprint = move |_| {
        let task = recommended();
        let minutes = task
            .as_ref()
            .map(|t| t.estimated_minutes)
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_SPRINT_MINUTES);
        set_active_task.set(task);
        set_remaining.set(minutes * 60);
        set_timer_epoch.update(|e| *e += 1);
        set_running.set(true);
        run_countdown();
    };

    let pause = move |_| {
        set_running.set(false);
        set_timer_epoch.update(|e| *e += 1);
    };

    let resume = move |_| {
        if remaining.get_untracked() > 0 {
            set_timer_epoch.update(|e| *e += 1);
            set_running.set(true);
            run_countdown();
        }
    };

    let reset = move |_| {
        set_running.set(false);
        let minutes = active_task
            .get_untracked()
            .map(|t| t.estimated_minutes)
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_SPRINT_MINUTES);
        set_remaining.set(minutes * 60);
    };

    view! {
        <div class="focus-timer">
            <EnergySelector />

            <div class="timer-display">
                <span class="timer-clock">{move || format_clock(remaining.get())}</span>
            </div>

            {move || match active_task.get() {
                Some(task) => view! {
                    <p class="active-task">"Sprinting on: " <strong>{task.title}</strong></p>
                }.into_any(),
                None => match recommended() {
                    Some(task) => view! {
                        <p class="recommended-task">
                            "Up next: " <strong>{task.title}</strong>
                            {format!(" ({} min)", task.estimated_minutes)}
                        </p>
                    }.into_any(),
                    None => view! {
                        <p class="recommended-task empty">
                            "No open tasks for this energy level"
                        </p>
                    }.into_any(),
                },
            }}

            <div class="timer-controls">
                {move || if running.get() {
                    view! {
                        <button on:click=pause>"Pause"</button>
                    }.into_any()
                } else if active_task.get().is_some() && remaining.get() > 0 {
                    view! {
                        <span>
                            <button on:click=resume>"Resume"</button>
                            <button on:click=reset>"Reset"</button>
                        </span>
                    }.into_any()
                } else {
                    view! {
                        <button class="start-btn" on:click=start_sprint>"Start sprint"</button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}

//! Transient outcome notification.
//!
//! Visible for [`TOAST_VISIBLE_MS`], then fades for [`TOAST_FADE_MS`]
//! before it is unmounted. Each [`show_toast`] call supersedes the
//! timers of the previous one.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::{ToastNotification, ToastPhase, ToastState, TOAST_FADE_MS, TOAST_VISIBLE_MS};

/// Delay before each phase, counted from the previous one.
pub const TOAST_SCHEDULE: [(u32, ToastPhase); 2] = [
    (TOAST_VISIBLE_MS, ToastPhase::Fading),
    (TOAST_FADE_MS, ToastPhase::Hidden),
];

/// Walk [`TOAST_SCHEDULE`] for one toast generation.
pub async fn run_toast_schedule<S, D, A>(generation: u64, mut sleep: S, mut advance: A)
where
    S: FnMut(u32) -> D,
    D: Future<Output = ()>,
    A: FnMut(u64, ToastPhase),
{
    for (delay_ms, phase) in TOAST_SCHEDULE {
        sleep(delay_ms).await;
        advance(generation, phase);
    }
}

/// Show `notification` and schedule its fade and removal.
pub fn show_toast(toast: RwSignal<ToastState>, notification: ToastNotification) {
    let Some(generation) = toast.try_update(|t| t.show(notification)) else {
        // Signal disposed: the widget is gone.
        return;
    };

    spawn_local(run_toast_schedule(generation, TimeoutFuture::new, move |generation, phase| {
        toast.update(|t| {
            t.advance(generation, phase);
        });
    }));
}

#[component]
pub fn Toast(toast: RwSignal<ToastState>) -> impl IntoView {
    let class_name = move || {
        toast.with(|t| {
            let kind = t.kind.map(|k| k.css_class()).unwrap_or_default();
            if t.is_visible() {
                format!("toast {} show", kind)
            } else {
                format!("toast {}", kind)
            }
        })
    };

    view! {
        <Show
            when=move || !toast.with(ToastState::is_hidden)
            fallback=|| view! { }
        >
            <div class=class_name role="status" aria-live="polite">
                {move || toast.with(|t| t.text.clone())}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use futures::executor::block_on;

    /// Runs a schedule against a virtual clock, noting (elapsed ms, visible, hidden)
    /// after every step.
    fn play(state: &RefCell<ToastState>, generation: u64) -> Vec<(u32, bool, bool)> {
        let clock = Cell::new(0u32);
        let mut seen = Vec::new();

        block_on(run_toast_schedule(
            generation,
            |ms| {
                clock.set(clock.get() + ms);
                async {}
            },
            |generation, phase| {
                let mut toast = state.borrow_mut();
                toast.advance(generation, phase);
                seen.push((clock.get(), toast.is_visible(), toast.is_hidden()));
            },
        ));

        seen
    }

    #[test]
    fn test_toast_hidden_after_three_seconds() {
        let state = RefCell::new(ToastState::default());
        let generation = state.borrow_mut().show(ToastNotification::success("stored ok"));
        assert!(state.borrow().is_visible());

        let seen = play(&state, generation);

        assert_eq!(seen, vec![(2500, false, false), (3000, false, true)]);
    }

    #[test]
    fn test_stale_schedule_leaves_newer_toast_alone() {
        let state = RefCell::new(ToastState::default());
        let first = state.borrow_mut().show(ToastNotification::error("Upload failed: bad format"));
        state.borrow_mut().show(ToastNotification::success("stored ok"));

        let seen = play(&state, first);

        assert_eq!(seen, vec![(2500, true, false), (3000, true, false)]);
        assert_eq!(state.borrow().text, "stored ok");
    }

    #[test]
    fn test_repeated_schedule_is_idempotent() {
        let state = RefCell::new(ToastState::default());
        let generation = state.borrow_mut().show(ToastNotification::success("stored ok"));

        play(&state, generation);
        let seen = play(&state, generation);

        assert_eq!(seen, vec![(2500, false, true), (3000, false, true)]);
    }
}

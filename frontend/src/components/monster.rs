//! The monster itself: two graphics, one per mood.

use leptos::*;
use crate::VisualState;

#[component]
pub fn Monster(state: ReadSignal<VisualState>) -> impl IntoView {
    view! {
        <div class=move || format!("monster {}", state.get().css_class())>
            <div
                class="monster-graphic monster-open"
                class:hidden=move || !state.get().shows_hungry_graphic()
                class:chewing=move || state.get() == VisualState::Eating
                aria-hidden="true"
            >
                "👾"
            </div>
            <div
                class="monster-graphic monster-happy"
                class:hidden=move || !state.get().shows_yummy_graphic()
                aria-hidden="true"
            >
                "😋"
            </div>
        </div>
    }
}

//! The upload widget: file picker, monster, status line and toast.
//!
//! Picking a file starts the upload right away. The monster keeps
//! chewing until the request has settled *and* the chew delay has
//! passed; then it is yummy until "feed again" is clicked.

use leptos::ev::SubmitEvent;
use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::picker::{reset_picker, take_selection};
use crate::services::{chew_for_delay, upload_file};
use crate::{Monster, Toast, ToastNotification, ToastState, VisualState, UPLOAD_URL};
use super::toast::show_toast;

#[component]
pub fn UploadWidget(
    /// Endpoint receiving the multipart POST.
    #[prop(default = UPLOAD_URL)]
    upload_url: &'static str,
) -> impl IntoView {
    let (state, set_state) = create_signal(VisualState::Hungry);
    let toast = create_rw_signal(ToastState::default());
    let file_input = create_node_ref::<html::Input>();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        let Some((eating, file)) = take_selection(state.get_untracked(), &input) else {
            log::debug!("Nothing to eat, monster stays {:?}", state.get_untracked());
            return;
        };

        set_state.set(eating);
        log::info!("🍽️ Feeding {} ({} bytes)", file.name(), file.size());

        spawn_local(async move {
            let outcome = chew_for_delay(upload_file(file, upload_url)).await;

            if let Err(e) = &outcome {
                log::error!("❌ Upload did not complete: {}", e);
            }

            // Signals are gone if the widget was unmounted meanwhile.
            if let Some(yummy) = state.try_get_untracked().and_then(VisualState::digest) {
                set_state.set(yummy);
            }
            show_toast(toast, ToastNotification::for_outcome(&outcome));
        });
    };

    let on_feed_again = move |_| {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        if let Some(hungry) = reset_picker(state.get_untracked(), &*input) {
            set_state.set(hungry);
            log::debug!("Monster is hungry again");
        }
    };

    let on_submit = move |ev: SubmitEvent| ev.prevent_default();

    view! {
        <form class="upload-form" on:submit=on_submit>
            <Monster state=state/>

            <p class="status-text">{move || state.get().status_text()}</p>

            <div
                class="upload-area"
                id="uploadZone"
                class:hidden=move || !state.get().accepts_files()
            >
                <input
                    type="file"
                    id="fileInput"
                    style="display:none"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <label for="fileInput" class="upload-button">
                    "Choose a file"
                </label>
            </div>

            <Show
                when=move || state.get() == VisualState::Yummy
                fallback=|| view! { }
            >
                <button type="button" class="reupload-button" on:click=on_feed_again>
                    "Feed again"
                </button>
            </Show>
        </form>

        <Toast toast=toast/>
    }
}

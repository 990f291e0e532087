//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Feed the " <span class="highlight">"Monster"</span></h1>
            <p class="subtitle">
                "Pick a file and watch it get eaten. It lands safely on the upload server."
            </p>
        </div>
    }
}

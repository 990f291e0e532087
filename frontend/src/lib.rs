//! Monster Upload - Frontend Rust/Leptos Application
//!
//! A WebAssembly page where a monster eats the files you feed it:
//! each picked file is uploaded to the backend while the monster chews.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadWidget                                           │
//! │      ├── Monster (hungry → eating → yummy)                  │
//! │      └── Toast (upload outcome)                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Monster state, upload result, toast state, errors
//! - [`picker`] - File selection and reset decisions
//! - [`components`] - UI components
//! - [`services`] - Upload request and chew-delay gating

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod picker;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Monster
    VisualState,
    // API
    UploadBody, UploadResult,
    // Toast
    ToastKind, ToastNotification, ToastPhase, ToastState,
    // Errors
    AppError, AppResult,
};

// Picker
pub use picker::{reset_picker, take_selection, FilePicker};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("👾 Monster Upload - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadWidget/>
        </div>

        <Footer/>
    }
}

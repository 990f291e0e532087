//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Monster Types** - the hungry/eating/yummy state machine
//! - **API Types** - upload endpoint response
//! - **Toast Types** - transient notifications and their fade phases
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{NETWORK_ERROR_MESSAGE, UNKNOWN_ERROR, UPLOAD_COMPLETE};

// =============================================================================
// Monster Types
// =============================================================================

/// What the monster is doing right now.
///
/// Stands in for idle / busy / done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualState {
    /// Waiting for a file.
    #[default]
    Hungry,
    /// Upload in flight, or the chew delay has not elapsed yet.
    Eating,
    /// Upload settled, waiting for "feed again".
    Yummy,
}

impl VisualState {
    /// HUNGRY → EATING, when a file has been picked.
    pub fn feed(self) -> Option<Self> {
        match self {
            VisualState::Hungry => Some(VisualState::Eating),
            _ => None,
        }
    }

    /// EATING → YUMMY, once the upload settled and the chew delay elapsed.
    pub fn digest(self) -> Option<Self> {
        match self {
            VisualState::Eating => Some(VisualState::Yummy),
            _ => None,
        }
    }

    /// YUMMY → HUNGRY, on "feed again".
    pub fn feed_again(self) -> Option<Self> {
        match self {
            VisualState::Yummy => Some(VisualState::Hungry),
            _ => None,
        }
    }

    /// Status line under the monster.
    pub fn status_text(&self) -> &'static str {
        match self {
            VisualState::Hungry => "I'm hungry! Feed me a file...",
            VisualState::Eating => "Nom nom nom...",
            VisualState::Yummy => "Yummy! That was delicious.",
        }
    }

    /// CSS class for the monster container.
    pub fn css_class(&self) -> &'static str {
        match self {
            VisualState::Hungry => "monster-hungry",
            VisualState::Eating => "monster-eating",
            VisualState::Yummy => "monster-yummy",
        }
    }

    /// The open-mouthed graphic is used while hungry and while chewing.
    pub fn shows_hungry_graphic(&self) -> bool {
        !self.shows_yummy_graphic()
    }

    pub fn shows_yummy_graphic(&self) -> bool {
        *self == VisualState::Yummy
    }

    /// Upload control is only offered to a hungry monster.
    pub fn accepts_files(&self) -> bool {
        *self == VisualState::Hungry
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Body returned by the upload endpoint.
///
/// The server sends `message` on success and `error` on failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of one upload that reached the server.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadResult {
    /// HTTP status was 2xx.
    pub ok: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl UploadResult {
    /// Interpret a response. An empty or non-JSON body carries neither field.
    pub fn from_response(ok: bool, body: &str) -> Self {
        let body: UploadBody = serde_json::from_str(body).unwrap_or_default();
        Self {
            ok,
            message: body.message,
            error: body.error,
        }
    }

    /// A 2xx with an error-shaped body still counts as a server error.
    pub fn is_success(&self) -> bool {
        self.ok && self.error.is_none()
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// Toast styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

/// A notification ready to be shown.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastNotification {
    pub text: String,
    pub kind: ToastKind,
}

impl ToastNotification {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: ToastKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: ToastKind::Error }
    }

    /// Toast for a settled upload, whichever way it went.
    pub fn for_outcome(outcome: &AppResult<UploadResult>) -> Self {
        match outcome {
            Ok(result) if result.is_success() => {
                Self::success(result.message.as_deref().unwrap_or(UPLOAD_COMPLETE))
            }
            Ok(result) => Self::error(format!(
                "Upload failed: {}",
                result.error.as_deref().unwrap_or(UNKNOWN_ERROR)
            )),
            Err(_) => Self::error(NETWORK_ERROR_MESSAGE),
        }
    }
}

/// Where a toast is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    /// Not rendered for assistive technology.
    #[default]
    Hidden,
    /// Fully shown.
    Visible,
    /// Opacity transition running, still in the accessibility tree.
    Fading,
}

/// Toast state with cancel-on-reentry.
///
/// Every `show` bumps the generation; timers scheduled for an older
/// generation are ignored when they fire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub text: String,
    pub kind: Option<ToastKind>,
    pub phase: ToastPhase,
    generation: u64,
}

impl ToastState {
    /// Show a notification, returning the generation its timers must carry.
    pub fn show(&mut self, toast: ToastNotification) -> u64 {
        self.generation += 1;
        self.text = toast.text;
        self.kind = Some(toast.kind);
        self.phase = ToastPhase::Visible;
        self.generation
    }

    /// Start fading. Returns false for a stale generation.
    pub fn fade(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != ToastPhase::Visible {
            return false;
        }
        self.phase = ToastPhase::Fading;
        true
    }

    /// Remove from the accessibility tree. Returns false for a stale generation.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase == ToastPhase::Hidden {
            return false;
        }
        self.phase = ToastPhase::Hidden;
        true
    }

    /// Move to `phase` if `generation` is still current.
    pub fn advance(&mut self, generation: u64, phase: ToastPhase) -> bool {
        match phase {
            ToastPhase::Fading => self.fade(generation),
            ToastPhase::Hidden => self.dismiss(generation),
            ToastPhase::Visible => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.phase == ToastPhase::Visible
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == ToastPhase::Hidden
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Everything here is a transport failure from the user's point of view;
/// server-reported errors travel inside [`UploadResult`].
#[derive(Clone, Debug)]
pub enum AppError {
    /// The request body could not be assembled.
    Request(String),
    /// Network/HTTP error: refused connection, DNS, CORS.
    Network(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(msg) => write!(f, "Request error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

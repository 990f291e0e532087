//! UI Components for the Monster Upload page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadWidget`] - File picker, monster state machine and upload
//! - [`Monster`] - Hungry / eating / yummy graphics
//! - [`Toast`] - Auto-dismissing outcome notification

mod hero;
mod monster;
mod toast;
mod upload;
mod footer;

pub use hero::*;
pub use monster::*;
pub use toast::*;
pub use upload::*;
pub use footer::*;

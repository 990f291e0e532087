//! Backend communication and timing helpers.
//!
//! # Services
//!
//! - [`upload`] - multipart upload to the monster backend
//! - [`chew`] - minimum-duration gating for the eating animation

pub mod upload;
pub mod chew;

pub use upload::*;
pub use chew::*;

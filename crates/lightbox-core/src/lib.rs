//! Lightbox navigation for photo galleries
//!
//! This crate holds the DOM-free part of the album lightbox: the ordered
//! image list, the currently viewed index with wraparound navigation, and
//! the open/closed overlay state. Browser bindings live in `album-web-wasm`,
//! which feeds input events in as [`Command`]s and renders the returned
//! [`Transition`]s.

pub mod command;
pub mod display;
pub mod error;
pub mod image_set;
pub mod navigator;

pub use command::{Command, Direction};
pub use display::Display;
pub use error::NavigatorError;
pub use image_set::{ImageRef, ImageSet};
pub use navigator::{LightboxNavigator, Transition};

//! A library to list and switch display modes through the native display-configuration API.
//!
//! Displays are enumerated once into a [`DisplaySet`]; each [`Display`] in it can report its
//! current mode, list the modes it advertises and switch to one of them for the current session.
//! All native calls go through the [`DisplayBackend`] trait. On macOS the CoreGraphics
//! implementation is available as `CoreGraphicsBackend`.

mod backend;
mod display;
mod report;
mod settings;
mod status;
mod transaction;
mod types;

mod platforms;

pub use backend::*;
pub use display::*;
pub use report::*;
pub use settings::*;
pub use status::*;
pub use transaction::*;
pub use types::*;

#[cfg(target_os = "macos")]
pub use platforms::CoreGraphicsBackend;

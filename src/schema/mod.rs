//! Playlist boundary model and validation.
//!
//! The playlist is the JSON-facing, human-edited description of the scene
//! stack. It is parsed into [`playlist::PlaylistDef`], validated against a
//! [`crate::scene::registry::SceneRegistry`], and handed to
//! [`crate::session::frame_loop::Director`] before any frame runs.

/// Playlist boundary model, JSON intake, and fingerprinting.
pub mod playlist;
/// Multi-error playlist validation against the registry.
pub mod validate;

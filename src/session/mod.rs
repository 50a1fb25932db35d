//! Host-side frame driving.

/// The director: per-frame `update` → `draw` sequencing over live scenes.
pub mod frame_loop;

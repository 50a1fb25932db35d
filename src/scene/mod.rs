//! The scene contract.
//!
//! A scene module exposes metadata (description, help, option set) and a
//! factory to the host loader; the behavior object it loads implements
//! [`lifecycle::Scene`]. The host keeps per-instance fields in
//! [`state::SceneState`] and drives the `update` → `draw` sequence once per
//! frame.

pub mod clip;
/// Lifecycle trait and per-frame protocol types.
pub mod lifecycle;
/// Option descriptors, values, and invalidation classes.
pub mod options;
/// Scene-module table the host loader populates at startup.
pub mod registry;
/// Host-owned per-instance state and dirty tracking.
pub mod state;

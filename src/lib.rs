//! Scenemix is the scene-object contract of a real-time video compositor.
//!
//! A *scene* is a pluggable unit participating in the host's per-frame render
//! graph: it declares configurable options, recomputes derived geometry when
//! its inputs change, and issues drawing-surface commands. The crate defines
//! the lifecycle every scene type implements and ships the built-in screen
//! clip scene:
//!
//! - Register scene modules in a [`SceneRegistry`]
//! - Load and validate a [`PlaylistDef`]
//! - Drive frames through a [`Director`] against a [`DrawSurface`]
//!
//! The host's rasterizer, frame clock, and scene-graph management stay
//! outside; everything a scene needs per frame arrives through an explicit
//! [`FrameContext`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Drawing-surface seam consumed at draw time.
pub mod render;
/// Scene contract: options, state, lifecycle, registry, built-in scenes.
pub mod scene;
/// JSON playlist boundary model and validation.
pub mod schema;
/// Host-side frame driver.
pub mod session;

pub use crate::foundation::core::{Canvas, FrameIndex, Point, Rect};
pub use crate::foundation::error::{ScenemixError, ScenemixResult};
pub use crate::foundation::geometry::{ClipRect, to_canvas_space};

pub use crate::render::surface::{DrawSurface, RecordingSurface, SurfaceCommand};
pub use crate::scene::lifecycle::{FrameContext, FullscreenHint, Scene, UpdateDisposition};
pub use crate::scene::options::{Invalidation, OptionDescriptor, OptionValue};
pub use crate::scene::registry::{SceneModule, SceneRegistry};
pub use crate::scene::state::SceneState;
pub use crate::schema::playlist::{PlaylistDef, SceneDeclDef};
pub use crate::session::frame_loop::Director;

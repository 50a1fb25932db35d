use crate::foundation::core::{Canvas, FrameIndex};
use crate::render::surface::DrawSurface;
use crate::scene::state::SceneState;

/// Per-frame context the host injects into every scene call.
///
/// Scenes never read ambient global state; everything frame-scoped arrives
/// here, read-only.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext {
    /// Current output canvas extents.
    pub canvas: Canvas,
    /// Frame being produced.
    pub frame: FrameIndex,
}

/// Clip mode a scene requests from [`Scene::update`].
///
/// The disposition communicates the desired *mode*; the scene's cached
/// geometry communicates the desired *shape*. The two are orthogonal: the
/// disposition follows the scene's current configuration even on frames
/// where no recomputation happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum UpdateDisposition {
    /// The scene requests no active clip.
    ClipCleared = 1,
    /// The scene requests its cached clip rectangle be made active.
    ClipActive = 2,
}

impl UpdateDisposition {
    /// Wire code used by the original scene protocol.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Tri-state hint telling the host whether a scene covers the full canvas,
/// letting it skip background-fill work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FullscreenHint {
    /// Not applicable or unknown; the host must not assume fullscreen.
    #[default]
    Unknown,
    /// The scene does not cover the canvas.
    No,
    /// The scene covers the canvas.
    Yes,
}

impl FullscreenHint {
    /// Wire code used by the original scene protocol (`Unknown` is `-1`).
    pub fn code(self) -> i32 {
        match self {
            Self::Unknown => -1,
            Self::No => 0,
            Self::Yes => 1,
        }
    }
}

/// Behavior object a scene module's factory returns.
///
/// Lifecycle per instance: `Loaded` (factory ran, no geometry computed) →
/// `Updated` (geometry current for this frame) → `Drawn` (surface commands
/// issued), then back to `Updated` each frame — or straight to `Drawn` when
/// the dirty flag is down and the cached geometry is still valid.
///
/// The host guarantees that for a given frame `update` completes before
/// `draw` runs, and never calls `draw` before the first `update`. All calls
/// happen on the host's render thread, once per frame; none may block. The
/// host clears the dirty flag after `update` returns.
pub trait Scene {
    /// Recompute and cache derived geometry when `state.update_flag()` is
    /// raised, using the instance fields and `ctx.canvas`; then report the
    /// desired clip mode for this frame.
    ///
    /// Total over finite inputs; must not fail.
    fn update(&mut self, state: &SceneState, ctx: &FrameContext) -> UpdateDisposition;

    /// Issue surface commands according to the mode cached by the last
    /// [`Scene::update`].
    ///
    /// Must be idempotent between updates and must not recompute geometry.
    /// A `None` surface is a host-contract violation (the handle was
    /// unavailable); the scene does nothing.
    fn draw(&self, state: &SceneState, ctx: &FrameContext, surface: Option<&mut (dyn DrawSurface + '_)>);

    /// Whether the scene covers the full canvas.
    fn fullscreen(&self) -> FullscreenHint {
        FullscreenHint::Unknown
    }

    /// `true` when the scene is a pass-through identity transform the host
    /// may elide from render-graph evaluation.
    fn identity(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/lifecycle.rs"]
mod tests;

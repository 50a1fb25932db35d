use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{ScenemixError, ScenemixResult};
use crate::render::surface::DrawSurface;
use crate::scene::lifecycle::{FrameContext, Scene, UpdateDisposition};
use crate::scene::registry::{SceneModule, SceneRegistry};
use crate::scene::state::SceneState;
use crate::schema::playlist::PlaylistDef;
use crate::schema::validate::validate_playlist;

struct SceneEntry {
    id: String,
    state: SceneState,
    behavior: Box<dyn Scene>,
    mode: Option<UpdateDisposition>,
}

/// Host-side frame driver.
///
/// Owns the scene instances built from a validated playlist and enforces the
/// per-frame contract: for every scene, `update` completes before `draw` is
/// invoked, and the dirty flag is cleared after `update` returns. Everything
/// runs synchronously on the caller's thread; no call blocks.
///
/// Scene state may be mutated between frames via
/// [`Director::scene_state_mut`]; removal is the only termination path and
/// is likewise a between-frames operation.
pub struct Director {
    canvas: Canvas,
    frame: FrameIndex,
    scenes: Vec<SceneEntry>,
}

impl std::fmt::Debug for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Director")
            .field("canvas", &self.canvas)
            .field("frame", &self.frame)
            .field(
                "scenes",
                &self.scenes.iter().map(|s| &s.id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Director {
    /// A director with no scenes.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            frame: FrameIndex(0),
            scenes: Vec::new(),
        }
    }

    /// Build a director from a playlist.
    ///
    /// Validates the playlist against `registry`, then instantiates each
    /// declaration in order: the module factory runs once per instance, the
    /// option defaults apply, and the declared geometry and overrides go on
    /// top.
    pub fn from_playlist(registry: &SceneRegistry, def: &PlaylistDef) -> ScenemixResult<Self> {
        validate_playlist(def, registry)
            .map_err(|e| ScenemixError::validation(e.to_string()))?;

        let mut scenes = Vec::with_capacity(def.scenes.len());
        for decl in &def.scenes {
            let module = registry.get(&decl.kind).ok_or_else(|| {
                ScenemixError::validation(format!("unknown scene type '{}'", decl.kind))
            })?;
            let mut state = SceneState::new((module.options)());
            state.set_position(decl.x, decl.y);
            state.set_size(decl.width, decl.height);
            for (name, value) in &decl.opts {
                state.set_option(name, value.clone())?;
            }
            scenes.push(SceneEntry {
                id: decl.id.clone(),
                state,
                behavior: (module.load)(),
                mode: None,
            });
        }
        Ok(Self {
            canvas: def.canvas.to_canvas(),
            frame: FrameIndex(0),
            scenes,
        })
    }

    /// Instantiate `module` and append it to the scene stack.
    ///
    /// `id` must be unique among live scenes.
    pub fn push_scene(&mut self, module: &SceneModule, id: impl Into<String>) -> ScenemixResult<()> {
        let id = id.into();
        if self.scenes.iter().any(|s| s.id == id) {
            return Err(ScenemixError::validation(format!(
                "scene id '{id}' is already in use"
            )));
        }
        self.scenes.push(SceneEntry {
            id,
            state: SceneState::new((module.options)()),
            behavior: (module.load)(),
            mode: None,
        });
        Ok(())
    }

    /// Remove a scene between frames. Returns `false` when `id` is unknown.
    pub fn remove_scene(&mut self, id: &str) -> bool {
        let before = self.scenes.len();
        self.scenes.retain(|s| s.id != id);
        self.scenes.len() != before
    }

    /// Run one frame: for each scene in stack order, `update`, clear the
    /// dirty flag, then `draw` against `surface`.
    ///
    /// A `None` surface still runs updates (geometry stays current) but
    /// every draw is a no-op.
    #[tracing::instrument(skip(self, surface), fields(frame = self.frame.0))]
    pub fn run_frame(&mut self, mut surface: Option<&mut dyn DrawSurface>) {
        let ctx = FrameContext {
            canvas: self.canvas,
            frame: self.frame,
        };
        for entry in &mut self.scenes {
            let mode = entry.behavior.update(&entry.state, &ctx);
            entry.state.clear_update_flag();
            entry.mode = Some(mode);
            entry.behavior.draw(&entry.state, &ctx, surface.as_deref_mut());
        }
        self.frame = self.frame.next();
    }

    /// Current canvas extents.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Change the canvas extents.
    ///
    /// Derived geometry depends on the canvas, so a real change marks every
    /// scene dirty.
    pub fn set_canvas(&mut self, canvas: Canvas) {
        if self.canvas != canvas {
            self.canvas = canvas;
            for entry in &mut self.scenes {
                entry.state.mark_dirty();
            }
        }
    }

    /// Index of the next frame [`Director::run_frame`] will produce.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Number of live scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// `true` when no scenes are loaded.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// State of the scene with the given id.
    pub fn scene_state(&self, id: &str) -> Option<&SceneState> {
        self.scenes.iter().find(|s| s.id == id).map(|s| &s.state)
    }

    /// Mutable state of the scene with the given id, for between-frames
    /// option and geometry edits.
    pub fn scene_state_mut(&mut self, id: &str) -> Option<&mut SceneState> {
        self.scenes
            .iter_mut()
            .find(|s| s.id == id)
            .map(|s| &mut s.state)
    }

    /// Disposition the scene returned from its most recent `update`.
    pub fn last_mode(&self, id: &str) -> Option<UpdateDisposition> {
        self.scenes.iter().find(|s| s.id == id).and_then(|s| s.mode)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/frame_loop.rs"]
mod tests;

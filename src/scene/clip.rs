//! Built-in screen clip scene.

use crate::foundation::geometry::{ClipRect, to_canvas_space};
use crate::render::surface::DrawSurface;
use crate::scene::lifecycle::{FrameContext, Scene, UpdateDisposition};
use crate::scene::options::{Invalidation, OptionDescriptor, OptionValue};
use crate::scene::registry::SceneModule;
use crate::scene::state::SceneState;

/// Scene-type name under which the module registers.
pub const NAME: &str = "clip";

const DESCRIPTION: &str = "Screen clip";

const HELP: &str = "\
This scene resets the canvas clipper or sets the canvas clipper to the scene area.

The clipper is always axis-aligned (rotation and skew are ignored).
";

/// Loader-facing module declaration.
pub fn module() -> SceneModule {
    SceneModule {
        name: NAME,
        description: DESCRIPTION,
        help: HELP,
        options,
        load,
    }
}

fn options() -> Vec<OptionDescriptor> {
    vec![OptionDescriptor {
        name: "reset",
        default: OptionValue::Bool(false),
        desc: "if set, reset clipper otherwise set it to scene position and size",
        invalidation: Invalidation::Size,
    }]
}

fn load() -> Box<dyn Scene> {
    Box::new(ClipScene::default())
}

/// Clip state controller.
///
/// Translates the `reset` option and the cached rectangle into exactly one
/// surface call per frame: clear the clipper, or set it to the scene area.
#[derive(Clone, Debug, Default)]
struct ClipScene {
    reset: bool,
    clip: Option<ClipRect>,
}

impl Scene for ClipScene {
    fn update(&mut self, state: &SceneState, ctx: &FrameContext) -> UpdateDisposition {
        self.reset = state.bool_or("reset", false);
        if state.update_flag() {
            let clip = to_canvas_space(
                state.x(),
                state.y(),
                state.width(),
                state.height(),
                ctx.canvas,
            );
            tracing::debug!(frame = ctx.frame.0, ?clip, "recomputed clip rectangle");
            self.clip = Some(clip);
        }
        if self.reset {
            UpdateDisposition::ClipCleared
        } else {
            UpdateDisposition::ClipActive
        }
    }

    fn draw(&self, _state: &SceneState, _ctx: &FrameContext, surface: Option<&mut (dyn DrawSurface + '_)>) {
        let Some(surface) = surface else {
            return;
        };
        if self.reset {
            surface.set_clipper(None);
        } else {
            surface.set_clipper(self.clip.as_ref());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/clip.rs"]
mod tests;

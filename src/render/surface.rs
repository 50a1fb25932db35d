use crate::foundation::geometry::ClipRect;
use smallvec::SmallVec;

/// Render-surface handle a scene receives at draw time.
///
/// The surface is a shared per-frame resource; only one scene's clip state
/// is active at a time, and each scene that mutates it must leave it in a
/// well-defined state (its own clip, or none) by the end of its `draw` call.
pub trait DrawSurface {
    /// Replace the active clip region. `None` clears clipping entirely.
    fn set_clipper(&mut self, clip: Option<&ClipRect>);
}

/// A single recorded surface command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceCommand {
    /// `set_clipper` with the given region.
    SetClipper(Option<ClipRect>),
}

/// Surface double that records commands instead of rasterizing.
///
/// Tests and debug tooling use it to assert the exact command sequence a
/// scene issues per frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: SmallVec<[SurfaceCommand; 4]>,
}

impl RecordingSurface {
    /// An empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, oldest first.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Payload of the most recent `set_clipper` call, when any was made.
    pub fn last_clipper(&self) -> Option<Option<ClipRect>> {
        self.commands
            .iter()
            .rev()
            .map(|SurfaceCommand::SetClipper(clip)| *clip)
            .next()
    }

    /// Drop the recorded commands, e.g. between frames.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn set_clipper(&mut self, clip: Option<&ClipRect>) {
        self.commands.push(SurfaceCommand::SetClipper(clip.copied()));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;

//! The drawing-surface seam.
//!
//! The rasterizer behind the surface is outside this crate; scenes only see
//! the narrow [`surface::DrawSurface`] handle the host passes at draw time.

/// Surface handle trait and the command-recording test double.
pub mod surface;

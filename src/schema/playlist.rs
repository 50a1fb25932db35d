use crate::foundation::core::Canvas;
use crate::foundation::error::{ScenemixError, ScenemixResult};
use crate::scene::options::OptionValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5c3e_9a71_04d2_b86f;

/// Output canvas declaration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CanvasDef {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasDef {
    /// Convert into the runtime [`Canvas`] type.
    pub fn to_canvas(self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

/// One scene declaration in the playlist.
///
/// Named fields cover the geometry every scene carries; remaining keys are
/// collected as scene-type-specific option overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDeclDef {
    /// Unique scene identifier within the playlist.
    pub id: String,
    /// Registered scene-type name, e.g. `"clip"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Layout-space x of the top-left corner.
    #[serde(default)]
    pub x: f64,
    /// Layout-space y of the top-left corner.
    #[serde(default)]
    pub y: f64,
    /// Layout-space width.
    #[serde(default)]
    pub width: f64,
    /// Layout-space height.
    #[serde(default)]
    pub height: f64,
    /// Scene-type-specific option overrides.
    #[serde(flatten)]
    pub opts: BTreeMap<String, OptionValue>,
}

/// The playlist: canvas extents plus scene declarations in bottom-to-top
/// draw order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistDef {
    /// Output canvas extents.
    pub canvas: CanvasDef,
    /// Scene declarations.
    #[serde(default)]
    pub scenes: Vec<SceneDeclDef>,
}

impl PlaylistDef {
    /// Parse a playlist from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ScenemixResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ScenemixError::serde(format!("parse playlist JSON: {e}")))
    }

    /// Parse a playlist from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ScenemixResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ScenemixError::validation(format!("open playlist JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Stable fingerprint of the playlist contents.
    ///
    /// Hosts that watch the playlist file use this to elide a scene-graph
    /// rebuild when a reload parses to identical contents. Independent of
    /// JSON key order and formatting.
    pub fn fingerprint(&self) -> u64 {
        let mut h = StableHasher::new();
        h.write_u32(self.canvas.width);
        h.write_u32(self.canvas.height);
        h.write_usize(self.scenes.len());
        for scene in &self.scenes {
            h.write_str(&scene.id);
            h.write_str(&scene.kind);
            h.write_f64(scene.x);
            h.write_f64(scene.y);
            h.write_f64(scene.width);
            h.write_f64(scene.height);
            h.write_usize(scene.opts.len());
            for (name, value) in &scene.opts {
                h.write_str(name);
                match value {
                    OptionValue::Bool(v) => {
                        h.write_u8(0);
                        h.write_u8(u8::from(*v));
                    }
                    OptionValue::F64(v) => {
                        h.write_u8(1);
                        h.write_f64(*v);
                    }
                    OptionValue::Str(v) => {
                        h.write_u8(2);
                        h.write_str(v);
                    }
                }
            }
        }
        h.finish()
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_usize(&mut self, v: usize) {
        self.write_bytes(&(v as u64).to_le_bytes());
    }

    // NaN payloads are preserved as-is; two NaN-bearing playlists only
    // fingerprint equal when the bit patterns match.
    fn write_f64(&mut self, v: f64) {
        self.write_bytes(&v.to_bits().to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_usize(s.len());
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> u64 {
        self.inner.digest()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/playlist.rs"]
mod tests;

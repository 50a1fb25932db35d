use crate::scene::registry::SceneRegistry;
use crate::schema::playlist::PlaylistDef;
use std::collections::HashSet;
use std::fmt;

/// One element of a path into the playlist JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaPathElem {
    /// Named field.
    Field(&'static str),
    /// Array index.
    Index(usize),
}

/// A single validation failure, located by its path into the document.
#[derive(Debug, Clone)]
pub struct SchemaError {
    /// Path to the offending value, root-first.
    pub path: Vec<SchemaPathElem>,
    /// What is wrong with it.
    pub message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

/// All validation failures found in one pass over a playlist.
#[derive(Debug, Clone)]
pub struct SchemaErrors {
    /// The failures, in document order.
    pub errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

/// Validate a playlist against the registered scene modules.
///
/// Collects every failure instead of stopping at the first, so a playlist
/// author sees the full damage report at once. An `Ok` playlist is safe to
/// hand to [`crate::session::frame_loop::Director`]; per-frame paths never
/// re-check these invariants.
pub fn validate_playlist(
    def: &PlaylistDef,
    registry: &SceneRegistry,
) -> Result<(), SchemaErrors> {
    let mut errors = Vec::new();

    if def.canvas.width == 0 {
        errors.push(SchemaError::at(
            &[SchemaPathElem::Field("canvas"), SchemaPathElem::Field("width")],
            "canvas.width must be > 0",
        ));
    }
    if def.canvas.height == 0 {
        errors.push(SchemaError::at(
            &[SchemaPathElem::Field("canvas"), SchemaPathElem::Field("height")],
            "canvas.height must be > 0",
        ));
    }

    let mut ids = HashSet::<&str>::new();
    for (i, scene) in def.scenes.iter().enumerate() {
        let base = [SchemaPathElem::Field("scenes"), SchemaPathElem::Index(i)];

        if scene.id.is_empty() {
            errors.push(SchemaError::at(&base, "scene id must not be empty"));
        } else if !ids.insert(scene.id.as_str()) {
            errors.push(SchemaError::at(
                &base,
                format!("duplicate scene id '{}'", scene.id),
            ));
        }

        let Some(module) = registry.get(&scene.kind) else {
            errors.push(SchemaError::at(
                &base,
                format!("unknown scene type '{}'", scene.kind),
            ));
            continue;
        };

        for (name, value) in [
            ("x", scene.x),
            ("y", scene.y),
            ("width", scene.width),
            ("height", scene.height),
        ] {
            if !value.is_finite() {
                let mut path = base.to_vec();
                path.push(SchemaPathElem::Field(name));
                errors.push(SchemaError::at(&path, format!("{name} must be finite")));
            }
        }

        let descriptors = (module.options)();
        for (name, value) in &scene.opts {
            match descriptors.iter().find(|d| d.name == name) {
                None => errors.push(SchemaError::at(
                    &base,
                    format!("scene type '{}' has no option '{name}'", scene.kind),
                )),
                Some(desc) if !desc.default.same_type(value) => {
                    errors.push(SchemaError::at(
                        &base,
                        format!(
                            "option '{name}' expects {}, got {}",
                            desc.default.type_name(),
                            value.type_name()
                        ),
                    ));
                }
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/validate.rs"]
mod tests;

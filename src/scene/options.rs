use crate::foundation::error::{ScenemixError, ScenemixResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Recomputation class a configuration change triggers.
///
/// Hosts may define further classes; the core only distinguishes changes
/// that invalidate derived geometry from changes that do not.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Invalidation {
    /// No recomputation; the new value simply takes effect.
    #[default]
    None,
    /// Treat as if the scene's geometry changed: the instance dirty flag is
    /// set before the next `update` call.
    Size,
}

/// A configured option value.
///
/// Parses untagged from playlist JSON, so `true`, `3.5` and `"left"` all map
/// to the natural variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    F64(f64),
    /// Free-form string.
    Str(String),
}

impl OptionValue {
    /// Name of the variant's type, for error messages.
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::F64(_) => "number",
            Self::Str(_) => "string",
        }
    }

    /// Return `true` when `other` carries the same value type.
    pub(crate) fn same_type(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// A named, typed option a scene exposes to the host loader.
///
/// The ordered option set is a plain slice; its length replaces the empty
/// sentinel entry older scene protocols used as a terminator.
#[derive(Clone, Debug)]
pub struct OptionDescriptor {
    /// Option name, unique within one scene's option set.
    pub name: &'static str,
    /// Value applied when a declaration does not override the option.
    pub default: OptionValue,
    /// Short human-readable description for UI binding.
    pub desc: &'static str,
    /// Recomputation class for value changes.
    pub invalidation: Invalidation,
}

/// Reject option sets with duplicate names.
///
/// Runs at registration time so per-frame paths never see an invalid set.
pub(crate) fn check_unique_names(
    scene: &str,
    options: &[OptionDescriptor],
) -> ScenemixResult<()> {
    let mut seen = BTreeSet::new();
    for opt in options {
        if !seen.insert(opt.name) {
            return Err(ScenemixError::configuration(format!(
                "scene '{scene}' declares option '{}' more than once",
                opt.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/options.rs"]
mod tests;

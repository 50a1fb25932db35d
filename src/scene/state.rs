use crate::foundation::error::{ScenemixError, ScenemixResult};
use crate::scene::options::{Invalidation, OptionDescriptor, OptionValue};
use std::collections::BTreeMap;

/// Host-owned per-instance scene state.
///
/// The host materializes a scene's configured fields here before each
/// `update` call; the behavior object only reads them. Every mutator tracks
/// whether the change invalidates derived geometry and raises the dirty flag
/// accordingly, so `update_flag()` is `true` exactly when a
/// geometry-affecting input changed since the last `update`.
#[derive(Clone, Debug)]
pub struct SceneState {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    update_flag: bool,
    descriptors: Vec<OptionDescriptor>,
    values: BTreeMap<&'static str, OptionValue>,
}

impl SceneState {
    /// Build fresh state from a scene's option set, with every option at its
    /// default value.
    ///
    /// The dirty flag starts raised so the first `update` always recomputes.
    pub fn new(descriptors: Vec<OptionDescriptor>) -> Self {
        let values = descriptors
            .iter()
            .map(|d| (d.name, d.default.clone()))
            .collect();
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            update_flag: true,
            descriptors,
            values,
        }
    }

    /// Layout-space x of the scene's top-left corner.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Layout-space y of the scene's top-left corner.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Layout-space width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Layout-space height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Move the scene. A real change raises the dirty flag.
    pub fn set_position(&mut self, x: f64, y: f64) {
        if self.x != x || self.y != y {
            self.x = x;
            self.y = y;
            self.update_flag = true;
        }
    }

    /// Resize the scene. A real change raises the dirty flag.
    pub fn set_size(&mut self, width: f64, height: f64) {
        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.update_flag = true;
        }
    }

    /// Override a declared option.
    ///
    /// The new value must match the declared type. Setting an option to its
    /// current value is not a change; a real change raises the dirty flag
    /// only for [`Invalidation::Size`]-class options.
    pub fn set_option(&mut self, name: &str, value: OptionValue) -> ScenemixResult<()> {
        let desc = self
            .descriptors
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| ScenemixError::validation(format!("unknown option '{name}'")))?;
        if !desc.default.same_type(&value) {
            return Err(ScenemixError::validation(format!(
                "option '{name}' expects {}, got {}",
                desc.default.type_name(),
                value.type_name()
            )));
        }
        let key = desc.name;
        let invalidation = desc.invalidation;
        let current = self.values.get(key);
        if current != Some(&value) {
            self.values.insert(key, value);
            if invalidation == Invalidation::Size {
                self.update_flag = true;
            }
        }
        Ok(())
    }

    /// Current value of a declared option.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Boolean option value, or `default` when absent or of another type.
    pub fn bool_or(&self, name: &str, default: bool) -> bool {
        match self.values.get(name) {
            Some(OptionValue::Bool(v)) => *v,
            _ => default,
        }
    }

    /// Numeric option value, or `default` when absent or of another type.
    pub fn f64_or(&self, name: &str, default: f64) -> f64 {
        match self.values.get(name) {
            Some(OptionValue::F64(v)) => *v,
            _ => default,
        }
    }

    /// String option value, when present and of string type.
    pub fn str_opt(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(OptionValue::Str(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// The option set this state was built from, in declaration order.
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.descriptors
    }

    /// `true` exactly when a geometry-affecting input changed since the last
    /// `update` call.
    pub fn update_flag(&self) -> bool {
        self.update_flag
    }

    /// Lower the dirty flag.
    ///
    /// The host calls this after `update` returns; scenes never clear the
    /// flag themselves.
    pub fn clear_update_flag(&mut self) {
        self.update_flag = false;
    }

    /// Raise the dirty flag for an out-of-band geometry change, e.g. a
    /// canvas resize.
    pub fn mark_dirty(&mut self) {
        self.update_flag = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;

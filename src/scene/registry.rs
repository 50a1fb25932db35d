use crate::foundation::error::{ScenemixError, ScenemixResult};
use crate::scene::clip;
use crate::scene::lifecycle::Scene;
use crate::scene::options::{self, OptionDescriptor};
use std::collections::BTreeMap;

/// What a scene module exposes to the host loader.
#[derive(Clone, Copy, Debug)]
pub struct SceneModule {
    /// Scene-type name, the registry key (e.g. `"clip"`).
    pub name: &'static str,
    /// Short human-readable label.
    pub description: &'static str,
    /// Extended documentation text, possibly multi-line.
    pub help: &'static str,
    /// Ordered option set the scene exposes.
    pub options: fn() -> Vec<OptionDescriptor>,
    /// Factory for the behavior object. The host calls it exactly once per
    /// instance; construction is pure.
    pub load: fn() -> Box<dyn Scene>,
}

/// Registration-time table mapping scene-type names to modules.
///
/// The host populates the registry at startup and treats it as immutable
/// afterwards. Registration failures are fatal to the offending module, not
/// to the process.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    modules: BTreeMap<&'static str, SceneModule>,
}

impl SceneRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in scenes.
    pub fn builtin() -> ScenemixResult<Self> {
        let mut registry = Self::empty();
        registry.register(clip::module())?;
        Ok(registry)
    }

    /// Register a scene module.
    ///
    /// Rejects duplicate module names and duplicate option names within the
    /// module's option set with [`ScenemixError::Configuration`].
    pub fn register(&mut self, module: SceneModule) -> ScenemixResult<()> {
        options::check_unique_names(module.name, &(module.options)())?;
        if self.modules.contains_key(module.name) {
            return Err(ScenemixError::configuration(format!(
                "scene type '{}' is already registered",
                module.name
            )));
        }
        self.modules.insert(module.name, module);
        Ok(())
    }

    /// Look up a module by scene-type name.
    pub fn get(&self, name: &str) -> Option<&SceneModule> {
        self.modules.get(name)
    }

    /// Registered scene-type names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules.keys().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/registry.rs"]
mod tests;

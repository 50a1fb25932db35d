use super::*;
use crate::scene::lifecycle::{FrameContext, UpdateDisposition};
use crate::scene::options::{Invalidation, OptionValue};
use crate::scene::state::SceneState;

struct NullScene;

impl Scene for NullScene {
    fn update(&mut self, _state: &SceneState, _ctx: &FrameContext) -> UpdateDisposition {
        UpdateDisposition::ClipCleared
    }

    fn draw(
        &self,
        _state: &SceneState,
        _ctx: &FrameContext,
        _surface: Option<&mut (dyn crate::render::surface::DrawSurface + '_)>,
    ) {
    }
}

fn null_load() -> Box<dyn Scene> {
    Box::new(NullScene)
}

fn duplicate_options() -> Vec<OptionDescriptor> {
    let dup = OptionDescriptor {
        name: "mode",
        default: OptionValue::Bool(false),
        desc: "",
        invalidation: Invalidation::None,
    };
    vec![dup.clone(), dup]
}

#[test]
fn builtin_registry_exposes_clip() {
    let registry = SceneRegistry::builtin().unwrap();
    assert!(registry.names().any(|n| n == "clip"));

    let module = registry.get("clip").unwrap();
    assert_eq!(module.description, "Screen clip");
    assert_eq!((module.options)().len(), 1);
}

#[test]
fn unknown_scene_type_is_absent() {
    let registry = SceneRegistry::builtin().unwrap();
    assert!(registry.get("mirror").is_none());
}

#[test]
fn duplicate_module_name_is_rejected() {
    let mut registry = SceneRegistry::builtin().unwrap();
    let err = registry.register(clip::module()).unwrap_err();
    assert!(matches!(err, ScenemixError::Configuration(_)));
    assert!(err.to_string().contains("already registered"));
}

#[test]
fn duplicate_option_names_are_rejected_at_registration() {
    let mut registry = SceneRegistry::empty();
    let err = registry
        .register(SceneModule {
            name: "broken",
            description: "",
            help: "",
            options: duplicate_options,
            load: null_load,
        })
        .unwrap_err();
    assert!(matches!(err, ScenemixError::Configuration(_)));
    assert!(err.to_string().contains("more than once"));
    // The module did not land in the table.
    assert!(registry.get("broken").is_none());
}

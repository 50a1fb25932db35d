use super::*;
use crate::scene::options::OptionValue;
use crate::schema::playlist::{CanvasDef, SceneDeclDef};
use std::collections::BTreeMap;

fn registry() -> SceneRegistry {
    SceneRegistry::builtin().unwrap()
}

fn decl(id: &str, kind: &str) -> SceneDeclDef {
    SceneDeclDef {
        id: id.to_owned(),
        kind: kind.to_owned(),
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
        opts: BTreeMap::new(),
    }
}

fn playlist(scenes: Vec<SceneDeclDef>) -> PlaylistDef {
    PlaylistDef {
        canvas: CanvasDef {
            width: 800,
            height: 600,
        },
        scenes,
    }
}

#[test]
fn valid_playlist_passes() {
    let def = playlist(vec![decl("a", "clip"), decl("b", "clip")]);
    assert!(validate_playlist(&def, &registry()).is_ok());
}

#[test]
fn duplicate_scene_id_is_reported_with_its_path() {
    let def = playlist(vec![decl("a", "clip"), decl("a", "clip")]);
    let errs = validate_playlist(&def, &registry()).unwrap_err();
    assert_eq!(errs.errors.len(), 1);
    assert!(errs.to_string().contains("$.scenes[1]"));
    assert!(errs.to_string().contains("duplicate scene id 'a'"));
}

#[test]
fn empty_scene_id_is_rejected() {
    let def = playlist(vec![decl("", "clip")]);
    let errs = validate_playlist(&def, &registry()).unwrap_err();
    assert!(errs.to_string().contains("must not be empty"));
}

#[test]
fn unknown_scene_type_is_reported() {
    let def = playlist(vec![decl("a", "mirror")]);
    let errs = validate_playlist(&def, &registry()).unwrap_err();
    assert!(errs.to_string().contains("unknown scene type 'mirror'"));
}

#[test]
fn unknown_option_is_reported() {
    let mut d = decl("a", "clip");
    d.opts.insert("speed".to_owned(), OptionValue::F64(2.0));
    let errs = validate_playlist(&playlist(vec![d]), &registry()).unwrap_err();
    assert!(errs.to_string().contains("has no option 'speed'"));
}

#[test]
fn option_type_mismatch_is_reported() {
    let mut d = decl("a", "clip");
    d.opts.insert("reset".to_owned(), OptionValue::F64(1.0));
    let errs = validate_playlist(&playlist(vec![d]), &registry()).unwrap_err();
    assert!(errs.to_string().contains("expects bool, got number"));
}

#[test]
fn non_finite_geometry_is_reported() {
    let mut d = decl("a", "clip");
    d.width = f64::NAN;
    let errs = validate_playlist(&playlist(vec![d]), &registry()).unwrap_err();
    assert!(errs.to_string().contains("$.scenes[0].width"));
    assert!(errs.to_string().contains("must be finite"));
}

#[test]
fn zero_canvas_extents_are_rejected() {
    let mut def = playlist(vec![decl("a", "clip")]);
    def.canvas.width = 0;
    let errs = validate_playlist(&def, &registry()).unwrap_err();
    assert!(errs.to_string().contains("$.canvas.width"));
}

#[test]
fn all_failures_are_collected_in_one_pass() {
    let mut bad_opts = decl("a", "clip");
    bad_opts
        .opts
        .insert("speed".to_owned(), OptionValue::F64(2.0));
    let def = playlist(vec![bad_opts, decl("a", "mirror")]);
    let errs = validate_playlist(&def, &registry()).unwrap_err();
    // Unknown option, duplicate id, unknown type.
    assert_eq!(errs.errors.len(), 3);
    let rendered = errs.to_string();
    assert!(rendered.contains("has no option 'speed'"));
    assert!(rendered.contains("duplicate scene id 'a'"));
    assert!(rendered.contains("unknown scene type 'mirror'"));
}

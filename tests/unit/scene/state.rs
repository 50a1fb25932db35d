use super::*;

fn descriptors() -> Vec<OptionDescriptor> {
    vec![
        OptionDescriptor {
            name: "reset",
            default: OptionValue::Bool(false),
            desc: "",
            invalidation: Invalidation::Size,
        },
        OptionDescriptor {
            name: "label",
            default: OptionValue::Str(String::new()),
            desc: "",
            invalidation: Invalidation::None,
        },
        OptionDescriptor {
            name: "pad",
            default: OptionValue::F64(0.0),
            desc: "",
            invalidation: Invalidation::Size,
        },
    ]
}

#[test]
fn defaults_apply_and_flag_starts_raised() {
    let state = SceneState::new(descriptors());
    assert!(state.update_flag());
    assert_eq!(state.option("reset"), Some(&OptionValue::Bool(false)));
    assert_eq!(state.f64_or("pad", 9.0), 0.0);
    assert_eq!(state.options().len(), 3);
}

#[test]
fn geometry_changes_raise_the_flag_once_per_real_change() {
    let mut state = SceneState::new(descriptors());
    state.clear_update_flag();

    state.set_position(0.0, 0.0);
    assert!(!state.update_flag(), "no-op move must not dirty");

    state.set_position(10.0, 20.0);
    assert!(state.update_flag());
    assert_eq!((state.x(), state.y()), (10.0, 20.0));

    state.clear_update_flag();
    state.set_size(100.0, 80.0);
    assert!(state.update_flag());
    assert_eq!((state.width(), state.height()), (100.0, 80.0));
}

#[test]
fn size_class_option_change_raises_the_flag() {
    let mut state = SceneState::new(descriptors());
    state.clear_update_flag();
    state.set_option("reset", OptionValue::Bool(true)).unwrap();
    assert!(state.update_flag());
    assert!(state.bool_or("reset", false));
}

#[test]
fn setting_an_option_to_its_current_value_is_not_a_change() {
    let mut state = SceneState::new(descriptors());
    state.clear_update_flag();
    state.set_option("reset", OptionValue::Bool(false)).unwrap();
    assert!(!state.update_flag());
}

#[test]
fn none_class_option_change_never_raises_the_flag() {
    let mut state = SceneState::new(descriptors());
    state.clear_update_flag();
    state
        .set_option("label", OptionValue::Str("overlay".to_owned()))
        .unwrap();
    assert!(!state.update_flag());
    assert_eq!(state.str_opt("label"), Some("overlay"));
}

#[test]
fn unknown_option_is_rejected() {
    let mut state = SceneState::new(descriptors());
    let err = state
        .set_option("missing", OptionValue::Bool(true))
        .unwrap_err();
    assert!(matches!(err, ScenemixError::Validation(_)));
    assert!(err.to_string().contains("'missing'"));
}

#[test]
fn option_type_mismatch_is_rejected() {
    let mut state = SceneState::new(descriptors());
    let err = state
        .set_option("reset", OptionValue::F64(1.0))
        .unwrap_err();
    assert!(err.to_string().contains("expects bool"));
    // The stored value is untouched.
    assert_eq!(state.option("reset"), Some(&OptionValue::Bool(false)));
}

#[test]
fn mark_dirty_is_an_out_of_band_escape_hatch() {
    let mut state = SceneState::new(descriptors());
    state.clear_update_flag();
    state.mark_dirty();
    assert!(state.update_flag());
}

use super::*;

#[test]
fn test_any_has_no_standard_states() {
    assert!(RenderMode::Any.is_any());
    assert!(RenderMode::Any.standard_states().is_none());
}

#[test]
fn test_every_concrete_mode_has_states() {
    for mode in RenderMode::ALL_CONCRETE {
        assert!(!mode.is_any());
        assert!(mode.standard_states().is_some(), "{:?} should map to states", mode);
    }
}

#[test]
fn test_opaque_writes_depth_without_blending() {
    let states = RenderMode::Opaque.standard_states().unwrap();
    assert!(states.flags.contains(StateFlags::DEPTH_TEST | StateFlags::DEPTH_WRITE));
    assert!(!states.flags.contains(StateFlags::BLEND));
    assert_eq!(states.blend, BlendMode::None);
}

#[test]
fn test_transparent_blends_without_depth_write() {
    let states = RenderMode::Transparent.standard_states().unwrap();
    assert!(states.flags.contains(StateFlags::BLEND));
    assert!(states.flags.contains(StateFlags::DEPTH_TEST));
    assert!(!states.flags.contains(StateFlags::DEPTH_WRITE));
    assert_eq!(states.blend, BlendMode::Alpha);
}

#[test]
fn test_additive_uses_additive_blend() {
    let states = RenderMode::Additive.standard_states().unwrap();
    assert_eq!(states.blend, BlendMode::Additive);
    assert!(!states.flags.contains(StateFlags::DEPTH_WRITE));
}

#[test]
fn test_decal_alpha_tests() {
    let states = RenderMode::Decal.standard_states().unwrap();
    assert!(states.flags.contains(StateFlags::ALPHA_TEST));
    assert_eq!(states.alpha_ref, 127);
}

#[test]
fn test_depth_only_disables_color() {
    let states = RenderMode::DepthOnly.standard_states().unwrap();
    assert!(!states.flags.contains(StateFlags::COLOR_WRITE));
    assert!(states.flags.contains(StateFlags::DEPTH_WRITE));
}

#[test]
fn test_fullscreen_ignores_depth_and_culling() {
    let flags = RenderMode::Fullscreen.standard_states().unwrap().flags;
    assert!(!flags.intersects(StateFlags::DEPTH_TEST | StateFlags::DEPTH_WRITE | StateFlags::CULL_BACK));
}

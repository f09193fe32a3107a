use super::*;

const W: f32 = 375.0;

fn params() -> ProjectionParams {
    ProjectionParams {
        reference_width: W,
        max_visible_depth: 3,
        rotation_extrapolation: Extrapolation::Extend,
    }
}

fn approx(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn rest_layout() {
    let front = project_card(0, 0.0, &params());
    assert_eq!(front.translation_x, 0.0);
    assert_eq!(front.rotation_degrees, 0.0);
    assert_eq!(front.scale, 1.0);
    assert_eq!(front.z_index, 3);
    assert_eq!(front.alpha, 1.0);

    let middle = project_card(1, 0.0, &params());
    approx(middle.scale, 0.9);
    assert_eq!(middle.z_index, 2);
    assert_eq!(middle.translation_x, 0.0);
    assert!(middle.is_visible());

    let back = project_card(2, 0.0, &params());
    approx(back.scale, 0.8);
    assert_eq!(back.z_index, 1);
}

#[test]
fn cards_beyond_depth_are_hidden() {
    for position in [3, 4, 10] {
        let layer = project_card(position, 120.0, &params());
        assert_eq!(layer, CardLayer::HIDDEN);
        assert!(!layer.is_visible());
    }
}

#[test]
fn front_card_follows_drag_and_tilts() {
    let right = project_card(0, W, &params());
    assert_eq!(right.translation_x, W);
    approx(right.rotation_degrees, 15.0);

    let left = project_card(0, -W, &params());
    approx(left.rotation_degrees, -15.0);

    let partial = project_card(0, W / 3.0, &params());
    approx(partial.rotation_degrees, 5.0);
    assert_eq!(partial.scale, 1.0);
}

#[test]
fn rotation_keeps_growing_past_reference_width() {
    let far = project_card(0, 2.0 * W, &params());
    approx(far.rotation_degrees, 30.0);

    let fly_off = project_card(0, -1.5 * W, &params());
    approx(fly_off.rotation_degrees, -22.5);
}

#[test]
fn rotation_can_be_clamped() {
    let clamped = ProjectionParams {
        rotation_extrapolation: Extrapolation::Clamp,
        ..params()
    };
    approx(project_card(0, 2.0 * W, &clamped).rotation_degrees, 15.0);
    approx(project_card(0, -3.0 * W, &clamped).rotation_degrees, -15.0);
}

#[test]
fn background_cards_grow_toward_the_next_slot() {
    approx(project_card(1, 187.5, &params()).scale, 0.95);
    approx(project_card(1, -187.5, &params()).scale, 0.95);
    approx(project_card(2, 187.5, &params()).scale, 0.85);

    approx(project_card(1, W, &params()).scale, 1.0);
    approx(project_card(1, 3.0 * W, &params()).scale, 1.0);
    approx(project_card(2, -3.0 * W, &params()).scale, 0.9);
}

#[test]
fn background_cards_never_move_or_rotate() {
    for offset in [-500.0, -50.0, 0.0, 80.0, 900.0] {
        let layer = project_card(1, offset, &params());
        assert_eq!(layer.translation_x, 0.0);
        assert_eq!(layer.rotation_degrees, 0.0);
        assert_eq!(layer.alpha, 1.0);
    }
}

#[test]
fn deeper_stacks_keep_positive_scale() {
    let deep = ProjectionParams {
        max_visible_depth: 8,
        ..params()
    };
    let last = project_card(7, 0.0, &deep);
    approx(last.scale, 0.3);
    assert_eq!(last.z_index, 1);
    assert_eq!(project_card(0, 0.0, &deep).z_index, 8);
}

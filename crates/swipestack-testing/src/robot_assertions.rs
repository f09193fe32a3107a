//! Assertion helpers for deck robot tests.

use swipestack_ui::{CardLayer, DeckFrame, ItemId};

/// Assert `actual` lies within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{what}: {actual} is not within {tolerance} of {expected}"
    );
}

/// Assert that every visible card sits in its resting slot.
pub fn assert_at_rest(frame: &DeckFrame) {
    assert_eq!(frame.drag_offset, 0.0, "drag offset");
    assert_eq!(frame.indicators.reject, 0.0, "reject indicator");
    assert_eq!(frame.indicators.accept, 0.0, "accept indicator");
    for card in frame.visible() {
        let expected = 1.0 - 0.1 * card.relative_position as f32;
        assert_approx_eq(
            card.layer.scale,
            expected,
            1e-4,
            &format!("scale of item {}", card.item_id),
        );
        assert_eq!(card.layer.translation_x, 0.0, "translation of item {}", card.item_id);
        assert_eq!(card.layer.rotation_degrees, 0.0, "rotation of item {}", card.item_id);
    }
}

/// Layer of the card showing `item_id`.
pub fn layer_of(frame: &DeckFrame, item_id: ItemId) -> CardLayer {
    frame
        .cards
        .iter()
        .find(|card| card.item_id == item_id)
        .map(|card| card.layer)
        .unwrap_or_else(|| panic!("item {item_id} not in frame"))
}

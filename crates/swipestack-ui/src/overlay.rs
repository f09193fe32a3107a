use swipestack_animation::interpolate_clamped;

/// Opacity of the two directional indicators drawn on the front card.
///
/// `reject` fades in while dragging right, `accept` while dragging left.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct IndicatorOpacity {
    pub reject: f32,
    pub accept: f32,
}

/// Both opacities are scaled by `gate`, so an untouched card never shows them.
/// Full opacity is reached at `full_at` pixels of drag.
pub fn indicator_opacity(drag_offset: f32, gate: f32, full_at: f32) -> IndicatorOpacity {
    if gate == 0.0 || !drag_offset.is_finite() {
        return IndicatorOpacity::default();
    }
    let reject = interpolate_clamped(drag_offset, &[0.0, full_at], &[0.0, 1.0]);
    let accept = interpolate_clamped(drag_offset, &[-full_at, 0.0], &[1.0, 0.0]);
    IndicatorOpacity {
        reject: reject * gate,
        accept: accept * gate,
    }
}

#[cfg(test)]
#[path = "tests/overlay_tests.rs"]
mod tests;

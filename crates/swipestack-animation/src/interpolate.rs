//! Piecewise-linear mapping from an input range to an output range.

/// What to do with inputs outside the first/last breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Keep the slope of the outermost segment.
    #[default]
    Extend,
    /// Return the nearest boundary output.
    Clamp,
}

/// Map `value` through the breakpoints `input` → `output`.
///
/// `input` must be ascending and the same length as `output`, with at least two
/// entries. Degenerate breakpoints (length mismatch, fewer than two entries, a
/// zero-width segment) resolve to the nearest defined output instead of NaN.
pub fn interpolate(value: f32, input: &[f32], output: &[f32], extrapolation: Extrapolation) -> f32 {
    debug_assert_eq!(input.len(), output.len(), "breakpoint count mismatch");
    let len = input.len().min(output.len());
    match len {
        0 => return value,
        1 => return output[0],
        _ => {}
    }

    let segment = if value <= input[0] {
        0
    } else if value >= input[len - 1] {
        len - 2
    } else {
        // First breakpoint strictly above the value closes the segment.
        input[..len]
            .iter()
            .position(|edge| value < *edge)
            .map(|upper| upper - 1)
            .unwrap_or(len - 2)
    };

    if extrapolation == Extrapolation::Clamp {
        if value <= input[0] {
            return output[0];
        }
        if value >= input[len - 1] {
            return output[len - 1];
        }
    }

    let (in_start, in_end) = (input[segment], input[segment + 1]);
    let (out_start, out_end) = (output[segment], output[segment + 1]);
    let span = in_end - in_start;
    if span.abs() < f32::EPSILON {
        return out_start;
    }
    out_start + (value - in_start) / span * (out_end - out_start)
}

/// [`interpolate`] with [`Extrapolation::Clamp`].
pub fn interpolate_clamped(value: f32, input: &[f32], output: &[f32]) -> f32 {
    interpolate(value, input, output, Extrapolation::Clamp)
}

#[cfg(test)]
#[path = "tests/interpolate_tests.rs"]
mod tests;

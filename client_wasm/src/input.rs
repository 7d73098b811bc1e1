//! Pointer and keyboard input handling

/// Key that serves or restarts, as reported by `KeyboardEvent.key`
pub fn is_serve_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar")
}

/// Map a pointer's viewport Y onto the field's vertical axis.
///
/// The canvas may be scaled by CSS, so the offset from the canvas top is
/// rescaled from its displayed height to the field height. The result is not
/// clamped; the simulation clamps the paddle itself.
pub fn pointer_to_field_y(client_y: f64, rect_top: f64, rect_height: f64, field_height: f32) -> f32 {
    if rect_height <= 0.0 {
        return field_height / 2.0;
    }
    ((client_y - rect_top) * f64::from(field_height) / rect_height) as f32
}

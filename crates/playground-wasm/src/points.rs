//! Point rotation WASM bindings.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const result = parse_and_rotate(textarea.value, 30.0);
//! if (result !== undefined) {
//!   plot(result.original, result.rotated); // [{x, y}, ...]
//! }
//! ```

use playground_core::points::{parse_points, RotationMatrix, RotationRequest, RotationResult};
use wasm_bindgen::prelude::*;

/// Parse the point text and rotate it, for the "Apply" button.
///
/// Returns `undefined` when no line parsed as a point, in which case nothing
/// should be plotted. Otherwise returns `{ original, rotated, matrix }`.
#[wasm_bindgen]
pub fn parse_and_rotate(text: &str, angle_degrees: f64) -> Result<JsValue, JsValue> {
    match rotate_text(text, angle_degrees) {
        Some(result) => serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize points: {}", e))),
        None => Ok(JsValue::UNDEFINED),
    }
}

/// Count the lines that parse as points (for the "n points" hint).
#[wasm_bindgen]
pub fn count_points(text: &str) -> usize {
    parse_points(text).len()
}

/// The rotation matrix for an angle, as `[cos, -sin, sin, cos]`.
#[wasm_bindgen]
pub fn rotation_matrix(angle_degrees: f64) -> Vec<f64> {
    let m = RotationMatrix::from_degrees(angle_degrees).m;
    vec![m[0][0], m[0][1], m[1][0], m[1][1]]
}

fn rotate_text(text: &str, angle_degrees: f64) -> Option<RotationResult> {
    RotationRequest::new(angle_degrees).apply(&parse_points(text))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_parse_and_rotate_empty_is_undefined() {
        assert!(parse_and_rotate("", 45.0).unwrap().is_undefined());
    }

    #[wasm_bindgen_test]
    fn test_parse_and_rotate_round_trips_through_serde() {
        let value = parse_and_rotate("1,0", 90.0).unwrap();
        let result: RotationResult = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(result.rotated.len(), 1);
        assert!((result.rotated[0].y - 1.0).abs() < 1e-9);
    }
}

//! Placement validation: checks a furnished room against the Feng Shui rules
//! and produces ordered feedback for the learner.

use crate::error::{CoachError, Result};
use crate::grid::{Item, Position};
use crate::predicates::{has_clear_view, is_aligned, is_facing};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

pub const DOOR_PERIMETER_MSG: &str = "The door should be placed along a wall of the room.";
pub const BED_DOOR_ALIGNED_MSG: &str = "The bed should not be directly aligned with the door.";
pub const MIRROR_FACES_BED_MSG: &str = "The mirror should not face the bed.";
pub const MIRROR_FACES_DOOR_MSG: &str = "The mirror should not face the door.";
pub const DESK_VIEW_MSG: &str = "The desk should have a clear view of the door.";
pub const SUCCESS_MSG: &str = "Great job! Your room has good Feng Shui energy flow.";

/// Substring that identifies the success message in a feedback list.
pub const SUCCESS_MARKER: &str = "Great job";

/// Feedback for a required item that was not placed.
pub fn missing_item_message(item: Item) -> String {
    format!("You must place a {} in the room.", item)
}

/// Furniture positions submitted by the simulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementRequest {
    items: BTreeMap<Item, Position>,
}

impl PlacementRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, item: Item, position: Position) -> Self {
        self.items.insert(item, position);
        self
    }

    pub fn insert(&mut self, item: Item, position: Position) {
        self.items.insert(item, position);
    }

    pub fn get(&self, item: Item) -> Option<&Position> {
        self.items.get(&item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Build a request from a JSON object keyed by item name.
    ///
    /// Keys that are not furniture names are ignored. A furniture key whose
    /// value is not `{row: int, col: int}` is a [`CoachError::MalformedRequest`].
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            CoachError::MalformedRequest("placement must be a JSON object".to_string())
        })?;

        let mut request = Self::new();
        for (key, raw) in object {
            let Some(item) = Item::from_str(key) else {
                tracing::debug!("Ignoring unknown placement key '{}'", key);
                continue;
            };
            let position: Position = serde_json::from_value(raw.clone()).map_err(|e| {
                CoachError::MalformedRequest(format!("invalid position for {}: {}", item, e))
            })?;
            request.insert(item, position);
        }
        Ok(request)
    }

    /// Items whose positions fall outside the grid.
    pub fn out_of_bounds(&self) -> Vec<(Item, Position)> {
        self.items
            .iter()
            .filter(|(_, pos)| !pos.in_bounds())
            .map(|(item, pos)| (*item, *pos))
            .collect()
    }
}

/// Outcome of validating a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub feedback: Vec<String>,
}

impl ValidationResult {
    /// Valid only when the feedback is exactly the single success message.
    fn from_feedback(feedback: Vec<String>) -> Self {
        let valid = feedback.len() == 1 && feedback[0].contains(SUCCESS_MARKER);
        Self { valid, feedback }
    }
}

/// Evaluate the room rules in their fixed order.
///
/// Missing furniture short-circuits: only the missing-item messages are
/// returned and no spatial rule runs.
pub fn validate(placement: &PlacementRequest) -> ValidationResult {
    let (door, bed, desk, mirror) = match (
        placement.get(Item::Door),
        placement.get(Item::Bed),
        placement.get(Item::Desk),
        placement.get(Item::Mirror),
    ) {
        (Some(door), Some(bed), Some(desk), Some(mirror)) => (door, bed, desk, mirror),
        _ => {
            let missing = Item::REQUIRED
                .iter()
                .filter(|item| placement.get(**item).is_none())
                .map(|item| missing_item_message(*item))
                .collect();
            return ValidationResult::from_feedback(missing);
        }
    };

    let mut feedback = Vec::new();

    if !door.on_perimeter() {
        feedback.push(DOOR_PERIMETER_MSG.to_string());
    }
    if is_aligned(bed, door) {
        feedback.push(BED_DOOR_ALIGNED_MSG.to_string());
    }
    if is_facing(mirror, bed) {
        feedback.push(MIRROR_FACES_BED_MSG.to_string());
    }
    if is_facing(mirror, door) {
        feedback.push(MIRROR_FACES_DOOR_MSG.to_string());
    }
    if !has_clear_view(desk, door) {
        feedback.push(DESK_VIEW_MSG.to_string());
    }

    if feedback.is_empty() {
        feedback.push(SUCCESS_MSG.to_string());
    }

    ValidationResult::from_feedback(feedback)
}

/// Placement validation with the configured input policy applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementValidator {
    strict_bounds: bool,
}

impl PlacementValidator {
    pub fn new(strict_bounds: bool) -> Self {
        Self { strict_bounds }
    }

    /// Parse a JSON payload and validate it.
    ///
    /// With strict bounds enabled, any furniture outside the grid is rejected
    /// as malformed instead of being evaluated.
    pub fn evaluate(&self, payload: &Value) -> Result<ValidationResult> {
        let request = PlacementRequest::from_json(payload)?;

        if self.strict_bounds {
            if let Some((item, pos)) = request.out_of_bounds().first() {
                return Err(CoachError::MalformedRequest(format!(
                    "{} at {} is outside the room grid",
                    item, pos
                )));
            }
        }

        let result = validate(&request);
        tracing::debug!(
            "Validated placement of {} items: valid={}, {} feedback entries",
            request.len(),
            result.valid,
            result.feedback.len()
        );
        Ok(result)
    }

    /// Validate a layout saved as a JSON file.
    pub fn evaluate_file(&self, path: &Path) -> Result<ValidationResult> {
        let raw = std::fs::read_to_string(path)?;
        let payload: Value = serde_json::from_str(&raw).map_err(|e| {
            CoachError::MalformedRequest(format!("{} is not valid JSON: {}", path.display(), e))
        })?;
        self.evaluate(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn good_room() -> PlacementRequest {
        PlacementRequest::new()
            .with(Item::Door, Position::new(0, 3))
            .with(Item::Bed, Position::new(4, 4))
            .with(Item::Desk, Position::new(4, 2))
            .with(Item::Mirror, Position::new(7, 7))
    }

    #[test]
    fn test_good_room_passes() {
        let result = validate(&good_room());
        assert!(result.valid);
        assert_eq!(result.feedback, vec![SUCCESS_MSG.to_string()]);
    }

    #[test]
    fn test_bed_aligned_with_door() {
        let room = good_room()
            .with(Item::Door, Position::new(0, 0))
            .with(Item::Bed, Position::new(0, 5));
        let result = validate(&room);
        assert!(!result.valid);
        assert!(result.feedback.contains(&BED_DOOR_ALIGNED_MSG.to_string()));
    }

    #[test]
    fn test_missing_items_short_circuit() {
        // Door in the middle of the room would fail the perimeter rule if it ran.
        let room = PlacementRequest::new()
            .with(Item::Door, Position::new(3, 3))
            .with(Item::Desk, Position::new(3, 3));
        let result = validate(&room);
        assert!(!result.valid);
        assert_eq!(
            result.feedback,
            vec![
                "You must place a bed in the room.".to_string(),
                "You must place a mirror in the room.".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_count_matches_feedback_length() {
        for mask in 0u8..15 {
            let mut room = PlacementRequest::new();
            for (i, item) in Item::REQUIRED.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    room.insert(*item, Position::new(0, 0));
                }
            }
            let missing = 4 - mask.count_ones() as usize;
            let result = validate(&room);
            assert!(!result.valid);
            assert_eq!(result.feedback.len(), missing, "mask {:04b}", mask);
        }
    }

    #[test]
    fn test_missing_reported_in_fixed_order() {
        let result = validate(&PlacementRequest::new());
        assert_eq!(
            result.feedback,
            vec![
                "You must place a door in the room.".to_string(),
                "You must place a bed in the room.".to_string(),
                "You must place a desk in the room.".to_string(),
                "You must place a mirror in the room.".to_string(),
            ]
        );
    }

    #[test]
    fn test_all_violations_in_rule_order() {
        let room = PlacementRequest::new()
            .with(Item::Door, Position::new(1, 1))
            .with(Item::Bed, Position::new(1, 6))
            .with(Item::Desk, Position::new(7, 7))
            .with(Item::Mirror, Position::new(1, 6));
        let result = validate(&room);
        assert!(!result.valid);
        assert_eq!(
            result.feedback,
            vec![
                DOOR_PERIMETER_MSG.to_string(),
                BED_DOOR_ALIGNED_MSG.to_string(),
                MIRROR_FACES_BED_MSG.to_string(),
                MIRROR_FACES_DOOR_MSG.to_string(),
                DESK_VIEW_MSG.to_string(),
            ]
        );
    }

    #[test]
    fn test_single_violation_is_not_valid() {
        // One message but not the success one.
        let room = good_room()
            .with(Item::Desk, Position::new(6, 7))
            .with(Item::Door, Position::new(0, 1));
        let result = validate(&room);
        assert_eq!(result.feedback, vec![DESK_VIEW_MSG.to_string()]);
        assert!(!result.valid);
    }

    #[test]
    fn test_from_json_ignores_unknown_keys() {
        let payload = json!({
            "door": {"row": 0, "col": 3},
            "bed": {"row": 4, "col": 4},
            "desk": {"row": 4, "col": 2},
            "mirror": {"row": 7, "col": 7},
            "window": "not even a position",
        });
        let request = PlacementRequest::from_json(&payload).unwrap();
        assert_eq!(request, good_room());
    }

    #[test]
    fn test_from_json_rejects_bad_coordinates() {
        let missing_col = json!({"door": {"row": 0}});
        assert!(matches!(
            PlacementRequest::from_json(&missing_col),
            Err(CoachError::MalformedRequest(_))
        ));

        let text_row = json!({"bed": {"row": "four", "col": 4}});
        assert!(matches!(
            PlacementRequest::from_json(&text_row),
            Err(CoachError::MalformedRequest(_))
        ));

        let fractional = json!({"desk": {"row": 1.5, "col": 4}});
        assert!(matches!(
            PlacementRequest::from_json(&fractional),
            Err(CoachError::MalformedRequest(_))
        ));

        assert!(matches!(
            PlacementRequest::from_json(&json!([1, 2])),
            Err(CoachError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_permissive_bounds_by_default() {
        let payload = json!({
            "door": {"row": -1, "col": 3},
            "bed": {"row": 4, "col": 4},
            "desk": {"row": 4, "col": 2},
            "mirror": {"row": 9, "col": 9},
        });
        let result = PlacementValidator::default().evaluate(&payload).unwrap();
        // Off-grid door is not on a wall.
        assert_eq!(result.feedback, vec![DOOR_PERIMETER_MSG.to_string()]);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let payload = json!({
            "door": {"row": 0, "col": 3},
            "bed": {"row": 4, "col": 4},
            "desk": {"row": i64::MIN, "col": 2},
            "mirror": {"row": 7, "col": 7},
        });
        let result = PlacementValidator::default().evaluate(&payload).unwrap();
        assert!(!result.valid);
        assert_eq!(result.feedback, vec![DESK_VIEW_MSG.to_string()]);

        let payload = json!({
            "door": {"row": i64::MAX, "col": i64::MIN},
            "bed": {"row": 4, "col": 4},
            "desk": {"row": 4, "col": 2},
            "mirror": {"row": 7, "col": 7},
        });
        let result = PlacementValidator::default().evaluate(&payload).unwrap();
        assert_eq!(
            result.feedback,
            vec![DOOR_PERIMETER_MSG.to_string(), DESK_VIEW_MSG.to_string()]
        );
    }

    #[test]
    fn test_coordinates_beyond_i64_are_malformed() {
        for raw in [
            r#"{"door": {"row": 18446744073709551616, "col": 3}}"#,
            r#"{"door": {"row": 18446744073709551615, "col": 3}}"#,
            r#"{"bed": {"row": 4, "col": 1e30}}"#,
        ] {
            let payload: Value = serde_json::from_str(raw).unwrap();
            let err = PlacementValidator::default().evaluate(&payload).unwrap_err();
            assert!(matches!(err, CoachError::MalformedRequest(_)), "{}", raw);
        }
    }

    fn layout_file(payload: &Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, payload.to_string().as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_evaluate_file() {
        let good = layout_file(&json!({
            "door": {"row": 0, "col": 3},
            "bed": {"row": 4, "col": 4},
            "desk": {"row": 4, "col": 2},
            "mirror": {"row": 7, "col": 7},
        }));
        let result = PlacementValidator::default().evaluate_file(good.path()).unwrap();
        assert!(result.valid);

        let aligned = layout_file(&json!({
            "door": {"row": 0, "col": 0},
            "bed": {"row": 0, "col": 5},
            "desk": {"row": 3, "col": 2},
            "mirror": {"row": 6, "col": 7},
        }));
        let result = PlacementValidator::default().evaluate_file(aligned.path()).unwrap();
        assert!(!result.valid);

        let off_grid = layout_file(&json!({
            "door": {"row": 0, "col": 3},
            "bed": {"row": 4, "col": 4},
            "desk": {"row": 4, "col": 2},
            "mirror": {"row": 7, "col": 12},
        }));
        assert!(PlacementValidator::default().evaluate_file(off_grid.path()).is_ok());
        assert!(matches!(
            PlacementValidator::new(true).evaluate_file(off_grid.path()),
            Err(CoachError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_evaluate_file_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{door").unwrap();
        assert!(matches!(
            PlacementValidator::default().evaluate_file(file.path()),
            Err(CoachError::MalformedRequest(_))
        ));
        assert!(matches!(
            PlacementValidator::default().evaluate_file(Path::new("/no/such/room.json")),
            Err(CoachError::Io(_))
        ));
    }

    #[test]
    fn test_strict_bounds_rejects_off_grid() {
        let payload = json!({
            "door": {"row": 0, "col": 3},
            "bed": {"row": 4, "col": 4},
            "desk": {"row": 4, "col": 2},
            "mirror": {"row": 9, "col": 9},
        });
        let err = PlacementValidator::new(true).evaluate(&payload).unwrap_err();
        assert!(matches!(err, CoachError::MalformedRequest(ref msg) if msg.contains("mirror")));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(validate(&good_room())).unwrap();
        assert_eq!(value["valid"], json!(true));
        assert_eq!(value["feedback"][0], json!(SUCCESS_MSG));
    }
}

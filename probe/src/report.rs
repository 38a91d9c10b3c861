use spatial::{FieldBounds, Rotation, Vector};

use crate::state::Frame;

/// Values derived from a single [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub bounded_position: Vector,
    pub in_field: bool,
    pub speed: f64,
    pub distance_to_target: f64,
    pub heading_correction: f64,
    pub forward: Vector,
    pub normalized_rotation: Rotation,
}

impl Report {
    pub fn from_frame(frame: &Frame, bounds: &FieldBounds) -> Self {
        let car = &frame.car;
        let forward = car.rotation.as_vector();
        let to_target = frame.target - car.position;

        Self {
            bounded_position: car.position.bounded_within(bounds),
            in_field: bounds.contains(&car.position),
            speed: car.velocity.length(),
            distance_to_target: car.position.distance(&frame.target),
            heading_correction: forward.angle_2d(&to_target),
            forward,
            normalized_rotation: car.rotation.normalized(),
        }
    }

    /// Label and rendered value for every field, in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("bounded position", self.bounded_position.to_string()),
            ("in field", self.in_field.to_string()),
            ("speed", format!("{:.3}", self.speed)),
            ("distance to target", format!("{:.3}", self.distance_to_target)),
            ("heading correction", format!("{:.4} rad", self.heading_correction)),
            ("forward", self.forward.to_string()),
            ("normalized rotation", self.normalized_rotation.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CarState;
    use std::f64::consts::FRAC_PI_2;

    fn frame(json: &str) -> Frame {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_report_for_car_inside_field() {
        let frame = frame(
            r#"{
                "car": {
                    "position": {"x": 0.0, "y": 0.0, "z": 17.0},
                    "velocity": {"x": 3.0, "y": 4.0, "z": 0.0},
                    "rotation": {"pitch": 0.0, "yaw": 0.0, "roll": 0.0}
                },
                "target": {"x": 0.0, "y": 100.0, "z": 17.0}
            }"#,
        );
        let report = Report::from_frame(&frame, &FieldBounds::STANDARD);

        assert!(report.in_field);
        assert_eq!(report.bounded_position, Vector::new(0.0, 0.0, 17.0));
        assert_eq!(report.speed, 5.0);
        assert_eq!(report.distance_to_target, 100.0);
        assert_eq!(report.forward, Vector::new(1.0, 0.0, 0.0));
        // Facing +x reads as PI under the mirrored heading, the target as PI/2.
        assert!((report.heading_correction + FRAC_PI_2).abs() < 1e-12);
        assert_eq!(report.normalized_rotation, Rotation::default());
    }

    #[test]
    fn test_report_for_car_outside_field() {
        let car = CarState::new(
            Vector::new(5000.0, 0.0, -20.0),
            Vector::default(),
            Rotation::new(0.0, 70000.0, 0.0),
        );
        let frame = Frame {
            car,
            target: Vector::new(5000.0, 0.0, -20.0),
        };
        let report = Report::from_frame(&frame, &FieldBounds::STANDARD);

        assert!(!report.in_field);
        assert_eq!(report.bounded_position, Vector::new(4096.0, 0.0, 0.0));
        assert_eq!(report.distance_to_target, 0.0);
        assert_eq!(report.normalized_rotation, Rotation::new(0.0, 4464.0, 0.0));
    }

    #[test]
    fn test_velocity_and_rotation_default() {
        let frame = frame(
            r#"{"car": {"position": {"x": 1, "y": 2, "z": 3}}, "target": {"x": 0, "y": 0, "z": 0}}"#,
        );

        assert_eq!(frame.car.velocity, Vector::default());
        assert_eq!(frame.car.rotation, Rotation::default());
    }

    #[test]
    fn test_missing_target_is_rejected() {
        let parsed = serde_json::from_str::<Frame>(
            r#"{"car": {"position": {"x": 1, "y": 2, "z": 3}}}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_rows() {
        let frame = Frame {
            car: CarState::new(Vector::default(), Vector::default(), Rotation::default()),
            target: Vector::new(3.0, 4.0, 0.0),
        };
        let rows = Report::from_frame(&frame, &FieldBounds::default()).rows();

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ("bounded position", "Vector(0.0, 0.0, 0.0)".to_string()));
        assert_eq!(rows[3], ("distance to target", "5.000".to_string()));
    }
}

//! Conversions between the earth frame and the body frame.
use nalgebra::{Matrix3, Rotation3};

/// Rotation taking body-frame vectors to the earth frame.
///
/// The Euler angles are applied in Z-Y-X order, i.e. `Rz(yaw) Ry(pitch) Rx(roll)`.
pub fn body_to_earth_frame(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    Rotation3::from_euler_angles(roll, pitch, yaw).into_inner()
}

/// Rotation taking earth-frame vectors to the body frame.
pub fn earth_to_body_frame(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    body_to_earth_frame(roll, pitch, yaw).transpose()
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::Vector3;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: Vector3<f64>, b: Vector3<f64>) {
        assert!((a - b).norm() < 1e-12, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_level_attitude_is_identity() {
        assert_eq!(earth_to_body_frame(0.0, 0.0, 0.0), Matrix3::identity());
    }

    #[test]
    fn test_yaw_turns_body_x_towards_earth_y() {
        let r = body_to_earth_frame(0.0, 0.0, FRAC_PI_2);
        assert_close(r * Vector3::x(), Vector3::y());
    }

    #[test]
    fn test_roll_tilts_body_z_away_from_earth_y() {
        let r = body_to_earth_frame(FRAC_PI_2, 0.0, 0.0);
        assert_close(r * Vector3::z(), -Vector3::y());
    }

    #[test]
    fn test_frames_are_inverse() {
        let (roll, pitch, yaw) = (0.3, -0.2, 1.1);
        let v = Vector3::new(1.0, -2.0, 0.5);
        let body = earth_to_body_frame(roll, pitch, yaw) * v;
        let back = body_to_earth_frame(roll, pitch, yaw) * body;
        assert_close(back, v);
    }
}

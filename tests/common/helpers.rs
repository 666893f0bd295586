use std::f64::consts::TAU;

/// Field size for `angular_velocity` under the default wind settings
pub fn expected_particle_count(angular_velocity: f64) -> usize {
    if angular_velocity > 2.0 {
        ((angular_velocity * 4.0).round() as usize).min(150)
    } else {
        0
    }
}

/// Angle of `point` around `center` in [0, 2π), screen coordinates
pub fn angle_about(center: glam::Vec2, point: glam::Vec2) -> f64 {
    let d = point - center;
    (d.y as f64).atan2(d.x as f64).rem_euclid(TAU)
}

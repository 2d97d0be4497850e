// Math utilities shared by the hero core and the physics host

/// Sign of a value: -1.0, 0.0 or 1.0
///
/// Unlike `f32::signum`, zero (of either sign) maps to 0.0 so that a body at
/// rest never counts as moving in either direction.
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Move `value` toward zero by at most `amount`, never overshooting
pub fn approach_zero(value: f32, amount: f32) -> f32 {
    if value > 0.0 {
        (value - amount).max(0.0)
    } else if value < 0.0 {
        (value + amount).min(0.0)
    } else {
        0.0
    }
}

/// Clamp a value to the symmetric range [-limit, limit]
pub fn clamp_abs(value: f32, limit: f32) -> f32 {
    value.clamp(-limit, limit)
}

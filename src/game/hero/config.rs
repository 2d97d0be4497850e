// Hero tuning - one fixed set of constants shared by every spawn
//
// Units are pixels and seconds in screen space: +x is right, +y is DOWN,
// so upward speeds are negative.

/// Movement, jump and body tuning for the hero
#[derive(Debug, Clone, PartialEq)]
pub struct HeroConfig {
    // Horizontal movement
    /// Horizontal acceleration while a direction is held (units/s²)
    pub run_acceleration: f32,
    /// Horizontal deceleration while no acceleration is applied (units/s²)
    pub drag_x: f32,
    /// Maximum horizontal speed
    pub max_speed_x: f32,
    /// Maximum vertical speed (both directions)
    pub max_speed_y: f32,

    // Jumping
    /// Vertical velocity set on takeoff
    pub jump_speed: f32,
    /// Vertical velocity set by the mid-air flip
    pub flip_speed: f32,
    /// Releasing jump while rising faster than this cuts the jump short
    pub jump_cutoff_threshold: f32,
    /// Vertical velocity the cut-short jump is clamped to
    pub jump_cutoff_speed: f32,

    // Death
    /// Vertical velocity of the death pop
    pub death_pop_speed: f32,

    // Body
    /// Collider width
    pub body_width: f32,
    /// Collider height
    pub body_height: f32,
    /// Collider x offset inside the sprite frame when facing right
    pub body_offset_right: f32,
    /// Collider x offset inside the sprite frame when facing left
    pub body_offset_left: f32,
    /// Collider y offset inside the sprite frame
    pub body_offset_y: f32,

    // Presentation keys
    /// Prefix of every animation clip key ("hero-" + state name)
    pub clip_prefix: &'static str,
    /// Sound played on takeoff
    pub jump_sound: &'static str,
}

/// The hero's tuning
pub const BASE_CONFIG: HeroConfig = HeroConfig {
    run_acceleration: 1000.0,
    drag_x: 1000.0,
    max_speed_x: 250.0,
    max_speed_y: 400.0,

    jump_speed: -400.0,
    flip_speed: -300.0,
    jump_cutoff_threshold: -150.0,
    jump_cutoff_speed: -160.0,

    death_pop_speed: -500.0,

    body_width: 12.0,
    body_height: 40.0,
    body_offset_right: 12.0,
    body_offset_left: 8.0,
    body_offset_y: 23.0,

    clip_prefix: "hero-",
    jump_sound: "jump",
};

impl Default for HeroConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl HeroConfig {
    /// Collider x offset for a facing direction
    pub fn body_offset_x(&self, facing_left: bool) -> f32 {
        if facing_left {
            self.body_offset_left
        } else {
            self.body_offset_right
        }
    }
}

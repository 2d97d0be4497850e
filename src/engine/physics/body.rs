use super::collision::CollisionLayer;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Rigid body and collider presets for the arena
///
/// Positions are body centers in screen space (+y down).
pub mod presets {
    use super::*;

    /// The hero's body: dynamic, rotation locked, never sleeps
    pub fn hero_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::dynamic()
            .translation(vector![x, y])
            .lock_rotations()
            .gravity_scale(1.0)
            .can_sleep(false)
            .ccd_enabled(true)
            .build()
    }

    /// The hero's collider: an axis-aligned box, no friction, no bounce
    ///
    /// Horizontal speed is entirely driven by arcade acceleration and drag,
    /// so contact friction would only fight it.
    pub fn hero_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .collision_groups(CollisionLayer::Hero.to_interaction_groups())
            .friction(0.0)
            .restitution(0.0)
            .density(1.0)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build()
    }

    /// A fixed body for level geometry
    pub fn fixed_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::fixed().translation(vector![x, y]).build()
    }

    /// A solid ground block
    pub fn ground_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .collision_groups(CollisionLayer::Ground.to_interaction_groups())
            .friction(0.0)
            .restitution(0.0)
            .build()
    }

    /// A solid world edge
    pub fn bounds_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .collision_groups(CollisionLayer::Bounds.to_interaction_groups())
            .friction(0.0)
            .restitution(0.0)
            .build()
    }

    /// A hazard sensor: reports overlaps, never blocks
    pub fn hazard_collider(width: Real, height: Real) -> Collider {
        ColliderBuilder::cuboid(width / 2.0, height / 2.0)
            .collision_groups(CollisionLayer::Hazard.to_interaction_groups())
            .sensor(true)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build()
    }
}

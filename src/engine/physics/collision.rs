use rapier2d::prelude::*;
use std::sync::{Arc, Mutex};

/// Collision layers of the arena
///
/// A collider's membership is its layer; what it collides with is an explicit
/// filter mask so the hero can drop layers one by one when it dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionLayer {
    /// The player character
    Hero = 0b0001,

    /// Walkable level geometry
    Ground = 0b0010,

    /// Left, right and bottom edges of the world
    Bounds = 0b0100,

    /// Spikes and other instant-kill sensors
    Hazard = 0b1000,
}

impl CollisionLayer {
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Default filter for colliders on this layer
    pub fn default_filter(self) -> u32 {
        match self {
            CollisionLayer::Hero => {
                CollisionLayer::Ground.bits()
                    | CollisionLayer::Bounds.bits()
                    | CollisionLayer::Hazard.bits()
            }
            CollisionLayer::Ground | CollisionLayer::Bounds | CollisionLayer::Hazard => {
                CollisionLayer::Hero.bits()
            }
        }
    }

    /// Interaction groups with the default filter
    pub fn to_interaction_groups(self) -> InteractionGroups {
        self.with_filter(self.default_filter())
    }

    /// Interaction groups with a custom filter mask
    pub fn with_filter(self, filter: u32) -> InteractionGroups {
        InteractionGroups::new(
            Group::from_bits_truncate(self.bits()),
            Group::from_bits_truncate(filter),
        )
    }
}

/// Custom collision event for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// Two colliders started touching or overlapping
    Started {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },

    /// Two colliders stopped touching or overlapping
    Stopped {
        collider1: ColliderHandle,
        collider2: ColliderHandle,
    },
}

impl CollisionEvent {
    /// If this is a start event involving `collider`, the other collider
    pub fn started_with(&self, collider: ColliderHandle) -> Option<ColliderHandle> {
        match *self {
            CollisionEvent::Started {
                collider1,
                collider2,
            } if collider1 == collider => Some(collider2),
            CollisionEvent::Started {
                collider1,
                collider2,
            } if collider2 == collider => Some(collider1),
            _ => None,
        }
    }
}

/// Queue for storing collision events during a physics step
pub struct CollisionEventQueue {
    events: Arc<Mutex<Vec<CollisionEvent>>>,
}

impl CollisionEventQueue {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::with_capacity(16))),
        }
    }

    /// Clear all events (call at start of physics step)
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }

    /// Get all collision events from the last step
    pub fn events(&self) -> Vec<CollisionEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: CollisionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Default for CollisionEventQueue {
    fn default() -> Self {
        Self::new()
    }
}

// rapier2d calls into the queue while stepping
impl EventHandler for CollisionEventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: rapier2d::prelude::CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        match event {
            rapier2d::prelude::CollisionEvent::Started(h1, h2, _flags) => {
                self.push(CollisionEvent::Started {
                    collider1: h1,
                    collider2: h2,
                });
            }
            rapier2d::prelude::CollisionEvent::Stopped(h1, h2, _flags) => {
                self.push(CollisionEvent::Stopped {
                    collider1: h1,
                    collider2: h2,
                });
            }
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

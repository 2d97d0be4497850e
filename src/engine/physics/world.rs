// Thin wrapper over the rapier pipeline
//
// One `step` is one simulation tick. Everything is in screen space: +y is down,
// so gravity is positive and upward speeds are negative.

use rapier2d::prelude::*;

use super::collision::{CollisionEvent as ArenaCollisionEvent, CollisionEventQueue};
use crate::engine::game_loop::FIXED_TIMESTEP;

/// Default downward gravity (units/s²)
pub const DEFAULT_GRAVITY: Real = 1000.0;

/// Rigid bodies, colliders and the solver state that steps them
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    params: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    // The arena has no joints, rapier still needs the sets
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd: CCDSolver,
    /// Refreshed by every step
    queries: QueryPipeline,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    events: CollisionEventQueue,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, DEFAULT_GRAVITY])
    }

    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let params = IntegrationParameters {
            dt: FIXED_TIMESTEP,
            ..IntegrationParameters::default()
        };

        Self {
            gravity,
            params,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd: CCDSolver::new(),
            queries: QueryPipeline::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            events: CollisionEventQueue::new(),
        }
    }

    /// Advance one tick; collision events from the previous tick are dropped
    pub fn step(&mut self) {
        self.events.clear();

        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd,
            Some(&mut self.queries),
            &(),
            &self.events,
        );
    }

    pub fn add_rigid_body(&mut self, body: RigidBody) -> RigidBodyHandle {
        self.bodies.insert(body)
    }

    pub fn add_collider(&mut self, collider: Collider, parent: RigidBodyHandle) -> ColliderHandle {
        self.colliders
            .insert_with_parent(collider, parent, &mut self.bodies)
    }

    /// Remove a body together with its colliders
    pub fn remove_rigid_body(&mut self, handle: RigidBodyHandle) {
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    pub fn get_collider_mut(&mut self, handle: ColliderHandle) -> Option<&mut Collider> {
        self.colliders.get_mut(handle)
    }

    /// First collider hit by a ray, with the distance along `direction`
    pub fn raycast(
        &self,
        origin: Vector<Real>,
        direction: Vector<Real>,
        max_distance: Real,
        solid: bool,
        filter: QueryFilter,
    ) -> Option<(ColliderHandle, Real)> {
        let ray = Ray::new(point![origin.x, origin.y], direction);
        self.queries
            .cast_ray(&self.bodies, &self.colliders, &ray, max_distance, solid, filter)
    }

    /// Contacts and sensor overlaps that started or stopped during the last step
    pub fn collision_events(&self) -> Vec<ArenaCollisionEvent> {
        self.events.events()
    }

    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }

    /// Seconds per step
    pub fn timestep(&self) -> Real {
        self.params.dt
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

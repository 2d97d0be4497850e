// Arena - the level, the hero's body and the plumbing between them
//
// The hero core never touches rapier. Each tick the arena senses the body,
// hands the controller a frame, applies the effects it gets back, then steps
// the world and reports spike hits.

use glam::Vec2;
use log::{debug, info};
use rapier2d::prelude::{nalgebra, vector};

use crate::engine::input::{Action, ActionState};
use crate::engine::physics::{
    presets, ArcadeMotion, ColliderHandle, CollisionLayer, PhysicsWorld, QueryFilter,
    RigidBodyHandle,
};
use crate::game::hero::{HeroConfig, HeroController, HeroEffect, HeroFrame, HeroInput};

/// Length of the downward ground probe below the hero's feet
const GROUND_PROBE: f32 = 2.0;

/// Vertical speeds below this are solver jitter of a resting body
const REST_SPEED: f32 = 1.0;

/// Thickness of the world edge colliders
const BOUNDS_THICKNESS: f32 = 32.0;

/// Axis-aligned block: top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Block {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Level layout
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaConfig {
    /// Downward gravity (units/s²)
    pub gravity: f32,
    pub width: f32,
    pub height: f32,
    /// Solid level geometry
    pub ground: &'static [Block],
    /// Instant-kill sensors
    pub spikes: &'static [Block],
    /// Where the hero's feet are placed on (re)spawn
    pub spawn: Vec2,
    /// How far below the bottom of the view a dead hero falls before respawning
    pub respawn_margin: f32,
}

/// Two ground blocks with a pit between them and a spike strip on the far one
pub const BASE_ARENA: ArenaConfig = ArenaConfig {
    gravity: 1000.0,
    width: 960.0,
    height: 480.0,
    ground: &[
        Block::new(0.0, 400.0, 560.0, 80.0),
        Block::new(660.0, 400.0, 300.0, 80.0),
    ],
    spikes: &[Block::new(760.0, 384.0, 32.0, 16.0)],
    spawn: Vec2::new(64.0, 400.0),
    respawn_margin: 50.0,
};

impl Default for ArenaConfig {
    fn default() -> Self {
        BASE_ARENA
    }
}

impl ArenaConfig {
    /// Left, right and bottom edges; the top is open
    pub fn bounds(&self) -> [Block; 3] {
        let t = BOUNDS_THICKNESS;
        [
            Block::new(-t, -self.height, t, self.height * 2.0),
            Block::new(self.width, -self.height, t, self.height * 2.0),
            Block::new(-t, self.height, self.width + 2.0 * t, t),
        ]
    }
}

/// Map the action state to the hero's per-tick input
pub fn hero_input(actions: &ActionState) -> HeroInput {
    let jump_pressed = actions.just_pressed(Action::Jump);
    HeroInput {
        left: actions.is_pressed(Action::MoveLeft),
        right: actions.is_pressed(Action::MoveRight),
        jump_pressed,
        // A tap that went down and up between ticks still counts for its tick
        jump_held: jump_pressed || actions.is_pressed(Action::Jump),
    }
}

/// The hero's physical side
struct HeroBody {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    motion: ArcadeMotion,
    /// Layers the hero currently collides with
    filter: u32,
    /// Collider x offset inside the sprite frame
    offset_x: f32,
}

impl HeroBody {
    fn spawn(world: &mut PhysicsWorld, arena: &ArenaConfig, config: &HeroConfig) -> Self {
        let center = Vec2::new(arena.spawn.x, arena.spawn.y - config.body_height / 2.0);
        let body = world.add_rigid_body(presets::hero_body(center.x, center.y));
        let collider = world.add_collider(
            presets::hero_collider(config.body_width, config.body_height),
            body,
        );

        Self {
            body,
            collider,
            motion: ArcadeMotion::new(
                config.drag_x,
                Vec2::new(config.max_speed_x, config.max_speed_y),
            ),
            filter: CollisionLayer::Hero.default_filter(),
            offset_x: config.body_offset_x(false),
        }
    }
}

/// The playable level
pub struct Arena {
    config: ArenaConfig,
    hero_config: HeroConfig,
    world: PhysicsWorld,
    hazards: Vec<ColliderHandle>,
    controller: HeroController,
    hero: HeroBody,
    /// Clip most recently requested by the hero
    clip: String,
    respawns: u32,
}

impl Arena {
    pub fn new(config: ArenaConfig, hero_config: HeroConfig) -> Self {
        let mut world = PhysicsWorld::with_gravity(vector![0.0, config.gravity]);

        for block in config.ground {
            let center = block.center();
            let handle = world.add_rigid_body(presets::fixed_body(center.x, center.y));
            world.add_collider(presets::ground_collider(block.width, block.height), handle);
        }
        for block in config.bounds() {
            let center = block.center();
            let handle = world.add_rigid_body(presets::fixed_body(center.x, center.y));
            world.add_collider(presets::bounds_collider(block.width, block.height), handle);
        }
        let hazards = config
            .spikes
            .iter()
            .map(|block| {
                let center = block.center();
                let handle = world.add_rigid_body(presets::fixed_body(center.x, center.y));
                world.add_collider(presets::hazard_collider(block.width, block.height), handle)
            })
            .collect();

        // Populate the query pipeline so the very first ground probe sees the level
        world.step();

        let controller = HeroController::new(hero_config.clone());
        let hero = HeroBody::spawn(&mut world, &config, &hero_config);
        let clip = controller.current_clip();
        info!(
            "Arena ready: {}x{}, hero at ({}, {})",
            config.width, config.height, config.spawn.x, config.spawn.y
        );

        Self {
            config,
            hero_config,
            world,
            hazards,
            controller,
            hero,
            clip,
            respawns: 0,
        }
    }

    /// Run one fixed tick, returns every effect the hero produced
    pub fn tick(&mut self, input: HeroInput) -> Vec<HeroEffect> {
        let frame = self.sense(input);
        let mut effects = self.controller.update(&frame);
        self.dispatch(&effects);

        let velocity = self
            .hero
            .motion
            .integrate(self.hero_velocity(), self.world.timestep());
        self.set_hero_velocity(velocity);
        self.world.step();

        if self.touched_hazard() {
            let died = self.controller.kill();
            self.dispatch(&died);
            effects.extend(died);
        }

        if self.should_respawn() {
            self.respawn();
        }

        effects
    }

    /// Kill the hero from outside the simulation
    pub fn kill_hero(&mut self) -> Vec<HeroEffect> {
        let effects = self.controller.kill();
        self.dispatch(&effects);
        effects
    }

    pub fn controller(&self) -> &HeroController {
        &self.controller
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Center of the hero's body
    pub fn hero_position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.hero.body)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
            .unwrap_or(self.config.spawn)
    }

    pub fn hero_velocity(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.hero.body)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
            .unwrap_or(Vec2::ZERO)
    }

    pub fn hero_offset_x(&self) -> f32 {
        self.hero.offset_x
    }

    /// Check if the hero collides with a layer
    pub fn hero_collides_with(&self, layer: CollisionLayer) -> bool {
        self.hero.filter & layer.bits() != 0
    }

    pub fn clip(&self) -> &str {
        &self.clip
    }

    /// Number of times the hero has been respawned
    pub fn respawns(&self) -> u32 {
        self.respawns
    }

    /// Build the controller's frame from the body
    ///
    /// Landing zeroes vertical velocity so a resting hero reads exactly still.
    fn sense(&mut self, input: HeroInput) -> HeroFrame {
        let Some(body) = self.world.get_rigid_body(self.hero.body) else {
            return HeroFrame {
                input,
                ..Default::default()
            };
        };
        let mut velocity = Vec2::new(body.linvel().x, body.linvel().y);
        let x = body.translation().x;
        let feet = body.translation().y + self.hero_config.body_height / 2.0;

        let touching = self
            .world
            .raycast(
                vector![x, feet - GROUND_PROBE / 2.0],
                vector![0.0, 1.0],
                GROUND_PROBE,
                true,
                self.ground_filter(),
            )
            .is_some();
        let on_ground = touching && velocity.y > -REST_SPEED;

        if on_ground && velocity.y != 0.0 {
            velocity.y = 0.0;
            self.set_hero_velocity(velocity);
        }

        HeroFrame {
            velocity,
            on_ground,
            input,
        }
    }

    fn ground_filter(&self) -> QueryFilter<'static> {
        QueryFilter::default()
            .exclude_rigid_body(self.hero.body)
            .exclude_sensors()
            .groups(CollisionLayer::Hero.with_filter(self.hero.filter))
    }

    fn dispatch(&mut self, effects: &[HeroEffect]) {
        for effect in effects {
            match effect {
                HeroEffect::SetAccelerationX(ax) => self.hero.motion.acceleration.x = *ax,
                HeroEffect::SetAcceleration(acceleration) => {
                    self.hero.motion.acceleration = *acceleration
                }
                HeroEffect::SetVelocityY(vy) => {
                    let velocity = self.hero_velocity();
                    self.set_hero_velocity(Vec2::new(velocity.x, *vy));
                }
                HeroEffect::SetVelocity(velocity) => self.set_hero_velocity(*velocity),
                HeroEffect::SetBodyOffsetX(x) => self.hero.offset_x = *x,
                HeroEffect::SetCollideWorldBounds(collide) => {
                    self.set_hero_collides_with(CollisionLayer::Bounds, *collide)
                }
                HeroEffect::PlayAnimation { clip } => {
                    debug!("Playing clip {}", clip);
                    self.clip.clone_from(clip);
                }
                HeroEffect::PlaySound { key } => debug!("Playing sound {}", key),
                HeroEffect::Died => {
                    // The body drops through the level and out of view
                    self.set_hero_collides_with(CollisionLayer::Ground, false);
                    self.set_hero_collides_with(CollisionLayer::Hazard, false);
                }
            }
        }
    }

    fn set_hero_velocity(&mut self, velocity: Vec2) {
        if let Some(body) = self.world.get_rigid_body_mut(self.hero.body) {
            body.set_linvel(vector![velocity.x, velocity.y], true);
        }
    }

    fn set_hero_collides_with(&mut self, layer: CollisionLayer, collide: bool) {
        if collide {
            self.hero.filter |= layer.bits();
        } else {
            self.hero.filter &= !layer.bits();
        }
        if let Some(collider) = self.world.get_collider_mut(self.hero.collider) {
            collider.set_collision_groups(CollisionLayer::Hero.with_filter(self.hero.filter));
        }
    }

    fn touched_hazard(&self) -> bool {
        let collider = self.hero.collider;
        self.world
            .collision_events()
            .iter()
            .filter_map(|event| event.started_with(collider))
            .any(|other| self.hazards.contains(&other))
    }

    fn should_respawn(&self) -> bool {
        if !self.controller.is_dead() {
            return false;
        }
        let top = self.hero_position().y - self.hero_config.body_height / 2.0;
        top > self.config.height + self.config.respawn_margin
    }

    fn respawn(&mut self) {
        self.world.remove_rigid_body(self.hero.body);
        self.controller = HeroController::new(self.hero_config.clone());
        self.hero = HeroBody::spawn(&mut self.world, &self.config, &self.hero_config);
        self.clip = self.controller.current_clip();
        self.respawns += 1;
        info!(
            "Hero respawned at ({}, {})",
            self.config.spawn.x, self.config.spawn.y
        );
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ArenaConfig::default(), HeroConfig::default())
    }
}

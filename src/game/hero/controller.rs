// Hero controller - owns both state machines and runs one tick at a time

use glam::Vec2;
use log::{debug, error, info};

use crate::core::fsm::{resolve, validate, StateMachine};

use super::config::HeroConfig;
use super::effects::HeroEffect;
use super::hooks::{AnimationHooks, MovementHooks};
use super::predicates::{self, FrameSnapshot};
use super::state::{AnimState, AnimTransition, MoveState, MoveTransition};
use super::tables::{ANIMATION_TRANSITIONS, MOVEMENT_TRANSITIONS};

pub type MovementMachine = StateMachine<MoveState, MoveTransition, MovementHooks>;
pub type AnimationMachine = StateMachine<AnimState, AnimTransition, AnimationHooks>;

/// Input flags for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeroInput {
    pub left: bool,
    pub right: bool,
    /// Jump went down this tick
    pub jump_pressed: bool,
    /// Jump is down (including the tick it was pressed)
    pub jump_held: bool,
}

/// Everything the physics and input collaborators report for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeroFrame {
    pub velocity: Vec2,
    pub on_ground: bool,
    pub input: HeroInput,
}

/// The player character's behavior core
///
/// Each tick: input → horizontal acceleration and facing → jump cutoff →
/// movement resolution → animation resolution. Animation never drives
/// movement; it reads the movement state left by the same tick.
#[derive(Debug)]
pub struct HeroController {
    config: HeroConfig,
    movement: MovementMachine,
    animation: AnimationMachine,
    facing_left: bool,
    /// Velocity as seen by predicates, with this tick's overrides applied
    velocity: Vec2,
    acceleration_x: f32,
}

impl Default for HeroController {
    fn default() -> Self {
        Self::new(HeroConfig::default())
    }
}

impl HeroController {
    /// Create a freshly spawned hero: standing, idle, facing right
    pub fn new(config: HeroConfig) -> Self {
        debug_assert!(validate(MOVEMENT_TRANSITIONS).is_ok());
        debug_assert!(validate(ANIMATION_TRANSITIONS).is_ok());

        let movement = StateMachine::new(
            "movement",
            MOVEMENT_TRANSITIONS,
            MoveState::Standing,
            MovementHooks::new(&config),
        );
        let animation = StateMachine::new(
            "animation",
            ANIMATION_TRANSITIONS,
            AnimState::Idle,
            AnimationHooks::new(&config),
        );

        Self {
            config,
            movement,
            animation,
            facing_left: false,
            velocity: Vec2::ZERO,
            acceleration_x: 0.0,
        }
    }

    /// Run one simulation tick and return the effects to dispatch, in order
    pub fn update(&mut self, frame: &HeroFrame) -> Vec<HeroEffect> {
        let mut effects = Vec::new();
        self.velocity = frame.velocity;

        // The dead ignore input entirely
        let input = if self.is_dead() {
            HeroInput::default()
        } else {
            frame.input
        };

        self.apply_horizontal_input(&input, &mut effects);
        self.apply_jump_cutoff(&input, &mut effects);

        let start = effects.len();
        let snapshot = self.snapshot(frame.on_ground, &input);
        resolve(
            &mut self.movement,
            |name| predicates::movement(name, &snapshot),
            &mut effects,
        );
        self.track_body_commands(&effects[start..]);

        // Rebuilt so animation sees the takeoff or flip velocity set above
        let snapshot = self.snapshot(frame.on_ground, &input);
        let movement_state = self.movement.current();
        resolve(
            &mut self.animation,
            |name| predicates::animation(name, &snapshot, movement_state),
            &mut effects,
        );

        effects
    }

    /// Kill the hero
    ///
    /// Fires `die` on movement, then on animation, then raises `Died`.
    /// Calling it again while dead does nothing and returns no effects.
    pub fn kill(&mut self) -> Vec<HeroEffect> {
        let mut effects = Vec::new();

        if !self.movement.can(MoveTransition::Die) {
            debug!("kill ignored in state {:?}", self.movement.current());
            return effects;
        }

        if let Err(err) = self.movement.fire(MoveTransition::Die, &mut effects) {
            error!("hero kill: {}", err);
            return effects;
        }
        if let Err(err) = self.animation.fire(AnimTransition::Die, &mut effects) {
            error!("hero kill: {}", err);
        }
        self.track_body_commands(&effects);

        effects.push(HeroEffect::Died);
        info!("Hero died");

        effects
    }

    /// Check if the hero is dead
    pub fn is_dead(&self) -> bool {
        self.movement.is(MoveState::Dead)
    }

    pub fn movement_state(&self) -> MoveState {
        self.movement.current()
    }

    pub fn animation_state(&self) -> AnimState {
        self.animation.current()
    }

    pub fn facing_left(&self) -> bool {
        self.facing_left
    }

    /// Velocity after the last tick's overrides
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Horizontal acceleration requested by the last tick
    pub fn acceleration_x(&self) -> f32 {
        self.acceleration_x
    }

    /// Clip key of the current animation state
    pub fn current_clip(&self) -> String {
        self.animation.hooks().clip_for(self.animation.current())
    }

    /// Accelerate toward the held direction; left wins when both are held
    ///
    /// Facing flips as soon as a direction is held, before the velocity
    /// changes sign. That lag is what makes the pivot animation visible.
    fn apply_horizontal_input(&mut self, input: &HeroInput, effects: &mut Vec<HeroEffect>) {
        let (acceleration, facing_left) = if input.left {
            (-self.config.run_acceleration, Some(true))
        } else if input.right {
            (self.config.run_acceleration, Some(false))
        } else {
            (0.0, None)
        };

        self.acceleration_x = acceleration;
        effects.push(HeroEffect::SetAccelerationX(acceleration));

        if let Some(facing_left) = facing_left {
            if facing_left != self.facing_left {
                self.facing_left = facing_left;
                effects.push(HeroEffect::SetBodyOffsetX(
                    self.config.body_offset_x(facing_left),
                ));
            }
        }
    }

    /// Variable jump height: letting go early caps the rise
    fn apply_jump_cutoff(&mut self, input: &HeroInput, effects: &mut Vec<HeroEffect>) {
        if !self.movement.current().is_rising_from_jump() || input.jump_held {
            return;
        }

        if self.velocity.y < self.config.jump_cutoff_threshold {
            self.velocity.y = self.config.jump_cutoff_speed;
            effects.push(HeroEffect::SetVelocityY(self.config.jump_cutoff_speed));
        }
    }

    fn snapshot(&self, on_ground: bool, input: &HeroInput) -> FrameSnapshot {
        FrameSnapshot {
            velocity: self.velocity,
            on_ground,
            facing_left: self.facing_left,
            jump_pressed: input.jump_pressed,
            jump_held: input.jump_held,
        }
    }

    /// Mirror body commands into the working velocity and acceleration
    fn track_body_commands(&mut self, effects: &[HeroEffect]) {
        for effect in effects {
            match effect {
                HeroEffect::SetVelocityY(vy) => self.velocity.y = *vy,
                HeroEffect::SetVelocity(velocity) => self.velocity = *velocity,
                HeroEffect::SetAccelerationX(ax) => self.acceleration_x = *ax,
                HeroEffect::SetAcceleration(acceleration) => self.acceleration_x = acceleration.x,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn frame(vx: f32, vy: f32, on_ground: bool, input: HeroInput) -> HeroFrame {
        HeroFrame {
            velocity: Vec2::new(vx, vy),
            on_ground,
            input,
        }
    }

    fn press_jump() -> HeroInput {
        HeroInput {
            jump_pressed: true,
            jump_held: true,
            ..Default::default()
        }
    }

    fn hold_jump() -> HeroInput {
        HeroInput {
            jump_held: true,
            ..Default::default()
        }
    }

    fn clip(name: &str) -> HeroEffect {
        HeroEffect::PlayAnimation {
            clip: name.to_string(),
        }
    }

    /// Drive the hero into a jump: standing → jumping on both machines
    fn jumping_hero() -> HeroController {
        let mut hero = HeroController::default();
        hero.update(&frame(0.0, 0.0, true, press_jump()));
        assert_eq!(hero.movement_state(), MoveState::Jumping);
        assert_eq!(hero.animation_state(), AnimState::Jumping);
        hero
    }

    /// Walk off a ledge: standing/idle → falling/falling
    fn falling_hero() -> HeroController {
        let mut hero = HeroController::default();
        hero.update(&frame(0.0, 50.0, false, HeroInput::default()));
        assert_eq!(hero.movement_state(), MoveState::Falling);
        assert_eq!(hero.animation_state(), AnimState::Falling);
        hero
    }

    #[test]
    fn test_spawn_state() {
        let hero = HeroController::default();
        assert_eq!(hero.movement_state(), MoveState::Standing);
        assert_eq!(hero.animation_state(), AnimState::Idle);
        assert!(!hero.is_dead());
        assert!(!hero.facing_left());
        assert_eq!(hero.current_clip(), "hero-idle");
    }

    #[test]
    fn test_steady_state_fires_nothing() {
        let mut hero = HeroController::default();
        let effects = hero.update(&frame(0.0, 0.0, true, HeroInput::default()));

        assert_eq!(effects, vec![HeroEffect::SetAccelerationX(0.0)]);
        assert_eq!(hero.movement_state(), MoveState::Standing);
        assert_eq!(hero.animation_state(), AnimState::Idle);
    }

    #[test]
    fn test_jump_from_idle() {
        let mut hero = HeroController::default();
        let effects = hero.update(&frame(0.0, 0.0, true, press_jump()));

        assert_eq!(hero.movement_state(), MoveState::Jumping);
        assert_eq!(hero.animation_state(), AnimState::Jumping);
        assert_relative_eq!(hero.velocity().y, -400.0);
        assert_eq!(
            effects,
            vec![
                HeroEffect::SetAccelerationX(0.0),
                HeroEffect::PlaySound { key: "jump" },
                HeroEffect::SetVelocityY(-400.0),
                clip("hero-jumping"),
            ]
        );
    }

    #[test]
    fn test_jump_from_running() {
        let mut hero = HeroController::default();
        let right = HeroInput {
            right: true,
            ..Default::default()
        };
        hero.update(&frame(120.0, 0.0, true, right));
        assert_eq!(hero.animation_state(), AnimState::Running);

        let input = HeroInput {
            right: true,
            ..press_jump()
        };
        let effects = hero.update(&frame(140.0, 0.0, true, input));

        assert_eq!(hero.movement_state(), MoveState::Jumping);
        assert_eq!(hero.animation_state(), AnimState::Jumping);
        assert!(effects.contains(&HeroEffect::PlaySound { key: "jump" }));
        assert!(effects.contains(&HeroEffect::SetVelocityY(-400.0)));
    }

    #[test]
    fn test_flip_while_jumping() {
        let mut hero = jumping_hero();
        let effects = hero.update(&frame(0.0, -250.0, false, press_jump()));

        assert_eq!(hero.movement_state(), MoveState::Flipping);
        assert_eq!(hero.animation_state(), AnimState::Flipping);
        assert_relative_eq!(hero.velocity().y, -300.0);
        assert_eq!(
            effects,
            vec![
                HeroEffect::SetAccelerationX(0.0),
                HeroEffect::SetVelocityY(-300.0),
                clip("hero-flipping"),
            ]
        );
    }

    #[test]
    fn test_flip_animation_sees_same_tick_movement() {
        // Falling downward when the flip is pressed: the boost makes vy
        // negative and the movement state Flipping within the same tick
        let mut hero = jumping_hero();
        hero.update(&frame(0.0, 30.0, false, hold_jump()));
        assert_eq!(hero.animation_state(), AnimState::Falling);

        hero.update(&frame(0.0, 60.0, false, press_jump()));
        assert_eq!(hero.movement_state(), MoveState::Flipping);
        assert_eq!(hero.animation_state(), AnimState::Flipping);
    }

    #[test]
    fn test_only_one_flip_per_jump() {
        let mut hero = jumping_hero();
        hero.update(&frame(0.0, -250.0, false, press_jump()));
        assert_eq!(hero.movement_state(), MoveState::Flipping);

        let effects = hero.update(&frame(0.0, -200.0, false, press_jump()));
        assert_eq!(hero.movement_state(), MoveState::Flipping);
        assert!(!effects.contains(&HeroEffect::SetVelocityY(-300.0)));
    }

    #[test]
    fn test_touchdown_to_idle() {
        let mut hero = falling_hero();
        let effects = hero.update(&frame(0.0, 80.0, true, HeroInput::default()));

        assert_eq!(hero.movement_state(), MoveState::Standing);
        assert_eq!(hero.animation_state(), AnimState::Idle);
        assert!(effects.contains(&clip("hero-idle")));
    }

    #[test]
    fn test_touchdown_while_moving_runs() {
        let mut hero = falling_hero();
        let right = HeroInput {
            right: true,
            ..Default::default()
        };
        hero.update(&frame(90.0, 80.0, true, right));

        assert_eq!(hero.movement_state(), MoveState::Standing);
        assert_eq!(hero.animation_state(), AnimState::Running);
    }

    #[test]
    fn test_pivot_when_reversing() {
        let mut hero = HeroController::default();
        let right = HeroInput {
            right: true,
            ..Default::default()
        };
        hero.update(&frame(100.0, 0.0, true, right));
        assert_eq!(hero.animation_state(), AnimState::Running);

        // Still drifting right when left goes down
        let left = HeroInput {
            left: true,
            ..Default::default()
        };
        let effects = hero.update(&frame(80.0, 0.0, true, left));

        assert!(hero.facing_left());
        assert_eq!(hero.animation_state(), AnimState::Pivoting);
        assert_eq!(hero.movement_state(), MoveState::Standing);
        assert_eq!(
            effects,
            vec![
                HeroEffect::SetAccelerationX(-1000.0),
                HeroEffect::SetBodyOffsetX(8.0),
                clip("hero-pivoting"),
            ]
        );

        // Velocity crosses zero and follows the new facing
        hero.update(&frame(0.0, 0.0, true, left));
        assert_eq!(hero.animation_state(), AnimState::Idle);
        hero.update(&frame(-20.0, 0.0, true, left));
        assert_eq!(hero.animation_state(), AnimState::Running);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut hero = HeroController::default();
        let both = HeroInput {
            left: true,
            right: true,
            ..Default::default()
        };
        hero.update(&frame(0.0, 0.0, true, both));

        assert!(hero.facing_left());
        assert_relative_eq!(hero.acceleration_x(), -1000.0);
    }

    #[test]
    fn test_offset_only_on_facing_change() {
        let mut hero = HeroController::default();
        let right = HeroInput {
            right: true,
            ..Default::default()
        };
        let effects = hero.update(&frame(0.0, 0.0, true, right));
        assert!(!effects
            .iter()
            .any(|e| matches!(e, HeroEffect::SetBodyOffsetX(_))));
    }

    #[test]
    fn test_walk_off_ledge() {
        let mut hero = HeroController::default();
        let effects = hero.update(&frame(0.0, 16.0, false, HeroInput::default()));

        assert_eq!(hero.movement_state(), MoveState::Falling);
        assert_eq!(hero.animation_state(), AnimState::Falling);
        assert!(effects.contains(&clip("hero-falling")));
    }

    #[test]
    fn test_jump_cutoff_on_release() {
        let mut hero = jumping_hero();
        let effects = hero.update(&frame(0.0, -300.0, false, HeroInput::default()));

        assert_relative_eq!(hero.velocity().y, -160.0);
        assert!(effects.contains(&HeroEffect::SetVelocityY(-160.0)));
        assert_eq!(hero.movement_state(), MoveState::Jumping);
        assert_eq!(hero.animation_state(), AnimState::Jumping);
    }

    #[test]
    fn test_no_cutoff_while_held() {
        let mut hero = jumping_hero();
        let effects = hero.update(&frame(0.0, -300.0, false, hold_jump()));

        assert_relative_eq!(hero.velocity().y, -300.0);
        assert!(!effects.contains(&HeroEffect::SetVelocityY(-160.0)));
    }

    #[test]
    fn test_no_cutoff_near_apex() {
        let mut hero = jumping_hero();
        let effects = hero.update(&frame(0.0, -120.0, false, HeroInput::default()));

        assert_relative_eq!(hero.velocity().y, -120.0);
        assert!(!effects
            .iter()
            .any(|e| matches!(e, HeroEffect::SetVelocityY(_))));
    }

    #[test]
    fn test_cutoff_applies_while_flipping() {
        let mut hero = jumping_hero();
        hero.update(&frame(0.0, -250.0, false, press_jump()));
        assert_eq!(hero.movement_state(), MoveState::Flipping);

        hero.update(&frame(0.0, -280.0, false, HeroInput::default()));
        assert_relative_eq!(hero.velocity().y, -160.0);
    }

    #[test]
    fn test_no_cutoff_while_falling() {
        let mut hero = falling_hero();
        let effects = hero.update(&frame(0.0, -300.0, false, HeroInput::default()));
        assert!(!effects.contains(&HeroEffect::SetVelocityY(-160.0)));
    }

    #[test]
    fn test_kill() {
        let mut hero = HeroController::default();
        let effects = hero.kill();

        assert!(hero.is_dead());
        assert_eq!(hero.movement_state(), MoveState::Dead);
        assert_eq!(hero.animation_state(), AnimState::Dead);
        assert_eq!(hero.velocity(), Vec2::new(0.0, -500.0));
        assert_relative_eq!(hero.acceleration_x(), 0.0);
        assert_eq!(
            effects,
            vec![
                HeroEffect::SetVelocity(Vec2::new(0.0, -500.0)),
                HeroEffect::SetAcceleration(Vec2::ZERO),
                HeroEffect::SetCollideWorldBounds(false),
                clip("hero-dead"),
                HeroEffect::Died,
            ]
        );
    }

    #[test]
    fn test_kill_from_every_live_state() {
        let heroes = [
            HeroController::default(),
            jumping_hero(),
            falling_hero(),
            {
                let mut hero = jumping_hero();
                hero.update(&frame(0.0, -250.0, false, press_jump()));
                hero
            },
        ];

        for mut hero in heroes {
            let effects = hero.kill();
            assert!(hero.is_dead());
            assert_eq!(hero.animation_state(), AnimState::Dead);
            assert_eq!(
                effects.iter().filter(|e| **e == HeroEffect::Died).count(),
                1
            );
        }
    }

    #[test]
    fn test_kill_is_idempotent() {
        let mut hero = HeroController::default();
        hero.kill();

        let effects = hero.kill();
        assert!(effects.is_empty());
        assert!(hero.is_dead());
        assert_eq!(hero.animation_state(), AnimState::Dead);
    }

    #[test]
    fn test_dead_hero_ignores_input() {
        let mut hero = HeroController::default();
        hero.kill();

        let input = HeroInput {
            left: true,
            right: false,
            jump_pressed: true,
            jump_held: true,
        };
        let effects = hero.update(&frame(0.0, -450.0, false, input));

        assert_eq!(effects, vec![HeroEffect::SetAccelerationX(0.0)]);
        assert!(!hero.facing_left());
        assert_eq!(hero.movement_state(), MoveState::Dead);
        assert_eq!(hero.animation_state(), AnimState::Dead);

        // Landing on something does not revive it either
        hero.update(&frame(0.0, 0.0, true, HeroInput::default()));
        assert!(hero.is_dead());
        assert_eq!(hero.animation_state(), AnimState::Dead);
    }

    #[test]
    fn test_dead_iff_animation_dead() {
        let mut hero = HeroController::default();
        let script = [
            frame(0.0, 0.0, true, press_jump()),
            frame(0.0, -350.0, false, hold_jump()),
            frame(0.0, -200.0, false, press_jump()),
            frame(0.0, 100.0, false, HeroInput::default()),
            frame(0.0, 120.0, true, HeroInput::default()),
        ];
        for f in &script {
            hero.update(f);
            assert_eq!(hero.is_dead(), hero.animation_state() == AnimState::Dead);
        }

        hero.kill();
        assert_eq!(hero.is_dead(), hero.animation_state() == AnimState::Dead);
    }

    #[test]
    fn test_at_most_one_clip_per_tick() {
        let mut hero = HeroController::default();
        let script = [
            frame(0.0, 0.0, true, press_jump()),
            frame(0.0, -380.0, false, hold_jump()),
            frame(0.0, -250.0, false, press_jump()),
            frame(0.0, 40.0, false, HeroInput::default()),
            frame(0.0, 90.0, true, HeroInput::default()),
            frame(0.0, 0.0, false, HeroInput::default()),
        ];
        for f in &script {
            let effects = hero.update(f);
            let clips = effects
                .iter()
                .filter(|e| matches!(e, HeroEffect::PlayAnimation { .. }))
                .count();
            assert!(clips <= 1);
        }
    }
}

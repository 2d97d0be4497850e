// Transition side effects of the two hero machines

use glam::Vec2;

use crate::core::fsm::{Named, TransitionHooks};

use super::config::HeroConfig;
use super::effects::HeroEffect;
use super::state::{AnimState, AnimTransition, MoveState, MoveTransition};

/// Physics side effects bound to movement transitions
#[derive(Debug, Clone)]
pub struct MovementHooks {
    jump_speed: f32,
    flip_speed: f32,
    death_pop_speed: f32,
    jump_sound: &'static str,
}

impl MovementHooks {
    pub fn new(config: &HeroConfig) -> Self {
        Self {
            jump_speed: config.jump_speed,
            flip_speed: config.flip_speed,
            death_pop_speed: config.death_pop_speed,
            jump_sound: config.jump_sound,
        }
    }
}

impl TransitionHooks<MoveState, MoveTransition> for MovementHooks {
    type Effect = HeroEffect;

    fn on_transition(&self, name: MoveTransition, effects: &mut Vec<HeroEffect>) {
        match name {
            MoveTransition::Jump => {
                effects.push(HeroEffect::PlaySound {
                    key: self.jump_sound,
                });
                effects.push(HeroEffect::SetVelocityY(self.jump_speed));
            }
            MoveTransition::Flip => {
                effects.push(HeroEffect::SetVelocityY(self.flip_speed));
            }
            MoveTransition::Die => {
                // Ballistic from here on: straight up, then out of the level
                effects.push(HeroEffect::SetVelocity(Vec2::new(0.0, self.death_pop_speed)));
                effects.push(HeroEffect::SetAcceleration(Vec2::ZERO));
                effects.push(HeroEffect::SetCollideWorldBounds(false));
            }
            MoveTransition::Fall | MoveTransition::Touchdown => {}
        }
    }
}

/// Clip playback on every animation state entry
#[derive(Debug, Clone)]
pub struct AnimationHooks {
    clip_prefix: &'static str,
}

impl AnimationHooks {
    pub fn new(config: &HeroConfig) -> Self {
        Self {
            clip_prefix: config.clip_prefix,
        }
    }

    /// Clip key for a state, e.g. "hero-running"
    pub fn clip_for(&self, state: AnimState) -> String {
        format!("{}{}", self.clip_prefix, state.name())
    }
}

impl TransitionHooks<AnimState, AnimTransition> for AnimationHooks {
    type Effect = HeroEffect;

    fn on_enter(&self, state: AnimState, effects: &mut Vec<HeroEffect>) {
        effects.push(HeroEffect::PlayAnimation {
            clip: self.clip_for(state),
        });
    }
}

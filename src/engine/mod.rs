// Engine modules: fixed tick, input, physics

pub mod game_loop;
pub mod input;
pub mod physics;

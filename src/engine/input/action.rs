// Game action definitions and key bindings

use winit::keyboard::KeyCode;

/// Represents every in-game action the hero host understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,

    // Meta actions
    Pause,
}

/// Default bindings: cursor keys plus space, with WASD alternates
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::Space, Action::Jump),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::KeyP, Action::Pause),
    ]
}

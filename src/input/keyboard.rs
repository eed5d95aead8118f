//! Keyboard mapping for the play state.
//!
//! Keys are sampled once per frame into an [`InputState`], which separates
//! held actions (movement, running) from actions pressed this frame.

use egui::Key;
use std::collections::HashSet;

/// Gameplay actions bound to the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    // Movement
    MoveLeft,
    MoveRight,
    Run,
    Jump,

    // World
    Interact,

    // Flow
    TogglePause,

    // Weather overrides
    WeatherClear,
    WeatherRain,
    WeatherStorm,
}

impl GameAction {
    pub const ALL: [GameAction; 9] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::Run,
        GameAction::Jump,
        GameAction::Interact,
        GameAction::TogglePause,
        GameAction::WeatherClear,
        GameAction::WeatherRain,
        GameAction::WeatherStorm,
    ];

    /// Keys bound to this action. `Run` is bound to the Shift modifier instead.
    pub fn default_keys(&self) -> &'static [Key] {
        match self {
            GameAction::MoveLeft => &[Key::A, Key::ArrowLeft],
            GameAction::MoveRight => &[Key::D, Key::ArrowRight],
            GameAction::Run => &[],
            GameAction::Jump => &[Key::Space],
            GameAction::Interact => &[Key::E],
            GameAction::TogglePause => &[Key::Escape, Key::Tab],
            GameAction::WeatherClear => &[Key::Num1],
            GameAction::WeatherRain => &[Key::Num2],
            GameAction::WeatherStorm => &[Key::Num3],
        }
    }

    /// Whether the action applies for as long as its key is down.
    pub fn is_continuous(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::Run
        )
    }

    /// Get the description for this action.
    pub fn description(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "Move left",
            GameAction::MoveRight => "Move right",
            GameAction::Run => "Run",
            GameAction::Jump => "Jump",
            GameAction::Interact => "Interact",
            GameAction::TogglePause => "Pause",
            GameAction::WeatherClear => "Clear weather",
            GameAction::WeatherRain => "Rain",
            GameAction::WeatherStorm => "Storm",
        }
    }
}

/// One frame of gameplay input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: HashSet<GameAction>,
    pressed: HashSet<GameAction>,
}

impl InputState {
    /// Sample the egui keyboard state for this frame.
    pub fn from_egui(input: &egui::InputState) -> Self {
        let mut state = Self::default();

        for action in GameAction::ALL {
            let keys = action.default_keys();
            if action.is_continuous() {
                let down = if action == GameAction::Run {
                    input.modifiers.shift
                } else {
                    keys.iter().any(|k| input.key_down(*k))
                };
                if down {
                    state.held.insert(action);
                }
            } else if keys.iter().any(|k| input.key_pressed(*k)) {
                state.pressed.insert(action);
            }
        }

        state
    }

    /// Mark `action` as held.
    pub fn hold(mut self, action: GameAction) -> Self {
        self.held.insert(action);
        self
    }

    /// Mark `action` as pressed this frame.
    pub fn press(mut self, action: GameAction) -> Self {
        self.pressed.insert(action);
        self
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.held.contains(&action)
    }

    pub fn was_pressed(&self, action: GameAction) -> bool {
        self.pressed.contains(&action)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty() && self.pressed.is_empty()
    }
}

/// Get a display name for a key.
pub fn key_name(key: Key) -> &'static str {
    match key {
        Key::ArrowLeft => "Left",
        Key::ArrowRight => "Right",
        Key::Space => "Space",
        Key::Escape => "Esc",
        Key::Tab => "Tab",
        other => other.name(),
    }
}

/// One-line control reference for the play HUD.
pub fn controls_hint() -> String {
    let bindings = |action: GameAction| {
        action
            .default_keys()
            .iter()
            .map(|k| key_name(*k))
            .collect::<Vec<_>>()
            .join("/")
    };

    format!(
        "{}, {}: Move | Shift: Run | {}: Jump | {}: Interact | 1-3: Weather | {}: Pause",
        bindings(GameAction::MoveLeft),
        bindings(GameAction::MoveRight),
        bindings(GameAction::Jump),
        bindings(GameAction::Interact),
        bindings(GameAction::TogglePause),
    )
}

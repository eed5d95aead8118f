//! Play session driven headless through input states and a recording surface

use stormrunner::input::{GameAction, InputState};
use stormrunner::storage::config::GameConfig;
use stormrunner::world::renderer::{DrawCommand, DrawList};
use stormrunner::world::scene::ObjectKind;
use stormrunner::world::weather::skybox::CLEAR_SKY;
use stormrunner::world::{GameRng, PlaySession, SessionEvent, WeatherMode};

const FRAME_MS: f32 = 16.0;

fn session(seed: u64) -> PlaySession {
    PlaySession::new(&GameConfig::default(), "Tester", GameRng::new(seed))
}

fn idle() -> InputState {
    InputState::default()
}

#[test]
fn test_player_spawns_above_ground_and_lands() {
    let mut session = session(1);
    let ground = session.world().ground_level();
    assert_eq!(session.player().position.x, 640.0);
    assert_eq!(session.player().position.y, ground - 50.0);

    for _ in 0..10 {
        session.update(FRAME_MS, &idle());
    }
    assert!(session.player().is_on_ground());
    assert_eq!(session.player().position.y, ground - 48.0);
}

#[test]
fn test_walking_emits_footsteps_and_moves_camera() {
    let mut session = session(2);
    let start_x = session.player().position.x;
    let walk = idle().hold(GameAction::MoveRight);

    let mut footsteps = 0;
    for _ in 0..120 {
        footsteps += session
            .update(FRAME_MS, &walk)
            .iter()
            .filter(|e| **e == SessionEvent::Footstep)
            .count();
    }

    assert!(session.player().position.x > start_x);
    assert!(footsteps >= 3, "only {} footsteps", footsteps);
    assert!(session.camera().base_offset().x < 0.0);
}

#[test]
fn test_interact_next_to_tree() {
    let mut session = session(3);
    let events = session.update(FRAME_MS, &idle().press(GameAction::Interact));
    assert!(events.contains(&SessionEvent::Interacted(ObjectKind::Tree)));
}

#[test]
fn test_interact_with_nothing_nearby() {
    let mut session = session(4);
    let run_left = idle().hold(GameAction::MoveLeft).hold(GameAction::Run);
    for _ in 0..200 {
        session.update(FRAME_MS, &run_left);
    }
    assert_eq!(session.player().position.x, 0.0);

    let events = session.update(FRAME_MS, &idle().press(GameAction::Interact));
    assert!(!events
        .iter()
        .any(|e| matches!(e, SessionEvent::Interacted(_))));
}

#[test]
fn test_jump_only_reported_from_ground() {
    let mut session = session(5);
    for _ in 0..10 {
        session.update(FRAME_MS, &idle());
    }

    let jump = idle().press(GameAction::Jump);
    assert!(session.update(FRAME_MS, &jump).contains(&SessionEvent::Jumped));
    assert!(!session.update(FRAME_MS, &jump).contains(&SessionEvent::Jumped));
}

#[test]
fn test_weather_keys_override_mode() {
    let mut session = session(6);
    session.update(FRAME_MS, &idle().press(GameAction::WeatherStorm));
    assert_eq!(session.weather().mode(), WeatherMode::Storm);

    session.update(FRAME_MS, &idle().press(GameAction::WeatherRain));
    assert_eq!(session.weather().mode(), WeatherMode::Rain);

    session.update(FRAME_MS, &idle().press(GameAction::WeatherClear));
    assert_eq!(session.weather().mode(), WeatherMode::Clear);
}

#[test]
fn test_lightning_shakes_camera() {
    let mut session = session(7);
    session.weather_mut().set_weather(WeatherMode::Storm);

    let mut struck = false;
    for _ in 0..600 {
        if session.update(FRAME_MS, &idle()).contains(&SessionEvent::Lightning) {
            struck = true;
            assert!(session.camera().is_shaking());
            assert!(session.weather().is_lightning_active());
            break;
        }
    }
    assert!(struck);
}

#[test]
fn test_render_draws_sky_first_and_hud_text() {
    let mut session = session(8);
    session.update(FRAME_MS, &idle());

    let mut list = DrawList::new(1280.0, 720.0);
    session.render(&mut list);
    assert_eq!(list.commands()[0], DrawCommand::Fill(CLEAR_SKY.into()));
    assert!(list.texts().any(|t| t == "Tester"));

    let mut hud = DrawList::new(1280.0, 720.0);
    session.render_hud(&mut hud, 59.6);
    let texts: Vec<&str> = hud.texts().collect();
    assert!(texts.contains(&"Player: Tester"));
    assert!(texts.contains(&"Weather: Clear"));
    assert!(texts.contains(&"FPS: 60"));
    assert!(texts.contains(&"X: 640"));
}

#[test]
fn test_avatar_sprite_used_when_available() {
    let mut session = session(9);
    let mut list = DrawList::with_sprite(1280.0, 720.0);
    session.render(&mut list);
    assert!(list
        .commands()
        .iter()
        .any(|c| matches!(c, DrawCommand::Sprite { flip_x: false, .. })));
}

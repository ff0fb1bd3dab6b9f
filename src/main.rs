use sdl2::render::{BlendMode, Canvas, Texture};
use sdl2::video::Window;

mod assets;
mod background;
mod collision;
mod effects;
mod entities;
mod game;
mod gui;
mod input_system;
mod render;
mod simulation;
mod text;
mod ui;

use assets::{ShipManifest, load_texture};
use background::Background;
use game::types::{ARENA_HEIGHT, ARENA_WIDTH, FPS, MAX_HEALTH, RED, Side, WHITE, YELLOW};
use game::{Game, GamePhase};
use gui::{draw_control_select, draw_game_over, draw_start_screen};
use input_system::{GameAction, InputSnapshot, InputSystem};
use render::{draw_bullets, draw_divider, draw_ship};
use simulation::MatchState;
use text::draw_simple_text;
use ui::{AmmoDisplay, AmmoDisplayStyle, HealthBar, HealthBarStyle};

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Neon Space Battle", ARENA_WIDTH, ARENA_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(ARENA_WIDTH, ARENA_HEIGHT)
        .map_err(|e| e.to_string())?;
    canvas.set_blend_mode(BlendMode::Blend);

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let manifest = ShipManifest::load_or_default("assets/config/ships.json");
    let yellow_texture = load_texture(&texture_creator, &manifest.yellow.path)?;
    let red_texture = load_texture(&texture_creator, &manifest.red.path)?;

    println!("Neon Space Battle");
    println!("  Yellow: WASD to move, Left Ctrl to fire");
    println!("  Red:    Arrows + Right Ctrl, or mouse + click");
    println!("  First to land {} hits wins", MAX_HEALTH);

    let mut game = Game::new();
    let mut background = Background::new();
    let mut snapshot = InputSnapshot::new();
    let mut input_system = InputSystem::new();
    let mut game_time: f32 = 0.0;

    let yellow_health_bar = HealthBar::with_style(HealthBarStyle {
        fill_color: YELLOW,
        border_color: YELLOW,
        ..Default::default()
    });
    let red_health_bar = HealthBar::with_style(HealthBarStyle {
        fill_color: RED,
        border_color: RED,
        ..Default::default()
    });
    let yellow_ammo = AmmoDisplay::with_style(AmmoDisplayStyle {
        fill_color: YELLOW,
        ..Default::default()
    });
    let red_ammo = AmmoDisplay::with_style(AmmoDisplayStyle {
        fill_color: RED,
        ..Default::default()
    });

    'running: loop {
        // Drain events: fold continuous state into the snapshot, apply
        // discrete actions immediately
        input_system.update_context(game.phase());
        for event in event_pump.poll_iter() {
            snapshot.apply_event(&event);
            if let Some(action) = input_system.translate(&event, game.scheme()) {
                if action == GameAction::Quit {
                    break 'running;
                }
                game.apply_action(action);
            }
        }

        // Update everything before drawing anything
        game_time += 0.1;
        background.update();
        game.tick(&snapshot);
        let shake = game.effects.shake_offset();

        background.render(&mut canvas, game_time)?;
        match game.phase() {
            GamePhase::ControlSelect => {
                draw_control_select(&mut canvas, game_time)?;
            }
            GamePhase::Start => {
                draw_start_screen(
                    &mut canvas,
                    &yellow_texture,
                    &red_texture,
                    game.scheme(),
                    game_time,
                )?;
            }
            GamePhase::Playing => {
                draw_arena(
                    &mut canvas,
                    &game,
                    &yellow_texture,
                    &red_texture,
                    game_time,
                    shake,
                )?;
                draw_hud(
                    &mut canvas,
                    &game.match_state,
                    &yellow_health_bar,
                    &red_health_bar,
                    &yellow_ammo,
                    &red_ammo,
                )?;
            }
            GamePhase::GameOver => {
                draw_arena(
                    &mut canvas,
                    &game,
                    &yellow_texture,
                    &red_texture,
                    game_time,
                    shake,
                )?;
                if let Some(winner) = game.winner() {
                    draw_game_over(&mut canvas, winner, game_time)?;
                }
            }
        }

        canvas.present();

        // Cap framerate to ~60 FPS
        std::thread::sleep(std::time::Duration::new(0, 1_000_000_000u32 / FPS));
    }

    Ok(())
}

/// World content for the playing and game-over phases: divider, effect
/// pools, bullets and ships, all displaced by this frame's shake offset.
fn draw_arena(
    canvas: &mut Canvas<Window>,
    game: &Game,
    yellow_texture: &Texture,
    red_texture: &Texture,
    game_time: f32,
    shake: (i32, i32),
) -> Result<(), String> {
    let state = &game.match_state;

    draw_divider(canvas, game_time, shake)?;
    game.effects.render(canvas, shake)?;
    draw_bullets(canvas, &state.yellow_bullets, YELLOW, shake)?;
    draw_bullets(canvas, &state.red_bullets, RED, shake)?;
    draw_ship(canvas, yellow_texture, &state.yellow_ship, state.yellow_flash, WHITE, shake)?;
    draw_ship(canvas, red_texture, &state.red_ship, state.red_flash, WHITE, shake)?;

    Ok(())
}

/// Screen-space HUD: side labels, health bars and ammo pips in the top
/// corners. Not displaced by screen shake.
fn draw_hud(
    canvas: &mut Canvas<Window>,
    state: &MatchState,
    yellow_health_bar: &HealthBar,
    red_health_bar: &HealthBar,
    yellow_ammo: &AmmoDisplay,
    red_ammo: &AmmoDisplay,
) -> Result<(), String> {
    let right_x = ARENA_WIDTH as i32 - 20 - 160;

    draw_simple_text(canvas, "YELLOW", 20, 14, YELLOW, 1)?;
    yellow_health_bar.render(canvas, 20, 26, state.yellow_health as f32 / MAX_HEALTH as f32)?;
    yellow_ammo.render(canvas, 20, 54, state.ammo(Side::Yellow) as u32)?;

    draw_simple_text(canvas, "RED", right_x + 160 - 18, 14, RED, 1)?;
    red_health_bar.render(canvas, right_x, 26, state.red_health as f32 / MAX_HEALTH as f32)?;
    red_ammo.render(canvas, right_x, 54, state.ammo(Side::Red) as u32)?;

    Ok(())
}

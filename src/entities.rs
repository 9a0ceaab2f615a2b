/// All game entity types — pure data, no logic.

use std::time::Duration;

use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Title screen, waiting for the first fire press.
    Waiting,
    Playing,
    GameOver,
    /// Transient: the driver replaces the state with a fresh one.
    Restart,
}

/// One frame's worth of player intent, as read from the input device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
    pub quit: bool,
}

/// Natural (width, height) of each sprite, in play-area pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSizes {
    pub player: (i32, i32),
    pub player_shot: (i32, i32),
    pub alien: (i32, i32),
    pub alien_shot: (i32, i32),
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// Pixels moved per tick on each axis.
    pub speed: i32,
    /// Region the player may not leave.
    pub area: Rect,
    pub alive: bool,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerShot {
    pub rect: Rect,
    pub speed: i32,
}

/// Aimed alien projectile.  The float position is authoritative; `rect`
/// mirrors its truncation so sub-pixel speeds accumulate without drift.
#[derive(Clone, Debug, PartialEq)]
pub struct AlienShot {
    pub rect: Rect,
    pub x: f32,
    pub y: f32,
    pub speed_x: f32,
    pub speed_y: f32,
}

// ── Aliens ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Alien {
    pub rect: Rect,
    /// Horizontal patrol bounds.
    pub movement_area: Rect,
    pub speed: i32,
    pub moving_left: bool,
}

// ── Cosmetics ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub color: Color,
    pub speed: i32,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub x: i32,
    pub y: i32,
    pub max_radius: i32,
    pub color: Color,
    pub current_radius: i32,
    pub growing: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire state of one game.  Cloneable so the pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub mode: GameMode,
    pub area: Rect,
    pub sprites: SpriteSizes,
    pub player: Player,
    pub player_shots: Vec<PlayerShot>,
    /// Fire debounce: set when a shot is fired (or play starts), cleared when
    /// the fire input is released.
    pub has_shot: bool,
    pub stars: Vec<Star>,
    pub wave_number: u32,
    pub aliens: Vec<Alien>,
    pub alien_shots: Vec<AlienShot>,
    pub explosions: Vec<Explosion>,
    /// Spare lives; the ship in play is not counted.
    pub lives: u32,
    pub time_of_death: Option<Duration>,
    pub gameover_time: Option<Duration>,
    pub respawn_delay: Duration,
    pub gameover_delay: Duration,
    /// Ticks run so far; the driver also stamps key events with it.
    pub frame: u64,
}

/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus the frame's input, the run clock and, where needed, an
/// RNG handle) and returns a brand-new `GameState`.  Side effects are limited
/// to the injected RNG and log output.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::entities::{
    Alien, AlienShot, Color, GameMode, GameState, Player, PlayerInput, PlayerShot, Star,
};
use crate::geometry::Rect;
use crate::motion::{
    advance_alien, advance_alien_shot, advance_explosion, advance_player_shot, explosion_done,
    move_player, move_star, new_alien_shot, new_explosion, new_player, new_player_shot,
};
use crate::waves::{initial_stars, make_wave, random_star_for_x, should_have_star};

// ── Tuning ───────────────────────────────────────────────────────────────────

/// An alien fires when a 1..=10000 roll lands above this (10 in 10000).
const ALIEN_FIRE_THRESHOLD: u32 = 9_990;
const ALIEN_SHOT_SPEED_X: f32 = 5.0;
const ALIEN_SHOT_AIM_BIAS: f32 = 0.8;
const ALIEN_SHOT_SPREAD: f32 = 1.0;

pub const ALIEN_EXPLOSION_RADIUS: i32 = 60;
pub const ALIEN_EXPLOSION_COLOR: Color = Color::rgb(255, 200, 0);
pub const PLAYER_EXPLOSION_RADIUS: i32 = 200;
pub const PLAYER_EXPLOSION_COLOR: Color = Color::rgb(255, 50, 0);

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh game in `Waiting` mode: player centered, first wave queued
/// off the right edge, sky already full of stars.
pub fn init_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    let area = Rect::new(0, 0, config.area_width, config.area_height);
    let player_rect = Rect::from_center((area.width / 2, area.height / 2), config.sprites.player);

    GameState {
        mode: GameMode::Waiting,
        area,
        sprites: config.sprites,
        player: new_player(player_rect, area),
        player_shots: Vec::new(),
        has_shot: false,
        stars: initial_stars(area, rng),
        wave_number: 0,
        aliens: make_wave(area, config.sprites.alien, 0),
        alien_shots: Vec::new(),
        explosions: Vec::new(),
        lives: config.lives,
        time_of_death: None,
        gameover_time: None,
        respawn_delay: config.respawn_delay,
        gameover_delay: config.gameover_delay,
        frame: 0,
    }
}

// ── Mode dispatcher ──────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  `now` is the time since the run
/// started; all randomness comes through `rng` so callers control
/// determinism (tests use a seeded RNG).
pub fn tick(
    state: &GameState,
    input: &PlayerInput,
    now: Duration,
    rng: &mut impl Rng,
) -> GameState {
    let next = match state.mode {
        GameMode::Waiting => update_waiting(state, input),
        GameMode::Playing => update_playing(state, input, now, rng),
        GameMode::GameOver => update_gameover(state, now),
        // The driver swaps in a new game; nothing to simulate meanwhile.
        GameMode::Restart => state.clone(),
    };

    GameState {
        frame: state.frame + 1,
        ..next
    }
}

pub fn update_waiting(state: &GameState, input: &PlayerInput) -> GameState {
    if !input.fire {
        return state.clone();
    }
    info!("fire pressed, starting play");
    GameState {
        mode: GameMode::Playing,
        // The press that started the game must not also fire a shot.
        has_shot: true,
        ..state.clone()
    }
}

pub fn update_gameover(state: &GameState, now: Duration) -> GameState {
    if !has_elapsed(state.gameover_time, now, state.gameover_delay) {
        return state.clone();
    }
    info!("game over screen finished, requesting restart");
    GameState {
        mode: GameMode::Restart,
        ..state.clone()
    }
}

// ── Playing ──────────────────────────────────────────────────────────────────

pub fn update_playing(
    state: &GameState,
    input: &PlayerInput,
    now: Duration,
    rng: &mut impl Rng,
) -> GameState {
    let area = state.area;

    // ── 1. Respawn / game over ───────────────────────────────────────────────
    let state = resolve_death(state, now);

    // ── 2. Player movement ───────────────────────────────────────────────────
    let player = move_player(&state.player, input);

    // ── 3. Fire control ──────────────────────────────────────────────────────
    let mut player_shots = state.player_shots.clone();
    let mut has_shot = state.has_shot;
    if input.fire && !has_shot && player.alive {
        let rect = Rect::from_center(player.rect.mid_right(), state.sprites.player_shot);
        player_shots.push(new_player_shot(rect));
        has_shot = true;
        debug!(x = rect.x, y = rect.y, "player fired");
    } else if !input.fire {
        has_shot = false;
    }

    // ── 4. Stars ─────────────────────────────────────────────────────────────
    let mut stars: Vec<Star> = state.stars.iter().map(move_star).collect();
    if should_have_star(rng) {
        stars.push(random_star_for_x(area.width, area.height, rng));
    }
    let stars = reap_outsiders(stars, &area, |s| s.rect);

    // ── 5. Player shots ──────────────────────────────────────────────────────
    let advanced: Vec<PlayerShot> = player_shots.iter().map(advance_player_shot).collect();
    let player_shots = reap_outsiders(advanced, &area, |s| s.rect);

    // ── 6. Next wave ─────────────────────────────────────────────────────────
    let mut wave_number = state.wave_number;
    let mut aliens = state.aliens.clone();
    if aliens.is_empty() {
        wave_number += 1;
        aliens = make_wave(area, state.sprites.alien, wave_number);
        info!(wave = wave_number, aliens = aliens.len(), "next wave");
    }

    // ── 7. Alien patrol & fire ───────────────────────────────────────────────
    let mut alien_shots = state.alien_shots.clone();
    let mut moved_aliens = Vec::with_capacity(aliens.len());
    for alien in &aliens {
        let alien = advance_alien(alien);
        if rng.gen_range(1..=10_000) > ALIEN_FIRE_THRESHOLD {
            let shot = aim_alien_shot(&alien, &player, state.sprites.alien_shot, rng);
            debug!(sx = shot.speed_x, sy = shot.speed_y, "alien fired");
            alien_shots.push(shot);
        }
        moved_aliens.push(alien);
    }
    let aliens = moved_aliens;

    // ── 8. Alien shots ───────────────────────────────────────────────────────
    let advanced: Vec<AlienShot> = alien_shots.iter().map(advance_alien_shot).collect();
    let mut alien_shots = reap_outsiders(advanced, &area, |s| s.rect);

    // ── 9. Collision: player shots ↔ aliens ──────────────────────────────────
    let mut explosions = state.explosions.clone();
    let (player_shots, aliens, destroyed) = resolve_shots_vs_aliens(player_shots, aliens);
    for alien in &destroyed {
        explosions.push(new_explosion(
            alien.rect.center(),
            ALIEN_EXPLOSION_RADIUS,
            ALIEN_EXPLOSION_COLOR,
        ));
    }
    if !destroyed.is_empty() {
        debug!(count = destroyed.len(), "aliens destroyed");
    }

    // ── 10. Collision: alien shots ↔ player ──────────────────────────────────
    let mut player = player;
    let mut time_of_death = state.time_of_death;
    let hit = if player.alive {
        alien_shots.iter().position(|s| s.rect.intersects(&player.rect))
    } else {
        None
    };
    if let Some(index) = hit {
        alien_shots.remove(index);
        player.alive = false;
        time_of_death = Some(now);
        explosions.push(new_explosion(
            player.rect.center(),
            PLAYER_EXPLOSION_RADIUS,
            PLAYER_EXPLOSION_COLOR,
        ));
        info!(lives = state.lives, "player destroyed");
    }

    // ── 11. Explosions ───────────────────────────────────────────────────────
    let explosions = explosions
        .iter()
        .map(advance_explosion)
        .filter(|e| !explosion_done(e))
        .collect();

    GameState {
        player,
        player_shots,
        has_shot,
        stars,
        wave_number,
        aliens,
        alien_shots,
        explosions,
        time_of_death,
        ..state
    }
}

/// Respawn a dead player once the delay has passed and a life is left, or
/// end the game when none are.
fn resolve_death(state: &GameState, now: Duration) -> GameState {
    if state.player.alive {
        return state.clone();
    }

    if state.lives > 0 {
        if !has_elapsed(state.time_of_death, now, state.respawn_delay) {
            return state.clone();
        }
        let lives = state.lives - 1;
        info!(lives, wave = state.wave_number, "player respawned");
        let rect = Rect::from_mid_left((0, state.area.height / 2), state.sprites.player);
        return GameState {
            alien_shots: Vec::new(),
            aliens: make_wave(state.area, state.sprites.alien, state.wave_number),
            player: Player {
                rect,
                alive: true,
                ..state.player.clone()
            },
            lives,
            ..state.clone()
        };
    }

    info!(wave = state.wave_number, "no lives left, game over");
    GameState {
        mode: GameMode::GameOver,
        gameover_time: Some(now),
        ..state.clone()
    }
}

/// A shot destroys every alien it overlaps that no earlier shot has already
/// claimed this tick, and is used up if it destroyed any.  Returns the
/// surviving shots, the surviving aliens and the destroyed aliens.
pub fn resolve_shots_vs_aliens(
    shots: Vec<PlayerShot>,
    aliens: Vec<Alien>,
) -> (Vec<PlayerShot>, Vec<Alien>, Vec<Alien>) {
    let mut killed_aliens: Vec<usize> = Vec::new();
    let mut used_shots: Vec<usize> = Vec::new();

    for (si, shot) in shots.iter().enumerate() {
        let hits: Vec<usize> = aliens
            .iter()
            .enumerate()
            .filter(|(ai, alien)| !killed_aliens.contains(ai) && shot.rect.intersects(&alien.rect))
            .map(|(ai, _)| ai)
            .collect();
        if !hits.is_empty() {
            killed_aliens.extend(hits);
            used_shots.push(si);
        }
    }

    let shots = shots
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !used_shots.contains(i))
        .map(|(_, s)| s)
        .collect();

    let (destroyed, survivors): (Vec<_>, Vec<_>) = aliens
        .into_iter()
        .enumerate()
        .partition(|(i, _)| killed_aliens.contains(i));

    (
        shots,
        survivors.into_iter().map(|(_, a)| a).collect(),
        destroyed.into_iter().map(|(_, a)| a).collect(),
    )
}

/// Shot from the alien's center, heading horizontally toward the player's
/// side and vertically with a random spread biased toward the player.
pub fn aim_alien_shot(
    alien: &Alien,
    player: &Player,
    shot_size: (i32, i32),
    rng: &mut impl Rng,
) -> AlienShot {
    let direction_x = if alien.rect.left() < player.rect.right() { 1.0 } else { -1.0 };
    let direction_y = if alien.rect.top() < player.rect.bottom() { 1.0 } else { -1.0 };

    let bias = ALIEN_SHOT_AIM_BIAS * direction_y;
    let speed_y = rng.gen_range((bias - ALIEN_SHOT_SPREAD)..=(bias + ALIEN_SHOT_SPREAD));
    let rect = Rect::from_center(alien.rect.center(), shot_size);
    new_alien_shot(rect, direction_x * ALIEN_SHOT_SPEED_X, speed_y)
}

/// Drop every object whose rect no longer overlaps the play area at all.
pub fn reap_outsiders<T>(objects: Vec<T>, area: &Rect, rect_of: impl Fn(&T) -> Rect) -> Vec<T> {
    objects
        .into_iter()
        .filter(|o| rect_of(o).intersects(area))
        .collect()
}

fn has_elapsed(since: Option<Duration>, now: Duration, delay: Duration) -> bool {
    since.map_or(true, |t| now.saturating_sub(t) >= delay)
}

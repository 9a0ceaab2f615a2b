/// Per-entity update rules.
///
/// Like the tick itself, every function here takes the current value and
/// returns the next one.

use crate::entities::{Alien, AlienShot, Color, Explosion, Player, PlayerInput, PlayerShot, Star};
use crate::geometry::Rect;

pub const PLAYER_SPEED: i32 = 2;
pub const PLAYER_SHOT_SPEED: i32 = 5;
pub const EXPLOSION_GROW_SPEED: i32 = 5;
pub const EXPLOSION_SHRINK_SPEED: i32 = 1;

// ── Constructors ─────────────────────────────────────────────────────────────

pub fn new_player(rect: Rect, area: Rect) -> Player {
    Player {
        rect,
        speed: PLAYER_SPEED,
        area,
        alive: true,
    }
}

pub fn new_player_shot(rect: Rect) -> PlayerShot {
    PlayerShot {
        rect,
        speed: PLAYER_SHOT_SPEED,
    }
}

pub fn new_alien_shot(rect: Rect, speed_x: f32, speed_y: f32) -> AlienShot {
    AlienShot {
        rect,
        x: rect.x as f32,
        y: rect.y as f32,
        speed_x,
        speed_y,
    }
}

pub fn new_alien(rect: Rect, movement_area: Rect, extra_speed: u32) -> Alien {
    Alien {
        rect,
        movement_area,
        speed: 1 + extra_speed as i32,
        moving_left: true,
    }
}

pub fn new_star(x: i32, y: i32, radius: i32, color: Color, speed: i32) -> Star {
    Star {
        x,
        y,
        radius,
        color,
        speed,
        rect: Rect::new(x - radius, y - radius, 2 * radius, 2 * radius),
    }
}

pub fn new_explosion(center: (i32, i32), max_radius: i32, color: Color) -> Explosion {
    Explosion {
        x: center.0,
        y: center.1,
        max_radius,
        color,
        current_radius: 0,
        growing: true,
    }
}

// ── Update rules ─────────────────────────────────────────────────────────────

/// Each direction is applied independently, and only if the moved edge stays
/// inside the player's area.
pub fn move_player(player: &Player, input: &PlayerInput) -> Player {
    let area = player.area;
    let step = player.speed;
    let mut rect = player.rect;

    if input.down && rect.bottom() + step <= area.bottom() {
        rect.y += step;
    }
    if input.up && rect.top() - step >= area.top() {
        rect.y -= step;
    }
    if input.right && rect.right() + step <= area.right() {
        rect.x += step;
    }
    if input.left && rect.left() - step >= area.left() {
        rect.x -= step;
    }

    Player {
        rect,
        ..player.clone()
    }
}

pub fn advance_player_shot(shot: &PlayerShot) -> PlayerShot {
    PlayerShot {
        rect: shot.rect.translated(shot.speed, 0),
        ..shot.clone()
    }
}

pub fn advance_alien_shot(shot: &AlienShot) -> AlienShot {
    let x = shot.x + shot.speed_x;
    let y = shot.y + shot.speed_y;
    AlienShot {
        rect: Rect {
            x: x as i32,
            y: y as i32,
            ..shot.rect
        },
        x,
        y,
        ..shot.clone()
    }
}

/// Horizontal patrol: turn right at the left edge, turn left at the right
/// edge, otherwise keep going.
pub fn advance_alien(alien: &Alien) -> Alien {
    let mut moving_left = alien.moving_left;
    if alien.rect.left() <= alien.movement_area.left() {
        moving_left = false;
    }
    if alien.rect.right() >= alien.movement_area.right() && !moving_left {
        moving_left = true;
    }

    let dx = if moving_left { -alien.speed } else { alien.speed };
    Alien {
        rect: alien.rect.translated(dx, 0),
        moving_left,
        ..alien.clone()
    }
}

pub fn move_star(star: &Star) -> Star {
    Star {
        x: star.x - star.speed,
        rect: star.rect.translated(-star.speed, 0),
        ..star.clone()
    }
}

pub fn advance_explosion(explosion: &Explosion) -> Explosion {
    let mut next = explosion.clone();
    if next.growing {
        next.current_radius += EXPLOSION_GROW_SPEED;
        if next.current_radius >= next.max_radius {
            next.growing = false;
        }
    } else {
        next.current_radius -= EXPLOSION_SHRINK_SPEED;
    }
    next
}

pub fn explosion_done(explosion: &Explosion) -> bool {
    explosion.current_radius <= 0
}

use approx::assert_relative_eq;

use sideways::entities::*;
use sideways::geometry::Rect;
use sideways::motion::*;

fn area() -> Rect {
    Rect::new(0, 0, 800, 560)
}

fn held(left: bool, right: bool, up: bool, down: bool) -> PlayerInput {
    PlayerInput {
        left,
        right,
        up,
        down,
        ..PlayerInput::default()
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_anchors() {
    let r = Rect::from_center((100, 50), (30, 20));
    assert_eq!(r, Rect::new(85, 40, 30, 20));
    assert_eq!(r.center(), (100, 50));
    assert_eq!(r.mid_right(), (115, 50));
    assert_eq!(Rect::from_mid_left((0, 280), (30, 20)), Rect::new(0, 270, 30, 20));
}

#[test]
fn rect_intersection_needs_positive_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.intersects(&Rect::new(9, 9, 5, 5)));
    assert!(a.intersects(&Rect::new(-5, -5, 20, 20)));
    // Shared edges only
    assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
    assert!(!a.intersects(&Rect::new(0, 10, 5, 5)));
    // Empty rectangles never collide
    assert!(!a.intersects(&Rect::new(5, 5, 0, 0)));
}

#[test]
fn rect_within() {
    let outer = area();
    assert!(Rect::new(0, 0, 800, 560).is_within(&outer));
    assert!(!Rect::new(790, 0, 20, 20).is_within(&outer));
    assert!(!Rect::new(0, -1, 20, 20).is_within(&outer));
}

// ── Player ────────────────────────────────────────────────────────────────────

#[test]
fn player_moves_two_pixels_per_direction() {
    let p = new_player(Rect::new(100, 100, 30, 20), area());
    assert_eq!(move_player(&p, &held(true, false, false, false)).rect.x, 98);
    assert_eq!(move_player(&p, &held(false, true, false, false)).rect.x, 102);
    assert_eq!(move_player(&p, &held(false, false, true, false)).rect.y, 98);
    assert_eq!(move_player(&p, &held(false, false, false, true)).rect.y, 102);
}

#[test]
fn opposite_directions_cancel() {
    let p = new_player(Rect::new(100, 100, 30, 20), area());
    let moved = move_player(&p, &held(true, true, true, true));
    assert_eq!(moved.rect, p.rect);
}

#[test]
fn player_blocked_at_edges() {
    let p = new_player(Rect::new(1, 0, 30, 20), area());
    let moved = move_player(&p, &held(true, false, true, false));
    assert_eq!(moved.rect, p.rect);

    let p = new_player(Rect::new(770, 540, 30, 20), area());
    let moved = move_player(&p, &held(false, true, false, true));
    assert_eq!(moved.rect, p.rect);
}

#[test]
fn player_move_preserves_other_fields() {
    let mut p = new_player(Rect::new(100, 100, 30, 20), area());
    p.alive = false;
    let moved = move_player(&p, &held(false, true, false, false));
    assert!(!moved.alive);
    assert_eq!(moved.area, area());
    assert_eq!(moved.speed, PLAYER_SPEED);
}

// ── Shots ─────────────────────────────────────────────────────────────────────

#[test]
fn player_shot_moves_right() {
    let shot = new_player_shot(Rect::new(10, 10, 10, 6));
    let shot = advance_player_shot(&advance_player_shot(&shot));
    assert_eq!(shot.rect, Rect::new(20, 10, 10, 6));
}

#[test]
fn alien_shot_tracks_float_position() {
    let shot = new_alien_shot(Rect::new(10, 10, 8, 8), 0.5, -0.3);

    let once = advance_alien_shot(&shot);
    assert_relative_eq!(once.x, 10.5);
    assert_relative_eq!(once.y, 9.7, epsilon = 1e-5);
    assert_eq!((once.rect.x, once.rect.y), (10, 9));

    let twice = advance_alien_shot(&once);
    assert_relative_eq!(twice.x, 11.0);
    assert_relative_eq!(twice.y, 9.4, epsilon = 1e-5);
    assert_eq!((twice.rect.x, twice.rect.y), (11, 9));
    assert_eq!((twice.rect.width, twice.rect.height), (8, 8));
}

#[test]
fn slow_alien_shot_does_not_drift() {
    let mut shot = new_alien_shot(Rect::new(0, 100, 8, 8), 0.25, 0.0);
    for _ in 0..40 {
        shot = advance_alien_shot(&shot);
    }
    assert_eq!(shot.rect.x, 10);
    assert_eq!(shot.rect.y, 100);
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[test]
fn alien_speed_includes_extra() {
    assert_eq!(new_alien(Rect::new(0, 0, 30, 20), area(), 0).speed, 1);
    assert_eq!(new_alien(Rect::new(0, 0, 30, 20), area(), 3).speed, 4);
}

#[test]
fn alien_enters_from_the_right() {
    let alien = new_alien(Rect::new(900, 100, 30, 20), area(), 0);
    let moved = advance_alien(&alien);
    assert!(moved.moving_left);
    assert_eq!(moved.rect.x, 899);
}

#[test]
fn alien_turns_at_left_edge() {
    let alien = new_alien(Rect::new(0, 100, 30, 20), area(), 1);
    let moved = advance_alien(&alien);
    assert!(!moved.moving_left);
    assert_eq!(moved.rect.x, 2);
}

#[test]
fn alien_turns_at_right_edge() {
    let mut alien = new_alien(Rect::new(770, 100, 30, 20), area(), 0);
    alien.moving_left = false;
    let moved = advance_alien(&alien);
    assert!(moved.moving_left);
    assert_eq!(moved.rect.x, 769);
}

#[test]
fn alien_patrols_between_edges() {
    let mut alien = new_alien(Rect::new(100, 100, 30, 20), Rect::new(0, 0, 200, 560), 0);
    for _ in 0..1000 {
        alien = advance_alien(&alien);
        assert!(alien.rect.left() >= -1 && alien.rect.right() <= 201);
        assert_eq!(alien.rect.y, 100);
    }
}

// ── Star ──────────────────────────────────────────────────────────────────────

#[test]
fn star_rect_surrounds_center() {
    let star = new_star(50, 60, 2, Color::rgb(240, 255, 200), 3);
    assert_eq!(star.rect, Rect::new(48, 58, 4, 4));
}

#[test]
fn star_moves_left_by_its_speed() {
    let star = new_star(50, 60, 2, Color::rgb(240, 255, 200), 3);
    let moved = move_star(&star);
    assert_eq!(moved.x, 47);
    assert_eq!(moved.rect.x, 45);
    assert_eq!(moved.y, 60);
    assert_eq!(moved.color, star.color);
}

// ── Explosion ─────────────────────────────────────────────────────────────────

#[test]
fn explosion_grows_by_five_then_shrinks_by_one() {
    let mut e = new_explosion((10, 10), 60, Color::rgb(255, 200, 0));
    assert_eq!(e.current_radius, 0);
    assert!(e.growing);

    let mut prev = e.current_radius;
    while e.growing {
        e = advance_explosion(&e);
        assert_eq!(e.current_radius, prev + 5);
        prev = e.current_radius;
    }
    assert_eq!(e.current_radius, 60);

    let mut steps = 0;
    while !explosion_done(&e) {
        e = advance_explosion(&e);
        assert_eq!(e.current_radius, prev - 1);
        prev = e.current_radius;
        steps += 1;
    }
    assert_eq!(steps, 60);
    assert_eq!(e.current_radius, 0);

    // Stays done.
    let e = advance_explosion(&e);
    assert!(explosion_done(&e));
}

#[test]
fn explosion_stops_growing_past_odd_radius() {
    let mut e = new_explosion((0, 0), 12, Color::rgb(255, 50, 0));
    for expected in [5, 10, 15] {
        e = advance_explosion(&e);
        assert_eq!(e.current_radius, expected);
    }
    assert!(!e.growing);
    e = advance_explosion(&e);
    assert_eq!(e.current_radius, 14);
}

// ── Data ──────────────────────────────────────────────────────────────────────

#[test]
fn enums_compare() {
    assert_eq!(GameMode::Playing, GameMode::Playing);
    assert_ne!(GameMode::Waiting, GameMode::GameOver);
    assert_eq!(PlayerInput::default(), PlayerInput::default());
    assert!(!PlayerInput::default().fire);
}

#[test]
fn alien_clone_is_independent() {
    let original = new_alien(Rect::new(10, 10, 30, 20), area(), 0);
    let mut cloned = original.clone();
    cloned.rect.x = 99;
    cloned.moving_left = false;
    assert_eq!(original.rect.x, 10);
    assert!(original.moving_left);
    assert_eq!(cloned.rect.x, 99);
    assert!(!cloned.moving_left);
    assert_ne!(cloned, original);
}

/// Alien wave layouts and starfield generation.
///
/// Both are pure functions of their arguments; randomness comes only through
/// the injected RNG.

use rand::Rng;

use crate::entities::{Alien, Color, Star};
use crate::geometry::Rect;
use crate::motion::{new_alien, new_star};

/// (dx, dy) offsets from the spawn anchor, one table per `wave_number % 3`.
const LINE: &[(i32, i32)] = &[(10, 0), (100, 0), (200, 0), (300, 0), (400, 0)];

const STAGGERED_V: &[(i32, i32)] = &[(10, 0), (100, 50), (100, -50), (200, 100), (200, -100)];

const DOUBLE_V: &[(i32, i32)] = &[
    (10, 0),
    (100, -50),
    (100, 0),
    (100, 50),
    (200, -100),
    (200, -50),
    (200, 0),
    (200, 50),
    (200, 100),
];

/// Chance of a new star on any given tick (or column, when seeding the sky).
const STAR_ONE_IN: u32 = 7;

pub fn extra_speed_for(wave_number: u32) -> u32 {
    wave_number / 3
}

fn layout_for(wave_number: u32) -> &'static [(i32, i32)] {
    match wave_number % 3 {
        0 => LINE,
        1 => STAGGERED_V,
        _ => DOUBLE_V,
    }
}

/// Build the aliens for `wave_number`.  Every alien is centered at
/// `(area.width + dx, area.height / 2 + dy)`, i.e. just beyond the right edge,
/// and patrols inside `area`.
pub fn make_wave(area: Rect, alien_size: (i32, i32), wave_number: u32) -> Vec<Alien> {
    assert!(
        alien_size.0 > 0 && alien_size.1 > 0,
        "alien sprite size must be positive, got {:?}",
        alien_size
    );

    let extra_speed = extra_speed_for(wave_number);
    layout_for(wave_number)
        .iter()
        .map(|&(dx, dy)| {
            let center = (area.width + dx, area.height / 2 + dy);
            new_alien(Rect::from_center(center, alien_size), area, extra_speed)
        })
        .collect()
}

pub fn should_have_star(rng: &mut impl Rng) -> bool {
    rng.gen_ratio(1, STAR_ONE_IN)
}

/// A new star at column `x`.  Radius starts at 1, never 0: a zero-radius
/// star has an empty rect, which never overlaps the play area, so it would be
/// reaped on the tick it appeared.
pub fn random_star_for_x(x: i32, height: i32, rng: &mut impl Rng) -> Star {
    let radius = rng.gen_range(1..=2);
    let y = rng.gen_range(0..=height);
    let red: u8 = rng.gen_range(230..=255);
    let blue: u8 = rng.gen_range(100..=255);
    let green: u8 = rng.gen_range(blue.saturating_add(50)..=255);
    let speed = rng.gen_range(1..=3);
    new_star(x, y, radius, Color::rgb(red, green, blue), speed)
}

/// Populate the whole sky, testing each column once.
pub fn initial_stars(area: Rect, rng: &mut impl Rng) -> Vec<Star> {
    (0..area.width)
        .filter_map(|x| {
            if should_have_star(rng) {
                Some(random_star_for_x(x, area.height, rng))
            } else {
                None
            }
        })
        .collect()
}

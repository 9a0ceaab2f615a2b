/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// pixel-space state into terminal cells and commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use sideways::entities::{Alien, AlienShot, Explosion, GameMode, GameState, PlayerShot, Star};

/// Play-area pixels covered by one terminal column / row.
pub const PX_PER_COL: i32 = 10;
pub const PX_PER_ROW: i32 = 20;

/// The status line takes the first terminal row; the play area starts below.
const PLAY_TOP_ROW: i32 = 1;

/// Points plotted along an explosion's edge.
const EXPLOSION_POINTS: usize = 24;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_PLAYER: Color = Color::White;
const C_PLAYER_SHOT: Color = Color::Cyan;
const C_ALIEN: Color = Color::Green;
const C_ALIEN_SHOT: Color = Color::Magenta;
const C_STATUS: Color = Color::Rgb { r: 150, g: 150, b: 150 };
const C_BANNER: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const C_HINT: Color = Color::DarkGrey;

/// Terminal cells needed to show the whole play area plus status and hint rows.
pub fn required_size(state: &GameState) -> (u16, u16) {
    let cols = (state.area.width + PX_PER_COL - 1) / PX_PER_COL;
    let rows = (state.area.height + PX_PER_ROW - 1) / PX_PER_ROW + PLAY_TOP_ROW + 1;
    (cols as u16, rows as u16)
}

/// Clip-aware cell lookup for one frame.
struct Viewport {
    cols: i32,
    rows: i32,
}

impl Viewport {
    fn new(state: &GameState, term: (u16, u16)) -> Self {
        let (need_cols, need_rows) = required_size(state);
        Viewport {
            cols: need_cols.min(term.0) as i32,
            // Leave the last row for the controls hint.
            rows: need_rows.min(term.1).saturating_sub(1) as i32,
        }
    }

    /// Terminal cell for a play-area pixel, if it is on screen.
    fn cell(&self, px: i32, py: i32) -> Option<(u16, u16)> {
        let col = px.div_euclid(PX_PER_COL);
        let row = py.div_euclid(PX_PER_ROW) + PLAY_TOP_ROW;
        if col < 0 || col >= self.cols || row < PLAY_TOP_ROW || row >= self.rows {
            return None;
        }
        Some((col as u16, row as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `term` is the current terminal size.
pub fn render<W: Write>(out: &mut W, state: &GameState, term: (u16, u16)) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let view = Viewport::new(state, term);
    match state.mode {
        GameMode::Playing => draw_playing(out, state, &view)?,
        GameMode::Waiting => draw_banner(out, &view, "Press fire to play")?,
        GameMode::GameOver => draw_banner(out, &view, "Game Over")?,
        GameMode::Restart => {}
    }
    draw_controls_hint(out, &view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, term.1.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_playing<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    for star in &state.stars {
        draw_star(out, view, star)?;
    }
    if state.player.alive {
        let r = state.player.rect;
        draw_sprite(out, view, r.x, r.center().1, "=)>", C_PLAYER)?;
    }
    for shot in &state.player_shots {
        draw_player_shot(out, view, shot)?;
    }
    for alien in &state.aliens {
        draw_alien(out, view, alien)?;
    }
    for shot in &state.alien_shots {
        draw_alien_shot(out, view, shot)?;
    }
    for explosion in &state.explosions {
        draw_explosion(out, view, explosion)?;
    }
    draw_status(out, state, view)
}

// ── Status line (row 0) ───────────────────────────────────────────────────────

fn draw_status<W: Write>(out: &mut W, state: &GameState, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_STATUS))?;

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Wave: {}", state.wave_number + 1)))?;

    let lives = format!("Lives: {}", state.lives);
    let col = (view.cols as u16).saturating_sub(lives.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(Print(lives))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Print `glyphs` starting at pixel `(px, py)`, one glyph per column, skipping
/// any that fall off screen.
fn draw_sprite<W: Write>(
    out: &mut W,
    view: &Viewport,
    px: i32,
    py: i32,
    glyphs: &str,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;
    for (i, glyph) in glyphs.chars().enumerate() {
        if let Some((col, row)) = view.cell(px + i as i32 * PX_PER_COL, py) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print(glyph))?;
        }
    }
    Ok(())
}

fn draw_star<W: Write>(out: &mut W, view: &Viewport, star: &Star) -> std::io::Result<()> {
    let (cx, cy) = star.rect.center();
    let glyph = if star.radius > 1 { "*" } else { "." };
    let c = star.color;
    draw_sprite(out, view, cx, cy, glyph, Color::Rgb { r: c.r, g: c.g, b: c.b })
}

fn draw_player_shot<W: Write>(out: &mut W, view: &Viewport, shot: &PlayerShot) -> std::io::Result<()> {
    let (cx, cy) = shot.rect.center();
    draw_sprite(out, view, cx, cy, "-", C_PLAYER_SHOT)
}

fn draw_alien<W: Write>(out: &mut W, view: &Viewport, alien: &Alien) -> std::io::Result<()> {
    let r = alien.rect;
    draw_sprite(out, view, r.x, r.center().1, "<O]", C_ALIEN)
}

fn draw_alien_shot<W: Write>(out: &mut W, view: &Viewport, shot: &AlienShot) -> std::io::Result<()> {
    let (cx, cy) = shot.rect.center();
    draw_sprite(out, view, cx, cy, "o", C_ALIEN_SHOT)
}

/// Outline of the current radius, plotted as points around the center.
fn draw_explosion<W: Write>(out: &mut W, view: &Viewport, explosion: &Explosion) -> std::io::Result<()> {
    let c = explosion.color;
    out.queue(style::SetForegroundColor(Color::Rgb { r: c.r, g: c.g, b: c.b }))?;

    let radius = explosion.current_radius.max(0) as f32;
    for i in 0..EXPLOSION_POINTS {
        let angle = i as f32 / EXPLOSION_POINTS as f32 * std::f32::consts::TAU;
        let px = explosion.x + (radius * angle.cos()) as i32;
        let py = explosion.y + (radius * angle.sin()) as i32;
        if let Some((col, row)) = view.cell(px, py) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print('#'))?;
        }
    }
    Ok(())
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(out: &mut W, view: &Viewport, text: &str) -> std::io::Result<()> {
    let col = (view.cols / 2 - text.chars().count() as i32 / 2).max(0);
    let row = (view.rows / 2).max(PLAY_TOP_ROW);
    out.queue(cursor::MoveTo(col as u16, row as u16))?;
    out.queue(style::SetForegroundColor(C_BANNER))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.max(0) as u16))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W A S D / arrows : Move   ENTER / SPACE : Fire   Q : Quit"))?;
    Ok(())
}

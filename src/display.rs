//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use platformer::constants::{GROUND_BAND_OFFSET, GROUND_Y};
use platformer::entities::{Entity, EntityKind, GameState, GameStatus, Ruleset};
use platformer::sprites::{SpriteSheet, Visual};
use platformer::viewport::Viewport;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_GROUND: Color = Color::Rgb { r: 0x65, g: 0x43, b: 0x21 };
const C_HUD_TITLE: Color = Color::Cyan;
const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_POWER_UP: Color = Color::Green;
const C_FIREBALL: Color = Color::Yellow;
const C_FLAG: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

fn glyph_color(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Player => C_PLAYER,
        EntityKind::Enemy => C_ENEMY,
        EntityKind::PowerUp => C_POWER_UP,
        EntityKind::Fireball => C_FIREBALL,
        EntityKind::Flag => C_FLAG,
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    viewport: &Viewport,
    sprites: &SpriteSheet,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_ground(out, viewport)?;
    for entity in state.entities() {
        draw_entity(out, entity, viewport, sprites)?;
    }

    draw_hud(out, state, viewport)?;
    draw_controls_hint(out, viewport)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, viewport)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Modal banner shown over the last frame when the flag is reached.
pub fn render_level_complete<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Green),
        ("║  LEVEL  COMPLETE!  ║", Color::Green),
        ("╚════════════════════╝", Color::Green),
        ("Press any key", Color::White),
    ];
    draw_centred_lines(out, viewport, lines)?;
    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_ground<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    let Some(top) = viewport.row_for(GROUND_Y + GROUND_BAND_OFFSET) else {
        return Ok(());
    };
    let bottom = Viewport::PLAY_TOP + viewport.play_rows();
    let band = " ".repeat(viewport.width as usize);

    out.queue(style::SetBackgroundColor(C_GROUND))?;
    for row in top..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&band))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(
    out: &mut W,
    entity: Entity<'_>,
    viewport: &Viewport,
    sprites: &SpriteSheet,
) -> std::io::Result<()> {
    let kind = entity.kind();
    match sprites.visual(kind) {
        Visual::Glyph(glyph) => {
            // One glyph in the cell under the box centre
            if let Some((col, row)) = viewport.centre_cell(entity.body()) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(style::SetForegroundColor(glyph_color(kind)))?;
                out.queue(Print(glyph))?;
            }
        }
        Visual::Image(sprite) => {
            let Some(cells) = viewport.cell_rect(entity.body()) else {
                return Ok(());
            };
            for dy in 0..cells.rows {
                for dx in 0..cells.cols {
                    let (col, row) = (cells.col + dx as i32, cells.row + dy as i32);
                    if !viewport.is_visible(col, row) {
                        continue;
                    }
                    let Some((r, g, b)) = sprite.sample(dx, dy, cells.cols, cells.rows) else {
                        continue;
                    };
                    out.queue(cursor::MoveTo(col as u16, row as u16))?;
                    out.queue(style::SetForegroundColor(Color::Rgb { r, g, b }))?;
                    out.queue(Print("█"))?;
                }
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, viewport: &Viewport) -> std::io::Result<()> {
    let title = match state.ruleset {
        Ruleset::Classic => "PLATFORMER [ CLASSIC ]",
        Ruleset::Arcade => "PLATFORMER [ ARCADE ]",
    };
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TITLE))?;
    out.queue(Print(title))?;

    // Score readout — Arcade only, right-aligned
    if state.ruleset == Ruleset::Arcade {
        let score_str = format!("Score:{:>4}", state.score);
        let col = viewport
            .width
            .saturating_sub(score_str.chars().count() as u16 + 1);
        out.queue(cursor::MoveTo(col, 0))?;
        out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        out.queue(Print(&score_str))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, viewport: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, viewport.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / ↑ : Jump   F : Fireball   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    viewport: &Viewport,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>4}", state.score);
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        ("R - Restart  Q - Quit", Color::White),
    ];
    draw_centred_lines(out, viewport, lines)
}

fn draw_centred_lines<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = viewport.width / 2;
    let start_row = (viewport.height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

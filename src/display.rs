//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer, the terminal `Viewport` and an
//! immutable view of the game state.  No game logic is performed; this
//! module only translates state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use dodge_hurdles::consts::{HEIGHT, WIDTH};
use dodge_hurdles::entities::{PlayerColor, Rect, SessionState, SessionStatus};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_HUD_SCORE: Color = Color::Yellow;
const C_STAR: Color = Color::White;
const C_POWER_UP: Color = Color::Green;
const C_SHIELDED: Color = Color::Cyan;
const C_SHIELD_ON: Color = Color::Green;
const C_SHIELD_OFF: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

pub fn player_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Red => Color::Red,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Green => Color::Green,
        PlayerColor::Yellow => Color::Yellow,
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Terminal size and the mapping from playfield units to cells.
///
/// Row 0 is the HUD, row 1 and row `height-2` are borders, the last row
/// holds the shield indicator and key hints.  The play area is everything
/// inside the border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// A rectangle in terminal cells, already clipped to the play area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    fn inner_cols(&self) -> i32 {
        i32::from(self.width.saturating_sub(2)).max(1)
    }

    fn inner_rows(&self) -> i32 {
        i32::from(self.height.saturating_sub(4)).max(1)
    }

    /// Project a playfield rectangle onto cells.  Anything wholly outside
    /// the play area (e.g. stars still above the top edge) yields `None`;
    /// anything visible covers at least one cell.
    pub fn project(&self, rect: &Rect) -> Option<CellRect> {
        let (cols, rows) = (self.inner_cols(), self.inner_rows());
        let c0 = (rect.x * cols).div_euclid(WIDTH);
        let c1 = (rect.right() * cols).div_euclid(WIDTH).max(c0 + 1);
        let r0 = (rect.y * rows).div_euclid(HEIGHT);
        let r1 = (rect.bottom() * rows).div_euclid(HEIGHT).max(r0 + 1);

        let (c0, c1) = (c0.max(0), c1.min(cols));
        let (r0, r1) = (r0.max(0), r1.min(rows));
        if c0 >= c1 || r0 >= r1 || rect.bottom() <= 0 || rect.y >= HEIGHT {
            return None;
        }
        Some(CellRect {
            col: 1 + c0 as u16,
            row: 2 + r0 as u16,
            cols: (c1 - c0) as u16,
            rows: (r1 - r0) as u16,
        })
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    view: Viewport,
    state: &SessionState,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, view, state)?;

    for star in &state.stars {
        fill(out, view, &star.rect, C_STAR, "█")?;
    }
    for power_up in &state.power_ups {
        fill(out, view, &power_up.rect, C_POWER_UP, "●")?;
    }

    let body = if state.shield_active() {
        C_SHIELDED
    } else {
        player_color(state.player.color)
    };
    fill(out, view, &state.player.rect, body, "█")?;

    draw_status_line(out, view, state)?;

    if state.status == SessionStatus::Lost {
        draw_game_over(out, view, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Draw the title screen with the colour picker.
pub fn render_menu<W: Write>(
    out: &mut W,
    view: Viewport,
    selected: PlayerColor,
    best: Option<u32>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cx = view.width / 2;
    let cy = view.height / 2;

    centered(out, cx, cy.saturating_sub(6), "Dodge Hurdles in Space", Color::Cyan)?;

    if let Some(best) = best {
        centered(out, cx, cy.saturating_sub(5), &format!("Best Score: {}", best), Color::Yellow)?;
    }

    centered(out, cx, cy.saturating_sub(3), "Customize Your Appearance:", Color::White)?;

    // Swatches: 6 cells each, 2 apart, highlighted with brackets
    let total = PlayerColor::ALL.len() as u16 * 8;
    let left = cx.saturating_sub(total / 2);
    for (i, color) in PlayerColor::ALL.iter().enumerate() {
        let col = left + i as u16 * 8;
        let (open, close) = if *color == selected { ("[", "]") } else { (" ", " ") };
        out.queue(cursor::MoveTo(col, cy.saturating_sub(1)))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(open))?;
        out.queue(style::SetForegroundColor(player_color(*color)))?;
        out.queue(Print("████"))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(close))?;
    }
    centered(out, cx, cy, selected.as_str(), player_color(selected))?;

    centered(out, cx, cy + 3, "Press ENTER to Start", Color::White)?;
    centered(out, cx, cy + 5, "← → : Choose colour   Q : Quit", C_HINT)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn centered<W: Write>(out: &mut W, cx: u16, row: u16, text: &str, color: Color) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(cx.saturating_sub(text.chars().count() as u16 / 2), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn fill<W: Write>(
    out: &mut W,
    view: Viewport,
    rect: &Rect,
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    let Some(cells) = view.project(rect) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(color))?;
    let line = glyph.repeat(cells.cols as usize);
    for row in cells.row..cells.row + cells.rows {
        out.queue(cursor::MoveTo(cells.col, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) and status line (last row) ────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: Viewport, state: &SessionState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Time: {:>4}s  ", state.elapsed_secs())))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>5}  Best:{:>5}",
        state.score, state.high_score
    )))?;

    let level = format!("Level: {}", state.level());
    let lx = view.width.saturating_sub(level.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(level))?;
    Ok(())
}

fn draw_status_line<W: Write>(
    out: &mut W,
    view: Viewport,
    state: &SessionState,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    if state.shield_active() {
        out.queue(style::SetForegroundColor(C_SHIELD_ON))?;
        out.queue(Print("Shield: ON "))?;
    } else {
        out.queue(style::SetForegroundColor(C_SHIELD_OFF))?;
        out.queue(Print("Shield: OFF"))?;
    }
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("   ← → / A D : Move   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    view: Viewport,
    state: &SessionState,
) -> std::io::Result<()> {
    let new_best = state.is_new_best();
    let score_line = format!("Final Score: {:>5}", state.score);
    let best_line = if new_best {
        format!("★ NEW BEST: {:>5} ★", state.score)
    } else {
        format!("Best Score:  {:>5}", state.high_score)
    };

    let lines: [(&str, Color); 6] = [
        ("╔════════════════════╗", Color::Red),
        ("║     You Lost!      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        (best_line.as_str(), if new_best { Color::Yellow } else { Color::DarkGrey }),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = view.width / 2;
    let start_row = (view.height / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, (msg, color)) in lines.iter().enumerate() {
        centered(out, cx, start_row + i as u16, msg, *color)?;
    }
    Ok(())
}

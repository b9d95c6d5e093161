/// Rendering layer. All terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// engine.  World coordinates are scaled onto the terminal's play area; no
/// game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use neon_shooter::engine::{GameEngine, GameListener};
use neon_shooter::entities::{Bullet, BulletOwner, Enemy, EnemyKind, RunState};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Magenta;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY_BASIC: Color = Color::Magenta;
const C_ENEMY_FAST: Color = Color::DarkMagenta;
const C_ENEMY_HEAVY: Color = Color::Red;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Terminal dimensions in cells.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
}

impl Screen {
    /// Map a world point onto a cell inside the border, or `None` when it
    /// falls outside the play area.
    fn cell(&self, x: f32, y: f32, world_w: f32, world_h: f32) -> Option<(u16, u16)> {
        let cols = self.width.saturating_sub(2) as f32;
        let rows = self.height.saturating_sub(4) as f32;
        if x < 0.0 || y < 0.0 || x >= world_w || y >= world_h {
            return None;
        }
        let col = 1 + (x / world_w * cols) as u16;
        let row = 2 + (y / world_h * rows) as u16;
        Some((col.min(self.width.saturating_sub(2)), row.min(self.height.saturating_sub(3))))
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.  `banner` is a transient message (e.g. a
/// level-up) shown under the HUD.
pub fn render<W: Write, L: GameListener>(
    out: &mut W,
    screen: Screen,
    engine: &GameEngine<L>,
    banner: Option<&str>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, screen)?;
    draw_hud(out, screen, engine)?;

    let world = engine.config().viewport;
    for enemy in engine.enemies().enemies() {
        draw_enemy(out, screen, enemy, world.width, world.height)?;
    }
    for bullet in engine
        .bullets()
        .player_bullets()
        .iter()
        .chain(engine.bullets().enemy_bullets())
    {
        draw_bullet(out, screen, bullet, world.width, world.height)?;
    }
    draw_player(out, screen, engine)?;
    draw_controls_hint(out, screen)?;

    if let Some(msg) = banner {
        draw_centered(out, screen, 3, msg, Color::Yellow)?;
    }
    match engine.state() {
        RunState::Paused => draw_paused(out, screen)?,
        RunState::Over => draw_game_over(out, screen, engine)?,
        RunState::Idle | RunState::Running => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Title screen shown while the engine is idle.
pub fn render_menu<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let cy = screen.height / 2;

    draw_centered(out, screen, cy.saturating_sub(5), "◆  N E O N   S H O O T E R  ◆", Color::Cyan)?;
    draw_centered(out, screen, cy.saturating_sub(3), "Hold the line against the swarm", Color::Magenta)?;

    let legend: &[(&str, Color)] = &[
        ("▼  basic  - steady descent", C_ENEMY_BASIC),
        ("◊  fast   - weaves side to side (level 2+)", C_ENEMY_FAST),
        ("■  heavy  - slow, armoured (level 3+)", C_ENEMY_HEAVY),
    ];
    for (i, (line, color)) in legend.iter().enumerate() {
        draw_centered(out, screen, cy.saturating_sub(1) + i as u16, line, *color)?;
    }

    draw_centered(out, screen, cy + 3, "ENTER / SPACE : Start     Q : Quit", Color::White)?;
    draw_centered(
        out,
        screen,
        cy + 5,
        "WASD / arrows : Move   SPACE : Shoot   P : Pause",
        C_HINT,
    )?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    let w = screen.width as usize;
    let h = screen.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(screen.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write, L: GameListener>(
    out: &mut W,
    screen: Screen,
    engine: &GameEngine<L>,
) -> std::io::Result<()> {
    let report = engine.report();

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("SCORE:{:>7}", report.score)))?;

    let level_str = format!("[ LEVEL {} ]", report.level);
    let lx = (screen.width / 2).saturating_sub(level_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Ten-segment integrity bar, coloured by remaining health
    let max = engine.player().max_health.max(1);
    let percent = report.health * 100 / max;
    let filled = (report.health * 10 / max).min(10) as usize;
    let bar = format!(
        "INTEGRITY {:>3}% {}{}",
        percent,
        "█".repeat(filled),
        "░".repeat(10 - filled)
    );
    let bar_color = if percent > 60 {
        Color::Green
    } else if percent > 30 {
        Color::Yellow
    } else {
        Color::Red
    };
    let rx = screen.width.saturating_sub(bar.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(bar_color))?;
    out.queue(Print(&bar))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write, L: GameListener>(
    out: &mut W,
    screen: Screen,
    engine: &GameEngine<L>,
) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← nose
    //  /█\      ← fuselage + wings
    let p = engine.player();
    let world = engine.config().viewport;
    let Some((col, row)) = screen.cell(p.x, p.y, world.width, world.height) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;
    if row + 1 < screen.height.saturating_sub(2) {
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row + 1))?;
        out.queue(Print("/█\\"))?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(
    out: &mut W,
    screen: Screen,
    enemy: &Enemy,
    world_w: f32,
    world_h: f32,
) -> std::io::Result<()> {
    let Some((col, row)) = screen.cell(enemy.x, enemy.y, world_w, world_h) else {
        return Ok(());
    };
    let (sprite, color) = match enemy.kind {
        EnemyKind::Basic => ("«▼»", C_ENEMY_BASIC),
        EnemyKind::Fast => ("◊", C_ENEMY_FAST),
        EnemyKind::Heavy => ("[■]", C_ENEMY_HEAVY),
    };
    let width = sprite.chars().count() as u16;
    out.queue(cursor::MoveTo(col.saturating_sub(width / 2).max(1), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn draw_bullet<W: Write>(
    out: &mut W,
    screen: Screen,
    bullet: &Bullet,
    world_w: f32,
    world_h: f32,
) -> std::io::Result<()> {
    let Some((col, row)) = screen.cell(bullet.x, bullet.y, world_w, world_h) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    match bullet.owner {
        BulletOwner::Player => {
            out.queue(style::SetForegroundColor(C_BULLET_PLAYER))?;
            out.queue(Print("║"))?;
        }
        BulletOwner::Enemy => {
            out.queue(style::SetForegroundColor(C_BULLET_ENEMY))?;
            out.queue(Print("↓"))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, screen.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("WASD / arrows : Move   SPACE : Shoot   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    screen: Screen,
    row: u16,
    msg: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (screen.width / 2).saturating_sub(msg.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(msg))?;
    Ok(())
}

fn draw_paused<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    let cy = screen.height / 2;
    draw_centered(out, screen, cy.saturating_sub(1), "SYSTEM PAUSED", Color::Cyan)?;
    draw_centered(out, screen, cy + 1, "P - Resume", Color::White)?;
    Ok(())
}

fn draw_game_over<W: Write, L: GameListener>(
    out: &mut W,
    screen: Screen,
    engine: &GameEngine<L>,
) -> std::io::Result<()> {
    let report = engine.report();
    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║   SYSTEM FAILURE   ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let start_row = (screen.height / 2).saturating_sub(3);
    for (i, (msg, color)) in lines.iter().enumerate() {
        draw_centered(out, screen, start_row + i as u16, msg, *color)?;
    }

    let score_row = start_row + lines.len() as u16;
    draw_centered(
        out,
        screen,
        score_row,
        &format!("Final Score: {:>6}", report.score),
        Color::Yellow,
    )?;
    draw_centered(
        out,
        screen,
        score_row + 1,
        &format!("Level Reached: {:>4}", report.level),
        Color::Magenta,
    )?;
    draw_centered(
        out,
        screen,
        score_row + 2,
        "R - Play Again   M - Menu   Q - Quit",
        Color::White,
    )?;
    Ok(())
}

//! All game entity types — pure data, no logic beyond geometry.

use crate::constants::{
    FIREBALL_SIZE, FIREBALL_SPEED, FLAG_HEIGHT, FLAG_WIDTH, FLAG_X, GROUND_Y, PLAYER_SIZE,
    PLAYER_START_X,
};
use crate::events::FrameEvent;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box, `(x, y)` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn centre(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

// ── Rulesets & status ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ruleset {
    /// Side hits send the player back to the start; no score.
    Classic,
    /// Stomps score a point; a side hit ends the run.
    Arcade,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Enemy,
    PowerUp,
    Fireball,
    Flag,
}

/// The player only ever moves vertically under its own power.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Rect,
    pub vy: f32,
}

impl Player {
    pub fn at_start() -> Self {
        Self {
            body: Rect::new(PLAYER_START_X, GROUND_Y, PLAYER_SIZE, PLAYER_SIZE),
            vy: 0.0,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.body.y >= GROUND_Y
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Rect,
    pub vx: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub body: Rect,
    pub vx: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fireball {
    pub body: Rect,
    pub vx: f32,
}

impl Fireball {
    /// Launched from the player's leading edge, halfway down its box.
    pub fn launched_by(player: &Player) -> Self {
        Self {
            body: Rect::new(
                player.body.right(),
                player.body.y + player.body.h / 2.0,
                FIREBALL_SIZE,
                FIREBALL_SIZE,
            ),
            vx: FIREBALL_SPEED,
        }
    }
}

/// Level-end marker. Static: it has no velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct Flag {
    pub body: Rect,
}

impl Default for Flag {
    fn default() -> Self {
        Self {
            body: Rect::new(FLAG_X, GROUND_Y - FLAG_HEIGHT, FLAG_WIDTH, FLAG_HEIGHT),
        }
    }
}

/// Borrowed view over any live entity, used where every kind is handled
/// uniformly (drawing).
#[derive(Clone, Copy, Debug)]
pub enum Entity<'a> {
    Player(&'a Player),
    Enemy(&'a Enemy),
    PowerUp(&'a PowerUp),
    Fireball(&'a Fireball),
    Flag(&'a Flag),
}

impl Entity<'_> {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Enemy(_) => EntityKind::Enemy,
            Entity::PowerUp(_) => EntityKind::PowerUp,
            Entity::Fireball(_) => EntityKind::Fireball,
            Entity::Flag(_) => EntityKind::Flag,
        }
    }

    pub fn body(&self) -> &Rect {
        match self {
            Entity::Player(p) => &p.body,
            Entity::Enemy(e) => &e.body,
            Entity::PowerUp(p) => &p.body,
            Entity::Fireball(f) => &f.body,
            Entity::Flag(f) => &f.body,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything that survives from one frame to the next.  Cloneable so the
/// update functions can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub ruleset: Ruleset,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub fireballs: Vec<Fireball>,
    pub flag: Flag,
    /// Milliseconds accumulated towards the next enemy spawn.
    pub enemy_timer: f32,
    /// Milliseconds accumulated towards the next power-up spawn.
    pub power_up_timer: f32,
    /// One-shot latch: set the first time the player touches the flag.
    pub flag_reached: bool,
    pub score: u32,
    pub status: GameStatus,
    pub frame: u64,
    /// What happened during the most recent tick.
    pub events: Vec<FrameEvent>,
}

impl GameState {
    /// Every live entity in draw order: flag, player, enemies, power-ups,
    /// fireballs.
    pub fn entities(&self) -> impl Iterator<Item = Entity<'_>> {
        std::iter::once(Entity::Flag(&self.flag))
            .chain(std::iter::once(Entity::Player(&self.player)))
            .chain(self.enemies.iter().map(Entity::Enemy))
            .chain(self.power_ups.iter().map(Entity::PowerUp))
            .chain(self.fireballs.iter().map(Entity::Fireball))
    }
}

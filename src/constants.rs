//! Tuning constants, all in canvas units (1 unit ≈ 1 browser pixel).
//!
//! Velocities are per tick, timers are in milliseconds.

// ── Canvas ────────────────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 400.0;
/// Top edge of the player's box when standing.
pub const GROUND_Y: f32 = CANVAS_HEIGHT - 50.0;
/// The painted ground band starts this far below `GROUND_Y`.
pub const GROUND_BAND_OFFSET: f32 = 10.0;

// ── Physics ───────────────────────────────────────────────────────────────────

pub const GRAVITY: f32 = 0.6;
pub const JUMP_STRENGTH: f32 = -12.0;
pub const STOMP_BOUNCE: f32 = JUMP_STRENGTH / 2.0;
pub const POWER_UP_IMPULSE: f32 = JUMP_STRENGTH * 1.5;
pub const MOVE_SPEED: f32 = 2.0;
pub const FIREBALL_SPEED: f32 = 5.0;
/// Player bottom must be above enemy top + this for a hit to count as a stomp.
pub const STOMP_TOLERANCE: f32 = 10.0;

// ── Entity geometry ───────────────────────────────────────────────────────────

pub const PLAYER_START_X: f32 = 50.0;
pub const PLAYER_SIZE: f32 = 30.0;
pub const ENEMY_SIZE: f32 = 30.0;
pub const POWER_UP_SIZE: f32 = 20.0;
pub const POWER_UP_LIFT: f32 = 60.0;
pub const FIREBALL_SIZE: f32 = 20.0;
pub const FLAG_X: f32 = 2000.0;
pub const FLAG_WIDTH: f32 = 20.0;
pub const FLAG_HEIGHT: f32 = 80.0;

// ── Spawning ──────────────────────────────────────────────────────────────────

pub const ENEMY_SPAWN_MS: f32 = 2000.0;
pub const POWER_UP_SPAWN_MS: f32 = 3000.0;
/// New entities appear somewhere in `[CANVAS_WIDTH, CANVAS_WIDTH + SPAWN_JITTER)`.
pub const SPAWN_JITTER: f32 = 300.0;

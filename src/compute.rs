//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG.
//!
//! Velocities are integrated once per tick regardless of how long the frame
//! took; only the spawn timers consume the elapsed time.

use rand::Rng;

use crate::constants::{
    CANVAS_WIDTH, ENEMY_SIZE, ENEMY_SPAWN_MS, GRAVITY, GROUND_Y, JUMP_STRENGTH, MOVE_SPEED,
    POWER_UP_IMPULSE, POWER_UP_LIFT, POWER_UP_SIZE, POWER_UP_SPAWN_MS, SPAWN_JITTER,
    STOMP_BOUNCE, STOMP_TOLERANCE,
};
use crate::entities::{
    Enemy, Fireball, Flag, GameState, GameStatus, Player, PowerUp, Rect, Ruleset,
};
use crate::events::FrameEvent;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state for a ruleset.
pub fn init_state(ruleset: Ruleset) -> GameState {
    GameState {
        ruleset,
        player: Player::at_start(),
        enemies: Vec::new(),
        power_ups: Vec::new(),
        fireballs: Vec::new(),
        flag: Flag::default(),
        enemy_timer: 0.0,
        power_up_timer: 0.0,
        flag_reached: false,
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
        events: Vec::new(),
    }
}

/// Start a fresh session under the same ruleset.
pub fn restart(state: &GameState) -> GameState {
    init_state(state.ruleset)
}

fn spawn_x(rng: &mut impl Rng) -> f32 {
    CANVAS_WIDTH + rng.gen_range(0.0..SPAWN_JITTER)
}

fn spawn_enemy(rng: &mut impl Rng) -> Enemy {
    Enemy {
        body: Rect::new(spawn_x(rng), GROUND_Y, ENEMY_SIZE, ENEMY_SIZE),
        vx: -MOVE_SPEED,
    }
}

fn spawn_power_up(rng: &mut impl Rng) -> PowerUp {
    PowerUp {
        body: Rect::new(
            spawn_x(rng),
            GROUND_Y - POWER_UP_LIFT,
            POWER_UP_SIZE,
            POWER_UP_SIZE,
        ),
        vx: -MOVE_SPEED,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Jump only from the ground: no impulse while airborne.
pub fn jump(state: &GameState) -> GameState {
    if state.status == GameStatus::GameOver || !state.player.on_ground() {
        return state.clone();
    }
    GameState {
        player: Player {
            vy: JUMP_STRENGTH,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Launch a fireball rightwards.  No cooldown and no cap.
pub fn fire(state: &GameState) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let mut fireballs = state.fireballs.clone();
    fireballs.push(Fireball::launched_by(&state.player));
    GameState {
        fireballs,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  `dt_ms` only feeds the spawn
/// timers.  A finished game is returned unchanged.
pub fn tick(state: &GameState, dt_ms: f32, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let mut events = Vec::new();
    let mut score = state.score;
    let mut status = state.status;

    // ── 1. Player physics ────────────────────────────────────────────────────
    let mut player = state.player.clone();
    player.vy += GRAVITY;
    player.body.y += player.vy;
    if player.body.y > GROUND_Y {
        player.body.y = GROUND_Y;
        player.vy = 0.0;
    }

    // ── 2. Scroll everything that moves ──────────────────────────────────────
    let enemies = state.enemies.iter().map(|e| Enemy {
        body: Rect {
            x: e.body.x + e.vx,
            ..e.body
        },
        vx: e.vx,
    });
    let power_ups = state.power_ups.iter().map(|p| PowerUp {
        body: Rect {
            x: p.body.x + p.vx,
            ..p.body
        },
        vx: p.vx,
    });
    let fireballs = state.fireballs.iter().map(|f| Fireball {
        body: Rect {
            x: f.body.x + f.vx,
            ..f.body
        },
        vx: f.vx,
    });

    // ── 3. Player ↔ enemies ──────────────────────────────────────────────────
    let mut surviving_enemies: Vec<Enemy> = Vec::with_capacity(state.enemies.len());
    for enemy in enemies {
        if enemy.body.right() < 0.0 {
            continue;
        }
        if player.body.intersects(&enemy.body) {
            if player.body.bottom() < enemy.body.y + STOMP_TOLERANCE {
                player.vy = STOMP_BOUNCE;
                if state.ruleset == Ruleset::Arcade {
                    score += 1;
                }
                events.push(FrameEvent::EnemyStomped { score });
                continue;
            }
            match state.ruleset {
                Ruleset::Classic => {
                    player = Player::at_start();
                    events.push(FrameEvent::PlayerReset);
                }
                Ruleset::Arcade if status == GameStatus::Playing => {
                    status = GameStatus::GameOver;
                    events.push(FrameEvent::GameOver { score });
                }
                Ruleset::Arcade => {}
            }
        }
        surviving_enemies.push(enemy);
    }
    let mut enemies = surviving_enemies;

    // ── 4. Player ↔ power-ups ────────────────────────────────────────────────
    let mut surviving_power_ups: Vec<PowerUp> = Vec::with_capacity(state.power_ups.len());
    for power_up in power_ups {
        if power_up.body.right() < 0.0 {
            continue;
        }
        if player.body.intersects(&power_up.body) {
            player.vy = POWER_UP_IMPULSE;
            events.push(FrameEvent::PowerUpCollected);
            continue;
        }
        surviving_power_ups.push(power_up);
    }

    // ── 5. Fireballs ↔ enemies ───────────────────────────────────────────────
    let mut surviving_fireballs: Vec<Fireball> = Vec::with_capacity(state.fireballs.len());
    for fireball in fireballs {
        if fireball.body.x > CANVAS_WIDTH {
            continue;
        }
        let before = enemies.len();
        enemies.retain(|e| !fireball.body.intersects(&e.body));
        let killed = before - enemies.len();
        if killed > 0 {
            events.push(FrameEvent::FireballHit { enemies: killed });
            continue;
        }
        surviving_fireballs.push(fireball);
    }

    // ── 6. Level end ─────────────────────────────────────────────────────────
    let mut flag_reached = state.flag_reached;
    if !flag_reached && player.body.intersects(&state.flag.body) {
        flag_reached = true;
        events.push(FrameEvent::LevelComplete);
    }

    // ── 7. Spawn timers ──────────────────────────────────────────────────────
    let mut enemy_timer = state.enemy_timer + dt_ms;
    if enemy_timer > ENEMY_SPAWN_MS {
        let enemy = spawn_enemy(rng);
        events.push(FrameEvent::EnemySpawned { x: enemy.body.x });
        enemies.push(enemy);
        enemy_timer = 0.0;
    }
    let mut power_up_timer = state.power_up_timer + dt_ms;
    if power_up_timer > POWER_UP_SPAWN_MS {
        let power_up = spawn_power_up(rng);
        events.push(FrameEvent::PowerUpSpawned { x: power_up.body.x });
        surviving_power_ups.push(power_up);
        power_up_timer = 0.0;
    }

    GameState {
        player,
        enemies,
        power_ups: surviving_power_ups,
        fireballs: surviving_fireballs,
        enemy_timer,
        power_up_timer,
        flag_reached,
        score,
        status,
        frame: state.frame + 1,
        events,
        ..state.clone()
    }
}

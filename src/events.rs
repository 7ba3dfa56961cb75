/// Something noteworthy that happened during a single tick.  The loop reads
/// these after `tick` to drive the UI (level-complete modal, game-over
/// overlay) and the log.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
    EnemySpawned { x: f32 },
    PowerUpSpawned { x: f32 },
    EnemyStomped { score: u32 },
    /// Classic ruleset: a side hit sent the player back to the start.
    PlayerReset,
    /// Arcade ruleset: a side hit ended the run.
    GameOver { score: u32 },
    PowerUpCollected,
    FireballHit { enemies: usize },
    LevelComplete,
}

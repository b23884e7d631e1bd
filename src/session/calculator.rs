use super::models::SessionMetrics;

/// Points per unit of each metric that contributes to the score
pub mod weights {
    pub const GEM: i32 = 100;
    pub const ENEMY: i32 = 50;
    pub const LIFE: i32 = 200;
    pub const DAMAGE: i32 = 10;
    /// Ceiling of the time bonus, reached by an instant finish
    pub const TIME_BONUS_MAX: i32 = 1000;
    /// Bonus points lost per second of play
    pub const TIME_BONUS_DECAY: f32 = 2.0;
}

pub trait ScoreCalculator: Send + Sync {
    /// Derives the total score for a session. Never negative, never fails.
    fn calculate(&self, metrics: &SessionMetrics) -> i32;
}

/// The standard scoring rule: gems and kills add points, lost lives and
/// damage subtract them, and shorter sessions earn a time bonus.
///
/// Jumps, shots and deaths are tracked but not scored. Arithmetic is 32-bit
/// wrapping so huge counters behave exactly like the fixed-width formula
/// instead of panicking.
#[derive(Debug, Clone, Copy)]
pub struct StandardScoreCalculator;

impl Default for StandardScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardScoreCalculator {
    pub fn new() -> Self {
        Self
    }

    fn base_score(metrics: &SessionMetrics) -> i32 {
        metrics
            .gems_collected
            .wrapping_mul(weights::GEM)
            .wrapping_add(metrics.enemies_defeated.wrapping_mul(weights::ENEMY))
            .wrapping_sub(metrics.lives_spent.wrapping_mul(weights::LIFE))
            .wrapping_sub(metrics.damage_taken.wrapping_mul(weights::DAMAGE))
    }

    fn time_bonus(session_duration: f32) -> i32 {
        if session_duration > 0.0 {
            // `as` truncates toward zero and saturates at the i32 bounds
            let elapsed = (session_duration * weights::TIME_BONUS_DECAY) as i32;
            weights::TIME_BONUS_MAX.wrapping_sub(elapsed).max(0)
        } else {
            0
        }
    }
}

impl ScoreCalculator for StandardScoreCalculator {
    fn calculate(&self, metrics: &SessionMetrics) -> i32 {
        Self::base_score(metrics)
            .wrapping_add(Self::time_bonus(metrics.session_duration))
            .max(0)
    }
}

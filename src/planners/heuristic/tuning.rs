/// Thresholds used by the goal cascade.
///
/// These values were picked by playing matches, not derived from anything.
/// Treat them as knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Escape home when carrying at least this many diamonds...
    pub escape_min_carried: i32,
    /// ...and an enemy is within this direct distance.
    pub escape_enemy_radius: i32,

    /// Spare turns kept when racing the clock back to base.
    pub return_time_buffer: i32,
    /// Start securing a slim lead once `time_left <= steps_to_base * factor`.
    pub secure_lead_time_factor: f64,

    pub last_dash_max_time: i32,
    pub last_dash_max_reach: i32,
    pub last_dash_min_buffer: i32,

    /// Enemies carrying fewer diamonds than this are not worth a tackle.
    pub tackle_min_enemy_carried: i32,
    /// Below this own load an adjacent tackle is always taken.
    pub tackle_low_own_carried: i32,
    pub proactive_tackle_distance: i32,
    /// Near-full bots only tackle when their score is below this share of the best opponent.
    pub risky_tackle_score_ratio: f64,

    pub button_scarce_diamonds: usize,
    pub button_sparse_diamonds: usize,
    pub button_detour_margin: i32,
    pub button_far_diamond: i32,

    pub primed_min_carried: i32,
    pub primed_radius: i32,
    pub primed_min_nearby: usize,
    pub disruption_button_reach: i32,

    pub behind_score_ratio: f64,
    pub behind_max_diamonds: usize,
    pub behind_button_reach: i32,

    /// A red diamond is preferred unless the nearest blue is more than this many steps closer.
    pub red_preference_margin: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            escape_min_carried: 3,
            escape_enemy_radius: 2,
            return_time_buffer: 4,
            secure_lead_time_factor: 1.8,
            last_dash_max_time: 10,
            last_dash_max_reach: 2,
            last_dash_min_buffer: 1,
            tackle_min_enemy_carried: 2,
            tackle_low_own_carried: 2,
            proactive_tackle_distance: 2,
            risky_tackle_score_ratio: 0.5,
            button_scarce_diamonds: 4,
            button_sparse_diamonds: 8,
            button_detour_margin: 2,
            button_far_diamond: 7,
            primed_min_carried: 3,
            primed_radius: 3,
            primed_min_nearby: 2,
            disruption_button_reach: 4,
            behind_score_ratio: 0.6,
            behind_max_diamonds: 6,
            behind_button_reach: 5,
            red_preference_margin: 2,
        }
    }
}

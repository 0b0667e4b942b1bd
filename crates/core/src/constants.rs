/// Number of past workouts shown in an exercise's history.
pub const DEFAULT_HISTORY_LIMIT: usize = 4;

/// Unit label appended to formatted weights.
pub const WEIGHT_UNIT: &str = "lbs";

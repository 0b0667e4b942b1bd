/// Muscle group identifiers as stored and serialized.
pub const MUSCLE_GROUP_LEGS: &str = "legs";
pub const MUSCLE_GROUP_PUSH: &str = "push";
pub const MUSCLE_GROUP_PULL: &str = "pull";

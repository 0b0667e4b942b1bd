//! Built-in exercise catalog inserted on first launch.

use super::exercises_model::{MuscleGroup, NewExerciseTemplate};

/// Number of exercises in the built-in catalog.
pub const DEFAULT_CATALOG_SIZE: usize = 25;

/// Returns the built-in catalog. Every entry starts without a personal best.
pub fn default_catalog() -> Vec<NewExerciseTemplate> {
    use MuscleGroup::{Legs, Pull, Push};

    [
        // Push
        ("Bench Press", "Barbell press lying on a flat bench", Push, 180),
        ("Incline Bench Press", "Barbell press on a 30-45 degree incline", Push, 150),
        ("Dumbbell Bench Press", "Flat bench press with a dumbbell in each hand", Push, 120),
        ("Overhead Press", "Standing barbell press from shoulders to lockout", Push, 150),
        ("Dumbbell Shoulder Press", "Seated press with dumbbells overhead", Push, 120),
        ("Dumbbell Flyes", "Wide-arc chest fly on a flat bench", Push, 90),
        ("Dips", "Bodyweight or weighted dips on parallel bars", Push, 120),
        ("Tricep Pushdown", "Cable pushdown with a bar or rope attachment", Push, 60),
        ("Skull Crushers", "Lying EZ-bar extension to the forehead", Push, 90),
        // Pull
        ("Deadlift", "Conventional barbell pull from the floor", Pull, 240),
        ("Bent-over Rows", "Hip-hinged barbell row to the lower chest", Pull, 150),
        ("Pull-ups", "Overhand grip pull to chin over bar", Pull, 120),
        ("Lat Pulldown", "Cable pulldown to the upper chest", Pull, 90),
        ("Seated Cable Row", "Neutral-grip cable row to the torso", Pull, 90),
        ("Face Pulls", "Rope pull toward the face with external rotation", Pull, 60),
        ("Lateral Raises", "Dumbbell raise to shoulder height out to the sides", Pull, 60),
        ("Barbell Curl", "Standing curl with a straight barbell", Pull, 60),
        ("Hammer Curl", "Neutral-grip dumbbell curl", Pull, 60),
        // Legs
        ("Back Squat", "High-bar or low-bar barbell squat", Legs, 240),
        ("Front Squat", "Barbell squat with the bar racked on the front delts", Legs, 180),
        ("Romanian Deadlift", "Stiff-legged hinge with a barbell", Legs, 150),
        ("Leg Press", "Sled press on the leg press machine", Legs, 150),
        ("Walking Lunges", "Alternating forward lunges with dumbbells", Legs, 90),
        ("Leg Curl", "Machine hamstring curl", Legs, 60),
        ("Standing Calf Raise", "Calf raise on a machine or step", Legs, 60),
    ]
    .into_iter()
    .map(|(name, description, group, rest)| {
        NewExerciseTemplate::new(name, description, group, rest)
    })
    .collect()
}

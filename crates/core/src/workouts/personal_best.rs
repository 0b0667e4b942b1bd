//! Personal-best tracking for finished workouts.

use std::collections::HashMap;

use crate::exercises::ExerciseTemplate;

use super::workouts_model::{PersonalBestUpdate, Workout};

/// Computes the personal bests a workout raises.
///
/// For every exercise the heaviest set weight (0 without sets) becomes the new
/// best when the template has none yet, or when it beats the recorded one.
/// Bests never go down. Exercises whose template is missing from `templates`
/// are skipped.
pub fn personal_best_updates(
    workout: &Workout,
    templates: &HashMap<String, ExerciseTemplate>,
) -> Vec<PersonalBestUpdate> {
    workout
        .exercises
        .iter()
        .filter_map(|exercise| {
            let template = templates.get(&exercise.template_id)?;
            let max_weight = exercise.max_weight();
            let improved = match template.personal_best {
                None => true,
                Some(best) => max_weight > best,
            };
            improved.then(|| PersonalBestUpdate {
                template_id: template.id.clone(),
                previous: template.personal_best,
                personal_best: max_weight,
            })
        })
        .collect()
}

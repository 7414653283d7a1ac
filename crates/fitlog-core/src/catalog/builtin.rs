//! Built-in reference data: seed exercises per category and prescribed
//! workout plans.
//!
//! Built-in entries are never mutated at runtime; user additions are
//! merged on top by the resolver.

use super::model::Category;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// One prescribed exercise inside a built-in workout plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanExercise {
    pub name: &'static str,
    pub sets: u32,
    /// Free-form rep prescription, e.g. "10-12" or "60 sec"
    pub reps: &'static str,
}

/// A built-in workout plan shown when a category is selected from the
/// main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub category: Category,
    pub description: &'static str,
    pub exercises: Vec<PlanExercise>,
}

static BUILTIN_EXERCISES: Lazy<BTreeMap<Category, Vec<&'static str>>> = Lazy::new(|| {
    BTreeMap::from([
        (
            Category::UpperBody,
            vec!["Push-ups", "Dumbbell press", "Upright row"],
        ),
        (
            Category::LowerBody,
            vec!["Squats", "Lunges", "Glute bridge"],
        ),
        (
            Category::Core,
            vec!["Plank", "Leg raises", "Crunches", "Side plank"],
        ),
        (
            Category::Flexibility,
            vec!["Forward fold", "Back stretch", "Butterfly stretch"],
        ),
    ])
});

static BUILTIN_PLANS: Lazy<Vec<WorkoutPlan>> = Lazy::new(|| {
    vec![
        WorkoutPlan {
            category: Category::UpperBody,
            description: "Biceps and triceps day",
            exercises: vec![
                PlanExercise { name: "Barbell curl", sets: 4, reps: "10-12" },
                PlanExercise { name: "Hammer curl", sets: 3, reps: "12" },
                PlanExercise { name: "Chin-ups", sets: 3, reps: "8-10" },
                PlanExercise { name: "Close-grip bench press", sets: 4, reps: "10" },
                PlanExercise { name: "Lying triceps extension", sets: 3, reps: "12" },
                PlanExercise { name: "Rope pushdown", sets: 3, reps: "15" },
            ],
        },
        WorkoutPlan {
            category: Category::LowerBody,
            description: "Leg day",
            exercises: vec![
                PlanExercise { name: "Barbell squat", sets: 4, reps: "8-10" },
                PlanExercise { name: "Leg press", sets: 3, reps: "12" },
                PlanExercise { name: "Dumbbell lunges", sets: 3, reps: "10 per leg" },
                PlanExercise { name: "Romanian deadlift", sets: 4, reps: "10" },
                PlanExercise { name: "Standing calf raise", sets: 4, reps: "15-20" },
            ],
        },
        WorkoutPlan {
            category: Category::Core,
            description: "Core work",
            exercises: vec![
                PlanExercise { name: "Hanging leg raise", sets: 4, reps: "15-20" },
                PlanExercise { name: "Weighted crunches", sets: 3, reps: "20" },
                PlanExercise { name: "Plank", sets: 3, reps: "60 sec" },
                PlanExercise { name: "Side crunches", sets: 3, reps: "15 per side" },
                PlanExercise { name: "Back extension", sets: 3, reps: "15" },
            ],
        },
    ]
});

/// Returns the built-in exercise lists, keyed by category.
pub fn builtin_exercises() -> &'static BTreeMap<Category, Vec<&'static str>> {
    &BUILTIN_EXERCISES
}

/// Returns the built-in plan for a category, if one exists.
///
/// Not every category carries a prescribed plan; for those without one
/// the dialogue falls back to listing the category's exercises.
pub fn builtin_plan(category: Category) -> Option<&'static WorkoutPlan> {
    BUILTIN_PLANS.iter().find(|p| p.category == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_category_has_builtin_exercises() {
        for category in Category::iter() {
            assert!(
                !builtin_exercises().get(&category).unwrap().is_empty(),
                "category {category:?} has no seed exercises"
            );
        }
    }

    #[test]
    fn test_builtin_plans_reference_their_category() {
        assert!(builtin_plan(Category::UpperBody).is_some());
        assert!(builtin_plan(Category::Flexibility).is_none());
        let plan = builtin_plan(Category::Core).unwrap();
        assert_eq!(plan.category, Category::Core);
        assert!(!plan.exercises.is_empty());
    }
}

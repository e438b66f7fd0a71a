use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snacks,
    Dinner,
    NoMeal,
}

impl MealSlot {
    /// The four real meals, in grid column order.
    pub const MEALS: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snacks,
        MealSlot::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snacks => "Snacks",
            MealSlot::Dinner => "Dinner",
            MealSlot::NoMeal => "No Meal",
        }
    }

    pub fn is_meal(&self) -> bool {
        !matches!(self, MealSlot::NoMeal)
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

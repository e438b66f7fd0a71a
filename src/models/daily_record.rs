use super::meal_slot::MealSlot;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Mark {
    Present,
    #[default]
    Absent,
}

impl Mark {
    pub fn is_present(&self) -> bool {
        matches!(self, Mark::Present)
    }
}

/// Presence matrix of one student on one calendar day.
///
/// Every slot starts `Absent`; marking a slot is idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DailyMealRecord {
    pub breakfast: Mark,
    pub lunch: Mark,
    pub snacks: Mark,
    pub dinner: Mark,
}

impl DailyMealRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `slot` as present. Returns `false` for `NoMeal`, which has no column.
    pub fn mark_present(&mut self, slot: MealSlot) -> bool {
        let target = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Snacks => &mut self.snacks,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::NoMeal => return false,
        };
        *target = Mark::Present;
        true
    }

    /// Mark for a meal; `NoMeal` is always reported as absent.
    pub fn get(&self, slot: MealSlot) -> Mark {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Snacks => self.snacks,
            MealSlot::Dinner => self.dinner,
            MealSlot::NoMeal => Mark::Absent,
        }
    }

    /// Marks in grid column order (Breakfast, Lunch, Snacks, Dinner).
    pub fn marks(&self) -> [Mark; 4] {
        MealSlot::MEALS.map(|slot| self.get(slot))
    }

    pub fn present_count(&self) -> usize {
        self.marks().iter().filter(|m| m.is_present()).count()
    }
}

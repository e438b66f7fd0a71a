pub mod attendance;
pub mod daily_record;
pub mod meal_slot;
pub mod student;

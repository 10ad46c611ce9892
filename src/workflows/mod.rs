pub mod portfolio;
pub mod rent_roll;

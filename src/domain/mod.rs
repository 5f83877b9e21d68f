//! Core domain types for Hello Foodie

mod restaurant;

pub use restaurant::RestaurantRecord;

// This file makes the screen modules available to the rest of the application.

pub mod home;
pub mod settings;
pub mod transactions;

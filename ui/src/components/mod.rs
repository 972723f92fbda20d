//! Shared building blocks used by the screens.
pub mod icons;
pub mod link_button;
pub mod loading;
pub mod pico;
pub mod transactions_table;

pub mod game_screen;
pub mod icon;
pub mod input;
pub mod keypad;
pub mod layout;
pub mod modal;

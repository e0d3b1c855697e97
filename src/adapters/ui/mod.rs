pub mod banner;
pub mod console;
pub mod scripted;
pub mod tui;

pub mod play;
pub mod reset;

pub mod admin;
pub mod game;
pub mod player;

pub use admin::*;
pub use game::*;
pub use player::*;

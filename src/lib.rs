pub mod error;
pub mod events;
pub mod game;
pub mod helpers;
pub mod model;

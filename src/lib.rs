pub mod card;
pub mod pile;
pub mod pack;
pub mod tableau;
pub mod foundation;
pub mod draw_pile;
pub mod events;
pub mod game;
pub mod moves;
pub mod deal_code;
pub mod display;
pub mod error;

pub mod compute;
pub mod constants;
pub mod entities;
pub mod events;
pub mod input;
pub mod logging;
pub mod sprites;
pub mod viewport;

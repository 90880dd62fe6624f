pub mod codes;
pub mod events;

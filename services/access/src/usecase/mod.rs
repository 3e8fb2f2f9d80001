pub mod role;
pub mod roster;

pub mod profile;
pub mod states;

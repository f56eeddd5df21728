pub mod components;
pub mod search;

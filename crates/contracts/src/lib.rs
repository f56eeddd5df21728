pub mod alerts;
pub mod search;

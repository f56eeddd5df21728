pub mod params;

pub use params::{ParamValue, SearchParams, DEFAULT_PARAM_KEYS};

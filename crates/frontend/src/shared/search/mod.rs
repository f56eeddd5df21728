pub mod default_params_context;
pub mod field_titles;
pub mod search_params_context;

pub use default_params_context::DefaultParamsContext;
pub use field_titles::field_title;
pub use search_params_context::SearchParamsContext;

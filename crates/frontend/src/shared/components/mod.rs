pub mod default_search_params;
pub mod filters_selected;
pub mod table;

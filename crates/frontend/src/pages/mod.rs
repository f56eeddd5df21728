pub mod alerts_page;

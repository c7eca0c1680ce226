pub mod api;
pub mod month_year;
pub mod patch;
pub mod validation;

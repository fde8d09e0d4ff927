pub mod cards;
pub mod navbar;
pub mod profile_form;
pub mod table;

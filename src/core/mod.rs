pub mod profile;
pub mod profiles;
pub mod validation;

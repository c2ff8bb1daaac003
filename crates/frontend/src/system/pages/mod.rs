pub mod not_found;
pub mod restricted_access;

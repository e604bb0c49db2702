//! Entity Module

pub mod auth_session;
pub mod registration;
pub mod user_profile;

//! Value Object Module

pub mod email;
pub mod password;
pub mod token;

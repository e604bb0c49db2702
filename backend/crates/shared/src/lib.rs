//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by the
//! identity crate and the API binary:
//! - The unified error type and result alias
//! - Error classification mapped onto HTTP status codes
//! - Problem-details rendering for HTTP responses
//!
//! Only things with a consistent meaning across every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

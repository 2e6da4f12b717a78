//! API module
//!
//! Contains HTTP request handlers for the demo endpoints

pub mod greetings;
pub mod logs;
pub mod users;

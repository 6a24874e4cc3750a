//! Terminal quiz that answers "what should I eat now?".
//!
//! Seven questions feed a remote recommendation service; when it cannot be
//! reached a built-in backup dish is shown instead.

pub mod config;
pub mod quiz;
pub mod recommend;
pub mod ui;

//! Mock backend for the microgrid energy dashboard: synthetic time-of-use
//! reports, an enterprise directory and a token-based login flow.

pub mod api;
pub mod auth;
pub mod captcha;
pub mod config;
pub mod enterprise;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod periods;
pub mod reports;
pub mod response;
pub mod roles;
pub mod sampler;
pub mod types;

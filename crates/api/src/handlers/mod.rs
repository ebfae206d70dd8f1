//! Request handlers for the public site and admin API.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `beacon_db` and
//! map errors via [`AppError`]. Reads are public; writes go through the
//! admin gate.
//!
//! [`AppError`]: crate::error::AppError

pub mod announcements;
pub mod auth;
pub mod board;
pub mod content;
pub mod events;
pub mod gallery;
pub mod settings;
pub mod site_images;
pub mod team;

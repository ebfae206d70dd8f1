//! Request extractors: authentication, role checks, JSON body decoding.

pub mod auth;
pub mod json;
pub mod rbac;

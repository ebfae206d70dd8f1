//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod announcement;
pub mod board_member;
pub mod event;
pub mod gallery_item;
pub mod page_content;
pub mod site_image;
pub mod site_setting;
pub mod team_member;
pub mod user;

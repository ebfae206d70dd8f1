//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Repositories speak SQL
//! and `sqlx::Error` only; HTTP status mapping happens in the API crate.

pub mod announcement_repo;
pub mod board_member_repo;
pub mod event_repo;
pub mod gallery_item_repo;
pub mod page_content_repo;
pub mod site_image_repo;
pub mod site_setting_repo;
pub mod team_member_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepo;
pub use board_member_repo::BoardMemberRepo;
pub use event_repo::EventRepo;
pub use gallery_item_repo::GalleryItemRepo;
pub use page_content_repo::PageContentRepo;
pub use site_image_repo::SiteImageRepo;
pub use site_setting_repo::SiteSettingRepo;
pub use team_member_repo::TeamMemberRepo;
pub use user_repo::UserRepo;

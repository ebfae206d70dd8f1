//! Integration tests for the content-entity repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create/list round trips and display ordering
//! - Partial update semantics (COALESCE)
//! - Hard deletes and missing-row behaviour
//! - Query-parameter filters
//! - Bulk gallery creation
//! - Unique constraint violations

use beacon_db::models::announcement::{CreateAnnouncement, UpdateAnnouncement};
use beacon_db::models::board_member::{CreateBoardMember, UpdateBoardMember};
use beacon_db::models::event::{CreateEvent, UpdateEvent};
use beacon_db::models::gallery_item::CreateGalleryItem;
use beacon_db::models::site_image::{CreateSiteImage, UpdateSiteImage};
use beacon_db::models::team_member::{CreateTeamMember, UpdateTeamMember};
use beacon_db::repositories::{
    AnnouncementRepo, BoardMemberRepo, EventRepo, GalleryItemRepo, SiteImageRepo, TeamMemberRepo,
    UserRepo,
};
use chrono::{TimeZone, Utc};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_team_member(name: &str, sort_order: Option<i32>) -> CreateTeamMember {
    CreateTeamMember {
        name: name.to_string(),
        title: "Coordinator".to_string(),
        bio: None,
        image_path: None,
        sort_order,
    }
}

fn new_event(title: &str, event_type: &str, date: Option<chrono::DateTime<Utc>>) -> CreateEvent {
    CreateEvent {
        title: title.to_string(),
        description: None,
        rich_content: None,
        event_date: date,
        event_type: event_type.to_string(),
        flyer_image_path: None,
    }
}

fn new_gallery_item(path: &str, category: Option<&str>) -> CreateGalleryItem {
    CreateGalleryItem {
        title: None,
        category: category.map(str::to_string),
        image_path: path.to_string(),
    }
}

fn new_site_image(name: &str, path: &str) -> CreateSiteImage {
    CreateSiteImage {
        name: name.to_string(),
        page_id: Some("home".to_string()),
        section_id: None,
        category: None,
        file_path: path.to_string(),
        file_size: 2048,
        mime_type: "image/png".to_string(),
        width: Some(640),
        height: Some(480),
    }
}

// ---------------------------------------------------------------------------
// Test: team members sort by display order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_member_create_and_list_order(pool: PgPool) {
    let second = TeamMemberRepo::create(&pool, &new_team_member("Second", Some(2)), Some("admin"))
        .await
        .unwrap();
    let first = TeamMemberRepo::create(&pool, &new_team_member("First", Some(1)), Some("admin"))
        .await
        .unwrap();

    assert_eq!(second.sort_order, 2);
    assert!(second.image_path.is_none());
    assert_eq!(second.updated_by.as_deref(), Some("admin"));

    let all = TeamMemberRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_member_sort_order_defaults_to_zero(pool: PgPool) {
    let created = TeamMemberRepo::create(&pool, &new_team_member("Default", None), None)
        .await
        .unwrap();
    assert_eq!(created.sort_order, 0);
}

// ---------------------------------------------------------------------------
// Test: partial updates touch only the provided fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_member_partial_update(pool: PgPool) {
    let mut input = new_team_member("Dana", Some(5));
    input.bio = Some("Runs the youth program.".to_string());
    let created = TeamMemberRepo::create(&pool, &input, Some("admin")).await.unwrap();

    let patch = UpdateTeamMember {
        name: None,
        title: Some("Program Director".to_string()),
        bio: None,
        image_path: None,
        sort_order: None,
    };
    let updated = TeamMemberRepo::update(&pool, created.id, &patch, Some("editor"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "Program Director");
    assert_eq!(updated.name, "Dana");
    assert_eq!(updated.bio.as_deref(), Some("Runs the youth program."));
    assert_eq!(updated.sort_order, 5);
    assert_eq!(updated.updated_by.as_deref(), Some("editor"));

    // Re-applying the same patch changes nothing observable.
    let again = TeamMemberRepo::update(&pool, created.id, &patch, Some("editor"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.title, updated.title);
    assert_eq!(again.name, updated.name);
    assert_eq!(again.bio, updated.bio);
    assert_eq!(again.sort_order, updated.sort_order);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_member_update_missing_returns_none(pool: PgPool) {
    let patch = UpdateTeamMember {
        name: Some("Ghost".to_string()),
        title: None,
        bio: None,
        image_path: None,
        sort_order: None,
    };
    let result = TeamMemberRepo::update(&pool, 4242, &patch, None).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_member_delete(pool: PgPool) {
    let created = TeamMemberRepo::create(&pool, &new_team_member("Gone", None), None)
        .await
        .unwrap();

    assert!(TeamMemberRepo::delete(&pool, created.id).await.unwrap());
    assert!(TeamMemberRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    // Second delete finds nothing.
    assert!(!TeamMemberRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: board members
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_board_member_crud(pool: PgPool) {
    let input = CreateBoardMember {
        name: "Pat".to_string(),
        role: "Chair".to_string(),
        organization: Some("Beacon Foundation".to_string()),
        image_path: None,
        sort_order: Some(1),
    };
    let created = BoardMemberRepo::create(&pool, &input, Some("admin")).await.unwrap();
    assert_eq!(created.role, "Chair");

    let patch = UpdateBoardMember {
        name: None,
        role: Some("Treasurer".to_string()),
        organization: None,
        image_path: None,
        sort_order: None,
    };
    let updated = BoardMemberRepo::update(&pool, created.id, &patch, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.role, "Treasurer");
    assert_eq!(updated.organization.as_deref(), Some("Beacon Foundation"));

    assert!(BoardMemberRepo::delete(&pool, created.id).await.unwrap());
    assert!(BoardMemberRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: events filter by type and sort dated rows first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_list_filters_by_type(pool: PgPool) {
    let gala_date = Utc.with_ymd_and_hms(2026, 10, 3, 18, 0, 0).unwrap();
    EventRepo::create(&pool, &new_event("Fall Gala", "event", Some(gala_date)), None)
        .await
        .unwrap();
    EventRepo::create(&pool, &new_event("New Director", "news", None), None)
        .await
        .unwrap();

    let news = EventRepo::list(&pool, Some("news")).await.unwrap();
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "New Director");

    let all = EventRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);
    // Dated rows sort before undated ones.
    assert_eq!(all[0].title, "Fall Gala");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_update_and_find(pool: PgPool) {
    let created = EventRepo::create(&pool, &new_event("Open House", "event", None), None)
        .await
        .unwrap();

    let patch = UpdateEvent {
        title: None,
        description: Some("Doors open at noon.".to_string()),
        rich_content: Some("<p>Doors open at <b>noon</b>.</p>".to_string()),
        event_date: Some(Utc.with_ymd_and_hms(2026, 9, 12, 12, 0, 0).unwrap()),
        event_type: None,
        flyer_image_path: None,
    };
    EventRepo::update(&pool, created.id, &patch, Some("admin"))
        .await
        .unwrap()
        .unwrap();

    let found = EventRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Open House");
    assert_eq!(found.description.as_deref(), Some("Doors open at noon."));
    assert!(found.event_date.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_type_check_constraint(pool: PgPool) {
    let result = EventRepo::create(&pool, &new_event("Bad", "webinar", None), None).await;
    assert!(result.is_err(), "Unknown event type should violate the CHECK");
}

// ---------------------------------------------------------------------------
// Test: gallery bulk creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gallery_bulk_create(pool: PgPool) {
    let items = vec![
        new_gallery_item("/uploads/gallery/a.jpg", Some("2026-gala")),
        new_gallery_item("/uploads/gallery/b.jpg", Some("2026-gala")),
        new_gallery_item("/uploads/gallery/c.jpg", None),
    ];
    let created = GalleryItemRepo::create_many(&pool, &items, Some("admin"))
        .await
        .unwrap();
    assert_eq!(created.len(), 3);

    let gala = GalleryItemRepo::list(&pool, Some("2026-gala")).await.unwrap();
    assert_eq!(gala.len(), 2);

    let all = GalleryItemRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 3);
}

// ---------------------------------------------------------------------------
// Test: announcements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_announcement_crud(pool: PgPool) {
    let created = AnnouncementRepo::create(
        &pool,
        &CreateAnnouncement {
            body: "Office closed Friday".to_string(),
            link: None,
        },
        None,
    )
    .await
    .unwrap();

    let patch = UpdateAnnouncement {
        body: None,
        link: Some("/events/closure".to_string()),
    };
    let updated = AnnouncementRepo::update(&pool, created.id, &patch, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.body, "Office closed Friday");
    assert_eq!(updated.link.as_deref(), Some("/events/closure"));

    assert!(AnnouncementRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: site images enforce unique names
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_image_unique_name(pool: PgPool) {
    SiteImageRepo::create(&pool, &new_site_image("hero_banner", "/uploads/site/a.png"), None)
        .await
        .unwrap();

    let duplicate =
        SiteImageRepo::create(&pool, &new_site_image("hero_banner", "/uploads/site/b.png"), None)
            .await;
    assert!(duplicate.is_err(), "Duplicate site image name should fail");

    let found = SiteImageRepo::find_by_name(&pool, "hero_banner")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.file_path, "/uploads/site/a.png");
    assert_eq!(found.width, Some(640));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_image_file_replacement_update(pool: PgPool) {
    let created = SiteImageRepo::create(&pool, &new_site_image("logo", "/uploads/site/old.png"), None)
        .await
        .unwrap();

    let patch = UpdateSiteImage {
        file_path: Some("/uploads/site/new.png".to_string()),
        file_size: Some(4096),
        mime_type: Some("image/png".to_string()),
        width: Some(800),
        height: Some(600),
        ..Default::default()
    };
    let updated = SiteImageRepo::update(&pool, created.id, &patch, Some("admin"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "logo");
    assert_eq!(updated.file_path, "/uploads/site/new.png");
    assert_eq!(updated.file_size, 4096);
    assert_eq!(updated.width, Some(800));
}

// ---------------------------------------------------------------------------
// Test: admin bootstrap upsert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_upsert_admin_is_idempotent(pool: PgPool) {
    let first = UserRepo::upsert_admin(&pool, "admin", "$argon2id$v=19$m=19456,t=2,p=1$AAAA$BBBB")
        .await
        .unwrap();
    assert_eq!(first.role, "admin");
    assert!(first.is_active);

    // Simulate an operator disabling the account out of band.
    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(first.id)
        .execute(&pool)
        .await
        .unwrap();

    let second = UserRepo::upsert_admin(&pool, "admin", "$argon2id$v=19$m=19456,t=2,p=1$CCCC$DDDD")
        .await
        .unwrap();
    assert_eq!(second.id, first.id, "Upsert must keep the same row");
    assert!(second.is_active, "Bootstrap reactivates the account");
    assert_ne!(second.password_hash, first.password_hash);

    let found = UserRepo::find_by_username(&pool, "admin").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
}

#![cfg(test)]

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::db::{run_migrations, seed_defaults, DbPool};
use crate::models::activity::{self, ActivityId, ActivityKind};
use crate::models::article::{Article, ArticleForm};
use crate::models::book::{Book, BookForm};
use crate::models::channel::{self, ChannelContent, ChannelContentForm, ChannelVideo, ChannelVideoForm};
use crate::models::exhibition::{Exhibition, ExhibitionForm};
use crate::models::literary_event::{LiteraryEvent, LiteraryEventForm};
use crate::models::partner::{
    self, CollaborativeProgram, CollaborativeProgramForm, Partner, PartnerForm,
    PartnersPageContent, PartnersPageContentForm,
};
use crate::models::publication::{PublicationIssue, PublicationIssueForm};
use crate::models::settings::Setting;
use crate::models::workshop::{Workshop, WorkshopCategory, WorkshopCategoryForm, WorkshopForm};
use crate::models::Status;
use crate::routes::api::activities::ActivityDeleteBody;
use crate::routes::api::channel::ChannelSync;
use crate::storage::{self, UploadKind};

/// Atomic counter for unique shared-cache DB names so parallel tests don't collide.
static TEST_DB_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Create a fresh in-memory SQLite pool with all migrations + seed defaults applied.
/// Uses a named shared-cache in-memory DB so multiple connections see the same data.
fn test_pool() -> DbPool {
    let id = TEST_DB_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    let uri = format!("file:testdb_{}?mode=memory&cache=shared", id);
    let manager = SqliteConnectionManager::file(uri);
    let pool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("Failed to create test pool");
    {
        let conn = pool.get().unwrap();
        conn.execute_batch("PRAGMA foreign_keys=ON;").unwrap();
    }
    run_migrations(&pool).expect("Failed to run migrations");
    seed_defaults(&pool).expect("Failed to seed defaults");
    pool
}

// ═══════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════

#[test]
fn settings_set_and_get() {
    let pool = test_pool();
    Setting::set(&pool, "test_key", "hello").unwrap();
    assert_eq!(Setting::get(&pool, "test_key"), Some("hello".to_string()));
}

#[test]
fn settings_get_or_default() {
    let pool = test_pool();
    assert_eq!(Setting::get_or(&pool, "nonexistent", "fallback"), "fallback");
    Setting::set(&pool, "exists", "val").unwrap();
    assert_eq!(Setting::get_or(&pool, "exists", "fallback"), "val");
}

#[test]
fn settings_get_i64() {
    let pool = test_pool();
    Setting::set(&pool, "num", "42").unwrap();
    assert_eq!(Setting::get_i64(&pool, "num"), 42);
    assert_eq!(Setting::get_i64(&pool, "missing"), 0);
}

#[test]
fn settings_upsert() {
    let pool = test_pool();
    Setting::set(&pool, "key", "first").unwrap();
    Setting::set(&pool, "key", "second").unwrap();
    assert_eq!(Setting::get(&pool, "key"), Some("second".to_string()));
}

#[test]
fn settings_seeded_upload_limits() {
    let pool = test_pool();
    assert_eq!(Setting::get_i64(&pool, "uploads_max_image_mb"), 5);
    assert_eq!(Setting::get_i64(&pool, "uploads_max_document_mb"), 10);
}

// ═══════════════════════════════════════════════════════════
// Status
// ═══════════════════════════════════════════════════════════

#[test]
fn status_parse_known_values() {
    assert_eq!(Status::parse("UPCOMING"), Status::Upcoming);
    assert_eq!(Status::parse("CURRENT"), Status::Current);
    assert_eq!(Status::parse("PAST"), Status::Past);
    assert_eq!(Status::parse("past"), Status::Past);
    assert_eq!(Status::parse(" current "), Status::Current);
}

#[test]
fn status_parse_falls_back_to_upcoming() {
    assert_eq!(Status::parse(""), Status::Upcoming);
    assert_eq!(Status::parse("archived"), Status::Upcoming);
}

#[test]
fn status_serde_uppercase() {
    assert_eq!(serde_json::to_string(&Status::Current).unwrap(), "\"CURRENT\"");
    let s: Status = serde_json::from_str("\"PAST\"").unwrap();
    assert_eq!(s, Status::Past);
}

#[test]
fn status_rank_orders_current_first() {
    assert!(Status::Current.rank() < Status::Upcoming.rank());
    assert!(Status::Upcoming.rank() < Status::Past.rank());
}

#[test]
fn form_missing_status_defaults_to_upcoming() {
    let form: ExhibitionForm =
        serde_json::from_str(r#"{"titleAr":"معرض","titleFr":"Expo"}"#).unwrap();
    assert_eq!(form.status, Status::Upcoming);
    assert_eq!(form.title_ar.as_deref(), Some("معرض"));
}

// ═══════════════════════════════════════════════════════════
// Exhibitions
// ═══════════════════════════════════════════════════════════

fn make_exhibition_form(title_fr: &str, status: Status, start: Option<&str>) -> ExhibitionForm {
    ExhibitionForm {
        title_ar: Some("معرض".to_string()),
        title_fr: Some(title_fr.to_string()),
        artist_ar: None,
        artist_fr: Some("Artiste".to_string()),
        description_ar: None,
        description_fr: None,
        image_url: None,
        start_date: start.map(|s| s.to_string()),
        end_date: None,
        status,
    }
}

#[test]
fn exhibition_crud() {
    let pool = test_pool();

    let id = Exhibition::create(
        &pool,
        &make_exhibition_form("Lumières", Status::Upcoming, Some("2026-03-01")),
    )
    .unwrap();
    assert!(id > 0);

    let ex = Exhibition::find_by_id(&pool, id).unwrap();
    assert_eq!(ex.title_fr.as_deref(), Some("Lumières"));
    assert_eq!(ex.title_ar.as_deref(), Some("معرض"));
    assert_eq!(ex.status, Status::Upcoming);
    assert_eq!(ex.start_date.unwrap().to_string(), "2026-03-01");

    let mut form = make_exhibition_form("Lumières II", Status::Current, Some("2026-03-01"));
    form.artist_ar = Some("فنان".to_string());
    Exhibition::update(&pool, id, &form).unwrap();
    let updated = Exhibition::find_by_id(&pool, id).unwrap();
    assert_eq!(updated.title_fr.as_deref(), Some("Lumières II"));
    assert_eq!(updated.status, Status::Current);
    assert_eq!(updated.artist_ar.as_deref(), Some("فنان"));

    Exhibition::delete(&pool, id).unwrap();
    assert!(Exhibition::find_by_id(&pool, id).is_none());
}

#[test]
fn exhibition_bad_date_becomes_null() {
    let pool = test_pool();
    let id = Exhibition::create(
        &pool,
        &make_exhibition_form("X", Status::Upcoming, Some("not-a-date")),
    )
    .unwrap();
    assert!(Exhibition::find_by_id(&pool, id).unwrap().start_date.is_none());
}

#[test]
fn exhibition_status_filter() {
    let pool = test_pool();
    Exhibition::create(&pool, &make_exhibition_form("A", Status::Current, None)).unwrap();
    Exhibition::create(&pool, &make_exhibition_form("B", Status::Past, None)).unwrap();
    Exhibition::create(&pool, &make_exhibition_form("C", Status::Past, None)).unwrap();

    assert_eq!(Exhibition::list(&pool, Some(Status::Past)).unwrap().len(), 2);
    assert_eq!(Exhibition::list(&pool, Some(Status::Current)).unwrap().len(), 1);
    assert_eq!(Exhibition::list(&pool, Some(Status::Upcoming)).unwrap().len(), 0);
    assert_eq!(Exhibition::list(&pool, None).unwrap().len(), 3);
}

#[test]
fn exhibition_list_orders_by_status_then_recency() {
    let pool = test_pool();
    Exhibition::create(
        &pool,
        &make_exhibition_form("past", Status::Past, Some("2024-01-01")),
    )
    .unwrap();
    Exhibition::create(
        &pool,
        &make_exhibition_form("upcoming", Status::Upcoming, Some("2026-12-01")),
    )
    .unwrap();
    Exhibition::create(
        &pool,
        &make_exhibition_form("current", Status::Current, Some("2026-06-01")),
    )
    .unwrap();
    Exhibition::create(
        &pool,
        &make_exhibition_form("past-recent", Status::Past, Some("2025-05-01")),
    )
    .unwrap();

    let titles: Vec<String> = Exhibition::list(&pool, None)
        .unwrap()
        .into_iter()
        .filter_map(|e| e.title_fr)
        .collect();
    assert_eq!(titles, vec!["current", "upcoming", "past-recent", "past"]);
}

// ═══════════════════════════════════════════════════════════
// Literary events
// ═══════════════════════════════════════════════════════════

fn make_event_form(title_fr: &str, status: Status) -> LiteraryEventForm {
    LiteraryEventForm {
        title_ar: Some("أمسية".to_string()),
        title_fr: Some(title_fr.to_string()),
        description_ar: None,
        description_fr: None,
        guest_ar: None,
        guest_fr: Some("Invitée".to_string()),
        location_ar: None,
        location_fr: Some("Salle A".to_string()),
        event_date: Some("2026-02-14".to_string()),
        image_url: None,
        status,
    }
}

#[test]
fn literary_event_crud() {
    let pool = test_pool();

    let id = LiteraryEvent::create(&pool, &make_event_form("Rencontre", Status::Upcoming)).unwrap();
    let ev = LiteraryEvent::find_by_id(&pool, id).unwrap();
    assert_eq!(ev.title_fr.as_deref(), Some("Rencontre"));
    assert_eq!(ev.guest_fr.as_deref(), Some("Invitée"));
    assert_eq!(ev.event_date.unwrap().to_string(), "2026-02-14");

    let form = make_event_form("Rencontre", Status::Past);
    LiteraryEvent::update(&pool, id, &form).unwrap();
    assert_eq!(LiteraryEvent::find_by_id(&pool, id).unwrap().status, Status::Past);

    LiteraryEvent::delete(&pool, id).unwrap();
    assert!(LiteraryEvent::find_by_id(&pool, id).is_none());
    assert!(LiteraryEvent::list(&pool, None).unwrap().is_empty());
}

// ═══════════════════════════════════════════════════════════
// Workshops
// ═══════════════════════════════════════════════════════════

fn make_workshop_form(title_fr: &str, category_id: Option<i64>, status: Status) -> WorkshopForm {
    WorkshopForm {
        title_ar: Some("ورشة".to_string()),
        title_fr: Some(title_fr.to_string()),
        description_ar: None,
        description_fr: None,
        instructor_ar: None,
        instructor_fr: Some("Animateur".to_string()),
        schedule_ar: None,
        schedule_fr: Some("Tous les samedis".to_string()),
        category_id,
        image_url: None,
        status,
    }
}

#[test]
fn workshop_crud_and_filters() {
    let pool = test_pool();

    let cat = WorkshopCategory::create(
        &pool,
        &WorkshopCategoryForm {
            name_ar: Some("خط".to_string()),
            name_fr: Some("Calligraphie".to_string()),
        },
    )
    .unwrap();

    let w1 = Workshop::create(&pool, &make_workshop_form("Calligraphie I", Some(cat), Status::Current)).unwrap();
    Workshop::create(&pool, &make_workshop_form("Théâtre", None, Status::Upcoming)).unwrap();

    assert_eq!(Workshop::list(&pool, None, None).unwrap().len(), 2);
    assert_eq!(Workshop::list(&pool, None, Some(cat)).unwrap().len(), 1);
    assert_eq!(Workshop::list(&pool, Some(Status::Current), Some(cat)).unwrap().len(), 1);
    assert_eq!(Workshop::list(&pool, Some(Status::Past), None).unwrap().len(), 0);

    Workshop::update(&pool, w1, &make_workshop_form("Calligraphie II", Some(cat), Status::Past)).unwrap();
    let updated = Workshop::find_by_id(&pool, w1).unwrap();
    assert_eq!(updated.title_fr.as_deref(), Some("Calligraphie II"));
    assert_eq!(updated.status, Status::Past);

    Workshop::delete(&pool, w1).unwrap();
    assert!(Workshop::find_by_id(&pool, w1).is_none());
}

#[test]
fn workshop_category_delete_detaches_workshops() {
    let pool = test_pool();

    let cat = WorkshopCategory::create(
        &pool,
        &WorkshopCategoryForm {
            name_ar: None,
            name_fr: Some("Musique".to_string()),
        },
    )
    .unwrap();
    let w = Workshop::create(&pool, &make_workshop_form("Oud", Some(cat), Status::Current)).unwrap();

    WorkshopCategory::delete(&pool, cat).unwrap();

    assert!(WorkshopCategory::list(&pool).unwrap().is_empty());
    let workshop = Workshop::find_by_id(&pool, w).unwrap();
    assert!(workshop.category_id.is_none());
}

// ═══════════════════════════════════════════════════════════
// Articles
// ═══════════════════════════════════════════════════════════

fn make_article_form(title_fr: &str, published: Option<&str>) -> ArticleForm {
    ArticleForm {
        title_ar: Some("مقال".to_string()),
        title_fr: Some(title_fr.to_string()),
        content_ar: Some("نص".to_string()),
        content_fr: Some("Texte".to_string()),
        excerpt_ar: None,
        excerpt_fr: None,
        author_ar: None,
        author_fr: Some("Rédaction".to_string()),
        image_url: None,
        published_at: published.map(|s| s.to_string()),
    }
}

#[test]
fn article_crud() {
    let pool = test_pool();

    let id = Article::create(&pool, &make_article_form("Édito", Some("2025-07-01"))).unwrap();
    let art = Article::find_by_id(&pool, id).unwrap();
    assert_eq!(art.title_fr.as_deref(), Some("Édito"));
    assert_eq!(art.published_at.unwrap().to_string(), "2025-07-01");

    Article::update(&pool, id, &make_article_form("Édito corrigé", Some("2025-07-02"))).unwrap();
    assert_eq!(
        Article::find_by_id(&pool, id).unwrap().title_fr.as_deref(),
        Some("Édito corrigé")
    );

    Article::delete(&pool, id).unwrap();
    assert!(Article::list(&pool).unwrap().is_empty());
}

#[test]
fn article_list_newest_first() {
    let pool = test_pool();
    Article::create(&pool, &make_article_form("old", Some("2024-01-01"))).unwrap();
    Article::create(&pool, &make_article_form("new", Some("2025-06-01"))).unwrap();
    Article::create(&pool, &make_article_form("mid", Some("2024-09-01"))).unwrap();

    let titles: Vec<String> = Article::list(&pool)
        .unwrap()
        .into_iter()
        .filter_map(|a| a.title_fr)
        .collect();
    assert_eq!(titles, vec!["new", "mid", "old"]);
}

// ═══════════════════════════════════════════════════════════
// Publications & books
// ═══════════════════════════════════════════════════════════

#[test]
fn publication_crud_and_ordering() {
    let pool = test_pool();

    let mk = |n: i64| PublicationIssueForm {
        title_ar: Some("عدد".to_string()),
        title_fr: Some(format!("Numéro {}", n)),
        description_ar: None,
        description_fr: None,
        issue_number: Some(n),
        cover_url: None,
        pdf_url: Some(format!("/uploads/documents/issue-{}.pdf", n)),
        published_at: None,
    };

    let id1 = PublicationIssue::create(&pool, &mk(1)).unwrap();
    PublicationIssue::create(&pool, &mk(3)).unwrap();
    PublicationIssue::create(&pool, &mk(2)).unwrap();

    let numbers: Vec<i64> = PublicationIssue::list(&pool)
        .unwrap()
        .into_iter()
        .filter_map(|p| p.issue_number)
        .collect();
    assert_eq!(numbers, vec![3, 2, 1]);

    PublicationIssue::update(
        &pool,
        id1,
        &PublicationIssueForm {
            issue_number: Some(10),
            ..mk(1)
        },
    )
    .unwrap();
    assert_eq!(
        PublicationIssue::find_by_id(&pool, id1).unwrap().issue_number,
        Some(10)
    );

    PublicationIssue::delete(&pool, id1).unwrap();
    assert!(PublicationIssue::find_by_id(&pool, id1).is_none());
}

#[test]
fn book_crud() {
    let pool = test_pool();

    let form = BookForm {
        title_ar: Some("ديوان".to_string()),
        title_fr: Some("Recueil".to_string()),
        author_ar: Some("شاعر".to_string()),
        author_fr: Some("Poète".to_string()),
        description_ar: None,
        description_fr: None,
        cover_url: None,
        publish_year: Some(2023),
        isbn: Some("978-9973-00-000-0".to_string()),
    };
    let id = Book::create(&pool, &form).unwrap();

    let book = Book::find_by_id(&pool, id).unwrap();
    assert_eq!(book.title_ar.as_deref(), Some("ديوان"));
    assert_eq!(book.publish_year, Some(2023));

    Book::update(
        &pool,
        id,
        &BookForm {
            publish_year: Some(2024),
            ..form
        },
    )
    .unwrap();
    assert_eq!(Book::find_by_id(&pool, id).unwrap().publish_year, Some(2024));

    Book::delete(&pool, id).unwrap();
    assert!(Book::list(&pool).unwrap().is_empty());
}

// ═══════════════════════════════════════════════════════════
// Channel replace-all
// ═══════════════════════════════════════════════════════════

fn make_video_form(youtube_id: &str, title_fr: &str) -> ChannelVideoForm {
    ChannelVideoForm {
        youtube_id: youtube_id.to_string(),
        title_ar: Some("فيديو".to_string()),
        title_fr: Some(title_fr.to_string()),
        description_ar: None,
        description_fr: None,
        publish_date: Some("2025-01-01".to_string()),
    }
}

fn make_channel_content(title_ar: &str) -> ChannelContentForm {
    ChannelContentForm {
        page_title_ar: Some(title_ar.to_string()),
        page_title_fr: Some("Chaîne culturelle".to_string()),
        intro_ar: None,
        intro_fr: None,
        channel_url: Some("https://youtube.com/@assoc".to_string()),
    }
}

#[test]
fn channel_replace_all_sets_exact_video_list() {
    let pool = test_pool();

    channel::replace_all(
        &pool,
        Some(&make_channel_content("القناة")),
        &[make_video_form("v1", "un"), make_video_form("v2", "deux")],
    )
    .unwrap();

    let videos = ChannelVideo::list(&pool).unwrap();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].youtube_id, "v1");
    assert_eq!(videos[1].youtube_id, "v2");

    // Full replacement: v1 disappears, v3 appears, nothing merged.
    channel::replace_all(
        &pool,
        None,
        &[make_video_form("v2", "deux"), make_video_form("v3", "trois")],
    )
    .unwrap();

    let videos = ChannelVideo::list(&pool).unwrap();
    let ids: Vec<&str> = videos.iter().map(|v| v.youtube_id.as_str()).collect();
    assert_eq!(ids, vec!["v2", "v3"]);
}

#[test]
fn channel_replace_all_preserves_submitted_order() {
    let pool = test_pool();

    channel::replace_all(
        &pool,
        None,
        &[
            make_video_form("z", "dernier"),
            make_video_form("a", "premier"),
            make_video_form("m", "milieu"),
        ],
    )
    .unwrap();

    let ids: Vec<String> = ChannelVideo::list(&pool)
        .unwrap()
        .into_iter()
        .map(|v| v.youtube_id)
        .collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn channel_empty_items_clears_children_leaves_content() {
    let pool = test_pool();

    channel::replace_all(
        &pool,
        Some(&make_channel_content("القناة")),
        &[make_video_form("v1", "un")],
    )
    .unwrap();

    channel::replace_all(&pool, None, &[]).unwrap();

    assert!(ChannelVideo::list(&pool).unwrap().is_empty());
    let content = ChannelContent::find(&pool).unwrap();
    assert_eq!(content.page_title_ar.as_deref(), Some("القناة"));
}

#[test]
fn channel_replace_all_is_idempotent() {
    let pool = test_pool();
    let content = make_channel_content("القناة");
    let videos = [make_video_form("v1", "un"), make_video_form("v2", "deux")];

    channel::replace_all(&pool, Some(&content), &videos).unwrap();
    let first: Vec<(String, Option<String>)> = ChannelVideo::list(&pool)
        .unwrap()
        .into_iter()
        .map(|v| (v.youtube_id, v.title_fr))
        .collect();

    channel::replace_all(&pool, Some(&content), &videos).unwrap();
    let second: Vec<(String, Option<String>)> = ChannelVideo::list(&pool)
        .unwrap()
        .into_iter()
        .map(|v| (v.youtube_id, v.title_fr))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn channel_replace_all_rolls_back_on_insert_failure() {
    let pool = test_pool();

    channel::replace_all(
        &pool,
        None,
        &[make_video_form("v1", "un"), make_video_form("v2", "deux")],
    )
    .unwrap();

    // Duplicate youtube_id within one payload violates the UNIQUE constraint
    // partway through the bulk insert. The whole sync must roll back.
    let result = channel::replace_all(
        &pool,
        None,
        &[make_video_form("v9", "neuf"), make_video_form("v9", "bis")],
    );
    assert!(result.is_err());

    let ids: Vec<String> = ChannelVideo::list(&pool)
        .unwrap()
        .into_iter()
        .map(|v| v.youtube_id)
        .collect();
    assert_eq!(ids, vec!["v1", "v2"]);
}

#[test]
fn channel_singleton_upsert_never_duplicates() {
    let pool = test_pool();

    channel::replace_all(&pool, Some(&make_channel_content("أولى")), &[]).unwrap();
    channel::replace_all(&pool, Some(&make_channel_content("ثانية")), &[]).unwrap();

    let conn = pool.get().unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM cultural_channel_content", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        ChannelContent::find(&pool).unwrap().page_title_ar.as_deref(),
        Some("ثانية")
    );
}

#[test]
fn channel_sync_example_payload() {
    let pool = test_pool();

    let body: ChannelSync = serde_json::from_str(
        r#"{
            "content": {"pageTitleAr": "أ", "pageTitleFr": "B"},
            "videos": [
                {"youtubeId": "x1", "titleAr": "ع1", "titleFr": "t1", "publishDate": "2025-01-01"}
            ]
        }"#,
    )
    .unwrap();

    channel::replace_all(&pool, body.content.as_ref(), &body.videos).unwrap();

    let videos = ChannelVideo::list(&pool).unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].youtube_id, "x1");
    assert_eq!(videos[0].title_ar.as_deref(), Some("ع1"));
    assert_eq!(videos[0].publish_date.unwrap().to_string(), "2025-01-01");

    let content = ChannelContent::find(&pool).unwrap();
    assert_eq!(content.page_title_ar.as_deref(), Some("أ"));
    assert_eq!(content.page_title_fr.as_deref(), Some("B"));
}

// ═══════════════════════════════════════════════════════════
// Partners replace-all
// ═══════════════════════════════════════════════════════════

fn make_partner_form(name_fr: &str) -> PartnerForm {
    PartnerForm {
        name_ar: Some("شريك".to_string()),
        name_fr: Some(name_fr.to_string()),
        description_ar: None,
        description_fr: None,
        logo_url: None,
        website_url: Some("https://example.org".to_string()),
    }
}

fn make_program_form(title_fr: &str) -> CollaborativeProgramForm {
    CollaborativeProgramForm {
        title_ar: Some("برنامج".to_string()),
        title_fr: Some(title_fr.to_string()),
        description_ar: None,
        description_fr: None,
        image_url: None,
    }
}

#[test]
fn partners_replace_all_swaps_both_collections() {
    let pool = test_pool();

    partner::replace_all(
        &pool,
        Some(&PartnersPageContentForm {
            title_ar: Some("شركاؤنا".to_string()),
            title_fr: Some("Nos partenaires".to_string()),
            intro_ar: None,
            intro_fr: None,
        }),
        &[make_partner_form("Institut"), make_partner_form("Galerie")],
        &[make_program_form("Résidence")],
    )
    .unwrap();

    assert_eq!(Partner::list(&pool).unwrap().len(), 2);
    assert_eq!(CollaborativeProgram::list(&pool).unwrap().len(), 1);

    partner::replace_all(&pool, None, &[make_partner_form("Librairie")], &[]).unwrap();

    let partners = Partner::list(&pool).unwrap();
    assert_eq!(partners.len(), 1);
    assert_eq!(partners[0].name_fr.as_deref(), Some("Librairie"));
    assert!(CollaborativeProgram::list(&pool).unwrap().is_empty());

    // Singleton untouched by a list-only sync.
    let content = PartnersPageContent::find(&pool).unwrap();
    assert_eq!(content.title_fr.as_deref(), Some("Nos partenaires"));
}

#[test]
fn partners_replace_all_preserves_order() {
    let pool = test_pool();

    partner::replace_all(
        &pool,
        None,
        &[
            make_partner_form("b"),
            make_partner_form("a"),
            make_partner_form("c"),
        ],
        &[],
    )
    .unwrap();

    let names: Vec<String> = Partner::list(&pool)
        .unwrap()
        .into_iter()
        .filter_map(|p| p.name_fr)
        .collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn partners_content_upsert_keeps_single_row() {
    let pool = test_pool();

    let mk = |fr: &str| PartnersPageContentForm {
        title_ar: None,
        title_fr: Some(fr.to_string()),
        intro_ar: None,
        intro_fr: None,
    };

    partner::replace_all(&pool, Some(&mk("v1")), &[], &[]).unwrap();
    partner::replace_all(&pool, Some(&mk("v2")), &[], &[]).unwrap();

    let conn = pool.get().unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM partners_page_content", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        PartnersPageContent::find(&pool).unwrap().title_fr.as_deref(),
        Some("v2")
    );
}

// ═══════════════════════════════════════════════════════════
// Activities
// ═══════════════════════════════════════════════════════════

#[test]
fn activity_id_parses_composite_form() {
    let id = ActivityId::parse("art-12").unwrap();
    assert_eq!(id.kind, ActivityKind::Art);
    assert_eq!(id.id, 12);

    let id = ActivityId::parse("workshop-5").unwrap();
    assert_eq!(id.kind, ActivityKind::Workshop);

    let id = ActivityId::parse("literary-1").unwrap();
    assert_eq!(id.kind, ActivityKind::Literary);
}

#[test]
fn activity_id_rejects_malformed_input() {
    assert!(ActivityId::parse("banana-3").is_none());
    assert!(ActivityId::parse("art-").is_none());
    assert!(ActivityId::parse("art-abc").is_none());
    assert!(ActivityId::parse("art-12x").is_none());
    assert!(ActivityId::parse("art--5").is_none());
    assert!(ActivityId::parse("art-0").is_none());
    assert!(ActivityId::parse("12").is_none());
    assert!(ActivityId::parse("").is_none());
}

#[test]
fn activity_delete_body_accepts_both_forms() {
    let tagged: ActivityDeleteBody =
        serde_json::from_str(r#"{"kind": "art", "id": 3}"#).unwrap();
    assert!(matches!(
        tagged,
        ActivityDeleteBody::Tagged { kind: ActivityKind::Art, id: 3 }
    ));

    let composite: ActivityDeleteBody = serde_json::from_str(r#"{"id": "workshop-7"}"#).unwrap();
    assert!(matches!(composite, ActivityDeleteBody::Composite { .. }));

    // Bare numeric id without a kind matches neither form.
    assert!(serde_json::from_str::<ActivityDeleteBody>(r#"{"id": 3}"#).is_err());
}

#[test]
fn activity_delete_dispatches_by_kind() {
    let pool = test_pool();

    let ex = Exhibition::create(&pool, &make_exhibition_form("E", Status::Current, None)).unwrap();
    let ws = Workshop::create(&pool, &make_workshop_form("W", None, Status::Current)).unwrap();
    let ev = LiteraryEvent::create(&pool, &make_event_form("L", Status::Current)).unwrap();

    ActivityId { kind: ActivityKind::Art, id: ex }.delete(&pool).unwrap();
    assert!(Exhibition::find_by_id(&pool, ex).is_none());
    assert!(Workshop::find_by_id(&pool, ws).is_some());

    ActivityId { kind: ActivityKind::Workshop, id: ws }.delete(&pool).unwrap();
    assert!(Workshop::find_by_id(&pool, ws).is_none());

    ActivityId { kind: ActivityKind::Literary, id: ev }.delete(&pool).unwrap();
    assert!(LiteraryEvent::find_by_id(&pool, ev).is_none());
}

#[test]
fn activities_merge_and_order() {
    let pool = test_pool();

    Exhibition::create(
        &pool,
        &make_exhibition_form("expo", Status::Current, Some("2026-06-01")),
    )
    .unwrap();
    Workshop::create(&pool, &make_workshop_form("atelier", None, Status::Upcoming)).unwrap();
    LiteraryEvent::create(&pool, &make_event_form("salon", Status::Past)).unwrap();

    let items = activity::list_all(&pool).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].kind, ActivityKind::Art);
    assert_eq!(items[1].kind, ActivityKind::Workshop);
    assert_eq!(items[2].kind, ActivityKind::Literary);
    assert_eq!(items[0].title_fr.as_deref(), Some("expo"));
}

// ═══════════════════════════════════════════════════════════
// Upload validation
// ═══════════════════════════════════════════════════════════

#[test]
fn upload_classify_by_extension() {
    let pool = test_pool();
    assert_eq!(storage::classify(&pool, "jpg"), Some(UploadKind::Image));
    assert_eq!(storage::classify(&pool, "webp"), Some(UploadKind::Image));
    assert_eq!(storage::classify(&pool, "PDF"), Some(UploadKind::Document));
    assert_eq!(storage::classify(&pool, "docx"), Some(UploadKind::Document));
    assert_eq!(storage::classify(&pool, "exe"), None);
    assert_eq!(storage::classify(&pool, ""), None);
}

#[test]
fn upload_size_limits() {
    let pool = test_pool();
    assert_eq!(storage::max_upload_bytes(&pool, UploadKind::Image), 5 * 1024 * 1024);
    assert_eq!(storage::max_upload_bytes(&pool, UploadKind::Document), 10 * 1024 * 1024);

    Setting::set(&pool, "uploads_max_image_mb", "2").unwrap();
    assert_eq!(storage::max_upload_bytes(&pool, UploadKind::Image), 2 * 1024 * 1024);
}

#[test]
fn upload_sniff_image_magic_bytes() {
    let png = [0x89u8, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    assert!(storage::sniff_image(&png));

    let jpeg = [0xFFu8, 0xD8, 0xFF, 0xE0];
    assert!(storage::sniff_image(&jpeg));

    assert!(!storage::sniff_image(b"#!/bin/sh\necho hi\n"));
    assert!(!storage::sniff_image(&[]));
}

#[test]
fn upload_content_types_and_urls() {
    assert_eq!(storage::content_type_for("png"), "image/png");
    assert_eq!(storage::content_type_for("pdf"), "application/pdf");
    assert_eq!(storage::content_type_for("bin"), "application/octet-stream");

    assert_eq!(UploadKind::Image.public_url("a.png"), "/uploads/a.png");
    assert_eq!(
        UploadKind::Document.public_url("b.pdf"),
        "/uploads/documents/b.pdf"
    );
}

//! Model-level CRUD tests across the content entities: declared orderings,
//! partial updates, and idempotent deletes.
//!
//! Payload structs are built from JSON so the tests also cover the wire
//! field names (camelCase, `type`/`order` renames) and serde defaults.

mod common;

use serde_json::json;

use confsite::errors::AppError;
use confsite::models::{
    accepted_paper, archive, best_paper, conference, edition, fee, home_section, important_date,
    news, publication_stat, speaker, topic,
};
use common::setup_test_db;

fn parse<T: serde::de::DeserializeOwned>(v: serde_json::Value) -> T {
    serde_json::from_value(v).expect("payload should deserialize")
}

#[tokio::test]
async fn test_speakers_sort_year_desc_then_order_then_name() {
    let pool = setup_test_db().await;

    for (name, year, display_order) in [
        ("Zoe", 2024, 1),
        ("Ann", 2025, 2),
        ("Bea", 2025, 1),
        ("Cal", 2025, 1),
    ] {
        speaker::create(
            &pool,
            &parse(json!({
                "name": name,
                "designation": "Professor",
                "organization": "Example University",
                "year": year,
                "displayOrder": display_order,
            })),
        )
        .await
        .unwrap();
    }

    let all = speaker::find_all(&pool).await.unwrap();
    let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Bea", "Cal", "Ann", "Zoe"]);
}

#[tokio::test]
async fn test_important_dates_pinned_first_then_chronological() {
    let pool = setup_test_db().await;

    for (event, date, pinned) in [
        ("Camera ready", "2026-05-01", false),
        ("Submission deadline", "2026-02-01", true),
        ("Notification", "2026-04-01", false),
        ("Conference", "2026-09-15", true),
    ] {
        important_date::create(
            &pool,
            &parse(json!({ "event": event, "date": date, "isPinned": pinned })),
        )
        .await
        .unwrap();
    }

    let all = important_date::find_all(&pool).await.unwrap();
    let events: Vec<&str> = all.iter().map(|d| d.event.as_str()).collect();
    assert_eq!(
        events,
        vec![
            "Submission deadline",
            "Conference",
            "Notification",
            "Camera ready"
        ]
    );
}

#[tokio::test]
async fn test_news_ties_broken_by_latest_insert() {
    let pool = setup_test_db().await;

    for title in ["first", "second", "third"] {
        news::create(
            &pool,
            &parse(json!({ "title": title, "body": "b", "publishedOn": "2026-01-10" })),
        )
        .await
        .unwrap();
    }

    let all = news::find_all(&pool).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_editions_sort_newest_year_first() {
    let pool = setup_test_db().await;

    for (year, location) in [(2023, "Hanoi"), (2025, "Da Nang"), (2024, "Ho Chi Minh City")] {
        edition::create(&pool, &parse(json!({ "year": year, "location": location })))
            .await
            .unwrap();
    }

    let all = edition::find_all(&pool).await.unwrap();
    let years: Vec<i64> = all.iter().map(|e| e.year).collect();
    assert_eq!(years, vec![2025, 2024, 2023]);
}

#[tokio::test]
async fn test_fees_sort_display_order_then_insertion() {
    let pool = setup_test_db().await;

    for (category, display_order) in [("Student", 2), ("Regular", 1), ("Late", 1)] {
        fee::create(
            &pool,
            &parse(json!({
                "category": category,
                "amount": "USD 250",
                "displayOrder": display_order,
            })),
        )
        .await
        .unwrap();
    }

    // Equal display orders keep insertion order
    let all = fee::find_all(&pool).await.unwrap();
    let categories: Vec<&str> = all.iter().map(|f| f.category.as_str()).collect();
    assert_eq!(categories, vec!["Regular", "Late", "Student"]);
}

#[tokio::test]
async fn test_archive_sort_year_desc_then_insertion() {
    let pool = setup_test_db().await;

    for (year, title) in [
        (2024, "Proceedings 2024"),
        (2025, "Photo gallery"),
        (2025, "Final program"),
    ] {
        archive::create(&pool, &parse(json!({ "year": year, "title": title })))
            .await
            .unwrap();
    }

    let all = archive::find_all(&pool).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Photo gallery", "Final program", "Proceedings 2024"]
    );
}

#[tokio::test]
async fn test_accepted_papers_sort_alphabetical() {
    let pool = setup_test_db().await;

    for title in [
        "Neural ranking at scale",
        "Adaptive mesh refinement",
        "Zero-shot retrieval",
    ] {
        accepted_paper::create(&pool, &parse(json!({ "title": title, "authors": "Doe et al." })))
            .await
            .unwrap();
    }

    let all = accepted_paper::find_all(&pool).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Adaptive mesh refinement",
            "Neural ranking at scale",
            "Zero-shot retrieval"
        ]
    );
    // paperCode was omitted and defaults to empty
    assert_eq!(all[0].paper_code, "");
}

#[tokio::test]
async fn test_best_papers_sort_year_desc_then_insertion() {
    let pool = setup_test_db().await;

    for (year, title) in [
        (2024, "Prior art survey"),
        (2026, "Signal recovery"),
        (2026, "Runner-up entry"),
    ] {
        best_paper::create(
            &pool,
            &parse(json!({ "year": year, "title": title, "authors": "Doe et al." })),
        )
        .await
        .unwrap();
    }

    let all = best_paper::find_all(&pool).await.unwrap();
    let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Signal recovery", "Runner-up entry", "Prior art survey"]
    );
    assert_eq!(all[0].award, "");
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields_alone() {
    let pool = setup_test_db().await;

    let created = topic::create(
        &pool,
        &parse(json!({
            "title": "Machine Learning",
            "description": "Original description",
            "displayOrder": 3,
        })),
    )
    .await
    .unwrap();

    let updated = topic::update(
        &pool,
        created.id,
        &parse(json!({ "title": "Deep Learning" })),
    )
    .await
    .unwrap();

    assert_eq!(updated.title, "Deep Learning");
    assert_eq!(updated.description, "Original description");
    assert_eq!(updated.display_order, 3);
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let pool = setup_test_db().await;
    let result = topic::update(&pool, 9999, &parse(json!({ "title": "x" }))).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let pool = setup_test_db().await;

    let created = topic::create(&pool, &parse(json!({ "title": "Ephemeral" })))
        .await
        .unwrap();

    assert_eq!(topic::delete(&pool, created.id).await.unwrap(), 1);
    assert_eq!(topic::delete(&pool, created.id).await.unwrap(), 0);
    assert!(topic::find_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_publication_stats_sort_and_partial_update() {
    let pool = setup_test_db().await;

    for (year, submitted) in [(2024, 80), (2026, 150), (2025, 120)] {
        publication_stat::create(
            &pool,
            &parse(json!({ "year": year, "submitted": submitted })),
        )
        .await
        .unwrap();
    }

    let all = publication_stat::find_all(&pool).await.unwrap();
    let years: Vec<i64> = all.iter().map(|s| s.year).collect();
    assert_eq!(years, vec![2026, 2025, 2024]);

    // Updating one counter leaves the rest of the row alone
    let updated = publication_stat::update(
        &pool,
        all[1].id,
        &parse(json!({ "accepted": 40 })),
    )
    .await
    .unwrap();
    assert_eq!(updated.accepted, 40);
    assert_eq!(updated.submitted, 120);
    assert_eq!(updated.year, 2025);
}

#[tokio::test]
async fn test_home_sections_sort_toggle_and_idempotent_delete() {
    let pool = setup_test_db().await;

    for (slug, heading, display_order) in [
        ("welcome", "Welcome", 2),
        ("about", "About the conference", 1),
        ("venue", "Venue", 1),
    ] {
        home_section::create(
            &pool,
            &parse(json!({ "slug": slug, "heading": heading, "displayOrder": display_order })),
        )
        .await
        .unwrap();
    }

    let all = home_section::find_all(&pool).await.unwrap();
    let slugs: Vec<&str> = all.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["about", "venue", "welcome"]);
    assert!(all[0].is_visible, "sections default to visible");

    let hidden = home_section::update(&pool, all[0].id, &parse(json!({ "isVisible": false })))
        .await
        .unwrap();
    assert!(!hidden.is_visible);
    assert_eq!(hidden.heading, "About the conference");

    let welcome_id = all[2].id;
    assert_eq!(home_section::delete(&pool, welcome_id).await.unwrap(), 1);
    assert_eq!(home_section::delete(&pool, welcome_id).await.unwrap(), 0);
    assert_eq!(home_section::find_all(&pool).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_conference_upsert_keeps_row_id() {
    let pool = setup_test_db().await;

    let first = conference::upsert(
        &pool,
        &parse(json!({ "conferenceId": "icmlsc-2026", "name": "ICMLSC", "city": "Oslo" })),
    )
    .await
    .unwrap();

    let second = conference::upsert(
        &pool,
        &parse(json!({ "conferenceId": "icmlsc-2026", "name": "ICMLSC 2026", "city": "Bergen" })),
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "ICMLSC 2026");
    assert_eq!(second.city, "Bergen");
    assert_eq!(conference::find_all(&pool).await.unwrap().len(), 1);

    let by_slug = conference::find_by_conference_id(&pool, "icmlsc-2026")
        .await
        .unwrap()
        .expect("slug should resolve");
    assert_eq!(by_slug.id, first.id);
}

#[tokio::test]
async fn test_list_reflects_mutations() {
    let pool = setup_test_db().await;

    let a = topic::create(&pool, &parse(json!({ "title": "A", "displayOrder": 1 })))
        .await
        .unwrap();
    let b = topic::create(&pool, &parse(json!({ "title": "B", "displayOrder": 2 })))
        .await
        .unwrap();

    assert_eq!(topic::find_all(&pool).await.unwrap().len(), 2);

    topic::update(&pool, b.id, &parse(json!({ "displayOrder": 0 })))
        .await
        .unwrap();
    let reordered = topic::find_all(&pool).await.unwrap();
    assert_eq!(reordered[0].id, b.id);

    topic::delete(&pool, a.id).await.unwrap();
    let remaining = topic::find_all(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b.id);
}

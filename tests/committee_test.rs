//! Committee tests against the database: section deletion by exact type and
//! the aggregated view served to the public committees page.

mod common;

use serde_json::json;

use confsite::models::committee::{self, static_entries, CommitteeSection};
use common::setup_test_db;

fn parse<T: serde::de::DeserializeOwned>(v: serde_json::Value) -> T {
    serde_json::from_value(v).expect("payload should deserialize")
}

async fn add_member(
    pool: &confsite::db::DbPool,
    name: &str,
    member_type: &str,
    section_order: i64,
    member_order: i64,
) -> i64 {
    committee::create(
        pool,
        &parse(json!({
            "name": name,
            "type": member_type,
            "sectionOrder": section_order,
            "order": member_order,
        })),
    )
    .await
    .unwrap()
    .id
}

fn section<'a>(sections: &'a [CommitteeSection], member_type: &str) -> &'a CommitteeSection {
    sections
        .iter()
        .find(|s| s.member_type == member_type)
        .unwrap_or_else(|| panic!("missing section {member_type:?}"))
}

#[tokio::test]
async fn test_delete_section_matches_type_exactly() {
    let pool = setup_test_db().await;

    add_member(&pool, "A", "Technical Program Committee", 0, 0).await;
    add_member(&pool, "B", "Technical Program Committee", 0, 1).await;
    add_member(&pool, "C", "technical program committee", 0, 0).await;
    add_member(&pool, "D", "Organizing Committee", 0, 0).await;

    let removed = committee::delete_section(&pool, "Technical Program Committee")
        .await
        .unwrap();
    assert_eq!(removed, 2);

    let left = committee::find_all(&pool).await.unwrap();
    let names: Vec<&str> = left.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["C", "D"]);

    // Unknown type removes nothing
    assert_eq!(
        committee::delete_section(&pool, "No Such Section").await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_aggregate_includes_static_sections_on_empty_db() {
    let pool = setup_test_db().await;

    let members = committee::find_all(&pool).await.unwrap();
    let sections = committee::aggregate_sections(&members);

    let advisory = section(&sections, "Advisory Committee");
    assert_eq!(advisory.members.len(), static_entries::ADVISORY_COMMITTEE.len());
    assert!(advisory.members.iter().all(|m| m.is_static && m.id.is_none()));

    let chairs = section(&sections, "Conference Chairs");
    assert_eq!(chairs.members.len(), static_entries::CHAIR_ENTRIES.len());
}

#[tokio::test]
async fn test_aggregate_orders_sections_and_members() {
    let pool = setup_test_db().await;

    add_member(&pool, "Late", "Organizing Committee", 2, 9).await;
    add_member(&pool, "Early", "Organizing Committee", 2, 1).await;
    add_member(&pool, "Solo", "Track Chairs", 1, 0).await;

    let members = committee::find_all(&pool).await.unwrap();
    let sections = committee::aggregate_sections(&members);

    // Ranked sections lead in ascending order; static-only sections are
    // unranked and follow.
    assert_eq!(sections[0].member_type, "Track Chairs");
    assert_eq!(sections[1].member_type, "Organizing Committee");

    let organizing = section(&sections, "Organizing Committee");
    let names: Vec<&str> = organizing.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Early", "Late"]);
}

#[tokio::test]
async fn test_promoted_static_entry_is_not_doubled() {
    let pool = setup_test_db().await;

    let promoted = static_entries::ADVISORY_COMMITTEE[0];
    add_member(&pool, promoted.name, promoted.member_type, 0, 0).await;

    let members = committee::find_all(&pool).await.unwrap();
    let sections = committee::aggregate_sections(&members);

    let advisory = section(&sections, "Advisory Committee");
    let count = advisory
        .members
        .iter()
        .filter(|m| m.name == promoted.name)
        .count();
    assert_eq!(count, 1);
    // The surviving copy is the database row
    let survivor = advisory
        .members
        .iter()
        .find(|m| m.name == promoted.name)
        .unwrap();
    assert!(!survivor.is_static);
    assert!(survivor.id.is_some());
}

#[tokio::test]
async fn test_seed_committees_bootstraps_once() {
    let pool = setup_test_db().await;

    confsite::db::seed_committees(&pool).await;
    let seeded = committee::find_all(&pool).await.unwrap();
    let expected = static_entries::ADVISORY_COMMITTEE.len() + static_entries::CHAIR_ENTRIES.len();
    assert_eq!(seeded.len(), expected);

    // Re-running against a populated store is a no-op
    confsite::db::seed_committees(&pool).await;
    assert_eq!(committee::find_all(&pool).await.unwrap().len(), expected);

    // The seeded rows shadow their compiled-in twins: everything in the
    // aggregate is editable and the advisory list keeps its order.
    let sections = committee::aggregate_sections(&seeded);
    let advisory = section(&sections, "Advisory Committee");
    assert!(advisory.members.iter().all(|m| !m.is_static && m.id.is_some()));
    let names: Vec<&str> = advisory.members.iter().map(|m| m.name.as_str()).collect();
    let expected_names: Vec<&str> = static_entries::ADVISORY_COMMITTEE
        .iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, expected_names);
}

#[tokio::test]
async fn test_placeholder_row_keeps_section_visible() {
    let pool = setup_test_db().await;

    // Empty name is legal at the model layer; it ranks the section without
    // rendering a person.
    add_member(&pool, "", "Student Volunteers", 4, 0).await;

    let members = committee::find_all(&pool).await.unwrap();
    let sections = committee::aggregate_sections(&members);

    let volunteers = section(&sections, "Student Volunteers");
    assert!(volunteers.has_placeholder);
    assert!(volunteers.members.is_empty());
    assert_eq!(volunteers.section_order, 4);
}

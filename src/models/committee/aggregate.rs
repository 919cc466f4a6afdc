//! Grouping and ordering of committee members for the committees page.
//!
//! Database rows and the compiled-in static entries are merged into named
//! sections keyed by the exact `type` string. No normalization is applied to
//! the key: two differently-cased type strings are two sections. That policy
//! is fragile on purpose; it matches what admins see in the editing UI.

use super::static_entries;
use super::types::{AggregatedMember, CommitteeMember, CommitteeSection, StaticEntry};

/// Build the grouped, ordered section list from the database members plus
/// the compiled-in entries.
pub fn aggregate_sections(db_members: &[CommitteeMember]) -> Vec<CommitteeSection> {
    aggregate_with(db_members, static_entries::all())
}

struct SectionAcc {
    member_type: String,
    // None until a member with a non-zero section_order shows up
    max_order: Option<i64>,
    has_placeholder: bool,
    db_members: Vec<AggregatedMember>,
    db_names: Vec<String>,
    static_members: Vec<AggregatedMember>,
}

impl SectionAcc {
    fn new(member_type: &str) -> Self {
        SectionAcc {
            member_type: member_type.to_string(),
            max_order: None,
            has_placeholder: false,
            db_members: Vec::new(),
            db_names: Vec::new(),
            static_members: Vec::new(),
        }
    }
}

fn aggregate_with<'a>(
    db_members: &[CommitteeMember],
    statics: impl Iterator<Item = &'a StaticEntry>,
) -> Vec<CommitteeSection> {
    // Vec instead of a map keeps first-appearance order for the unranked tie
    // break below; the section count is small.
    let mut sections: Vec<SectionAcc> = Vec::new();

    for m in db_members {
        let idx = section_index(&mut sections, &m.member_type);
        let acc = &mut sections[idx];

        // A section's display order is the maximum non-zero order found
        // among its members; all-zero sections stay unranked.
        if m.section_order != 0 {
            acc.max_order = Some(acc.max_order.map_or(m.section_order, |o| o.max(m.section_order)));
        }

        if m.name.trim().is_empty() {
            // Placeholder row: carries the section order, never displayed.
            acc.has_placeholder = true;
        } else {
            acc.db_names.push(normalize_name(&m.name));
            acc.db_members.push(AggregatedMember {
                id: Some(m.id),
                name: m.name.clone(),
                designation: m.designation.clone(),
                organization: m.organization.clone(),
                member_order: m.member_order,
                is_static: false,
            });
        }
    }

    for s in statics {
        let idx = section_index(&mut sections, s.member_type);
        let acc = &mut sections[idx];

        // A promoted static entry exists as a database row with the same
        // name; showing both would duplicate the person.
        if acc.db_names.contains(&normalize_name(s.name)) {
            continue;
        }
        acc.static_members.push(AggregatedMember {
            id: None,
            name: s.name.to_string(),
            designation: s.designation.to_string(),
            organization: s.organization.to_string(),
            member_order: 0,
            is_static: true,
        });
    }

    let mut out: Vec<CommitteeSection> = sections
        .into_iter()
        .map(|acc| {
            let mut members = acc.db_members;
            members.sort_by_key(|m| m.member_order);
            members.extend(acc.static_members);
            CommitteeSection {
                member_type: acc.member_type,
                section_order: acc.max_order.unwrap_or(0),
                has_placeholder: acc.has_placeholder,
                members,
            }
        })
        .collect();

    // Ranked sections ascending, unranked (order 0) after them; the sort is
    // stable so ties keep first-appearance order.
    out.sort_by_key(|s| (s.section_order == 0, s.section_order));
    out
}

fn section_index(sections: &mut Vec<SectionAcc>, member_type: &str) -> usize {
    match sections.iter().position(|s| s.member_type == member_type) {
        Some(i) => i,
        None => {
            sections.push(SectionAcc::new(member_type));
            sections.len() - 1
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, name: &str, member_type: &str, section_order: i64, member_order: i64) -> CommitteeMember {
        CommitteeMember {
            id,
            name: name.to_string(),
            designation: String::new(),
            organization: String::new(),
            member_type: member_type.to_string(),
            section_order,
            member_order,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn names(section: &CommitteeSection) -> Vec<&str> {
        section.members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn members_sort_by_order_within_section() {
        let db = vec![
            member(1, "X", "A", 0, 2),
            member(2, "Y", "A", 0, 1),
        ];
        let sections = aggregate_with(&db, std::iter::empty());
        assert_eq!(sections.len(), 1);
        assert_eq!(names(&sections[0]), vec!["Y", "X"]);
    }

    #[test]
    fn placeholder_yields_visible_empty_section() {
        let db = vec![member(1, "", "B", 5, 0)];
        let sections = aggregate_with(&db, std::iter::empty());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].member_type, "B");
        assert_eq!(sections[0].section_order, 5);
        assert!(sections[0].has_placeholder);
        assert!(sections[0].members.is_empty());
    }

    #[test]
    fn section_order_is_max_non_zero() {
        let db = vec![
            member(1, "a", "A", 0, 0),
            member(2, "b", "A", 3, 0),
            member(3, "c", "A", 7, 0),
        ];
        let sections = aggregate_with(&db, std::iter::empty());
        assert_eq!(sections[0].section_order, 7);
    }

    #[test]
    fn unranked_sections_sort_after_ranked() {
        let db = vec![
            member(1, "a", "NoOrder", 0, 0),
            member(2, "b", "Second", 2, 0),
            member(3, "c", "First", 1, 0),
        ];
        let sections = aggregate_with(&db, std::iter::empty());
        let order: Vec<&str> = sections.iter().map(|s| s.member_type.as_str()).collect();
        assert_eq!(order, vec!["First", "Second", "NoOrder"]);
    }

    #[test]
    fn static_entries_come_last_in_their_section() {
        let db = vec![member(1, "db member", "Chairs", 0, 5)];
        let statics = [StaticEntry {
            name: "static member",
            designation: "",
            organization: "",
            member_type: "Chairs",
        }];
        let sections = aggregate_with(&db, statics.iter());
        assert_eq!(names(&sections[0]), vec!["db member", "static member"]);
        assert!(!sections[0].members[0].is_static);
        assert!(sections[0].members[1].is_static);
    }

    #[test]
    fn static_only_section_appears_unranked() {
        let statics = [StaticEntry {
            name: "someone",
            designation: "",
            organization: "",
            member_type: "Advisory",
        }];
        let sections = aggregate_with(&[], statics.iter());
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].section_order, 0);
        assert!(!sections[0].has_placeholder);
        assert_eq!(names(&sections[0]), vec!["someone"]);
    }

    #[test]
    fn promoted_static_is_deduplicated_by_name() {
        // Promotion creates a DB row with the same person; the compiled-in
        // entry must disappear even with case and whitespace differences.
        let db = vec![member(1, "  jane DOE ", "Chairs", 0, 0)];
        let statics = [StaticEntry {
            name: "Jane Doe",
            designation: "",
            organization: "",
            member_type: "Chairs",
        }];
        let sections = aggregate_with(&db, statics.iter());
        assert_eq!(names(&sections[0]), vec!["  jane DOE "]);
    }

    #[test]
    fn type_matching_is_exact() {
        let db = vec![
            member(1, "upper", "Organizing Committee", 0, 0),
            member(2, "lower", "organizing committee", 0, 0),
        ];
        let sections = aggregate_with(&db, std::iter::empty());
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn same_name_in_other_section_does_not_dedup() {
        let db = vec![member(1, "Jane Doe", "Track Chairs", 0, 0)];
        let statics = [StaticEntry {
            name: "Jane Doe",
            designation: "",
            organization: "",
            member_type: "Chairs",
        }];
        let sections = aggregate_with(&db, statics.iter());
        assert_eq!(sections.len(), 2);
    }
}

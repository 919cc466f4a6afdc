//! Compiled-in committee entries carried over from the first edition of the
//! site, before committees were stored in the database. They keep rendering
//! until an admin promotes them into real rows; promotion does not remove
//! the entry here, the aggregation deduplicates by name instead.

use super::types::StaticEntry;

pub const ADVISORY_COMMITTEE: &[StaticEntry] = &[
    StaticEntry {
        name: "Prof. Elena Marchetti",
        designation: "Professor of Computer Science",
        organization: "University of Bologna",
        member_type: "Advisory Committee",
    },
    StaticEntry {
        name: "Prof. Rajiv Menon",
        designation: "Dean of Engineering",
        organization: "IIT Madras",
        member_type: "Advisory Committee",
    },
    StaticEntry {
        name: "Dr. Hannah Okafor",
        designation: "Principal Researcher",
        organization: "University of Cape Town",
        member_type: "Advisory Committee",
    },
    StaticEntry {
        name: "Prof. Tomasz Kowalski",
        designation: "Head of Department",
        organization: "Warsaw University of Technology",
        member_type: "Advisory Committee",
    },
];

pub const CHAIR_ENTRIES: &[StaticEntry] = &[
    StaticEntry {
        name: "Prof. Ingrid Svensson",
        designation: "General Chair",
        organization: "KTH Royal Institute of Technology",
        member_type: "Conference Chairs",
    },
    StaticEntry {
        name: "Dr. Miguel Ferreira",
        designation: "Program Chair",
        organization: "University of Porto",
        member_type: "Conference Chairs",
    },
    StaticEntry {
        name: "Dr. Aisha Rahman",
        designation: "Publications Chair",
        organization: "National University of Singapore",
        member_type: "Conference Chairs",
    },
];

/// Every compiled-in entry, advisory board first.
pub fn all() -> impl Iterator<Item = &'static StaticEntry> {
    ADVISORY_COMMITTEE.iter().chain(CHAIR_ENTRIES.iter())
}

pub mod accepted_paper;
pub mod archive;
pub mod best_paper;
pub mod committee;
pub mod conference;
pub mod edition;
pub mod fee;
pub mod home_section;
pub mod important_date;
pub mod news;
pub mod publication_stat;
pub mod speaker;
pub mod topic;
pub mod user;

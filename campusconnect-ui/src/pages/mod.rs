//! Pages
//!
//! One component per router view.

mod admin;
mod attendance;
mod auth;
mod chat;
mod dashboard;
mod events;
mod feed;
mod profile;
mod skill_gap;

pub use admin::{AdminAttendance, AdminDashboard, AdminEvents, AdminFlagged, AdminUsers};
pub use attendance::Attendance;
pub use auth::{Login, Signup};
pub use chat::Chat;
pub use dashboard::Dashboard;
pub use events::Events;
pub use feed::Feed;
pub use profile::{Profile, PublicProfile};
pub use skill_gap::SkillGap;

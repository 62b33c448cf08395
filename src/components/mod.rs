//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod toast;

pub use chart::{OutcomeChart, VitalsChart};
pub use loading::{ChartSkeleton, ListSkeleton, Loading};
pub use nav::Nav;
pub use stat_card::StatCard;
pub use toast::Toast;

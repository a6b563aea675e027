#![forbid(unsafe_code)]

pub mod bands;
pub mod calendar;
pub mod compose;
pub mod config;
pub mod decor;
pub mod error;
pub mod fetch;
pub mod layout;
pub mod pipeline;
pub mod scene;
pub mod svg;

pub use bands::Band;
pub use calendar::{ContributionCalendar, ContributionDay, ContributionWeek, DAYS_PER_WEEK};
pub use compose::{ComposeOpts, compose_scene};
pub use config::Config;
pub use error::{InvadersError, InvadersResult};
pub use fetch::{FetchOptions, GITHUB_GRAPHQL_URL, fetch_contributions};
pub use layout::{Canvas, GridLayout, RenderedCell};
pub use pipeline::generate_svg;
pub use scene::{Node, Scene};
pub use svg::write_document;

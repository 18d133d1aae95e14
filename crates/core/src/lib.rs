//! powersmart-core - Dataset processing and chart scenes for PowerSmart
//!
//! This crate contains the WASM-compatible half of the PowerSmart site:
//! everything between the raw registry CSV and the SVG the dashboard
//! draws, with no UI or network dependency so it all runs under plain
//! `cargo test`.
//!
//! # Features
//!
//! - Parse the television energy-registry CSV into typed records
//! - Aggregate records into the four per-chart summaries
//! - Build declarative chart scenes (marks, axes, labels, legend)
//! - Track page navigation and the one-shot chart-load latch

pub mod aggregate;
pub mod chart;
pub mod data;
pub mod error;
pub mod page;
pub mod scale;
pub mod scene;
pub mod theme;

pub use aggregate::{
    sample_power_points, size_distribution, technology_breakdown, top_brands, BrandBucket,
    SizeBucket, TechBreakdown, TechBucket, MAX_POWER_POINTS, TOP_BRAND_COUNT,
};
pub use chart::{brand_chart, power_chart, size_chart, tech_chart};
pub use data::{parse_dataset, Dataset, TelevisionRecord};
pub use error::{Error, Result};
pub use page::{ChartLoadLatch, Page, PageState, DEFAULT_TITLE};
pub use scene::{Mark, Scene};
pub use theme::Theme;

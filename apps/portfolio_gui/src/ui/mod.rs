//! UI layer: app shell and section renderers.

pub mod app;
pub mod sections;

pub use app::PortfolioApp;

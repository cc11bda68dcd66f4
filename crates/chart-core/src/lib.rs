// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the spend chart engine, its data model and host glue.

//! Renderer-agnostic area/line chart for time-indexed spend data.
//!
//! A [`ChartEngine`] turns a [`Series`] plus a [`ViewConfig`] and a [`Viewport`]
//! into a retained [`Scene`] (grid, axes, gradient area, line) and resolves pointer
//! positions to the nearest point for the hover marker and tooltip. [`ChartHost`]
//! mounts an engine into a [`Container`] and re-renders on every size change.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use shadow_chart::{ChartEngine, DataPoint, Series, ViewConfig, Viewport};
//!
//! let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap();
//! let series = Series::from_points(vec![
//!     DataPoint::new(day(1), 100.0),
//!     DataPoint::new(day(2), 200.0),
//!     DataPoint::new(day(3), 150.0),
//! ]);
//! let mut engine = ChartEngine::new();
//! engine.render(&series, &ViewConfig::default(), Viewport::new(400.0, 200.0));
//! assert!(!engine.scene().is_empty());
//! ```

pub mod axis;
pub mod chart;
pub mod config;
pub mod curve;
pub mod error;
pub mod focus;
pub mod format;
pub mod geometry;
pub mod gradient;
pub mod grid;
pub mod host;
pub mod path;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;
pub mod view;

pub use chart::ChartEngine;
pub use config::{ValueFormatter, ViewConfig};
pub use error::{ChartError, Result};
pub use focus::{Focus, FocusState, Placement, Tooltip, TooltipStyle};
pub use geometry::{Point, Rect};
pub use host::{ChartHost, Container, Subscription, VirtualContainer};
pub use scale::{ScaleTransform, TimeScale, ValueScale};
pub use scene::{Fill, Node, Role, Scene, Shape};
pub use series::{DataPoint, Series};
pub use theme::{Color, Theme};
pub use types::Margins;
pub use view::Viewport;

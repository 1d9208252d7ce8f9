//! Convert arbitrary JSON documents into node-and-connector diagram graphs.
//!
//! ```rust
//! use json_diagram::{process_data_with, SequentialIdSource};
//! use serde_json::json;
//!
//! let diagram = process_data_with(&json!({"x": [1, 2]}), &mut SequentialIdSource::new());
//! assert_eq!(diagram.nodes.len(), 3);
//! assert_eq!(diagram.connectors.len(), 2);
//! ```

pub mod common;
pub mod config;
pub mod consolidate;
pub mod diagram;
pub mod emitter;
pub mod errors;
pub mod export;
pub mod ids;
pub mod parser;
pub mod root;
pub mod shape;
pub mod theme;

pub use diagram::{Annotation, DiagramConnector, DiagramData, DiagramNode};
pub use errors::{DiagramError, DiagramResult};
pub use ids::{IdSource, RandomIdSource, SequentialIdSource};
pub use parser::{parse_json, process_data, process_data_with, DiagramParser};
pub use theme::{ThemeMode, ThemeService, ThemeSettings};

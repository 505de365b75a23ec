//! Process-hitting models read with peg-framework.
//!
//! The `.ph` text format is described by a grammar assembled from
//! peg-framework rules (see [`grammar`]). Parsing yields raw statements,
//! which [`validate`] turns into a checked [`Model`] that can be written
//! back as `.ph` text, as Graphviz, or as a summary.
//!
//! ```
//! use peg_example::parse_model;
//!
//! let model = parse_model("process a 1\nprocess b 1\na 1 -> b 0 1").unwrap();
//! assert_eq!(model.sorts().len(), 2);
//! assert_eq!(model.actions()[0].bounce, 1);
//! ```

pub mod error;
pub mod grammar;
pub mod model;
pub mod render;
pub mod validate;

pub use error::ModelError;
pub use model::{Action, Model, Process, Rate, Sort};
pub use validate::{build_model, load_model, parse_model};

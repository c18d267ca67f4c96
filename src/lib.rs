//! # framegen - Frame DSL Transformer
//!
//! **framegen** converts the nested, human-authored JSON description of a UI
//! frame into the flat, referentially checked production model used for
//! storage and sync, and rebuilds the nested form from a flat model.
//!
//! ## Core Workflow
//!
//! 1.  **Load the DSL**: Parse the authoring document into a [`dsl::FrameDsl`].
//! 2.  **Flatten**: Use the `Flattener::builder` with a [`schema::SchemaValidator`]
//!     to validate the document, assign identifiers and parent pointers, and
//!     check every variable binding, slot, trigger chain and block key.
//! 3.  **Emit or sync**: Wrap the resulting [`model::Frame`] in a
//!     [`model::FrameProductionEnvelope`] for local output, or a
//!     [`model::SyncFrameInput`] for the remote sync call.
//! 4.  **Rebuild**: Feed a fetched flat frame to the [`rebuild::Rebuilder`] to
//!     get the nested document back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use framegen::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let schema_ref = "https://schema.example.com/frame.json";
//!     let validator =
//!         JsonSchemaValidator::new().with_schema(schema_ref, json!({"type": "object"}));
//!
//!     let dsl = FrameDsl::from_file("frames/home.json")?;
//!     let flattener = Flattener::builder(validator).build();
//!
//!     match flattener.flatten(&dsl)? {
//!         FlattenOutcome::Flattened(frame) => {
//!             println!("{} blocks, {} actions", frame.blocks.len(), frame.actions.len());
//!
//!             let rebuilt = Rebuilder::new().rebuild(&frame, &dsl.schema)?;
//!             assert_eq!(rebuilt.name, dsl.name);
//!         }
//!         FlattenOutcome::SchemaRejected(violations) => {
//!             for v in violations {
//!                 println!("- {}", v);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dsl;
pub mod error;
pub mod flatten;
pub mod ids;
pub mod model;
pub mod prelude;
pub mod rebuild;
pub mod route;
pub mod schema;

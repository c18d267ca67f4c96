//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the framegen crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use framegen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let dsl = FrameDsl::from_file("path/to/frame.json")?;
//! let flattener = Flattener::builder(JsonSchemaValidator::new()).build();
//!
//! if let Some(frame) = flattener.flatten(&dsl)?.into_frame() {
//!     let envelope = FrameProductionEnvelope::new(frame);
//!     println!("{}", serde_json::to_string(&envelope)?);
//! }
//! # Ok(())
//! # }
//! ```

// Transformation
pub use crate::config::TransformConfig;
pub use crate::flatten::{FlattenOutcome, Flattener};
pub use crate::rebuild::Rebuilder;
pub use crate::route::extract_route_arguments;

// Collaborators
pub use crate::ids::{IdIssuer, SequentialIssuer, UuidIssuer};
pub use crate::schema::{
    AcceptAllValidator, JsonSchemaValidator, SchemaValidator, ValidationOutcome,
};

// Nested authoring form
pub use crate::dsl::{
    ActionDsl, BlockDsl, DataDsl, FrameDsl, PropertyDsl, SlotDsl, TriggerDsl, TriggerPropertyDsl,
    VariableDsl,
};

// Flat production form
pub use crate::model::{
    Action, ActionTrigger, Block, BlockData, BlockProperty, BlockSlot, Frame, FrameEnvelope,
    FrameKind, FrameProductionEnvelope, RouteArgument, SyncFrameInput, ThenMode, TriggerData,
    TriggerProperty, Variable, VariableType,
};

// Error types
pub use crate::error::{BindingOwner, FrameError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

use crate::config::TransformConfig;
use crate::dsl::FrameDsl;
use crate::error::FrameError;
use crate::ids::{IdIssuer, UuidIssuer};
use crate::model::{Frame, Variable};
use crate::route::extract_route_arguments;
use crate::schema::{SchemaValidator, ValidationOutcome};
use itertools::Itertools;
use tracing::{debug, warn};

pub mod validate;
mod walker;

use validate::{check_nesting_depth, find_duplicate_keys};
use walker::FlattenContext;

/// The result of a flatten call that did not hit a hard error.
#[derive(Debug, Clone, PartialEq)]
pub enum FlattenOutcome {
    Flattened(Frame),
    /// The document failed schema validation. Nothing was produced; the
    /// violations are returned for the caller to report.
    SchemaRejected(Vec<String>),
}

impl FlattenOutcome {
    pub fn into_frame(self) -> Option<Frame> {
        match self {
            FlattenOutcome::Flattened(frame) => Some(frame),
            FlattenOutcome::SchemaRejected(_) => None,
        }
    }
}

/// Converts nested [`FrameDsl`] documents into the flat [`Frame`] model.
pub struct Flattener {
    validator: Box<dyn SchemaValidator>,
    issuer: Box<dyn IdIssuer>,
    config: TransformConfig,
}

pub struct FlattenerBuilder {
    validator: Box<dyn SchemaValidator>,
    issuer: Box<dyn IdIssuer>,
    config: TransformConfig,
}

impl FlattenerBuilder {
    pub fn new(validator: impl SchemaValidator + 'static) -> Self {
        Self {
            validator: Box::new(validator),
            issuer: Box::new(UuidIssuer),
            config: TransformConfig::default(),
        }
    }
    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_id_issuer(mut self, issuer: impl IdIssuer + 'static) -> Self {
        self.issuer = Box::new(issuer);
        self
    }
    pub fn build(self) -> Flattener {
        Flattener {
            validator: self.validator,
            issuer: self.issuer,
            config: self.config,
        }
    }
}

impl Flattener {
    pub fn builder(validator: impl SchemaValidator + 'static) -> FlattenerBuilder {
        FlattenerBuilder::new(validator)
    }

    /// Parses an authoring document and flattens it.
    pub fn flatten_str(&self, json: &str) -> Result<FlattenOutcome, FrameError> {
        let dsl = FrameDsl::from_json(json)?;
        self.flatten(&dsl)
    }

    /// Validates and flattens a frame document.
    ///
    /// The first problem found anywhere in the tree aborts the whole call.
    /// A document that fails schema validation is not an error: it yields
    /// [`FlattenOutcome::SchemaRejected`].
    pub fn flatten(&self, dsl: &FrameDsl) -> Result<FlattenOutcome, FrameError> {
        if dsl.schema.is_empty() {
            return Err(FrameError::MissingSchema);
        }
        check_nesting_depth(&dsl.blocks, self.config.max_depth)?;

        let document = serde_json::to_value(dsl)?;
        if let ValidationOutcome::Invalid(violations) =
            self.validator.validate(&document, &dsl.schema)?
        {
            for violation in &violations {
                warn!(frame = %dsl.name, "schema violation: {}", violation);
            }
            return Ok(FlattenOutcome::SchemaRejected(violations));
        }

        if self.config.enforce_root_key_type {
            if let Some(root) = dsl.blocks.first() {
                if root.key_type != self.config.root_key_type {
                    return Err(FrameError::InvalidRootBlock {
                        key_type: root.key_type.clone(),
                        expected: self.config.root_key_type.clone(),
                    });
                }
            }
        }

        let frame_id = self.issuer.new_id();
        let variables: Vec<Variable> = dsl
            .variables
            .iter()
            .map(|v| Variable {
                id: self.issuer.new_id(),
                frame_id: frame_id.clone(),
                key: v.key.clone(),
                value: v.value.clone(),
                kind: v.kind,
            })
            .collect();

        let mut ctx =
            FlattenContext::new(&frame_id, &variables, self.issuer.as_ref(), &self.config);
        ctx.flatten_blocks(&dsl.blocks, "", &[])?;
        let FlattenContext { blocks, actions, .. } = ctx;

        let duplicates = find_duplicate_keys(&blocks);
        if !duplicates.is_empty() {
            return Err(FrameError::DuplicateBlockKey { keys: duplicates });
        }

        let route_arguments = extract_route_arguments(&dsl.route)
            .into_iter()
            .unique()
            .collect();

        debug!(
            frame = %dsl.name,
            blocks = blocks.len(),
            actions = actions.len(),
            variables = variables.len(),
            "flattened frame"
        );

        Ok(FlattenOutcome::Flattened(Frame {
            id: frame_id,
            name: dsl.name.clone(),
            route: dsl.route.clone(),
            route_arguments,
            kind: dsl.kind,
            is_starter: dsl.is_starter,
            project_id: self.config.project_id.clone(),
            checksum: String::new(),
            variables,
            blocks,
            actions,
        }))
    }
}

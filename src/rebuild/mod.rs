use crate::config::TransformConfig;
use crate::dsl::{
    ActionDsl, BlockDsl, DataDsl, FrameDsl, PropertyDsl, SlotDsl, TriggerDsl, TriggerPropertyDsl,
    VariableDsl,
};
use crate::error::FrameError;
use crate::model::{Action, ActionTrigger, Block, Frame};
use tracing::debug;

mod index;

use index::ChildIndex;

/// Rebuilds the nested authoring document from a flat [`Frame`].
///
/// Children are looked up by parent id and ordered by `position`, so the flat
/// lists do not have to arrive in traversal order.
#[derive(Debug, Clone, Default)]
pub struct Rebuilder {
    config: TransformConfig,
}

struct BlockTree<'a> {
    blocks: ChildIndex<'a, Block>,
    actions: ChildIndex<'a, Action>,
}

impl Rebuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    /// Rebuilds `frame` and re-attaches `schema_ref`, which the flat form does not carry.
    pub fn rebuild(&self, frame: &Frame, schema_ref: &str) -> Result<FrameDsl, FrameError> {
        let tree = BlockTree {
            blocks: ChildIndex::build(&frame.blocks, |b| b.parent_id.as_str())
                .sorted_by_key(|b| b.position),
            actions: ChildIndex::build(&frame.actions, |a| a.key.as_str()),
        };

        let blocks = tree
            .blocks
            .roots()
            .iter()
            .map(|root| self.build_block(root, &tree, true, 1))
            .collect::<Result<Vec<_>, _>>()?;

        let variables = frame
            .variables
            .iter()
            .map(|v| VariableDsl {
                key: v.key.clone(),
                value: v.value.clone(),
                kind: v.kind,
            })
            .collect();

        debug!(
            frame = %frame.name,
            roots = blocks.len(),
            "rebuilt frame"
        );

        Ok(FrameDsl {
            schema: schema_ref.to_string(),
            name: frame.name.clone(),
            route: frame.route.clone(),
            kind: frame.kind,
            is_starter: frame.is_starter,
            variables,
            blocks,
        })
    }

    fn build_block(
        &self,
        block: &Block,
        tree: &BlockTree<'_>,
        is_root: bool,
        depth: usize,
    ) -> Result<BlockDsl, FrameError> {
        self.check_depth(depth)?;

        let actions = tree
            .actions
            .get(&block.key)
            .iter()
            .map(|action| self.build_action(action))
            .collect::<Result<Vec<_>, _>>()?;

        let blocks = tree
            .blocks
            .get(&block.id)
            .iter()
            .map(|child| self.build_block(child, tree, false, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BlockDsl {
            key_type: block.key_type.clone(),
            key: block.key.clone(),
            visibility_key: block.visibility_key.clone(),
            // Roots occupy no parent slot.
            slot: if is_root {
                None
            } else {
                Some(block.slot.clone()).filter(|s| !s.is_empty())
            },
            integration_version: block.integration_version,
            properties: block
                .properties
                .iter()
                .map(|p| PropertyDsl {
                    key: p.key.clone(),
                    value: None,
                    value_mobile: p.value_mobile.clone(),
                    value_tablet: p.value_tablet.clone(),
                    value_desktop: p.value_desktop.clone(),
                    kind: p.kind.clone(),
                    description: p.description.clone(),
                    value_picker: p.value_picker.clone(),
                    value_picker_group: p.value_picker_group.clone(),
                    value_picker_options: p.value_picker_options.clone(),
                })
                .collect(),
            data: block
                .data
                .iter()
                .map(|d| DataDsl {
                    key: d.key.clone(),
                    value: d.value.clone(),
                    kind: d.kind.clone(),
                    description: d.description.clone(),
                })
                .collect(),
            slots: block
                .slots
                .iter()
                .map(|s| SlotDsl {
                    slot: s.slot.clone(),
                    description: s.description.clone(),
                })
                .collect(),
            actions,
            blocks,
        })
    }

    fn build_action(&self, action: &Action) -> Result<ActionDsl, FrameError> {
        let triggers = ChildIndex::build(&action.triggers, |t| t.parent_id.as_str());
        let roots = triggers
            .roots()
            .iter()
            .map(|t| self.build_trigger(t, &triggers, 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ActionDsl {
            key: action.key.clone(),
            event: action.event.clone(),
            triggers: roots,
        })
    }

    fn build_trigger(
        &self,
        trigger: &ActionTrigger,
        triggers: &ChildIndex<'_, ActionTrigger>,
        depth: usize,
    ) -> Result<TriggerDsl, FrameError> {
        self.check_depth(depth)?;

        let children = triggers
            .get(&trigger.id)
            .iter()
            .map(|child| self.build_trigger(child, triggers, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TriggerDsl {
            key_type: trigger.key_type.clone(),
            then: trigger.then,
            name: trigger.name.clone(),
            integration_version: trigger.integration_version,
            properties: trigger
                .properties
                .iter()
                .map(|p| TriggerPropertyDsl {
                    key: p.key.clone(),
                    value: p.value.clone(),
                    kind: p.kind.clone(),
                    description: p.description.clone(),
                    value_picker: p.value_picker.clone(),
                    value_picker_group: p.value_picker_group.clone(),
                    value_picker_options: p.value_picker_options.clone(),
                })
                .collect(),
            data: trigger
                .data
                .iter()
                .map(|d| DataDsl {
                    key: d.key.clone(),
                    value: d.value.clone(),
                    kind: d.kind.clone(),
                    description: d.description.clone(),
                })
                .collect(),
            triggers: children,
        })
    }

    /// Corrupt input (an id reused as its own ancestor) would otherwise recurse forever.
    fn check_depth(&self, depth: usize) -> Result<(), FrameError> {
        if depth > self.config.max_depth {
            Err(FrameError::DepthLimitExceeded {
                limit: self.config.max_depth,
            })
        } else {
            Ok(())
        }
    }
}

use super::validate::{check_slot, check_trigger_chain, resolve_variables};
use crate::config::TransformConfig;
use crate::dsl::{ActionDsl, BlockDsl, TriggerDsl};
use crate::error::{BindingOwner, FrameError};
use crate::ids::IdIssuer;
use crate::model::{
    Action, ActionTrigger, Block, BlockData, BlockProperty, BlockSlot, TriggerData,
    TriggerProperty, Variable,
};

/// Walks the nested tree pre-order and accumulates the flat collections.
pub(super) struct FlattenContext<'a> {
    frame_id: &'a str,
    variables: &'a [Variable],
    issuer: &'a dyn IdIssuer,
    config: &'a TransformConfig,
    pub(super) blocks: Vec<Block>,
    pub(super) actions: Vec<Action>,
}

impl<'a> FlattenContext<'a> {
    pub(super) fn new(
        frame_id: &'a str,
        variables: &'a [Variable],
        issuer: &'a dyn IdIssuer,
        config: &'a TransformConfig,
    ) -> Self {
        Self {
            frame_id,
            variables,
            issuer,
            config,
            blocks: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Flattens `blocks` (siblings under `parent_id`) and everything below them.
    ///
    /// Nesting depth is not checked here; `check_nesting_depth` runs first.
    pub(super) fn flatten_blocks(
        &mut self,
        blocks: &[BlockDsl],
        parent_id: &str,
        parent_slots: &[BlockSlot],
    ) -> Result<(), FrameError> {
        for (position, dsl) in blocks.iter().enumerate() {
            let id = self.issuer.new_id();
            let slot = dsl
                .slot
                .clone()
                .unwrap_or_else(|| self.config.default_slot.clone());
            check_slot(parent_slots, &slot, &dsl.key)?;

            // Actions live in the frame-level list, keyed by the owning block key.
            let actions = self.flatten_actions(&dsl.key, &dsl.actions)?;
            self.actions.extend(actions);

            let properties = dsl
                .properties
                .iter()
                .map(|p| {
                    let (mobile, tablet, desktop) = p.breakpoints();
                    BlockProperty {
                        id: self.issuer.new_id(),
                        block_id: id.clone(),
                        key: p.key.clone(),
                        value_mobile: mobile.to_string(),
                        value_tablet: tablet.to_string(),
                        value_desktop: desktop.to_string(),
                        kind: p.kind.clone(),
                        description: p.description.clone(),
                        value_picker: p.value_picker.clone(),
                        value_picker_group: p.value_picker_group.clone(),
                        value_picker_options: p.value_picker_options.clone(),
                        ..Default::default()
                    }
                })
                .collect();

            let data: Vec<BlockData> = dsl
                .data
                .iter()
                .map(|d| BlockData {
                    id: self.issuer.new_id(),
                    block_id: id.clone(),
                    key: d.key.clone(),
                    value: d.value.clone(),
                    kind: d.kind.clone(),
                    description: d.description.clone(),
                    ..Default::default()
                })
                .collect();

            let slots: Vec<BlockSlot> = dsl
                .slots
                .iter()
                .map(|s| BlockSlot {
                    id: self.issuer.new_id(),
                    block_id: id.clone(),
                    slot: s.slot.clone(),
                    description: s.description.clone(),
                    ..Default::default()
                })
                .collect();

            resolve_variables(self.variables, &data, BindingOwner::Block(dsl.key.clone()))?;

            let child_slots = slots.clone();
            self.blocks.push(Block {
                id: id.clone(),
                frame_id: self.frame_id.to_string(),
                key_type: dsl.key_type.clone(),
                key: dsl.key.clone(),
                visibility_key: dsl.visibility_key.clone(),
                position,
                slot,
                integration_version: dsl.integration_version,
                parent_id: parent_id.to_string(),
                data,
                properties,
                slots,
                ..Default::default()
            });

            if !dsl.blocks.is_empty() {
                self.flatten_blocks(&dsl.blocks, &id, &child_slots)?;
            }
        }
        Ok(())
    }

    fn flatten_actions(
        &self,
        block_key: &str,
        actions: &[ActionDsl],
    ) -> Result<Vec<Action>, FrameError> {
        let mut flat = Vec::with_capacity(actions.len());
        for action in actions {
            let action_id = self.issuer.new_id();
            let mut triggers = Vec::new();
            self.flatten_triggers(&action_id, &action.triggers, "", &mut triggers)?;

            flat.push(Action {
                id: action_id,
                frame_id: self.frame_id.to_string(),
                key: block_key.to_string(),
                event: action.event.clone(),
                triggers,
            });
        }
        Ok(flat)
    }

    /// Same shape as block flattening: pre-order, parent pointers, fail fast.
    fn flatten_triggers(
        &self,
        action_id: &str,
        triggers: &[TriggerDsl],
        parent_id: &str,
        out: &mut Vec<ActionTrigger>,
    ) -> Result<(), FrameError> {
        for dsl in triggers {
            let id = self.issuer.new_id();
            check_trigger_chain(dsl.then, dsl.triggers.len(), &dsl.name)?;

            let properties = dsl
                .properties
                .iter()
                .map(|p| TriggerProperty {
                    id: self.issuer.new_id(),
                    action_trigger_id: id.clone(),
                    key: p.key.clone(),
                    value: p.value.clone(),
                    kind: p.kind.clone(),
                    description: p.description.clone(),
                    value_picker: p.value_picker.clone(),
                    value_picker_group: p.value_picker_group.clone(),
                    value_picker_options: p.value_picker_options.clone(),
                    ..Default::default()
                })
                .collect();

            let data: Vec<TriggerData> = dsl
                .data
                .iter()
                .map(|d| TriggerData {
                    id: self.issuer.new_id(),
                    action_trigger_id: id.clone(),
                    key: d.key.clone(),
                    value: d.value.clone(),
                    kind: d.kind.clone(),
                    description: d.description.clone(),
                    ..Default::default()
                })
                .collect();

            resolve_variables(
                self.variables,
                &data,
                BindingOwner::Trigger(dsl.name.clone()),
            )?;

            out.push(ActionTrigger {
                id: id.clone(),
                action_id: action_id.to_string(),
                parent_id: parent_id.to_string(),
                key_type: dsl.key_type.clone(),
                then: dsl.then,
                name: dsl.name.clone(),
                integration_version: dsl.integration_version,
                properties,
                data,
                ..Default::default()
            });

            if !dsl.triggers.is_empty() {
                self.flatten_triggers(action_id, &dsl.triggers, &id, out)?;
            }
        }
        Ok(())
    }
}

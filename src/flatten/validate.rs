use crate::dsl::{BlockDsl, DataDsl, TriggerDsl};
use crate::error::{BindingOwner, FrameError};
use crate::model::{Block, BlockData, BlockSlot, ThenMode, TriggerData, Variable};
use ahash::AHashMap;
use itertools::Itertools;

/// A key/value data binding whose value must name a frame variable.
pub trait Binding {
    fn key(&self) -> &str;
    fn value(&self) -> &str;
}

macro_rules! impl_binding {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Binding for $ty {
                fn key(&self) -> &str { &self.key }
                fn value(&self) -> &str { &self.value }
            }
        )*
    };
}

impl_binding!(DataDsl, BlockData, TriggerData);

/// Checks that every binding's value is the key of some variable.
///
/// The whole variable table is scanned for each binding; the first binding
/// with no match fails.
pub fn resolve_variables<B: Binding>(
    variables: &[Variable],
    bindings: &[B],
    owner: BindingOwner,
) -> Result<(), FrameError> {
    for binding in bindings {
        if !variables.iter().any(|v| v.key == binding.value()) {
            return Err(FrameError::UnresolvedVariableReference {
                owner,
                data_key: binding.key().to_string(),
                value: binding.value().to_string(),
            });
        }
    }
    Ok(())
}

/// Checks slot containment. An empty `parent_slots` means there is nothing to check against.
pub fn check_slot(
    parent_slots: &[BlockSlot],
    slot: &str,
    block_key: &str,
) -> Result<(), FrameError> {
    if parent_slots.is_empty() || parent_slots.iter().any(|s| s.slot == slot) {
        Ok(())
    } else {
        Err(FrameError::InvalidSlot {
            block_key: block_key.to_string(),
            slot: slot.to_string(),
        })
    }
}

/// An `END` trigger terminates its chain and may not carry children.
pub fn check_trigger_chain(
    then: ThenMode,
    child_count: usize,
    name: &str,
) -> Result<(), FrameError> {
    if then == ThenMode::End && child_count > 0 {
        Err(FrameError::InvalidTriggerChain {
            name: name.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Returns every block key used more than once, each listed once, in first-occurrence order.
pub fn find_duplicate_keys(blocks: &[Block]) -> Vec<String> {
    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    for block in blocks {
        *counts.entry(block.key.as_str()).or_default() += 1;
    }

    blocks
        .iter()
        .map(|b| b.key.as_str())
        .filter(|key| counts.get(key).is_some_and(|&c| c > 1))
        .unique()
        .map(str::to_string)
        .collect()
}

/// Rejects block or trigger trees nested deeper than `max_depth`.
///
/// Walks with explicit stacks, so it must run before anything recursive
/// (serialization, schema validation, the flatten walk) touches the tree.
pub fn check_nesting_depth(blocks: &[BlockDsl], max_depth: usize) -> Result<(), FrameError> {
    let exceeded = || FrameError::DepthLimitExceeded { limit: max_depth };
    let mut pending: Vec<(&BlockDsl, usize)> = blocks.iter().map(|b| (b, 1)).collect();
    let mut triggers: Vec<(&TriggerDsl, usize)> = Vec::new();

    while let Some((block, depth)) = pending.pop() {
        if depth > max_depth {
            return Err(exceeded());
        }

        // Trigger chains restart at depth 1 under every action.
        for action in &block.actions {
            triggers.extend(action.triggers.iter().map(|t| (t, 1)));
        }
        while let Some((trigger, trigger_depth)) = triggers.pop() {
            if trigger_depth > max_depth {
                return Err(exceeded());
            }
            triggers.extend(trigger.triggers.iter().map(|t| (t, trigger_depth + 1)));
        }

        pending.extend(block.blocks.iter().map(|b| (b, depth + 1)));
    }
    Ok(())
}

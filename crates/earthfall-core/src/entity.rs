//! Per-imposter records and the kill registry.
//!
//! Entities are plain data structs with no game logic — the session
//! engine and its systems mutate them. A session holds a fixed-size array
//! of imposters: entities are never added or removed, only marked killed.

use serde::{Deserialize, Serialize};

use crate::constants::{IMPOSTER_COLOR, IMPOSTER_MTL_ASSET, IMPOSTER_OBJ_ASSET, IMPOSTER_SCALE};
use crate::types::{ImposterId, Position};

/// Presentation attributes the core passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualAttributes {
    /// Mesh asset name.
    pub obj_asset: String,
    /// Material asset name.
    pub mtl_asset: String,
    /// Uniform mesh scale.
    pub scale: f64,
    /// Tint color.
    pub color: String,
    /// Euler rotation (x, y, z).
    pub rotation: [f64; 3],
}

impl Default for VisualAttributes {
    fn default() -> Self {
        Self {
            obj_asset: IMPOSTER_OBJ_ASSET.to_string(),
            mtl_asset: IMPOSTER_MTL_ASSET.to_string(),
            scale: IMPOSTER_SCALE,
            color: IMPOSTER_COLOR.to_string(),
            rotation: [0.0; 3],
        }
    }
}

/// One of the N moving objects the player must tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imposter {
    /// Stable 0-based index, immutable for the entity's lifetime.
    pub id: ImposterId,
    /// Offset from the player origin. y is fixed at spawn.
    pub position: Position,
    /// Opaque presentation attributes.
    pub visual: VisualAttributes,
}

/// Which imposters have been tagged, independent of position.
///
/// Flags are strictly monotonic within a session: once set, a flag is
/// never cleared. A restart discards the whole registry along with the
/// rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KillRegistry {
    killed: Vec<bool>,
}

impl KillRegistry {
    /// A registry for `count` imposters, all alive.
    pub fn new(count: usize) -> Self {
        Self {
            killed: vec![false; count],
        }
    }

    /// Mark an imposter killed. Returns `true` if the flag was newly set,
    /// `false` if it was already killed or the id is out of range.
    pub fn mark_killed(&mut self, id: ImposterId) -> bool {
        match self.killed.get_mut(id) {
            Some(flag) => !std::mem::replace(flag, true),
            None => false,
        }
    }

    pub fn is_killed(&self, id: ImposterId) -> bool {
        self.killed.get(id).copied().unwrap_or(false)
    }

    /// Number of imposters tagged so far.
    pub fn killed_count(&self) -> usize {
        self.killed.iter().filter(|k| **k).count()
    }

    /// Total number of imposters tracked by the registry.
    pub fn len(&self) -> usize {
        self.killed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.killed.is_empty()
    }

    /// Whether every imposter has been tagged.
    pub fn all_killed(&self) -> bool {
        self.killed.iter().all(|k| *k)
    }
}

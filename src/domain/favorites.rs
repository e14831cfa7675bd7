use serde::{Deserialize, Serialize};

use crate::domain::catalog::VehicleId;

/// Session-only set of liked vehicles, in the order they were liked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet {
    ids: Vec<VehicleId>,
}

impl FavoriteSet {
    /// Returns `true` when the vehicle is a favorite after the call.
    pub fn toggle(&mut self, id: VehicleId) -> bool {
        match self.ids.iter().position(|existing| *existing == id) {
            Some(pos) => {
                self.ids.remove(pos);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

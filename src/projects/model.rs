use serde::{Deserialize, Serialize};

use super::udim::{self, UdimTile};
use crate::error::{AgrError, Result};

/// Conventional name of the site/landscaping model.
pub const GROUND: &str = "Ground";

pub fn is_ground(name: &str) -> bool {
    name.eq_ignore_ascii_case(GROUND)
}

/// A model of a project: a name plus its UDIM grid.
///
/// `udim_rows[0]` is the newest (top) row. Row numbering follows creation
/// order, so with three rows the grid reads 1021-1030, 1011-1020, 1001-1010.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModelData {
    pub name: String,
    #[serde(default)]
    pub udim_rows: Vec<Vec<UdimTile>>,
}

impl ModelData {
    pub fn new(name: impl Into<String>) -> Self {
        let mut model = Self {
            name: name.into(),
            udim_rows: Vec::new(),
        };
        model.add_row();
        model
    }

    pub fn is_ground(&self) -> bool {
        is_ground(&self.name)
    }

    /// Inserts the next row of ten tiles on top of the grid.
    pub fn add_row(&mut self) {
        let row = udim::build_row(self.udim_rows.len());
        self.udim_rows.insert(0, row);
    }

    /// Removes the top row. The grid always keeps at least one row.
    pub fn remove_top_row(&mut self) -> Result<()> {
        if self.udim_rows.len() <= 1 {
            return Err(AgrError::LastRow);
        }
        self.udim_rows.remove(0);
        Ok(())
    }

    /// Deep copy under a new name.
    pub fn clone_as(&self, new_name: impl Into<String>) -> Self {
        Self {
            name: new_name.into(),
            udim_rows: self.udim_rows.clone(),
        }
    }

    pub fn tiles(&self) -> impl Iterator<Item = &UdimTile> {
        self.udim_rows.iter().flatten()
    }

    pub fn tile(&self, udim_number: u32) -> Option<&UdimTile> {
        self.tiles().find(|t| t.udim_number == udim_number)
    }

    pub fn tile_mut(&mut self, udim_number: u32) -> Result<&mut UdimTile> {
        self.udim_rows
            .iter_mut()
            .flatten()
            .find(|t| t.udim_number == udim_number)
            .ok_or(AgrError::TileNotFound(udim_number))
    }

    /// Restores the one-row minimum after loading a hand-edited file.
    pub(crate) fn normalize(&mut self) {
        if self.udim_rows.is_empty() {
            self.add_row();
        }
    }
}

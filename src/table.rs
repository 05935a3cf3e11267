//! The table session: live record list plus its undo history.
//!
//! Every mutating operation first changes the live list and then commits the
//! result to the history, so the top of the undo stack always mirrors the
//! current table. Undo moves that top entry to the redo stack and restores the
//! snapshot below it, which stays on the undo stack as the new top. Snapshots
//! equal to the live list, such as autosave duplicates, are stepped over.

use crate::config::TableConfig;
use crate::error::Result;
use crate::export;
use crate::history::History;
use crate::selection;
use crate::state::{Chemical, Column, PackSize, SortDirection};
use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Value written and committed
    Updated,
    /// New value equals the old one; nothing committed
    Unchanged,
    /// Input could not be applied; the record is untouched
    Rejected,
}

/// Cell opened by `begin_edit` and awaiting `commit_edit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingEdit {
    pub position: usize,
    pub column: Column,
}

#[derive(Clone, Debug)]
pub struct InventoryTable {
    records: Vec<Chemical>,
    seed: Vec<Chemical>,
    history: History<Vec<Chemical>>,
    pending_edit: Option<PendingEdit>,
    config: TableConfig,
}

impl InventoryTable {
    /// Start a session on `seed`. The initial list is committed right away so
    /// the first edit can be undone.
    ///
    /// The live list occupies one history slot, so the history holds
    /// `history_limit + 1` snapshots to allow `history_limit` undo steps.
    pub fn new(seed: Vec<Chemical>, config: TableConfig) -> Self {
        let config = config.normalized();
        let mut table = Self {
            records: seed.clone(),
            seed,
            history: History::new(config.history_limit.saturating_add(1)),
            pending_edit: None,
            config,
        };
        table.commit("load");
        table
    }

    pub fn records(&self) -> &[Chemical] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn history(&self) -> &History<Vec<Chemical>> {
        &self.history
    }

    pub fn pending_edit(&self) -> Option<PendingEdit> {
        self.pending_edit
    }

    /// Whether some snapshot other than the live list is left to restore.
    pub fn can_undo(&self) -> bool {
        self.history
            .undo_entries()
            .iter()
            .any(|snapshot| *snapshot != self.records)
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn commit(&mut self, operation: &'static str) {
        self.history.push(&self.records);
        tracing::debug!(
            operation,
            rows = self.records.len(),
            undo_depth = self.history.undo_len(),
            "Committed table snapshot"
        );
    }

    /// Swap each selected record with its predecessor.
    ///
    /// Records already at the top stay. Beyond that boundary rule, a selected
    /// record directly below a record that stayed also stays, so a selected
    /// block at the top keeps its order instead of rotating (`{0, 1}` in
    /// `[a, b, c]` is a no-op). Returns the new positions of the selected
    /// records.
    pub fn move_up<I>(&mut self, selection: I) -> BTreeSet<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        self.pending_edit = None;
        let positions = selection::normalize(selection, self.records.len());
        let mut moved = BTreeSet::new();
        let mut pinned = 0;
        let mut changed = false;

        for position in positions {
            if position == pinned {
                pinned += 1;
                moved.insert(position);
                continue;
            }
            self.records.swap(position - 1, position);
            moved.insert(position - 1);
            changed = true;
        }

        if changed {
            self.commit("move_up");
        }
        moved
    }

    /// Swap each selected record with its successor, bottom-most first.
    ///
    /// Mirror image of [`move_up`](Self::move_up).
    pub fn move_down<I>(&mut self, selection: I) -> BTreeSet<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        self.pending_edit = None;
        let positions = selection::normalize(selection, self.records.len());
        let mut moved = BTreeSet::new();
        let mut floor = self.records.len();
        let mut changed = false;

        for position in positions.into_iter().rev() {
            if position + 1 == floor {
                floor -= 1;
                moved.insert(position);
                continue;
            }
            self.records.swap(position, position + 1);
            moved.insert(position + 1);
            changed = true;
        }

        if changed {
            self.commit("move_down");
        }
        moved
    }

    /// Remove every selected record. Returns how many were removed.
    pub fn delete<I>(&mut self, selection: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        self.pending_edit = None;
        let positions = selection::normalize(selection, self.records.len());

        // Highest first so lower positions keep their meaning
        for &position in positions.iter().rev() {
            self.records.remove(position);
        }

        if !positions.is_empty() {
            self.commit("delete");
        }
        positions.len()
    }

    /// Stable sort of the whole list on one column.
    pub fn sort(&mut self, column: Column, direction: SortDirection) {
        self.pending_edit = None;
        match direction {
            SortDirection::Ascending => self.records.sort_by(|a, b| a.compare(b, column)),
            SortDirection::Descending => self.records.sort_by(|a, b| b.compare(a, column)),
        }
        self.commit("sort");
    }

    /// Sort with a textual direction, `"asc"` or `"desc"`.
    ///
    /// Any other direction is an error and leaves the table untouched.
    pub fn sort_by_name(&mut self, column: Column, direction: &str) -> Result<()> {
        let direction = direction.parse::<SortDirection>()?;
        self.sort(column, direction);
        Ok(())
    }

    /// Append a default record and commit it. Returns its position.
    pub fn add_row(&mut self) -> usize {
        self.pending_edit = None;
        self.records.push(Chemical::default());
        self.commit("add_row");
        self.records.len() - 1
    }

    /// Open a cell for editing and return its current text.
    pub fn begin_edit(&mut self, position: usize, column: Column) -> Option<String> {
        let text = self.records.get(position)?.cell_text(column);
        self.pending_edit = Some(PendingEdit { position, column });
        Some(text)
    }

    /// Apply `raw` to the cell opened by `begin_edit`.
    ///
    /// Returns `None` when no edit is pending.
    pub fn commit_edit(&mut self, raw: &str) -> Option<EditOutcome> {
        let edit = self.pending_edit.take()?;
        Some(self.edit_field(edit.position, edit.column, raw))
    }

    pub fn cancel_edit(&mut self) {
        self.pending_edit = None;
    }

    /// Parse `raw` for `column` and write it into the record at `position`.
    pub fn edit_field(&mut self, position: usize, column: Column, raw: &str) -> EditOutcome {
        let rows = self.records.len();
        let Some(record) = self.records.get_mut(position) else {
            tracing::warn!(position, rows, "Edit outside the table ignored");
            return EditOutcome::Rejected;
        };

        let changed = match column {
            Column::Name => Some(replace(&mut record.name, raw.to_string())),
            Column::Vendor => Some(replace(&mut record.vendor, raw.to_string())),
            Column::Density => write_number(&mut record.density, raw),
            Column::Viscosity => write_number(&mut record.viscosity, raw),
            Column::Packaging => Some(replace(&mut record.packaging, raw.to_string())),
            Column::PackSize => Some(replace(&mut record.pack_size, PackSize::parse(raw))),
            Column::Unit => Some(replace(&mut record.unit, raw.to_string())),
            Column::Quantity => write_number(&mut record.quantity, raw),
        };

        match changed {
            Some(true) => {
                self.commit("edit");
                EditOutcome::Updated
            }
            Some(false) => EditOutcome::Unchanged,
            None => {
                tracing::warn!(position, ?column, raw, "Ignoring non-numeric input");
                EditOutcome::Rejected
            }
        }
    }

    /// Restore the previous distinct snapshot. Returns `false` when there is
    /// nothing to undo, in which case the history is left as it was.
    ///
    /// Snapshots equal to the live list move to the redo stack. The restored
    /// snapshot stays on top of the undo stack, mirroring the new live list.
    pub fn undo(&mut self) -> bool {
        self.pending_edit = None;
        let mut skipped = 0;
        while self.history.last() == Some(&self.records) {
            self.history.undo();
            skipped += 1;
        }

        match self.history.last() {
            Some(previous) => {
                self.records = previous.clone();
                tracing::debug!(
                    rows = self.records.len(),
                    undo_depth = self.history.undo_len(),
                    "Undo"
                );
                true
            }
            None => {
                for _ in 0..skipped {
                    self.history.redo();
                }
                false
            }
        }
    }

    /// Re-apply the next distinct undone snapshot. Returns `false` when there
    /// is nothing to redo, in which case the history is left as it was.
    ///
    /// Every snapshot taken off the redo stack lands on the undo stack, so the
    /// top of the undo stack again mirrors the live list.
    pub fn redo(&mut self) -> bool {
        self.pending_edit = None;
        let mut skipped = 0;
        while let Some(snapshot) = self.history.redo() {
            if snapshot != self.records {
                self.records = snapshot;
                tracing::debug!(
                    rows = self.records.len(),
                    undo_depth = self.history.undo_len(),
                    "Redo"
                );
                return true;
            }
            skipped += 1;
        }
        for _ in 0..skipped {
            self.history.undo();
        }
        false
    }

    /// Replace the table with a fresh copy of the seed data and drop all history.
    pub fn reset(&mut self) {
        self.pending_edit = None;
        self.records = self.seed.clone();
        self.history.clear();
        self.commit("reset");
        tracing::info!(rows = self.records.len(), "Table reset to seed data");
    }

    /// Periodic snapshot of the live list, whether or not it changed.
    pub fn autosave(&mut self) {
        self.commit("autosave");
    }

    pub fn to_csv(&self) -> String {
        export::to_csv(&self.records)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

// None when the input is not a finite number.
fn write_number(slot: &mut f64, raw: &str) -> Option<bool> {
    let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(replace(slot, value))
}

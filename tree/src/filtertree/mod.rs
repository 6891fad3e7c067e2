//! The ordered top-level items of a processing tree.


use serde_json::Value;

use crate::{FilterItem, TreeError};

/// Top-level [FilterItem]s in processing order.
#[derive(Debug, Default)]
pub struct FilterTree {
    items: Vec<FilterItem>,
    readonly: bool,
}

impl FilterTree {
    /// Builds a tree from a list of raw item options.
    pub fn from_value(raw: &Value) -> Result<Self, TreeError> {
        let Value::Array(raw_items) = raw else {
            return Err(TreeError::NotAList { what: "items" });
        };
        let items = raw_items
            .iter()
            .map(FilterItem::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        let tree = Self {
            items,
            readonly: false,
        };
        log::debug!("Created filter tree with {} items.", tree.len());
        Ok(tree)
    }

    /// The top-level items.
    pub fn top_level(&self) -> &[FilterItem] {
        &self.items
    }

    /// Iterates over all items, parents before children.
    pub fn items(&self) -> impl Iterator<Item = &FilterItem> {
        self.items.iter().flat_map(FilterItem::walk)
    }

    /// Number of items at any depth.
    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the first item with the given name, in pre-order.
    pub fn find(&self, name: &str) -> Option<&FilterItem> {
        self.items().find(|item| item.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut FilterItem> {
        self.items.iter_mut().find_map(|item| item.find_mut(name))
    }

    /// Iterates over the items that take part in processing: those which are active and whose
    /// ancestors are all active.
    pub fn active_items(&self) -> impl Iterator<Item = &FilterItem> {
        let mut stack: Vec<&FilterItem> = self.items.iter().rev().collect();
        std::iter::from_fn(move || {
            loop {
                let item = stack.pop()?;
                if item.is_active() {
                    stack.extend(item.children().iter().rev());
                    return Some(item);
                }
            }
        })
    }

    pub fn push(&mut self, mut item: FilterItem) {
        if self.readonly {
            item.set_readonly(true);
        }
        self.items.push(item);
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Sets read-only mode on every item and every item's models.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
        for item in self.items.iter_mut() {
            item.set_readonly(readonly);
        }
    }

    /// Clears the processing status of every item.
    pub fn reset_status(&mut self) {
        let mut stack: Vec<&mut FilterItem> = self.items.iter_mut().collect();
        while let Some(item) = stack.pop() {
            item.reset_status();
            stack.extend(item.children_mut().iter_mut());
        }
    }

    /// Returns the list of serialised top-level items, as accepted by [FilterTree::from_value].
    pub fn serialize(&self) -> Value {
        Value::Array(self.items.iter().map(FilterItem::serialize).collect())
    }
}

impl std::fmt::Display for FilterTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<FilterTree>{}", self.serialize())
    }
}

//! An ordered list of [Save]s with change notification.


use serde_derive::Serialize;
use serde_json::Value;
use utils::Signal;

use crate::{Save, SaveError, SaveType};

/// Identifies a [Save] within the [SaveModel] that it was added to. Ids are never reused by a
/// model.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SaveId(u64);

impl SaveId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SaveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where an active save writes to, as returned by [SaveModel::get_paths].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SavePath {
    #[serde(rename = "type")]
    pub save_type: SaveType,
    pub path: String,
}

/// Observers of a [SaveModel]. Each mutation emits its specific signal, followed by
/// `model_change`.
#[derive(Debug, Default)]
pub struct SaveSignals {
    pub save_changed: Signal<Save>,
    pub save_added: Signal<Save>,
    pub save_removed: Signal<()>,
    pub model_change: Signal<()>,
}

/// Save destinations in insertion order.
#[derive(Debug, Default)]
pub struct SaveModel {
    saves: Vec<(SaveId, Save)>,
    next_id: u64,
    readonly: bool,
    signals: SaveSignals,
}

impl SaveModel {
    /// Builds a model from a list of raw save options.
    pub fn create(raw: &Value) -> Result<Self, SaveError> {
        let Value::Array(items) = raw else {
            return Err(SaveError::NotAList);
        };

        let mut model = Self::default();
        for item in items {
            let save = Save::new(item)?;
            model.push(save);
        }
        log::debug!("Created save model with {} saves.", model.len());
        Ok(model)
    }

    pub fn len(&self) -> usize {
        self.saves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saves.is_empty()
    }

    pub fn get(&self, id: SaveId) -> Option<&Save> {
        self.position(id).map(|index| &self.saves[index].1)
    }

    /// Iterates over the saves in order, along with their ids.
    pub fn saves(&self) -> impl Iterator<Item = (SaveId, &Save)> {
        self.saves.iter().map(|(id, save)| (*id, save))
    }

    /// Returns the type and path of each save. With `only_active`, inactive saves are left out.
    pub fn get_paths(&self, only_active: bool) -> Vec<SavePath> {
        self.saves
            .iter()
            .map(|(_, save)| save)
            .filter(|save| !only_active || save.is_active())
            .map(|save| SavePath {
                save_type: save.save_type(),
                path: save.path().to_string(),
            })
            .collect()
    }

    /// Returns the list of serialised saves, as accepted by [SaveModel::create].
    pub fn serialize(&self) -> Value {
        Value::Array(self.saves.iter().map(|(_, save)| save.serialize()).collect())
    }

    pub fn signals_mut(&mut self) -> &mut SaveSignals {
        &mut self.signals
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Sets read-only mode on the model and every save in it.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
        for (_, save) in self.saves.iter_mut() {
            save.set_readonly(readonly);
        }
    }

    /// Appends a save, returning the id it can later be addressed by.
    pub fn add_save(&mut self, save: Save) -> Result<SaveId, SaveError> {
        self.check_writable()?;
        let id = self.push(save);
        log::trace!("Added save {id}.");
        if let Some((_, save)) = self.saves.last() {
            self.signals.save_added.emit(save);
        }
        self.signals.model_change.emit(&());
        Ok(id)
    }

    /// Validates raw save options and appends the resulting save.
    pub fn add_save_value(&mut self, raw: &Value) -> Result<SaveId, SaveError> {
        self.check_writable()?;
        self.add_save(Save::new(raw)?)
    }

    /// Removes and returns a save.
    pub fn remove_save(&mut self, id: SaveId) -> Result<Save, SaveError> {
        self.check_writable()?;
        let index = self
            .position(id)
            .ok_or_else(|| rejected(SaveError::SaveNotFound { id: id.get() }))?;
        let (_, save) = self.saves.remove(index);
        log::trace!("Removed save {id}.");
        self.signals.save_removed.emit(&());
        self.signals.model_change.emit(&());
        Ok(save)
    }

    pub fn set_path(&mut self, id: SaveId, path: &str) -> Result<(), SaveError> {
        self.update(id, |save| {
            if save.path() == path {
                return false;
            }
            save.set_path(path);
            true
        })
    }

    pub fn set_active(&mut self, id: SaveId, is_active: bool) -> Result<(), SaveError> {
        self.update(id, |save| {
            if save.is_active() == is_active {
                return false;
            }
            save.set_is_active(is_active);
            true
        })
    }

    pub fn set_type(&mut self, id: SaveId, save_type: SaveType) -> Result<(), SaveError> {
        self.update(id, |save| {
            if save.save_type() == save_type {
                return false;
            }
            save.set_save_type(save_type);
            true
        })
    }

    fn push(&mut self, mut save: Save) -> SaveId {
        let id = SaveId(self.next_id);
        self.next_id += 1;
        save.set_readonly(self.readonly);
        self.saves.push((id, save));
        id
    }

    fn position(&self, id: SaveId) -> Option<usize> {
        self.saves.iter().position(|(save_id, _)| *save_id == id)
    }

    fn check_writable(&self) -> Result<(), SaveError> {
        if self.readonly {
            return Err(rejected(SaveError::ReadOnly));
        }
        Ok(())
    }

    /// Applies `change` to a save, notifying observers if it reports a change.
    fn update<F>(&mut self, id: SaveId, change: F) -> Result<(), SaveError>
    where
        F: FnOnce(&mut Save) -> bool,
    {
        self.check_writable()?;
        let index = self
            .position(id)
            .ok_or_else(|| rejected(SaveError::SaveNotFound { id: id.get() }))?;
        let save = &mut self.saves[index].1;
        if !change(save) {
            return Ok(());
        }

        log::trace!("Changed save {id}: {save}");
        self.signals.save_changed.emit(save);
        self.signals.model_change.emit(&());
        Ok(())
    }
}

impl std::fmt::Display for SaveModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<SaveModel>{}", self.serialize())
    }
}

fn rejected(error: SaveError) -> SaveError {
    log::debug!("Rejected save mutation: {error}");
    error
}

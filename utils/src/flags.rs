/// What a presentation layer may do with one displayed field of a model entry.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ItemFlags {
    pub enabled: bool,
    pub selectable: bool,
    pub checkable: bool,
    pub editable: bool,
}

impl ItemFlags {
    /// Flags for a label that carries an activation checkbox when `checkable` is set.
    pub fn label(checkable: bool, readonly: bool) -> Self {
        Self {
            enabled: !readonly,
            selectable: true,
            checkable,
            editable: false,
        }
    }

    /// Flags for an editable value field.
    pub fn editor(readonly: bool) -> Self {
        Self {
            enabled: !readonly,
            selectable: true,
            checkable: false,
            editable: true,
        }
    }

    /// True if the user may toggle the checkbox.
    pub fn can_toggle(&self) -> bool {
        self.enabled && self.checkable
    }

    /// True if the user may edit the value.
    pub fn can_edit(&self) -> bool {
        self.enabled && self.editable
    }
}

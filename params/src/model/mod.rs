//! Ownership of a whole tree of [Parameter]s.

#[cfg(test)]
mod tests;

use indexmap::IndexMap;
use serde_json::{Map, Value, json};
use utils::Signal;

use crate::{ParamError, ParamType, Parameter, Properties};

/// Name of the synthetic group that holds the top-level parameters.
pub const ROOT_NAME: &str = "root";

/// Observers of a [ParameterModel]. Each mutation emits its specific signal, followed by
/// `model_change`.
#[derive(Debug, Default)]
pub struct ParameterSignals {
    /// A parameter's value changed.
    pub parameter_changed: Signal<Parameter>,
    /// A parameter's active state changed.
    pub parameter_toggled: Signal<Parameter>,
    /// Anything in the model changed.
    pub model_change: Signal<()>,
}

/// A tree of uniquely named parameters under a synthetic root group.
#[derive(Debug)]
pub struct ParameterModel {
    root: Parameter,
    readonly: bool,
    signals: ParameterSignals,
}

impl ParameterModel {
    /// Builds a model from a mapping of top-level parameter name to raw parameter options.
    ///
    /// Names must be unique throughout the whole tree, including the root's own name.
    pub fn create(params: &Value) -> Result<Self, ParamError> {
        let root = Parameter::new(ROOT_NAME, &json!({"type": "group", "children": params}))?;
        verify_unique_names(&root)?;

        log::debug!(
            "Created parameter model with {} parameters.",
            root.walk().count() - 1
        );

        Ok(Self {
            root,
            readonly: false,
            signals: ParameterSignals::default(),
        })
    }

    /// The synthetic root group.
    pub fn root(&self) -> &Parameter {
        &self.root
    }

    /// Iterates over all parameters, parents before children, excluding the root.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.root.walk().skip(1)
    }

    pub fn len(&self) -> usize {
        self.parameters().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters().find(|param| param.name() == name)
    }

    /// Returns the effective value of every non-group parameter, keyed by name, in tree order.
    ///
    /// With `only_active`, inactive parameters are left out.
    pub fn get_values(&self, only_active: bool) -> Result<IndexMap<String, Value>, ParamError> {
        self.parameters()
            .filter(|param| param.param_type().has_value())
            .filter(|param| !only_active || param.is_active())
            .map(|param| Ok((param.name().to_string(), param.value()?.clone())))
            .collect()
    }

    /// Names of all `bool` parameters, which a presentation layer may keep editors open for.
    pub fn bool_parameters(&self) -> Vec<&str> {
        self.parameters()
            .filter(|param| param.param_type() == ParamType::Bool)
            .map(Parameter::name)
            .collect()
    }

    /// Returns the mapping of top-level parameter name to serialised parameter, as accepted by
    /// [ParameterModel::create].
    pub fn serialize(&self) -> Value {
        Value::Object(
            self.root
                .children()
                .iter()
                .map(|child| (child.name().to_string(), child.serialize()))
                .collect::<Map<_, _>>(),
        )
    }

    pub fn signals_mut(&mut self) -> &mut ParameterSignals {
        &mut self.signals
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Sets read-only mode on the model and every parameter in it. In read-only mode all
    /// mutations are rejected, stored data is left as it is.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
        self.root.set_readonly_recursive(readonly);
    }

    /// Sets the stored value of a non-group parameter.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<(), ParamError> {
        let param = editable(&mut self.root, self.readonly, name)?;
        if !param.param_type().has_value() {
            return Err(rejected(ParamError::GroupHasNoValue {
                name: name.to_string(),
            }));
        }
        if param.stored_value() == &value {
            return Ok(());
        }

        log::trace!("Setting value of parameter {name:?} to {value}.");
        param.set_value(value);
        self.signals.parameter_changed.emit(param);
        self.signals.model_change.emit(&());
        Ok(())
    }

    /// Resets a non-group parameter's value to its default.
    pub fn reset_value(&mut self, name: &str) -> Result<(), ParamError> {
        let default = self
            .get(name)
            .ok_or_else(|| ParamError::UnknownParameter {
                name: name.to_string(),
            })?
            .default()
            .clone();
        self.set_value(name, default)
    }

    /// Activates or deactivates an optional parameter.
    pub fn set_active(&mut self, name: &str, is_active: bool) -> Result<(), ParamError> {
        let param = editable(&mut self.root, self.readonly, name)?;
        if !param.optional() {
            return Err(rejected(ParamError::NotOptional {
                name: name.to_string(),
            }));
        }
        if param.is_active() == is_active {
            return Ok(());
        }

        log::trace!("Setting parameter {name:?} active: {is_active}.");
        param.set_is_active(is_active);
        self.signals.parameter_toggled.emit(param);
        self.signals.model_change.emit(&());
        Ok(())
    }

    pub fn set_full_name(&mut self, name: &str, full_name: &str) -> Result<(), ParamError> {
        self.update(name, |param| {
            if param.full_name() == full_name {
                return Ok(false);
            }
            param.set_full_name(full_name);
            Ok(true)
        })
    }

    pub fn set_description(&mut self, name: &str, description: &str) -> Result<(), ParamError> {
        self.update(name, |param| {
            if param.description() == description {
                return Ok(false);
            }
            param.set_description(description);
            Ok(true)
        })
    }

    /// Sets the default of a non-group parameter. The stored value is left as it is.
    pub fn set_default(&mut self, name: &str, default: Value) -> Result<(), ParamError> {
        self.update(name, |param| {
            if !param.param_type().has_value() {
                return Err(ParamError::GroupHasNoValue {
                    name: param.name().to_string(),
                });
            }
            if param.default() == &default {
                return Ok(false);
            }
            param.set_default(default);
            Ok(true)
        })
    }

    /// Changes a parameter's type, resetting its properties to that type's defaults.
    pub fn set_type(&mut self, name: &str, param_type: ParamType) -> Result<(), ParamError> {
        self.update(name, |param| {
            if param.param_type() == param_type {
                return Ok(false);
            }
            param.set_type(param_type);
            Ok(true)
        })
    }

    pub fn set_properties(&mut self, name: &str, properties: Properties) -> Result<(), ParamError> {
        self.update(name, |param| {
            if param.properties() == &properties {
                return Ok(false);
            }
            param.set_properties(properties);
            Ok(true)
        })
    }

    /// Sets whether a parameter may be deactivated. Making an inactive parameter mandatory
    /// activates it, which is also reported through `parameter_toggled`.
    pub fn set_optional(&mut self, name: &str, optional: bool) -> Result<(), ParamError> {
        let param = editable(&mut self.root, self.readonly, name)?;
        if param.optional() == optional {
            return Ok(());
        }

        log::trace!("Setting parameter {name:?} optional: {optional}.");
        let was_active = param.is_active();
        param.set_optional(optional);
        self.signals.parameter_changed.emit(param);
        if param.is_active() != was_active {
            self.signals.parameter_toggled.emit(param);
        }
        self.signals.model_change.emit(&());
        Ok(())
    }

    /// Applies `change` to a parameter, notifying observers if it reports a change.
    fn update<F>(&mut self, name: &str, change: F) -> Result<(), ParamError>
    where
        F: FnOnce(&mut Parameter) -> Result<bool, ParamError>,
    {
        let param = editable(&mut self.root, self.readonly, name)?;
        if !change(&mut *param).map_err(rejected)? {
            return Ok(());
        }

        log::trace!("Changed parameter {name:?}: {param}");
        self.signals.parameter_changed.emit(param);
        self.signals.model_change.emit(&());
        Ok(())
    }
}

impl Default for ParameterModel {
    fn default() -> Self {
        Self {
            root: Parameter::empty_group(ROOT_NAME),
            readonly: false,
            signals: ParameterSignals::default(),
        }
    }
}

impl std::fmt::Display for ParameterModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<ParameterModel>{}", self.serialize())
    }
}

/// Looks up a parameter that may currently be mutated.
fn editable<'a>(
    root: &'a mut Parameter,
    readonly: bool,
    name: &str,
) -> Result<&'a mut Parameter, ParamError> {
    let param = root.find_descendant_mut(name).ok_or_else(|| {
        rejected(ParamError::UnknownParameter {
            name: name.to_string(),
        })
    })?;
    if readonly || param.is_readonly() {
        return Err(rejected(ParamError::ReadOnly {
            name: name.to_string(),
        }));
    }
    Ok(param)
}

fn rejected(error: ParamError) -> ParamError {
    log::debug!("Rejected parameter mutation: {error}");
    error
}

/// Checks that no two parameters in the tree share a name. Fails on the first repeat found in
/// pre-order.
fn verify_unique_names(root: &Parameter) -> Result<(), ParamError> {
    let mut seen = hashbrown::HashSet::new();
    for param in root.walk() {
        if !seen.insert(param.name()) {
            return Err(ParamError::DuplicateName {
                name: param.name().to_string(),
            });
        }
    }
    Ok(())
}

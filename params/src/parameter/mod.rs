//! A single parameter and its children.


use serde_derive::Serialize;
use serde_json::Value;
use utils::ItemFlags;

use crate::{ParamError, ParamType, Properties, schema};

/// One named, typed parameter, owning its child parameters.
///
/// Parameters are usually owned by a [crate::ParameterModel], which only hands out shared
/// references and performs mutations itself so that it can notify observers.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: String,
    full_name: String,
    description: String,
    optional: bool,
    is_active: bool,
    value: Value,
    default: Value,
    properties: Properties,
    children: Vec<Parameter>,
    readonly: bool,
}

impl Parameter {
    /// Validates `raw` and builds the parameter and, recursively, all of its children.
    pub fn new(name: &str, raw: &Value) -> Result<Self, ParamError> {
        let def = schema::validate(name, raw)?;
        Self::from_definition(name, def)
    }

    /// Builds the parameter from already validated options.
    pub fn from_definition(name: &str, def: schema::ParamDefinition) -> Result<Self, ParamError> {
        let children = def
            .children
            .iter()
            .map(|(child_name, child_raw)| Parameter::new(child_name, child_raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            full_name: def.full_name,
            description: def.description,
            optional: def.optional,
            is_active: def.is_active,
            value: def.value,
            default: def.default,
            properties: def.properties,
            children,
            readonly: false,
        })
    }

    /// A group without children.
    pub(crate) fn empty_group(name: &str) -> Self {
        Self {
            name: name.to_string(),
            full_name: name.to_string(),
            description: String::new(),
            optional: false,
            is_active: true,
            value: Value::Null,
            default: Value::Null,
            properties: Properties::Group,
            children: Vec::new(),
            readonly: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn param_type(&self) -> ParamType {
        self.properties.param_type()
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn optional(&self) -> bool {
        self.optional
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// The parameter's effective value.
    ///
    /// For `named_list` parameters this is the value mapped to the stored option name, which
    /// fails if the stored name is not an option. Groups have a null value.
    pub fn value(&self) -> Result<&Value, ParamError> {
        self.properties.resolve(&self.name, &self.value)
    }

    /// The value exactly as stored, i.e. the option name for `named_list` parameters.
    pub fn stored_value(&self) -> &Value {
        &self.value
    }

    pub fn default(&self) -> &Value {
        &self.default
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn children(&self) -> &[Parameter] {
        &self.children
    }

    /// True if the stored value differs from the default, i.e. resetting would change it.
    pub fn is_modified(&self) -> bool {
        self.value != self.default
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Capabilities of the label showing the full name and the activation checkbox.
    pub fn name_flags(&self) -> ItemFlags {
        ItemFlags::label(self.optional, self.readonly)
    }

    /// Capabilities of the value editor.
    pub fn value_flags(&self) -> ItemFlags {
        ItemFlags::editor(self.readonly)
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets whether the parameter may be deactivated. A parameter that is not optional is
    /// always active.
    pub fn set_optional(&mut self, optional: bool) {
        self.optional = optional;
        if !optional {
            self.is_active = true;
        }
    }

    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub fn set_default(&mut self, default: Value) {
        self.default = default;
    }

    /// Copies the default into the value.
    pub fn reset_value(&mut self) {
        self.value = self.default.clone();
    }

    /// Replaces the properties, and with them the type. Becoming a group clears the value and
    /// default.
    pub fn set_properties(&mut self, properties: Properties) {
        if !properties.param_type().has_value() {
            self.value = Value::Null;
            self.default = Value::Null;
        }
        self.properties = properties;
    }

    /// Changes the type, resetting the properties to that type's defaults.
    pub fn set_type(&mut self, param_type: ParamType) {
        if param_type != self.param_type() {
            self.set_properties(Properties::defaults_for(param_type));
        }
    }

    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
    }

    /// Iterates over this parameter and all of its descendants, parents before children.
    pub fn walk(&self) -> impl Iterator<Item = &Parameter> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let param = stack.pop()?;
            stack.extend(param.children.iter().rev());
            Some(param)
        })
    }

    /// Finds this parameter or a descendant by name.
    pub fn find(&self, name: &str) -> Option<&Parameter> {
        self.walk().find(|param| param.name == name)
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(name))
    }

    /// Like [Parameter::find_mut], but never returns this parameter itself.
    pub(crate) fn find_descendant_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(name))
    }

    pub(crate) fn set_readonly_recursive(&mut self, readonly: bool) {
        self.readonly = readonly;
        for child in self.children.iter_mut() {
            child.set_readonly_recursive(readonly);
        }
    }

    /// Returns the mapping form of the parameter and its children, as accepted by
    /// [Parameter::new].
    pub fn serialize(&self) -> Value {
        // Cannot fail, all map keys are strings.
        serde_json::to_value(SerialParameter::from(self)).unwrap_or(Value::Null)
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Parameter>{}", self.serialize())
    }
}

#[derive(Serialize)]
struct SerialParameter<'a> {
    #[serde(rename = "type")]
    param_type: ParamType,
    full_name: &'a str,
    description: &'a str,
    optional: bool,
    is_active: bool,
    value: &'a Value,
    default: &'a Value,
    properties: &'a Properties,
    #[serde(serialize_with = "serialize_children")]
    children: &'a [Parameter],
}

impl<'a> From<&'a Parameter> for SerialParameter<'a> {
    fn from(param: &'a Parameter) -> Self {
        Self {
            param_type: param.param_type(),
            full_name: &param.full_name,
            description: &param.description,
            optional: param.optional,
            is_active: param.is_active,
            value: &param.value,
            default: &param.default,
            properties: &param.properties,
            children: &param.children,
        }
    }
}

fn serialize_children<S>(children: &&[Parameter], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(
        children
            .iter()
            .map(|child| (child.name.as_str(), SerialParameter::from(child))),
    )
}

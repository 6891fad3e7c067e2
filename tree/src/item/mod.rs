//! A single step of the processing tree.


use params::ParameterModel;
use saveinfo::SaveModel;
use serde_derive::Serialize;
use serde_json::{Map, Value};
use utils::ItemFlags;

use crate::{ItemType, TreeError};

const NOT_PROCESSED: &str = "Not processed";

/// One step of the processing tree: its identity, the function it runs, the parameters passed
/// to that function, where its output is saved, and its child steps.
///
/// The processing status is runtime state and is not part of the serialised form.
#[derive(Debug)]
pub struct FilterItem {
    item_type: ItemType,
    name: String,
    full_name: String,
    description: String,
    is_active: bool,
    function: Option<String>,
    params: ParameterModel,
    save_info: SaveModel,
    children: Vec<FilterItem>,
    is_processed: bool,
    has_processing_error: bool,
    status_message: String,
    readonly: bool,
}

impl FilterItem {
    /// Creates an item with no function, parameters, saves or children.
    pub fn new(item_type: ItemType, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            item_type,
            full_name: name.clone(),
            name,
            description: String::new(),
            is_active: true,
            function: None,
            params: ParameterModel::default(),
            save_info: SaveModel::default(),
            children: Vec::new(),
            is_processed: false,
            has_processing_error: false,
            status_message: NOT_PROCESSED.to_string(),
            readonly: false,
        }
    }

    /// Validates raw item options and builds the item and, recursively, its children.
    pub fn from_value(raw: &Value) -> Result<Self, TreeError> {
        let Value::Object(opts) = raw else {
            return Err(TreeError::NotAMapping);
        };

        let item_type = match opts.get("type") {
            None => return Err(TreeError::MissingField { field: "type" }),
            Some(Value::String(t)) => ItemType::parse(t)?,
            Some(_) => {
                return Err(TreeError::InvalidField {
                    field: "type",
                    expected: "a string",
                });
            }
        };
        let name = match opts.get("name") {
            None => return Err(TreeError::MissingField { field: "name" }),
            Some(v) => v.as_str().ok_or(TreeError::InvalidField {
                field: "name",
                expected: "a string",
            })?,
        };

        let mut item = Self::new(item_type, name);
        if let Some(full_name) = optional_str(opts, "full_name")? {
            item.full_name = full_name.to_string();
        }
        if let Some(description) = optional_str(opts, "description")? {
            item.description = description.to_string();
        }
        item.function = optional_str(opts, "fn")?.map(str::to_string);
        if let Some(is_active) = opts.get("is_active") {
            item.is_active = is_active.as_bool().ok_or(TreeError::InvalidField {
                field: "is_active",
                expected: "a bool",
            })?;
        }

        if let Some(params) = opts.get("params") {
            item.params = ParameterModel::create(params).map_err(|source| TreeError::Params {
                item: item.name.clone(),
                source,
            })?;
        }
        if let Some(save_info) = opts.get("save_info") {
            item.save_info = SaveModel::create(save_info).map_err(|source| TreeError::Saves {
                item: item.name.clone(),
                source,
            })?;
        }
        match opts.get("children") {
            None => {}
            Some(Value::Array(children)) => {
                item.children = children
                    .iter()
                    .map(FilterItem::from_value)
                    .collect::<Result<_, _>>()?;
            }
            Some(_) => return Err(TreeError::NotAList { what: "children" }),
        }

        Ok(item)
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Name of the function this step runs, if any.
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    pub fn params(&self) -> &ParameterModel {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut ParameterModel {
        &mut self.params
    }

    pub fn save_info(&self) -> &SaveModel {
        &self.save_info
    }

    pub fn save_info_mut(&mut self) -> &mut SaveModel {
        &mut self.save_info
    }

    pub fn children(&self) -> &[FilterItem] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [FilterItem] {
        &mut self.children
    }

    pub fn is_processed(&self) -> bool {
        self.is_processed
    }

    pub fn has_processing_error(&self) -> bool {
        self.has_processing_error
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    /// Capabilities of the label showing the full name and the activation checkbox.
    pub fn name_flags(&self) -> ItemFlags {
        ItemFlags::label(true, self.readonly)
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_is_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    pub fn set_function(&mut self, function: Option<String>) {
        self.function = function;
    }

    /// Appends a child, which becomes read-only if this item is.
    pub fn push_child(&mut self, mut child: FilterItem) {
        if self.readonly {
            child.set_readonly(true);
        }
        self.children.push(child);
    }

    /// Records that the step ran, with a message describing its result.
    pub fn mark_processed(&mut self, message: impl Into<String>) {
        self.is_processed = true;
        self.has_processing_error = false;
        self.status_message = message.into();
    }

    /// Records that the step failed.
    pub fn mark_failed(&mut self, message: impl Into<String>) {
        self.is_processed = false;
        self.has_processing_error = true;
        self.status_message = message.into();
    }

    pub fn reset_status(&mut self) {
        self.is_processed = false;
        self.has_processing_error = false;
        self.status_message = NOT_PROCESSED.to_string();
    }

    /// Sets read-only mode on this item, its models, and all of its descendants.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.readonly = readonly;
        self.params.set_readonly(readonly);
        self.save_info.set_readonly(readonly);
        for child in self.children.iter_mut() {
            child.set_readonly(readonly);
        }
    }

    /// Iterates over this item and all of its descendants, parents before children.
    pub fn walk(&self) -> impl Iterator<Item = &FilterItem> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let item = stack.pop()?;
            stack.extend(item.children.iter().rev());
            Some(item)
        })
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut FilterItem> {
        if self.name == name {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(name))
    }

    /// Returns the mapping form of the item and its children, as accepted by
    /// [FilterItem::from_value].
    pub fn serialize(&self) -> Value {
        // Cannot fail, all map keys are strings.
        serde_json::to_value(SerialItem::from(self)).unwrap_or(Value::Null)
    }
}

impl std::fmt::Display for FilterItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<FilterItem>{}", self.serialize())
    }
}

fn optional_str<'a>(
    opts: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>, TreeError> {
    match opts.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(TreeError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

#[derive(Serialize)]
struct SerialItem<'a> {
    #[serde(rename = "type")]
    item_type: ItemType,
    name: &'a str,
    full_name: &'a str,
    description: &'a str,
    is_active: bool,
    #[serde(rename = "fn")]
    function: Option<&'a str>,
    params: Value,
    save_info: Value,
    children: Vec<SerialItem<'a>>,
}

impl<'a> From<&'a FilterItem> for SerialItem<'a> {
    fn from(item: &'a FilterItem) -> Self {
        Self {
            item_type: item.item_type,
            name: &item.name,
            full_name: &item.full_name,
            description: &item.description,
            is_active: item.is_active,
            function: item.function.as_deref(),
            params: item.params.serialize(),
            save_info: item.save_info.serialize(),
            children: item.children.iter().map(SerialItem::from).collect(),
        }
    }
}

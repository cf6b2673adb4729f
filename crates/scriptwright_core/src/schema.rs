//! Typed output-schema nodes.
//!
//! A [`Schema`] describes the JSON document a model must produce. It serializes to the
//! OpenAPI subset accepted by structured-output endpoints, keeping property order stable
//! through `propertyOrdering`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// JSON value kinds a schema node may constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    /// A JSON object with named properties
    #[display("OBJECT")]
    Object,
    /// A JSON array of homogeneous items
    #[display("ARRAY")]
    Array,
    /// A JSON string
    #[display("STRING")]
    String,
    /// A JSON integer
    #[display("INTEGER")]
    Integer,
}

/// One node of an output schema.
///
/// # Examples
///
/// ```
/// use scriptwright_core::{Schema, SchemaType};
///
/// let character = Schema::object()
///     .property("name", Schema::string())
///     .optional_property("nickname", Schema::string().describe("Only if one exists"));
///
/// assert_eq!(character.kind(), SchemaType::Object);
/// assert_eq!(character.required(), ["name".to_string()]);
/// assert!(character.get("nickname").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    kind: SchemaType,
    description: Option<String>,
    properties: Vec<(String, Schema)>,
    required: Vec<String>,
    items: Option<Box<Schema>>,
    min_items: Option<u32>,
    max_items: Option<u32>,
}

impl Schema {
    fn of(kind: SchemaType) -> Self {
        Self {
            kind,
            description: None,
            properties: Vec::new(),
            required: Vec::new(),
            items: None,
            min_items: None,
            max_items: None,
        }
    }

    /// An object node with no properties yet.
    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    /// An array node whose elements follow `items`.
    pub fn array(items: Schema) -> Self {
        let mut schema = Self::of(SchemaType::Array);
        schema.items = Some(Box::new(items));
        schema
    }

    /// A string node.
    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    /// An integer node.
    pub fn integer() -> Self {
        Self::of(SchemaType::Integer)
    }

    /// Attaches a description the model sees as guidance for this node.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a required property.
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.push((name, schema));
        self
    }

    /// Adds a property the model may omit.
    pub fn optional_property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    /// Constrains an array node to exactly `count` items.
    pub fn exactly(mut self, count: u32) -> Self {
        self.min_items = Some(count);
        self.max_items = Some(count);
        self
    }

    /// The value kind of this node.
    pub fn kind(&self) -> SchemaType {
        self.kind
    }

    /// Guidance text, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Names of required properties, in declaration order.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Looks up a property schema by name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, schema)| schema)
    }

    /// Element schema of an array node.
    pub fn items(&self) -> Option<&Schema> {
        self.items.as_deref()
    }

    /// Exact item count, when both bounds agree.
    pub fn exact_items(&self) -> Option<u32> {
        match (self.min_items, self.max_items) {
            (Some(min), Some(max)) if min == max => Some(min),
            _ => None,
        }
    }
}

struct Properties<'a>(&'a [(String, Schema)]);

impl Serialize for Properties<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, schema) in self.0 {
            map.serialize_entry(name, schema)?;
        }
        map.end()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", &self.kind)?;
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        if !self.properties.is_empty() {
            map.serialize_entry("properties", &Properties(&self.properties))?;
            let ordering: Vec<&str> = self.properties.iter().map(|(k, _)| k.as_str()).collect();
            map.serialize_entry("propertyOrdering", &ordering)?;
        }
        if !self.required.is_empty() {
            map.serialize_entry("required", &self.required)?;
        }
        if let Some(items) = &self.items {
            map.serialize_entry("items", items)?;
        }
        if let Some(min) = self.min_items {
            map.serialize_entry("minItems", &min)?;
        }
        if let Some(max) = self.max_items {
            map.serialize_entry("maxItems", &max)?;
        }
        map.end()
    }
}

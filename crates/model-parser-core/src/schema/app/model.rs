use super::Method;
use crate::schema::name;
use indexmap::IndexMap;
use serde::Deserialize;

/// Return type names that mark a method as an `Attribute` accessor.
const ATTRIBUTE_TYPES: [&str; 2] = ["Attribute", "Illuminate\\Database\\Eloquent\\Casts\\Attribute"];

/// Declarative description of a model type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Model {
    /// Fully qualified identifier, e.g. `App\Models\User`
    pub name: String,

    /// If the model maps to a table other than the conventional one, this is
    /// set.
    #[serde(default)]
    pub table: Option<String>,

    /// Primary key column
    #[serde(default = "default_key")]
    pub key: String,

    /// Cast applied to the primary key of incrementing models
    #[serde(default = "default_key_type")]
    pub key_type: String,

    /// True if the primary key is auto-incrementing
    #[serde(default = "default_incrementing")]
    pub incrementing: bool,

    /// Attributes hidden from serialization
    #[serde(default)]
    pub hidden: Vec<String>,

    /// Declared attribute casts, in declaration order
    #[serde(default)]
    pub casts: IndexMap<String, String>,

    /// Declared methods, in declaration order
    #[serde(default)]
    pub methods: Vec<Method>,
}

fn default_key() -> String {
    "id".to_string()
}

fn default_key_type() -> String {
    "int".to_string()
}

fn default_incrementing() -> bool {
    true
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            key: default_key(),
            key_type: default_key_type(),
            incrementing: default_incrementing(),
            hidden: vec![],
            casts: IndexMap::new(),
            methods: vec![],
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>, key_type: impl Into<String>) -> Self {
        self.key = key.into();
        self.key_type = key_type.into();
        self
    }

    pub fn non_incrementing(mut self) -> Self {
        self.incrementing = false;
        self
    }

    pub fn with_hidden<I, S>(mut self, hidden: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden.extend(hidden.into_iter().map(Into::into));
        self
    }

    pub fn with_cast(mut self, attribute: impl Into<String>, target: impl Into<String>) -> Self {
        self.casts.insert(attribute.into(), target.into());
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Last segment of the model identifier.
    pub fn short_name(&self) -> &str {
        name::short_name(&self.name)
    }

    /// The table backing the model.
    pub fn table(&self) -> String {
        match &self.table {
            Some(table) => table.clone(),
            None => name::table_name(self.short_name()),
        }
    }

    pub fn hidden(&self) -> &[String] {
        &self.hidden
    }

    /// Effective casts: incrementing models cast their key first, then the
    /// declared casts apply. Declaring a cast for the key replaces the key
    /// type in place.
    pub fn casts(&self) -> IndexMap<String, String> {
        let mut casts = IndexMap::new();

        if self.incrementing {
            casts.insert(self.key.clone(), self.key_type.clone());
        }

        for (attribute, target) in &self.casts {
            casts.insert(attribute.clone(), target.clone());
        }

        casts
    }

    /// Attributes backed by accessor methods, snake-cased.
    ///
    /// Legacy `get<Name>Attribute` accessors come first, followed by methods
    /// declared as returning `Attribute`, each group in declaration order.
    pub fn mutated_attributes(&self) -> Vec<String> {
        let legacy = self.methods.iter().filter_map(|method| {
            let name = method.name.strip_prefix("get")?.strip_suffix("Attribute")?;
            (!name.is_empty()).then(|| name::snake_attribute(name))
        });

        let marked = self
            .methods
            .iter()
            .filter(|method| {
                method
                    .return_type_name()
                    .is_some_and(|ty| ATTRIBUTE_TYPES.contains(&ty))
            })
            .map(|method| name::snake_attribute(&method.name));

        let mut attributes: Vec<String> = vec![];
        for attribute in legacy.chain(marked) {
            if !attributes.contains(&attribute) {
                attributes.push(attribute);
            }
        }
        attributes
    }

    /// Name of the column other tables use to reference this model.
    pub fn foreign_key(&self) -> String {
        format!("{}_{}", name::snake(self.short_name()), self.key)
    }

    pub fn joining_table_segment(&self) -> String {
        name::snake(self.short_name())
    }

    /// Conventional intermediate table between this model and `related`: both
    /// segments, sorted, joined by `_`.
    pub fn joining_table(&self, related: &Model) -> String {
        let mut segments = [related.joining_table_segment(), self.joining_table_segment()];
        segments.sort();
        segments.join("_").to_lowercase()
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|method| method.name == name)
    }
}

// crates/sbml-pkg/src/attributes.rs

//! XML attribute tables and the typed, schema-driven attribute reader.

use crate::error::ErrorLog;
use crate::log::{ElementContext, sbml_trace};
use crate::namespaces::Namespaces;
use crate::schema::{AttributeKind, AttributeSpec, ElementSchema};
use crate::sid::{is_valid_sid, is_valid_unit_sid};
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

// --- Attribute table ---

/// One attribute as it appears on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    pub prefix: Option<String>,
    pub name: String,
    pub value: String,
}

impl XmlAttribute {
    /// The name as written in XML, `prefix:name` or `name`.
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}:{}", p, self.name),
            None => self.name.clone(),
        }
    }
}

/// An ordered attribute table. Lookups are by local name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlAttributes {
    entries: Vec<XmlAttribute>,
}

impl XmlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an unprefixed attribute, replacing an existing one of the same name.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        self.add_entry(None, name, value.into());
    }

    /// Adds a prefixed attribute, replacing an existing one of the same name.
    pub fn add_prefixed(&mut self, prefix: &str, name: &str, value: impl Into<String>) {
        self.add_entry(Some(prefix), name, value.into());
    }

    /// Adds an attribute given its qualified XML name (`"vers:required"`).
    pub fn add_qualified(&mut self, qname: &str, value: impl Into<String>) {
        match qname.split_once(':') {
            Some((prefix, name)) => self.add_prefixed(prefix, name, value),
            None => self.add(qname, value),
        }
    }

    fn add_entry(&mut self, prefix: Option<&str>, name: &str, value: String) {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|a| a.name == name && a.prefix.as_deref() == prefix)
        {
            existing.value = value;
        } else {
            self.entries.push(XmlAttribute {
                prefix: prefix.map(String::from),
                name: name.to_string(),
                value,
            });
        }
    }

    /// The value of the first attribute with this local name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// The value of the attribute with this prefix and local name.
    pub fn get_prefixed(&self, prefix: &str, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.name == name && a.prefix.as_deref() == Some(prefix))
            .map(|a| a.value.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes and returns the first attribute with this local name.
    pub fn remove(&mut self, name: &str) -> Option<XmlAttribute> {
        let pos = self.entries.iter().position(|a| a.name == name)?;
        Some(self.entries.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &XmlAttribute> {
        self.entries.iter()
    }

    /// Sets `prefix` on every attribute from position `start` onwards.
    pub fn apply_prefix_from(&mut self, start: usize, prefix: &str) {
        for attr in self.entries.iter_mut().skip(start) {
            attr.prefix = Some(prefix.to_string());
        }
    }
}

// --- Expected attributes ---

/// Local names an element accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpectedAttributes {
    names: Vec<&'static str>,
}

impl ExpectedAttributes {
    /// Attributes every element accepts.
    pub const CORE: [&'static str; 2] = ["metaid", "sboTerm"];

    pub fn new() -> Self {
        Self::default()
    }

    /// A set pre-populated with [`Self::CORE`].
    pub fn core() -> Self {
        Self {
            names: Self::CORE.to_vec(),
        }
    }

    pub fn add(&mut self, name: &'static str) {
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| *n == name)
    }

    pub fn is_core(name: &str) -> bool {
        Self::CORE.contains(&name)
    }
}

// --- Value formatting ---

/// Parses an XML Schema boolean.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Parses an XML Schema double, including `INF`, `-INF` and `NaN`.
pub fn parse_double(s: &str) -> Option<f64> {
    match s.trim() {
        "INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        other => other.parse().ok(),
    }
}

/// Formats a double the way it is written to XML.
///
/// Magnitudes outside `[1e-5, 1e15)` use exponent notation.
pub fn format_double(d: f64) -> String {
    let magnitude = d.abs();
    if d.is_nan() {
        "NaN".into()
    } else if d == f64::INFINITY {
        "INF".into()
    } else if d == f64::NEG_INFINITY {
        "-INF".into()
    } else if magnitude >= 1e15 || (magnitude != 0.0 && magnitude < 1e-5) {
        format!("{:e}", d)
    } else {
        d.to_string()
    }
}

/// A closed set of values stored in a single attribute.
pub trait AttributeEnum: Sized + Copy {
    fn from_attribute(value: &str) -> Option<Self>;
    fn as_attribute(self) -> &'static str;
}

// --- Typed reader ---

/// Reads typed attribute values off an [`XmlAttributes`] table.
///
/// The reader knows the element's schema row: attributes not in the row are
/// skipped (the unknown-attribute pass reports them), a missing required
/// attribute or a malformed value is logged with the schema's error codes.
pub struct AttributeReader<'a> {
    attributes: &'a XmlAttributes,
    schema: &'static ElementSchema,
    namespaces: &'a Namespaces,
    line: u32,
    column: u32,
    log: &'a mut ErrorLog,
}

impl<'a> AttributeReader<'a> {
    pub fn new(
        attributes: &'a XmlAttributes,
        schema: &'static ElementSchema,
        namespaces: &'a Namespaces,
        line: u32,
        column: u32,
        log: &'a mut ErrorLog,
    ) -> Self {
        Self {
            attributes,
            schema,
            namespaces,
            line,
            column,
            log,
        }
    }

    /// The namespaces the owning element is read in.
    pub fn namespaces(&self) -> &Namespaces {
        self.namespaces
    }

    /// Logs an error against the element being read.
    pub fn log_error(&mut self, code: u32, details: &str) {
        self.log
            .log_package_error(code, self.namespaces, details, self.line, self.column);
    }

    fn raw(&mut self, name: &str) -> Option<(&'static AttributeSpec, &'a str)> {
        let spec = self.schema.attribute(self.namespaces, name)?;
        let attributes: &'a XmlAttributes = self.attributes;
        match attributes.get(name) {
            Some(value) => {
                let ctx = ElementContext::new(self.namespaces, self.schema.element, self.line);
                sbml_trace!(ctx, "attribute {}=\"{}\"", name, value);
                Some((spec, value))
            }
            None => {
                if spec.required {
                    let details = format!(
                        "The required attribute '{}' is missing from the <{}> element.",
                        name, self.schema.element
                    );
                    self.log_error(self.schema.errors.allowed_attributes, &details);
                }
                None
            }
        }
    }

    fn type_error(&mut self, spec: &AttributeSpec, value: &str) {
        let details = format!(
            "The attribute '{}' on the <{}> element must be of type {}; found '{}'.",
            spec.name,
            self.schema.element,
            spec.kind.type_name(),
            value
        );
        self.log_error(spec.error, &details);
    }

    /// Reads a plain string. An empty value is reported and dropped.
    pub fn string(&mut self, name: &str) -> Option<String> {
        let (spec, value) = self.raw(name)?;
        if value.is_empty() {
            let details = format!(
                "The attribute '{}' on the <{}> element is present but empty.",
                name, self.schema.element
            );
            self.log_error(spec.error, &details);
            return None;
        }
        Some(value.to_string())
    }

    /// Reads an `SId`. Syntax violations are reported with the element's id-syntax code.
    pub fn sid(&mut self, name: &str) -> Option<String> {
        let (_, value) = self.raw(name)?;
        let value = value.trim();
        if !is_valid_sid(value) {
            let details = format!(
                "The {} attribute '{}' on the <{}> element does not conform to the syntax of an SId.",
                name, value, self.schema.element
            );
            self.log_error(self.schema.errors.id_syntax, &details);
            return None;
        }
        Some(value.to_string())
    }

    /// Reads an `SIdRef`.
    pub fn sid_ref(&mut self, name: &str) -> Option<String> {
        let (spec, value) = self.raw(name)?;
        let value = value.trim();
        if !is_valid_sid(value) {
            self.type_error(spec, value);
            return None;
        }
        Some(value.to_string())
    }

    /// Reads a `UnitSIdRef`.
    pub fn unit_sid_ref(&mut self, name: &str) -> Option<String> {
        let (spec, value) = self.raw(name)?;
        let value = value.trim();
        if !is_valid_unit_sid(value) {
            self.type_error(spec, value);
            return None;
        }
        Some(value.to_string())
    }

    pub fn boolean(&mut self, name: &str) -> Option<bool> {
        let (spec, value) = self.raw(name)?;
        let parsed = parse_bool(value);
        if parsed.is_none() {
            self.type_error(spec, value);
        }
        parsed
    }

    pub fn unsigned_int(&mut self, name: &str) -> Option<u32> {
        let (spec, value) = self.raw(name)?;
        let parsed = value.trim().parse::<u32>().ok();
        if parsed.is_none() {
            self.type_error(spec, value);
        }
        parsed
    }

    pub fn int(&mut self, name: &str) -> Option<i32> {
        let (spec, value) = self.raw(name)?;
        let parsed = value.trim().parse::<i32>().ok();
        if parsed.is_none() {
            self.type_error(spec, value);
        }
        parsed
    }

    pub fn double(&mut self, name: &str) -> Option<f64> {
        let (spec, value) = self.raw(name)?;
        let parsed = parse_double(value);
        if parsed.is_none() {
            self.type_error(spec, value);
        }
        parsed
    }

    pub fn enumeration<E: AttributeEnum>(&mut self, name: &str) -> Option<E> {
        let (spec, value) = self.raw(name)?;
        let parsed = E::from_attribute(value.trim());
        if parsed.is_none() {
            let allowed = match spec.kind {
                AttributeKind::Enum(values) => values.join(", "),
                _ => String::new(),
            };
            let details = format!(
                "The attribute '{}' on the <{}> element must be one of [{}]; found '{}'.",
                name, self.schema.element, allowed, value
            );
            self.log_error(spec.error, &details);
        }
        parsed
    }
}

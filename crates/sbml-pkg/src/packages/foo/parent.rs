// crates/sbml-pkg/src/packages/foo/parent.rs

use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::namespaces::{Namespaces, Package};
use crate::packages::id_name_accessors;
use crate::node::XmlNode;
use crate::sbase::{ListItem, SBase, SBaseCore};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::status::OperationResult;
use crate::types::TypeCode;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

pub static PARENT_SCHEMA: ElementSchema = ElementSchema {
    element: "parent",
    errors: ElementErrors {
        allowed_core_attributes: FOO_PARENT_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: FOO_PARENT_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: FOO_PARENT_ALLOWED_ATTRIBUTES,
        allowed_elements: FOO_PARENT_ALLOWED_ELEMENTS,
        id_syntax: FOO_ID_SYNTAX_RULE,
        duplicate_id: FOO_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::required("id", AttributeKind::SId, FOO_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, FOO_PARENT_NAME_MUST_BE_STRING),
        ],
    }],
};

const MESS: &str = "mess";

/// The `<parent>` element, with an optional `<mess>` child of arbitrary XML.
#[derive(Debug, Clone, PartialEq)]
pub struct Parent {
    core: SBaseCore,
    id: String,
    name: String,
    /// The whole `<mess>` element, unprefixed.
    mess: Option<XmlNode>,
}

impl Parent {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Foo, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            mess: None,
        }
    }

    id_name_accessors!();

    pub fn mess(&self) -> Option<&XmlNode> {
        self.mess.as_ref()
    }

    pub fn is_set_mess(&self) -> bool {
        self.mess.is_some()
    }

    /// Stores `mess`. A node that is not itself a `<mess>` element becomes
    /// the content of one.
    pub fn set_mess(&mut self, mess: XmlNode) -> OperationResult {
        let mut mess = if mess.name() == MESS {
            mess
        } else {
            let mut wrapper = XmlNode::new(MESS);
            wrapper.add_child(mess);
            wrapper
        };
        mess.set_prefix(None);
        self.mess = Some(mess);
        Ok(())
    }

    pub fn unset_mess(&mut self) -> OperationResult {
        self.mess = None;
        Ok(())
    }
}

impl Default for Parent {
    fn default() -> Self {
        Self::with_namespaces(Package::Foo.default_namespaces())
    }
}

impl SBase for Parent {
    fn type_code(&self) -> TypeCode {
        TypeCode::FooParent
    }

    fn schema(&self) -> &'static ElementSchema {
        &PARENT_SCHEMA
    }

    fn core(&self) -> &SBaseCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SBaseCore {
        &mut self.core
    }

    fn id_attribute(&self) -> Option<&str> {
        self.is_set_id().then_some(self.id.as_str())
    }

    fn name_attribute(&self) -> Option<&str> {
        self.is_set_name().then_some(self.name.as_str())
    }

    fn read_attributes(&mut self, reader: &mut AttributeReader<'_>) {
        if let Some(id) = reader.sid("id") {
            self.id = id;
        }
        if let Some(name) = reader.string("name") {
            self.name = name;
        }
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
    }

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        if node.name() != MESS {
            return false;
        }
        if self.is_set_mess() {
            let details = format!("A <parent> may only contain one <{}>.", MESS);
            log.log_package_error(
                FOO_PARENT_ALLOWED_ELEMENTS,
                self.core.namespaces(),
                &details,
                node.line(),
                node.column(),
            );
            return true;
        }
        let _ = self.set_mess(node.clone());
        true
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        if let Some(mess) = &self.mess {
            let mut mess = mess.clone();
            mess.set_prefix(self.core.namespaces().element_prefix());
            out.push(mess);
        }
    }
}

impl ListItem for Parent {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        (name == PARENT_SCHEMA.element).then(|| Self::with_namespaces(ns.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbase::{read_element, write_element};

    #[test]
    fn test_id_and_name_accessors() {
        let mut p = Parent::default();
        assert_eq!(p.set_id("p 1"), Err(crate::status::OperationError::InvalidAttributeValue));
        assert!(!p.has_required_attributes());
        p.set_id("p1").unwrap();
        p.set_name("first parent").unwrap();
        assert_eq!((p.id(), p.name()), ("p1", "first parent"));
        assert!(p.has_required_attributes());
        p.unset_name().unwrap();
        assert!(!p.is_set_name());
    }

    #[test]
    fn test_mess_is_wrapped() {
        let mut p = Parent::default();
        let mut content = XmlNode::new("b");
        content.set_text("bold");
        p.set_mess(content).unwrap();
        let mess = p.mess().unwrap();
        assert_eq!(mess.name(), "mess");
        assert_eq!(mess.nth_child(0).unwrap().text(), "bold");

        p.unset_mess().unwrap();
        assert!(!p.is_set_mess());
    }

    #[test]
    fn test_mess_written_with_prefix_and_read_back() {
        let mut p = Parent::default();
        p.set_id("p1").unwrap();
        p.set_mess(XmlNode::new("anything")).unwrap();
        let node = write_element(&p);
        assert_eq!(node.qualified_name(), "foo:parent");
        assert_eq!(node.nth_child(0).unwrap().qualified_name(), "foo:mess");
        assert_eq!(node.attributes().get_prefixed("foo", "id"), Some("p1"));

        let mut back = Parent::default();
        let mut log = ErrorLog::new();
        read_element(&mut back, &node, &mut log);
        assert!(log.is_empty());
        assert_eq!(back, p);
    }

    #[test]
    fn test_second_mess_is_reported() {
        let mut node = XmlNode::from_qualified_name("foo:parent");
        node.attributes_mut().add_prefixed("foo", "id", "p");
        node.add_child(XmlNode::from_qualified_name("foo:mess"));
        node.add_child(XmlNode::from_qualified_name("foo:mess"));
        let mut p = Parent::default();
        let mut log = ErrorLog::new();
        read_element(&mut p, &node, &mut log);
        assert!(log.contains(FOO_PARENT_ALLOWED_ELEMENTS));
        assert!(p.is_set_mess());
    }
}

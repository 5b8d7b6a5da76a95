// crates/sbml-pkg/src/list_of.rs

use crate::attributes::{AttributeReader, XmlAttributes};
use crate::error::ErrorLog;
use crate::log::{ElementContext, sbml_warn};
use crate::namespaces::Namespaces;
use crate::node::XmlNode;
use crate::sbase::{ListItem, SBase, SBaseCore, read_item, write_element};
use crate::schema::ElementSchema;
use crate::status::{OperationError, OperationResult};
use crate::types::TypeCode;
use alloc::vec::Vec;

/// An ordered, owning container of child elements (`listOfXs`).
///
/// Identifiers are unique within the list when set; [`ListOf::add`] enforces
/// it along with the level, version and namespace checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOf<T> {
    core: SBaseCore,
    schema: &'static ElementSchema,
    items: Vec<T>,
    /// The list must hold at least one item to be valid.
    required: bool,
}

impl<T: ListItem> ListOf<T> {
    pub fn new(schema: &'static ElementSchema, namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            schema,
            items: Vec::new(),
            required: false,
        }
    }

    /// A list that must not be empty for its parent to be valid.
    pub fn new_required(schema: &'static ElementSchema, namespaces: Namespaces) -> Self {
        Self {
            required: true,
            ..Self::new(schema, namespaces)
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, n: usize) -> Option<&T> {
        self.items.get(n)
    }

    pub fn get_mut(&mut self, n: usize) -> Option<&mut T> {
        self.items.get_mut(n)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id_attribute() == Some(id))
    }

    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items
            .iter_mut()
            .find(|item| item.id_attribute() == Some(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    /// Checks whether `item` may join this list.
    fn check_addition(&self, item: &T) -> OperationResult {
        let own = self.core.namespaces();
        let theirs = item.namespaces();
        if !item.has_required_attributes() {
            return Err(OperationError::InvalidObject);
        }
        if own.level() != theirs.level() {
            return Err(OperationError::LevelMismatch);
        }
        if own.version() != theirs.version() {
            return Err(OperationError::VersionMismatch);
        }
        if !own.matches_for_addition(theirs) {
            return Err(OperationError::NamespacesMismatch);
        }
        if let Some(id) = item.id_attribute()
            && self.get_by_id(id).is_some()
        {
            return Err(OperationError::DuplicateObjectId);
        }
        Ok(())
    }

    /// Appends a copy of `item` after validating it.
    pub fn add(&mut self, item: &T) -> OperationResult {
        self.append_and_own(item.clone())
    }

    /// Appends `item`, taking ownership, after validating it.
    pub fn append_and_own(&mut self, item: T) -> OperationResult {
        if let Err(e) = self.check_addition(&item) {
            let ctx = ElementContext::new(self.core.namespaces(), self.schema.element, 0);
            sbml_warn!(ctx, "rejected <{}>: {}", item.element_name(), e);
            return Err(e);
        }
        self.items.push(item);
        Ok(())
    }

    /// Builds a new item in this list's namespaces, appends it unchecked and
    /// returns it.
    pub fn create_with(&mut self, build: impl FnOnce(Namespaces) -> T) -> &mut T {
        let item = build(self.core.namespaces().clone());
        self.push(item)
    }

    /// Appends `item` without any check.
    pub(crate) fn push(&mut self, item: T) -> &mut T {
        let n = self.items.len();
        self.items.push(item);
        &mut self.items[n]
    }

    /// Detaches and returns the `n`th item.
    pub fn remove(&mut self, n: usize) -> Option<T> {
        if n < self.items.len() {
            Some(self.items.remove(n))
        } else {
            None
        }
    }

    /// Detaches and returns the item with the given id.
    pub fn remove_by_id(&mut self, id: &str) -> Option<T> {
        let n = self
            .items
            .iter()
            .position(|item| item.id_attribute() == Some(id))?;
        Some(self.items.remove(n))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items as written without the wrapper element.
    pub(crate) fn write_items(&self, out: &mut Vec<XmlNode>) {
        out.extend(self.items.iter().map(|item| write_element(item)));
    }

    pub(crate) fn item_refs(&self) -> Vec<&dyn SBase> {
        self.items.iter().map(|item| item as &dyn SBase).collect()
    }
}

impl<T: ListItem> SBase for ListOf<T> {
    fn type_code(&self) -> TypeCode {
        TypeCode::ListOf
    }

    fn schema(&self) -> &'static ElementSchema {
        self.schema
    }

    fn core(&self) -> &SBaseCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SBaseCore {
        &mut self.core
    }

    fn read_attributes(&mut self, _reader: &mut AttributeReader<'_>) {}

    fn write_attributes(&self, _attributes: &mut XmlAttributes) {}

    fn create_object(&mut self, node: &XmlNode, log: &mut ErrorLog) -> bool {
        match read_item::<T>(node, self.core.namespaces(), log) {
            Some(item) => {
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    fn write_elements(&self, out: &mut Vec<XmlNode>) {
        self.write_items(out);
    }

    fn children(&self) -> Vec<&dyn SBase> {
        self.item_refs()
    }

    fn has_required_elements(&self) -> bool {
        !self.required || !self.items.is_empty()
    }
}

// crates/sbml-pkg/src/tree.rs

//! Depth-first walks over an element tree.
//!
//! Every walk visits children in declaration order, as returned by
//! [`SBase::children`]. The root passed in is never itself a search result.

use crate::error::{DUPLICATE_META_ID, ErrorLog};
use crate::sbase::{SBase, missing_required_attributes};
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::vec::Vec;

/// Finds the first descendant whose `id` equals `id`.
pub fn get_element_by_sid<'a>(root: &'a dyn SBase, id: &str) -> Option<&'a dyn SBase> {
    if id.is_empty() {
        return None;
    }
    for child in root.children() {
        if child.id_attribute() == Some(id) {
            return Some(child);
        }
        if let Some(found) = get_element_by_sid(child, id) {
            return Some(found);
        }
    }
    None
}

/// Finds the first descendant whose `metaid` equals `meta_id`.
pub fn get_element_by_meta_id<'a>(root: &'a dyn SBase, meta_id: &str) -> Option<&'a dyn SBase> {
    if meta_id.is_empty() {
        return None;
    }
    for child in root.children() {
        if child.core().meta_id() == meta_id {
            return Some(child);
        }
        if let Some(found) = get_element_by_meta_id(child, meta_id) {
            return Some(found);
        }
    }
    None
}

/// Selects elements for [`get_all_elements`].
pub trait ElementFilter {
    fn filter(&self, element: &dyn SBase) -> bool;
}

impl<F> ElementFilter for F
where
    F: Fn(&dyn SBase) -> bool,
{
    fn filter(&self, element: &dyn SBase) -> bool {
        self(element)
    }
}

/// Collects every descendant, in depth-first pre-order, that passes `filter`.
pub fn get_all_elements<'a>(
    root: &'a dyn SBase,
    filter: Option<&dyn ElementFilter>,
) -> Vec<&'a dyn SBase> {
    let mut out = Vec::new();
    collect(root, filter, &mut out);
    out
}

fn collect<'a>(root: &'a dyn SBase, filter: Option<&dyn ElementFilter>, out: &mut Vec<&'a dyn SBase>) {
    for child in root.children() {
        if filter.is_none_or(|f| f.filter(child)) {
            out.push(child);
        }
        collect(child, filter, out);
    }
}

/// Receives elements during [`accept`].
pub trait Visitor {
    /// Called before an element's children. Returning `false` skips them.
    fn visit(&mut self, element: &dyn SBase) -> bool;

    /// Called after an element's children.
    fn leave(&mut self, _element: &dyn SBase) {}
}

/// Walks `root` and its descendants depth-first.
pub fn accept(root: &dyn SBase, visitor: &mut dyn Visitor) {
    if visitor.visit(root) {
        for child in root.children() {
            accept(child, visitor);
        }
    }
    visitor.leave(root);
}

/// Checks `root` and every descendant for missing required attributes,
/// missing required elements, and repeated `id` or `metaid` values.
///
/// Returns the number of entries appended to `log`.
pub fn check_consistency(root: &dyn SBase, log: &mut ErrorLog) -> usize {
    let mut checker = ConsistencyChecker {
        log,
        ids: BTreeSet::new(),
        meta_ids: BTreeSet::new(),
        found: 0,
    };
    accept(root, &mut checker);
    checker.found
}

struct ConsistencyChecker<'l> {
    log: &'l mut ErrorLog,
    ids: BTreeSet<alloc::string::String>,
    meta_ids: BTreeSet<alloc::string::String>,
    found: usize,
}

impl ConsistencyChecker<'_> {
    fn report(&mut self, element: &dyn SBase, code: u32, details: &str) {
        let core = element.core();
        self.log
            .log_package_error(code, core.namespaces(), details, core.line(), core.column());
        self.found += 1;
    }
}

impl Visitor for ConsistencyChecker<'_> {
    fn visit(&mut self, element: &dyn SBase) -> bool {
        let errors = element.schema().errors;
        let name = element.element_name();

        for attribute in missing_required_attributes(element) {
            let details = format!(
                "The required attribute '{}' is missing from the <{}> element.",
                attribute, name
            );
            self.report(element, errors.allowed_attributes, &details);
        }
        if !element.has_required_elements() {
            let details = format!("The <{}> element is missing a required child element.", name);
            self.report(element, errors.allowed_elements, &details);
        }
        if let Some(id) = element.id_attribute()
            && !self.ids.insert(id.into())
        {
            let details = format!("The id '{}' on <{}> is already used.", id, name);
            self.report(element, errors.duplicate_id, &details);
        }
        let meta_id = element.core().meta_id();
        if !meta_id.is_empty() && !self.meta_ids.insert(meta_id.into()) {
            let details = format!("The metaid '{}' on <{}> is already used.", meta_id, name);
            self.report(element, DUPLICATE_META_ID, &details);
        }
        true
    }
}

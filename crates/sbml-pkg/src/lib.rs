#![cfg_attr(not(feature = "std"), no_std)]

// 'alloc' holds every element's strings, lists and XML blobs.
extern crate alloc;

// --- Foundation Modules ---
pub mod log;
pub mod status;
pub mod types;
pub mod sid;
pub mod namespaces;
pub mod attributes;
pub mod node;
pub mod schema;
pub mod error;

// --- Element Machinery ---
pub mod sbase;
pub mod list_of;
pub mod plugin;
pub mod tree;

// --- Languages and Packages ---
pub mod sbml;
pub mod packages;
pub mod sedml;
pub mod combine;

// --- Top-level Exports ---
pub use status::{OperationError, OperationResult, status_code};
pub use types::{SBML_INT_MAX, TypeCode};
pub use namespaces::{Host, Namespaces, Package};
pub use node::{XmlContent, XmlNode};
pub use error::{DocumentError, ErrorLog, SbmlError, Severity, Category};
pub use sbase::{ListItem, SBase, SBaseCore, read_element, read_item, write_element};
pub use list_of::ListOf;
pub use plugin::{ModelPlugin, SBasePlugin};
pub use sbml::{Model, SbmlDocument};
pub use sedml::SedDocument;
pub use combine::CaOmexManifest;

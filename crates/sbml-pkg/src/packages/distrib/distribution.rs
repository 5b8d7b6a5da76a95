// crates/sbml-pkg/src/packages/distrib/distribution.rs

use super::errors::*;
use crate::attributes::{AttributeReader, XmlAttributes, format_double};
use crate::namespaces::{Namespaces, Package};
use crate::sbase::{ListItem, SBase, SBaseCore};
use crate::schema::{AttributeKind, AttributeSpec, ElementErrors, ElementSchema, SchemaRow};
use crate::types::TypeCode;
use alloc::string::String;

// --- normalDistribution ---

pub static NORMAL_DISTRIBUTION_SCHEMA: ElementSchema = ElementSchema {
    element: "normalDistribution",
    errors: ElementErrors {
        allowed_core_attributes: DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_ATTRIBUTES,
        allowed_elements: DISTRIB_NORMAL_DISTRIBUTION_ALLOWED_CORE_ELEMENTS,
        id_syntax: DISTRIB_ID_SYNTAX_RULE,
        duplicate_id: DISTRIB_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, DISTRIB_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, DISTRIB_NORMAL_DISTRIBUTION_NAME_MUST_BE_STRING),
            AttributeSpec::required("mean", AttributeKind::Double, DISTRIB_NORMAL_DISTRIBUTION_MEAN_MUST_BE_DOUBLE),
            AttributeSpec::required(
                "stddev",
                AttributeKind::Double,
                DISTRIB_NORMAL_DISTRIBUTION_STDDEV_MUST_BE_DOUBLE,
            ),
        ],
    }],
};

#[derive(Debug, Clone, PartialEq)]
pub struct NormalDistribution {
    core: SBaseCore,
    id: String,
    name: String,
    mean: Option<f64>,
    stddev: Option<f64>,
}

impl NormalDistribution {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Distrib, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            mean: None,
            stddev: None,
        }
    }

    id_name_accessors!();

    double_accessors! {
        mean, is_set_mean, set_mean, unset_mean;
        stddev, is_set_stddev, set_stddev, unset_stddev;
    }
}

impl Default for NormalDistribution {
    fn default() -> Self {
        Self::with_namespaces(Package::Distrib.default_namespaces())
    }
}

impl SBase for NormalDistribution {
    fn type_code(&self) -> TypeCode {
        TypeCode::DistribNormalDistribution
    }

    fn schema(&self) -> &'static ElementSchema {
        &NORMAL_DISTRIBUTION_SCHEMA
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
        self.mean = reader.double("mean");
        self.stddev = reader.double("stddev");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if let Some(mean) = self.mean {
            attributes.add("mean", format_double(mean));
        }
        if let Some(stddev) = self.stddev {
            attributes.add("stddev", format_double(stddev));
        }
    }
}

// --- uniformDistribution ---

pub static UNIFORM_DISTRIBUTION_SCHEMA: ElementSchema = ElementSchema {
    element: "uniformDistribution",
    errors: ElementErrors {
        allowed_core_attributes: DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_ATTRIBUTES,
        allowed_elements: DISTRIB_UNIFORM_DISTRIBUTION_ALLOWED_CORE_ELEMENTS,
        id_syntax: DISTRIB_ID_SYNTAX_RULE,
        duplicate_id: DISTRIB_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, DISTRIB_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, DISTRIB_UNIFORM_DISTRIBUTION_NAME_MUST_BE_STRING),
            AttributeSpec::required("low", AttributeKind::Double, DISTRIB_UNIFORM_DISTRIBUTION_LOW_MUST_BE_DOUBLE),
            AttributeSpec::required("high", AttributeKind::Double, DISTRIB_UNIFORM_DISTRIBUTION_HIGH_MUST_BE_DOUBLE),
        ],
    }],
};

#[derive(Debug, Clone, PartialEq)]
pub struct UniformDistribution {
    core: SBaseCore,
    id: String,
    name: String,
    low: Option<f64>,
    high: Option<f64>,
}

impl UniformDistribution {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Distrib, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            low: None,
            high: None,
        }
    }

    id_name_accessors!();

    double_accessors! {
        low, is_set_low, set_low, unset_low;
        high, is_set_high, set_high, unset_high;
    }
}

impl Default for UniformDistribution {
    fn default() -> Self {
        Self::with_namespaces(Package::Distrib.default_namespaces())
    }
}

impl SBase for UniformDistribution {
    fn type_code(&self) -> TypeCode {
        TypeCode::DistribUniformDistribution
    }

    fn schema(&self) -> &'static ElementSchema {
        &UNIFORM_DISTRIBUTION_SCHEMA
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
        self.low = reader.double("low");
        self.high = reader.double("high");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if let Some(low) = self.low {
            attributes.add("low", format_double(low));
        }
        if let Some(high) = self.high {
            attributes.add("high", format_double(high));
        }
    }
}

// --- poissonDistribution ---

pub static POISSON_DISTRIBUTION_SCHEMA: ElementSchema = ElementSchema {
    element: "poissonDistribution",
    errors: ElementErrors {
        allowed_core_attributes: DISTRIB_POISSON_DISTRIBUTION_ALLOWED_CORE_ATTRIBUTES,
        allowed_core_elements: DISTRIB_POISSON_DISTRIBUTION_ALLOWED_CORE_ELEMENTS,
        allowed_attributes: DISTRIB_POISSON_DISTRIBUTION_ALLOWED_ATTRIBUTES,
        allowed_elements: DISTRIB_POISSON_DISTRIBUTION_ALLOWED_CORE_ELEMENTS,
        id_syntax: DISTRIB_ID_SYNTAX_RULE,
        duplicate_id: DISTRIB_DUPLICATE_COMPONENT_ID,
    },
    rows: &[SchemaRow {
        level: 3,
        versions: (1, 2),
        pkg_version: Some(1),
        attributes: &[
            AttributeSpec::optional("id", AttributeKind::SId, DISTRIB_ID_SYNTAX_RULE),
            AttributeSpec::optional("name", AttributeKind::String, DISTRIB_POISSON_DISTRIBUTION_NAME_MUST_BE_STRING),
            AttributeSpec::required("rate", AttributeKind::Double, DISTRIB_POISSON_DISTRIBUTION_RATE_MUST_BE_DOUBLE),
        ],
    }],
};

#[derive(Debug, Clone, PartialEq)]
pub struct PoissonDistribution {
    core: SBaseCore,
    id: String,
    name: String,
    rate: Option<f64>,
}

impl PoissonDistribution {
    pub fn new(level: u32, version: u32, pkg_version: u32) -> Self {
        Self::with_namespaces(Namespaces::sbml(level, version).with_package(Package::Distrib, pkg_version))
    }

    pub fn with_namespaces(namespaces: Namespaces) -> Self {
        Self {
            core: SBaseCore::new(namespaces),
            id: String::new(),
            name: String::new(),
            rate: None,
        }
    }

    id_name_accessors!();

    double_accessors! {
        rate, is_set_rate, set_rate, unset_rate;
    }
}

impl Default for PoissonDistribution {
    fn default() -> Self {
        Self::with_namespaces(Package::Distrib.default_namespaces())
    }
}

impl SBase for PoissonDistribution {
    fn type_code(&self) -> TypeCode {
        TypeCode::DistribPoissonDistribution
    }

    fn schema(&self) -> &'static ElementSchema {
        &POISSON_DISTRIBUTION_SCHEMA
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
        self.rate = reader.double("rate");
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        if self.is_set_id() {
            attributes.add("id", &self.id);
        }
        if self.is_set_name() {
            attributes.add("name", &self.name);
        }
        if let Some(rate) = self.rate {
            attributes.add("rate", format_double(rate));
        }
    }
}

// --- Variant ---

/// A univariate probability distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Normal(NormalDistribution),
    Uniform(UniformDistribution),
    Poisson(PoissonDistribution),
}

impl Distribution {
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal(_))
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self, Self::Uniform(_))
    }

    pub fn is_poisson(&self) -> bool {
        matches!(self, Self::Poisson(_))
    }

    pub fn as_normal(&self) -> Option<&NormalDistribution> {
        match self {
            Self::Normal(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_normal_mut(&mut self) -> Option<&mut NormalDistribution> {
        match self {
            Self::Normal(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_uniform(&self) -> Option<&UniformDistribution> {
        match self {
            Self::Uniform(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_uniform_mut(&mut self) -> Option<&mut UniformDistribution> {
        match self {
            Self::Uniform(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_poisson(&self) -> Option<&PoissonDistribution> {
        match self {
            Self::Poisson(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_poisson_mut(&mut self) -> Option<&mut PoissonDistribution> {
        match self {
            Self::Poisson(d) => Some(d),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Normal(d) => d.id(),
            Self::Uniform(d) => d.id(),
            Self::Poisson(d) => d.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Normal(d) => d.name(),
            Self::Uniform(d) => d.name(),
            Self::Poisson(d) => d.name(),
        }
    }

    /// The expected value. NaN while a defining parameter is unset.
    pub fn mean(&self) -> f64 {
        match self {
            Self::Normal(d) => d.mean(),
            Self::Uniform(d) => (d.low() + d.high()) / 2.0,
            Self::Poisson(d) => d.rate(),
        }
    }

    /// The variance. NaN while a defining parameter is unset.
    pub fn variance(&self) -> f64 {
        match self {
            Self::Normal(d) => d.stddev() * d.stddev(),
            Self::Uniform(d) => {
                let width = d.high() - d.low();
                width * width / 12.0
            }
            Self::Poisson(d) => d.rate(),
        }
    }

    fn inner(&self) -> &dyn SBase {
        match self {
            Self::Normal(d) => d,
            Self::Uniform(d) => d,
            Self::Poisson(d) => d,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SBase {
        match self {
            Self::Normal(d) => d,
            Self::Uniform(d) => d,
            Self::Poisson(d) => d,
        }
    }
}

impl From<NormalDistribution> for Distribution {
    fn from(d: NormalDistribution) -> Self {
        Self::Normal(d)
    }
}

impl From<UniformDistribution> for Distribution {
    fn from(d: UniformDistribution) -> Self {
        Self::Uniform(d)
    }
}

impl From<PoissonDistribution> for Distribution {
    fn from(d: PoissonDistribution) -> Self {
        Self::Poisson(d)
    }
}

impl SBase for Distribution {
    fn type_code(&self) -> TypeCode {
        self.inner().type_code()
    }

    fn schema(&self) -> &'static ElementSchema {
        self.inner().schema()
    }

    fn core(&self) -> &SBaseCore {
        self.inner().core()
    }

    fn core_mut(&mut self) -> &mut SBaseCore {
        self.inner_mut().core_mut()
    }

    fn id_attribute(&self) -> Option<&str> {
        self.inner().id_attribute()
    }

    fn name_attribute(&self) -> Option<&str> {
        self.inner().name_attribute()
    }

    fn read_attributes(&mut self, reader: &mut AttributeReader<'_>) {
        self.inner_mut().read_attributes(reader);
    }

    fn write_attributes(&self, attributes: &mut XmlAttributes) {
        self.inner().write_attributes(attributes);
    }
}

impl ListItem for Distribution {
    fn create_item(name: &str, ns: &Namespaces) -> Option<Self> {
        match name {
            "normalDistribution" => Some(Self::Normal(NormalDistribution::with_namespaces(ns.clone()))),
            "uniformDistribution" => Some(Self::Uniform(UniformDistribution::with_namespaces(ns.clone()))),
            "poissonDistribution" => Some(Self::Poisson(PoissonDistribution::with_namespaces(ns.clone()))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorLog;
    use crate::node::XmlNode;
    use crate::sbase::{read_item, write_element};

    #[test]
    fn test_mean_per_variant() {
        let mut normal = NormalDistribution::default();
        normal.set_mean(4.0).unwrap();
        normal.set_stddev(0.5).unwrap();
        let normal = Distribution::from(normal);
        assert_eq!(normal.mean(), 4.0);
        assert_eq!(normal.variance(), 0.25);

        let mut uniform = UniformDistribution::default();
        uniform.set_low(2.0).unwrap();
        uniform.set_high(8.0).unwrap();
        let uniform = Distribution::from(uniform);
        assert_eq!(uniform.mean(), 5.0);
        assert_eq!(uniform.variance(), 3.0);

        let mut poisson = PoissonDistribution::default();
        poisson.set_rate(1.5).unwrap();
        assert_eq!(Distribution::from(poisson).mean(), 1.5);
    }

    #[test]
    fn test_unset_parameters_give_nan() {
        let d = Distribution::from(UniformDistribution::default());
        assert!(d.mean().is_nan());
        assert!(!d.has_required_attributes());
    }

    #[test]
    fn test_read_by_tag() {
        let mut node = XmlNode::new("poissonDistribution");
        node.set_prefix(Some("distrib"));
        node.attributes_mut().add_prefixed("distrib", "id", "arrivals");
        node.attributes_mut().add_prefixed("distrib", "rate", "NaN-ish");

        let ns = Package::Distrib.default_namespaces();
        let mut log = ErrorLog::new();
        let d: Option<Distribution> = read_item(&node, &ns, &mut log);
        let d = d.unwrap();
        assert!(d.is_poisson());
        assert_eq!(d.id(), "arrivals");
        assert!(log.contains(DISTRIB_POISSON_DISTRIBUTION_RATE_MUST_BE_DOUBLE));
    }

    #[test]
    fn test_written_with_prefix() {
        let mut normal = NormalDistribution::default();
        normal.set_id("noise").unwrap();
        normal.set_mean(0.0).unwrap();
        normal.set_stddev(1.0).unwrap();
        let node = write_element(&Distribution::from(normal));
        assert_eq!(node.qualified_name(), "distrib:normalDistribution");
        assert_eq!(node.attributes().get_prefixed("distrib", "stddev"), Some("1"));
    }
}

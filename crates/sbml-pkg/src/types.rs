// crates/sbml-pkg/src/types.rs

use core::fmt;

// --- Sentinels ---

/// Default value of an unset unsigned integer attribute, and the value the
/// C-API returns for unsigned getters on a null receiver.
pub const SBML_INT_MAX: u32 = i32::MAX as u32;

/// The SBO term number range accepted by `sboTerm`.
pub const SBO_TERM_MAX: u32 = 9_999_999;

// --- Type codes ---

/// Identifies the class of an element, independent of its XML tag.
///
/// Filters passed to [`crate::tree::get_all_elements`] and the C-API use this
/// instead of downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
    ListOf,

    // SBML core host
    SbmlDocument,
    Model,

    // vers
    VersClassOne,

    // tsb
    TsbAbc,
    TsbContainerY,

    // foo
    FooContainer,
    FooParent,

    // fbc
    FbcAnd,
    FbcOr,
    FbcGeneProductRef,
    FbcGeneProductAssociation,

    // spatial
    SpatialCsgPrimitive,
    SpatialCsgTranslation,
    SpatialCsgRotation,
    SpatialCsgScale,
    SpatialCsgSetOperator,

    // distrib
    DistribNormalDistribution,
    DistribUniformDistribution,
    DistribPoissonDistribution,

    // SED-ML
    SedDocument,
    SedModel,
    SedChangeAttribute,
    SedRemoveXml,
    SedAddXml,

    // COMBINE archive manifest
    CaOmexManifest,
    CaContent,
}

impl TypeCode {
    /// The libSBML-style type name (e.g. `"ClassOne"`, `"SedModel"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::ListOf => "ListOf",
            Self::SbmlDocument => "SBMLDocument",
            Self::Model => "Model",
            Self::VersClassOne => "ClassOne",
            Self::TsbAbc => "Abc",
            Self::TsbContainerY => "ContainerY",
            Self::FooContainer => "Container",
            Self::FooParent => "Parent",
            Self::FbcAnd => "FbcAnd",
            Self::FbcOr => "FbcOr",
            Self::FbcGeneProductRef => "GeneProductRef",
            Self::FbcGeneProductAssociation => "GeneProductAssociation",
            Self::SpatialCsgPrimitive => "CSGPrimitive",
            Self::SpatialCsgTranslation => "CSGTranslation",
            Self::SpatialCsgRotation => "CSGRotation",
            Self::SpatialCsgScale => "CSGScale",
            Self::SpatialCsgSetOperator => "CSGSetOperator",
            Self::DistribNormalDistribution => "NormalDistribution",
            Self::DistribUniformDistribution => "UniformDistribution",
            Self::DistribPoissonDistribution => "PoissonDistribution",
            Self::SedDocument => "SedDocument",
            Self::SedModel => "SedModel",
            Self::SedChangeAttribute => "SedChangeAttribute",
            Self::SedRemoveXml => "SedRemoveXML",
            Self::SedAddXml => "SedAddXML",
            Self::CaOmexManifest => "CaOmexManifest",
            Self::CaContent => "CaContent",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

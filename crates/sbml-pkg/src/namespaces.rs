// crates/sbml-pkg/src/namespaces.rs

//! Level/version/package namespace context carried by every element.
//!
//! An element is always constructed inside a [`Namespaces`] value. It picks
//! the schema row the element uses, the XML namespace URI and prefix it is
//! written with, and decides whether two elements may be combined in one
//! container.

use crate::status::{OperationError, OperationResult};
use alloc::format;
use alloc::string::String;
use core::fmt;

/// The document language an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    /// SBML Level 3 with optional packages.
    Sbml,
    /// SED-ML Level 1.
    SedMl,
    /// COMBINE archive manifest.
    Omex,
}

impl Host {
    pub fn name(self) -> &'static str {
        match self {
            Host::Sbml => "sbml",
            Host::SedMl => "sedml",
            Host::Omex => "combine",
        }
    }
}

/// The SBML Level 3 packages modelled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Package {
    Vers,
    Tsb,
    Foo,
    Fbc,
    Spatial,
    Distrib,
}

impl Package {
    /// All packages, in declaration order.
    pub const ALL: [Package; 6] = [
        Package::Vers,
        Package::Tsb,
        Package::Foo,
        Package::Fbc,
        Package::Spatial,
        Package::Distrib,
    ];

    /// The package short name, which is also its XML prefix.
    pub fn name(self) -> &'static str {
        match self {
            Package::Vers => "vers",
            Package::Tsb => "tsb",
            Package::Foo => "foo",
            Package::Fbc => "fbc",
            Package::Spatial => "spatial",
            Package::Distrib => "distrib",
        }
    }

    pub fn prefix(self) -> &'static str {
        self.name()
    }

    /// Package versions this crate knows the schema of.
    pub fn supported_versions(self) -> &'static [u32] {
        match self {
            Package::Vers => &[1, 2],
            Package::Fbc => &[1, 2],
            Package::Tsb | Package::Foo | Package::Spatial | Package::Distrib => &[1],
        }
    }

    pub fn default_version(self) -> u32 {
        match self {
            Package::Fbc => 2,
            _ => 1,
        }
    }

    /// Base of the package's error code range.
    pub const fn error_offset(self) -> u32 {
        match self {
            Package::Vers => 9_100_000,
            Package::Tsb => 9_200_000,
            Package::Foo => 9_300_000,
            Package::Fbc => 2_000_000,
            Package::Spatial => 1_200_000,
            Package::Distrib => 1_500_000,
        }
    }

    /// The value the package specification mandates for `prefix:required`.
    pub fn required_value(self) -> bool {
        matches!(self, Package::Spatial | Package::Distrib)
    }

    /// Looks a package up by its short name.
    pub fn from_name(name: &str) -> Option<Package> {
        Package::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// The package namespace URI for the given SBML level/version and package version.
    pub fn uri(self, level: u32, version: u32, pkg_version: u32) -> String {
        format!(
            "http://www.sbml.org/sbml/level{}/version{}/{}/version{}",
            level,
            version,
            self.name(),
            pkg_version
        )
    }

    /// Splits a package namespace URI into `(package, level, version, pkg_version)`.
    ///
    /// Returns `None` for core URIs and for packages this crate does not model.
    pub fn from_uri(uri: &str) -> Option<(Package, u32, u32, u32)> {
        let rest = uri.strip_prefix("http://www.sbml.org/sbml/level")?;
        let mut parts = rest.split('/');
        let level = parts.next()?.parse().ok()?;
        let version = parts.next()?.strip_prefix("version")?.parse().ok()?;
        let package = Package::from_name(parts.next()?)?;
        let pkg_version = parts.next()?.strip_prefix("version")?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some((package, level, version, pkg_version))
    }

    /// The namespaces a freshly default-constructed element of this package uses:
    /// SBML Level 3 Version 1 with the package's default version.
    pub fn default_namespaces(self) -> Namespaces {
        Namespaces::sbml(3, 1).with_package(self, self.default_version())
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A package together with the version in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageVersion {
    pub package: Package,
    pub version: u32,
}

/// The namespace context of an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespaces {
    host: Host,
    level: u32,
    version: u32,
    package: Option<PackageVersion>,
}

impl Namespaces {
    /// SBML core namespaces.
    pub fn sbml(level: u32, version: u32) -> Self {
        Self {
            host: Host::Sbml,
            level,
            version,
            package: None,
        }
    }

    /// SED-ML namespaces.
    pub fn sedml(level: u32, version: u32) -> Self {
        Self {
            host: Host::SedMl,
            level,
            version,
            package: None,
        }
    }

    /// The COMBINE archive manifest namespace (only Level 1 Version 1 exists).
    pub fn omex() -> Self {
        Self::omex_with(1, 1)
    }

    /// Manifest namespaces for an arbitrary level and version, which
    /// [`Namespaces::check_supported`] then rejects unless they are 1 and 1.
    pub fn omex_with(level: u32, version: u32) -> Self {
        Self {
            host: Host::Omex,
            level,
            version,
            package: None,
        }
    }

    /// Returns a copy of these namespaces with the given package enabled.
    pub fn with_package(mut self, package: Package, pkg_version: u32) -> Self {
        self.package = Some(PackageVersion {
            package,
            version: pkg_version,
        });
        self
    }

    /// Returns a copy of these namespaces without any package.
    pub fn core_only(&self) -> Self {
        Self {
            package: None,
            ..self.clone()
        }
    }

    pub fn host(&self) -> Host {
        self.host
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn package(&self) -> Option<Package> {
        self.package.map(|p| p.package)
    }

    /// The package version, or `0` for core namespaces.
    pub fn package_version(&self) -> u32 {
        self.package.map(|p| p.version).unwrap_or(0)
    }

    /// The core namespace URI of the host language.
    pub fn uri(&self) -> String {
        match self.host {
            Host::Sbml => format!(
                "http://www.sbml.org/sbml/level{}/version{}/core",
                self.level, self.version
            ),
            Host::SedMl => format!(
                "http://sed-ml.org/sed-ml/level{}/version{}",
                self.level, self.version
            ),
            Host::Omex => "http://identifiers.org/combine.specifications/omex-manifest".into(),
        }
    }

    /// The package namespace URI, if a package is enabled.
    pub fn package_uri(&self) -> Option<String> {
        self.package
            .map(|p| p.package.uri(self.level, self.version, p.version))
    }

    /// Builds core namespaces from a core namespace URI.
    pub fn from_core_uri(uri: &str) -> Option<Self> {
        if uri == "http://identifiers.org/combine.specifications/omex-manifest" {
            return Some(Self::omex());
        }
        // The first SED-ML release used a bare URI.
        if uri == "http://sed-ml.org/" {
            return Some(Self::sedml(1, 1));
        }
        if let Some(rest) = uri.strip_prefix("http://sed-ml.org/sed-ml/level") {
            let (level, version) = parse_level_version(rest)?;
            return Some(Self::sedml(level, version));
        }
        let rest = uri.strip_prefix("http://www.sbml.org/sbml/level")?;
        let rest = rest.strip_suffix("/core")?;
        let (level, version) = parse_level_version(rest)?;
        Some(Self::sbml(level, version))
    }

    /// The prefix elements in these namespaces are written with.
    ///
    /// Only SBML package elements carry a prefix; core elements and the
    /// SED-ML/OMEX languages use the default namespace.
    pub fn element_prefix(&self) -> Option<&'static str> {
        match (self.host, self.package) {
            (Host::Sbml, Some(p)) => Some(p.package.prefix()),
            _ => None,
        }
    }

    /// Checks the level, version and package version against what this crate supports.
    pub fn check_supported(&self) -> OperationResult {
        let (level, versions) = match self.host {
            Host::Sbml => (3, 1..=2),
            Host::SedMl => (1, 1..=4),
            Host::Omex => (1, 1..=1),
        };
        if self.level != level {
            return Err(OperationError::LevelMismatch);
        }
        if !versions.contains(&self.version) {
            return Err(OperationError::VersionMismatch);
        }
        match (self.host, self.package) {
            (_, None) => Ok(()),
            (Host::Sbml, Some(p)) => {
                if p.package.supported_versions().contains(&p.version) {
                    Ok(())
                } else {
                    Err(OperationError::PkgUnknownVersion)
                }
            }
            (_, Some(_)) => Err(OperationError::NamespacesMismatch),
        }
    }

    /// Returns `true` if an element in `other` may be added to a container in `self`
    /// beyond the level/version checks: same host language, same package and
    /// package version.
    pub fn matches_for_addition(&self, other: &Namespaces) -> bool {
        self.host == other.host && self.package == other.package
    }
}

fn parse_level_version(s: &str) -> Option<(u32, u32)> {
    let (level, version) = s.split_once("/version")?;
    Some((level.parse().ok()?, version.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_uri_round_trip() {
        let uri = Package::Vers.uri(3, 1, 2);
        assert_eq!(uri, "http://www.sbml.org/sbml/level3/version1/vers/version2");
        assert_eq!(Package::from_uri(&uri), Some((Package::Vers, 3, 1, 2)));
        assert_eq!(Package::from_uri("http://www.sbml.org/sbml/level3/version1/core"), None);
        assert_eq!(
            Package::from_uri("http://www.sbml.org/sbml/level3/version1/render/version1"),
            None
        );
    }

    #[test]
    fn test_core_uri_round_trip() {
        for ns in [Namespaces::sbml(3, 2), Namespaces::sedml(1, 3), Namespaces::omex()] {
            assert_eq!(Namespaces::from_core_uri(&ns.uri()), Some(ns));
        }
        assert_eq!(Namespaces::from_core_uri("http://sed-ml.org/"), Some(Namespaces::sedml(1, 1)));
    }

    #[test]
    fn test_check_supported() {
        assert_eq!(Namespaces::sbml(3, 1).check_supported(), Ok(()));
        assert_eq!(Namespaces::sbml(2, 4).check_supported(), Err(OperationError::LevelMismatch));
        assert_eq!(Namespaces::sbml(3, 3).check_supported(), Err(OperationError::VersionMismatch));
        assert_eq!(
            Namespaces::sbml(3, 1).with_package(Package::Vers, 3).check_supported(),
            Err(OperationError::PkgUnknownVersion)
        );
        assert_eq!(
            Namespaces::sedml(1, 4).with_package(Package::Fbc, 2).check_supported(),
            Err(OperationError::NamespacesMismatch)
        );
    }

    #[test]
    fn test_element_prefix_only_for_sbml_packages() {
        assert_eq!(Package::Fbc.default_namespaces().element_prefix(), Some("fbc"));
        assert_eq!(Namespaces::sbml(3, 1).element_prefix(), None);
        assert_eq!(Namespaces::sedml(1, 4).element_prefix(), None);
    }

    #[test]
    fn test_matches_for_addition() {
        let v1 = Package::Vers.default_namespaces();
        let v2 = Namespaces::sbml(3, 1).with_package(Package::Vers, 2);
        assert!(v1.matches_for_addition(&v1.clone()));
        assert!(!v1.matches_for_addition(&v2));
        assert!(!v1.matches_for_addition(&Namespaces::sbml(3, 1)));
    }
}

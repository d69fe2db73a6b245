//! Specifications, vendor products, and their versions.

use std::fmt;
use std::str::FromStr;

/// A W3C specification or a vendor product that defines syntax.
///
/// Variants are ordered; [`Requirement`](crate::Requirement) keeps its
/// alternatives sorted by this order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpecId {
    XQuery,
    UpdateFacility,
    FullText,
    Scripting,
    BaseX,
    EXist,
    MarkLogic,
    Saxon,
}

impl SpecId {
    pub const ALL: &'static [SpecId] = &[
        SpecId::XQuery,
        SpecId::UpdateFacility,
        SpecId::FullText,
        SpecId::Scripting,
        SpecId::BaseX,
        SpecId::EXist,
        SpecId::MarkLogic,
        SpecId::Saxon,
    ];

    /// Identifier used in dialect strings.
    pub fn id(self) -> &'static str {
        match self {
            SpecId::XQuery => "xquery",
            SpecId::UpdateFacility => "update",
            SpecId::FullText => "fulltext",
            SpecId::Scripting => "scripting",
            SpecId::BaseX => "basex",
            SpecId::EXist => "exist",
            SpecId::MarkLogic => "marklogic",
            SpecId::Saxon => "saxon",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SpecId::XQuery => "XQuery",
            SpecId::UpdateFacility => "XQuery Update Facility",
            SpecId::FullText => "XQuery and XPath Full Text",
            SpecId::Scripting => "XQuery Scripting Extension",
            SpecId::BaseX => "BaseX",
            SpecId::EXist => "eXist-db",
            SpecId::MarkLogic => "MarkLogic",
            SpecId::Saxon => "Saxon",
        }
    }

    /// W3C specifications, as opposed to vendor products.
    pub fn is_w3c(self) -> bool {
        matches!(
            self,
            SpecId::XQuery | SpecId::UpdateFacility | SpecId::FullText | SpecId::Scripting
        )
    }
}

impl fmt::Display for SpecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown specification or product `{0}`")]
pub struct SpecIdError(pub String);

impl FromStr for SpecId {
    type Err = SpecIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let spec = match lower.as_str() {
            "xquery" | "xq" => SpecId::XQuery,
            "update" | "xquf" => SpecId::UpdateFacility,
            "fulltext" | "full-text" | "ft" => SpecId::FullText,
            "scripting" | "sx" => SpecId::Scripting,
            "basex" => SpecId::BaseX,
            "exist" | "exist-db" => SpecId::EXist,
            "marklogic" | "ml" => SpecId::MarkLogic,
            "saxon" => SpecId::Saxon,
            _ => return Err(SpecIdError(s.to_owned())),
        };
        Ok(spec)
    }
}

/// `major.minor` version number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16) -> Self {
        Version { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("empty version")]
    Empty,
    #[error("invalid version `{0}` (expected `major` or `major.minor`)")]
    Invalid(String),
}

/// Parses `"3"`, `"3.1"`; a third component (`"9.1.2"`) is ignored.
impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionError::Empty);
        }
        let invalid = || VersionError::Invalid(s.to_owned());
        let mut parts = s.split('.');
        let major = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let minor = match parts.next() {
            Some(p) => p.parse().map_err(|_| invalid())?,
            None => 0,
        };
        if let Some(patch) = parts.next() {
            patch.parse::<u16>().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Version { major, minor })
    }
}

/// A specification at a particular version.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecVersion {
    pub spec: SpecId,
    pub version: Version,
}

impl SpecVersion {
    pub const XQUERY_1_0: SpecVersion = SpecVersion::new(SpecId::XQuery, 1, 0);
    pub const XQUERY_3_0: SpecVersion = SpecVersion::new(SpecId::XQuery, 3, 0);
    pub const XQUERY_3_1: SpecVersion = SpecVersion::new(SpecId::XQuery, 3, 1);
    pub const UPDATE_1_0: SpecVersion = SpecVersion::new(SpecId::UpdateFacility, 1, 0);
    pub const UPDATE_3_0: SpecVersion = SpecVersion::new(SpecId::UpdateFacility, 3, 0);
    pub const FULL_TEXT_1_0: SpecVersion = SpecVersion::new(SpecId::FullText, 1, 0);
    pub const FULL_TEXT_3_0: SpecVersion = SpecVersion::new(SpecId::FullText, 3, 0);
    pub const SCRIPTING_1_0: SpecVersion = SpecVersion::new(SpecId::Scripting, 1, 0);

    pub const fn new(spec: SpecId, major: u16, minor: u16) -> Self {
        SpecVersion {
            spec,
            version: Version::new(major, minor),
        }
    }

    /// Whether this (supported) version is at least `required`.
    pub fn covers(self, required: SpecVersion) -> bool {
        self.spec == required.spec && self.version >= required.version
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.spec, self.version)
    }
}

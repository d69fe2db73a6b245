//! The active dialect: the configuration conformance is checked against.
//!
//! A dialect names a product (a vendor release, or a bare W3C
//! specification) and every specification it supports. The textual form is
//! `<spec>/<version>` for the product, followed by `+<spec>/<version>` for
//! each additional extension:
//!
//! ```text
//! xquery/3.1
//! basex/9.1
//! xquery/3.0+update/1.0+fulltext/1.0
//! ```

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::{SpecId, SpecIdError, SpecVersion, Version, VersionError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    #[error("empty dialect")]
    Empty,
    #[error("`{0}` is missing a version (expected `<spec>/<version>`)")]
    MissingVersion(String),
    #[error(transparent)]
    Spec(#[from] SpecIdError),
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// Supported specifications, product first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<SpecVersion>", into = "Vec<SpecVersion>")
)]
pub struct Dialect {
    specs: SmallVec<[SpecVersion; 6]>,
}

impl Dialect {
    /// A dialect supporting `product` and whatever that product implements.
    ///
    /// Vendor releases bring the W3C versions they implement; a W3C
    /// extension specification brings the XQuery version it extends.
    pub fn for_product(product: SpecVersion) -> Self {
        let mut dialect = Dialect {
            specs: SmallVec::new(),
        };
        dialect.specs.push(product);
        for &implied in implied_specs(product) {
            dialect.add(implied);
        }
        dialect
    }

    /// Add (or raise the version of) a supported specification.
    #[must_use]
    pub fn with(mut self, spec: SpecVersion) -> Self {
        self.add(spec);
        self
    }

    fn add(&mut self, spec: SpecVersion) {
        if let Some(existing) = self.specs.iter_mut().find(|s| s.spec == spec.spec) {
            if spec.version > existing.version {
                existing.version = spec.version;
            }
        } else {
            self.specs.push(spec);
        }
    }

    pub fn product(&self) -> SpecVersion {
        self.specs[0]
    }

    /// Every supported specification, product first.
    pub fn specs(&self) -> &[SpecVersion] {
        &self.specs
    }

    /// The supported version of `spec`, if any.
    pub fn version_of(&self, spec: SpecId) -> Option<Version> {
        self.specs.iter().find(|s| s.spec == spec).map(|s| s.version)
    }

    /// Whether `required` (same spec, at least that version) is supported.
    pub fn supports(&self, required: SpecVersion) -> bool {
        self.specs.iter().any(|s| s.covers(required))
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::for_product(SpecVersion::XQUERY_3_1)
    }
}

/// `basex/9.1 (XQuery 3.1, XQuery Update Facility 3.0, ...)` style summary.
impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let product = self.product();
        write!(f, "{}/{}", product.spec.id(), product.version)?;
        for extra in &self.specs[1..] {
            write!(f, "+{}/{}", extra.spec.id(), extra.version)?;
        }
        Ok(())
    }
}

/// The product is the first entry. No implied specifications are added; the
/// list is taken as complete, with repeated specs merged at the highest
/// version.
impl TryFrom<Vec<SpecVersion>> for Dialect {
    type Error = DialectError;

    fn try_from(specs: Vec<SpecVersion>) -> Result<Self, Self::Error> {
        let mut specs = specs.into_iter();
        let product = specs.next().ok_or(DialectError::Empty)?;
        let mut dialect = Dialect {
            specs: SmallVec::new(),
        };
        dialect.specs.push(product);
        for spec in specs {
            dialect.add(spec);
        }
        Ok(dialect)
    }
}

impl From<Dialect> for Vec<SpecVersion> {
    fn from(dialect: Dialect) -> Self {
        dialect.specs.into_vec()
    }
}

impl FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('+').map(str::trim).filter(|p| !p.is_empty());
        let product = parts.next().ok_or(DialectError::Empty)?;
        let mut dialect = Dialect::for_product(parse_spec_version(product)?);
        for part in parts {
            dialect.add(parse_spec_version(part)?);
        }
        Ok(dialect)
    }
}

fn parse_spec_version(text: &str) -> Result<SpecVersion, DialectError> {
    let Some((spec, version)) = text.split_once('/') else {
        return Err(DialectError::MissingVersion(text.to_owned()));
    };
    Ok(SpecVersion {
        spec: spec.parse()?,
        version: version.parse()?,
    })
}

/// W3C specifications a product release implements.
fn implied_specs(product: SpecVersion) -> &'static [SpecVersion] {
    const XQ10: SpecVersion = SpecVersion::XQUERY_1_0;
    const XQ30: SpecVersion = SpecVersion::XQUERY_3_0;
    const XQ31: SpecVersion = SpecVersion::XQUERY_3_1;
    const UF10: SpecVersion = SpecVersion::UPDATE_1_0;
    const UF30: SpecVersion = SpecVersion::UPDATE_3_0;
    const FT10: SpecVersion = SpecVersion::FULL_TEXT_1_0;
    const FT30: SpecVersion = SpecVersion::FULL_TEXT_3_0;

    let major = product.version.major;
    match product.spec {
        SpecId::XQuery => &[],
        SpecId::UpdateFacility | SpecId::FullText | SpecId::Scripting => &[XQ10],
        SpecId::BaseX if major >= 8 => &[XQ31, UF30, FT30],
        SpecId::BaseX if major >= 7 => &[XQ30, UF10, FT10],
        SpecId::BaseX => &[XQ10, UF10, FT10],
        SpecId::Saxon if product.version >= Version::new(9, 7) => &[XQ31, UF10],
        SpecId::Saxon if product.version >= Version::new(9, 3) => &[XQ30, UF10],
        SpecId::Saxon => &[XQ10],
        SpecId::EXist if major >= 3 => &[XQ31],
        SpecId::EXist => &[XQ30],
        SpecId::MarkLogic => &[XQ10],
    }
}

//! Disjunctive conformance requirements.

use std::fmt;
use std::ops::BitOr;

use smallvec::SmallVec;

use crate::{Dialect, SpecVersion};

/// A set of `(spec, minimum version)` alternatives, any one of which makes
/// a construct legal.
///
/// Alternatives are kept sorted by spec with a single (lowest) version per
/// spec, so two requirements built from the same alternatives in any order
/// compare equal. The empty requirement is always satisfied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Requirement {
    alternatives: SmallVec<[SpecVersion; 4]>,
}

impl Requirement {
    /// The always-satisfied requirement.
    pub fn none() -> Self {
        Self::default()
    }

    /// Requires `spec` at `spec.version` or later.
    pub fn new(spec: SpecVersion) -> Self {
        let mut alternatives = SmallVec::new();
        alternatives.push(spec);
        Requirement { alternatives }
    }

    pub fn alternatives(&self) -> &[SpecVersion] {
        &self.alternatives
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// Union of both alternative sets.
    #[must_use]
    pub fn or(mut self, other: &Requirement) -> Requirement {
        for &alt in &other.alternatives {
            self.insert(alt);
        }
        self
    }

    fn insert(&mut self, alt: SpecVersion) {
        match self
            .alternatives
            .binary_search_by(|probe| probe.spec.cmp(&alt.spec))
        {
            Ok(i) => {
                let existing = &mut self.alternatives[i];
                if alt.version < existing.version {
                    existing.version = alt.version;
                }
            }
            Err(i) => self.alternatives.insert(i, alt),
        }
    }

    /// Whether `dialect` supports at least one alternative.
    pub fn satisfied_by(&self, dialect: &Dialect) -> bool {
        self.alternatives.is_empty() || self.alternatives.iter().any(|&alt| dialect.supports(alt))
    }
}

impl From<SpecVersion> for Requirement {
    fn from(spec: SpecVersion) -> Self {
        Requirement::new(spec)
    }
}

impl BitOr for Requirement {
    type Output = Requirement;

    fn bitor(self, rhs: Requirement) -> Requirement {
        self.or(&rhs)
    }
}

impl BitOr<SpecVersion> for Requirement {
    type Output = Requirement;

    fn bitor(self, rhs: SpecVersion) -> Requirement {
        self.or(&Requirement::new(rhs))
    }
}

impl BitOr for SpecVersion {
    type Output = Requirement;

    fn bitor(self, rhs: SpecVersion) -> Requirement {
        Requirement::new(self).or(&Requirement::new(rhs))
    }
}

impl FromIterator<SpecVersion> for Requirement {
    fn from_iter<I: IntoIterator<Item = SpecVersion>>(iter: I) -> Self {
        let mut req = Requirement::none();
        for alt in iter {
            req.insert(alt);
        }
        req
    }
}

/// `XQuery 3.0 or later, or MarkLogic 6.0 or later`
impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alternatives.is_empty() {
            return f.write_str("nothing");
        }
        for (i, alt) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(", or ")?;
            }
            write!(f, "{alt} or later")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;

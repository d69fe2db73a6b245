use super::*;
use crate::SpecId;
use pretty_assertions::assert_eq;

const ML6: SpecVersion = SpecVersion::new(SpecId::MarkLogic, 6, 0);
const ML7: SpecVersion = SpecVersion::new(SpecId::MarkLogic, 7, 0);

#[test]
fn union_keeps_lowest_version_per_spec() {
    let req = Requirement::new(SpecVersion::XQUERY_3_1) | SpecVersion::XQUERY_3_0 | ML7 | ML6;
    assert_eq!(req.alternatives(), &[SpecVersion::XQUERY_3_0, ML6]);
}

#[test]
fn union_is_order_insensitive() {
    let a = ML6 | SpecVersion::XQUERY_3_0;
    let b = SpecVersion::XQUERY_3_0 | ML6;
    assert_eq!(a, b);
    assert_eq!(a.clone().or(&a), a);
    assert_eq!(Requirement::none().or(&a), a);
}

#[test]
fn empty_requirement_is_always_satisfied() {
    let dialect = Dialect::for_product(SpecVersion::XQUERY_1_0);
    assert!(Requirement::none().satisfied_by(&dialect));
    assert!(Requirement::none().is_empty());
}

#[test]
fn any_alternative_satisfies() {
    let req = SpecVersion::XQUERY_3_0 | ML6;
    assert!(req.satisfied_by(&Dialect::for_product(ML7)));
    assert!(req.satisfied_by(&Dialect::for_product(SpecVersion::XQUERY_3_1)));
    assert!(!req.satisfied_by(&Dialect::for_product(SpecVersion::XQUERY_1_0)));
    assert!(!req.satisfied_by(&Dialect::for_product(SpecVersion::new(SpecId::MarkLogic, 5, 0))));
}

#[test]
fn display() {
    assert_eq!(
        (ML6 | SpecVersion::XQUERY_3_0).to_string(),
        "XQuery 3.0 or later, or MarkLogic 6.0 or later"
    );
    assert_eq!(Requirement::none().to_string(), "nothing");
}

#[test]
fn collect_from_iterator() {
    let req: Requirement = [ML7, SpecVersion::UPDATE_1_0, ML6].into_iter().collect();
    assert_eq!(req.alternatives(), &[SpecVersion::UPDATE_1_0, ML6]);
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_requirement {
    use super::super::Requirement;
    use crate::{SpecId, SpecVersion};
    use proptest::prelude::*;

    fn spec_version() -> impl Strategy<Value = SpecVersion> {
        (0..SpecId::ALL.len(), 0u16..12, 0u16..3)
            .prop_map(|(i, major, minor)| SpecVersion::new(SpecId::ALL[i], major, minor))
    }

    proptest! {
        #[test]
        fn union_is_commutative_and_associative(
            a in prop::collection::vec(spec_version(), 0..4),
            b in prop::collection::vec(spec_version(), 0..4),
            c in prop::collection::vec(spec_version(), 0..4),
        ) {
            let a: Requirement = a.into_iter().collect();
            let b: Requirement = b.into_iter().collect();
            let c: Requirement = c.into_iter().collect();
            prop_assert_eq!(a.clone().or(&b), b.clone().or(&a));
            prop_assert_eq!(a.clone().or(&b).or(&c), a.clone().or(&b.clone().or(&c)));
            prop_assert_eq!(a.clone().or(&a), a);
        }
    }
}

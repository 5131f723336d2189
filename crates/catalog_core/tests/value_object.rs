use catalog_core::{Uuid, ValueObject};

#[derive(Debug, Clone, PartialEq)]
struct StringValueObject {
    value: String,
}

impl ValueObject for StringValueObject {}

#[derive(Debug, Clone, PartialEq)]
struct ComplexValueObject {
    prop1: String,
    prop2: i64,
}

impl ValueObject for ComplexValueObject {}

// Same field shape as StringValueObject, different concrete type.
#[derive(Debug, Clone, PartialEq)]
struct OtherStringValueObject {
    value: String,
}

impl ValueObject for OtherStringValueObject {}

#[derive(Debug, Clone, PartialEq)]
struct Money {
    currency: StringValueObject,
    amount_cents: i64,
}

impl ValueObject for Money {}

fn text(value: &str) -> StringValueObject {
    StringValueObject {
        value: value.to_string(),
    }
}

#[test]
fn simple_value_objects_with_same_content_are_equal() {
    let a = text("test");
    let b = text("test");

    assert!(a.equals(Some(&b)));
    assert!(b.equals(Some(&a)));
    assert!(a.equals(Some(&a)));
}

#[test]
fn simple_value_objects_with_different_content_are_not_equal() {
    let a = text("test");
    let b = text("not test");

    assert!(!a.equals(Some(&b)));
    assert!(!a.equals(None));
}

#[test]
fn complex_value_objects_compare_every_field() {
    let a = ComplexValueObject {
        prop1: "test".to_string(),
        prop2: 1,
    };
    let same = a.clone();
    let other_prop1 = ComplexValueObject {
        prop1: "not test".to_string(),
        ..a.clone()
    };
    let other_prop2 = ComplexValueObject { prop2: 2, ..a.clone() };

    assert!(a.equals(Some(&same)));
    assert!(!a.equals(Some(&other_prop1)));
    assert!(!a.equals(Some(&other_prop2)));
    assert!(!a.equals(None));
}

#[test]
fn nested_value_objects_compare_by_value() {
    let a = Money {
        currency: text("BRL"),
        amount_cents: 1_000,
    };
    let b = Money {
        currency: text("BRL"),
        amount_cents: 1_000,
    };
    let c = Money {
        currency: text("USD"),
        amount_cents: 1_000,
    };

    assert!(a.equals(Some(&b)));
    assert!(!a.equals(Some(&c)));
}

#[test]
fn different_concrete_types_are_never_equal() {
    let a = text("test");
    let b = OtherStringValueObject {
        value: "test".to_string(),
    };

    assert!(!a.equals_dyn(&b));
    assert!(!b.equals_dyn(&a));
    assert!(a.equals_dyn(&text("test")));
}

#[test]
fn identifiers_are_value_objects() {
    let id = Uuid::parse("ef62c677-6499-4477-9848-d8c580a4d262").unwrap();
    let same = Uuid::parse("ef62c677-6499-4477-9848-d8c580a4d262").unwrap();

    assert!(id.equals(Some(&same)));
    assert!(!id.equals(Some(&Uuid::new())));
    assert!(!id.equals(None));
    assert!(!id.equals_dyn(&text("ef62c677-6499-4477-9848-d8c580a4d262")));
}

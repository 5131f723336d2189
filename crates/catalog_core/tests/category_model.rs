use catalog_core::{Category, CategoryCreateCommand, CategoryProps, Entity, Uuid};
use chrono::{Duration, Utc};

fn create(name: &str) -> Category {
    Category::create(CategoryCreateCommand {
        name: name.to_string(),
        ..CategoryCreateCommand::default()
    })
    .unwrap()
}

#[test]
fn create_sets_defaults() {
    let before = Utc::now();
    let category = create("Movie Name");

    assert_eq!(category.name(), "Movie Name");
    assert_eq!(category.description(), None);
    assert!(category.is_active());
    assert!(category.created_at() >= before);
    assert!(Uuid::parse(category.category_id().as_str()).is_ok());
}

#[test]
fn new_keeps_every_provided_value() {
    let category_id = Uuid::new();
    let created_at = Utc::now() - Duration::days(3);

    let category = Category::new(CategoryProps {
        category_id: Some(category_id.clone()),
        name: "Movie Name".to_string(),
        description: Some("Movie Description".to_string()),
        is_active: Some(false),
        created_at: Some(created_at),
    })
    .unwrap();

    assert_eq!(category.category_id(), &category_id);
    assert_eq!(category.description(), Some("Movie Description"));
    assert!(!category.is_active());
    assert_eq!(category.created_at(), created_at);
}

#[test]
fn equality_is_identity_only() {
    let original = create("Movie");
    let mut renamed = original.clone();
    renamed.change_name("Documentary").unwrap();
    renamed.deactivate();

    assert_eq!(original, renamed);
    assert!(original.same_identity(&renamed));
    assert_ne!(original, create("Movie"));
}

#[test]
fn mutators_change_state() {
    let mut category = create("Some Name");

    category.change_name("Other Name").unwrap();
    assert_eq!(category.name(), "Other Name");

    category
        .change_description(Some("Other Description".to_string()))
        .unwrap();
    assert_eq!(category.description(), Some("Other Description"));

    category.update("Third Name", None).unwrap();
    assert_eq!(category.name(), "Third Name");
    assert_eq!(category.description(), None);

    category.deactivate();
    assert!(!category.is_active());
    category.activate();
    assert!(category.is_active());
}

#[test]
fn empty_name_is_rejected() {
    let err = Category::create(CategoryCreateCommand::default()).unwrap_err();
    assert_eq!(err.field_errors("name"), ["name should not be empty"]);
}

#[test]
fn long_name_is_rejected() {
    let err = Category::create(CategoryCreateCommand {
        name: "t".repeat(256),
        ..CategoryCreateCommand::default()
    })
    .unwrap_err();
    assert_eq!(
        err.field_errors("name"),
        ["name must be shorter than or equal to 255 characters"]
    );

    assert!(Category::create(CategoryCreateCommand {
        name: "é".repeat(255),
        ..CategoryCreateCommand::default()
    })
    .is_ok());
}

#[test]
fn every_violation_of_every_field_is_reported() {
    let err = Category::create(CategoryCreateCommand {
        name: " ".repeat(300),
        description: Some("d".repeat(2001)),
        is_active: None,
    })
    .unwrap_err();

    assert_eq!(
        err.field_errors("name"),
        [
            "name should not be empty",
            "name must be shorter than or equal to 255 characters",
        ]
    );
    assert_eq!(
        err.field_errors("description"),
        ["description must be shorter than or equal to 2000 characters"]
    );
    assert_eq!(err.errors().len(), 2);
}

#[test]
fn rejected_mutation_leaves_category_unchanged() {
    let mut category = create("Movie");

    let err = category.change_name("").unwrap_err();
    assert!(err.contains("name", "name should not be empty"));
    assert_eq!(category.name(), "Movie");

    let err = category.update("Valid", Some("x".repeat(2001))).unwrap_err();
    assert!(err.field_errors("name").is_empty());
    assert_eq!(category.name(), "Movie");
    assert_eq!(category.description(), None);
}

#[test]
fn serializes_with_snake_case_fields() {
    let category = create("Movie");
    let json = serde_json::to_value(&category).unwrap();

    assert_eq!(json["category_id"], category.category_id().as_str());
    assert_eq!(json["name"], "Movie");
    assert_eq!(json["description"], serde_json::Value::Null);
    assert_eq!(json["is_active"], true);
    assert!(json["created_at"].is_string());
}

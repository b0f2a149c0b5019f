//! Registration-time invariants and the schema registry

use content_schema::blocks::BlockDef;
use content_schema::condition::Condition;
use content_schema::error::SchemaError;
use content_schema::field::{Choice, Field};
use content_schema::schema::{Schema, SchemaRegistry};
use content_schema::schemas::{hero, media_block};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_shipped_definitions_register() {
	// Arrange
	let mut registry = SchemaRegistry::new();

	// Act
	let pages = Schema::register(
		"pages",
		vec![hero(), Field::blocks("layout", vec![media_block()])],
	)
	.unwrap();
	registry.register(pages).unwrap();

	// Assert
	let schema = registry.get("pages").unwrap();
	assert!(schema.field("hero").is_some());
	assert!(schema.field("layout").is_some());
}

#[rstest]
fn test_duplicate_siblings_rejected_in_nested_group() {
	// Arrange - the collision is two levels down
	let fields = vec![Field::group(
		"banner",
		vec![Field::group(
			"cta",
			vec![Field::text("label"), Field::textarea("label")],
		)],
	)];

	// Act
	let err = Schema::register("pages", fields).unwrap_err();

	// Assert
	assert_eq!(
		err,
		SchemaError::DuplicateSiblingName {
			path: "pages.banner.cta".to_string(),
			name: "label".to_string(),
		}
	);
}

#[rstest]
fn test_duplicate_block_slugs_rejected() {
	let fields = vec![Field::blocks(
		"layout",
		vec![
			BlockDef::new("mediaBlock", vec![Field::text("a")]),
			BlockDef::new("mediaBlock", vec![Field::text("b")]),
		],
	)];

	let err = Schema::register("pages", fields).unwrap_err();

	assert!(matches!(
		err,
		SchemaError::DuplicateBlockSlug { slug, .. } if slug == "mediaBlock"
	));
}

#[rstest]
fn test_condition_against_missing_sibling_rejected() {
	// A typo in a gate's field name must not register silently
	let fields = vec![
		Field::select("type", vec![Choice::new("Home", "home")]),
		Field::checkbox("banner").with_condition(Condition::equals("tyep", "home")),
	];

	let err = Schema::register("pages", fields).unwrap_err();

	assert_eq!(
		err,
		SchemaError::UnknownConditionField {
			path: "pages.banner".to_string(),
			referenced: "tyep".to_string(),
		}
	);
}

#[rstest]
fn test_registry_duplicate_name_keeps_first() {
	// Arrange
	let mut registry = SchemaRegistry::new();
	registry
		.register(Schema::register("pages", vec![hero()]).unwrap())
		.unwrap();

	// Act
	let err = registry
		.register(Schema::register("pages", vec![Field::text("title")]).unwrap())
		.unwrap_err();

	// Assert
	assert_eq!(err, SchemaError::DuplicateSchemaName("pages".to_string()));
	assert!(registry.get("pages").unwrap().field("hero").is_some());
}

#[rstest]
fn test_registered_schema_serializes_declaratively() {
	// Arrange
	let schema = Schema::register("pages", vec![hero()]).unwrap();

	// Act
	let value = serde_json::to_value(&schema).unwrap();

	// Assert - kind tags, camelCase attributes, tagged conditions
	let hero = &value["fields"][0];
	assert_eq!(hero["type"], json!("group"));
	assert_eq!(hero["name"], json!("hero"));

	let type_field = &hero["fields"][0];
	assert_eq!(type_field["type"], json!("select"));
	assert_eq!(type_field["defaultValue"], json!("default"));
	assert_eq!(type_field["required"], json!(true));

	let full_background = &hero["fields"][1];
	assert_eq!(
		full_background["condition"],
		json!({"op": "equals", "field": "type", "value": "gradient"})
	);
}

#[rstest]
fn test_hero_buttons_offer_closed_block_set() {
	// Arrange
	let schema = Schema::register("pages", vec![hero()]).unwrap();
	let value = serde_json::to_value(&schema).unwrap();

	// Act - find the buttons field on the serialized hero
	let buttons = value["fields"][0]["fields"]
		.as_array()
		.unwrap()
		.iter()
		.find(|f| f["name"] == json!("buttons"))
		.unwrap();

	// Assert
	let slugs: Vec<&str> = buttons["blocks"]
		.as_array()
		.unwrap()
		.iter()
		.map(|b| b["slug"].as_str().unwrap())
		.collect();
	assert_eq!(slugs, vec!["link", "command"]);
	assert_eq!(buttons["labels"], json!({"singular": "Button", "plural": "Buttons"}));
}

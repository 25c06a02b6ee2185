//! Checkbox field processing tests
//!
//! Covers the rendered checkbox/marker pair, boolean and value-equality
//! bindings, and the shape of the splice.

use fieldbind_binding::{
	BindStatus, BindingResult, BindingService, FieldBindStatus, ModelBinding, ValueType,
};
use fieldbind_conf::{DialectSettings, FrameworkVersion};
use fieldbind_dom::{Element, NodeId, NodeTree};
use fieldbind_processors::{FIELD_BIND_STATUS_VARIABLE, FieldBindingDialect, ProcessorError};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

struct Page {
	tree: NodeTree,
	form: NodeId,
	field: NodeId,
}

impl Page {
	/// `<form><label/>{field}<button/></form>`
	fn with_field(field: Element) -> Self {
		let mut tree = NodeTree::new();
		let root = tree.root();
		let form = tree.append_element(root, Element::new("form")).unwrap();
		tree.append_element(form, Element::new("label")).unwrap();
		let field = tree.append_element(form, field).unwrap();
		tree.append_element(form, Element::new("button")).unwrap();
		Self { tree, form, field }
	}

	fn inner_html(&self) -> String {
		self.tree
			.children(self.form)
			.unwrap()
			.iter()
			.map(|child| self.tree.to_html(*child).unwrap())
			.collect()
	}
}

#[fixture]
fn dialect() -> FieldBindingDialect {
	FieldBindingDialect::new(DialectSettings::default(), FrameworkVersion::new(5, 3))
}

fn checkbox(expression: &str) -> Element {
	Element::new("input")
		.with_attribute("type", "checkbox")
		.with_attribute("th:field", expression)
}

fn boolean_binding(value: Value) -> ModelBinding {
	ModelBinding::new("user", json!({ "subscribed": value }))
		.with_type("subscribed", ValueType::Boolean)
}

#[rstest]
fn test_boolean_true_renders_checked_pair(dialect: FieldBindingDialect) {
	let mut page = Page::with_field(checkbox("*{subscribed}"));

	dialect
		.process(&mut page.tree, &boolean_binding(json!(true)))
		.unwrap();

	assert_eq!(
		page.inner_html(),
		concat!(
			"<label></label>",
			r#"<input type="checkbox" id="subscribed1" name="subscribed" value="true" checked="checked"/>"#,
			r#"<input type="hidden" name="_subscribed" value="on"/>"#,
			"<button></button>",
		)
	);
}

#[rstest]
fn test_boolean_false_omits_checked(dialect: FieldBindingDialect) {
	let mut page = Page::with_field(checkbox("*{subscribed}"));

	dialect
		.process(&mut page.tree, &boolean_binding(json!(false)))
		.unwrap();

	assert_eq!(
		page.inner_html(),
		concat!(
			"<label></label>",
			r#"<input type="checkbox" id="subscribed1" name="subscribed" value="true"/>"#,
			r#"<input type="hidden" name="_subscribed" value="on"/>"#,
			"<button></button>",
		)
	);
}

#[rstest]
#[case(json!("true"), true)]
#[case(json!("TRUE"), true)]
#[case(json!("yes"), false)]
#[case(json!("1"), false)]
#[case(json!(null), false)]
fn test_boolean_string_values_are_coerced(
	dialect: FieldBindingDialect,
	#[case] bound: Value,
	#[case] checked: bool,
) {
	let mut page = Page::with_field(checkbox("*{subscribed}"));

	dialect.process(&mut page.tree, &boolean_binding(bound)).unwrap();

	let input = page.tree.children(page.form).unwrap()[1];
	let element = page.tree.element(input).unwrap();
	assert_eq!(element.attribute("value"), Some("true"));
	assert_eq!(element.attribute("checked"), checked.then_some("checked"));
}

#[rstest]
fn test_optional_boolean_null_is_unchecked(dialect: FieldBindingDialect) {
	let binding = ModelBinding::new("user", json!({}))
		.with_type("subscribed", ValueType::OptionalBoolean);
	let mut page = Page::with_field(checkbox("*{subscribed}"));

	dialect.process(&mut page.tree, &binding).unwrap();

	let input = page.tree.children(page.form).unwrap()[1];
	assert!(!page.tree.element(input).unwrap().has_attribute("checked"));
}

#[rstest]
fn test_boolean_binding_ignores_literal_value(dialect: FieldBindingDialect) {
	let mut page = Page::with_field(checkbox("*{subscribed}").with_attribute("value", "yes"));

	dialect
		.process(&mut page.tree, &boolean_binding(json!(true)))
		.unwrap();

	let input = page.tree.children(page.form).unwrap()[1];
	assert_eq!(
		page.tree.to_html(input).unwrap(),
		r#"<input type="checkbox" value="true" id="subscribed1" name="subscribed" checked="checked"/>"#
	);
}

#[rstest]
#[case("sports", true)]
#[case("chess", false)]
fn test_value_binding_delegates_selection(
	dialect: FieldBindingDialect,
	#[case] literal: &str,
	#[case] checked: bool,
) {
	let binding = ModelBinding::new("user", json!({"hobbies": ["sports", "travel"]}));
	let mut page = Page::with_field(checkbox("*{hobbies}").with_attribute("value", literal));

	dialect.process(&mut page.tree, &binding).unwrap();

	let checked_attribute = if checked { r#" checked="checked""# } else { "" };
	assert_eq!(
		page.inner_html(),
		format!(
			concat!(
				"<label></label>",
				r#"<input type="checkbox" value="{literal}" id="hobbies1" name="hobbies"{checked}/>"#,
				r#"<input type="hidden" name="_hobbies" value="on"/>"#,
				"<button></button>",
			),
			literal = literal,
			checked = checked_attribute,
		)
	);
}

#[rstest]
fn test_value_binding_without_value_fails_before_mutation(dialect: FieldBindingDialect) {
	let binding = ModelBinding::new("user", json!({"hobbies": ["sports"]}));
	let mut page = Page::with_field(checkbox("*{hobbies}"));
	let children_before = page.tree.children(page.form).unwrap().to_vec();
	let html_before = page.inner_html();

	let result = dialect.process(&mut page.tree, &binding);

	match result {
		Err(error @ ProcessorError::MissingRequiredAttribute { .. }) => assert_eq!(
			error.to_string(),
			"Attribute \"value\" is required in \"input(checkbox)\" tags when binding to non-boolean values"
		),
		other => panic!("expected missing attribute error, got {:?}", other),
	}
	assert_eq!(page.tree.children(page.form).unwrap(), children_before.as_slice());
	assert_eq!(page.inner_html(), html_before);
}

#[rstest]
fn test_stray_checked_attribute_is_removed(dialect: FieldBindingDialect) {
	let mut page = Page::with_field(
		Element::new("input")
			.with_attribute("type", "checkbox")
			.with_attribute("checked", "checked")
			.with_attribute("th:field", "*{subscribed}"),
	);

	dialect
		.process(&mut page.tree, &boolean_binding(json!(false)))
		.unwrap();

	let input = page.tree.children(page.form).unwrap()[1];
	assert_eq!(
		page.tree.to_html(input).unwrap(),
		r#"<input type="checkbox" id="subscribed1" name="subscribed" value="true"/>"#
	);
}

#[rstest]
#[case(json!(true))]
#[case(json!(false))]
fn test_pair_takes_original_position(dialect: FieldBindingDialect, #[case] bound: Value) {
	let mut page = Page::with_field(checkbox("*{subscribed}"));
	let before = page.tree.children(page.form).unwrap().to_vec();

	dialect.process(&mut page.tree, &boolean_binding(bound)).unwrap();

	let after = page.tree.children(page.form).unwrap();
	assert_eq!(after.len(), before.len() + 1);
	assert_eq!(after[0], before[0]);
	assert_eq!(after[3], before[2]);
	assert!(!after.contains(&page.field));
	assert_eq!(page.tree.parent(page.field).unwrap(), None);

	let visible = page.tree.element(after[1]).unwrap();
	let hidden = page.tree.element(after[2]).unwrap();
	assert_eq!(visible.attribute("type"), Some("checkbox"));
	assert!(!visible.has_attribute("th:field"));
	assert_eq!(hidden.attribute("type"), Some("hidden"));
	assert_eq!(hidden.attribute("name"), Some("_subscribed"));
}

#[rstest]
fn test_local_variables_reach_both_outputs(dialect: FieldBindingDialect) {
	let mut page = Page::with_field(
		checkbox("*{subscribed}")
			.with_local_variable("row", json!(7))
			.with_local_variable("section", json!("prefs")),
	);

	dialect
		.process(&mut page.tree, &boolean_binding(json!(true)))
		.unwrap();

	let children = page.tree.children(page.form).unwrap();
	let visible = page.tree.element(children[1]).unwrap();
	let hidden = page.tree.element(children[2]).unwrap();
	assert_eq!(visible.local_variables(), hidden.local_variables());
	assert_eq!(visible.local_variable("row"), Some(&json!(7)));
	assert_eq!(visible.local_variable("section"), Some(&json!("prefs")));
	assert_eq!(
		visible.local_variable(FIELD_BIND_STATUS_VARIABLE),
		Some(&json!({"expression": "subscribed", "value": true, "errors": []}))
	);
}

#[rstest]
fn test_repeated_checkboxes_get_sequenced_ids(dialect: FieldBindingDialect) {
	let binding = ModelBinding::new("user", json!({"hobbies": ["chess"]}));
	let mut tree = NodeTree::new();
	let root = tree.root();
	for hobby in ["sports", "chess"] {
		tree.append_element(root, checkbox("*{hobbies}").with_attribute("value", hobby))
			.unwrap();
	}
	tree.append_element(
		root,
		checkbox("*{hobbies}")
			.with_attribute("value", "music")
			.with_attribute("id", "music-box"),
	)
	.unwrap();

	dialect.process(&mut tree, &binding).unwrap();

	let ids: Vec<_> = tree
		.find_elements(root, "input")
		.unwrap()
		.into_iter()
		.filter_map(|input| tree.element(input).unwrap().attribute("id").map(str::to_string))
		.collect();
	assert_eq!(ids, vec!["hobbies1", "hobbies2", "music-box"]);
}

#[rstest]
fn test_empty_expression_binds_whole_object(dialect: FieldBindingDialect) {
	let binding = ModelBinding::new("accepted", json!(true));
	let mut page = Page::with_field(checkbox("*{}"));

	dialect.process(&mut page.tree, &binding).unwrap();

	let children = page.tree.children(page.form).unwrap();
	assert_eq!(
		page.tree.to_html(children[1]).unwrap(),
		r#"<input type="checkbox" id="1" name="" value="true" checked="checked"/>"#
	);
	assert_eq!(
		page.tree.to_html(children[2]).unwrap(),
		r#"<input type="hidden" name="_" value="on"/>"#
	);
}

#[rstest]
fn test_custom_marker_prefix_and_directive_prefix() {
	let settings = DialectSettings::default()
		.with_prefix("data-th")
		.with_field_marker_prefix("!");
	let dialect = FieldBindingDialect::new(settings, FrameworkVersion::new(5, 0));
	let mut page = Page::with_field(
		Element::new("input")
			.with_attribute("type", "checkbox")
			.with_attribute("data-th:field", "*{subscribed}"),
	);

	dialect
		.process(&mut page.tree, &boolean_binding(json!(true)))
		.unwrap();

	let hidden = page.tree.children(page.form).unwrap()[2];
	assert_eq!(
		page.tree.element(hidden).unwrap().attribute("name"),
		Some("!subscribed")
	);
}

#[rstest]
fn test_uppercase_attribute_names_still_render_checkbox_pair(dialect: FieldBindingDialect) {
	let binding = ModelBinding::new("user", json!({"hobbies": ["a"]}));
	let mut page = Page::with_field(
		Element::new("INPUT")
			.with_attribute("TYPE", "checkbox")
			.with_attribute("th:field", "*{hobbies}")
			.with_attribute("VALUE", "a"),
	);

	dialect.process(&mut page.tree, &binding).unwrap();

	assert_eq!(
		page.inner_html(),
		concat!(
			"<label></label>",
			r#"<INPUT TYPE="checkbox" VALUE="a" id="hobbies1" name="hobbies" checked="checked"/>"#,
			r#"<input type="hidden" name="_hobbies" value="on"/>"#,
			"<button></button>",
		)
	);
}

/// Binding service that cannot name the bound expression
struct AnonymousBinding(Value);

impl BindingService for AnonymousBinding {
	fn bind_status(&self, _expression: &str) -> BindingResult<Box<dyn BindStatus>> {
		Ok(Box::new(FieldBindStatus::anonymous(
			self.0.clone(),
			ValueType::Boolean,
		)))
	}
}

#[rstest]
fn test_unknown_expression_renders_empty_name(dialect: FieldBindingDialect) {
	let mut page = Page::with_field(checkbox("*{whatever}"));

	dialect
		.process(&mut page.tree, &AnonymousBinding(json!(true)))
		.unwrap();

	let children = page.tree.children(page.form).unwrap();
	assert_eq!(
		page.tree.to_html(children[1]).unwrap(),
		r#"<input type="checkbox" id="1" name="" value="true" checked="checked"/>"#
	);
	assert_eq!(
		page.tree.to_html(children[2]).unwrap(),
		r#"<input type="hidden" name="_" value="on"/>"#
	);
	assert_eq!(
		page.tree
			.element(children[1])
			.unwrap()
			.local_variable(FIELD_BIND_STATUS_VARIABLE),
		Some(&json!({"expression": null, "value": true, "errors": []}))
	);
}

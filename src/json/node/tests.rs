use std::collections::BTreeMap;

use jsonnav_testkit::{SAMPLE_JSON, sample_reference};

use crate::json::{Error, Getter, Node, Result, Selector, Value, ValueKind, loads};

fn sample() -> Node {
	loads(SAMPLE_JSON.as_bytes()).expect("sample decodes")
}

#[test]
fn chained_lookup_returns_quoted_string() {
	let name = sample().get("Actors").index(0).get("name").string().expect("name serializes");
	assert_eq!(name, "\"Tom Cruise\"");
}

#[test]
fn scalars_serialize_in_json_form() {
	let actor = sample().get("Actors").index(0).expect("actor exists");

	assert_eq!(actor.get("age").string().expect("age"), "56");
	assert_eq!(actor.get("weight").string().expect("weight"), "67.5");
	assert_eq!(actor.get("hasChildren").string().expect("flag"), "true");
	assert_eq!(actor.get("hasGreyHair").string().expect("flag"), "false");
	assert_eq!(actor.get("wife").string().expect("null member"), "null");
}

#[test]
fn bytes_agree_with_string() {
	let root = sample();
	for node in [root.clone(), root.get("Actors").index(1).expect("actor")] {
		assert_eq!(node.bytes().expect("bytes"), node.string().expect("string").into_bytes());
	}
}

#[test]
fn missing_key_names_the_key() {
	let err = sample().get("Actors").index(0).get("names").expect_err("names is absent");
	assert_eq!(err, Error::KeyNotFound { key: "names".to_owned() });
	assert_eq!(err.to_string(), "key error: \"names\" not found");
}

#[test]
fn failure_short_circuits_the_rest_of_the_chain() {
	let err = sample().get("Cast").index(0).get("name").string().expect_err("chain fails early");
	assert_eq!(err, Error::KeyNotFound { key: "Cast".to_owned() });
}

#[test]
fn present_null_member_is_a_null_node() {
	let wife = sample().get("Actors").index(0).get("wife").expect("present null is not missing");
	assert_eq!(wife.kind(), ValueKind::Null);
	assert!(wife.value().is_null());
}

#[test]
fn index_past_end_is_out_of_range() {
	let err = sample().get("Actors").index(2).expect_err("only two actors");
	assert_eq!(err, Error::IndexOutOfRange { index: Some(2), len: 2 });
	assert_eq!(err.to_string(), "index error: index 2 out of range for array of length 2");
}

#[test]
fn key_selector_on_array_reports_missing_index() {
	let err = sample().get("Actors").get("").expect_err("array needs an index");
	assert_eq!(err, Error::IndexOutOfRange { index: None, len: 2 });
}

#[test]
fn index_selector_on_object_reports_empty_key() {
	let err = sample().index(0).expect_err("object needs a key");
	assert_eq!(err, Error::KeyNotFound { key: String::new() });
	assert_eq!(err.to_string(), "key error: \"\" not found");
}

#[test]
fn index_selector_on_object_finds_empty_key_member() {
	let root = loads(br#"{"": 1, "a": 2}"#).expect("decodes");
	assert_eq!(root.index(0).string().expect("empty key member"), "1");
	assert_eq!(root.index(7).string().expect("index value is ignored"), "1");
	assert_eq!(root.index(0), root.get(""));
}

#[test]
fn numeric_looking_keys_are_keys() {
	let root = loads(br#"{"0": "zero", "[1]": "one"}"#).expect("decodes");
	assert_eq!(root.get("0").string().expect("key 0"), "\"zero\"");
	assert_eq!(root.get("[1]".parse::<Selector>().expect("parses")).expect_err("index on object"), Error::KeyNotFound { key: String::new() });
	assert_eq!(root.get("\\[1]".parse::<Selector>().expect("parses")).string().expect("escaped key"), "\"one\"");
}

#[test]
fn get_on_scalars_is_unsupported() {
	let actor = sample().get("Actors").index(0).expect("actor exists");
	let cases = [("name", ValueKind::String), ("age", ValueKind::Number), ("hasChildren", ValueKind::Boolean), ("wife", ValueKind::Null)];

	for (key, kind) in cases {
		let err = actor.get(key).get("anything").expect_err("scalars cannot be navigated");
		assert_eq!(err, Error::Unsupported { kind });
	}

	let err = Node::new(Value::Null).index(0).expect_err("null cannot be indexed");
	assert_eq!(err.to_string(), "not implemented for null");
}

#[test]
fn children_share_structure_with_parent() {
	let root = sample();
	let actors = root.get("Actors").expect("actors");
	let again = root.get("Actors").expect("actors");

	let (Value::Array(left), Value::Array(right)) = (actors.value(), again.value()) else {
		panic!("expected arrays");
	};
	assert!(std::sync::Arc::ptr_eq(left, right), "get should not copy nested values");
}

#[test]
fn navigation_matches_reference_decoder() {
	let reference = sample_reference();
	let root = sample();
	let paths: [&[Selector]; 4] = [
		&[Selector::from("Actors"), Selector::Index(0), Selector::from("Born At")],
		&[Selector::from("Actors"), Selector::Index(1), Selector::from("age")],
		&[Selector::from("Actors"), Selector::Index(0), Selector::from("weight")],
		&[Selector::from("Actors"), Selector::Index(1)],
	];

	for path in paths {
		let mut node: Result<Node> = Ok(root.clone());
		let mut expected = &reference;
		for step in path {
			node = node.get(step);
			expected = match step {
				Selector::Key(key) => &expected[key.as_str()],
				Selector::Index(index) => &expected[*index],
			};
		}
		let expected = serde_json::to_string(expected).expect("reference serializes");
		assert_eq!(node.string().expect("path resolves"), expected, "path {path:?}");
	}
}

#[test]
fn non_finite_number_fails_to_serialize() {
	let mut members = BTreeMap::new();
	members.insert("ratio".to_owned(), Value::from(f64::NAN));
	let node = Node::new(members);

	let err = node.string().expect_err("NaN has no json form");
	assert!(matches!(err, Error::Serialization { .. }));
	assert!(node.bytes().is_err());
	assert!(node.get("ratio").is_ok(), "navigation still works");
}

#[test]
fn concurrent_readers_agree() {
	let root = sample();

	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|worker| {
				let root = &root;
				scope.spawn(move || root.get("Actors").index(worker % 2).get("name").string())
			})
			.collect();

		for (worker, handle) in handles.into_iter().enumerate() {
			let name = handle.join().expect("reader thread completes").expect("name serializes");
			let expected = if worker % 2 == 0 { "\"Tom Cruise\"" } else { "\"Robert Downey Jr.\"" };
			assert_eq!(name, expected);
		}
	});
}

#[test]
fn node_is_shareable_across_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<Node>();
}

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use widget_json_pointer::{escape_component, unescape_component, CompiledPointer};

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,6}",
        "[a-z~/]{0,6}",
        Just(String::new()),
        Just("-".to_string()),
    ]
    .prop_filter("reserved keys are never written", |k| {
        k != "__proto__" && k != "constructor"
    })
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z ]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_container() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(arb_json(), 0..5).prop_map(Value::Array),
        prop::collection::vec((arb_key(), arb_json()), 0..5)
            .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
    ]
}

fn collect_paths(val: &Value, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    out.push(prefix.clone());
    match val {
        Value::Object(map) => {
            for (key, child) in map {
                prefix.push(key.clone());
                collect_paths(child, prefix, out);
                prefix.pop();
            }
        }
        Value::Array(arr) => {
            for (idx, child) in arr.iter().enumerate() {
                prefix.push(idx.to_string());
                collect_paths(child, prefix, out);
                prefix.pop();
            }
        }
        _ => {}
    }
}

proptest! {
    #[test]
    fn escape_roundtrip(key in ".*") {
        let escaped = escape_component(&key);
        prop_assert_eq!(unescape_component(&escaped).unwrap(), key.as_str());
    }

    #[test]
    fn unescaped_tokens_pass_through(token in "[^~]*") {
        prop_assert_eq!(unescape_component(&token).unwrap(), token.as_str());
    }

    #[test]
    fn get_then_set_leaves_document_unchanged(doc in arb_container()) {
        let mut paths = Vec::new();
        collect_paths(&doc, &mut Vec::new(), &mut paths);
        for path in paths {
            let pointer = CompiledPointer::from_keys(&path);
            let value = pointer.get(&doc).unwrap().cloned();
            prop_assert!(value.is_some());

            let mut copy = doc.clone();
            let previous = pointer.set(&mut copy, value.clone()).unwrap();
            prop_assert_eq!(&copy, &doc);
            if !path.is_empty() {
                prop_assert_eq!(previous, value);
            }
        }
    }

    #[test]
    fn set_then_get_reads_back(doc in arb_container(), keys in prop::collection::vec("[a-z]{1,4}", 1..5), value in arb_json()) {
        let mut doc = match doc {
            Value::Object(map) => Value::Object(map),
            _ => Value::Object(Map::new()),
        };
        // Clear the first key so every level is created fresh.
        if let Value::Object(map) = &mut doc {
            map.remove(&keys[0]);
        }
        let pointer = CompiledPointer::from_keys(&keys);
        pointer.set(&mut doc, Some(value.clone())).unwrap();
        prop_assert_eq!(pointer.get(&doc).unwrap(), Some(&value));
    }
}

#[cfg(test)]
use super::*;
use crate::{parse, parse_as, parse_dynamic};

// ===== Probes and enumeration =====

#[test]
fn test_simple_lookup_types() {
    let value = parse(
        r#"{
    "string": "bar",
    "int": 32,
    "double": 32.5,
    "bool": true,
    "null": null,
    "array": [ 0, 1, 2 ],
    "dict": { "array": [ 0, 1, 2 ] }
}"#,
    );

    assert!(value["string"].is_string());
    assert!(value["int"].is_int());
    assert!(value["int"].is_double());
    assert!(value["double"].is_double());
    assert!(!value["double"].is_int());
    assert!(value["bool"].is_bool());
    assert!(value["null"].is_null());
    assert!(value["array"].is_array());
    assert!(value["dict"].is_object());

    let nested_int = &value["array"][1];
    assert!(nested_int.is_int());
    assert_eq!(nested_int.as_i64(), Some(1));

    let nested_array = &value["dict"]["array"];
    assert!(nested_array.is_array());
    assert_eq!(nested_array, &value["array"]);
}

#[test]
fn test_dictionary_enumeration_order() {
    let value = parse(r#"{ "0": 0, "1": 1, "2": 2, "3": 3, "4": 4 }"#);
    let members = value.as_object().expect("object root");

    assert_eq!(members.len(), 5);
    for (i, (key, member)) in members.iter().enumerate() {
        assert_eq!(key.parse::<i64>().unwrap(), i as i64);
        assert_eq!(member.as_i64(), Some(i as i64));
        assert_eq!(&value[key.as_str()], member);
    }
}

#[test]
fn test_source_order_survives_non_trivial_keys() {
    let value = parse(r#"{ "zebra": 1, "apple": 2, "Mango": 3 }"#);
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zebra", "apple", "Mango"]);
}

#[test]
fn test_array_enumeration_order() {
    let value = parse(r#"{ "array": [ 0, 1, 2, 3, 4 ] }"#);
    assert!(value.is_object());

    let array = &value["array"];
    assert!(array.is_array());

    for (i, item) in array.as_array().unwrap().iter().enumerate() {
        assert_eq!(item.as_i64(), Some(i as i64));
    }

    for i in 0..array.len() {
        assert_eq!(array[i].as_i64(), Some(i as i64));
    }

    // One past the end is a defined non-error
    assert!(!array[array.len()].is_valid());
}

#[test]
fn test_missing_lookup_absorbs() {
    let value = parse(r#"{ "foo": "bar" }"#);

    let bar = &value["bar"];
    assert!(!bar.is_valid());

    let bar = &bar["foo"];
    assert!(!bar.is_valid());

    let bar = &value[10usize];
    assert!(!bar.is_valid());

    let bar = &bar[10usize];
    assert!(!bar.is_valid());

    // Arbitrarily deep chains need no guards
    assert!(!value["a"]["b"][2usize]["c"].is_valid());
}

#[test]
fn test_wrong_index_kind_is_invalid() {
    let value = parse(r#"{ "arr": [0], "s": "x" }"#);
    assert!(!value["arr"]["key"].is_valid()); // string key into array
    assert!(!value[0usize].is_valid()); // numeric index into object
    assert!(!value["s"][0usize].is_valid()); // index into scalar
}

#[test]
fn test_probing_is_idempotent() {
    let value = parse(r#"{ "int": 32 }"#);
    for _ in 0..3 {
        assert!(value["int"].is_int());
        assert_eq!(value["int"].as_i64(), Some(32));
        assert!(!value["missing"].is_valid());
    }
}

#[test]
fn test_extraction_fails_on_mismatch() {
    let value = parse(r#"{ "s": "32", "n": 32 }"#);
    assert_eq!(value["s"].as_i64(), None);
    assert_eq!(value["s"].as_f64(), None);
    assert_eq!(value["n"].as_str(), None);
    assert_eq!(value["n"].as_bool(), None);
}

// ===== Conversion engine =====

#[test]
fn test_scalar_conversions() {
    let value = parse(r#"{ "s": "bar", "i": 32, "f": 32.5, "b": true }"#);

    let s: String = value["s"].convert().unwrap();
    assert_eq!(s, "bar");

    let i: i64 = value["i"].convert().unwrap();
    assert_eq!(i, 32);

    let port: u16 = value["i"].convert().unwrap();
    assert_eq!(port, 32);

    // Float targets accept integer-classified numbers
    let f: f64 = value["i"].convert().unwrap();
    assert_eq!(f, 32.0);

    let f: f64 = value["f"].convert().unwrap();
    assert_eq!(f, 32.5);

    let b: bool = value["b"].convert().unwrap();
    assert!(b);
}

#[test]
fn test_no_silent_truncation() {
    let value = parse(r#"{ "f": 32.5, "whole": 32.0 }"#);
    assert!(value["f"].convert::<i64>().is_err());
    // Even a whole-valued double stays double-only classified
    assert!(value["whole"].convert::<i32>().is_err());
}

#[test]
fn test_integer_range_checks() {
    let value = parse(r#"{ "big": 300, "neg": -1 }"#);
    assert!(value["big"].convert::<u8>().is_err());
    assert!(value["neg"].convert::<u64>().is_err());
    assert_eq!(value["big"].convert::<u16>().unwrap(), 300);
}

#[test]
fn test_sequence_conversion_preserves_order() {
    let value = parse(r#"{ "names": ["a", "b", "c"], "nums": [1, 2, 3] }"#);

    let names: Vec<String> = value["names"].convert().unwrap();
    assert_eq!(names, vec!["a", "b", "c"]);

    let nums: Vec<i64> = value["nums"].convert().unwrap();
    assert_eq!(nums, vec![1, 2, 3]);

    // Element mismatch fails the whole sequence
    assert!(value["names"].convert::<Vec<i64>>().is_err());
}

#[test]
fn test_option_conversion() {
    let value = parse(r#"{ "some": "x", "none": null }"#);

    let some: Option<String> = value["some"].convert().unwrap();
    assert_eq!(some, Some("x".to_string()));

    let none: Option<String> = value["none"].convert().unwrap();
    assert_eq!(none, None);
}

#[test]
fn test_map_conversion() {
    let value = parse(r#"{ "env": { "HOME": "/root", "TERM": "xterm" } }"#);
    let env: indexmap::IndexMap<String, String> = value["env"].convert().unwrap();
    assert_eq!(env.len(), 2);
    assert_eq!(env.get("HOME").map(String::as_str), Some("/root"));
    // Insertion order survives
    assert_eq!(env.keys().next().map(String::as_str), Some("HOME"));
}

#[test]
fn test_converting_sentinels_fails() {
    let value = parse(r#"{ "foo": "bar" }"#);
    let missing = &value["missing"];
    assert!(missing.convert::<String>().is_err());
    assert_eq!(missing.try_convert::<String>(), None);

    let broken = parse("{ nope }");
    assert!(broken.is_exception());
    // The embedded parse error is surfaced by the throwing form
    let err = broken.convert::<bool>().unwrap_err();
    assert_eq!(err.token(), Some("error"));
    assert_eq!(broken.try_convert::<bool>(), None);
}

#[test]
fn test_try_convert_is_non_failing() {
    let value = parse(r#"{ "s": "x" }"#);
    assert_eq!(value["s"].try_convert::<i64>(), None);
    assert_eq!(value["s"].try_convert::<String>(), Some("x".to_string()));
}

// ===== Record binding =====

#[derive(Debug, Default, PartialEq)]
struct Member {
    name: String,
    year: u16,
}

impl TryFrom<Value> for Member {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let fields = value.fields()?;
        Ok(Member {
            name: fields.required("name")?,
            year: fields.required("year")?,
        })
    }
}

#[derive(Debug, Default, PartialEq)]
struct Band {
    name: String,
    active: bool,
    leader: Member,
    members: Vec<Member>,
    genre: Option<String>,
}

impl TryFrom<Value> for Band {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let fields = value.fields()?;
        Ok(Band {
            name: fields.required("name")?,
            active: fields.or_default("active")?,
            leader: fields.required("leader")?,
            members: fields.or_default("members")?,
            genre: fields.optional("genre")?,
        })
    }
}

#[test]
fn test_record_binding() {
    let band: Band = parse_as(
        r#"{
    "name": "Amazing Test Band",
    "active": true,
    "leader": { "name": "Lead", "year": 1972 },
    "members": [
        { "name": "Member 1", "year": 1979 },
        { "name": "Member 2", "year": 1980 },
        { "name": "Member 3", "year": 1981 }
    ]
}"#,
    )
    .unwrap();

    assert_eq!(band.name, "Amazing Test Band");
    assert!(band.active);
    assert_eq!(band.leader, Member { name: "Lead".into(), year: 1972 });
    assert_eq!(band.members.len(), 3);
    assert_eq!(band.members[1], Member { name: "Member 2".into(), year: 1980 });
    assert_eq!(band.genre, None);
}

#[test]
fn test_record_binding_defaults_missing_members() {
    let band: Band = parse_as(r#"{ "name": "Duo", "leader": { "name": "L", "year": 2000 } }"#).unwrap();
    assert!(!band.active);
    assert!(band.members.is_empty());
    assert_eq!(band.genre, None);
}

#[test]
fn test_fields_case_insensitive() {
    // Keys match exactly first, then ASCII case-insensitively
    let member: Member = parse_as(r#"{ "Name": "x", "YEAR": 1999 }"#).unwrap();
    assert_eq!(member, Member { name: "x".into(), year: 1999 });

    // An exact match wins over a case-insensitive one
    let value = parse(r#"{ "NAME": "upper", "name": "exact" }"#);
    let name: String = value.fields().unwrap().required("name").unwrap();
    assert_eq!(name, "exact");
}

#[test]
fn test_record_binding_missing_required_member() {
    let result: Result<Member, JsonError> = parse_as(r#"{ "name": "x" }"#);
    match result {
        Err(JsonError::MissingKey { key }) => assert_eq!(key, "year"),
        other => panic!("expected MissingKey, got {:?}", other),
    }
}

#[test]
fn test_fields_on_non_object_fails() {
    assert!(parse("[1, 2]").fields().is_err());
    assert!(parse("3").fields().is_err());
}

// ===== Dynamic binding adapter =====

#[test]
fn test_cursor_navigation() {
    let doc = parse_dynamic(r#"{ "a": { "b": [10, 20, {"c": "deep"}] } }"#);

    let b = doc.root().member("a").member("b");
    assert!(b.is_valid());
    assert_eq!(b.at(1).as_i64(), Some(20));
    assert_eq!(b.at(2).member("c").as_str(), Some("deep"));
}

#[test]
fn test_cursor_path_navigation() {
    let doc = parse_dynamic(r#"{ "a": { "b": [10, 20, {"c": "deep"}] } }"#);

    assert_eq!(doc.root().path("a.b.0").as_i64(), Some(10));
    assert_eq!(doc.root().path("a.b.2.c").as_str(), Some("deep"));
    assert_eq!(doc.get::<String>("a.b.2.c").unwrap(), "deep");
    assert_eq!(doc.get::<i64>("a.b.1").unwrap(), 20);
}

#[test]
fn test_cursor_missing_paths_absorb() {
    let doc = parse_dynamic(r#"{ "foo": [0, 1] }"#);

    assert!(!doc.root().member("bar").is_valid());
    assert!(!doc.root().member("bar").at(3).member("x").is_valid());
    assert!(!doc.root().path("foo.10").is_valid());
    assert!(!doc.root().path("foo.bar").is_valid());
    assert!(doc.get::<i64>("foo.10").is_err());
}

#[test]
fn test_cursor_over_exception_root() {
    let doc = parse_dynamic("{ broken");
    assert!(doc.root().value().is_exception());
    // Navigation stays total even over an exception root
    assert!(!doc.root().member("a").is_valid());
    assert!(doc.get::<bool>("a").is_err());
}

#[test]
fn test_cursor_terminal_scalars() {
    let doc = parse_dynamic(r#"{ "s": "x", "i": 3, "f": 0.5, "b": false }"#);
    let root = doc.root();

    assert_eq!(root.member("s").as_str(), Some("x"));
    assert_eq!(root.member("i").as_i64(), Some(3));
    assert_eq!(root.member("f").as_f64(), Some(0.5));
    assert_eq!(root.member("b").as_bool(), Some(false));
    assert_eq!(root.member("i").convert::<u8>().unwrap(), 3);
}

#[test]
fn test_into_value_round_trip() {
    let doc = parse_dynamic(r#"{ "a": 1 }"#);
    let value = doc.into_value();
    assert_eq!(value["a"].as_i64(), Some(1));
}

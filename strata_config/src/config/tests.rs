//! Unit tests for container construction, merging and slicing.

use super::Config;
use crate::{ErrorKind, Fields, Overwrite};
use rstest::{fixture, rstest};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
struct Declared {
    int: i64,
    flt: f64,
    bln: bool,
    str: String,
    arr: Vec<String>,
    obj: Option<Value>,
}

#[fixture]
fn data() -> Fields {
    fields(json!({
        "int": 1,
        "flt": 2.3,
        "str": "test",
        "bln": true,
        "arr": ["value1", "value2", "value3"],
        "obj": {"field1": "value1", "field2": "value2"},
    }))
}

#[fixture]
fn prefixed() -> Config {
    Config::new(fields(json!({
        "prefixOneValueOne": 1,
        "prefixOneValueTwo": 2,
        "prefixOneValueThree": 3,
        "prefixTwoValueOne": 4,
    })))
}

#[rstest]
fn construct_overlays_initial_values_on_defaults(data: Fields) -> anyhow::Result<()> {
    let config = Config::from_defaults::<Declared>(data.clone())?;
    assert_eq!(config.count(), 6);
    for (name, value) in &data {
        assert_eq!(config.get(name), Some(value), "field {name}");
    }
    let typed: Declared = config.extract()?;
    assert_eq!(typed.arr.get(1).map(String::as_str), Some("value2"));
    assert_eq!(typed.obj, Some(json!({"field1": "value1", "field2": "value2"})));
    Ok(())
}

#[rstest]
fn defaults_fill_fields_missing_from_initial() -> anyhow::Result<()> {
    let config = Config::from_defaults::<Declared>(fields(json!({"int": 9, "extra": "x"})))?;
    assert_eq!(config.count(), 7);
    assert_eq!(config.get("int"), Some(&json!(9)));
    assert_eq!(config.get("bln"), Some(&json!(false)));
    assert_eq!(config.get("obj"), Some(&Value::Null));
    assert_eq!(config.get("extra"), Some(&json!("x")));
    Ok(())
}

#[test]
fn defaults_must_serialise_to_a_mapping() {
    let err = Config::from_defaults::<u32>(Fields::new()).expect_err("scalar defaults");
    assert_eq!(err.kind(), ErrorKind::InvalidRecord);
}

#[rstest]
#[case(Overwrite::Keep, json!(1))]
#[case(Overwrite::Replace, json!(42))]
fn load_from_mapping_honours_policy(
    data: Fields,
    #[case] overwrite: Overwrite,
    #[case] expected: Value,
) {
    let mut config = Config::new(data);
    let report = config.load_from_mapping(fields(json!({"int": 42})), overwrite);
    assert_eq!(config.get("int"), Some(&expected));
    assert_eq!(report.inserted, 0);
}

#[rstest]
fn load_from_mapping_accepts_bool_policy(data: Fields) {
    let mut config = Config::new(data);
    config.load_from_mapping(fields(json!({"str": "kept"})), false);
    assert_eq!(config.get("str"), Some(&json!("test")));
    config.load_from_mapping(fields(json!({"str": "replaced"})), true);
    assert_eq!(config.get("str"), Some(&json!("replaced")));
}

#[rstest]
fn replace_twice_equals_replace_once(data: Fields) {
    let source = fields(json!({"int": 5, "fresh": [1, 2]}));
    let mut once = Config::new(data.clone());
    once.load_from_mapping(source.clone(), true);
    let mut twice = Config::new(data);
    twice.load_from_mapping(source.clone(), true);
    twice.load_from_mapping(source, true);
    assert_eq!(once, twice);
}

#[rstest]
fn count_tracks_distinct_names(data: Fields) {
    let mut config = Config::default();
    assert!(config.is_empty());
    config.load_from_mapping(data.clone(), false);
    assert_eq!(config.count(), 6);
    config.load_from_mapping(data, true);
    assert_eq!(config.len(), 6);
    config.set("debug", false);
    assert_eq!(config.count(), 7);
    assert_eq!(config.remove("debug"), Some(json!(false)));
    assert_eq!(config.count(), 6);
}

#[test]
fn load_from_record_uses_public_fields() -> anyhow::Result<()> {
    #[derive(Serialize)]
    struct Database {
        host: &'static str,
        port: u16,
    }

    let mut config = Config::default();
    config.set("host", "primary");
    let report = config.load_from_record(
        &Database {
            host: "replica",
            port: 5432,
        },
        false,
    )?;
    assert_eq!(config.get("host"), Some(&json!("primary")));
    assert_eq!(config.get_as::<u16>("port")?, Some(5432));
    assert_eq!((report.inserted, report.skipped), (1, 1));
    Ok(())
}

#[rstest]
#[case::list(json!([1, 2]))]
#[case::scalar(json!("text"))]
#[case::null(Value::Null)]
fn load_from_record_rejects_non_mappings(#[case] record: Value) {
    let mut config = Config::default();
    let err = config
        .load_from_record(&record, true)
        .expect_err("non-mapping record");
    assert_eq!(err.kind(), ErrorKind::InvalidRecord);
    assert!(config.is_empty());
}

#[test]
fn get_as_reports_type_mismatch() {
    let mut config = Config::default();
    config.set("port", "eighty");
    let err = config.get_as::<u16>("port").expect_err("mismatch");
    assert_eq!(err.kind(), ErrorKind::Extract);
    assert!(matches!(config.get_as::<u16>("missing"), Ok(None)));
}

#[rstest]
fn slice_strips_prefix_and_lowercases(prefixed: Config) {
    let one = prefixed.get_slice("prefixOne");
    assert_eq!(one.count(), 3);
    assert_eq!(
        one.names().collect::<Vec<_>>(),
        ["valueOne", "valueTwo", "valueThree"]
    );
    assert_eq!(one.get("valueTwo"), Some(&json!(2)));

    let two = prefixed.get_slice("prefixTwo");
    assert_eq!(two.count(), 1);
    assert_eq!(two.get("valueOne"), Some(&json!(4)));
}

#[rstest]
#[case("prefix", 4)]
#[case("prefixThree", 0)]
#[case("PrefixOne", 0)]
#[case("", 4)]
fn slice_sizes(prefixed: Config, #[case] prefix: &str, #[case] expected: usize) {
    assert_eq!(prefixed.get_slice(prefix).count(), expected);
}

#[rstest]
fn slice_is_independent_of_source(mut prefixed: Config) {
    let mut slice = prefixed.get_slice("prefixOne");
    slice.set("valueOne", 100);
    prefixed.set("prefixOneValueTwo", 200);
    assert_eq!(prefixed.get("prefixOneValueOne"), Some(&json!(1)));
    assert_eq!(slice.get("valueTwo"), Some(&json!(2)));
}

#[test]
fn slice_carries_no_defaults() -> anyhow::Result<()> {
    let config = Config::from_defaults::<Declared>(fields(json!({"netHost": "h"})))?;
    let slice = config.get_slice("net");
    assert_eq!(slice.count(), 1);
    assert!(!slice.contains("int"));
    Ok(())
}

#[test]
fn config_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
}

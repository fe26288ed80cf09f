use serde_json::json;
use vitta::{families::Inject, Variant};

type Message = Variant![String, u32, (bool, char)];

#[test]
fn unions_serialize_as_nested_variants() {
    let m: Message = Inject::inject(7u32);
    assert_eq!(
        serde_json::to_value(&m).unwrap(),
        json!({ "There": { "Here": 7 } })
    );
}

#[test]
fn unions_deserialize() {
    let m: Message = serde_json::from_value(json!({ "There": { "There": { "Here": [true, "x"] } } }))
        .unwrap();
    assert_eq!(Inject::<(bool, char), _>::get(&m), Some(&(true, 'x')));
}

#[test]
fn void_rejects_every_value() {
    assert!(serde_json::from_value::<Variant![u8]>(json!({ "There": null })).is_err());
}

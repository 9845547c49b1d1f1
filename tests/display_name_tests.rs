use functions_service::{model::CallablePayload, utils::to_display_name};
use serde_json::json;

#[test]
fn test_missing_and_falsy_names_default_to_friend() {
    assert_eq!(to_display_name(None), "friend");

    for value in [json!(null), json!(""), json!(false), json!(0), json!(0.0)] {
        assert_eq!(to_display_name(Some(&value)), "friend", "input {value}");
    }
}

#[test]
fn test_strings_pass_through() {
    assert_eq!(to_display_name(Some(&json!("Ada"))), "Ada");
    assert_eq!(to_display_name(Some(&json!(" "))), " ");
}

#[test]
fn test_numbers_render_as_decimal() {
    assert_eq!(to_display_name(Some(&json!(42))), "42");
    assert_eq!(to_display_name(Some(&json!(-7))), "-7");
    assert_eq!(to_display_name(Some(&json!(42.0))), "42");
    assert_eq!(to_display_name(Some(&json!(2.5))), "2.5");
    assert_eq!(to_display_name(Some(&json!(1e21))), "1e+21");
    assert_eq!(to_display_name(Some(&json!(1e-7))), "1e-7");
}

#[test]
fn test_other_values() {
    assert_eq!(to_display_name(Some(&json!(true))), "true");
    assert_eq!(to_display_name(Some(&json!(["a", 1]))), "a,1");
    assert_eq!(to_display_name(Some(&json!([]))), "");
    assert_eq!(to_display_name(Some(&json!({ "k": "v" }))), "[object Object]");
    assert_eq!(to_display_name(Some(&json!([{ "a": 1 }, 2]))), "[object Object],2");
}

#[test]
fn test_payload_from_non_object_data_has_no_name() {
    assert_eq!(CallablePayload::from_data(&json!("Ada")).name, None);
    assert_eq!(CallablePayload::from_data(&json!(null)).name, None);
    assert_eq!(
        CallablePayload::from_data(&json!({ "name": "Ada" })).name,
        Some(json!("Ada"))
    );
}

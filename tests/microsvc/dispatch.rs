//! Command dispatch through the registered student handlers.

use serde_json::json;
use student_registry::microsvc::HandlerError;

use crate::support::{ana, empty_facade, seeded_facade, service};

#[test]
fn all_student_commands_are_registered() {
    let service = service(empty_facade());
    assert_eq!(
        service.commands(),
        vec![
            "student.add",
            "student.count",
            "student.delete",
            "student.find",
            "student.list",
            "student.update",
        ]
    );
}

#[test]
fn full_lifecycle() {
    let service = service(empty_facade());

    let result = service.dispatch("student.count", json!({})).unwrap();
    assert_eq!(result, json!({ "count": 0 }));

    let result = service.dispatch("student.add", ana()).unwrap();
    assert_eq!(result["success"], true);
    assert_eq!(result["record"]["phone"], "");
    let id = result["record"]["id"].as_str().unwrap().to_string();

    let result = service
        .dispatch("student.find", json!({ "name": "AN" }))
        .unwrap();
    assert_eq!(result["found"], true);
    assert_eq!(result["record"]["id"], id.as_str());

    let result = service
        .dispatch(
            "student.update",
            json!({
                "id": id,
                "name": "Ana María",
                "lastname": "Gomez",
                "mail": "am@x.com",
                "city": "Salta"
            }),
        )
        .unwrap();
    assert_eq!(result["success"], true);
    assert_eq!(result["record"]["city"], "Salta");

    let result = service.dispatch("student.list", json!({})).unwrap();
    assert_eq!(result["records"][0]["id"], id.as_str());
    assert_eq!(result["records"][0]["name"], "Ana María");

    let result = service
        .dispatch("student.delete", json!({ "id": id }))
        .unwrap();
    assert_eq!(result["success"], true);

    let result = service.dispatch("student.count", json!({})).unwrap();
    assert_eq!(result, json!({ "count": 0 }));
    assert_eq!(service.facade().count().unwrap().count, 0);
}

#[test]
fn duplicate_add_is_a_successful_dispatch_with_success_false() {
    let service = service(empty_facade());
    service.dispatch("student.add", ana()).unwrap();

    let result = service.dispatch("student.add", ana()).unwrap();
    assert_eq!(result["success"], false);
    assert!(result["record"].is_null());
    assert!(result["message"].as_str().unwrap().contains("a@x.com"));
}

#[test]
fn update_bogus_id_reports_failure() {
    let service = service(seeded_facade());

    let result = service
        .dispatch(
            "student.update",
            json!({ "id": "bogus", "name": "N", "lastname": "L", "mail": "n@x.com" }),
        )
        .unwrap();
    assert_eq!(result["success"], false);
    assert!(result["record"].is_null());

    let count = service.dispatch("student.count", json!({})).unwrap();
    assert_eq!(count, json!({ "count": 3 }));
}

#[test]
fn seeded_service_finds_sample_students() {
    let service = service(seeded_facade());

    let result = service
        .dispatch("student.find", json!({ "name": "maría" }))
        .unwrap();
    assert_eq!(result["found"], true);
    assert_eq!(result["record"]["lastname"], "García");
}

#[test]
fn absent_and_blank_fields_get_the_same_failure_payload() {
    let service = service(empty_facade());

    let blank = service
        .dispatch(
            "student.add",
            json!({ "name": "Ana", "lastname": "", "mail": "a@x.com" }),
        )
        .unwrap();
    let absent = service
        .dispatch("student.add", json!({ "name": "Ana", "mail": "a@x.com" }))
        .unwrap();
    assert_eq!(blank, absent);
    assert_eq!(absent["success"], false);
    assert!(absent["record"].is_null());
    assert_eq!(absent["message"], "missing required field(s): lastname");
    assert_eq!(service.facade().count().unwrap().count, 0);
}

#[test]
fn missing_keys_are_named_for_every_command() {
    let service = service(seeded_facade());

    let result = service
        .dispatch(
            "student.update",
            json!({ "name": "N", "lastname": "L", "mail": "n@x.com" }),
        )
        .unwrap();
    assert_eq!(result["success"], false);
    assert_eq!(result["message"], "missing required field(s): id");

    let result = service.dispatch("student.add", json!({})).unwrap();
    assert_eq!(
        result["message"],
        "missing required field(s): name, lastname, mail"
    );

    let result = service.dispatch("student.delete", json!({})).unwrap();
    assert_eq!(result["success"], false);
    assert!(result["message"].as_str().unwrap().contains("id"));

    let result = service.dispatch("student.find", json!({})).unwrap();
    assert_eq!(result["found"], false);
    assert!(result["record"].is_null());
    assert!(result["message"].as_str().unwrap().contains("name"));

    let count = service.dispatch("student.count", json!({})).unwrap();
    assert_eq!(count, json!({ "count": 3 }));
}

#[test]
fn wrongly_typed_field_fails_decoding() {
    let service = service(empty_facade());

    let result = service.dispatch("student.find", json!({ "name": 42 }));
    let err = result.unwrap_err();
    assert!(matches!(err, HandlerError::DecodeFailed(_)));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn unknown_command_maps_to_404() {
    let service = service(empty_facade());

    let err = service.dispatch("student.purge", json!({})).unwrap_err();
    assert!(matches!(err, HandlerError::UnknownCommand(_)));
    assert_eq!(err.status_code(), 404);
}

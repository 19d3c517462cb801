use handler_error::types::{Environment, EnvironmentInfo};

#[test]
fn native_environment_has_server_info() {
    let info = EnvironmentInfo::collect();
    assert_eq!(info.environment, Environment::Native);

    let server = info.server_info.as_ref().unwrap();
    assert_eq!(server.os_type, std::env::consts::OS);
    assert_eq!(server.cpu_arch, std::env::consts::ARCH);
    assert_eq!(server.process_id, std::process::id());
    assert!(info.is_production.is_some());
}

#[test]
fn unknown_placeholder_is_empty() {
    let info = EnvironmentInfo::unknown();
    assert_eq!(info.environment, Environment::Unknown);
    assert!(info.server_info.is_none());

    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(value, serde_json::json!({ "environment": "unknown" }));
}

#[test]
fn serializes_camel_case() {
    let value = serde_json::to_value(EnvironmentInfo::collect()).unwrap();
    assert!(value["serverInfo"]["cpuArch"].is_string());
    assert!(value["isProduction"].is_boolean());
}

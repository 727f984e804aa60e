use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn payctl() -> Command {
    let mut cmd = Command::new(cargo_bin!("payctl"));
    cmd.env_remove("PAYCTL_CONFIG")
        .env_remove("PAYCTL_PAYMENT__LEGACY_ATTACH")
        .env_remove("PAYCTL_PAYMENT__ENABLED_TYPES")
        .env_remove("PAYCTL_LOG__LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_encode_with_extra() {
    payctl()
        .args(["encode", "--order-id", "123", "--order-sn", "ORD001", "--extra", r#"{"coupon_id":7}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"order_id":123,"order_sn":"ORD001","type":"order","extra":{"coupon_id":7}}"#,
        ));
}

#[test]
fn test_encode_rejects_non_object_extra() {
    payctl()
        .args(["encode", "--order-id", "1", "--order-sn", "S", "--extra", "[1,2]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--extra 必须是 JSON 对象"));
}

#[test]
fn test_decode_prints_fields() {
    payctl()
        .args(["decode", r#"{"order_id":123,"order_sn":"ORD001","type":"recharge"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("order_id: 123"))
        .stdout(predicate::str::contains("order_sn: ORD001"))
        .stdout(predicate::str::contains("type: recharge"))
        .stdout(predicate::str::contains("extra").not());
}

#[test]
fn test_decode_reports_error() {
    payctl()
        .args(["decode", r#"{"order_id":123}"#])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing or invalid order_sn in attach data"));
}

#[test]
fn test_decode_rejects_legacy_format() {
    payctl()
        .args(["decode", "order_id_123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed attach data"));
}

#[test]
fn test_parse_legacy_format() {
    payctl()
        .args(["parse", "order_id_42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("order_id: 42"))
        .stdout(predicate::str::contains("type: order"));
}

#[test]
fn test_parse_invalid_input() {
    payctl()
        .args(["parse", "invalid_format"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no attach data"));
}

#[test]
fn test_parse_without_legacy_fallback() {
    let config = config_file("[payment]\nlegacy_attach = false\n");

    payctl()
        .arg("--config")
        .arg(config.path())
        .args(["parse", "order_id_42"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no attach data"));
}

#[test]
fn test_parse_legacy_fallback_disabled_by_env() {
    payctl()
        .env("PAYCTL_PAYMENT__LEGACY_ATTACH", "false")
        .args(["parse", "order_id_42"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no attach data"));
}

#[test]
fn test_log_level_from_env() {
    payctl()
        .env("PAYCTL_LOG__LEVEL", "debug")
        .args(["encode", "--order-id", "7", "--order-sn", "S7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("attach 编码完成"));

    payctl()
        .args(["encode", "--order-id", "7", "--order-sn", "S7"])
        .assert()
        .success()
        .stderr(predicate::str::contains("attach 编码完成").not());
}

#[test]
fn test_types_lists_all_by_default() {
    payctl()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("wechat_mini_program\t微信小程序支付\twechat"))
        .stdout(predicate::str::contains("balance\t余额支付\tbalance"));
}

#[test]
fn test_types_filtered_by_channel_as_json() {
    let output = payctl().args(["types", "--channel", "alipay", "--json"]).output().unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let values: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["alipay_h5", "alipay_app", "alipay"]);
    assert_eq!(items[0]["label"], "支付宝H5支付");
    assert_eq!(items[0]["channel"], "alipay");
}

#[test]
fn test_types_restricted_by_config() {
    let config = config_file("[payment]\nenabled_types = [\"wechat_app\", \"bank_card\"]\n");

    payctl()
        .arg("--config")
        .arg(config.path())
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("wechat_app"))
        .stdout(predicate::str::contains("bank_card"))
        .stdout(predicate::str::contains("balance").not());
}

#[test]
fn test_unknown_enabled_type_fails() {
    let config = config_file("[payment]\nenabled_types = [\"paypal\"]\n");

    payctl()
        .arg("--config")
        .arg(config.path())
        .arg("types")
        .assert()
        .failure()
        .stderr(predicate::str::contains("paypal"));
}

#[test]
fn test_missing_config_file_fails() {
    payctl()
        .args(["--config", "/nonexistent/payctl.toml", "types"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/payctl.toml"));
}

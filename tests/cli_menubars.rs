mod common;

use common::*;

fn env() -> TestEnv {
    TestEnv::builder()
        .with_model("crm.toml", CRM_MODEL)
        .with_model("orders.yaml", ORDER_MENU_YAML)
        .with_layout("menubars.layout.toml", MENUBARS)
        .build()
}

#[test]
fn menubars_outline_reconciles_layout_with_model() {
    let result = env().run(&["menubars"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    Primary
      Customers
          Find (crm.Customers#findByName)
    Tertiary
      Other *
        [Customers]
          Create (crm.Customers#create)
        [Order Menu]
          Recent (acme.OrderMenu#recent)
    ");
    // the stale `gone` reference is dropped with a warning
    assert!(result.stderr.contains("unknown service action"), "stderr:\n{}", result.stderr);
}

#[test]
fn menubars_without_layout_come_from_annotations() {
    let env = TestEnv::builder()
        .with_model("crm.toml", CRM_MODEL)
        .with_model("orders.yaml", ORDER_MENU_YAML)
        .build();

    let result = env.run(&["menubars"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    insta::assert_snapshot!(result.stdout.trim_end(), @r"
    Primary
      Customers
          Find By Name (crm.Customers#findByName)
          Create (crm.Customers#create)
    Secondary
      Order Menu
          Recent (acme.OrderMenu#recent)
    ");
}

#[test]
fn menubars_toml_output_parses_back() {
    let result = env().run(&["menubars", "--format", "toml"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let value: toml::Value = toml::from_str(&result.stdout).unwrap();
    assert_eq!(value["primary"]["menus"][0]["named"].as_str(), Some("Customers"));
    assert_eq!(
        value["tertiary"]["menus"][0]["unreferenced_actions"].as_bool(),
        Some(true)
    );
}

#[test]
fn menubars_json_reports_source() {
    let result = env().run(&["--json", "menubars"]);
    let events = result.json_events();

    let data = events.iter().find(|e| e["event"] == "data").unwrap();
    assert_eq!(data["source"], "layout");
    assert_eq!(data["menu_bars"]["primary"]["menus"][0]["named"], "Customers");
}

use fbtool_lib::fake::FakeTool;
use fbtool_lib::guard::{extract_product, verify_device};
use fbtool_lib::{Error, ExecutionResult};

#[test]
fn extracts_product_token() {
    assert_eq!(
        extract_product("product: duchamp\nfinished. total time: 0.002s\n"),
        "duchamp"
    );
    assert_eq!(extract_product("product:duchamp"), "duchamp");
    assert_eq!(
        extract_product("(bootloader) slot-count:2\nproduct:   duchamp   \n"),
        "duchamp"
    );
}

#[test]
fn missing_product_line_is_unknown() {
    assert_eq!(extract_product(""), "unknown");
    assert_eq!(
        extract_product("getvar:product FAILED (remote: unknown command)"),
        "unknown"
    );
    assert_eq!(extract_product("product:"), "unknown");
    // the prefix must start the line
    assert_eq!(extract_product("  product: duchamp"), "unknown");
}

#[test]
fn verify_device_accepts_matching_product() {
    let mut tool = FakeTool::new();
    tool.push_response(ExecutionResult::ok("product: duchamp\n"));

    verify_device(&mut tool, "duchamp").unwrap();
    assert_eq!(
        tool.calls(),
        [vec!["getvar".to_string(), "product".to_string()]]
    );
}

#[test]
fn verify_device_rejects_mismatch() {
    let mut tool = FakeTool::new();
    tool.push_response(ExecutionResult::ok("product: corot\n"));

    match verify_device(&mut tool, "duchamp").unwrap_err() {
        Error::DeviceMismatch { expected, actual } => {
            assert_eq!(expected, "duchamp");
            assert_eq!(actual, "corot");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn verify_device_reports_unknown_when_query_says_nothing() {
    let mut tool = FakeTool::new();
    tool.push_response(ExecutionResult::ok("< waiting for any device >\n"));

    match verify_device(&mut tool, "duchamp").unwrap_err() {
        Error::DeviceMismatch { expected, actual } => {
            assert_eq!(expected, "duchamp");
            assert_eq!(actual, "unknown");
        }
        other => panic!("unexpected error: {other}"),
    }
}

use std::path::{Path, PathBuf};

use fbtool_lib::fake::FakeTool;
use fbtool_lib::{
    Error, ExecutionResult, FlashPlan, FlashStep, RunOptions, SubprocessTool, run_plan,
};

fn quiet_opts() -> RunOptions {
    RunOptions {
        images_dir: PathBuf::from("images"),
        quiet: true,
    }
}

fn test_plan() -> FlashPlan {
    FlashPlan {
        name: "test",
        steps: vec![
            FlashStep::SetActive { slot: "a" },
            FlashStep::Flash {
                partition: "boot_a",
                image: "boot.img",
            },
            FlashStep::Erase {
                partition: "userdata",
            },
            FlashStep::Oem { args: &["cdms"] },
            FlashStep::Reboot,
        ],
    }
}

#[test]
fn all_steps_succeed_in_plan_order() {
    let mut tool = FakeTool::new();
    let plan = test_plan();

    let report = run_plan(&mut tool, &plan, &quiet_opts()).unwrap();

    assert_eq!(report.entries.len(), plan.len());
    assert!(report.success());
    for (entry, step) in report.entries.iter().zip(plan.steps.iter()) {
        assert_eq!(&entry.step, step);
    }
}

#[test]
fn argv_translation_matches_tool_syntax() {
    let mut tool = FakeTool::new();
    let plan = test_plan();

    run_plan(&mut tool, &plan, &quiet_opts()).unwrap();

    let boot_img = Path::new("images").join("boot.img").display().to_string();
    assert_eq!(
        tool.calls(),
        [
            vec!["set_active".to_string(), "a".to_string()],
            vec!["flash".to_string(), "boot_a".to_string(), boot_img],
            vec!["erase".to_string(), "userdata".to_string()],
            vec!["oem".to_string(), "cdms".to_string()],
            vec!["reboot".to_string()],
        ]
    );
}

#[test]
fn stops_at_first_failure() {
    let plan = test_plan();
    // step 3 (erase userdata) is engineered to fail
    let mut tool = FakeTool::new();
    tool.push_response(ExecutionResult::ok(""));
    tool.push_response(ExecutionResult::ok(""));
    tool.push_response(ExecutionResult::failed(
        1,
        "FAILED (remote: 'Erase is not allowed in locked state')",
    ));

    let report = run_plan(&mut tool, &plan, &quiet_opts()).unwrap();

    assert_eq!(report.entries.len(), 3);
    assert_eq!(tool.calls().len(), 3);
    assert!(!report.success());
    assert_eq!(
        report.first_failure().unwrap().step,
        FlashStep::Erase {
            partition: "userdata"
        }
    );

    match report.into_result().unwrap_err() {
        Error::ActionFailed {
            action,
            code,
            output,
        } => {
            assert_eq!(action, "erase userdata");
            assert_eq!(code, Some(1));
            assert!(output.contains("not allowed"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_tool_is_rejected_before_any_invocation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fastboot");

    match SubprocessTool::new(&path).unwrap_err() {
        Error::ToolUnavailable { path: reported } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(unix)]
#[test]
fn non_executable_tool_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fastboot");
    std::fs::write(&path, b"#!/bin/sh\n").unwrap();

    assert!(matches!(
        SubprocessTool::new(&path),
        Err(Error::ToolUnavailable { .. })
    ));
}

#[cfg(unix)]
#[test]
fn subprocess_tool_captures_combined_output() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fastboot");
    // real fastboot reports getvar results on stderr
    std::fs::write(&path, "#!/bin/sh\necho \"product: duchamp\" 1>&2\n").unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();

    let mut tool = SubprocessTool::new(&path).unwrap();
    fbtool_lib::verify_device(&mut tool, "duchamp").unwrap();
}

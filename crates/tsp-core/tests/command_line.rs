//! Tests for the debugger command line produced from a request

use std::path::Path;

use tsp_core::{DebuggerCommandLine, InvocationRequest, LauncherConfig, PreCommand};

const EXTENSION: &str = "/usr/share/track-shared-ptrs/track-shared-ptrs.py";

fn config() -> LauncherConfig
{
    LauncherConfig::new("gdb", EXTENSION)
}

fn build(request: &InvocationRequest) -> Vec<String>
{
    DebuggerCommandLine::build(request, &config()).argv_lossy()
}

fn contains_pre_command(argv: &[String], pre_command: &str) -> bool
{
    argv.windows(2).any(|pair| pair[0] == "-ex" && pair[1] == pre_command)
}

#[test]
fn test_defaults_when_only_command_given()
{
    let argv = build(&InvocationRequest::new(["./test_0"]).unwrap());

    assert!(contains_pre_command(&argv, "python-log-level WARNING"));
    assert!(contains_pre_command(&argv, "track-shared-ptrs tracked-shared-ptrs"));
}

#[test]
fn test_log_and_report_are_verbatim()
{
    let cases = [
        ("INFO", "out.txt"),
        ("debug", "reports/run 1.json"),
        ("", ""),
        ("$(rm -rf /)", "a;b|c"),
    ];

    for (log, report) in cases {
        let request = InvocationRequest::new(["prog"])
            .unwrap()
            .with_log_level(log)
            .with_report(report);
        let argv = build(&request);

        assert!(contains_pre_command(&argv, &format!("python-log-level {log}")), "{argv:?}");
        assert!(contains_pre_command(&argv, &format!("track-shared-ptrs {report}")), "{argv:?}");
    }
}

#[test]
fn test_target_follows_args_flag_at_end()
{
    let command = ["myprog", "--flag", "-x", "plain", "--args"];
    let argv = build(&InvocationRequest::new(command).unwrap());

    let tail = &argv[argv.len() - command.len() - 1..];
    assert_eq!(tail[0], "--args");
    assert_eq!(&tail[1..], command);
}

#[test]
fn test_scenario_flag_passthrough()
{
    let line = DebuggerCommandLine::build(&InvocationRequest::new(["myprog", "--flag"]).unwrap(), &config());
    assert!(line.to_string().ends_with("--args myprog --flag"));
}

#[test]
fn test_scenario_log_and_report()
{
    let request = InvocationRequest::new(["myprog"])
        .unwrap()
        .with_log_level("INFO")
        .with_report("out.txt");
    let line = DebuggerCommandLine::build(&request, &config());
    let argv = line.argv_lossy();

    assert!(contains_pre_command(&argv, "python-log-level INFO"));
    assert!(contains_pre_command(&argv, "track-shared-ptrs out.txt"));
    assert!(line.to_string().ends_with("--args myprog"));
}

#[test]
fn test_program_and_leading_flags()
{
    let line = DebuggerCommandLine::build(&InvocationRequest::new(["prog"]).unwrap(), &config());

    assert_eq!(line.program(), Path::new("gdb"));
    assert_eq!(line.args()[0], "-batch");
    assert_eq!(line.args()[1], "-ex");
    assert_eq!(line.args()[2], format!("source {EXTENSION}").as_str());
}

#[test]
fn test_pre_commands_in_order()
{
    let request = InvocationRequest::new(["prog"]).unwrap().with_log_level("ERROR");
    let line = DebuggerCommandLine::build(&request, &config());

    let expected = [
        PreCommand::Source(EXTENSION.into()).render(),
        PreCommand::PythonLogLevel("ERROR".to_string()).render(),
        PreCommand::TrackSharedPtrs("tracked-shared-ptrs".to_string()).render(),
    ];
    let actual: Vec<_> = line.pre_commands().map(ToOwned::to_owned).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_custom_debugger()
{
    let config = config().with_debugger("/opt/gdb-14/bin/gdb");
    let line = DebuggerCommandLine::build(&InvocationRequest::new(["prog"]).unwrap(), &config);
    assert_eq!(line.argv_lossy()[0], "/opt/gdb-14/bin/gdb");
}

//! Command-line dispatch through `Platform::initialize`.

mod common;

use samplehost_core::{ExitCode, OptionalExtent, OptionalWindowProperties, WindowMode};
use samplehost_platform::{Platform, RunState};
use samplehost_plugins::Hook;

use common::*;

fn platform(tokens: &[&str], probe: &SharedWindowProbe) -> Platform {
    Platform::new(args(tokens), window_factory(probe))
}

// ============================================================================
// EARLY EXITS
// ============================================================================

mod early_exit_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_arguments_is_no_sample() {
        let log = journal();
        let apps = app_journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&[], &probe);

        let sampler = MockPlugin::new("sampler", &log)
            .command("sample")
            .requesting(mock_app("hello", AppBehavior::default(), &apps));
        let code = platform.initialize(vec![sampler.boxed()]);

        assert_eq!(code, ExitCode::NoSample);
        assert_eq!(probe.borrow().created, 0);
        assert_eq!(entries(&apps, "create"), 0);
        assert!(log.borrow().is_empty());
        assert_eq!(platform.run_state(), RunState::Idle);
    }

    #[test]
    fn test_help_anywhere_wins() {
        let log = journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&["sample", "--fast", "-h"], &probe);

        let code = platform.initialize(vec![
            MockPlugin::new("sampler", &log)
                .command("sample")
                .option("fast")
                .boxed(),
        ]);

        assert_eq!(code, ExitCode::Help);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_long_help() {
        let log = journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&["--help"], &probe);

        let code = platform.initialize(vec![MockPlugin::new("sampler", &log).boxed()]);

        assert_eq!(code, ExitCode::Help);
    }
}

// ============================================================================
// MALFORMED INPUT
// ============================================================================

mod malformed_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sampler(log: &Journal) -> MockPlugin {
        MockPlugin::new("sampler", log).command("sample").option("fast")
    }

    fn assert_help_without_trigger(tokens: &[&str], plugins: Vec<MockPlugin>, log: &Journal) {
        let probe = SharedWindowProbe::default();
        let mut platform = platform(tokens, &probe);
        let code = platform.initialize(plugins.into_iter().map(MockPlugin::boxed).collect());

        assert_eq!(code, ExitCode::Help);
        assert!(!log.borrow().iter().any(|entry| entry.ends_with(":trigger")));
        assert_eq!(probe.borrow().created, 0);
    }

    #[test]
    fn test_unknown_command() {
        let log = journal();
        assert_help_without_trigger(&["draw"], vec![sampler(&log)], &log);
    }

    #[test]
    fn test_unknown_option() {
        let log = journal();
        assert_help_without_trigger(&["sample", "--unknown-opt"], vec![sampler(&log)], &log);
    }

    #[test]
    fn test_option_without_prefix() {
        let log = journal();
        assert_help_without_trigger(&["sample", "fast"], vec![sampler(&log)], &log);
        assert_eq!(*log.borrow(), vec!["sampler:command:sample".to_string()]);
    }

    #[test]
    fn test_single_dash_option() {
        let log = journal();
        assert_help_without_trigger(&["sample", "-fast"], vec![sampler(&log)], &log);
    }

    #[test]
    fn test_refused_command() {
        let log = journal();
        assert_help_without_trigger(&["sample"], vec![sampler(&log).refusing()], &log);
    }

    #[test]
    fn test_refused_option() {
        let log = journal();
        let plugins = vec![
            sampler(&log),
            MockPlugin::new("picky", &log).option("strict").refusing(),
        ];
        assert_help_without_trigger(&["sample", "--fast", "--strict"], plugins, &log);
    }

    #[test]
    fn test_missing_option_value() {
        let log = journal();
        let plugins = vec![
            sampler(&log),
            MockPlugin::new("stopper", &log).option("stop-after").taking_value(),
        ];
        assert_help_without_trigger(&["sample", "--stop-after"], plugins, &log);
    }

    #[test]
    fn test_command_token_in_option_position() {
        let log = journal();
        assert_help_without_trigger(&["sample", "sample"], vec![sampler(&log)], &log);
    }
}

// ============================================================================
// WELL-FORMED INPUT
// ============================================================================

mod dispatch_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_trigger_runs_once_after_all_options() {
        let log = journal();
        let apps = app_journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(
            &["sample", "--fast", "--stop-after", "10", "--fast"],
            &probe,
        );

        let code = platform.initialize(vec![
            MockPlugin::new("sampler", &log)
                .command("sample")
                .option("fast")
                .requesting(mock_app("hello", AppBehavior::default(), &apps))
                .boxed(),
            MockPlugin::new("stopper", &log)
                .option("stop-after")
                .taking_value()
                .boxed(),
        ]);

        assert_eq!(code, ExitCode::Success);
        assert_eq!(
            *log.borrow(),
            vec![
                "sampler:command:sample".to_string(),
                "sampler:option:fast".to_string(),
                "stopper:option:stop-after".to_string(),
                "stopper:value:10".to_string(),
                "sampler:option:fast".to_string(),
                "sampler:trigger".to_string(),
            ]
        );
        assert_eq!(probe.borrow().created, 1);
        assert_eq!(platform.run_state(), RunState::Starting);
        assert_eq!(entries(&apps, "create"), 0);
    }

    #[test]
    fn test_no_application_requested_is_no_sample() {
        let log = journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&["sample"], &probe);

        let code = platform.initialize(vec![
            MockPlugin::new("sampler", &log).command("sample").boxed(),
        ]);

        assert_eq!(code, ExitCode::NoSample);
        assert_eq!(probe.borrow().created, 0);
    }

    #[test]
    fn test_close_during_dispatch_wins_over_request() {
        let log = journal();
        let apps = app_journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&["samples"], &probe);

        let code = platform.initialize(vec![
            MockPlugin::new("lister", &log)
                .command("samples")
                .requesting(mock_app("hello", AppBehavior::default(), &apps))
                .closing_on_trigger()
                .boxed(),
        ]);

        assert_eq!(code, ExitCode::Close);
        assert_eq!(probe.borrow().created, 0);
    }

    #[test]
    fn test_window_creation_failure_is_fatal() {
        let log = journal();
        let apps = app_journal();
        let mut platform = Platform::new(args(&["sample"]), failing_window_factory());

        let code = platform.initialize(vec![
            MockPlugin::new("sampler", &log)
                .command("sample")
                .requesting(mock_app("hello", AppBehavior::default(), &apps))
                .boxed(),
        ]);

        assert_eq!(code, ExitCode::FatalError);
        assert!(platform.last_error().is_some_and(|e| e.contains("no display")));
    }

    #[test]
    fn test_window_created_with_merged_properties() {
        let log = journal();
        let apps = app_journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&["sample"], &probe).with_window_properties(
            &OptionalWindowProperties {
                mode: Some(WindowMode::Headless),
                extent: OptionalExtent {
                    width: Some(800),
                    height: None,
                },
                ..Default::default()
            },
        );

        let code = platform.initialize(vec![
            MockPlugin::new("sampler", &log)
                .command("sample")
                .requesting(mock_app("hello", AppBehavior::default(), &apps))
                .boxed(),
        ]);

        assert_eq!(code, ExitCode::Success);
        let created = probe.borrow().created_with.clone().unwrap();
        assert_eq!(created.mode, WindowMode::Headless);
        assert_eq!(created.extent.width, 800);
        assert_eq!(created.extent.height, 720);
    }

    #[test]
    fn test_only_plugins_in_use_get_hooks() {
        let log = journal();
        let apps = app_journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&["sample", "--fast"], &probe);

        platform.initialize(vec![
            MockPlugin::new("sampler", &log)
                .command("sample")
                .requesting(mock_app("hello", AppBehavior::default(), &apps))
                .boxed(),
            MockPlugin::new("speedy", &log)
                .option("fast")
                .hooks(&[Hook::OnUpdate])
                .boxed(),
            MockPlugin::new("idle", &log)
                .option("slow")
                .hooks(&[Hook::OnUpdate, Hook::OnAppStart])
                .boxed(),
        ]);

        let hooks = platform.registry().hooks();
        assert_eq!(hooks.subscribers(Hook::OnUpdate).len(), 1);
        assert!(hooks.subscribers(Hook::OnAppStart).is_empty());
        assert_eq!(platform.registry().active_plugins().len(), 2);
    }

    #[test]
    fn test_command_conflict_first_plugin_wins() {
        let log = journal();
        let apps = app_journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&["sample"], &probe);

        let code = platform.initialize(vec![
            MockPlugin::new("first", &log)
                .command("sample")
                .requesting(mock_app("hello", AppBehavior::default(), &apps))
                .boxed(),
            MockPlugin::new("second", &log)
                .command("sample")
                .option("extra")
                .boxed(),
        ]);

        assert_eq!(code, ExitCode::Success);
        assert_eq!(
            *log.borrow(),
            vec!["first:command:sample".to_string(), "first:trigger".to_string()]
        );
        assert_eq!(platform.registry().conflicts().len(), 1);
        assert!(platform.registry().option_owner("extra").is_some());
    }

    #[test]
    fn test_force_close_suppresses_exit_pause() {
        let log = journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&["sample", "--force-close"], &probe);

        platform.initialize(vec![
            MockPlugin::new("sampler", &log).command("sample").boxed(),
            MockPlugin::new("force-close", &log)
                .option("force-close")
                .suppressing_exit_pause()
                .boxed(),
        ]);

        assert!(platform.exit_pause_suppressed());
    }

    #[test]
    fn test_help_column_width() {
        let log = journal();
        let probe = SharedWindowProbe::default();
        let mut platform = platform(&["-h"], &probe);

        platform.initialize(vec![
            MockPlugin::new("a", &log).command("go").boxed(),
            MockPlugin::new("b", &log).option("stop-after-frame").boxed(),
        ]);

        assert_eq!(platform.help_column_width(), "stop-after-frame".len());
    }
}

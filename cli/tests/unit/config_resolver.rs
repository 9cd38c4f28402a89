//! Unit tests for `ConfigResolver` — derivation, validation and the
//! confirmation state machine, driven by a scripted prompter.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::PathBuf;

use func_cli::application::services::create_config::{ConfigResolver, Resolution};
use func_cli::domain::{CreationDescriptor, NameError, PromptError};

use crate::mocks::{
    Answer, Catalog, RecordingReporter, RuleValidator, ScriptedPrompter, Terminal, args, bound,
    cwd,
};

fn resolve_with(
    prompter: &ScriptedPrompter,
    reporter: &RecordingReporter,
    interactive: bool,
    argv: &[String],
    confirm: bool,
) -> anyhow::Result<Resolution> {
    let resolver = ConfigResolver {
        validator: &RuleValidator,
        terminal: &Terminal(interactive),
        prompter,
        runtimes: &Catalog::standard(),
        reporter,
    };
    resolver.resolve(argv, &bound(confirm), cwd())
}

fn accepted(resolution: Resolution) -> CreationDescriptor {
    match resolution {
        Resolution::Accepted(d) => d,
        Resolution::Cancelled => panic!("expected an accepted descriptor"),
    }
}

// ── Without confirmation ─────────────────────────────────────────────────────

#[test]
fn test_resolve_relative_path_uses_bound_defaults() {
    let prompter = ScriptedPrompter::default();
    let reporter = RecordingReporter::default();

    let d = accepted(resolve_with(&prompter, &reporter, true, &args("myfunc"), false).expect("ok"));

    assert_eq!(d.name, "myfunc");
    assert_eq!(d.path, PathBuf::from("/home/dev/src/myfunc"));
    assert_eq!(d.runtime, "node");
    assert_eq!(d.template, "http");
    assert_eq!(d.repositories, bound(false).repositories);
    assert!(!d.confirm);
    assert_eq!(prompter.asked_count(), 0);
}

#[test]
fn test_resolve_without_args_uses_cwd() {
    let prompter = ScriptedPrompter::default();
    let reporter = RecordingReporter::default();
    let resolver = ConfigResolver {
        validator: &RuleValidator,
        terminal: &Terminal(false),
        prompter: &prompter,
        runtimes: &Catalog::standard(),
        reporter: &reporter,
    };

    let d = accepted(
        resolver
            .resolve(&[], &bound(false), std::path::Path::new("/home/u/project-x"))
            .expect("ok"),
    );

    assert_eq!(d.name, "project-x");
    assert_eq!(d.path, PathBuf::from("/home/u/project-x"));
}

#[test]
fn test_resolve_without_confirm_prints_summary() {
    let prompter = ScriptedPrompter::default();
    let reporter = RecordingReporter::default();

    resolve_with(&prompter, &reporter, true, &args("myfunc"), false).expect("ok");

    let fields = reporter.fields.borrow();
    let labels: Vec<&str> = fields.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(
        labels,
        ["Project path:", "Function name:", "Runtime:", "Template:"]
    );
    assert_eq!(fields[1].1, "myfunc");
}

#[test]
fn test_resolve_confirm_on_non_interactive_terminal_skips_prompts() {
    let prompter = ScriptedPrompter::default();
    let reporter = RecordingReporter::default();

    let d = accepted(resolve_with(&prompter, &reporter, false, &args("myfunc"), true).expect("ok"));

    assert_eq!(d.name, "myfunc");
    assert_eq!(prompter.asked_count(), 0);
    assert_eq!(reporter.fields.borrow().len(), 4);
}

#[test]
fn test_resolve_ignores_extra_positional_args() {
    let prompter = ScriptedPrompter::default();
    let reporter = RecordingReporter::default();
    let argv = vec!["first".to_string(), "second".to_string()];

    let d = accepted(resolve_with(&prompter, &reporter, false, &argv, false).expect("ok"));

    assert_eq!(d.name, "first");
}

// ── Validation ───────────────────────────────────────────────────────────────

#[test]
fn test_resolve_invalid_name_fails_before_any_prompt() {
    let prompter = ScriptedPrompter::default();
    let reporter = RecordingReporter::default();

    let err = resolve_with(&prompter, &reporter, true, &args("Bad Name!"), true).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<NameError>(),
        Some(NameError::Invalid { name }) if name == "Bad Name!"
    ));
    assert_eq!(prompter.asked_count(), 0);
    assert!(reporter.fields.borrow().is_empty());
}

#[test]
fn test_resolve_root_path_has_empty_name() {
    let prompter = ScriptedPrompter::default();
    let reporter = RecordingReporter::default();

    let err = resolve_with(&prompter, &reporter, false, &args("/"), false).unwrap_err();

    assert_eq!(err.downcast_ref::<NameError>(), Some(&NameError::Empty));
}

#[test]
fn test_resolve_too_long_name_is_rejected() {
    let prompter = ScriptedPrompter::default();
    let reporter = RecordingReporter::default();
    let long = "a".repeat(64);

    let err = resolve_with(&prompter, &reporter, false, &args(&long), false).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<NameError>(),
        Some(NameError::TooLong { len: 64, .. })
    ));
}

// ── Confirmation prompts ─────────────────────────────────────────────────────

#[test]
fn test_confirm_accepting_defaults_keeps_descriptor() {
    let prompter = ScriptedPrompter::new([Answer::Text(""), Answer::Text(""), Answer::Text("")]);
    let reporter = RecordingReporter::default();

    let d = accepted(resolve_with(&prompter, &reporter, true, &args("myfunc"), true).expect("ok"));

    assert_eq!(d.name, "myfunc");
    assert_eq!(d.runtime, "node");
    assert_eq!(d.template, "http");

    let asked = prompter.asked.borrow();
    assert_eq!(asked.len(), 3);
    assert_eq!(asked[0].message, "Project path");
    assert_eq!(asked[0].default, "/home/dev/src/myfunc");
    assert_eq!(asked[1].message, "Runtime");
    assert_eq!(asked[1].default, "node");
    assert_eq!(asked[1].options.len(), 7);
    assert_eq!(asked[2].message, "Template");
    assert_eq!(asked[2].default, "http");
}

#[test]
fn test_confirm_edits_replace_fields_and_rederive_name() {
    let prompter = ScriptedPrompter::new([
        Answer::Text("other-fn"),
        Answer::Choice(0),
        Answer::Text("events"),
    ]);
    let reporter = RecordingReporter::default();

    let d = accepted(resolve_with(&prompter, &reporter, true, &args("myfunc"), true).expect("ok"));

    assert_eq!(d.name, "other-fn");
    assert_eq!(d.path, PathBuf::from("/home/dev/src/other-fn"));
    assert_eq!(d.runtime, "go");
    assert_eq!(d.template, "events");
    assert_eq!(d.repositories, bound(true).repositories);
    assert!(d.confirm);
}

#[test]
fn test_confirm_reprompts_path_until_name_is_valid() {
    let prompter = ScriptedPrompter::new([
        Answer::Text("Bad Name!"),
        Answer::Text("/"),
        Answer::Text("good-name"),
        Answer::Text(""),
        Answer::Text(""),
    ]);
    let reporter = RecordingReporter::default();

    let d = accepted(resolve_with(&prompter, &reporter, true, &args("myfunc"), true).expect("ok"));

    assert_eq!(d.name, "good-name");
    let asked = prompter.asked.borrow();
    let messages: Vec<&str> = asked.iter().map(|a| a.message.as_str()).collect();
    assert_eq!(
        messages,
        ["Project path", "Project path", "Project path", "Runtime", "Template"]
    );
    assert_eq!(reporter.warnings.borrow().len(), 2);
}

#[test]
fn test_confirm_interrupt_during_path_reprompt_cancels() {
    let prompter = ScriptedPrompter::new([Answer::Text("Bad Name!"), Answer::Interrupt]);
    let reporter = RecordingReporter::default();

    let resolution = resolve_with(&prompter, &reporter, true, &args("myfunc"), true).expect("ok");

    assert_eq!(resolution, Resolution::Cancelled);
    assert_eq!(prompter.asked_count(), 2);
}

#[test]
fn test_confirm_interrupt_at_each_prompt_cancels() {
    let scripts: [Vec<Answer>; 3] = [
        vec![Answer::Interrupt],
        vec![Answer::Text(""), Answer::Interrupt],
        vec![Answer::Text(""), Answer::Text(""), Answer::Interrupt],
    ];
    for (i, script) in scripts.into_iter().enumerate() {
        let prompter = ScriptedPrompter::new(script);
        let reporter = RecordingReporter::default();

        let resolution =
            resolve_with(&prompter, &reporter, true, &args("myfunc"), true).expect("ok");

        assert_eq!(resolution, Resolution::Cancelled, "interrupt at prompt {i}");
        assert_eq!(prompter.asked_count(), i + 1);
    }
}

#[test]
fn test_confirm_terminal_failure_is_an_error() {
    let prompter = ScriptedPrompter::new([Answer::Text(""), Answer::IoFail]);
    let reporter = RecordingReporter::default();

    let err = resolve_with(&prompter, &reporter, true, &args("myfunc"), true).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<PromptError>(),
        Some(PromptError::Io(_))
    ));
}

#[test]
fn test_confirm_unknown_bound_runtime_defaults_to_first_option() {
    let prompter = ScriptedPrompter::new([Answer::Text(""), Answer::Text(""), Answer::Text("")]);
    let reporter = RecordingReporter::default();
    let mut cfg = bound(true);
    cfg.runtime = "cobol".to_string();
    let resolver = ConfigResolver {
        validator: &RuleValidator,
        terminal: &Terminal(true),
        prompter: &prompter,
        runtimes: &Catalog::standard(),
        reporter: &reporter,
    };

    let d = accepted(resolver.resolve(&args("myfunc"), &cfg, cwd()).expect("ok"));

    assert_eq!(d.runtime, "go");
    assert_eq!(prompter.asked.borrow()[1].default, "go");
}

#[test]
fn test_confirm_empty_catalog_skips_runtime_prompt() {
    let prompter = ScriptedPrompter::new([Answer::Text(""), Answer::Text("")]);
    let reporter = RecordingReporter::default();
    let resolver = ConfigResolver {
        validator: &RuleValidator,
        terminal: &Terminal(true),
        prompter: &prompter,
        runtimes: &Catalog(Vec::new()),
        reporter: &reporter,
    };

    let d = accepted(resolver.resolve(&args("myfunc"), &bound(true), cwd()).expect("ok"));

    assert_eq!(d.runtime, "node");
    assert_eq!(prompter.asked_count(), 2);
}

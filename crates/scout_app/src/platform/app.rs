use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use scout_core::{AppState, AppViewModel, FlowState, Msg, PollPolicy, Resolution};
use scout_engine::{ApiSettings, EngineHandle};
use scout_logging::{level_for_verbosity, scout_info, scout_warn};

use super::effects::{dispatch, drive, EffectRunner};
use super::logging;
use super::ui::constants::{HINT_CODE_MISSING, HINT_URL_INVALID, LABEL_CODE, LABEL_URL};
use super::ui::{prompt, render};
use crate::Cli;

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::initialize(cli.log, level_for_verbosity(cli.verbose));

    let policy = PollPolicy {
        max_polls: cli.max_polls,
        ..PollPolicy::default()
    };
    match policy.max_polls {
        Some(max) => scout_info!("polling at most {} times per submission", max),
        None => scout_warn!(
            "no poll budget set; pending tasks are checked until the backend answers"
        ),
    }

    let engine = EngineHandle::new(ApiSettings::default()).context("starting engine")?;
    let runner = EffectRunner::new(engine);
    let term = Term::stdout();
    let mut state = AppState::with_policy(policy);
    if let Some(url) = cli.url.clone() {
        state = dispatch(state, Msg::UrlChanged(url), &runner);
    }
    if let Some(code) = cli.code.clone() {
        state = dispatch(state, Msg::CodeChanged(code), &runner);
    }

    let outcome = if cli.url.is_some() && cli.code.is_some() {
        run_once(state, &runner, &term)
    } else {
        let stdin = io::stdin();
        run_interactive(state, &runner, &term, &mut stdin.lock()).map(|_| ExitCode::SUCCESS)
    };

    runner.shutdown();
    outcome
}

/// Submits the pre-filled form once and exits with the outcome.
fn run_once(state: AppState, runner: &EffectRunner, term: &Term) -> anyhow::Result<ExitCode> {
    let state = submit(state, runner, term)?;
    show_outcome(&state.view(), term)?;
    Ok(match state.flow() {
        FlowState::Resolved(Resolution::Completed { .. }) => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

fn run_interactive<R: BufRead>(
    mut state: AppState,
    runner: &EffectRunner,
    term: &Term,
    input: &mut R,
) -> anyhow::Result<()> {
    let mut output = term.clone();
    loop {
        write_lines(term, &render::render_form(&state.view()))?;

        let current = state.url().value.clone();
        let Some(url) = prompt::read_field(input, &mut output, LABEL_URL, &current)? else {
            break;
        };
        if url.is_empty() {
            break;
        }
        state = dispatch(state, Msg::UrlChanged(url), runner);
        term.write_line(&render::validity_hint(state.url().valid, HINT_URL_INVALID))?;

        let current = state.code().value.clone();
        let Some(code) = prompt::read_field(input, &mut output, LABEL_CODE, &current)? else {
            break;
        };
        state = dispatch(state, Msg::CodeChanged(code), runner);
        term.write_line(&render::validity_hint(state.code().valid, HINT_CODE_MISSING))?;
        term.write_line(&render::render_button(&state.view()))?;

        state = submit(state, runner, term)?;
        show_outcome(&state.view(), term)?;
        if state.notification().is_some() {
            prompt::wait_for_enter(input)?;
            state = dispatch(state, Msg::NotificationClosed, runner);
        }
        term.write_line("")?;
    }
    Ok(())
}

/// Presses the submit button and shows a spinner until the flow settles.
fn submit(state: AppState, runner: &EffectRunner, term: &Term) -> anyhow::Result<AppState> {
    let state = dispatch(state, Msg::SubmitClicked, runner);
    if !state.is_loading() {
        return Ok(state);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .context("spinner template")?,
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(render::loading_message(&state.view()));

    let state = drive(state, runner, |view| {
        spinner.set_message(render::loading_message(view));
    });
    spinner.finish_and_clear();
    term.flush()?;
    Ok(state)
}

fn show_outcome(view: &AppViewModel, term: &Term) -> io::Result<()> {
    if let Some(notification) = &view.notification {
        write_lines(term, &render::render_notification(notification))?;
    }
    if let Some(event) = &view.event {
        write_lines(term, &render::render_event(event))?;
    }
    Ok(())
}

fn write_lines(term: &Term, lines: &[String]) -> io::Result<()> {
    for line in lines {
        term.write_line(line)?;
    }
    Ok(())
}

//! Interactive form session on stdin/stdout.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use gradebook_core::export::{format_record_console, format_slots_console};
use gradebook_core::{FormConfig, FormController, Mode, Presenter};
use tracing::{info, warn};

use crate::cli::Args;
use crate::input::{FormCommand, HELP};
use crate::presenter::TerminalPresenter;

pub fn run(args: &Args) -> Result<()> {
    let config = load_config(args);
    info!(
        "Starting {} form (max {} scores, log: {:?})",
        config.mode, config.max_scores, config.log_path
    );

    let mut form = FormController::new(config);
    let stdin = io::stdin();
    let mut presenter = TerminalPresenter::new(io::stdout());

    write_header(&form, &mut presenter)?;

    run_session(&mut form, stdin.lock(), &mut presenter, args.json)
}

/// Plain banner; the success style is kept for graded results.
fn write_header<W: Write>(
    form: &FormController,
    presenter: &mut TerminalPresenter<W>,
) -> Result<()> {
    writeln!(
        presenter.writer(),
        "Student Grading System ({} mode). Type 'help' for commands.",
        form.mode()
    )?;
    Ok(())
}

/// Config file values with command-line overrides applied.
///
/// Without a config file the preset for the requested mode is used.
pub fn load_config(args: &Args) -> FormConfig {
    let preset = match args.mode.unwrap_or_default() {
        Mode::Student => FormConfig::student(),
        Mode::Class => FormConfig::class(),
    };

    let mut config = if args.config.exists() {
        match FormConfig::load(&args.config) {
            Ok(c) => {
                info!("Loaded config from {:?}", args.config);
                c
            }
            Err(e) => {
                warn!("Failed to load config: {}, using defaults", e);
                preset
            }
        }
    } else {
        preset
    };

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(scope) = args.best_scope {
        config.best_scope = Some(scope);
    }
    match args.max_scores {
        Some(0) => warn!("Ignoring --max-scores 0"),
        Some(max) => config.max_scores = max,
        None => {}
    }
    if args.no_log {
        config.log_path = None;
    } else if let Some(path) = &args.log {
        config.log_path = Some(path.clone());
    }
    config
}

/// Read commands until end of input or `quit`.
pub fn run_session<R, W>(
    form: &mut FormController,
    input: R,
    presenter: &mut TerminalPresenter<W>,
    json: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    prompt(presenter)?;
    for line in input.lines() {
        let line = line?;
        match FormCommand::parse(&line) {
            Ok(Some(FormCommand::Quit)) => break,
            Ok(Some(command)) => execute(form, command, presenter, json)?,
            Ok(None) => {}
            Err(e) => writeln!(presenter.writer(), "{}", e)?,
        }
        prompt(presenter)?;
    }
    Ok(())
}

fn prompt<W: Write>(presenter: &mut TerminalPresenter<W>) -> Result<()> {
    let out = presenter.writer();
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn execute<W: Write>(
    form: &mut FormController,
    command: FormCommand,
    presenter: &mut TerminalPresenter<W>,
    json: bool,
) -> Result<()> {
    match command {
        FormCommand::Name(name) => form.set_name(&name),
        FormCommand::Count(text) => {
            // Rejections are already shown by the presenter
            let _ = form.configure_fields(&text, presenter);
        }
        FormCommand::Score { index, text } => {
            if let Err(e) = form.set_slot_text(index, &text) {
                presenter.show_error(&e);
            }
        }
        FormCommand::Scores(text) => {
            if let Err(e) = form.enter_scores(&text) {
                presenter.show_error(&e);
            }
        }
        FormCommand::Submit => {
            let _ = form.submit(presenter);
        }
        FormCommand::Reset => form.reset(presenter),
        FormCommand::Slots => {
            if form.slots().is_empty() {
                writeln!(presenter.writer(), "No score fields (use 'count <n>')")?;
            } else {
                writeln!(presenter.writer(), "{}", format_slots_console(form.slots()))?;
            }
        }
        FormCommand::Records => print_records(form, presenter, json)?,
        FormCommand::Help => writeln!(presenter.writer(), "{}", HELP)?,
        FormCommand::Quit => {}
    }
    Ok(())
}

fn print_records<W: Write>(
    form: &FormController,
    presenter: &mut TerminalPresenter<W>,
    json: bool,
) -> Result<()> {
    if json {
        match serde_json::to_string_pretty(form.records()) {
            Ok(text) => writeln!(presenter.writer(), "{}", text)?,
            Err(e) => presenter.show_error(&e.into()),
        }
        return Ok(());
    }

    if form.records().is_empty() {
        writeln!(presenter.writer(), "No records yet")?;
    }
    for record in form.records() {
        writeln!(presenter.writer(), "{}", format_record_console(record))?;
    }
    Ok(())
}

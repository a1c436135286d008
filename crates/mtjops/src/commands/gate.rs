//! Gate check-in handlers: single scan and the interactive scanning loop.
//!
//! The live path sends every code to the backend and classifies the
//! response; stats shown after an admission are always re-fetched, never
//! derived locally. `gate run --rehearse` resolves scans against a
//! local [`CheckinLedger`] seeded from the fetched roster, so staff can
//! drill the flow without consuming real passes.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use mtjops_core::{Backend, CheckinLedger, EntityId, PassCode, ScanOutcome};

use crate::cli::{GateArgs, GateCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Session tally ───────────────────────────────────────────────────

/// Per-session counters for one gate run. Display-only; the backend's
/// stats remain the source of truth for the event itself.
#[derive(Debug, Default)]
struct SessionTally {
    admitted: u32,
    rejected: u32,
}

impl SessionTally {
    fn record(&mut self, outcome: &ScanOutcome) {
        if outcome.is_admitted() {
            self.admitted += 1;
        } else {
            self.rejected += 1;
        }
    }
}

impl std::fmt::Display for SessionTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} admitted, {} rejected this session",
            self.admitted, self.rejected
        )
    }
}

// ── Verdict formatting ──────────────────────────────────────────────

fn verdict_line(outcome: &ScanOutcome, color: bool) -> String {
    let message = outcome.message();
    if !color {
        let tag = if outcome.is_admitted() {
            "ADMITTED"
        } else {
            "REJECTED"
        };
        return format!("{tag}  {message}");
    }
    if outcome.is_admitted() {
        format!("{}  {message}", "ADMITTED".green().bold())
    } else {
        format!("{}  {message}", "REJECTED".red().bold())
    }
}

fn spinner(quiet: bool) -> ProgressBar {
    if quiet || !io::IsTerminal::is_terminal(&io::stderr()) {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.enable_steady_tick(Duration::from_millis(80));
    bar.set_message("scanning...");
    bar
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    backend: &Backend,
    args: GateArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(&global.color);
    match args.command {
        GateCommand::Scan { event, code } => {
            let event_id = EntityId::from(event);
            let outcome = backend.scan(&event_id, &PassCode::new(&code)).await?;
            println!("{}", verdict_line(&outcome, color));

            if outcome.is_admitted() {
                let stats = backend.event_stats(&event_id).await?;
                if !global.quiet {
                    eprintln!(
                        "Checked in: {}/{} ({} remaining)",
                        stats.attendees_count, stats.capacity, stats.remaining
                    );
                }
            }
            Ok(())
        }

        GateCommand::Run { event, rehearse } => {
            let event_id = EntityId::from(event);
            if rehearse {
                run_rehearsal(backend, &event_id, global, color).await
            } else {
                run_live(backend, &event_id, global, color).await
            }
        }
    }
}

// ── Live loop ───────────────────────────────────────────────────────

async fn run_live(
    backend: &Backend,
    event_id: &EntityId,
    global: &GlobalOpts,
    color: bool,
) -> Result<(), CliError> {
    let event = backend.get_event(event_id).await?;
    if !global.quiet {
        eprintln!("Gate open for '{}' — scan codes, 'quit' to stop", event.title);
    }

    let mut tally = SessionTally::default();
    let stdin = io::stdin();
    loop {
        prompt(global.quiet)?;
        let Some(line) = read_line(&stdin)? else {
            break;
        };
        if is_quit(&line) {
            break;
        }

        let code = PassCode::new(&line);
        // An empty code never leaves the process.
        if code.is_empty() {
            println!("{}", verdict_line(&ScanOutcome::EmptyCode, color));
            tally.record(&ScanOutcome::EmptyCode);
            continue;
        }

        let bar = spinner(global.quiet);
        let outcome = backend.scan(event_id, &code).await?;
        bar.finish_and_clear();
        println!("{}", verdict_line(&outcome, color));
        tally.record(&outcome);

        if outcome.is_admitted() {
            let stats = backend.event_stats(event_id).await?;
            if !global.quiet {
                eprintln!(
                    "Checked in: {}/{} ({} remaining)",
                    stats.attendees_count, stats.capacity, stats.remaining
                );
            }
        }
    }

    if !global.quiet {
        eprintln!("Gate closed — {tally}");
    }
    Ok(())
}

// ── Rehearsal loop ──────────────────────────────────────────────────

async fn run_rehearsal(
    backend: &Backend,
    event_id: &EntityId,
    global: &GlobalOpts,
    color: bool,
) -> Result<(), CliError> {
    let event = backend.get_event(event_id).await?;
    let roster = backend.list_passes(event_id, None).await?;
    let mut ledger = CheckinLedger::from_event(&event, roster);

    if !global.quiet {
        eprintln!(
            "Rehearsal gate for '{}' ({} seats) — nothing is sent to the backend",
            event.title,
            ledger.capacity()
        );
    }

    let mut tally = SessionTally::default();
    let stdin = io::stdin();
    loop {
        prompt(global.quiet)?;
        let Some(line) = read_line(&stdin)? else {
            break;
        };
        if is_quit(&line) {
            break;
        }

        let outcome = ledger.scan(&PassCode::new(&line));
        println!("{}", verdict_line(&outcome, color));
        tally.record(&outcome);

        if outcome.is_admitted() {
            let stats = ledger.stats();
            if !global.quiet {
                eprintln!(
                    "Checked in: {}/{} ({} remaining)",
                    stats.attendees_count, stats.capacity, stats.remaining
                );
            }
        }
    }

    if !global.quiet {
        eprintln!("Rehearsal over ({tally}) — no passes were consumed");
    }
    Ok(())
}

// ── Loop plumbing ───────────────────────────────────────────────────

fn prompt(quiet: bool) -> Result<(), CliError> {
    if !quiet {
        eprint!("> ");
        io::stderr().flush()?;
    }
    Ok(())
}

/// Read one line from stdin; `None` means EOF (scanner unplugged, ^D).
fn read_line(stdin: &io::Stdin) -> Result<Option<String>, CliError> {
    let mut line = String::new();
    let n = stdin.lock().read_line(&mut line)?;
    if n == 0 { Ok(None) } else { Ok(Some(line)) }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "quit" | "exit" | "q")
}

//! Pass command handlers: generate, list, revoke.

use tabled::Tabled;

use mtjops_core::{Backend, EntityId, Pass};

use crate::cli::{GlobalOpts, PassesArgs, PassesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PassRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Used At")]
    used_at: String,
}

impl From<&Pass> for PassRow {
    fn from(p: &Pass) -> Self {
        Self {
            id: p.id.to_string(),
            code: p.code.to_string(),
            status: p.status.to_string(),
            used_at: util::fmt_time(p.used_at),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    backend: &Backend,
    args: PassesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PassesCommand::Generate { event, count } => {
            let event_id = EntityId::from(event);
            let created = backend.generate_passes(&event_id, count).await?;

            // Fresh passes are the one place codes are surfaced in
            // full: staff print or export them right after this.
            let out = output::render_list(
                &global.output,
                &created,
                |x| PassRow::from(x),
                |p| p.code.to_string(),
            );
            output::print_output(&out, global.quiet);
            if !global.quiet {
                eprintln!("{} pass(es) generated", created.len());
            }

            // Re-fetch stats so the caller sees backend truth.
            let stats = backend.event_stats(&event_id).await?;
            if !global.quiet {
                eprintln!(
                    "Totals: {} passes, {} unused",
                    stats.passes_total, stats.passes_unused
                );
            }
            Ok(())
        }

        PassesCommand::List { event, status } => {
            let filter = status.as_deref().map(util::parse_pass_status).transpose()?;
            let passes = backend
                .list_passes(&EntityId::from(event), filter)
                .await?;
            let out = output::render_list(
                &global.output,
                &passes,
                |x| PassRow::from(x),
                |p| p.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PassesCommand::Revoke { event, pass } => {
            if !util::confirm(&format!("Revoke pass {pass}?"), global.yes)? {
                return Ok(());
            }

            let event_id = EntityId::from(event);
            let revoked = backend
                .revoke_pass(&event_id, &EntityId::from(pass))
                .await?;
            if !global.quiet {
                eprintln!("Pass {} revoked", revoked.id);
            }

            let stats = backend.event_stats(&event_id).await?;
            if !global.quiet {
                eprintln!(
                    "Totals: {} unused, {} revoked",
                    stats.passes_unused, stats.passes_revoked
                );
            }
            Ok(())
        }
    }
}

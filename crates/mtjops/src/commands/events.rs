//! Event command handlers.

use tabled::Tabled;

use mtjops_core::{Backend, EntityId, Event, EventDraft, EventStats, EventUpdate};

use crate::cli::{EventsArgs, EventsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Starts")]
    starts: String,
    #[tabled(rename = "Capacity")]
    capacity: u32,
    #[tabled(rename = "Public")]
    public: String,
}

impl From<&Event> for EventRow {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id.to_string(),
            title: e.title.clone(),
            status: e.status.to_string(),
            starts: util::fmt_time(e.starts_at),
            capacity: e.allowed_attendees,
            public: if e.is_public { "yes" } else { "no" }.into(),
        }
    }
}

fn detail(e: &Event) -> String {
    [
        format!("ID:        {}", e.id),
        format!("Title:     {}", e.title),
        format!("Status:    {}", e.status),
        format!("Starts:    {}", util::fmt_time(e.starts_at)),
        format!("Ends:      {}", util::fmt_time(e.ends_at)),
        format!("Location:  {}", util::fmt_opt(e.location.as_deref())),
        format!("Capacity:  {}", e.allowed_attendees),
        format!("Public:    {}", e.is_public),
        format!("Created:   {}", util::fmt_time(e.created_at)),
    ]
    .join("\n")
}

fn stats_detail(s: &EventStats) -> String {
    [
        format!("Capacity:   {}", s.capacity),
        format!("Attendees:  {}", s.attendees_count),
        format!("Remaining:  {}", s.remaining),
        format!("Passes:     {} total", s.passes_total),
        format!("  unused:   {}", s.passes_unused),
        format!("  used:     {}", s.passes_used),
        format!("  revoked:  {}", s.passes_revoked),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    backend: &Backend,
    args: EventsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        EventsCommand::List { status } => {
            let filter = status.as_deref().map(util::parse_event_status).transpose()?;
            let events = backend.list_events(filter).await?;
            let out = output::render_list(
                &global.output,
                &events,
                |x| EventRow::from(x),
                |e| e.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EventsCommand::Get { id } => {
            let event = backend.get_event(&EntityId::from(id)).await?;
            let out =
                output::render_single(&global.output, &event, detail, |e| e.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EventsCommand::Add {
            title,
            starts,
            ends,
            location,
            capacity,
            public,
        } => {
            let draft = EventDraft {
                title,
                starts_at: starts
                    .as_deref()
                    .map(|s| util::parse_timestamp("starts", s))
                    .transpose()?,
                ends_at: ends
                    .as_deref()
                    .map(|s| util::parse_timestamp("ends", s))
                    .transpose()?,
                location,
                allowed_attendees: capacity,
                is_public: public,
            };
            let event = backend.create_event(draft).await?;
            if !global.quiet {
                eprintln!("Event created: {}", event.id);
            }
            Ok(())
        }

        EventsCommand::Update {
            id,
            title,
            starts,
            ends,
            location,
            capacity,
            public,
        } => {
            let update = EventUpdate {
                title,
                starts_at: starts
                    .as_deref()
                    .map(|s| util::parse_timestamp("starts", s))
                    .transpose()?,
                ends_at: ends
                    .as_deref()
                    .map(|s| util::parse_timestamp("ends", s))
                    .transpose()?,
                location,
                allowed_attendees: capacity,
                is_public: public,
            };
            let event = backend.update_event(&EntityId::from(id), update).await?;
            if !global.quiet {
                eprintln!("Event updated: {}", event.id);
            }
            Ok(())
        }

        EventsCommand::Stats { id } => {
            let stats = backend.event_stats(&EntityId::from(id)).await?;
            let out = output::render_single(&global.output, &stats, stats_detail, |s| {
                format!("{}/{}", s.attendees_count, s.capacity)
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

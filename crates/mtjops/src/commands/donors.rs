//! Donor command handlers.

use tabled::Tabled;

use mtjops_core::{Backend, Donor, DonorDraft, DonorUpdate, EntityId};

use crate::cli::{DonorsArgs, DonorsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DonorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "City")]
    city: String,
}

impl From<&Donor> for DonorRow {
    fn from(d: &Donor) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name.clone(),
            phone: util::fmt_opt(d.phone.as_deref()),
            city: util::fmt_opt(d.city.as_deref()),
        }
    }
}

fn detail(d: &Donor) -> String {
    [
        format!("ID:      {}", d.id),
        format!("Name:    {}", d.name),
        format!("Phone:   {}", util::fmt_opt(d.phone.as_deref())),
        format!("CNIC:    {}", util::fmt_opt(d.cnic.as_deref())),
        format!("Email:   {}", util::fmt_opt(d.email.as_deref())),
        format!("City:    {}", util::fmt_opt(d.city.as_deref())),
        format!("Created: {}", util::fmt_time(d.created_at)),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    backend: &Backend,
    args: DonorsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DonorsCommand::List => {
            let donors = backend.list_donors().await?;
            let out = output::render_list(
                &global.output,
                &donors,
                |x| DonorRow::from(x),
                |d| d.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DonorsCommand::Get { id } => {
            let donor = backend.get_donor(&EntityId::from(id)).await?;
            let out =
                output::render_single(&global.output, &donor, detail, |d| d.id.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DonorsCommand::Add {
            name,
            phone,
            cnic,
            email,
            city,
        } => {
            let donor = backend
                .create_donor(DonorDraft {
                    name,
                    phone,
                    cnic,
                    email,
                    city,
                })
                .await?;
            if !global.quiet {
                eprintln!("Donor registered: {}", donor.id);
            }
            Ok(())
        }

        DonorsCommand::Update {
            id,
            name,
            phone,
            cnic,
            email,
            city,
        } => {
            let donor = backend
                .update_donor(
                    &EntityId::from(id),
                    DonorUpdate {
                        name,
                        phone,
                        cnic,
                        email,
                        city,
                    },
                )
                .await?;
            if !global.quiet {
                eprintln!("Donor updated: {}", donor.id);
            }
            Ok(())
        }
    }
}

//! Donation box command handlers.
//!
//! Placement validates the region/city/route cascade through
//! [`LocationPicker`] before sending anything: a route id under the
//! wrong city fails here, not at the backend.

use tabled::Tabled;

use mtjops_core::{Backend, BoxPlacement, DonationBox, EntityId, LocationPicker};

use crate::cli::{BoxesArgs, BoxesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BoxRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Holder")]
    holder: String,
    #[tabled(rename = "Route")]
    route: String,
}

impl From<&DonationBox> for BoxRow {
    fn from(b: &DonationBox) -> Self {
        Self {
            id: b.id.to_string(),
            number: b.box_number.clone(),
            holder: b.holder_name.clone(),
            route: b.route_id.to_string(),
        }
    }
}

fn detail(b: &DonationBox) -> String {
    [
        format!("ID:      {}", b.id),
        format!("Number:  {}", b.box_number),
        format!("Holder:  {}", b.holder_name),
        format!("Region:  {}", b.region_id),
        format!("City:    {}", b.city_id),
        format!("Route:   {}", b.route_id),
        format!("Created: {}", util::fmt_time(b.created_at)),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    backend: &Backend,
    args: BoxesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BoxesCommand::List => {
            let boxes = backend.list_donation_boxes().await?;
            let out = output::render_list(
                &global.output,
                &boxes,
                |x| BoxRow::from(x),
                |b| b.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BoxesCommand::Get { id } => {
            let donation_box = backend.get_donation_box(&EntityId::from(id)).await?;
            let out = output::render_single(&global.output, &donation_box, detail, |b| {
                b.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BoxesCommand::Add {
            number,
            holder,
            region,
            city,
            route,
        } => {
            let location = resolve_location(backend, &region, &city, &route).await?;
            let donation_box = backend
                .place_donation_box(BoxPlacement {
                    box_number: number,
                    holder_name: holder,
                    location,
                })
                .await?;
            if !global.quiet {
                eprintln!("Donation box placed: {}", donation_box.id);
            }
            Ok(())
        }
    }
}

/// Walk the picker through region → city → route, fetching each level's
/// options as its parent is selected.
async fn resolve_location(
    backend: &Backend,
    region: &str,
    city: &str,
    route: &str,
) -> Result<mtjops_core::LocationSelection, CliError> {
    let region_id = EntityId::from(region);
    let city_id = EntityId::from(city);
    let route_id = EntityId::from(route);

    let mut picker = LocationPicker::new(backend.list_regions().await?);
    picker.select_region(&region_id)?;

    picker.load_cities(backend.list_cities(&region_id).await?)?;
    picker.select_city(&city_id)?;

    picker.load_routes(backend.list_routes(&city_id).await?)?;
    picker.select_route(&route_id)?;

    picker.selection().ok_or_else(|| CliError::Validation {
        field: "location".into(),
        reason: "incomplete region/city/route selection".into(),
    })
}

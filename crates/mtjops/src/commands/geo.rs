//! Geography browsing handlers: regions, cities, routes.

use tabled::Tabled;

use mtjops_core::{Backend, City, EntityId, Region, Route};

use crate::cli::{GeoArgs, GeoCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Region> for NameRow {
    fn from(r: &Region) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name.clone(),
        }
    }
}

impl From<&City> for NameRow {
    fn from(c: &City) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
        }
    }
}

impl From<&Route> for NameRow {
    fn from(r: &Route) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(backend: &Backend, args: GeoArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        GeoCommand::Regions => {
            let regions = backend.list_regions().await?;
            let out = output::render_list(
                &global.output,
                &regions,
                |x| NameRow::from(x),
                |r| r.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GeoCommand::Cities { region } => {
            let cities = backend.list_cities(&EntityId::from(region)).await?;
            let out = output::render_list(
                &global.output,
                &cities,
                |x| NameRow::from(x),
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        GeoCommand::Routes { city } => {
            let routes = backend.list_routes(&EntityId::from(city)).await?;
            let out = output::render_list(
                &global.output,
                &routes,
                |x| NameRow::from(x),
                |r| r.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

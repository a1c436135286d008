//! Dependent location selection: region → city → route.
//!
//! Donation boxes are placed on a collection route, which only exists
//! under a city, which only exists under a region. This is a dependent-
//! state reducer, not a state machine: changing a parent selection
//! resets everything below it, and options for a level can only be
//! loaded once the parent is chosen.

use crate::error::CoreError;
use crate::model::{City, EntityId, Region, Route};

/// Tracks the cascading region/city/route selection.
#[derive(Debug, Default)]
pub struct LocationPicker {
    regions: Vec<Region>,
    cities: Vec<City>,
    routes: Vec<Route>,
    region: Option<EntityId>,
    city: Option<EntityId>,
    route: Option<EntityId>,
}

/// A fully resolved region/city/route triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSelection {
    pub region_id: EntityId,
    pub city_id: EntityId,
    pub route_id: EntityId,
}

impl LocationPicker {
    pub fn new(regions: Vec<Region>) -> Self {
        Self {
            regions,
            ..Self::default()
        }
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Select a region. Clears the city and route selections and their
    /// option lists — they belong to the previous region.
    pub fn select_region(&mut self, id: &EntityId) -> Result<(), CoreError> {
        if !self.regions.iter().any(|r| &r.id == id) {
            return Err(CoreError::NotFound {
                entity_type: "region",
                identifier: id.to_string(),
            });
        }
        self.region = Some(id.clone());
        self.cities.clear();
        self.routes.clear();
        self.city = None;
        self.route = None;
        Ok(())
    }

    /// Provide the city options fetched for the selected region.
    pub fn load_cities(&mut self, cities: Vec<City>) -> Result<(), CoreError> {
        if self.region.is_none() {
            return Err(CoreError::ValidationFailed {
                message: "select a region before loading cities".into(),
            });
        }
        self.cities = cities;
        Ok(())
    }

    /// Select a city under the current region. Clears the route.
    pub fn select_city(&mut self, id: &EntityId) -> Result<(), CoreError> {
        if !self.cities.iter().any(|c| &c.id == id) {
            return Err(CoreError::NotFound {
                entity_type: "city",
                identifier: id.to_string(),
            });
        }
        self.city = Some(id.clone());
        self.routes.clear();
        self.route = None;
        Ok(())
    }

    /// Provide the route options fetched for the selected city.
    pub fn load_routes(&mut self, routes: Vec<Route>) -> Result<(), CoreError> {
        if self.city.is_none() {
            return Err(CoreError::ValidationFailed {
                message: "select a city before loading routes".into(),
            });
        }
        self.routes = routes;
        Ok(())
    }

    pub fn select_route(&mut self, id: &EntityId) -> Result<(), CoreError> {
        if !self.routes.iter().any(|r| &r.id == id) {
            return Err(CoreError::NotFound {
                entity_type: "route",
                identifier: id.to_string(),
            });
        }
        self.route = Some(id.clone());
        Ok(())
    }

    /// The complete triple, once all three levels are chosen.
    pub fn selection(&self) -> Option<LocationSelection> {
        Some(LocationSelection {
            region_id: self.region.clone()?,
            city_id: self.city.clone()?,
            route_id: self.route.clone()?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn region(id: &str) -> Region {
        Region {
            id: EntityId::from(id),
            name: id.to_uppercase(),
        }
    }

    fn city(id: &str, region_id: &str) -> City {
        City {
            id: EntityId::from(id),
            region_id: EntityId::from(region_id),
            name: id.to_uppercase(),
        }
    }

    fn route(id: &str, city_id: &str) -> Route {
        Route {
            id: EntityId::from(id),
            city_id: EntityId::from(city_id),
            name: id.to_uppercase(),
        }
    }

    fn picker_with_full_selection() -> LocationPicker {
        let mut picker = LocationPicker::new(vec![region("punjab"), region("sindh")]);
        picker.select_region(&EntityId::from("punjab")).unwrap();
        picker
            .load_cities(vec![city("lahore", "punjab"), city("multan", "punjab")])
            .unwrap();
        picker.select_city(&EntityId::from("lahore")).unwrap();
        picker.load_routes(vec![route("r-12", "lahore")]).unwrap();
        picker.select_route(&EntityId::from("r-12")).unwrap();
        picker
    }

    #[test]
    fn full_cascade_produces_a_selection() {
        let picker = picker_with_full_selection();
        let sel = picker.selection().unwrap();
        assert_eq!(sel.region_id, EntityId::from("punjab"));
        assert_eq!(sel.route_id, EntityId::from("r-12"));
    }

    #[test]
    fn changing_region_resets_city_and_route() {
        let mut picker = picker_with_full_selection();
        picker.select_region(&EntityId::from("sindh")).unwrap();

        assert!(picker.selection().is_none());
        assert!(picker.cities().is_empty());
        assert!(picker.routes().is_empty());
    }

    #[test]
    fn changing_city_resets_route_only() {
        let mut picker = picker_with_full_selection();
        picker.select_city(&EntityId::from("multan")).unwrap();

        assert!(picker.selection().is_none());
        assert!(picker.routes().is_empty());
        // Region selection survives.
        picker.load_routes(vec![route("r-9", "multan")]).unwrap();
        picker.select_route(&EntityId::from("r-9")).unwrap();
        assert!(picker.selection().is_some());
    }

    #[test]
    fn cities_cannot_load_before_region_selection() {
        let mut picker = LocationPicker::new(vec![region("punjab")]);
        let result = picker.load_cities(vec![city("lahore", "punjab")]);
        assert!(matches!(result, Err(CoreError::ValidationFailed { .. })));
    }

    #[test]
    fn unknown_selection_is_rejected() {
        let mut picker = LocationPicker::new(vec![region("punjab")]);
        let result = picker.select_region(&EntityId::from("balochistan"));
        assert!(matches!(result, Err(CoreError::NotFound { .. })));
    }
}

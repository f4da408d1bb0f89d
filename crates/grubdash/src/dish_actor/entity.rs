use crate::dish_actor::DishError;
use crate::fields;
use crate::model::{Dish, DishId, DishPayload};
use resource_actor::validation::{run_chain, Check};
use resource_actor::ActorEntity;
use serde_json::Number;

/// What the dish checks look at: the payload, plus the stored id when updating.
#[derive(Debug)]
pub struct DishCandidate {
    pub route_id: Option<DishId>,
    pub payload: DishPayload,
}

fn missing(field: &str) -> DishError {
    DishError::Validation(format!("A '{field}' property is required."))
}

fn name(payload: &DishPayload) -> Result<&str, DishError> {
    fields::text(&payload.name).ok_or_else(|| missing("name"))
}

fn description(payload: &DishPayload) -> Result<&str, DishError> {
    fields::text(&payload.description).ok_or_else(|| missing("description"))
}

fn price(payload: &DishPayload) -> Result<&Number, DishError> {
    fields::positive_number(&payload.price).ok_or_else(|| missing("price"))
}

fn image_url(payload: &DishPayload) -> Result<&str, DishError> {
    fields::text(&payload.image_url).ok_or_else(|| missing("image_url"))
}

fn has_name(c: &DishCandidate) -> Result<(), DishError> {
    name(&c.payload).map(|_| ())
}

fn has_description(c: &DishCandidate) -> Result<(), DishError> {
    description(&c.payload).map(|_| ())
}

fn has_price(c: &DishCandidate) -> Result<(), DishError> {
    price(&c.payload).map(|_| ())
}

fn has_image_url(c: &DishCandidate) -> Result<(), DishError> {
    image_url(&c.payload).map(|_| ())
}

fn id_matches_route(c: &DishCandidate) -> Result<(), DishError> {
    let (Some(route_id), Some(claimed)) = (&c.route_id, fields::claimed_id(&c.payload.id)) else {
        return Ok(());
    };
    if claimed.as_str() == Some(route_id.0.as_str()) {
        return Ok(());
    }
    Err(DishError::Validation(format!(
        "Dish id does not match route id. Dish: {}, Route: {route_id}",
        fields::render(claimed)
    )))
}

pub const CREATE_CHECKS: &[Check<DishCandidate, DishError>] = &[
    ("has_name", has_name),
    ("has_description", has_description),
    ("has_price", has_price),
    ("has_image_url", has_image_url),
];

pub const UPDATE_CHECKS: &[Check<DishCandidate, DishError>] = &[
    ("has_name", has_name),
    ("has_description", has_description),
    ("has_price", has_price),
    ("has_image_url", has_image_url),
    ("id_matches_route", id_matches_route),
];

/// Implementation of the ActorEntity trait for Dish.
///
/// Both create and update run the field checks in order (`name`, `description`, `price`,
/// `image_url`); update then compares the payload id with the stored one. Every mutable
/// field is replaced on update. Dishes are never deleted.
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishPayload;
    type Update = DishPayload;
    type Error = DishError;

    fn id(&self) -> &DishId {
        &self.id
    }

    fn from_create_params(id: DishId, payload: DishPayload) -> Result<Self, Self::Error> {
        let candidate = DishCandidate {
            route_id: None,
            payload,
        };
        run_chain(&candidate, CREATE_CHECKS)?;

        let payload = &candidate.payload;
        Ok(Dish {
            id,
            name: name(payload)?.to_string(),
            description: description(payload)?.to_string(),
            price: price(payload)?.clone(),
            image_url: image_url(payload)?.to_string(),
        })
    }

    fn on_update(&mut self, payload: DishPayload) -> Result<(), Self::Error> {
        let candidate = DishCandidate {
            route_id: Some(self.id.clone()),
            payload,
        };
        run_chain(&candidate, UPDATE_CHECKS)?;

        let payload = &candidate.payload;
        let (new_name, new_description, new_price, new_image_url) = (
            name(payload)?.to_string(),
            description(payload)?.to_string(),
            price(payload)?.clone(),
            image_url(payload)?.to_string(),
        );
        self.name = new_name;
        self.description = new_description;
        self.price = new_price;
        self.image_url = new_image_url;
        Ok(())
    }

    fn on_delete(&self) -> Result<(), Self::Error> {
        Err(DishError::MethodNotAllowed)
    }
}

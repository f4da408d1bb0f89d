use crate::fields;
use crate::model::{DishId, Order, OrderDish, OrderId, OrderPayload, OrderStatus};
use crate::order_actor::OrderError;
use resource_actor::validation::{run_chain, Check};
use resource_actor::ActorEntity;
use serde_json::Value;

/// What the order checks look at: the payload, plus the stored order's id and status
/// when updating.
#[derive(Debug)]
pub struct OrderCandidate {
    pub current: Option<(OrderId, OrderStatus)>,
    pub payload: OrderPayload,
}

fn invalid(message: impl Into<String>) -> OrderError {
    OrderError::Validation(message.into())
}

fn deliver_to(payload: &OrderPayload) -> Result<&str, OrderError> {
    fields::trimmed_text(&payload.deliver_to).ok_or_else(|| invalid("Order must include a deliverTo"))
}

fn mobile_number(payload: &OrderPayload) -> Result<&str, OrderError> {
    fields::trimmed_text(&payload.mobile_number)
        .ok_or_else(|| invalid("Order must include a mobileNumber"))
}

/// Reads one line item. `None` unless `quantity` is an integer in `1..=u32::MAX`.
fn line_item(item: &Value) -> Option<OrderDish> {
    let quantity = item
        .get("quantity")?
        .as_u64()
        .filter(|q| *q >= 1)
        .and_then(|q| u32::try_from(q).ok())?;
    let dish_id = item
        .get("dishId")
        .or_else(|| item.get("id"))
        .and_then(Value::as_str)
        .map(DishId::from);
    Some(OrderDish { dish_id, quantity })
}

fn line_items(payload: &OrderPayload) -> Result<Vec<OrderDish>, OrderError> {
    let items = match &payload.dishes {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return Err(invalid("Order must include at least one dish")),
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            line_item(item).ok_or_else(|| {
                invalid(format!(
                    "Dish {index} must have a quantity that is an integer greater than 0"
                ))
            })
        })
        .collect()
}

fn status(payload: &OrderPayload) -> Result<OrderStatus, OrderError> {
    payload
        .status
        .as_ref()
        .and_then(Value::as_str)
        .and_then(OrderStatus::from_name)
        .ok_or_else(|| {
            invalid("Order must have a status of pending, preparing, out-for-delivery, delivered")
        })
}

fn has_deliver_to(c: &OrderCandidate) -> Result<(), OrderError> {
    deliver_to(&c.payload).map(|_| ())
}

fn has_mobile_number(c: &OrderCandidate) -> Result<(), OrderError> {
    mobile_number(&c.payload).map(|_| ())
}

/// Absent, `null`, `false`, `0` and `""` all count as no dishes at all.
fn has_dishes(c: &OrderCandidate) -> Result<(), OrderError> {
    let missing = match &c.payload.dishes {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    };
    if missing {
        return Err(invalid("Order must include a dish"));
    }
    Ok(())
}

fn dishes_are_valid(c: &OrderCandidate) -> Result<(), OrderError> {
    line_items(&c.payload).map(|_| ())
}

fn id_matches_route(c: &OrderCandidate) -> Result<(), OrderError> {
    let (Some((route_id, _)), Some(claimed)) = (&c.current, fields::claimed_id(&c.payload.id))
    else {
        return Ok(());
    };
    if claimed.as_str() == Some(route_id.0.as_str()) {
        return Ok(());
    }
    Err(invalid(format!(
        "Order id does not match route id. Order: {}, Route: {route_id}",
        fields::render(claimed)
    )))
}

fn status_is_valid(c: &OrderCandidate) -> Result<(), OrderError> {
    status(&c.payload).map(|_| ())
}

fn delivered() -> OrderError {
    OrderError::IllegalTransition("A delivered order cannot be changed".to_string())
}

/// Once stored as `delivered`, every update is refused, however malformed.
fn not_already_delivered(c: &OrderCandidate) -> Result<(), OrderError> {
    match c.current {
        Some((_, OrderStatus::Delivered)) => Err(delivered()),
        _ => Ok(()),
    }
}

/// `delivered` cannot be set by an update either.
fn not_delivered(c: &OrderCandidate) -> Result<(), OrderError> {
    if status(&c.payload)? == OrderStatus::Delivered {
        return Err(delivered());
    }
    Ok(())
}

pub const CREATE_CHECKS: &[Check<OrderCandidate, OrderError>] = &[
    ("has_deliver_to", has_deliver_to),
    ("has_mobile_number", has_mobile_number),
    ("has_dishes", has_dishes),
    ("dishes_are_valid", dishes_are_valid),
];

pub const UPDATE_CHECKS: &[Check<OrderCandidate, OrderError>] = &[
    ("not_already_delivered", not_already_delivered),
    ("has_deliver_to", has_deliver_to),
    ("has_mobile_number", has_mobile_number),
    ("has_dishes", has_dishes),
    ("id_matches_route", id_matches_route),
    ("dishes_are_valid", dishes_are_valid),
    ("status_is_valid", status_is_valid),
    ("not_delivered", not_delivered),
];

/// Implementation of the ActorEntity trait for Order.
///
/// # Lifecycle
///
/// * **Create**: presence and line-item checks; the order always starts `pending`, whatever
///   status the payload carries.
/// * **Update**: refused outright for a delivered order; otherwise presence, id match,
///   line items, status. Then `deliverTo`, `mobileNumber`,
///   `status` and `dishes` are all replaced.
/// * **Delete**: only while `pending`.
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderPayload;
    type Update = OrderPayload;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, payload: OrderPayload) -> Result<Self, Self::Error> {
        let candidate = OrderCandidate {
            current: None,
            payload,
        };
        run_chain(&candidate, CREATE_CHECKS)?;

        let payload = &candidate.payload;
        Ok(Order {
            id,
            deliver_to: deliver_to(payload)?.to_string(),
            mobile_number: mobile_number(payload)?.to_string(),
            status: OrderStatus::Pending,
            dishes: line_items(payload)?,
        })
    }

    fn on_update(&mut self, payload: OrderPayload) -> Result<(), Self::Error> {
        let candidate = OrderCandidate {
            current: Some((self.id.clone(), self.status)),
            payload,
        };
        run_chain(&candidate, UPDATE_CHECKS)?;

        let payload = &candidate.payload;
        let (new_deliver_to, new_mobile_number, new_status, new_dishes) = (
            deliver_to(payload)?.to_string(),
            mobile_number(payload)?.to_string(),
            status(payload)?,
            line_items(payload)?,
        );
        self.deliver_to = new_deliver_to;
        self.mobile_number = new_mobile_number;
        self.status = new_status;
        self.dishes = new_dishes;
        Ok(())
    }

    fn on_delete(&self) -> Result<(), Self::Error> {
        if self.status != OrderStatus::Pending {
            return Err(OrderError::IllegalTransition(
                "An order cannot be deleted unless it is pending".to_string(),
            ));
        }
        Ok(())
    }
}

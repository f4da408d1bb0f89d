use crate::clients::{DishClient, OrderClient};
use crate::config::SeedData;
use crate::{dish_actor, order_actor};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator for the dish and order actors.
///
/// # Example
///
/// ```rust
/// use grubdash::config::SeedData;
/// use grubdash::lifecycle::GrubSystem;
///
/// #[tokio::main]
/// async fn main() -> Result<(), String> {
///     let system = GrubSystem::new(SeedData::default(), 32);
///     assert!(system.dish_client.list_dishes().await.unwrap().is_empty());
///     system.shutdown().await
/// }
/// ```
pub struct GrubSystem {
    /// Client for interacting with the Dish actor
    pub dish_client: DishClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl GrubSystem {
    /// Spawns both actors over the seed collections.
    ///
    /// `capacity` is the channel size of each actor: how many requests may wait before
    /// callers are made to wait too.
    pub fn new(seed: SeedData, capacity: usize) -> Self {
        let SeedData { dishes, orders } = seed;
        info!(
            dishes = dishes.len(),
            orders = orders.len(),
            capacity,
            "Starting actors"
        );

        let (dish_actor, dish_resource_client) = dish_actor::new(capacity, dishes);
        let dish_handle = tokio::spawn(dish_actor.run());

        let (order_actor, order_resource_client) = order_actor::new(capacity, orders);
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            dish_client: DishClient::new(dish_resource_client),
            order_client: OrderClient::new(order_resource_client),
            handles: vec![dish_handle, order_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Waits until every other clone of the clients has been dropped, then until both actors
    /// have drained their queues. A panicked actor task is reported as an error.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down actors");

        // Drop our clients; any still held elsewhere keep their actor alive.
        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete");
        Ok(())
    }
}

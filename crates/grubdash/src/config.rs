//! # Configuration
//!
//! Command line arguments (each also readable from the environment) and the optional seed
//! data the collections start with.

use crate::model::{Dish, Order};
use serde::de::DeserializeOwned;
use std::{
    fmt::{self, Display, Formatter},
    net::SocketAddr,
    path::{Path, PathBuf},
};

#[derive(clap::Parser, Debug)]
#[clap(name = "grubdash", about = "REST API for dishes and orders")]
pub struct Arguments {
    #[clap(long, env, default_value = "0.0.0.0:5000")]
    pub bind_address: SocketAddr,

    /// Log filter used when `RUST_LOG` is not set.
    #[clap(long, env, default_value = "info")]
    pub log_filter: String,

    /// JSON array of dishes to start with.
    #[clap(long, env)]
    pub dishes_file: Option<PathBuf>,

    /// JSON array of orders to start with.
    #[clap(long, env)]
    pub orders_file: Option<PathBuf>,

    /// How many requests may queue for each resource actor.
    #[clap(long, env, default_value = "32")]
    pub channel_capacity: usize,
}

fn display_option(f: &mut Formatter<'_>, name: &str, option: &Option<PathBuf>) -> fmt::Result {
    match option {
        Some(path) => writeln!(f, "{name}: {}", path.display()),
        None => writeln!(f, "{name}: None"),
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Arguments {
            bind_address,
            log_filter,
            dishes_file,
            orders_file,
            channel_capacity,
        } = self;

        writeln!(f, "bind_address: {bind_address}")?;
        writeln!(f, "log_filter: {log_filter}")?;
        display_option(f, "dishes_file", dishes_file)?;
        display_option(f, "orders_file", orders_file)?;
        writeln!(f, "channel_capacity: {channel_capacity}")?;
        Ok(())
    }
}

/// Reasons the seed files could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The collections the actors start with. Empty unless files are given.
#[derive(Debug, Default, Clone)]
pub struct SeedData {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

impl SeedData {
    pub fn load(dishes: Option<&Path>, orders: Option<&Path>) -> Result<Self, SeedError> {
        Ok(Self {
            dishes: load_collection(dishes)?,
            orders: load_collection(orders)?,
        })
    }
}

fn load_collection<T: DeserializeOwned>(path: Option<&Path>) -> Result<Vec<T>, SeedError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderStatus;
    use clap::Parser;
    use std::io::Write;

    fn file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let args = Arguments::try_parse_from(["grubdash"]).unwrap();
        assert_eq!(args.bind_address, "0.0.0.0:5000".parse().unwrap());
        assert_eq!(args.channel_capacity, 32);
        assert!(args.dishes_file.is_none());

        let shown = args.to_string();
        assert!(shown.contains("bind_address: 0.0.0.0:5000"));
        assert!(shown.contains("dishes_file: None"));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Arguments::try_parse_from([
            "grubdash",
            "--bind-address",
            "127.0.0.1:8080",
            "--dishes-file",
            "data/dishes.json",
            "--channel-capacity",
            "4",
        ])
        .unwrap();
        assert_eq!(args.bind_address.port(), 8080);
        assert_eq!(args.dishes_file, Some(PathBuf::from("data/dishes.json")));
        assert_eq!(args.channel_capacity, 4);
    }

    #[test]
    fn missing_paths_mean_empty_collections() {
        let seed = SeedData::load(None, None).unwrap();
        assert!(seed.dishes.is_empty());
        assert!(seed.orders.is_empty());
    }

    #[test]
    fn loads_both_collections() {
        let dishes = file(
            r#"[{"id": "d1", "name": "Pho", "description": "Soup", "price": 12, "image_url": "pho.jpg"}]"#,
        );
        let orders = file(
            r#"[{"id": "o1", "deliverTo": "Elm St", "mobileNumber": "555", "status": "delivered",
                 "dishes": [{"id": "d1", "name": "Pho", "quantity": 2}]}]"#,
        );

        let seed = SeedData::load(Some(dishes.path()), Some(orders.path())).unwrap();
        assert_eq!(seed.dishes[0].name, "Pho");
        assert_eq!(seed.orders[0].status, OrderStatus::Delivered);
        assert_eq!(seed.orders[0].dishes[0].quantity, 2);
    }

    #[test]
    fn reports_unreadable_and_malformed_files() {
        let err = SeedData::load(Some(Path::new("/definitely/not/here.json")), None).unwrap_err();
        assert!(matches!(err, SeedError::Read { .. }));

        let broken = file("{ not json");
        let err = SeedData::load(None, Some(broken.path())).unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }
}

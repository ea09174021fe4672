//! Catalog API client.
//!
//! Five read-only collection endpoints, no authentication, no pagination:
//! each endpoint returns its whole collection in one response. Fetching is
//! one attempt per endpoint — no retry, no backoff — and a failure is
//! contained to that endpoint: the collection comes back as `None` and a
//! warning is printed, while the other four proceed. Whether an absent
//! collection is fatal is decided later by [`Dataset::validate`].
//!
//! [`fetch_all`] runs the five requests as a structured concurrent join:
//! once issued, each request runs to completion or failure, and the caller
//! resumes when all five have settled.

use std::fmt;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{Dataset, Film, Location, Person, Species, Vehicle};

/// The public catalog API.
pub const DEFAULT_API_BASE: &str = "https://ghibliapi.vercel.app";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// One of the five collection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Films,
    People,
    Species,
    Locations,
    Vehicles,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Films => "films",
            Endpoint::People => "people",
            Endpoint::Species => "species",
            Endpoint::Locations => "locations",
            Endpoint::Vehicles => "vehicles",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

async fn request<T: DeserializeOwned>(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: Endpoint,
) -> Result<Vec<T>, ApiError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint.path());
    let response = client.get(&url).send().await?.error_for_status()?;
    Ok(response.json().await?)
}

/// Fetch one collection. Any transport, status, or decode failure is
/// contained here: it prints a warning and yields `None`.
pub async fn fetch_collection<T: DeserializeOwned>(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: Endpoint,
) -> Option<Vec<T>> {
    match request(client, base_url, endpoint).await {
        Ok(records) => Some(records),
        Err(err) => {
            eprintln!("warning: could not fetch {endpoint}: {err}");
            None
        }
    }
}

/// Fetch all five collections concurrently and return the combined
/// dataset. There is no ordering guarantee between the requests and no
/// cancellation: the join resolves after every request has settled.
pub async fn fetch_all(base_url: &str) -> Dataset {
    let client = reqwest::Client::new();
    let (films, people, species, locations, vehicles) = tokio::join!(
        fetch_collection::<Film>(&client, base_url, Endpoint::Films),
        fetch_collection::<Person>(&client, base_url, Endpoint::People),
        fetch_collection::<Species>(&client, base_url, Endpoint::Species),
        fetch_collection::<Location>(&client, base_url, Endpoint::Locations),
        fetch_collection::<Vehicle>(&client, base_url, Endpoint::Vehicles),
    );
    Dataset {
        films,
        people,
        species,
        locations,
        vehicles,
    }
}

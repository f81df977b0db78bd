//! The fluent beer query builder.

use serde::Deserialize;
use url::Url;

use crate::{
    client::Client,
    credential::Credential,
    query::{ParameterSet, Query},
    types::{Beer, BeerID},
    version::{ApiVersion, DEFAULT_HOST},
    Error,
};

/// Accumulates beer filters and sends them to the Punk API.
///
/// Filter setters come from [`Query`] and consume the builder, so a shared
/// base query is forked with `clone()`:
///
/// ```
/// use punkapi::{PunkApi, Query};
///
/// let strong = PunkApi::new("my-key").abv_above(8);
/// let strong_and_dark = strong.clone().ebc_above(100);
///
/// assert_eq!(strong.endpoint(), "https://api.punkapi.com/v2/beers?abv_gt=8");
/// assert_eq!(
///     strong_and_dark.endpoint(),
///     "https://api.punkapi.com/v2/beers?abv_gt=8&ebc_gt=100"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct PunkApi {
    credential: Credential,
    version: ApiVersion,
    base_endpoint: String,
    params: ParameterSet,
    client: Client,
}

impl PunkApi {
    /// Creates a builder for the current API version on the public host.
    pub fn new(credential: impl Into<Credential>) -> Self {
        Self::for_host(DEFAULT_HOST, credential.into(), ApiVersion::V2)
    }

    /// Same as [`PunkApi::new`].
    pub fn create(credential: impl Into<Credential>) -> Self {
        Self::new(credential)
    }

    /// Creates a builder for an explicit API version.
    ///
    /// Retired versions are refused with [`Error::UnsupportedVersion`].
    pub fn with_version(
        credential: impl Into<Credential>,
        version: ApiVersion,
    ) -> Result<Self, Error> {
        Self::with_base_url_and_version(DEFAULT_HOST, credential, version)
    }

    /// Creates a builder against another host, e.g. a mirror or a test server.
    pub fn with_base_url(base_url: &str, credential: impl Into<Credential>) -> Self {
        Self::for_host(base_url, credential.into(), ApiVersion::V2)
    }

    /// Creates a builder for an explicit host and API version.
    pub fn with_base_url_and_version(
        base_url: &str,
        credential: impl Into<Credential>,
        version: ApiVersion,
    ) -> Result<Self, Error> {
        if version.is_retired() {
            tracing::warn!("Refusing to build a query for retired API {}", version);
            return Err(Error::UnsupportedVersion(version));
        }
        Ok(Self::for_host(base_url, credential.into(), version))
    }

    fn for_host(host: &str, credential: Credential, version: ApiVersion) -> Self {
        let base_endpoint = version.base_endpoint(host);
        // Store the form the transport will send, e.g. with the host lowercased.
        // An unparseable host is kept as given and reported by `endpoint_url`.
        let base_endpoint = match Url::parse(&base_endpoint) {
            Ok(url) => url.as_str().trim_end_matches('/').to_string(),
            Err(_) => base_endpoint,
        };
        Self {
            credential,
            version,
            base_endpoint,
            params: ParameterSet::new(),
            client: Client::new(),
        }
    }

    /// Replaces the HTTP transport, e.g. to change the timeout.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// The beers endpoint without any filters, e.g. `https://api.punkapi.com/v2/beers`.
    pub fn base_endpoint(&self) -> &str {
        &self.base_endpoint
    }

    /// The URL [`PunkApi::get_beers`] would request with the current filters.
    pub fn endpoint(&self) -> String {
        match self.query_string() {
            Some(query) => format!("{}?{}", self.base_endpoint, query),
            None => self.base_endpoint.clone(),
        }
    }

    /// [`PunkApi::endpoint`] parsed as a URL.
    pub fn endpoint_url(&self) -> Result<Url, Error> {
        parse_endpoint(self.endpoint())
    }

    /// Fetches the beers matching the current filters.
    ///
    /// The request goes to exactly the URL [`PunkApi::endpoint`] returns.
    pub async fn get_beers(&self) -> Result<Vec<Beer>, Error> {
        let url = self.endpoint_url()?;
        self.client.get_json(&url, &self.credential).await
    }

    /// Fetches a single beer. The current filters are not sent.
    pub async fn get_beer_by_id(&self, id: BeerID) -> Result<Beer, Error> {
        let url = self.path_url(&id.to_string())?;
        let body: SingleBeer = self.client.get_json(&url, &self.credential).await?;
        body.into_beer()
    }

    /// Fetches a random beer. The current filters are not sent.
    pub async fn get_random_beer(&self) -> Result<Beer, Error> {
        let url = self.path_url("random")?;
        let body: SingleBeer = self.client.get_json(&url, &self.credential).await?;
        body.into_beer()
    }

    fn path_url(&self, segment: &str) -> Result<Url, Error> {
        parse_endpoint(format!("{}/{}", self.base_endpoint, segment))
    }
}

fn parse_endpoint(raw: String) -> Result<Url, Error> {
    Url::parse(&raw).map_err(|e| {
        tracing::error!("Invalid URL constructed: {}", e);
        Error::InvalidEndpoint {
            url: raw,
            message: e.to_string(),
        }
    })
}

impl Query for PunkApi {
    fn params(&self) -> &ParameterSet {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParameterSet {
        &mut self.params
    }
}

/// Single-beer lookups answer with a one-element array, or a bare object.
#[derive(Deserialize)]
#[serde(untagged)]
enum SingleBeer {
    Many(Vec<Beer>),
    One(Box<Beer>),
}

impl SingleBeer {
    fn into_beer(self) -> Result<Beer, Error> {
        match self {
            SingleBeer::One(beer) => Ok(*beer),
            SingleBeer::Many(beers) => beers.into_iter().next().ok_or_else(|| Error::Decode {
                message: "expected one beer, got an empty array".to_string(),
                body: "[]".to_string(),
            }),
        }
    }
}

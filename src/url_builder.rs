use crate::config;
use crate::error::{AlphaVantageError, Result};

use std::collections::BTreeMap;
use url::form_urlencoded;

/// Query parameters owned by a builder. Ordered map, so serialization is
/// deterministic (alphabetical by key).
pub type QueryParams = BTreeMap<String, String>;

pub const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Query-string key the API key is seeded under
pub const API_KEY_PARAM: &str = "apikey";

/// Mandatory key naming the Alpha Vantage operation to call
pub const FUNCTION_PARAM: &str = "function";

/// Contract shared by API-specific URL builders.
///
/// `UrlDirector` drives builders through this trait, so a builder for
/// another endpoint family can be added without touching the director.
pub trait UrlBuilder {
    /// Validate and merge caller parameters into the builder.
    fn add_params(&mut self, params: QueryParams) -> Result<()>;

    /// Serialize the accumulated parameters into the final URL.
    fn build(&mut self) -> String;

    /// The most recently built URL, or `None` if `build` has never run.
    fn url(&self) -> Option<&str>;
}

/// URL builder for the Alpha Vantage API.
///
/// One builder corresponds to one request under construction: merged
/// parameters persist across `add_params` calls and are never reset, so
/// an instance must not be reused for unrelated requests. Not safe to
/// share across threads without external synchronization.
#[derive(Debug, Clone)]
pub struct AlphaVantageUrlBuilder {
    params: QueryParams,
    url: Option<String>,
}

impl AlphaVantageUrlBuilder {
    /// Creates a builder seeded with the given API key.
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        let mut params = QueryParams::new();
        params.insert(API_KEY_PARAM.to_string(), api_key.to_string());

        AlphaVantageUrlBuilder { params, url: None }
    }

    /// Creates a builder with the API key read from `ALPHA_VANTAGE_API_KEY`.
    ///
    /// # Errors
    /// Returns `AlphaVantageError::MissingEnvVar` if the variable is not set.
    ///
    /// # Returns
    /// * `Result<Self>` - The created builder, seeded with the key
    pub fn from_env() -> Result<Self> {
        let api_key = config::get_required_env_var(config::API_KEY_VAR)?;

        Ok(Self::new(&api_key))
    }
}

impl UrlBuilder for AlphaVantageUrlBuilder {
    /// Merge `params` into the builder.
    ///
    /// The map must carry a `function` entry naming the requested
    /// operation; without it nothing is merged. Keys already present,
    /// the seeded `apikey` included, are overwritten by the incoming
    /// value (last write wins).
    ///
    /// # Errors
    /// Returns `AlphaVantageError::MissingRequiredParam` if `function`
    /// is absent. The parameter set is left untouched in that case.
    fn add_params(&mut self, params: QueryParams) -> Result<()> {
        if !params.contains_key(FUNCTION_PARAM) {
            return Err(AlphaVantageError::MissingRequiredParam(FUNCTION_PARAM));
        }

        self.params.extend(params);

        Ok(())
    }

    /// Build the complete URL from the accumulated parameters.
    ///
    /// Values are form-encoded (space becomes `+`, reserved characters
    /// are percent-escaped). The result is stored on the builder and
    /// returned; building again without an intervening `add_params`
    /// yields the identical string.
    fn build(&mut self) -> String {
        let query_string: String = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish();

        let url = format!("{BASE_URL}?{query_string}");
        self.url = Some(url.clone());

        url
    }

    fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

use crate::error::{AlphaVantageError, Result};
use crate::url_builder::{QueryParams, UrlBuilder};

/// Orchestrates a single build cycle for callers that prefer not to
/// drive a builder directly.
///
/// A director constructed with `Default` has no builder attached and
/// rejects `construct_url` until one is provided through `new`.
#[derive(Default)]
pub struct UrlDirector {
    builder: Option<Box<dyn UrlBuilder>>,
}

impl UrlDirector {
    /// Creates a director driving the given builder.
    #[must_use]
    pub fn new<B: UrlBuilder + 'static>(builder: B) -> Self {
        UrlDirector {
            builder: Some(Box::new(builder)),
        }
    }

    /// Construct a URL by forwarding `params` to the attached builder.
    ///
    /// # Arguments
    /// * `params` - The parameters to merge before building
    ///
    /// # Errors
    /// * `AlphaVantageError::InvalidBuilder` - If no builder is attached
    /// * Any error raised by the builder's `add_params`
    ///
    /// # Returns
    /// * `Result<String>` - The built URL
    pub fn construct_url(&mut self, params: QueryParams) -> Result<String> {
        let builder = self
            .builder
            .as_mut()
            .ok_or(AlphaVantageError::InvalidBuilder)?;

        builder.add_params(params)?;

        Ok(builder.build())
    }

    /// The attached builder, if any.
    pub fn builder(&self) -> Option<&dyn UrlBuilder> {
        self.builder.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_builder::AlphaVantageUrlBuilder;

    fn query_params(entries: &[(&str, &str)]) -> QueryParams {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn test_construct_url_with_valid_builder() {
        let mut director = UrlDirector::new(AlphaVantageUrlBuilder::new("test_key"));

        let url = director
            .construct_url(query_params(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", "MSFT"),
            ]))
            .unwrap();

        assert!(url.starts_with("https://www.alphavantage.co/query?"));
        assert!(url.contains("function=TIME_SERIES_DAILY"));
        assert!(url.contains("symbol=MSFT"));
        assert!(url.contains("apikey=test_key"));
    }

    #[test]
    fn test_construct_url_without_builder() {
        let mut director = UrlDirector::default();

        let result = director.construct_url(query_params(&[("function", "OVERVIEW")]));

        assert!(matches!(result, Err(AlphaVantageError::InvalidBuilder)));
    }

    #[test]
    fn test_construct_url_propagates_builder_errors() {
        let mut director = UrlDirector::new(AlphaVantageUrlBuilder::new("test_key"));

        let result = director.construct_url(query_params(&[("symbol", "MSFT")]));

        assert!(matches!(
            result,
            Err(AlphaVantageError::MissingRequiredParam("function"))
        ));
    }

    #[test]
    fn test_builder_accessor_exposes_last_url() {
        let mut director = UrlDirector::new(AlphaVantageUrlBuilder::new("test_key"));

        let url = director
            .construct_url(query_params(&[("function", "GLOBAL_QUOTE")]))
            .unwrap();

        assert_eq!(director.builder().unwrap().url(), Some(url.as_str()));
    }
}

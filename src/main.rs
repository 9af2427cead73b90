use dotenv::dotenv;
use serde_json::Value;

use alphavantage_query::error::{AlphaVantageError, ApiErrorResponse, Result};
use alphavantage_query::url_builder::{AlphaVantageUrlBuilder, QueryParams, UrlBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    println!("Creating Alpha Vantage URL builder");
    let mut builder = AlphaVantageUrlBuilder::from_env()?;

    let mut params = QueryParams::new();
    params.insert("function".to_string(), "TIME_SERIES_DAILY".to_string());
    params.insert("symbol".to_string(), "IBM".to_string());
    params.insert("outputsize".to_string(), "compact".to_string());

    builder.add_params(params)?;

    let url = builder.build();
    println!("Request URL created: {url}");

    println!("Sending request");
    let response = reqwest::get(&url).await?;
    println!("Response status: {}", response.status());

    println!("Parsing response");
    let body: Value = response.json().await?;

    // Alpha Vantage reports request errors in-band with a 200 status
    if body.get("Error Message").is_some() {
        let error: ApiErrorResponse = serde_json::from_value(body)?;
        return Err(AlphaVantageError::Api(error));
    }

    println!("{body:#}");

    Ok(())
}

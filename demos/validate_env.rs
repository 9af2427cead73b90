use alphavantage_query::config;
use alphavantage_query::director::UrlDirector;
use alphavantage_query::url_builder::{AlphaVantageUrlBuilder, QueryParams};

/// Example demonstrating environment variable validation
///
/// This example shows how missing environment variables surface as
/// clear error messages instead of panics.
fn main() {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Validate all required environment variables upfront
    println!("Validating required environment variables...");
    match config::validate_env_vars() {
        Ok(()) => println!("✓ All required environment variables are set"),
        Err(e) => {
            eprintln!("✗ Configuration error: {e}");
            std::process::exit(1);
        }
    }

    // Now we can safely create the builder
    // If the API key is missing, we'll get a clear error message
    match AlphaVantageUrlBuilder::from_env() {
        Ok(builder) => {
            println!("✓ AlphaVantageUrlBuilder created successfully");

            let mut director = UrlDirector::new(builder);

            let mut params = QueryParams::new();
            params.insert("function".to_string(), "GLOBAL_QUOTE".to_string());
            params.insert("symbol".to_string(), "AAPL".to_string());

            match director.construct_url(params) {
                Ok(url) => println!("Constructed URL: {url}"),
                Err(e) => {
                    eprintln!("Error constructing URL: {e}");
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to create AlphaVantageUrlBuilder: {e}");
            std::process::exit(1);
        }
    }
}

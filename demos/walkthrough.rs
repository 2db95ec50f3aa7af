//! Walk through every National Address endpoint once.
//!
//! ```text
//! NATIONAL_ADDRESS_API_KEY=... cargo run --example walkthrough
//! ```
//!
//! The service rate-limits aggressively, so calls are spaced by `--delay`.

use clap::Parser;
use color_eyre::eyre::Result;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use saudi_address::{
    AddressError, FixedSearch, Language, LocationFilter, NationalAddressClient, NearestPoi,
    PoiFixedSearch, SearchOptions,
};

/// Exercise the National Address API with sample queries
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subscription key for the National Address API
    #[arg(long, env = "NATIONAL_ADDRESS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Override the service root
    #[arg(long, env = "NATIONAL_ADDRESS_URL")]
    base_url: Option<String>,

    /// Seconds to wait between calls
    #[arg(long, default_value_t = 5)]
    delay: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let na = NationalAddressClient::new(cli.base_url.as_deref(), cli.api_key)
        .map_err(AddressError::into_report)?;
    let pause = || tokio::time::sleep(Duration::from_secs(cli.delay));

    let addresses = na
        .get_address(26.318922, 50.228043, Language::English)
        .await
        .map_err(AddressError::into_report)?;
    if let Some(address) = addresses.first() {
        println!("address: {address}");
    }

    pause().await;
    let bulk = na
        .bulk_search(
            [(3468, 23955, 7487), (6418, 34412, 3618)],
            SearchOptions::default(),
        )
        .await
        .map_err(AddressError::into_report)?;
    for address in &bulk {
        println!("{address}");
    }

    pause().await;
    match na
        .verify_address((6418, 34412, 3618), SearchOptions::default())
        .await
        .map_err(AddressError::into_report)?
    {
        Some(found) => println!("the address is {found}"),
        None => println!("verification unavailable"),
    }

    pause().await;
    let free_text = na
        .free_text_search(
            "2292  - king abdullah university of science and technology",
            SearchOptions::default(),
        )
        .await
        .map_err(AddressError::into_report)?;
    println!("count: {}", free_text.count);
    if let Some(address) = free_text.first() {
        println!(
            "lat={}, long={}, city={}, region={}",
            address.latitude, address.longitude, address.city, address.region_name
        );
    }

    pause().await;
    let nearby = na
        .nearest_poi(&NearestPoi::new(22.32, 39.09).radius(2.0))
        .await
        .map_err(AddressError::into_report)?;
    for address in &nearby {
        println!("title: {}", address.title);
        println!("address: {address}");
    }

    pause().await;
    let fixed = na
        .fixed_search(&FixedSearch::new(
            LocationFilter::default()
                .city_name("THUWAL")
                .post_code(23955)
                .additional_number(7487),
        ))
        .await
        .map_err(AddressError::into_report)?;
    if let Some(address) = fixed.first() {
        println!("{address}");
    }

    pause().await;
    let atms = na
        .poi_free_text_search("sabb atm", SearchOptions::default())
        .await
        .map_err(AddressError::into_report)?;
    println!("total SABB ATMs found: {}", atms.count);

    pause().await;
    for region in na
        .get_regions(Language::Arabic)
        .await
        .map_err(AddressError::into_report)?
        .iter()
        .take(5)
    {
        println!("{region}");
    }

    pause().await;
    for city in na
        .get_cities(Some(1), Language::English)
        .await
        .map_err(AddressError::into_report)?
        .iter()
        .take(5)
    {
        println!("{city}");
    }

    pause().await;
    for district in na
        .get_districts(Some(3), Language::English)
        .await
        .map_err(AddressError::into_report)?
        .iter()
        .take(5)
    {
        println!("{district}");
    }

    pause().await;
    for category in na
        .get_categories(Language::English)
        .await
        .map_err(AddressError::into_report)?
        .iter()
        .take(5)
    {
        println!("{category}");
    }

    pause().await;
    for sub_category in na
        .get_subcategories(Some(101), Language::English)
        .await
        .map_err(AddressError::into_report)?
        .iter()
        .take(5)
    {
        println!("{sub_category}");
    }

    pause().await;
    let services = na
        .poi_fixed_search(&PoiFixedSearch::new("atm").location(
            LocationFilter::default()
                .district_name("ad dirah")
                .city_name("AR RIYADH"),
        ))
        .await
        .map_err(AddressError::into_report)?;
    println!("total: {}", services.count);
    for service in &services {
        println!("{} {service}", service.title);
    }

    Ok(())
}

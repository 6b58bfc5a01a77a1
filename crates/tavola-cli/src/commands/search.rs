use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tavola_application::SearchUseCase;
use tavola_core::search::SearchFilters;
use tavola_interaction::HttpApiClient;

use super::render::format_restaurant;

pub async fn run(client: HttpApiClient, filters: SearchFilters) -> Result<()> {
    let usecase = SearchUseCase::new(Arc::new(client));
    let results = usecase.search(&filters).await;

    if let Some(error) = results.error {
        eprintln!("{}", error.red());
        return Ok(());
    }
    if results.restaurants.is_empty() {
        println!("{}", "No restaurants found.".bright_black());
    }
    for restaurant in &results.restaurants {
        println!("{}", format_restaurant(restaurant));
    }
    Ok(())
}

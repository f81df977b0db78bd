use anyhow::Result;
use clap::Args;
use punkapi::PunkApi;

use crate::output::{print_beers, OutputFormat};

#[derive(Args)]
pub struct BeerArgs {
    /// Beer id (e.g. 192)
    pub id: u64,
}

pub async fn run(args: &BeerArgs, api: PunkApi, format: &OutputFormat) -> Result<()> {
    let beer = api.get_beer_by_id(args.id).await?;
    print_beers(&[beer], format)
}

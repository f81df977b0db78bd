use anyhow::Result;
use punkapi::PunkApi;

use crate::output::{print_beers, OutputFormat};

pub async fn run(api: PunkApi, format: &OutputFormat) -> Result<()> {
    let beer = api.get_random_beer().await?;
    print_beers(&[beer], format)
}

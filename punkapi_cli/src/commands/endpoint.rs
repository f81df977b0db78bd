use anyhow::Result;
use clap::Args;
use punkapi::PunkApi;

use super::beers::FilterArgs;

#[derive(Args)]
pub struct EndpointArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Prints the URL `beers` would request, without sending it.
pub fn run(args: &EndpointArgs, api: PunkApi) -> Result<()> {
    let api = args.filters.apply(api)?;
    println!("{}", api.endpoint());
    Ok(())
}

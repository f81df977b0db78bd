use anyhow::Result;
use clap::Args;
use punkapi::{PunkApi, Query};

use crate::output::{print_beers, OutputFormat};
use crate::validation;

/// Filter flags shared by `beers` and `endpoint`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Beers with ABV greater than this value
    #[arg(long)]
    pub abv_above: Option<f64>,

    /// Beers with ABV less than this value
    #[arg(long)]
    pub abv_below: Option<f64>,

    /// Beers with IBU greater than this value
    #[arg(long)]
    pub ibu_above: Option<f64>,

    /// Beers with IBU less than this value
    #[arg(long)]
    pub ibu_below: Option<f64>,

    /// Beers with EBC greater than this value
    #[arg(long)]
    pub ebc_above: Option<f64>,

    /// Beers with EBC less than this value
    #[arg(long)]
    pub ebc_below: Option<f64>,

    /// Beer name, partial matches included (e.g. punk)
    #[arg(long)]
    pub name: Option<String>,

    /// Yeast name, partial matches included
    #[arg(long)]
    pub yeast: Option<String>,

    /// Hops name, partial matches included
    #[arg(long)]
    pub hops: Option<String>,

    /// Malt name, partial matches included
    #[arg(long)]
    pub malt: Option<String>,

    /// Food pairing, partial matches included
    #[arg(long)]
    pub food: Option<String>,

    /// Brewed before this date, mm-yyyy (e.g. 10-2011)
    #[arg(long)]
    pub brewed_before: Option<String>,

    /// Brewed after this date, mm-yyyy (e.g. 10-2011)
    #[arg(long)]
    pub brewed_after: Option<String>,

    /// Only these beer ids, separated by commas or pipes (e.g. 192,224)
    #[arg(long)]
    pub ids: Option<String>,

    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page (the API defaults to 25)
    #[arg(long)]
    pub per_page: Option<u32>,
}

impl FilterArgs {
    /// Validates the flags and adds them to `api`.
    pub fn apply(&self, mut api: PunkApi) -> Result<PunkApi> {
        if let Some(abv) = self.abv_above {
            api = api.abv_above(abv);
        }
        if let Some(abv) = self.abv_below {
            api = api.abv_below(abv);
        }
        if let Some(ibu) = self.ibu_above {
            api = api.ibu_above(ibu);
        }
        if let Some(ibu) = self.ibu_below {
            api = api.ibu_below(ibu);
        }
        if let Some(ebc) = self.ebc_above {
            api = api.ebc_above(ebc);
        }
        if let Some(ebc) = self.ebc_below {
            api = api.ebc_below(ebc);
        }

        if let Some(ref name) = self.name {
            api = api.named(&validation::validate_text(name)?);
        }
        if let Some(ref yeast) = self.yeast {
            api = api.yeast(&validation::validate_text(yeast)?);
        }
        if let Some(ref hops) = self.hops {
            api = api.hops(&validation::validate_text(hops)?);
        }
        if let Some(ref malt) = self.malt {
            api = api.malt(&validation::validate_text(malt)?);
        }
        if let Some(ref food) = self.food {
            api = api.food(&validation::validate_text(food)?);
        }

        if let Some(ref date) = self.brewed_before {
            api = api.brewed_before(validation::validate_brew_date(date)?);
        }
        if let Some(ref date) = self.brewed_after {
            api = api.brewed_after(validation::validate_brew_date(date)?);
        }

        if let Some(ref ids) = self.ids {
            api = api.ids(validation::validate_ids(ids)?);
        }

        if let Some(page) = self.page {
            api = api.page(page);
        }
        if let Some(per_page) = self.per_page {
            api = api.per_page(per_page);
        }

        Ok(api)
    }
}

#[derive(Args)]
pub struct BeersArgs {
    #[command(flatten)]
    pub filters: FilterArgs,
}

pub async fn run(args: &BeersArgs, api: PunkApi, format: &OutputFormat) -> Result<()> {
    let api = args.filters.apply(api)?;
    tracing::info!("Fetching {}", api.endpoint());

    let beers = api.get_beers().await?;
    eprintln!("{} beers", beers.len());

    print_beers(&beers, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> PunkApi {
        PunkApi::new("key")
    }

    #[test]
    fn no_flags_leaves_query_empty() {
        let api = FilterArgs::default().apply(api()).unwrap();
        assert_eq!(api.endpoint(), "https://api.punkapi.com/v2/beers");
    }

    #[test]
    fn flags_map_to_params() {
        let args = FilterArgs {
            abv_above: Some(5.5),
            name: Some(" punk ".to_string()),
            brewed_after: Some("3-2010".to_string()),
            ids: Some("192,224".to_string()),
            per_page: Some(10),
            ..FilterArgs::default()
        };
        let api = args.apply(api()).unwrap();
        assert_eq!(
            api.endpoint(),
            "https://api.punkapi.com/v2/beers?abv_gt=5.5&beer_name=punk&brewed_after=03-2010&per_page=10&ids=192%7C224"
        );
    }

    #[test]
    fn invalid_flags_are_rejected() {
        let args = FilterArgs {
            brewed_before: Some("2010".to_string()),
            ..FilterArgs::default()
        };
        assert!(args.apply(api()).is_err());

        let args = FilterArgs {
            ids: Some("one,two".to_string()),
            ..FilterArgs::default()
        };
        assert!(args.apply(api()).is_err());
    }
}

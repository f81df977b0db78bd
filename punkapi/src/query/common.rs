//! The [`Query`] trait: URL serialization and the fluent filter setters.

use std::fmt::Display;

use url::{form_urlencoded, Url};

use super::params::{Param, ParameterSet};
use super::values::{IdList, Metric};

/// Trait implemented by anything that accumulates beer filters.
///
/// Every builder method consumes the query and returns the updated value, so
/// a query can be cloned and forked without two owners mutating one set.
pub trait Query {
    /// Returns the accumulated filter values.
    fn params(&self) -> &ParameterSet;

    /// Returns a mutable reference to the accumulated filter values.
    fn params_mut(&mut self) -> &mut ParameterSet;

    /// Serializes the filters as `key=value` pairs joined by `&`, or `None` when empty.
    ///
    /// Values are form-encoded, e.g. `|` becomes `%7C` and a space becomes `+`.
    fn query_string(&self) -> Option<String> {
        if self.params().is_empty() {
            return None;
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (param, value) in self.params().iter() {
            serializer.append_pair(param.key(), value);
        }
        Some(serializer.finish())
    }

    /// Appends the filters to `url` as a form-encoded query string.
    ///
    /// Pairs follow [`Param`] declaration order. With no filters the URL is
    /// returned without a `?`.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.params().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (param, value) in self.params().iter() {
                pairs.append_pair(param.key(), value);
            }
        }
        url
    }

    /// Merges `(key, value)` pairs into the filters. Unknown keys are ignored,
    /// existing keys are overwritten.
    fn add_params<I, K, V>(mut self, params: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        self.params_mut().merge_filtered(params);
        self
    }

    /// Removes the named filters. Names that are not set, or not allowed, are ignored.
    fn remove_params<I, K>(mut self, names: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for name in names {
            if let Some(param) = Param::from_key(name.as_ref()) {
                self.params_mut().remove(param);
            }
        }
        self
    }

    /// Drops every filter.
    fn clear_params(mut self) -> Self
    where
        Self: Sized,
    {
        self.params_mut().clear();
        self
    }

    /// Sets a single filter by its typed name.
    fn with_param(mut self, param: Param, value: impl ToString) -> Self
    where
        Self: Sized,
    {
        self.params_mut().insert(param, value);
        self
    }

    /// Beers with ABV greater than `abv`.
    fn abv_above(self, abv: impl Into<Metric>) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::AbvAbove, abv.into())
    }

    /// Beers with ABV less than `abv`.
    fn abv_below(self, abv: impl Into<Metric>) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::AbvBelow, abv.into())
    }

    /// Beers with IBU greater than `ibu`.
    fn ibu_above(self, ibu: impl Into<Metric>) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::IbuAbove, ibu.into())
    }

    /// Beers with IBU less than `ibu`.
    fn ibu_below(self, ibu: impl Into<Metric>) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::IbuBelow, ibu.into())
    }

    /// Beers with EBC greater than `ebc`.
    fn ebc_above(self, ebc: impl Into<Metric>) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::EbcAbove, ebc.into())
    }

    /// Beers with EBC less than `ebc`.
    fn ebc_below(self, ebc: impl Into<Metric>) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::EbcBelow, ebc.into())
    }

    /// Beers whose name contains `name` (the service matches partially).
    fn named(self, name: &str) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::BeerName, name)
    }

    fn yeast(self, yeast: &str) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::Yeast, yeast)
    }

    fn hops(self, hops: &str) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::Hops, hops)
    }

    fn malt(self, malt: &str) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::Malt, malt)
    }

    /// Beers whose food pairings mention `food`.
    fn food(self, food: &str) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::Food, food)
    }

    /// Beers first brewed before `date` (`mm-yyyy`, or a [`BrewDate`](super::BrewDate)).
    fn brewed_before(self, date: impl Display) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::BrewedBefore, date)
    }

    /// Beers first brewed after `date` (`mm-yyyy`, or a [`BrewDate`](super::BrewDate)).
    fn brewed_after(self, date: impl Display) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::BrewedAfter, date)
    }

    /// Sets the page number (1-indexed).
    fn page(self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::Page, page)
    }

    /// Sets the number of results per page. The service defaults to 25.
    fn per_page(self, per_page: u32) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::PerPage, per_page)
    }

    /// Restricts results to the given ids, either a sequence or a `|`-joined string.
    fn ids(self, ids: impl Into<IdList>) -> Self
    where
        Self: Sized,
    {
        self.with_param(Param::Ids, ids.into())
    }
}

//! The allow-list of filter parameters and the set of values chosen for a query.

use std::collections::BTreeMap;
use std::fmt;

/// Semantic type of a parameter value, as documented by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Base-10 integer or decimal.
    Number,
    /// Free text, matched partially by the service.
    Text,
    /// Month and year, `mm-yyyy`.
    Date,
    /// Beer ids joined with `|`.
    IdList,
}

/// A filter parameter accepted by `/v2/beers`.
///
/// Variants are declared in the order they are serialized into a query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Param {
    AbvAbove,
    AbvBelow,
    IbuAbove,
    IbuBelow,
    EbcAbove,
    EbcBelow,
    BeerName,
    Yeast,
    BrewedBefore,
    BrewedAfter,
    Hops,
    Malt,
    Food,
    Page,
    PerPage,
    Ids,
}

impl Param {
    /// Every allowed parameter, in declaration order.
    pub const ALL: [Param; 16] = [
        Param::AbvAbove,
        Param::AbvBelow,
        Param::IbuAbove,
        Param::IbuBelow,
        Param::EbcAbove,
        Param::EbcBelow,
        Param::BeerName,
        Param::Yeast,
        Param::BrewedBefore,
        Param::BrewedAfter,
        Param::Hops,
        Param::Malt,
        Param::Food,
        Param::Page,
        Param::PerPage,
        Param::Ids,
    ];

    /// The exact key sent on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            Param::AbvAbove => "abv_gt",
            Param::AbvBelow => "abv_lt",
            Param::IbuAbove => "ibu_gt",
            Param::IbuBelow => "ibu_lt",
            Param::EbcAbove => "ebc_gt",
            Param::EbcBelow => "ebc_lt",
            Param::BeerName => "beer_name",
            Param::Yeast => "yeast",
            Param::BrewedBefore => "brewed_before",
            Param::BrewedAfter => "brewed_after",
            Param::Hops => "hops",
            Param::Malt => "malt",
            Param::Food => "food",
            Param::Page => "page",
            Param::PerPage => "per_page",
            Param::Ids => "ids",
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Param::AbvAbove
            | Param::AbvBelow
            | Param::IbuAbove
            | Param::IbuBelow
            | Param::EbcAbove
            | Param::EbcBelow
            | Param::Page
            | Param::PerPage => ValueKind::Number,
            Param::BeerName | Param::Yeast | Param::Hops | Param::Malt | Param::Food => {
                ValueKind::Text
            }
            Param::BrewedBefore | Param::BrewedAfter => ValueKind::Date,
            Param::Ids => ValueKind::IdList,
        }
    }

    /// Looks up an allowed parameter by its wire key. Case-sensitive.
    pub fn from_key(key: &str) -> Option<Param> {
        let param = match key {
            "abv_gt" => Param::AbvAbove,
            "abv_lt" => Param::AbvBelow,
            "ibu_gt" => Param::IbuAbove,
            "ibu_lt" => Param::IbuBelow,
            "ebc_gt" => Param::EbcAbove,
            "ebc_lt" => Param::EbcBelow,
            "beer_name" => Param::BeerName,
            "yeast" => Param::Yeast,
            "brewed_before" => Param::BrewedBefore,
            "brewed_after" => Param::BrewedAfter,
            "hops" => Param::Hops,
            "malt" => Param::Malt,
            "food" => Param::Food,
            "page" => Param::Page,
            "per_page" => Param::PerPage,
            "ids" => Param::Ids,
            _ => return None,
        };
        Some(param)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Filter values chosen for a query, at most one per parameter.
///
/// Iteration always follows [`Param`] declaration order, so two sets holding
/// the same entries serialize identically whatever order they were built in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterSet {
    values: BTreeMap<Param, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `param`, replacing any earlier value.
    pub fn insert(&mut self, param: Param, value: impl ToString) {
        self.values.insert(param, value.to_string());
    }

    pub fn remove(&mut self, param: Param) -> Option<String> {
        self.values.remove(&param)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn get(&self, param: Param) -> Option<&str> {
        self.values.get(&param).map(String::as_str)
    }

    pub fn contains(&self, param: Param) -> bool {
        self.values.contains_key(&param)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Param, &str)> {
        self.values.iter().map(|(param, value)| (*param, value.as_str()))
    }

    /// Merges loosely typed `(key, value)` pairs, keeping only allowed keys.
    ///
    /// Unknown keys are dropped without error. Known keys overwrite.
    pub fn merge_filtered<I, K, V>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: ToString,
    {
        for (key, value) in candidates {
            match Param::from_key(key.as_ref()) {
                Some(param) => self.insert(param, value),
                None => tracing::debug!("Dropping unknown parameter '{}'", key.as_ref()),
            }
        }
    }
}

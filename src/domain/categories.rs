//! Menu categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of menu categories.
///
/// Kept as an enum so a new category forces every match site to be
/// revisited instead of silently passing through as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Entradas,
    PratosPrincipais,
    Sobremesas,
    Bebidas,
}

#[derive(Debug, Error)]
#[error("unknown product category: {0}")]
pub struct UnknownCategory(pub String);

impl ProductCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entradas => "ENTRADAS",
            Self::PratosPrincipais => "PRATOS_PRINCIPAIS",
            Self::Sobremesas => "SOBREMESAS",
            Self::Bebidas => "BEBIDAS",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENTRADAS" => Ok(Self::Entradas),
            "PRATOS_PRINCIPAIS" => Ok(Self::PratosPrincipais),
            "SOBREMESAS" => Ok(Self::Sobremesas),
            "BEBIDAS" => Ok(Self::Bebidas),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories() {
        assert_eq!(
            "PRATOS_PRINCIPAIS".parse::<ProductCategory>().ok(),
            Some(ProductCategory::PratosPrincipais)
        );
        assert_eq!(
            "BEBIDAS".parse::<ProductCategory>().ok(),
            Some(ProductCategory::Bebidas)
        );
    }

    #[test]
    fn rejects_unknown_and_lowercase() {
        assert!("SALADAS".parse::<ProductCategory>().is_err());
        assert!("entradas".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn display_matches_from_str() {
        for category in [
            ProductCategory::Entradas,
            ProductCategory::PratosPrincipais,
            ProductCategory::Sobremesas,
            ProductCategory::Bebidas,
        ] {
            assert_eq!(category.as_str().parse::<ProductCategory>().ok(), Some(category));
        }
    }
}

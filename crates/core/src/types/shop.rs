//! Shop records and their categorical fields.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::ShopId;
use crate::store::Record;
use crate::view::{Projectable, SortField};

/// A string did not name a known variant.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    /// Which enumeration was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Business category of a shop.
///
/// Types outside the known set arrive as [`ShopType::Other`] so that a single
/// unfamiliar shop does not fail a whole backend listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShopType {
    General,
    Medical,
    Footwear,
    Electrical,
    Clothes,
    Electronics,
    Other(String),
}

impl ShopType {
    /// Every shop type the data model knows about.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Medical,
        Self::Footwear,
        Self::Electrical,
        Self::Clothes,
        Self::Electronics,
    ];

    /// Wire and display value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::General => "General",
            Self::Medical => "Medical",
            Self::Footwear => "Footwear",
            Self::Electrical => "Electrical",
            Self::Clothes => "Clothes",
            Self::Electronics => "Electronics",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for ShopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the known types only. Wire values go through `From<String>`,
/// which falls back to [`ShopType::Other`].
impl FromStr for ShopType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "shop type",
                value: s.to_string(),
            })
    }
}

impl From<String> for ShopType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| Self::Other(value))
    }
}

impl From<ShopType> for String {
    fn from(value: ShopType) -> Self {
        match value {
            ShopType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Subscription package a shop is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageType {
    Basic,
    Standard,
    Premium,
}

impl PackageType {
    /// Every package, cheapest first.
    pub const ALL: [Self; 3] = [Self::Basic, Self::Standard, Self::Premium];

    /// Wire and display value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "package type",
                value: s.to_string(),
            })
    }
}

/// A shop as listed on the shops screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: ShopId,
    pub name: String,
    pub owner_name: String,
    pub location: String,
    pub shop_type: ShopType,
    pub package_type: PackageType,
}

impl Record for Shop {
    type Id = ShopId;

    fn id(&self) -> ShopId {
        self.id
    }
}

/// Categorical filters on the shops list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShopFacet {
    /// Matches [`Shop::shop_type`].
    Category,
    /// Matches [`Shop::package_type`].
    Package,
}

/// Fields the shops list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShopSortField {
    #[default]
    Name,
    Owner,
    Location,
    ShopType,
    PackageType,
}

impl SortField for ShopSortField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Owner,
        Self::Location,
        Self::ShopType,
        Self::PackageType,
    ];

    fn as_param(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Owner => "owner",
            Self::Location => "location",
            Self::ShopType => "type",
            Self::PackageType => "package",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Shop Name",
            Self::Owner => "Owner Name",
            Self::Location => "Location",
            Self::ShopType => "Shop Type",
            Self::PackageType => "Package Type",
        }
    }
}

impl Projectable for Shop {
    type Sort = ShopSortField;
    type Facet = ShopFacet;

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.owner_name.as_str()),
            Cow::Borrowed(self.location.as_str()),
            Cow::Owned(self.id.to_string()),
            Cow::Borrowed(self.shop_type.as_str()),
        ]
    }

    fn sort_value(&self, field: ShopSortField) -> Option<&str> {
        Some(match field {
            ShopSortField::Name => &self.name,
            ShopSortField::Owner => &self.owner_name,
            ShopSortField::Location => &self.location,
            ShopSortField::ShopType => self.shop_type.as_str(),
            ShopSortField::PackageType => self.package_type.as_str(),
        })
    }

    fn facet_value(&self, facet: ShopFacet) -> &str {
        match facet {
            ShopFacet::Category => self.shop_type.as_str(),
            ShopFacet::Package => self.package_type.as_str(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_shop_uses_camel_case_wire_names() {
        let shop: Shop = serde_json::from_value(json!({
            "id": 6,
            "name": "Tech World",
            "ownerName": "Mike Davis",
            "location": "Washington",
            "shopType": "Electronics",
            "packageType": "Premium",
        }))
        .unwrap();

        assert_eq!(shop.owner_name, "Mike Davis");
        assert_eq!(shop.shop_type, ShopType::Electronics);
        assert_eq!(shop.package_type, PackageType::Premium);
    }

    #[test]
    fn test_unknown_shop_type_is_kept() {
        let shops: Vec<Shop> = serde_json::from_value(json!([
            {
                "id": 7,
                "name": "Corner Grocer",
                "ownerName": "Lena Park",
                "location": "Oregon",
                "shopType": "Grocery",
                "packageType": "Basic",
            },
            {
                "id": 1,
                "name": "General Store",
                "ownerName": "John Doe",
                "location": "New York",
                "shopType": "General",
                "packageType": "Basic",
            },
        ]))
        .unwrap();

        assert_eq!(shops[0].shop_type, ShopType::Other("Grocery".to_string()));
        assert_eq!(shops[0].facet_value(ShopFacet::Category), "Grocery");
        assert_eq!(shops[1].shop_type, ShopType::General);
        assert_eq!(
            serde_json::to_value(&shops[0]).unwrap()["shopType"],
            json!("Grocery")
        );
        assert!("Grocery".parse::<ShopType>().is_err());
    }

    #[test]
    fn test_parse_enums_is_case_sensitive() {
        assert_eq!("Clothes".parse::<ShopType>().unwrap(), ShopType::Clothes);
        assert!("clothes".parse::<ShopType>().is_err());
        assert_eq!("Basic".parse::<PackageType>().unwrap(), PackageType::Basic);

        let err = "Gold".parse::<PackageType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown package type: Gold");
    }

    #[test]
    fn test_shop_search_fields_include_id_and_type() {
        let shop = Shop {
            id: ShopId::new(4),
            name: "Electrical Bazaar".to_string(),
            owner_name: "Bob Johnson".to_string(),
            location: "Florida".to_string(),
            shop_type: ShopType::Electrical,
            package_type: PackageType::Basic,
        };
        let fields: Vec<String> = shop
            .search_fields()
            .into_iter()
            .map(Cow::into_owned)
            .collect();
        assert!(fields.contains(&"4".to_string()));
        assert!(fields.contains(&"Electrical".to_string()));
        assert!(!fields.contains(&"Basic".to_string()));
        assert_eq!(shop.facet_value(ShopFacet::Package), "Basic");
    }
}

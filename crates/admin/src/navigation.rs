//! Links handed to the external router.
//!
//! The view and update screens are not served here. Their paths are fixed;
//! [`AdminConfig::router_base`](crate::config::AdminConfig::router_base) is
//! prepended so the router can live on another origin or under a prefix.

use std::fmt;

use superadmin_core::{CustomerId, ShopId};

/// A screen owned by the external router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    ViewCustomer(CustomerId),
    UpdateCustomer(CustomerId),
    ViewShop(ShopId),
    UpdateShop(ShopId),
}

impl Destination {
    /// Link to this screen under `router_base`.
    #[must_use]
    pub fn href(self, router_base: &str) -> String {
        format!("{router_base}{self}")
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewCustomer(id) => write!(f, "/view-customer/{id}"),
            Self::UpdateCustomer(id) => write!(f, "/update-customer/{id}"),
            Self::ViewShop(id) => write!(f, "/view-shop/{id}"),
            Self::UpdateShop(id) => write!(f, "/update-shop/{id}"),
        }
    }
}

//! Core types for the superadmin dashboard.
//!
//! This module provides type-safe wrappers for the dashboard's entities.

pub mod customer;
pub mod email;
pub mod id;
pub mod shop;

pub use customer::{Customer, CustomerSortField, NewCustomer, NewCustomerError};
pub use email::{Email, EmailError};
pub use id::*;
pub use shop::{PackageType, Shop, ShopFacet, ShopSortField, ShopType, UnknownVariant};

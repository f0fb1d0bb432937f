//! Built-in sample data.

use async_trait::async_trait;
use superadmin_core::{Customer, CustomerId, PackageType, Shop, ShopId, ShopType};

use super::DataSource;
use crate::backend::BackendError;

/// Serves a fixed collection.
#[derive(Debug, Clone)]
pub struct FixtureSource<T> {
    records: Vec<T>,
}

impl<T> FixtureSource<T> {
    /// Serve `records` on every load.
    #[must_use]
    pub const fn new(records: Vec<T>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> DataSource<T> for FixtureSource<T> {
    async fn load(&self) -> Result<Vec<T>, BackendError> {
        Ok(self.records.clone())
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

fn customer(id: i32, name: &str, email: &str, phone: &str) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: None,
    }
}

fn shop(
    id: i32,
    name: &str,
    owner_name: &str,
    location: &str,
    shop_type: ShopType,
    package_type: PackageType,
) -> Shop {
    Shop {
        id: ShopId::new(id),
        name: name.to_string(),
        owner_name: owner_name.to_string(),
        location: location.to_string(),
        shop_type,
        package_type,
    }
}

/// Sample customers.
#[must_use]
pub fn fixture_customers() -> Vec<Customer> {
    vec![
        customer(1, "John Doe", "john.doe@example.com", "1234567890"),
        customer(2, "Jane Smith", "jane.smith@example.com", "2345678901"),
        customer(3, "Alice Brown", "alice.brown@example.com", "3456789012"),
        customer(4, "Bob White", "bob.white@example.com", "4567890123"),
        customer(5, "Charlie Black", "charlie.black@example.com", "5678901234"),
        customer(6, "Daisy Green", "daisy.green@example.com", "6789012345"),
        customer(7, "Ethan Blue", "ethan.blue@example.com", "7890123456"),
        customer(8, "Fiona Red", "fiona.red@example.com", "8901234567"),
    ]
}

/// Sample shops.
#[must_use]
pub fn fixture_shops() -> Vec<Shop> {
    use PackageType::{Basic, Premium, Standard};

    vec![
        shop(1, "General Store", "John Doe", "New York", ShopType::General, Basic),
        shop(2, "Medical Supplies", "Jane Smith", "California", ShopType::Medical, Standard),
        shop(3, "Footwear Hub", "Alice Brown", "Texas", ShopType::Footwear, Premium),
        shop(4, "Electrical Bazaar", "Bob Johnson", "Florida", ShopType::Electrical, Basic),
        shop(5, "Fashion Paradise", "Sara Lee", "Nevada", ShopType::Clothes, Standard),
        shop(6, "Tech World", "Mike Davis", "Washington", ShopType::Electronics, Premium),
    ]
}

//! Customer records and the add-customer payload.

use std::borrow::Cow;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use super::email::{Email, EmailError};
use super::id::CustomerId;
use crate::store::Record;
use crate::view::{Projectable, SortField};

/// A customer as listed on the customers screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Only known for customers created through the add form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Record for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }
}

/// Fields the customers list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CustomerSortField {
    #[default]
    Name,
    Email,
    Phone,
}

impl SortField for CustomerSortField {
    const ALL: &'static [Self] = &[Self::Name, Self::Email, Self::Phone];

    fn as_param(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }
}

impl Projectable for Customer {
    type Sort = CustomerSortField;
    type Facet = Infallible;

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.phone.as_str()),
        ]
    }

    fn sort_value(&self, field: CustomerSortField) -> Option<&str> {
        Some(match field {
            CustomerSortField::Name => &self.name,
            CustomerSortField::Email => &self.email,
            CustomerSortField::Phone => &self.phone,
        })
    }

    fn facet_value(&self, facet: Infallible) -> &str {
        match facet {}
    }
}

/// Why an add-customer submission was refused before reaching the backend.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NewCustomerError {
    /// A required field was blank.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// The email address is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

impl NewCustomerError {
    /// Name of the form field at fault.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) => field,
            Self::InvalidEmail(_) => "email",
        }
    }
}

/// Body of `POST /customer` on the backend.
///
/// Serializes to exactly `{name, email, phone, address}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
}

impl NewCustomer {
    /// Validate raw form input. Every field is trimmed and required.
    ///
    /// # Errors
    ///
    /// Returns [`NewCustomerError::MissingField`] for the first blank field
    /// (in form order) or [`NewCustomerError::InvalidEmail`] for a malformed
    /// address.
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
    ) -> Result<Self, NewCustomerError> {
        let name = required(name, "name")?;
        let email = required(email, "email")?;
        let phone = required(phone, "phone")?;
        let address = required(address, "address")?;

        Ok(Self {
            name: name.to_owned(),
            email: Email::parse(email)?,
            phone: phone.to_owned(),
            address: address.to_owned(),
        })
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, NewCustomerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(NewCustomerError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

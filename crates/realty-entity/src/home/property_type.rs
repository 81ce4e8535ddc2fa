//! Property type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of property a listing describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "property_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PropertyType {
    /// Detached house or townhouse.
    Residential,
    /// Unit in a multi-unit building.
    Condo,
}

impl PropertyType {
    /// Return the type as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "RESIDENTIAL",
            Self::Condo => "CONDO",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = realty_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RESIDENTIAL" => Ok(Self::Residential),
            "CONDO" => Ok(Self::Condo),
            _ => Err(realty_core::AppError::validation(format!(
                "Invalid property type: '{s}'. Expected one of: RESIDENTIAL, CONDO"
            ))),
        }
    }
}

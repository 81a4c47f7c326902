use crate::{
    errors::{ServiceError, format_validation_errors},
    model::{company::CompanyDetail, purchase::PurchaseDetail},
};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

/// Which side of a purchase the caller's company is listed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RecordType {
    /// Sales: the caller's company is the auction seller.
    Ventas,
    /// Purchases: the caller's company is the offer buyer.
    Compras,
}

impl RecordType {
    pub const ALL: [RecordType; 2] = [RecordType::Ventas, RecordType::Compras];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Ventas => "Ventas",
            RecordType::Compras => "Compras",
        }
    }

    /// The accepted literals as listed in validation issues: `'Ventas' | 'Compras'`.
    pub fn expected() -> String {
        RecordType::ALL
            .iter()
            .map(|kind| format!("'{kind}'"))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// The company on the other side of `purchase` from the caller.
    pub fn counterparty<'a>(&self, purchase: &'a PurchaseDetail) -> &'a CompanyDetail {
        match self {
            RecordType::Ventas => &purchase.offer.company_buyer,
            RecordType::Compras => &purchase.auction.company_seller,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| invalid_record_type(value))
    }
}

impl TryFrom<&str> for RecordType {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn invalid_record_type(received: &str) -> ValidationError {
    let options: Vec<&str> = RecordType::ALL.iter().map(RecordType::as_str).collect();

    let mut err = ValidationError::new("invalid_enum_value").with_message(Cow::from(format!(
        "Invalid enum value. Expected {}, received '{received}'",
        RecordType::expected()
    )));
    err.add_param(Cow::from("options"), &options);
    err.add_param(Cow::from("received"), &received);
    err
}

fn validate_record_type(value: &str) -> Result<(), ValidationError> {
    value.parse::<RecordType>().map(|_| ())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct FindPurchasesRequest {
    /// `Ventas` lists sales, `Compras` lists purchases.
    #[serde(rename = "recordType", default)]
    #[param(value_type = RecordType, required = true)]
    #[validate(required, custom(function = "validate_record_type"))]
    pub record_type: Option<String>,
}

impl FindPurchasesRequest {
    /// Builds the request from raw query pairs. A repeated `recordType`
    /// keeps its first value and other keys are ignored.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let record_type = pairs
            .into_iter()
            .find(|(key, _)| key.as_ref() == "recordType")
            .map(|(_, value)| value.into());

        Self { record_type }
    }

    /// Validates the query and yields the listing mode it selects.
    pub fn record_type(&self) -> Result<RecordType, ServiceError> {
        self.validate().map_err(|errors| {
            let mut issues = format_validation_errors(&errors);
            for issue in issues.iter_mut().filter(|i| i.code == "invalid_type") {
                issue.expected = Some(RecordType::expected());
            }
            ServiceError::Validation(issues)
        })?;

        self.record_type
            .as_deref()
            .unwrap_or_default()
            .parse::<RecordType>()
            .map_err(|err| {
                let mut errors = ValidationErrors::new();
                errors.add("record_type", err);
                ServiceError::Validation(format_validation_errors(&errors))
            })
    }
}

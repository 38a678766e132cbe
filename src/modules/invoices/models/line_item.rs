// LineItem model with amount calculation
//
// A line item is one row of billable work. Its amount is always
// quantity × rate; the three numeric fields are private so no caller can
// observe an amount computed from a stale quantity or rate.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::money::{clamp_non_negative, coerce_amount, saturating_product};
use crate::core::AppError;

/// Unit of measure printed next to the quantity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    /// Square feet
    #[default]
    SqFt,
    /// Count of pieces
    Nos,
    /// Running feet
    RunningFt,
    /// Lump sum for the whole job
    Lump,
    /// Brass (100 cubic feet)
    Brass,
    /// Any label typed by the operator
    Other(String),
}

impl Unit {
    /// The fixed units offered by the form
    pub const STANDARD: [Unit; 5] = [Unit::SqFt, Unit::Nos, Unit::RunningFt, Unit::Lump, Unit::Brass];

    pub fn label(&self) -> &str {
        match self {
            Unit::SqFt => "Sq.ft",
            Unit::Nos => "Nos",
            Unit::RunningFt => "R.ft",
            Unit::Lump => "Lump",
            Unit::Brass => "Brass",
            Unit::Other(label) => label,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Unit {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Sq.ft" => Unit::SqFt,
            "Nos" => Unit::Nos,
            "R.ft" => Unit::RunningFt,
            "Lump" => Unit::Lump,
            "Brass" => Unit::Brass,
            _ => Unit::Other(label),
        }
    }
}

impl From<&str> for Unit {
    fn from(label: &str) -> Self {
        Unit::from(label.to_string())
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Other(label) => label,
            standard => standard.label().to_string(),
        }
    }
}

/// Editable fields of a line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemField {
    Description,
    Unit,
    Quantity,
    Rate,
}

impl FromStr for ItemField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(ItemField::Description),
            "unit" => Ok(ItemField::Unit),
            "quantity" => Ok(ItemField::Quantity),
            "rate" => Ok(ItemField::Rate),
            _ => Err(AppError::validation(format!("Unknown line item field: {}", s))),
        }
    }
}

/// A single edit to a line item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemUpdate {
    Description(String),
    Unit(Unit),
    Quantity(Decimal),
    Rate(Decimal),
}

impl ItemUpdate {
    /// Build an update from raw form text
    ///
    /// Numeric fields go through parse-and-clamp, so "abc" or "-5" become zero.
    pub fn from_raw(field: ItemField, raw: &str) -> Self {
        match field {
            ItemField::Description => ItemUpdate::Description(raw.to_string()),
            ItemField::Unit => ItemUpdate::Unit(Unit::from(raw)),
            ItemField::Quantity => ItemUpdate::Quantity(coerce_amount(raw)),
            ItemField::Rate => ItemUpdate::Rate(coerce_amount(raw)),
        }
    }
}

/// Represents a single line of work on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    id: String,

    /// Description of the work
    pub description: String,

    /// Unit of measure
    pub unit: Unit,

    quantity: Decimal,

    rate: Decimal,

    /// quantity × rate
    amount: Decimal,
}

impl LineItem {
    /// Create a new line item with quantity 1
    ///
    /// # Arguments
    /// * `description` - Work description
    /// * `unit` - Unit of measure
    /// * `rate` - Price per unit, clamped to zero from below
    pub fn new(description: impl Into<String>, unit: Unit, rate: Decimal) -> Self {
        let mut item = Self {
            id: Uuid::new_v4().to_string(),
            description: description.into(),
            unit,
            quantity: Decimal::ONE,
            rate: clamp_non_negative(rate),
            amount: Decimal::ZERO,
        };
        item.calculate_amount();
        item
    }

    /// Item produced by the work-description assistant: rate 0, default unit
    pub fn from_parsed(description: impl Into<String>, quantity: Decimal) -> Self {
        let mut item = Self::new(description, Unit::default(), Decimal::ZERO);
        item.set_quantity(quantity);
        item
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = clamp_non_negative(quantity);
        self.calculate_amount();
    }

    pub fn set_rate(&mut self, rate: Decimal) {
        self.rate = clamp_non_negative(rate);
        self.calculate_amount();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Apply one field edit
    pub fn apply(&mut self, update: ItemUpdate) {
        match update {
            ItemUpdate::Description(description) => self.set_description(description),
            ItemUpdate::Unit(unit) => self.set_unit(unit),
            ItemUpdate::Quantity(quantity) => self.set_quantity(quantity),
            ItemUpdate::Rate(rate) => self.set_rate(rate),
        }
    }

    /// Recompute amount from quantity and rate
    ///
    /// Loaded records pass through here too, so a persisted amount that
    /// disagrees with its factors is corrected. A product beyond the decimal
    /// range is capped at `Decimal::MAX`.
    pub fn calculate_amount(&mut self) {
        self.quantity = clamp_non_negative(self.quantity);
        self.rate = clamp_non_negative(self.rate);
        self.amount = saturating_product(self.quantity, self.rate);
    }
}

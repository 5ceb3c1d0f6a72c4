//! Declarative field validation for the product payload.
//!
//! The contract is an explicit, ordered rule table: one entry per field in
//! payload declaration order, each carrying its rules in declared order.
//! Evaluation walks the table and stops at the first violation, so a reply
//! names exactly one field and one rule. Rules are type-directed: `required`
//! means non-zero for numbers and non-empty for text, `min`/`max` compare
//! numeric values or character counts, `iso4217` consults the currency table.

mod currency;

use std::fmt;

use thiserror::Error;

use crate::models::Product;

// ── Fields ────────────────────────────────────────────────────────────────────

/// The product fields subject to validation, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Description,
    Price,
    Currency,
}

impl Field {
    /// Name used in validation messages (`ID`, not `id`).
    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Price => "Price",
            Field::Currency => "Currency",
        }
    }

    /// Reads this field's value out of a product.
    fn value_of(self, product: &Product) -> FieldValue<'_> {
        match self {
            Field::Id => FieldValue::Int(product.id),
            Field::Name => FieldValue::Text(&product.name),
            Field::Description => FieldValue::Text(&product.description),
            Field::Price => FieldValue::Float(product.price),
            Field::Currency => FieldValue::Text(&product.currency),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field value seen through the type lens the rules dispatch on.
enum FieldValue<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

// ── Rules ─────────────────────────────────────────────────────────────────────

/// One validation rule with its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Non-zero number or non-empty text.
    Required,
    /// Numeric lower bound, or minimum character count for text.
    Min(u32),
    /// Numeric upper bound, or maximum character count for text.
    Max(u32),
    /// Active ISO 4217 alpha-3 currency code, uppercase.
    Iso4217,
}

impl Rule {
    /// Tag name used in validation messages.
    pub fn tag(self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::Iso4217 => "iso4217",
        }
    }

    /// Whether `value` satisfies this rule. Length limits count characters,
    /// not bytes.
    fn holds(self, value: &FieldValue<'_>) -> bool {
        match (self, value) {
            (Rule::Required, FieldValue::Int(n)) => *n != 0,
            (Rule::Required, FieldValue::Float(x)) => *x != 0.0,
            (Rule::Required, FieldValue::Text(s)) => !s.is_empty(),
            (Rule::Min(min), FieldValue::Int(n)) => *n >= i64::from(min),
            (Rule::Min(min), FieldValue::Float(x)) => *x >= f64::from(min),
            (Rule::Min(min), FieldValue::Text(s)) => s.chars().count() >= min as usize,
            (Rule::Max(max), FieldValue::Int(n)) => *n <= i64::from(max),
            (Rule::Max(max), FieldValue::Float(x)) => *x <= f64::from(max),
            (Rule::Max(max), FieldValue::Text(s)) => s.chars().count() <= max as usize,
            (Rule::Iso4217, FieldValue::Text(s)) => currency::is_iso4217(s),
            // Non-text fields never hold a currency code.
            (Rule::Iso4217, _) => false,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

/// The first rule violation found. `Display` is the exact wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Key: 'Product.{field}' Error:Field validation for '{field}' failed on the '{rule}' tag")]
pub struct ValidationError {
    pub field: Field,
    pub rule: Rule,
}

// ── Validator ─────────────────────────────────────────────────────────────────

/// Rules for one field, evaluated in declared order.
struct FieldRules {
    field: Field,
    rules: Vec<Rule>,
}

/// The immutable product rule table. Built once during application setup and
/// shared read-only across requests.
pub struct ProductValidator {
    rules: Vec<FieldRules>,
}

impl ProductValidator {
    /// The validation contract, field by field.
    pub fn new() -> Self {
        Self {
            rules: vec![
                FieldRules {
                    field: Field::Id,
                    rules: vec![Rule::Required],
                },
                FieldRules {
                    field: Field::Name,
                    rules: vec![Rule::Required, Rule::Max(30)],
                },
                FieldRules {
                    field: Field::Description,
                    rules: vec![Rule::Max(150)],
                },
                FieldRules {
                    field: Field::Price,
                    rules: vec![Rule::Required, Rule::Min(1), Rule::Max(100)],
                },
                FieldRules {
                    field: Field::Currency,
                    rules: vec![Rule::Required, Rule::Iso4217],
                },
            ],
        }
    }

    /// Checks every rule in table order and reports the first violation.
    /// A product is valid only when all rules hold at once.
    pub fn validate(&self, product: &Product) -> Result<(), ValidationError> {
        for entry in &self.rules {
            let value = entry.field.value_of(product);
            for &rule in &entry.rules {
                if !rule.holds(&value) {
                    return Err(ValidationError {
                        field: entry.field,
                        rule,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for ProductValidator {
    fn default() -> Self {
        Self::new()
    }
}

//! Line parser turning raw text into validated problem instances.

use packer_config::{ConfigError, LimitsConfig};
use packer_core::error::Result;
use packer_core::{
    Field, Hundredths, InstanceError, Item, ParseError, ParseErrorKind, ProblemInstance,
};
use rust_decimal::Decimal;
use tracing::trace;

use crate::scanner::{RawToken, Scanner};

/// Numeric bounds enforced while parsing, in fixed-point form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLimits {
    /// Maximum item index, and therefore item count.
    pub max_items: usize,
    pub max_capacity: Hundredths,
    pub max_weight: Hundredths,
    pub max_cost: Hundredths,
}

impl Default for ParserLimits {
    fn default() -> Self {
        ParserLimits {
            max_items: 15,
            max_capacity: Hundredths::from_units(100),
            max_weight: Hundredths::from_units(100),
            max_cost: Hundredths::from_units(100),
        }
    }
}

impl ParserLimits {
    /// Converts configured limits into fixed-point bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configuration does not
    /// validate or a bound cannot be expressed in hundredths.
    pub fn from_config(limits: &LimitsConfig) -> std::result::Result<Self, ConfigError> {
        fn bound(name: &str, value: Decimal) -> std::result::Result<Hundredths, ConfigError> {
            Hundredths::from_decimal(value).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "{} must be a non-negative value with at most 2 fractional digits, got {}",
                    name, value
                ))
            })
        }

        if limits.max_items == 0 || limits.max_items > ProblemInstance::MAX_SUPPORTED_ITEMS {
            return Err(ConfigError::Invalid(format!(
                "max_items must be between 1 and {}, got {}",
                ProblemInstance::MAX_SUPPORTED_ITEMS,
                limits.max_items
            )));
        }

        Ok(ParserLimits {
            max_items: limits.max_items,
            max_capacity: bound("max_capacity", limits.max_capacity)?,
            max_weight: bound("max_weight", limits.max_weight)?,
            max_cost: bound("max_cost", limits.max_cost)?,
        })
    }
}

/// Parses input lines of the form
/// `<capacity> : (<index>,<weight>,€<cost>) (<index>,<weight>,€<cost>) ...`.
///
/// # Examples
///
/// ```
/// use packer_parser::LineParser;
/// use packer_core::{Hundredths, ParseErrorKind};
///
/// let parser = LineParser::default();
///
/// let instance = parser.parse(0, "8 : (1,15.3,€34)").unwrap();
/// assert_eq!(instance.capacity(), Hundredths::from_units(8));
/// assert_eq!(instance.items()[0].weight(), Hundredths::from_raw(1530));
///
/// let err = parser.parse(1, "abc : (1,1,€1)").unwrap_err();
/// assert_eq!(err.line_number, 1);
/// assert!(matches!(err.kind, ParseErrorKind::InvalidCapacity { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    limits: ParserLimits,
}

impl LineParser {
    pub fn new(limits: ParserLimits) -> Self {
        LineParser { limits }
    }

    pub fn limits(&self) -> &ParserLimits {
        &self.limits
    }

    /// Parses one line into a [`ProblemInstance`].
    ///
    /// Checks run in order: separator count, capacity, then each item token
    /// left to right (grammar, then ranges), then the index sequence. The
    /// first failure is returned together with the line and its number.
    pub fn parse(&self, line_number: u64, line: &str) -> Result<ProblemInstance> {
        let fail = |kind: ParseErrorKind| ParseError::new(line_number, line, kind);

        let (capacity_field, items_field) = split_fields(line).map_err(&fail)?;
        let capacity = self.parse_capacity(capacity_field).map_err(&fail)?;

        let items_offset = capacity_field.len() + 1;
        let mut scanner = Scanner::new(items_field);
        let mut items = Vec::new();
        loop {
            let token = scanner.item_token().ok_or_else(|| {
                fail(ParseErrorKind::MalformedItemList {
                    offset: items_offset + scanner.position(),
                })
            })?;
            items.push(self.check_token(token).map_err(&fail)?);
            if scanner.is_at_end() {
                break;
            }
        }

        trace!(
            line_number,
            capacity = %capacity,
            items = items.len(),
            "Parsed line"
        );

        ProblemInstance::new(capacity, items).map_err(|err| fail(self.instance_error_kind(err)))
    }

    fn parse_capacity(&self, field: &str) -> std::result::Result<Hundredths, ParseErrorKind> {
        let trimmed = field.trim_matches(|c: char| c.is_ascii_whitespace());
        let invalid = || ParseErrorKind::InvalidCapacity {
            field: trimmed.to_string(),
            max: self.limits.max_capacity.to_string(),
        };

        let mut scanner = Scanner::new(trimmed);
        let numeral = scanner.decimal().ok_or_else(invalid)?;
        if !scanner.is_at_end() {
            return Err(invalid());
        }
        match to_hundredths(numeral) {
            Some(capacity) if capacity <= self.limits.max_capacity => Ok(capacity),
            _ => Err(invalid()),
        }
    }

    fn check_token(&self, token: RawToken<'_>) -> std::result::Result<Item, ParseErrorKind> {
        let index = token
            .index
            .parse::<usize>()
            .ok()
            .filter(|index| (1..=self.limits.max_items).contains(index))
            .ok_or_else(|| ParseErrorKind::ValueOutOfRange {
                field: Field::Index,
                value: token.index.to_string(),
                min: "1".to_string(),
                max: self.limits.max_items.to_string(),
            })?;
        let weight = self.check_bound(Field::Weight, token.weight, self.limits.max_weight)?;
        let cost = self.check_bound(Field::Cost, token.cost, self.limits.max_cost)?;
        Ok(Item::new(index, weight, cost))
    }

    fn check_bound(
        &self,
        field: Field,
        numeral: &str,
        max: Hundredths,
    ) -> std::result::Result<Hundredths, ParseErrorKind> {
        to_hundredths(numeral)
            .filter(|value| *value <= max)
            .ok_or_else(|| ParseErrorKind::ValueOutOfRange {
                field,
                value: numeral.to_string(),
                min: Hundredths::ZERO.to_string(),
                max: max.to_string(),
            })
    }

    fn instance_error_kind(&self, err: InstanceError) -> ParseErrorKind {
        match err {
            InstanceError::IndexSequence {
                position,
                expected,
                found,
            } => ParseErrorKind::IndexSequenceInvalid {
                position,
                expected,
                found,
            },
            InstanceError::TooManyItems { count, max } => ParseErrorKind::ValueOutOfRange {
                field: Field::Index,
                value: count.to_string(),
                min: "1".to_string(),
                max: max.min(self.limits.max_items).to_string(),
            },
        }
    }
}

/// Splits a line around its single `:`.
fn split_fields(line: &str) -> std::result::Result<(&str, &str), ParseErrorKind> {
    let found = line.matches(':').count();
    if found != 1 {
        return Err(ParseErrorKind::SeparatorCount { found });
    }
    line.split_once(':')
        .ok_or(ParseErrorKind::SeparatorCount { found })
}

/// Converts a numeral accepted by the scanner into hundredths.
///
/// Numerals too long for a decimal are reported as `None`, which callers
/// treat as out of range.
fn to_hundredths(numeral: &str) -> Option<Hundredths> {
    Decimal::from_str_exact(numeral)
        .ok()
        .and_then(Hundredths::from_decimal)
}

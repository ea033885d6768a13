// Price parsing for "₹<num> Lakh" / "₹<num> Crore" display strings

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::LazyLock;

/// One Lakh in rupees
pub const LAKH: f64 = 100_000.0;
/// One Crore in rupees (100 Lakh)
pub const CRORE: f64 = 10_000_000.0;

/// Separator between the low and high ends of a price range
const RANGE_SEPARATOR: &str = " - ";

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"₹([\d.]+)\s*(Lakh|Crore)").expect("price pattern is valid"));

/// Parse a single price component into rupees.
///
/// Anything that does not contain `₹<number> Lakh|Crore` yields 0.
pub fn parse_one(text: &str) -> f64 {
    let Some(caps) = PRICE_RE.captures(text) else {
        return 0.0;
    };

    let Some(value) = leading_float(&caps[1]) else {
        return 0.0;
    };

    match &caps[2] {
        "Crore" => value * CRORE,
        _ => value * LAKH,
    }
}

/// Parse a full price field into `(min, max)` rupees.
///
/// A field without a `" - "` separator, or with nothing after it, has `min == max`.
pub fn parse_range(field: &str) -> (f64, f64) {
    let mut parts = field.split(RANGE_SEPARATOR);
    let min = parse_one(parts.next().unwrap_or_default());
    let max = match parts.next().map(str::trim) {
        Some(high) if !high.is_empty() => parse_one(&high.replace('*', "")),
        _ => min,
    };
    (min, max)
}

/// Parse the longest leading decimal literal of `text`.
///
/// Mirrors a lenient float parse: `"1.5.2"` is 1.5, `"12Lakh"` is 12,
/// and text that starts with no digits is `None`.
pub fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;

    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            '+' | '-' if i == 0 => {}
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    text[..end].trim_end_matches('.').parse().ok()
}

/// Parsed bounds of a price field, in rupees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn parse(field: &str) -> Self {
        let (min, max) = parse_range(field);
        Self { min, max }
    }

    /// Containment test: both ends must lie inside `[lo, hi]`
    pub fn within(&self, lo: f64, hi: f64) -> bool {
        self.min >= lo && self.max <= hi
    }
}

/// Display price string together with its parsed range.
///
/// Serializes as the plain display string, so the catalog document keeps its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    display: String,
    range: PriceRange,
}

impl Price {
    pub fn new(display: impl Into<String>) -> Self {
        let display = display.into();
        let range = PriceRange::parse(&display);
        Self { display, range }
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }

    pub fn min(&self) -> f64 {
        self.range.min
    }

    pub fn max(&self) -> f64 {
        self.range.max
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl From<&str> for Price {
    fn from(s: &str) -> Self {
        Price::new(s)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let display = String::deserialize(deserializer)?;
        Ok(Price::new(display))
    }
}

/// Format rupees with thousands separators, e.g. `₹1,200,000`
pub fn format_rupees(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

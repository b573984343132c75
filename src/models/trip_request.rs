use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Planning parameters sent by the trip form.
///
/// Every field defaults when absent and accepts any JSON type: the
/// generation endpoint does not validate its input, the caller does (see
/// [`TripRequest::validate`]). `null` reads as empty, other non-string
/// values as their JSON text.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub destination: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "deserialize_lenient_budget")]
    pub budget: Option<BudgetTier>,
    #[serde(default, deserialize_with = "deserialize_lenient_interests")]
    pub interests: Vec<String>,
}

fn render_value(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(render_value)
}

fn deserialize_lenient_budget<'de, D>(deserializer: D) -> Result<Option<BudgetTier>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        other => Ok(Some(BudgetTier::from(render_value(other)))),
    }
}

// A lone string counts as one interest
fn deserialize_lenient_interests<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().map(render_value).collect(),
        other => vec![render_value(other)],
    })
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum BudgetTier {
    Budget,
    Moderate,
    Luxury,
    // Anything the form did not offer is forwarded to the prompt untouched
    Other(String),
}

impl From<String> for BudgetTier {
    fn from(value: String) -> Self {
        match value.as_str() {
            "budget" => BudgetTier::Budget,
            "moderate" => BudgetTier::Moderate,
            "luxury" => BudgetTier::Luxury,
            _ => BudgetTier::Other(value),
        }
    }
}

impl From<BudgetTier> for String {
    fn from(tier: BudgetTier) -> Self {
        tier.to_string()
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetTier::Budget => write!(f, "budget"),
            BudgetTier::Moderate => write!(f, "moderate"),
            BudgetTier::Luxury => write!(f, "luxury"),
            BudgetTier::Other(value) => write!(f, "{}", value),
        }
    }
}

impl BudgetTier {
    /// Daily spend hint shown next to each tier in the form.
    pub fn daily_range(&self) -> Option<&'static str> {
        match self {
            BudgetTier::Budget => Some("Under $100/day"),
            BudgetTier::Moderate => Some("$100-300/day"),
            BudgetTier::Luxury => Some("$300+/day"),
            BudgetTier::Other(_) => None,
        }
    }
}

impl TripRequest {
    /// Interests as a human readable comma list.
    pub fn interests_list(&self) -> String {
        self.interests.join(", ")
    }

    pub fn budget_label(&self) -> String {
        self.budget
            .as_ref()
            .map(|tier| tier.to_string())
            .unwrap_or_default()
    }

    /// Checks the form enforces before the request is sent.
    /// Returns every problem found, not just the first one.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut issues = Vec::new();

        if self.destination.trim().is_empty() {
            issues.push("destination is required".to_string());
        }

        let start = parse_date("start date", &self.start_date, &mut issues);
        let end = parse_date("end date", &self.end_date, &mut issues);
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                issues.push("end date must not be before start date".to_string());
            }
        }

        if self.budget_label().trim().is_empty() {
            issues.push("budget is required".to_string());
        }

        if !self.interests.iter().any(|interest| !interest.trim().is_empty()) {
            issues.push("select at least one interest".to_string());
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}

fn parse_date(label: &str, value: &str, issues: &mut Vec<String>) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        issues.push(format!("{} is required", label));
        return None;
    }
    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            issues.push(format!("{} must be formatted as YYYY-MM-DD", label));
            None
        }
    }
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generated itinerary as handed to the client.
///
/// The model's JSON is forwarded without schema checks, so the structured
/// variant keeps the parsed object as-is. Use [`Itinerary::plan`] for a
/// typed view of it.
///
/// Reading back, an object whose only key is `raw` becomes [`Itinerary::Raw`],
/// even if it was produced as a structured itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Itinerary {
    Raw(RawItinerary),
    Structured(Map<String, Value>),
}

/// Fallback carrying the model text when no JSON object could be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawItinerary {
    pub raw: String,
}

#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub itinerary: Itinerary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPlan {
    pub summary: String,
    pub days: Vec<Day>,
    #[serde(default)]
    pub packing_tips: Vec<String>,
    #[serde(default)]
    pub budget_breakdown: Option<BudgetBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub day: u32,
    pub title: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub accommodation: String,
    pub food: String,
    pub activities: String,
    pub transportation: String,
}

impl Itinerary {
    pub fn raw(text: impl Into<String>) -> Self {
        Itinerary::Raw(RawItinerary { raw: text.into() })
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Itinerary::Structured(_))
    }

    /// Typed view of a structured itinerary. `None` for the raw variant or
    /// when the model's object does not follow the documented shape.
    pub fn plan(&self) -> Option<ItineraryPlan> {
        match self {
            Itinerary::Structured(object) => {
                serde_json::from_value(Value::Object(object.clone())).ok()
            }
            Itinerary::Raw(_) => None,
        }
    }
}

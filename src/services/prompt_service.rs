use crate::models::trip_request::TripRequest;

const SYSTEM_PROMPT: &str = r#"You are an expert travel planner with extensive knowledge of destinations worldwide.
Create detailed, personalized travel itineraries that are practical and inspiring.

When creating itineraries:
- Structure each day with morning, afternoon, and evening activities
- Include specific restaurant and attraction recommendations
- Add practical tips like best times to visit, estimated costs, and transportation options
- Consider the traveler's budget and interests
- Include hidden gems and local favorites, not just tourist spots
- Add estimated time for each activity

Format your response as a JSON object with this structure:
{
  "summary": "A brief exciting summary of the trip",
  "days": [
    {
      "day": 1,
      "title": "Day title",
      "activities": [
        {
          "time": "9:00 AM",
          "activity": "Activity name",
          "description": "Detailed description",
          "tip": "Optional practical tip",
          "estimatedCost": "$XX"
        }
      ]
    }
  ],
  "packingTips": ["tip1", "tip2"],
  "budgetBreakdown": {
    "accommodation": "$XX/night",
    "food": "$XX/day",
    "activities": "$XX total",
    "transportation": "$XX total"
  }
}"#;

#[derive(Debug, Clone, PartialEq)]
pub struct Prompts {
    pub system: String,
    pub user: String,
}

/// Builds the instruction and request prompts for one trip.
pub fn build_prompts(request: &TripRequest) -> Prompts {
    Prompts {
        system: SYSTEM_PROMPT.to_string(),
        user: build_user_prompt(request),
    }
}

fn build_user_prompt(request: &TripRequest) -> String {
    format!(
        "Create a personalized travel itinerary for:
- Destination: {}
- Dates: {} to {}
- Budget: {}
- Interests: {}

Please create a day-by-day itinerary that matches these preferences. Make it exciting and detailed!",
        request.destination,
        request.start_date,
        request.end_date,
        request.budget_label(),
        request.interests_list(),
    )
}

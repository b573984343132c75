use clap::Parser;
use env_logger::Env;
use log::debug;
use serde::Deserialize;
use std::process::ExitCode;

use trip_planner_api::models::itinerary::{Itinerary, ItineraryPlan};
use trip_planner_api::models::trip_request::{BudgetTier, TripRequest};

const FALLBACK_ERROR: &str = "Failed to generate itinerary. Please try again.";

/// Plan a trip from the terminal against a running itinerary service.
#[derive(Parser, Debug)]
#[command(name = "plan-trip", version)]
struct Args {
    /// Where to go
    #[arg(long)]
    destination: String,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    start_date: String,

    /// Last day of the trip (YYYY-MM-DD)
    #[arg(long)]
    end_date: String,

    /// budget, moderate or luxury
    #[arg(long)]
    budget: String,

    /// Interest tag, repeat for several (culture, food, adventure, ...)
    #[arg(long = "interest", required = true)]
    interests: Vec<String>,

    /// Itinerary endpoint
    #[arg(long, default_value = "http://localhost:8080/generate-itinerary")]
    url: String,
}

#[derive(Deserialize)]
struct ItineraryBody {
    itinerary: Itinerary,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let args = Args::parse();
    let request = TripRequest {
        destination: args.destination,
        start_date: args.start_date,
        end_date: args.end_date,
        budget: Some(BudgetTier::from(args.budget)),
        interests: args.interests,
    };

    if let Err(issues) = request.validate() {
        for issue in issues {
            eprintln!("- {}", issue);
        }
        return ExitCode::from(2);
    }

    match fetch_itinerary(&args.url, &request).await {
        Ok(itinerary) => {
            println!("{}", render_itinerary(&itinerary));
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

async fn fetch_itinerary(url: &str, request: &TripRequest) -> Result<Itinerary, String> {
    let response = reqwest::Client::new()
        .post(url)
        .json(request)
        .send()
        .await
        .map_err(|e| {
            debug!("Request to {} failed: {}", url, e);
            FALLBACK_ERROR.to_string()
        })?;

    let status = response.status();
    let text = response.text().await.map_err(|_| FALLBACK_ERROR.to_string())?;

    if !status.is_success() {
        return Err(serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| FALLBACK_ERROR.to_string()));
    }

    serde_json::from_str::<ItineraryBody>(&text)
        .map(|body| body.itinerary)
        .map_err(|_| FALLBACK_ERROR.to_string())
}

fn render_itinerary(itinerary: &Itinerary) -> String {
    match itinerary {
        Itinerary::Raw(raw) => format!("Your itinerary\n\n{}", raw.raw),
        Itinerary::Structured(object) => match itinerary.plan() {
            Some(plan) => render_plan(&plan),
            // Off-shape JSON is still worth showing
            None => serde_json::to_string_pretty(object).unwrap_or_default(),
        },
    }
}

fn render_plan(plan: &ItineraryPlan) -> String {
    let mut out = String::new();
    out.push_str(&plan.summary);
    out.push('\n');

    for day in &plan.days {
        out.push_str(&format!("\nDay {}: {}\n", day.day, day.title));
        for activity in &day.activities {
            out.push_str(&format!("  {}  {}\n", activity.time, activity.activity));
            out.push_str(&format!("      {}\n", activity.description));
            if let Some(cost) = &activity.estimated_cost {
                out.push_str(&format!("      Cost: {}\n", cost));
            }
            if let Some(tip) = &activity.tip {
                out.push_str(&format!("      Tip: {}\n", tip));
            }
        }
    }

    if let Some(budget) = &plan.budget_breakdown {
        out.push_str("\nBudget breakdown\n");
        out.push_str(&format!("  Accommodation: {}\n", budget.accommodation));
        out.push_str(&format!("  Food: {}\n", budget.food));
        out.push_str(&format!("  Activities: {}\n", budget.activities));
        out.push_str(&format!("  Transportation: {}\n", budget.transportation));
    }

    if !plan.packing_tips.is_empty() {
        out.push_str("\nPacking tips\n");
        for tip in &plan.packing_tips {
            out.push_str(&format!("  - {}\n", tip));
        }
    }

    out
}

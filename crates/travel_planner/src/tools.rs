//! Travel tools.
//!
//! Four mock tools with fixed data. Timestamps are local wall-clock time in
//! ISO-8601 form.

use chrono::{Local, NaiveDateTime, TimeDelta};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use voyage_tools::{FunctionTool, Tool, ToolError, ToolRegistry, Toolset};

// ─────────────────────────────────────────────────────────────────────────────
// Parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters for `get_flight_status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FlightStatusParams {
    /// Flight number, e.g. `AA123`.
    pub flight_number: String,
    /// Travel date.
    #[serde(default)]
    pub date: Option<String>,
}

/// Parameters for `track_flight_prices`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FlightPricesParams {
    /// Departure airport or city.
    pub origin: String,
    /// Arrival airport or city.
    pub destination: String,
    /// Dates to track, free text.
    pub date_range: String,
}

/// Parameters for `get_hotel_details`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HotelDetailsParams {
    /// City or area.
    pub location: String,
    /// Check-in date.
    pub check_in: String,
    /// Check-out date.
    pub check_out: String,
}

/// Parameters for `get_location_info`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocationInfoParams {
    /// City or area.
    pub location: String,
    /// Date of the visit.
    #[serde(default)]
    pub date: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// Result of `get_flight_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDetails {
    /// Flight number as requested.
    pub flight_number: String,
    /// Operational status.
    pub status: String,
    /// Scheduled departure.
    pub departure: NaiveDateTime,
    /// Scheduled arrival.
    pub arrival: NaiveDateTime,
    /// Fare in USD.
    pub price: f64,
    /// Seats left.
    pub seats_available: u32,
}

/// Result of `track_flight_prices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTrend {
    /// Past fares, oldest first.
    pub price_history: Vec<f64>,
    /// Expected fares, nearest first.
    pub price_forecast: Vec<f64>,
}

/// Result of `get_hotel_details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelDetails {
    /// Hotel name.
    pub name: String,
    /// Location as requested.
    pub location: String,
    /// Nightly rate in USD.
    pub price: f64,
    /// Guest rating out of 5.
    pub rating: f64,
    /// Review excerpts.
    pub reviews: Vec<String>,
    /// Rooms left for the stay.
    pub available_rooms: u32,
}

/// Result of `get_location_info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Current conditions.
    pub weather: String,
    /// Upcoming events.
    pub events: Vec<String>,
    /// Active safety alerts.
    pub safety_alerts: Vec<String>,
    /// Local wall-clock time.
    pub local_time: NaiveDateTime,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tool functions
// ─────────────────────────────────────────────────────────────────────────────

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Returns the current status of a flight.
///
/// # Errors
///
/// Returns [`ToolError::ParameterError`] for a blank flight number.
pub fn get_flight_status(params: FlightStatusParams) -> Result<FlightDetails, ToolError> {
    let flight_number = params.flight_number.trim();
    if flight_number.is_empty() {
        return Err(ToolError::parameter_error("flight_number must not be empty"));
    }
    let departure = now();
    Ok(FlightDetails {
        flight_number: flight_number.to_string(),
        status: "On Time".to_string(),
        departure,
        arrival: departure + TimeDelta::hours(2),
        price: 299.99,
        seats_available: 15,
    })
}

/// Returns recent and forecast prices for a route.
///
/// # Errors
///
/// Never fails; the signature matches the other tools.
pub fn track_flight_prices(params: FlightPricesParams) -> Result<PriceTrend, ToolError> {
    tracing::debug!(origin = %params.origin, destination = %params.destination, "tracking prices");
    Ok(PriceTrend {
        price_history: vec![320.0, 310.0, 299.99],
        price_forecast: vec![305.0, 315.0, 325.0],
    })
}

/// Returns hotel availability for a location.
///
/// # Errors
///
/// Never fails; the signature matches the other tools.
pub fn get_hotel_details(params: HotelDetailsParams) -> Result<HotelDetails, ToolError> {
    tracing::debug!(check_in = %params.check_in, check_out = %params.check_out, "hotel lookup");
    Ok(HotelDetails {
        name: "Grand Hotel".to_string(),
        location: params.location,
        price: 199.99,
        rating: 4.5,
        reviews: vec!["Great location".to_string(), "Excellent service".to_string()],
        available_rooms: 5,
    })
}

/// Returns weather, events, and safety alerts for a location.
///
/// # Errors
///
/// Never fails; the signature matches the other tools.
pub fn get_location_info(params: LocationInfoParams) -> Result<LocationInfo, ToolError> {
    tracing::debug!(location = %params.location, date = ?params.date, "location lookup");
    Ok(LocationInfo {
        weather: "Sunny, 75°F".to_string(),
        events: vec!["Local Festival".to_string(), "Art Exhibition".to_string()],
        safety_alerts: vec!["No current alerts".to_string()],
        local_time: now(),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Registration
// ─────────────────────────────────────────────────────────────────────────────

/// The four travel tools, registered together.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelTools;

impl Toolset for TravelTools {
    fn tools(self) -> Vec<Box<dyn Tool>> {
        vec![
            Box::new(FunctionTool::new(
                "get_flight_status",
                "Get current Flight Status",
                get_flight_status,
            )) as Box<dyn Tool>,
            Box::new(FunctionTool::new(
                "track_flight_prices",
                "Track Flight Prices",
                track_flight_prices,
            )),
            Box::new(FunctionTool::new(
                "get_hotel_details",
                "Get Hotel Details",
                get_hotel_details,
            )),
            Box::new(FunctionTool::new(
                "get_location_info",
                "Get Location Info",
                get_location_info,
            )),
        ]
    }
}

/// Builds a registry holding the travel tools.
///
/// # Errors
///
/// Returns [`ToolError::DuplicateTool`] if the set contains a name twice.
pub fn travel_registry() -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register_toolset(TravelTools)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn flight_status_record() {
        let registry = travel_registry().unwrap();
        let value = registry
            .execute("get_flight_status", json!({"flight_number": "AA123"}))
            .await
            .unwrap();

        assert_eq!(value["flight_number"], "AA123");
        assert_eq!(value["status"], "On Time");
        assert!(value["price"].as_f64().unwrap() >= 0.0);
        assert_eq!(value["seats_available"].as_u64(), Some(15));

        let record: FlightDetails = serde_json::from_value(value).unwrap();
        assert_eq!(record.arrival - record.departure, TimeDelta::hours(2));
    }

    #[test]
    fn blank_flight_number_is_rejected() {
        let err = get_flight_status(FlightStatusParams {
            flight_number: "  ".to_string(),
            date: None,
        })
        .unwrap_err();
        assert!(matches!(err, ToolError::ParameterError(_)));
    }

    #[tokio::test]
    async fn hotel_echoes_location() {
        let registry = travel_registry().unwrap();
        let value = registry
            .execute(
                "get_hotel_details",
                json!({"location": "NYC", "check_in": "2024-06-01", "check_out": "2024-06-05"}),
            )
            .await
            .unwrap();
        assert_eq!(value["name"], "Grand Hotel");
        assert_eq!(value["location"], "NYC");
        assert_eq!(value["reviews"], json!(["Great location", "Excellent service"]));
    }

    #[tokio::test]
    async fn price_tracking_requires_date_range() {
        let registry = travel_registry().unwrap();
        let err = registry
            .execute(
                "track_flight_prices",
                json!({"origin": "SFO", "destination": "NYC"}),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::ParameterError(_)));
    }

    #[test]
    fn registry_lists_tools_in_order() {
        let registry = travel_registry().unwrap();
        assert_eq!(
            registry.describe_all(),
            vec![
                ("get_flight_status", "Get current Flight Status"),
                ("track_flight_prices", "Track Flight Prices"),
                ("get_hotel_details", "Get Hotel Details"),
                ("get_location_info", "Get Location Info"),
            ]
        );
    }
}

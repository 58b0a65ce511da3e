//! Full conversations through the travel agent with a scripted backend.

mod common;

use common::{ScriptedBackend, scripted_llm};
use travel_planner::TravelAgentSystem;
use travel_planner::render::{SUMMARY_HEADING, render_outcome};
use voyage_agent::{AgentConfig, ConversationError, ConversationStatus, Role};

#[tokio::test]
async fn flight_status_query_terminates_after_three_messages() {
    let backend = ScriptedBackend::new([
        "THOUGHT: I should look up the flight.\nACTION: get_flight_status {\"flight_number\": \"AA123\"}",
        "THOUGHT: Flight AA123 is On Time.\nACTION: TERMINATE",
    ]);
    let system =
        TravelAgentSystem::with_llm(scripted_llm(&backend), &AgentConfig::default()).unwrap();

    let outcome = system.run_query("What is the status of flight AA123?").await;

    assert_eq!(outcome.status, ConversationStatus::Terminated);
    assert_eq!(outcome.transcript.len(), 3);
    let observation = &outcome.transcript.messages()[1];
    assert_eq!(observation.role, Role::Executor);
    assert!(observation.content.contains("get_flight_status returned"));
    assert!(observation.content.contains("On Time"));
    assert_eq!(outcome.summary, "Flight AA123 is On Time.");
    assert!(render_outcome(&outcome).contains(SUMMARY_HEADING));
}

#[tokio::test]
async fn planner_sees_tools_and_observations() {
    let backend = ScriptedBackend::new([
        "ACTION: get_hotel_details {location: NYC, check_in: 2024-06-01, check_out: 2024-06-05}",
        "THOUGHT: Grand Hotel has rooms. Task is complete.\nACTION: TERMINATE",
    ]);
    let config = AgentConfig::default().with_decoding_temperature(0.2);
    let system = TravelAgentSystem::with_llm(scripted_llm(&backend), &config).unwrap();

    let outcome = system.run_query("Find a hotel in NYC").await;
    assert!(outcome.is_terminated());

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);

    let system_prompt = requests[0].system.as_deref().unwrap();
    for tool in ["get_flight_status", "track_flight_prices", "get_hotel_details", "get_location_info"] {
        assert!(system_prompt.contains(tool), "missing {tool} in system prompt");
    }
    assert_eq!(requests[0].temperature, Some(0.2));
    assert_eq!(requests[0].messages.len(), 1);
    assert_eq!(requests[0].messages[0].text(), "Find a hotel in NYC");

    let second = &requests[1].messages;
    assert_eq!(second.len(), 3);
    assert!(second[2].text().contains("Grand Hotel"));
}

#[tokio::test]
async fn backend_failure_mid_conversation_fails_with_partial_transcript() {
    let backend = ScriptedBackend::new([
        "ACTION: get_location_info {\"location\": \"NYC\"}",
    ]);
    let system =
        TravelAgentSystem::with_llm(scripted_llm(&backend), &AgentConfig::default()).unwrap();

    let outcome = system.run_query("weather in NYC").await;

    assert_eq!(outcome.status, ConversationStatus::Failed);
    assert!(matches!(
        outcome.error,
        Some(ConversationError::ReasoningUnavailable(_))
    ));
    assert_eq!(outcome.transcript.len(), 2);
    assert!(outcome.transcript.messages()[1].content.contains("Sunny"));
    assert!(!render_outcome(&outcome).contains(SUMMARY_HEADING));
}

#[tokio::test]
async fn turn_limit_from_config_applies() {
    let backend = ScriptedBackend::new(vec![
        "ACTION: book_train {\"to\": \"Boston\"}";
        10
    ]);
    let config = AgentConfig::default().with_max_turns(4);
    let system = TravelAgentSystem::with_llm(scripted_llm(&backend), &config).unwrap();

    let outcome = system.run_query("train to Boston").await;

    assert!(matches!(
        outcome.error,
        Some(ConversationError::TurnLimitExceeded { max_turns: 4 })
    ));
    assert_eq!(outcome.transcript.len(), 4);
    assert!(outcome.transcript.messages()[1].content.contains("not available"));
}

#[test]
fn malformed_model_id_is_a_setup_error() {
    let config = AgentConfig::default().with_model_id("llama3.2");
    let err = TravelAgentSystem::new(&config).unwrap_err();
    assert!(err.to_string().contains("model setup failed"));
}

#[test]
fn default_config_builds_without_contacting_the_backend() {
    let system = TravelAgentSystem::new(&AgentConfig::default()).unwrap();
    assert_eq!(system.registry().len(), 4);
}

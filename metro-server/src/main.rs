use std::net::SocketAddr;

use metro_server::board::{BoardConfig, TimetableService};
use metro_server::web::{AppState, create_router};
use metro_server::wmata::{WmataClient, WmataConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "metro_server=debug".into()),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("WMATA_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: WMATA_API_KEY not set. API calls will fail.");
        String::new()
    });

    // Create the WMATA client
    let wmata_config = WmataConfig::new(&api_key);
    let wmata_client = WmataClient::new(wmata_config).expect("Failed to create WMATA client");

    // Create the aggregation service
    let board_config = BoardConfig::default();
    let timetable = TimetableService::new(wmata_client, board_config);

    // Build app state and router
    let state = AppState::new(timetable);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Metro timetable server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                          - Health check");
    println!("  GET  /rail/timetable?station=<name>   - Rail arrivals + incidents");
    println!("  GET  /bus/timetable?stop=<id>         - Next buses at a stop");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

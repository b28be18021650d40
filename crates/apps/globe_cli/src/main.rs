use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use client::{ClientConfig, HttpFlightService};
use flights::{AirportId, TripId};
use layers::GlobeLayer;
use runtime::{GlobeApp, NoticeLevel, SubmissionOutcome, TripSelection};
use scene::components::{Material, Shape3D};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Flight globe: routes, airports and trip scheduling")]
struct Args {
    /// Backend root URL (default: $GLOBE_API_URL or http://127.0.0.1:8000)
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the globe drawables and print a summary
    Render {
        /// Highlight the routes of this trip
        #[arg(long)]
        trip: Option<i64>,
    },

    /// List scheduled trips
    Trips,

    /// Show a trip's flights and the routes it highlights
    Trip { id: i64 },

    /// Show an airport with upcoming departures and arrivals
    Airport { code: String },

    /// Schedule a trip between two airports
    Schedule {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Local departure time, YYYY-MM-DDTHH:MM
        #[arg(long)]
        departure: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = &args.api_url {
        config = config.with_base_url(url)?;
    }
    info!("using backend {}", config.base_url);

    let service = Arc::new(HttpFlightService::new(config)?);
    let mut app = GlobeApp::new(service, GlobeLayer::new(1));
    app.load().await.context("loading globe data")?;

    let result = match args.command {
        Command::Render { trip } => render(&mut app, trip.map(TripId)).await,
        Command::Trips => {
            list_trips(&app);
            Ok(())
        }
        Command::Trip { id } => show_trip(&mut app, TripId(id)).await,
        Command::Airport { code } => show_airport(&mut app, &code).await,
        Command::Schedule {
            from,
            to,
            departure,
        } => schedule(&mut app, &from, &to, &departure).await,
    };

    for notice in app.interaction_mut().drain_notices() {
        match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Error => eprintln!("{}", notice.message),
        }
    }
    result
}

async fn render(app: &mut GlobeApp<HttpFlightService>, trip: Option<TripId>) -> anyhow::Result<()> {
    if let Some(id) = trip {
        app.select_trip(id).await;
    }
    let snap = app.render();
    let Shape3D::Sphere { radius, segments } = &snap.globe.shape;
    let Material::Textured { texture } = &snap.globe.material;
    println!("globe r={radius} segments={segments} texture={texture}");
    println!("markers: {}", snap.markers.len());
    println!(
        "routes: {} drawn, {} skipped, {} highlighted",
        snap.ribbons.len(),
        snap.skipped_routes,
        snap.highlighted().count()
    );
    for ribbon in snap.highlighted() {
        println!(
            "  {} ({} vertices, width {})",
            ribbon.key,
            ribbon.line.vertex_count(),
            ribbon.material.line_width
        );
    }
    Ok(())
}

fn list_trips(app: &GlobeApp<HttpFlightService>) {
    for t in app.interaction().trips() {
        println!(
            "{:>4}  {} -> {}  {}  {} flight(s)",
            t.id,
            t.origin_code,
            t.destination_code,
            t.departure_time.format("%Y-%m-%d %H:%M"),
            t.num_flights
        );
    }
}

async fn show_trip(app: &mut GlobeApp<HttpFlightService>, id: TripId) -> anyhow::Result<()> {
    if app.select_trip(id).await == TripSelection::Cleared {
        return Ok(());
    }
    let Some(trip) = app.interaction().selected_trip() else {
        bail!("trip {id} could not be loaded");
    };
    println!(
        "trip {}: {} ({}) -> {} ({})",
        trip.id, trip.origin_code, trip.origin_name, trip.destination_code, trip.destination_name
    );
    for f in &trip.flights {
        println!(
            "  {}  {} -> {}  {} - {}  {}",
            f.flight_number,
            f.origin_code,
            f.destination_code,
            f.departure_time.format("%Y-%m-%d %H:%M"),
            f.arrival_time.format("%H:%M"),
            f.status
        );
    }
    for key in app.interaction().highlight().iter() {
        println!("  highlight {key}");
    }
    Ok(())
}

async fn show_airport(app: &mut GlobeApp<HttpFlightService>, code: &str) -> anyhow::Result<()> {
    let id = AirportId::new(code);
    if app.pick_airport(&id).await.is_none() {
        bail!("airport {id} is not on the globe");
    }
    let Some(detail) = app.interaction().selected_airport() else {
        bail!("airport {id} could not be loaded");
    };
    let a = &detail.airport;
    println!("{} {} ({:.4}, {:.4})", a.code, a.name, a.lat, a.lon);
    println!(
        "connections: {} outbound, {} inbound",
        detail.outbound_connections, detail.inbound_connections
    );
    for (label, flights) in [("departures", &detail.departures), ("arrivals", &detail.arrivals)] {
        println!("{label}:");
        for f in flights.iter() {
            println!(
                "  {}  {} -> {}  {}  {}",
                f.flight_number,
                f.origin,
                f.destination,
                f.departure_time.format("%Y-%m-%d %H:%M"),
                f.status
            );
        }
    }
    Ok(())
}

async fn schedule(
    app: &mut GlobeApp<HttpFlightService>,
    from: &str,
    to: &str,
    departure: &str,
) -> anyhow::Result<()> {
    app.start_scheduling();
    if app.pick_airport(&AirportId::new(from)).await.is_none() {
        bail!("unknown origin airport {from}");
    }
    app.set_departure_time(departure)?;
    app.confirm_departure_time();
    if app.pick_airport(&AirportId::new(to)).await.is_none() {
        bail!("unknown destination airport {to}");
    }

    match app.confirm().await {
        Some(SubmissionOutcome::Scheduled(ack)) => {
            println!(
                "trip {}: {} flight(s), {:.0} min",
                ack.trip_id,
                ack.legs.len(),
                ack.total_duration_minutes
            );
            for leg in &ack.legs {
                println!(
                    "  {}  {} -> {}  {}",
                    leg.flight_number,
                    leg.origin,
                    leg.destination,
                    leg.departure_time.format("%Y-%m-%d %H:%M")
                );
            }
            Ok(())
        }
        Some(SubmissionOutcome::Failed(err)) => Err(err).context("scheduling failed"),
        Some(SubmissionOutcome::Stale { .. }) | None => bail!("nothing was submitted"),
    }
}

//! Single binary web server: standings, CSV export and schedule views as a REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, ROSTER_PATH (roster JSON), GAMES_PATH (games JSON).

use actix_web::{
    get,
    web::{self, Data, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use league_standings_web::{
    compute_standings, schedule, standings_csv, Division, League, ProfileName, ScheduleQuery,
    StandingsError,
};
use serde::Deserialize;

/// Where the roster and match log are read from. Both are reloaded on every request.
struct DataFiles {
    roster_path: String,
    games_path: String,
}

type AppState = Data<DataFiles>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: division number (e.g. /api/standings/{division})
#[derive(Deserialize)]
struct DivisionPath {
    division: u8,
}

#[derive(Deserialize)]
struct ProfileQuery {
    profile: Option<String>,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-standings-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Read and parse both data files.
async fn load_league(files: &DataFiles) -> Result<League, HttpResponse> {
    let roster = tokio::fs::read_to_string(&files.roster_path).await;
    let games = tokio::fs::read_to_string(&files.games_path).await;
    let (roster, games) = match (roster, games) {
        (Ok(r), Ok(g)) => (r, g),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Failed to read league data: {}", e);
            return Err(HttpResponse::InternalServerError().json(serde_json::json!({ "error": "Could not read league data" })));
        }
    };
    League::from_json(&roster, &games).map_err(|e| {
        log::error!("Failed to parse league data: {}", e);
        HttpResponse::InternalServerError().json(serde_json::json!({ "error": format!("Invalid league data: {}", e) }))
    })
}

/// Division from the path plus profile from the query (or the division's default).
fn table_params(path: &DivisionPath, query: &ProfileQuery) -> Result<(Division, ProfileName), StandingsError> {
    let division = Division::try_from(path.division)?;
    let profile = match query.profile.as_deref() {
        Some(name) => name.parse()?,
        None => ProfileName::default_for(division),
    };
    Ok((division, profile))
}

fn engine_error(e: &StandingsError) -> HttpResponse {
    match e {
        StandingsError::MalformedRecord { .. } | StandingsError::UnknownPlayer(_) => {
            log::error!("Standings failed: {}", e);
            HttpResponse::UnprocessableEntity().json(serde_json::json!({ "error": e.to_string() }))
        }
        StandingsError::InvalidDivision(_) | StandingsError::UnknownProfile(_) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Ranked standings table for a division (JSON rows in display order).
#[get("/api/standings/{division}")]
async fn api_standings(state: AppState, path: Path<DivisionPath>, query: Query<ProfileQuery>) -> HttpResponse {
    let (division, profile) = match table_params(&path, &query) {
        Ok(p) => p,
        Err(e) => return engine_error(&e),
    };
    let league = match load_league(&state).await {
        Ok(l) => l,
        Err(resp) => return resp,
    };
    match compute_standings(&league.roster, &league.games, division, profile.profile()) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => engine_error(&e),
    }
}

/// Same table as CSV, with the profile's column layout.
#[get("/api/standings/{division}/csv")]
async fn api_standings_csv(state: AppState, path: Path<DivisionPath>, query: Query<ProfileQuery>) -> HttpResponse {
    let (division, profile) = match table_params(&path, &query) {
        Ok(p) => p,
        Err(e) => return engine_error(&e),
    };
    let league = match load_league(&state).await {
        Ok(l) => l,
        Err(resp) => return resp,
    };
    let rows = match compute_standings(&league.roster, &league.games, division, profile.profile()) {
        Ok(rows) => rows,
        Err(e) => return engine_error(&e),
    };
    match standings_csv(&rows, profile) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"division{}-{}.csv\"", division.number(), profile),
            ))
            .body(body),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": "CSV export failed" }))
        }
    }
}

/// Matches filtered by date, division, player name and activity.
#[get("/api/matches")]
async fn api_matches(state: AppState, query: Query<ScheduleQuery>) -> HttpResponse {
    let league = match load_league(&state).await {
        Ok(l) => l,
        Err(resp) => return resp,
    };
    let today = chrono::Utc::now().date_naive();
    HttpResponse::Ok().json(schedule(&league, &query, today))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_roster_path() -> String {
    "idplayers.json".to_string()
}

fn default_games_path() -> String {
    "games.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let files = DataFiles {
        roster_path: std::env::var("ROSTER_PATH").unwrap_or_else(|_| default_roster_path()),
        games_path: std::env::var("GAMES_PATH").unwrap_or_else(|_| default_games_path()),
    };
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Roster: {}, games: {}", files.roster_path, files.games_path);

    let state = Data::new(files);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(api_index))
            .service(api_health)
            .service(favicon)
            .service(api_standings_csv)
            .service(api_standings)
            .service(api_matches)
    })
    .bind(bind)?
    .run()
    .await
}

/// Root: list the routes, there is no bundled front end.
async fn api_index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "routes": [
            "/api/health",
            "/api/standings/{division}?profile=net-only|full-net|wins-first",
            "/api/standings/{division}/csv?profile=...",
            "/api/matches?filter=all|upcoming|past|unplayed&division=&search=&hide_inactive=",
        ]
    }))
}

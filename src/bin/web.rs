//! Single binary JSON API over the match engine. One engine per match, kept in memory.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use book_cricket::{
    CoinFace, ComputerOpponent, Difficulty, GameMode, MatchConfig, MatchEngine, MatchError,
    MatchId, MatchState, Scoreboard, Team,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Per-match entry: the engine + last activity time (for auto-cleanup).
struct MatchEntry {
    engine: MatchEngine,
    last_activity: Instant,
}

/// In-memory state: one engine per match id, behind a single lock.
type AppState = Data<Mutex<HashMap<MatchId, MatchEntry>>>;

/// Inactivity threshold: matches not touched for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// What every match endpoint returns. `id` is the match id used in routes.
#[derive(Serialize)]
struct MatchView<'a> {
    id: MatchId,
    state: Option<&'a MatchState>,
    scoreboard: Option<Scoreboard>,
}

impl<'a> MatchView<'a> {
    fn new(id: MatchId, engine: &'a MatchEngine) -> Self {
        Self {
            id,
            state: engine.state(),
            scoreboard: engine.scoreboard(),
        }
    }
}

#[derive(Deserialize)]
struct CreateMatchBody {
    #[serde(flatten)]
    config: MatchConfig,
    /// Only used against the computer.
    #[serde(default)]
    difficulty: Difficulty,
}

#[derive(Deserialize)]
struct TossBody {
    call: CoinFace,
}

#[derive(Deserialize)]
struct BattingOrderBody {
    batting_first: Team,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

fn error_response(e: &MatchError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Lock, find the match, run `op` on its engine, and answer with the updated view.
fn with_engine<F>(state: &AppState, id: MatchId, op: F) -> HttpResponse
where
    F: FnOnce(&mut MatchEngine) -> Result<(), MatchError>,
{
    let mut g = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" })),
    };
    entry.last_activity = Instant::now();
    match op(&mut entry.engine) {
        Ok(()) => HttpResponse::Ok().json(MatchView::new(id, &entry.engine)),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "book-cricket",
    })
}

/// Create and configure a new match (client keeps the id for later requests).
#[post("/api/matches")]
async fn api_create_match(state: AppState, body: Json<CreateMatchBody>) -> HttpResponse {
    let body = body.into_inner();
    let mut engine = MatchEngine::from_entropy();
    if body.config.mode == GameMode::HumanVsComputer {
        engine = engine.with_strategy(ComputerOpponent::new(body.difficulty));
    }
    let id = match engine.configure(body.config) {
        Ok(match_state) => match_state.id(),
        Err(e) => return error_response(&e),
    };
    let mut g = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert(MatchEntry {
        engine,
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(MatchView::new(id, &entry.engine))
}

/// Get a match by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_engine(&state, path.id, |_| Ok(()))
}

/// Toss with team A's call. A computer that wins the toss bats first straight away.
#[post("/api/matches/{id}/toss")]
async fn api_toss(state: AppState, path: Path<MatchPath>, body: Json<TossBody>) -> HttpResponse {
    with_engine(&state, path.id, |engine| {
        engine.resolve_toss(body.call)?;
        if let Some(team) = engine.computer_batting_choice() {
            engine.choose_batting_order(team)?;
        }
        Ok(())
    })
}

/// Toss winner picks who bats first.
#[put("/api/matches/{id}/batting-order")]
async fn api_batting_order(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<BattingOrderBody>,
) -> HttpResponse {
    with_engine(&state, path.id, |engine| {
        engine.choose_batting_order(body.batting_first)
    })
}

/// Flip one page.
#[post("/api/matches/{id}/ball")]
async fn api_play_ball(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_engine(&state, path.id, |engine| engine.play_ball().map(|_| ()))
}

/// Play the rest of the active innings in one go.
#[post("/api/matches/{id}/simulate")]
async fn api_simulate_innings(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_engine(&state, path.id, |engine| engine.simulate_innings().map(|_| ()))
}

/// First innings over: go to the break.
#[post("/api/matches/{id}/innings-break")]
async fn api_innings_break(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_engine(&state, path.id, MatchEngine::advance_to_second_innings)
}

/// Break over: start the chase.
#[post("/api/matches/{id}/second-innings")]
async fn api_second_innings(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_engine(&state, path.id, MatchEngine::start_second_innings)
}

/// Decide the match (idempotent).
#[post("/api/matches/{id}/result")]
async fn api_result(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_engine(&state, path.id, |engine| engine.compute_result().map(|_| ()))
}

/// Play again: same teams, settings and id; fresh scores.
#[post("/api/matches/{id}/restart")]
async fn api_restart(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_engine(&state, path.id, |engine| engine.restart().map(|_| ()))
}

/// Discard a match.
#[delete("/api/matches/{id}")]
async fn api_delete_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(mut entry) => {
            entry.engine.reset();
            HttpResponse::NoContent().finish()
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" })),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(Mutex::new(HashMap::<MatchId, MatchEntry>::new()));

    // Background task: every 30 minutes, remove matches inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.lock() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive match(es) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_match)
            .service(api_get_match)
            .service(api_toss)
            .service(api_batting_order)
            .service(api_play_ball)
            .service(api_simulate_innings)
            .service(api_innings_break)
            .service(api_second_innings)
            .service(api_result)
            .service(api_restart)
            .service(api_delete_match)
    })
    .bind(bind)?
    .run()
    .await
}

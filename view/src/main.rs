use std::{net::SocketAddr, path::PathBuf};

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use clap::Parser;
use engine::{Position, START_FEN};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use util::{Cell, Color, Coord};

mod board;

use board::{fen_from_url, parse_selected, render_board, url_fen};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:3000")]
    addr: SocketAddr,

    /// Directory with the piece images, served under /static
    #[arg(long, default_value = "./static")]
    static_dir: PathBuf,
}

#[derive(Deserialize)]
struct BoardPageParams {
    selected: Option<String>,
}

#[derive(Serialize)]
struct BoardJson {
    fen: String,
    side_to_move: Color,
    picked: Option<Coord>,
    cells: Vec<Cell>,
}

/// Builds the position from the URL and applies the selection, if any.
fn load(fen: &str, params: &BoardPageParams) -> Result<Position, Response> {
    let fen = fen_from_url(fen);
    let mut position = Position::from_fen(&fen)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()).into_response())?;
    if let Some((row, col)) = params.selected.as_deref().and_then(parse_selected) {
        if !position.pick(row, col) {
            debug!("ignoring selection {row}-{col} for {fen}");
        }
    }
    Ok(position)
}

async fn root() -> Redirect {
    Redirect::temporary(&format!("/board/{}", url_fen(START_FEN)))
}

async fn board_page(
    Path(fen): Path<String>,
    Query(params): Query<BoardPageParams>,
) -> Response {
    match load(&fen, &params) {
        Ok(position) => Html(render_board(&position)).into_response(),
        Err(response) => response,
    }
}

async fn board_json(
    Path(fen): Path<String>,
    Query(params): Query<BoardPageParams>,
) -> Response {
    match load(&fen, &params) {
        Ok(position) => Json(BoardJson {
            fen: position.fen().to_string(),
            side_to_move: position.side_to_move(),
            picked: position.picked(),
            cells: position.board().cells().copied().collect(),
        })
        .into_response(),
        Err(response) => response,
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let app = Router::new()
        .route("/", get(root))
        .route("/board/*fen", get(board_page))
        .route("/api/*fen", get(board_json))
        .nest_service("/static", ServeDir::new(&args.static_dir));

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    info!("listening on {}", args.addr);
    axum::serve(listener, app).await
}

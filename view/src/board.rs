//! HTML for one position. The whole game lives in the URL: the FEN in the
//! path and the picked square in the query.

use engine::Position;
use util::{Cell, Color, Coord};

/// Spaces are not welcome in a path segment.
pub fn url_fen(fen: &str) -> String {
    fen.replace(' ', "_")
}

pub fn fen_from_url(path: &str) -> String {
    path.replace('_', " ")
}

/// Parses `row-col`, e.g. `6-4`.
pub fn parse_selected(input: &str) -> Option<(i8, i8)> {
    let (row, col) = input.split_once('-')?;
    Some((row.parse().ok()?, col.parse().ok()?))
}

fn board_href(position: &Position) -> String {
    format!("/board/{}", url_fen(position.fen()))
}

fn pick_href(position: &Position, sq: Coord) -> String {
    format!("{}?selected={}-{}", board_href(position), sq.row(), sq.col())
}

/// Where clicking `cell` leads.
fn square_href(position: &Position, cell: &Cell) -> String {
    let sq = cell.coord();
    let (row, col) = (sq.row() as i8, sq.col() as i8);
    let Some(picked) = position.picked() else {
        return pick_href(position, sq);
    };
    if cell.is_available() {
        let mut next = position.clone();
        if next.make_move(row, col) {
            return board_href(&next);
        }
    }
    if position.is_castling_pair(row, col) {
        let mut next = position.clone();
        if next.castle(row, col) {
            return board_href(&next);
        }
    }
    if sq != picked && cell.team() == position.board()[picked].team() {
        return pick_href(position, sq);
    }
    board_href(position)
}

fn piece_img(cell: &Cell) -> String {
    match (cell.piece().color(), cell.piece().kind()) {
        (Some(color), Some(kind)) => {
            let svg_file_name = format!(
                "/static/{}-{}.svg",
                match color {
                    Color::White => "white",
                    Color::Black => "black",
                },
                kind.to_char()
            );
            format!("<img src=\"{svg_file_name}\" alt=\"{}\"/>", cell.piece())
        }
        _ => String::new(),
    }
}

fn square_style(position: &Position, cell: &Cell) -> String {
    let sq = cell.coord();
    let mut style = format!(
        "background-color: {};",
        if (sq.row() + sq.col()) % 2 == 0 {
            "AntiqueWhite"
        } else {
            "Coral"
        }
    );
    if cell.is_under_hit() {
        style += "box-shadow: inset 0 0 0 4px red;";
    }
    if let Some(picked) = position.picked() {
        let relevant = sq == picked
            || cell.is_available()
            || position.is_castling_pair(sq.row() as i8, sq.col() as i8);
        if !relevant {
            style += "filter: brightness(50%);";
        }
    }
    style
}

pub fn render_board(position: &Position) -> String {
    let board_html = position
        .board()
        .rows()
        .fold(String::new(), |mut acc, rank| {
            acc += &format!(
                "
        <div class=\"rank\">
        {}
        </div>",
                rank.iter().fold(String::new(), |mut acc, cell| {
                    acc += &format!(
                        "
                <a href=\"{}\" class=\"square\" style=\"{}\">
                    {}
                    <span class=\"square-label\">{}</span>
                </a>",
                        square_href(position, cell),
                        square_style(position, cell),
                        piece_img(cell),
                        cell.coord()
                    );
                    acc
                })
            );
            acc
        });

    format!(
        "
        <html>
            <head>
                <style>
                    .board {{
                        display: flex;
                        flex-flow: column;
                    }}
                    .rank {{
                        display: flex;
                    }}
                    .square {{
                        position: relative;
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        width: 64px;
                        height: 64px;
                    }}
                    .square-label {{
                        position: absolute;
                        left: 0.25rem;
                        bottom: 0.25rem;
                        font-size: 0.5rem;
                    }}
                </style>
            </head>
            <body>
                <div class=\"board\">
                    {board_html}
                </div>
                <p>{:?} to move</p>
                <code>{}</code>
            </body>
        </html>
    ",
        position.side_to_move(),
        position.fen()
    )
}

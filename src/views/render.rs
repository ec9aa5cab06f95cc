//! HTML templates for the rendered pages

use crate::config::CompetitionConfig;
use crate::model::StandingsRow;
use crate::views::{Template, ViewPage};
use chrono::{DateTime, Local};

const TABLE_STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse}\
th,td{padding:.3em .6em;text-align:right}\
td.team,th.team{text-align:left}\
tbody tr:nth-child(odd){background:#eef3fb}\
thead{background:#004b93;color:#fff}";

const BW_STYLE: &str = "body{font-family:monospace;margin:0;color:#000;background:#fff}\
table{border-collapse:collapse;width:100%}\
th,td{padding:.2em .4em;border-bottom:1px solid #000;text-align:right}\
td.team,th.team{text-align:left}";

/// Escapes text for use in element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Renders a standings page; `None` rows renders the "unavailable" notice
pub fn render_standings_page(
    page: &ViewPage,
    rows: Option<&[StandingsRow]>,
    generated: &DateTime<Local>,
) -> String {
    let style = match page.template {
        Template::Table => TABLE_STYLE,
        Template::BlackWhite => BW_STYLE,
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"sv\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{} - Tabell</title>\n", escape_html(page.title)));
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", style));

    if page.template == Template::Table {
        html.push_str(&format!("<h1>{}</h1>\n", escape_html(page.title)));
    }

    match rows {
        Some(rows) => html.push_str(&render_table(page.template, rows)),
        None => html
            .push_str("<p class=\"unavailable\">Tabellen är inte tillgänglig just nu.</p>\n"),
    }

    if page.template == Template::Table {
        html.push_str(&format!(
            "<p class=\"generated\">Uppdaterad {}</p>\n",
            generated.format("%Y-%m-%d %H:%M")
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_table(template: Template, rows: &[StandingsRow]) -> String {
    let mut html = String::from("<table>\n<thead><tr>");
    let headers: &[&str] = match template {
        Template::Table => &["#", "Lag", "S", "V", "O", "F", "GM", "IM", "MS", "P"],
        Template::BlackWhite => &["#", "Lag", "S", "MS", "P"],
    };
    for header in headers {
        if *header == "Lag" {
            html.push_str("<th class=\"team\">Lag</th>");
        } else {
            html.push_str(&format!("<th>{}</th>", header));
        }
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in rows {
        let cells: Vec<&str> = match template {
            Template::Table => vec![
                row.position.as_str(),
                row.team.as_str(),
                row.games_played.as_str(),
                row.wins.as_str(),
                row.draws.as_str(),
                row.losses.as_str(),
                row.goals_for.as_str(),
                row.goals_against.as_str(),
                row.goal_difference.as_str(),
                row.points.as_str(),
            ],
            Template::BlackWhite => vec![
                row.position.as_str(),
                row.team.as_str(),
                row.games_played.as_str(),
                row.goal_difference.as_str(),
                row.points.as_str(),
            ],
        };

        html.push_str("<tr>");
        for (i, cell) in cells.iter().enumerate() {
            let class = if i == 1 { " class=\"team\"" } else { "" };
            html.push_str(&format!("<td{}>{}</td>", class, escape_html(cell.trim())));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

/// Renders `/`: links to every page and API endpoint
pub fn render_index(competitions: &[CompetitionConfig], pages: &[ViewPage]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"sv\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Allsvenskan API</title>\n");
    html.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", TABLE_STYLE));
    html.push_str("<h1>Allsvenskan API</h1>\n");

    html.push_str("<h2>Tabeller</h2>\n<ul>\n");
    for page in pages {
        let label = match page.template {
            Template::Table => escape_html(page.title),
            Template::BlackWhite => format!("{} (svartvit)", escape_html(page.title)),
        };
        html.push_str(&format!(
            "<li><a href=\"/{}\">{}</a></li>\n",
            escape_html(page.path),
            label
        ));
    }
    html.push_str("</ul>\n");

    html.push_str("<h2>JSON</h2>\n<ul>\n");
    for competition in competitions {
        let code = escape_html(&competition.code);
        html.push_str(&format!(
            "<li>{}: <a href=\"/{code}\">/{code}</a>",
            escape_html(&competition.name)
        ));
        if competition.topscorers_url.is_some() {
            html.push_str(&format!(
                ", <a href=\"/{code}/topscorers\">/{code}/topscorers</a>"
            ));
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

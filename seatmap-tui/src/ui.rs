//! Floor plan rendering

use ratatui::prelude::*;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Rectangle};
use ratatui::widgets::*;
use shared::models::{FloorTable, TableShape};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::App;
use crate::reservation::ReservationState;

/// Gap between neighboring tables on the floor plan, in layout units.
const TABLE_MARGIN: f64 = 60.0;
/// Tables per floor plan row.
const COLUMNS: usize = 3;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    draw_floor_plan(f, app, body[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(4)])
        .split(body[1]);

    draw_selection_panel(f, app, side[0]);
    draw_logs(f, app, side[1]);
    draw_footer(f, app, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let message = if let Some(status) = &app.status {
        Span::styled(status.clone(), Style::default().fg(Color::Red))
    } else if let Some(notice) = &app.notice {
        Span::styled(
            notice.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else if app.loading {
        Span::styled(
            "Loading floor plan...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("{} tables", app.tables.len()),
            Style::default().fg(Color::DarkGray),
        )
    };

    let title = Paragraph::new(vec![Line::from(vec![
        Span::styled(" Seatmap ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" | "),
        message,
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

/// World extent of the table grid in layout units (top-down coordinates).
fn world_size(tables: &[FloorTable]) -> (f64, f64, f64, f64) {
    let cell_w = tables
        .iter()
        .map(|t| t.width)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        + TABLE_MARGIN;
    let cell_h = tables
        .iter()
        .map(|t| t.height)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        + TABLE_MARGIN;
    let cols = tables.len().min(COLUMNS).max(1);
    let rows = tables.len().div_ceil(COLUMNS).max(1);
    (cell_w, cell_h, cell_w * cols as f64, cell_h * rows as f64)
}

fn draw_floor_plan(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Floor Plan ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if app.tables.is_empty() {
        let hint = if app.loading { "Loading..." } else { "No tables" };
        let empty = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let (cell_w, cell_h, world_w, world_h) = world_size(&app.tables);
    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, world_w])
        .y_bounds([0.0, world_h])
        .paint(|ctx| {
            for (index, table) in app.tables.iter().enumerate() {
                let ox = (index % COLUMNS) as f64 * cell_w + TABLE_MARGIN / 2.0;
                let oy = (index / COLUMNS) as f64 * cell_h + TABLE_MARGIN / 2.0;
                paint_table(ctx, app, index, table, ox, oy, world_h);
            }
        });
    f.render_widget(canvas, area);
}

/// Paint one table and its seats. `ox`/`oy` are the top-left corner of the
/// table's bounding box in top-down world coordinates; the canvas y axis
/// points up, so y values are flipped against `world_h`.
fn paint_table(
    ctx: &mut Context,
    app: &App,
    index: usize,
    table: &FloorTable,
    ox: f64,
    oy: f64,
    world_h: f64,
) {
    let color = table
        .color
        .as_deref()
        .and_then(parse_hex_color)
        .unwrap_or(Color::Cyan);

    match table.shape {
        TableShape::Round => ctx.draw(&Circle {
            x: ox + table.width / 2.0,
            y: world_h - (oy + table.height / 2.0),
            radius: table.width.min(table.height) / 2.0,
            color,
        }),
        TableShape::Rectangular => ctx.draw(&Rectangle {
            x: ox,
            y: world_h - (oy + table.height),
            width: table.width,
            height: table.height,
            color,
        }),
    }

    ctx.print(
        ox + table.width / 2.0,
        world_h - (oy + table.height / 2.0),
        Line::styled(table.name.clone(), Style::default().fg(color)),
    );

    let positions = table.seat_positions();
    for (seat_index, (seat, pos)) in table.seats.iter().zip(&positions).enumerate() {
        let under_cursor = app.cursor.table == index && app.cursor.seat == seat_index;
        let selected = app
            .controller
            .selected()
            .is_some_and(|s| s.table_id == table.id && s.seat_index == seat_index);

        let mut style = if seat.reserved {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        if under_cursor || selected {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        let marker = if under_cursor { "◉" } else { "●" };
        ctx.print(ox + pos.x, world_h - (oy + pos.y), Line::styled(marker, style));
    }
}

fn draw_selection_panel(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Reservation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(seat) = app.controller.selected() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Select a seat and press Enter",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "←/→ seat   Tab table   r reload",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(hint, area);
        return;
    };

    let availability = if seat.reserved {
        Span::styled("Currently reserved", Style::default().fg(Color::Red))
    } else {
        Span::styled("Available", Style::default().fg(Color::Green))
    };

    let submit_hint = if app.controller.is_submitting() {
        Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else if seat.reserved {
        Span::styled("Seat unavailable", Style::default().fg(Color::DarkGray))
    } else if app.controller.can_submit(app.input.value()) {
        Span::styled("Enter: reserve seat   Esc: close", Style::default().fg(Color::Green))
    } else {
        Span::styled("Type a name to reserve", Style::default().fg(Color::DarkGray))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Seat:  "),
            Span::styled(seat.label.clone(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![Span::raw("State: "), availability]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Name:  "),
            Span::styled(app.input.value().to_string(), Style::default().fg(Color::White)),
            Span::styled("▎", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(submit_hint),
    ];

    if let Some(error) = app.controller.error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(panel, area);
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hint = match app.controller.state() {
        ReservationState::Idle => "←/→ seat   Tab table   Enter select   r reload   q quit",
        ReservationState::SeatSelected { .. } => "Type name   Enter reserve   Esc close",
        ReservationState::Submitting { .. } => "Submitting reservation...",
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

/// Parse a `#rrggbb` color as sent by the service.
fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#22d3ee"), Some(Color::Rgb(0x22, 0xd3, 0xee)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("22d3ee"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}

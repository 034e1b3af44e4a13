use crate::cards::{Card, Suit};
use crate::display::category_name;
use crate::evaluator::ClassifiedHand;
use crate::hand::HoleCards;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

const SEATS_PER_ROW: usize = 6;
const SEAT_HEIGHT: u16 = 6;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(5), // board
            Constraint::Min(3),    // seats
            Constraint::Length(4), // status bar
        ])
        .split(size);

    let seed = app.config.seed.map_or_else(|| "random".to_string(), |s| s.to_string());
    let header = Paragraph::new(Line::from(format!(
        "Players: {}   Deck: {} ({} cards)   Seed: {}   Hands: {}",
        app.config.players,
        app.config.deck,
        app.config.deck.size(),
        seed,
        app.hands_dealt
    )))
    .block(Block::default().title("holdem-showdown").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let board_area = chunks[1];
    f.render_widget(Block::default().title("Board").borders(Borders::ALL), board_area);
    let board_cards = app.deal().map(|d| d.board.as_slice()).unwrap_or(&[]);
    // board cards that play in the first winner's hand
    let winning: &[Card] = app
        .showdown()
        .and_then(|s| s.winners().first().and_then(|w| s.hands().get(*w)))
        .map_or(&[][..], |h| &h.cards[..]);
    for (i, slot) in columns(inner(board_area), 5).into_iter().enumerate() {
        let card = board_cards.get(i).copied();
        let border = card.filter(|c| winning.contains(c)).map(|_| Color::Green);
        render_card_widget(f, slot, card, border);
    }

    draw_seats(f, chunks[2], app);
    draw_status(f, chunks[3], app);
}

fn draw_seats(f: &mut Frame, area: Rect, app: &AppState) {
    let (Some(deal), Some(showdown)) = (app.deal(), app.showdown()) else {
        let para = Paragraph::new("No hand dealt yet. Press Space to deal.")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(para, area);
        return;
    };

    let total = deal.players();
    let rows = total.div_ceil(SEATS_PER_ROW);
    // keep the focused seat's row on screen when the grid overflows
    let visible = (area.height / SEAT_HEIGHT).max(1) as usize;
    let focus_row = app.focus / SEATS_PER_ROW;
    let first_row = focus_row.saturating_sub(visible - 1).min(rows.saturating_sub(visible));
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            (0..visible.min(rows)).map(|_| Constraint::Length(SEAT_HEIGHT)).collect::<Vec<_>>(),
        )
        .split(area);

    for (r, row_area) in row_chunks.iter().enumerate() {
        let start = (first_row + r) * SEATS_PER_ROW;
        let end = (start + SEATS_PER_ROW).min(total);
        let cols = columns(*row_area, SEATS_PER_ROW as u16);
        for seat in start..end {
            let hole = &deal.holes[seat];
            if let Some(hand) = showdown.hands().get(seat) {
                let winner = showdown.is_winner(seat);
                render_seat(f, cols[seat - start], app, seat, hole, hand, winner);
            }
        }
    }
}

fn render_seat(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    seat: usize,
    hole: &HoleCards,
    hand: &ClassifiedHand,
    winner: bool,
) {
    let mut title = format!("P{}", seat + 1);
    if winner {
        title.push_str(" [Win]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if winner {
        block = block.border_style(Style::default().fg(Color::Green));
    } else if seat == app.focus {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }

    let name_style = if winner {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let lines = vec![
        card_line(&hole.as_array()),
        Line::from(Span::styled(category_name(hand.category), name_style)),
        card_line(&hand.cards),
    ];
    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left_info = match app.showdown() {
        None => vec![Line::from("Press Space to deal.")],
        Some(showdown) => {
            let names: Vec<String> =
                showdown.winners().iter().map(|s| format!("P{}", s + 1)).collect();
            let label = if showdown.is_split() { "Split pot" } else { "Winner" };
            let best = showdown
                .winners()
                .first()
                .and_then(|s| showdown.hands().get(*s))
                .map(|h| category_name(h.category))
                .unwrap_or_default();
            vec![Line::from(format!("{label}: {} with {best}   Focus: P{}", names.join(", "), app.focus + 1))]
        }
    };
    if let Some(err) = app.error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right_keys = vec![Line::from("Space deal • [ ] focus • ? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(left_info).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / N: deal a new hand"),
        Line::from("- ] / [ or Tab: focus next / prev"),
        Line::from("- 1-9: focus seat"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Suits: ♣ ♦ ♥ ♠ and 🐟 sardines (extended deck)"),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (&'static str, Style) {
    match s {
        Suit::Hearts => ("♥", Style::default().fg(Color::Red)),
        Suit::Diamonds => ("♦", Style::default().fg(Color::Red)),
        Suit::Spades => ("♠", Style::default().fg(Color::White)),
        Suit::Clubs => ("♣", Style::default().fg(Color::White)),
        Suit::Sardines => ("🐟", Style::default().fg(Color::Blue)),
    }
}

fn card_span(c: Card) -> Span<'static> {
    let (glyph, style) = suit_glyph_and_style(c.suit());
    Span::styled(format!("{}{}", c.rank().to_char(), glyph), style)
}

fn card_line(cards: &[Card]) -> Line<'static> {
    let mut spans = Vec::with_capacity(cards.len() * 2);
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(card_span(*c));
    }
    Line::from(spans)
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let content = match card {
        Some(c) => Line::from(card_span(c)),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center).block(block);
    f.render_widget(para, area);
}

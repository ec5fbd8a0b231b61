//! Declarative rendering: everything on screen is a function of [`App`].

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::flow::ViewId;
use crate::ui::forms::Form;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::Palette;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const CARD_WIDTH: u16 = 46;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let palette = app.theme().palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let (header, body, footer) = layout_regions(area);
    frame.render_widget(header_widget(app, palette), header);

    match app.view() {
        ViewId::Login => draw_form_card(frame, app, palette, body, "Login", login_hints()),
        ViewId::Signup => draw_form_card(frame, app, palette, body, "Sign Up", secondary_hints()),
        ViewId::ForgotPassword => {
            draw_form_card(frame, app, palette, body, "Forgot Password", secondary_hints())
        }
        ViewId::Profile => draw_profile(frame, app, palette, body),
        ViewId::Dashboard => draw_dashboard(frame, app, palette, body),
    }

    frame.render_widget(footer_widget(app, palette), footer);

    if let Some(text) = app.notice() {
        draw_notice(frame, palette, body, text);
    }
}

fn header_widget(app: &App, palette: &Palette) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        " Login / Sign up",
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )];
    if app.pending().is_some() {
        spans.push(Span::styled(
            "  contacting identity provider...",
            Style::default().fg(palette.muted),
        ));
    }
    Paragraph::new(Line::from(spans))
}

fn footer_widget(app: &App, palette: &Palette) -> Paragraph<'static> {
    let hints = match app.view() {
        ViewId::Login => {
            " Enter: Login | Ctrl+N: Sign Up | Ctrl+F: Forgot | F5/F6/F7: Social | Ctrl+T: Theme | Ctrl+Q: Quit"
        }
        ViewId::Signup => " Enter: Create Account | Esc: Back to Login | Ctrl+R: Reveal | Ctrl+Q: Quit",
        ViewId::ForgotPassword => " Enter: Send Reset Link | Esc: Back to Login | Ctrl+Q: Quit",
        ViewId::Profile => " b: Back | l: Log out | Ctrl+T: Theme | Ctrl+Q: Quit",
        ViewId::Dashboard => " m: Menu | Ctrl+T: Theme | Ctrl+Q: Quit",
    };
    let version = format!("v{VERSION} ");
    let style = Style::default().fg(palette.muted);
    Paragraph::new(Line::from(vec![
        Span::styled(hints, style),
        Span::styled(version, style),
    ]))
}

fn draw_form_card(
    frame: &mut Frame<'_>,
    app: &App,
    palette: &Palette,
    body: Rect,
    title: &'static str,
    hints: Vec<&'static str>,
) {
    let Some(form) = app.active_form() else {
        return;
    };

    let mut lines: Vec<Line<'static>> = vec![Line::from("")];
    lines.extend(form_lines(form, palette));
    lines.push(Line::from(""));
    for hint in hints {
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(palette.muted),
        )));
    }

    let height = (lines.len() as u16).saturating_add(2).min(body.height);
    let card = centered_rect_by_size(CARD_WIDTH, height, body);

    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default()
                        .fg(palette.text)
                        .add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(palette.background)),
        ),
        card,
    );
}

fn form_lines(form: &Form, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, field) in form.fields().iter().enumerate() {
        let focused = index == form.focused();
        let label_style = if focused {
            Style::default()
                .fg(palette.field_focus)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        let marker = if focused { "> " } else { "  " };
        let mut value = form.display_value(field);
        if focused {
            value.push('_');
        }
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), label_style),
            Span::styled(format!("{}: ", field.label), label_style),
            Span::styled(value, Style::default().fg(palette.text)),
        ]));
    }
    lines
}

fn login_hints() -> Vec<&'static str> {
    vec![
        "  Or login using: F5 Google / F6 Apple / F7 GitHub",
        "  Ctrl+F Forgot Password?   Ctrl+N Sign Up",
    ]
}

fn secondary_hints() -> Vec<&'static str> {
    vec!["  Esc Back to Login"]
}

fn draw_profile(frame: &mut Frame<'_>, app: &App, palette: &Palette, body: Rect) {
    let text_style = Style::default().fg(palette.text);
    let muted_style = Style::default().fg(palette.muted);
    let bold = Style::default()
        .fg(palette.text)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(""),
        Line::from(Span::styled("  Thilac .R", bold)),
        Line::from(Span::styled("  Undergraduate student", muted_style)),
        Line::from(""),
    ];
    if let Some(session) = app.session() {
        lines.push(Line::from(vec![
            Span::styled("  Signed in as ", muted_style),
            Span::styled(session.email.clone(), text_style),
        ]));
        if let Some(user_id) = &session.user_id {
            lines.push(Line::from(vec![
                Span::styled("  User id: ", muted_style),
                Span::styled(user_id.clone(), text_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.extend([
        Line::from(vec![
            Span::styled("  Wins 25   ", Style::default().fg(palette.accent)),
            Span::styled("Scores 1200   ", Style::default().fg(palette.accent)),
            Span::styled("Rank Gold", Style::default().fg(palette.accent)),
        ]),
        Line::from(""),
        Line::from(Span::styled("  Last 5 Debates: W W L W W", text_style)),
        Line::from(Span::styled("  Location: Colombo, Sri Lanka", text_style)),
        Line::from(""),
        Line::from(Span::styled("  [b] Back    [l] Log out", muted_style)),
    ]);

    let height = (lines.len() as u16).saturating_add(2).min(body.height);
    let card = centered_rect_by_size(CARD_WIDTH, height, body);
    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(Span::styled(" Profile ", bold))
                .style(Style::default().bg(palette.background)),
        ),
        card,
    );
}

fn draw_dashboard(frame: &mut Frame<'_>, app: &App, palette: &Palette, body: Rect) {
    let lines: Vec<Line<'static>> = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to the Dashboard!",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), body);

    if app.sidebar_expanded() {
        let sidebar = Rect {
            x: body.x,
            y: body.y,
            width: 20.min(body.width),
            height: 7.min(body.height),
        };
        let entries = ["Account", "Statistic", "Settings", "Logout"];
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(entries.len() + 1);
        for entry in entries {
            lines.push(Line::from(Span::styled(
                format!(" {entry}"),
                Style::default().fg(palette.text),
            )));
        }
        lines.push(Line::from(Span::styled(
            " Enter: select",
            Style::default().fg(palette.muted),
        )));

        frame.render_widget(Clear, sidebar);
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border))
                    .style(Style::default().bg(palette.background)),
            ),
            sidebar,
        );
    }
}

/// Snackbar-style notice pinned to the bottom of the body.
fn draw_notice(frame: &mut Frame<'_>, palette: &Palette, body: Rect, text: &str) {
    if body.height == 0 {
        return;
    }
    let bar = Rect {
        x: body.x,
        y: body.y + body.height - 1,
        width: body.width,
        height: 1,
    };
    frame.render_widget(Clear, bar);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {text}"),
            Style::default().fg(palette.notice_text),
        )))
        .style(Style::default().bg(palette.notice_bg)),
        bar,
    );
}

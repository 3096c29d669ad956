use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use todomvc::domain::todo::Todo;
use todomvc::repo::TodoRepository;

use crate::app::{App, InputMode, items_left};

pub fn run<R: TodoRepository>(mut app: App<R>, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();
    let res = loop {
        if let Err(e) = terminal.draw(|f| draw(f, &app)) {
            break Err(e.into());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        match poll_key(timeout) {
            Ok(Some(code)) if handle_key(&mut app, code) => break Ok(()),
            Ok(_) => {}
            Err(e) => break Err(e),
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    };

    cleanup_terminal(&mut terminal)?;
    res
}

fn poll_key(timeout: Duration) -> Result<Option<KeyCode>> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(Some(key.code));
    }
    Ok(None)
}

/// Returns true when the user asked to quit.
fn handle_key<R: TodoRepository>(app: &mut App<R>, code: KeyCode) -> bool {
    match app.mode {
        InputMode::Normal => match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('j') | KeyCode::Down => app.select_next(),
            KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
            KeyCode::Char('a') | KeyCode::Char('n') => app.begin_add(),
            KeyCode::Char('e') => app.begin_edit(),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
            KeyCode::Char('t') => app.toggle_all(),
            KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
            KeyCode::Char('c') => app.clear_completed(),
            KeyCode::Char('f') | KeyCode::Tab => app.cycle_filter(),
            KeyCode::Char('r') => {
                app.reload();
                app.set_status("Reloaded");
            }
            _ => {}
        },
        InputMode::Adding | InputMode::Editing(_) => match code {
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Enter => app.submit_input(),
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Char(c) => app.input.push(c),
            _ => {}
        },
    }

    false
}

fn draw<R: TodoRepository>(f: &mut ratatui::Frame, app: &App<R>) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(size);

    f.render_widget(render_header(app), chunks[0]);

    let visible = app.visible();
    let mut list_state = ListState::default();
    if !visible.is_empty() {
        list_state.select(Some(app.selected));
    }
    let list = render_list(&visible, app.selected);
    f.render_stateful_widget(list, chunks[1], &mut list_state);

    f.render_widget(render_footer(app), chunks[2]);
}

fn render_header<R: TodoRepository>(app: &App<R>) -> Paragraph<'static> {
    let summary = items_left(app.result.active_count());
    let completed = app.result.completed_count();
    let mut spans = vec![
        Span::styled("todos", Style::default().fg(Color::LightRed)),
        Span::raw("  |  "),
        Span::styled(summary, Style::default().fg(Color::Yellow)),
        Span::raw("  |  "),
        Span::styled(
            format!("Filter: {}", app.filter.label()),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if completed > 0 {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("{completed} completed (c to clear)"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Paragraph::new(Line::from(spans))
        .block(Block::default().title("Overview").borders(Borders::ALL))
        .wrap(Wrap { trim: true })
}

fn render_list<'a>(todos: &[&'a Todo], selected: usize) -> List<'a> {
    let items: Vec<ListItem> = todos
        .iter()
        .enumerate()
        .map(|(idx, todo)| {
            let symbol = if todo.completed { "✔" } else { "•" };
            let line = vec![Span::raw(format!(" {symbol} {}", todo.title))];

            let style = if idx == selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if todo.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(line)).style(style)
        })
        .collect();

    List::new(items)
        .block(
            Block::default()
                .title("Todos (j/k move ; a add ; e edit ; Space toggle ; t toggle all ; d delete ; f filter)")
                .borders(Borders::ALL),
        )
        .highlight_symbol("➤ ")
}

fn render_footer<R: TodoRepository>(app: &App<R>) -> Paragraph<'_> {
    let prompt = match app.mode {
        InputMode::Normal => {
            let msg = app
                .status
                .as_deref()
                .unwrap_or("q quit ; a add ; c clear completed ; r reload");
            return Paragraph::new(msg)
                .block(Block::default().title("Normal").borders(Borders::ALL));
        }
        InputMode::Adding => "New task: ",
        InputMode::Editing(_) => "Title: ",
    };
    let line = Line::from(vec![
        Span::raw(prompt),
        Span::styled(&app.input, Style::default().fg(Color::Yellow)),
        Span::raw("█"),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .title("Input (Enter to save / Esc to cancel)")
            .borders(Borders::ALL),
    )
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

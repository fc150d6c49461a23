use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::error;

use crate::api::{RatesClient, RatesSource};
use crate::average::format_average;
use crate::chart::LINE_RGB;
use crate::controller::SelectionController;
use crate::error::FetchError;
use crate::models::{Currency, Observation};

type FetchResult = Result<Vec<Observation>, FetchError>;

pub struct App<S> {
    controller: SelectionController<S>,
    pending: Option<oneshot::Receiver<FetchResult>>,
    selected: usize,
}

impl<S: RatesSource> App<S> {
    pub fn new(controller: SelectionController<S>) -> App<S> {
        App {
            controller,
            pending: None,
            selected: 0,
        }
    }

    pub fn controller(&self) -> &SelectionController<S> {
        &self.controller
    }

    pub fn select(&mut self, index: usize) {
        if index >= Currency::ALL.len() || !self.controller.is_ready() {
            return;
        }
        self.selected = index;
        self.controller.select_currency(Currency::ALL[index].symbol());
    }

    pub fn next(&mut self) {
        let i = if self.selected >= Currency::ALL.len() - 1 {
            0
        } else {
            self.selected + 1
        };
        self.select(i);
    }

    pub fn previous(&mut self) {
        let i = if self.selected == 0 {
            Currency::ALL.len() - 1
        } else {
            self.selected - 1
        };
        self.select(i);
    }

    /// Returns `true` when the key asks to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Right | KeyCode::Tab => self.next(),
            KeyCode::Left | KeyCode::BackTab => self.previous(),
            KeyCode::Char(c @ '1'..='9') => self.select(c as usize - '1' as usize),
            _ => {}
        }
        false
    }

    /// Applies the fetch result once it has arrived.
    pub fn poll_pending(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.controller.complete_loading(result);
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                error!("fetch task ended without a result");
                self.pending = None;
            }
        }
    }
}

pub fn run_app<B: Backend, S: RatesSource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        app.poll_pending();
        terminal.draw(|f| draw_ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }
}

fn draw_ui<S: RatesSource>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(f.size());

    let Some(view) = app.controller.view() else {
        let loading = Paragraph::new("Loading…")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(loading, chunks[1]);
        return;
    };

    let symbols: Vec<&str> = Currency::ALL.iter().map(|c| c.symbol()).collect();
    let tabs = Tabs::new(symbols)
        .select(app.selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    let (r, g, b) = LINE_RGB;
    let value_style = Style::default().fg(Color::Rgb(r, g, b));
    let rows: Vec<ListItem> = view
        .chart
        .categories()
        .iter()
        .zip(view.chart.values())
        .map(|(month, value)| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<12}", month)),
                Span::styled(format!("{:>10.2}", value), value_style),
            ]))
        })
        .collect();

    let list = List::new(rows).block(
        Block::default()
            .title(Span::styled(
                view.chart.title().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL),
    );
    f.render_widget(list, chunks[1]);

    let average = Paragraph::new(vec![
        Line::from("Среднее за период"),
        Line::from(Span::styled(
            format_average(view.average),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(average, chunks[2]);
}

/// Starts the single background fetch and runs the interactive view until the user quits.
pub async fn start_tui(client: RatesClient) -> Result<()> {
    let mut controller = SelectionController::new(client.clone());
    let (tx, rx) = oneshot::channel();

    if controller.begin_loading() {
        tokio::spawn(async move {
            let _ = tx.send(client.fetch_observations().await);
        });
    }

    let mut app = App::new(controller);
    app.pending = Some(rx);

    tokio::task::spawn_blocking(move || -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = run_app(&mut terminal, app);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    })
    .await
    .context("Terminal task panicked")?
}

//! sortstep - Terminal User Interface
//!
//! Step through bubble, insertion and selection sort in the terminal.
//! App logic lives in `sortstep::tui::sort_app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::process::ExitCode {
    use sortstep::config::VizConfig;

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => match VizConfig::load(path).and_then(|c| c.check().map(|()| c)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading '{path}': {e}");
                eprintln!("Usage: sort_tui [path/to/config.yaml]");
                return std::process::ExitCode::from(1);
            }
        },
        None => VizConfig::default(),
    };

    // Log lines would tear the alternate screen unless redirected.
    if sortstep::logging::requested_by_env() {
        sortstep::logging::init(&config.logging.filter);
    }

    match tui::run(&config) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::ExitCode::from(1)
        }
    }
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with: cargo run --bin sort_tui --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Alignment, Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Paragraph},
        Frame, Terminal,
    };
    use sortstep::config::VizConfig;
    use sortstep::error::{VizError, VizResult};
    use sortstep::playback::RunState;
    use sortstep::renderers::Surface;
    use sortstep::tui::{ArrayView, Hud, SortApp};
    use std::io;
    use std::time::{Duration, Instant};

    const TICK_RATE: Duration = Duration::from_millis(50);
    const FRAME_INTERVAL: Duration = Duration::from_millis(16);
    const MAX_CELL_WIDTH: u16 = 8;

    type Backend = CrosstermBackend<io::Stdout>;

    /// Surface that owns the terminal and draws the whole screen.
    ///
    /// `animate_exchange` blocks, drawing interpolated frames until the
    /// exchange has taken `exchange` to complete.
    struct TerminalSurface {
        terminal: Terminal<Backend>,
        view: ArrayView,
        hud: Hud,
        exchange: Duration,
    }

    impl TerminalSurface {
        fn redraw(&mut self) -> VizResult<()> {
            let (view, hud) = (&self.view, &self.hud);
            self.terminal
                .draw(|f| ui(f, view, hud))
                .map_err(|e| VizError::render(e.to_string()))?;
            Ok(())
        }
    }

    impl Surface for TerminalSurface {
        fn render(&mut self, sequence: &[i64], highlights: &[usize]) -> VizResult<()> {
            self.view.set_frame(sequence, highlights);
            self.redraw()
        }

        fn animate_exchange(&mut self, from: usize, to: usize) -> VizResult<()> {
            if !self.view.begin_swap(from, to) {
                return Ok(());
            }
            let started = Instant::now();
            loop {
                let progress = if self.exchange.is_zero() {
                    1.0
                } else {
                    started.elapsed().as_secs_f64() / self.exchange.as_secs_f64()
                };
                self.view.set_progress(progress);
                self.redraw()?;
                if progress >= 1.0 {
                    break;
                }
                std::thread::sleep(FRAME_INTERVAL);
            }
            self.view.finish_swap();
            Ok(())
        }
    }

    pub fn run(config: &VizConfig) -> VizResult<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let surface = TerminalSurface {
            terminal,
            view: ArrayView::new(),
            hud: Hud::default(),
            exchange: config.exchange_duration(),
        };
        let result = SortApp::new(surface, config).and_then(|mut app| {
            let outcome = run_main_loop(&mut app);
            restore(&mut app.controller_mut().surface_mut().terminal);
            outcome
        });

        if result.is_err() {
            // The surface may have been dropped before it could restore.
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
        }
        result
    }

    fn restore(terminal: &mut Terminal<Backend>) {
        let _ = disable_raw_mode();
        let _ = execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        );
    }

    fn run_main_loop(app: &mut SortApp<TerminalSurface>) -> VizResult<()> {
        let mut last_tick = Instant::now();

        loop {
            sync(app)?;

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code)?;
                    }
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                sync(app)?;
                app.tick(Instant::now())?;
                last_tick = Instant::now();
            }

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    /// Copy the app's status into the surface and redraw.
    fn sync(app: &mut SortApp<TerminalSurface>) -> VizResult<()> {
        let hud = app.hud();
        let surface = app.controller_mut().surface_mut();
        if surface.hud != hud {
            surface.hud = hud;
            surface.redraw()?;
        }
        Ok(())
    }

    fn ui(f: &mut Frame, view: &ArrayView, hud: &Hud) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(4),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_title(f, chunks[0], hud);
        render_array(f, chunks[1], view, hud);
        render_status(f, chunks[2], hud);
        render_controls(f, chunks[3]);
    }

    fn render_title(f: &mut Frame, area: Rect, hud: &Hud) {
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                " Sorting Visualizer ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("- "),
            Span::styled(hud.algorithm.label(), Style::default().fg(Color::Yellow)),
        ]))
        .block(Block::default().borders(Borders::ALL).title("sortstep"));
        f.render_widget(title, area);
    }

    fn bar_color(view: &ArrayView, hud: &Hud, index: usize) -> Color {
        if view.swap().is_some_and(|s| s.from == index || s.to == index) {
            Color::Red
        } else if view.is_highlighted(index) {
            Color::Yellow
        } else if hud.state == RunState::Finished {
            Color::Green
        } else {
            Color::Cyan
        }
    }

    fn render_array(f: &mut Frame, area: Rect, view: &ArrayView, hud: &Hud) {
        let block = Block::default().borders(Borders::ALL).title("Array");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let n = view.values().len();
        if n == 0 || inner.height < 3 || inner.width == 0 {
            return;
        }

        let cell = (inner.width / n as u16).clamp(1, MAX_CELL_WIDTH);
        let bar_width = cell.saturating_sub(1).max(1);
        // One row for the value above the bar, one for the index below.
        let max_bar = inner.height - 2;
        let max_value = view.max_value() as f64;
        let index_row = inner.y + inner.height - 1;

        for (index, &value) in view.values().iter().enumerate() {
            let color = bar_color(view, hud, index);
            let x = inner.x + (view.slot(index) * f64::from(cell)).round() as u16;
            let scaled = (value.max(0) as f64 / max_value * f64::from(max_bar)).round() as u16;
            let height = scaled.clamp(1, max_bar);
            let bar_top = inner.y + 1 + (max_bar - height);

            let label = Paragraph::new(value.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
            f.render_widget(label, Rect::new(x, bar_top - 1, bar_width, 1).intersection(inner));

            let bar = Block::default().style(Style::default().bg(color));
            f.render_widget(bar, Rect::new(x, bar_top, bar_width, height).intersection(inner));

            let fixed_x = inner.x + index as u16 * cell;
            let position = Paragraph::new(index.to_string())
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray));
            f.render_widget(position, Rect::new(fixed_x, index_row, bar_width, 1).intersection(inner));
        }
    }

    fn render_status(f: &mut Frame, area: Rect, hud: &Hud) {
        let (state, state_color) = match hud.state {
            RunState::Idle => ("IDLE", Color::Gray),
            RunState::Running if hud.autoplay => ("PLAYING", Color::Green),
            RunState::Running => ("STEPPING", Color::Yellow),
            RunState::Finished => ("SORTED", Color::Cyan),
        };

        let lines = vec![
            Line::from(Span::styled(hud.status.clone(), Style::default().fg(Color::White))),
            Line::from(vec![
                Span::styled(state, Style::default().fg(state_color)),
                Span::raw(format!(" | Step {} | Delay {}ms", hud.step, hud.delay.as_millis())),
            ]),
        ];
        let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status, area);
    }

    fn render_controls(f: &mut Frame, area: Rect) {
        let key = Style::default().fg(Color::Yellow);
        let pairs = [
            ("g", "random"),
            ("s", "sample"),
            ("Enter", "start"),
            ("n/→", "step"),
            ("Space", "autoplay"),
            ("r", "reset"),
            ("a/1-3", "algorithm"),
            ("+/-", "delay"),
            ("q", "quit"),
        ];
        let spans: Vec<Span> = pairs
            .iter()
            .flat_map(|&(k, action)| [Span::styled(format!(" {k}"), key), Span::raw(format!(" {action} "))])
            .collect();
        let controls = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Controls"));
        f.render_widget(controls, area);
    }
}

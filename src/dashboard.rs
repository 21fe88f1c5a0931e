//! Wallet dashboard TUI using ratatui + crossterm.
//!
//! Shows the address input, volume / trades / account value, the per-pair
//! breakdown with a pair filter, account details, open positions and a log
//! panel.

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use hyperliquid::{InfoHttpClient, WalletAddress};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::AppError;
use crate::lookup::{lookup, LookupData, LookupError};
use crate::output::{format_count, format_usd, format_usd_str};
use crate::view::ViewState;

/// Target render interval (10 FPS).
const RENDER_INTERVAL: Duration = Duration::from_millis(100);

/// Maximum log lines retained.
const MAX_LOG_LINES: usize = 200;

/// Which panel receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Address,
    Pairs,
}

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Lookup(WalletAddress),
}

/// View state plus the bits only the terminal needs.
#[derive(Debug)]
pub struct Dashboard {
    pub view: ViewState,
    pub focus: Focus,
    log_lines: VecDeque<String>,
}

impl Dashboard {
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            focus: Focus::Address,
            log_lines: VecDeque::with_capacity(MAX_LOG_LINES),
        }
    }

    pub fn log(&mut self, line: impl Into<String>) {
        self.log_lines.push_back(line.into());
        while self.log_lines.len() > MAX_LOG_LINES {
            self.log_lines.pop_front();
        }
    }

    pub fn log_lines(&self) -> &VecDeque<String> {
        &self.log_lines
    }

    /// Start a lookup for the typed address, if allowed.
    pub fn request_lookup(&mut self) -> Action {
        match self.view.begin_lookup() {
            Some(address) => {
                self.log(format!("Looking up {}...", address.short()));
                Action::Lookup(address)
            }
            None => Action::None,
        }
    }

    /// Apply a finished lookup.
    pub fn complete_lookup(&mut self, result: Result<LookupData, LookupError>) {
        match &result {
            Ok(data) => {
                self.log(format!(
                    "{}: {} trades across {} pairs",
                    data.address.short(),
                    format_count(data.report.trades_count),
                    data.report.volume_by_pair.len()
                ));
                if data.fills_unavailable {
                    self.log("Trade history unavailable, volume shown as zero");
                }
            }
            Err(e) => self.log(format!("Lookup failed: {e}")),
        }
        self.view.finish_lookup(result);
        if self.view.available_pairs().is_empty() {
            self.focus = Focus::Address;
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Address if !self.view.available_pairs().is_empty() => Focus::Pairs,
                    _ => Focus::Address,
                };
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Address => match key.code {
                KeyCode::Enter => self.request_lookup(),
                KeyCode::Backspace => {
                    self.view.address_input.pop();
                    Action::None
                }
                KeyCode::Char(c) if !c.is_whitespace() => {
                    self.view.address_input.push(c);
                    Action::None
                }
                _ => Action::None,
            },
            Focus::Pairs => match key.code {
                KeyCode::Char('q') => Action::Quit,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.view.cycle_pair(true);
                    Action::None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.view.cycle_pair(false);
                    Action::None
                }
                KeyCode::Backspace | KeyCode::Char('c') => {
                    self.view.clear_filter();
                    Action::None
                }
                _ => Action::None,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Run the wallet dashboard TUI.
///
/// Lookups run on a spawned task and report back over a channel so the
/// screen keeps rendering while requests are in flight.
///
/// # Errors
///
/// Returns [`AppError::Terminal`] if the terminal cannot be set up.
pub async fn run_dashboard(
    client: InfoHttpClient,
    initial_address: Option<String>,
    cancel: CancellationToken,
) -> Result<(), AppError> {
    let (result_tx, mut result_rx) = mpsc::channel::<Result<LookupData, LookupError>>(4);

    let mut dash = Dashboard::new(ViewState::with_address(
        initial_address.as_deref().unwrap_or_default(),
    ));
    dash.log(format!("Source: {}", client.info_url()));
    dash.log("Type an address and press Enter. Tab switches to the pair list, Esc quits.");

    info!(source = %client.info_url(), "starting dashboard");

    // Set up terminal.
    enable_raw_mode().map_err(|e| AppError::Terminal(format!("failed to enable raw mode: {e}")))?;
    io::stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| AppError::Terminal(format!("failed to enter alternate screen: {e}")))?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(|e| AppError::Terminal(format!("failed to create terminal: {e}")))?;

    if initial_address.is_some() {
        if let Action::Lookup(address) = dash.request_lookup() {
            spawn_lookup(client.clone(), address, result_tx.clone());
        }
    }

    let mut render_interval = tokio::time::interval(RENDER_INTERVAL);

    // Main event loop.
    let mut quit = false;
    let result: Result<(), AppError> = loop {
        if quit {
            break Ok(());
        }

        tokio::select! {
            // Lookup finished.
            Some(outcome) = result_rx.recv() => {
                dash.complete_lookup(outcome);
            }

            // Render tick; also polls keyboard input.
            _ = render_interval.tick() => {
                while event::poll(Duration::ZERO).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        match dash.handle_key(key) {
                            Action::Quit => quit = true,
                            Action::Lookup(address) => {
                                spawn_lookup(client.clone(), address, result_tx.clone());
                            }
                            Action::None => {}
                        }
                    }
                }

                if !quit {
                    let _ = terminal.draw(|frame| render_ui(frame, &dash));
                }
            }

            _ = cancel.cancelled() => {
                break Ok(());
            }
        }
    };

    restore_terminal(&mut terminal);
    result
}

fn spawn_lookup(
    client: InfoHttpClient,
    address: WalletAddress,
    tx: mpsc::Sender<Result<LookupData, LookupError>>,
) {
    tokio::spawn(async move {
        let outcome = lookup(&client, &address).await;
        let _ = tx.send(outcome).await;
    });
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

/// Restore terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    let _ = terminal.show_cursor();
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

// ---------------------------------------------------------------------------
// UI rendering
// ---------------------------------------------------------------------------

/// Render the full TUI frame.
fn render_ui(frame: &mut Frame, dash: &Dashboard) {
    let area = frame.area();

    // Layout: header, input, stats, body, log.
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(4), // input + status
            Constraint::Length(4), // stats
            Constraint::Min(8),    // body
            Constraint::Length(6), // log
        ])
        .split(area);

    let header = Paragraph::new(" HYPERLIQUID VOLUME CHECKER | Enter: look up | Tab: pairs | Esc: quit")
        .style(Style::default().fg(Color::White).bg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(header, main_layout[0]);

    render_input(frame, main_layout[1], dash);
    render_stats(frame, main_layout[2], dash);

    let body_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(main_layout[3]);
    render_pairs(frame, body_layout[0], dash);

    let right_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(body_layout[1]);
    render_account(frame, right_layout[0], dash);
    render_positions(frame, right_layout[1], dash);

    render_log(frame, main_layout[4], dash.log_lines());
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Magenta } else { Color::Cyan };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
}

/// Render the address input with loading / error status.
fn render_input(frame: &mut Frame, area: Rect, dash: &Dashboard) {
    let view = &dash.view;
    let input = if view.address_input.is_empty() {
        Span::styled("0x...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(view.address_input.as_str())
    };
    let cursor = if dash.focus == Focus::Address { "_" } else { "" };

    let status = if view.is_loading() {
        Line::styled(" Loading...", Style::default().fg(Color::Yellow))
    } else if let Some(err) = view.error() {
        Line::styled(format!(" {err}"), Style::default().fg(Color::Red))
    } else {
        Line::from("")
    };

    let lines = vec![Line::from(vec![Span::raw(" "), input, Span::raw(cursor)]), status];
    let paragraph = Paragraph::new(lines).block(panel(" Wallet Address ", dash.focus == Focus::Address));
    frame.render_widget(paragraph, area);
}

/// Render volume / trades / account value.
fn render_stats(frame: &mut Frame, area: Rect, dash: &Dashboard) {
    let view = &dash.view;
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let (volume_title, trades_title) = match view.pair_filter() {
        Some(p) => (format!(" Volume {p} "), format!(" Trades {p} ")),
        None => (" Total Volume ".to_string(), " Trades ".to_string()),
    };

    let (volume, trades, account_value) = match view.data() {
        Some(data) => (
            format_usd(view.displayed().volume),
            format_count(view.displayed().trades),
            format_usd_str(data.account.account_value()),
        ),
        None => ("--".to_string(), "--".to_string(), "--".to_string()),
    };

    let stat = |value: String, color: Color| {
        Paragraph::new(Line::styled(format!(" {value}"), Style::default().fg(color).bold()))
    };
    frame.render_widget(
        stat(volume, Color::Magenta).block(panel(&volume_title, false)),
        layout[0],
    );
    frame.render_widget(
        stat(trades, Color::Blue).block(panel(&trades_title, false)),
        layout[1],
    );
    frame.render_widget(
        stat(account_value, Color::Green).block(panel(" Account Value ", false)),
        layout[2],
    );
}

/// Render the per-pair table, or the active filter banner.
fn render_pairs(frame: &mut Frame, area: Rect, dash: &Dashboard) {
    let view = &dash.view;
    let focused = dash.focus == Focus::Pairs;
    let mut lines: Vec<Line> = Vec::new();

    match (view.data(), view.pair_filter()) {
        (None, _) => lines.push(Line::styled(" no data", Style::default().fg(Color::DarkGray))),
        (Some(data), _) if data.report.is_empty() => {
            lines.push(Line::styled(" no trades", Style::default().fg(Color::DarkGray)));
        }
        (Some(_), Some(pair)) => {
            lines.push(Line::from(vec![
                Span::raw(" Filtered to "),
                Span::styled(pair.to_string(), Style::default().bold()),
            ]));
            lines.push(Line::styled(
                " Backspace/c clears the filter",
                Style::default().fg(Color::DarkGray),
            ));
        }
        (Some(data), None) => {
            lines.push(Line::from(format!(" {:<12}{:>9}{:>18}", "Pair", "Trades", "Volume")));
            lines.push(Line::from(" ───────────────────────────────────────"));
            for (pair, volume, trades) in data.report.pairs_by_volume() {
                lines.push(Line::from(format!(
                    " {pair:<12}{:>9}{:>18}",
                    format_count(trades),
                    format_usd(volume)
                )));
            }
        }
    }

    let paragraph = Paragraph::new(lines).block(panel(" Volume by Pair ", focused));
    frame.render_widget(paragraph, area);
}

/// Render account details.
fn render_account(frame: &mut Frame, area: Rect, dash: &Dashboard) {
    let mut lines = Vec::with_capacity(4);
    if let Some(data) = dash.view.data() {
        lines.push(Line::from(format!(" Address       {}", data.address.short())));
        lines.push(Line::from(format!(
            " Withdrawable  {}",
            format_usd_str(data.account.withdrawable())
        )));
        if let Some(cross) = data.account.cross_margin() {
            lines.push(Line::from(format!(
                " Total Raw USD {}",
                format_usd(cross.total_raw_usd())
            )));
            let ntl = cross.total_ntl_pos();
            lines.push(Line::from(vec![
                Span::raw(" Total Ntl Pos "),
                Span::styled(format_usd(ntl), Style::default().fg(pnl_color(ntl))),
            ]));
        }
    }
    let paragraph = Paragraph::new(lines).block(panel(" Account ", false));
    frame.render_widget(paragraph, area);
}

/// Render open positions.
fn render_positions(frame: &mut Frame, area: Rect, dash: &Dashboard) {
    let mut lines: Vec<Line> = Vec::new();
    if let Some(data) = dash.view.data() {
        let positions = data.account.positions();
        if positions.is_empty() {
            lines.push(Line::styled(" none", Style::default().fg(Color::DarkGray)));
        } else {
            lines.push(Line::from(format!(" {:<10}{:>14}{:>16}", "Asset", "Position", "PnL")));
            for pos in positions {
                let pnl = pos.unrealized_pnl();
                lines.push(Line::from(vec![
                    Span::raw(format!(" {:<10}{:>14}", pos.coin(), pos.szi())),
                    Span::styled(format!("{:>16}", format_usd(pnl)), Style::default().fg(pnl_color(pnl))),
                ]));
            }
        }
    }
    let paragraph = Paragraph::new(lines).block(panel(" Open Positions ", false));
    frame.render_widget(paragraph, area);
}

fn pnl_color(value: f64) -> Color {
    if value >= 0.0 {
        Color::Green
    } else {
        Color::Red
    }
}

/// Render the log panel.
fn render_log(frame: &mut Frame, area: Rect, log_lines: &VecDeque<String>) {
    // Keep the newest lines in view.
    let visible = area.height.saturating_sub(2) as usize;
    let skip = log_lines.len().saturating_sub(visible);
    let lines: Vec<Line> = log_lines
        .iter()
        .skip(skip)
        .map(|l| Line::from(l.as_str()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(panel(" Log ", false))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperliquid::{aggregate, AccountSnapshot, Fill};
    use ratatui::backend::TestBackend;

    const ADDRESS: &str = "0x00000000000000000000000000000000000000aa";

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(dash: &mut Dashboard, s: &str) {
        for c in s.chars() {
            dash.handle_key(press(KeyCode::Char(c)));
        }
    }

    fn data() -> LookupData {
        let fills = vec![
            Fill {
                coin: Some("BTC".into()),
                px: Some("100".into()),
                sz: Some("2".into()),
                ..Default::default()
            },
            Fill {
                coin: Some("ETH".into()),
                px: Some("10".into()),
                sz: Some("1".into()),
                ..Default::default()
            },
        ];
        LookupData {
            address: WalletAddress::parse(ADDRESS).unwrap(),
            account: AccountSnapshot::from_value(serde_json::json!({
                "marginSummary": {"accountValue": "500"},
                "assetPositions": [{"position": {"coin": "BTC", "szi": "1", "unrealizedPnl": "-3"}}]
            })),
            report: aggregate(&fills),
            fills_unavailable: false,
        }
    }

    #[test]
    fn test_typing_and_enter_requests_lookup() {
        let mut dash = Dashboard::new(ViewState::new());
        type_str(&mut dash, ADDRESS);
        dash.handle_key(press(KeyCode::Char('x')));
        dash.handle_key(press(KeyCode::Backspace));
        assert_eq!(dash.view.address_input, ADDRESS);

        let action = dash.handle_key(press(KeyCode::Enter));
        assert_eq!(action, Action::Lookup(WalletAddress::parse(ADDRESS).unwrap()));
        // A second Enter while loading does nothing.
        assert_eq!(dash.handle_key(press(KeyCode::Enter)), Action::None);
    }

    #[test]
    fn test_invalid_address_does_not_request() {
        let mut dash = Dashboard::new(ViewState::with_address("0xABC"));
        assert_eq!(dash.handle_key(press(KeyCode::Enter)), Action::None);
        assert!(dash.view.error().is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut dash = Dashboard::new(ViewState::new());
        assert_eq!(dash.handle_key(press(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            dash.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        // 'q' is text while the address has focus.
        assert_eq!(dash.handle_key(press(KeyCode::Char('q'))), Action::None);
        assert_eq!(dash.view.address_input, "q");
    }

    #[test]
    fn test_pair_navigation() {
        let mut dash = Dashboard::new(ViewState::with_address(ADDRESS));
        assert!(matches!(dash.request_lookup(), Action::Lookup(_)));
        dash.complete_lookup(Ok(data()));

        dash.handle_key(press(KeyCode::Tab));
        assert_eq!(dash.focus, Focus::Pairs);

        dash.handle_key(press(KeyCode::Down));
        assert_eq!(dash.view.pair_filter(), Some("BTC"));
        assert_eq!(dash.view.displayed().trades, 1);

        dash.handle_key(press(KeyCode::Char('c')));
        assert_eq!(dash.view.pair_filter(), None);
        assert_eq!(dash.view.displayed().trades, 2);

        assert_eq!(dash.handle_key(press(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_tab_stays_on_address_without_pairs() {
        let mut dash = Dashboard::new(ViewState::new());
        dash.handle_key(press(KeyCode::Tab));
        assert_eq!(dash.focus, Focus::Address);
    }

    #[test]
    fn test_failed_lookup_is_logged() {
        let mut dash = Dashboard::new(ViewState::with_address(ADDRESS));
        dash.request_lookup();
        dash.complete_lookup(Err(LookupError::NoData));
        assert!(dash.log_lines().back().unwrap().starts_with("Lookup failed"));
        assert!(!dash.view.is_loading());
    }

    #[test]
    fn test_render_smoke() {
        let mut dash = Dashboard::new(ViewState::with_address(ADDRESS));
        dash.request_lookup();
        dash.complete_lookup(Ok(data()));

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render_ui(frame, &dash)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("$210.00"));
        assert!(text.contains("$500.00"));
        assert!(text.contains("Volume by Pair"));
    }
}

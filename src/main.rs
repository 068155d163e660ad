/////////////////////
/// RINGDOWN - a ring-style countdown timer for the terminal
///
/// Counts down from a configurable duration, shown as a progress ring and
/// big digits. The ring goes red when 30% or less of the time remains.
/// - 'space' or 'enter' starts the countdown; pressed again it stops and resets
/// - 'h' / 'm' / 's' pick the adjustment unit (hour/minute/second)
/// - '+' or '=' adds one unit to the duration
/// - '-' or '_' removes one unit (the duration never drops to zero)
/// - 'q' quits
///
pub const APP_VERSION: &str = "RINGDOWN V0.1.0";
pub const TICK_INTERVAL_MS: u64 = 10;         // Update tick interval in millisecs
pub const DEFAULT_DURATION_MS: u64 = 10_000;  // Default countdown duration
const CONF_FILE_NAME: &str = "ringdown.ini";
const LOG_FILE_NAME: &str = "ringdown.log";

// Millisecond value of each adjustment unit
const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

// Configuration validation constants
const MIN_CONFIG_SECS: u64 = 1;               // Minimum configured duration in seconds
const MAX_CONFIG_SECS: u64 = 86_400;          // Maximum configured duration (24 hours)

// UI thresholds
const WARN_PROGRESS: f64 = 0.3;               // Ring turns red at or below this fraction
const BIG_DIGITS_MAX_SECS: u64 = 3_600;       // Big digits below one hour, plain text above

use std::time::{Duration, Instant};
#[macro_use] extern crate log;
extern crate simplelog;
use simplelog::*;
use std::fs::File;
#[macro_use]
extern crate ini;

use color_eyre::eyre::{eyre, Result};
use futures::{FutureExt, StreamExt};
use ratatui::{backend::CrosstermBackend as Backend, prelude::*, widgets::*};
use strum::EnumIs;
use tui_big_text::BigText;
use crossterm::event::{KeyEvent, KeyCode};
use build_time::{build_time_local};


/// Parse and validate a duration configuration value (whole seconds)
fn parse_duration_config(value: &str, config_name: &str, default: u64) -> u64 {
  match value.parse::<u64>() {
    Ok(secs) if secs >= MIN_CONFIG_SECS && secs <= MAX_CONFIG_SECS => secs,
    Ok(secs) => {
      warn!("Config value '{}' = {} is out of valid range [{}, {}], using default {}",
            config_name, secs, MIN_CONFIG_SECS, MAX_CONFIG_SECS, default);
      eprintln!("Warning: {} value {} out of range, using default {}", config_name, secs, default);
      default
    }
    Err(e) => {
      warn!("Failed to parse config value '{}' = '{}': {}, using default {}",
            config_name, value, e, default);
      eprintln!("Warning: Invalid {} value '{}', using default {}", config_name, value, default);
      default
    }
  }
}

/// Format a second count for the time display. Below one minute it is the
/// bare number; from there on it is M:SS or H:MM:SS with the leading
/// component unpadded.
fn format_duration(seconds: u64) -> String {
  if seconds < 60 {
    return seconds.to_string();
  }
  let hours = seconds / 3600;
  let minutes = (seconds % 3600) / 60;
  let secs = seconds % 60;
  if hours > 0 {
    format!("{}:{:02}:{:02}", hours, minutes, secs)
  } else {
    format!("{}:{:02}", minutes, secs)
  }
}

#[derive(Clone, Debug)]
pub enum Event {
  Error,
  Tick,
  Key(KeyEvent),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumIs)]
enum AppState {
  #[default]
  Idle,
  Running,
  Quitting,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum TimeUnit {
  Hour,
  Minute,
  #[default]
  Second,
}

impl TimeUnit {
  fn millis(self) -> u64 {
    match self {
      TimeUnit::Hour => MS_PER_HOUR,
      TimeUnit::Minute => MS_PER_MINUTE,
      TimeUnit::Second => MS_PER_SECOND,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Message {
  StartStop,
  SelectUnit(TimeUnit),
  Increment,
  Decrement,
  Tick,
  Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
  let mut app = CountdownApp::default();
  app.run().await
}

#[derive(Debug, Clone, PartialEq)]
struct CountdownApp {
  state: AppState,
  unit: TimeUnit,
  duration_ms: u64,
  target_ms: u64,
  started_at: Instant,
  time_left_secs: u64,
  progress: f64,
}
impl Default for CountdownApp {
  fn default() -> Self {
    Self::new()
  }
}
impl CountdownApp {
  fn new() -> Self {
    Self {
      state: Default::default(),
      unit: Default::default(),
      duration_ms: DEFAULT_DURATION_MS,
      target_ms: DEFAULT_DURATION_MS,
      started_at: Instant::now(),
      time_left_secs: DEFAULT_DURATION_MS / MS_PER_SECOND,
      progress: 1.0,
    }
  }

  async fn run(&mut self) -> Result<()> {
    // Init logging
    let log_file = File::create(LOG_FILE_NAME).unwrap_or_else(|e| {
      eprintln!("Warning: Could not create log file: {}", e);
      eprintln!("Continuing with terminal logging only.");
      File::create("/dev/null").expect("Failed to open /dev/null")
    });

    CombinedLogger::init(
      vec![
        TermLogger::new(LevelFilter::Warn, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
      ]
    ).unwrap_or_else(|e| {
      eprintln!("Warning: Could not initialize logger: {}", e);
    });

    info!("Logging for {} initialized (tick interval: {}ms)", APP_VERSION, TICK_INTERVAL_MS);

    // Load config from ini file
    info!("Reading config from {}", CONF_FILE_NAME);
    let inimap = match ini!(safe CONF_FILE_NAME) {
      Ok(map) => map,
      Err(error) => {
        info!("Couldn't load config file '{}': {}, using default duration", CONF_FILE_NAME, error);
        std::collections::HashMap::new()
      }
    };

    if let Some(section) = inimap.get("ringdown") {
      if let Some(val) = section.get("duration").and_then(|v| v.as_ref()) {
        info!("Found duration config: {}", val);
        let secs = parse_duration_config(val, "duration", DEFAULT_DURATION_MS / MS_PER_SECOND);
        self.duration_ms = secs * MS_PER_SECOND;
        self.time_left_secs = secs;
        info!("Set duration to: {} seconds", secs);
      }
    }

    // Ratatui main loop
    let mut tui = Tui::new()?;
    tui.enter()?;
    while !self.state.is_quitting() {
      tui.draw(|f| self.ui(f).expect("Unexpected error during drawing"))?;
      let event = tui.next().await.ok_or(eyre!("Unable to get event"))?; // blocks until next event
      let message = self.handle_event(event)?;
      self.update(message)?;
    }
    tui.exit()?;
    println!("Thanks for using {} (built: {})\n", APP_VERSION, build_time_local!("%Y-%b-%d at %H:%M:%S"));
    Ok(())
  }

  // Event handler (keyboard, tick)
  fn handle_event(&self, event: Event) -> Result<Message> {
    let msg = match event {
      Event::Key(key) => {
        match key.code {
          KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Message::Quit,
          KeyCode::Char(' ') | KeyCode::Enter => Message::StartStop,
          KeyCode::Char('h') | KeyCode::Char('H') => Message::SelectUnit(TimeUnit::Hour),
          KeyCode::Char('m') | KeyCode::Char('M') => Message::SelectUnit(TimeUnit::Minute),
          KeyCode::Char('s') | KeyCode::Char('S') => Message::SelectUnit(TimeUnit::Second),
          KeyCode::Char('+') | KeyCode::Char('=') => Message::Increment,
          KeyCode::Char('-') | KeyCode::Char('_') => Message::Decrement,
          _ => Message::Tick,
        }
      },
      _ => Message::Tick,
    };
    Ok(msg)
  }

  fn update(&mut self, message: Message) -> Result<()> {
    match message {
      Message::StartStop => self.start_or_stop(),
      Message::SelectUnit(unit) => self.select_unit(unit),
      Message::Increment => self.increment(),
      Message::Decrement => self.decrement(),
      Message::Tick => self.tick(),
      Message::Quit => self.quit(),
    }
    Ok(())
  }

  // The single toggle button: begin when idle, stop (full reset) when running
  fn start_or_stop(&mut self) {
    if self.state.is_running() {
      self.stop();
    } else {
      self.start();
    }
  }

  fn select_unit(&mut self, unit: TimeUnit) {
    if self.state.is_running() { return };
    self.unit = unit;
  }

  fn increment(&mut self) {
    if self.state.is_running() { return };
    self.duration_ms += self.unit.millis();
    self.time_left_secs = self.duration_ms / MS_PER_SECOND;
  }

  // Rejected (silent no-op) whenever it would leave no time at all
  fn decrement(&mut self) {
    if self.state.is_running() { return };
    if self.duration_ms <= self.unit.millis() { return };
    self.duration_ms -= self.unit.millis();
    self.time_left_secs = self.duration_ms / MS_PER_SECOND;
  }

  // Captures the current duration as the countdown target. The target stays
  // fixed for the whole countdown even though the duration can't change
  // while running anyway.
  fn start(&mut self) {
    if self.state.is_running() { return };
    self.target_ms = self.duration_ms;
    self.started_at = Instant::now();
    self.state = AppState::Running;
  }

  // Full reset, not pause/resume
  fn stop(&mut self) {
    if !self.state.is_running() { return };
    self.state = AppState::Idle;
    self.reset_readout();
  }

  fn reset_readout(&mut self) {
    self.progress = 1.0;
    self.time_left_secs = self.duration_ms / MS_PER_SECOND;
  }

  fn tick(&mut self) {
    if !self.state.is_running() { return };
    let elapsed_ms = self.started_at.elapsed().as_millis() as u64;
    let remaining_ms = self.target_ms.saturating_sub(elapsed_ms);
    if remaining_ms == 0 {
      self.on_expire();
    } else {
      self.on_tick(remaining_ms);
    }
  }

  fn on_tick(&mut self, remaining_ms: u64) {
    self.progress = (remaining_ms as f64 / self.target_ms as f64).clamp(0.0, 1.0);
    self.time_left_secs = remaining_ms / MS_PER_SECOND;
  }

  // Natural completion, same reset effects as a manual stop
  fn on_expire(&mut self) {
    self.state = AppState::Idle;
    self.reset_readout();
  }

  fn quit(&mut self) {
    self.state = AppState::Quitting;
  }

  fn ui(&mut self, f: &mut Frame) -> Result<()> {
    let layout = self.layout(f.size());
    f.render_widget(self.title_paragraph(), layout[0]);
    f.render_widget(self.ring_gauge(), layout[1]);
    if self.time_left_secs >= BIG_DIGITS_MAX_SECS {
      f.render_widget(self.time_paragraph(), layout[2]);
    } else {
      f.render_widget(self.time_big_text(), layout[2]);
    }
    f.render_widget(self.controls_paragraph(), layout[3]);
    f.render_widget(self.help_paragraph(), layout[4]);
    Ok(())
  }

  fn layout(&self, area: Rect) -> Vec<Rect> {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .constraints(vec![
        Constraint::Length(2), // top bar
        Constraint::Length(3), // progress ring
        Constraint::Length(9), // time display
        Constraint::Length(2), // unit / adjust controls
        Constraint::Length(2), // help
      ])
      .split(area);

    // Returns a vector of rectangles for the layout
    layout.to_vec()
  }

  fn title_paragraph(&mut self) -> Paragraph<'_> {
    let title_text =
      Line::from(vec![APP_VERSION.into(), " - a ".into(), "ring".into(),
        "-style countdown for the terminal".dim()]);
    Paragraph::new(title_text).gray()
  }

  fn ring_gauge(&mut self) -> Gauge<'_> {
    let style = if !self.state.is_running() {
      Style::new().dark_gray()
    } else if self.progress > WARN_PROGRESS {
      Style::new().green()
    } else {
      Style::new().red()
    };
    Gauge::default()
      .block(Block::default().borders(Borders::ALL))
      .gauge_style(style)
      .ratio(self.progress)
      .label(format!("{:.0}%", self.progress * 100.0))
  }

  fn time_big_text(&mut self) -> BigText<'_> {
    let mut style = Style::new().gray();
    if self.state.is_running() {
      style = Style::new().white();
    }
    let readout = format_duration(self.time_left_secs);
    let lines = vec![readout.into()];
    tui_big_text::BigTextBuilder::default()
      .lines(lines)
      .style(style)
      .build()
      .expect("BigTextBuilder with lines set cannot fail")
  }

  // Compact readout once the countdown reaches an hour or more; the H:MM:SS
  // string no longer fits the big glyphs
  fn time_paragraph(&mut self) -> Paragraph<'_> {
    let mut style = Style::new().gray();
    if self.state.is_running() {
      style = Style::new().white();
    }
    Paragraph::new(format_duration(self.time_left_secs)).style(style)
  }

  fn controls_paragraph(&mut self) -> Paragraph<'_> {
    if self.state.is_running() {
      // Duration and unit are frozen while counting down
      return Paragraph::new("").gray();
    }
    let controls_text = Line::from(vec![
      "unit ".into(),
      self.unit_span(TimeUnit::Hour, "H"), " ".into(),
      self.unit_span(TimeUnit::Minute, "M"), " ".into(),
      self.unit_span(TimeUnit::Second, "S"),
      "   + ".into(), "add one unit".dim(),
      "   - ".into(), "remove one unit".dim(),
    ]);
    Paragraph::new(controls_text).gray()
  }

  fn unit_span(&self, unit: TimeUnit, label: &'static str) -> Span<'static> {
    if self.unit == unit {
      label.white().bold()
    } else {
      label.dark_gray()
    }
  }

  fn help_paragraph(&mut self) -> Paragraph<'_> {
    let toggle_action = if self.state.is_running() { "stop".red() } else { "begin".dim() };
    let help_text =
      Line::from(vec!["space ".into(), toggle_action, " : h/m/s ".into(), "unit".dim(),
        " : + ".into(), "add".dim(), " : - ".into(), "remove".dim(),
        " : q ".into(), "quit".dim()]);
    Paragraph::new(help_text).gray()
  }
}

struct Tui {
  pub terminal: Terminal<Backend<std::io::Stderr>>,
  pub task: tokio::task::JoinHandle<()>,
  pub cancellation_token: tokio_util::sync::CancellationToken,
  pub event_rx: tokio::sync::mpsc::UnboundedReceiver<Event>,
  pub event_tx: tokio::sync::mpsc::UnboundedSender<Event>,
}

impl Tui {
  fn new() -> Result<Tui> {
    let mut terminal = ratatui::Terminal::new(Backend::new(std::io::stderr()))?;
    terminal.clear()?;
    let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel();
    let cancellation_token = tokio_util::sync::CancellationToken::new();
    let task = tokio::spawn(async {});
    Ok(Self { terminal, task, cancellation_token, event_rx, event_tx })
  }

  pub async fn next(&mut self) -> Option<Event> {
    self.event_rx.recv().await
  }

  pub fn enter(&mut self) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stderr(), crossterm::terminal::EnterAlternateScreen, crossterm::cursor::Hide)?;
    self.start();
    Ok(())
  }

  pub fn exit(&self) -> Result<()> {
    self.stop()?;
    crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen, crossterm::cursor::Show)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
  }

  pub fn cancel(&self) {
    self.cancellation_token.cancel();
  }

  pub fn stop(&self) -> Result<()> {
    self.cancel();
    let mut counter = 0;
    while !self.task.is_finished() {
      std::thread::sleep(Duration::from_millis(250));
      counter += 1;
      if counter > 5 {
        self.task.abort();
      }
      if counter > 10 {
        log::error!("Failed to abort task for unknown reason");
        return Err(eyre!("Unable to abort task"));
      }
    }
    Ok(())
  }

  // Spawns the tick/input task. The cancellation token is the handle for
  // "cancel the one active timer": cancelled on exit and on drop so no tick
  // can arrive after the session ends.
  pub fn start(&mut self) {
    let tick_rate = std::time::Duration::from_millis(TICK_INTERVAL_MS);
    self.cancel();
    self.cancellation_token = tokio_util::sync::CancellationToken::new();
    let _cancellation_token = self.cancellation_token.clone();
    let _event_tx = self.event_tx.clone();
    self.task = tokio::spawn(async move {
      let mut reader = crossterm::event::EventStream::new();
      let mut interval = tokio::time::interval(tick_rate);
      loop {
        let delay = interval.tick();
        let crossterm_event = reader.next().fuse();
        tokio::select! {
          _ = _cancellation_token.cancelled() => {
            break;
          }
          maybe_event = crossterm_event => {
            match maybe_event {
              Some(Ok(crossterm::event::Event::Key(key))) => {
                if key.kind == crossterm::event::KeyEventKind::Press {
                    if let Err(e) = _event_tx.send(Event::Key(key)) {
                      log::error!("Failed to send key event: {}", e);
                    }
                }
              }
              Some(Ok(_)) => { }
              Some(Err(_)) => {
                if let Err(e) = _event_tx.send(Event::Error) {
                  log::error!("Failed to send error event: {}", e);
                }
              }
              None => {},
            }
          },
          _ = delay => {
              if let Err(e) = _event_tx.send(Event::Tick) {
                log::error!("Failed to send tick event: {}", e);
              }
          },
        }
      }
    });
  }
}

impl std::ops::Deref for Tui {
  type Target = ratatui::Terminal<Backend<std::io::Stderr>>;

  fn deref(&self) -> &Self::Target {
    &self.terminal
  }
}

impl std::ops::DerefMut for Tui {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.terminal
  }
}

impl Drop for Tui {
  fn drop(&mut self) {
    if let Err(e) = self.exit() {
      eprintln!("Error during cleanup: {}", e);
      // Don't panic in Drop - just log the error
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_app_creation() {
    let app = CountdownApp::new();
    assert_eq!(app.state, AppState::Idle);
    assert_eq!(app.unit, TimeUnit::Second);
    assert_eq!(app.duration_ms, DEFAULT_DURATION_MS);
    assert_eq!(app.time_left_secs, 10);
    assert_eq!(app.progress, 1.0);
  }

  #[test]
  fn test_select_unit() {
    let mut app = CountdownApp::new();
    app.select_unit(TimeUnit::Hour);
    assert_eq!(app.unit, TimeUnit::Hour);
    app.select_unit(TimeUnit::Minute);
    assert_eq!(app.unit, TimeUnit::Minute);
  }

  #[test]
  fn test_select_unit_ignored_while_running() {
    let mut app = CountdownApp::new();
    app.start();
    app.select_unit(TimeUnit::Hour);
    assert_eq!(app.unit, TimeUnit::Second);
  }

  #[test]
  fn test_increment_second() {
    let mut app = CountdownApp::new();
    app.increment();
    assert_eq!(app.duration_ms, 11_000);
    assert_eq!(app.time_left_secs, 11);
  }

  #[test]
  fn test_increment_minute() {
    let mut app = CountdownApp::new();
    app.select_unit(TimeUnit::Minute);
    app.increment();
    assert_eq!(app.duration_ms, 70_000);
    assert_eq!(app.time_left_secs, 70);
  }

  #[test]
  fn test_increment_hour() {
    let mut app = CountdownApp::new();
    app.select_unit(TimeUnit::Hour);
    app.increment();
    assert_eq!(app.duration_ms, 3_610_000);
    assert_eq!(app.time_left_secs, 3_610);
  }

  #[test]
  fn test_decrement_second() {
    let mut app = CountdownApp::new();
    app.decrement();
    assert_eq!(app.duration_ms, 9_000);
    assert_eq!(app.time_left_secs, 9);
  }

  #[test]
  fn test_decrement_rejected_when_unit_exceeds_duration() {
    // 10s configured, removing an hour would underflow
    let mut app = CountdownApp::new();
    app.select_unit(TimeUnit::Hour);
    app.decrement();
    assert_eq!(app.duration_ms, 10_000);
    assert_eq!(app.time_left_secs, 10);
  }

  #[test]
  fn test_decrement_rejected_at_exact_unit_value() {
    let mut app = CountdownApp::new();
    app.duration_ms = 1_000;
    app.time_left_secs = 1;
    app.decrement();
    assert_eq!(app.duration_ms, 1_000);
  }

  #[test]
  fn test_duration_stays_positive_under_repeated_decrement() {
    let mut app = CountdownApp::new();
    for _ in 0..50 {
      app.decrement();
      assert!(app.duration_ms >= MS_PER_SECOND);
    }
    assert_eq!(app.duration_ms, 1_000);
  }

  #[test]
  fn test_adjustments_ignored_while_running() {
    let mut app = CountdownApp::new();
    app.start();
    app.increment();
    app.decrement();
    assert_eq!(app.duration_ms, DEFAULT_DURATION_MS);
  }

  #[test]
  fn test_start_captures_target() {
    let mut app = CountdownApp::new();
    app.select_unit(TimeUnit::Minute);
    app.increment();
    app.start();
    assert_eq!(app.state, AppState::Running);
    assert_eq!(app.target_ms, 70_000);
  }

  #[test]
  fn test_start_noop_while_running() {
    let mut app = CountdownApp::new();
    app.start();
    app.target_ms = 5_000; // marker to detect a re-capture
    app.start();
    assert_eq!(app.state, AppState::Running);
    assert_eq!(app.target_ms, 5_000);
  }

  #[test]
  fn test_stop_restores_readout() {
    let mut app = CountdownApp::new();
    app.start();
    app.on_tick(3_000);
    app.stop();
    assert_eq!(app.state, AppState::Idle);
    assert_eq!(app.progress, 1.0);
    assert_eq!(app.time_left_secs, 10);
  }

  #[test]
  fn test_stop_noop_while_idle() {
    let mut app = CountdownApp::new();
    app.stop();
    assert_eq!(app.state, AppState::Idle);
    assert_eq!(app.progress, 1.0);
  }

  #[test]
  fn test_on_tick_updates_progress_and_readout() {
    let mut app = CountdownApp::new();
    app.start();
    app.on_tick(5_000);
    assert_eq!(app.progress, 0.5);
    assert_eq!(app.time_left_secs, 5);
  }

  #[test]
  fn test_on_tick_floors_to_whole_seconds() {
    let mut app = CountdownApp::new();
    app.start();
    app.on_tick(5_999);
    assert_eq!(app.time_left_secs, 5);
  }

  #[test]
  fn test_on_tick_clamps_progress() {
    let mut app = CountdownApp::new();
    app.start();
    app.on_tick(20_000);
    assert_eq!(app.progress, 1.0);
  }

  #[test]
  fn test_expire_after_midway_tick() {
    let mut app = CountdownApp::new();
    app.start();
    app.on_tick(5_000);
    assert_eq!(app.progress, 0.5);
    assert_eq!(app.time_left_secs, 5);
    app.on_expire();
    assert_eq!(app.state, AppState::Idle);
    assert_eq!(app.progress, 1.0);
    assert_eq!(app.time_left_secs, 10);
  }

  #[test]
  fn test_tick_ignored_while_idle() {
    let mut app = CountdownApp::new();
    app.tick();
    assert_eq!(app.progress, 1.0);
    assert_eq!(app.time_left_secs, 10);
  }

  #[test]
  fn test_start_or_stop_toggles() {
    let mut app = CountdownApp::new();
    app.start_or_stop();
    assert_eq!(app.state, AppState::Running);
    app.start_or_stop();
    assert_eq!(app.state, AppState::Idle);
  }

  #[test]
  fn test_quit() {
    let mut app = CountdownApp::new();
    app.quit();
    assert_eq!(app.state, AppState::Quitting);
  }

  #[test]
  fn test_format_duration_under_a_minute() {
    assert_eq!(format_duration(0), "0");
    assert_eq!(format_duration(5), "5");
    assert_eq!(format_duration(59), "59");
  }

  #[test]
  fn test_format_duration_minutes() {
    assert_eq!(format_duration(60), "1:00");
    assert_eq!(format_duration(65), "1:05");
    assert_eq!(format_duration(599), "9:59");
    assert_eq!(format_duration(600), "10:00");
  }

  #[test]
  fn test_format_duration_hours() {
    assert_eq!(format_duration(3600), "1:00:00");
    assert_eq!(format_duration(3661), "1:01:01");
    assert_eq!(format_duration(36_125), "10:02:05");
  }

  #[test]
  fn test_parse_duration_config_valid() {
    let result = parse_duration_config("45", "test", 10);
    assert_eq!(result, 45);
  }

  #[test]
  fn test_parse_duration_config_zero() {
    let result = parse_duration_config("0", "test", 10);
    assert_eq!(result, 10); // Should use default
  }

  #[test]
  fn test_parse_duration_config_too_high() {
    let result = parse_duration_config("100000", "test", 10);
    assert_eq!(result, 10); // Should use default
  }

  #[test]
  fn test_parse_duration_config_invalid() {
    let result = parse_duration_config("not_a_number", "test", 10);
    assert_eq!(result, 10); // Should use default
  }

  #[test]
  fn test_parse_duration_config_at_min_boundary() {
    let result = parse_duration_config("1", "test", 10);
    assert_eq!(result, 1); // MIN_CONFIG_SECS, should be accepted
  }

  #[test]
  fn test_parse_duration_config_at_max_boundary() {
    let result = parse_duration_config("86400", "test", 10);
    assert_eq!(result, 86400); // MAX_CONFIG_SECS, should be accepted
  }
}

//! satoshi-ui - Terminal showcase for the wallet component library
//!
//! Mounts every component in a single screen so they can be exercised
//! from the keyboard:
//! - Currency input with locale-aware formatting
//! - Password input with reveal toggle
//! - Masked recovery phrase with reveal and copy
//! - Truncated address with expand and copy
//! - QR code that copies its payment URI
//!
//! # Architecture
//!
//! Component state lives in the `satoshi_ui` library; this binary owns
//! the terminal, routes key events to the focused component, and renders
//! through the `ui` module.

mod ui;

use crate::ui::ui;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, poll, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use satoshi_ui::components::{
    CurrencyInput, CurrencyInputConfig, ExpandableText, ExpandableTextConfig, PasswordInput,
    PasswordInputConfig, QrCode, QrCodeConfig, Secret, SecretConfig, TextKind, ToastKind,
    ToastQueue,
};
use satoshi_ui::{
    Clipboard, Config, CopyState, CopyStatus, Currency, IdGenerator, Locale, MemoryClipboard,
    Osc52Selection,
};
use std::{
    collections::VecDeque,
    fs::File,
    io,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::watch;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// How often the screen is redrawn while idle (milliseconds)
const TICK_RATE_MS: u64 = 100;

/// Maximum number of entries kept in the event log
const EVENT_LOG_SIZE: usize = 50;

const DEMO_PHRASE: &str = "correct horse battery staple";
const DEMO_ADDRESS: &str = "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh";

/// Where copied text goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ClipboardMode {
    /// Terminal clipboard through OSC 52 escape sequences
    Osc52,
    /// In-process clipboard, supports paste
    Memory,
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Currency for the amount field (BTC, USD, EUR)
    #[arg(short, long)]
    currency: Option<Currency>,

    /// Separator convention (US, EU)
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Alternative config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "osc52")]
    clipboard: ClipboardMode,
}

/// Component that receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Amount,
    Password,
    Secret,
    Address,
    Qr,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Amount,
        Focus::Password,
        Focus::Secret,
        Focus::Address,
        Focus::Qr,
    ];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn accepts_text(self) -> bool {
        matches!(self, Focus::Amount | Focus::Password)
    }
}

/// A copy feedback channel the app watches to raise toasts
struct CopyWatch {
    label: String,
    rx: watch::Receiver<CopyStatus>,
}

/// Application state
struct App {
    config: Config,
    ids: IdGenerator,
    clipboard: Clipboard,
    focus: Focus,
    amount: CurrencyInput,
    /// Last canonical amount accepted by the input
    last_amount: String,
    password: PasswordInput,
    password_text: String,
    secret: Secret,
    address: ExpandableText,
    qr: QrCode,
    copy_watches: Vec<CopyWatch>,
    toasts: ToastQueue,
    event_log: VecDeque<(DateTime<Local>, String)>,
    show_events: bool,
    /// Full-size QR popup
    show_qr: bool,
    should_quit: bool,
}

impl App {
    fn new(config: Config, clipboard: Clipboard) -> Self {
        let ids = IdGenerator::new();
        let feedback = config.feedback_duration();

        let mut amount = mount_amount(&config, &ids);
        amount.focus();

        let password = PasswordInput::new(
            PasswordInputConfig {
                label: Some("Wallet Password".to_string()),
                ..Default::default()
            },
            &ids,
        );

        let secret = Secret::new(
            SecretConfig {
                label: Some("Recovery Phrase".to_string()),
                mask_character: config.mask_character.clone(),
                ..SecretConfig::new(DEMO_PHRASE)
            },
            &ids,
            clipboard.clone(),
        )
        .with_feedback_duration(feedback);

        let address = ExpandableText::new(
            ExpandableTextConfig {
                kind: TextKind::Address,
                truncate: (config.truncate_start, config.truncate_end),
                ..ExpandableTextConfig::new(DEMO_ADDRESS, "Bitcoin Address")
            },
            &ids,
            clipboard.clone(),
        )
        .with_feedback_duration(feedback);

        let qr = QrCode::new(
            QrCodeConfig {
                size: config.qr_size,
                level: config.qr_level,
                description: Some("Scan to pay".to_string()),
                ..QrCodeConfig::new(payment_uri(""), "Payment Request")
            },
            &ids,
            clipboard.clone(),
        )
        .with_feedback_duration(feedback);

        let copy_watches = vec![
            CopyWatch {
                label: "Recovery Phrase".to_string(),
                rx: secret.subscribe(),
            },
            CopyWatch {
                label: "Bitcoin Address".to_string(),
                rx: address.subscribe(),
            },
            CopyWatch {
                label: "Payment Request".to_string(),
                rx: qr.subscribe(),
            },
        ];

        App {
            toasts: ToastQueue::new(config.toast_duration()),
            config,
            ids,
            clipboard,
            focus: Focus::Amount,
            amount,
            last_amount: String::new(),
            password,
            password_text: String::new(),
            secret,
            address,
            qr,
            copy_watches,
            event_log: VecDeque::with_capacity(EVENT_LOG_SIZE),
            show_events: true,
            show_qr: false,
            should_quit: false,
        }
    }

    fn log_event(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("{}", message);
        self.event_log.push_back((Local::now(), message));
        if self.event_log.len() > EVENT_LOG_SIZE {
            self.event_log.pop_front();
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::Amount && focus != Focus::Amount {
            self.amount.blur();
        }
        if focus == Focus::Amount {
            self.amount.focus();
        }
        self.focus = focus;
    }

    /// Cycles the amount field through the supported currencies
    fn cycle_currency(&mut self) {
        let i = Currency::ALL
            .iter()
            .position(|c| *c == self.config.currency)
            .unwrap_or(0);
        self.config.currency = Currency::ALL[(i + 1) % Currency::ALL.len()];
        self.config.locale = None;
        self.amount = mount_amount(&self.config, &self.ids);
        if self.focus == Focus::Amount {
            self.amount.focus();
        }
        self.last_amount.clear();
        self.qr.set_value(payment_uri(""));
        self.log_event(format!(
            "Currency set to {} ({})",
            self.config.currency,
            self.config.effective_locale()
        ));
    }

    fn apply_amount(&mut self, candidate: &str) {
        match self.amount.handle_input(candidate) {
            Some(canonical) => {
                if self.config.currency == Currency::Btc {
                    self.qr.set_value(payment_uri(&canonical));
                }
                self.last_amount = canonical;
            }
            None => debug!(candidate, "Rejected amount keystroke"),
        }
    }

    async fn paste_amount(&mut self) {
        let pasted = self.clipboard.paste().await;
        if pasted.is_empty() {
            self.log_event("Clipboard is empty or unavailable");
            return;
        }
        let candidate = format!("{}{}", self.amount.display_value(), pasted.trim());
        self.apply_amount(&candidate);
    }

    fn copy_focused(&mut self) {
        match self.focus {
            Focus::Secret => {
                self.secret.copy();
            }
            Focus::Address => {
                self.address.copy();
            }
            Focus::Qr => self.qr.copy(),
            Focus::Amount | Focus::Password => {}
        }
    }

    fn toggle_focused(&mut self) {
        match self.focus {
            Focus::Password => self.password.toggle(),
            Focus::Secret => self.secret.toggle_reveal(),
            Focus::Address => self.address.toggle(),
            Focus::Amount | Focus::Qr => {}
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('v') if self.focus == Focus::Amount => self.paste_amount().await,
                KeyCode::Char('r') => self.toggle_focused(),
                KeyCode::Char('y') => self.copy_focused(),
                KeyCode::Char('u') => self.cycle_currency(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::Esc if self.show_qr => self.show_qr = false,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) if self.focus == Focus::Amount => {
                let candidate = format!("{}{}", self.amount.display_value(), c);
                self.apply_amount(&candidate);
            }
            KeyCode::Backspace if self.focus == Focus::Amount => {
                let mut candidate = self.amount.display_value();
                candidate.pop();
                self.apply_amount(&candidate);
            }
            KeyCode::Enter if self.focus == Focus::Amount => {
                self.amount.blur();
                self.amount.focus();
            }
            KeyCode::Char(c) if self.focus == Focus::Password => self.password_text.push(c),
            KeyCode::Backspace if self.focus == Focus::Password => {
                self.password_text.pop();
            }
            KeyCode::Enter if self.focus == Focus::Password => self.password.toggle(),
            KeyCode::Char('q') if !self.focus.accepts_text() => self.should_quit = true,
            KeyCode::Char('e') if !self.focus.accepts_text() => self.show_events = !self.show_events,
            KeyCode::Char('v') if self.focus == Focus::Qr => self.show_qr = !self.show_qr,
            KeyCode::Char('c') | KeyCode::Enter => self.copy_focused(),
            KeyCode::Char('r') | KeyCode::Char(' ') => self.toggle_focused(),
            _ => {}
        }
    }

    /// Raises toasts and log entries for copy outcomes observed since the last tick
    fn tick(&mut self) {
        let now = Instant::now();
        let mut outcomes = Vec::new();

        for cw in &mut self.copy_watches {
            if !cw.rx.has_changed().unwrap_or(false) {
                continue;
            }
            let status = cw.rx.borrow_and_update().clone();
            match status.state {
                CopyState::Success | CopyState::Error => {
                    outcomes.push((cw.label.clone(), status));
                }
                CopyState::Idle | CopyState::Copying => {}
            }
        }

        for (label, status) in outcomes {
            let kind = if status.state == CopyState::Success {
                ToastKind::Success
            } else {
                ToastKind::Error
            };
            let message = status
                .announcement
                .unwrap_or_else(|| format!("{} {}", label, status.state.as_str()));
            self.toasts.show(message.clone(), kind, None, now);
            self.log_event(message);
        }

        self.toasts.prune(now);
    }
}

fn mount_amount(config: &Config, ids: &IdGenerator) -> CurrencyInput {
    CurrencyInput::new(
        CurrencyInputConfig {
            locale: config.locale,
            label: Some(format!("Amount ({})", config.currency)),
            ..CurrencyInputConfig::new(config.currency)
        },
        ids,
    )
}

fn payment_uri(amount: &str) -> String {
    if amount.is_empty() || amount.ends_with('.') {
        format!("bitcoin:{}", DEMO_ADDRESS)
    } else {
        format!("bitcoin:{}?amount={}", DEMO_ADDRESS, amount)
    }
}

fn build_clipboard(mode: ClipboardMode) -> Clipboard {
    match mode {
        ClipboardMode::Osc52 => Clipboard::new().with_fallback(Arc::new(Osc52Selection::stdout())),
        ClipboardMode::Memory => Clipboard::new().with_primary(Arc::new(MemoryClipboard::new())),
    }
}

/// Installs a file-backed tracing subscriber; stdout belongs to the terminal UI
fn init_logging() -> Result<()> {
    let log_dir = Config::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;
    let log_file = File::create(log_dir.join("satoshi-ui.log"))
        .with_context(|| format!("Failed to create log file in {:?}", log_dir))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if poll(Duration::from_millis(TICK_RATE_MS))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await;
            }
        }

        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(currency) = args.currency {
        config.currency = currency;
    }
    if args.locale.is_some() {
        config.locale = args.locale;
    }
    info!(
        currency = %config.currency,
        locale = %config.effective_locale(),
        clipboard = ?args.clipboard,
        "Starting satoshi-ui"
    );

    let mut app = App::new(config, build_clipboard(args.clipboard));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Exiting satoshi-ui");
    result
}

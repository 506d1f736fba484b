//! Headless snapshot execution
//!
//! Performs a single load, runs it through the same reducer the TUI uses and
//! prints the resulting view as plain text.

use super::{SessionData, messages::print_session_starting};
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use crate::ui::dashboard::indicators::{decision_to_badge, status_to_indicator};
use crate::ui::dashboard::state::View;
use crate::ui::dashboard::utils::{
    format_compact_timestamp, format_percent, format_wallet_rate, truncate_address,
};
use std::error::Error;
use std::fmt::{self, Write};
use std::time::Instant;

/// Runs one load and prints the dashboard as text.
///
/// # Returns
/// * `Ok(())` - Data loaded and printed
/// * `Err` - The load failed; the message is the one the error view shows
pub async fn run_snapshot_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("snapshot", &session.base_url);

    let mut state = DashboardState::new(Instant::now(), UIConfig::new(false));
    let (started, outcome) = session.loader.load_and_wait().await;
    state.apply(started);
    state.apply(outcome);

    for event in state.activity_logs.iter().filter(|e| e.should_display()) {
        eprintln!("{}", event);
    }

    match state.view() {
        View::Content => {
            print!("{}", render_text(&state)?);
            Ok(())
        }
        View::Error | View::Loading => Err(state
            .error()
            .unwrap_or("Failed to load dashboard data")
            .into()),
    }
}

/// Plain-text rendering of the content view.
pub fn render_text(state: &DashboardState) -> Result<String, fmt::Error> {
    let stats = state.stats_or_default();
    let mut out = String::new();

    writeln!(
        out,
        "SMART FALCON SIGNAL DASHBOARD v{}",
        env!("CARGO_PKG_VERSION")
    )?;
    if let Some(updated) = state.last_updated() {
        writeln!(out, "Last update: {}", updated.format("%Y-%m-%d %H:%M:%S"))?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "Total signals:   {} ({} successful, {} failed, {} pending)",
        stats.total_signals,
        stats.successful_signals,
        stats.failed_signals(),
        stats.pending_signals
    )?;
    writeln!(out, "Success rate:    {}", format_percent(stats.success_rate))?;
    writeln!(out, "Active wallets:  {}", stats.total_wallets)?;
    writeln!(out)?;

    writeln!(out, "Recent signals:")?;
    if state.recent_signals.is_empty() {
        writeln!(out, "  No signals recorded yet")?;
    }
    for signal in &state.recent_signals {
        let indicator = status_to_indicator(signal.performance_status);
        let badge = decision_to_badge(signal.decision);
        write!(
            out,
            "  {} {} [{}] {} {} wallets",
            indicator.symbol,
            signal.token_name.as_deref().unwrap_or("Unnamed token"),
            badge.label,
            truncate_address(&signal.contract_address),
            signal.total_wallets_involved
        )?;
        if let Some(score) = signal.confidence_score {
            write!(out, " score {:.0}", score)?;
        }
        if let Some(time) = &signal.signal_time {
            write!(out, " {}", format_compact_timestamp(time))?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    writeln!(out, "Top wallets:")?;
    if state.top_wallets.is_empty() {
        writeln!(out, "  No wallets ranked yet")?;
    }
    for (index, wallet) in state.top_wallets.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} #{} {} ({}/{} calls)",
            index + 1,
            wallet.wallet_type,
            wallet.wallet_number,
            format_wallet_rate(wallet.success_rate),
            wallet.successful_calls,
            wallet.total_calls
        )?;
    }

    Ok(out)
}

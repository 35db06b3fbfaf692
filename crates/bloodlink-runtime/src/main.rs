//! # BloodLink Runtime
//!
//! Wires the coordination subsystems over one shared record store and runs
//! the dashboard refresh loops.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐   ┌───────────────┐   ┌────────────────────┐
//! │ Donor view    │   │ Receiver view │   │ Organization view  │
//! │ (candidates)  │   │ (lifecycle)   │   │ (verify/inventory) │
//! └───────┬───────┘   └───────┬───────┘   └─────────┬──────────┘
//!         │ poll              │ poll                │ poll
//!         ▼                   ▼                     ▼
//!   bl-01-matching      bl-02-donation     bl-03-verification
//!                                          bl-04-inventory
//!         │                   │                     │
//!         └───────────────────┴─────────────────────┘
//!                             │
//!                       shared-store
//! ```
//!
//! There is no push channel: each view re-runs its query on a fixed
//! interval, and staleness up to one interval is by design.

mod config;
mod poll;
mod seed;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bl_01_matching::{MatchingApi, MatchingService};
use bl_02_donation::{days_remaining, is_on_cooldown};
use bl_03_verification::{VerificationApi, VerificationService};
use bl_04_inventory::{InventoryApi, InventoryService};
use shared_store::InMemoryStore;
use shared_types::VerificationStatus;

use crate::config::RuntimeConfig;
use crate::poll::Poller;
use crate::seed::seed_demo_data;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RuntimeConfig::from_env();
    let interval = Duration::from_secs(config.poll_interval_secs);
    info!(poll_interval_secs = config.poll_interval_secs, "Starting BloodLink runtime");

    let store = Arc::new(InMemoryStore::new());
    let actors = seed_demo_data(&store)?;

    // Donor dashboard: compatible candidates, re-polled.
    let matching = MatchingService::new(Arc::clone(&store));
    let donor = actors.donor.clone();
    let donor_poller = Poller::spawn("donor-dashboard", interval, move || {
        match matching.candidates_for_donor(&donor) {
            Ok(candidates) => {
                let now = Utc::now();
                info!(
                    donor = %donor.name,
                    candidates = candidates.len(),
                    on_cooldown = is_on_cooldown(&donor, now),
                    cooldown_days_left = days_remaining(&donor, now),
                    "Donor dashboard refreshed"
                );
            }
            Err(error) => tracing::error!(%error, "Donor dashboard refresh failed"),
        }
    });

    // Organization dashboard: pending verifications and stock alerts.
    let verifications = VerificationService::new(Arc::clone(&store));
    let inventory = InventoryService::new(Arc::clone(&store));
    let organization = actors.organization.clone();
    let org_poller = Poller::spawn("organization-dashboard", interval, move || {
        let pending = verifications
            .verifications_in_city(&organization.city)
            .map(|vs| {
                vs.into_iter()
                    .filter(|v| v.status == VerificationStatus::Pending)
                    .count()
            });
        let attention = inventory.needs_attention(organization.id).map(|i| i.len());
        match (pending, attention) {
            (Ok(pending), Ok(attention)) => info!(
                organization = %organization.name,
                pending_verifications = pending,
                stock_alerts = attention,
                "Organization dashboard refreshed"
            ),
            (Err(error), _) => {
                tracing::error!(%error, "Organization dashboard refresh failed");
            }
            (_, Err(error)) => {
                tracing::error!(%error, "Organization dashboard refresh failed");
            }
        }
    });

    info!("Runtime ready; press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;

    info!("Shutting down");
    donor_poller.stop();
    org_poller.stop();
    Ok(())
}

//! Card construction.
//!
//! Turns a parsed [`StatusSnapshot`] into the ordered list of [`Card`]s the
//! UI draws. All decisions about what a card shows live here; the ui module
//! only lays cards out.

use std::cmp::Ordering;

use serde::Serialize;

use super::indicator::{normalize, StatusInfo};
use super::provider::{self, FALLBACK_ICON, FALLBACK_URL};
use super::Locale;
use crate::source::{Incident, ProviderStatus, StatusReport, StatusSnapshot};

/// Maximum incidents and maintenances listed on a card.
pub const MAX_LISTED_EVENTS: usize = 3;

/// One provider card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub provider: String,
    /// Official status page, `#` if unknown.
    pub link: String,
    pub icon: String,
    #[serde(flatten)]
    pub body: CardBody,
}

/// What a card shows below its header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardBody {
    /// The collector reported an error for this provider.
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
    /// The record had no usable overall status.
    Invalid { message: String },
    /// Normal status content.
    Status(StatusBody),
}

/// Status content of a card.
///
/// Empty sections are represented by empty vectors and are not drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBody {
    pub overall: StatusInfo,
    pub description: String,
    pub components: Vec<ComponentRow>,
    /// First [`MAX_LISTED_EVENTS`] incidents.
    pub incidents: Vec<EventRow>,
    pub incident_total: usize,
    /// First [`MAX_LISTED_EVENTS`] scheduled maintenances.
    pub maintenances: Vec<EventRow>,
    pub maintenance_total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRow {
    pub name: String,
    pub status: StatusInfo,
}

/// An incident or maintenance line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRow {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Card {
    /// Whether this card carries a provider-level error.
    pub fn is_error(&self) -> bool {
        matches!(self.body, CardBody::Error { .. })
    }

    /// Display class of the overall status, if the card has one.
    pub fn overall(&self) -> Option<StatusInfo> {
        match &self.body {
            CardBody::Status(body) => Some(body.overall),
            _ => None,
        }
    }
}

/// Build one card per provider in display order.
///
/// Known providers come first in catalog order; the rest follow
/// alphabetically.
pub fn build_cards(snapshot: &StatusSnapshot, locale: Locale) -> Vec<Card> {
    let mut providers: Vec<(&String, &ProviderStatus)> = snapshot.data.iter().collect();
    providers.sort_by(|(a, _), (b, _)| compare_providers(a, b));

    providers.into_iter().map(|(name, status)| build_card(name, status, locale)).collect()
}

fn compare_providers(a: &str, b: &str) -> Ordering {
    match (provider::preferred_rank(a), provider::preferred_rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Build the card for a single provider.
pub fn build_card(name: &str, status: &ProviderStatus, locale: Locale) -> Card {
    let info = provider::lookup(name);
    let scraped = info.is_some_and(|p| p.scraped);

    let body = match status {
        ProviderStatus::Failed { error, .. } => CardBody::Error {
            message: locale.provider_failed(error),
            hint: scraped.then(|| locale.scraper_hint().to_string()),
        },
        ProviderStatus::Report(report) => match build_status(report, scraped, locale) {
            Some(body) => CardBody::Status(body),
            None => CardBody::Invalid {
                message: locale.invalid_data().to_string(),
            },
        },
    };

    Card {
        provider: name.to_string(),
        link: info.map_or(FALLBACK_URL, |p| p.status_url).to_string(),
        icon: info.map_or(FALLBACK_ICON, |p| p.icon).to_string(),
        body,
    }
}

fn build_status(report: &StatusReport, scraped: bool, locale: Locale) -> Option<StatusBody> {
    let status = report.status.as_ref()?;

    let components = report
        .components
        .iter()
        .map(|c| ComponentRow {
            name: c.name.clone(),
            status: normalize(&c.status, locale),
        })
        .collect();

    Some(StatusBody {
        overall: normalize(&status.indicator, locale),
        description: status.description.clone(),
        components,
        incidents: event_rows(&report.incidents),
        incident_total: report.incidents.len(),
        maintenances: event_rows(&report.scheduled_maintenances),
        maintenance_total: report.scheduled_maintenances.len(),
        note: scraped.then(|| locale.scraper_note().to_string()),
    })
}

fn event_rows(events: &[Incident]) -> Vec<EventRow> {
    events
        .iter()
        .take(MAX_LISTED_EVENTS)
        .map(|e| EventRow {
            name: e.name.clone(),
            status: e.status.clone(),
            link: e.shortlink.clone(),
        })
        .collect()
}

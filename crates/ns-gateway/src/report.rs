//! Inbound location reports and the registry they update.
//!
//! Reports come from outside the simulation (originally an HTTP endpoint)
//! and are keyed by whatever id the reporter sends.  They never touch the
//! simulated nurses.

use std::collections::BTreeMap;

use ns_core::Position;
use serde::Serialize;
use serde_json::Value;

use crate::{ReportError, ReportResult};

// ── LocationReport ────────────────────────────────────────────────────────────

/// A validated `{agentId, lat, lon}` report.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationReport {
    pub agent_id: String,
    pub position: Position,
}

impl LocationReport {
    /// Build a report, rejecting non-finite coordinates.
    pub fn new(agent_id: impl Into<String>, lat: f64, lon: f64) -> ReportResult<Self> {
        finite("lat", lat)?;
        finite("lon", lon)?;
        Ok(Self { agent_id: agent_id.into(), position: Position::new(lat, lon) })
    }

    /// Parse a JSON request body.
    ///
    /// `agentId` may be a string or a number.  `lat` and `lon` must be
    /// present and be JSON numbers; numeric strings are rejected.
    pub fn from_json(body: &str) -> ReportResult<Self> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ReportError::Malformed(e.to_string()))?;
        if !value.is_object() {
            return Err(ReportError::Malformed("expected a JSON object".into()));
        }

        let agent_id = match value.get("agentId") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => return Err(ReportError::Malformed(format!("bad agentId {other}"))),
            None => return Err(ReportError::Malformed("missing agentId".into())),
        };
        let lat = coordinate(&value, "lat")?;
        let lon = coordinate(&value, "lon")?;

        Self::new(agent_id, lat, lon)
    }
}

fn coordinate(value: &Value, field: &'static str) -> ReportResult<f64> {
    match value.get(field) {
        None | Some(Value::Null) => Err(ReportError::MissingCoordinate(field)),
        Some(v) => v.as_f64().ok_or_else(|| ReportError::InvalidCoordinate {
            field,
            value: v.to_string(),
        }),
    }
}

fn finite(field: &'static str, x: f64) -> ReportResult<()> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(ReportError::InvalidCoordinate { field, value: x.to_string() })
    }
}

// ── ReportedLocation ──────────────────────────────────────────────────────────

/// The `locationUpdate` payload re-emitted for an accepted report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedLocation {
    pub agent_id: String,
    pub lat:      f64,
    pub lon:      f64,
}

impl From<&LocationReport> for ReportedLocation {
    fn from(r: &LocationReport) -> Self {
        Self {
            agent_id: r.agent_id.clone(),
            lat:      r.position.lat,
            lon:      r.position.lon,
        }
    }
}

// ── ReportRegistry ────────────────────────────────────────────────────────────

/// Last reported position per external id.
#[derive(Debug, Default, Clone)]
pub struct ReportRegistry {
    positions: BTreeMap<String, Position>,
}

impl ReportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `report`, returning the position it replaces.
    pub fn update(&mut self, report: &LocationReport) -> Option<Position> {
        self.positions.insert(report.agent_id.clone(), report.position)
    }

    pub fn get(&self, agent_id: &str) -> Option<Position> {
        self.positions.get(agent_id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All known positions in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.positions.iter().map(|(id, p)| (id.as_str(), *p))
    }
}

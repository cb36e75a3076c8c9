//! Discovery orchestrator: the survey state machine.
//!
//! ModeCheck → Scanning → (Probing × N) → Reporting. The caller owns the
//! terminal Sleep step (stop the radio, deep sleep) once `run` returns a
//! completed outcome.

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use heapless::Vec;
use log::{debug, info};

use crate::config::SurveyConfig;
use crate::indicator::Indicator;
use crate::link::{ConnectionManager, StationLink};
use crate::probe::Reachability;
use crate::scan::{open_candidates, AccessPointScan, SCAN_MAX};
use crate::types::{ConnectionOutcome, NetworkRecord};


/// How one survey pass ended.
#[derive(Debug, PartialEq, Eq)]
pub enum SurveyOutcome {
    /// The mode input was asserted; no discovery work was performed and
    /// the device must stay awake for maintenance.
    ServiceMode,
    /// A full pass completed; the list holds every verified-open network
    /// in scan order.
    Completed(Vec<NetworkRecord, SCAN_MAX>),
}

pub struct Survey<S, R, M, P, D1, D2> {
    station: S,
    prober: R,
    mode_input: M,
    indicator: Indicator<P, D1>,
    link: ConnectionManager<D2>,
    config: SurveyConfig,
}

impl<S, R, M, P, D1, D2> Survey<S, R, M, P, D1, D2>
where
    S: AccessPointScan + StationLink,
    R: Reachability,
    M: InputPin,
    P: OutputPin,
    D1: DelayNs,
    D2: DelayNs,
{
    pub fn new(
        station: S,
        prober: R,
        mode_input: M,
        indicator: Indicator<P, D1>,
        link_delay: D2,
        config: SurveyConfig,
    ) -> Self {
        let config = config.sanitized();
        Self {
            station,
            prober,
            mode_input,
            indicator,
            link: ConnectionManager::new(config.link, link_delay),
            config,
        }
    }

    /// Hands the radio handle back so the caller can power it off before
    /// sleeping.
    pub fn into_station(self) -> S {
        self.station
    }

    /// One full survey pass. A scan failure is a radio fault and
    /// propagates; everything else resolves to a (possibly empty)
    /// verified list.
    pub async fn run(&mut self) -> Result<SurveyOutcome, <S as AccessPointScan>::Error> {
        if self.service_mode_asserted() {
            info!("service mode asserted, skipping discovery");
            return Ok(SurveyOutcome::ServiceMode);
        }

        let visible = self.station.scan().await?;
        let candidates = open_candidates(&visible);
        info!(
            "scan: {} networks visible, {} open",
            visible.len(),
            candidates.len()
        );

        let mut verified: Vec<NetworkRecord, SCAN_MAX> = Vec::new();
        for record in candidates {
            info!("checking {}...", record.ssid.as_str());
            self.indicator.blink(self.config.blink.progress_ms, 1).await;
            if self.check_candidate(&record).await {
                let _ = verified.push(record);
            }
        }

        self.report(&verified).await;
        Ok(SurveyOutcome::Completed(verified))
    }

    fn service_mode_asserted(&mut self) -> bool {
        // Logic-low asserts service mode. A pin read fault counts as
        // not asserted; discovery is this device's only job.
        self.mode_input.is_low().unwrap_or(false)
    }

    /// Associate, verify, tear down. Every path out of this block runs
    /// `release`, so no candidate's connection state leaks into the
    /// next iteration.
    async fn check_candidate(&mut self, record: &NetworkRecord) -> bool {
        let outcome = self.link.attempt(&mut self.station, record).await;
        let reachable = match outcome {
            ConnectionOutcome::Connected => self.prober.probe(self.config.probe_host).await,
            ConnectionOutcome::Failed | ConnectionOutcome::TimedOut => {
                debug!(
                    "association {} for {}",
                    outcome.as_str(),
                    record.ssid.as_str()
                );
                false
            }
        };
        self.link.release(&mut self.station).await;
        outcome == ConnectionOutcome::Connected && reachable
    }

    async fn report(&mut self, verified: &[NetworkRecord]) {
        if verified.is_empty() {
            info!("no open wifi networks found");
            return;
        }

        info!("open wifi networks:");
        for record in verified {
            info!(
                "  {} bssid={} channel={} rssi={}",
                record.ssid.as_str(),
                record.bssid,
                record.channel,
                record.rssi
            );
        }
        self.indicator
            .blink(self.config.blink.report_ms, verified.len())
            .await;
    }
}

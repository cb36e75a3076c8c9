//! Survey configuration, constructed once in the entry point and passed
//! into the orchestrator. No process-wide mutable state.

use crate::echo::ECHO_PAYLOAD_MAX;

/// Echo-probe policy, mirroring the reachability semantics the survey
/// was tuned with: a handful of quiet probes, one reply is enough.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbePolicy {
    pub count: u8,
    pub interval_ms: u32,
    pub timeout_ms: u32,
    pub payload_len: usize,
}

/// Bounded-wait policy for the association poll loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkPolicy {
    pub connect_timeout_ms: u32,
    pub poll_interval_ms: u32,
}

/// Indicator blink intervals for the two user-visible signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkPolicy {
    pub progress_ms: u32,
    pub report_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurveyConfig {
    pub probe_host: &'static str,
    pub probe: ProbePolicy,
    pub link: LinkPolicy,
    pub blink: BlinkPolicy,
}

pub const PROBE_COUNT_DEFAULT: u8 = 4;
pub const PROBE_INTERVAL_DEFAULT_MS: u32 = 10;
pub const PROBE_TIMEOUT_DEFAULT_MS: u32 = 5_000;
pub const PROBE_PAYLOAD_DEFAULT: usize = 64;
// 15s: a healthy AP resolves association well within this; an AP that
// never leaves the connecting state must not wedge the whole pass.
pub const CONNECT_TIMEOUT_DEFAULT_MS: u32 = 15_000;
pub const CONNECT_POLL_DEFAULT_MS: u32 = 100;
pub const BLINK_PROGRESS_DEFAULT_MS: u32 = 300;
pub const BLINK_REPORT_DEFAULT_MS: u32 = 1_000;
pub const PROBE_HOST_DEFAULT: &str = "google.com";

impl SurveyConfig {
    pub const fn defaults() -> Self {
        Self {
            probe_host: PROBE_HOST_DEFAULT,
            probe: ProbePolicy {
                count: PROBE_COUNT_DEFAULT,
                interval_ms: PROBE_INTERVAL_DEFAULT_MS,
                timeout_ms: PROBE_TIMEOUT_DEFAULT_MS,
                payload_len: PROBE_PAYLOAD_DEFAULT,
            },
            link: LinkPolicy {
                connect_timeout_ms: CONNECT_TIMEOUT_DEFAULT_MS,
                poll_interval_ms: CONNECT_POLL_DEFAULT_MS,
            },
            blink: BlinkPolicy {
                progress_ms: BLINK_PROGRESS_DEFAULT_MS,
                report_ms: BLINK_REPORT_DEFAULT_MS,
            },
        }
    }

    pub const fn sanitized(self) -> Self {
        let probe = ProbePolicy {
            count: clamp_u8(self.probe.count, 1, 8),
            interval_ms: clamp_u32(self.probe.interval_ms, 1, 1_000),
            timeout_ms: clamp_u32(self.probe.timeout_ms, 500, 60_000),
            payload_len: clamp_usize(self.probe.payload_len, 0, ECHO_PAYLOAD_MAX),
        };
        let link = LinkPolicy {
            connect_timeout_ms: clamp_u32(self.link.connect_timeout_ms, 2_000, 180_000),
            poll_interval_ms: clamp_u32(self.link.poll_interval_ms, 10, 1_000),
        };
        let blink = BlinkPolicy {
            progress_ms: clamp_u32(self.blink.progress_ms, 50, 5_000),
            report_ms: clamp_u32(self.blink.report_ms, 50, 5_000),
        };
        Self {
            probe_host: self.probe_host,
            probe,
            link,
            blink,
        }
    }
}

const fn clamp_u32(value: u32, min: u32, max: u32) -> u32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

const fn clamp_u8(value: u8, min: u8, max: u8) -> u8 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

const fn clamp_usize(value: usize, min: usize, max: usize) -> usize {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

use core::fmt;

use heapless::String;

pub const SSID_MAX: usize = 32;

/// Authentication classification of a scanned access point. Only the
/// open/not-open distinction matters to the survey.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Security {
    Open,
    Secured,
}

impl Security {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Secured => "secured",
        }
    }
}

/// One visible access point, as reported by a single scan pass.
///
/// The scanner boundary converts whatever positional/foreign layout the
/// radio driver uses into these named fields; everything downstream is
/// decoupled from the driver representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkRecord {
    pub ssid: String<SSID_MAX>,
    pub security: Security,
    pub bssid: Bssid,
    pub channel: u8,
    pub rssi: i8,
}

impl NetworkRecord {
    /// Builds a record from driver-provided parts. An over-long SSID is
    /// truncated at a character boundary rather than rejected.
    pub fn from_parts(ssid: &str, security: Security, bssid: [u8; 6], channel: u8, rssi: i8) -> Self {
        let mut name = String::new();
        for ch in ssid.chars() {
            if name.push(ch).is_err() {
                break;
            }
        }
        Self {
            ssid: name,
            security,
            bssid: Bssid(bssid),
            channel,
            rssi,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bssid(pub [u8; 6]);

impl fmt::Display for Bssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// Association lifecycle state, owned by the connection manager during a
/// single attempt. Reset to `Idle` by `release`, success or failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Connected,
    Failed,
}

impl ConnectionState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Failed => "failed",
        }
    }
}

/// Resolution of one association attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionOutcome {
    Connected,
    Failed,
    TimedOut,
}

impl ConnectionOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Failed => "failed",
            Self::TimedOut => "timed_out",
        }
    }
}

/// Instantaneous link status as reported by the station driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStatus {
    Connecting,
    Connected,
    Down,
}

impl LinkStatus {
    /// Collapses a driver's disconnect-event latch and its instantaneous
    /// connected flag into one status. The latch wins: a terminal
    /// disconnect (auth rejection, no AP) must read as `Down`, not as an
    /// attempt still in flight.
    pub const fn from_driver_flags(disconnect_latched: bool, connected: bool) -> Self {
        if disconnect_latched {
            Self::Down
        } else if connected {
            Self::Connected
        } else {
            Self::Connecting
        }
    }
}

/// Why a reachability probe came back negative. Consumed within one
/// verification step; never propagated as an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeFailure {
    Timeout,
    Transport,
}

impl ProbeFailure {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Transport => "transport",
        }
    }
}

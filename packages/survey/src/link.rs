//! Association lifecycle for a single candidate network.

use embedded_hal_async::delay::DelayNs;
use log::debug;

use crate::config::LinkPolicy;
use crate::types::{ConnectionOutcome, ConnectionState, LinkStatus, NetworkRecord};

/// Station driver primitives the connection manager builds on. One value
/// of this (the radio handle) exists and is lent to one operation at a
/// time.
pub trait StationLink {
    type Error: core::fmt::Debug;

    /// Initiates association with the target SSID. Returns once the
    /// attempt is in flight, not once it resolves.
    async fn begin_join(&mut self, ssid: &str) -> Result<(), Self::Error>;

    /// Instantaneous link status of the attempt in flight.
    async fn link_status(&mut self) -> LinkStatus;

    /// Tears down the current association, best effort.
    async fn disconnect(&mut self) -> Result<(), Self::Error>;
}

/// Drives connect → poll-until-resolved → release for one candidate at a
/// time. The wait is blocking by design (there is no competing work) but
/// deadline-bounded: a driver that never leaves the connecting state
/// resolves as `TimedOut` instead of wedging the pass.
pub struct ConnectionManager<D> {
    policy: LinkPolicy,
    delay: D,
    state: ConnectionState,
}

impl<D: DelayNs> ConnectionManager<D> {
    pub fn new(policy: LinkPolicy, delay: D) -> Self {
        Self {
            policy,
            delay,
            state: ConnectionState::Idle,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    fn transition(&mut self, next: ConnectionState) {
        debug!("link: {} -> {}", self.state.as_str(), next.as_str());
        self.state = next;
    }

    /// Attempts association with `record`. Post-condition: the caller
    /// must invoke [`release`](Self::release) before the next candidate,
    /// whatever the outcome.
    pub async fn attempt<L: StationLink>(
        &mut self,
        link: &mut L,
        record: &NetworkRecord,
    ) -> ConnectionOutcome {
        self.transition(ConnectionState::Connecting);
        if link.begin_join(record.ssid.as_str()).await.is_err() {
            self.transition(ConnectionState::Failed);
            return ConnectionOutcome::Failed;
        }

        let mut waited_ms = 0u32;
        loop {
            match link.link_status().await {
                LinkStatus::Connected => {
                    self.transition(ConnectionState::Connected);
                    return ConnectionOutcome::Connected;
                }
                LinkStatus::Down => {
                    self.transition(ConnectionState::Failed);
                    return ConnectionOutcome::Failed;
                }
                LinkStatus::Connecting => {}
            }
            if waited_ms >= self.policy.connect_timeout_ms {
                self.transition(ConnectionState::Failed);
                return ConnectionOutcome::TimedOut;
            }
            self.delay.delay_ms(self.policy.poll_interval_ms).await;
            waited_ms = waited_ms.saturating_add(self.policy.poll_interval_ms);
        }
    }

    /// Forces the radio back to a disassociated state. Idempotent: a
    /// second call on an already-idle manager touches nothing. A timed
    /// out or failed attempt is also torn down, since the driver may
    /// still resolve it after we stopped waiting.
    pub async fn release<L: StationLink>(&mut self, link: &mut L) {
        if self.state != ConnectionState::Idle {
            let _ = link.disconnect().await;
            self.transition(ConnectionState::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;
    use heapless::Vec;

    use super::*;
    use crate::types::Security;

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    /// Plays back a scripted sequence of link statuses, repeating the
    /// last entry once the script runs out.
    struct ScriptedLink {
        script: Vec<LinkStatus, 8>,
        cursor: usize,
        join_err: bool,
        joins: usize,
        disconnects: usize,
    }

    impl ScriptedLink {
        fn new(script: &[LinkStatus]) -> Self {
            Self {
                script: Vec::from_slice(script).unwrap(),
                cursor: 0,
                join_err: false,
                joins: 0,
                disconnects: 0,
            }
        }
    }

    impl StationLink for ScriptedLink {
        type Error = &'static str;

        async fn begin_join(&mut self, _ssid: &str) -> Result<(), Self::Error> {
            self.joins += 1;
            if self.join_err {
                return Err("join rejected");
            }
            Ok(())
        }

        async fn link_status(&mut self) -> LinkStatus {
            let status = self.script[self.cursor.min(self.script.len() - 1)];
            self.cursor += 1;
            status
        }

        async fn disconnect(&mut self) -> Result<(), Self::Error> {
            self.disconnects += 1;
            Ok(())
        }
    }

    fn candidate() -> NetworkRecord {
        NetworkRecord::from_parts("cafe", Security::Open, [0; 6], 1, -40)
    }

    fn manager() -> ConnectionManager<NoopDelay> {
        let policy = LinkPolicy {
            connect_timeout_ms: 500,
            poll_interval_ms: 100,
        };
        ConnectionManager::new(policy, NoopDelay)
    }

    #[test]
    fn resolves_connected_after_polling() {
        let mut link = ScriptedLink::new(&[
            LinkStatus::Connecting,
            LinkStatus::Connecting,
            LinkStatus::Connected,
        ]);
        let mut manager = manager();
        let outcome = block_on(manager.attempt(&mut link, &candidate()));
        assert_eq!(outcome, ConnectionOutcome::Connected);
        assert_eq!(manager.state(), ConnectionState::Connected);
    }

    #[test]
    fn driver_down_resolves_failed() {
        let mut link = ScriptedLink::new(&[LinkStatus::Connecting, LinkStatus::Down]);
        let mut manager = manager();
        let outcome = block_on(manager.attempt(&mut link, &candidate()));
        assert_eq!(outcome, ConnectionOutcome::Failed);
        assert_eq!(manager.state(), ConnectionState::Failed);
    }

    #[test]
    fn join_rejection_resolves_failed_without_polling() {
        let mut link = ScriptedLink::new(&[LinkStatus::Connecting]);
        link.join_err = true;
        let mut manager = manager();
        let outcome = block_on(manager.attempt(&mut link, &candidate()));
        assert_eq!(outcome, ConnectionOutcome::Failed);
        assert_eq!(link.cursor, 0);
    }

    #[test]
    fn stalled_driver_times_out() {
        let mut link = ScriptedLink::new(&[LinkStatus::Connecting]);
        let mut manager = manager();
        let outcome = block_on(manager.attempt(&mut link, &candidate()));
        assert_eq!(outcome, ConnectionOutcome::TimedOut);
        // 500ms budget at 100ms per poll: initial poll plus five waits.
        assert_eq!(link.cursor, 6);
    }

    #[test]
    fn release_disconnects_once_and_is_idempotent() {
        let mut link = ScriptedLink::new(&[LinkStatus::Connected]);
        let mut manager = manager();
        let _ = block_on(manager.attempt(&mut link, &candidate()));

        block_on(manager.release(&mut link));
        assert_eq!(link.disconnects, 1);
        assert_eq!(manager.state(), ConnectionState::Idle);

        block_on(manager.release(&mut link));
        assert_eq!(link.disconnects, 1);
        assert_eq!(manager.state(), ConnectionState::Idle);
    }

    #[test]
    fn release_tears_down_timed_out_attempt() {
        let mut link = ScriptedLink::new(&[LinkStatus::Connecting]);
        let mut manager = manager();
        let outcome = block_on(manager.attempt(&mut link, &candidate()));
        assert_eq!(outcome, ConnectionOutcome::TimedOut);

        block_on(manager.release(&mut link));
        assert_eq!(link.disconnects, 1);
        assert_eq!(manager.state(), ConnectionState::Idle);
    }
}

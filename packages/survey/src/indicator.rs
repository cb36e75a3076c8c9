//! Status LED driven active-low: logical "on" pulls the line low.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

pub struct Indicator<P, D> {
    pub(crate) pin: P,
    pub(crate) delay: D,
}

impl<P: OutputPin, D: DelayNs> Indicator<P, D> {
    pub fn new(pin: P, delay: D) -> Self {
        Self { pin, delay }
    }

    pub fn on(&mut self) {
        let _ = self.pin.set_low();
    }

    pub fn off(&mut self) {
        let _ = self.pin.set_high();
    }

    /// On, wait, off, wait, `times` over. Best effort; GPIO errors are
    /// swallowed, signaling must never fail the survey.
    pub async fn blink(&mut self, interval_ms: u32, times: usize) {
        for _ in 0..times {
            self.on();
            self.delay.delay_ms(interval_ms).await;
            self.off();
            self.delay.delay_ms(interval_ms).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embassy_futures::block_on;
    use embedded_hal::digital::ErrorType;

    use super::*;

    #[derive(Default)]
    struct RecordingPin {
        low_edges: usize,
        is_low: bool,
    }

    impl ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            if !self.is_low {
                self.low_edges += 1;
            }
            self.is_low = true;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.is_low = false;
            Ok(())
        }
    }

    struct NoopDelay;

    impl DelayNs for NoopDelay {
        async fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn blink_pulses_low_n_times_and_ends_high() {
        let mut indicator = Indicator::new(RecordingPin::default(), NoopDelay);
        block_on(indicator.blink(300, 3));
        assert_eq!(indicator.pin.low_edges, 3);
        assert!(!indicator.pin.is_low);
    }

    #[test]
    fn zero_times_is_a_no_op() {
        let mut indicator = Indicator::new(RecordingPin::default(), NoopDelay);
        block_on(indicator.blink(300, 0));
        assert_eq!(indicator.pin.low_edges, 0);
    }
}

//! Ultrasonic Rangefinder
//!
//! Trigger side of an HC-SR04 style sensor. The echo side is timed by
//! [`EchoCapture`]; this driver pulses the trigger line and reads the
//! published sample.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::TRIGGER_PULSE_US;
use crate::game::ports::Rangefinder;
use crate::sensor::echo::EchoCapture;
use crate::types::DistanceSample;

/// Ultrasonic distance sensor
pub struct DistanceSensor<'a, P, D> {
    trigger: P,
    delay: D,
    capture: &'a EchoCapture,
}

impl<'a, P, D> DistanceSensor<'a, P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a sensor, driving the trigger line low
    pub fn new(mut trigger: P, delay: D, capture: &'a EchoCapture) -> Self {
        if trigger.set_low().is_err() {
            warn!("ranging: trigger pin init failed");
        }
        Self {
            trigger,
            delay,
            capture,
        }
    }

    /// Emit one trigger pulse, dropping any pending sample first
    ///
    /// # Errors
    ///
    /// Returns the pin error if the trigger line cannot be driven.
    pub fn pulse(&mut self) -> Result<(), P::Error> {
        self.capture.arm();
        self.trigger.set_high()?;
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low()
    }
}

impl<P, D> Rangefinder for DistanceSensor<'_, P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    fn trigger(&mut self) {
        if self.pulse().is_err() {
            warn!("ranging: trigger pulse failed");
        }
    }

    fn latest(&self) -> Option<DistanceSample> {
        self.capture.peek()
    }

    fn take(&mut self) -> Option<DistanceSample> {
        self.capture.take()
    }
}

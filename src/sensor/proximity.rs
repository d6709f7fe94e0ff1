//! IR Proximity Sensor
//!
//! Binary obstacle detector on a single digital input. Board revisions
//! wire the sensor differently, so the active level is a constructor
//! parameter.

use embedded_hal::digital::InputPin;

use crate::game::ports::PresenceSensor;
use crate::types::Polarity;

/// Digital IR proximity sensor
pub struct ProximitySensor<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> ProximitySensor<P> {
    /// Create a proximity sensor with the given active level
    #[must_use]
    pub const fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Get the configured polarity
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Check if an object is in front of the sensor
    ///
    /// Read faults count as "not triggered".
    pub fn is_triggered(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => self.polarity.is_active(high),
            Err(_) => {
                warn!("proximity: pin read failed");
                false
            }
        }
    }
}

impl<P: InputPin> PresenceSensor for ProximitySensor<P> {
    fn is_triggered(&mut self) -> bool {
        ProximitySensor::is_triggered(self)
    }
}

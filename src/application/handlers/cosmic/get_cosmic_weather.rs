//! GetCosmicWeatherHandler - Query handler for the current sky.

use std::sync::Arc;

use crate::domain::content::CosmicWeather;
use crate::domain::cosmic::CosmicError;
use crate::ports::Clock;

pub struct GetCosmicWeatherHandler {
    clock: Arc<dyn Clock>,
}

impl GetCosmicWeatherHandler {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub async fn handle(&self) -> Result<CosmicWeather, CosmicError> {
        CosmicWeather::at(self.clock.now())
    }
}

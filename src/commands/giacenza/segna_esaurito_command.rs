use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use super::archivia;
use crate::{commands::Command, errors::ServiceError, models::Magazzino};

/// Archives a stock item by hand, whatever sheets it still counts.
#[derive(Debug, Serialize, Deserialize)]
pub struct SegnaEsauritoCommand {
    pub id: Uuid,
}

impl Command for SegnaEsauritoCommand {
    type Result = ();

    #[instrument(skip(magazzino))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        let pos = magazzino.posizione_articolo(self.id)?;
        archivia(magazzino, pos, "segnato manualmente");

        info!("Articolo segnato come esaurito: {}", self.id);
        Ok(())
    }
}

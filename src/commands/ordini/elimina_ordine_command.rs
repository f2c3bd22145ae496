use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    errors::ServiceError,
    models::{Magazzino, OrdineAttesa, StoricoMovimento, TipoMovimento},
};

/// Removes a pending order and hands it back to the caller.
#[derive(Debug, Serialize, Deserialize)]
pub struct EliminaOrdineCommand {
    pub id: Uuid,
}

impl Command for EliminaOrdineCommand {
    type Result = OrdineAttesa;

    #[instrument(skip(magazzino))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        let pos = magazzino.posizione_ordine(self.id)?;
        let ordine = magazzino.ordini.remove(pos);

        magazzino.registra(
            StoricoMovimento::nuovo(
                TipoMovimento::OrdineEliminato,
                &ordine.codice,
                format!("Ordine {} eliminato", ordine.ordine),
            )
            .riferimento(self.id)
            .ordine(&ordine.ordine)
            .fogli(ordine.fogli),
        );

        info!("Ordine eliminato: {}", self.id);
        Ok(ordine)
    }
}

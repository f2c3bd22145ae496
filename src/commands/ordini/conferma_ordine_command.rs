use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    errors::ServiceError,
    models::{Magazzino, StatoOrdine, StoricoMovimento, TipoMovimento},
};

/// Marks a pending order as confirmed by the supplier.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfermaOrdineCommand {
    pub id: Uuid,
}

impl Command for ConfermaOrdineCommand {
    type Result = ();

    #[instrument(skip(magazzino))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        let pos = magazzino.posizione_ordine(self.id)?;
        let ordine = &mut magazzino.ordini[pos];
        if ordine.is_confermato() {
            return Err(ServiceError::InvalidOperation(format!(
                "Ordine {} già confermato",
                ordine.ordine
            )));
        }

        ordine.stato = StatoOrdine::Confermato;
        let movimento = StoricoMovimento::nuovo(
            TipoMovimento::OrdineConfermato,
            &ordine.codice,
            format!("Ordine {} confermato da {}", ordine.ordine, ordine.fornitore),
        )
        .riferimento(self.id)
        .ordine(&ordine.ordine);
        magazzino.registra(movimento);

        info!("Ordine confermato: {}", self.id);
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use super::archivia;
use crate::{
    commands::Command,
    errors::ServiceError,
    models::{Magazzino, StoricoMovimento, TipoMovimento},
};

/// Takes sheets out of a stock item. Returns the sheets left; an item that
/// reaches zero is archived as exhausted.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScaricaCommand {
    pub id: Uuid,
    pub fogli: u32,
}

impl Command for ScaricaCommand {
    type Result = u32;

    #[instrument(skip(magazzino))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        if self.fogli == 0 {
            return Err(ServiceError::InvalidInput(
                "Il numero di fogli da scaricare deve essere positivo".to_string(),
            ));
        }

        let pos = magazzino.posizione_articolo(self.id)?;
        let articolo = &mut magazzino.giacenza[pos];
        let rimanenti = articolo
            .fogli_disponibili
            .checked_sub(self.fogli)
            .ok_or_else(|| {
                ServiceError::InsufficientStock(format!(
                    "Richiesti {} fogli, disponibili {}",
                    self.fogli, articolo.fogli_disponibili
                ))
            })?;

        articolo.fogli_disponibili = rimanenti;
        let movimento = StoricoMovimento::nuovo(
            TipoMovimento::Scarico,
            articolo.codice(),
            format!(
                "Scarico di {} fogli dall'ordine {}, rimanenti {}",
                self.fogli, articolo.origine.ordine, rimanenti
            ),
        )
        .riferimento(self.id)
        .ordine(&articolo.origine.ordine)
        .fogli(self.fogli);
        magazzino.registra(movimento);

        if rimanenti == 0 {
            archivia(magazzino, pos, "fogli terminati");
        }

        info!("Scaricati {} fogli da {}, rimanenti {}", self.fogli, self.id, rimanenti);
        Ok(rimanenti)
    }
}

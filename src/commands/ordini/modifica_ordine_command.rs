use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use super::controlla_fornitore;
use crate::{
    commands::Command,
    errors::ServiceError,
    models::{Magazzino, ModificaOrdine, OrdineAttesa, StoricoMovimento, TipoMovimento},
};

/// Applies a partial update to a pending order. The updated record is
/// validated as a whole before it replaces the stored one.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModificaOrdineCommand {
    pub id: Uuid,
    pub modifica: ModificaOrdine,
    pub verifica_fornitore: bool,
}

impl Command for ModificaOrdineCommand {
    type Result = OrdineAttesa;

    #[instrument(skip(self, magazzino), fields(id = %self.id))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        if self.modifica.is_vuota() {
            return Err(ServiceError::InvalidInput(
                "Nessun campo da modificare".to_string(),
            ));
        }

        let pos = magazzino.posizione_ordine(self.id)?;
        let mut aggiornato = self.modifica.applica(&magazzino.ordini[pos]);
        aggiornato.codice = aggiornato.codice.trim().to_string();
        aggiornato.validate()?;
        if aggiornato.codice != magazzino.ordini[pos].codice {
            controlla_fornitore(magazzino, &aggiornato.codice, self.verifica_fornitore)?;
        }

        magazzino.registra(
            StoricoMovimento::nuovo(
                TipoMovimento::OrdineModificato,
                &aggiornato.codice,
                format!("Ordine {} modificato", aggiornato.ordine),
            )
            .riferimento(self.id)
            .ordine(&aggiornato.ordine)
            .fogli(aggiornato.fogli),
        );
        magazzino.ordini[pos] = aggiornato.clone();

        info!("Ordine modificato: {}", self.id);
        Ok(aggiornato)
    }
}

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    commands::Command,
    errors::ServiceError,
    models::{Fornitore, Magazzino, StoricoMovimento, TipoMovimento},
};

/// Removes a supplier nobody refers to any more.
#[derive(Debug, Serialize, Deserialize)]
pub struct EliminaFornitoreCommand {
    pub codice: String,
}

impl Command for EliminaFornitoreCommand {
    type Result = Fornitore;

    #[instrument(skip(magazzino))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        let pos = magazzino
            .fornitori
            .iter()
            .position(|f| f.codice == self.codice)
            .ok_or_else(|| ServiceError::fornitore_non_trovato(&self.codice))?;

        if magazzino.codice_in_uso(&self.codice) {
            return Err(ServiceError::Conflict(format!(
                "Il fornitore '{}' ha ancora ordini o articoli collegati",
                self.codice
            )));
        }

        let fornitore = magazzino.fornitori.remove(pos);
        magazzino.registra(StoricoMovimento::nuovo(
            TipoMovimento::FornitoreEliminato,
            &fornitore.codice,
            format!("Eliminato fornitore {}", fornitore.ragione_sociale),
        ));

        info!("Fornitore eliminato: {}", self.codice);
        Ok(fornitore)
    }
}

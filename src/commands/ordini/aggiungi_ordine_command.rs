use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use super::controlla_fornitore;
use crate::{
    commands::Command,
    errors::ServiceError,
    models::{Magazzino, OrdineAttesa, StatoOrdine, StoricoMovimento, TipoMovimento},
};

/// Registers a new pending order. Any id or state on the incoming record is
/// replaced: the host assigns a fresh id and the order starts `in_attesa`.
/// The supplier code is stored trimmed, as suppliers register it.
#[derive(Debug, Serialize, Deserialize)]
pub struct AggiungiOrdineCommand {
    pub ordine: OrdineAttesa,
    pub verifica_fornitore: bool,
}

impl Command for AggiungiOrdineCommand {
    type Result = Uuid;

    #[instrument(skip(self, magazzino), fields(codice = %self.ordine.codice, ordine = %self.ordine.ordine))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        let mut ordine = self.ordine.clone();
        ordine.codice = ordine.codice.trim().to_string();
        ordine.validate()?;
        controlla_fornitore(magazzino, &ordine.codice, self.verifica_fornitore)?;

        let id = magazzino.nuovo_id();
        ordine.id = Some(id);
        ordine.stato = StatoOrdine::InAttesa;

        magazzino.registra(
            StoricoMovimento::nuovo(
                TipoMovimento::OrdineAggiunto,
                &ordine.codice,
                format!("Ordine {} a {} ({})", ordine.ordine, ordine.fornitore, ordine.materiale()),
            )
            .riferimento(id)
            .ordine(&ordine.ordine)
            .fogli(ordine.fogli),
        );
        magazzino.ordini.push(ordine);

        info!("Ordine aggiunto: {}", id);
        Ok(id)
    }
}

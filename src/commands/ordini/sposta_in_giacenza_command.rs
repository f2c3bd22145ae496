use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    errors::ServiceError,
    models::{
        ArticoloEsaurito, ArticoloGiacenza, Magazzino, StoricoMovimento, TipoMovimento,
    },
};

/// Receives a pending order into stock. The stock item keeps the order id.
///
/// An order for zero sheets has nothing to put on the shelf and is archived
/// straight away, so the history shows both the receipt and the exhaustion.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpostaInGiacenzaCommand {
    pub id: Uuid,
}

impl Command for SpostaInGiacenzaCommand {
    type Result = Uuid;

    #[instrument(skip(magazzino))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        let pos = magazzino.posizione_ordine(self.id)?;
        let ordine = magazzino.ordini.remove(pos);
        let adesso = Utc::now();
        let articolo = ArticoloGiacenza::da_ordine(self.id, ordine, adesso);

        magazzino.registra(
            StoricoMovimento::nuovo(
                TipoMovimento::Carico,
                articolo.codice(),
                format!(
                    "Carico ordine {} ({})",
                    articolo.origine.ordine,
                    articolo.origine.materiale()
                ),
            )
            .riferimento(self.id)
            .ordine(&articolo.origine.ordine)
            .fogli(articolo.fogli_disponibili),
        );

        if articolo.is_esaurito() {
            magazzino.registra(
                StoricoMovimento::nuovo(
                    TipoMovimento::Esaurito,
                    articolo.codice(),
                    format!("Ordine {} caricato senza fogli", articolo.origine.ordine),
                )
                .riferimento(self.id)
                .ordine(&articolo.origine.ordine),
            );
            magazzino.esauriti.push(ArticoloEsaurito {
                articolo,
                data_esaurimento: adesso,
            });
            info!("Ordine caricato ed esaurito: {}", self.id);
        } else {
            magazzino.giacenza.push(articolo);
            info!("Ordine spostato in giacenza: {}", self.id);
        }

        Ok(self.id)
    }
}

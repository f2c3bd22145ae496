use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    commands::Command,
    errors::ServiceError,
    models::{Magazzino, StoricoMovimento, TipoMovimento},
};

/// Restores an exhausted item to active stock.
///
/// `fogli` sets the sheets counted back on the shelf (e.g. leftovers returned
/// from the press); `None` keeps the count the item had when archived. The
/// resulting count must be at least one and no more than the sheets ordered.
#[derive(Debug, Serialize, Deserialize)]
pub struct RiportaInGiacenzaCommand {
    pub id: Uuid,
    #[serde(default)]
    pub fogli: Option<u32>,
}

impl Command for RiportaInGiacenzaCommand {
    type Result = ();

    #[instrument(skip(magazzino))]
    fn execute(&self, magazzino: &mut Magazzino) -> Result<Self::Result, ServiceError> {
        let pos = magazzino.posizione_esaurito(self.id)?;
        let archiviato = &magazzino.esauriti[pos].articolo;
        let fogli = self.fogli.unwrap_or(archiviato.fogli_disponibili);
        if fogli == 0 {
            return Err(ServiceError::InvalidInput(format!(
                "Ordine {}: indicare i fogli da riportare in giacenza",
                archiviato.origine.ordine
            )));
        }
        if fogli > archiviato.origine.fogli {
            return Err(ServiceError::InvalidInput(format!(
                "Ordine {}: {} fogli superano i {} ordinati",
                archiviato.origine.ordine, fogli, archiviato.origine.fogli
            )));
        }

        let mut articolo = magazzino.esauriti.remove(pos).articolo;
        articolo.fogli_disponibili = fogli;

        magazzino.registra(
            StoricoMovimento::nuovo(
                TipoMovimento::Ripristino,
                articolo.codice(),
                format!(
                    "Ordine {} riportato in giacenza con {} fogli",
                    articolo.origine.ordine, articolo.fogli_disponibili
                ),
            )
            .riferimento(self.id)
            .ordine(&articolo.origine.ordine)
            .fogli(articolo.fogli_disponibili),
        );
        magazzino.giacenza.push(articolo);

        info!("Articolo riportato in giacenza: {}", self.id);
        Ok(())
    }
}

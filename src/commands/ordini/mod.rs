pub mod aggiungi_ordine_command;
pub mod conferma_ordine_command;
pub mod elimina_ordine_command;
pub mod modifica_ordine_command;
pub mod sposta_in_giacenza_command;

pub use aggiungi_ordine_command::AggiungiOrdineCommand;
pub use conferma_ordine_command::ConfermaOrdineCommand;
pub use elimina_ordine_command::EliminaOrdineCommand;
pub use modifica_ordine_command::ModificaOrdineCommand;
pub use sposta_in_giacenza_command::SpostaInGiacenzaCommand;

use crate::{errors::ServiceError, models::Magazzino};
use tracing::warn;

/// Supplier check shared by the commands that set an order's `codice`.
/// With `verifica` off an unknown code is only logged.
pub(crate) fn controlla_fornitore(
    magazzino: &Magazzino,
    codice: &str,
    verifica: bool,
) -> Result<(), ServiceError> {
    if magazzino.fornitore(codice).is_some() {
        return Ok(());
    }
    if verifica {
        return Err(ServiceError::fornitore_non_trovato(codice));
    }
    warn!(codice, "Ordine riferito a un fornitore non registrato");
    Ok(())
}

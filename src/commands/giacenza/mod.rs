pub mod riporta_in_giacenza_command;
pub mod scarica_command;
pub mod segna_esaurito_command;

pub use riporta_in_giacenza_command::RiportaInGiacenzaCommand;
pub use scarica_command::ScaricaCommand;
pub use segna_esaurito_command::SegnaEsauritoCommand;

use chrono::Utc;

use crate::models::{ArticoloEsaurito, Magazzino, StoricoMovimento, TipoMovimento};

/// Moves the stock item at `pos` to the exhausted archive.
pub(crate) fn archivia(magazzino: &mut Magazzino, pos: usize, motivo: &str) {
    let articolo = magazzino.giacenza.remove(pos);
    magazzino.registra(
        StoricoMovimento::nuovo(
            TipoMovimento::Esaurito,
            articolo.codice(),
            format!("Ordine {} esaurito: {}", articolo.origine.ordine, motivo),
        )
        .riferimento(articolo.id)
        .ordine(&articolo.origine.ordine)
        .fogli(articolo.fogli_disponibili),
    );
    magazzino.esauriti.push(ArticoloEsaurito {
        articolo,
        data_esaurimento: Utc::now(),
    });
}

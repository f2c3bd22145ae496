// Domain records
pub mod fornitore;
pub mod giacenza;
pub mod magazzino;
pub mod ordine_attesa;
pub mod storico_movimento;

pub mod validation;

pub use fornitore::{Fornitore, ModificaFornitore};
pub use giacenza::{ArticoloEsaurito, ArticoloGiacenza};
pub use magazzino::{Magazzino, RiferimentoOrfano};
pub use ordine_attesa::{ModificaOrdine, OrdineAttesa, StatoOrdine};
pub use storico_movimento::{FiltroStorico, StoricoMovimento, TipoMovimento};

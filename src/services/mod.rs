// Host application
pub mod azioni;
pub mod magazzino;

pub use azioni::{AzioniCarico, AzioniEsauriti, AzioniGiacenza, AzioniOrdini};
pub use magazzino::{magazzino_dimostrativo, MagazzinoService, Riepilogo};

//! Host operations the tabs can trigger.
//!
//! [`MagazzinoService`](super::MagazzinoService) implements every trait; the
//! view layer only sees them through the descriptors it renders.

use uuid::Uuid;

use crate::{
    errors::ServiceError,
    models::{ModificaOrdine, OrdineAttesa},
};

/// Operations on pending orders.
pub trait AzioniOrdini {
    /// Receives the order into stock; returns the id of the stock item.
    fn sposta_in_giacenza(&mut self, id: Uuid) -> Result<Uuid, ServiceError>;
    fn conferma_ordine(&mut self, id: Uuid) -> Result<(), ServiceError>;
    /// Removes the order from the pending set and returns it.
    fn elimina_ordine(&mut self, id: Uuid) -> Result<OrdineAttesa, ServiceError>;
    fn modifica_ordine(&mut self, id: Uuid, modifica: ModificaOrdine) -> Result<OrdineAttesa, ServiceError>;
}

/// Registration of new orders from the receiving form.
pub trait AzioniCarico {
    /// Stores a new pending order and returns its assigned id.
    fn aggiungi_ordine(&mut self, ordine: OrdineAttesa) -> Result<Uuid, ServiceError>;
}

/// Operations on stock on hand.
pub trait AzioniGiacenza {
    /// Consumes sheets; returns the sheets left.
    fn scarica(&mut self, id: Uuid, fogli: u32) -> Result<u32, ServiceError>;
    fn segna_esaurito(&mut self, id: Uuid) -> Result<(), ServiceError>;
}

/// Operations on exhausted stock.
pub trait AzioniEsauriti {
    /// Puts the item back on the shelf with `fogli` sheets, or with the count
    /// it had when archived. The resulting count must be between 1 and the
    /// sheets originally ordered.
    fn riporta_in_giacenza(&mut self, id: Uuid, fogli: Option<u32>) -> Result<(), ServiceError>;
}

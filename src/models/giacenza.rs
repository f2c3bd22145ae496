use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::OrdineAttesa;

/// A received batch on hand. Keeps the id of the order it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticoloGiacenza {
    pub id: Uuid,
    pub origine: OrdineAttesa,
    pub fogli_disponibili: u32,
    pub data_carico: DateTime<Utc>,
}

impl ArticoloGiacenza {
    pub fn da_ordine(id: Uuid, ordine: OrdineAttesa, data_carico: DateTime<Utc>) -> Self {
        Self {
            id,
            fogli_disponibili: ordine.fogli,
            origine: ordine,
            data_carico,
        }
    }

    pub fn codice(&self) -> &str {
        &self.origine.codice
    }

    pub fn is_esaurito(&self) -> bool {
        self.fogli_disponibili == 0
    }
}

/// An inventory item archived after its sheets ran out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticoloEsaurito {
    pub articolo: ArticoloGiacenza,
    pub data_esaurimento: DateTime<Utc>,
}

impl ArticoloEsaurito {
    pub fn id(&self) -> Uuid {
        self.articolo.id
    }
}

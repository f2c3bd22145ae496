use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;
use validator::Validate;

use super::validation::{non_negativo, non_vuoto};

/// Lifecycle of a pending order before it reaches the warehouse.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatoOrdine {
    #[default]
    InAttesa,
    Confermato,
}

/// One ordered batch of paper stock awaiting delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct OrdineAttesa {
    /// Assigned by the host when the order is added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Supplier code, see [`super::Fornitore::codice`]
    #[validate(custom = "non_vuoto")]
    pub codice: String,
    #[validate(custom = "non_vuoto")]
    pub fornitore: String,
    #[validate(custom = "non_vuoto")]
    pub ordine: String,
    #[validate(custom = "non_vuoto")]
    pub tipologia: String,
    #[validate(custom = "non_vuoto")]
    pub formato: String,
    #[validate(custom = "non_vuoto")]
    pub grammatura: String,
    pub fogli: u32,
    #[validate(custom = "non_vuoto")]
    pub cliente: String,
    #[validate(custom = "non_vuoto")]
    pub lavoro: String,
    #[validate(custom = "non_negativo")]
    pub prezzo: Decimal,
    #[serde(default)]
    pub data_consegna: Option<NaiveDate>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub stato: StatoOrdine,
}

impl OrdineAttesa {
    pub fn is_confermato(&self) -> bool {
        self.stato == StatoOrdine::Confermato
    }

    /// Short material label, e.g. `Patinata 70x100 150g`.
    pub fn materiale(&self) -> String {
        [&self.tipologia, &self.formato, &self.grammatura]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Partial update of a pending order; `None` leaves a field unchanged.
///
/// The optional fields take a nested option: `Some(None)` (JSON `null`)
/// clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModificaOrdine {
    pub codice: Option<String>,
    pub fornitore: Option<String>,
    pub ordine: Option<String>,
    pub tipologia: Option<String>,
    pub formato: Option<String>,
    pub grammatura: Option<String>,
    pub fogli: Option<u32>,
    pub cliente: Option<String>,
    pub lavoro: Option<String>,
    pub prezzo: Option<Decimal>,
    #[serde(deserialize_with = "azzerabile", skip_serializing_if = "Option::is_none")]
    pub data_consegna: Option<Option<NaiveDate>>,
    #[serde(deserialize_with = "azzerabile", skip_serializing_if = "Option::is_none")]
    pub note: Option<Option<String>>,
}

/// A present field, `null` included, is a change.
fn azzerabile<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl ModificaOrdine {
    pub fn is_vuota(&self) -> bool {
        *self == Self::default()
    }

    /// Returns a copy of `ordine` with the changes applied; identity and
    /// state are preserved.
    pub fn applica(&self, ordine: &OrdineAttesa) -> OrdineAttesa {
        let mut aggiornato = ordine.clone();
        let replace = |target: &mut String, value: &Option<String>| {
            if let Some(v) = value {
                *target = v.clone();
            }
        };

        replace(&mut aggiornato.codice, &self.codice);
        replace(&mut aggiornato.fornitore, &self.fornitore);
        replace(&mut aggiornato.ordine, &self.ordine);
        replace(&mut aggiornato.tipologia, &self.tipologia);
        replace(&mut aggiornato.formato, &self.formato);
        replace(&mut aggiornato.grammatura, &self.grammatura);
        replace(&mut aggiornato.cliente, &self.cliente);
        replace(&mut aggiornato.lavoro, &self.lavoro);
        if let Some(fogli) = self.fogli {
            aggiornato.fogli = fogli;
        }
        if let Some(prezzo) = self.prezzo {
            aggiornato.prezzo = prezzo;
        }
        if let Some(data_consegna) = self.data_consegna {
            aggiornato.data_consegna = data_consegna;
        }
        if let Some(note) = &self.note {
            aggiornato.note = note.clone();
        }
        aggiornato
    }
}

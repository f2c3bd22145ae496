use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};
use uuid::Uuid;

/// Kind of event recorded in the movement history.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TipoMovimento {
    OrdineAggiunto,
    OrdineModificato,
    OrdineConfermato,
    OrdineEliminato,
    Carico,
    Scarico,
    Esaurito,
    Ripristino,
    FornitoreRegistrato,
    FornitoreModificato,
    FornitoreEliminato,
}

/// One entry of the append-only movement history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoricoMovimento {
    pub id: Uuid,
    pub data: DateTime<Utc>,
    pub tipo: TipoMovimento,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riferimento: Option<Uuid>,
    pub codice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fogli: Option<u32>,
    pub descrizione: String,
}

impl StoricoMovimento {
    pub fn nuovo(tipo: TipoMovimento, codice: impl Into<String>, descrizione: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            data: Utc::now(),
            tipo,
            riferimento: None,
            codice: codice.into(),
            ordine: None,
            fogli: None,
            descrizione: descrizione.into(),
        }
    }

    pub fn riferimento(mut self, id: Uuid) -> Self {
        self.riferimento = Some(id);
        self
    }

    pub fn ordine(mut self, ordine: impl Into<String>) -> Self {
        self.ordine = Some(ordine.into());
        self
    }

    pub fn fogli(mut self, fogli: u32) -> Self {
        self.fogli = Some(fogli);
        self
    }
}

/// Criteria for narrowing the movement history. Empty matches everything.
/// `codice` matches exactly, like every other supplier-code lookup, after
/// trimming the filter value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltroStorico {
    pub tipo: Option<TipoMovimento>,
    pub codice: Option<String>,
    pub dal: Option<NaiveDate>,
    pub al: Option<NaiveDate>,
}

impl FiltroStorico {
    pub fn accetta(&self, movimento: &StoricoMovimento) -> bool {
        let giorno = movimento.data.date_naive();
        self.tipo.map_or(true, |t| t == movimento.tipo)
            && self
                .codice
                .as_deref()
                .map_or(true, |c| c.trim() == movimento.codice)
            && self.dal.map_or(true, |d| giorno >= d)
            && self.al.map_or(true, |d| giorno <= d)
    }
}

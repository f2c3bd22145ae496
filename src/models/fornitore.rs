use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{non_vuoto, validate_cap, validate_piva};

/// A registered paper/packaging supplier.
///
/// `codice` is the key pending orders and stock refer to; the host keeps it
/// unique and never lets it change once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Fornitore {
    /// Assigned on registration, absent for unsaved records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[validate(custom = "non_vuoto")]
    pub codice: String,
    #[validate(custom = "non_vuoto")]
    pub ragione_sociale: String,
    #[validate(custom = "non_vuoto")]
    pub indirizzo: String,
    #[validate(custom = "validate_cap")]
    pub cap: String,
    #[validate(custom = "non_vuoto")]
    pub citta: String,
    #[validate(custom = "non_vuoto")]
    pub provincia: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[validate(custom = "validate_piva")]
    pub piva: String,
    #[serde(default)]
    pub codice_fiscale: Option<String>,
    #[serde(default)]
    pub rea: Option<String>,
    #[serde(default)]
    pub banca_1: Option<String>,
    #[serde(default)]
    pub banca_2: Option<String>,
    #[serde(default)]
    pub condizioni_pagamento: Option<String>,
}

impl Fornitore {
    /// One-line postal address, e.g. `Via Roma 1, 20100 Milano (MI)`.
    pub fn indirizzo_completo(&self) -> String {
        format!(
            "{}, {} {} ({})",
            self.indirizzo, self.cap, self.citta, self.provincia
        )
    }
}

/// Partial update of a supplier. `codice` is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificaFornitore {
    pub ragione_sociale: Option<String>,
    pub indirizzo: Option<String>,
    pub cap: Option<String>,
    pub citta: Option<String>,
    pub provincia: Option<String>,
    pub telefono: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub piva: Option<String>,
    pub codice_fiscale: Option<String>,
    pub rea: Option<String>,
    pub banca_1: Option<String>,
    pub banca_2: Option<String>,
    pub condizioni_pagamento: Option<String>,
}

impl ModificaFornitore {
    /// Returns a copy of `fornitore` with the changes applied. The caller
    /// validates the result before storing it.
    pub fn applica(&self, fornitore: &Fornitore) -> Fornitore {
        let mut aggiornato = fornitore.clone();
        let replace = |target: &mut String, value: &Option<String>| {
            if let Some(v) = value {
                *target = v.clone();
            }
        };
        let set = |target: &mut Option<String>, value: &Option<String>| {
            if value.is_some() {
                *target = value.clone();
            }
        };

        replace(&mut aggiornato.ragione_sociale, &self.ragione_sociale);
        replace(&mut aggiornato.indirizzo, &self.indirizzo);
        replace(&mut aggiornato.cap, &self.cap);
        replace(&mut aggiornato.citta, &self.citta);
        replace(&mut aggiornato.provincia, &self.provincia);
        replace(&mut aggiornato.piva, &self.piva);
        set(&mut aggiornato.telefono, &self.telefono);
        set(&mut aggiornato.fax, &self.fax);
        set(&mut aggiornato.email, &self.email);
        set(&mut aggiornato.codice_fiscale, &self.codice_fiscale);
        set(&mut aggiornato.rea, &self.rea);
        set(&mut aggiornato.banca_1, &self.banca_1);
        set(&mut aggiornato.banca_2, &self.banca_2);
        set(&mut aggiornato.condizioni_pagamento, &self.condizioni_pagamento);
        aggiornato
    }
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;
use validator::Validate;

use super::{ArticoloEsaurito, ArticoloGiacenza, Fornitore, OrdineAttesa, StoricoMovimento};
use crate::errors::ServiceError;

/// Complete warehouse state owned by the host.
///
/// Fields are only reachable for writing through the commands in
/// [`crate::commands`]; readers get slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazzino {
    #[serde(default)]
    pub(crate) fornitori: Vec<Fornitore>,
    #[serde(default)]
    pub(crate) ordini: Vec<OrdineAttesa>,
    #[serde(default)]
    pub(crate) giacenza: Vec<ArticoloGiacenza>,
    #[serde(default)]
    pub(crate) esauriti: Vec<ArticoloEsaurito>,
    #[serde(default)]
    pub(crate) storico: Vec<StoricoMovimento>,
}

/// A record pointing at a supplier code nobody registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiferimentoOrfano {
    pub sezione: &'static str,
    pub id: Option<Uuid>,
    pub codice: String,
}

impl Magazzino {
    pub fn fornitori(&self) -> &[Fornitore] {
        &self.fornitori
    }

    pub fn ordini(&self) -> &[OrdineAttesa] {
        &self.ordini
    }

    pub fn giacenza(&self) -> &[ArticoloGiacenza] {
        &self.giacenza
    }

    pub fn esauriti(&self) -> &[ArticoloEsaurito] {
        &self.esauriti
    }

    pub fn storico(&self) -> &[StoricoMovimento] {
        &self.storico
    }

    pub fn fornitore(&self, codice: &str) -> Option<&Fornitore> {
        self.fornitori.iter().find(|f| f.codice == codice)
    }

    pub fn ordine(&self, id: Uuid) -> Option<&OrdineAttesa> {
        self.ordini.iter().find(|o| o.id == Some(id))
    }

    pub fn articolo(&self, id: Uuid) -> Option<&ArticoloGiacenza> {
        self.giacenza.iter().find(|a| a.id == id)
    }

    pub fn esaurito(&self, id: Uuid) -> Option<&ArticoloEsaurito> {
        self.esauriti.iter().find(|e| e.id() == id)
    }

    pub(crate) fn posizione_ordine(&self, id: Uuid) -> Result<usize, ServiceError> {
        self.ordini
            .iter()
            .position(|o| o.id == Some(id))
            .ok_or_else(|| ServiceError::ordine_non_trovato(id))
    }

    pub(crate) fn posizione_articolo(&self, id: Uuid) -> Result<usize, ServiceError> {
        self.giacenza
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| ServiceError::articolo_non_trovato(id))
    }

    pub(crate) fn posizione_esaurito(&self, id: Uuid) -> Result<usize, ServiceError> {
        self.esauriti
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| ServiceError::esaurito_non_trovato(id))
    }

    /// True when some pending order, stock item or archived item uses `codice`.
    pub fn codice_in_uso(&self, codice: &str) -> bool {
        self.ordini.iter().any(|o| o.codice == codice)
            || self.giacenza.iter().any(|a| a.codice() == codice)
            || self.esauriti.iter().any(|e| e.articolo.codice() == codice)
    }

    /// Ids already taken by an order, stock item or archived item. Every id
    /// lives in exactly one of the three collections.
    fn id_in_uso(&self, id: Uuid) -> bool {
        self.ordine(id).is_some() || self.articolo(id).is_some() || self.esaurito(id).is_some()
    }

    pub(crate) fn nuovo_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.id_in_uso(id) {
                return id;
            }
        }
    }

    pub(crate) fn registra(&mut self, movimento: StoricoMovimento) {
        self.storico.push(movimento);
    }

    /// Records (pending, on hand, archived) whose supplier code is not registered.
    pub fn verifica_integrita(&self) -> Vec<RiferimentoOrfano> {
        let noti: HashSet<&str> = self.fornitori.iter().map(|f| f.codice.as_str()).collect();

        let ordini = self
            .ordini
            .iter()
            .filter(|o| !noti.contains(o.codice.as_str()))
            .map(|o| RiferimentoOrfano {
                sezione: "ordini",
                id: o.id,
                codice: o.codice.clone(),
            });
        let giacenza = self
            .giacenza
            .iter()
            .filter(|a| !noti.contains(a.codice()))
            .map(|a| RiferimentoOrfano {
                sezione: "giacenza",
                id: Some(a.id),
                codice: a.codice().to_string(),
            });
        let esauriti = self
            .esauriti
            .iter()
            .filter(|e| !noti.contains(e.articolo.codice()))
            .map(|e| RiferimentoOrfano {
                sezione: "esauriti",
                id: Some(e.id()),
                codice: e.articolo.codice().to_string(),
            });

        ordini.chain(giacenza).chain(esauriti).collect()
    }

    /// Parses a JSON snapshot and checks it the same way the commands check
    /// their input: valid records, unique supplier codes, unique ids, sheet
    /// counts within the quantity ordered and no empty batch left on hand.
    pub fn from_json(json: &str) -> Result<Self, ServiceError> {
        let magazzino: Magazzino = serde_json::from_str(json)?;
        magazzino.verifica()?;
        Ok(magazzino)
    }

    pub fn to_json(&self) -> Result<String, ServiceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn verifica(&self) -> Result<(), ServiceError> {
        let mut codici = HashSet::new();
        for fornitore in &self.fornitori {
            fornitore.validate()?;
            if !codici.insert(fornitore.codice.as_str()) {
                return Err(ServiceError::Conflict(format!(
                    "Codice fornitore '{}' duplicato",
                    fornitore.codice
                )));
            }
        }

        let mut ids = HashSet::new();
        for ordine in &self.ordini {
            ordine.validate()?;
            let id = ordine.id.ok_or_else(|| {
                ServiceError::InvalidInput(format!("Ordine '{}' senza identificativo", ordine.ordine))
            })?;
            if !ids.insert(id) {
                return Err(ServiceError::Conflict(format!("Identificativo {} duplicato", id)));
            }
        }
        for articolo in &self.giacenza {
            articolo.origine.validate()?;
            if articolo.fogli_disponibili == 0 {
                return Err(ServiceError::InvalidInput(format!(
                    "Articolo {} in giacenza senza fogli",
                    articolo.id
                )));
            }
            controlla_fogli(articolo)?;
            if !ids.insert(articolo.id) {
                return Err(ServiceError::Conflict(format!(
                    "Identificativo {} duplicato",
                    articolo.id
                )));
            }
        }
        for esaurito in &self.esauriti {
            esaurito.articolo.origine.validate()?;
            controlla_fogli(&esaurito.articolo)?;
            if !ids.insert(esaurito.id()) {
                return Err(ServiceError::Conflict(format!(
                    "Identificativo {} duplicato",
                    esaurito.id()
                )));
            }
        }
        Ok(())
    }
}

fn controlla_fogli(articolo: &ArticoloGiacenza) -> Result<(), ServiceError> {
    if articolo.fogli_disponibili > articolo.origine.fogli {
        return Err(ServiceError::InvalidInput(format!(
            "Articolo {}: {} fogli disponibili su {} ordinati",
            articolo.id, articolo.fogli_disponibili, articolo.origine.fogli
        )));
    }
    Ok(())
}

use super::{formatta_istante, Riga, Vista};
use crate::models::StoricoMovimento;

/// Movement history table. Holds the slice it was given, unchanged.
#[derive(Debug, Clone, Copy)]
pub struct TabellaStorico<'a> {
    movimenti: &'a [StoricoMovimento],
}

impl<'a> TabellaStorico<'a> {
    pub fn new(movimenti: &'a [StoricoMovimento]) -> Self {
        Self { movimenti }
    }

    pub fn movimenti(&self) -> &'a [StoricoMovimento] {
        self.movimenti
    }

    pub fn render(&self, titolo: &str) -> Vista {
        let mut vista = Vista::new(titolo, self.movimenti.len());
        vista.intestazioni = vec!["data", "tipo", "codice", "ordine", "fogli", "descrizione"];
        vista.righe = self
            .movimenti
            .iter()
            .map(|m| Riga {
                celle: vec![
                    formatta_istante(m.data),
                    m.tipo.to_string(),
                    m.codice.clone(),
                    m.ordine.clone().unwrap_or_else(|| "-".to_string()),
                    m.fogli.map_or_else(|| "-".to_string(), |f| f.to_string()),
                    m.descrizione.clone(),
                ],
                azioni: Vec::new(),
            })
            .collect();
        vista
    }
}

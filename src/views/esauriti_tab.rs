use super::{formatta_istante, AzioneEsaurito, Riga, Vista};
use crate::models::ArticoloEsaurito;

/// Exhausted stock, each record restorable to inventory.
#[derive(Debug, Clone, Copy)]
pub struct EsauritiTab<'a> {
    esauriti: Option<&'a [ArticoloEsaurito]>,
}

impl<'a> EsauritiTab<'a> {
    pub const TITOLO: &'static str = "Esauriti";
    pub const NESSUNO: &'static str = "Nessun articolo esaurito";

    pub fn new(esauriti: Option<&'a [ArticoloEsaurito]>) -> Self {
        Self { esauriti }
    }

    pub fn conteggio(&self) -> usize {
        self.esauriti.map_or(0, <[_]>::len)
    }

    pub fn render(&self) -> Vista<AzioneEsaurito> {
        let esauriti = self.esauriti.unwrap_or_default();
        let mut vista = Vista::new(Self::TITOLO, esauriti.len());

        if esauriti.is_empty() {
            vista.messaggio = Some(Self::NESSUNO.to_string());
            return vista;
        }

        vista.intestazioni = vec![
            "codice",
            "fornitore",
            "ordine",
            "materiale",
            "residui",
            "lavoro",
            "esaurito il",
        ];
        vista.righe = esauriti
            .iter()
            .map(|e| {
                let origine = &e.articolo.origine;
                Riga {
                    celle: vec![
                        origine.codice.clone(),
                        origine.fornitore.clone(),
                        origine.ordine.clone(),
                        origine.materiale(),
                        e.articolo.fogli_disponibili.to_string(),
                        origine.lavoro.clone(),
                        formatta_istante(e.data_esaurimento),
                    ],
                    azioni: vec![AzioneEsaurito::RiportaInGiacenza(e.id())],
                }
            })
            .collect();
        vista
    }
}

use super::{
    formatta_istante, formatta_prezzo, AzioneGiacenza, Riga, Vista, VALUTA_PREDEFINITA,
};
use crate::models::ArticoloGiacenza;

/// Stock on hand with the sheets still available per batch.
#[derive(Debug, Clone, Copy)]
pub struct GiacenzaTab<'a> {
    giacenza: Option<&'a [ArticoloGiacenza]>,
    valuta: &'a str,
}

impl<'a> GiacenzaTab<'a> {
    pub const TITOLO: &'static str = "Giacenza";
    pub const VUOTA: &'static str = "Nessun articolo in giacenza";

    pub fn new(giacenza: Option<&'a [ArticoloGiacenza]>) -> Self {
        Self {
            giacenza,
            valuta: VALUTA_PREDEFINITA,
        }
    }

    pub fn con_valuta(mut self, valuta: &'a str) -> Self {
        self.valuta = valuta;
        self
    }

    pub fn conteggio(&self) -> usize {
        self.giacenza.map_or(0, <[_]>::len)
    }

    pub fn fogli_totali(&self) -> u64 {
        self.giacenza
            .unwrap_or_default()
            .iter()
            .map(|a| u64::from(a.fogli_disponibili))
            .sum()
    }

    pub fn render(&self) -> Vista<AzioneGiacenza> {
        let giacenza = self.giacenza.unwrap_or_default();
        let mut vista = Vista::new(Self::TITOLO, giacenza.len());

        if giacenza.is_empty() {
            vista.messaggio = Some(Self::VUOTA.to_string());
            return vista;
        }

        vista.intestazioni = vec![
            "codice",
            "fornitore",
            "ordine",
            "materiale",
            "disponibili",
            "ordinati",
            "cliente",
            "lavoro",
            "prezzo",
            "caricato il",
        ];
        vista.righe = giacenza
            .iter()
            .map(|a| Riga {
                celle: vec![
                    a.origine.codice.clone(),
                    a.origine.fornitore.clone(),
                    a.origine.ordine.clone(),
                    a.origine.materiale(),
                    a.fogli_disponibili.to_string(),
                    a.origine.fogli.to_string(),
                    a.origine.cliente.clone(),
                    a.origine.lavoro.clone(),
                    formatta_prezzo(a.origine.prezzo, self.valuta),
                    formatta_istante(a.data_carico),
                ],
                azioni: vec![AzioneGiacenza::Scarica(a.id), AzioneGiacenza::SegnaEsaurito(a.id)],
            })
            .collect();
        vista.messaggio = Some(format!("Totale fogli in giacenza: {}", self.fogli_totali()));
        vista
    }
}

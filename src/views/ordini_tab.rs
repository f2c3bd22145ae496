use super::{
    formatta_data, formatta_prezzo, AzioneOrdine, Riga, Vista, VALUTA_PREDEFINITA,
};
use crate::models::OrdineAttesa;

const INTESTAZIONI: [&str; 10] = [
    "codice",
    "fornitore",
    "ordine",
    "materiale",
    "fogli",
    "cliente",
    "lavoro",
    "prezzo",
    "consegna",
    "stato",
];

/// Pending orders, one row per order with its four actions.
#[derive(Debug, Clone, Copy)]
pub struct OrdiniTab<'a> {
    ordini: Option<&'a [OrdineAttesa]>,
    valuta: &'a str,
}

impl<'a> OrdiniTab<'a> {
    pub const TITOLO: &'static str = "Ordini in attesa";
    pub const NESSUN_ORDINE: &'static str = "Nessun ordine in attesa";

    pub fn new(ordini: Option<&'a [OrdineAttesa]>) -> Self {
        Self {
            ordini,
            valuta: VALUTA_PREDEFINITA,
        }
    }

    pub fn con_valuta(mut self, valuta: &'a str) -> Self {
        self.valuta = valuta;
        self
    }

    pub fn conteggio(&self) -> usize {
        self.ordini.map_or(0, <[_]>::len)
    }

    pub fn render(&self) -> Vista<AzioneOrdine> {
        let ordini = self.ordini.unwrap_or_default();
        let mut vista = Vista::new(Self::TITOLO, ordini.len());

        if ordini.is_empty() {
            vista.messaggio = Some(Self::NESSUN_ORDINE.to_string());
            return vista;
        }

        vista.intestazioni = INTESTAZIONI.to_vec();
        vista.righe = ordini.iter().map(|o| self.riga(o)).collect();
        vista
    }

    fn riga(&self, ordine: &OrdineAttesa) -> Riga<AzioneOrdine> {
        // Unsaved records have no identity to act on
        let azioni = match ordine.id {
            Some(id) => {
                let mut azioni = vec![AzioneOrdine::SpostaInGiacenza(id)];
                if !ordine.is_confermato() {
                    azioni.push(AzioneOrdine::ConfermaOrdine(id));
                }
                azioni.push(AzioneOrdine::ModificaOrdine(id));
                azioni.push(AzioneOrdine::EliminaOrdine(id));
                azioni
            }
            None => Vec::new(),
        };

        Riga {
            celle: vec![
                ordine.codice.clone(),
                ordine.fornitore.clone(),
                ordine.ordine.clone(),
                ordine.materiale(),
                ordine.fogli.to_string(),
                ordine.cliente.clone(),
                ordine.lavoro.clone(),
                formatta_prezzo(ordine.prezzo, self.valuta),
                formatta_data(ordine.data_consegna),
                ordine.stato.to_string(),
            ],
            azioni,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ordine_attesa::tests::ordine_valido, StatoOrdine};
    use crate::views::Azione;
    use uuid::Uuid;

    fn ordine_salvato(stato: StatoOrdine) -> OrdineAttesa {
        let mut ordine = ordine_valido();
        ordine.id = Some(Uuid::new_v4());
        ordine.stato = stato;
        ordine
    }

    #[test]
    fn missing_orders_render_as_zero() {
        let vista = OrdiniTab::new(None).render();
        assert_eq!(vista.conteggio, 0);
        assert!(vista.righe.is_empty());
        assert_eq!(vista.messaggio.as_deref(), Some(OrdiniTab::NESSUN_ORDINE));
        assert!(vista.to_string().starts_with("== Ordini in attesa (0) =="));
    }

    #[test]
    fn confirmed_orders_cannot_be_confirmed_again() {
        let ordini = vec![
            ordine_salvato(StatoOrdine::InAttesa),
            ordine_salvato(StatoOrdine::Confermato),
        ];
        let vista = OrdiniTab::new(Some(&ordini)).render();

        let nomi = |i: usize| -> Vec<&str> { vista.righe[i].azioni.iter().map(|a| a.nome()).collect() };
        assert_eq!(
            nomi(0),
            vec!["sposta_in_giacenza", "conferma_ordine", "modifica_ordine", "elimina_ordine"]
        );
        assert_eq!(nomi(1), vec!["sposta_in_giacenza", "modifica_ordine", "elimina_ordine"]);
        assert!(vista.righe[1].azioni.iter().all(|a| Some(a.id()) == ordini[1].id));
    }

    #[test]
    fn unsaved_orders_have_no_actions() {
        let ordini = vec![ordine_valido()];
        let vista = OrdiniTab::new(Some(&ordini)).con_valuta("CHF").render();
        assert!(vista.righe[0].azioni.is_empty());
        assert_eq!(vista.righe[0].celle[7], "412.50 CHF");
        assert_eq!(vista.righe[0].celle[9], "in_attesa");
    }
}

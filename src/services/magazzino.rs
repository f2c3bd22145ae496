use std::{fs, path::Path};

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    commands::{
        fornitori::{AggiornaFornitoreCommand, EliminaFornitoreCommand, RegistraFornitoreCommand},
        giacenza::{RiportaInGiacenzaCommand, ScaricaCommand, SegnaEsauritoCommand},
        ordini::{
            AggiungiOrdineCommand, ConfermaOrdineCommand, EliminaOrdineCommand,
            ModificaOrdineCommand, SpostaInGiacenzaCommand,
        },
        Command,
    },
    config::AppConfig,
    errors::ServiceError,
    models::{
        ArticoloEsaurito, ArticoloGiacenza, FiltroStorico, Fornitore, Magazzino,
        ModificaFornitore, ModificaOrdine, OrdineAttesa, RiferimentoOrfano, StoricoMovimento,
    },
};

use super::azioni::{AzioniCarico, AzioniEsauriti, AzioniGiacenza, AzioniOrdini};

/// Counts and totals across the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Riepilogo {
    pub fornitori: usize,
    pub ordini_in_attesa: usize,
    pub ordini_confermati: usize,
    /// Sum of the prices of pending orders, capped at [`Decimal::MAX`]
    pub valore_ordini: Decimal,
    pub articoli_in_giacenza: usize,
    pub fogli_in_giacenza: u64,
    pub articoli_esauriti: usize,
    pub movimenti: usize,
}

/// Host application: owns the warehouse state and runs every mutation
/// through a [`Command`].
#[derive(Debug, Clone, Default)]
pub struct MagazzinoService {
    magazzino: Magazzino,
    config: AppConfig,
}

impl MagazzinoService {
    /// Creates an empty warehouse
    pub fn new(config: AppConfig) -> Self {
        Self::con_magazzino(Magazzino::default(), config)
    }

    /// Wraps existing state, e.g. a loaded snapshot
    pub fn con_magazzino(magazzino: Magazzino, config: AppConfig) -> Self {
        if config.verifica_fornitori {
            let orfani = magazzino.verifica_integrita();
            if !orfani.is_empty() {
                warn!(
                    orfani = orfani.len(),
                    "Lo stato caricato contiene riferimenti a fornitori non registrati"
                );
            }
        }
        Self { magazzino, config }
    }

    /// Loads a JSON snapshot
    pub fn da_json(json: &str, config: AppConfig) -> Result<Self, ServiceError> {
        let magazzino = Magazzino::from_json(json)?;
        info!(
            fornitori = magazzino.fornitori().len(),
            ordini = magazzino.ordini().len(),
            giacenza = magazzino.giacenza().len(),
            esauriti = magazzino.esauriti().len(),
            "Snapshot caricato"
        );
        Ok(Self::con_magazzino(magazzino, config))
    }

    /// Loads a JSON snapshot from disk. Read failures surface as
    /// [`ServiceError::Other`]; a bad snapshot as for [`Self::da_json`].
    pub fn da_file(percorso: &Path, config: AppConfig) -> Result<Self, ServiceError> {
        let json = fs::read_to_string(percorso)
            .with_context(|| format!("failed to read snapshot {}", percorso.display()))?;
        Self::da_json(&json, config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn magazzino(&self) -> &Magazzino {
        &self.magazzino
    }

    fn esegui<C: Command>(&mut self, command: C) -> Result<C::Result, ServiceError> {
        command.execute(&mut self.magazzino)
    }

    // Suppliers

    #[instrument(skip(self, fornitore), fields(codice = %fornitore.codice))]
    pub fn registra_fornitore(&mut self, fornitore: Fornitore) -> Result<String, ServiceError> {
        self.esegui(RegistraFornitoreCommand { fornitore })
    }

    #[instrument(skip(self, modifica))]
    pub fn aggiorna_fornitore(
        &mut self,
        codice: &str,
        modifica: ModificaFornitore,
    ) -> Result<Fornitore, ServiceError> {
        self.esegui(AggiornaFornitoreCommand {
            codice: codice.to_string(),
            modifica,
        })
    }

    #[instrument(skip(self))]
    pub fn elimina_fornitore(&mut self, codice: &str) -> Result<Fornitore, ServiceError> {
        self.esegui(EliminaFornitoreCommand {
            codice: codice.to_string(),
        })
    }

    pub fn fornitore(&self, codice: &str) -> Option<&Fornitore> {
        self.magazzino.fornitore(codice)
    }

    pub fn fornitori(&self) -> &[Fornitore] {
        self.magazzino.fornitori()
    }

    // Read access

    pub fn ordini(&self) -> &[OrdineAttesa] {
        self.magazzino.ordini()
    }

    pub fn giacenza(&self) -> &[ArticoloGiacenza] {
        self.magazzino.giacenza()
    }

    pub fn esauriti(&self) -> &[ArticoloEsaurito] {
        self.magazzino.esauriti()
    }

    pub fn storico(&self) -> &[StoricoMovimento] {
        self.magazzino.storico()
    }

    /// Movements matching `filtro`, oldest first
    pub fn storico_filtrato(&self, filtro: &FiltroStorico) -> Vec<StoricoMovimento> {
        self.storico()
            .iter()
            .filter(|m| filtro.accetta(m))
            .cloned()
            .collect()
    }

    pub fn riepilogo(&self) -> Riepilogo {
        let ordini = self.ordini();
        let confermati = ordini.iter().filter(|o| o.is_confermato()).count();
        Riepilogo {
            fornitori: self.fornitori().len(),
            ordini_in_attesa: ordini.len() - confermati,
            ordini_confermati: confermati,
            valore_ordini: valore_totale(ordini),
            articoli_in_giacenza: self.giacenza().len(),
            fogli_in_giacenza: self
                .giacenza()
                .iter()
                .map(|a| u64::from(a.fogli_disponibili))
                .sum(),
            articoli_esauriti: self.esauriti().len(),
            movimenti: self.storico().len(),
        }
    }

    pub fn verifica_integrita(&self) -> Vec<RiferimentoOrfano> {
        self.magazzino.verifica_integrita()
    }

    pub fn to_json(&self) -> Result<String, ServiceError> {
        self.magazzino.to_json()
    }
}

impl AzioniOrdini for MagazzinoService {
    #[instrument(skip(self))]
    fn sposta_in_giacenza(&mut self, id: Uuid) -> Result<Uuid, ServiceError> {
        self.esegui(SpostaInGiacenzaCommand { id })
    }

    #[instrument(skip(self))]
    fn conferma_ordine(&mut self, id: Uuid) -> Result<(), ServiceError> {
        self.esegui(ConfermaOrdineCommand { id })
    }

    #[instrument(skip(self))]
    fn elimina_ordine(&mut self, id: Uuid) -> Result<OrdineAttesa, ServiceError> {
        self.esegui(EliminaOrdineCommand { id })
    }

    #[instrument(skip(self, modifica))]
    fn modifica_ordine(
        &mut self,
        id: Uuid,
        modifica: ModificaOrdine,
    ) -> Result<OrdineAttesa, ServiceError> {
        let verifica_fornitore = self.config.verifica_fornitori;
        self.esegui(ModificaOrdineCommand {
            id,
            modifica,
            verifica_fornitore,
        })
    }
}

impl AzioniCarico for MagazzinoService {
    #[instrument(skip(self, ordine), fields(ordine = %ordine.ordine))]
    fn aggiungi_ordine(&mut self, ordine: OrdineAttesa) -> Result<Uuid, ServiceError> {
        let verifica_fornitore = self.config.verifica_fornitori;
        self.esegui(AggiungiOrdineCommand {
            ordine,
            verifica_fornitore,
        })
    }
}

impl AzioniGiacenza for MagazzinoService {
    #[instrument(skip(self))]
    fn scarica(&mut self, id: Uuid, fogli: u32) -> Result<u32, ServiceError> {
        self.esegui(ScaricaCommand { id, fogli })
    }

    #[instrument(skip(self))]
    fn segna_esaurito(&mut self, id: Uuid) -> Result<(), ServiceError> {
        self.esegui(SegnaEsauritoCommand { id })
    }
}

impl AzioniEsauriti for MagazzinoService {
    #[instrument(skip(self))]
    fn riporta_in_giacenza(&mut self, id: Uuid, fogli: Option<u32>) -> Result<(), ServiceError> {
        self.esegui(RiportaInGiacenzaCommand { id, fogli })
    }
}

fn valore_totale(ordini: &[OrdineAttesa]) -> Decimal {
    ordini
        .iter()
        .try_fold(Decimal::ZERO, |totale, o| totale.checked_add(o.prezzo))
        .unwrap_or_else(|| {
            warn!(ordini = ordini.len(), "Valore degli ordini oltre il massimo rappresentabile");
            Decimal::MAX
        })
}

fn fornitore_demo(codice: &str, ragione_sociale: &str, citta: &str, piva: &str) -> Fornitore {
    Fornitore {
        id: None,
        codice: codice.to_string(),
        ragione_sociale: ragione_sociale.to_string(),
        indirizzo: "Via dell'Industria 12".to_string(),
        cap: "20100".to_string(),
        citta: citta.to_string(),
        provincia: "MI".to_string(),
        telefono: None,
        fax: None,
        email: None,
        piva: piva.to_string(),
        codice_fiscale: None,
        rea: None,
        banca_1: None,
        banca_2: None,
        condizioni_pagamento: Some("60 gg d.f.f.m.".to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn ordine_demo(
    codice: &str,
    fornitore: &str,
    ordine: &str,
    tipologia: &str,
    formato: &str,
    grammatura: &str,
    fogli: u32,
    lavoro: &str,
    prezzo: Decimal,
    data_consegna: Option<NaiveDate>,
) -> OrdineAttesa {
    OrdineAttesa {
        id: None,
        codice: codice.to_string(),
        fornitore: fornitore.to_string(),
        ordine: ordine.to_string(),
        tipologia: tipologia.to_string(),
        formato: formato.to_string(),
        grammatura: grammatura.to_string(),
        fogli,
        cliente: "Tipografia Rossi".to_string(),
        lavoro: lavoro.to_string(),
        prezzo,
        data_consegna,
        note: None,
        stato: Default::default(),
    }
}

/// Runs a short scripted scenario: two suppliers, four orders, one received
/// and partly consumed, one received and exhausted.
pub fn magazzino_dimostrativo(config: AppConfig) -> Result<MagazzinoService, ServiceError> {
    let mut service = MagazzinoService::new(config);

    service.registra_fornitore(fornitore_demo(
        "CART01",
        "Cartiera Lombarda S.p.A.",
        "Milano",
        "12345678903",
    ))?;
    service.registra_fornitore(fornitore_demo(
        "CART02",
        "Cartotecnica Brianza S.r.l.",
        "Monza",
        "01234567897",
    ))?;

    let consegna = NaiveDate::from_ymd_opt(2024, 3, 15);
    let patinata = service.aggiungi_ordine(ordine_demo(
        "CART01",
        "Cartiera Lombarda S.p.A.",
        "ORD-2024-118",
        "Patinata",
        "70x100",
        "150g",
        5000,
        "Catalogo primavera",
        Decimal::new(41250, 2),
        consegna,
    ))?;
    let uso_mano = service.aggiungi_ordine(ordine_demo(
        "CART01",
        "Cartiera Lombarda S.p.A.",
        "ORD-2024-119",
        "Uso mano",
        "64x88",
        "90g",
        2000,
        "Blocchi note",
        Decimal::new(138, 0),
        consegna,
    ))?;
    let cartoncino = service.aggiungi_ordine(ordine_demo(
        "CART02",
        "Cartotecnica Brianza S.r.l.",
        "CB-0457",
        "Cartoncino",
        "72x102",
        "300g",
        1200,
        "Astucci farmaceutici",
        Decimal::new(65520, 2),
        None,
    ))?;
    service.aggiungi_ordine(ordine_demo(
        "CART02",
        "Cartotecnica Brianza S.r.l.",
        "CB-0461",
        "Kraft",
        "100x140",
        "120g",
        800,
        "Shopper",
        Decimal::new(96, 0),
        None,
    ))?;

    service.conferma_ordine(cartoncino)?;
    let lotto = service.sposta_in_giacenza(patinata)?;
    service.scarica(lotto, 1500)?;
    let blocchi = service.sposta_in_giacenza(uso_mano)?;
    service.scarica(blocchi, 2000)?;

    Ok(service)
}

#![allow(dead_code)]

use cartoni::{
    config::AppConfig,
    models::{Fornitore, OrdineAttesa, StatoOrdine},
    services::AzioniCarico,
    MagazzinoService,
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Host backed by an in-memory warehouse with one registered supplier.
pub struct TestApp {
    pub service: MagazzinoService,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let mut service = MagazzinoService::new(config);
        service
            .registra_fornitore(fornitore("CART01"))
            .expect("register test supplier");
        Self { service }
    }

    /// Adds `n` pending orders and returns their ids in insertion order.
    pub fn seed_ordini(&mut self, n: usize) -> Vec<Uuid> {
        (0..n)
            .map(|i| {
                self.service
                    .aggiungi_ordine(ordine(&format!("ORD-{:03}", i + 1), 1000))
                    .expect("add test order")
            })
            .collect()
    }
}

pub fn fornitore(codice: &str) -> Fornitore {
    Fornitore {
        id: None,
        codice: codice.to_string(),
        ragione_sociale: "Cartiera Lombarda S.p.A.".to_string(),
        indirizzo: "Via dell'Industria 12".to_string(),
        cap: "20100".to_string(),
        citta: "Milano".to_string(),
        provincia: "MI".to_string(),
        telefono: None,
        fax: None,
        email: Some("ordini@cartieralombarda.it".to_string()),
        piva: "12345678903".to_string(),
        codice_fiscale: None,
        rea: None,
        banca_1: None,
        banca_2: None,
        condizioni_pagamento: None,
    }
}

pub fn ordine(numero: &str, fogli: u32) -> OrdineAttesa {
    OrdineAttesa {
        id: None,
        codice: "CART01".to_string(),
        fornitore: "Cartiera Lombarda S.p.A.".to_string(),
        ordine: numero.to_string(),
        tipologia: "Patinata".to_string(),
        formato: "70x100".to_string(),
        grammatura: "150g".to_string(),
        fogli,
        cliente: "Tipografia Rossi".to_string(),
        lavoro: "Catalogo".to_string(),
        prezzo: dec!(412.50),
        data_consegna: NaiveDate::from_ymd_opt(2024, 3, 15),
        note: None,
        stato: StatoOrdine::InAttesa,
    }
}

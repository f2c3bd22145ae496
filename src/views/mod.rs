//! Tab components.
//!
//! Every tab borrows a slice of host state (a missing slice renders as empty)
//! and returns an owned [`Vista`]. Rows carry action descriptors naming the
//! host operation and the record it applies to; the caller dispatches them
//! through the traits in [`crate::services::azioni`] once the borrow on the
//! state is released.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

pub mod azioni;
pub mod carico_tab;
pub mod esauriti_tab;
pub mod giacenza_tab;
pub mod ordini_tab;
pub mod storico_tab;
pub mod tabella_storico;

pub use azioni::{AzioneEsaurito, AzioneGiacenza, AzioneOrdine};
pub use carico_tab::{CaricoTab, ErroreCampo, ModuloCarico};
pub use esauriti_tab::EsauritiTab;
pub use giacenza_tab::GiacenzaTab;
pub use ordini_tab::OrdiniTab;
pub use storico_tab::{StoricoTab, VistaStorico, STORICO_VUOTO};
pub use tabella_storico::TabellaStorico;

pub(crate) const VALUTA_PREDEFINITA: &str = "EUR";

/// Something a row lets the user do.
pub trait Azione: Copy {
    /// snake_case name of the host operation
    fn nome(&self) -> &'static str;
    /// Record the action applies to
    fn id(&self) -> Uuid;
}

/// Action type of read-only tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NessunaAzione {}

impl Azione for NessunaAzione {
    fn nome(&self) -> &'static str {
        match *self {}
    }

    fn id(&self) -> Uuid {
        match *self {}
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Riga<A> {
    pub celle: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub azioni: Vec<A>,
}

/// Rendered output of a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vista<A = NessunaAzione> {
    pub titolo: String,
    pub conteggio: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub intestazioni: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub righe: Vec<Riga<A>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaggio: Option<String>,
}

impl<A> Vista<A> {
    pub(crate) fn new(titolo: &str, conteggio: usize) -> Self {
        Self {
            titolo: titolo.to_string(),
            conteggio,
            intestazioni: Vec::new(),
            righe: Vec::new(),
            messaggio: None,
        }
    }
}

impl<A: Azione> fmt::Display for Vista<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ({}) ==", self.titolo, self.conteggio)?;

        if !self.righe.is_empty() {
            let mut larghezze: Vec<usize> =
                self.intestazioni.iter().map(|h| h.chars().count()).collect();
            for riga in &self.righe {
                for (i, cella) in riga.celle.iter().enumerate() {
                    let w = cella.chars().count();
                    match larghezze.get_mut(i) {
                        Some(l) => *l = (*l).max(w),
                        None => larghezze.push(w),
                    }
                }
            }

            let intestazioni: Vec<String> =
                self.intestazioni.iter().map(|h| h.to_string()).collect();
            if !intestazioni.is_empty() {
                scrivi_riga(f, &intestazioni, &larghezze, "")?;
            }
            for riga in &self.righe {
                let extra = if riga.azioni.is_empty() {
                    String::new()
                } else {
                    let nomi: Vec<&str> = riga.azioni.iter().map(|a| a.nome()).collect();
                    format!("  [{}]", nomi.join(", "))
                };
                scrivi_riga(f, &riga.celle, &larghezze, &extra)?;
            }
        }

        if let Some(messaggio) = &self.messaggio {
            writeln!(f, "{}", messaggio)?;
        }
        Ok(())
    }
}

fn scrivi_riga(
    f: &mut fmt::Formatter<'_>,
    celle: &[String],
    larghezze: &[usize],
    extra: &str,
) -> fmt::Result {
    let testo: Vec<String> = celle
        .iter()
        .zip(larghezze)
        .map(|(c, &width)| format!("{:<width$}", c, width = width))
        .collect();
    writeln!(f, "{}{}", testo.join(" | ").trim_end(), extra)
}

pub(crate) fn formatta_prezzo(prezzo: Decimal, valuta: &str) -> String {
    format!("{:.2} {}", prezzo, valuta)
}

pub(crate) fn formatta_data(data: Option<NaiveDate>) -> String {
    data.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub(crate) fn formatta_istante(istante: DateTime<Utc>) -> String {
    istante.format("%d/%m/%Y %H:%M").to_string()
}

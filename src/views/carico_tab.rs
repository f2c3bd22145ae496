use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};
use uuid::Uuid;
use validator::Validate;

use super::{Riga, Vista};
use crate::{
    errors::ServiceError,
    models::{OrdineAttesa, StatoOrdine},
    services::AzioniCarico,
};

/// Raw contents of the receiving form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuloCarico {
    pub codice: String,
    pub fornitore: String,
    pub ordine: String,
    pub tipologia: String,
    pub formato: String,
    pub grammatura: String,
    pub fogli: String,
    pub cliente: String,
    pub lavoro: String,
    pub prezzo: String,
    pub data_consegna: String,
    pub note: String,
}

/// A form field that failed to parse or validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErroreCampo {
    pub campo: &'static str,
    pub messaggio: String,
}

impl ErroreCampo {
    fn new(campo: &'static str, messaggio: impl Into<String>) -> Self {
        Self {
            campo,
            messaggio: messaggio.into(),
        }
    }
}

const OBBLIGATORIO: &str = "campo obbligatorio";

fn obbligatorio(
    campo: &'static str,
    valore: &str,
    errori: &mut Vec<ErroreCampo>,
) -> String {
    let valore = valore.trim();
    if valore.is_empty() {
        errori.push(ErroreCampo::new(campo, OBBLIGATORIO));
    }
    valore.to_string()
}

fn facoltativo(valore: &str) -> Option<String> {
    let valore = valore.trim();
    (!valore.is_empty()).then(|| valore.to_string())
}

fn leggi_fogli(valore: &str) -> Result<u32, String> {
    let valore = valore.trim();
    if valore.is_empty() {
        return Err(OBBLIGATORIO.to_string());
    }
    let fogli: i64 = valore
        .parse()
        .map_err(|_| "deve essere un numero intero".to_string())?;
    if fogli < 0 {
        return Err("non può essere negativo".to_string());
    }
    u32::try_from(fogli).map_err(|_| "valore troppo grande".to_string())
}

fn leggi_prezzo(valore: &str) -> Result<Decimal, String> {
    let valore = valore.trim();
    if valore.is_empty() {
        return Err(OBBLIGATORIO.to_string());
    }
    let prezzo = Decimal::from_str(&valore.replace(',', "."))
        .map_err(|_| "deve essere un importo".to_string())?;
    if prezzo.is_sign_negative() && !prezzo.is_zero() {
        return Err("non può essere negativo".to_string());
    }
    Ok(prezzo)
}

fn leggi_data(valore: &str) -> Result<Option<NaiveDate>, String> {
    let valore = valore.trim();
    if valore.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(valore, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(valore, "%d/%m/%Y"))
        .map(Some)
        .map_err(|_| "data non valida (AAAA-MM-GG o GG/MM/AAAA)".to_string())
}

impl ModuloCarico {
    /// Form prefilled from an existing order, for editing.
    pub fn da_ordine(ordine: &OrdineAttesa) -> Self {
        Self {
            codice: ordine.codice.clone(),
            fornitore: ordine.fornitore.clone(),
            ordine: ordine.ordine.clone(),
            tipologia: ordine.tipologia.clone(),
            formato: ordine.formato.clone(),
            grammatura: ordine.grammatura.clone(),
            fogli: ordine.fogli.to_string(),
            cliente: ordine.cliente.clone(),
            lavoro: ordine.lavoro.clone(),
            prezzo: ordine.prezzo.to_string(),
            data_consegna: ordine
                .data_consegna
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            note: ordine.note.clone().unwrap_or_default(),
        }
    }

    /// Parses and validates the form. On success the order is ready for
    /// `aggiungi_ordine`: no id, state `in_attesa`.
    pub fn compila(&self) -> Result<OrdineAttesa, Vec<ErroreCampo>> {
        let mut errori = Vec::new();

        let codice = obbligatorio("codice", &self.codice, &mut errori);
        let fornitore = obbligatorio("fornitore", &self.fornitore, &mut errori);
        let ordine = obbligatorio("ordine", &self.ordine, &mut errori);
        let tipologia = obbligatorio("tipologia", &self.tipologia, &mut errori);
        let formato = obbligatorio("formato", &self.formato, &mut errori);
        let grammatura = obbligatorio("grammatura", &self.grammatura, &mut errori);
        let fogli = leggi_fogli(&self.fogli).unwrap_or_else(|e| {
            errori.push(ErroreCampo::new("fogli", e));
            0
        });
        let cliente = obbligatorio("cliente", &self.cliente, &mut errori);
        let lavoro = obbligatorio("lavoro", &self.lavoro, &mut errori);
        let prezzo = leggi_prezzo(&self.prezzo).unwrap_or_else(|e| {
            errori.push(ErroreCampo::new("prezzo", e));
            Decimal::ZERO
        });
        let data_consegna = leggi_data(&self.data_consegna).unwrap_or_else(|e| {
            errori.push(ErroreCampo::new("data_consegna", e));
            None
        });

        if !errori.is_empty() {
            return Err(errori);
        }

        let record = OrdineAttesa {
            id: None,
            codice,
            fornitore,
            ordine,
            tipologia,
            formato,
            grammatura,
            fogli,
            cliente,
            lavoro,
            prezzo,
            data_consegna,
            note: facoltativo(&self.note),
            stato: StatoOrdine::InAttesa,
        };

        record.validate().map_err(|errors| {
            errors
                .field_errors()
                .into_iter()
                .map(|(campo, _)| ErroreCampo::new(campo, "valore non valido"))
                .collect::<Vec<_>>()
        })?;
        Ok(record)
    }

    fn campi(&self) -> [(&'static str, &str); 12] {
        [
            ("codice", self.codice.as_str()),
            ("fornitore", self.fornitore.as_str()),
            ("ordine", self.ordine.as_str()),
            ("tipologia", self.tipologia.as_str()),
            ("formato", self.formato.as_str()),
            ("grammatura", self.grammatura.as_str()),
            ("fogli", self.fogli.as_str()),
            ("cliente", self.cliente.as_str()),
            ("lavoro", self.lavoro.as_str()),
            ("prezzo", self.prezzo.as_str()),
            ("data_consegna", self.data_consegna.as_str()),
            ("note", self.note.as_str()),
        ]
    }
}

/// Receiving form. Renders the fields with any errors from the last
/// submission and turns a valid form into a new pending order.
#[derive(Debug, Clone, Copy)]
pub struct CaricoTab<'a> {
    modulo: &'a ModuloCarico,
    errori: &'a [ErroreCampo],
}

impl<'a> CaricoTab<'a> {
    pub const TITOLO: &'static str = "Carico";
    pub const ISTRUZIONI: &'static str = "Compila il modulo e conferma per registrare l'ordine";

    pub fn new(modulo: &'a ModuloCarico) -> Self {
        Self {
            modulo,
            errori: &[],
        }
    }

    pub fn con_errori(mut self, errori: &'a [ErroreCampo]) -> Self {
        self.errori = errori;
        self
    }

    pub fn render(&self) -> Vista {
        let campi = self.modulo.campi();
        let mut vista = Vista::new(Self::TITOLO, campi.len());
        vista.intestazioni = vec!["campo", "valore", "errore"];
        vista.righe = campi
            .iter()
            .map(|(campo, valore)| {
                let errore = self
                    .errori
                    .iter()
                    .filter(|e| e.campo == *campo)
                    .map(|e| e.messaggio.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                Riga {
                    celle: vec![campo.to_string(), valore.to_string(), errore],
                    azioni: Vec::new(),
                }
            })
            .collect();
        vista.messaggio = Some(if self.errori.is_empty() {
            Self::ISTRUZIONI.to_string()
        } else {
            format!("{} campi da correggere", self.errori.len())
        });
        vista
    }

    /// Submits the form. Invalid forms never reach the host.
    #[instrument(skip(self, host))]
    pub fn invia<H: AzioniCarico + ?Sized>(&self, host: &mut H) -> Result<Uuid, ServiceError> {
        let ordine = self.modulo.compila().map_err(|errori| {
            debug!(errori = errori.len(), "Modulo di carico non valido");
            let dettaglio: Vec<String> = errori
                .iter()
                .map(|e| format!("{}: {}", e.campo, e.messaggio))
                .collect();
            ServiceError::ValidationError(dettaglio.join(", "))
        })?;
        host.aggiungi_ordine(ordine)
    }
}
